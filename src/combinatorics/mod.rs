//! Universe enumeration and the possibility index
//!
//! The expensive structures of the solver live here: the full code universe
//! for a shape and, for every code in it, the other codes grouped by the
//! proximity they would produce. Both are built once per shape and shared
//! process-wide through [`tables`].

mod cache;
mod tables;

pub use cache::tables;
pub use tables::ShapeTables;

use crate::core::{Code, Proximity, Shape};
use rustc_hash::FxHashMap;

/// Enumerate every code of a shape in lexicographic order
///
/// The result has exactly `shape.universe_size()` distinct codes. Backed by
/// the shared per-shape cache, so repeated calls do not re-enumerate.
#[must_use]
pub fn universe(shape: Shape) -> Vec<Code> {
    tables(shape).universe().to_vec()
}

/// Group the rest of the universe by proximity against one code
///
/// Returns, for the given code, every other code bucketed by the
/// `(black, white)` feedback it would yield. `None` when the code does not
/// belong to the shape's universe. Each bucket is in lexicographic order.
#[must_use]
pub fn possibilities_for(shape: Shape, code: &Code) -> Option<FxHashMap<Proximity, Vec<Code>>> {
    let tables = tables(shape);
    let id = tables.id_of(code)?;
    let grouped = tables
        .buckets_of(id)
        .iter()
        .map(|(&proximity, bucket)| {
            let codes = bucket.iter().map(|&b| tables.code(b).clone()).collect();
            (proximity, codes)
        })
        .collect();
    Some(grouped)
}
