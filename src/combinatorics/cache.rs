//! Process-wide cache of per-shape tables
//!
//! Tables depend only on the shape, never on game history, so concurrent
//! sessions playing the same shape share one build. The discipline is
//! build-once-then-read-only: entries are inserted behind a write lock and
//! never mutated or evicted afterwards.

use super::ShapeTables;
use crate::core::Shape;
use rustc_hash::FxHashMap;
use std::sync::{Arc, OnceLock, RwLock};

static TABLES: OnceLock<RwLock<FxHashMap<Shape, Arc<ShapeTables>>>> = OnceLock::new();

/// Fetch the shared tables for a shape, building them on first use
///
/// The `O(U^2)` build runs outside the lock; if two sessions race on a cold
/// shape, one build wins and the other is dropped.
///
/// # Panics
/// Panics if the cache lock was poisoned by a panicking builder thread.
#[must_use]
pub fn tables(shape: Shape) -> Arc<ShapeTables> {
    let cache = TABLES.get_or_init(|| RwLock::new(FxHashMap::default()));

    if let Some(hit) = cache.read().expect("tables cache poisoned").get(&shape) {
        return Arc::clone(hit);
    }

    let built = Arc::new(ShapeTables::build(shape));
    let mut map = cache.write().expect("tables cache poisoned");
    Arc::clone(map.entry(shape).or_insert(built))
}
