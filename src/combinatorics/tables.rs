//! Per-shape universe and possibility index
//!
//! `ShapeTables` owns everything the solver needs for one shape: the
//! lexicographic universe, a code-to-id lookup, and for each code the ids of
//! every other code bucketed by proximity. Codes are referred to by their
//! `u16` position in the universe everywhere past this point; the universe is
//! capped at 2401 entries so the index type never overflows.

use crate::core::{Code, Proximity, Shape};
use rustc_hash::FxHashMap;

/// Immutable universe and possibility index for one shape
///
/// Built once, then read-only. The construction cost is `O(U^2)` proximity
/// computations over `U = max_value ^ num_digits` codes, which is why
/// instances are shared through the module cache rather than rebuilt.
#[derive(Debug)]
pub struct ShapeTables {
    shape: Shape,
    universe: Vec<Code>,
    ids: FxHashMap<Code, u16>,
    buckets: Vec<FxHashMap<Proximity, Vec<u16>>>,
}

impl ShapeTables {
    /// Build the universe and the all-pairs possibility index
    pub(crate) fn build(shape: Shape) -> Self {
        let universe = enumerate(shape);
        let ids = universe
            .iter()
            .enumerate()
            .map(|(id, code)| (code.clone(), id as u16))
            .collect();

        // Proximity is symmetric, so each unordered pair is computed once
        // and recorded on both sides.
        let mut buckets: Vec<FxHashMap<Proximity, Vec<u16>>> =
            vec![FxHashMap::default(); universe.len()];
        for a in 0..universe.len() {
            for b in (a + 1)..universe.len() {
                let proximity = Proximity::between(&universe[a], &universe[b]);
                buckets[a].entry(proximity).or_default().push(b as u16);
                buckets[b].entry(proximity).or_default().push(a as u16);
            }
        }

        Self {
            shape,
            universe,
            ids,
            buckets,
        }
    }

    /// The shape these tables were built for
    #[inline]
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    /// Every code of the shape, in lexicographic order
    #[inline]
    #[must_use]
    pub fn universe(&self) -> &[Code] {
        &self.universe
    }

    /// Number of codes in the universe
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.universe.len()
    }

    /// True only for a degenerate build; a valid shape has at least one code
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.universe.is_empty()
    }

    /// The code at a universe position
    ///
    /// # Panics
    /// Panics if `id` is out of range; ids come from this table.
    #[inline]
    #[must_use]
    pub fn code(&self, id: u16) -> &Code {
        &self.universe[usize::from(id)]
    }

    /// The universe position of a code, if it belongs to this shape
    #[inline]
    #[must_use]
    pub fn id_of(&self, code: &Code) -> Option<u16> {
        self.ids.get(code).copied()
    }

    /// All other codes bucketed by their proximity to the code at `id`
    ///
    /// Bucket vectors are sorted ascending by id.
    #[inline]
    #[must_use]
    pub fn buckets_of(&self, id: u16) -> &FxHashMap<Proximity, Vec<u16>> {
        &self.buckets[usize::from(id)]
    }
}

/// Enumerate all codes lexicographically: leftmost symbol most significant
fn enumerate(shape: Shape) -> Vec<Code> {
    let base = usize::from(shape.max_value());
    let num_digits = usize::from(shape.num_digits());

    (0..shape.universe_size())
        .map(|index| {
            let mut symbols = vec![0u16; num_digits];
            let mut rest = index;
            for slot in symbols.iter_mut().rev() {
                *slot = (rest % base) as u16 + 1;
                rest /= base;
            }
            // Enumerated symbols are within 1..=max_value by construction
            Code::new(symbols, shape).expect("enumerated code fits its shape")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerate_is_sorted_and_distinct() {
        let shape = Shape::new(3, 3).unwrap();
        let codes = enumerate(shape);

        assert_eq!(codes.len(), 27);
        for window in codes.windows(2) {
            assert!(window[0] < window[1]);
        }
        for code in &codes {
            assert!(code.symbols().iter().all(|&s| (1..=3).contains(&s)));
        }
    }

    #[test]
    fn enumerate_order_matches_counting() {
        let shape = Shape::new(2, 3).unwrap();
        let rendered: Vec<String> = enumerate(shape).iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            ["111", "112", "121", "122", "211", "212", "221", "222"]
        );
    }

    #[test]
    fn tables_id_lookup_roundtrips() {
        let shape = Shape::new(3, 2).unwrap();
        let tables = ShapeTables::build(shape);

        for (index, code) in tables.universe().iter().enumerate() {
            let id = tables.id_of(code).unwrap();
            assert_eq!(usize::from(id), index);
            assert_eq!(tables.code(id), code);
        }
        assert_eq!(tables.len(), 9);
        assert!(!tables.is_empty());
    }

    #[test]
    fn index_is_symmetric() {
        let shape = Shape::new(3, 2).unwrap();
        let tables = ShapeTables::build(shape);

        for a in 0..tables.len() as u16 {
            for b in 0..tables.len() as u16 {
                if a == b {
                    continue;
                }
                let proximity = Proximity::between(tables.code(a), tables.code(b));
                assert!(tables.buckets_of(a)[&proximity].contains(&b));
                assert!(tables.buckets_of(b)[&proximity].contains(&a));
            }
        }
    }

    #[test]
    fn index_excludes_the_code_itself() {
        let shape = Shape::new(2, 3).unwrap();
        let tables = ShapeTables::build(shape);

        for id in 0..tables.len() as u16 {
            let total: usize = tables.buckets_of(id).values().map(Vec::len).sum();
            assert_eq!(total, tables.len() - 1);
            for bucket in tables.buckets_of(id).values() {
                assert!(!bucket.contains(&id));
            }
        }
    }

    #[test]
    fn index_buckets_are_sorted() {
        let shape = Shape::new(3, 2).unwrap();
        let tables = ShapeTables::build(shape);

        for id in 0..tables.len() as u16 {
            for bucket in tables.buckets_of(id).values() {
                for window in bucket.windows(2) {
                    assert!(window[0] < window[1]);
                }
            }
        }
    }

    #[test]
    fn single_code_universe_has_empty_index() {
        let shape = Shape::new(1, 3).unwrap();
        let tables = ShapeTables::build(shape);
        assert_eq!(tables.len(), 1);
        assert!(tables.buckets_of(0).is_empty());
    }
}
