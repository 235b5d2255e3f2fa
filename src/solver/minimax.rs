//! Knuth minimax evaluation over the code universe
//!
//! For a candidate guess, the worst case is the largest number of remaining
//! candidates any single feedback could leave behind. The best guess
//! minimizes that worst case over the *full* universe: a code already ruled
//! out as the secret can still be the most informative thing to play.

use crate::combinatorics::ShapeTables;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Largest candidate count any feedback on `guess` could leave standing
///
/// A guess whose every bucket misses the remaining set scores 0; that only
/// happens when the remaining set is (or is about to be) the guess itself.
pub(crate) fn worst_case(tables: &ShapeTables, remaining: &FxHashSet<u16>, guess: u16) -> usize {
    tables
        .buckets_of(guess)
        .values()
        .map(|bucket| bucket.iter().filter(|&id| remaining.contains(id)).count())
        .max()
        .unwrap_or(0)
}

/// Pick the minimax guess, with the exact tie-break order
///
/// Ties on the minimal worst case are broken by preferring the smallest code
/// (universe order) that is still a remaining candidate; if no minimizer
/// remains possible, the smallest minimizer overall wins. The scan is
/// parallel but the tie-break walks the ordered universe, so the result is
/// deterministic.
pub(crate) fn best_guess(tables: &ShapeTables, remaining: &FxHashSet<u16>) -> u16 {
    let worst: Vec<usize> = (0..tables.len() as u16)
        .into_par_iter()
        .map(|guess| worst_case(tables, remaining, guess))
        .collect();

    // A valid shape always has at least one code
    let best = worst.iter().copied().min().expect("non-empty universe");

    let minimizers = || {
        worst
            .iter()
            .enumerate()
            .filter(move |&(_, &w)| w == best)
            .map(|(id, _)| id as u16)
    };

    minimizers()
        .find(|id| remaining.contains(id))
        .unwrap_or_else(|| minimizers().next().expect("at least one minimizer"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinatorics;
    use crate::core::Shape;

    fn setup(max_value: u16, num_digits: u16) -> std::sync::Arc<ShapeTables> {
        combinatorics::tables(Shape::new(max_value, num_digits).unwrap())
    }

    fn all_ids(tables: &ShapeTables) -> FxHashSet<u16> {
        (0..tables.len() as u16).collect()
    }

    #[test]
    fn worst_case_full_two_by_two() {
        let tables = setup(2, 2);
        let remaining = all_ids(&tables);

        // Every guess splits {11,12,21,22} into a 2-bucket and a 1-bucket
        for guess in 0..4 {
            assert_eq!(worst_case(&tables, &remaining, guess), 2);
        }
    }

    #[test]
    fn worst_case_shrinks_with_remaining() {
        let tables = setup(2, 2);
        // Remaining = {12, 21}
        let remaining: FxHashSet<u16> = [1, 2].into_iter().collect();

        // 11 cannot separate them, 12 can
        assert_eq!(worst_case(&tables, &remaining, 0), 2);
        assert_eq!(worst_case(&tables, &remaining, 1), 1);
        assert_eq!(worst_case(&tables, &remaining, 2), 1);
        assert_eq!(worst_case(&tables, &remaining, 3), 2);
    }

    #[test]
    fn worst_case_of_sole_candidate_is_zero() {
        let tables = setup(2, 2);
        let remaining: FxHashSet<u16> = [3].into_iter().collect();
        // 22's own buckets never contain 22
        assert_eq!(worst_case(&tables, &remaining, 3), 0);
        assert_eq!(worst_case(&tables, &remaining, 0), 1);
    }

    #[test]
    fn best_guess_prefers_separating_code() {
        let tables = setup(2, 2);
        let remaining: FxHashSet<u16> = [1, 2].into_iter().collect();

        // 12 and 21 tie at worst case 1; 12 is the smaller code
        assert_eq!(best_guess(&tables, &remaining), 1);
    }

    #[test]
    fn best_guess_tie_prefers_remaining_candidate() {
        let tables = setup(2, 2);
        // Remaining = {21, 22}: every guess has worst case 1, so the
        // tie-break must land on the smallest remaining code, not 11
        let remaining: FxHashSet<u16> = [2, 3].into_iter().collect();
        assert_eq!(best_guess(&tables, &remaining), 2);
    }

    #[test]
    fn best_guess_without_remaining_minimizer_takes_smallest() {
        let tables = setup(2, 2);
        // Degenerate input: nothing remains, every worst case is 0
        let remaining = FxHashSet::default();
        assert_eq!(best_guess(&tables, &remaining), 0);
    }

    #[test]
    fn best_guess_deterministic() {
        let tables = setup(3, 2);
        let remaining = all_ids(&tables);
        let first = best_guess(&tables, &remaining);
        for _ in 0..5 {
            assert_eq!(best_guess(&tables, &remaining), first);
        }
    }

    #[test]
    fn best_guess_classic_knuth_opening() {
        // Knuth's published opening for 6 colors, 4 positions is 1122
        let tables = setup(6, 4);
        let remaining = all_ids(&tables);
        let id = best_guess(&tables, &remaining);
        assert_eq!(tables.code(id).to_string(), "1122");
        assert_eq!(worst_case(&tables, &remaining, id), 256);
    }
}
