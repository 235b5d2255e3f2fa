//! Per-turn performance ratings
//!
//! One `Rating` is appended for every guess-feedback pair the solver records,
//! comparing what the optimal guess would have guaranteed against what the
//! played guess guaranteed and what the feedback actually delivered.

use crate::core::Code;

/// How well one completed guess performed
///
/// All percentages are removal percentages of the candidate set,
/// `100 * (1 - new / old)` truncated toward zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    /// Worst-case removal the optimal guess would have guaranteed
    pub best_worst_removed: u8,
    /// The guess achieving that guarantee
    pub best_code: Code,
    /// Worst-case removal the played guess guaranteed
    pub worst_removed: u8,
    /// Removal actually realized by the feedback received
    pub actual_removed: u8,
}

/// Removal percentage going from `old` to `new` candidates, truncated
pub(crate) fn removed_percentage(old: usize, new: usize) -> u8 {
    debug_assert!(new <= old && old > 0);
    ((100 * (old - new)) / old) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removed_percentage_truncates_toward_zero() {
        assert_eq!(removed_percentage(4, 2), 50);
        assert_eq!(removed_percentage(3, 1), 66);
        assert_eq!(removed_percentage(3, 2), 33);
        assert_eq!(removed_percentage(1296, 1), 99);
    }

    #[test]
    fn removed_percentage_extremes() {
        assert_eq!(removed_percentage(10, 10), 0);
        assert_eq!(removed_percentage(10, 0), 100);
        assert_eq!(removed_percentage(1, 1), 0);
    }
}
