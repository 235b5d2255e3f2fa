//! Black/white peg computation between two codes
//!
//! `black` counts positions where the codes agree. `white` counts the extra
//! symbol matches ignoring position: the per-symbol minimum multiplicity
//! summed over all symbols, minus the black matches. The classic example at
//! shape (6, 4): `between("1123", "1233") == (2, 1)` — positions 1 and 4
//! agree, and the '2' matches out of place. The second '3' of "1233" earns
//! nothing because the only '3' of "1123" is already spent.

use super::Code;

/// Peg feedback for a guess against a secret
///
/// Invariants for codes of length `n`: `black <= n` and `black + white <= n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Proximity {
    black: u16,
    white: u16,
}

impl Proximity {
    /// Create a proximity from raw peg counts
    #[inline]
    #[must_use]
    pub const fn new(black: u16, white: u16) -> Self {
        Self { black, white }
    }

    /// Symbols correct in both value and position
    #[inline]
    #[must_use]
    pub const fn black(self) -> u16 {
        self.black
    }

    /// Symbols correct in value but not position
    #[inline]
    #[must_use]
    pub const fn white(self) -> u16 {
        self.white
    }

    /// True when every position matches for codes of the given length
    #[inline]
    #[must_use]
    pub fn is_win(self, num_digits: u16) -> bool {
        self.black == num_digits
    }

    /// Compute the pegs between two codes of the same shape
    ///
    /// Symmetric in its arguments. Only defined for codes of equal length;
    /// the `Code` constructor ties every code to a shape, so mixed-shape
    /// calls indicate a caller bug.
    ///
    /// # Panics
    /// Panics in debug mode if the codes have different lengths.
    #[must_use]
    pub fn between(a: &Code, b: &Code) -> Self {
        debug_assert_eq!(a.len(), b.len(), "codes must share a shape");

        let black = a
            .symbols()
            .iter()
            .zip(b.symbols())
            .filter(|(x, y)| x == y)
            .count() as u16;

        // Matches ignoring position, bounded by per-symbol multiplicity
        let counts_b = b.symbol_counts();
        let black_and_white: u16 = a
            .symbol_counts()
            .iter()
            .map(|(symbol, &count_a)| count_a.min(counts_b.get(symbol).copied().unwrap_or(0)))
            .sum();

        Self {
            black,
            white: black_and_white - black,
        }
    }
}

impl std::fmt::Display for Proximity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} black, {} white", self.black, self.white)
    }
}
