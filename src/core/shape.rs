//! Game shape: symbol range and code length
//!
//! A `Shape` fixes the two parameters every other type depends on:
//! symbols run over `1..=max_value` and codes are `num_digits` long.

use std::fmt;

/// Largest universe (`max_value ^ num_digits`) the solver accepts.
///
/// The possibility index costs `O(U^2)` to build, so the solution space is
/// capped at 7^4 codes. Larger shapes are rejected at construction.
pub const MAX_UNIVERSE_SIZE: usize = 2401;

/// Symbol range and code length for one game configuration
///
/// Validated at construction: both parameters strictly positive and the
/// resulting universe within [`MAX_UNIVERSE_SIZE`]. Every `Shape` value in
/// circulation is therefore usable as-is, which is what lets the universe
/// and index caches key on it without re-checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    max_value: u16,
    num_digits: u16,
}

/// Error type for invalid game parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// `max_value` or `num_digits` is zero
    InvalidParameters { max_value: u16, num_digits: u16 },
    /// `max_value ^ num_digits` exceeds [`MAX_UNIVERSE_SIZE`]
    UniverseTooLarge { max_value: u16, num_digits: u16 },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameters {
                max_value,
                num_digits,
            } => write!(
                f,
                "max_value and num_digits must be positive, got {max_value} and {num_digits}"
            ),
            Self::UniverseTooLarge {
                max_value,
                num_digits,
            } => write!(
                f,
                "{max_value}^{num_digits} codes exceed the limit of {MAX_UNIVERSE_SIZE}"
            ),
        }
    }
}

impl std::error::Error for ShapeError {}

impl Shape {
    /// Create a validated shape
    ///
    /// # Errors
    /// Returns `ShapeError` if:
    /// - Either parameter is zero
    /// - The universe would exceed [`MAX_UNIVERSE_SIZE`] codes
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::Shape;
    ///
    /// let shape = Shape::new(6, 4).unwrap();
    /// assert_eq!(shape.universe_size(), 1296);
    ///
    /// assert!(Shape::new(0, 4).is_err());
    /// assert!(Shape::new(10, 4).is_err()); // 10000 codes, over budget
    /// ```
    pub fn new(max_value: u16, num_digits: u16) -> Result<Self, ShapeError> {
        if max_value == 0 || num_digits == 0 {
            return Err(ShapeError::InvalidParameters {
                max_value,
                num_digits,
            });
        }

        let size = usize::from(max_value).checked_pow(u32::from(num_digits));
        match size {
            Some(size) if size <= MAX_UNIVERSE_SIZE => Ok(Self {
                max_value,
                num_digits,
            }),
            _ => Err(ShapeError::UniverseTooLarge {
                max_value,
                num_digits,
            }),
        }
    }

    /// Largest symbol value (symbols run over `1..=max_value`)
    #[inline]
    #[must_use]
    pub const fn max_value(self) -> u16 {
        self.max_value
    }

    /// Number of symbols per code
    #[inline]
    #[must_use]
    pub const fn num_digits(self) -> u16 {
        self.num_digits
    }

    /// Total number of codes for this shape
    #[must_use]
    pub fn universe_size(self) -> usize {
        // Cannot overflow: validated against MAX_UNIVERSE_SIZE at construction
        usize::from(self.max_value).pow(u32::from(self.num_digits))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} digits over 1..={}",
            self.num_digits, self.max_value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_valid() {
        let shape = Shape::new(6, 4).unwrap();
        assert_eq!(shape.max_value(), 6);
        assert_eq!(shape.num_digits(), 4);
        assert_eq!(shape.universe_size(), 1296);
    }

    #[test]
    fn shape_at_the_limit() {
        // 7^4 = 2401 is exactly the budget
        let shape = Shape::new(7, 4).unwrap();
        assert_eq!(shape.universe_size(), MAX_UNIVERSE_SIZE);
    }

    #[test]
    fn shape_zero_parameters_rejected() {
        assert!(matches!(
            Shape::new(0, 4),
            Err(ShapeError::InvalidParameters { .. })
        ));
        assert!(matches!(
            Shape::new(6, 0),
            Err(ShapeError::InvalidParameters { .. })
        ));
        assert!(matches!(
            Shape::new(0, 0),
            Err(ShapeError::InvalidParameters { .. })
        ));
    }

    #[test]
    fn shape_over_budget_rejected() {
        // 7^5 = 16807
        assert!(matches!(
            Shape::new(7, 5),
            Err(ShapeError::UniverseTooLarge { .. })
        ));
        // 2^12 = 4096
        assert!(matches!(
            Shape::new(2, 12),
            Err(ShapeError::UniverseTooLarge { .. })
        ));
    }

    #[test]
    fn shape_overflow_rejected() {
        // Would overflow usize::pow without the checked variant
        assert!(matches!(
            Shape::new(u16::MAX, u16::MAX),
            Err(ShapeError::UniverseTooLarge { .. })
        ));
    }

    #[test]
    fn shape_degenerate_single_code() {
        let shape = Shape::new(1, 4).unwrap();
        assert_eq!(shape.universe_size(), 1);
    }

    #[test]
    fn shape_display() {
        let shape = Shape::new(7, 4).unwrap();
        assert_eq!(format!("{shape}"), "4 digits over 1..=7");
    }
}
