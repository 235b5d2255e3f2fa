//! Mastermind code representation
//!
//! A `Code` is an ordered sequence of symbols validated against a [`Shape`]:
//! exactly `num_digits` symbols, each in `1..=max_value`. Codes order
//! lexicographically over their symbols, which is the deterministic order the
//! universe enumeration and all tie-breaking rely on.

use super::Shape;
use rustc_hash::FxHashMap;
use std::fmt;

/// A guess or secret: `num_digits` symbols in `1..=max_value`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code {
    symbols: Vec<u16>,
}

/// Error type for codes that do not fit a shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    WrongLength { expected: u16, actual: usize },
    SymbolOutOfRange { symbol: u16, max_value: u16 },
    UnparsableSymbol(String),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "Code must have exactly {expected} symbols, got {actual}")
            }
            Self::SymbolOutOfRange { symbol, max_value } => {
                write!(f, "Symbol {symbol} is outside 1..={max_value}")
            }
            Self::UnparsableSymbol(text) => write!(f, "Cannot read a symbol from {text:?}"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a code from raw symbols, validated against the shape
    ///
    /// # Errors
    /// Returns `CodeError` if the length differs from `shape.num_digits()` or
    /// any symbol falls outside `1..=shape.max_value()`.
    pub fn new(symbols: Vec<u16>, shape: Shape) -> Result<Self, CodeError> {
        let code = Self { symbols };
        code.check_shape(shape)?;
        Ok(code)
    }

    /// Check an existing code against a (possibly different) shape
    ///
    /// Codes carry no shape of their own, so anything that adjudicates or
    /// filters against a configured shape revalidates here first.
    ///
    /// # Errors
    /// Returns `CodeError` if the length differs from `shape.num_digits()` or
    /// any symbol falls outside `1..=shape.max_value()`.
    pub fn check_shape(&self, shape: Shape) -> Result<(), CodeError> {
        if self.symbols.len() != usize::from(shape.num_digits()) {
            return Err(CodeError::WrongLength {
                expected: shape.num_digits(),
                actual: self.symbols.len(),
            });
        }

        for &symbol in &self.symbols {
            if symbol == 0 || symbol > shape.max_value() {
                return Err(CodeError::SymbolOutOfRange {
                    symbol,
                    max_value: shape.max_value(),
                });
            }
        }

        Ok(())
    }

    /// Parse a code from text
    ///
    /// Accepts one digit per symbol ("1123"), or symbols separated by spaces,
    /// commas, or dashes ("11-2-3") which is required once `max_value` goes
    /// past 9.
    ///
    /// # Errors
    /// Returns `CodeError` on unreadable symbols or a shape mismatch.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::{Code, Shape};
    ///
    /// let shape = Shape::new(6, 4).unwrap();
    /// let code = Code::parse("1123", shape).unwrap();
    /// assert_eq!(code.symbols(), &[1, 1, 2, 3]);
    /// assert_eq!(code, Code::parse("1-1-2-3", shape).unwrap());
    ///
    /// assert!(Code::parse("118", shape).is_err()); // wrong length
    /// assert!(Code::parse("1187", shape).is_err()); // 8 > max_value
    /// ```
    pub fn parse(text: &str, shape: Shape) -> Result<Self, CodeError> {
        let text = text.trim();
        let symbols: Vec<u16> = if text.contains([' ', ',', '-']) {
            text.split([' ', ',', '-'])
                .filter(|part| !part.is_empty())
                .map(|part| {
                    part.parse::<u16>()
                        .map_err(|_| CodeError::UnparsableSymbol(part.to_string()))
                })
                .collect::<Result<_, _>>()?
        } else {
            text.chars()
                .map(|ch| {
                    ch.to_digit(10)
                        .map(|d| d as u16)
                        .ok_or_else(|| CodeError::UnparsableSymbol(ch.to_string()))
                })
                .collect::<Result<_, _>>()?
        };

        Self::new(symbols, shape)
    }

    /// Get the symbols of the code
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[u16] {
        &self.symbols
    }

    /// Number of symbols
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True for the zero-length code (cannot be built from a valid shape)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Get the multiplicity of each symbol in the code
    ///
    /// Used by the proximity computation to bound white pegs.
    #[inline]
    pub(crate) fn symbol_counts(&self) -> FxHashMap<u16, u16> {
        let mut counts = FxHashMap::default();
        for &symbol in &self.symbols {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.symbols.iter().all(|&s| s <= 9) {
            for symbol in &self.symbols {
                write!(f, "{symbol}")?;
            }
            Ok(())
        } else {
            let parts: Vec<String> = self.symbols.iter().map(ToString::to_string).collect();
            write!(f, "{}", parts.join("-"))
        }
    }
}
