//! Formatting utilities for terminal output

use crate::core::Code;

/// Render a list of codes on one line, space-separated
#[must_use]
pub fn format_codes(codes: &[Code]) -> String {
    codes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a removal percentage as a fixed-width bar
#[must_use]
pub fn removal_bar(percentage: u8, width: usize) -> String {
    let filled = (usize::from(percentage.min(100)) * width) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Shape;

    #[test]
    fn format_codes_joins_with_spaces() {
        let shape = Shape::new(2, 2).unwrap();
        let codes = crate::combinatorics::universe(shape);
        assert_eq!(format_codes(&codes), "11 12 21 22");
        assert_eq!(format_codes(&[]), "");
    }

    #[test]
    fn removal_bar_empty() {
        assert_eq!(removal_bar(0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn removal_bar_full() {
        assert_eq!(removal_bar(100, 10), "██████████");
    }

    #[test]
    fn removal_bar_half() {
        assert_eq!(removal_bar(50, 10), "█████░░░░░");
    }

    #[test]
    fn removal_bar_clamps_over_100() {
        assert_eq!(removal_bar(250, 4), "████");
    }
}
