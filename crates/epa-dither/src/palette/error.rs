//! Error types for palette operations

use std::fmt;

/// Error type for palette validation.
///
/// Returned when a palette cannot be used by the raw format: it must be
/// non-empty, free of duplicates, and small enough that every index fits in
/// a nibble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// No colors provided in palette
    EmptyPalette,
    /// More colors than a 4-bit index can address
    TooManyColors {
        /// Number of colors supplied
        count: usize,
        /// Maximum supported number of colors
        max: usize,
    },
    /// Duplicate color found at the specified index
    DuplicateColor {
        /// Index where the duplicate was found
        index: usize,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => {
                write!(f, "palette cannot be empty")
            }
            PaletteError::TooManyColors { count, max } => {
                write!(
                    f,
                    "palette has {} colors but a nibble index addresses at most {}",
                    count, max
                )
            }
            PaletteError::DuplicateColor { index } => {
                write!(f, "duplicate color found at index {}", index)
            }
        }
    }
}

impl std::error::Error for PaletteError {}
