//! Error types

use std::fmt;

/// Error returned when converting code points back into text
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TextError {
    /// The value is a surrogate or lies beyond U+10FFFF.
    InvalidCodePoint { code_point: u32, index: usize },
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextError::InvalidCodePoint { code_point, index } => write!(
                f,
                "invalid code point 0x{:X} at index {}",
                code_point, index
            ),
        }
    }
}

impl std::error::Error for TextError {}
