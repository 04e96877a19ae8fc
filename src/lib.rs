#![warn(rust_2018_idioms)]

//! Syllable reordering and glyph variant correction for Zawgyi encoded
//! Myanmar text, as applied by an input method when a word is committed.

/// Corrections applied when a word is committed.
pub mod correction;
pub mod error;
/// Display passes for reordered text.
pub mod render;
pub mod text;
pub mod unicode;
pub mod zawgyi;

pub use tinyvec;

pub use crate::correction::{correct, correct_str, Corrections};
pub use crate::zawgyi::reorder;
