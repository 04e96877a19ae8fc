//! String adapters for the code point passes.

use log::warn;

use crate::error::TextError;
use crate::render::{font_draw_shift, insert_render_fix_marker};
use crate::unicode::codepoint::is_script_char;
use crate::zawgyi::reorder;

pub fn to_code_points(text: &str) -> Vec<u32> {
    text.chars().map(|ch| ch as u32).collect()
}

/// Convert code points back into a `String`.
pub fn from_code_points(code_points: &[u32]) -> Result<String, TextError> {
    code_points
        .iter()
        .enumerate()
        .map(|(index, &code_point)| {
            char::from_u32(code_point).ok_or(TextError::InvalidCodePoint { code_point, index })
        })
        .collect()
}

/// Convert code points into a `String`, replacing invalid values with U+FFFD.
pub fn from_code_points_lossy(code_points: &[u32]) -> String {
    code_points
        .iter()
        .map(|&code_point| {
            char::from_u32(code_point).unwrap_or_else(|| {
                warn!("replacing invalid code point 0x{:X}", code_point);
                char::REPLACEMENT_CHARACTER
            })
        })
        .collect()
}

/// Returns true if any character of `text` is in the Myanmar blocks.
pub fn contains_script_char(text: &str) -> bool {
    text.chars().any(|ch| is_script_char(ch as u32))
}

/// Reorder every syllable in `text`. See [`reorder`].
pub fn reorder_str(text: &str) -> String {
    from_code_points_lossy(&reorder(&to_code_points(text)))
}

pub fn font_draw_shift_str(text: &str) -> String {
    from_code_points_lossy(&font_draw_shift(&to_code_points(text)))
}

pub fn insert_render_fix_marker_str(text: &str) -> String {
    from_code_points_lossy(&insert_render_fix_marker(&to_code_points(text)))
}
