//! Passes that prepare reordered text for display.

use crate::unicode::codepoint::is_script_char;

/// Offset from the Myanmar block into the private use glyphs of the bundled
/// keyboard font.
pub const FONT_SHIFT_OFFSET: u32 = 0xEA00;

/// ZERO WIDTH NON-JOINER, inserted to stop some renderers from fusing vowel
/// sign E and asat with their neighbours.
pub const RENDER_FIX_MARKER: u32 = 0x200C;

/// Move Myanmar code points into the private use area of the keyboard font.
///
/// A `0` terminator is left as is.
pub fn font_draw_shift(text: &[u32]) -> Vec<u32> {
    text.iter()
        .map(|&code_point| {
            if code_point != 0 && is_script_char(code_point) {
                code_point + FONT_SHIFT_OFFSET
            } else {
                code_point
            }
        })
        .collect()
}

/// Insert [`RENDER_FIX_MARKER`] before every vowel sign E and after every asat.
pub fn insert_render_fix_marker(text: &[u32]) -> Vec<u32> {
    let mut output = Vec::with_capacity(text.len());
    for &code_point in text {
        match code_point {
            0x1031 => {
                output.push(RENDER_FIX_MARKER);
                output.push(code_point);
            }
            0x1039 => {
                output.push(code_point);
                output.push(RENDER_FIX_MARKER);
            }
            _ => output.push(code_point),
        }
    }
    output
}
