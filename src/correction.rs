//! Corrections applied to a word when the keyboard commits it.

use bitflags::bitflags;
use log::debug;

use crate::render::insert_render_fix_marker;
use crate::text::{from_code_points_lossy, to_code_points};
use crate::zawgyi::reorder;

bitflags! {
    /// The corrections to apply to committed text.
    #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
    pub struct Corrections: u8 {
        /// Reorder syllables and resolve glyph variants.
        const REORDER    = 1 << 0;
        /// Insert render fix markers. Only applies together with `REORDER`.
        const RENDER_FIX = 1 << 1;
    }
}

impl Corrections {
    /// Build the corrections from the keyboard's "quick fixes" and
    /// "render fix" preferences.
    pub fn from_preferences(quick_fixes: bool, render_fix: bool) -> Self {
        let mut corrections = Corrections::empty();
        corrections.set(Corrections::REORDER, quick_fixes);
        corrections.set(Corrections::RENDER_FIX, render_fix);
        corrections
    }
}

impl Default for Corrections {
    fn default() -> Self {
        Corrections::REORDER
    }
}

/// Apply `corrections` to `word`.
pub fn correct(word: &[u32], corrections: Corrections) -> Vec<u32> {
    if !corrections.contains(Corrections::REORDER) {
        if corrections.contains(Corrections::RENDER_FIX) {
            debug!("render fix requested without reorder, skipping");
        }
        return word.to_vec();
    }

    let reordered = reorder(word);
    if corrections.contains(Corrections::RENDER_FIX) {
        insert_render_fix_marker(&reordered)
    } else {
        reordered
    }
}

pub fn correct_str(word: &str, corrections: Corrections) -> String {
    from_code_points_lossy(&correct(&to_code_points(word), corrections))
}

#[cfg(test)]
mod tests {
    use super::*;

    // e, medial ra, kha, asat
    const WORD: [u32; 4] = [0x1031, 0x103B, 0x1001, 0x1039];

    #[test]
    fn test_default() {
        assert_eq!(Corrections::REORDER, Corrections::default());
    }

    #[test]
    fn test_from_preferences() {
        assert_eq!(Corrections::empty(), Corrections::from_preferences(false, false));
        assert_eq!(
            Corrections::REORDER | Corrections::RENDER_FIX,
            Corrections::from_preferences(true, true)
        );
        assert_eq!(Corrections::RENDER_FIX, Corrections::from_preferences(false, true));
    }

    #[test]
    fn test_none() {
        assert_eq!(WORD.to_vec(), correct(&WORD, Corrections::empty()));
    }

    #[test]
    fn test_render_fix_needs_reorder() {
        assert_eq!(WORD.to_vec(), correct(&WORD, Corrections::RENDER_FIX));
    }

    #[test]
    fn test_reorder() {
        assert_eq!(
            vec![0x1031, 0x103B, 0x1001, 0x1039],
            correct(&WORD, Corrections::REORDER)
        );
    }

    #[test]
    fn test_reorder_and_render_fix() {
        assert_eq!(
            vec![0x200C, 0x1031, 0x103B, 0x1001, 0x1039, 0x200C],
            correct(&WORD, Corrections::REORDER | Corrections::RENDER_FIX)
        );
    }

    #[test]
    fn test_correct_str() {
        assert_eq!(
            "\u{1014}\u{1094}",
            correct_str("\u{1014}\u{1037}", Corrections::default())
        );
    }
}
