//! Expansion of Zawgyi presentation forms into the code points they stand for.
//!
//! Zawgyi encodes many glyph variants and ligatures as separate code points.
//! Two strings typed with different variants of the same glyph compare equal
//! once each code point is decomposed.

use tinyvec::{tiny_vec, TinyVec};

use crate::unicode::codepoint::is_script_char;

/// The code points a single presentation form expands to.
pub type Decomposition = TinyVec<[u32; 5]>;

/// Expand a presentation form into its component code points.
///
/// Code points with no expansion, including everything outside the Myanmar
/// blocks, map to themselves.
pub fn decompose(code_point: u32) -> Decomposition {
    if !is_script_char(code_point) {
        return tiny_vec!([u32; 5] => code_point);
    }

    match code_point {
        // Medial Ra width variants
        0x107E..=0x1084 => tiny_vec!([u32; 5] => 0x103B),

        // Kinzi ligatures
        0x108B => tiny_vec!([u32; 5] => 0x1064, 0x102D),
        0x108C => tiny_vec!([u32; 5] => 0x1004, 0x1039, 0x102E),
        0x108D => tiny_vec!([u32; 5] => 0x1004, 0x1039, 0x1036),
        0x1064 => tiny_vec!([u32; 5] => 0x1004, 0x1039),

        0x108E => tiny_vec!([u32; 5] => 0x102D, 0x1036),

        // Medials
        0x108A => tiny_vec!([u32; 5] => 0x103C, 0x103D),
        0x1087 => tiny_vec!([u32; 5] => 0x103D),
        0x107D => tiny_vec!([u32; 5] => 0x103A),
        0x1088 => tiny_vec!([u32; 5] => 0x103D, 0x102F),
        0x1089 => tiny_vec!([u32; 5] => 0x103D, 0x1030),

        // Vowel signs
        0x1033 => tiny_vec!([u32; 5] => 0x102F),
        0x1034 => tiny_vec!([u32; 5] => 0x1030),
        0x1094 | 0x1095 => tiny_vec!([u32; 5] => 0x1037),
        0x102B => tiny_vec!([u32; 5] => 0x102C),
        0x105A => tiny_vec!([u32; 5] => 0x102C, 0x1039),

        // Independent vowels and symbols
        0x106A => tiny_vec!([u32; 5] => 0x1025),
        0x1026 => tiny_vec!([u32; 5] => 0x1025, 0x102E),
        0x1029 => tiny_vec!([u32; 5] => 0x107E, 0x101E),
        0x102A => tiny_vec!([u32; 5] => 0x1031, 0x107E, 0x101E, 0x102C, 0x1039),
        0x104E => tiny_vec!([u32; 5] => 0x1044, 0x1004, 0x1039, 0x1038),

        // Consonant variants and conjuncts
        0x1008 => tiny_vec!([u32; 5] => 0x1005, 0x103A),
        0x1009 | 0x106B => tiny_vec!([u32; 5] => 0x100A),
        0x108F => tiny_vec!([u32; 5] => 0x1014),
        0x1090 => tiny_vec!([u32; 5] => 0x101B),
        0x106E => tiny_vec!([u32; 5] => 0x100D, 0x100D),
        0x106F => tiny_vec!([u32; 5] => 0x100E, 0x100D),
        0x1091 => tiny_vec!([u32; 5] => 0x100F, 0x100D),
        0x1092 => tiny_vec!([u32; 5] => 0x100B, 0x106D),
        0x1097 => tiny_vec!([u32; 5] => 0x100B, 0x106C),

        // Wide stacked consonants
        0x1066 => tiny_vec!([u32; 5] => 0x1067),
        0x1071 => tiny_vec!([u32; 5] => 0x1072),
        0x1073 => tiny_vec!([u32; 5] => 0x1074),
        0x107B => tiny_vec!([u32; 5] => 0x1093),

        _ => tiny_vec!([u32; 5] => code_point),
    }
}

/// Returns true if `a` and `b` are variants of the same glyph sequence.
pub fn chars_equivalent(a: u32, b: u32) -> bool {
    if is_script_char(a) && is_script_char(b) {
        decompose(a) == decompose(b)
    } else {
        a == b
    }
}
