//! Classification of Zawgyi code points into syllable roles.

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::unicode::codepoint::is_script_char;

/// The slot a code point occupies within a Zawgyi syllable.
///
/// The declaration order is the slot order of a [`Syllable`](super::Syllable).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SyllableRole {
    /// Vowel sign E, typed before its consonant.
    ThaWaiHtoe,
    /// Medial Ra (ya-yit) and its width variants.
    RaRitt,
    Consonant,
    /// Consonants drawn wide enough to need the wide medial forms.
    DoubleConsonant,
    /// Stacked (subjoined) consonants.
    LowerConsonant,
    /// Vowel signs I and II, and their kinzi ligatures.
    LoneGyiTin,
    /// Medial Ha.
    HaHtoe,
    /// Medial Wa.
    WaSwal,
    /// Medial Ya (ya-pin).
    YaPint,
    /// Anusvara.
    TeeTeeTin,
    /// Vowel signs U and UU.
    ChangNyin,
    /// Vowel sign AI.
    NoutPyit,
    /// Vowel sign AA, tall and short.
    YeeKhya,
    /// Asat and kinzi.
    AThart,
    /// Dot below.
    OutNyint,
    /// Visarga.
    WittSaPout,
    Other,
}

impl SyllableRole {
    /// Number of roles, and so the number of slots in a syllable.
    pub const COUNT: usize = 17;

    pub const ALL: [SyllableRole; SyllableRole::COUNT] = [
        SyllableRole::ThaWaiHtoe,
        SyllableRole::RaRitt,
        SyllableRole::Consonant,
        SyllableRole::DoubleConsonant,
        SyllableRole::LowerConsonant,
        SyllableRole::LoneGyiTin,
        SyllableRole::HaHtoe,
        SyllableRole::WaSwal,
        SyllableRole::YaPint,
        SyllableRole::TeeTeeTin,
        SyllableRole::ChangNyin,
        SyllableRole::NoutPyit,
        SyllableRole::YeeKhya,
        SyllableRole::AThart,
        SyllableRole::OutNyint,
        SyllableRole::WittSaPout,
        SyllableRole::Other,
    ];

    /// Slot index of this role.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns true if a code point of this role closes an anchored syllable.
    pub fn starts_syllable(self) -> bool {
        matches!(
            self,
            SyllableRole::ThaWaiHtoe
                | SyllableRole::RaRitt
                | SyllableRole::Consonant
                | SyllableRole::DoubleConsonant
                | SyllableRole::Other
        )
    }
}

/// Classify a code point by the syllable slot it fills.
///
/// Anything without a slot, including all non-Myanmar text, is `Other`.
pub fn classify(code_point: u32) -> SyllableRole {
    use SyllableRole::*;

    match code_point {
        // Consonants
        0x1000 => DoubleConsonant, // က Ka
        0x1001 => Consonant,       // ခ Kha
        0x1002 => Consonant,       // ဂ Ga
        0x1003 => DoubleConsonant, // ဃ Gha
        0x1004 => Consonant,       // င Nga
        0x1005 => Consonant,       // စ Ca
        0x1006 => DoubleConsonant, // ဆ Cha
        0x1007 => Consonant,       // ဇ Ja
        0x1008 => Consonant,       // ဈ Jha
        0x1009 => DoubleConsonant, // ဉ Nya
        0x100A => DoubleConsonant, // ည Nnya
        0x100B => Consonant,       // ဋ Tta
        0x100C => Consonant,       // ဌ Ttha
        0x100D => Consonant,       // ဍ Dda
        0x100E => Consonant,       // ဎ Ddha
        0x100F => DoubleConsonant, // ဏ Nna
        0x1010 => DoubleConsonant, // တ Ta
        0x1011 => DoubleConsonant, // ထ Tha
        0x1012 => Consonant,       // ဒ Da
        0x1013 => Consonant,       // ဓ Dha
        0x1014 => Consonant,       // န Na
        0x1015 => Consonant,       // ပ Pa
        0x1016 => Consonant,       // ဖ Pha
        0x1017 => Consonant,       // ဗ Ba
        0x1018 => DoubleConsonant, // ဘ Bha
        0x1019 => Consonant,       // မ Ma
        0x101A => DoubleConsonant, // ယ Ya
        0x101B => Consonant,       // ရ Ra
        0x101C => DoubleConsonant, // လ La
        0x101D => Consonant,       // ဝ Wa
        0x101E => DoubleConsonant, // သ Sa
        0x101F => DoubleConsonant, // ဟ Ha
        0x1020 => Consonant,       // ဠ Lla
        0x1021 => DoubleConsonant, // အ A

        // Independent vowels and symbols
        0x1023 => DoubleConsonant, // ဣ I
        0x1024 => DoubleConsonant, // ဤ Ii
        0x1025 => Consonant,       // ဥ U
        0x1026 => Consonant,       // ဦ Uu
        0x1027 => Consonant,       // ဧ E
        0x1029 => DoubleConsonant, // ဩ O
        0x102A => DoubleConsonant, // ဪ Au
        0x103F => DoubleConsonant, // ဿ Great Sa
        0x104C => Consonant,       // ၌ Locative
        0x104D => Consonant,       // ၍ Completed
        0x104E => DoubleConsonant, // ၎ Aforementioned
        0x104F => Consonant,       // ၏ Genitive

        // Digits and punctuation
        0x1040..=0x1049 => Consonant,
        0x104A | 0x104B => Consonant, // ၊ ။

        // Dependent vowels and signs
        0x102B => YeeKhya,    // Tall Aa
        0x102C => YeeKhya,    // Aa
        0x102D => LoneGyiTin, // I
        0x102E => LoneGyiTin, // Ii
        0x102F => ChangNyin,  // U
        0x1030 => ChangNyin,  // Uu
        0x1031 => ThaWaiHtoe, // E
        0x1032 => NoutPyit,   // Ai
        0x1033 => ChangNyin,  // U, long
        0x1034 => ChangNyin,  // Uu, long
        0x1036 => TeeTeeTin,  // Anusvara
        0x1037 => OutNyint,   // Dot below
        0x1038 => WittSaPout, // Visarga
        0x1039 => AThart,     // Asat
        0x103A => YaPint,     // Medial Ya
        0x103B => RaRitt,     // Medial Ra
        0x103C => WaSwal,     // Medial Wa
        0x103D => HaHtoe,     // Medial Ha
        0x105A => YeeKhya,    // Tall Aa with asat

        // Stacked consonants
        0x1060..=0x1063 => LowerConsonant,
        0x1064 => AThart, // Kinzi
        0x1065..=0x1069 => LowerConsonant,
        0x106A => Consonant,       // U, wide
        0x106B => DoubleConsonant, // Nnya, narrow
        0x106C | 0x106D => LowerConsonant,
        0x106E => Consonant, // Dda with stacked Dda
        0x106F => Consonant, // Ddha with stacked Dda
        0x1070..=0x107C => LowerConsonant,
        0x107D => YaPint, // Medial Ya, short

        // Medial Ra variants
        0x107E..=0x1084 => RaRitt,

        0x1085 => LowerConsonant,  // Stacked La
        0x1086 => DoubleConsonant, // Great Sa, alternate
        0x1087 => HaHtoe,          // Medial Ha, short
        0x1088 => ChangNyin,       // Medial Ha with U
        0x1089 => ChangNyin,       // Medial Ha with Uu
        0x108A => WaSwal,          // Medial Wa with Ha
        0x108B => LoneGyiTin,      // Kinzi with I
        0x108C => LoneGyiTin,      // Kinzi with Ii
        0x108D => AThart,          // Kinzi with Anusvara
        0x108E => LoneGyiTin,      // I with Anusvara
        0x108F => Consonant,       // Na, short
        0x1090 => Consonant,       // Ra, short
        0x1091 => DoubleConsonant, // Nna with stacked Dda
        0x1092 => Consonant,       // Tta with stacked Ttha
        0x1093 => LowerConsonant,  // Stacked Bha
        0x1094 | 0x1095 => OutNyint,
        0x1096 => LowerConsonant,
        0x1097 => Consonant, // Tta with stacked Tta

        _ => Other,
    }
}

/// Returns true if the code point can begin or anchor a word in Zawgyi text.
pub fn is_alphabet(code_point: u32) -> bool {
    match classify(code_point) {
        SyllableRole::ThaWaiHtoe
        | SyllableRole::RaRitt
        | SyllableRole::Consonant
        | SyllableRole::DoubleConsonant => true,
        _ => is_letter(code_point),
    }
}

/// Word-character test used for locating word boundaries in mixed text.
pub fn is_word_char(code_point: u32) -> bool {
    if is_script_char(code_point) {
        is_alphabet(code_point)
    } else {
        is_letter(code_point)
    }
}

fn is_letter(code_point: u32) -> bool {
    match char::from_u32(code_point).map(get_general_category) {
        Some(
            GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter,
        ) => true,
        _ => false,
    }
}
