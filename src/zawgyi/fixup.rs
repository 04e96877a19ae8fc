//! Resolution of Zawgyi glyph variants within a syllable.
//!
//! Zawgyi has no shaping engine behind it, so the keyboard has to pick the
//! glyph variant that renders correctly next to its neighbours: the width of
//! the medial Ra, the long or short vowel sign U, the position of the dot
//! below, and so on. Each rule below resolves one slot by looking at the rest
//! of the syllable. Rules run in a fixed order and later rules see the values
//! chosen by earlier ones.

use log::{debug, log_enabled, Level};

use super::role::SyllableRole::{self, *};
use super::syllable::Syllable;

type Rule = fn(&mut Syllable);

/// Slot rules in the order they are applied.
const RULES: [(SyllableRole, Rule); 16] = [
    (ThaWaiHtoe, unchanged),
    (RaRitt, fix_ra_ritt),
    (Consonant, fix_consonant),
    (LowerConsonant, fix_lower_consonant),
    (LoneGyiTin, fix_lone_gyi_tin),
    (HaHtoe, fix_ha_htoe),
    (WaSwal, fix_wa_swal),
    (YaPint, fix_ya_pint),
    (ChangNyin, fix_chang_nyin),
    (TeeTeeTin, unchanged),
    (NoutPyit, unchanged),
    (YeeKhya, fix_yee_khya),
    (AThart, fix_a_thart),
    (OutNyint, fix_out_nyint),
    (WittSaPout, unchanged),
    (Other, fix_mixed_chars),
];

// Consonants with a descender that forces the long forms of vowel sign U.
const LONG_U_CONSONANTS: &[u32] = &[
    0x1008, 0x100B, 0x100C, 0x100D, 0x1020, 0x1025, 0x1026, 0x106A, 0x104C, 0x104D, 0x1092,
    0x106E, 0x106F, 0x1097, 0x1042, 0x1043, 0x1044, 0x1045, 0x1046, 0x1047, 0x1049,
];

const LONG_U_DOUBLE_CONSONANTS: &[u32] = &[
    0x100A, 0x1009, 0x106B, 0x1023, 0x1024, 0x1029, 0x102A, 0x104E, 0x1091,
];

// Consonants that push the dot below to its shifted position.
const SHIFTED_DOT_CONSONANTS: &[u32] = &[
    0x1008, 0x100B, 0x100C, 0x100D, 0x1020, 0x101B, 0x1090, 0x104C, 0x104D, 0x1092, 0x106E,
    0x106F, 0x1097, 0x1042, 0x1043, 0x1044, 0x1045, 0x1046, 0x1047, 0x1049,
];

const SHIFTED_DOT_DOUBLE_CONSONANTS: &[u32] = &[0x1023, 0x1024, 0x1029, 0x102A, 0x104E, 0x1091];

// Consonants that take the tall form of vowel sign Aa.
const TALL_AA_CONSONANTS: &[u32] = &[0x1001, 0x1002, 0x1004, 0x1012, 0x1015, 0x101D];

// Stacked consonants as (wide, narrow) pairs.
const STACKED_WIDTH_PAIRS: [(u32, u32); 4] = [
    (0x1066, 0x1067),
    (0x1071, 0x1072),
    (0x1073, 0x1074),
    (0x107B, 0x1093),
];

/// Resolve every glyph variant in an anchored syllable.
///
/// Syllables without a consonant are left alone.
pub fn fix(syllable: &mut Syllable) {
    if !syllable.has_consonant() {
        return;
    }

    if !log_enabled!(Level::Debug) {
        for &(_role, rule) in RULES.iter() {
            rule(syllable);
        }
        return;
    }

    for &(role, rule) in RULES.iter() {
        let before = *syllable;
        rule(syllable);
        if *syllable != before {
            debug!("{:?} rule: {:?} -> {:?}", role, before, syllable);
        }
    }
}

fn unchanged(_syllable: &mut Syllable) {}

fn fix_ra_ritt(s: &mut Syllable) {
    if !s.has(RaRitt) {
        return;
    }

    let upper = s.has(LoneGyiTin)
        || s.has(NoutPyit)
        || s.has(TeeTeeTin)
        || s.is_any(AThart, &[0x1064, 0x108D]);
    let lower = s.has(WaSwal) || s.has(LowerConsonant);
    let value = match (s.has(Consonant), upper, lower) {
        (true, true, true) => 0x1083,
        (true, true, false) => 0x107F,
        (true, false, true) => 0x1081,
        (true, false, false) => 0x103B,
        (false, true, true) => 0x1084,
        (false, true, false) => 0x1080,
        (false, false, true) => 0x1082,
        (false, false, false) => 0x107E,
    };
    s.set(RaRitt, value);
}

fn fix_consonant(s: &mut Syllable) {
    if s.is_any(DoubleConsonant, &[0x100A, 0x106B]) {
        let narrow = s.has(WaSwal) || s.has(LowerConsonant);
        s.set(DoubleConsonant, if narrow { 0x106B } else { 0x100A });
    }

    if s.is_any(Consonant, &[0x1014, 0x108F]) {
        let short = [RaRitt, WaSwal, HaHtoe, YaPint, ChangNyin, LowerConsonant]
            .iter()
            .any(|&role| s.has(role));
        s.set(Consonant, if short { 0x108F } else { 0x1014 });
    }

    if s.is_any(Consonant, &[0x101B, 0x1090]) {
        let short = s.has(ChangNyin);
        s.set(Consonant, if short { 0x1090 } else { 0x101B });
    }

    if s.is_any(Consonant, &[0x1025, 0x106A]) {
        let wide = s.has(WaSwal) || s.has(LowerConsonant);
        s.set(Consonant, if wide { 0x106A } else { 0x1025 });
    }
}

fn fix_lower_consonant(s: &mut Syllable) {
    for &(wide, narrow) in STACKED_WIDTH_PAIRS.iter() {
        if s.is_any(LowerConsonant, &[wide, narrow]) {
            let value = if s.has(DoubleConsonant) { wide } else { narrow };
            s.set(LowerConsonant, value);
            return;
        }
    }
}

fn fix_lone_gyi_tin(s: &mut Syllable) {
    if !s.has(LoneGyiTin) {
        return;
    }

    if s.is(AThart, 0x1064) {
        let value = if s.is(LoneGyiTin, 0x102D) { 0x108B } else { 0x108C };
        s.set(LoneGyiTin, value);
        s.clear(AThart);
    } else if s.has(TeeTeeTin) {
        s.set(LoneGyiTin, 0x108E);
        s.clear(TeeTeeTin);
    } else if s.is_any(LoneGyiTin, &[0x102D, 0x108B, 0x108E]) {
        s.set(LoneGyiTin, 0x102D);
    } else if s.is_any(LoneGyiTin, &[0x102E, 0x108C]) {
        s.set(LoneGyiTin, 0x102E);
    }
}

fn fix_ha_htoe(s: &mut Syllable) {
    if !s.has(HaHtoe) {
        return;
    }

    let short = s.has(RaRitt)
        || s.is_any(DoubleConsonant, &[0x100A, 0x1009, 0x106B, 0x1029, 0x102A])
        || s.is(Consonant, 0x100C);
    s.set(HaHtoe, if short { 0x1087 } else { 0x103D });
}

fn fix_wa_swal(s: &mut Syllable) {
    if !s.has(WaSwal) {
        return;
    }

    if s.has(HaHtoe) {
        s.set(WaSwal, 0x108A);
        s.clear(HaHtoe);
    } else {
        s.set(WaSwal, 0x103C);
    }
}

fn fix_ya_pint(s: &mut Syllable) {
    if !s.has(YaPint) {
        return;
    }

    let short = s.has(WaSwal);
    s.set(YaPint, if short { 0x107D } else { 0x103A });
}

fn fix_chang_nyin(s: &mut Syllable) {
    if !s.has(ChangNyin) {
        return;
    }

    let long = s.has(RaRitt)
        || s.has(YaPint)
        || s.has(WaSwal)
        || s.has(LowerConsonant)
        || s.is_any(Consonant, LONG_U_CONSONANTS)
        || s.is_any(DoubleConsonant, LONG_U_DOUBLE_CONSONANTS);

    let (long_form, with_ha_htoe, plain) = if s.is_any(ChangNyin, &[0x102F, 0x1033]) {
        (0x1033, 0x1088, 0x102F)
    } else {
        (0x1034, 0x1089, 0x1030)
    };

    if long {
        s.set(ChangNyin, long_form);
    } else if s.has(HaHtoe) {
        s.set(ChangNyin, with_ha_htoe);
        s.clear(HaHtoe);
    } else {
        s.set(ChangNyin, plain);
    }
}

fn fix_yee_khya(s: &mut Syllable) {
    if !s.has(YeeKhya) {
        return;
    }

    let tall = s.is_any(Consonant, TALL_AA_CONSONANTS)
        && [
            RaRitt,
            LowerConsonant,
            LoneGyiTin,
            HaHtoe,
            WaSwal,
            YaPint,
            ChangNyin,
        ]
        .iter()
        .all(|&role| !s.has(role));

    if !tall {
        s.set(YeeKhya, 0x102C);
    } else if s.is(AThart, 0x1039) {
        s.set(YeeKhya, 0x105A);
        s.clear(AThart);
    } else {
        s.set(YeeKhya, 0x102B);
    }
}

fn fix_a_thart(s: &mut Syllable) {
    if s.is(AThart, 0x1064) && s.has(TeeTeeTin) {
        s.set(AThart, 0x108D);
        s.clear(TeeTeeTin);
    }
}

fn fix_out_nyint(s: &mut Syllable) {
    if !s.has(OutNyint) {
        return;
    }

    let value = if s.has(YeeKhya) {
        0x1037
    } else if s.has(RaRitt)
        || s.has(WaSwal)
        || s.has(YaPint)
        || (s.has(ChangNyin) && !s.is(ChangNyin, 0x102F))
        || s.has(LowerConsonant)
        || s.is_any(Consonant, SHIFTED_DOT_CONSONANTS)
        || s.is_any(DoubleConsonant, SHIFTED_DOT_DOUBLE_CONSONANTS)
    {
        0x1095
    } else if s.has(HaHtoe) || s.is(ChangNyin, 0x102F) || s.is(Consonant, 0x1014) {
        0x1094
    } else {
        0x1037
    };
    s.set(OutNyint, value);
}

/// Fold slot combinations that have a single precomposed code point.
fn fix_mixed_chars(s: &mut Syllable) {
    for &(consonant, lower) in [(0x100D, 0x106E), (0x100E, 0x106F), (0x100B, 0x1097)].iter() {
        if s.is(Consonant, consonant) && s.is(LowerConsonant, lower) {
            s.set(Consonant, lower);
            s.clear(LowerConsonant);
        }
    }

    // Au
    if s.is(ThaWaiHtoe, 0x1031)
        && s.is(RaRitt, 0x107E)
        && s.is(DoubleConsonant, 0x101E)
        && s.is(YeeKhya, 0x102C)
        && s.is(AThart, 0x1039)
    {
        s.clear(ThaWaiHtoe);
        s.clear(RaRitt);
        s.clear(YeeKhya);
        s.clear(AThart);
        s.set(DoubleConsonant, 0x102A);
    }

    // O
    if s.is(RaRitt, 0x107E) && s.is(DoubleConsonant, 0x101E) {
        s.clear(RaRitt);
        s.set(DoubleConsonant, 0x1029);
    }

    // Uu
    if s.is(LoneGyiTin, 0x102E) && s.is(Consonant, 0x1025) {
        s.clear(LoneGyiTin);
        s.set(Consonant, 0x1026);
    }

    // Aforementioned
    if s.is(Consonant, 0x1044)
        && s.is(LowerConsonant, 0x1004)
        && s.is(AThart, 0x1039)
        && s.is(WittSaPout, 0x1038)
    {
        s.set(Consonant, 0x104E);
        s.clear(LowerConsonant);
        s.clear(AThart);
        s.clear(WittSaPout);
    }

    // Jha
    if s.is(Consonant, 0x1005) && s.is(YaPint, 0x103A) {
        s.set(Consonant, 0x1008);
        s.clear(YaPint);
    }
}
