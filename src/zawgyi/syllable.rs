//! The slot record for a single Zawgyi syllable and its serialization.

use std::fmt;

use tinyvec::TinyVec;

use super::role::SyllableRole;

/// Code points of a syllable in output order.
pub type Flattened = TinyVec<[u32; SyllableRole::COUNT]>;

/// One orthographic syllable, held as at most one code point per role.
#[derive(Copy, Clone, Default, Eq, PartialEq)]
pub struct Syllable {
    slots: [Option<u32>; SyllableRole::COUNT],
}

impl Syllable {
    pub fn new() -> Self {
        Syllable::default()
    }

    pub fn get(&self, role: SyllableRole) -> Option<u32> {
        self.slots[role.index()]
    }

    pub fn set(&mut self, role: SyllableRole, code_point: u32) {
        self.slots[role.index()] = Some(code_point);
    }

    pub fn clear(&mut self, role: SyllableRole) {
        self.slots[role.index()] = None;
    }

    /// Returns true if the slot for `role` is filled.
    pub fn has(&self, role: SyllableRole) -> bool {
        self.get(role).is_some()
    }

    /// Returns true if the slot for `role` holds `code_point`.
    pub fn is(&self, role: SyllableRole, code_point: u32) -> bool {
        self.get(role) == Some(code_point)
    }

    /// Returns true if the slot for `role` holds any of `code_points`.
    pub fn is_any(&self, role: SyllableRole, code_points: &[u32]) -> bool {
        self.get(role)
            .map_or(false, |value| code_points.contains(&value))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// A syllable is anchored once it holds a consonant of either width.
    pub fn has_consonant(&self) -> bool {
        self.has(SyllableRole::Consonant) || self.has(SyllableRole::DoubleConsonant)
    }

    /// Store `code_point`, classified as `role`, in the syllable.
    ///
    /// Ligature code points are split across every slot they cover.
    pub fn set_value(&mut self, role: SyllableRole, code_point: u32) {
        use SyllableRole::*;

        let parts: &[(SyllableRole, u32)] = match code_point {
            0x106E => &[(Consonant, 0x100D), (LowerConsonant, 0x106E)],
            0x106F => &[(Consonant, 0x100E), (LowerConsonant, 0x106F)],
            0x1097 => &[(Consonant, 0x100B), (LowerConsonant, 0x1097)],
            0x102A => &[
                (ThaWaiHtoe, 0x1031),
                (RaRitt, 0x107E),
                (DoubleConsonant, 0x101E),
                (YeeKhya, 0x102C),
                (AThart, 0x1039),
            ],
            0x1029 => &[(RaRitt, 0x107E), (DoubleConsonant, 0x101E)],
            0x1026 => &[(LoneGyiTin, 0x102E), (Consonant, 0x1025)],
            0x104E => &[
                (Consonant, 0x1044),
                (LowerConsonant, 0x1004),
                (AThart, 0x1039),
                (WittSaPout, 0x1038),
            ],
            0x105A => &[(YeeKhya, 0x102C), (AThart, 0x1039)],
            0x1088 => &[(HaHtoe, 0x103D), (ChangNyin, 0x102F)],
            0x1089 => &[(HaHtoe, 0x103D), (ChangNyin, 0x1030)],
            0x108A => &[(WaSwal, 0x103C), (HaHtoe, 0x103D)],
            0x108B => &[(AThart, 0x1064), (LoneGyiTin, 0x102D)],
            0x108C => &[(AThart, 0x1064), (LoneGyiTin, 0x102E)],
            0x108D => &[(AThart, 0x1064), (TeeTeeTin, 0x1036)],
            0x108E => &[(LoneGyiTin, 0x102D), (TeeTeeTin, 0x1036)],
            _ => {
                self.set(role, code_point);
                return;
            }
        };

        for &(role, value) in parts {
            self.set(role, value);
        }
    }

    /// Emit the filled slots in canonical order.
    ///
    /// Vowel signs I and II move after the U signs when a medial Ya is
    /// present, and asat or kinzi moves up to follow the medials when it
    /// stacks above the consonant.
    pub fn flatten(&self) -> Flattened {
        use SyllableRole::*;

        let late_lone_gyi_tin = self.has(YaPint);
        let early_a_thart = (!self.has(ThaWaiHtoe) && self.has(YaPint) && self.has(AThart))
            || self.is_any(AThart, &[0x1064, 0x108D]);

        let mut out = Flattened::new();
        let mut emit = |role: SyllableRole| {
            if let Some(code_point) = self.get(role) {
                out.push(code_point);
            }
        };

        emit(ThaWaiHtoe);
        emit(RaRitt);
        emit(Consonant);
        emit(DoubleConsonant);
        emit(LowerConsonant);
        if !late_lone_gyi_tin {
            emit(LoneGyiTin);
        }
        emit(HaHtoe);
        emit(WaSwal);
        emit(YaPint);
        if early_a_thart {
            emit(AThart);
        }
        emit(TeeTeeTin);
        emit(ChangNyin);
        if late_lone_gyi_tin {
            emit(LoneGyiTin);
        }
        emit(NoutPyit);
        emit(YeeKhya);
        if !early_a_thart {
            emit(AThart);
        }
        emit(OutNyint);
        emit(WittSaPout);
        emit(Other);

        out
    }
}

impl fmt::Debug for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for role in SyllableRole::ALL {
            if let Some(code_point) = self.get(role) {
                map.entry(&role, &format_args!("U+{:04X}", code_point));
            }
        }
        map.finish()
    }
}
