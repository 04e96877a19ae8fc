//! Syllable reordering for Zawgyi encoded Myanmar text.
//!
//! A Zawgyi keyboard emits code points in the order they are drawn: vowel
//! sign E and medial Ra come before the consonant they attach to, and the
//! glyph variant for each mark depends on its neighbours. [`reorder`] splits
//! the input into syllables, picks the right variant for every mark and emits
//! each syllable in a fixed slot order.
//!
//! ```
//! use zawgyi_fixup::zawgyi::reorder;
//!
//! // Vowel sign E typed before Ka stays in front of it.
//! assert_eq!(reorder(&[0x1031, 0x1000]), vec![0x1031, 0x1000]);
//! // Na takes its short form above vowel sign U.
//! assert_eq!(reorder(&[0x1014, 0x102F]), vec![0x108F, 0x102F]);
//! ```

use log::trace;
use tinyvec::TinyVec;

mod decompose;
mod fixup;
mod role;
mod syllable;

pub use self::decompose::{chars_equivalent, decompose, Decomposition};
pub use self::fixup::fix;
pub use self::role::{classify, is_alphabet, is_word_char, SyllableRole};
pub use self::syllable::{Flattened, Syllable};

/// Reorder a sequence of Zawgyi code points syllable by syllable.
///
/// Code points outside the Myanmar blocks are copied through unchanged.
pub fn reorder(input: &[u32]) -> Vec<u32> {
    let mut output = Vec::with_capacity(input.len());
    let mut segmenter = Segmenter::new();
    for &code_point in input {
        segmenter.push(code_point, &mut output);
    }
    segmenter.finish(&mut output);
    output
}

/// Incremental syllable segmenter.
///
/// Holds at most one syllable in flight. A syllable is flushed when a code
/// point that can start a new syllable arrives and the buffered one already
/// has a consonant.
#[derive(Clone, Debug, Default)]
pub struct Segmenter {
    syllable: Syllable,
    // Code points pushed into the current syllable, in input order.
    pending: TinyVec<[u32; 8]>,
}

impl Segmenter {
    pub fn new() -> Self {
        Segmenter::default()
    }

    /// Feed one code point, appending any completed output to `output`.
    pub fn push(&mut self, code_point: u32, output: &mut Vec<u32>) {
        let role = classify(code_point);
        if role.starts_syllable() && self.syllable.has_consonant() {
            self.flush(output);
        }

        if role == SyllableRole::Other {
            output.push(code_point);
        } else {
            self.syllable.set_value(role, code_point);
            self.pending.push(code_point);
        }
    }

    /// Flush the syllable still in flight.
    pub fn finish(&mut self, output: &mut Vec<u32>) {
        self.flush(output);
    }

    /// Returns true when no syllable is in flight.
    ///
    /// Input can be split into independently reordered chunks at any point
    /// where this holds.
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    fn flush(&mut self, output: &mut Vec<u32>) {
        if self.pending.is_empty() {
            return;
        }

        if self.syllable.has_consonant() {
            fix(&mut self.syllable);
            let flattened = self.syllable.flatten();
            trace!(
                "syllable {:04X?} -> {:04X?}",
                self.pending.as_slice(),
                flattened.as_slice()
            );
            output.extend_from_slice(&flattened);
        } else {
            // Marks with no base letter keep their typed order. Any non-script
            // text pushed while they waited has already been written.
            trace!("unanchored marks {:04X?}", self.pending.as_slice());
            output.extend_from_slice(&self.pending);
        }

        self.syllable = Syllable::new();
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(Vec::<u32>::new(), reorder(&[]));
    }

    #[test]
    fn test_non_script() {
        let input = "Hello, world".chars().map(|ch| ch as u32).collect::<Vec<_>>();
        assert_eq!(input, reorder(&input));
    }

    #[test]
    fn test_syllable_boundaries() {
        // ka, medial ra: the medial starts a new syllable after ka
        assert_eq!(vec![0x1000, 0x103B], reorder(&[0x1000, 0x103B]));
        // e, medial ra, kha, u, i
        assert_eq!(
            vec![0x1031, 0x107F, 0x1001, 0x102D, 0x1033],
            reorder(&[0x1031, 0x103B, 0x1001, 0x102F, 0x102D])
        );
    }

    #[test]
    fn test_marks_reordered() {
        // ka, u, i
        assert_eq!(
            vec![0x1000, 0x102D, 0x102F],
            reorder(&[0x1000, 0x102F, 0x102D])
        );
        // ma, dot below, uu
        assert_eq!(
            vec![0x1019, 0x1030, 0x1095],
            reorder(&[0x1019, 0x1037, 0x1030])
        );
    }

    #[test]
    fn test_other_passes_through() {
        assert_eq!(
            vec![0x1000, 0x0020, 0x1001, 0x102F],
            reorder(&[0x1000, 0x0020, 0x1001, 0x102F])
        );
    }

    #[test]
    fn test_leading_marks_join_consonant() {
        // e, medial ra, ka
        assert_eq!(vec![0x1031, 0x107E, 0x1000], reorder(&[0x1031, 0x103B, 0x1000]));
        // e, medial ra, sa: medial ra and sa fold into o
        assert_eq!(vec![0x1031, 0x1029], reorder(&[0x1031, 0x103B, 0x101E]));
    }

    #[test]
    fn test_unanchored_marks_untouched() {
        assert_eq!(vec![0x102F, 0x102D], reorder(&[0x102F, 0x102D]));
        assert_eq!(vec![0x102D, 0x102D], reorder(&[0x102D, 0x102D]));
        assert_eq!(vec![0x1088], reorder(&[0x1088]));
    }

    #[test]
    fn test_other_written_before_waiting_marks() {
        assert_eq!(vec![0x0020, 0x102F], reorder(&[0x102F, 0x0020]));
        // e waits for its consonant across the space
        assert_eq!(
            vec![0x0020, 0x1031, 0x1000],
            reorder(&[0x1031, 0x0020, 0x1000])
        );
    }

    #[test]
    fn test_single_consonant_variants_resolved() {
        assert_eq!(vec![0x1014], reorder(&[0x108F]));
        assert_eq!(vec![0x101B], reorder(&[0x1090]));
        assert_eq!(vec![0x1025], reorder(&[0x106A]));
        assert_eq!(vec![0x100A], reorder(&[0x106B]));
    }

    #[test]
    fn test_composite_folds() {
        assert_eq!(vec![0x1029], reorder(&[0x1029]));
        assert_eq!(vec![0x102A], reorder(&[0x102A]));
        assert_eq!(vec![0x104E], reorder(&[0x104E]));
        assert_eq!(vec![0x1026], reorder(&[0x1026]));
        assert_eq!(vec![0x106E], reorder(&[0x106E]));
    }

    #[test]
    fn test_composite_splits() {
        // ma with medial ha + u stays a ligature
        assert_eq!(vec![0x1019, 0x1088], reorder(&[0x1019, 0x1088]));
        // nnya with medial ha + u takes the short medial ha and long u
        assert_eq!(vec![0x100A, 0x1087, 0x1033], reorder(&[0x100A, 0x1088]));
    }

    mod segmenter {
        use super::*;

        #[test]
        fn test_idle() {
            let mut segmenter = Segmenter::new();
            let mut output = Vec::new();
            assert!(segmenter.is_idle());

            segmenter.push(0x1000, &mut output);
            assert!(!segmenter.is_idle());
            assert!(output.is_empty());

            segmenter.push(0x0020, &mut output);
            assert!(segmenter.is_idle());
            assert_eq!(vec![0x1000, 0x0020], output);
        }

        #[test]
        fn test_chunked_matches_whole() {
            let input = [0x1031, 0x103B, 0x1001, 0x0020, 0x1014, 0x102F, 0x1037];
            let whole = reorder(&input);

            let mut output = Vec::new();
            let mut segmenter = Segmenter::new();
            for &code_point in &input[..4] {
                segmenter.push(code_point, &mut output);
            }
            assert!(segmenter.is_idle());
            for &code_point in &input[4..] {
                segmenter.push(code_point, &mut output);
            }
            segmenter.finish(&mut output);

            assert_eq!(whole, output);
        }
    }
}
