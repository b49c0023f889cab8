//! Tone-diacritic normalization for pinyin vowels.
//!
//! Maps each of the 48 toned vowels (a, e, i, o, u, ü in both cases, four
//! tones each) to its toneless letter and tone class. The toneless letter
//! for ü is `v`, the ASCII stand-in pinyin input methods use.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Toned vowels per tone class, in the same column order as [`NEUTRALS`].
const TONED: [[char; 12]; 4] = [
    ['ā', 'ē', 'ī', 'ō', 'ū', 'ǖ', 'Ā', 'Ē', 'Ī', 'Ō', 'Ū', 'Ǖ'],
    ['á', 'é', 'í', 'ó', 'ú', 'ǘ', 'Á', 'É', 'Í', 'Ó', 'Ú', 'Ǘ'],
    ['ǎ', 'ě', 'ǐ', 'ǒ', 'ǔ', 'ǚ', 'Ǎ', 'Ě', 'Ǐ', 'Ǒ', 'Ǔ', 'Ǚ'],
    ['à', 'è', 'ì', 'ò', 'ù', 'ǜ', 'À', 'È', 'Ì', 'Ò', 'Ù', 'Ǜ'],
];

const NEUTRALS: [char; 12] = ['a', 'e', 'i', 'o', 'u', 'v', 'A', 'E', 'I', 'O', 'U', 'V'];

/// One of the four marked Mandarin tones. The neutral tone has no variant:
/// it is the absence of any diacritic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tone {
    /// Level tone (macron, ā).
    First,
    /// Rising tone (acute, á).
    Second,
    /// Falling-rising tone (caron, ǎ).
    Third,
    /// Falling tone (grave, à).
    Fourth,
}

impl Tone {
    const ALL: [Tone; 4] = [Tone::First, Tone::Second, Tone::Third, Tone::Fourth];

    /// Tone class as the conventional number 1–4.
    pub fn number(self) -> u8 {
        match self {
            Tone::First => 1,
            Tone::Second => 2,
            Tone::Third => 3,
            Tone::Fourth => 4,
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

pub struct ToneTable {
    map: HashMap<char, (char, Tone)>,
}

impl ToneTable {
    fn build() -> Self {
        let mut map = HashMap::with_capacity(TONED.len() * NEUTRALS.len());
        for (tone, row) in Tone::ALL.iter().zip(TONED.iter()) {
            for (&toned, &neutral) in row.iter().zip(NEUTRALS.iter()) {
                map.insert(toned, (neutral, *tone));
            }
        }
        Self { map }
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static ToneTable {
        static INSTANCE: OnceLock<ToneTable> = OnceLock::new();
        INSTANCE.get_or_init(Self::build)
    }

    /// Toneless form of `ch`; anything that is not a toned vowel passes through.
    pub fn to_neutral(&self, ch: char) -> char {
        self.map.get(&ch).map_or(ch, |&(neutral, _)| neutral)
    }

    pub fn tone_class_of(&self, ch: char) -> Option<Tone> {
        self.map.get(&ch).map(|&(_, tone)| tone)
    }

    pub fn strip_tones(&self, s: &str) -> String {
        s.chars().map(|c| self.to_neutral(c)).collect()
    }

    /// Tone of a syllable, taken from its first toned vowel.
    /// `None` means the syllable carries the neutral tone.
    pub fn syllable_tone(&self, syllable: &str) -> Option<Tone> {
        syllable.chars().find_map(|c| self.tone_class_of(c))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

pub fn to_neutral(ch: char) -> char {
    ToneTable::global().to_neutral(ch)
}

pub fn tone_class_of(ch: char) -> Option<Tone> {
    ToneTable::global().tone_class_of(ch)
}

/// Replace every toned vowel in `s` with its toneless letter.
pub fn strip_tones(s: &str) -> String {
    ToneTable::global().strip_tones(s)
}

pub fn syllable_tone(syllable: &str) -> Option<Tone> {
    ToneTable::global().syllable_tone(syllable)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_table_size() {
        assert_eq!(ToneTable::global().len(), 48);
    }

    #[test]
    fn test_to_neutral_lowercase() {
        assert_eq!(to_neutral('ā'), 'a');
        assert_eq!(to_neutral('é'), 'e');
        assert_eq!(to_neutral('ǐ'), 'i');
        assert_eq!(to_neutral('ò'), 'o');
        assert_eq!(to_neutral('ū'), 'u');
        assert_eq!(to_neutral('ǜ'), 'v');
    }

    #[test]
    fn test_to_neutral_preserves_case() {
        assert_eq!(to_neutral('Ā'), 'A');
        assert_eq!(to_neutral('Ǘ'), 'V');
        assert_eq!(to_neutral('Ò'), 'O');
    }

    #[test]
    fn test_to_neutral_passthrough() {
        assert_eq!(to_neutral('z'), 'z');
        assert_eq!(to_neutral('a'), 'a');
        assert_eq!(to_neutral('ü'), 'ü');
        assert_eq!(to_neutral('，'), '，');
        assert_eq!(to_neutral('中'), '中');
    }

    #[test]
    fn test_tone_class() {
        assert_eq!(tone_class_of('ā'), Some(Tone::First));
        assert_eq!(tone_class_of('Á'), Some(Tone::Second));
        assert_eq!(tone_class_of('ǚ'), Some(Tone::Third));
        assert_eq!(tone_class_of('è'), Some(Tone::Fourth));
        assert_eq!(tone_class_of('a'), None);
        assert_eq!(tone_class_of('n'), None);
        assert_eq!(Tone::Third.number(), 3);
        assert_eq!(Tone::Fourth.to_string(), "4");
    }

    #[test]
    fn test_every_toned_vowel_classified() {
        for (i, row) in TONED.iter().enumerate() {
            for &c in row {
                let tone = tone_class_of(c).unwrap();
                assert_eq!(tone.number() as usize, i + 1, "tone mismatch for {c}");
                assert!(NEUTRALS.contains(&to_neutral(c)));
            }
        }
    }

    #[test]
    fn test_strip_tones() {
        assert_eq!(strip_tones("zhōng"), "zhong");
        assert_eq!(strip_tones("lǜ"), "lv");
        assert_eq!(strip_tones("Guó"), "Guo");
        assert_eq!(strip_tones("de"), "de");
        assert_eq!(strip_tones(""), "");
    }

    #[test]
    fn test_syllable_tone() {
        assert_eq!(syllable_tone("zhāng"), Some(Tone::First));
        assert_eq!(syllable_tone("guó"), Some(Tone::Second));
        assert_eq!(syllable_tone("wǒ"), Some(Tone::Third));
        assert_eq!(syllable_tone("shì"), Some(Tone::Fourth));
        assert_eq!(syllable_tone("de"), None);
    }

    proptest! {
        #[test]
        fn to_neutral_is_idempotent(c in any::<char>()) {
            let once = to_neutral(c);
            prop_assert_eq!(to_neutral(once), once);
        }

        #[test]
        fn strip_tones_leaves_no_tone(s in "\\PC{0,16}") {
            let stripped = strip_tones(&s);
            prop_assert_eq!(syllable_tone(&stripped), None);
            prop_assert_eq!(stripped.chars().count(), s.chars().count());
        }
    }
}
