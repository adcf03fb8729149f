//! # Camelot Wheel
//!
//! The harmonic-mixing wheel: 12 numbered positions, each holding a major key
//! (`B`) and its relative minor (`A`). Keys one step apart on the wheel, or on the
//! same number, mix without clashing.
//!
//! ```text
//!  1B B   / 1A G#m      7B F  / 7A Dm
//!  2B F#  / 2A D#m      8B C  / 8A Am
//!  3B C#  / 3A A#m      9B G  / 9A Em
//!  4B G#  / 4A Fm      10B D  / 10A Bm
//!  5B D#  / 5A Cm      11B A  / 11A F#m
//!  6B A#  / 6A Gm      12B E  / 12A C#m
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::KeysError;
use crate::harmony::{Key, Mode};
use crate::note::PitchClass;

/// Major key of each wheel position, index 0 = position 1
const WHEEL_MAJORS: [PitchClass; 12] = [
    PitchClass::B,
    PitchClass::FSharp,
    PitchClass::CSharp,
    PitchClass::GSharp,
    PitchClass::DSharp,
    PitchClass::ASharp,
    PitchClass::F,
    PitchClass::C,
    PitchClass::G,
    PitchClass::D,
    PitchClass::A,
    PitchClass::E,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CamelotLetter {
    /// Minor keys
    A,
    /// Major keys
    B,
}

impl CamelotLetter {
    fn mode(self) -> Mode {
        match self {
            CamelotLetter::A => Mode::Minor,
            CamelotLetter::B => Mode::Major,
        }
    }

    fn other(self) -> Self {
        match self {
            CamelotLetter::A => CamelotLetter::B,
            CamelotLetter::B => CamelotLetter::A,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CamelotCode {
    number: u8,
    letter: CamelotLetter,
}

impl CamelotCode {
    /// Code for a wheel position; `number` must be in `1..=12`.
    pub fn new(number: u8, letter: CamelotLetter) -> Option<Self> {
        (1..=12).contains(&number).then_some(Self { number, letter })
    }

    /// Wheel position, `1..=12`.
    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn letter(&self) -> CamelotLetter {
        self.letter
    }

    pub fn parse(code: &str) -> Option<Self> {
        let code = code.trim();
        let (last, _) = code.char_indices().last()?;
        let (digits, letter) = code.split_at(last);
        let letter = match letter {
            "A" | "a" => CamelotLetter::A,
            "B" | "b" => CamelotLetter::B,
            _ => return None,
        };
        let number: u8 = digits.parse().ok()?;
        Self::new(number, letter)
    }

    pub fn for_key(key: &Key) -> Self {
        let major_root = match key.mode {
            Mode::Major => key.root,
            Mode::Minor => key.root.transpose(3),
        };
        let letter = match key.mode {
            Mode::Major => CamelotLetter::B,
            Mode::Minor => CamelotLetter::A,
        };
        let index = WHEEL_MAJORS.iter().position(|&pc| pc == major_root).unwrap_or(0);
        Self {
            number: index as u8 + 1,
            letter,
        }
    }

    /// The key at this wheel position, with conventional spelling.
    pub fn key(&self) -> Key {
        let major_root = WHEEL_MAJORS[(self.number as usize + 11) % 12];
        let root = match self.letter {
            CamelotLetter::B => major_root,
            CamelotLetter::A => major_root.transpose(-3),
        };
        Key::new(root, self.letter.mode())
    }

    /// Harmonically compatible codes: the relative key on the same number, then
    /// one step counter-clockwise and one step clockwise with the same letter.
    pub fn neighbours(&self) -> Vec<CamelotCode> {
        let number = self.number as usize;
        let down = ((number + 10) % 12 + 1) as u8;
        let up = (number % 12 + 1) as u8;
        vec![
            Self {
                number: self.number,
                letter: self.letter.other(),
            },
            Self {
                number: down,
                letter: self.letter,
            },
            Self {
                number: up,
                letter: self.letter,
            },
        ]
    }
}

impl fmt::Display for CamelotCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self.letter {
            CamelotLetter::A => 'A',
            CamelotLetter::B => 'B',
        };
        write!(f, "{}{}", self.number, letter)
    }
}

impl FromStr for CamelotCode {
    type Err = KeysError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| KeysError::UnknownCamelotCode(s.to_string()))
    }
}

impl Serialize for CamelotCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One segment pair of the wheel as shown by the selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelSegment {
    pub number: u8,
    pub major: String,
    pub minor: String,
}

/// All 12 wheel positions, starting at 12 o'clock and going clockwise.
pub fn wheel() -> Vec<WheelSegment> {
    WHEEL_MAJORS
        .iter()
        .enumerate()
        .map(|(i, &major_root)| WheelSegment {
            number: i as u8 + 1,
            major: major_root.name().to_string(),
            minor: format!("{}m", major_root.transpose(-3).name()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let code = CamelotCode::parse("8B").unwrap();
        assert_eq!(code.number(), 8);
        assert_eq!(code.letter(), CamelotLetter::B);
        assert_eq!(code.to_string(), "8B");
        assert_eq!(CamelotCode::parse("12a").unwrap().to_string(), "12A");
        assert!(CamelotCode::parse("13A").is_none());
        assert!(CamelotCode::parse("0B").is_none());
        assert!(CamelotCode::parse("8C").is_none());
        assert!(CamelotCode::parse("").is_none());
        assert!(CamelotCode::parse("B").is_none());
    }

    #[test]
    fn test_keys_on_the_wheel() {
        assert_eq!(CamelotCode::parse("8B").unwrap().key().name(), "C Major");
        assert_eq!(CamelotCode::parse("8A").unwrap().key().name(), "A Minor");
        assert_eq!(CamelotCode::parse("5A").unwrap().key().name(), "C Minor");
        assert_eq!(CamelotCode::parse("1A").unwrap().key().name(), "G# Minor");
        assert_eq!(CamelotCode::parse("6B").unwrap().key().name(), "Bb Major");
    }

    #[test]
    fn test_code_for_every_key_round_trips() {
        for pc in PitchClass::ALL {
            for mode in [Mode::Major, Mode::Minor] {
                let key = Key::new(pc, mode);
                assert_eq!(key.camelot().key(), key);
            }
        }
    }

    #[test]
    fn test_neighbours() {
        let codes: Vec<String> = CamelotCode::parse("8B")
            .unwrap()
            .neighbours()
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(codes, vec!["8A", "7B", "9B"]);

        let wrapped: Vec<String> = CamelotCode::parse("12A")
            .unwrap()
            .neighbours()
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(wrapped, vec!["12B", "11A", "1A"]);
    }

    #[test]
    fn test_codes_stay_on_the_wheel() {
        assert!(CamelotCode::new(0, CamelotLetter::B).is_none());
        assert!(CamelotCode::new(13, CamelotLetter::A).is_none());
        assert!(CamelotCode::new(250, CamelotLetter::A).is_none());

        for number in 1..=12 {
            for letter in [CamelotLetter::A, CamelotLetter::B] {
                let code = CamelotCode::new(number, letter).unwrap();
                for n in code.neighbours() {
                    assert!((1..=12).contains(&n.number()), "{} -> {}", code, n);
                }
            }
        }

        let first: Vec<String> = CamelotCode::new(1, CamelotLetter::B)
            .unwrap()
            .neighbours()
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(first, vec!["1A", "12B", "2B"]);
    }

    #[test]
    fn test_wheel_segments() {
        let segments = wheel();
        assert_eq!(segments.len(), 12);
        assert_eq!(segments[0].major, "B");
        assert_eq!(segments[0].minor, "G#m");
        assert_eq!(segments[7].major, "C");
        assert_eq!(segments[7].minor, "Am");
    }
}
