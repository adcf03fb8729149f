//! # Note / Interval Model
//!
//! Pitch classes, enharmonic spelling and transposition arithmetic.
//!
//! ## Canonical Spelling
//! Every note is stored as one of 12 pitch classes, canonically spelled with sharps:
//! `C C# D D# E F F# G G# A A# B`. Input may use any of the accepted spellings:
//! - flats: `Db`, `Eb`, `Gb`, `Ab`, `Bb`, `Cb`, `Fb`
//! - white-key sharps: `E#`, `B#`
//! - doubles: `C##`, `Dbb`, ...
//! - unicode accidentals: `F♯`, `B♭`
//! - a trailing minor marker on key names: `Am`, `G♯m`
//!
//! Output is always sharp-spelled unless `prefer_flats` is set, in which case the
//! five black keys are respelled (`C#` → `Db`, ...). White keys never change, so
//! `E#`/`B#`/`Cb`/`Fb` are never produced.
//!
//! ## Soft Failure
//! The string helpers in this module never fail. An unrecognized note is passed
//! through unchanged by [`normalize`] and [`transpose`], and [`index_of`] returns
//! `None`, which callers treat as "no match".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KeysError;

/// One of the 12 pitch classes of equal temperament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    #[serde(rename = "C#")]
    CSharp,
    D,
    #[serde(rename = "D#")]
    DSharp,
    E,
    F,
    #[serde(rename = "F#")]
    FSharp,
    G,
    #[serde(rename = "G#")]
    GSharp,
    A,
    #[serde(rename = "A#")]
    ASharp,
    B,
}

/// The five black-key spellings that have a conventional flat alternative.
///
/// Enharmonic matching (voicing lookup, highlight matching) goes through this table
/// rather than through interval arithmetic.
pub const ENHARMONIC_PAIRS: [(&str, &str); 5] = [
    ("C#", "Db"),
    ("D#", "Eb"),
    ("F#", "Gb"),
    ("G#", "Ab"),
    ("A#", "Bb"),
];

impl PitchClass {
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
    ];

    /// Chromatic index, 0 = C ... 11 = B
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Pitch class for any integer, wrapping modulo 12 (negative values included).
    pub fn from_index(index: i32) -> Self {
        Self::ALL[index.rem_euclid(12) as usize]
    }

    /// Parse any accepted spelling. Returns `None` for unrecognized input.
    pub fn parse(note: &str) -> Option<Self> {
        let cleaned = note.trim().replace('♯', "#").replace('♭', "b");
        let mut chars = cleaned.chars();

        let base: i32 = match chars.next()? {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return None,
        };

        let mut rest: &str = chars.as_str();
        // Key names like "Am" or "Bbm" carry a minor marker after the note
        if let Some(stripped) = rest.strip_suffix('m') {
            rest = stripped;
        }

        let offset: i32 = match rest {
            "" => 0,
            "#" => 1,
            "##" => 2,
            "b" => -1,
            "bb" => -2,
            _ => return None,
        };

        Some(Self::from_index(base + offset))
    }

    /// Canonical sharp spelling
    pub fn name(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        }
    }

    /// Flat spelling for the five black keys
    pub fn flat_name(self) -> Option<&'static str> {
        match self {
            PitchClass::CSharp => Some("Db"),
            PitchClass::DSharp => Some("Eb"),
            PitchClass::FSharp => Some("Gb"),
            PitchClass::GSharp => Some("Ab"),
            PitchClass::ASharp => Some("Bb"),
            _ => None,
        }
    }

    /// Spelling for display: flats for black keys when `prefer_flats` is set.
    pub fn spell(self, prefer_flats: bool) -> &'static str {
        if prefer_flats {
            if let Some(flat) = self.flat_name() {
                return flat;
            }
        }
        self.name()
    }

    pub fn is_black_key(self) -> bool {
        self.flat_name().is_some()
    }

    pub fn transpose(self, semitones: i32) -> Self {
        Self::from_index(self.index() as i32 + semitones)
    }

    /// Ascending distance from `root` to `self`, in `0..12`.
    pub fn interval_from(self, root: PitchClass) -> u8 {
        (self.index() as i32 - root.index() as i32).rem_euclid(12) as u8
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = KeysError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| KeysError::UnknownNote(s.to_string()))
    }
}

/// Normalize a note name to its canonical sharp spelling.
///
/// Unrecognized input is returned unchanged.
///
/// ```
/// use keychords::note::normalize;
///
/// assert_eq!(normalize("Db"), "C#");
/// assert_eq!(normalize("E#"), "F");
/// assert_eq!(normalize("C##"), "D");
/// assert_eq!(normalize("H"), "H");
/// ```
pub fn normalize(note: &str) -> String {
    match PitchClass::parse(note) {
        Some(pc) => pc.name().to_string(),
        None => note.to_string(),
    }
}

/// Chromatic position of a note (0 = C), or `None` if it is not a recognized note.
pub fn index_of(note: &str) -> Option<u8> {
    PitchClass::parse(note).map(PitchClass::index)
}

/// Transpose a note by any number of semitones, wrapping modulo 12.
///
/// Unrecognized input is returned unchanged.
///
/// ```
/// use keychords::note::transpose;
///
/// assert_eq!(transpose("A", 3, false), "C");
/// assert_eq!(transpose("C", -1, false), "B");
/// assert_eq!(transpose("C", 1, true), "Db");
/// assert_eq!(transpose("E", 1, true), "F");
/// ```
pub fn transpose(note: &str, semitones: i32, prefer_flats: bool) -> String {
    match PitchClass::parse(note) {
        Some(pc) => pc.transpose(semitones).spell(prefer_flats).to_string(),
        None => note.to_string(),
    }
}

/// Respell a note with sharps or flats. Unrecognized input is returned unchanged.
pub fn spell(note: &str, prefer_flats: bool) -> String {
    transpose(note, 0, prefer_flats)
}

/// The other spelling of a black key (`"C#"` ↔ `"Db"`), from [`ENHARMONIC_PAIRS`].
pub fn enharmonic_equivalent(note: &str) -> Option<&'static str> {
    ENHARMONIC_PAIRS.iter().find_map(|&(sharp, flat)| {
        if note == sharp {
            Some(flat)
        } else if note == flat {
            Some(sharp)
        } else {
            None
        }
    })
}

/// True when both names are recognized notes with the same chromatic index.
pub fn is_same_pitch(a: &str, b: &str) -> bool {
    match (index_of(a), index_of(b)) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Ascending interval from `root` to `note` in `0..12`, or `None` if either is unrecognized.
pub fn interval_from_root(note: &str, root: &str) -> Option<u8> {
    let note = PitchClass::parse(note)?;
    let root = PitchClass::parse(root)?;
    Some(note.interval_from(root))
}
