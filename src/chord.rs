//! # Chord Engine
//!
//! Chord-type interval tables, chord note generation, inversions and the
//! extension menus offered for a base triad.
//!
//! ## Chord Types
//! Each [`ChordType`] is a list of semitone intervals above the root, strictly
//! increasing and always starting at 0. Compound intervals are allowed
//! (9th = 14, 11th = 17, 13th = 21), so intervals range over `0..24`.
//!
//! | Family | Types |
//! |---|---|
//! | Triads | major, minor, diminished, augmented |
//! | Sevenths | major7, minor7, dominant7, diminished7, halfDiminished7, minorMajor7, augmented7, augmentedMajor7 |
//! | Sixths | major6, minor6 |
//! | Suspended / add | sus2, sus4, add9, minorAdd9 |
//! | Extended | dominant9/11/13, major9/11/13, minor9/11/13 |
//!
//! ## Inversions
//! The note list is the intervals transposed from the root, then rotated left by
//! the inversion number. Inversions outside `0..len` fall back to root position.
//!
//! ## Example
//! ```rust
//! use keychords::chord::{chord_notes, chord_symbol, ChordType};
//!
//! let notes = chord_notes("C", ChordType::Minor7, 0, false);
//! assert_eq!(notes, vec!["C", "D#", "G", "A#"]);
//! assert_eq!(chord_symbol("C", ChordType::Minor7), "Cm7");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KeysError;
use crate::note::PitchClass;

/// Semitone offset from a chord or scale root.
pub type Interval = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChordType {
    Major,
    Minor,
    Diminished,
    Augmented,
    Major7,
    Minor7,
    Dominant7,
    Diminished7,
    HalfDiminished7,
    MinorMajor7,
    Augmented7,
    AugmentedMajor7,
    Major6,
    Minor6,
    Sus2,
    Sus4,
    Add9,
    MinorAdd9,
    Dominant9,
    Major9,
    Minor9,
    Dominant11,
    Major11,
    Minor11,
    Dominant13,
    Major13,
    Minor13,
}

impl ChordType {
    pub const ALL: [ChordType; 27] = [
        ChordType::Major,
        ChordType::Minor,
        ChordType::Diminished,
        ChordType::Augmented,
        ChordType::Major7,
        ChordType::Minor7,
        ChordType::Dominant7,
        ChordType::Diminished7,
        ChordType::HalfDiminished7,
        ChordType::MinorMajor7,
        ChordType::Augmented7,
        ChordType::AugmentedMajor7,
        ChordType::Major6,
        ChordType::Minor6,
        ChordType::Sus2,
        ChordType::Sus4,
        ChordType::Add9,
        ChordType::MinorAdd9,
        ChordType::Dominant9,
        ChordType::Major9,
        ChordType::Minor9,
        ChordType::Dominant11,
        ChordType::Major11,
        ChordType::Minor11,
        ChordType::Dominant13,
        ChordType::Major13,
        ChordType::Minor13,
    ];

    /// Table key, e.g. `"halfDiminished7"`
    pub fn key(self) -> &'static str {
        match self {
            ChordType::Major => "major",
            ChordType::Minor => "minor",
            ChordType::Diminished => "diminished",
            ChordType::Augmented => "augmented",
            ChordType::Major7 => "major7",
            ChordType::Minor7 => "minor7",
            ChordType::Dominant7 => "dominant7",
            ChordType::Diminished7 => "diminished7",
            ChordType::HalfDiminished7 => "halfDiminished7",
            ChordType::MinorMajor7 => "minorMajor7",
            ChordType::Augmented7 => "augmented7",
            ChordType::AugmentedMajor7 => "augmentedMajor7",
            ChordType::Major6 => "major6",
            ChordType::Minor6 => "minor6",
            ChordType::Sus2 => "sus2",
            ChordType::Sus4 => "sus4",
            ChordType::Add9 => "add9",
            ChordType::MinorAdd9 => "minorAdd9",
            ChordType::Dominant9 => "dominant9",
            ChordType::Major9 => "major9",
            ChordType::Minor9 => "minor9",
            ChordType::Dominant11 => "dominant11",
            ChordType::Major11 => "major11",
            ChordType::Minor11 => "minor11",
            ChordType::Dominant13 => "dominant13",
            ChordType::Major13 => "major13",
            ChordType::Minor13 => "minor13",
        }
    }

    /// Look up a chord type by its table key. Unknown keys give `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.key() == key)
    }

    /// Semitone intervals above the root
    pub fn intervals(self) -> &'static [Interval] {
        match self {
            ChordType::Major => &[0, 4, 7],
            ChordType::Minor => &[0, 3, 7],
            ChordType::Diminished => &[0, 3, 6],
            ChordType::Augmented => &[0, 4, 8],
            ChordType::Major7 => &[0, 4, 7, 11],
            ChordType::Minor7 => &[0, 3, 7, 10],
            ChordType::Dominant7 => &[0, 4, 7, 10],
            ChordType::Diminished7 => &[0, 3, 6, 9],
            ChordType::HalfDiminished7 => &[0, 3, 6, 10],
            ChordType::MinorMajor7 => &[0, 3, 7, 11],
            ChordType::Augmented7 => &[0, 4, 8, 10],
            ChordType::AugmentedMajor7 => &[0, 4, 8, 11],
            ChordType::Major6 => &[0, 4, 7, 9],
            ChordType::Minor6 => &[0, 3, 7, 9],
            ChordType::Sus2 => &[0, 2, 7],
            ChordType::Sus4 => &[0, 5, 7],
            ChordType::Add9 => &[0, 4, 7, 14],
            ChordType::MinorAdd9 => &[0, 3, 7, 14],
            ChordType::Dominant9 => &[0, 4, 7, 10, 14],
            ChordType::Major9 => &[0, 4, 7, 11, 14],
            ChordType::Minor9 => &[0, 3, 7, 10, 14],
            ChordType::Dominant11 => &[0, 4, 7, 10, 14, 17],
            ChordType::Major11 => &[0, 4, 7, 11, 14, 17],
            ChordType::Minor11 => &[0, 3, 7, 10, 14, 17],
            ChordType::Dominant13 => &[0, 4, 7, 10, 14, 17, 21],
            ChordType::Major13 => &[0, 4, 7, 11, 14, 17, 21],
            ChordType::Minor13 => &[0, 3, 7, 10, 14, 17, 21],
        }
    }

    /// Suffix appended to the root in chord symbols (`""` for major)
    pub fn symbol(self) -> &'static str {
        match self {
            ChordType::Major => "",
            ChordType::Minor => "m",
            ChordType::Diminished => "dim",
            ChordType::Augmented => "aug",
            ChordType::Major7 => "maj7",
            ChordType::Minor7 => "m7",
            ChordType::Dominant7 => "7",
            ChordType::Diminished7 => "dim7",
            ChordType::HalfDiminished7 => "m7b5",
            ChordType::MinorMajor7 => "mMaj7",
            ChordType::Augmented7 => "aug7",
            ChordType::AugmentedMajor7 => "augMaj7",
            ChordType::Major6 => "6",
            ChordType::Minor6 => "m6",
            ChordType::Sus2 => "sus2",
            ChordType::Sus4 => "sus4",
            ChordType::Add9 => "add9",
            ChordType::MinorAdd9 => "madd9",
            ChordType::Dominant9 => "9",
            ChordType::Major9 => "maj9",
            ChordType::Minor9 => "m9",
            ChordType::Dominant11 => "11",
            ChordType::Major11 => "maj11",
            ChordType::Minor11 => "m11",
            ChordType::Dominant13 => "13",
            ChordType::Major13 => "maj13",
            ChordType::Minor13 => "m13",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ChordType::Major => "Major",
            ChordType::Minor => "Minor",
            ChordType::Diminished => "Diminished",
            ChordType::Augmented => "Augmented",
            ChordType::Major7 => "Major 7th",
            ChordType::Minor7 => "Minor 7th",
            ChordType::Dominant7 => "Dominant 7th",
            ChordType::Diminished7 => "Diminished 7th",
            ChordType::HalfDiminished7 => "Half-Diminished 7th",
            ChordType::MinorMajor7 => "Minor Major 7th",
            ChordType::Augmented7 => "Augmented 7th",
            ChordType::AugmentedMajor7 => "Augmented Major 7th",
            ChordType::Major6 => "Major 6th",
            ChordType::Minor6 => "Minor 6th",
            ChordType::Sus2 => "Suspended 2nd",
            ChordType::Sus4 => "Suspended 4th",
            ChordType::Add9 => "Add 9",
            ChordType::MinorAdd9 => "Minor Add 9",
            ChordType::Dominant9 => "Dominant 9th",
            ChordType::Major9 => "Major 9th",
            ChordType::Minor9 => "Minor 9th",
            ChordType::Dominant11 => "Dominant 11th",
            ChordType::Major11 => "Major 11th",
            ChordType::Minor11 => "Minor 11th",
            ChordType::Dominant13 => "Dominant 13th",
            ChordType::Major13 => "Major 13th",
            ChordType::Minor13 => "Minor 13th",
        }
    }

    pub fn note_count(self) -> usize {
        self.intervals().len()
    }

    /// Extensions offered for this type when it is used as a base triad.
    ///
    /// Only the three diatonic triad qualities have extension families; the
    /// dominant family is chosen by [`available_extensions`] from the scale degree.
    fn extension_family(self) -> &'static [ChordType] {
        match self {
            ChordType::Major => &[
                ChordType::Major7,
                ChordType::Major6,
                ChordType::Add9,
                ChordType::Major9,
                ChordType::Major11,
                ChordType::Major13,
                ChordType::Sus2,
                ChordType::Sus4,
            ],
            ChordType::Minor => &[
                ChordType::Minor7,
                ChordType::Minor6,
                ChordType::MinorAdd9,
                ChordType::Minor9,
                ChordType::Minor11,
                ChordType::Minor13,
            ],
            ChordType::Diminished => &[ChordType::Diminished7, ChordType::HalfDiminished7],
            _ => &[],
        }
    }
}

const DOMINANT_FAMILY: [ChordType; 4] = [
    ChordType::Dominant7,
    ChordType::Dominant9,
    ChordType::Dominant11,
    ChordType::Dominant13,
];

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ChordType {
    type Err = KeysError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s.trim()).ok_or_else(|| KeysError::UnknownChordType(s.to_string()))
    }
}

/// A chord instance: root, type and inversion.
///
/// Chords are cheap values recomputed on demand; they are never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chord {
    pub root: PitchClass,
    pub chord_type: ChordType,
    pub inversion: usize,
}

impl Chord {
    /// Build a chord, clamping out-of-range inversions to root position.
    pub fn new(root: PitchClass, chord_type: ChordType, inversion: usize) -> Self {
        let inversion = if inversion < chord_type.note_count() {
            inversion
        } else {
            0
        };
        Self {
            root,
            chord_type,
            inversion,
        }
    }

    pub fn pitch_classes(&self) -> Vec<PitchClass> {
        let mut notes: Vec<PitchClass> = self
            .chord_type
            .intervals()
            .iter()
            .map(|&interval| self.root.transpose(interval as i32))
            .collect();
        notes.rotate_left(self.inversion);
        notes
    }

    pub fn notes(&self, prefer_flats: bool) -> Vec<String> {
        self.pitch_classes()
            .into_iter()
            .map(|pc| pc.spell(prefer_flats).to_string())
            .collect()
    }

    pub fn contains(&self, note: PitchClass) -> bool {
        self.chord_type
            .intervals()
            .iter()
            .any(|&interval| self.root.transpose(interval as i32) == note)
    }

    pub fn symbol(&self, prefer_flats: bool) -> String {
        chord_symbol(self.root.spell(prefer_flats), self.chord_type)
    }

    pub fn name(&self, prefer_flats: bool) -> String {
        chord_name(self.root.spell(prefer_flats), self.chord_type)
    }
}

/// Notes of a chord, rotated left by `inversion`.
///
/// The root keeps the caller's spelling family: every chord tone is spelled with
/// sharps unless `prefer_flats` is set. An unrecognized root yields no notes.
pub fn chord_notes(root: &str, chord_type: ChordType, inversion: usize, prefer_flats: bool) -> Vec<String> {
    match PitchClass::parse(root) {
        Some(pc) => Chord::new(pc, chord_type, inversion).notes(prefer_flats),
        None => vec![],
    }
}

/// Chord symbol such as `"Cmaj7"`, `"Dm"`, `"G7"`. The root is used as spelled.
pub fn chord_symbol(root: &str, chord_type: ChordType) -> String {
    format!("{}{}", root, chord_type.symbol())
}

/// Full chord name such as `"C Major 7th"`.
pub fn chord_name(root: &str, chord_type: ChordType) -> String {
    format!("{} {}", root, chord_type.name())
}

/// Human label for an inversion number.
pub fn inversion_name(inversion: usize) -> String {
    match inversion {
        0 => "Root Position".to_string(),
        1 => "1st Inversion".to_string(),
        2 => "2nd Inversion".to_string(),
        3 => "3rd Inversion".to_string(),
        n => format!("{}th Inversion", n),
    }
}

/// One entry of the inversion picker
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InversionOption {
    pub index: usize,
    pub label: String,
}

/// One inversion per chord tone, starting with root position.
pub fn available_inversions(chord_type: ChordType) -> Vec<InversionOption> {
    (0..chord_type.note_count())
        .map(|index| InversionOption {
            index,
            label: inversion_name(index),
        })
        .collect()
}

/// One entry of the extension picker
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionOption {
    pub chord_type: ChordType,
    pub label: String,
}

/// Extensions for a base triad at a given scale degree (1-7).
///
/// The first entry is always the triad itself. A major triad on degree 5 is the
/// dominant of the key and is offered the dominant family (7, 9, 11, 13) instead
/// of the major-seventh family.
pub fn available_extensions(base: ChordType, scale_degree: u8) -> Vec<ExtensionOption> {
    let mut extensions = vec![ExtensionOption {
        chord_type: base,
        label: "Triad (no extension)".to_string(),
    }];

    let family: &[ChordType] = if scale_degree == 5 && base == ChordType::Major {
        &DOMINANT_FAMILY
    } else {
        base.extension_family()
    };

    extensions.extend(family.iter().map(|&chord_type| ExtensionOption {
        chord_type,
        label: chord_type.name().to_string(),
    }));
    extensions
}
