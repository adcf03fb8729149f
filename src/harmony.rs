//! # Diatonic Harmony
//!
//! Keys, the seven chords built on each scale degree, and the extension menu the
//! chord popup offers for each degree.
//!
//! ## Keys
//! A [`Key`] is a root pitch class plus a [`Mode`]. It also remembers whether it
//! is spelled with flats: an explicit accidental in the key name wins (`"Db"` →
//! flats, `"C#"` → sharps), otherwise the conventional key signature decides
//! (F major and D/G/C/F minor use flats).
//!
//! ## Degrees
//! | Degree | Major | Minor |
//! |---|---|---|
//! | 1 | I (major) | i (minor) |
//! | 2 | ii (minor) | ii° (diminished) |
//! | 3 | iii (minor) | III (major) |
//! | 4 | IV (major) | iv (minor) |
//! | 5 | V (major) | v (minor) |
//! | 6 | vi (minor) | VI (major) |
//! | 7 | vii° (diminished) | VII (major) |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::camelot::CamelotCode;
use crate::chord::{Chord, ChordType, Interval};
use crate::error::KeysError;
use crate::note::PitchClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Major,
    Minor,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::Major => "Major",
            Mode::Minor => "Minor",
        }
    }

    /// Diatonic scale intervals (natural minor for `Minor`)
    pub fn intervals(self) -> &'static [Interval; 7] {
        match self {
            Mode::Major => &[0, 2, 4, 5, 7, 9, 11],
            Mode::Minor => &[0, 2, 3, 5, 7, 8, 10],
        }
    }

    /// Triad quality on each degree, index 0 = degree 1
    fn triads(self) -> &'static [ChordType; 7] {
        match self {
            Mode::Major => &[
                ChordType::Major,
                ChordType::Minor,
                ChordType::Minor,
                ChordType::Major,
                ChordType::Major,
                ChordType::Minor,
                ChordType::Diminished,
            ],
            Mode::Minor => &[
                ChordType::Minor,
                ChordType::Diminished,
                ChordType::Major,
                ChordType::Minor,
                ChordType::Minor,
                ChordType::Major,
                ChordType::Major,
            ],
        }
    }

    fn numerals(self) -> &'static [&'static str; 7] {
        match self {
            Mode::Major => &["I", "ii", "iii", "IV", "V", "vi", "vii°"],
            Mode::Minor => &["i", "ii°", "III", "iv", "v", "VI", "VII"],
        }
    }
}

/// Roman numeral for a degree (1-7) in the given mode.
pub fn roman_numeral(degree: u8, mode: Mode) -> Option<&'static str> {
    let index = (degree as usize).checked_sub(1)?;
    mode.numerals().get(index).copied()
}

/// Scale degree for a roman numeral, in either case, with or without `°`.
///
/// Unknown numerals map to degree 1.
pub fn degree_from_numeral(numeral: &str) -> u8 {
    let upper = numeral.trim().trim_end_matches('°').to_uppercase();
    match upper.as_str() {
        "I" => 1,
        "II" => 2,
        "III" => 3,
        "IV" => 4,
        "V" => 5,
        "VI" => 6,
        "VII" => 7,
        _ => 1,
    }
}

/// Conventional key-signature spelling for keys named without an accidental.
fn conventional_prefers_flats(root: PitchClass, mode: Mode) -> bool {
    use PitchClass::*;
    match mode {
        Mode::Major => matches!(root, F | ASharp | DSharp | GSharp | CSharp),
        Mode::Minor => matches!(root, D | G | C | F | ASharp | DSharp),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    pub root: PitchClass,
    pub mode: Mode,
    pub prefer_flats: bool,
}

impl Key {
    /// Key with the conventional spelling for its root and mode.
    pub fn new(root: PitchClass, mode: Mode) -> Self {
        Self {
            root,
            mode,
            prefer_flats: conventional_prefers_flats(root, mode),
        }
    }

    /// Parse `"C Major"`, `"A minor"`, `"Am"`, `"F#m"`, `"Bb"`, `"G♯m"`.
    pub fn parse(name: &str) -> Option<Self> {
        let cleaned = name.trim().replace('♯', "#").replace('♭', "b");
        let mut words = cleaned.split_whitespace();
        let first = words.next()?;
        let mode_word = words.next();
        if words.next().is_some() {
            return None;
        }

        let (note, minor_marker) = match first.strip_suffix('m') {
            Some(note) if !note.is_empty() => (note, true),
            _ => (first, false),
        };

        let mode = match mode_word.map(|w| w.to_lowercase()) {
            None => {
                if minor_marker {
                    Mode::Minor
                } else {
                    Mode::Major
                }
            }
            Some(w) if !minor_marker && (w == "major" || w == "maj") => Mode::Major,
            Some(w) if !minor_marker && (w == "minor" || w == "min") => Mode::Minor,
            Some(_) => return None,
        };

        let root = PitchClass::parse(note)?;
        let prefer_flats = if note.contains('b') {
            true
        } else if note.contains('#') {
            false
        } else {
            conventional_prefers_flats(root, mode)
        };

        Some(Self {
            root,
            mode,
            prefer_flats,
        })
    }

    pub fn root_name(&self) -> &'static str {
        self.root.spell(self.prefer_flats)
    }

    /// Display name, e.g. `"C Major"`, `"Bb Minor"`
    pub fn name(&self) -> String {
        format!("{} {}", self.root_name(), self.mode.name())
    }

    /// Chord-style short name, e.g. `"C"`, `"Am"`
    pub fn short_name(&self) -> String {
        match self.mode {
            Mode::Major => self.root_name().to_string(),
            Mode::Minor => format!("{}m", self.root_name()),
        }
    }

    pub fn scale(&self) -> Vec<PitchClass> {
        self.mode
            .intervals()
            .iter()
            .map(|&interval| self.root.transpose(interval as i32))
            .collect()
    }

    pub fn scale_notes(&self) -> Vec<String> {
        self.scale()
            .into_iter()
            .map(|pc| pc.spell(self.prefer_flats).to_string())
            .collect()
    }

    /// Relative major/minor sharing the same key signature.
    pub fn relative(&self) -> Key {
        let (root, mode) = match self.mode {
            Mode::Major => (self.root.transpose(-3), Mode::Minor),
            Mode::Minor => (self.root.transpose(3), Mode::Major),
        };
        Key {
            root,
            mode,
            prefer_flats: self.prefer_flats,
        }
    }

    pub fn camelot(&self) -> CamelotCode {
        CamelotCode::for_key(self)
    }

    /// The seven triads of the key in degree order.
    pub fn diatonic_chords(&self) -> Vec<DiatonicChord> {
        self.scale()
            .into_iter()
            .zip(self.mode.triads().iter())
            .enumerate()
            .map(|(i, (root, &chord_type))| {
                let degree = i as u8 + 1;
                let chord = Chord::new(root, chord_type, 0);
                DiatonicChord {
                    degree,
                    numeral: self.mode.numerals()[i].to_string(),
                    symbol: chord.symbol(self.prefer_flats),
                    name: chord.name(self.prefer_flats),
                    notes: chord.notes(self.prefer_flats),
                    chord,
                }
            })
            .collect()
    }

    /// Summary used by key detail views and the CLI.
    pub fn info(&self) -> KeyInfo {
        let relative = self.relative();
        KeyInfo {
            name: self.name(),
            short_name: self.short_name(),
            mode: self.mode,
            notes: self.scale_notes(),
            relative: relative.name(),
            camelot: self.camelot().to_string(),
            prefer_flats: self.prefer_flats,
            chords: self.diatonic_chords(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root_name(), self.mode.name())
    }
}

impl FromStr for Key {
    type Err = KeysError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| KeysError::UnknownKey(s.to_string()))
    }
}

/// Whether a key name is conventionally written with flats.
///
/// ```
/// use keychords::harmony::key_prefers_flats;
///
/// assert!(key_prefers_flats("Bb Major"));
/// assert!(key_prefers_flats("Dm"));
/// assert!(!key_prefers_flats("F# Major"));
/// assert!(!key_prefers_flats("not a key"));
/// ```
pub fn key_prefers_flats(key_name: &str) -> bool {
    Key::parse(key_name).map(|k| k.prefer_flats).unwrap_or(false)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiatonicChord {
    pub degree: u8,
    pub numeral: String,
    pub chord: Chord,
    pub symbol: String,
    pub name: String,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyInfo {
    pub name: String,
    pub short_name: String,
    pub mode: Mode,
    pub notes: Vec<String>,
    pub relative: String,
    pub camelot: String,
    pub prefer_flats: bool,
    pub chords: Vec<DiatonicChord>,
}

/// One entry of the per-degree chord extension menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordExtension {
    pub chord_type: ChordType,
    pub display_name: &'static str,
}

const fn ext(chord_type: ChordType, display_name: &'static str) -> ChordExtension {
    ChordExtension {
        chord_type,
        display_name,
    }
}

/// Chord types offered when a chord on `degree` is opened in a key of `mode`.
///
/// Only types with guitar voicings are listed. Tonic and subdominant major chords
/// show their dominant-7th shapes under a "6" label; the leading-tone chord shows
/// its minor-7th shape as "m7♭5". Unknown degrees fall back to a plain major triad.
pub fn extensions_for_degree(degree: u8, mode: Mode) -> Vec<ChordExtension> {
    use ChordType::*;
    match (mode, degree) {
        (Mode::Major, 1) | (Mode::Major, 4) => vec![ext(Major, ""), ext(Major7, "maj7"), ext(Dominant7, "6")],
        (Mode::Major, 2) | (Mode::Major, 3) | (Mode::Major, 6) => vec![ext(Minor, "m"), ext(Minor7, "m7")],
        (Mode::Major, 5) => vec![ext(Major, ""), ext(Dominant7, "7")],
        (Mode::Major, 7) => vec![ext(Diminished, "dim"), ext(Minor7, "m7♭5")],
        (Mode::Minor, 1) | (Mode::Minor, 4) => vec![ext(Minor, "m"), ext(Minor7, "m7")],
        (Mode::Minor, 2) => vec![ext(Diminished, "dim"), ext(Minor7, "m7♭5")],
        (Mode::Minor, 3) | (Mode::Minor, 6) => vec![ext(Major, ""), ext(Major7, "maj7")],
        (Mode::Minor, 5) => vec![ext(Minor, "m"), ext(Dominant7, "7")],
        (Mode::Minor, 7) => vec![ext(Major, ""), ext(Dominant7, "7")],
        _ => vec![ext(Major, "")],
    }
}
