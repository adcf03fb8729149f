//! # Chord Voicing Store
//!
//! Curated guitar fingerings per chord symbol, and the normalization used to draw
//! them in a fixed-height chord box.
//!
//! The built-in table ships as `data/voicings.yaml` and is parsed once, on first
//! access. Lookups are keyed by chord symbol (`"C"`, `"F#m"`, `"G7"`); a spelling
//! missing from the table is retried with its enharmonic twin, so `"Db"` finds the
//! `"C#"` shapes.
//!
//! ```rust
//! use keychords::chord::ChordType;
//! use keychords::voicing::{display_voicing, voicings};
//!
//! let shapes = voicings("Db", ChordType::Major);
//! assert!(!shapes.is_empty());
//!
//! let display = display_voicing(&shapes[0]);
//! assert!(display.show_position);
//! assert_eq!(display.frets[1], 1);
//! ```

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::chord::ChordType;
use crate::error::KeysError;
use crate::fretboard::STRING_COUNT;
use crate::note;

/// Fret value of a muted string
pub const MUTED: i8 = -1;

/// Smallest chord box drawn, in frets
const MIN_DISPLAY_FRETS: u8 = 4;

const BUILTIN_TABLE: &str = include_str!("../data/voicings.yaml");

lazy_static! {
    static ref BUILTIN: VoicingStore = VoicingStore::from_yaml(BUILTIN_TABLE).unwrap_or_else(|e| {
        log::error!("Failed to load built-in voicing table: {}", e);
        VoicingStore::default()
    });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barre {
    pub fret: u8,
    pub start_string: u8,
    pub end_string: u8,
}

/// One playable shape of a chord.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordVoicing {
    /// Per string, low E first: `-1` muted, `0` open, otherwise the fret
    pub frets: [i8; STRING_COUNT],
    #[serde(default)]
    pub fingers: Option<[Option<u8>; STRING_COUNT]>,
    #[serde(default)]
    pub barre: Option<Barre>,
    pub base_fret: u8,
    #[serde(default)]
    pub name: Option<String>,
}

impl ChordVoicing {
    /// Frets actually pressed (open and muted strings excluded).
    pub fn fretted(&self) -> impl Iterator<Item = u8> + '_ {
        self.frets.iter().filter(|&&f| f > 0).map(|&f| f as u8)
    }

    /// Mean pressed fret, or `None` for a voicing of open and muted strings only.
    pub fn mean_fret(&self) -> Option<f32> {
        let (sum, count) = self
            .fretted()
            .fold((0u32, 0u32), |(sum, count), f| (sum + f as u32, count + 1));
        (count > 0).then(|| sum as f32 / count as f32)
    }
}

/// Table-key suffix for a chord type. Types without shapes of their own map to
/// the plain major key.
pub fn table_suffix(chord_type: ChordType) -> &'static str {
    match chord_type {
        ChordType::Minor => "m",
        ChordType::Diminished => "dim",
        ChordType::Major7 => "maj7",
        ChordType::Minor7 => "m7",
        ChordType::Dominant7 => "7",
        _ => "",
    }
}

/// Voicings keyed by chord symbol
#[derive(Debug, Clone, Default)]
pub struct VoicingStore {
    table: HashMap<String, Vec<ChordVoicing>>,
}

impl VoicingStore {
    pub fn from_yaml(content: &str) -> Result<Self, KeysError> {
        let table: HashMap<String, Vec<ChordVoicing>> =
            serde_yaml::from_str(content).map_err(|e| KeysError::VoicingTableError(e.to_string()))?;
        log::debug!("Loaded voicings for {} chord symbols", table.len());
        Ok(Self { table })
    }

    /// The table shipped with the crate.
    pub fn builtin() -> &'static VoicingStore {
        &BUILTIN
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// All shapes for `root` + `suffix`, retrying the enharmonic spelling of the root.
    pub fn lookup(&self, root: &str, suffix: &str) -> &[ChordVoicing] {
        if let Some(found) = self.table.get(&format!("{}{}", root, suffix)) {
            return found;
        }
        note::enharmonic_equivalent(root)
            .and_then(|alt| self.table.get(&format!("{}{}", alt, suffix)))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn voicings(&self, root: &str, chord_type: ChordType) -> &[ChordVoicing] {
        self.lookup(root, table_suffix(chord_type))
    }

    /// One voicing by position in the list; the index is clamped to the last shape.
    pub fn voicing(&self, root: &str, chord_type: ChordType, index: usize) -> Option<&ChordVoicing> {
        let shapes = self.voicings(root, chord_type);
        shapes.get(index.min(shapes.len().saturating_sub(1)))
    }
}

/// Built-in voicings for a chord
pub fn voicings(root: &str, chord_type: ChordType) -> &'static [ChordVoicing] {
    VoicingStore::builtin().voicings(root, chord_type)
}

pub fn voicing(root: &str, chord_type: ChordType, index: usize) -> Option<&'static ChordVoicing> {
    VoicingStore::builtin().voicing(root, chord_type, index)
}

/// A voicing re-based for a chord box
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayVoicing {
    pub frets: [i8; STRING_COUNT],
    pub original_frets: [i8; STRING_COUNT],
    pub fingers: Option<[Option<u8>; STRING_COUNT]>,
    pub barre: Option<Barre>,
    pub base_fret: u8,
    /// Whether the box starts above the nut and needs a position label
    pub show_position: bool,
    pub num_frets: u8,
    pub name: String,
}

/// Shift a voicing so its lowest pressed fret is drawn at box fret 1.
///
/// Voicings that already reach fret 1 (or use only open strings) keep their frets.
/// Muted and open strings are never shifted.
pub fn display_voicing(voicing: &ChordVoicing) -> DisplayVoicing {
    let min = voicing.fretted().min().unwrap_or(1);
    let max = voicing.fretted().max().unwrap_or(1);

    let show_position = min > 1;
    let base_fret = if show_position { min } else { 1 };
    let shift = |fret: u8| fret.saturating_sub(base_fret) + 1;

    let mut frets = voicing.frets;
    for f in frets.iter_mut().filter(|f| **f > 0) {
        *f = shift(*f as u8) as i8;
    }

    DisplayVoicing {
        frets,
        original_frets: voicing.frets,
        fingers: voicing.fingers,
        barre: voicing.barre.map(|barre| Barre {
            fret: shift(barre.fret),
            ..barre
        }),
        base_fret,
        show_position,
        num_frets: MIN_DISPLAY_FRETS.max(max - min + 2),
        name: voicing.name.clone().unwrap_or_else(|| "Standard".to_string()),
    }
}
