//! # Public API
//!
//! String-keyed entry points for presentation layers. Every function here accepts
//! note, chord-type and key names as plain strings and never fails: unrecognized
//! input degrades to an empty result, a pass-through string or a safe default, so
//! a view always has something to render.
//!
//! ## Functions
//!
//! - [`transpose()`] / [`chord_notes()`] / [`chord_symbol()`] / [`chord_name()`] / [`inversions()`] - note and chord math
//! - [`scale_pattern()`] / [`find_root_position_fret()`] - fretboard mapping in standard tuning
//! - [`voicings()`] / [`display_voicing()`] - chord shapes
//! - [`key_info()`] / [`select_voicing_in_key()`] / [`camelot_neighbours()`] - key context
//!
//! ## Typical Usage
//!
//! ```rust
//! use keychords::{chord_notes, chord_symbol, scale_pattern};
//!
//! assert_eq!(chord_notes("C", "minor7", 0, false), vec!["C", "D#", "G", "A#"]);
//! assert_eq!(chord_symbol("C", "minor7"), "Cm7");
//!
//! let pattern = scale_pattern("A", "minorPentatonic", 5, 8, false);
//! assert!(pattern.iter().any(|p| p.fret == 5 && p.string == 0));
//! ```
//!
//! For a custom tuning use [`crate::FretboardConfig`] and the
//! [`crate::fretboard::Fretboard`] methods directly.

use crate::camelot::CamelotCode;
use crate::chord::{self, ChordType, InversionOption};
use crate::fretboard::{FretPosition, Fretboard, ScaleType};
use crate::harmony::{Key, KeyInfo};
use crate::note;
use crate::selector::{self, VoicingMatch};
use crate::voicing::{self, ChordVoicing, DisplayVoicing, VoicingStore};

/// Transpose a note, wrapping modulo 12. Unknown notes pass through unchanged.
pub fn transpose(note: &str, semitones: i32, prefer_flats: bool) -> String {
    note::transpose(note, semitones, prefer_flats)
}

/// Chord tones rotated by `inversion`.
///
/// Returns an empty list for an unknown root or chord type. An inversion past the
/// last chord tone falls back to root position.
///
/// # Example
/// ```rust
/// use keychords::chord_notes;
///
/// assert_eq!(chord_notes("C", "major", 1, false), vec!["E", "G", "C"]);
/// assert_eq!(chord_notes("C", "major", 7, false), vec!["C", "E", "G"]);
/// assert!(chord_notes("C", "power", 0, false).is_empty());
/// ```
pub fn chord_notes(root: &str, chord_type: &str, inversion: usize, prefer_flats: bool) -> Vec<String> {
    match ChordType::from_key(chord_type) {
        Some(chord_type) => chord::chord_notes(root, chord_type, inversion, prefer_flats),
        None => vec![],
    }
}

/// Chord symbol (`"Cm7"`). An unknown chord type yields the bare root.
pub fn chord_symbol(root: &str, chord_type: &str) -> String {
    match ChordType::from_key(chord_type) {
        Some(chord_type) => chord::chord_symbol(root, chord_type),
        None => root.to_string(),
    }
}

/// Chord name (`"C Minor 7th"`). An unknown chord type yields the bare root.
pub fn chord_name(root: &str, chord_type: &str) -> String {
    match ChordType::from_key(chord_type) {
        Some(chord_type) => chord::chord_name(root, chord_type),
        None => root.to_string(),
    }
}

/// Inversion picker entries. An unknown chord type offers root position only.
pub fn inversions(chord_type: &str) -> Vec<InversionOption> {
    match ChordType::from_key(chord_type) {
        Some(chord_type) => chord::available_inversions(chord_type),
        None => vec![InversionOption {
            index: 0,
            label: chord::inversion_name(0),
        }],
    }
}

/// Scale positions on a standard-tuned neck between `start_fret` and `end_fret`.
///
/// The range is normalized (negatives clamp to 0, reversed bounds swap). Unknown
/// roots or scale types yield an empty pattern.
pub fn scale_pattern(
    root: &str,
    scale_type: &str,
    start_fret: i32,
    end_fret: i32,
    prefer_flats: bool,
) -> Vec<FretPosition> {
    match ScaleType::from_key(scale_type) {
        Some(scale_type) => {
            Fretboard::standard().scale_pattern(root, scale_type, start_fret, end_fret, prefer_flats)
        }
        None => vec![],
    }
}

/// Lowest fret (0-12) of the root on the two bass strings; 0 for unknown roots.
pub fn find_root_position_fret(root: &str) -> u8 {
    Fretboard::standard().find_root_position_fret(root)
}

/// Built-in shapes for a chord. Chord types without shapes of their own, and
/// unknown type names, resolve to the major shapes of the root.
pub fn voicings(root: &str, chord_type: &str) -> &'static [ChordVoicing] {
    let suffix = ChordType::from_key(chord_type)
        .map(voicing::table_suffix)
        .unwrap_or("");
    VoicingStore::builtin().lookup(root, suffix)
}

pub fn display_voicing(voicing: &ChordVoicing) -> DisplayVoicing {
    voicing::display_voicing(voicing)
}

/// Scale, relative key, Camelot code and diatonic chords for a key name.
///
/// # Example
/// ```rust
/// use keychords::key_info;
///
/// let info = key_info("A Minor").unwrap();
/// assert_eq!(info.relative, "C Major");
/// assert_eq!(info.camelot, "8A");
/// assert!(key_info("H Major").is_none());
/// ```
pub fn key_info(name: &str) -> Option<KeyInfo> {
    Key::parse(name).map(|key| key.info())
}

/// Tap selection over the diatonic chords of `key` on a standard-tuned neck.
pub fn select_voicing_in_key(key: &str, string: usize, fret: u8) -> Option<VoicingMatch> {
    let key = Key::parse(key)?;
    selector::select_voicing_in_key(&key, &Fretboard::standard(), string, fret)
}

/// Harmonically compatible Camelot codes; empty for an invalid code.
pub fn camelot_neighbours(code: &str) -> Vec<CamelotCode> {
    CamelotCode::parse(code)
        .map(|code| code.neighbours())
        .unwrap_or_default()
}
