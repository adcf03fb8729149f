//! # Voicing Selection
//!
//! Picks the chord shape to show when a fretted note is tapped. A shape that
//! actually plays the tapped string at the tapped fret beats one that only sits
//! nearby on the neck, and a chord rooted on the tapped note beats one that merely
//! contains it.
//!
//! Rules, in priority order:
//! 1. `ExactRoot` - a chord rooted on the note has a shape using that string and fret
//! 2. `ClosestRoot` - the rooted chord's shape whose pressed frets average nearest the tap
//! 3. `ExactChordTone` - as 1, for any chord containing the note
//! 4. `ClosestChordTone` - as 2, for the first chord containing the note
//!
//! The shape table is written for standard tuning, so any other tuning selects nothing.

use serde::Serialize;

use crate::chord::Chord;
use crate::fretboard::{Fretboard, STANDARD_TUNING};
use crate::harmony::Key;
use crate::voicing::{ChordVoicing, VoicingStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchRule {
    ExactRoot,
    ClosestRoot,
    ExactChordTone,
    ClosestChordTone,
}

/// Outcome of a tap: which chord, which of its shapes, and why.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoicingMatch {
    pub chord: Chord,
    pub symbol: String,
    pub voicing_index: usize,
    pub voicing: ChordVoicing,
    pub rule: MatchRule,
}

/// First shape that presses `fret` on `string`.
fn exact_index(voicings: &[ChordVoicing], string: usize, fret: u8) -> Option<usize> {
    let fret = i8::try_from(fret).ok()?;
    voicings
        .iter()
        .position(|v| v.frets.get(string) == Some(&fret))
}

/// Shape whose mean pressed fret is nearest to `fret`; ties keep the earlier shape.
fn closest_index(voicings: &[ChordVoicing], fret: u8) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, voicing) in voicings.iter().enumerate() {
        let mean = match voicing.mean_fret() {
            Some(mean) => mean,
            None => continue,
        };
        let distance = (mean - fret as f32).abs();
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((i, distance));
        }
    }
    best.map(|(i, _)| i)
}

/// Index of the shape to open for a tap at (`string`, `fret`).
///
/// Prefers a shape that presses exactly that position, then the nearest shape by
/// mean pressed fret. Returns 0 when no shape qualifies.
pub fn best_voicing_index(voicings: &[ChordVoicing], string: usize, fret: u8) -> usize {
    exact_index(voicings, string, fret)
        .or_else(|| closest_index(voicings, fret))
        .unwrap_or(0)
}

/// Choose a chord and shape among `candidates` for a tap on the neck.
///
/// Returns `None` when the neck is not in standard tuning, the position is off
/// the neck, no candidate contains the tapped note, or none of the containing
/// chords has shapes.
pub fn select_voicing(
    store: &VoicingStore,
    fretboard: &Fretboard,
    candidates: &[Chord],
    string: usize,
    fret: u8,
) -> Option<VoicingMatch> {
    if fretboard.tuning() != &STANDARD_TUNING {
        log::debug!("tap {}@{}: shapes need standard tuning, got {:?}", string, fret, fretboard.tuning());
        return None;
    }
    let tapped = fretboard.pitch_at(string, fret)?;
    let shapes = |chord: &Chord| store.voicings(chord.root.name(), chord.chord_type);

    let rooted: Vec<&Chord> = candidates.iter().filter(|c| c.root == tapped).collect();
    let containing: Vec<&Chord> = candidates.iter().filter(|c| c.contains(tapped)).collect();

    let found = find_exact(&rooted, &shapes, string, fret, MatchRule::ExactRoot)
        .or_else(|| find_closest(&rooted, &shapes, fret, MatchRule::ClosestRoot))
        .or_else(|| find_exact(&containing, &shapes, string, fret, MatchRule::ExactChordTone))
        .or_else(|| find_closest(&containing, &shapes, fret, MatchRule::ClosestChordTone));

    match &found {
        Some(m) => log::debug!(
            "tap {}@{} ({}): {} shape {} via {:?}",
            string,
            fret,
            tapped,
            m.symbol,
            m.voicing_index,
            m.rule
        ),
        None => log::debug!("tap {}@{} ({}): no matching chord", string, fret, tapped),
    }
    found
}

fn find_exact<'a, F>(
    chords: &[&Chord],
    shapes: &F,
    string: usize,
    fret: u8,
    rule: MatchRule,
) -> Option<VoicingMatch>
where
    F: Fn(&Chord) -> &'a [ChordVoicing],
{
    chords.iter().find_map(|&chord| {
        let voicings = shapes(chord);
        exact_index(voicings, string, fret).map(|i| build_match(chord, voicings, i, rule))
    })
}

fn find_closest<'a, F>(chords: &[&Chord], shapes: &F, fret: u8, rule: MatchRule) -> Option<VoicingMatch>
where
    F: Fn(&Chord) -> &'a [ChordVoicing],
{
    chords.iter().find_map(|&chord| {
        let voicings = shapes(chord);
        if voicings.is_empty() {
            return None;
        }
        let index = closest_index(voicings, fret).unwrap_or(0);
        Some(build_match(chord, voicings, index, rule))
    })
}

fn build_match(chord: &Chord, voicings: &[ChordVoicing], index: usize, rule: MatchRule) -> VoicingMatch {
    VoicingMatch {
        chord: *chord,
        symbol: chord.symbol(false),
        voicing_index: index,
        voicing: voicings[index].clone(),
        rule,
    }
}

/// Tap selection over the seven diatonic chords of `key`.
pub fn select_voicing_in_key(key: &Key, fretboard: &Fretboard, string: usize, fret: u8) -> Option<VoicingMatch> {
    let candidates: Vec<Chord> = key.diatonic_chords().into_iter().map(|d| d.chord).collect();
    select_voicing(VoicingStore::builtin(), fretboard, &candidates, string, fret)
        .map(|m| VoicingMatch {
            symbol: m.chord.symbol(key.prefer_flats),
            ..m
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::ChordType;
    use crate::note::PitchClass;
    use crate::voicing::voicings;

    fn c_major() -> Key {
        Key::parse("C Major").unwrap()
    }

    #[test]
    fn test_exact_position_wins() {
        let c = voicings("C", ChordType::Major);
        // A-shape barre presses the G string at fret 5
        assert_eq!(best_voicing_index(c, 3, 5), 1);
        assert_eq!(best_voicing_index(c, 1, 3), 0);
    }

    #[test]
    fn test_closest_mean_fallback() {
        let c = voicings("C", ChordType::Major);
        // No C shape presses the D string at fret 3; C/G averages 2.25
        assert_eq!(best_voicing_index(c, 2, 3), 3);
        assert_eq!(best_voicing_index(c, 1, 15), 2);
    }

    #[test]
    fn test_best_index_defaults_to_zero() {
        assert_eq!(best_voicing_index(&[], 0, 5), 0);
        let open = ChordVoicing {
            frets: [0, 0, 0, 0, 0, -1],
            fingers: None,
            barre: None,
            base_fret: 1,
            name: None,
        };
        assert_eq!(best_voicing_index(&[open.clone(), open], 2, 7), 0);
        // String index off the neck never matches exactly
        assert_eq!(best_voicing_index(voicings("C", ChordType::Major), 9, 3), 3);
    }

    #[test]
    fn test_tap_on_d_string_third_fret_in_c() {
        let neck = Fretboard::standard();
        let m = select_voicing_in_key(&c_major(), &neck, 2, 3).unwrap();
        // D string, fret 3 sounds F: the IV chord's barre shape presses it
        assert_eq!(m.chord.root, PitchClass::F);
        assert_eq!(m.symbol, "F");
        assert_eq!(m.voicing_index, 0);
        assert_eq!(m.rule, MatchRule::ExactRoot);
    }

    #[test]
    fn test_tap_root_without_exact_shape() {
        let neck = Fretboard::standard();
        let m = select_voicing_in_key(&c_major(), &neck, 1, 15).unwrap();
        assert_eq!(m.symbol, "C");
        assert_eq!(m.rule, MatchRule::ClosestRoot);
        assert_eq!(m.voicing_index, 2);
    }

    #[test]
    fn test_tap_chord_tone_only() {
        let store = VoicingStore::builtin();
        let neck = Fretboard::standard();
        let a_minor = [Chord::new(PitchClass::A, ChordType::Minor, 0)];

        // B string, fret 1 = C, pressed by open Am
        let exact = select_voicing(store, &neck, &a_minor, 4, 1).unwrap();
        assert_eq!(exact.rule, MatchRule::ExactChordTone);
        assert_eq!(exact.voicing_index, 0);

        // A string, fret 3 = C, no Am shape presses it
        let closest = select_voicing(store, &neck, &a_minor, 1, 3).unwrap();
        assert_eq!(closest.rule, MatchRule::ClosestChordTone);
        assert_eq!(closest.symbol, "Am");
    }

    #[test]
    fn test_no_match() {
        let store = VoicingStore::builtin();
        let neck = Fretboard::standard();
        let a_minor = [Chord::new(PitchClass::A, ChordType::Minor, 0)];
        // G string, fret 1 = G#
        assert!(select_voicing(store, &neck, &a_minor, 3, 1).is_none());
        assert!(select_voicing(store, &neck, &a_minor, 7, 1).is_none());

        // Rooted and containing chords without shapes
        let shapeless = [Chord::new(PitchClass::CSharp, ChordType::Diminished, 0)];
        assert!(select_voicing(store, &neck, &shapeless, 1, 4).is_none());
    }

    #[test]
    fn test_custom_tuning_selects_nothing() {
        let neck = crate::config::FretboardConfig::from_yaml("tuning: [D, A, D, G, A, D]")
            .unwrap()
            .fretboard();
        // Open A string: the open Am shape would sound A# and D on this tuning
        assert!(select_voicing_in_key(&c_major(), &neck, 1, 0).is_none());
        assert!(select_voicing_in_key(&c_major(), &neck, 2, 3).is_none());

        let drop_d = crate::config::FretboardConfig::from_yaml("tuning: [D, A, D, G, B, E]")
            .unwrap()
            .fretboard();
        let a_minor = [Chord::new(PitchClass::A, ChordType::Minor, 0)];
        assert!(select_voicing(VoicingStore::builtin(), &drop_d, &a_minor, 4, 1).is_none());

        // Same tap on a standard neck still resolves
        let m = select_voicing_in_key(&c_major(), &Fretboard::standard(), 1, 0).unwrap();
        assert_eq!(m.symbol, "Am");
    }

    #[test]
    fn test_flat_key_spells_symbol_with_flats() {
        let neck = Fretboard::standard();
        let key = Key::parse("F Major").unwrap();
        // A string, fret 1 = A#/Bb, the IV of F
        let m = select_voicing_in_key(&key, &neck, 1, 1).unwrap();
        assert_eq!(m.symbol, "Bb");
        assert_eq!(m.rule, MatchRule::ExactRoot);
    }
}
