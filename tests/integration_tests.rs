//! Integration tests for the keychords library
//!
//! Exercises the public API the way a presentation layer uses it.

use keychords::chord::ChordType;
use keychords::fretboard::ChairRole;
use keychords::note::{index_of, normalize, PitchClass};
use keychords::selector::MatchRule;
use keychords::voicing::VoicingStore;
use keychords::*;

const LETTERS: [&str; 7] = ["C", "D", "E", "F", "G", "A", "B"];
const ACCIDENTALS: [&str; 5] = ["", "#", "##", "b", "bb"];

fn every_spelling() -> Vec<String> {
    LETTERS
        .iter()
        .flat_map(|l| ACCIDENTALS.iter().map(move |a| format!("{}{}", l, a)))
        .collect()
}

#[test]
fn test_transpose_closure() {
    for n in every_spelling() {
        let start = index_of(&n).unwrap() as i32;
        for k in -30..=30 {
            for flats in [false, true] {
                let moved = transpose(&n, k, flats);
                assert_eq!(
                    index_of(&moved).unwrap() as i32,
                    (start + k).rem_euclid(12),
                    "{} + {}",
                    n,
                    k
                );
                assert!(!moved.contains("##") && !moved.contains("bb"));
                assert!(!["E#", "B#", "Fb", "Cb"].contains(&moved.as_str()));
            }
        }
    }
}

#[test]
fn test_enharmonic_round_trip() {
    for n in every_spelling() {
        assert_eq!(index_of(&normalize(&n)), index_of(&n), "{}", n);
    }
    assert_eq!(index_of("Db"), index_of("C#"));
    assert_eq!(index_of("Cb"), Some(11));
}

#[test]
fn test_chord_cardinality_and_inversions() {
    for chord_type in ChordType::ALL {
        for root in PitchClass::ALL {
            let root_position = chord_notes(root.name(), chord_type.key(), 0, false);
            assert_eq!(root_position.len(), chord_type.intervals().len());

            for k in 0..root_position.len() {
                let mut rotated = root_position.clone();
                rotated.rotate_left(k);
                assert_eq!(chord_notes(root.name(), chord_type.key(), k, false), rotated);
            }
        }
    }
}

#[test]
fn test_c_minor_seventh() {
    assert_eq!(chord_notes("C", "minor7", 0, false), vec!["C", "D#", "G", "A#"]);
    assert_eq!(chord_notes("C", "minor7", 0, true), vec!["C", "Eb", "G", "Bb"]);
    assert_eq!(chord_symbol("C", "minor7"), "Cm7");
    assert_eq!(chord_name("C", "minor7"), "C Minor 7th");
}

#[test]
fn test_g_major_pentatonic_pattern() {
    let pattern = scale_pattern("G", "majorPentatonic", 0, 12, false);
    assert!(!pattern.is_empty());
    for p in &pattern {
        let interval = note::interval_from_root(&p.note, "G").unwrap();
        assert!([0, 2, 4, 7, 9].contains(&interval), "{:?}", p);
        assert!(p.fret <= 12);
        assert!(p.in_pentatonic);
    }
    let roots = pattern.iter().filter(|p| p.color_key == ChairRole::Root).count();
    // G once per string, plus the open and 12th fret on the G string
    assert_eq!(roots, 7);
}

#[test]
fn test_root_position_sanity() {
    let f = find_root_position_fret("A");
    assert!(transpose("E", f as i32, false) == "A" || transpose("A", f as i32, false) == "A");
    assert_eq!(f, 0);
    assert_eq!(find_root_position_fret("F"), 1);
    assert_eq!(find_root_position_fret("D"), 5);
}

#[test]
fn test_voicing_enharmonic_fallback() {
    let sharp = voicings("C#", "major");
    let flat = voicings("Db", "major");
    assert!(!sharp.is_empty());
    assert_eq!(sharp, flat);

    for (sharp, flat) in note::ENHARMONIC_PAIRS {
        for chord_type in ["major", "minor", "diminished", "major7", "minor7", "dominant7"] {
            assert_eq!(voicings(sharp, chord_type), voicings(flat, chord_type));
        }
    }
}

#[test]
fn test_display_idempotent_near_nut() {
    let mut checked = 0;
    for root in PitchClass::ALL {
        for chord_type in [
            ChordType::Major,
            ChordType::Minor,
            ChordType::Diminished,
            ChordType::Major7,
            ChordType::Minor7,
            ChordType::Dominant7,
        ] {
            for v in VoicingStore::builtin().voicings(root.name(), chord_type) {
                let display = display_voicing(v);
                assert_eq!(display.original_frets, v.frets);
                if v.fretted().min().map_or(true, |m| m <= 1) {
                    assert_eq!(display.frets, v.frets);
                    assert!(!display.show_position);
                    checked += 1;
                } else {
                    assert!(display.show_position);
                    assert_eq!(display.frets.iter().filter(|&&f| f > 0).min(), Some(&1));
                }
                assert!(display.num_frets >= 4);
            }
        }
    }
    assert!(checked > 10);
}

#[test]
fn test_tap_on_d_string() {
    // D string, fret 3 sounds F; no C shape presses it, the F barre does
    let c_shapes = voicings("C", "major");
    assert!(c_shapes.iter().all(|v| v.frets[2] != 3));

    let m = select_voicing_in_key("C Major", 2, 3).unwrap();
    assert_eq!(m.symbol, "F");
    assert_eq!(m.rule, MatchRule::ExactRoot);
    assert_eq!(m.voicing.frets[2], 3);

    // A string, fret 3 sounds C, pressed by the open C shape
    let m = select_voicing_in_key("C Major", 1, 3).unwrap();
    assert_eq!(m.symbol, "C");
    assert_eq!(m.voicing.name.as_deref(), Some("Open C"));
}

#[test]
fn test_key_context() {
    let a_minor = Key::parse("A Minor").unwrap();
    assert_eq!(a_minor.relative().name(), "C Major");
    assert_eq!(a_minor.camelot().to_string(), "8A");

    let symbols: Vec<String> = Key::parse("C Major")
        .unwrap()
        .diatonic_chords()
        .into_iter()
        .map(|c| c.symbol)
        .collect();
    assert_eq!(symbols, vec!["C", "Dm", "Em", "F", "G", "Am", "Bdim"]);

    let neighbours: Vec<String> = camelot_neighbours("8B").iter().map(|c| c.to_string()).collect();
    assert_eq!(neighbours, vec!["8A", "7B", "9B"]);
}

#[test]
fn test_custom_tuning_from_config() {
    let config = FretboardConfig::from_yaml("tuning: [D, A, D, G, B, E]\nfret-count: 22").unwrap();
    let neck = config.fretboard();
    assert_eq!(neck.find_root_position_fret("D"), 0);
    assert_eq!(neck.note_at_fret(0, 2, false).as_deref(), Some("E"));

    let pattern = neck.scale_pattern("D", ScaleType::Major, 0, 30, false);
    assert!(pattern.iter().all(|p| p.fret <= 22));
    assert!(pattern.iter().any(|p| p.string == 0 && p.fret == 0));
}
