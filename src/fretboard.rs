//! # Scale-to-Fretboard Mapper ("Chair System")
//!
//! Projects a scale onto a 6-string neck and gives every fretted note a semantic
//! "chair" role used for colouring.
//!
//! ## The Chair
//! A pentatonic box is read as a chair: the root is the top of the chair back,
//! the 3rd is the seat, the 5th is the front leg. Diatonic scales are pentatonic
//! scales plus two extra degrees (major: 4 and 7, minor: 2 and ♭6), which get
//! their own roles. Inside a diatonic pattern the pentatonic subset keeps its
//! pentatonic colouring, so roles are resolved with two ordered lookups:
//! 1. the pentatonic role map of the scale's family
//! 2. the diatonic-extra role map (diatonic scales only)
//!
//! ## Pattern Algorithm
//! For every string and every fret in the window:
//! 1. sounded note = open string transposed by the fret number
//! 2. interval = chromatic distance from the scale root (mod 12)
//! 3. keep the position if the interval is in the scale
//! 4. attach the role, its description and the degree label
//!
//! Cost is `6 × frets` note computations, so patterns are recomputed on every
//! call rather than cached.
//!
//! ## Example
//! ```rust
//! use keychords::fretboard::{Fretboard, ScaleType};
//!
//! let neck = Fretboard::standard();
//! let pattern = neck.scale_pattern("G", ScaleType::MajorPentatonic, 0, 12, false);
//! assert!(pattern.iter().all(|p| [0, 2, 4, 7, 9].contains(&p.interval)));
//! assert_eq!(neck.find_root_position_fret("A"), 0);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chord::Interval;
use crate::error::KeysError;
use crate::harmony::Mode;
use crate::note::PitchClass;

pub const STRING_COUNT: usize = 6;

/// E-A-D-G-B-E, low to high
pub const STANDARD_TUNING: [PitchClass; STRING_COUNT] = [
    PitchClass::E,
    PitchClass::A,
    PitchClass::D,
    PitchClass::G,
    PitchClass::B,
    PitchClass::E,
];

/// Frets spanned by one chair box
const CHAIR_SPAN: u8 = 5;

/// Highest fret searched when anchoring a view on the root
const ROOT_SEARCH_FRETS: u8 = 12;

/// Display name of a string in standard tuning (0 = low E).
pub fn string_name(string: usize) -> Option<&'static str> {
    match string {
        0 => Some("E (low)"),
        1 => Some("A"),
        2 => Some("D"),
        3 => Some("G"),
        4 => Some("B"),
        5 => Some("E (high)"),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    Single,
    Double,
}

/// Inlay dot positions
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FretMarkers {
    pub single: Vec<u8>,
    pub double: Vec<u8>,
}

impl Default for FretMarkers {
    fn default() -> Self {
        Self {
            single: vec![3, 5, 7, 9, 15, 17, 19, 21],
            double: vec![12, 24],
        }
    }
}

impl FretMarkers {
    pub fn marker_at(&self, fret: u8) -> Option<MarkerKind> {
        if self.double.contains(&fret) {
            Some(MarkerKind::Double)
        } else if self.single.contains(&fret) {
            Some(MarkerKind::Single)
        } else {
            None
        }
    }

    pub(crate) fn retain_up_to(&mut self, fret_count: u8) {
        self.single.retain(|&f| f <= fret_count);
        self.double.retain(|&f| f <= fret_count);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScaleType {
    MajorPentatonic,
    MinorPentatonic,
    Major,
    Minor,
}

impl ScaleType {
    pub const ALL: [ScaleType; 4] = [
        ScaleType::MajorPentatonic,
        ScaleType::MinorPentatonic,
        ScaleType::Major,
        ScaleType::Minor,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ScaleType::MajorPentatonic => "majorPentatonic",
            ScaleType::MinorPentatonic => "minorPentatonic",
            ScaleType::Major => "major",
            ScaleType::Minor => "minor",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.key() == key)
    }

    pub fn intervals(self) -> &'static [Interval] {
        match self {
            ScaleType::MajorPentatonic => &[0, 2, 4, 7, 9],
            ScaleType::MinorPentatonic => &[0, 3, 5, 7, 10],
            ScaleType::Major => &[0, 2, 4, 5, 7, 9, 11],
            ScaleType::Minor => &[0, 2, 3, 5, 7, 8, 10],
        }
    }

    pub fn is_pentatonic(self) -> bool {
        matches!(self, ScaleType::MajorPentatonic | ScaleType::MinorPentatonic)
    }

    pub fn mode(self) -> Mode {
        match self {
            ScaleType::MajorPentatonic | ScaleType::Major => Mode::Major,
            ScaleType::MinorPentatonic | ScaleType::Minor => Mode::Minor,
        }
    }

    /// The pentatonic scale of the same family
    pub fn pentatonic(self) -> ScaleType {
        match self.mode() {
            Mode::Major => ScaleType::MajorPentatonic,
            Mode::Minor => ScaleType::MinorPentatonic,
        }
    }

    /// Degree label for an interval; major and minor spell the same distance differently.
    pub fn degree_label(self, interval: Interval) -> &'static str {
        match (self, interval) {
            (_, 0) => "1",
            (ScaleType::Major | ScaleType::MajorPentatonic | ScaleType::Minor, 2) => "2",
            (ScaleType::Major | ScaleType::MajorPentatonic, 4) => "3",
            (ScaleType::Major | ScaleType::Minor | ScaleType::MinorPentatonic, 5) => "4",
            (_, 7) => "5",
            (ScaleType::Major | ScaleType::MajorPentatonic, 9) => "6",
            (ScaleType::Major, 11) => "7",
            (ScaleType::Minor | ScaleType::MinorPentatonic, 3) => "♭3",
            (ScaleType::Minor, 8) => "♭6",
            (ScaleType::Minor | ScaleType::MinorPentatonic, 10) => "♭7",
            _ => "",
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ScaleType {
    type Err = KeysError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s.trim()).ok_or_else(|| KeysError::UnknownScaleType(s.to_string()))
    }
}

/// Visual role of a fretted scale note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChairRole {
    Root,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Default,
}

impl ChairRole {
    pub fn color(self) -> Option<&'static str> {
        match self {
            ChairRole::Root => Some("green"),
            ChairRole::Second => Some("red"),
            ChairRole::Third => Some("purple"),
            ChairRole::Fourth | ChairRole::Seventh => Some("black"),
            ChairRole::Fifth => Some("blue"),
            ChairRole::Sixth => Some("orange"),
            ChairRole::Default => None,
        }
    }

    pub fn description(self) -> Option<&'static str> {
        match self {
            ChairRole::Root => Some("Major Root / Chair Back Top"),
            ChairRole::Second => Some("2nd"),
            ChairRole::Third => Some("3rd / Seat"),
            ChairRole::Fourth => Some("4th (diatonic)"),
            ChairRole::Fifth => Some("5th / Front Leg"),
            ChairRole::Sixth => Some("6th"),
            ChairRole::Seventh => Some("7th (diatonic)"),
            ChairRole::Default => None,
        }
    }
}

/// First-tier lookup: roles of the pentatonic subset.
fn pentatonic_role(mode: Mode, interval: Interval) -> Option<ChairRole> {
    match (mode, interval) {
        (_, 0) => Some(ChairRole::Root),
        (Mode::Major, 2) => Some(ChairRole::Second),
        (Mode::Major, 4) => Some(ChairRole::Third),
        (Mode::Major, 9) => Some(ChairRole::Sixth),
        (Mode::Minor, 3) => Some(ChairRole::Third),
        (Mode::Minor, 5) => Some(ChairRole::Fourth),
        (Mode::Minor, 10) => Some(ChairRole::Seventh),
        (_, 7) => Some(ChairRole::Fifth),
        _ => None,
    }
}

/// Second-tier lookup: the two extra degrees of the diatonic scale.
fn diatonic_extra_role(mode: Mode, interval: Interval) -> Option<ChairRole> {
    match (mode, interval) {
        (Mode::Major, 5) => Some(ChairRole::Fourth),
        (Mode::Major, 11) => Some(ChairRole::Seventh),
        (Mode::Minor, 2) => Some(ChairRole::Second),
        (Mode::Minor, 8) => Some(ChairRole::Sixth),
        _ => None,
    }
}

/// Role for an interval of `scale_type`.
pub fn chair_role(scale_type: ScaleType, interval: Interval) -> ChairRole {
    let mode = scale_type.mode();
    let role = if scale_type.is_pentatonic() {
        pentatonic_role(mode, interval)
    } else {
        pentatonic_role(mode, interval).or_else(|| diatonic_extra_role(mode, interval))
    };
    role.unwrap_or(ChairRole::Default)
}

/// A (string, fret) coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StringFret {
    pub string: u8,
    pub fret: u8,
}

/// One fretted scale note
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FretPosition {
    pub string: u8,
    pub fret: u8,
    pub note: String,
    pub interval: Interval,
    pub scale_degree: &'static str,
    pub color_key: ChairRole,
    pub role: Option<&'static str>,
    /// Whether the interval belongs to the pentatonic subset of the scale
    pub in_pentatonic: bool,
}

/// A 6-string neck with a fixed tuning
#[derive(Debug, Clone, PartialEq)]
pub struct Fretboard {
    tuning: [PitchClass; STRING_COUNT],
    fret_count: u8,
    markers: FretMarkers,
}

impl Default for Fretboard {
    fn default() -> Self {
        Self::standard()
    }
}

impl Fretboard {
    pub fn new(tuning: [PitchClass; STRING_COUNT], fret_count: u8, markers: FretMarkers) -> Self {
        Self {
            tuning,
            fret_count,
            markers,
        }
    }

    /// Standard tuning, 24 frets
    pub fn standard() -> Self {
        Self::new(STANDARD_TUNING, 24, FretMarkers::default())
    }

    pub fn tuning(&self) -> &[PitchClass; STRING_COUNT] {
        &self.tuning
    }

    pub fn fret_count(&self) -> u8 {
        self.fret_count
    }

    pub fn markers(&self) -> &FretMarkers {
        &self.markers
    }

    /// Normalize a caller-supplied fret window: negatives clamp to 0, reversed
    /// bounds are swapped, and the end is capped at the last fret.
    pub fn fret_window(&self, start: i32, end: i32) -> (u8, u8) {
        let clamp = |f: i32| f.clamp(0, self.fret_count as i32) as u8;
        let (a, b) = (clamp(start), clamp(end));
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Sounded pitch at a position; `None` for a string index off the neck.
    pub fn pitch_at(&self, string: usize, fret: u8) -> Option<PitchClass> {
        self.tuning.get(string).map(|open| open.transpose(fret as i32))
    }

    pub fn note_at_fret(&self, string: usize, fret: u8, prefer_flats: bool) -> Option<String> {
        self.pitch_at(string, fret)
            .map(|pc| pc.spell(prefer_flats).to_string())
    }

    /// Every position sounding `note` within the window, ordered by string then fret.
    pub fn find_note_positions(&self, note: &str, start: i32, end: i32) -> Vec<StringFret> {
        let target = match PitchClass::parse(note) {
            Some(pc) => pc,
            None => return vec![],
        };
        self.positions_of(target, self.fret_window(start, end))
    }

    fn positions_of(&self, target: PitchClass, (start, end): (u8, u8)) -> Vec<StringFret> {
        let mut positions = Vec::new();
        for (string, open) in self.tuning.iter().enumerate() {
            for fret in start..=end {
                if open.transpose(fret as i32) == target {
                    positions.push(StringFret {
                        string: string as u8,
                        fret,
                    });
                }
            }
        }
        positions
    }

    /// All scale positions in the fret window, ordered by string then fret.
    ///
    /// An unrecognized root yields an empty pattern.
    pub fn scale_pattern(
        &self,
        root: &str,
        scale_type: ScaleType,
        start: i32,
        end: i32,
        prefer_flats: bool,
    ) -> Vec<FretPosition> {
        let root = match PitchClass::parse(root) {
            Some(pc) => pc,
            None => {
                log::debug!("scale_pattern: unrecognized root {:?}", root);
                return vec![];
            }
        };
        let (start, end) = self.fret_window(start, end);
        let intervals = scale_type.intervals();
        let pentatonic = scale_type.pentatonic().intervals();

        let mut pattern = Vec::new();
        for (string, open) in self.tuning.iter().enumerate() {
            for fret in start..=end {
                let pitch = open.transpose(fret as i32);
                let interval = pitch.interval_from(root);
                if !intervals.contains(&interval) {
                    continue;
                }

                let color_key = chair_role(scale_type, interval);
                pattern.push(FretPosition {
                    string: string as u8,
                    fret,
                    note: pitch.spell(prefer_flats).to_string(),
                    interval,
                    scale_degree: scale_type.degree_label(interval),
                    color_key,
                    role: color_key.description(),
                    in_pentatonic: pentatonic.contains(&interval),
                });
            }
        }
        pattern
    }

    /// One chair box: the pattern over `CHAIR_SPAN` frets above `start_fret`.
    pub fn chair_shape(&self, root: &str, scale_type: ScaleType, start_fret: u8) -> Vec<FretPosition> {
        let start = start_fret as i32;
        self.scale_pattern(root, scale_type, start, start + CHAIR_SPAN as i32, false)
    }

    /// Starting fret that anchors a compact view on the root.
    ///
    /// Lowest fret up to 12 on the two bass strings; otherwise the first match on
    /// any string anywhere on the neck; otherwise fret 0.
    pub fn find_root_position_fret(&self, root: &str) -> u8 {
        let target = match PitchClass::parse(root) {
            Some(pc) => pc,
            None => return 0,
        };

        let window = self.fret_window(0, ROOT_SEARCH_FRETS as i32);
        let bass = self
            .positions_of(target, window)
            .into_iter()
            .filter(|p| p.string <= 1)
            .map(|p| p.fret)
            .min();
        if let Some(fret) = bass {
            return fret;
        }

        log::debug!("find_root_position_fret: no bass-string position for {}", target);
        self.positions_of(target, (0, self.fret_count))
            .first()
            .map(|p| p.fret)
            .unwrap_or(0)
    }
}

/// Scale notes in ascending degree order. An unrecognized root yields no notes.
pub fn scale_notes(root: &str, scale_type: ScaleType, prefer_flats: bool) -> Vec<String> {
    match PitchClass::parse(root) {
        Some(root) => scale_type
            .intervals()
            .iter()
            .map(|&i| root.transpose(i as i32).spell(prefer_flats).to_string())
            .collect(),
        None => vec![],
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChairPart {
    pub label: &'static str,
    pub interval: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chair {
    pub top: ChairPart,
    pub seat: ChairPart,
    pub back_leg: ChairPart,
    pub front_leg: ChairPart,
    pub bottom: ChairPart,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Triad {
    pub notes: [&'static str; 3],
    pub label: &'static str,
}

/// Teaching diagram: both chairs plus the triad of the requested mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChairDiagram {
    pub major_chair: Chair,
    pub minor_chair: Chair,
    pub triad: Triad,
}

const fn part(label: &'static str, interval: &'static str) -> ChairPart {
    ChairPart { label, interval }
}

pub fn chair_diagram(mode: Mode) -> ChairDiagram {
    ChairDiagram {
        major_chair: Chair {
            top: part("Major Root", "1"),
            seat: part("Seat", "3"),
            back_leg: part("2nd", "2"),
            front_leg: part("5th", "5"),
            bottom: part("6th", "6"),
        },
        minor_chair: Chair {
            top: part("♭3rd", "♭3"),
            seat: part("Seat", "4"),
            back_leg: part("♭7th", "♭7"),
            front_leg: part("5th", "5"),
            bottom: part("Minor Root", "1"),
        },
        triad: match mode {
            Mode::Major => Triad {
                notes: ["1", "3", "5"],
                label: "Major Triad",
            },
            Mode::Minor => Triad {
                notes: ["1", "♭3", "5"],
                label: "Minor Triad",
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_g_major_pentatonic_completeness() {
        let neck = Fretboard::standard();
        let pattern = neck.scale_pattern("G", ScaleType::MajorPentatonic, 0, 12, false);
        assert!(!pattern.is_empty());
        for p in &pattern {
            let interval = crate::note::interval_from_root(&p.note, "G").unwrap();
            assert!([0, 2, 4, 7, 9].contains(&interval), "{:?}", p);
            assert_eq!(interval, p.interval);
        }
        let low_e: Vec<u8> = pattern.iter().filter(|p| p.string == 0).map(|p| p.fret).collect();
        assert_eq!(low_e, vec![0, 3, 5, 7, 10, 12]);
    }

    #[test]
    fn test_every_position_is_in_the_scale() {
        let neck = Fretboard::standard();
        for scale in ScaleType::ALL {
            for root in PitchClass::ALL {
                for p in neck.scale_pattern(root.name(), scale, 0, 24, false) {
                    assert!(scale.intervals().contains(&p.interval));
                    assert_ne!(p.color_key, ChairRole::Default);
                    assert!(!p.scale_degree.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_diatonic_pattern_keeps_pentatonic_roles() {
        let neck = Fretboard::standard();
        let pattern = neck.scale_pattern("C", ScaleType::Major, 0, 12, false);

        let role_of = |note: &str| pattern.iter().find(|p| p.note == note).map(|p| p.color_key);
        assert_eq!(role_of("C"), Some(ChairRole::Root));
        assert_eq!(role_of("D"), Some(ChairRole::Second));
        assert_eq!(role_of("E"), Some(ChairRole::Third));
        assert_eq!(role_of("F"), Some(ChairRole::Fourth));
        assert_eq!(role_of("G"), Some(ChairRole::Fifth));
        assert_eq!(role_of("A"), Some(ChairRole::Sixth));
        assert_eq!(role_of("B"), Some(ChairRole::Seventh));

        let f = pattern.iter().find(|p| p.note == "F").unwrap();
        assert!(!f.in_pentatonic);
        assert_eq!(f.role, Some("4th (diatonic)"));
        let e = pattern.iter().find(|p| p.note == "E").unwrap();
        assert!(e.in_pentatonic);
    }

    #[test]
    fn test_minor_roles_and_labels() {
        assert_eq!(chair_role(ScaleType::Minor, 3), ChairRole::Third);
        assert_eq!(chair_role(ScaleType::Minor, 2), ChairRole::Second);
        assert_eq!(chair_role(ScaleType::Minor, 8), ChairRole::Sixth);
        assert_eq!(chair_role(ScaleType::MinorPentatonic, 2), ChairRole::Default);
        assert_eq!(chair_role(ScaleType::MinorPentatonic, 10), ChairRole::Seventh);

        assert_eq!(ScaleType::Minor.degree_label(3), "♭3");
        assert_eq!(ScaleType::Minor.degree_label(8), "♭6");
        assert_eq!(ScaleType::Major.degree_label(11), "7");
        assert_eq!(ScaleType::MajorPentatonic.degree_label(5), "");
        assert_eq!(ScaleType::MinorPentatonic.degree_label(2), "");
    }

    #[test]
    fn test_flat_spelling_in_pattern() {
        let neck = Fretboard::standard();
        let pattern = neck.scale_pattern("F", ScaleType::Major, 0, 3, true);
        assert!(pattern.iter().any(|p| p.note == "Bb"));
        assert!(pattern.iter().all(|p| !p.note.contains('#')));
    }

    #[test]
    fn test_fret_window_normalization() {
        let neck = Fretboard::standard();
        assert_eq!(neck.fret_window(-3, 5), (0, 5));
        assert_eq!(neck.fret_window(12, 5), (5, 12));
        assert_eq!(neck.fret_window(0, 99), (0, 24));
        let reversed = neck.scale_pattern("A", ScaleType::Minor, 7, 5, false);
        let forward = neck.scale_pattern("A", ScaleType::Minor, 5, 7, false);
        assert_eq!(reversed, forward);
    }

    #[test]
    fn test_unknown_root_gives_empty_pattern() {
        let neck = Fretboard::standard();
        assert!(neck.scale_pattern("X", ScaleType::Major, 0, 12, false).is_empty());
        assert!(neck.find_note_positions("X", 0, 12).is_empty());
        assert!(scale_notes("X", ScaleType::Major, false).is_empty());
    }

    #[test]
    fn test_root_position_fret() {
        let neck = Fretboard::standard();
        for root in PitchClass::ALL {
            let f = neck.find_root_position_fret(root.name());
            let on_e = PitchClass::E.transpose(f as i32) == root;
            let on_a = PitchClass::A.transpose(f as i32) == root;
            assert!(on_e || on_a, "{} at {}", root, f);

            let min_e = (0..=12u8).find(|&x| PitchClass::E.transpose(x as i32) == root).unwrap();
            let min_a = (0..=12u8).find(|&x| PitchClass::A.transpose(x as i32) == root).unwrap();
            assert_eq!(f, min_e.min(min_a));
        }
        assert_eq!(neck.find_root_position_fret("A"), 0);
        assert_eq!(neck.find_root_position_fret("C"), 3);
        assert_eq!(neck.find_root_position_fret("G#"), 4);
        assert_eq!(neck.find_root_position_fret("nope"), 0);
    }

    #[test]
    fn test_root_position_fret_on_a_short_neck() {
        let neck = crate::config::FretboardConfig::from_yaml("fret-count: 3")
            .unwrap()
            .fretboard();
        // Bass strings still reach C
        assert_eq!(neck.find_root_position_fret("C"), 3);
        // First match anywhere: G string, fret 1
        assert_eq!(neck.find_root_position_fret("G#"), 1);
        assert_eq!(neck.find_root_position_fret("Ab"), 1);
        // Open D string
        assert_eq!(neck.find_root_position_fret("D"), 0);

        // A one-fret neck never sounds C# or F#
        let stub = crate::config::FretboardConfig::from_yaml("fret-count: 1")
            .unwrap()
            .fretboard();
        assert_eq!(stub.find_root_position_fret("C#"), 0);
        assert_eq!(stub.find_root_position_fret("F#"), 0);
        assert_eq!(stub.find_root_position_fret("F"), 1);
    }

    #[test]
    fn test_note_lookup_on_strings() {
        let neck = Fretboard::standard();
        assert_eq!(neck.note_at_fret(2, 3, false).as_deref(), Some("F"));
        assert_eq!(neck.note_at_fret(0, 6, true).as_deref(), Some("Bb"));
        assert_eq!(neck.note_at_fret(6, 0, false), None);

        let positions = neck.find_note_positions("E", 0, 5);
        assert_eq!(
            positions,
            vec![
                StringFret { string: 0, fret: 0 },
                StringFret { string: 2, fret: 2 },
                StringFret { string: 4, fret: 5 },
                StringFret { string: 5, fret: 0 },
            ]
        );
    }

    #[test]
    fn test_chair_shape_spans_five_frets() {
        let neck = Fretboard::standard();
        let shape = neck.chair_shape("A", ScaleType::MinorPentatonic, 5);
        assert!(shape.iter().all(|p| (5..=10).contains(&p.fret)));
        // A on the low E, D, B and high E strings
        assert_eq!(shape.iter().filter(|p| p.color_key == ChairRole::Root).count(), 4);
    }

    #[test]
    fn test_markers_and_diagram() {
        let markers = FretMarkers::default();
        assert_eq!(markers.marker_at(12), Some(MarkerKind::Double));
        assert_eq!(markers.marker_at(7), Some(MarkerKind::Single));
        assert_eq!(markers.marker_at(8), None);

        let neck = Fretboard::standard();
        assert_eq!(neck.markers(), &markers);
        assert_eq!(neck.fret_count(), 24);
        assert_eq!(string_name(0), Some("E (low)"));
        assert_eq!(string_name(6), None);

        let diagram = chair_diagram(Mode::Minor);
        assert_eq!(diagram.triad.notes, ["1", "♭3", "5"]);
        assert_eq!(diagram.minor_chair.bottom.label, "Minor Root");
    }
}
