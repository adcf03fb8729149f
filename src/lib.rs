pub mod api;
pub mod camelot;
pub mod chord;
pub mod config;
pub mod error;
pub mod fretboard;
pub mod harmony;
pub mod note;
pub mod selector;
pub mod voicing;

pub use api::*;
pub use camelot::CamelotCode;
pub use chord::{Chord, ChordType};
pub use config::FretboardConfig;
pub use error::KeysError;
pub use fretboard::{Fretboard, ScaleType};
pub use harmony::{Key, Mode};
pub use note::PitchClass;
pub use voicing::VoicingStore;
