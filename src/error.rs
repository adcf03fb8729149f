//! # Error Types
//!
//! This module defines the error type for the fallible edges of the crate.
//!
//! Lookups in the theory core never fail: unknown notes, chord types or missing
//! voicings degrade to `None`, empty vectors or pass-through values. Errors only
//! appear where a caller explicitly asks for strict parsing (`FromStr`), or when
//! external data is loaded (fretboard configuration, voicing tables).
//!
//! ## Error Types
//! - `UnknownNote` / `UnknownChordType` / `UnknownScaleType` - strict name parsing
//! - `UnknownKey` / `UnknownCamelotCode` - key catalog lookups
//! - `ConfigError` - invalid fretboard configuration YAML
//! - `VoicingTableError` - malformed voicing table YAML
//!
//! ## Usage
//! ```rust
//! use keychords::{FretboardConfig, KeysError};
//!
//! match FretboardConfig::from_yaml("tuning: [E, A, D, G, B]") {
//!     Ok(config) => println!("{:?}", config.tuning),
//!     Err(KeysError::ConfigError(message)) => eprintln!("bad config: {}", message),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KeysError {
    /// A note name that is not one of the accepted spellings.
    ///
    /// # Example
    /// ```
    /// # use keychords::KeysError;
    /// let err = KeysError::UnknownNote("H".to_string());
    /// assert_eq!(err.to_string(), "Unknown note: H");
    /// ```
    #[error("Unknown note: {0}")]
    UnknownNote(String),

    /// A chord-type key that is not in the chord table (e.g. `"major7"`).
    #[error("Unknown chord type: {0}")]
    UnknownChordType(String),

    /// A scale-type key other than the four fretboard scales.
    #[error("Unknown scale type: {0}")]
    UnknownScaleType(String),

    /// A key name such as `"C Major"` or `"F#m"` that could not be parsed.
    #[error("Unknown key: {0}")]
    UnknownKey(String),

    /// A Camelot code outside `1A`..`12B`.
    ///
    /// # Example
    /// ```
    /// # use keychords::KeysError;
    /// let err = KeysError::UnknownCamelotCode("13C".to_string());
    /// assert_eq!(err.to_string(), "Unknown Camelot code: 13C");
    /// ```
    #[error("Unknown Camelot code: {0}")]
    UnknownCamelotCode(String),

    /// Invalid fretboard configuration.
    ///
    /// Occurs when the YAML is malformed or the tuning does not name six notes.
    #[error("Invalid fretboard configuration: {0}")]
    ConfigError(String),

    /// Malformed voicing table.
    #[error("Invalid voicing table: {0}")]
    VoicingTableError(String),
}
