//! # Fretboard Configuration
//!
//! The only environment input of the theory core: the instrument tuning and the
//! fret decorations. Defaults describe a standard 24-fret guitar in E-A-D-G-B-E.
//!
//! Configuration is written as YAML with kebab-case keys. Every key is optional:
//!
//! ```yaml
//! tuning: [D, A, D, G, B, E]   # low to high
//! fret-count: 22
//! single-markers: [3, 5, 7, 9, 15, 17, 19, 21]
//! double-markers: [12]
//! prefer-flats: true
//! ```

use serde::Deserialize;

use crate::error::KeysError;
use crate::fretboard::{Fretboard, FretMarkers, STRING_COUNT};
use crate::note::PitchClass;

/// Highest fret count accepted from configuration
pub const MAX_FRET_COUNT: u8 = 36;

/// Raw configuration for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
struct RawFretboardConfig {
    tuning: Option<Vec<String>>,
    fret_count: Option<u8>,
    single_markers: Option<Vec<u8>>,
    double_markers: Option<Vec<u8>>,
    prefer_flats: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FretboardConfig {
    /// Open-string notes, index 0 = lowest string
    pub tuning: [PitchClass; STRING_COUNT],
    pub fret_count: u8,
    pub markers: FretMarkers,
    pub prefer_flats: bool,
}

impl Default for FretboardConfig {
    fn default() -> Self {
        Self {
            tuning: crate::fretboard::STANDARD_TUNING,
            fret_count: 24,
            markers: FretMarkers::default(),
            prefer_flats: false,
        }
    }
}

impl FretboardConfig {
    /// Parse a YAML configuration document. Missing keys keep their defaults.
    pub fn from_yaml(content: &str) -> Result<Self, KeysError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: RawFretboardConfig =
            serde_yaml::from_str(content).map_err(|e| KeysError::ConfigError(e.to_string()))?;

        let mut config = Self::default();

        if let Some(names) = &raw.tuning {
            config.tuning = Self::parse_tuning(names)?;
        }

        if let Some(count) = raw.fret_count {
            if count == 0 || count > MAX_FRET_COUNT {
                return Err(KeysError::ConfigError(format!(
                    "fret-count must be between 1 and {}, got {}",
                    MAX_FRET_COUNT, count
                )));
            }
            config.fret_count = count;
        }

        if let Some(single) = raw.single_markers {
            config.markers.single = single;
        }
        if let Some(double) = raw.double_markers {
            config.markers.double = double;
        }
        config.markers.retain_up_to(config.fret_count);

        if let Some(prefer_flats) = raw.prefer_flats {
            config.prefer_flats = prefer_flats;
        }

        log::debug!(
            "Loaded fretboard config: tuning {:?}, {} frets",
            config.tuning,
            config.fret_count
        );
        Ok(config)
    }

    fn parse_tuning(names: &[String]) -> Result<[PitchClass; STRING_COUNT], KeysError> {
        if names.len() != STRING_COUNT {
            return Err(KeysError::ConfigError(format!(
                "tuning must name {} strings, got {}",
                STRING_COUNT,
                names.len()
            )));
        }

        let mut tuning = crate::fretboard::STANDARD_TUNING;
        for (slot, name) in tuning.iter_mut().zip(names) {
            *slot = PitchClass::parse(name)
                .ok_or_else(|| KeysError::ConfigError(format!("invalid tuning note: {}", name)))?;
        }
        Ok(tuning)
    }

    pub fn fretboard(&self) -> Fretboard {
        Fretboard::new(self.tuning, self.fret_count, self.markers.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_standard() {
        let config = FretboardConfig::from_yaml("").unwrap();
        assert_eq!(config, FretboardConfig::default());
        assert_eq!(config.fret_count, 24);
    }

    #[test]
    fn test_drop_d_config() {
        let yaml = r#"
tuning: [D, A, D, G, B, E]
fret-count: 22
prefer-flats: true
"#;
        let config = FretboardConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.tuning[0], PitchClass::D);
        assert_eq!(config.tuning[5], PitchClass::E);
        assert_eq!(config.fret_count, 22);
        assert!(config.prefer_flats);
        // The 24th-fret marker no longer fits on the neck
        assert_eq!(config.markers.double, vec![12]);
    }

    #[test]
    fn test_flat_spelled_tuning() {
        let config = FretboardConfig::from_yaml("tuning: [Eb, Ab, Db, Gb, Bb, Eb]").unwrap();
        assert_eq!(config.tuning[0], PitchClass::DSharp);
        assert_eq!(config.tuning[4], PitchClass::ASharp);
    }

    #[test]
    fn test_invalid_configs() {
        assert!(matches!(
            FretboardConfig::from_yaml("tuning: [E, A, D, G, B]"),
            Err(KeysError::ConfigError(_))
        ));
        assert!(matches!(
            FretboardConfig::from_yaml("tuning: [E, A, D, G, B, H]"),
            Err(KeysError::ConfigError(_))
        ));
        assert!(matches!(
            FretboardConfig::from_yaml("fret-count: 0"),
            Err(KeysError::ConfigError(_))
        ));
        assert!(matches!(
            FretboardConfig::from_yaml("fret-count: [1"),
            Err(KeysError::ConfigError(_))
        ));
    }
}
