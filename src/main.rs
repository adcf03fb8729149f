use std::env;
use std::fs;
use std::process;

use serde::Serialize;

use keychords::chord::{self, Chord, ChordType, ExtensionOption, InversionOption};
use keychords::fretboard::{FretPosition, ScaleType, STANDARD_TUNING};
use keychords::harmony::Key;
use keychords::selector::select_voicing_in_key;
use keychords::voicing::{display_voicing, ChordVoicing, DisplayVoicing, VoicingStore};
use keychords::{CamelotCode, FretboardConfig, PitchClass};

const USAGE: &str = "\
Usage: keychords [--flats] [--config FILE] <command> [args...]

Commands:
  chord <root> <type> [inversion] [degree]
                                      chord tones, symbol and extensions
  scale <root> <scale-type> [start] [end]
                                      scale positions on the neck
  root-fret <root>                    starting fret for a compact view
  voicings <root> <type>              chord shapes, raw and display
  key <name>                          scale, relative key and diatonic chords
  tap <key> <string> <fret>           chord shape for a tapped note
  camelot <code>                      key and harmonic neighbours";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChordReport {
    symbol: String,
    name: String,
    notes: Vec<String>,
    inversion: String,
    inversions: Vec<InversionOption>,
    extensions: Vec<ExtensionOption>,
}

#[derive(Serialize)]
struct RootFret {
    root: String,
    fret: u8,
}

#[derive(Serialize)]
struct VoicingReport<'a> {
    voicing: &'a ChordVoicing,
    display: DisplayVoicing,
}

#[derive(Serialize)]
struct CamelotEntry {
    code: CamelotCode,
    key: String,
}

#[derive(Serialize)]
struct CamelotReport {
    code: CamelotCode,
    key: String,
    neighbours: Vec<CamelotEntry>,
}

fn main() {
    env_logger::init_from_env(env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn"));

    let args: Vec<String> = env::args().skip(1).collect();

    let mut flats = false;
    let mut config_path: Option<&String> = None;
    let mut rest: Vec<&str> = Vec::new();

    // Parse flags
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--flats" => flats = true,
            "--config" => match iter.next() {
                Some(path) => config_path = Some(path),
                None => {
                    eprintln!("--config needs a file path");
                    process::exit(1);
                }
            },
            "-h" | "--help" => {
                println!("{}", USAGE);
                return;
            }
            other => rest.push(other),
        }
    }

    if rest.is_empty() {
        eprintln!("{}", USAGE);
        process::exit(1);
    }

    // Read configuration
    let config = match config_path {
        Some(path) => {
            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    eprintln!("Error reading file '{}': {}", path, e);
                    process::exit(1);
                }
            };
            match FretboardConfig::from_yaml(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error in '{}': {}", path, e);
                    process::exit(1);
                }
            }
        }
        None => FretboardConfig::default(),
    };
    let prefer_flats = flats || config.prefer_flats;

    match run(&rest, &config, prefer_flats) {
        Ok(yaml) => print!("{}", yaml),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run(args: &[&str], config: &FretboardConfig, prefer_flats: bool) -> Result<String, String> {
    match args {
        ["chord", root, chord_type, more @ ..] => {
            let (inversion, degree) = match more {
                [] => (0, 1),
                [n] => (parse_number::<usize>(n, "inversion")?, 1),
                [n, degree] => (
                    parse_number::<usize>(n, "inversion")?,
                    parse_number::<u8>(degree, "degree")?,
                ),
                _ => return Err(usage_for("chord <root> <type> [inversion] [degree]")),
            };
            if !(1..=7).contains(&degree) {
                return Err(format!("Invalid degree: {} (expected 1-7)", degree));
            }
            chord_report(root, chord_type, inversion, degree, prefer_flats)
        }
        ["scale", root, scale_type, more @ ..] => {
            let (start, end) = match more {
                [] => (0, config.fret_count as i32),
                [start] => (parse_number(start, "start fret")?, config.fret_count as i32),
                [start, end] => (
                    parse_number(start, "start fret")?,
                    parse_number(end, "end fret")?,
                ),
                _ => return Err(usage_for("scale <root> <scale-type> [start] [end]")),
            };
            let root: PitchClass = root.parse().map_err(|e| format!("{}", e))?;
            let scale_type: ScaleType = scale_type.parse().map_err(|e| format!("{}", e))?;
            let positions: Vec<FretPosition> =
                config
                    .fretboard()
                    .scale_pattern(root.name(), scale_type, start, end, prefer_flats);
            to_yaml(&positions)
        }
        ["root-fret", root] => {
            let root: PitchClass = root.parse().map_err(|e| format!("{}", e))?;
            to_yaml(&RootFret {
                root: root.spell(prefer_flats).to_string(),
                fret: config.fretboard().find_root_position_fret(root.name()),
            })
        }
        ["voicings", root, chord_type] => {
            PitchClass::parse(root).ok_or_else(|| format!("Unknown note: {}", root))?;
            let chord_type: ChordType = chord_type.parse().map_err(|e| format!("{}", e))?;
            let reports: Vec<VoicingReport> = VoicingStore::builtin()
                .voicings(root, chord_type)
                .iter()
                .map(|voicing| VoicingReport {
                    voicing,
                    display: display_voicing(voicing),
                })
                .collect();
            to_yaml(&reports)
        }
        ["key", name @ ..] if !name.is_empty() => {
            let key: Key = name.join(" ").parse().map_err(|e| format!("{}", e))?;
            to_yaml(&key.info())
        }
        ["tap", key, string, fret] => {
            let key: Key = key.parse().map_err(|e| format!("{}", e))?;
            let string: usize = parse_number(string, "string")?;
            let fret: u8 = parse_number(fret, "fret")?;
            if config.tuning != STANDARD_TUNING {
                return Err("tap needs standard tuning, chord shapes are written for it".to_string());
            }
            to_yaml(&select_voicing_in_key(&key, &config.fretboard(), string, fret))
        }
        ["camelot", code] => {
            let code: CamelotCode = code.parse().map_err(|e| format!("{}", e))?;
            to_yaml(&CamelotReport {
                code,
                key: code.key().name(),
                neighbours: code
                    .neighbours()
                    .into_iter()
                    .map(|code| CamelotEntry {
                        code,
                        key: code.key().name(),
                    })
                    .collect(),
            })
        }
        _ => Err(USAGE.to_string()),
    }
}

fn chord_report(
    root: &str,
    chord_type: &str,
    inversion: usize,
    degree: u8,
    prefer_flats: bool,
) -> Result<String, String> {
    let pitch: PitchClass = root.parse().map_err(|e| format!("{}", e))?;
    let chord_type: ChordType = chord_type.parse().map_err(|e| format!("{}", e))?;
    // A flat-spelled root keeps flats
    let flats = prefer_flats || root.contains('b') || root.contains('\u{266d}');
    let chord = Chord::new(pitch, chord_type, inversion);

    to_yaml(&ChordReport {
        symbol: chord.symbol(flats),
        name: chord.name(flats),
        notes: chord.notes(flats),
        inversion: chord::inversion_name(chord.inversion),
        inversions: chord::available_inversions(chord_type),
        extensions: chord::available_extensions(chord_type, degree),
    })
}

fn parse_number<T: std::str::FromStr>(value: &str, what: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("Invalid {}: {}", what, value))
}

fn usage_for(command: &str) -> String {
    format!("Usage: keychords {}", command)
}

fn to_yaml<T: Serialize>(value: &T) -> Result<String, String> {
    serde_yaml::to_string(value).map_err(|e| e.to_string())
}
