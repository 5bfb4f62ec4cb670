//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use crate::movement::MovementTuning;

/// Error type for content loading failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a single RON struct from text.
pub fn parse_single<T>(file: &str, contents: &str) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load a single RON struct from disk.
pub fn load_single_file<T>(path: &Path) -> Result<T, ContentLoadError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_single(&file_name, &contents)
}

/// Load movement tuning; fields missing from the file keep their defaults.
pub fn load_tuning(path: &Path) -> Result<MovementTuning, ContentLoadError> {
    let tuning: MovementTuning = load_single_file(path)?;
    validate_tuning(&tuning).map_err(|message| ContentLoadError {
        file: path.display().to_string(),
        message,
    })?;
    Ok(tuning)
}

/// Rejects values the controller cannot use.
pub fn validate_tuning(tuning: &MovementTuning) -> Result<(), String> {
    if tuning.body_width <= 0 || tuning.body_height <= 0 {
        return Err(format!(
            "body size must be positive, got {}x{}",
            tuning.body_width, tuning.body_height
        ));
    }
    if !(0.0..=1.0).contains(&tuning.acceleration) {
        return Err(format!(
            "acceleration must be in [0, 1], got {}",
            tuning.acceleration
        ));
    }
    if tuning.max_jump_hold_time <= 0.0 {
        return Err("max_jump_hold_time must be positive".to_string());
    }
    if tuning.dash_duration_ticks == 0 {
        return Err("dash_duration_ticks must be at least 1".to_string());
    }
    if !(0.0..=1.0).contains(&tuning.dust_chance) {
        return Err(format!(
            "dust_chance must be in [0, 1], got {}",
            tuning.dust_chance
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_tuning_keeps_defaults() {
        let tuning: MovementTuning =
            parse_single("tuning.ron", "(dash_speed: 15.0, dash_cooldown_ticks: 30)").unwrap();

        assert_eq!(tuning.dash_speed, 15.0);
        assert_eq!(tuning.dash_cooldown_ticks, 30);
        assert_eq!(tuning.max_jumps, MovementTuning::default().max_jumps);
        assert!(validate_tuning(&tuning).is_ok());
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse_single::<MovementTuning>("tuning.ron", "(max_speed: )").unwrap_err();
        assert_eq!(err.file, "tuning.ron");
        assert!(err.message.starts_with("Parse error"));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let tuning = MovementTuning {
            acceleration: 1.5,
            ..MovementTuning::default()
        };
        assert!(validate_tuning(&tuning).is_err());

        let tuning = MovementTuning {
            dash_duration_ticks: 0,
            ..MovementTuning::default()
        };
        assert!(validate_tuning(&tuning).is_err());
    }

    #[test]
    fn test_shipped_tuning_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(crate::content::TUNING_PATH);
        let tuning = load_tuning(&path).unwrap();
        assert_eq!(tuning, MovementTuning::default());
    }
}
