//! Game balance parameters
//!
//! Every gameplay constant lives here so a run can be rebalanced without a
//! rebuild. Loaded from LocalStorage on the web and from a JSON file natively.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Why a tuning document was rejected
#[derive(Error, Debug)]
pub enum TuningError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid range for {field}: min {min} > max {max}")]
    InvertedRange {
        field: &'static str,
        min: f32,
        max: f32,
    },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
}

/// Gameplay balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    pub player_init_size: f32,
    pub player_min_size: f32,
    pub player_max_speed: f32,
    pub player_min_speed: f32,
    /// Speed lost per frame without eating
    pub player_speed_decay: f32,

    // === Enemies ===
    pub enemy_init_size: f32,
    pub enemy_max_size: f32,
    pub enemy_max_speed: f32,
    pub enemy_min_speed: f32,
    /// Speed lost per successful bite
    pub enemy_speed_decrement: f32,
    /// Size moved from the player to the enemy per bite
    pub feed_increment: f32,
    pub aggression_range: f32,

    // === Food ===
    pub food_min_size: f32,
    pub food_max_size: f32,

    // === Spawning ===
    pub enemy_interval_ms: f64,
    pub food_interval_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_init_size: PLAYER_INIT_SIZE,
            player_min_size: PLAYER_MIN_SIZE,
            player_max_speed: PLAYER_MAX_SPEED,
            player_min_speed: PLAYER_MIN_SPEED,
            player_speed_decay: PLAYER_SPEED_DECAY,

            enemy_init_size: ENEMY_INIT_SIZE,
            enemy_max_size: ENEMY_MAX_SIZE,
            enemy_max_speed: ENEMY_MAX_SPEED,
            enemy_min_speed: ENEMY_MIN_SPEED,
            enemy_speed_decrement: ENEMY_SPEED_DECREMENT,
            feed_increment: FEED_INCREMENT,
            aggression_range: AGGRESSION_RANGE,

            food_min_size: FOOD_MIN_SIZE,
            food_max_size: FOOD_MAX_SIZE,

            enemy_interval_ms: ENEMY_INTERVAL_MS,
            food_interval_ms: FOOD_INTERVAL_MS,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document. Missing fields keep defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load from a JSON file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject balance that would break the simulation's bounds
    pub fn validate(&self) -> Result<(), TuningError> {
        let ranges = [
            ("player_size", self.player_min_size, self.player_init_size),
            ("player_speed", self.player_min_speed, self.player_max_speed),
            ("enemy_size", self.enemy_init_size, self.enemy_max_size),
            ("enemy_speed", self.enemy_min_speed, self.enemy_max_speed),
            ("food_size", self.food_min_size, self.food_max_size),
        ];
        for (field, min, max) in ranges {
            if min > max {
                return Err(TuningError::InvertedRange { field, min, max });
            }
        }

        let positives = [
            ("player_min_size", self.player_min_size as f64),
            ("player_max_speed", self.player_max_speed as f64),
            ("enemy_max_speed", self.enemy_max_speed as f64),
            ("feed_increment", self.feed_increment as f64),
            ("aggression_range", self.aggression_range as f64),
            ("enemy_interval_ms", self.enemy_interval_ms),
            ("food_interval_ms", self.food_interval_ms),
        ];
        for (field, value) in positives {
            if value.is_nan() || value <= 0.0 {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        // Decrements only ever slow things down, and food only ever grows the player
        let non_negatives = [
            ("player_speed_decay", self.player_speed_decay),
            ("enemy_speed_decrement", self.enemy_speed_decrement),
            ("food_min_size", self.food_min_size),
            ("food_max_size", self.food_max_size),
        ];
        for (field, value) in non_negatives {
            if value.is_nan() || value < 0.0 {
                return Err(TuningError::Negative {
                    field,
                    value: value as f64,
                });
            }
        }

        Ok(())
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "cell_chomp_tuning";

    /// Environment variable naming a native tuning file
    pub const ENV_VAR: &'static str = "CELL_CHOMP_TUNING";

    /// Load tuning from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring stored tuning: {}", e),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Load tuning from the file named by `CELL_CHOMP_TUNING`, if set
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_VAR) else {
            log::info!("Using default tuning");
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning file {}: {}", path, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "aggression_range": 150.0 }"#).unwrap();
        assert_eq!(tuning.aggression_range, 150.0);
        assert_eq!(tuning.player_max_speed, PLAYER_MAX_SPEED);
        assert_eq!(tuning.food_interval_ms, FOOD_INTERVAL_MS);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = Tuning::from_json(r#"{ "enemy_min_speed": 3.0, "enemy_max_speed": 2.0 }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            TuningError::InvertedRange {
                field: "enemy_speed",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let err = Tuning::from_json(r#"{ "food_interval_ms": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::NotPositive {
                field: "food_interval_ms",
                ..
            }
        ));
    }

    #[test]
    fn test_negative_speed_decay_rejected() {
        let err = Tuning::from_json(r#"{ "player_speed_decay": -1.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Negative {
                field: "player_speed_decay",
                ..
            }
        ));
    }

    #[test]
    fn test_negative_enemy_decrement_rejected() {
        let err = Tuning::from_json(r#"{ "enemy_speed_decrement": -0.5 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Negative {
                field: "enemy_speed_decrement",
                ..
            }
        ));
    }

    #[test]
    fn test_negative_food_sizes_rejected() {
        let err = Tuning::from_json(r#"{ "food_min_size": -14.0, "food_max_size": -10.0 }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            TuningError::Negative {
                field: "food_min_size",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_max_speed_rejected() {
        let err = Tuning::from_json(r#"{ "player_min_speed": 0.0, "player_max_speed": 0.0 }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            TuningError::NotPositive {
                field: "player_max_speed",
                ..
            }
        ));

        let err = Tuning::from_json(r#"{ "enemy_min_speed": -2.0, "enemy_max_speed": -1.0 }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            TuningError::NotPositive {
                field: "enemy_max_speed",
                ..
            }
        ));
    }

    #[test]
    fn test_nan_decay_rejected() {
        let tuning = Tuning {
            player_speed_decay: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::Negative {
                field: "player_speed_decay",
                ..
            })
        ));
    }

    #[test]
    fn test_garbage_is_parse_error() {
        assert!(matches!(
            Tuning::from_json("not json"),
            Err(TuningError::Parse(_))
        ));
    }
}
