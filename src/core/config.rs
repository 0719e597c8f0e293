//=========================================================================
// Game Configuration
//=========================================================================
//
// Physics constants, world presets and their loading.
//
// Sources, in increasing priority:
//   preset defaults → TOML file → SCROLLER_* environment variables
//
// File format:
// ```toml
// preset = "compact"      # or "decorated"
// tps = 60.0
//
// [physics]               # every key optional, falls back to the preset
// ground_y = 75.0
// jump_force = -3.0
// gravity = 0.15
// move_speed = 6.0
// world_width = 4000.0
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::render::{Landmark, ParallaxLayer};
use crate::core::sim::PLAYER_MARGIN;

//=== ConfigError =========================================================

/// Configuration loading and validation failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has mistyped keys.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of its allowed range.
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    /// Preset name not recognized.
    #[error("unknown world preset '{0}' (expected 'decorated' or 'compact')")]
    UnknownPreset(String),
}

//=== PhysicsConfig =======================================================

/// Numeric constants of the simulation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConfig {
    /// Resting vertical offset (percentage-of-viewport-height units).
    pub ground_y: f64,

    /// Initial vertical velocity of a jump. Negative is upward.
    pub jump_force: f64,

    /// Per-frame velocity increment while airborne.
    pub gravity: f64,

    /// Per-frame horizontal displacement while a direction is held.
    pub move_speed: f64,

    /// Horizontal world bound.
    pub world_width: f64,
}

impl PhysicsConfig {
    /// Checks every constant against the ranges the step relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
            if value.is_finite() {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be finite, got {}", value),
                })
            }
        }

        finite("ground_y", self.ground_y)?;
        finite("jump_force", self.jump_force)?;
        finite("gravity", self.gravity)?;
        finite("move_speed", self.move_speed)?;
        finite("world_width", self.world_width)?;

        if self.jump_force >= 0.0 {
            return Err(ConfigError::Invalid {
                field: "jump_force",
                reason: format!("must be negative (upward), got {}", self.jump_force),
            });
        }
        if self.gravity <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "gravity",
                reason: format!("must be positive, got {}", self.gravity),
            });
        }
        if self.move_speed <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "move_speed",
                reason: format!("must be positive, got {}", self.move_speed),
            });
        }
        if self.world_width < 2.0 * PLAYER_MARGIN {
            return Err(ConfigError::Invalid {
                field: "world_width",
                reason: format!(
                    "must be at least {} to fit the player bounds, got {}",
                    2.0 * PLAYER_MARGIN,
                    self.world_width
                ),
            });
        }
        Ok(())
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        WorldPreset::default().physics()
    }
}

//=== WorldPreset =========================================================

/// The two shipped tunings of the same algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WorldPreset {
    /// Larger world with landmarks along the way.
    Decorated,

    /// Compact default world, no landmarks.
    #[default]
    Compact,
}

impl WorldPreset {
    /// Physics constants of this preset.
    pub fn physics(self) -> PhysicsConfig {
        match self {
            Self::Decorated => PhysicsConfig {
                ground_y: 70.0,
                jump_force: -3.5,
                gravity: 0.18,
                move_speed: 8.0,
                world_width: 8000.0,
            },
            Self::Compact => PhysicsConfig {
                ground_y: 75.0,
                jump_force: -3.0,
                gravity: 0.15,
                move_speed: 6.0,
                world_width: 4000.0,
            },
        }
    }

    /// Background layers, farthest first.
    pub fn layers(self) -> Vec<ParallaxLayer> {
        ParallaxLayer::defaults()
    }

    /// Static landmarks, ordered by world X.
    pub fn landmarks(self) -> Vec<Landmark> {
        match self {
            Self::Decorated => Landmark::defaults(),
            Self::Compact => Vec::new(),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Decorated => "decorated",
            Self::Compact => "compact",
        }
    }
}

impl FromStr for WorldPreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "decorated" => Ok(Self::Decorated),
            "compact" => Ok(Self::Compact),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }
}

impl fmt::Display for WorldPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//=== File Schema =========================================================

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    preset: Option<String>,
    tps: Option<f64>,
    physics: Option<PhysicsOverrides>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PhysicsOverrides {
    ground_y: Option<f64>,
    jump_force: Option<f64>,
    gravity: Option<f64>,
    move_speed: Option<f64>,
    world_width: Option<f64>,
}

impl PhysicsOverrides {
    fn apply(&self, base: PhysicsConfig) -> PhysicsConfig {
        PhysicsConfig {
            ground_y: self.ground_y.unwrap_or(base.ground_y),
            jump_force: self.jump_force.unwrap_or(base.jump_force),
            gravity: self.gravity.unwrap_or(base.gravity),
            move_speed: self.move_speed.unwrap_or(base.move_speed),
            world_width: self.world_width.unwrap_or(base.world_width),
        }
    }
}

//=== GameConfig ==========================================================

/// Complete configuration of one game view and its tick rate.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub preset: WorldPreset,
    pub physics: PhysicsConfig,

    /// Target ticks per second of the core loop.
    pub tps: f64,
}

impl GameConfig {
    /// Default tick rate, one simulation step per 60 Hz display frame.
    pub const DEFAULT_TPS: f64 = 60.0;

    /// Configuration of a preset with its own physics.
    pub fn from_preset(preset: WorldPreset) -> Self {
        Self {
            preset,
            physics: preset.physics(),
            tps: Self::DEFAULT_TPS,
        }
    }

    /// Parses a TOML document. Missing keys fall back to the preset.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(text)?;

        let preset = match file.preset.as_deref() {
            Some(name) => name.parse()?,
            None => WorldPreset::default(),
        };

        let physics = match &file.physics {
            Some(overrides) => overrides.apply(preset.physics()),
            None => preset.physics(),
        };

        let config = Self {
            preset,
            physics,
            tps: file.tps.unwrap_or(Self::DEFAULT_TPS),
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        info!(target: "config", "Loaded config from {} (preset: {})", path.display(), config.preset);
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns preset defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.is_file() {
            Self::load(path)
        } else {
            info!(target: "config", "No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    //--- Environment Overrides --------------------------------------------

    /// Applies `SCROLLER_*` overrides from the process environment.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_env_with(|name| std::env::var(name).ok())
    }

    /// Applies overrides from an arbitrary variable lookup.
    ///
    /// `SCROLLER_PRESET` switches the preset and resets physics to that
    /// preset's values before the numeric overrides apply. Unparseable
    /// numbers are ignored with a warning.
    pub fn apply_env_with<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("SCROLLER_PRESET") {
            let preset: WorldPreset = name.parse()?;
            if preset != self.preset {
                self.preset = preset;
                self.physics = preset.physics();
            }
        }

        let number = |name: &str| -> Option<f64> {
            let raw = lookup(name)?;
            match raw.trim().parse::<f64>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(target: "config", "Ignoring {}={:?}: not a number", name, raw);
                    None
                }
            }
        };

        if let Some(value) = number("SCROLLER_MOVE_SPEED") {
            self.physics.move_speed = value;
        }
        if let Some(value) = number("SCROLLER_WORLD_WIDTH") {
            self.physics.world_width = value;
        }
        if let Some(value) = number("SCROLLER_TPS") {
            self.tps = value;
        }

        self.validate()?;
        Ok(self)
    }

    /// Validates physics and tick rate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate()?;
        if !(self.tps.is_finite() && self.tps > 0.0) {
            return Err(ConfigError::Invalid {
                field: "tps",
                reason: format!("must be positive, got {}", self.tps),
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_preset(WorldPreset::default())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
