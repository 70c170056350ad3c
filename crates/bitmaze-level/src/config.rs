use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct LevelConfig {
    #[serde(default)]
    pub doors: DoorParams,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Parse(#[from] toml::de::Error),
    #[error("doors.{field} must be {rule}, got {value}")]
    Invalid {
        field: &'static str,
        rule: &'static str,
        value: f32,
    },
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DoorParams {
    /// Interact range, measured from the door's translation.
    #[serde(default = "default_open_distance")]
    pub open_distance: f32,
    /// How far an open door has slid from its closed spot.
    #[serde(default = "default_slide_distance")]
    pub slide_distance: f32,
    /// Slide speed in units per second.
    #[serde(default = "default_speed")]
    pub speed: f32,
    #[serde(default = "default_length")]
    pub length: f32,
    #[serde(default = "default_thickness")]
    pub thickness: f32,
    /// Atlas slot for the door panel.
    #[serde(default = "default_texture_slot")]
    pub texture_slot: u32,
}
fn default_open_distance() -> f32 {
    1.0
}
fn default_slide_distance() -> f32 {
    0.9
}
fn default_speed() -> f32 {
    1.0
}
fn default_length() -> f32 {
    1.0
}
fn default_thickness() -> f32 {
    0.125
}
fn default_texture_slot() -> u32 {
    15
}
impl Default for DoorParams {
    fn default() -> Self {
        Self {
            open_distance: default_open_distance(),
            slide_distance: default_slide_distance(),
            speed: default_speed(),
            length: default_length(),
            thickness: default_thickness(),
            texture_slot: default_texture_slot(),
        }
    }
}

impl DoorParams {
    /// Rejects values a door cannot move with. Speed and panel dimensions
    /// must be positive; distances may be zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("speed", self.speed),
            ("length", self.length),
            ("thickness", self.thickness),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid { field, rule: "positive", value });
            }
        }
        let non_negative = [
            ("open_distance", self.open_distance),
            ("slide_distance", self.slide_distance),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid { field, rule: "non-negative", value });
            }
        }
        Ok(())
    }
}

impl LevelConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.doors.validate()
    }

    pub fn load_from_path(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let s = fs::read_to_string(path)?;
        let cfg = Self::from_toml_str(&s)?;
        Ok(cfg)
    }
}
