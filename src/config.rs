use std::error::Error;
use std::fs;
use std::path::Path;

use bitmaze_level::LevelConfig;
use serde::Deserialize;

/// Contents of `bitmaze.toml`: the level tables plus the walker.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(flatten)]
    pub level: LevelConfig,
    #[serde(default)]
    pub walker: WalkerParams,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct WalkerParams {
    #[serde(default = "default_half_extent")]
    pub half_extent: f32,
    /// Units per second.
    #[serde(default = "default_walker_speed")]
    pub speed: f32,
    /// `[x, z]`; the centre of the first open cell when absent.
    #[serde(default)]
    pub spawn: Option<[f32; 2]>,
}
fn default_half_extent() -> f32 {
    0.2
}
fn default_walker_speed() -> f32 {
    4.0
}
impl Default for WalkerParams {
    fn default() -> Self {
        Self {
            half_extent: default_half_extent(),
            speed: default_walker_speed(),
            spawn: None,
        }
    }
}

pub const DEFAULT_CONFIG_FILE: &str = "bitmaze.toml";

impl AppConfig {
    pub fn load_from_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        let cfg: AppConfig = toml::from_str(&s)?;
        cfg.level.validate()?;
        Ok(cfg)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, Box<dyn Error>> {
        if !path.exists() {
            log::warn!("config {} not found; using defaults", path.display());
            return Ok(AppConfig::default());
        }
        let cfg = Self::load_from_path(path)?;
        log::debug!("loaded config {}", path.display());
        Ok(cfg)
    }
}
