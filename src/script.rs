//! Scripted input for `bitmaze simulate`.
//!
//! ```toml
//! dt = 0.0166
//!
//! [[step]]
//! ticks = 30
//! move = [0.0, 1.0]
//!
//! [[step]]
//! interact = true
//! ```

use std::error::Error;
use std::fs;
use std::path::Path;

use bitmaze_geom::Vec2;
use serde::Deserialize;

use crate::runtime::{Frame, Input, Session};

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Script {
    /// Seconds per tick unless a step overrides it.
    #[serde(default = "default_dt")]
    pub dt: f32,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}
fn default_dt() -> f32 {
    1.0 / 60.0
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Step {
    #[serde(default = "default_ticks")]
    pub ticks: u32,
    /// `[x, z]` direction held for every tick of the step.
    #[serde(default, rename = "move")]
    pub wish: [f32; 2],
    /// Pressed on the first tick only.
    #[serde(default)]
    pub interact: bool,
    #[serde(default)]
    pub close: bool,
    #[serde(default)]
    pub dt: Option<f32>,
}
fn default_ticks() -> u32 {
    1
}

impl Script {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        let script = Self::from_toml_str(&s)?;
        Ok(script)
    }

    pub fn total_ticks(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.ticks)).sum()
    }

    /// Expands the steps into per-tick inputs with their `dt`.
    pub fn inputs(&self) -> impl Iterator<Item = (Input, f32)> + '_ {
        self.steps.iter().flat_map(move |step| {
            let dt = step.dt.unwrap_or(self.dt);
            let wish = Vec2::new(step.wish[0], step.wish[1]);
            (0..step.ticks).map(move |i| {
                let first = i == 0;
                let input = Input {
                    wish,
                    interact: step.interact && first,
                    close: step.close && first,
                };
                (input, dt)
            })
        })
    }

    /// Feeds every tick through `session`, returning the frames in order.
    pub fn run(&self, session: &mut Session) -> Vec<Frame> {
        let mut frames = Vec::with_capacity(self.total_ticks() as usize);
        for (input, dt) in self.inputs() {
            let frame = session.step(input, dt);
            log::trace!(
                target: "walker",
                "tick {}: ({:.3}, {:.3}) {:?}",
                frame.tick,
                frame.position.x,
                frame.position.z,
                frame.factors
            );
            frames.push(frame);
        }
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
dt = 0.5

[[step]]
ticks = 3
move = [1.0, 0.0]

[[step]]
interact = true
ticks = 2
dt = 0.25

[[step]]
close = true
"#;

    #[test]
    fn steps_expand_into_ticks() {
        let script = Script::from_toml_str(SAMPLE).unwrap();
        assert_eq!(script.steps.len(), 3);
        assert_eq!(script.total_ticks(), 6);

        let inputs: Vec<(Input, f32)> = script.inputs().collect();
        assert_eq!(inputs.len(), 6);
        assert_eq!(inputs[0].0.wish, Vec2::new(1.0, 0.0));
        assert_eq!(inputs[2].1, 0.5);
        assert!(inputs[3].0.interact);
        assert!(!inputs[4].0.interact);
        assert_eq!(inputs[4].1, 0.25);
        assert!(inputs[5].0.close);
        assert_eq!(inputs[5].0.wish, Vec2::ZERO);
    }

    #[test]
    fn empty_script_uses_sixty_hertz() {
        let script = Script::from_toml_str("").unwrap();
        assert!(script.steps.is_empty());
        assert!((script.dt - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn bundled_walk_crosses_the_demo_door() {
        use crate::assets;
        use crate::config::AppConfig;
        use crate::player::Walker;
        use bitmaze_level::{DoorState, Level};

        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let cfg = AppConfig::load_or_default(&root.join("bitmaze.toml")).unwrap();
        let grid = assets::load_map(&assets::maps_dir(root).join("demo.png")).unwrap();
        let level = Level::new(grid, &cfg.level).unwrap();
        let spawn = Walker::spawn_point(&level, &cfg.walker).unwrap();
        let mut session = Session::new(level, Walker::new(spawn, &cfg.walker));

        let script = Script::load_from_path(&root.join("assets/scripts/walk.toml")).unwrap();
        let frames = script.run(&mut session);
        assert_eq!(frames.len(), 57);
        // stopped by the closed panel before the interact
        assert!((frames[11].position.x - 4.25).abs() < 1e-3);
        assert!(session.walker.pos.x > 4.9);
        assert_eq!(session.level.doors()[0].state(), DoorState::Closed);
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("walk.toml");
        fs::write(&path, SAMPLE).unwrap();
        let script = Script::load_from_path(&path).unwrap();
        assert_eq!(script.total_ticks(), 6);
        assert!(Script::load_from_path(&dir.path().join("missing.toml")).is_err());
    }
}
