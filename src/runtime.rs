use bitmaze_geom::{Vec2, Vec3};
use bitmaze_level::{AxisFactors, Level};

use crate::player::Walker;

/// How far ahead the line-of-sight probe reaches.
pub const PROBE_RANGE: f32 = 16.0;

/// One tick of intents.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Input {
    /// Desired XZ direction; zero stands still.
    pub wish: Vec2,
    pub interact: bool,
    pub close: bool,
}

/// What a tick produced.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    pub tick: u64,
    pub position: Vec3,
    pub factors: AxisFactors,
    /// Nearest wall or door hit along the walker's facing.
    pub probe: Option<Vec2>,
}

pub struct Session {
    pub level: Level,
    pub walker: Walker,
    tick: u64,
}

impl Session {
    pub fn new(level: Level, walker: Walker) -> Self {
        Self {
            level,
            walker,
            tick: 0,
        }
    }

    #[inline]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Advances one frame: interact commands, door motion, walker movement,
    /// then the line-of-sight probe. A door never closes onto the walker.
    pub fn step(&mut self, input: Input, dt: f32) -> Frame {
        let half = self.walker.half_extent;
        if input.interact {
            let n = self.level.open_doors(self.walker.pos);
            log::debug!(target: "events", "tick {}: interact opened {} door(s)", self.tick, n);
        }
        if input.close {
            let n = self.level.close_doors(self.walker.pos, half, half);
            log::debug!(target: "events", "tick {}: close started on {} door(s)", self.tick, n);
        }
        let n = self.level.clear_doorways(self.walker.pos, half, half);
        if n > 0 {
            log::debug!(target: "events", "tick {}: {} door(s) reopened for the walker", self.tick, n);
        }
        self.level.update(dt);
        let factors = self.walker.update(&self.level, input.wish, dt);

        let eye = self.walker.pos.xz();
        let probe = self
            .level
            .check_intersections(eye, eye + self.walker.facing() * PROBE_RANGE);

        let frame = Frame {
            tick: self.tick,
            position: self.walker.pos,
            factors,
            probe,
        };
        self.tick += 1;
        frame
    }
}
