use bitmaze_geom::{Vec2, Vec3};
use bitmaze_level::{AxisFactors, Level};

use crate::config::WalkerParams;

#[derive(Clone, Debug, PartialEq)]
pub struct Walker {
    pub pos: Vec3,   // feet position
    pub yaw: f32,    // degrees in the XZ plane, 0 = +X, 90 = +Z
    pub half_extent: f32,
    pub speed: f32,  // units/s
}

impl Walker {
    pub fn new(spawn: Vec3, params: &WalkerParams) -> Self {
        Self {
            pos: spawn,
            yaw: 90.0,
            half_extent: params.half_extent,
            speed: params.speed,
        }
    }

    /// Configured spawn, or the centre of the first open cell.
    pub fn spawn_point(level: &Level, params: &WalkerParams) -> Option<Vec3> {
        if let Some([x, z]) = params.spawn {
            return Some(Vec3::new(x, 0.0, z));
        }
        let (x, z) = level.grid().first_open()?;
        Some(Vec3::new(x as f32 + 0.5, 0.0, z as f32 + 0.5))
    }

    /// Unit direction the walker faces.
    pub fn facing(&self) -> Vec2 {
        let r = self.yaw.to_radians();
        Vec2::new(r.cos(), r.sin())
    }

    /// Moves toward `wish` (XZ) at walking speed and resolves the move against
    /// the level one axis at a time.
    pub fn update(&mut self, level: &Level, wish: Vec2, dt: f32) -> AxisFactors {
        let len = wish.length();
        if len == 0.0 || dt <= 0.0 {
            return AxisFactors::FREE;
        }
        let dir = wish * (1.0 / len);
        self.yaw = dir.y.atan2(dir.x).to_degrees();

        let step = dir * (self.speed * dt);
        let target = self.pos + Vec3::new(step.x, 0.0, step.y);
        let factors = level.check_collision(self.pos, target, self.half_extent, self.half_extent);
        self.pos = factors.apply(self.pos, target);
        factors
    }
}
