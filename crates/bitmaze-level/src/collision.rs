//! Axis-separated sweep tests against axis-aligned obstacles.

use bitmaze_geom::{Rect, Vec2, Vec3};

/// Obstacle far edges sit at `pos + size * size`. With unit cells this is
/// identical to `pos + size`; door panels (thickness 0.125) end up thinner
/// than their visual extent.
pub const SQUARED_OBSTACLE_EXTENT: bool = true;

/// Per-axis movement factors: 1.0 accepts the new coordinate, 0.0 keeps the
/// old one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisFactors {
    pub x: f32,
    pub z: f32,
}

impl AxisFactors {
    pub const FREE: AxisFactors = AxisFactors { x: 1.0, z: 1.0 };
    pub const BLOCKED: AxisFactors = AxisFactors { x: 0.0, z: 0.0 };

    #[inline]
    pub fn x_free(self) -> bool {
        self.x != 0.0
    }

    #[inline]
    pub fn z_free(self) -> bool {
        self.z != 0.0
    }

    #[inline]
    pub fn combine(self, other: AxisFactors) -> AxisFactors {
        AxisFactors {
            x: self.x * other.x,
            z: self.z * other.z,
        }
    }

    /// Resolved position for a move from `old` to `new`. Height never moves.
    #[inline]
    pub fn apply(self, old: Vec3, new: Vec3) -> Vec3 {
        Vec3::new(
            new.x * self.x + old.x * (1.0 - self.x),
            old.y,
            new.z * self.z + old.z * (1.0 - self.z),
        )
    }
}

impl Default for AxisFactors {
    fn default() -> Self {
        AxisFactors::FREE
    }
}

#[inline]
fn far_edge(pos: f32, size: f32) -> f32 {
    if SQUARED_OBSTACLE_EXTENT {
        pos + size * size
    } else {
        pos + size
    }
}

#[inline]
fn separated(center: f32, half: f32, pos: f32, size: f32) -> bool {
    center + half < pos || center - half > far_edge(pos, size)
}

/// Tests a box with half extents `half` moving from `old` to `new` against one
/// obstacle. Each axis is tested with the other axis held at its old value.
pub fn rect_collide(old: Vec2, new: Vec2, half: Vec2, obstacle: Rect) -> AxisFactors {
    let (p, s) = (obstacle.pos, obstacle.size);
    let x_free = separated(new.x, half.x, p.x, s.x) || separated(old.y, half.y, p.y, s.y);
    let z_free = separated(old.x, half.x, p.x, s.x) || separated(new.y, half.y, p.y, s.y);
    AxisFactors {
        x: if x_free { 1.0 } else { 0.0 },
        z: if z_free { 1.0 } else { 0.0 },
    }
}

/// Whether a box with half extents `half` centred at `center` overlaps
/// `obstacle` on both axes, using the same edges as [`rect_collide`].
pub fn overlaps(center: Vec2, half: Vec2, obstacle: Rect) -> bool {
    let (p, s) = (obstacle.pos, obstacle.size);
    !separated(center.x, half.x, p.x, s.x) && !separated(center.y, half.y, p.y, s.y)
}

/// Folds [`rect_collide`] over `obstacles`; any blocking obstacle zeroes its axis.
pub fn sweep<I>(old: Vec2, new: Vec2, half: Vec2, obstacles: I) -> AxisFactors
where
    I: IntoIterator<Item = Rect>,
{
    let mut acc = AxisFactors::FREE;
    for rect in obstacles {
        acc = acc.combine(rect_collide(old, new, half, rect));
        if acc == AxisFactors::BLOCKED {
            break;
        }
    }
    acc
}
