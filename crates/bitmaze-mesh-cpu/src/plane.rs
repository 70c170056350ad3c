use bitmaze_geom::{Vec2, Vec3};

use crate::build::Segment;
use crate::constants::{CELL_HEIGHT, CELL_LENGTH, CELL_WIDTH};
use crate::mesh_build::Winding;

/// The axis-aligned unit rectangle a quad covers. Cell coordinates are grid
/// indices; `y` is a world height.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Plane {
    /// Horizontal quad over cell `(x, z)` at height `y`.
    FloorCeiling { x: i32, z: i32, y: f32 },
    /// Vertical quad in the plane `Z = z`, spanning `[x, x+1]`.
    NorthSouthWall { x: i32, z: i32 },
    /// Vertical quad in the plane `X = x`, spanning `[z, z+1]`.
    EastWestWall { x: i32, z: i32 },
}

impl Plane {
    /// Corner positions in emission order; the atlas box corners line up with
    /// these (see `TexBox::corners`).
    pub fn corners(self) -> [Vec3; 4] {
        match self {
            Plane::FloorCeiling { x, z, y } => {
                let (x0, x1) = span(x, CELL_WIDTH);
                let (z0, z1) = span(z, CELL_LENGTH);
                [
                    Vec3::new(x0, y, z0),
                    Vec3::new(x1, y, z0),
                    Vec3::new(x1, y, z1),
                    Vec3::new(x0, y, z1),
                ]
            }
            Plane::NorthSouthWall { x, z } => {
                let (x0, x1) = span(x, CELL_WIDTH);
                let zw = z as f32 * CELL_LENGTH;
                [
                    Vec3::new(x0, 0.0, zw),
                    Vec3::new(x1, 0.0, zw),
                    Vec3::new(x1, CELL_HEIGHT, zw),
                    Vec3::new(x0, CELL_HEIGHT, zw),
                ]
            }
            Plane::EastWestWall { x, z } => {
                let xw = x as f32 * CELL_WIDTH;
                let (z0, z1) = span(z, CELL_LENGTH);
                [
                    Vec3::new(xw, 0.0, z0),
                    Vec3::new(xw, 0.0, z1),
                    Vec3::new(xw, CELL_HEIGHT, z1),
                    Vec3::new(xw, CELL_HEIGHT, z0),
                ]
            }
        }
    }
}

#[inline]
fn span(i: i32, size: f32) -> (f32, f32) {
    (i as f32 * size, (i + 1) as f32 * size)
}

/// A lateral neighbour of an open cell, in wall emission order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    NegZ,
    PosZ,
    NegX,
    PosX,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::NegZ, Side::PosZ, Side::NegX, Side::PosX];

    /// Grid offset to the neighbour on this side.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Side::NegZ => (0, -1),
            Side::PosZ => (0, 1),
            Side::NegX => (-1, 0),
            Side::PosX => (1, 0),
        }
    }

    /// Wall plane on the boundary between cell `(x, z)` and this neighbour.
    #[inline]
    pub fn wall_plane(self, x: i32, z: i32) -> Plane {
        match self {
            Side::NegZ => Plane::NorthSouthWall { x, z },
            Side::PosZ => Plane::NorthSouthWall { x, z: z + 1 },
            Side::NegX => Plane::EastWestWall { x, z },
            Side::PosX => Plane::EastWestWall { x: x + 1, z },
        }
    }

    /// Winding that turns the wall's front towards cell `(x, z)`.
    #[inline]
    pub fn winding(self) -> Winding {
        match self {
            Side::NegZ | Side::PosX => Winding::Natural,
            Side::PosZ | Side::NegX => Winding::Flipped,
        }
    }

    /// Boundary edge in the XZ plane.
    pub fn segment(self, x: i32, z: i32) -> Segment {
        let (x0, x1) = span(x, CELL_WIDTH);
        let (z0, z1) = span(z, CELL_LENGTH);
        let (start, end) = match self {
            Side::NegZ => (Vec2::new(x0, z0), Vec2::new(x1, z0)),
            Side::PosZ => (Vec2::new(x0, z1), Vec2::new(x1, z1)),
            Side::NegX => (Vec2::new(x0, z0), Vec2::new(x0, z1)),
            Side::PosX => (Vec2::new(x1, z0), Vec2::new(x1, z1)),
        };
        Segment { start, end }
    }
}
