use bitmaze_geom::Vec2;
use bitmaze_map::{Grid, SpecialCode, classify};

use crate::constants::{CEILING_LEVEL, FLOOR_LEVEL};
use crate::error::{DoorPlacementFault, GenerateError};
use crate::mesh_build::{MeshBuild, Winding};
use crate::plane::{Plane, Side};
use crate::sink::MeshSink;

/// Static wall boundary between an open and a solid cell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

/// Which way a door panel spans its cell.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DoorAxis {
    /// West and east neighbours are solid; the panel runs along X.
    AlongX,
    /// North and south neighbours are solid; the panel runs along Z.
    AlongZ,
}

/// A validated door cell, handed to the level to spawn the door.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DoorSite {
    pub x: i32,
    pub z: i32,
    pub axis: DoorAxis,
}

/// Everything generation produces: the static mesh plus the data the level
/// keeps for collision and doors.
#[derive(Default, Clone, Debug)]
pub struct LevelGeometry {
    pub mesh: MeshBuild,
    pub segments: Vec<Segment>,
    pub doors: Vec<DoorSite>,
}

impl LevelGeometry {
    #[inline]
    pub fn upload_to(&self, sink: &mut impl MeshSink) {
        sink.upload(&self.mesh.vertices, &self.mesh.idx);
    }
}

/// Validates the door cell at `(x, z)`: exactly one opposite neighbour pair
/// must be solid.
pub fn door_axis(grid: &Grid, x: i32, z: i32) -> Result<DoorAxis, GenerateError> {
    let north_south = grid.is_solid(x, z - 1) && grid.is_solid(x, z + 1);
    let east_west = grid.is_solid(x - 1, z) && grid.is_solid(x + 1, z);
    let fault = match (north_south, east_west) {
        (true, false) => return Ok(DoorAxis::AlongZ),
        (false, true) => return Ok(DoorAxis::AlongX),
        (false, false) => DoorPlacementFault::Unenclosed,
        (true, true) => DoorPlacementFault::Enclosed,
    };
    Err(GenerateError::InvalidDoorPlacement { x, z, fault })
}

/// Builds the level mesh, collision segments and door sites from `grid`.
///
/// Cells are visited with `x` outer and `z` inner. Solid cells emit nothing;
/// each open cell emits a floor, a ceiling, and one wall per solid neighbour
/// (out-of-bounds neighbours are solid). Any invalid door aborts the build.
pub fn build_level_geometry(grid: &Grid) -> Result<LevelGeometry, GenerateError> {
    let mut out = LevelGeometry::default();
    out.mesh.reserve_quads(grid.width * grid.height * 2);

    for x in 0..grid.width as i32 {
        for z in 0..grid.height as i32 {
            let cell = classify(grid, x, z);
            if !cell.open {
                continue;
            }
            let floor_tex = cell.floor_box();
            let wall_tex = cell.wall_box();

            match cell.special {
                SpecialCode::Door => {
                    let axis = door_axis(grid, x, z)?;
                    out.doors.push(DoorSite { x, z, axis });
                }
                SpecialCode::Reserved(code) => {
                    log::trace!("ignoring special code {} at ({}, {})", code, x, z);
                }
                SpecialCode::None => {}
            }

            out.mesh.emit_plane(
                Plane::FloorCeiling { x, z, y: FLOOR_LEVEL },
                &floor_tex,
                Winding::Flipped,
            );
            out.mesh.emit_plane(
                Plane::FloorCeiling { x, z, y: CEILING_LEVEL },
                &floor_tex,
                Winding::Natural,
            );

            for side in Side::ALL {
                let (dx, dz) = side.delta();
                if grid.is_solid(x + dx, z + dz) {
                    out.mesh
                        .emit_plane(side.wall_plane(x, z), &wall_tex, side.winding());
                    out.segments.push(side.segment(x, z));
                }
            }
        }
    }

    log::debug!(
        "generated {}x{} level: {} quads, {} segments, {} doors",
        grid.width,
        grid.height,
        out.mesh.quad_count(),
        out.segments.len(),
        out.doors.len()
    );
    Ok(out)
}
