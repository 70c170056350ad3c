//! Shared constants for bitmaze-mesh-cpu. One map cell is one world unit.

pub const CELL_WIDTH: f32 = 1.0; // X extent of a cell
pub const CELL_LENGTH: f32 = 1.0; // Z extent of a cell
pub const CELL_HEIGHT: f32 = 1.0; // floor-to-ceiling

pub(crate) const FLOOR_LEVEL: f32 = 0.0;
pub(crate) const CEILING_LEVEL: f32 = CELL_HEIGHT;

pub(crate) const VERTS_PER_QUAD: usize = 4;
pub(crate) const INDICES_PER_QUAD: usize = 6;
