//! CPU level mesher: turns a decoded map grid into floor, ceiling and wall quads.
#![forbid(unsafe_code)]

mod build;
pub mod constants;
mod door_mesh;
mod error;
mod mesh_build;
mod plane;
mod sink;

pub use build::{DoorAxis, DoorSite, LevelGeometry, Segment, build_level_geometry, door_axis};
pub use door_mesh::{DoorDims, door_panel_mesh};
pub use error::{DoorPlacementFault, GenerateError};
pub use mesh_build::{MeshBuild, Vertex, Winding};
pub use plane::{Plane, Side};
pub use sink::MeshSink;
