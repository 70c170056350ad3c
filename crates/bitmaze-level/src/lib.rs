//! Runtime level: collision surfaces, doors, and movement/line queries.
#![forbid(unsafe_code)]

pub mod collision;
pub mod config;
pub mod door;
pub mod level;


pub use bitmaze_mesh_cpu::GenerateError;
pub use collision::{AxisFactors, SQUARED_OBSTACLE_EXTENT, overlaps, rect_collide, sweep};
pub use config::{ConfigError, DoorParams, LevelConfig};
pub use door::{Door, DoorState};
pub use level::Level;
