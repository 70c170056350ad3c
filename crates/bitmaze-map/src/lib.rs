//! Map grid decoding: cell classification and texture atlas lookup.
#![forbid(unsafe_code)]

pub mod atlas;
pub mod cell;
pub mod grid;

pub use atlas::{ATLAS_SIZE, ATLAS_SLOTS, TexBox, atlas_box};
pub use cell::{Cell, SpecialCode, classify};
pub use grid::Grid;
