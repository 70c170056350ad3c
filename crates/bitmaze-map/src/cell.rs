use crate::atlas::TexBox;
use crate::grid::{CELL_MASK, Grid};

/// Special code that places a door in the cell.
pub const DOOR_CODE: u8 = 16;

/// Non-geometric trigger stored in the blue channel.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SpecialCode {
    None,
    Door,
    /// Any other nonzero code; decoded but ignored.
    Reserved(u8),
}

impl SpecialCode {
    #[inline]
    pub fn from_byte(b: u8) -> SpecialCode {
        match b {
            0 => SpecialCode::None,
            DOOR_CODE => SpecialCode::Door,
            other => SpecialCode::Reserved(other),
        }
    }
}

/// Decoded view of one map cell.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Cell {
    pub open: bool,
    pub special: SpecialCode,
    /// Red channel; selects the wall texture.
    pub wall_tex: u8,
    /// Green channel; selects the floor and ceiling texture.
    pub floor_tex: u8,
}

impl Cell {
    pub const SOLID: Cell = Cell {
        open: false,
        special: SpecialCode::None,
        wall_tex: 0,
        floor_tex: 0,
    };

    #[inline]
    pub fn from_value(value: u32) -> Cell {
        let v = value & CELL_MASK;
        Cell {
            open: v != 0,
            special: SpecialCode::from_byte((v & 0xFF) as u8),
            floor_tex: ((v >> 8) & 0xFF) as u8,
            wall_tex: ((v >> 16) & 0xFF) as u8,
        }
    }

    #[inline]
    pub fn floor_box(&self) -> TexBox {
        TexBox::from_channel(self.floor_tex)
    }

    #[inline]
    pub fn wall_box(&self) -> TexBox {
        TexBox::from_channel(self.wall_tex)
    }
}

/// Classifies the cell at `(x, z)`. Coordinates outside the grid are solid.
#[inline]
pub fn classify(grid: &Grid, x: i32, z: i32) -> Cell {
    Cell::from_value(grid.get(x, z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_split_as_rgb() {
        let c = Cell::from_value(0xFF_A0_50_10);
        assert!(c.open);
        assert_eq!(c.special, SpecialCode::Door);
        assert_eq!(c.floor_tex, 0x50);
        assert_eq!(c.wall_tex, 0xA0);
    }

    #[test]
    fn zero_payload_is_solid_even_with_alpha() {
        assert_eq!(Cell::from_value(0xFF00_0000), Cell::SOLID);
        assert_eq!(Cell::from_value(0), Cell::SOLID);
    }

    #[test]
    fn special_codes() {
        assert_eq!(SpecialCode::from_byte(0), SpecialCode::None);
        assert_eq!(SpecialCode::from_byte(16), SpecialCode::Door);
        assert_eq!(SpecialCode::from_byte(17), SpecialCode::Reserved(17));
        assert_eq!(SpecialCode::from_byte(255), SpecialCode::Reserved(255));
    }

    #[test]
    fn classify_out_of_bounds_never_faults() {
        let g = Grid::new(1, 1, vec![0x00_FF_FF_FF]);
        assert!(classify(&g, 0, 0).open);
        assert_eq!(classify(&g, -5, 0), Cell::SOLID);
        assert_eq!(classify(&g, 0, 1000), Cell::SOLID);
    }
}
