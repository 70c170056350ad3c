/// Low 24 bits carry the cell payload; the top byte (alpha) is ignored.
pub const CELL_MASK: u32 = 0x00FF_FFFF;

/// Row-major grid of packed `0xAARRGGBB` cell values, immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<u32>,
}

impl Grid {
    /// Builds a grid from row-major values. Short input is padded with solid
    /// cells and long input truncated.
    pub fn new(width: usize, height: usize, cells: Vec<u32>) -> Self {
        let mut c = cells;
        let expect = width * height;
        if c.len() != expect {
            log::warn!(
                "grid {}x{} expects {} cells, got {}; resizing",
                width,
                height,
                expect,
                c.len()
            );
            c.resize(expect, 0);
        }
        Grid {
            width,
            height,
            cells: c,
        }
    }

    /// Packs tightly laid out RGBA8 pixels into `0xAARRGGBB` cells.
    pub fn from_rgba8(width: usize, height: usize, bytes: &[u8]) -> Self {
        let cells = bytes
            .chunks_exact(4)
            .map(|px| u32::from_be_bytes([px[3], px[0], px[1], px[2]]))
            .collect();
        Grid::new(width, height, cells)
    }

    /// Mirrors the rows so image row 0 (top) becomes the last row.
    pub fn flipped_y(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for row in self.cells.chunks_exact(self.width.max(1)).rev() {
            cells.extend_from_slice(row);
        }
        Grid {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    #[inline]
    pub fn idx(&self, x: usize, z: usize) -> usize {
        z * self.width + x
    }

    #[inline]
    pub fn contains(&self, x: i32, z: i32) -> bool {
        x >= 0 && z >= 0 && (x as usize) < self.width && (z as usize) < self.height
    }

    /// Raw cell value; anything outside the grid reads as 0, which is solid.
    #[inline]
    pub fn get(&self, x: i32, z: i32) -> u32 {
        if !self.contains(x, z) {
            return 0;
        }
        self.cells[self.idx(x as usize, z as usize)]
    }

    #[inline]
    pub fn is_solid(&self, x: i32, z: i32) -> bool {
        self.get(x, z) & CELL_MASK == 0
    }

    #[inline]
    pub fn is_open(&self, x: i32, z: i32) -> bool {
        !self.is_solid(x, z)
    }

    /// In-bounds solid cells, `x` outer and `z` inner.
    pub fn solid_cells(&self) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for x in 0..self.width as i32 {
            for z in 0..self.height as i32 {
                if self.is_solid(x, z) {
                    out.push((x, z));
                }
            }
        }
        out
    }

    /// First open cell in generation order, if any.
    pub fn first_open(&self) -> Option<(i32, i32)> {
        (0..self.width as i32)
            .flat_map(|x| (0..self.height as i32).map(move |z| (x, z)))
            .find(|&(x, z)| self.is_open(x, z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_reads_solid() {
        let g = Grid::new(2, 2, vec![0xFF_FFFFFF; 4]);
        assert!(g.is_open(0, 0));
        assert!(g.is_solid(-1, 0));
        assert!(g.is_solid(0, -1));
        assert!(g.is_solid(2, 0));
        assert!(g.is_solid(0, 2));
        assert!(g.is_solid(i32::MIN, i32::MAX));
    }

    #[test]
    fn alpha_byte_is_ignored() {
        let g = Grid::new(2, 1, vec![0xFF00_0000, 0x0000_0001]);
        assert!(g.is_solid(0, 0));
        assert!(g.is_open(1, 0));
    }

    #[test]
    fn rgba_packing_puts_red_high() {
        let g = Grid::from_rgba8(1, 1, &[0x12, 0x34, 0x56, 0xFF]);
        assert_eq!(g.get(0, 0), 0xFF12_3456);
    }

    #[test]
    fn resize_pads_with_solid() {
        let g = Grid::new(2, 2, vec![1]);
        assert_eq!(g.cells.len(), 4);
        assert!(g.is_open(0, 0));
        assert!(g.is_solid(1, 1));
    }

    #[test]
    fn flip_reverses_rows() {
        let g = Grid::new(2, 3, vec![1, 2, 3, 4, 5, 6]);
        let f = g.flipped_y();
        assert_eq!(f.cells, vec![5, 6, 3, 4, 1, 2]);
        assert_eq!(f.flipped_y(), g);
    }

    #[test]
    fn solid_cells_and_first_open_follow_generation_order() {
        // x=0 column: (0,0) solid, (0,1) open; x=1 column: (1,0) open, (1,1) solid
        let g = Grid::new(2, 2, vec![0, 1, 1, 0]);
        assert_eq!(g.solid_cells(), vec![(0, 0), (1, 1)]);
        assert_eq!(g.first_open(), Some((0, 1)));
        assert_eq!(Grid::new(1, 1, vec![0]).first_open(), None);
    }
}
