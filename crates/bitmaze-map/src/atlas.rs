//! Fixed 4x4 texture atlas.
//!
//! A channel byte picks a slot with its high nibble. Slot `s` sits in column
//! `s / 4` and row `s % 4`, both counted from the atlas' far corner, so slot 0
//! maps to the box touching `(1, 1)`.

/// Slots per atlas side.
pub const ATLAS_SIZE: u32 = 4;
/// Total slots; slot indices wrap at this value.
pub const ATLAS_SLOTS: u32 = ATLAS_SIZE * ATLAS_SIZE;

/// UV rectangle of one atlas slot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TexBox {
    pub u_min: f32,
    pub u_max: f32,
    pub v_min: f32,
    pub v_max: f32,
}

impl TexBox {
    /// Box for a raw channel byte (slot = `byte / 16`).
    #[inline]
    pub fn from_channel(byte: u8) -> TexBox {
        atlas_box(u32::from(byte) / ATLAS_SLOTS)
    }

    /// Corner UVs in quad order: `(u_min, v_max)`, `(u_max, v_max)`,
    /// `(u_max, v_min)`, `(u_min, v_min)`.
    #[inline]
    pub fn corners(&self) -> [(f32, f32); 4] {
        [
            (self.u_min, self.v_max),
            (self.u_max, self.v_max),
            (self.u_max, self.v_min),
            (self.u_min, self.v_min),
        ]
    }
}

/// Box for atlas slot `slot`, reduced modulo [`ATLAS_SLOTS`].
pub fn atlas_box(slot: u32) -> TexBox {
    let s = slot % ATLAS_SLOTS;
    let column = s / ATLAS_SIZE;
    let row = s % ATLAS_SIZE;
    let cell = 1.0 / ATLAS_SIZE as f32;

    let u_max = 1.0 - column as f32 * cell;
    let v_max = 1.0 - row as f32 * cell;
    TexBox {
        u_min: u_max - cell,
        u_max,
        v_min: v_max - cell,
        v_max,
    }
}
