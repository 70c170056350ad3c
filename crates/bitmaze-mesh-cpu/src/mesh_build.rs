use bitmaze_geom::{Vec2, Vec3};
use bitmaze_map::TexBox;

use crate::constants::{INDICES_PER_QUAD, VERTS_PER_QUAD};
use crate::plane::Plane;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vertex {
    pub pos: Vec3,
    pub uv: Vec2,
}

impl Vertex {
    #[inline]
    pub const fn new(pos: Vec3, uv: Vec2) -> Self {
        Self { pos, uv }
    }
}

/// Triangle order for a quad's two triangles.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Winding {
    /// `(0, 1, 2)`, `(0, 2, 3)`.
    Natural,
    /// `(2, 1, 0)`, `(3, 2, 0)`; the mirror of `Natural`.
    Flipped,
}

impl Winding {
    /// Quad-local indices for the two triangles.
    #[inline]
    pub fn pattern(self) -> [u32; INDICES_PER_QUAD] {
        match self {
            Winding::Natural => [0, 1, 2, 0, 2, 3],
            Winding::Flipped => [2, 1, 0, 3, 2, 0],
        }
    }
}

/// Append-only vertex and triangle-index buffers.
#[derive(Default, Clone, Debug)]
pub struct MeshBuild {
    pub vertices: Vec<Vertex>,
    pub idx: Vec<u32>,
}

impl MeshBuild {
    /// Pre-reserve capacity for approximately `n_quads` quads worth of data.
    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize) {
        self.vertices.reserve(n_quads * VERTS_PER_QUAD);
        self.idx.reserve(n_quads * INDICES_PER_QUAD);
    }

    /// Index the next appended vertex will get.
    #[inline]
    pub fn next_index(&self) -> u32 {
        self.vertices.len() as u32
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.idx.len() / INDICES_PER_QUAD
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Appends four vertices and the two triangles joining them.
    pub fn emit_quad(&mut self, positions: [Vec3; 4], uvs: [Vec2; 4], winding: Winding) {
        let base = self.next_index();
        for (pos, uv) in positions.into_iter().zip(uvs) {
            self.vertices.push(Vertex::new(pos, uv));
        }
        self.idx
            .extend(winding.pattern().into_iter().map(|i| base + i));
    }

    /// Emits the quad covering `plane`, textured with the whole of `tex`.
    #[inline]
    pub fn emit_plane(&mut self, plane: Plane, tex: &TexBox, winding: Winding) {
        let uvs = tex.corners().map(|(u, v)| Vec2::new(u, v));
        self.emit_quad(plane.corners(), uvs, winding);
    }

    /// Appends another mesh, rebasing its indices.
    pub fn append(&mut self, vertices: &[Vertex], indices: &[u32]) {
        let base = self.next_index();
        self.vertices.extend_from_slice(vertices);
        self.idx.extend(indices.iter().map(|i| base + i));
    }

    /// Unit normal of triangle `t` as wound.
    pub fn triangle_normal(&self, t: usize) -> Vec3 {
        let i = &self.idx[t * 3..t * 3 + 3];
        let a = self.vertices[i[0] as usize].pos;
        let b = self.vertices[i[1] as usize].pos;
        let c = self.vertices[i[2] as usize].pos;
        (b - a).cross(c - a).normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> [Vec3; 4] {
        [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, 1.0),
        ]
    }

    #[test]
    fn indices_track_running_vertex_count() {
        let mut mb = MeshBuild::default();
        mb.emit_quad(unit_square(), [Vec2::ZERO; 4], Winding::Natural);
        mb.emit_quad(unit_square(), [Vec2::ZERO; 4], Winding::Flipped);
        assert_eq!(mb.vertices.len(), 8);
        assert_eq!(mb.idx, vec![0, 1, 2, 0, 2, 3, 6, 5, 4, 7, 6, 4]);
        assert_eq!(mb.quad_count(), 2);
    }

    #[test]
    fn windings_face_opposite_ways() {
        let mut mb = MeshBuild::default();
        mb.emit_quad(unit_square(), [Vec2::ZERO; 4], Winding::Natural);
        mb.emit_quad(unit_square(), [Vec2::ZERO; 4], Winding::Flipped);
        assert_eq!(mb.triangle_normal(0), Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(mb.triangle_normal(1), Vec3::new(0.0, -1.0, 0.0));
        assert_eq!(mb.triangle_normal(2), Vec3::UP);
        assert_eq!(mb.triangle_normal(3), Vec3::UP);
    }

    #[test]
    fn append_rebases_indices() {
        let mut a = MeshBuild::default();
        a.emit_quad(unit_square(), [Vec2::ZERO; 4], Winding::Natural);
        let b = a.clone();
        a.append(&b.vertices, &b.idx);
        assert_eq!(a.quad_count(), 2);
        assert_eq!(&a.idx[6..], &[4, 5, 6, 4, 6, 7]);
    }
}
