use bitmaze_geom::{Vec2, Vec3};
use bitmaze_map::TexBox;

use crate::mesh_build::{MeshBuild, Winding};

/// Door panel extents in its local frame: `length` along X, `thickness`
/// along Z, `height` along Y.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DoorDims {
    pub length: f32,
    pub height: f32,
    pub thickness: f32,
}

impl Default for DoorDims {
    fn default() -> Self {
        Self {
            length: 1.0,
            height: 1.0,
            thickness: 0.125,
        }
    }
}

/// Shared door model: front and back faces carry the whole atlas box, the two
/// narrow ends a strip of it. Top and bottom are never visible and are skipped.
pub fn door_panel_mesh(dims: DoorDims, tex: &TexBox) -> MeshBuild {
    let DoorDims {
        length: l,
        height: h,
        thickness: t,
    } = dims;
    let face_uv = [
        Vec2::new(tex.u_max, tex.v_max),
        Vec2::new(tex.u_max, tex.v_min),
        Vec2::new(tex.u_min, tex.v_min),
        Vec2::new(tex.u_min, tex.v_max),
    ];
    let strip = (tex.u_max - tex.u_min) * (t / l).min(1.0);
    let edge_uv = [
        Vec2::new(tex.u_min, tex.v_max),
        Vec2::new(tex.u_min, tex.v_min),
        Vec2::new(tex.u_min + strip, tex.v_min),
        Vec2::new(tex.u_min + strip, tex.v_max),
    ];

    let mut mb = MeshBuild::default();
    mb.reserve_quads(4);
    // front (z = 0)
    mb.emit_quad(
        [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, h, 0.0),
            Vec3::new(l, h, 0.0),
            Vec3::new(l, 0.0, 0.0),
        ],
        face_uv,
        Winding::Natural,
    );
    // near end (x = 0)
    mb.emit_quad(
        [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, h, 0.0),
            Vec3::new(0.0, h, t),
            Vec3::new(0.0, 0.0, t),
        ],
        edge_uv,
        Winding::Flipped,
    );
    // back (z = thickness)
    mb.emit_quad(
        [
            Vec3::new(0.0, 0.0, t),
            Vec3::new(0.0, h, t),
            Vec3::new(l, h, t),
            Vec3::new(l, 0.0, t),
        ],
        face_uv,
        Winding::Flipped,
    );
    // far end (x = length)
    mb.emit_quad(
        [
            Vec3::new(l, 0.0, 0.0),
            Vec3::new(l, h, 0.0),
            Vec3::new(l, h, t),
            Vec3::new(l, 0.0, t),
        ],
        edge_uv,
        Winding::Natural,
    );
    mb
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitmaze_map::atlas_box;

    #[test]
    fn panel_faces_point_away_from_its_centre() {
        let dims = DoorDims::default();
        let mb = door_panel_mesh(dims, &atlas_box(15));
        assert_eq!(mb.quad_count(), 4);
        let centre = Vec3::new(dims.length / 2.0, dims.height / 2.0, dims.thickness / 2.0);
        for t in 0..mb.idx.len() / 3 {
            let n = mb.triangle_normal(t);
            let p = mb.vertices[mb.idx[t * 3] as usize].pos;
            assert!((p - centre).dot(n) > 0.0, "triangle {t} faces inwards");
        }
    }

    #[test]
    fn uvs_stay_inside_the_slot() {
        let tex = atlas_box(5);
        let mb = door_panel_mesh(DoorDims::default(), &tex);
        for v in &mb.vertices {
            assert!(v.uv.x >= tex.u_min && v.uv.x <= tex.u_max);
            assert!(v.uv.y >= tex.v_min && v.uv.y <= tex.v_max);
        }
    }
}
