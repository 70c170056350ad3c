use bitmaze_geom::{Vec2, Vec3};
use bitmaze_map::Grid;
use bitmaze_mesh_cpu::{
    DoorAxis, DoorSite, LevelGeometry, MeshBuild, MeshSink, Segment, build_level_geometry,
};
use proptest::prelude::*;

const OPEN: u32 = 0xFF_00_00_00 | 0x00_20_30_00;
const DOOR: u32 = 0xFF_00_00_00 | 0x00_20_30_10;

fn grid(rows: &[&str]) -> Grid {
    let h = rows.len();
    let w = rows[0].len();
    let cells = rows
        .iter()
        .flat_map(|r| r.chars())
        .map(|ch| match ch {
            '.' => OPEN,
            'D' => DOOR,
            _ => 0,
        })
        .collect();
    Grid::new(w, h, cells)
}

#[derive(Debug, PartialEq)]
enum QuadKind {
    Floor,
    Ceiling,
    Wall,
}

struct Quad {
    kind: QuadKind,
    corners: [Vec3; 4],
    normal: Vec3,
}

fn quads(mesh: &MeshBuild) -> Vec<Quad> {
    (0..mesh.quad_count())
        .map(|q| {
            let base = q * 4;
            let corners = [0, 1, 2, 3].map(|i| mesh.vertices[base + i].pos);
            let normal = mesh.triangle_normal(q * 2);
            let kind = if corners.iter().all(|c| c.y == 0.0) {
                QuadKind::Floor
            } else if corners.iter().all(|c| c.y == 1.0) {
                QuadKind::Ceiling
            } else {
                QuadKind::Wall
            };
            Quad {
                kind,
                corners,
                normal,
            }
        })
        .collect()
}

fn centre(q: &Quad) -> Vec3 {
    (q.corners[0] + q.corners[1] + q.corners[2] + q.corners[3]) * 0.25
}

// The open cell a quad belongs to: step half a cell along its normal.
fn owner(q: &Quad) -> (i32, i32) {
    let p = centre(q) + q.normal * 0.5;
    (p.x.floor() as i32, p.z.floor() as i32)
}

// The cell behind a wall quad.
fn behind(q: &Quad) -> (i32, i32) {
    let p = centre(q) - q.normal * 0.5;
    (p.x.floor() as i32, p.z.floor() as i32)
}

fn same_segment(a: &Segment, b: &Segment) -> bool {
    (a.start == b.start && a.end == b.end) || (a.start == b.end && a.end == b.start)
}

#[test]
fn single_room_ring() {
    let g = grid(&["###", "#.#", "###"]);
    let geo = build_level_geometry(&g).unwrap();
    let qs = quads(&geo.mesh);

    assert_eq!(qs.iter().filter(|q| q.kind != QuadKind::Wall).count(), 2);
    assert_eq!(qs.iter().filter(|q| q.kind == QuadKind::Wall).count(), 4);
    assert_eq!(geo.mesh.vertices.len(), 24);
    assert_eq!(geo.mesh.idx.len(), 36);
    assert!(geo.doors.is_empty());

    let v = |x: f32, z: f32| Vec2::new(x, z);
    let expected = [
        Segment { start: v(1.0, 1.0), end: v(2.0, 1.0) },
        Segment { start: v(1.0, 2.0), end: v(2.0, 2.0) },
        Segment { start: v(1.0, 1.0), end: v(1.0, 2.0) },
        Segment { start: v(2.0, 1.0), end: v(2.0, 2.0) },
    ];
    assert_eq!(geo.segments, expected);
}

#[test]
fn floor_faces_up_and_ceiling_faces_down() {
    let g = grid(&["###", "#.#", "###"]);
    let geo = build_level_geometry(&g).unwrap();
    for q in quads(&geo.mesh) {
        match q.kind {
            QuadKind::Floor => assert_eq!(q.normal, Vec3::UP),
            QuadKind::Ceiling => assert_eq!(q.normal, Vec3::new(0.0, -1.0, 0.0)),
            QuadKind::Wall => assert_eq!(q.normal.y, 0.0),
        }
    }
}

#[test]
fn every_wall_backs_onto_solid_and_has_a_segment() {
    let g = grid(&[
        "#######",
        "#..#..#",
        "#.....#",
        "##.#.##",
        "#.....#",
        "#######",
    ]);
    let geo = build_level_geometry(&g).unwrap();
    let walls: Vec<Quad> = quads(&geo.mesh)
        .into_iter()
        .filter(|q| q.kind == QuadKind::Wall)
        .collect();
    assert_eq!(walls.len(), geo.segments.len());

    for w in &walls {
        let (ox, oz) = owner(w);
        let (sx, sz) = behind(w);
        assert!(g.is_open(ox, oz), "wall owned by solid cell ({ox},{oz})");
        assert!(g.is_solid(sx, sz), "wall in front of open cell ({sx},{sz})");

        let base = Segment {
            start: w.corners[0].xz(),
            end: w.corners[1].xz(),
        };
        assert!(
            geo.segments.iter().any(|s| same_segment(s, &base)),
            "no segment for wall at {:?}",
            base
        );
    }
}

#[test]
fn solid_cells_own_no_geometry() {
    let g = grid(&["#.#.", "....", "##.#"]);
    let geo = build_level_geometry(&g).unwrap();
    for q in quads(&geo.mesh) {
        let (x, z) = match q.kind {
            QuadKind::Wall => owner(&q),
            _ => {
                let c = centre(&q);
                (c.x.floor() as i32, c.z.floor() as i32)
            }
        };
        assert!(g.is_open(x, z), "{:?} quad emitted for solid cell ({x},{z})", q.kind);
    }
}

#[test]
fn doors_are_recorded_in_generation_order() {
    let g = grid(&[
        "#####",
        "#.#.#",
        "#D#D#",
        "#.#.#",
        "#####",
    ]);
    let geo = build_level_geometry(&g).unwrap();
    assert_eq!(
        geo.doors,
        vec![
            DoorSite { x: 1, z: 2, axis: DoorAxis::AlongX },
            DoorSite { x: 3, z: 2, axis: DoorAxis::AlongX },
        ]
    );
    // Door cells still get a floor and ceiling.
    let floors = quads(&geo.mesh)
        .into_iter()
        .filter(|q| q.kind == QuadKind::Floor)
        .count();
    assert_eq!(floors, 6);
}

#[test]
fn invalid_door_aborts_without_geometry() {
    let g = grid(&["#.#", ".D.", "#.#"]);
    let err = build_level_geometry(&g).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid door placement at (1, 1): no solid neighbour pair"
    );
}

#[test]
fn wall_uvs_come_from_the_red_channel() {
    // red 0x30 -> slot 3, green 0x00 -> slot 0
    let g = Grid::new(1, 1, vec![0x00_30_00_01]);
    let geo = build_level_geometry(&g).unwrap();
    let floor_uv = geo.mesh.vertices[0].uv;
    let wall_uv = geo.mesh.vertices[8].uv;
    assert_eq!(floor_uv, Vec2::new(0.75, 1.0));
    assert_eq!(wall_uv, Vec2::new(0.75, 0.25));
}

#[test]
fn upload_hands_over_the_whole_mesh() {
    let g = grid(&["###", "#.#", "###"]);
    let geo: LevelGeometry = build_level_geometry(&g).unwrap();
    let mut sink: Vec<MeshBuild> = Vec::new();
    geo.upload_to(&mut sink);
    geo.upload_to(&mut sink);
    assert_eq!(sink.len(), 2);
    assert_eq!(sink[1].idx, geo.mesh.idx);

    let mut merged = MeshBuild::default();
    merged.upload(&geo.mesh.vertices, &geo.mesh.idx);
    merged.upload(&geo.mesh.vertices, &geo.mesh.idx);
    assert_eq!(merged.quad_count(), 12);
    assert!(merged.idx.iter().all(|&i| (i as usize) < merged.vertices.len()));
}

fn arb_plain_grid() -> impl Strategy<Value = Grid> {
    (1usize..=10, 1usize..=10).prop_flat_map(|(w, h)| {
        proptest::collection::vec(prop_oneof![Just(0u32), Just(OPEN)], w * h)
            .prop_map(move |cells| Grid::new(w, h, cells))
    })
}

proptest! {
    // Quad count = 2 per open cell + 1 per open/solid boundary; indices stay in range
    #[test]
    fn quad_and_segment_counts_match_the_grid(g in arb_plain_grid()) {
        let geo = build_level_geometry(&g).unwrap();
        let mut open = 0usize;
        let mut boundaries = 0usize;
        for x in 0..g.width as i32 {
            for z in 0..g.height as i32 {
                if g.is_open(x, z) {
                    open += 1;
                    for (dx, dz) in [(0, -1), (0, 1), (-1, 0), (1, 0)] {
                        if g.is_solid(x + dx, z + dz) {
                            boundaries += 1;
                        }
                    }
                }
            }
        }
        prop_assert_eq!(geo.mesh.quad_count(), open * 2 + boundaries);
        prop_assert_eq!(geo.segments.len(), boundaries);
        prop_assert_eq!(geo.mesh.vertices.len(), geo.mesh.quad_count() * 4);
        let n = geo.mesh.vertices.len() as u32;
        prop_assert!(geo.mesh.idx.iter().all(|&i| i < n));
    }
}
