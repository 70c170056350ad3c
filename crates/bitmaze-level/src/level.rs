use bitmaze_geom::{Rect, Vec2, Vec3, nearest, segment_intersect, segment_intersect_rect};
use bitmaze_map::{Grid, atlas_box};
use bitmaze_mesh_cpu::constants::{CELL_HEIGHT, CELL_LENGTH, CELL_WIDTH};
use bitmaze_mesh_cpu::{
    DoorDims, GenerateError, LevelGeometry, MeshBuild, MeshSink, Segment, build_level_geometry,
    door_panel_mesh,
};

use crate::collision::{AxisFactors, overlaps, sweep};
use crate::config::LevelConfig;
use crate::door::{Door, DoorState};

/// A generated level: static mesh, collision surfaces and live doors.
#[derive(Clone, Debug)]
pub struct Level {
    grid: Grid,
    geometry: LevelGeometry,
    solids: Vec<Rect>,
    doors: Vec<Door>,
    door_mesh: MeshBuild,
    open_distance: f32,
}

impl Level {
    /// Builds geometry and spawns doors. Fails on the first invalid door cell.
    pub fn new(grid: Grid, cfg: &LevelConfig) -> Result<Level, GenerateError> {
        let geometry = build_level_geometry(&grid)?;
        let solids = grid
            .solid_cells()
            .into_iter()
            .map(|(x, z)| {
                Rect::new(
                    Vec2::new(x as f32 * CELL_WIDTH, z as f32 * CELL_LENGTH),
                    Vec2::new(CELL_WIDTH, CELL_LENGTH),
                )
            })
            .collect();
        let doors = geometry
            .doors
            .iter()
            .map(|site| Door::from_site(*site, &cfg.doors))
            .collect();
        // Doors fill the cell vertically; the level has a single floor height.
        let dims = DoorDims {
            length: cfg.doors.length,
            height: CELL_HEIGHT,
            thickness: cfg.doors.thickness,
        };
        let door_mesh = door_panel_mesh(dims, &atlas_box(cfg.doors.texture_slot));
        Ok(Level {
            grid,
            geometry,
            solids,
            doors,
            door_mesh,
            open_distance: cfg.doors.open_distance,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn mesh(&self) -> &MeshBuild {
        &self.geometry.mesh
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.geometry.segments
    }

    #[inline]
    pub fn solids(&self) -> &[Rect] {
        &self.solids
    }

    #[inline]
    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    /// Panel model shared by every door; place it with each door's transform.
    #[inline]
    pub fn door_mesh(&self) -> &MeshBuild {
        &self.door_mesh
    }

    pub fn upload_to(&self, sink: &mut impl MeshSink) {
        self.geometry.upload_to(sink);
    }

    /// Opens every door within range of `position`. Returns how many started
    /// opening.
    pub fn open_doors(&mut self, position: Vec3) -> usize {
        let range = self.open_distance;
        self.doors
            .iter_mut()
            .filter(|d| (d.translation() - position).length() < range)
            .map(|d| d.open())
            .filter(|&started| started)
            .count()
    }

    /// Closes every door whose doorway is within range of `position`. An open
    /// door has slid into the wall, so range is taken from its closed spot.
    /// Doors whose closed footprint overlaps the actor's box stay as they are.
    pub fn close_doors(&mut self, position: Vec3, half_width: f32, half_length: f32) -> usize {
        let range = self.open_distance;
        let (center, half) = (position.xz(), Vec2::new(half_width, half_length));
        self.doors
            .iter_mut()
            .filter(|d| (d.closed_position() - position).length() < range)
            .filter(|d| !overlaps(center, half, d.closed_rect()))
            .map(|d| d.close())
            .filter(|&started| started)
            .count()
    }

    /// Sends closing doors back to opening while the actor's box stands in
    /// their doorway. Returns how many were reversed.
    pub fn clear_doorways(&mut self, position: Vec3, half_width: f32, half_length: f32) -> usize {
        let (center, half) = (position.xz(), Vec2::new(half_width, half_length));
        let mut reversed = 0;
        for door in &mut self.doors {
            if door.state() == DoorState::Closing && overlaps(center, half, door.closed_rect()) {
                door.open();
                reversed += 1;
            }
        }
        reversed
    }

    pub fn update(&mut self, dt: f32) {
        for door in &mut self.doors {
            door.update(dt);
        }
    }

    /// Nearest point where `start -> end` crosses a wall segment or a door
    /// outline, measured from `start`.
    pub fn check_intersections(&self, start: Vec2, end: Vec2) -> Option<Vec2> {
        let mut hit = None;
        for seg in &self.geometry.segments {
            hit = nearest(hit, segment_intersect(start, end, seg.start, seg.end), start);
        }
        for door in &self.doors {
            let r = door.rect();
            hit = nearest(hit, segment_intersect_rect(start, end, r.pos, r.size), start);
        }
        hit
    }

    /// Which axes of the move `old -> new` are free for a box with the given
    /// half extents. Solid cells are tested first, then doors.
    pub fn check_collision(
        &self,
        old: Vec3,
        new: Vec3,
        half_width: f32,
        half_length: f32,
    ) -> AxisFactors {
        if (new - old).length() == 0.0 {
            return AxisFactors::FREE;
        }
        let half = Vec2::new(half_width, half_length);
        let (from, to) = (old.xz(), new.xz());
        let factors = sweep(
            from,
            to,
            half,
            self.solids
                .iter()
                .copied()
                .chain(self.doors.iter().map(Door::rect)),
        );
        if factors != AxisFactors::FREE {
            log::trace!(
                target: "collision",
                "({:.3}, {:.3}) -> ({:.3}, {:.3}): {:?}",
                from.x,
                from.y,
                to.x,
                to.y,
                factors
            );
        }
        factors
    }
}
