use bitmaze_geom::{Rect, Vec2, Vec3};
use bitmaze_mesh_cpu::constants::{CELL_LENGTH, CELL_WIDTH};
use bitmaze_mesh_cpu::{DoorAxis, DoorSite};

use crate::config::DoorParams;

/// Distance under which a moving door snaps onto its target.
pub const ARRIVE_EPSILON: f32 = 1e-4;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DoorState {
    Closed,
    Opening,
    Open,
    Closing,
}

/// A sliding door spawned from a validated door cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Door {
    site: DoorSite,
    translation: Vec3,
    /// Degrees about +Y.
    yaw: f32,
    size: Vec2,
    closed_pos: Vec3,
    open_pos: Vec3,
    speed: f32,
    state: DoorState,
}

impl Door {
    pub fn from_site(site: DoorSite, params: &DoorParams) -> Door {
        let x = site.x as f32 * CELL_WIDTH;
        let z = site.z as f32 * CELL_LENGTH;
        let (translation, yaw, size, slide) = match site.axis {
            DoorAxis::AlongX => (
                Vec3::new(x, 0.0, z + CELL_LENGTH / 2.0),
                0.0,
                Vec2::new(params.length, params.thickness),
                Vec3::new(params.slide_distance, 0.0, 0.0),
            ),
            DoorAxis::AlongZ => (
                Vec3::new(x + CELL_WIDTH / 2.0, 0.0, z),
                90.0,
                Vec2::new(params.thickness, params.length),
                Vec3::new(0.0, 0.0, params.slide_distance),
            ),
        };
        Door {
            site,
            translation,
            yaw,
            size,
            closed_pos: translation,
            open_pos: translation - slide,
            speed: params.speed,
            state: DoorState::Closed,
        }
    }

    #[inline]
    pub fn site(&self) -> DoorSite {
        self.site
    }

    #[inline]
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn state(&self) -> DoorState {
        self.state
    }

    #[inline]
    pub fn closed_position(&self) -> Vec3 {
        self.closed_pos
    }

    #[inline]
    pub fn open_position(&self) -> Vec3 {
        self.open_pos
    }

    /// Current collision footprint in the XZ plane.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.translation.xz(), self.size)
    }

    /// Footprint once fully closed.
    #[inline]
    pub fn closed_rect(&self) -> Rect {
        Rect::new(self.closed_pos.xz(), self.size)
    }

    /// Starts opening. Returns false when the door is already open or opening.
    pub fn open(&mut self) -> bool {
        match self.state {
            DoorState::Closed | DoorState::Closing => {
                self.set_state(DoorState::Opening);
                true
            }
            DoorState::Opening | DoorState::Open => false,
        }
    }

    /// Starts closing. Returns false when the door is already closed or closing.
    pub fn close(&mut self) -> bool {
        match self.state {
            DoorState::Open | DoorState::Opening => {
                self.set_state(DoorState::Closing);
                true
            }
            DoorState::Closing | DoorState::Closed => false,
        }
    }

    /// Slides towards the current target by at most `speed * dt`.
    pub fn update(&mut self, dt: f32) {
        let (target, arrived) = match self.state {
            DoorState::Opening => (self.open_pos, DoorState::Open),
            DoorState::Closing => (self.closed_pos, DoorState::Closed),
            DoorState::Open | DoorState::Closed => return,
        };
        if dt <= 0.0 {
            return;
        }
        let to_target = target - self.translation;
        let dist = to_target.length();
        let step = self.speed * dt;
        if dist <= step.max(ARRIVE_EPSILON) {
            self.translation = target;
            self.set_state(arrived);
        } else if step > 0.0 {
            self.translation += to_target * (step / dist);
        }
    }

    fn set_state(&mut self, next: DoorState) {
        log::info!(
            target: "doors",
            "door ({}, {}): {:?} -> {:?}",
            self.site.x,
            self.site.z,
            self.state,
            next
        );
        self.state = next;
    }
}
