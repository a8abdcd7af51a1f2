//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::timing::TimingWindow;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Static tile geometry, the single layer the probes see
    Tiles,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for static tile colliders.
#[derive(Component, Debug)]
pub struct Tile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Presentation motion state derived from the integrator's step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    #[default]
    Stand,
    Run,
    Jump,
    Fall,
}

/// Contact flags recomputed from geometry every physics step, never carried
/// across steps.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct ContactState {
    pub on_ground: bool,
    pub on_ceiling: bool,
    pub on_wall_left: bool,
    pub on_wall_right: bool,
}

/// Active jump variant. At most one holds at a time; gravity accumulates
/// only while `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum JumpPhase {
    #[default]
    Idle,
    Floating {
        elapsed: f32,
    },
    WallJumping {
        direction: f32,
        elapsed: f32,
    },
}

/// Externally imposed horizontal velocity override. Decays under ground
/// friction, erodes against opposing input, and never crosses zero without
/// snapping to exactly zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Momentum(f32);

impl Momentum {
    pub fn get(&self) -> f32 {
        self.0
    }

    pub fn set(&mut self, force: f32) {
        self.0 = force;
    }

    pub fn clear(&mut self) {
        self.0 = 0.0;
    }

    pub fn is_active(&self) -> bool {
        self.0 != 0.0
    }

    /// Erode toward zero by adding `dx` (the opposing input's step delta).
    /// A sign flip snaps to exactly zero. Returns the eroded value.
    pub fn erode(&mut self, dx: f32) -> f32 {
        let prev_sign = self.0.signum();
        self.0 += dx;
        if self.0.signum() != prev_sign {
            self.0 = 0.0;
        }
        self.0
    }

    /// Ground friction decay, snapping to zero below `threshold`.
    pub fn decay(&mut self, friction: f32, threshold: f32) {
        if self.0 == 0.0 {
            return;
        }
        self.0 *= friction;
        if self.0.abs() < threshold {
            self.0 = 0.0;
        }
    }
}

/// Fixed local outline of the body, closed: bottom-left, bottom-right,
/// top-right, top-left, bottom-left again. The contact probes cast along
/// its edges: ground 0-1, ceiling 2-3, right wall 1-2, left wall 3-4.
#[derive(Component, Debug, Clone)]
pub struct BodyOutline {
    pub points: [Vec2; 5],
}

impl BodyOutline {
    pub fn from_half_extents(half: Vec2) -> Self {
        Self {
            points: [
                Vec2::new(-half.x, -half.y),
                Vec2::new(half.x, -half.y),
                Vec2::new(half.x, half.y),
                Vec2::new(-half.x, half.y),
                Vec2::new(-half.x, -half.y),
            ],
        }
    }
}

/// Per-body locomotion state. Written only by the input edge systems (frame
/// clock) and the integrator (physics clock).
#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub facing: Facing,
    pub motion: MotionState,
    pub momentum: Momentum,
    pub jump_phase: JumpPhase,
    /// True while grounded or within the coyote grace window.
    pub can_jump: bool,
    pub was_on_ground: bool,
    pub jump_queued: bool,
    pub release_queued: bool,
    pub grab_queued: bool,
    pub jump_buffer: TimingWindow,
    pub coyote: TimingWindow,
}

/// Presence of a held item. The stage module owns pickup and drop; the
/// controller only reads the flag for sprite selection.
#[derive(Component, Debug, Default)]
pub struct HeldItem(pub Option<Entity>);
