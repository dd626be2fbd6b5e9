//! Drag-to-shoot input helper
//!
//! Turns pointer press/move/release into the per-tick `TickInput`: the
//! aiming flag while a drag is held and a launch velocity on release. The
//! shot points from the pointer back through the ball (slingshot style) with
//! power proportional to the drag distance.

use glam::Vec2;
use serde::Serialize;

use crate::consts::*;
use crate::session::Session;
use crate::sim::{Ball, TickInput};

/// Raw and capped shot power for a drag from `ball_pos` to `pointer`
pub fn shot_power(ball_pos: Vec2, pointer: Vec2) -> (f32, f32) {
    let raw = ball_pos.distance(pointer) * SHOT_POWER_SCALE;
    (raw, raw.min(MAX_SHOT_POWER))
}

/// Launch velocity for a drag, or `None` if the shot is too weak
pub fn shot_velocity(ball_pos: Vec2, pointer: Vec2) -> Option<Vec2> {
    let (_, power) = shot_power(ball_pos, pointer);
    if power > MIN_SHOT_POWER {
        Some((ball_pos - pointer).normalize_or_zero() * power)
    } else {
        None
    }
}

/// What a renderer needs to draw the aim line and power bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AimPreview {
    pub pointer: Vec2,
    /// Unit shot direction
    pub direction: Vec2,
    pub power: f32,
    /// `power / MAX_SHOT_POWER`
    pub power_ratio: f32,
    /// Raw drag power reached the cap
    pub at_max: bool,
}

/// Drag state
#[derive(Debug, Clone, Default)]
pub struct Aim {
    active: bool,
    pointer: Vec2,
    pending_launch: Option<Vec2>,
}

impl Aim {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start a drag if the session accepts shots and the pointer is on (or
    /// near) the user ball
    pub fn begin(&mut self, session: &Session, pointer: Vec2) -> bool {
        if !session.can_aim() {
            log::debug!("Aim rejected: session not ready");
            return false;
        }

        let ball = &session.state().user_ball;
        if ball.pos.distance(pointer) > ball.radius + GRAB_SLACK {
            return false;
        }

        self.active = true;
        self.pointer = pointer;
        true
    }

    /// Track the pointer (anywhere, including outside the play area)
    pub fn move_to(&mut self, pointer: Vec2) {
        self.pointer = pointer;
    }

    /// End the drag. Returns the launch velocity, which is also queued for
    /// the next `take_input`.
    pub fn release(&mut self, user_ball: &Ball) -> Option<Vec2> {
        if !self.active {
            return None;
        }
        self.active = false;

        let shot = shot_velocity(user_ball.pos, self.pointer);
        if shot.is_none() {
            log::debug!("Shot discarded: too weak");
        }
        self.pending_launch = shot;
        shot
    }

    /// Drop any drag in progress (e.g. on level load)
    pub fn cancel(&mut self) {
        self.active = false;
        self.pending_launch = None;
    }

    /// Input for the next tick; consumes the queued launch
    pub fn take_input(&mut self) -> TickInput {
        TickInput {
            aiming: self.active,
            launch: self.pending_launch.take(),
        }
    }

    /// Aim line preview while dragging
    pub fn preview(&self, user_ball: &Ball) -> Option<AimPreview> {
        if !self.active {
            return None;
        }
        let (raw, power) = shot_power(user_ball.pos, self.pointer);
        Some(AimPreview {
            pointer: self.pointer,
            direction: (user_ball.pos - self.pointer).normalize_or_zero(),
            power,
            power_ratio: power / MAX_SHOT_POWER,
            at_max: raw >= MAX_SHOT_POWER,
        })
    }
}
