//! Motion integrator
//!
//! Position advances by velocity, then friction decays velocity. Friction is
//! exponential in elapsed time, normalized to a 60 Hz reference so decay does
//! not depend on the host frame rate.

use super::state::{Ball, Zone};
use super::zone::speed_modifier;
use crate::consts::*;

/// Per-reference-frame friction for a zone speed multiplier
#[inline]
pub fn friction_for(speed_mod: f32) -> f32 {
    if speed_mod < 1.0 {
        FRICTION_SLOW_ZONE
    } else if speed_mod > 1.0 {
        FRICTION_FAST_ZONE
    } else {
        FRICTION
    }
}

/// Decay velocity by the friction at the ball's position and snap slow
/// balls to a dead stop
pub fn apply_friction(ball: &mut Ball, zones: &[Zone], dt: f32) {
    let friction = friction_for(speed_modifier(zones, ball.pos));
    ball.vel *= friction.powf(dt * FRICTION_REFERENCE_HZ);

    if ball.vel.length() < MIN_VELOCITY {
        ball.vel = glam::Vec2::ZERO;
    }
}

/// Advance one ball: move, then apply friction
pub fn integrate(ball: &mut Ball, zones: &[Zone], dt: f32) {
    ball.pos += ball.vel * dt;
    apply_friction(ball, zones, dt);
}
