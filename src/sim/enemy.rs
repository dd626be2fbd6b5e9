//! Enemy behavior
//!
//! Two states driven only by whether the player is aiming this tick:
//! - `Chasing`: head straight for the target ball, ramping up speed for the
//!   first few seconds of a continuous aim
//! - `Idle`: wander along a heading that is re-rolled periodically and
//!   mirrored off the play-area edges

use std::f32::consts::PI;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Bounds;
use super::rng::RandomSource;
use crate::consts::*;
use crate::direction;

/// Enemy behavior state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnemyState {
    #[default]
    Idle,
    Chasing,
}

/// A circular enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub radius: f32,
    pub state: EnemyState,
    /// Time spent in the current chase (ms)
    pub chase_ms: f32,
    /// Current wander heading (radians)
    pub wander_angle: f32,
    /// Time since the last heading re-roll (ms)
    pub wander_ms: f32,
}

/// Chase speed multiplier: 1.0 at the start of a chase, rising linearly to
/// `1 + ENEMY_SPEED_INCREASE` at `ENEMY_MAX_CHASE_TIME` and flat after
#[inline]
pub fn chase_multiplier(chase_ms: f32) -> f32 {
    1.0 + ENEMY_SPEED_INCREASE * chase_ms.clamp(0.0, ENEMY_MAX_CHASE_TIME) / ENEMY_MAX_CHASE_TIME
}

impl Enemy {
    pub fn new(pos: Vec2, radius: f32, wander_angle: f32) -> Self {
        Self {
            pos,
            radius,
            state: EnemyState::Idle,
            chase_ms: 0.0,
            wander_angle,
            wander_ms: 0.0,
        }
    }

    /// Current chase speed (units/s)
    pub fn chase_speed(&self) -> f32 {
        ENEMY_BASE_SPEED * chase_multiplier(self.chase_ms)
    }

    /// Advance one tick
    pub fn update(
        &mut self,
        aiming: bool,
        target: Vec2,
        dt: f32,
        bounds: &Bounds,
        rng: &mut dyn RandomSource,
    ) {
        if aiming {
            self.chase(target, dt, bounds);
        } else {
            self.wander(dt, bounds, rng);
        }
    }

    fn chase(&mut self, target: Vec2, dt: f32, bounds: &Bounds) {
        if self.state != EnemyState::Chasing {
            log::debug!("Enemy at {:?} starts chasing", self.pos);
            self.state = EnemyState::Chasing;
            self.chase_ms = 0.0;
        }
        self.chase_ms += dt * 1000.0;

        let step = self.chase_speed() * dt;
        let to_target = target - self.pos;
        let dist = to_target.length();
        if dist > 0.0 {
            self.pos += to_target / dist * step;
        }
        self.pos = bounds.clamp_circle(self.pos, self.radius);
    }

    fn wander(&mut self, dt: f32, bounds: &Bounds, rng: &mut dyn RandomSource) {
        if self.state != EnemyState::Idle {
            log::debug!("Enemy at {:?} gives up the chase", self.pos);
        }
        self.state = EnemyState::Idle;
        self.chase_ms = 0.0;

        self.wander_ms += dt * 1000.0;
        if self.wander_ms > ENEMY_WANDER_PERIOD {
            self.wander_angle = rng.next_angle();
            self.wander_ms = 0.0;
        }

        self.pos += direction(self.wander_angle) * ENEMY_WANDER_SPEED * dt;

        let r = self.radius;
        if self.pos.x < r || self.pos.x > bounds.width - r {
            self.wander_angle = PI - self.wander_angle;
        }
        if self.pos.y < r || self.pos.y > bounds.height - r {
            self.wander_angle = -self.wander_angle;
        }
        self.pos = bounds.clamp_circle(self.pos, r);
    }
}
