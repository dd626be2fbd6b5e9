//! Game state and core simulation types
//!
//! Everything live in a level is owned by `GameState`. Reloading a level
//! replaces the whole state through `GameState::from_level`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::obstacle::Obstacle;
use super::rect::{Bounds, Rect};
use super::rng::RandomSource;
use crate::consts::*;
use crate::direction;
use crate::levels::LevelDef;

/// A ball (target or user)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// A ball at rest
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Moving means at or above `MIN_VELOCITY`
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.speed() >= MIN_VELOCITY
    }
}

/// A friction zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub rect: Rect,
    /// <1 slows balls down, >1 keeps them rolling
    pub speed_mod: f32,
    /// Display color (CSS color string)
    pub color: String,
}

impl Zone {
    pub fn new(rect: Rect, speed_mod: f32, color: impl Into<String>) -> Self {
        Self {
            rect,
            speed_mod,
            color: color.into(),
        }
    }

    /// Label drawn in the zone
    pub fn label(&self) -> &'static str {
        if self.speed_mod < 1.0 { "SLOW" } else { "FAST" }
    }
}

/// The goal the target ball must reach
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub pos: Vec2,
    pub radius: f32,
}

/// Complete live state of one level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Play area
    pub bounds: Bounds,
    /// Ball that must reach the goal
    pub target_ball: Ball,
    /// Player-controlled ball
    pub user_ball: Ball,
    pub goal: Goal,
    pub obstacles: Vec<Obstacle>,
    pub enemies: Vec<Enemy>,
    /// Authoring order is significant (first match wins)
    pub zones: Vec<Zone>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Fresh live state for a level
    ///
    /// Derived fields are reset explicitly: obstacles start with direction +1,
    /// enemies start idle with a random wander heading, and the user ball is
    /// dropped at a random spot near the target.
    pub fn from_level(level: &LevelDef, bounds: Bounds, rng: &mut dyn RandomSource) -> Self {
        let obstacles = level
            .obstacles
            .iter()
            .map(|def| Obstacle::new(def.rect, def.vy))
            .collect();

        // Wander headings are drawn before the spawn offset
        let enemies = level
            .enemies
            .iter()
            .map(|def| Enemy::new(def.pos, def.radius, rng.next_angle()))
            .collect();

        let target_ball = Ball::new(level.target, BALL_RADIUS);
        let user_ball = Ball::new(spawn_near(target_ball.pos, bounds, rng), USER_BALL_RADIUS);

        Self {
            bounds,
            target_ball,
            user_ball,
            goal: Goal {
                pos: level.goal,
                radius: GOAL_RADIUS,
            },
            obstacles,
            enemies,
            zones: level.zones.clone(),
            time_ticks: 0,
        }
    }

    /// Both balls below `MIN_VELOCITY` (gates new shots)
    pub fn balls_stable(&self) -> bool {
        !self.target_ball.is_moving() && !self.user_ball.is_moving()
    }
}

/// User-ball spawn point: random heading and distance around the target,
/// clamped into the play area
fn spawn_near(target: Vec2, bounds: Bounds, rng: &mut dyn RandomSource) -> Vec2 {
    let angle = rng.next_angle();
    let distance = BALL_RADIUS + USER_BALL_RADIUS + SPAWN_GAP + rng.next_unit() * SPAWN_JITTER;
    bounds.clamp_circle(target + direction(angle) * distance, USER_BALL_RADIUS)
}
