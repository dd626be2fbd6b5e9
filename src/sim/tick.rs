//! Simulation tick
//!
//! One call advances the level by `dt` seconds in a fixed stage order:
//! 1. launch (if any, and only when both balls are at rest)
//! 2. integrate target ball, then user ball
//! 3. ball-ball collision
//! 4. wall collisions for both balls
//! 5. obstacle motion
//! 6. obstacle collisions (moving target ball touching one loses)
//! 7. enemy behavior and collisions (moving target ball caught loses)
//!
//! Obstacle and enemy bounces can push the user ball past a wall, so it is
//! clamped back into the play area after each one.
//! 8. goal check (target ball inside goal reach wins)
//!
//! The first terminal outcome ends the tick; later stages do not run.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{
    ball_rect_collision, resolve_ball_ball, resolve_ball_circle, resolve_ball_rect,
    resolve_ball_walls,
};
use super::motion::integrate;
use super::rect::Bounds;
use super::rng::RandomSource;
use super::state::{Ball, GameState};
use crate::consts::MAX_SHOT_POWER;

/// Input sampled once per tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Player is dragging a shot this tick
    pub aiming: bool,
    /// Launch velocity for the user ball (released shot)
    pub launch: Option<Vec2>,
}

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    Continue,
    /// Target ball reached the goal
    Win,
    /// Moving target ball touched an obstacle
    LossObstacle,
    /// Moving target ball was caught by an enemy
    LossEnemy,
}

impl TickOutcome {
    pub fn is_terminal(&self) -> bool {
        *self != TickOutcome::Continue
    }

    /// Message shown for a terminal outcome
    pub fn message(&self) -> Option<&'static str> {
        match self {
            TickOutcome::Continue => None,
            TickOutcome::Win => Some("Level Complete!"),
            TickOutcome::LossObstacle => Some("Game Over! Target hit obstacle."),
            TickOutcome::LossEnemy => Some("Game Over! Caught by enemy."),
        }
    }
}

/// Per-tick status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Player is dragging a shot
    Aiming,
    /// Balls still rolling
    Settling,
    /// Balls at rest, a shot can be taken
    Ready,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Aiming => "aiming",
            Status::Settling => "settling",
            Status::Ready => "ready",
        }
    }

    /// Human-readable prompt
    pub fn prompt(&self) -> &'static str {
        match self {
            Status::Aiming => "Release to shoot!",
            Status::Settling => "Wait for balls to stop...",
            Status::Ready => "Click and drag the blue ball to aim!",
        }
    }
}

/// Status for the current state and aiming flag
pub fn status(state: &GameState, aiming: bool) -> Status {
    if aiming {
        Status::Aiming
    } else if !state.balls_stable() {
        Status::Settling
    } else {
        Status::Ready
    }
}

/// Advance the level by one step of `dt` seconds
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    dt: f32,
    rng: &mut dyn RandomSource,
) -> TickOutcome {
    state.time_ticks += 1;

    if let Some(velocity) = input.launch {
        launch(state, velocity);
    }

    integrate(&mut state.target_ball, &state.zones, dt);
    integrate(&mut state.user_ball, &state.zones, dt);

    resolve_ball_ball(&mut state.user_ball, &mut state.target_ball);

    resolve_ball_walls(&mut state.target_ball, &state.bounds);
    resolve_ball_walls(&mut state.user_ball, &state.bounds);

    for obstacle in &mut state.obstacles {
        obstacle.advance(dt, &state.bounds);
    }

    let outcome = resolve_obstacles(state);
    if outcome.is_terminal() {
        return outcome;
    }

    let outcome = advance_enemies(state, input.aiming, dt, rng);
    if outcome.is_terminal() {
        return outcome;
    }

    check_goal(state)
}

/// Give the user ball a launch velocity, if both balls are at rest
fn launch(state: &mut GameState, velocity: Vec2) {
    if !state.balls_stable() {
        log::debug!("Launch ignored: balls still moving");
        return;
    }
    state.user_ball.vel = velocity.clamp_length_max(MAX_SHOT_POWER);
    log::debug!("Launched user ball at {:?}", state.user_ball.vel);
}

/// User ball bounces off every obstacle; the first obstacle a moving target
/// ball touches ends the level
fn resolve_obstacles(state: &mut GameState) -> TickOutcome {
    for obstacle in &state.obstacles {
        if resolve_ball_rect(&mut state.user_ball, &obstacle.rect) {
            keep_in_bounds(&mut state.user_ball, &state.bounds);
        }

        if state.target_ball.is_moving() {
            let target = &state.target_ball;
            if ball_rect_collision(target.pos, target.radius, &obstacle.rect).hit {
                return TickOutcome::LossObstacle;
            }
        }
    }
    TickOutcome::Continue
}

/// Move every enemy, bounce the user ball off it, and end the level on the
/// first enemy that reaches a moving target ball
fn advance_enemies(
    state: &mut GameState,
    aiming: bool,
    dt: f32,
    rng: &mut dyn RandomSource,
) -> TickOutcome {
    for enemy in &mut state.enemies {
        enemy.update(aiming, state.target_ball.pos, dt, &state.bounds, rng);

        if resolve_ball_circle(&mut state.user_ball, enemy.pos, enemy.radius) {
            keep_in_bounds(&mut state.user_ball, &state.bounds);
        }

        let target = &state.target_ball;
        if target.is_moving() && target.pos.distance(enemy.pos) < target.radius + enemy.radius {
            return TickOutcome::LossEnemy;
        }
    }
    TickOutcome::Continue
}

fn keep_in_bounds(ball: &mut Ball, bounds: &Bounds) {
    ball.pos = bounds.clamp_circle(ball.pos, ball.radius);
}

/// Win when the target ball is within reach of the goal, moving or not
fn check_goal(state: &GameState) -> TickOutcome {
    let target = &state.target_ball;
    if target.pos.distance(state.goal.pos) < target.radius + state.goal.radius {
        TickOutcome::Win
    } else {
        TickOutcome::Continue
    }
}
