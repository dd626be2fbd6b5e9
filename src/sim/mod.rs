//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied time steps only
//! - Injected randomness only (`RandomSource`)
//! - Fixed stage and entity order within a tick
//! - No rendering, input or platform dependencies

pub mod collision;
pub mod enemy;
pub mod motion;
pub mod obstacle;
pub mod rect;
pub mod rng;
pub mod state;
pub mod tick;
pub mod zone;

pub use collision::{
    CollisionResult, ball_circle_collision, ball_rect_collision, reflect_velocity,
    resolve_ball_ball, resolve_ball_circle, resolve_ball_rect, resolve_ball_walls,
};
pub use enemy::{Enemy, EnemyState, chase_multiplier};
pub use motion::{apply_friction, friction_for, integrate};
pub use obstacle::Obstacle;
pub use rect::{Bounds, Rect};
pub use rng::{RandomSource, ScriptedRandom, seeded};
pub use state::{Ball, GameState, Goal, Zone};
pub use tick::{Status, TickInput, TickOutcome, status, tick};
pub use zone::speed_modifier;
