//! Pushball - a physics puzzle about nudging a target ball into a goal
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, enemies, tick order)
//! - `session`: Round controller host API (pause gate, level flow, events)
//! - `aim`: Drag-to-shoot input helper
//! - `snapshot`: Read-only view for renderers
//! - `levels`: The authored level pack
//! - `settings`: Play-area bounds, frame delta cap, RNG seed

pub mod aim;
pub mod error;
pub mod levels;
pub mod session;
pub mod settings;
pub mod sim;
pub mod snapshot;

pub use aim::{Aim, AimPreview};
pub use error::ConfigError;
pub use levels::{LevelDef, LevelPack};
pub use session::{GameEvent, Message, NextAction, Session, TickReport};
pub use settings::Settings;
pub use snapshot::Snapshot;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Target ball radius
    pub const BALL_RADIUS: f32 = 20.0;
    /// Player-controlled ball radius
    pub const USER_BALL_RADIUS: f32 = 15.0;
    pub const GOAL_RADIUS: f32 = 30.0;

    /// Baseline per-frame friction (at the 60 Hz reference rate)
    pub const FRICTION: f32 = 0.98;
    /// Friction inside slowing zones
    pub const FRICTION_SLOW_ZONE: f32 = 0.95;
    /// Friction inside speeding zones
    pub const FRICTION_FAST_ZONE: f32 = 0.99;
    /// Reference frame rate the friction constants are tuned for
    pub const FRICTION_REFERENCE_HZ: f32 = 60.0;
    /// Speeds below this snap to zero; at or above it a ball is "moving"
    pub const MIN_VELOCITY: f32 = 5.0;

    /// Velocity kept after bouncing off walls, obstacles and enemies
    pub const BOUNCE_DAMPING: f32 = 0.8;

    /// Launch speed cap
    pub const MAX_SHOT_POWER: f32 = 800.0;
    /// Launch speed per unit of drag distance
    pub const SHOT_POWER_SCALE: f32 = 5.0;
    /// Shots at or below this power are discarded
    pub const MIN_SHOT_POWER: f32 = 20.0;
    /// Extra pick-up slack around the user ball when starting a drag
    pub const GRAB_SLACK: f32 = 15.0;

    /// Enemy chase speed before ramp-up
    pub const ENEMY_BASE_SPEED: f32 = 100.0;
    /// Extra fraction of base speed gained over a full ramp
    pub const ENEMY_SPEED_INCREASE: f32 = 0.5;
    /// Chase time (ms) after which enemy speed stops ramping
    pub const ENEMY_MAX_CHASE_TIME: f32 = 3000.0;
    pub const ENEMY_WANDER_SPEED: f32 = 30.0;
    /// Wander heading re-roll period (ms)
    pub const ENEMY_WANDER_PERIOD: f32 = 1500.0;

    /// Obstacles reverse when their top edge rises above this line
    pub const OBSTACLE_TOP_LIMIT: f32 = 50.0;
    /// Obstacles reverse when their bottom edge comes within this of the floor
    pub const OBSTACLE_BOTTOM_MARGIN: f32 = 20.0;

    /// Clearance between target and user ball on spawn, before jitter
    pub const SPAWN_GAP: f32 = 30.0;
    /// Random extra spawn distance range
    pub const SPAWN_JITTER: f32 = 50.0;

    /// Number of authored levels
    pub const LEVEL_COUNT: u32 = 3;

    /// Default play area
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;
    /// Default frame delta cap (seconds)
    pub const DEFAULT_MAX_FRAME_DT: f32 = 0.05;
}

/// Unit vector for an angle in radians
#[inline]
pub fn direction(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Clamp a circle center so the whole circle stays inside `[0, width] x [0, height]`
#[inline]
pub fn clamp_circle(pos: Vec2, radius: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        pos.x.clamp(radius, (width - radius).max(radius)),
        pos.y.clamp(radius, (height - radius).max(radius)),
    )
}
