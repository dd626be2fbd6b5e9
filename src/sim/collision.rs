//! Collision detection and response
//!
//! Balls bounce off each other with an equal-mass exchange (no energy loss)
//! and off walls, obstacles and enemies with a damped reflection. Every
//! resolver is a no-op when the bodies are already apart.

use glam::Vec2;

use super::rect::{Bounds, Rect};
use super::state::Ball;
use crate::consts::BOUNCE_DAMPING;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Contact point on the other body's surface
    pub point: Vec2,
    /// Unit normal from the contact point toward the ball center
    pub normal: Vec2,
    /// Penetration depth
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Ball against an axis-aligned rectangle
///
/// A center exactly on or inside the rectangle has no usable normal and
/// reports a miss.
pub fn ball_rect_collision(ball_pos: Vec2, ball_radius: f32, rect: &Rect) -> CollisionResult {
    let closest = rect.closest_point(ball_pos);
    let offset = ball_pos - closest;
    let dist = offset.length();

    if dist < ball_radius && dist > 0.0 {
        return CollisionResult {
            hit: true,
            point: closest,
            normal: offset / dist,
            penetration: ball_radius - dist,
        };
    }

    CollisionResult::miss()
}

/// Ball against a fixed circle (enemy)
pub fn ball_circle_collision(
    ball_pos: Vec2,
    ball_radius: f32,
    center: Vec2,
    radius: f32,
) -> CollisionResult {
    let offset = ball_pos - center;
    let dist = offset.length();

    if dist < ball_radius + radius && dist > 0.0 {
        let normal = offset / dist;
        return CollisionResult {
            hit: true,
            point: center + normal * radius,
            normal,
            penetration: ball_radius + radius - dist,
        };
    }

    CollisionResult::miss()
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Damped bounce, then push the ball out to rest on the contact surface
fn bounce(ball: &mut Ball, contact: &CollisionResult) {
    ball.vel = reflect_velocity(ball.vel, contact.normal) * BOUNCE_DAMPING;
    ball.pos += contact.normal * contact.penetration;
}

/// Resolve a ball against an obstacle rectangle. Returns true on contact.
pub fn resolve_ball_rect(ball: &mut Ball, rect: &Rect) -> bool {
    let contact = ball_rect_collision(ball.pos, ball.radius, rect);
    if contact.hit {
        bounce(ball, &contact);
    }
    contact.hit
}

/// Resolve a ball against an immovable circle. Only the ball is affected.
pub fn resolve_ball_circle(ball: &mut Ball, center: Vec2, radius: f32) -> bool {
    let contact = ball_circle_collision(ball.pos, ball.radius, center, radius);
    if contact.hit {
        bounce(ball, &contact);
    }
    contact.hit
}

/// Equal-mass elastic collision between two balls. Returns true on contact.
///
/// Touching counts as contact. Approaching balls exchange the normal
/// component of their velocities; overlapping balls are always pushed apart
/// by half the overlap each. Coincident centers are left alone.
pub fn resolve_ball_ball(a: &mut Ball, b: &mut Ball) -> bool {
    let delta = b.pos - a.pos;
    let dist = delta.length();
    let reach = a.radius + b.radius;

    if dist > reach || dist <= 0.0 {
        return false;
    }

    let normal = delta / dist;
    // Relative velocity along the normal, positive when approaching
    let approach = (a.vel - b.vel).dot(normal);
    if approach > 0.0 {
        a.vel -= normal * approach;
        b.vel += normal * approach;
    }

    let half_overlap = (reach - dist) / 2.0;
    a.pos -= normal * half_overlap;
    b.pos += normal * half_overlap;

    true
}

/// Keep a ball inside the play area, bouncing (damped) off each edge it crossed.
/// Returns true if any edge was hit.
pub fn resolve_ball_walls(ball: &mut Ball, bounds: &Bounds) -> bool {
    let r = ball.radius;
    let mut hit = false;

    if ball.pos.x - r < 0.0 {
        ball.pos.x = r;
        ball.vel.x = ball.vel.x.abs() * BOUNCE_DAMPING;
        hit = true;
    }
    if ball.pos.x + r > bounds.width {
        ball.pos.x = bounds.width - r;
        ball.vel.x = -ball.vel.x.abs() * BOUNCE_DAMPING;
        hit = true;
    }
    if ball.pos.y - r < 0.0 {
        ball.pos.y = r;
        ball.vel.y = ball.vel.y.abs() * BOUNCE_DAMPING;
        hit = true;
    }
    if ball.pos.y + r > bounds.height {
        ball.pos.y = bounds.height - r;
        ball.vel.y = -ball.vel.y.abs() * BOUNCE_DAMPING;
        hit = true;
    }

    hit
}
