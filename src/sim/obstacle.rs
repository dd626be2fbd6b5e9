//! Oscillating rectangular obstacles

use serde::{Deserialize, Serialize};

use super::rect::{Bounds, Rect};
use crate::consts::{OBSTACLE_BOTTOM_MARGIN, OBSTACLE_TOP_LIMIT};

/// A moving obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
    /// Signed vertical speed from the level template
    pub vy: f32,
    /// +1 or -1, flipped at the travel limits
    pub direction: f32,
    /// Spawn y (reference only)
    pub original_y: f32,
}

impl Obstacle {
    pub fn new(rect: Rect, vy: f32) -> Self {
        Self {
            rect,
            vy,
            direction: 1.0,
            original_y: rect.y,
        }
    }

    /// Move vertically and flip direction once past the top limit or the
    /// floor margin
    pub fn advance(&mut self, dt: f32, bounds: &Bounds) {
        self.rect.y += self.vy * dt * self.direction;

        let floor = bounds.height - OBSTACLE_BOTTOM_MARGIN;
        if self.rect.y < OBSTACLE_TOP_LIMIT || self.rect.y + self.rect.height > floor {
            self.direction = -self.direction;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds::new(800.0, 600.0)
    }

    #[test]
    fn test_moves_by_signed_speed() {
        let mut obs = Obstacle::new(Rect::new(300.0, 200.0, 40.0, 200.0), -120.0);
        obs.advance(0.5, &bounds());
        assert_eq!(obs.rect.y, 140.0);
        assert_eq!(obs.direction, 1.0);
        assert_eq!(obs.rect.x, 300.0);
        assert_eq!(obs.original_y, 200.0);
    }

    #[test]
    fn test_reverses_above_top_limit() {
        let mut obs = Obstacle::new(Rect::new(300.0, 48.0, 40.0, 200.0), 100.0);
        obs.advance(0.016, &bounds());
        assert_eq!(obs.direction, -1.0);
    }

    #[test]
    fn test_reverses_at_floor_margin() {
        let mut obs = Obstacle::new(Rect::new(300.0, 375.0, 40.0, 200.0), 100.0);
        obs.advance(0.1, &bounds());
        // Bottom edge 585 > 580
        assert_eq!(obs.direction, -1.0);
        obs.advance(0.1, &bounds());
        assert!((obs.rect.y - 375.0).abs() < 1e-3);
        assert_eq!(obs.direction, -1.0);
    }
}
