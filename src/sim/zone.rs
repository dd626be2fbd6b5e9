//! Friction zone lookup

use glam::Vec2;

use super::state::Zone;

/// Speed multiplier at a point: the first zone (authoring order) containing
/// the point wins, otherwise 1.0
pub fn speed_modifier(zones: &[Zone], point: Vec2) -> f32 {
    zones
        .iter()
        .find(|zone| zone.rect.contains(point))
        .map_or(1.0, |zone| zone.speed_mod)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Rect;

    #[test]
    fn test_no_zone_is_neutral() {
        assert_eq!(speed_modifier(&[], Vec2::new(10.0, 10.0)), 1.0);

        let zones = [Zone::new(Rect::new(0.0, 0.0, 50.0, 50.0), 0.5, "blue")];
        assert_eq!(speed_modifier(&zones, Vec2::new(60.0, 10.0)), 1.0);
    }

    #[test]
    fn test_first_authored_zone_wins() {
        let zones = [
            Zone::new(Rect::new(0.0, 0.0, 100.0, 100.0), 0.5, "blue"),
            Zone::new(Rect::new(50.0, 50.0, 100.0, 100.0), 1.5, "orange"),
        ];
        let overlap = Vec2::new(75.0, 75.0);
        assert_eq!(speed_modifier(&zones, overlap), 0.5);
        // Only the second zone covers this point
        assert_eq!(speed_modifier(&zones, Vec2::new(140.0, 140.0)), 1.5);

        // Reversing authoring order flips the result
        let reversed = [zones[1].clone(), zones[0].clone()];
        assert_eq!(speed_modifier(&reversed, overlap), 1.5);
    }
}
