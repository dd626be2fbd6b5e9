//! Authored level definitions
//!
//! A level is a read-only template. `GameState::from_level` copies it into
//! live state and fills in the derived fields (directions, enemy state,
//! wander headings, user-ball spawn).

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::LEVEL_COUNT;
use crate::error::ConfigError;
use crate::sim::{Rect, Zone};

/// Obstacle template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleDef {
    pub rect: Rect,
    /// Signed vertical speed; the live direction sign multiplies it
    pub vy: f32,
}

/// Enemy template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyDef {
    pub pos: Vec2,
    pub radius: f32,
}

/// A level template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDef {
    /// Target ball start position
    pub target: Vec2,
    /// Goal center
    pub goal: Vec2,
    #[serde(default)]
    pub obstacles: Vec<ObstacleDef>,
    #[serde(default)]
    pub enemies: Vec<EnemyDef>,
    /// Friction zones, in authoring order (first match wins on overlap)
    #[serde(default)]
    pub zones: Vec<Zone>,
}

impl LevelDef {
    fn validate(&self, level: u32) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidLevel { level, reason };

        if !self.target.is_finite() || !self.goal.is_finite() {
            return Err(invalid("target and goal must be finite".into()));
        }
        for (i, obs) in self.obstacles.iter().enumerate() {
            if !positive_rect(&obs.rect) || !obs.vy.is_finite() {
                return Err(invalid(format!("obstacle {i} has a bad size or speed")));
            }
        }
        for (i, enemy) in self.enemies.iter().enumerate() {
            if !enemy.pos.is_finite() || !(enemy.radius.is_finite() && enemy.radius > 0.0) {
                return Err(invalid(format!("enemy {i} has a bad position or radius")));
            }
        }
        for (i, zone) in self.zones.iter().enumerate() {
            if !positive_rect(&zone.rect) || !(zone.speed_mod.is_finite() && zone.speed_mod > 0.0) {
                return Err(invalid(format!("zone {i} has a bad size or multiplier")));
            }
        }
        Ok(())
    }
}

fn positive_rect(rect: &Rect) -> bool {
    rect.x.is_finite()
        && rect.y.is_finite()
        && rect.width.is_finite()
        && rect.height.is_finite()
        && rect.width > 0.0
        && rect.height > 0.0
}

/// The campaign: levels 1..=LEVEL_COUNT
///
/// Always holds exactly `LEVEL_COUNT` validated levels; deserialization goes
/// through the same validation as `LevelPack::new`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LevelDef>", into = "Vec<LevelDef>")]
pub struct LevelPack {
    levels: Vec<LevelDef>,
}

impl TryFrom<Vec<LevelDef>> for LevelPack {
    type Error = ConfigError;

    fn try_from(levels: Vec<LevelDef>) -> Result<Self, Self::Error> {
        Self::new(levels)
    }
}

impl From<LevelPack> for Vec<LevelDef> {
    fn from(pack: LevelPack) -> Self {
        pack.levels
    }
}

impl LevelPack {
    /// The three authored levels
    pub fn builtin() -> Self {
        let obstacle = |x, y, width, height, vy| ObstacleDef {
            rect: Rect::new(x, y, width, height),
            vy,
        };
        let enemy = |x, y| EnemyDef {
            pos: Vec2::new(x, y),
            radius: 18.0,
        };

        let levels = vec![
            LevelDef {
                target: Vec2::new(150.0, 300.0),
                goal: Vec2::new(700.0, 300.0),
                obstacles: vec![
                    obstacle(300.0, 200.0, 40.0, 200.0, 100.0),
                    obstacle(500.0, 400.0, 40.0, 200.0, -120.0),
                ],
                enemies: Vec::new(),
                zones: Vec::new(),
            },
            LevelDef {
                target: Vec2::new(150.0, 300.0),
                goal: Vec2::new(700.0, 300.0),
                obstacles: vec![
                    obstacle(250.0, 150.0, 30.0, 150.0, 80.0),
                    obstacle(450.0, 350.0, 30.0, 150.0, -90.0),
                ],
                enemies: vec![enemy(400.0, 100.0)],
                zones: Vec::new(),
            },
            LevelDef {
                target: Vec2::new(150.0, 300.0),
                goal: Vec2::new(700.0, 300.0),
                obstacles: vec![obstacle(300.0, 100.0, 25.0, 120.0, 70.0)],
                enemies: vec![enemy(350.0, 100.0), enemy(500.0, 500.0)],
                zones: vec![
                    Zone::new(
                        Rect::new(200.0, 200.0, 150.0, 200.0),
                        0.5,
                        "rgba(100, 100, 255, 0.3)",
                    ),
                    Zone::new(
                        Rect::new(500.0, 250.0, 120.0, 150.0),
                        1.5,
                        "rgba(255, 200, 100, 0.3)",
                    ),
                ],
            },
        ];

        Self { levels }
    }

    /// Build a pack from level templates (must be exactly `LEVEL_COUNT` valid levels)
    pub fn new(levels: Vec<LevelDef>) -> Result<Self, ConfigError> {
        let pack = Self { levels };
        pack.validate()?;
        Ok(pack)
    }

    /// Parse a pack from a JSON array of levels
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let levels: Vec<LevelDef> = serde_json::from_str(json)?;
        Self::new(levels)
    }

    /// Load a pack from a JSON file of the same shape as `builtin()` serializes to
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let pack = Self::from_json(&json)?;
        log::info!("Loaded level pack from {}", path.display());
        Ok(pack)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.levels.len() != LEVEL_COUNT as usize {
            return Err(ConfigError::InvalidLevel {
                level: self.levels.len() as u32,
                reason: format!("pack must hold exactly {LEVEL_COUNT} levels"),
            });
        }
        for (i, level) in self.levels.iter().enumerate() {
            level.validate(i as u32 + 1)?;
        }
        Ok(())
    }

    /// Level template by 1-based number
    pub fn get(&self, level: u32) -> Option<&LevelDef> {
        level
            .checked_sub(1)
            .and_then(|i| self.levels.get(i as usize))
    }

    /// Level 1
    pub fn first(&self) -> &LevelDef {
        &self.levels[0]
    }

    pub fn len(&self) -> u32 {
        self.levels.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl Default for LevelPack {
    fn default() -> Self {
        Self::builtin()
    }
}
