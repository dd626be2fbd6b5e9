//! Read-only snapshot for renderers
//!
//! The simulation never draws. Hosts capture a `Snapshot` after each frame
//! and hand it to whatever renders the play area.

use glam::Vec2;
use serde::Serialize;

use crate::aim::{Aim, AimPreview};
use crate::session::{Message, Session};
use crate::sim::{EnemyState, Rect, Status};

pub const TARGET_BALL_COLOR: &str = "#fff";
pub const USER_BALL_COLOR: &str = "#4a9eff";
pub const GOAL_COLOR: &str = "#4ecca3";
pub const OBSTACLE_COLOR: &str = "#e94560";
pub const ENEMY_CHASING_COLOR: &str = "#ff6b6b";
pub const ENEMY_IDLE_COLOR: &str = "#a55";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleView {
    pub pos: Vec2,
    pub radius: f32,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RectView {
    pub rect: Rect,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnemyView {
    pub pos: Vec2,
    pub radius: f32,
    pub chasing: bool,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneView {
    pub rect: Rect,
    pub color: String,
    pub label: &'static str,
}

/// Everything visible in one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub level: u32,
    pub width: f32,
    pub height: f32,
    pub status: Status,
    /// Pending win/loss message, if paused
    pub message: Option<Message>,
    pub zones: Vec<ZoneView>,
    pub goal: CircleView,
    pub obstacles: Vec<RectView>,
    pub enemies: Vec<EnemyView>,
    pub target_ball: CircleView,
    pub user_ball: CircleView,
    pub aim: Option<AimPreview>,
}

impl Snapshot {
    pub fn capture(session: &Session, aim: &Aim) -> Self {
        let state = session.state();

        Self {
            level: session.level(),
            width: state.bounds.width,
            height: state.bounds.height,
            status: session.status(aim.is_active()),
            message: session.message().cloned(),
            zones: state
                .zones
                .iter()
                .map(|zone| ZoneView {
                    rect: zone.rect,
                    color: zone.color.clone(),
                    label: zone.label(),
                })
                .collect(),
            goal: CircleView {
                pos: state.goal.pos,
                radius: state.goal.radius,
                color: GOAL_COLOR,
            },
            obstacles: state
                .obstacles
                .iter()
                .map(|obs| RectView {
                    rect: obs.rect,
                    color: OBSTACLE_COLOR,
                })
                .collect(),
            enemies: state
                .enemies
                .iter()
                .map(|enemy| {
                    let chasing = enemy.state == EnemyState::Chasing;
                    EnemyView {
                        pos: enemy.pos,
                        radius: enemy.radius,
                        chasing,
                        color: if chasing {
                            ENEMY_CHASING_COLOR
                        } else {
                            ENEMY_IDLE_COLOR
                        },
                    }
                })
                .collect(),
            target_ball: CircleView {
                pos: state.target_ball.pos,
                radius: state.target_ball.radius,
                color: TARGET_BALL_COLOR,
            },
            user_ball: CircleView {
                pos: state.user_ball.pos,
                radius: state.user_ball.radius,
                color: USER_BALL_COLOR,
            },
            aim: aim.preview(&state.user_ball),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::{LevelDef, LevelPack};
    use crate::settings::Settings;
    use crate::sim::{ScriptedRandom, TickInput};

    fn session_on(level: u32) -> Session {
        let mut s = Session::with_random(
            Settings::default(),
            LevelPack::builtin(),
            Box::new(ScriptedRandom::constant(0.0)),
        );
        s.load_level(level);
        s
    }

    #[test]
    fn test_snapshot_mirrors_level_three() {
        let s = session_on(3);
        let snap = s.snapshot(&Aim::new());

        assert_eq!(snap.level, 3);
        assert_eq!(snap.status, Status::Ready);
        assert_eq!(snap.zones.len(), 2);
        assert_eq!(snap.zones[0].label, "SLOW");
        assert_eq!(snap.zones[1].label, "FAST");
        assert_eq!(snap.zones[1].color, "rgba(255, 200, 100, 0.3)");
        assert_eq!(snap.enemies.len(), 2);
        assert!(snap.enemies.iter().all(|e| !e.chasing && e.color == ENEMY_IDLE_COLOR));
        assert_eq!(snap.obstacles.len(), 1);
        assert_eq!(snap.goal.radius, 30.0);
        assert!(snap.aim.is_none());
        assert!(snap.message.is_none());
    }

    #[test]
    fn test_snapshot_shows_aim_and_chasers() {
        let mut s = session_on(2);
        let mut aim = Aim::new();
        let ball = s.state().user_ball.pos;
        assert!(aim.begin(&s, ball));
        aim.move_to(ball - Vec2::new(20.0, 0.0));

        s.step(1.0 / 60.0, &aim.take_input());
        let snap = s.snapshot(&aim);

        assert_eq!(snap.status, Status::Aiming);
        assert!(snap.enemies[0].chasing);
        assert_eq!(snap.enemies[0].color, ENEMY_CHASING_COLOR);
        let preview = snap.aim.unwrap();
        assert!((preview.power - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_snapshot_serializes() {
        let s = session_on(1);
        let json = serde_json::to_value(s.snapshot(&Aim::new())).unwrap();
        assert_eq!(json["level"], 1);
        assert_eq!(json["status"], "ready");
        assert_eq!(json["obstacles"].as_array().map(|a| a.len()), Some(2));
    }

    #[test]
    fn test_snapshot_carries_pending_message() {
        // Level 1 with the target already sitting in the goal
        let mut levels: Vec<LevelDef> = LevelPack::builtin().into();
        levels[0].target = levels[0].goal;
        let mut s = Session::with_random(
            Settings::default(),
            LevelPack::new(levels).unwrap(),
            Box::new(ScriptedRandom::constant(0.0)),
        );
        assert!(s.snapshot(&Aim::new()).message.is_none());

        s.step(1.0 / 60.0, &TickInput::default());
        let snap = s.snapshot(&Aim::new());
        let message = snap.message.unwrap();
        assert_eq!(message.text, "Level Complete!");
    }
}
