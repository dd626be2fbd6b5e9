//! Replaying the same inputs with the same seed must give the same game

use glam::Vec2;

use pushball::sim::{GameState, ScriptedRandom, TickInput, TickOutcome};
use pushball::{GameEvent, LevelPack, Session, Settings, TickReport};

const DT: f32 = 1.0 / 60.0;

#[derive(Debug, PartialEq)]
struct ReplayOutcome {
    reports: Vec<Option<TickReport>>,
    events: Vec<GameEvent>,
    state: GameState,
}

impl ReplayOutcome {
    /// Index and outcome of the frame that ended the level
    fn terminal(&self) -> Option<(usize, TickOutcome)> {
        self.reports.iter().enumerate().find_map(|(i, report)| {
            report
                .filter(|r| r.outcome.is_terminal())
                .map(|r| (i, r.outcome))
        })
    }

    fn terminal_events(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::Terminal { .. }))
            .count()
    }
}

fn replay(mut session: Session, level: u32, frames: &[(f32, TickInput)]) -> ReplayOutcome {
    if level != 1 {
        session.load_level(level);
    }

    let reports = frames
        .iter()
        .map(|(dt, input)| session.step(*dt, input))
        .collect();

    ReplayOutcome {
        reports,
        events: session.drain_events(),
        state: session.state().clone(),
    }
}

/// Level 1 with every random draw at 0.5: the user ball spawns 90 units
/// straight left of the target ball
fn level_one_session() -> Session {
    Session::with_random(
        Settings::default(),
        LevelPack::builtin(),
        Box::new(ScriptedRandom::constant(0.5)),
    )
}

/// Full-power shot to the right, then two seconds of rolling
fn level_one_shot() -> Vec<(f32, TickInput)> {
    let mut frames = vec![(
        DT,
        TickInput {
            aiming: false,
            launch: Some(Vec2::new(800.0, 0.0)),
        },
    )];
    frames.extend((0..120).map(|_| (DT, TickInput::default())));
    frames
}

/// Aim on level 2 for a while (the enemy chases), shoot, then let things
/// settle under an uneven frame rate
fn level_two_frames() -> Vec<(f32, TickInput)> {
    let mut frames = Vec::new();
    for i in 0..45 {
        let dt = if i % 3 == 0 { 1.0 / 30.0 } else { DT };
        frames.push((dt, TickInput { aiming: true, launch: None }));
    }
    frames.push((
        DT,
        TickInput {
            aiming: false,
            launch: Some(Vec2::new(420.0, -60.0)),
        },
    ));
    for i in 0..400 {
        // Includes an oversized frame that the session caps
        let dt = if i == 200 { 0.25 } else { DT };
        frames.push((dt, TickInput::default()));
    }
    frames
}

fn seeded_session(seed: u64) -> Session {
    let settings = Settings {
        seed,
        ..Settings::default()
    };
    Session::new(settings, LevelPack::builtin())
}

#[test]
fn level_one_shot_replays_into_the_first_obstacle() {
    let first = replay(level_one_session(), 1, &level_one_shot());
    let second = replay(level_one_session(), 1, &level_one_shot());
    assert_eq!(first, second, "replay diverged between runs");

    // The user ball knocks the target straight into the descending obstacle
    // at x = 300 before it clears the lane
    let (end, outcome) = first.terminal().expect("the shot should end the level");
    assert_eq!(outcome, TickOutcome::LossObstacle);
    assert!(end < 30, "level ended late, at frame {end}");
    assert!(first.reports[end + 1..].iter().all(Option::is_none));
    assert_eq!(first.terminal_events(), 1);

    let target = first.state.target_ball.pos;
    assert!(target.x > 280.0 && target.x < 300.0, "target at {target:?}");
    assert!((target.y - 300.0).abs() < 1e-3);
    // All the momentum went into the target
    assert_eq!(first.state.user_ball.vel, Vec2::ZERO);
    assert!(first.state.user_ball.pos.x < target.x);
}

#[test]
fn deterministic_replay_with_same_seed() {
    let first = replay(seeded_session(42), 2, &level_two_frames());
    let second = replay(seeded_session(42), 2, &level_two_frames());

    assert_eq!(first, second, "replay diverged between runs");
    assert!(first.state.time_ticks > 0);
    assert!(matches!(
        first.events.first(),
        Some(GameEvent::LevelLoaded { level: 1 })
    ));
}

#[test]
fn different_seeds_spawn_differently() {
    let first = seeded_session(1);
    let second = seeded_session(2);
    assert_ne!(
        first.state().user_ball.pos,
        second.state().user_ball.pos,
        "spawn did not depend on the seed"
    );
}

#[test]
fn deterministic_replay_with_scripted_randomness() {
    let session = || {
        Session::with_random(
            Settings::default(),
            LevelPack::builtin(),
            Box::new(ScriptedRandom::new([0.25, 0.5, 0.75, 0.1, 0.9])),
        )
    };

    let first = replay(session(), 2, &level_two_frames());
    let second = replay(session(), 2, &level_two_frames());
    assert_eq!(first, second, "replay diverged between runs");
}
