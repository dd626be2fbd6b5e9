//! Round controller host API
//!
//! A `Session` owns the live level, the randomness source and the pending
//! terminal message. Hosts call `step` once per frame; while a message is
//! pending the simulation is paused until `acknowledge` is called.

use serde::Serialize;

use crate::aim::Aim;
use crate::levels::LevelPack;
use crate::settings::Settings;
use crate::sim::{GameState, RandomSource, Status, TickInput, TickOutcome, seeded, status, tick};
use crate::snapshot::Snapshot;

const CAMPAIGN_COMPLETE_TEXT: &str = "You Win! All levels complete!";

/// What the message button does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NextAction {
    NextLevel,
    Retry,
    PlayAgain,
}

impl NextAction {
    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            NextAction::NextLevel => "Next Level",
            NextAction::Retry => "Retry",
            NextAction::PlayAgain => "Play Again",
        }
    }
}

/// A message that pauses the session until acknowledged
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub text: &'static str,
    pub action: NextAction,
}

/// Events queued for the host, drained with `Session::drain_events`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    LevelLoaded {
        level: u32,
    },
    /// Emitted once per win/loss
    Terminal {
        level: u32,
        outcome: TickOutcome,
        text: &'static str,
        action: NextAction,
    },
    /// Last level cleared; the campaign wrapped back to level 1
    CampaignComplete,
}

/// Result of a simulated frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TickReport {
    pub outcome: TickOutcome,
    pub status: Status,
}

/// A running game: current level, live state and pause gate
pub struct Session {
    settings: Settings,
    pack: LevelPack,
    level: u32,
    state: GameState,
    rng: Box<dyn RandomSource>,
    message: Option<Message>,
    events: Vec<GameEvent>,
}

impl Session {
    /// Session seeded from `settings.seed`, starting on level 1
    pub fn new(settings: Settings, pack: LevelPack) -> Self {
        let rng = Box::new(seeded(settings.seed));
        Self::with_random(settings, pack, rng)
    }

    /// Session with a caller-supplied randomness source, starting on level 1
    ///
    /// Invalid settings are replaced by the defaults (keeping the seed).
    pub fn with_random(
        settings: Settings,
        pack: LevelPack,
        mut rng: Box<dyn RandomSource>,
    ) -> Self {
        let settings = match settings.validate() {
            Ok(()) => settings,
            Err(e) => {
                log::warn!("{e}, using default settings");
                Settings {
                    seed: settings.seed,
                    ..Settings::default()
                }
            }
        };
        let state = GameState::from_level(pack.first(), settings.bounds(), rng.as_mut());
        log::info!("Level 1 loaded");
        Self {
            settings,
            pack,
            level: 1,
            state,
            rng,
            message: None,
            events: vec![GameEvent::LevelLoaded { level: 1 }],
        }
    }

    /// Replace the live state with a fresh copy of `level`
    ///
    /// Numbers outside the campaign fall back to level 1.
    pub fn load_level(&mut self, level: u32) {
        let (level, def) = match self.pack.get(level) {
            Some(def) => (level, def),
            None => {
                log::warn!("Level {level} does not exist, loading level 1");
                (1, self.pack.first())
            }
        };

        self.state = GameState::from_level(def, self.settings.bounds(), self.rng.as_mut());
        self.level = level;
        self.message = None;
        self.events.push(GameEvent::LevelLoaded { level });
        log::info!("Level {level} loaded");
    }

    /// Run one frame. Returns `None` while paused on a message.
    pub fn step(&mut self, frame_dt: f32, input: &TickInput) -> Option<TickReport> {
        if self.message.is_some() {
            return None;
        }

        let dt = self.settings.cap_frame_dt(frame_dt);
        let outcome = tick(&mut self.state, input, dt, self.rng.as_mut());

        if let Some(text) = outcome.message() {
            let action = if outcome == TickOutcome::Win {
                NextAction::NextLevel
            } else {
                NextAction::Retry
            };
            log::info!("Level {}: {text}", self.level);
            self.message = Some(Message { text, action });
            self.events.push(GameEvent::Terminal {
                level: self.level,
                outcome,
                text,
                action,
            });
        }

        Some(TickReport {
            outcome,
            status: status(&self.state, input.aiming),
        })
    }

    /// Dismiss the pending message and perform its action
    pub fn acknowledge(&mut self) -> Option<NextAction> {
        let message = self.message.take()?;

        match message.action {
            NextAction::NextLevel => {
                let next = self.level + 1;
                if next > self.pack.len() {
                    log::info!("Campaign complete");
                    self.level = 1;
                    self.message = Some(Message {
                        text: CAMPAIGN_COMPLETE_TEXT,
                        action: NextAction::PlayAgain,
                    });
                    self.events.push(GameEvent::CampaignComplete);
                } else {
                    self.load_level(next);
                }
            }
            NextAction::Retry | NextAction::PlayAgain => self.load_level(self.level),
        }

        Some(message.action)
    }

    /// Jump to the next level (wrapping), dropping any pending message
    pub fn skip_level(&mut self) {
        let next = self.level % self.pack.len() + 1;
        self.load_level(next);
    }

    /// A new shot may be started: running and both balls at rest
    pub fn can_aim(&self) -> bool {
        self.message.is_none() && self.state.balls_stable()
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn is_paused(&self) -> bool {
        self.message.is_some()
    }

    pub fn status(&self, aiming: bool) -> Status {
        status(&self.state, aiming)
    }

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only view for renderers
    pub fn snapshot(&self, aim: &Aim) -> Snapshot {
        Snapshot::capture(self, aim)
    }
}
