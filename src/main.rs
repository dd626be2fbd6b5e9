//! Pushball headless runner
//!
//! Plays one level without a display: optionally holds a drag on the user
//! ball for a while (enemies chase while aiming), releases the shot, then
//! lets the simulation run until the tick budget or a win/loss.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use glam::Vec2;

use pushball::{Aim, ConfigError, GameEvent, LevelPack, Session, Settings};

/// Host frame delta (60 Hz display)
const FRAME_DT: f32 = 1.0 / 60.0;

#[derive(Parser, Debug)]
#[command(name = "pushball", version, about = "Headless pushball runner")]
struct Cli {
    /// Level to play (1-3)
    #[arg(long, default_value_t = 1)]
    level: u32,
    /// RNG seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,
    /// Frames to simulate
    #[arg(long, default_value_t = 600)]
    ticks: u32,
    /// Settings JSON file
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Level pack JSON file
    #[arg(long)]
    levels: Option<PathBuf>,
    /// Drag offset from the user ball center, e.g. "-60,0" shoots right
    #[arg(long, value_parser = parse_vec2, allow_hyphen_values = true)]
    drag: Option<Vec2>,
    /// Frames to hold the drag before releasing
    #[arg(long, default_value_t = 30)]
    aim_ticks: u32,
    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn parse_vec2(s: &str) -> Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,y\", got {s:?}"))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("bad x: {e}"))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("bad y: {e}"))?;
    Ok(Vec2::new(x, y))
}

fn load(cli: &Cli) -> Result<(Settings, LevelPack), ConfigError> {
    let mut settings = match &cli.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(seed) = cli.seed {
        settings.seed = seed;
    }
    let pack = match &cli.levels {
        Some(path) => LevelPack::load(path)?,
        None => LevelPack::builtin(),
    };
    Ok((settings, pack))
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("Pushball (headless) starting...");

    let (settings, pack) = match load(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut session = Session::new(settings, pack);
    if cli.level != 1 {
        session.load_level(cli.level);
    }

    let mut aim = Aim::new();
    if let Some(drag) = cli.drag {
        let ball = session.state().user_ball.pos;
        if aim.begin(&session, ball) {
            aim.move_to(ball + drag);
        } else {
            log::warn!("Could not start aiming");
        }
    }

    let mut frames = 0;
    for frame in 0..cli.ticks {
        if aim.is_active() && frame >= cli.aim_ticks {
            let user_ball = session.state().user_ball.clone();
            if aim.release(&user_ball).is_none() {
                log::warn!("Shot too weak, discarded");
            }
        }

        let input = aim.take_input();
        let Some(report) = session.step(FRAME_DT, &input) else {
            break;
        };
        frames += 1;
        if report.outcome.is_terminal() {
            break;
        }
    }

    for event in session.drain_events() {
        match event {
            GameEvent::LevelLoaded { level } => log::debug!("Loaded level {level}"),
            GameEvent::Terminal { text, action, .. } => {
                log::info!("{text} [{}]", action.label());
            }
            GameEvent::CampaignComplete => log::info!("Campaign complete"),
        }
    }

    let snapshot = session.snapshot(&aim);
    if cli.json {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("level {} after {frames} frames", snapshot.level);
        println!(
            "target ball ({:.1}, {:.1}), user ball ({:.1}, {:.1})",
            snapshot.target_ball.pos.x,
            snapshot.target_ball.pos.y,
            snapshot.user_ball.pos.x,
            snapshot.user_ball.pos.y
        );
        match &snapshot.message {
            Some(message) => println!("{}", message.text),
            None => println!(
                "status: {} ({})",
                snapshot.status.as_str(),
                snapshot.status.prompt()
            ),
        }
    }

    ExitCode::SUCCESS
}
