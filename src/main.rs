//! Snake Arena headless driver
//!
//! Runs one autopiloted session at a fixed frame rate and prints the final
//! frame. Useful for balance checks and reproducing seeds.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use snake_arena::audio::{AudioManager, LogSink, SoundEffect};
use snake_arena::consts::FRAME_RATE;
use snake_arena::platform::{FrameClock, check_assets, pointer_input, region_center};
use snake_arena::render::{Renderer, TextRenderer};
use snake_arena::sim::choose_direction;
use snake_arena::{Input, Session, SessionState, Settings, UiRegion};

#[derive(Parser)]
#[command(name = "snake-arena")]
#[command(about = "Play a seeded Snake Arena session on autopilot")]
struct Args {
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Session seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,

    /// Starting level 1-5 (overrides the settings file)
    #[arg(long)]
    level: Option<u32>,

    /// Stop after this many frames
    #[arg(long, default_value_t = 5 * 60 * FRAME_RATE as u64)]
    frames: u64,

    /// Directory holding arial.ttf, eat.wav and gameover.wav
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> snake_arena::Result<()> {
    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(level) = args.level {
        settings.starting_level = level;
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    let settings = settings.sanitized();

    let available = match &args.assets {
        Some(dir) => check_assets(dir)?,
        None => SoundEffect::ALL.to_vec(),
    };
    let mut audio = AudioManager::with_available(Box::new(LogSink), available);
    audio.set_master_volume(settings.master_volume);
    audio.set_sfx_volume(settings.sfx_volume);
    audio.set_muted(settings.muted);

    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Snake Arena starting (seed {seed}, level {})", settings.starting_level);

    let mut session = Session::new(seed, settings.tuning.clone());
    click(&mut session, UiRegion::Play);
    click(&mut session, UiRegion::Level(settings.starting_level));

    let mut clock = FrameClock::new();
    let mut frames = 0;
    while frames < args.frames && session.is_running() {
        let now = frames as f64 / FRAME_RATE as f64;
        let dt = clock.delta(now);

        let steer = session
            .game()
            .and_then(|game| choose_direction(game))
            .map(Input::Steer);
        let snapshot = session.frame(steer, dt);

        for effect in session.drain_sounds() {
            audio.play(effect);
        }

        frames += 1;
        if snapshot.session == SessionState::GameOver {
            break;
        }
    }

    let snapshot = session.snapshot();
    log::info!(
        "Stopped after {} frames: score {}, level {}, high score {}",
        frames,
        snapshot.score,
        snapshot.level,
        snapshot.high_score
    );
    for (rank, entry) in session.high_scores().entries.iter().enumerate() {
        log::info!("  #{} {} (level {})", rank + 1, entry.score, entry.level);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        let mut renderer = TextRenderer::new();
        renderer.render(&snapshot);
        print!("{}", renderer.frame());
        println!("frames: {frames}  seed: {seed}");
    }
    Ok(())
}

/// Press the center of `region`'s button, as a pointer would
fn click(session: &mut Session, region: UiRegion) {
    let state = session.state();
    let input = region_center(state, region).and_then(|point| pointer_input(state, point));
    match input {
        Some(input) => session.handle_input(input),
        None => log::warn!("No {:?} button in {:?}", region, state),
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
