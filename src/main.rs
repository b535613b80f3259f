//! Wave Shooter entry point
//!
//! Headless native runner: loads settings, lets the autopilot play through
//! the same fixed-timestep loop a browser host would drive, and prints a
//! summary of the session.
//!
//! Usage: `wave-shooter [settings.json] [--frames N] [--fps N] [--seed N] [--difficulty easy|normal|hard]`

use std::path::PathBuf;

use clap::Parser;
use wave_shooter::autopilot::Autopilot;
use wave_shooter::consts::*;
use wave_shooter::highscores::RunRecord;
use wave_shooter::render::{
    Hud, ImageProvider, Renderer, SpriteCache, SpriteFrame, SpriteId, render,
};
use wave_shooter::sim::{GameEvent, GamePhase, GameState, InputState, Rect, tick};
use wave_shooter::{Difficulty, HighScores, Settings};

/// Command line options
#[derive(Parser, Debug)]
#[command(name = "wave-shooter")]
#[command(about = "Headless wave shooter run driven by the autopilot")]
struct Options {
    /// JSON settings file (defaults are used when missing or invalid)
    settings_path: Option<PathBuf>,
    /// Host frames to simulate
    #[arg(long, default_value_t = 60 * 60)]
    frames: u32,
    /// Host frame rate; the simulation itself always ticks at 60 Hz
    #[arg(long, default_value_t = 60.0, value_parser = parse_fps)]
    fps: f32,
    /// Run seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,
    /// Difficulty preset: easy, normal or hard
    #[arg(long, value_parser = parse_difficulty)]
    difficulty: Option<Difficulty>,
}

fn parse_fps(raw: &str) -> Result<f32, String> {
    let fps: f32 = raw.parse().map_err(|_| format!("not a number: {raw}"))?;
    if fps.is_finite() && fps > 0.0 {
        Ok(fps)
    } else {
        Err(format!("must be a positive frame rate, got {raw}"))
    }
}

fn parse_difficulty(raw: &str) -> Result<Difficulty, String> {
    Difficulty::from_str(raw).ok_or_else(|| format!("unknown difficulty: {raw}"))
}

/// Resolves sprites to asset paths
struct AssetPaths;

impl ImageProvider for AssetPaths {
    type Handle = String;

    fn resolve(&mut self, sprite: SpriteId) -> Option<Self::Handle> {
        Some(format!("assets/{}.png", sprite.as_str()))
    }
}

/// Renderer that only counts what would be drawn
struct TallyRenderer {
    sprites: SpriteCache<AssetPaths>,
    draws: u64,
    textured: u64,
    last_hud: Option<Hud>,
}

impl TallyRenderer {
    fn new() -> Self {
        let mut sprites = SpriteCache::new(AssetPaths);
        let loaded = sprites.preload();
        log::debug!("Preloaded {loaded} sprite handles");
        Self {
            sprites,
            draws: 0,
            textured: 0,
            last_hud: None,
        }
    }
}

impl Renderer for TallyRenderer {
    fn draw(&mut self, _rect: Rect, sprite: Option<(SpriteId, SpriteFrame)>) {
        self.draws += 1;
        if let Some((id, _frame)) = sprite {
            if self.sprites.get(id).is_some() {
                self.textured += 1;
            }
        }
    }

    fn draw_hud(&mut self, hud: &Hud) {
        self.last_hud = Some(hud.clone());
    }
}

/// Game instance holding all state
struct Game {
    state: GameState,
    settings: Settings,
    input: InputState,
    autopilot: Autopilot,
    accumulator: f32,
    high_scores: HighScores,
    runs: u32,
    /// Tick the current run started on
    run_start: u64,
    shots: u64,
    kills: u64,
}

impl Game {
    fn new(settings: Settings, seed: u64) -> Self {
        Self {
            state: GameState::new(settings.effective_tuning(), seed),
            settings,
            input: InputState::new(),
            autopilot: Autopilot::new(),
            accumulator: 0.0,
            high_scores: HighScores::new(),
            runs: 1,
            run_start: 0,
            shots: 0,
            kills: 0,
        }
    }

    /// Run simulation ticks for one host frame
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.autopilot
                .drive(&self.state, &mut self.input, &self.settings.bindings);
            tick(&mut self.state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.end_frame();
            self.handle_events();
        }

        // Drop the backlog a slow host can never catch up on
        if substeps == MAX_SUBSTEPS && self.accumulator > SIM_DT {
            log::debug!("Dropping {:.3}s of simulation backlog", self.accumulator - SIM_DT);
            self.accumulator = SIM_DT;
        }
    }

    fn handle_events(&mut self) {
        for event in &self.state.events {
            match *event {
                GameEvent::ShotFired => self.shots += 1,
                GameEvent::EnemyDestroyed { .. } => self.kills += 1,
                GameEvent::GameOver { score } => {
                    let ticks = self.state.time_ticks - self.run_start;
                    self.high_scores
                        .record(RunRecord::new(self.state.wave_count, score, ticks));
                }
                GameEvent::Restarted => {
                    self.runs += 1;
                    self.run_start = self.state.time_ticks;
                }
                _ => {}
            }
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Wave Shooter (headless) starting...");

    let options = Options::parse();

    let mut settings = match &options.settings_path {
        Some(path) => Settings::load(path).unwrap_or_else(|err| {
            log::warn!("{err}; using default settings");
            Settings::default()
        }),
        None => Settings::default(),
    };
    if let Some(difficulty) = options.difficulty {
        settings.difficulty = difficulty;
    }
    let seed = options
        .seed
        .or(settings.seed)
        .unwrap_or_else(rand::random);
    log::info!(
        "Difficulty {}, seed {seed}, {} frames at {} fps",
        settings.difficulty.as_str(),
        options.frames,
        options.fps
    );

    let mut game = Game::new(settings, seed);
    let mut renderer = TallyRenderer::new();
    let frame_dt = 1.0 / options.fps;

    for _ in 0..options.frames {
        game.update(frame_dt);
        render(&game.state, &mut renderer);
    }

    // Count a run still in progress
    if game.state.phase() != GamePhase::GameOver {
        let ticks = game.state.time_ticks - game.run_start;
        game.high_scores
            .record(RunRecord::new(game.state.wave_count, game.state.score, ticks));
    }

    println!("\nSession summary (seed {seed})");
    println!("  ticks:      {}", game.state.time_ticks);
    println!("  runs:       {}", game.runs);
    println!("  shots:      {}", game.shots);
    println!("  kills:      {}", game.kills);
    println!("  draw calls: {} ({} textured)", renderer.draws, renderer.textured);
    if let Some(hud) = &renderer.last_hud {
        println!(
            "  last frame: score {} lives {}/{} wave {} ({:?})",
            hud.score, hud.lives, hud.max_lives, hud.wave, hud.phase
        );
    }
    if game.high_scores.is_empty() {
        println!("  no scoring runs");
    } else {
        println!("  best runs:");
        for (i, run) in game.high_scores.runs.iter().enumerate() {
            println!(
                "    {:>2}. wave {:>2}  score {:>5}  {} ticks",
                i + 1,
                run.wave,
                run.score,
                run.ticks
            );
        }
    }
}
