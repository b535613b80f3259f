//! Game state and core simulation types
//!
//! `GameState` owns every entity by value. Entities never point back at it;
//! the tick lends them the pieces they may mutate.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::enemy::EnemyKind;
use super::player::Player;
use super::projectile::ProjectilePool;
use super::wave::Wave;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Run ended, waiting for restart
    GameOver,
}

/// Things that happened during the last tick, for HUD/audio/log consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotFired,
    /// Fire pressed with every pool slot in flight
    ShotDropped,
    EnemyDestroyed { kind: EnemyKind, points: u32 },
    PlayerHit { lives_left: u32 },
    EnemyReachedBottom,
    WaveSpawned { wave: u32 },
    GameOver { score: u32 },
    Restarted,
    Paused,
    Resumed,
}

/// RNG state wrapper for serialization
///
/// Each consumer gets its own PCG stream so a run replays exactly from its
/// seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Generator for the next stream
    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::new(self.seed, self.stream);
        self.stream += 1;
        rng
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Balance values this run was built with
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    pub player: Player,
    pub projectiles: ProjectilePool,
    /// Formations in spawn order (normally exactly one)
    pub waves: Vec<Wave>,
    pub score: u32,
    pub game_over: bool,
    pub paused: bool,
    /// 1-based number of the current wave
    pub wave_count: u32,
    /// Formation size for the next spawned wave
    pub columns: u32,
    pub rows: u32,
    pub enemy_size: f32,
    /// Seconds accumulated toward the next sprite frame
    pub sprite_timer: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events produced by the last tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with one starting wave
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let projectiles = ProjectilePool::new(
            tuning.pool_size,
            tuning.projectile_width,
            tuning.projectile_height,
            tuning.projectile_speed,
        );
        let mut state = Self {
            player: Player::new(&tuning),
            projectiles,
            waves: Vec::new(),
            score: 0,
            game_over: false,
            paused: false,
            wave_count: 1,
            columns: tuning.start_columns,
            rows: tuning.start_rows,
            enemy_size: tuning.enemy_size,
            sprite_timer: 0.0,
            time_ticks: 0,
            events: Vec::new(),
            seed,
            rng_state: RngState::new(seed),
            tuning,
        };
        let wave = state.build_wave();
        state.waves.push(wave);
        state
    }

    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::GameOver
        } else if self.paused {
            GamePhase::Paused
        } else {
            GamePhase::Playing
        }
    }

    /// Fresh formation at the current columns/rows
    pub fn build_wave(&mut self) -> Wave {
        let mut rng = self.rng_state.next_rng();
        Wave::new(&self.tuning, self.columns, self.rows, self.enemy_size, &mut rng)
    }

    /// Grow the formation by one column or row and build the next wave
    ///
    /// Columns grow on a coin flip, rows otherwise. A grown formation never
    /// exceeds 80% of the field width or 60% of its height; when the picked
    /// axis is full the other one grows, and a full formation stays as is.
    pub fn grow_and_build_wave(&mut self) -> Wave {
        use rand::Rng;

        let mut rng = self.rng_state.next_rng();
        let column_fits =
            (self.columns + 1) as f32 * self.enemy_size <= self.tuning.max_formation_width();
        let row_fits =
            (self.rows + 1) as f32 * self.enemy_size <= self.tuning.max_formation_height();
        let prefer_columns = rng.random_bool(0.5);

        match (prefer_columns, column_fits, row_fits) {
            (true, true, _) | (false, true, false) => self.columns += 1,
            (_, _, true) => self.rows += 1,
            _ => log::debug!(
                "Formation at its cap ({}x{}), not growing",
                self.columns,
                self.rows
            ),
        }
        self.build_wave()
    }

    /// Start a new run. The projectile pool is left as is, so shots already
    /// in flight keep flying.
    pub fn restart(&mut self) {
        self.player.reset(&self.tuning);
        self.columns = self.tuning.start_columns;
        self.rows = self.tuning.start_rows;
        self.score = 0;
        self.wave_count = 1;
        self.game_over = false;
        self.paused = false;
        self.sprite_timer = 0.0;
        let wave = self.build_wave();
        self.waves = vec![wave];
        self.events.push(GameEvent::Restarted);
        log::info!("Game restarted");
    }

    /// Live enemies across all waves
    pub fn enemy_count(&self) -> usize {
        self.waves.iter().map(|w| w.enemies.len()).sum()
    }
}
