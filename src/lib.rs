//! Wave Shooter - a minimal arcade shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, projectile pool, waves, game state)
//! - `render`: Renderer / image provider seams consumed by the host
//! - `settings`: Config file, difficulty presets, key bindings
//! - `tuning`: Data-driven game balance
//! - `highscores`: In-memory session leaderboard
//! - `autopilot`: Demo controller that plays through the input snapshot

pub mod autopilot;
pub mod highscores;
pub mod render;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use settings::{Difficulty, KeyBindings, Settings, SettingsError};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per animation frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const FIELD_HEIGHT: f32 = 700.0;

    /// Projectile pool defaults
    pub const PROJECTILE_POOL_SIZE: usize = 10;
    pub const PROJECTILE_WIDTH: f32 = 4.0;
    pub const PROJECTILE_HEIGHT: f32 = 20.0;
    pub const PROJECTILE_SPEED: f32 = 20.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 100.0;
    pub const PLAYER_HEIGHT: f32 = 100.0;
    pub const PLAYER_SPEED: f32 = 10.0;
    pub const PLAYER_LIVES: u32 = 3;
    pub const PLAYER_MAX_LIVES: u32 = 10;

    /// Formation defaults
    pub const ENEMY_SIZE: f32 = 80.0;
    pub const START_COLUMNS: u32 = 2;
    pub const START_ROWS: u32 = 2;
    /// Horizontal formation speed (units per tick)
    pub const WAVE_SPEED: f32 = 1.0;
    /// Vertical step while a fresh wave floats into view
    pub const FLOAT_IN_STEP: f32 = 5.0;
    /// Formation may grow up to these fractions of the field
    pub const MAX_FORMATION_WIDTH_RATIO: f32 = 0.8;
    pub const MAX_FORMATION_HEIGHT_RATIO: f32 = 0.6;
}
