//! Data-driven game balance
//!
//! Every number the simulation reads lives here so a config file can
//! override it without touching code.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::SettingsError;

/// Game balance values consumed by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Play field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Projectiles ===
    /// Fixed number of pooled projectile slots
    pub pool_size: usize,
    pub projectile_width: f32,
    pub projectile_height: f32,
    /// Upward travel per tick
    pub projectile_speed: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    /// Horizontal travel per tick while a move key is held
    pub player_speed: f32,
    pub player_lives: u32,
    /// Cap for lives gained from wave-clear bonuses
    pub player_max_lives: u32,

    // === Waves ===
    pub enemy_size: f32,
    pub start_columns: u32,
    pub start_rows: u32,
    /// Horizontal formation sweep per tick
    pub wave_speed: f32,
    /// Downward step per tick while a wave floats into view
    pub float_in_step: f32,
    /// Chance (0-1) that a formation slot holds a Rhinomorph
    pub rhinomorph_chance: f64,
    /// Grant one life (up to the cap) each time a wave is cleared
    pub bonus_life_per_wave: bool,

    // === Animation ===
    /// Seconds between sprite frame advances (0 = every tick)
    pub sprite_interval: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            pool_size: PROJECTILE_POOL_SIZE,
            projectile_width: PROJECTILE_WIDTH,
            projectile_height: PROJECTILE_HEIGHT,
            projectile_speed: PROJECTILE_SPEED,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_speed: PLAYER_SPEED,
            player_lives: PLAYER_LIVES,
            player_max_lives: PLAYER_MAX_LIVES,

            enemy_size: ENEMY_SIZE,
            start_columns: START_COLUMNS,
            start_rows: START_ROWS,
            wave_speed: WAVE_SPEED,
            float_in_step: FLOAT_IN_STEP,
            rhinomorph_chance: 0.0,
            bonus_life_per_wave: false,

            sprite_interval: 0.0,
        }
    }
}

impl Tuning {
    /// Check values a config file could get wrong.
    ///
    /// The simulation asserts the same conditions, so anything loaded from
    /// disk should pass through here first.
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn positive(field: &'static str, value: f32) -> Result<(), SettingsError> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(SettingsError::invalid(field, format!("must be positive, got {value}")))
            }
        }

        positive("field_width", self.field_width)?;
        positive("field_height", self.field_height)?;
        positive("projectile_width", self.projectile_width)?;
        positive("projectile_height", self.projectile_height)?;
        positive("projectile_speed", self.projectile_speed)?;
        positive("player_width", self.player_width)?;
        positive("player_height", self.player_height)?;
        positive("player_speed", self.player_speed)?;
        positive("enemy_size", self.enemy_size)?;
        positive("wave_speed", self.wave_speed)?;
        positive("float_in_step", self.float_in_step)?;

        if self.pool_size == 0 {
            return Err(SettingsError::invalid("pool_size", "must hold at least one projectile"));
        }
        if self.player_lives == 0 {
            return Err(SettingsError::invalid("player_lives", "must be at least 1"));
        }
        if self.player_max_lives < self.player_lives {
            return Err(SettingsError::invalid(
                "player_max_lives",
                format!("must be >= player_lives ({})", self.player_lives),
            ));
        }
        if self.start_columns == 0 || self.start_rows == 0 {
            return Err(SettingsError::invalid("start_columns/start_rows", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.rhinomorph_chance) {
            return Err(SettingsError::invalid("rhinomorph_chance", "must be within 0..=1"));
        }
        if self.sprite_interval < 0.0 {
            return Err(SettingsError::invalid("sprite_interval", "must not be negative"));
        }
        Ok(())
    }

    /// Widest formation allowed before growth switches to rows
    pub fn max_formation_width(&self) -> f32 {
        self.field_width * MAX_FORMATION_WIDTH_RATIO
    }

    /// Tallest formation allowed before growth stops
    pub fn max_formation_height(&self) -> f32 {
        self.field_height * MAX_FORMATION_HEIGHT_RATIO
    }
}
