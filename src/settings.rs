//! Game settings and preferences
//!
//! Loaded from a JSON file by the native runner. Missing fields fall back to
//! defaults, so a config only needs the values it wants to change.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::{InputState, Key};
use crate::tuning::Tuning;

/// Difficulty presets layered on top of the configured tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "norm" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Adjust a tuning for this preset (Normal leaves it untouched)
    pub fn apply(&self, tuning: &mut Tuning) {
        match self {
            Difficulty::Easy => {
                tuning.wave_speed *= 0.5;
                tuning.bonus_life_per_wave = true;
            }
            Difficulty::Normal => {}
            Difficulty::Hard => {
                tuning.wave_speed *= 2.0;
                tuning.rhinomorph_chance = tuning.rhinomorph_chance.max(0.3);
            }
        }
    }
}

/// Host key names mapped to simulation keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub fire: Vec<String>,
    pub restart: Vec<String>,
    pub pause: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        fn names(list: &[&str]) -> Vec<String> {
            list.iter().map(|s| s.to_string()).collect()
        }

        Self {
            left: names(&["ArrowLeft", "a"]),
            right: names(&["ArrowRight", "d"]),
            fire: names(&["1", " "]),
            restart: names(&["r"]),
            pause: names(&["p", "Escape"]),
        }
    }
}

impl KeyBindings {
    /// Resolve a host key name (e.g. `KeyboardEvent.key`) to a simulation key
    pub fn resolve(&self, name: &str) -> Option<Key> {
        let bound = |list: &[String]| list.iter().any(|n| n == name);

        if bound(&self.left) {
            Some(Key::Left)
        } else if bound(&self.right) {
            Some(Key::Right)
        } else if bound(&self.fire) {
            Some(Key::Fire)
        } else if bound(&self.restart) {
            Some(Key::Restart)
        } else if bound(&self.pause) {
            Some(Key::Pause)
        } else {
            None
        }
    }

    /// Feed a host key-down into the input snapshot; false if unbound
    pub fn key_down(&self, input: &mut InputState, name: &str) -> bool {
        match self.resolve(name) {
            Some(key) => {
                input.press(key);
                true
            }
            None => false,
        }
    }

    /// Feed a host key-up into the input snapshot; false if unbound
    pub fn key_up(&self, input: &mut InputState, name: &str) -> bool {
        match self.resolve(name) {
            Some(key) => {
                input.release(key);
                true
            }
            None => false,
        }
    }

    /// First host name bound to a key, if any
    pub fn name_for(&self, key: Key) -> Option<&str> {
        let list = match key {
            Key::Left => &self.left,
            Key::Right => &self.right,
            Key::Fire => &self.fire,
            Key::Restart => &self.restart,
            Key::Pause => &self.pause,
        };
        list.first().map(String::as_str)
    }
}

/// Errors raised while loading or saving settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings io error: {0}")]
    Io(#[from] io::Error),
    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl SettingsError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Difficulty preset applied on top of `tuning`
    pub difficulty: Difficulty,
    /// Fixed run seed (random when absent)
    pub seed: Option<u64>,
    /// Base game balance
    pub tuning: Tuning,
    /// Keyboard mapping
    pub bindings: KeyBindings,
}

impl Settings {
    /// Parse settings from JSON text and validate the tuning
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.effective_tuning().validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Tuning with the difficulty preset applied
    pub fn effective_tuning(&self) -> Tuning {
        let mut tuning = self.tuning.clone();
        self.difficulty.apply(&mut tuning);
        tuning
    }
}
