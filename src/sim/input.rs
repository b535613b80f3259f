//! Input snapshot read by the simulation
//!
//! The host feeds key-down/key-up events in between ticks. The simulation
//! only reads the snapshot; one-shot edges are cleared by the host after a
//! processed tick via [`InputState::end_frame`].

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Keys the simulation understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Fire,
    Restart,
    Pause,
}

/// Held keys plus edge-triggered actions
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: BTreeSet<Key>,
    /// Set on a fire key-down, cleared on key-up (one shot per press)
    fire_latch: bool,
    fire_edge: bool,
    restart_edge: bool,
    pause_edge: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down event. Auto-repeat downs are ignored.
    pub fn press(&mut self, key: Key) {
        let newly_held = self.held.insert(key);
        match key {
            Key::Fire => {
                if !self.fire_latch {
                    self.fire_edge = true;
                    self.fire_latch = true;
                }
            }
            Key::Restart if newly_held => self.restart_edge = true,
            Key::Pause if newly_held => self.pause_edge = true,
            _ => {}
        }
    }

    /// Record a key-up event
    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
        if key == Key::Fire {
            self.fire_latch = false;
        }
    }

    /// Is the key currently held
    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Fire key went down since the last processed tick
    pub fn fire_pressed(&self) -> bool {
        self.fire_edge
    }

    pub fn restart_pressed(&self) -> bool {
        self.restart_edge
    }

    pub fn pause_pressed(&self) -> bool {
        self.pause_edge
    }

    /// Clear one-shot inputs after a tick consumed them
    pub fn end_frame(&mut self) {
        self.fire_edge = false;
        self.restart_edge = false;
        self.pause_edge = false;
    }

    /// Drop every held key and edge (e.g. on window blur)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
