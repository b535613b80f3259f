//! Idle/demo mode - a bot that plays the game
//!
//! The bot only touches the game the way a keyboard would: it sends host key
//! names through the configured bindings into the input snapshot.

use crate::settings::KeyBindings;
use crate::sim::{GameState, InputState, Key, Rect};

/// Ticks to wait between shots
const FIRE_COOLDOWN_TICKS: u32 = 6;

#[derive(Debug, Default)]
pub struct Autopilot {
    fire_cooldown: u32,
    restart_sent: bool,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Horizontal center of the enemy to chase: lowest live enemy, nearest
    /// to the ship on ties
    ///
    /// Positions come from the formation origin, so a wave moved since its
    /// last update is still aimed at correctly.
    pub fn target_x(state: &GameState) -> Option<f32> {
        let ship_x = state.player.center_x();
        state
            .waves
            .iter()
            .flat_map(|w| {
                w.enemies
                    .iter()
                    .filter(|e| e.is_alive())
                    .map(move |e| Rect::from_pos(w.pos + e.offset, e.size, e.size))
            })
            .max_by(|a, b| {
                a.bottom().total_cmp(&b.bottom()).then_with(|| {
                    let da = (a.center().x - ship_x).abs();
                    let db = (b.center().x - ship_x).abs();
                    db.total_cmp(&da)
                })
            })
            .map(|r| r.center().x)
    }

    /// Update held keys for the next tick
    pub fn drive(&mut self, state: &GameState, input: &mut InputState, bindings: &KeyBindings) {
        let mut send = |key: Key, down: bool| {
            if let Some(name) = bindings.name_for(key) {
                if down {
                    bindings.key_down(input, name);
                } else {
                    bindings.key_up(input, name);
                }
            }
        };

        if state.game_over {
            // Tap restart: down on one tick, up on the next
            send(Key::Restart, !self.restart_sent);
            self.restart_sent = !self.restart_sent;
            send(Key::Left, false);
            send(Key::Right, false);
            send(Key::Fire, false);
            return;
        }
        if self.restart_sent {
            send(Key::Restart, false);
            self.restart_sent = false;
        }

        // Tap fire: release the key the tick after pressing it
        send(Key::Fire, false);
        self.fire_cooldown = self.fire_cooldown.saturating_sub(1);

        let Some(target) = Self::target_x(state) else {
            send(Key::Left, false);
            send(Key::Right, false);
            return;
        };

        let diff = target - state.player.center_x();
        let dead_zone = state.player.speed / 2.0;
        send(Key::Left, diff < -dead_zone);
        send(Key::Right, diff > dead_zone);

        // Fire once a shot would clip the target's column
        let reach = (state.enemy_size + state.tuning.projectile_width) / 2.0;
        if diff.abs() < reach && self.fire_cooldown == 0 {
            send(Key::Fire, true);
            self.fire_cooldown = FIRE_COOLDOWN_TICKS;
        }
    }
}
