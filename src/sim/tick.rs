//! Simulation tick
//!
//! Core game loop that advances the game by one frame.

use super::enemy::EnemyContext;
use super::input::InputState;
use super::state::{GameEvent, GameState};

/// Advance the game state by one frame
///
/// `dt` is the frame time in seconds; it only paces sprite animation; all
/// movement is per tick.
pub fn tick(state: &mut GameState, input: &InputState, dt: f32) {
    state.events.clear();

    // Restart only from game over
    if input.restart_pressed() && state.game_over {
        state.restart();
        return;
    }

    // Handle pause toggle
    if input.pause_pressed() && !state.game_over {
        state.paused = !state.paused;
        if state.paused {
            log::debug!("Paused at tick {}", state.time_ticks);
            state.events.push(GameEvent::Paused);
        } else {
            log::debug!("Resumed at tick {}", state.time_ticks);
            state.events.push(GameEvent::Resumed);
        }
    }
    if state.paused {
        return;
    }

    state.time_ticks += 1;
    let sprite_update = advance_sprite_timer(state, dt);

    // Player is frozen once the run is over
    if !state.game_over {
        state.player.update(input, state.tuning.field_width);
        if input.fire_pressed() {
            if state.player.shoot(&mut state.projectiles) {
                state.events.push(GameEvent::ShotFired);
            } else {
                log::debug!("Pool exhausted, shot dropped");
                state.events.push(GameEvent::ShotDropped);
            }
        }
    }

    state.projectiles.update();

    let was_over = state.game_over;
    let mut spawn_next = 0u32;
    {
        let mut ctx = EnemyContext {
            projectiles: &mut state.projectiles,
            player: &mut state.player,
            score: &mut state.score,
            game_over: &mut state.game_over,
            events: &mut state.events,
            field_width: state.tuning.field_width,
            field_height: state.tuning.field_height,
            sprite_update,
        };

        for wave in &mut state.waves {
            wave.update(&mut ctx);
            if wave.is_cleared() && !wave.next_wave_trigger && !*ctx.game_over {
                wave.next_wave_trigger = true;
                spawn_next += 1;
            }
        }
    }

    for _ in 0..spawn_next {
        let wave = state.grow_and_build_wave();
        state.waves.push(wave);
        state.wave_count += 1;
        if state.tuning.bonus_life_per_wave && state.player.lives < state.player.max_lives {
            state.player.lives += 1;
        }
        log::info!(
            "Wave {}: {}x{} formation, score {}",
            state.wave_count,
            state.columns,
            state.rows,
            state.score
        );
        state.events.push(GameEvent::WaveSpawned {
            wave: state.wave_count,
        });
    }

    // Spent waves have nothing left to update
    state.waves.retain(|w| !(w.is_cleared() && w.next_wave_trigger));

    if state.game_over && !was_over {
        log::info!(
            "Game over at wave {} with score {}",
            state.wave_count,
            state.score
        );
    }
}

/// Decide whether sprites advance this tick
fn advance_sprite_timer(state: &mut GameState, dt: f32) -> bool {
    let interval = state.tuning.sprite_interval;
    if interval <= 0.0 {
        return true;
    }
    if state.sprite_timer > interval {
        state.sprite_timer = 0.0;
        true
    } else {
        state.sprite_timer += dt;
        false
    }
}
