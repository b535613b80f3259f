//! Render seam
//!
//! The simulation never draws. `render` walks a `GameState` and emits draw
//! calls to whatever [`Renderer`] the host plugs in; nothing is read back.

pub mod sprites;

pub use sprites::{ImageProvider, SpriteCache, SpriteFrame, SpriteId};

use serde::Serialize;

use crate::sim::{GamePhase, GameState, Rect};

/// Heads-up display values for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    pub score: u32,
    pub lives: u32,
    pub max_lives: u32,
    pub wave: u32,
    pub phase: GamePhase,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: state.score,
            lives: state.player.lives,
            max_lives: state.player.max_lives,
            wave: state.wave_count,
            phase: state.phase(),
        }
    }
}

/// Host drawing backend
pub trait Renderer {
    /// Draw an entity's bounds, textured with a sprite frame when given
    fn draw(&mut self, rect: Rect, sprite: Option<(SpriteId, SpriteFrame)>);

    /// Draw score/lives/wave and overlays
    fn draw_hud(&mut self, _hud: &Hud) {}
}

/// Emit draw calls for the whole scene, back to front
pub fn render<R: Renderer + ?Sized>(state: &GameState, renderer: &mut R) {
    renderer.draw(
        state.player.rect(),
        Some((SpriteId::Player, SpriteFrame::default())),
    );

    for projectile in state.projectiles.active() {
        renderer.draw(
            projectile.rect(),
            Some((SpriteId::Projectile, SpriteFrame::default())),
        );
    }

    for wave in &state.waves {
        for enemy in &wave.enemies {
            let frame = SpriteFrame::new(enemy.frame_x, enemy.frame_y);
            renderer.draw(enemy.rect(), Some((enemy.stats().sprite, frame)));
        }
    }

    renderer.draw_hud(&Hud::from_state(state));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(Rect, Option<(SpriteId, SpriteFrame)>)>,
        hud: Option<Hud>,
    }

    impl Renderer for Recorder {
        fn draw(&mut self, rect: Rect, sprite: Option<(SpriteId, SpriteFrame)>) {
            self.calls.push((rect, sprite));
        }

        fn draw_hud(&mut self, hud: &Hud) {
            self.hud = Some(hud.clone());
        }
    }

    #[test]
    fn test_draw_order_and_counts() {
        let mut state = GameState::new(Tuning::default(), 4);
        state.projectiles.acquire(300.0, 600.0);

        let mut recorder = Recorder::default();
        render(&state, &mut recorder);

        // player + 1 projectile + 4 enemies
        assert_eq!(recorder.calls.len(), 6);
        assert_eq!(recorder.calls[0].1.map(|(id, _)| id), Some(SpriteId::Player));
        assert_eq!(
            recorder.calls[1],
            (
                Rect::new(298.0, 600.0, 4.0, 20.0),
                Some((SpriteId::Projectile, SpriteFrame::default()))
            )
        );
        assert!(
            recorder.calls[2..]
                .iter()
                .all(|(_, s)| matches!(s, Some((SpriteId::Beetlemorph, _))))
        );
    }

    #[test]
    fn test_enemy_frame_passed_through() {
        let mut state = GameState::new(Tuning::default(), 4);
        state.waves[0].enemies[0].frame_x = 2;
        let row = state.waves[0].enemies[0].frame_y;

        let mut recorder = Recorder::default();
        render(&state, &mut recorder);
        let (_, sprite) = recorder.calls[1];
        assert_eq!(sprite.map(|(_, f)| f), Some(SpriteFrame::new(2, row)));
    }

    #[test]
    fn test_hud_snapshot() {
        let mut state = GameState::new(Tuning::default(), 4);
        state.score = 12;
        state.game_over = true;

        let mut recorder = Recorder::default();
        render(&state, &mut recorder);
        let hud = recorder.hud.unwrap();
        assert_eq!(hud.score, 12);
        assert_eq!(hud.lives, 3);
        assert_eq!(hud.wave, 1);
        assert_eq!(hud.phase, GamePhase::GameOver);
    }
}
