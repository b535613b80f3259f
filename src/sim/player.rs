//! The player's ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::input::{InputState, Key};
use super::projectile::ProjectilePool;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub lives: u32,
    pub max_lives: u32,
}

impl Player {
    /// Centered on the bottom edge with full starting lives
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Self::spawn_pos(tuning),
            width: tuning.player_width,
            height: tuning.player_height,
            speed: tuning.player_speed,
            lives: tuning.player_lives,
            max_lives: tuning.player_max_lives,
        }
    }

    fn spawn_pos(tuning: &Tuning) -> Vec2 {
        Vec2::new(
            tuning.field_width / 2.0 - tuning.player_width / 2.0,
            tuning.field_height - tuning.player_height,
        )
    }

    /// Back to the spawn point with starting lives
    pub fn reset(&mut self, tuning: &Tuning) {
        self.pos = Self::spawn_pos(tuning);
        self.lives = tuning.player_lives;
    }

    /// Apply held movement keys and clamp to the field
    ///
    /// The ship may hang half off either edge.
    pub fn update(&mut self, input: &InputState, field_width: f32) {
        if input.is_held(Key::Left) {
            self.pos.x -= self.speed;
        }
        if input.is_held(Key::Right) {
            self.pos.x += self.speed;
        }

        let half = self.width / 2.0;
        self.pos.x = self.pos.x.clamp(-half, field_width - half);
    }

    /// Launch a projectile from the nose; false if the pool is exhausted
    pub fn shoot(&self, pool: &mut ProjectilePool) -> bool {
        pool.acquire(self.center_x(), self.pos.y).is_some()
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos(self.pos, self.width, self.height)
    }

    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(&Tuning::default())
    }

    #[test]
    fn test_spawn_position() {
        let p = player();
        assert_eq!(p.pos, Vec2::new(250.0, 600.0));
        assert_eq!(p.lives, 3);
        assert_eq!(p.center_x(), 300.0);
    }

    #[test]
    fn test_moves_with_held_keys() {
        let mut p = player();
        let mut input = InputState::new();

        input.press(Key::Left);
        p.update(&input, 600.0);
        assert_eq!(p.pos.x, 240.0);

        input.release(Key::Left);
        input.press(Key::Right);
        p.update(&input, 600.0);
        p.update(&input, 600.0);
        assert_eq!(p.pos.x, 260.0);
    }

    #[test]
    fn test_both_keys_cancel() {
        let mut p = player();
        let mut input = InputState::new();
        input.press(Key::Left);
        input.press(Key::Right);
        p.update(&input, 600.0);
        assert_eq!(p.pos.x, 250.0);
    }

    #[test]
    fn test_clamps_half_off_screen() {
        let mut p = player();
        let mut input = InputState::new();
        input.press(Key::Left);
        for _ in 0..100 {
            p.update(&input, 600.0);
        }
        assert_eq!(p.pos.x, -50.0);

        input.release(Key::Left);
        input.press(Key::Right);
        for _ in 0..100 {
            p.update(&input, 600.0);
        }
        assert_eq!(p.pos.x, 550.0);
    }

    #[test]
    fn test_shoot_from_nose() {
        let p = player();
        let mut pool = ProjectilePool::new(2, 4.0, 20.0, 20.0);

        assert!(p.shoot(&mut pool));
        let shot = pool.active().next().unwrap();
        assert_eq!(shot.pos, Vec2::new(298.0, 600.0));

        assert!(p.shoot(&mut pool));
        assert!(!p.shoot(&mut pool));
        assert_eq!(pool.active_count(), 2);
    }

    #[test]
    fn test_reset() {
        let mut p = player();
        p.pos.x = 10.0;
        p.lives = 0;
        p.reset(&Tuning::default());
        assert_eq!(p.pos.x, 250.0);
        assert_eq!(p.lives, 3);
    }
}
