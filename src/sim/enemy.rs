//! Formation enemies
//!
//! An enemy has no velocity of its own: its position is always the wave
//! origin plus a fixed offset inside the formation. Enemy kinds only differ
//! in stats and sprite, so they are described by data instead of behaviour.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::player::Player;
use super::projectile::ProjectilePool;
use super::state::GameEvent;
use crate::render::SpriteId;

/// Enemy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnemyKind {
    #[default]
    Beetlemorph,
    Rhinomorph,
}

/// Per-kind stats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyStats {
    pub sprite: SpriteId,
    pub lives: u32,
    /// Last frame of the death animation
    pub max_frame: u32,
    /// Sprite sheet rows to pick a look from
    pub sprite_rows: u32,
    /// Each hit advances the sprite column to show damage
    pub damage_frames: bool,
}

impl EnemyKind {
    pub const fn stats(self) -> EnemyStats {
        match self {
            EnemyKind::Beetlemorph => EnemyStats {
                sprite: SpriteId::Beetlemorph,
                lives: 1,
                max_frame: 2,
                sprite_rows: 4,
                damage_frames: false,
            },
            EnemyKind::Rhinomorph => EnemyStats {
                sprite: SpriteId::Rhinomorph,
                lives: 4,
                max_frame: 5,
                sprite_rows: 4,
                damage_frames: true,
            },
        }
    }
}

/// Mutable game context handed to formation updates
///
/// Replaces any back-reference to the game: the controller lends out exactly
/// the pieces an update may touch.
pub struct EnemyContext<'a> {
    pub projectiles: &'a mut ProjectilePool,
    pub player: &'a mut Player,
    pub score: &'a mut u32,
    pub game_over: &'a mut bool,
    pub events: &'a mut Vec<GameEvent>,
    pub field_width: f32,
    pub field_height: f32,
    /// Advance sprite animations this tick
    pub sprite_update: bool,
}

impl EnemyContext<'_> {
    fn end_game(&mut self) {
        if !*self.game_over {
            *self.game_over = true;
            self.events.push(GameEvent::GameOver { score: *self.score });
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    /// Absolute top-left corner (recomputed every update)
    pub pos: Vec2,
    /// Fixed offset from the wave origin
    pub offset: Vec2,
    pub size: f32,
    pub lives: i32,
    pub max_lives: u32,
    /// Sprite column (hit / death animation)
    pub frame_x: u32,
    /// Sprite row (cosmetic variant)
    pub frame_y: u32,
    pub marked_for_deletion: bool,
}

impl Enemy {
    pub fn new(kind: EnemyKind, offset: Vec2, size: f32, frame_y: u32) -> Self {
        let stats = kind.stats();
        Self {
            kind,
            pos: offset,
            offset,
            size,
            lives: stats.lives as i32,
            max_lives: stats.lives,
            frame_x: 0,
            frame_y: frame_y % stats.sprite_rows,
            marked_for_deletion: false,
        }
    }

    pub fn stats(&self) -> EnemyStats {
        self.kind.stats()
    }

    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }

    /// Playing the death animation
    pub fn is_dying(&self) -> bool {
        !self.is_alive() && !self.marked_for_deletion
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos(self.pos, self.size, self.size)
    }

    /// Apply damage
    pub fn hit(&mut self, damage: i32) {
        self.lives -= damage;
        if self.stats().damage_frames {
            self.frame_x = (self.max_lives as i32 - self.lives.max(0)) as u32;
        }
    }

    /// Follow the formation and resolve collisions for one tick
    pub fn update(&mut self, origin: Vec2, ctx: &mut EnemyContext<'_>) {
        self.pos = origin + self.offset;
        let rect = self.rect();

        // Projectiles: at most one hit per tick, first in pool order
        if self.is_alive() {
            if let Some(projectile) = ctx.projectiles.first_hit(&rect) {
                projectile.reset();
                self.hit(1);
            }
        }

        if self.is_dying() {
            if ctx.sprite_update {
                self.frame_x += 1;
            }
            if self.frame_x > self.stats().max_frame {
                self.marked_for_deletion = true;
                if !*ctx.game_over {
                    *ctx.score += self.max_lives;
                    ctx.events.push(GameEvent::EnemyDestroyed {
                        kind: self.kind,
                        points: self.max_lives,
                    });
                }
            }
        }

        // Ramming the player skips the death animation
        if self.is_alive() && rect.overlaps(&ctx.player.rect()) {
            self.marked_for_deletion = true;
            self.lives = 0;
            if !*ctx.game_over {
                if *ctx.score > 0 {
                    *ctx.score -= 1;
                }
                ctx.player.lives = ctx.player.lives.saturating_sub(1);
                ctx.events.push(GameEvent::PlayerHit {
                    lives_left: ctx.player.lives,
                });
                if !ctx.player.is_alive() {
                    ctx.end_game();
                }
            }
        }

        // Reaching the bottom loses the game regardless of lives
        if rect.bottom() > ctx.field_height {
            self.marked_for_deletion = true;
            if !*ctx.game_over {
                ctx.events.push(GameEvent::EnemyReachedBottom);
            }
            ctx.end_game();
        }
    }
}
