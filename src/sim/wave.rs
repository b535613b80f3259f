//! Enemy formations
//!
//! A wave is a rectangular grid that moves as one unit: it floats in from
//! above the field, sweeps sideways, and drops one row each time it touches
//! a side wall.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::enemy::{Enemy, EnemyContext, EnemyKind};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wave {
    /// Formation origin (top-left)
    pub pos: Vec2,
    /// Per-tick motion; `y` is only non-zero on a wall-bounce tick
    pub speed: Vec2,
    pub columns: u32,
    pub rows: u32,
    pub enemy_size: f32,
    pub float_in_step: f32,
    /// Enemies in row-major order
    pub enemies: Vec<Enemy>,
    /// Set once this wave has spawned its successor
    pub next_wave_trigger: bool,
}

impl Wave {
    /// Build a `columns` x `rows` formation centered above the field
    ///
    /// Panics on an empty grid or a non-positive enemy size.
    pub fn new<R: Rng + ?Sized>(
        tuning: &Tuning,
        columns: u32,
        rows: u32,
        enemy_size: f32,
        rng: &mut R,
    ) -> Self {
        assert!(
            columns > 0 && rows > 0,
            "wave needs at least one column and row ({columns}x{rows})"
        );
        assert!(enemy_size > 0.0, "enemy size must be positive ({enemy_size})");

        let width = columns as f32 * enemy_size;
        let height = rows as f32 * enemy_size;
        let direction = if rng.random_bool(0.5) { -1.0 } else { 1.0 };
        let pos = Vec2::new(tuning.field_width / 2.0 - width / 2.0, -height);

        let mut enemies = Vec::with_capacity((columns * rows) as usize);
        for row in 0..rows {
            for column in 0..columns {
                let kind = if tuning.rhinomorph_chance > 0.0
                    && rng.random_bool(tuning.rhinomorph_chance)
                {
                    EnemyKind::Rhinomorph
                } else {
                    EnemyKind::Beetlemorph
                };
                let frame_y = rng.random_range(0..kind.stats().sprite_rows);
                let offset = Vec2::new(column as f32 * enemy_size, row as f32 * enemy_size);
                let mut enemy = Enemy::new(kind, offset, enemy_size, frame_y);
                enemy.pos = pos + offset;
                enemies.push(enemy);
            }
        }

        Self {
            pos,
            speed: Vec2::new(direction * tuning.wave_speed, 0.0),
            columns,
            rows,
            enemy_size,
            float_in_step: tuning.float_in_step,
            enemies,
            next_wave_trigger: false,
        }
    }

    pub fn width(&self) -> f32 {
        self.columns as f32 * self.enemy_size
    }

    pub fn height(&self) -> f32 {
        self.rows as f32 * self.enemy_size
    }

    /// All enemies removed
    pub fn is_cleared(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Still floating in from above the field
    pub fn is_entering(&self) -> bool {
        self.pos.y < 0.0
    }

    /// Move the formation, update every enemy, drop the removed ones
    pub fn update(&mut self, ctx: &mut EnemyContext<'_>) {
        if self.is_entering() {
            self.pos.y += self.float_in_step;
        }

        self.speed.y = 0.0;
        if self.pos.x < 0.0 || self.pos.x > ctx.field_width - self.width() {
            self.speed.x = -self.speed.x;
            self.speed.y = self.enemy_size;
        }
        self.pos += self.speed;

        let origin = self.pos;
        for enemy in &mut self.enemies {
            enemy.update(origin, ctx);
        }
        self.enemies.retain(|e| !e.marked_for_deletion);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameEvent, Player, ProjectilePool};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    struct Fixture {
        pool: ProjectilePool,
        player: Player,
        score: u32,
        game_over: bool,
        events: Vec<GameEvent>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                pool: ProjectilePool::new(10, 4.0, 20.0, 20.0),
                player: Player::new(&Tuning::default()),
                score: 0,
                game_over: false,
                events: Vec::new(),
            }
        }

        fn update(&mut self, wave: &mut Wave) {
            let mut ctx = EnemyContext {
                projectiles: &mut self.pool,
                player: &mut self.player,
                score: &mut self.score,
                game_over: &mut self.game_over,
                events: &mut self.events,
                field_width: 600.0,
                field_height: 700.0,
                sprite_update: true,
            };
            wave.update(&mut ctx);
        }
    }

    fn wave(columns: u32, rows: u32) -> Wave {
        let mut rng = Pcg32::seed_from_u64(7);
        Wave::new(&Tuning::default(), columns, rows, 80.0, &mut rng)
    }

    #[test]
    fn test_new_formation_layout() {
        let w = wave(3, 2);
        assert_eq!(w.enemies.len(), 6);
        assert_eq!(w.pos, Vec2::new(180.0, -160.0));
        assert_eq!(w.speed.x.abs(), 1.0);
        assert_eq!(w.enemies[4].offset, Vec2::new(80.0, 80.0));
        assert!(w.enemies.iter().all(|e| e.kind == EnemyKind::Beetlemorph));
        assert!(w.enemies.iter().all(|e| e.frame_y < 4));
        assert_eq!(w.enemies[4].pos, Vec2::new(260.0, -80.0));
    }

    #[test]
    fn test_floats_in_from_above() {
        let mut fx = Fixture::new();
        let mut w = wave(2, 2);
        let start_x = w.pos.x;

        fx.update(&mut w);
        assert_eq!(w.pos.y, -155.0);
        assert_eq!((w.pos.x - start_x).abs(), 1.0);

        for _ in 0..31 {
            fx.update(&mut w);
        }
        assert_eq!(w.pos.y, 0.0);
        fx.update(&mut w);
        assert_eq!(w.pos.y, 0.0);
    }

    #[test]
    fn test_bounce_flips_and_drops() {
        let mut fx = Fixture::new();
        let mut w = wave(2, 2);
        w.pos = Vec2::new(441.0, 0.0);
        w.speed = Vec2::new(1.0, 0.0);

        fx.update(&mut w);
        assert_eq!(w.speed.x, -1.0);
        assert_eq!(w.pos, Vec2::new(440.0, 80.0));

        // Back inside: no further drop
        fx.update(&mut w);
        assert_eq!(w.pos, Vec2::new(439.0, 80.0));
        assert_eq!(w.speed.y, 0.0);
    }

    #[test]
    fn test_left_wall_bounce() {
        let mut fx = Fixture::new();
        let mut w = wave(2, 2);
        w.pos = Vec2::new(-1.0, 10.0);
        w.speed = Vec2::new(-1.0, 0.0);

        fx.update(&mut w);
        assert_eq!(w.speed.x, 1.0);
        assert_eq!(w.pos, Vec2::new(0.0, 90.0));
    }

    #[test]
    fn test_enemies_follow_origin() {
        let mut fx = Fixture::new();
        let mut w = wave(2, 2);
        fx.update(&mut w);
        for enemy in &w.enemies {
            assert_eq!(enemy.pos, w.pos + enemy.offset);
        }
    }

    #[test]
    fn test_stable_removal() {
        let mut fx = Fixture::new();
        let mut w = wave(3, 1);
        w.pos = Vec2::new(100.0, 0.0);
        w.enemies[1].marked_for_deletion = true;
        let survivors: Vec<Vec2> = [0, 2].iter().map(|&i| w.enemies[i].offset).collect();

        fx.update(&mut w);
        let offsets: Vec<Vec2> = w.enemies.iter().map(|e| e.offset).collect();
        assert_eq!(offsets, survivors);
    }

    #[test]
    fn test_cleared() {
        let mut fx = Fixture::new();
        let mut w = wave(1, 1);
        w.pos = Vec2::new(100.0, 0.0);
        w.enemies[0].marked_for_deletion = true;
        fx.update(&mut w);
        assert!(w.is_cleared());
    }

    #[test]
    fn test_rhinomorph_chance() {
        let tuning = Tuning {
            rhinomorph_chance: 1.0,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(1);
        let w = Wave::new(&tuning, 2, 2, 80.0, &mut rng);
        assert!(w.enemies.iter().all(|e| e.kind == EnemyKind::Rhinomorph));
        assert!(w.enemies.iter().all(|e| e.lives == 4));
    }

    #[test]
    #[should_panic]
    fn test_empty_grid_panics() {
        wave(0, 2);
    }
}
