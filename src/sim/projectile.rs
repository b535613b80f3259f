//! Projectile object pool
//!
//! A fixed set of slots toggled active/inactive instead of being allocated
//! and freed. Acquisition scans in pool order so the lowest free index always
//! wins, which keeps replays deterministic.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;

/// A player shot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Upward travel per tick
    pub speed: f32,
    pub active: bool,
}

impl Projectile {
    pub fn new(width: f32, height: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            width,
            height,
            speed,
            active: false,
        }
    }

    /// Activate at a horizontal center and top edge
    pub fn start(&mut self, origin_x: f32, origin_y: f32) {
        self.pos = Vec2::new(origin_x - self.width / 2.0, origin_y);
        self.active = true;
    }

    /// Return the slot to the pool
    pub fn reset(&mut self) {
        self.active = false;
    }

    pub fn update(&mut self) {
        if !self.active {
            return;
        }
        self.pos.y -= self.speed;
        if self.pos.y + self.height < 0.0 {
            self.reset();
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos(self.pos, self.width, self.height)
    }
}

/// Fixed-capacity pool of projectiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectilePool {
    slots: Vec<Projectile>,
}

impl ProjectilePool {
    /// Create a pool with `capacity` inactive slots
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize, width: f32, height: f32, speed: f32) -> Self {
        assert!(capacity > 0, "projectile pool needs at least one slot");
        assert!(
            width > 0.0 && height > 0.0,
            "projectile size must be positive ({width}x{height})"
        );
        Self {
            slots: (0..capacity)
                .map(|_| Projectile::new(width, height, speed))
                .collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|p| p.active).count()
    }

    /// Claim the first free slot, positioned at `(origin_x - width/2, origin_y)`
    ///
    /// Returns `None` without touching the pool when every slot is active.
    pub fn acquire(&mut self, origin_x: f32, origin_y: f32) -> Option<&mut Projectile> {
        let projectile = self.slots.iter_mut().find(|p| !p.active)?;
        projectile.start(origin_x, origin_y);
        Some(projectile)
    }

    /// Advance every active projectile; off-screen shots return to the pool
    pub fn update(&mut self) {
        for projectile in &mut self.slots {
            projectile.update();
        }
    }

    /// First active projectile (pool order) overlapping `rect`
    pub fn first_hit(&mut self, rect: &Rect) -> Option<&mut Projectile> {
        self.slots
            .iter_mut()
            .find(|p| p.active && p.rect().overlaps(rect))
    }

    /// All slots in pool order, active or not
    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.slots.iter()
    }

    /// Active projectiles in pool order
    pub fn active(&self) -> impl Iterator<Item = &Projectile> {
        self.slots.iter().filter(|p| p.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> ProjectilePool {
        ProjectilePool::new(10, 4.0, 20.0, 20.0)
    }

    #[test]
    fn test_acquire_positions_and_activates() {
        let mut pool = pool();
        let p = pool.acquire(300.0, 600.0).unwrap();
        assert!(p.active);
        assert_eq!(p.pos, Vec2::new(298.0, 600.0));
        assert_eq!(pool.active_count(), 1);
    }

    #[test]
    fn test_acquire_lowest_free_index() {
        let mut pool = pool();
        for _ in 0..3 {
            pool.acquire(0.0, 100.0);
        }
        pool.slots[1].reset();

        pool.acquire(50.0, 100.0);
        assert_eq!(pool.slots[1].pos.x, 48.0);
        assert_eq!(pool.active_count(), 3);
    }

    #[test]
    fn test_exhausted_pool_returns_none() {
        let mut pool = pool();
        for i in 0..10 {
            assert!(pool.acquire(i as f32, 500.0).is_some());
        }
        let before: Vec<Vec2> = pool.iter().map(|p| p.pos).collect();

        assert!(pool.acquire(999.0, 999.0).is_none());
        assert_eq!(pool.active_count(), 10);
        let after: Vec<Vec2> = pool.iter().map(|p| p.pos).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_update_moves_up_and_reclaims() {
        let mut pool = pool();
        pool.acquire(100.0, 40.0);

        pool.update();
        assert_eq!(pool.slots[0].pos.y, 20.0);
        pool.update();
        assert_eq!(pool.slots[0].pos.y, 0.0);
        pool.update();
        // Bottom edge exactly at 0 is still on screen
        assert!(pool.slots[0].active);
        pool.update();
        assert!(!pool.slots[0].active);
        assert_eq!(pool.active_count(), 0);
    }

    #[test]
    fn test_inactive_projectiles_do_not_move() {
        let mut pool = pool();
        pool.update();
        assert!(pool.iter().all(|p| p.pos == Vec2::ZERO));
    }

    #[test]
    fn test_first_hit_scan_order() {
        let mut pool = pool();
        pool.acquire(10.0, 10.0);
        pool.acquire(12.0, 10.0);

        let target = Rect::new(0.0, 0.0, 50.0, 50.0);
        let hit = pool.first_hit(&target).unwrap();
        assert_eq!(hit.pos.x, 8.0);
        hit.reset();

        let hit = pool.first_hit(&target).unwrap();
        assert_eq!(hit.pos.x, 10.0);
    }

    #[test]
    fn test_reset_projectile_cannot_hit() {
        let mut pool = pool();
        pool.acquire(10.0, 10.0).unwrap().reset();
        let target = Rect::new(0.0, 0.0, 50.0, 50.0);
        assert!(pool.first_hit(&target).is_none());
        assert_eq!(pool.active().count(), 0);
    }

    #[test]
    #[should_panic]
    fn test_zero_capacity_panics() {
        ProjectilePool::new(0, 4.0, 20.0, 20.0);
    }
}
