//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` per frame, no blocking
//! - Seeded RNG only
//! - Stable iteration order (pool order, formation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod enemy;
pub mod input;
pub mod player;
pub mod projectile;
pub mod state;
pub mod tick;
pub mod wave;

pub use collision::{Rect, overlaps};
pub use enemy::{Enemy, EnemyContext, EnemyKind, EnemyStats};
pub use input::{InputState, Key};
pub use player::Player;
pub use projectile::{Projectile, ProjectilePool};
pub use state::{GameEvent, GamePhase, GameState, RngState};
pub use tick::tick;
pub use wave::Wave;
