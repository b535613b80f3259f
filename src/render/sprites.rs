//! Sprite identifiers and image handle resolution
//!
//! The core only names sprites. Turning a name into something drawable is
//! the host's job, done through [`ImageProvider`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Sprite sheets the simulation refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    Player,
    Projectile,
    Beetlemorph,
    Rhinomorph,
}

impl SpriteId {
    pub const ALL: [SpriteId; 4] = [
        SpriteId::Player,
        SpriteId::Projectile,
        SpriteId::Beetlemorph,
        SpriteId::Rhinomorph,
    ];

    /// Asset name the host can look up (e.g. an `<img>` id)
    pub fn as_str(&self) -> &'static str {
        match self {
            SpriteId::Player => "player",
            SpriteId::Projectile => "projectile",
            SpriteId::Beetlemorph => "beetlemorph",
            SpriteId::Rhinomorph => "rhinomorph",
        }
    }
}

/// Cell within a sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpriteFrame {
    pub col: u32,
    pub row: u32,
}

impl SpriteFrame {
    pub fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

/// Resolves sprite ids to host-side drawable handles
pub trait ImageProvider {
    type Handle: Clone;

    fn resolve(&mut self, sprite: SpriteId) -> Option<Self::Handle>;
}

/// Caches resolved handles so each sprite is looked up at most once
pub struct SpriteCache<P: ImageProvider> {
    provider: P,
    handles: HashMap<SpriteId, Option<P::Handle>>,
}

impl<P: ImageProvider> SpriteCache<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            handles: HashMap::new(),
        }
    }

    /// Handle for `sprite`, resolving on first use
    pub fn get(&mut self, sprite: SpriteId) -> Option<P::Handle> {
        let provider = &mut self.provider;
        self.handles
            .entry(sprite)
            .or_insert_with(|| {
                let handle = provider.resolve(sprite);
                if handle.is_none() {
                    log::warn!("No image for sprite '{}'", sprite.as_str());
                }
                handle
            })
            .clone()
    }

    /// Resolve every known sprite up front
    pub fn preload(&mut self) -> usize {
        SpriteId::ALL
            .iter()
            .filter(|&&sprite| self.get(sprite).is_some())
            .count()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}
