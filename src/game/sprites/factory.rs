// Sprite creation and bookkeeping

use super::sprite::{AnimatedSprite, SpriteConfig};
use log::info;

/// Creates sprites from a shared config and counts how many it has made
#[derive(Debug, Default)]
pub struct SpriteFactory {
    config: SpriteConfig,
    created: usize,
}

impl SpriteFactory {
    pub fn new(config: SpriteConfig) -> Self {
        Self { config, created: 0 }
    }

    /// Create an empty sprite
    pub fn create<I>(&mut self) -> AnimatedSprite<I> {
        self.created += 1;
        info!("Sprite number {} created", self.created);
        AnimatedSprite::with_config(self.config)
    }

    /// Number of sprites created by this factory
    pub fn count(&self) -> usize {
        self.created
    }

    pub fn config(&self) -> &SpriteConfig {
        &self.config
    }

    /// Change the config used for sprites created from now on
    pub fn set_config(&mut self, config: SpriteConfig) {
        self.config = config;
    }
}
