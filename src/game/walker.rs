// Demo entity: a sprite that walks around under keyboard control

use super::sprites::{AnimatedSprite, AnimationKind};
use crate::engine::game_loop::FrameTicker;
use crate::engine::input::MovementInput;
use glam::Vec2;
use log::debug;
use std::time::Duration;

/// Plays a sprite at the pace of its per-frame delays
#[derive(Debug)]
pub struct SpritePlayer<I> {
    sprite: AnimatedSprite<I>,
    ticker: FrameTicker,
    /// Hold of the frame currently on screen (milliseconds)
    hold: u32,
}

impl<I> SpritePlayer<I> {
    pub fn new(sprite: AnimatedSprite<I>) -> Self {
        let hold = sprite.framerate();
        Self {
            sprite,
            ticker: FrameTicker::new(),
            hold,
        }
    }

    /// Feed `elapsed` time and get the next frame of `kind` if it is due
    ///
    /// A kind change shows the new animation's first frame immediately.
    /// Otherwise the sprite is only asked for a frame once the hold of the
    /// frame on screen has elapsed. Returns `None` while the current frame
    /// should stay up.
    pub fn play(&mut self, kind: AnimationKind, elapsed: Duration) -> Option<&I> {
        let switching = self.sprite.last_kind() != Some(kind);
        if switching {
            self.ticker.restart_hold();
        } else if !self.ticker.advance(elapsed, self.hold) {
            return None;
        }

        // Hold whichever frame get_frame is about to hand back
        let requested = self.sprite.frame_pointer();
        let shown = if requested >= self.sprite.frame_count(kind) {
            self.sprite.delay(AnimationKind::Idle1, 0)
        } else if switching {
            self.sprite.delay(kind, 0)
        } else {
            self.sprite.delay(kind, requested)
        };
        self.hold = shown.unwrap_or(self.sprite.framerate());

        self.sprite.get_frame(kind, requested)
    }

    /// Hold of the frame on screen (milliseconds)
    pub fn hold(&self) -> u32 {
        self.hold
    }

    pub fn sprite(&self) -> &AnimatedSprite<I> {
        &self.sprite
    }

    pub fn sprite_mut(&mut self) -> &mut AnimatedSprite<I> {
        &mut self.sprite
    }

    pub fn ticker_mut(&mut self) -> &mut FrameTicker {
        &mut self.ticker
    }
}

/// Walker tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkerConfig {
    /// Distance moved per tick while a direction is held (pixels)
    pub step: f32,
    /// Spawn position (pixels)
    pub start: Vec2,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            step: 10.0,
            start: Vec2::new(20.0, 20.0),
        }
    }
}

/// A sprite that moves with the held directions and picks its animation
#[derive(Debug)]
pub struct Walker<I> {
    position: Vec2,
    kind: AnimationKind,
    player: SpritePlayer<I>,
    config: WalkerConfig,
}

impl<I> Walker<I> {
    pub fn new(sprite: AnimatedSprite<I>, config: WalkerConfig) -> Self {
        Self {
            position: config.start,
            kind: AnimationKind::Idle1,
            player: SpritePlayer::new(sprite),
            config,
        }
    }

    /// Move one step for each held direction and choose the animation
    ///
    /// Left and down walk left, right and up walk right; directions checked
    /// later win when several are held. Nothing held means idle.
    pub fn steer(&mut self, input: MovementInput) -> AnimationKind {
        let step = self.config.step;

        if input.left {
            self.position.x -= step;
            self.kind = AnimationKind::MoveLeft;
        }
        if input.right {
            self.position.x += step;
            self.kind = AnimationKind::MoveRight;
        }
        if input.up {
            self.position.y -= step;
            self.kind = AnimationKind::MoveRight;
        }
        if input.down {
            self.position.y += step;
            self.kind = AnimationKind::MoveLeft;
        }
        if input.is_idle() {
            self.kind = AnimationKind::Idle1;
        }

        self.kind
    }

    /// Steer, then fetch the next frame if one is due
    pub fn update(&mut self, input: MovementInput, elapsed: Duration) -> Option<&I> {
        let kind = self.steer(input);
        debug!("Walker at {:?} playing {}", self.position, kind);
        self.player.play(kind, elapsed)
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn kind(&self) -> AnimationKind {
        self.kind
    }

    pub fn player(&self) -> &SpritePlayer<I> {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut SpritePlayer<I> {
        &mut self.player
    }
}
