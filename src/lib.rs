//! Sprite-sheet slicing and frame selection for 2D games.
//!
//! A sheet image is cut into a grid of frames per [`AnimationKind`], each
//! frame gets a hold time, and [`AnimatedSprite::get_frame`] hands the render
//! loop the frame to draw this tick.
//!
//! ```ignore
//! use sprite_reel::{placeholder_sheet, AnimatedSprite, AnimationKind};
//!
//! let sheet = placeholder_sheet(2, 3, 30, 30);
//! let mut sprite = AnimatedSprite::new();
//! sprite.set_animation_from_sheet(AnimationKind::Move, &sheet, 2, 3, 5);
//!
//! let frame = sprite.get_frame(AnimationKind::Move, sprite.frame_pointer());
//! ```

pub mod core;
pub mod engine;
pub mod game;

pub use engine::assets::{placeholder_sheet, AssetError, AssetLoader, SheetGrid, SheetImage};
pub use game::sprites::{
    AnimatedSprite, AnimationKind, SpriteConfig, SpriteError, SpriteFactory, FR_100FPS, FR_12FPS,
};
