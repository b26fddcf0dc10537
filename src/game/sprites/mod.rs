// Sprite system
//
// - Animation kinds and their dense table indices
// - Animated sprites: sheet slicing, delays, frame selection
// - Factory that creates sprites and counts them

pub mod factory;
pub mod kind;
pub mod sprite;

pub use factory::SpriteFactory;
pub use kind::AnimationKind;
pub use sprite::{AnimatedSprite, SpriteConfig, FR_100FPS, FR_12FPS};

/// Sprite configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpriteError {
    #[error("{kind} has {expected} frames but {actual} delays were given")]
    LengthMismatch {
        kind: AnimationKind,
        expected: usize,
        actual: usize,
    },

    #[error("Frame {index} is out of range for {kind} ({len} delays)")]
    IndexOutOfRange {
        kind: AnimationKind,
        index: usize,
        len: usize,
    },

    #[error("Unknown animation kind: {0}")]
    UnknownKind(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_error_display() {
        let err = SpriteError::LengthMismatch {
            kind: AnimationKind::Attack1,
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "ATTACK1 has 4 frames but 3 delays were given");

        let err = SpriteError::IndexOutOfRange {
            kind: AnimationKind::Move,
            index: 9,
            len: 5,
        };
        assert_eq!(err.to_string(), "Frame 9 is out of range for MOVE (5 delays)");
    }
}
