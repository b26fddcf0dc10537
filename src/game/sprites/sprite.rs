// Animated sprite: per-kind frame storage and frame selection

use super::kind::AnimationKind;
use super::SpriteError;
use crate::engine::assets::{SheetGrid, SheetImage};
use log::{debug, warn};

/// Frame hold for 12 frames per second (milliseconds)
pub const FR_12FPS: u32 = 83;

/// Frame hold for 100 frames per second (milliseconds)
pub const FR_100FPS: u32 = 10;

/// Settings applied to newly created sprites
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteConfig {
    /// Default hold given to each frame sliced from a sheet (milliseconds)
    pub framerate: u32,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            framerate: FR_12FPS,
        }
    }
}

impl SpriteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default frame hold
    pub fn with_framerate(mut self, framerate: u32) -> Self {
        self.framerate = framerate;
        self
    }
}

/// A sprite holding one frame sequence per [`AnimationKind`]
///
/// Each kind's frames come either from a grid sheet
/// ([`set_animation_from_sheet`](Self::set_animation_from_sheet)) or from a
/// prepared sequence ([`set_frames`](Self::set_frames)). Every kind has a
/// parallel list of per-frame holds. The sprite stores holds but never waits
/// on them; the render loop decides when to ask for the next frame.
///
/// Playback is driven by [`get_frame`](Self::get_frame), normally called once
/// per tick with the sprite's own [`frame_pointer`](Self::frame_pointer):
///
/// ```ignore
/// let frame = sprite.get_frame(AnimationKind::Move, sprite.frame_pointer());
/// ```
#[derive(Debug, Clone)]
pub struct AnimatedSprite<I> {
    frames: [Vec<I>; AnimationKind::COUNT],
    delays: [Vec<u32>; AnimationKind::COUNT],
    framerate: u32,
    frame_pointer: usize,
    last_kind: Option<AnimationKind>,
}

impl<I> Default for AnimatedSprite<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> AnimatedSprite<I> {
    /// Create an empty sprite with the default framerate
    pub fn new() -> Self {
        Self::with_config(SpriteConfig::default())
    }

    /// Create an empty sprite from a config
    pub fn with_config(config: SpriteConfig) -> Self {
        Self {
            frames: std::array::from_fn(|_| Vec::new()),
            delays: std::array::from_fn(|_| Vec::new()),
            framerate: config.framerate,
            frame_pointer: 0,
            last_kind: None,
        }
    }

    /// Replace a kind's frames with a prepared sequence
    ///
    /// The delays for `kind` are left alone; keep them in step with
    /// [`set_delays`](Self::set_delays).
    pub fn set_frames(&mut self, kind: AnimationKind, frames: Vec<I>) {
        if frames.len() != self.delays[kind.ordinal()].len() {
            debug!(
                "{} now has {} frames but {} delays",
                kind,
                frames.len(),
                self.delays[kind.ordinal()].len()
            );
        }
        self.frames[kind.ordinal()] = frames;
    }

    /// Replace every delay of a kind
    ///
    /// Fails without touching the existing delays if `delays` is not exactly
    /// as long as the kind's frame sequence.
    pub fn set_delays(
        &mut self,
        kind: AnimationKind,
        delays: Vec<u32>,
    ) -> Result<(), SpriteError> {
        let expected = self.frames[kind.ordinal()].len();
        if delays.len() != expected {
            return Err(SpriteError::LengthMismatch {
                kind,
                expected,
                actual: delays.len(),
            });
        }

        self.delays[kind.ordinal()] = delays;
        Ok(())
    }

    /// Change the delay of a single frame
    pub fn set_frame_delay(
        &mut self,
        kind: AnimationKind,
        index: usize,
        delay: u32,
    ) -> Result<(), SpriteError> {
        let delays = &mut self.delays[kind.ordinal()];
        let len = delays.len();
        let slot = delays
            .get_mut(index)
            .ok_or(SpriteError::IndexOutOfRange { kind, index, len })?;

        *slot = delay;
        Ok(())
    }

    /// Select the frame to show for this tick
    ///
    /// `requested` is normally the value of [`frame_pointer`](Self::frame_pointer).
    ///
    /// - A kind different from the previous call restarts at frame 0.
    /// - A `requested` index past the kind's frame count (including any index
    ///   for a kind with no frames) resets the cursor and yields the first
    ///   [`AnimationKind::Idle1`] frame.
    /// - Otherwise the frame under the cursor is returned. If `requested`
    ///   differs from the cursor, the cursor jumps to it for the next call;
    ///   if not, the cursor advances and wraps at the end of the sequence.
    ///
    /// Only returns `None` when the idle fallback is needed and `Idle1` has no
    /// frames.
    pub fn get_frame(&mut self, kind: AnimationKind, requested: usize) -> Option<&I> {
        if self.last_kind != Some(kind) {
            self.frame_pointer = 0;
            self.last_kind = Some(kind);
        }

        let len = self.frames[kind.ordinal()].len();
        if requested >= len {
            debug!(
                "Frame {} out of range for {} ({} frames), falling back to {}",
                requested,
                kind,
                len,
                AnimationKind::Idle1
            );
            self.frame_pointer = 0;
            return self.frames[AnimationKind::Idle1.ordinal()].first();
        }

        let target = self.frame_pointer;

        if requested != self.frame_pointer {
            self.frame_pointer = requested;
        } else {
            self.frame_pointer += 1;
        }

        // Natural wrap; last_kind stays so the next call keeps playing
        if self.frame_pointer >= len {
            self.frame_pointer = 0;
        }

        self.frames[kind.ordinal()].get(target)
    }

    /// Return the cursor to its freshly created state
    pub fn reset(&mut self) {
        self.frame_pointer = 0;
        self.last_kind = None;
    }

    /// Index of the frame the next steady-state call will return
    pub fn frame_pointer(&self) -> usize {
        self.frame_pointer
    }

    /// Kind passed to the most recent [`get_frame`](Self::get_frame) call
    pub fn last_kind(&self) -> Option<AnimationKind> {
        self.last_kind
    }

    /// Default hold for newly sliced frames
    pub fn framerate(&self) -> u32 {
        self.framerate
    }

    /// Change the default hold; only affects sheets loaded afterwards
    pub fn set_framerate(&mut self, framerate: u32) {
        self.framerate = framerate;
    }

    pub fn frames(&self, kind: AnimationKind) -> &[I] {
        &self.frames[kind.ordinal()]
    }

    pub fn delays(&self, kind: AnimationKind) -> &[u32] {
        &self.delays[kind.ordinal()]
    }

    /// Number of frames stored for a kind
    pub fn frame_count(&self, kind: AnimationKind) -> usize {
        self.frames[kind.ordinal()].len()
    }

    /// Hold of a single frame, if it exists
    pub fn delay(&self, kind: AnimationKind, index: usize) -> Option<u32> {
        self.delays[kind.ordinal()].get(index).copied()
    }

    /// Check if a kind has any frames
    pub fn is_loaded(&self, kind: AnimationKind) -> bool {
        !self.frames[kind.ordinal()].is_empty()
    }
}

impl<I: SheetImage> AnimatedSprite<I> {
    /// Slice a grid sheet into the frames of `kind`
    ///
    /// The sheet is split into `rows x cols` cells and the first
    /// `frame_count` cells, read left to right then top to bottom, become the
    /// kind's frames. Trailing cells are ignored. Cell sizes are truncated to
    /// whole pixels, so a sheet that does not divide evenly loses its last
    /// partial row/column of pixels. Every new frame gets the current
    /// [`framerate`](Self::framerate) as its delay. Previous frames and delays
    /// of `kind` are discarded.
    pub fn set_animation_from_sheet(
        &mut self,
        kind: AnimationKind,
        sheet: &I,
        rows: u32,
        cols: u32,
        frame_count: usize,
    ) {
        let grid = SheetGrid::new(sheet.width(), sheet.height(), rows, cols);
        if frame_count > grid.cell_count() {
            warn!(
                "{} asks for {} frames but a {}x{} grid only has {}",
                kind,
                frame_count,
                rows,
                cols,
                grid.cell_count()
            );
        }

        let frames: Vec<I> = grid
            .regions(frame_count)
            .iter()
            .map(|region| sheet.crop_region(region))
            .collect();

        debug!(
            "Sliced {} frames for {} from {}x{} sheet",
            frames.len(),
            kind,
            grid.width,
            grid.height
        );

        self.delays[kind.ordinal()] = vec![self.framerate; frames.len()];
        self.frames[kind.ordinal()] = frames;
    }
}
