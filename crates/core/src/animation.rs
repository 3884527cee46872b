//! Millisecond-driven frame counters for sprite animation.

use thiserror::Error;

use crate::player::{AnimationKey, MotionStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnimationError {
    #[error("an animation needs at least one frame")]
    NoFrames,
    #[error("frame duration must be greater than zero milliseconds")]
    ZeroFrameDuration,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationTicker {
    frame_count: usize,
    frame_ms: u32,
    elapsed_ms: u32,
    frame: usize,
}

impl AnimationTicker {
    pub fn new(frame_count: usize, frame_ms: u32) -> Result<Self, AnimationError> {
        if frame_count == 0 {
            return Err(AnimationError::NoFrames);
        }
        if frame_ms == 0 {
            return Err(AnimationError::ZeroFrameDuration);
        }
        Ok(Self { frame_count, frame_ms, elapsed_ms: 0, frame: 0 })
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Add `delta_ms` to the timer and advance one frame per full `frame_ms`.
    pub fn advance(&mut self, delta_ms: u32) {
        let total = self.elapsed_ms.saturating_add(delta_ms);
        let steps = (total / self.frame_ms) as usize;
        self.elapsed_ms = total % self.frame_ms;
        self.frame = (self.frame + steps) % self.frame_count;
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
        self.frame = 0;
    }
}

/// Drives a walk cycle for a directional sprite, restarting it whenever the
/// facing or motion status changes. Idle always shows the first frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectionalAnimator {
    ticker: AnimationTicker,
    key: Option<AnimationKey>,
}

impl DirectionalAnimator {
    pub fn new(walk_frames: usize, frame_ms: u32) -> Result<Self, AnimationError> {
        Ok(Self { ticker: AnimationTicker::new(walk_frames, frame_ms)?, key: None })
    }

    pub fn update(&mut self, key: AnimationKey, delta_ms: u32) {
        if self.key != Some(key) {
            self.key = Some(key);
            self.ticker.reset();
        }
        if key.status == MotionStatus::Walking {
            self.ticker.advance(delta_ms);
        }
    }

    pub fn frame(&self) -> usize {
        match self.key {
            Some(AnimationKey { status: MotionStatus::Walking, .. }) => self.ticker.frame(),
            _ => 0,
        }
    }
}
