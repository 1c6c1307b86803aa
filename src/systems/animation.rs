//! Animation clock
//!
//! Owns the wall-clock origin of the animation and feeds elapsed time into
//! [`SceneState::tick`] once per redraw.

use std::time::{Duration, Instant};
use cmy4d_core::{FrameReport, FrameTime, SceneState, WStep};

/// Drives the per-frame animation step
pub struct AnimationSystem {
    start: Instant,
    frames: u64,
    w_resets: u64,
}

impl Default for AnimationSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationSystem {
    /// Start the clock now
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            frames: 0,
            w_resets: 0,
        }
    }

    /// Advance the scene to the current wall-clock time
    pub fn update(&mut self, scene: &mut SceneState) -> FrameReport {
        self.update_at(scene, self.start.elapsed())
    }

    /// Advance the scene to a given time since start
    pub fn update_at(&mut self, scene: &mut SceneState, elapsed: Duration) -> FrameReport {
        let report = scene.tick(FrameTime::from_duration(elapsed));
        self.frames += 1;
        if report.w_step == Some(WStep::Reset) {
            self.w_resets += 1;
            log::debug!("W cycle completed ({} so far)", self.w_resets);
        }
        report
    }

    /// Frames ticked since start
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Completed W cycles since start
    pub fn w_cycles(&self) -> u64 {
        self.w_resets
    }
}
