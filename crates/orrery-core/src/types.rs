//! Fundamental simulation types: world vectors, the frame clock, and the
//! per-frame input snapshot.

use serde::{Deserialize, Serialize};

use crate::enums::ViewMode;

/// World-space vector type (y-up scene coordinates).
pub use glam::Vec3;

/// Frame clock tracking elapsed wall-clock simulation time.
///
/// `dt` is whatever the driver measured since the previous frame; the
/// simulation is frame-rate-sensitive by design and tests inject fixed
/// `dt` values for determinism.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameClock {
    /// Number of frames ticked so far.
    pub frame: u64,
    /// Accumulated elapsed time in seconds.
    pub elapsed_secs: f32,
}

impl FrameClock {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.frame += 1;
        self.elapsed_secs += dt;
    }
}

/// Read-only input parameter snapshot consumed once per frame.
///
/// Replaces ambient GUI state: every value the frame depends on is
/// visible in the `tick` signature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Orbit speed multiplier in `[0, 1]`.
    pub orbit_speed: f32,
    /// Desired camera mode for this frame.
    pub view_mode: ViewMode,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            orbit_speed: 0.2,
            view_mode: ViewMode::FreeOrbit,
        }
    }
}
