//! Frame snapshot — the complete renderable state produced each frame.
//!
//! The external renderer consumes these views verbatim: anything absent
//! from the snapshot is no longer visible and its GPU resources can be
//! released.

use serde::{Deserialize, Serialize};

use crate::enums::{EffectKind, ViewMode};
use crate::events::SceneEvent;
use crate::types::{FrameClock, Vec3};

/// Complete per-frame output handed to the renderer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub clock: FrameClock,
    /// Live bodies only; tombstoned slots are omitted.
    pub bodies: Vec<BodyView>,
    pub projectiles: Vec<ProjectileView>,
    pub effects: Vec<EffectView>,
    pub camera: CameraView,
    /// The decorative ship, once shown.
    pub ship: Option<ShipView>,
    /// Events raised during this frame.
    pub events: Vec<SceneEvent>,
}

/// A visible celestial body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyView {
    /// Stable registry index.
    pub index: usize,
    pub name: String,
    pub radius: f32,
    pub position: Vec3,
    pub moons: Vec<MoonView>,
}

/// A visible moon, already resolved to world coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoonView {
    pub name: String,
    pub radius: f32,
    pub position: Vec3,
}

/// A projectile in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u64,
    pub position: Vec3,
    /// Unit heading for orienting the projectile model.
    pub heading: Vec3,
    pub target: usize,
}

/// A transient point-cloud effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectView {
    /// Stable effect handle value; never reused.
    pub handle: u64,
    pub kind: EffectKind,
    /// Current fade opacity in `[0, 1]` (scaled by the kind's base).
    pub opacity: f32,
    pub positions: Vec<Vec3>,
}

/// Camera pose and mode for this frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraView {
    pub mode: ViewMode,
    pub position: Vec3,
    pub look_at: Vec3,
    pub fov_degrees: f32,
    /// Whether the external orbit-input driver may move the camera.
    pub orbit_input_enabled: bool,
}

impl Default for CameraView {
    fn default() -> Self {
        Self {
            mode: ViewMode::FreeOrbit,
            position: crate::constants::CAMERA_DEFAULT_POSITION,
            look_at: crate::constants::STAR_POSITION,
            fov_degrees: crate::constants::CAMERA_DEFAULT_FOV_DEGREES,
            orbit_input_enabled: true,
        }
    }
}

/// The decorative ship marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    pub position: Vec3,
}
