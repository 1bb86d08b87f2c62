//! Projectile state.

use serde::{Deserialize, Serialize};

use crate::types::Vec3;

/// A homing projectile in flight toward a target body slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    /// Stable id, unique for the lifetime of the engine.
    pub id: u64,
    /// Launch origin.
    pub origin: Vec3,
    /// Current world position.
    pub position: Vec3,
    /// Unit heading toward the target as of the last update.
    pub heading: Vec3,
    /// Index of the target slot in the body registry. Always in bounds;
    /// liveness is re-checked every update.
    pub target: usize,
    /// Travel speed (units per second).
    pub speed: f32,
    /// Accumulated flight time since the last exhaust burst.
    pub exhaust_timer: f32,
}
