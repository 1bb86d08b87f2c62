//! Events emitted by the simulation for external audio/UI feedback.
//!
//! Each frame's events ride out on that frame's snapshot and are not
//! retained afterward.

use serde::{Deserialize, Serialize};

use crate::types::Vec3;

/// Per-frame scene events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneEvent {
    /// A projectile was created and is now homing.
    ProjectileLaunched { projectile_id: u64, target: usize },
    /// A projectile closed within the impact radius of its live target.
    Impact { target: usize, position: Vec3 },
    /// The struck body's slot became a tombstone.
    BodyDestroyed { target: usize, name: String },
    /// A projectile self-removed because its target was destroyed by
    /// another projectile after launch. Informational only: no impact,
    /// no effects.
    TargetLost { projectile_id: u64, target: usize },
    /// The scene was rebuilt by a reset command.
    SceneReset,
}
