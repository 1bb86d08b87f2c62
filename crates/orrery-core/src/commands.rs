//! Scene commands sent from the outside (control panel, pointer
//! selection) to the simulation.
//!
//! Commands are edge-triggered and queued for processing at the next
//! frame boundary; continuous parameters travel in `FrameInput` instead.

use serde::{Deserialize, Serialize};

use crate::types::Vec3;

/// All external scene commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneCommand {
    /// Launch a homing projectile at the body in slot `target`.
    /// Ignored if the slot is already a tombstone.
    LaunchProjectile { target: usize },
    /// Aim the free-orbit camera at a world position resolved by
    /// external picking.
    FocusOn { position: Vec3 },
    /// Park the decorative ship at its home body and focus on it.
    /// Ignored with a warning if the ship model is unavailable.
    ShowShip,
    /// Tear down all projectiles and effects and rebuild the scene.
    Reset,
}
