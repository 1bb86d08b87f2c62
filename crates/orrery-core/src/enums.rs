//! Shared enumerations.

use serde::{Deserialize, Serialize};

/// Camera behavior mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    /// Trail the first active projectile; external orbit input disabled.
    FollowProjectile,
    /// External orbit-input driver owns the camera.
    #[default]
    FreeOrbit,
}

/// Kind of transient point-cloud effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Impact flash: particles flung from a single point.
    Explosion,
    /// Slow radial expansion of a filled sphere of fragments.
    Debris,
    /// Short-lived burst trailing a projectile.
    Exhaust,
}
