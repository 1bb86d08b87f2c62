//! Celestial body data types.
//!
//! Bodies are plain data structs with no update logic; per-frame motion
//! lives in the simulation systems.

use serde::{Deserialize, Serialize};

use crate::types::Vec3;

/// A satellite riding its parent body's transform at a fixed local offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Moon {
    pub name: String,
    /// Visual radius.
    pub radius: f32,
    /// Local orbital distance from the parent's center.
    pub distance: f32,
}

/// An orbiting celestial body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub name: String,
    /// Visual radius.
    pub radius: f32,
    /// Orbital distance from the primary star.
    pub distance: f32,
    /// Orbital angular speed (radians per second at multiplier 1.0).
    pub angular_speed: f32,
    /// Current orbital angle (radians).
    pub angle: f32,
    /// Derived world position for the current angle.
    pub position: Vec3,
    /// Child moons, offset from this body's transform.
    pub moons: Vec<Moon>,
}

impl Body {
    /// World position of one of this body's moons.
    ///
    /// The moon's local offset `(distance, 0, 0)` is rotated about the
    /// vertical axis by the parent's orbital angle, matching a child node
    /// under a y-rotated parent transform.
    pub fn moon_world_position(&self, moon: &Moon) -> Vec3 {
        let offset = Vec3::new(
            moon.distance * self.angle.cos(),
            0.0,
            -moon.distance * self.angle.sin(),
        );
        self.position + offset
    }
}

/// One slot of the body registry.
///
/// A struck body becomes a tombstone rather than being removed, so
/// projectile target indices and camera references stay stable for the
/// lifetime of the scene. Only a full reset rebuilds the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state")]
pub enum BodySlot {
    Live(Body),
    Destroyed,
}

impl BodySlot {
    /// Whether the slot still holds a live body.
    pub fn is_live(&self) -> bool {
        matches!(self, BodySlot::Live(_))
    }

    /// The live body, if any.
    pub fn as_live(&self) -> Option<&Body> {
        match self {
            BodySlot::Live(body) => Some(body),
            BodySlot::Destroyed => None,
        }
    }

    /// Mutable access to the live body, if any.
    pub fn as_live_mut(&mut self) -> Option<&mut Body> {
        match self {
            BodySlot::Live(body) => Some(body),
            BodySlot::Destroyed => None,
        }
    }
}
