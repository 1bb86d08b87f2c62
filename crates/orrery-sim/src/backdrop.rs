//! Static backdrop generation: star field and asteroid belt.
//!
//! Generated once from the seeded RNG at scene setup (and again on
//! reset); the renderer uploads it once rather than reading it from
//! every frame snapshot.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use orrery_core::constants::*;
use orrery_core::types::Vec3;

/// One asteroid-belt instance transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsteroidInstance {
    pub position: Vec3,
    /// Euler rotation (radians) for visual variety.
    pub rotation: Vec3,
    pub scale: f32,
}

/// The static scenery surrounding the solar system.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Backdrop {
    /// Points on a thick shell far outside the orbits.
    pub stars: Vec<Vec3>,
    /// Ring of instances between the outer planets.
    pub asteroids: Vec<AsteroidInstance>,
}

/// Generate the full backdrop from the scene RNG.
pub fn generate(rng: &mut ChaCha8Rng) -> Backdrop {
    Backdrop {
        stars: generate_star_field(rng),
        asteroids: generate_asteroid_belt(rng),
    }
}

/// Uniformly distributed points on a shell between the field radii.
fn generate_star_field(rng: &mut ChaCha8Rng) -> Vec<Vec3> {
    (0..STAR_FIELD_COUNT)
        .map(|_| {
            let radius = rng.gen_range(STAR_FIELD_MIN_RADIUS..STAR_FIELD_MAX_RADIUS);
            let theta = rng.gen_range(-1.0f32..1.0).acos();
            let phi = rng.gen_range(0.0..std::f32::consts::TAU);
            Vec3::new(
                radius * theta.sin() * phi.cos(),
                radius * theta.sin() * phi.sin(),
                radius * theta.cos(),
            )
        })
        .collect()
}

/// Random ring of instances with a small vertical spread.
fn generate_asteroid_belt(rng: &mut ChaCha8Rng) -> Vec<AsteroidInstance> {
    use std::f32::consts::PI;

    (0..ASTEROID_COUNT)
        .map(|_| {
            let radius = rng.gen_range(ASTEROID_BELT_INNER_RADIUS..ASTEROID_BELT_OUTER_RADIUS);
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            let y = rng.gen_range(-ASTEROID_VERTICAL_SPREAD * 0.5..ASTEROID_VERTICAL_SPREAD * 0.5);
            AsteroidInstance {
                position: Vec3::new(radius * angle.cos(), y, radius * angle.sin()),
                rotation: Vec3::new(
                    rng.gen_range(0.0..PI),
                    rng.gen_range(0.0..PI),
                    rng.gen_range(0.0..PI),
                ),
                scale: rng.gen_range(ASTEROID_MIN_SCALE..ASTEROID_MAX_SCALE),
            }
        })
        .collect()
}
