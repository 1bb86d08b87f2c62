//! Scene roster — the hardcoded miniature solar system.
//!
//! Four planets orbit the primary star; Earth and Mars carry moons.
//! Slot indices are stable: Mercury 0, Venus 1, Earth 2, Mars 3.

use orrery_core::bodies::{Body, BodySlot, Moon};
use orrery_core::constants::ORBIT_PLANE_Y;
use orrery_core::types::Vec3;

/// Registry index of the body the decorative ship parks at (Earth).
pub const SHIP_HOME_INDEX: usize = 2;

/// Build the initial body registry: every slot live, every angle zero.
pub fn solar_system() -> Vec<BodySlot> {
    vec![
        planet("Mercury", 0.5, 10.0, 0.01, vec![]),
        planet("Venus", 0.8, 15.0, 0.007, vec![]),
        planet("Earth", 1.0, 20.0, 0.005, vec![moon("Moon", 0.3, 3.0)]),
        planet(
            "Mars",
            0.7,
            25.0,
            0.003,
            vec![moon("Phobos", 0.1, 2.0), moon("Deimos", 0.2, 3.0)],
        ),
    ]
}

fn planet(
    name: &str,
    radius: f32,
    distance: f32,
    angular_speed: f32,
    moons: Vec<Moon>,
) -> BodySlot {
    BodySlot::Live(Body {
        name: name.to_string(),
        radius,
        distance,
        angular_speed,
        angle: 0.0,
        position: Vec3::new(distance, ORBIT_PLANE_Y, 0.0),
        moons,
    })
}

fn moon(name: &str, radius: f32, distance: f32) -> Moon {
    Moon {
        name: name.to_string(),
        radius,
        distance,
    }
}
