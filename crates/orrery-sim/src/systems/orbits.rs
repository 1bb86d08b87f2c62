//! Orbital kinematics system.
//!
//! Advances each live body's orbital angle and derives its world
//! position on the fixed orbit plane. Moons need no integration of their
//! own; they ride the parent transform and are resolved at snapshot time.

use orrery_core::bodies::BodySlot;
use orrery_core::constants::ORBIT_PLANE_Y;
use orrery_core::types::Vec3;

/// Advance every live body by `dt` seconds at the given speed multiplier.
/// Tombstoned slots are skipped.
pub fn run(bodies: &mut [BodySlot], dt: f32, speed_multiplier: f32) {
    for slot in bodies.iter_mut() {
        let Some(body) = slot.as_live_mut() else {
            continue;
        };
        body.angle += body.angular_speed * speed_multiplier * dt;
        body.position = Vec3::new(
            body.angle.cos() * body.distance,
            ORBIT_PLANE_Y,
            body.angle.sin() * body.distance,
        );
    }
}
