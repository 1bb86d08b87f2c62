//! Projectile guidance, impact resolution, and exhaust emission.
//!
//! Impacts are resolved inline during the update pass: the struck slot
//! becomes a tombstone before the next projectile in the same pass
//! re-checks its own target, so a second projectile aimed at the same
//! body can never produce a second explosion. That makes destruction
//! idempotent by construction rather than by a guard at the call site.

use log::debug;
use rand_chacha::ChaCha8Rng;

use orrery_core::bodies::BodySlot;
use orrery_core::constants::*;
use orrery_core::events::SceneEvent;
use orrery_core::projectile::Projectile;
use orrery_core::types::Vec3;

use crate::systems::camera::CameraRig;
use crate::systems::effects::EffectRegistry;

/// Create a projectile homing on `target`.
///
/// A launch at a tombstoned or out-of-range slot is absorbed as a no-op;
/// invalid target indices therefore never enter the projectile list.
pub fn launch(
    projectiles: &mut Vec<Projectile>,
    bodies: &[BodySlot],
    target: usize,
    next_id: &mut u64,
    events: &mut Vec<SceneEvent>,
) {
    let target_pos = match bodies.get(target) {
        Some(BodySlot::Live(body)) => body.position,
        Some(BodySlot::Destroyed) => {
            debug!("launch ignored: body {target} is already destroyed");
            return;
        }
        None => {
            debug!("launch ignored: body index {target} out of range");
            return;
        }
    };

    let id = *next_id;
    *next_id += 1;

    let origin = PROJECTILE_LAUNCH_ORIGIN;
    projectiles.push(Projectile {
        id,
        origin,
        position: origin,
        heading: (target_pos - origin).normalize_or_zero(),
        target,
        speed: PROJECTILE_SPEED,
        exhaust_timer: 0.0,
    });
    events.push(SceneEvent::ProjectileLaunched {
        projectile_id: id,
        target,
    });
}

/// Advance every projectile by `dt`: steer at the live target, detect
/// impact, cascade destruction, and emit exhaust bursts.
pub fn run(
    projectiles: &mut Vec<Projectile>,
    bodies: &mut [BodySlot],
    effects: &mut EffectRegistry,
    camera: &mut CameraRig,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<SceneEvent>,
    dt: f32,
) {
    projectiles.retain_mut(|projectile| {
        let target_pos = match &bodies[projectile.target] {
            BodySlot::Live(body) => body.position,
            BodySlot::Destroyed => {
                // Target lost to another projectile since launch:
                // remove without effects or an impact event.
                debug!(
                    "projectile {} self-removed: target {} destroyed",
                    projectile.id, projectile.target
                );
                events.push(SceneEvent::TargetLost {
                    projectile_id: projectile.id,
                    target: projectile.target,
                });
                return false;
            }
        };

        projectile.heading = (target_pos - projectile.position).normalize_or_zero();
        projectile.position += projectile.heading * projectile.speed * dt;

        if projectile.position.distance(target_pos) < IMPACT_RADIUS {
            resolve_impact(
                bodies,
                projectile.target,
                target_pos,
                effects,
                camera,
                rng,
                events,
            );
            return false;
        }

        projectile.exhaust_timer += dt;
        if projectile.exhaust_timer > EXHAUST_INTERVAL_SECS {
            effects.spawn_exhaust(projectile.position, projectile.heading, rng);
            projectile.exhaust_timer = 0.0;
        }
        true
    });
}

/// Cascade a confirmed impact: tombstone the body, spawn the explosion
/// and debris field at the impact point, and release the camera.
fn resolve_impact(
    bodies: &mut [BodySlot],
    target: usize,
    position: Vec3,
    effects: &mut EffectRegistry,
    camera: &mut CameraRig,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<SceneEvent>,
) {
    let name = match &bodies[target] {
        BodySlot::Live(body) => body.name.clone(),
        // Liveness was checked this update; unreachable in practice.
        BodySlot::Destroyed => return,
    };
    bodies[target] = BodySlot::Destroyed;

    effects.spawn_explosion(position, rng);
    effects.spawn_debris(position, DEBRIS_FIELD_RADIUS, DEBRIS_PARTICLE_COUNT, rng);
    camera.follow_target_lost();

    events.push(SceneEvent::Impact { target, position });
    events.push(SceneEvent::BodyDestroyed { target, name });
}
