//! Snapshot system: builds the complete per-frame output for the
//! renderer. Read-only — it never modifies simulation state.

use orrery_core::bodies::BodySlot;
use orrery_core::events::SceneEvent;
use orrery_core::projectile::Projectile;
use orrery_core::state::*;
use orrery_core::types::{FrameClock, Vec3};

use crate::systems::camera::CameraRig;
use crate::systems::effects::EffectRegistry;

/// Assemble a `FrameSnapshot` from the current scene state.
pub fn build(
    clock: FrameClock,
    bodies: &[BodySlot],
    projectiles: &[Projectile],
    effects: &EffectRegistry,
    camera: &CameraRig,
    ship: Option<Vec3>,
    events: Vec<SceneEvent>,
) -> FrameSnapshot {
    FrameSnapshot {
        clock,
        bodies: build_bodies(bodies),
        projectiles: build_projectiles(projectiles),
        effects: build_effects(effects),
        camera: build_camera(camera),
        ship: ship.map(|position| ShipView { position }),
        events,
    }
}

/// Views for live slots only; tombstones are simply absent.
fn build_bodies(bodies: &[BodySlot]) -> Vec<BodyView> {
    bodies
        .iter()
        .enumerate()
        .filter_map(|(index, slot)| slot.as_live().map(|body| (index, body)))
        .map(|(index, body)| BodyView {
            index,
            name: body.name.clone(),
            radius: body.radius,
            position: body.position,
            moons: body
                .moons
                .iter()
                .map(|moon| MoonView {
                    name: moon.name.clone(),
                    radius: moon.radius,
                    position: body.moon_world_position(moon),
                })
                .collect(),
        })
        .collect()
}

fn build_projectiles(projectiles: &[Projectile]) -> Vec<ProjectileView> {
    projectiles
        .iter()
        .map(|p| ProjectileView {
            id: p.id,
            position: p.position,
            heading: p.heading,
            target: p.target,
        })
        .collect()
}

fn build_effects(effects: &EffectRegistry) -> Vec<EffectView> {
    effects
        .iter()
        .map(|e| EffectView {
            handle: e.handle.0,
            kind: e.kind,
            opacity: e.opacity,
            positions: e.positions.clone(),
        })
        .collect()
}

fn build_camera(camera: &CameraRig) -> CameraView {
    CameraView {
        mode: camera.mode,
        position: camera.position,
        look_at: camera.look_at,
        fov_degrees: camera.fov_degrees,
        orbit_input_enabled: camera.orbit_input_enabled,
    }
}
