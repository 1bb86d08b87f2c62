//! Tests for the scene engine: orbital kinematics, effect lifecycles,
//! projectile guidance and impact cascades, camera behavior, and reset.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use orrery_core::bodies::BodySlot;
use orrery_core::commands::SceneCommand;
use orrery_core::constants::*;
use orrery_core::enums::{EffectKind, ViewMode};
use orrery_core::events::SceneEvent;
use orrery_core::types::{FrameInput, Vec3};

use crate::engine::{SceneConfig, SceneEngine};
use crate::scenario;
use crate::systems::effects::EffectRegistry;
use crate::systems::orbits;

/// Fixed-dt input helper: planets frozen, free orbit camera.
fn frozen_input() -> FrameInput {
    FrameInput {
        orbit_speed: 0.0,
        view_mode: ViewMode::FreeOrbit,
    }
}

fn follow_input() -> FrameInput {
    FrameInput {
        orbit_speed: 0.0,
        view_mode: ViewMode::FollowProjectile,
    }
}

fn test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = SceneEngine::new(SceneConfig::default());
    let mut engine_b = SceneEngine::new(SceneConfig::default());

    for engine in [&mut engine_a, &mut engine_b] {
        engine.queue_command(SceneCommand::LaunchProjectile { target: 1 });
    }

    let input = follow_input();
    for _ in 0..200 {
        let snap_a = engine_a.tick(&input, 0.05);
        let snap_b = engine_b.tick(&input, 0.05);

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "snapshots diverged with same seed");
    }
}

#[test]
fn test_backdrop_deterministic_per_seed() {
    let engine_a = SceneEngine::new(SceneConfig::default());
    let engine_b = SceneEngine::new(SceneConfig::default());
    assert_eq!(engine_a.backdrop().stars, engine_b.backdrop().stars);
    assert_eq!(engine_a.backdrop().stars.len(), STAR_FIELD_COUNT);
    assert_eq!(engine_a.backdrop().asteroids.len(), ASTEROID_COUNT);

    for asteroid in &engine_a.backdrop().asteroids {
        assert!(asteroid.scale >= ASTEROID_MIN_SCALE && asteroid.scale <= ASTEROID_MAX_SCALE);
        let ring_radius = Vec3::new(asteroid.position.x, 0.0, asteroid.position.z).length();
        assert!(ring_radius >= ASTEROID_BELT_INNER_RADIUS);
        assert!(ring_radius <= ASTEROID_BELT_OUTER_RADIUS);
    }

    let other = SceneEngine::new(SceneConfig {
        seed: 99,
        ..Default::default()
    });
    assert_ne!(engine_a.backdrop().stars, other.backdrop().stars);
}

// ---- Orbital kinematics ----

#[test]
fn test_orbit_advance() {
    let mut bodies = scenario::solar_system();
    orbits::run(&mut bodies, 2.0, 0.5);

    let mercury = bodies[0].as_live().unwrap();
    // angle = 0 + 0.01 * 0.5 * 2.0
    assert!((mercury.angle - 0.01).abs() < 1e-6);
    let expected = Vec3::new(
        mercury.angle.cos() * 10.0,
        ORBIT_PLANE_Y,
        mercury.angle.sin() * 10.0,
    );
    assert!((mercury.position - expected).length() < 1e-5);
}

#[test]
fn test_orbit_skips_tombstones() {
    let mut bodies = scenario::solar_system();
    bodies[1] = BodySlot::Destroyed;
    orbits::run(&mut bodies, 1.0, 1.0);
    assert!(!bodies[1].is_live());
    assert!(bodies[0].as_live().unwrap().angle > 0.0);
}

#[test]
fn test_orbit_zero_multiplier_freezes_positions() {
    let mut bodies = scenario::solar_system();
    let before: Vec<_> = bodies
        .iter()
        .map(|slot| slot.as_live().unwrap().position)
        .collect();
    orbits::run(&mut bodies, 0.5, 0.0);
    for (slot, expected) in bodies.iter().zip(before) {
        assert_eq!(slot.as_live().unwrap().position, expected);
    }
}

// ---- Effect lifecycle ----

#[test]
fn test_explosion_lifetime_monotonic_and_removed_once() {
    let mut rng = test_rng();
    let mut registry = EffectRegistry::new();
    let handle = registry.spawn_explosion(Vec3::new(5.0, 0.0, 0.0), &mut rng);
    assert_eq!(registry.len(), 1);

    let mut last_lifetime = 0.0;
    let mut removal_count = 0;
    for _ in 0..20 {
        let was_live = !registry.is_expired(handle);
        registry.update(0.25);
        if was_live && !registry.is_expired(handle) {
            let effect = registry.get(handle).unwrap();
            assert!(effect.lifetime > last_lifetime, "lifetime must increase");
            last_lifetime = effect.lifetime;
        }
        if was_live && registry.is_expired(handle) {
            removal_count += 1;
        }
    }

    assert_eq!(removal_count, 1, "effect must be removed exactly once");
    assert!(registry.is_expired(handle));
    assert!(registry.is_empty());
    // Expiry happens at the first update past max lifetime: 2.25s > 2.0s.
    assert!(last_lifetime <= EXPLOSION_MAX_LIFETIME_SECS);
}

#[test]
fn test_explosion_particles_move_and_fade() {
    let mut rng = test_rng();
    let mut registry = EffectRegistry::new();
    let origin = Vec3::ZERO;
    let handle = registry.spawn_explosion(origin, &mut rng);

    {
        let effect = registry.get(handle).unwrap();
        assert_eq!(effect.positions.len(), EXPLOSION_PARTICLE_COUNT);
        assert!(effect.positions.iter().all(|p| *p == origin));
        assert_eq!(effect.opacity, 1.0);
    }

    registry.update(0.5);
    let effect = registry.get(handle).unwrap();
    assert!(effect.positions.iter().any(|p| *p != origin));
    // 1 - 0.5/2.0
    assert!((effect.opacity - 0.75).abs() < 1e-5);
}

#[test]
fn test_debris_expansion_monotonic() {
    let mut rng = test_rng();
    let mut registry = EffectRegistry::new();
    let center = Vec3::new(1.0, 2.0, 3.0);
    let handle = registry.spawn_debris(center, DEBRIS_FIELD_RADIUS, 200, &mut rng);

    {
        let effect = registry.get(handle).unwrap();
        assert_eq!(effect.positions.len(), 200);
        for pos in &effect.positions {
            assert!(pos.distance(center) <= DEBRIS_FIELD_RADIUS + 1e-4);
        }
    }

    let mut last: Vec<f32> = registry
        .get(handle)
        .unwrap()
        .positions
        .iter()
        .map(|p| p.distance(center))
        .collect();

    for _ in 0..8 {
        registry.update(0.25);
        let distances: Vec<f32> = registry
            .get(handle)
            .unwrap()
            .positions
            .iter()
            .map(|p| p.distance(center))
            .collect();
        for (now, before) in distances.iter().zip(&last) {
            assert!(now + 1e-5 >= *before, "debris must only expand");
        }
        last = distances;
    }
}

#[test]
fn test_debris_opacity_fades_from_base() {
    let mut rng = test_rng();
    let mut registry = EffectRegistry::new();
    let handle = registry.spawn_debris(Vec3::ZERO, 2.0, 50, &mut rng);

    registry.update(1.0);
    let effect = registry.get(handle).unwrap();
    // 0.7 * (1 - 1/5)
    assert!((effect.opacity - DEBRIS_BASE_OPACITY * 0.8).abs() < 1e-5);
}

#[test]
fn test_exhaust_spawns_behind_and_expires_quickly() {
    let mut rng = test_rng();
    let mut registry = EffectRegistry::new();
    let position = Vec3::new(10.0, 0.0, 0.0);
    let heading = Vec3::new(1.0, 0.0, 0.0);
    let handle = registry.spawn_exhaust(position, heading, &mut rng);

    {
        let effect = registry.get(handle).unwrap();
        assert_eq!(effect.positions.len(), EXHAUST_PARTICLE_COUNT);
        let expected_origin = Vec3::new(10.0 - EXHAUST_OFFSET_DISTANCE, 0.0, 0.0);
        assert!(effect.positions.iter().all(|p| *p == expected_origin));
        // Velocities biased along the reversed heading.
        for vel in &effect.velocities {
            assert!(vel.x < 0.0);
        }
    }

    registry.update(0.2);
    assert!(!registry.is_expired(handle));
    registry.update(0.2);
    assert!(registry.is_expired(handle), "exhaust must expire past 0.3s");
}

#[test]
fn test_effect_handles_never_reused() {
    let mut rng = test_rng();
    let mut registry = EffectRegistry::new();
    let a = registry.spawn_explosion(Vec3::ZERO, &mut rng);
    let b = registry.spawn_debris(Vec3::ZERO, 1.0, 10, &mut rng);
    assert!(b.0 > a.0);

    registry.clear();
    let c = registry.spawn_exhaust(Vec3::ZERO, Vec3::X, &mut rng);
    assert!(c.0 > b.0, "clear must not rewind the handle counter");
    assert!(registry.is_expired(a));
    assert!(registry.is_expired(b));
    assert!(!registry.is_expired(c));
}

// ---- Projectiles ----

#[test]
fn test_launch_and_home_to_impact() {
    let mut engine = SceneEngine::new(SceneConfig::default());
    engine.queue_command(SceneCommand::LaunchProjectile { target: 2 });

    let input = frozen_input();
    let mut impacts = Vec::new();
    for _ in 0..200 {
        let snapshot = engine.tick(&input, 0.1);
        for event in &snapshot.events {
            if let SceneEvent::Impact { target, position } = event {
                impacts.push((*target, *position));
            }
        }
    }

    // Earth sits at (20, 0, 0); launch origin is (-50, 10, 0); at speed
    // 10 the projectile closes the ~70.7 unit gap within 200 ticks.
    assert_eq!(impacts.len(), 1, "exactly one impact event");
    assert_eq!(impacts[0].0, 2);
    assert!(impacts[0].1.distance(Vec3::new(20.0, 0.0, 0.0)) < 1e-3);
    assert!(!engine.bodies()[2].is_live());
    assert!(engine.projectiles().is_empty());
}

#[test]
fn test_launch_at_tombstone_is_noop() {
    let mut engine = SceneEngine::new(SceneConfig::default());
    engine.force_destroy_body(2);
    engine.queue_command(SceneCommand::LaunchProjectile { target: 2 });

    let snapshot = engine.tick(&frozen_input(), 0.016);
    assert!(engine.projectiles().is_empty());
    assert!(snapshot
        .events
        .iter()
        .all(|e| !matches!(e, SceneEvent::ProjectileLaunched { .. })));
}

#[test]
fn test_launch_out_of_range_is_noop() {
    let mut engine = SceneEngine::new(SceneConfig::default());
    engine.queue_command(SceneCommand::LaunchProjectile { target: 17 });
    engine.tick(&frozen_input(), 0.016);
    assert!(engine.projectiles().is_empty());
}

#[test]
fn test_exhaust_trails_active_projectile() {
    let mut engine = SceneEngine::new(SceneConfig::default());
    engine.queue_command(SceneCommand::LaunchProjectile { target: 3 });

    // 0.1s per frame exceeds the 0.05s exhaust interval every frame.
    engine.tick(&frozen_input(), 0.1);
    assert_eq!(engine.projectiles().len(), 1);
    assert!(engine.effects().count_of(EffectKind::Exhaust) >= 1);
}

#[test]
fn test_second_projectile_self_removes_after_shared_target_dies() {
    let mut engine = SceneEngine::new(SceneConfig::default());
    let input = frozen_input();

    engine.queue_command(SceneCommand::LaunchProjectile { target: 2 });
    // Stagger the second launch so it trails the first.
    for _ in 0..10 {
        engine.tick(&input, 0.1);
    }
    engine.queue_command(SceneCommand::LaunchProjectile { target: 2 });

    let mut impact_count = 0;
    let mut destroyed_count = 0;
    let mut target_lost = Vec::new();
    for _ in 0..300 {
        let snapshot = engine.tick(&input, 0.1);
        for event in &snapshot.events {
            match event {
                SceneEvent::Impact { .. } => impact_count += 1,
                SceneEvent::BodyDestroyed { .. } => destroyed_count += 1,
                SceneEvent::TargetLost { target, .. } => target_lost.push(*target),
                _ => {}
            }
        }
    }

    assert_eq!(impact_count, 1, "only the first projectile impacts");
    assert_eq!(destroyed_count, 1);
    assert_eq!(target_lost, vec![2], "the trailer reports its lost target");
    assert!(engine.projectiles().is_empty(), "the trailer self-removed");
    // One explosion + one debris field total; exhaust bursts aside, the
    // second projectile spawned nothing on removal.
    assert!(!engine.bodies()[2].is_live());
}

#[test]
fn test_single_explosion_debris_pair_per_impact() {
    let mut engine = SceneEngine::new(SceneConfig::default());
    let input = frozen_input();
    engine.queue_command(SceneCommand::LaunchProjectile { target: 0 });

    let mut saw_impact = false;
    for _ in 0..200 {
        let snapshot = engine.tick(&input, 0.1);
        if snapshot
            .events
            .iter()
            .any(|e| matches!(e, SceneEvent::Impact { .. }))
        {
            saw_impact = true;
            assert_eq!(engine.effects().count_of(EffectKind::Explosion), 1);
            assert_eq!(engine.effects().count_of(EffectKind::Debris), 1);
            break;
        }
    }
    assert!(saw_impact);
}

// ---- Camera ----

#[test]
fn test_follow_mode_tracks_lead_projectile() {
    let mut engine = SceneEngine::new(SceneConfig::default());
    engine.queue_command(SceneCommand::LaunchProjectile { target: 3 });

    let input = follow_input();
    for _ in 0..30 {
        engine.tick(&input, 0.05);
    }

    let camera = engine.camera();
    assert_eq!(camera.mode, ViewMode::FollowProjectile);
    assert_eq!(camera.fov_degrees, CAMERA_FOLLOW_FOV_DEGREES);
    assert!(!camera.orbit_input_enabled);

    let lead = &engine.projectiles()[0];
    // Smoothed look-at should be closing on the projectile.
    assert!(camera.look_at.distance(lead.position) < STAR_POSITION.distance(lead.position));
}

#[test]
fn test_follow_mode_fallback_converges_to_resting_pose() {
    let mut engine = SceneEngine::new(SceneConfig::default());
    engine.queue_command(SceneCommand::LaunchProjectile { target: 2 });

    let input = follow_input();
    // Fly to impact, then keep ticking with nothing left to follow.
    for _ in 0..200 {
        engine.tick(&input, 0.1);
    }
    assert!(engine.projectiles().is_empty());
    for _ in 0..300 {
        engine.tick(&input, 0.1);
    }

    let camera = engine.camera();
    assert!(camera.position.distance(CAMERA_DEFAULT_POSITION) < 1e-2);
    assert!(camera.look_at.distance(STAR_POSITION) < 1e-2);
    assert_eq!(camera.fov_degrees, CAMERA_DEFAULT_FOV_DEGREES);
    assert!(camera.orbit_input_enabled);
}

#[test]
fn test_free_orbit_leaves_camera_alone() {
    let mut engine = SceneEngine::new(SceneConfig::default());
    let before = engine.camera().clone();
    for _ in 0..10 {
        engine.tick(&frozen_input(), 0.1);
    }
    assert_eq!(*engine.camera(), before);
}

#[test]
fn test_view_mode_input_owns_camera_mode() {
    let mut engine = SceneEngine::new(SceneConfig::default());
    engine.queue_command(SceneCommand::FocusOn {
        position: Vec3::new(3.0, 0.0, 0.0),
    });
    let snapshot = engine.tick(&follow_input(), 0.016);
    // FocusOn snaps the look-at, but the per-frame input decides the mode.
    assert_eq!(snapshot.camera.mode, ViewMode::FollowProjectile);
    assert!(snapshot.camera.orbit_input_enabled);
}

#[test]
fn test_focus_on_sets_look_at() {
    let mut engine = SceneEngine::new(SceneConfig::default());
    let point = Vec3::new(4.0, 1.0, -2.0);
    engine.queue_command(SceneCommand::FocusOn { position: point });
    let snapshot = engine.tick(&frozen_input(), 0.016);
    assert_eq!(snapshot.camera.look_at, point);
    assert_eq!(snapshot.camera.mode, ViewMode::FreeOrbit);
    assert!(snapshot.camera.orbit_input_enabled);
}

// ---- Ship ----

#[test]
fn test_show_ship_parks_at_home_body() {
    let mut engine = SceneEngine::new(SceneConfig::default());
    engine.queue_command(SceneCommand::ShowShip);
    let snapshot = engine.tick(&frozen_input(), 0.016);

    let ship = snapshot.ship.expect("ship should be visible");
    let earth = engine.bodies()[scenario::SHIP_HOME_INDEX].as_live().unwrap();
    assert_eq!(ship.position, earth.position);
    assert_eq!(snapshot.camera.look_at, earth.position);
}

#[test]
fn test_show_ship_unavailable_model_is_noop() {
    let mut engine = SceneEngine::new(SceneConfig {
        ship_available: false,
        ..Default::default()
    });
    engine.queue_command(SceneCommand::ShowShip);
    let snapshot = engine.tick(&frozen_input(), 0.016);
    assert!(snapshot.ship.is_none());
}

#[test]
fn test_show_ship_with_destroyed_home_is_noop() {
    let mut engine = SceneEngine::new(SceneConfig::default());
    engine.force_destroy_body(scenario::SHIP_HOME_INDEX);
    engine.queue_command(SceneCommand::ShowShip);
    let snapshot = engine.tick(&frozen_input(), 0.016);
    assert!(snapshot.ship.is_none());
}

// ---- Reset ----

#[test]
fn test_reset_restores_full_scene() {
    let mut engine = SceneEngine::new(SceneConfig::default());
    let input = frozen_input();

    // Destroy a body and leave another projectile mid-flight.
    engine.queue_command(SceneCommand::LaunchProjectile { target: 1 });
    for _ in 0..200 {
        engine.tick(&input, 0.1);
    }
    assert!(!engine.bodies()[1].is_live());
    engine.queue_command(SceneCommand::LaunchProjectile { target: 3 });
    engine.queue_command(SceneCommand::ShowShip);
    engine.tick(&input, 0.1);
    assert!(!engine.projectiles().is_empty());

    engine.queue_command(SceneCommand::Reset);
    let snapshot = engine.tick(&input, 0.1);

    assert!(snapshot
        .events
        .iter()
        .any(|e| matches!(e, SceneEvent::SceneReset)));
    assert_eq!(snapshot.bodies.len(), 4, "all bodies live again");
    assert!(snapshot.projectiles.is_empty());
    assert!(snapshot.effects.is_empty());
    assert!(snapshot.ship.is_none());
    assert!(engine.effects().is_empty());

    // Initial angles: every body back on the +x axis.
    for (slot, view) in engine.bodies().iter().zip(&snapshot.bodies) {
        let body = slot.as_live().unwrap();
        assert_eq!(body.angle, 0.0);
        assert_eq!(view.position, Vec3::new(body.distance, ORBIT_PLANE_Y, 0.0));
    }

    assert_eq!(snapshot.camera.mode, ViewMode::FreeOrbit);
    assert!(snapshot.camera.orbit_input_enabled);
}

#[test]
fn test_reset_allows_relaunch_at_previously_destroyed_slot() {
    let mut engine = SceneEngine::new(SceneConfig::default());
    let input = frozen_input();

    engine.queue_command(SceneCommand::LaunchProjectile { target: 0 });
    for _ in 0..200 {
        engine.tick(&input, 0.1);
    }
    assert!(!engine.bodies()[0].is_live());

    engine.queue_command(SceneCommand::Reset);
    engine.tick(&input, 0.1);
    engine.queue_command(SceneCommand::LaunchProjectile { target: 0 });
    engine.tick(&input, 0.1);
    assert_eq!(engine.projectiles().len(), 1);
}

// ---- Snapshot ----

#[test]
fn test_snapshot_omits_tombstones_and_resolves_moons() {
    let mut engine = SceneEngine::new(SceneConfig::default());
    engine.force_destroy_body(1);
    let snapshot = engine.tick(&frozen_input(), 0.016);

    let indices: Vec<usize> = snapshot.bodies.iter().map(|b| b.index).collect();
    assert_eq!(indices, vec![0, 2, 3]);

    let earth = snapshot.bodies.iter().find(|b| b.index == 2).unwrap();
    assert_eq!(earth.moons.len(), 1);
    let moon = &earth.moons[0];
    assert!((moon.position.distance(earth.position) - 3.0).abs() < 1e-4);

    let mars = snapshot.bodies.iter().find(|b| b.index == 3).unwrap();
    assert_eq!(mars.moons.len(), 2);
}

#[test]
fn test_clock_advances_with_injected_dt() {
    let mut engine = SceneEngine::new(SceneConfig::default());
    engine.tick(&frozen_input(), 0.25);
    engine.tick(&frozen_input(), 0.5);
    let clock = engine.clock();
    assert_eq!(clock.frame, 2);
    assert!((clock.elapsed_secs - 0.75).abs() < 1e-6);
}
