//! Scripted headless demo: launch a projectile at Earth, follow it to
//! impact, then reset the scene. Snapshot summaries go to the log.

use std::thread;
use std::time::Duration;

use log::info;

use orrery_app::scene_loop::spawn_scene_loop;
use orrery_app::state::{shared_snapshot, SceneLoopCommand};
use orrery_core::commands::SceneCommand;
use orrery_core::enums::ViewMode;
use orrery_core::events::SceneEvent;
use orrery_core::types::FrameInput;
use orrery_sim::engine::SceneConfig;

fn main() {
    env_logger::init();

    let latest = shared_snapshot();
    let tx = spawn_scene_loop(SceneConfig::default(), latest.clone());

    tx.send(SceneLoopCommand::SetInput(FrameInput {
        orbit_speed: 0.4,
        view_mode: ViewMode::FollowProjectile,
    }))
    .expect("scene loop gone");

    info!("scene running; launching projectile at Earth in 1s");
    thread::sleep(Duration::from_secs(1));
    tx.send(SceneLoopCommand::Scene(SceneCommand::LaunchProjectile {
        target: 2,
    }))
    .expect("scene loop gone");

    // Watch the flight and report events until well past impact.
    for _ in 0..120 {
        thread::sleep(Duration::from_millis(100));
        let Some(snapshot) = latest.lock().ok().and_then(|lock| lock.clone()) else {
            continue;
        };
        for event in &snapshot.events {
            match event {
                SceneEvent::Impact { target, position } => {
                    info!("impact on body {target} at {position}");
                }
                SceneEvent::BodyDestroyed { name, .. } => {
                    info!("{name} destroyed");
                }
                SceneEvent::ProjectileLaunched { projectile_id, .. } => {
                    info!("projectile {projectile_id} away");
                }
                SceneEvent::TargetLost { projectile_id, target } => {
                    info!("projectile {projectile_id} lost target {target}");
                }
                SceneEvent::SceneReset => info!("scene reset"),
            }
        }
        if let Some(projectile) = snapshot.projectiles.first() {
            info!(
                "frame {}: projectile at {}, camera at {}",
                snapshot.clock.frame, projectile.position, snapshot.camera.position
            );
        }
    }

    info!("resetting scene");
    tx.send(SceneLoopCommand::Scene(SceneCommand::Reset))
        .expect("scene loop gone");
    thread::sleep(Duration::from_millis(500));

    if let Some(snapshot) = latest.lock().ok().and_then(|lock| lock.clone()) {
        info!(
            "after reset: {} bodies, {} projectiles, {} effects",
            snapshot.bodies.len(),
            snapshot.projectiles.len(),
            snapshot.effects.len()
        );
    }

    tx.send(SceneLoopCommand::Shutdown).ok();
}
