//! Scene loop thread — drives the engine once per frame with measured
//! wall-clock `dt` and publishes snapshots.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc`; the latest snapshot is stored
//! in shared state for synchronous polling by whoever renders it.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use orrery_core::constants::TARGET_FRAME_RATE;
use orrery_core::types::FrameInput;
use orrery_sim::engine::{SceneConfig, SceneEngine};

use crate::state::{SceneLoopCommand, SharedSnapshot};

/// Nominal duration of one frame at the target rate. Pacing only — the
/// engine integrates whatever `dt` actually elapsed.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TARGET_FRAME_RATE as u64);

/// Spawn the scene loop in a new thread.
///
/// Returns the command sender for the driver to use.
pub fn spawn_scene_loop(
    config: SceneConfig,
    latest_snapshot: SharedSnapshot,
) -> mpsc::Sender<SceneLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<SceneLoopCommand>();

    std::thread::Builder::new()
        .name("orrery-scene-loop".into())
        .spawn(move || {
            run_scene_loop(config, cmd_rx, &latest_snapshot);
        })
        .expect("failed to spawn scene loop thread");

    cmd_tx
}

/// The frame loop. Runs until a Shutdown command or channel disconnect.
fn run_scene_loop(
    config: SceneConfig,
    cmd_rx: mpsc::Receiver<SceneLoopCommand>,
    latest_snapshot: &SharedSnapshot,
) {
    let mut engine = SceneEngine::new(config);
    let mut input = FrameInput::default();
    let mut last_frame = Instant::now();
    let mut next_frame_time = Instant::now();

    loop {
        // 1. Drain all pending messages
        loop {
            match cmd_rx.try_recv() {
                Ok(SceneLoopCommand::Scene(command)) => engine.queue_command(command),
                Ok(SceneLoopCommand::SetInput(new_input)) => input = new_input,
                Ok(SceneLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one frame by the wall-clock time actually elapsed
        let now = Instant::now();
        let dt = (now - last_frame).as_secs_f32();
        last_frame = now;
        let snapshot = engine.tick(&input, dt);

        // 3. Publish for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep toward the next frame boundary
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral
            next_frame_time = now;
        }
    }
}
