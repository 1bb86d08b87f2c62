//! Shared state between the driver and the scene-loop thread.

use std::sync::{Arc, Mutex};

use orrery_core::commands::SceneCommand;
use orrery_core::state::FrameSnapshot;
use orrery_core::types::FrameInput;

/// Messages accepted by the scene-loop thread.
#[derive(Debug, Clone)]
pub enum SceneLoopCommand {
    /// Forward an edge-triggered scene command to the engine.
    Scene(SceneCommand),
    /// Replace the per-frame input snapshot.
    SetInput(FrameInput),
    /// Stop the loop thread.
    Shutdown,
}

/// Latest snapshot published by the loop, for synchronous polling.
pub type SharedSnapshot = Arc<Mutex<Option<FrameSnapshot>>>;

/// Create an empty shared snapshot slot.
pub fn shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}
