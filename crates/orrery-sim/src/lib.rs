//! Simulation engine for the orrery scene.
//!
//! Owns the body registry, projectiles, particle effects, and the camera
//! rig; runs the per-frame systems in a fixed order and produces
//! `FrameSnapshot`s. Completely headless (no renderer dependency),
//! enabling deterministic testing with injected `dt`.

pub mod backdrop;
pub mod engine;
pub mod scenario;
pub mod systems;

pub use engine::SceneEngine;
pub use orrery_core as core;

#[cfg(test)]
mod tests;
