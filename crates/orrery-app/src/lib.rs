//! Headless demo driver for the orrery scene engine.
//!
//! Runs the engine on a dedicated frame-loop thread fed by an mpsc
//! command channel, publishing the latest snapshot through shared state.
//! Rendering is an external concern; this crate only drives frames.

pub mod scene_loop;
pub mod state;
