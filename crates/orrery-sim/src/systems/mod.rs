//! Per-frame simulation systems, run in a fixed order by the engine.

pub mod camera;
pub mod effects;
pub mod orbits;
pub mod projectiles;
pub mod snapshot;
