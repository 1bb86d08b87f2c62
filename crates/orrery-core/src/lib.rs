//! Core types and definitions for the orrery scene simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! bodies, projectiles, commands, events, snapshots, and constants.
//! It has no dependency on any renderer or windowing framework.

pub mod bodies;
pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod projectile;
pub mod state;
pub mod types;
