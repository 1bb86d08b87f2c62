//! Simulation constants and tuning parameters.

use crate::types::Vec3;

// --- Orbits ---

/// All planets orbit in a single fixed plane at this height.
pub const ORBIT_PLANE_Y: f32 = 0.0;

// --- Primary star ---

/// Visual radius of the primary star.
pub const STAR_RADIUS: f32 = 5.0;

/// The primary star is fixed at the scene origin.
pub const STAR_POSITION: Vec3 = Vec3::ZERO;

// --- Projectiles ---

/// Fixed launch origin for every projectile.
pub const PROJECTILE_LAUNCH_ORIGIN: Vec3 = Vec3::new(-50.0, 10.0, 0.0);

/// Projectile travel speed (units per second).
pub const PROJECTILE_SPEED: f32 = 10.0;

/// Distance to the target below which an impact is registered.
pub const IMPACT_RADIUS: f32 = 1.0;

/// Accumulated flight time between exhaust bursts (seconds).
pub const EXHAUST_INTERVAL_SECS: f32 = 0.05;

// --- Explosion effects ---

/// Particles per explosion.
pub const EXPLOSION_PARTICLE_COUNT: usize = 1000;

/// Per-component velocity spread: components uniform in ±spread/2.
pub const EXPLOSION_VELOCITY_SPREAD: f32 = 2.0;

/// Velocity-to-position scale applied each update.
pub const EXPLOSION_MOTION_SCALE: f32 = 100.0;

/// Explosion lifetime (seconds).
pub const EXPLOSION_MAX_LIFETIME_SECS: f32 = 2.0;

// --- Debris effects ---

/// Radius of the sphere a destroyed body's debris field starts in.
pub const DEBRIS_FIELD_RADIUS: f32 = 2.0;

/// Particles per debris field.
pub const DEBRIS_PARTICLE_COUNT: usize = 1000;

/// Radial expansion speed (units per second).
pub const DEBRIS_EXPANSION_SPEED: f32 = 5.0;

/// Opacity the debris fade starts from.
pub const DEBRIS_BASE_OPACITY: f32 = 0.7;

/// Debris lifetime (seconds).
pub const DEBRIS_MAX_LIFETIME_SECS: f32 = 5.0;

// --- Exhaust effects ---

/// Particles per exhaust burst.
pub const EXHAUST_PARTICLE_COUNT: usize = 20;

/// Distance behind the projectile the burst spawns at.
pub const EXHAUST_OFFSET_DISTANCE: f32 = 1.0;

/// Per-component random jitter added to the reversed heading.
pub const EXHAUST_VELOCITY_JITTER: f32 = 0.5;

/// Velocity-to-position scale applied each update.
pub const EXHAUST_MOTION_SCALE: f32 = 50.0;

/// Opacity the exhaust fade starts from.
pub const EXHAUST_BASE_OPACITY: f32 = 0.8;

/// Exhaust lifetime (seconds).
pub const EXHAUST_MAX_LIFETIME_SECS: f32 = 0.3;

// --- Camera ---

/// Resting pose position, looking at the primary star.
pub const CAMERA_DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 5.0, 100.0);

/// Trailing/above offset added to a followed projectile's position.
pub const CAMERA_FOLLOW_OFFSET: Vec3 = Vec3::new(0.0, 2.0, -20.0);

/// Constant per-frame lerp fraction for camera smoothing.
pub const CAMERA_LERP_FACTOR: f32 = 0.1;

/// Narrow field of view for orbital viewing (degrees).
pub const CAMERA_DEFAULT_FOV_DEGREES: f32 = 20.0;

/// Wide "action" field of view while following a projectile (degrees).
pub const CAMERA_FOLLOW_FOV_DEGREES: f32 = 50.0;

// --- Backdrop ---

/// Number of star-field points.
pub const STAR_FIELD_COUNT: usize = 50_000;

/// Inner radius of the star-field shell.
pub const STAR_FIELD_MIN_RADIUS: f32 = 300.0;

/// Outer radius of the star-field shell.
pub const STAR_FIELD_MAX_RADIUS: f32 = 500.0;

/// Number of asteroid-belt instances.
pub const ASTEROID_COUNT: usize = 500;

/// Inner radius of the asteroid belt ring.
pub const ASTEROID_BELT_INNER_RADIUS: f32 = 30.0;

/// Outer radius of the asteroid belt ring.
pub const ASTEROID_BELT_OUTER_RADIUS: f32 = 40.0;

/// Vertical spread of asteroids about the orbit plane (total span).
pub const ASTEROID_VERTICAL_SPREAD: f32 = 1.0;

/// Minimum asteroid instance scale.
pub const ASTEROID_MIN_SCALE: f32 = 0.05;

/// Maximum asteroid instance scale.
pub const ASTEROID_MAX_SCALE: f32 = 0.15;

// --- Frame pacing (app driver) ---

/// Nominal frame rate the demo loop paces toward (Hz). The engine itself
/// accepts whatever `dt` it is handed.
pub const TARGET_FRAME_RATE: u32 = 60;
