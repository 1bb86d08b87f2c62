//! Particle-effect lifecycle engine.
//!
//! `EffectRegistry` owns every transient point-cloud effect (explosion,
//! debris, exhaust) behind stable handles. All three kinds share one
//! lifecycle driver: advance lifetime, apply kind-specific motion, apply
//! the kind's linear fade, then remove expired effects in a single
//! compacting pass per frame.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use orrery_core::constants::*;
use orrery_core::enums::EffectKind;
use orrery_core::types::Vec3;

/// Stable handle to a registered effect.
///
/// Handle values are drawn from a counter that only increments; a value
/// is never reused, not even across scene resets. Once the effect
/// expires the handle is invalid — check `EffectRegistry::is_expired`
/// before inspecting it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectHandle(pub u64);

/// A live point-cloud effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleEffect {
    pub handle: EffectHandle,
    pub kind: EffectKind,
    /// World position of every particle.
    pub positions: Vec<Vec3>,
    /// Per-particle velocities. Empty for debris, whose particles move
    /// radially away from `center` instead.
    pub velocities: Vec<Vec3>,
    /// Expansion center for debris; the spawn point for other kinds.
    pub center: Vec3,
    /// Elapsed lifetime in seconds. Monotonically non-decreasing.
    pub lifetime: f32,
    /// Lifetime past which the effect expires.
    pub max_lifetime: f32,
    /// Current fade opacity.
    pub opacity: f32,
}

/// Registry of all active effects.
#[derive(Debug, Default)]
pub struct EffectRegistry {
    effects: Vec<ParticleEffect>,
    next_handle: u64,
}

impl EffectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn an explosion burst at `position`: particles start at the
    /// point and fly out along random velocities.
    pub fn spawn_explosion(&mut self, position: Vec3, rng: &mut ChaCha8Rng) -> EffectHandle {
        let positions = vec![position; EXPLOSION_PARTICLE_COUNT];
        let velocities = (0..EXPLOSION_PARTICLE_COUNT)
            .map(|_| {
                Vec3::new(
                    rand_spread(rng, EXPLOSION_VELOCITY_SPREAD),
                    rand_spread(rng, EXPLOSION_VELOCITY_SPREAD),
                    rand_spread(rng, EXPLOSION_VELOCITY_SPREAD),
                )
            })
            .collect();
        self.insert(
            EffectKind::Explosion,
            positions,
            velocities,
            position,
            EXPLOSION_MAX_LIFETIME_SECS,
            1.0,
        )
    }

    /// Spawn a debris field filling a sphere of `radius` around
    /// `center`. Cube-root radius scaling gives uniform volume density;
    /// each particle then drifts radially outward from the center.
    pub fn spawn_debris(
        &mut self,
        center: Vec3,
        radius: f32,
        count: usize,
        rng: &mut ChaCha8Rng,
    ) -> EffectHandle {
        let positions = (0..count)
            .map(|_| {
                let r = radius * rng.gen::<f32>().cbrt();
                let theta = rand_spread(rng, 2.0).acos();
                let phi = rng.gen_range(0.0..std::f32::consts::TAU);
                center
                    + Vec3::new(
                        r * theta.sin() * phi.cos(),
                        r * theta.sin() * phi.sin(),
                        r * theta.cos(),
                    )
            })
            .collect();
        self.insert(
            EffectKind::Debris,
            positions,
            Vec::new(),
            center,
            DEBRIS_MAX_LIFETIME_SECS,
            DEBRIS_BASE_OPACITY,
        )
    }

    /// Spawn a short exhaust burst behind a projectile at `position`
    /// heading along `heading`: the burst sits one offset unit down the
    /// reversed heading, with velocities biased the same way plus jitter.
    pub fn spawn_exhaust(
        &mut self,
        position: Vec3,
        heading: Vec3,
        rng: &mut ChaCha8Rng,
    ) -> EffectHandle {
        let reverse = -heading.normalize_or_zero();
        let origin = position + reverse * EXHAUST_OFFSET_DISTANCE;
        let positions = vec![origin; EXHAUST_PARTICLE_COUNT];
        let velocities = (0..EXHAUST_PARTICLE_COUNT)
            .map(|_| {
                reverse
                    + Vec3::new(
                        rand_spread(rng, EXHAUST_VELOCITY_JITTER),
                        rand_spread(rng, EXHAUST_VELOCITY_JITTER),
                        rand_spread(rng, EXHAUST_VELOCITY_JITTER),
                    )
            })
            .collect();
        self.insert(
            EffectKind::Exhaust,
            positions,
            velocities,
            origin,
            EXHAUST_MAX_LIFETIME_SECS,
            EXHAUST_BASE_OPACITY,
        )
    }

    /// Advance every effect by `dt`: lifetime, kind-specific motion,
    /// fade, then one compacting removal pass for everything past its
    /// max lifetime.
    pub fn update(&mut self, dt: f32) {
        for effect in &mut self.effects {
            effect.lifetime += dt;

            match effect.kind {
                EffectKind::Explosion => {
                    advance_ballistic(effect, dt, EXPLOSION_MOTION_SCALE);
                }
                EffectKind::Exhaust => {
                    advance_ballistic(effect, dt, EXHAUST_MOTION_SCALE);
                }
                EffectKind::Debris => {
                    let center = effect.center;
                    let step = DEBRIS_EXPANSION_SPEED * dt;
                    for pos in &mut effect.positions {
                        let dir = (*pos - center).normalize_or_zero();
                        *pos += dir * step;
                    }
                }
            }

            let base = base_opacity(effect.kind);
            effect.opacity = (base * (1.0 - effect.lifetime / effect.max_lifetime)).max(0.0);
        }

        self.effects
            .retain(|effect| effect.lifetime <= effect.max_lifetime);
    }

    /// Whether the handle no longer refers to a live effect.
    pub fn is_expired(&self, handle: EffectHandle) -> bool {
        !self.effects.iter().any(|e| e.handle == handle)
    }

    /// Fetch a live effect. Looking up an expired handle is a caller
    /// bug; callers must gate on `is_expired`.
    pub fn get(&self, handle: EffectHandle) -> Option<&ParticleEffect> {
        let found = self.effects.iter().find(|e| e.handle == handle);
        debug_assert!(
            found.is_some(),
            "effect handle {} inspected after expiry",
            handle.0
        );
        found
    }

    /// Iterate all live effects in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = &ParticleEffect> {
        self.effects.iter()
    }

    /// Number of live effects.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Number of live effects of one kind.
    pub fn count_of(&self, kind: EffectKind) -> usize {
        self.effects.iter().filter(|e| e.kind == kind).count()
    }

    /// Drop every effect at once (scene reset). The handle counter is
    /// not rewound, so stale handles stay invalid forever.
    pub fn clear(&mut self) {
        self.effects.clear();
    }

    fn insert(
        &mut self,
        kind: EffectKind,
        positions: Vec<Vec3>,
        velocities: Vec<Vec3>,
        center: Vec3,
        max_lifetime: f32,
        opacity: f32,
    ) -> EffectHandle {
        let handle = EffectHandle(self.next_handle);
        self.next_handle += 1;
        self.effects.push(ParticleEffect {
            handle,
            kind,
            positions,
            velocities,
            center,
            lifetime: 0.0,
            max_lifetime,
            opacity,
        });
        handle
    }
}

/// Move particles along their stored velocities at the kind's scale.
fn advance_ballistic(effect: &mut ParticleEffect, dt: f32, scale: f32) {
    for (pos, vel) in effect.positions.iter_mut().zip(&effect.velocities) {
        *pos += *vel * dt * scale;
    }
}

/// Opacity each kind fades down from.
fn base_opacity(kind: EffectKind) -> f32 {
    match kind {
        EffectKind::Explosion => 1.0,
        EffectKind::Debris => DEBRIS_BASE_OPACITY,
        EffectKind::Exhaust => EXHAUST_BASE_OPACITY,
    }
}

/// Uniform random value in `±range/2`.
fn rand_spread(rng: &mut ChaCha8Rng, range: f32) -> f32 {
    rng.gen::<f32>() * range - range * 0.5
}
