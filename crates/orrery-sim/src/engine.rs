//! Scene engine — the top-level per-frame driver.
//!
//! `SceneEngine` owns all simulation state, processes queued commands at
//! the frame boundary, runs the systems in a fixed order, and produces a
//! `FrameSnapshot`. `tick` never fails: a single propagated error would
//! halt all future rendering, so every runtime condition is absorbed
//! internally.

use std::collections::VecDeque;

use log::warn;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use orrery_core::bodies::BodySlot;
use orrery_core::commands::SceneCommand;
use orrery_core::events::SceneEvent;
use orrery_core::projectile::Projectile;
use orrery_core::state::FrameSnapshot;
use orrery_core::types::{FrameClock, FrameInput, Vec3};

use crate::backdrop::{self, Backdrop};
use crate::scenario;
use crate::systems;
use crate::systems::camera::CameraRig;
use crate::systems::effects::EffectRegistry;

/// Configuration for a new scene.
pub struct SceneConfig {
    /// RNG seed for particle spawns and backdrop generation.
    /// Same seed + same commands + same `dt` sequence = same snapshots.
    pub seed: u64,
    /// Whether the asset layer has the decorative ship model ready.
    pub ship_available: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            ship_available: true,
        }
    }
}

/// The scene engine. Owns bodies, projectiles, effects, and the camera.
pub struct SceneEngine {
    bodies: Vec<BodySlot>,
    projectiles: Vec<Projectile>,
    effects: EffectRegistry,
    camera: CameraRig,
    backdrop: Backdrop,
    ship: Option<Vec3>,
    clock: FrameClock,
    rng: ChaCha8Rng,
    command_queue: VecDeque<SceneCommand>,
    events: Vec<SceneEvent>,
    next_projectile_id: u64,
    ship_available: bool,
}

impl SceneEngine {
    /// Create a new engine with the given config.
    pub fn new(config: SceneConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let backdrop = backdrop::generate(&mut rng);
        Self {
            bodies: scenario::solar_system(),
            projectiles: Vec::new(),
            effects: EffectRegistry::new(),
            camera: CameraRig::default(),
            backdrop,
            ship: None,
            clock: FrameClock::default(),
            rng,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            next_projectile_id: 0,
            ship_available: config.ship_available,
        }
    }

    /// Queue a scene command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: SceneCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SceneCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the scene by one frame of `dt` seconds and return the
    /// resulting snapshot. `dt` is wall-clock elapsed time; it is
    /// integrated as-is, unclamped.
    pub fn tick(&mut self, input: &FrameInput, dt: f32) -> FrameSnapshot {
        self.process_commands();
        self.run_systems(input, dt);
        self.clock.advance(dt);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            self.clock,
            &self.bodies,
            &self.projectiles,
            &self.effects,
            &self.camera,
            self.ship,
            events,
        )
    }

    /// The body registry, tombstones included.
    pub fn bodies(&self) -> &[BodySlot] {
        &self.bodies
    }

    /// Active projectiles.
    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    /// The particle-effect registry.
    pub fn effects(&self) -> &EffectRegistry {
        &self.effects
    }

    /// The camera rig.
    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    /// The static backdrop for the current scene.
    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    /// The frame clock.
    pub fn clock(&self) -> FrameClock {
        self.clock
    }

    /// Tombstone a body directly (for tests).
    #[cfg(test)]
    pub fn force_destroy_body(&mut self, index: usize) {
        self.bodies[index] = BodySlot::Destroyed;
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single scene command.
    fn handle_command(&mut self, command: SceneCommand) {
        match command {
            SceneCommand::LaunchProjectile { target } => {
                systems::projectiles::launch(
                    &mut self.projectiles,
                    &self.bodies,
                    target,
                    &mut self.next_projectile_id,
                    &mut self.events,
                );
            }
            SceneCommand::FocusOn { position } => {
                self.camera.focus_on(position);
            }
            SceneCommand::ShowShip => {
                if !self.ship_available {
                    warn!("ship model not available yet; ShowShip ignored");
                    return;
                }
                if let Some(home) = self.bodies[scenario::SHIP_HOME_INDEX].as_live() {
                    self.ship = Some(home.position);
                    self.camera.focus_on(home.position);
                } else {
                    warn!("ship home body is destroyed; ShowShip ignored");
                }
            }
            SceneCommand::Reset => self.reset(),
        }
    }

    /// Synchronous teardown and rebuild. Everything transient is dropped
    /// before the fresh roster and backdrop are built, within the same
    /// frame; the snapshot that follows already reflects the new scene,
    /// so the renderer releases stale handles by their absence.
    fn reset(&mut self) {
        self.projectiles.clear();
        self.effects.clear();
        self.ship = None;
        self.bodies = scenario::solar_system();
        self.backdrop = backdrop::generate(&mut self.rng);
        self.camera.reset();
        self.events.push(SceneEvent::SceneReset);
    }

    /// Run all systems in order. The order is significant: a body
    /// tombstoned by this frame's projectile pass is never seen as live
    /// by any later step, and effects spawned by this frame's impacts
    /// appear in this frame's snapshot.
    fn run_systems(&mut self, input: &FrameInput, dt: f32) {
        // 1. Orbital kinematics
        systems::orbits::run(&mut self.bodies, dt, input.orbit_speed.clamp(0.0, 1.0));
        // 2. Projectile guidance, impacts, cascaded destruction, exhaust
        systems::projectiles::run(
            &mut self.projectiles,
            &mut self.bodies,
            &mut self.effects,
            &mut self.camera,
            &mut self.rng,
            &mut self.events,
            dt,
        );
        // 3. Effect lifecycle advance + expiry compaction
        self.effects.update(dt);
        // 4. Camera mode behavior
        systems::camera::run(&mut self.camera, input.view_mode, &self.projectiles);
    }
}
