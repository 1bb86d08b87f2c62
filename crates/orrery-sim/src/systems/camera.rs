//! Camera mode state machine.
//!
//! Two states: `FollowProjectile` trails the first active projectile
//! with exponentially-smoothed position and look-at; `FreeOrbit` leaves
//! the camera to the external orbit-input driver. Whenever the follow
//! mode has nothing to follow it eases back to the resting pose over the
//! primary star and re-enables orbit input.

use orrery_core::constants::*;
use orrery_core::enums::ViewMode;
use orrery_core::projectile::Projectile;
use orrery_core::types::Vec3;

/// The camera state mutated once per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    pub mode: ViewMode,
    pub position: Vec3,
    pub look_at: Vec3,
    pub fov_degrees: f32,
    /// While false, the external orbit driver must not move the camera.
    pub orbit_input_enabled: bool,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            mode: ViewMode::FreeOrbit,
            position: CAMERA_DEFAULT_POSITION,
            look_at: STAR_POSITION,
            fov_degrees: CAMERA_DEFAULT_FOV_DEGREES,
            orbit_input_enabled: true,
        }
    }
}

impl CameraRig {
    /// One-shot focus command from external selection: snap the look-at
    /// target and hand the camera back to orbit input. The mode itself
    /// stays owned by the per-frame `view_mode` input.
    pub fn focus_on(&mut self, point: Vec3) {
        self.look_at = point;
        self.orbit_input_enabled = true;
    }

    /// The followed projectile disappeared (impact or target lost):
    /// give orbit input back and start easing home.
    pub fn follow_target_lost(&mut self) {
        self.ease_to_resting_pose();
    }

    /// Scene reset: force free orbit aimed at the primary star.
    pub fn reset(&mut self) {
        self.mode = ViewMode::FreeOrbit;
        self.look_at = STAR_POSITION;
        self.position = self
            .position
            .lerp(CAMERA_DEFAULT_POSITION, CAMERA_LERP_FACTOR);
        self.fov_degrees = CAMERA_DEFAULT_FOV_DEGREES;
        self.orbit_input_enabled = true;
    }

    /// One smoothing step toward the default pose over the primary star.
    fn ease_to_resting_pose(&mut self) {
        self.position = self
            .position
            .lerp(CAMERA_DEFAULT_POSITION, CAMERA_LERP_FACTOR);
        self.look_at = self.look_at.lerp(STAR_POSITION, CAMERA_LERP_FACTOR);
        self.fov_degrees = CAMERA_DEFAULT_FOV_DEGREES;
        self.orbit_input_enabled = true;
    }
}

/// Apply this frame's camera behavior for the desired mode.
pub fn run(rig: &mut CameraRig, desired_mode: ViewMode, projectiles: &[Projectile]) {
    rig.mode = desired_mode;

    match rig.mode {
        ViewMode::FollowProjectile => {
            if let Some(lead) = projectiles.first() {
                let desired_pos = lead.position + CAMERA_FOLLOW_OFFSET;
                rig.position = rig.position.lerp(desired_pos, CAMERA_LERP_FACTOR);
                rig.look_at = rig.look_at.lerp(lead.position, CAMERA_LERP_FACTOR);
                rig.fov_degrees = CAMERA_FOLLOW_FOV_DEGREES;
                rig.orbit_input_enabled = false;
            } else {
                // Automatic fallback: nothing to follow.
                rig.ease_to_resting_pose();
            }
        }
        ViewMode::FreeOrbit => {
            // The orbit-input driver owns position and look-at here.
        }
    }
}
