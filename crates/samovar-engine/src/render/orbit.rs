use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec3;

/// Camera orbit radius around the origin, in world units.
pub const CAMERA_DISTANCE: f32 = 100.0;

/// Zoom clamp range.
pub const ZOOM_MIN: f32 = 0.5;
pub const ZOOM_MAX: f32 = 3.0;

/// Keeps camera pitch strictly inside (-pi/2, pi/2) to avoid the gimbal
/// singularity at the poles.
const PITCH_CLAMP_EPS: f32 = 1e-5;

/// Interactive orbit/zoom state for the teapot.
///
/// Relative input (`rotate_by`, `rotate_camera_by`, `zoom_by`) accumulates in
/// pending deltas; `apply_pending` integrates them exactly once per drawn
/// frame and resets them, so multiple mutator calls between two frames are
/// additive rather than overwriting. The absolute setters (`rotate_to`,
/// `rotate_camera_to`) replace the state directly and discard the matching
/// pending delta.
#[derive(Debug, Clone)]
pub struct OrbitState {
    /// Object orbit rotation, radians.
    yaw: f32,
    pitch: f32,

    /// Field-of-view divisor, clamped to [`ZOOM_MIN`, `ZOOM_MAX`].
    zoom: f32,

    /// Camera orbit angles. Yaw wraps into (-2pi, 2pi]; pitch is clamped
    /// strictly inside (-pi/2, pi/2).
    cam_yaw: f32,
    cam_pitch: f32,

    // Pending deltas buffered between frames.
    pending_yaw: f32,
    pending_pitch: f32,
    pending_zoom: f32,
    pending_cam_yaw: f32,
    pending_cam_pitch: f32,
}

impl Default for OrbitState {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            zoom: 1.0,
            cam_yaw: 0.0,
            cam_pitch: 0.0,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            pending_zoom: 0.0,
            pending_cam_yaw: 0.0,
            pending_cam_pitch: 0.0,
        }
    }
}

impl OrbitState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffers a relative object rotation.
    pub fn rotate_by(&mut self, dyaw: f32, dpitch: f32) {
        self.pending_yaw += dyaw;
        self.pending_pitch += dpitch;
    }

    /// Sets the object yaw absolutely, discarding any pending yaw delta.
    pub fn rotate_to(&mut self, yaw: f32) {
        self.yaw = yaw;
        self.pending_yaw = 0.0;
    }

    /// Buffers a relative camera orbit.
    ///
    /// Deltas are negated: the host passes pointer motion, and the camera
    /// moves opposite to it so the scene appears to follow the drag.
    pub fn rotate_camera_by(&mut self, dyaw: f32, dpitch: f32) {
        self.pending_cam_yaw -= dyaw;
        self.pending_cam_pitch -= dpitch;
    }

    /// Sets the camera yaw absolutely, discarding any pending camera-yaw delta.
    pub fn rotate_camera_to(&mut self, yaw: f32) {
        self.cam_yaw = yaw;
        self.pending_cam_yaw = 0.0;
    }

    /// Buffers a relative zoom change.
    ///
    /// A zoom gesture suppresses rotation gestures buffered in the same input
    /// batch: all four pending rotation deltas are discarded.
    pub fn zoom_by(&mut self, dzoom: f32) {
        self.pending_yaw = 0.0;
        self.pending_pitch = 0.0;
        self.pending_cam_yaw = 0.0;
        self.pending_cam_pitch = 0.0;
        self.pending_zoom += dzoom;
    }

    /// Current zoom scalar.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn cam_yaw(&self) -> f32 {
        self.cam_yaw
    }

    pub fn cam_pitch(&self) -> f32 {
        self.cam_pitch
    }

    /// Integrates and resets all pending deltas, then normalizes the state:
    /// zoom clamps to [`ZOOM_MIN`, `ZOOM_MAX`], camera yaw wraps into
    /// (-2pi, 2pi], camera pitch clamps strictly inside (-pi/2, pi/2).
    ///
    /// Called exactly once per drawn frame.
    pub fn apply_pending(&mut self) {
        self.yaw += self.pending_yaw;
        self.pitch += self.pending_pitch;
        self.zoom = (self.zoom + self.pending_zoom).clamp(ZOOM_MIN, ZOOM_MAX);
        self.cam_yaw += self.pending_cam_yaw;
        self.cam_pitch += self.pending_cam_pitch;

        self.pending_yaw = 0.0;
        self.pending_pitch = 0.0;
        self.pending_zoom = 0.0;
        self.pending_cam_yaw = 0.0;
        self.pending_cam_pitch = 0.0;

        // Modular reduction rather than repeated subtraction: for very large
        // accumulated yaw the f32 ulp exceeds TAU and a subtraction loop
        // would never make progress.
        if self.cam_yaw > TAU || self.cam_yaw <= -TAU {
            self.cam_yaw %= TAU;
        }

        let limit = FRAC_PI_2 - PITCH_CLAMP_EPS;
        self.cam_pitch = self.cam_pitch.clamp(-limit, limit);
    }

    /// Camera position on the orbit sphere (spherical to Cartesian).
    pub fn camera_position(&self) -> Vec3 {
        Vec3::new(
            CAMERA_DISTANCE * self.cam_yaw.cos() * self.cam_pitch.cos(),
            CAMERA_DISTANCE * self.cam_pitch.sin(),
            CAMERA_DISTANCE * self.cam_yaw.sin() * self.cam_pitch.cos(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── accumulation ──────────────────────────────────────────────────────

    #[test]
    fn rotate_by_accumulates_additively_between_frames() {
        let mut s = OrbitState::new();
        s.rotate_by(0.1, 0.2);
        s.rotate_by(0.3, -0.1);
        s.rotate_by(0.05, 0.0);
        s.apply_pending();
        assert!((s.yaw() - 0.45).abs() < 1e-6);
        assert!((s.pitch() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn pending_deltas_apply_exactly_once() {
        let mut s = OrbitState::new();
        s.rotate_by(0.5, 0.0);
        s.apply_pending();
        let after_first = s.yaw();
        s.apply_pending();
        assert_eq!(s.yaw(), after_first);
    }

    #[test]
    fn camera_rotation_accumulates_negated() {
        let mut s = OrbitState::new();
        s.rotate_camera_by(0.2, 0.1);
        s.rotate_camera_by(0.1, 0.1);
        s.apply_pending();
        assert!((s.cam_yaw() + 0.3).abs() < 1e-6);
        assert!((s.cam_pitch() + 0.2).abs() < 1e-6);
    }

    // ── absolute setters ──────────────────────────────────────────────────

    #[test]
    fn rotate_to_bypasses_pending_deltas() {
        let mut s = OrbitState::new();
        s.rotate_by(5.0, 0.0);
        s.rotate_to(2.0);
        s.apply_pending();
        assert_eq!(s.yaw(), 2.0);
    }

    #[test]
    fn rotate_camera_to_bypasses_pending_deltas() {
        let mut s = OrbitState::new();
        s.rotate_camera_by(5.0, 0.0);
        s.rotate_camera_to(1.5);
        s.apply_pending();
        assert_eq!(s.cam_yaw(), 1.5);
    }

    #[test]
    fn rotate_to_leaves_pitch_delta_intact() {
        let mut s = OrbitState::new();
        s.rotate_by(1.0, 0.25);
        s.rotate_to(0.0);
        s.apply_pending();
        assert_eq!(s.yaw(), 0.0);
        assert_eq!(s.pitch(), 0.25);
    }

    // ── zoom policy ───────────────────────────────────────────────────────

    #[test]
    fn zoom_starts_at_one() {
        assert_eq!(OrbitState::new().zoom(), 1.0);
    }

    #[test]
    fn zoom_is_reported_only_after_a_frame_applies_it() {
        let mut s = OrbitState::new();
        s.zoom_by(0.5);
        assert_eq!(s.zoom(), 1.0);
        s.apply_pending();
        assert_eq!(s.zoom(), 1.5);
    }

    #[test]
    fn zoom_discards_pending_rotation_in_the_same_batch() {
        let mut s = OrbitState::new();
        s.rotate_by(5.0, 1.0);
        s.rotate_camera_by(3.0, 2.0);
        s.zoom_by(0.1);
        s.apply_pending();
        assert_eq!(s.yaw(), 0.0);
        assert_eq!(s.pitch(), 0.0);
        assert_eq!(s.cam_yaw(), 0.0);
        assert_eq!(s.cam_pitch(), 0.0);
        assert!((s.zoom() - 1.1).abs() < 1e-6);
    }

    #[test]
    fn rotation_after_zoom_in_the_same_batch_survives() {
        let mut s = OrbitState::new();
        s.zoom_by(0.1);
        s.rotate_by(0.5, 0.0);
        s.apply_pending();
        assert!((s.yaw() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn zoom_clamps_to_upper_bound() {
        let mut s = OrbitState::new();
        for _ in 0..5 {
            s.zoom_by(10.0);
            s.apply_pending();
        }
        assert_eq!(s.zoom(), ZOOM_MAX);
    }

    #[test]
    fn zoom_clamps_to_lower_bound() {
        let mut s = OrbitState::new();
        for _ in 0..5 {
            s.zoom_by(-10.0);
            s.apply_pending();
        }
        assert_eq!(s.zoom(), ZOOM_MIN);
    }

    // ── camera normalization ──────────────────────────────────────────────

    #[test]
    fn camera_pitch_stays_strictly_inside_the_poles() {
        let mut s = OrbitState::new();
        s.rotate_camera_by(0.0, -1000.0);
        s.apply_pending();
        assert!(s.cam_pitch() < FRAC_PI_2);

        s.rotate_camera_by(0.0, 2000.0);
        s.apply_pending();
        assert!(s.cam_pitch() > -FRAC_PI_2);
    }

    #[test]
    fn camera_yaw_wraps_after_more_than_a_full_turn() {
        let mut s = OrbitState::new();
        for _ in 0..100 {
            s.rotate_camera_by(-0.5, 0.0);
        }
        s.apply_pending();
        assert!(s.cam_yaw() > -TAU && s.cam_yaw() <= TAU);
    }

    #[test]
    fn camera_yaw_wraps_extreme_deltas_without_hanging() {
        // At this magnitude the f32 ulp is larger than TAU; wrapping must
        // still terminate and land in range.
        let mut s = OrbitState::new();
        s.rotate_camera_by(-2.0e8, 0.0);
        s.apply_pending();
        assert!(s.cam_yaw() > -TAU && s.cam_yaw() <= TAU);

        s.rotate_camera_by(f32::MAX, 0.0);
        s.apply_pending();
        assert!(s.cam_yaw() > -TAU && s.cam_yaw() <= TAU);
    }

    #[test]
    fn camera_yaw_wraps_multiple_turns_in_one_frame() {
        let mut s = OrbitState::new();
        s.rotate_camera_by(-25.0, 0.0); // ~4 turns
        s.apply_pending();
        assert!(s.cam_yaw() > -TAU && s.cam_yaw() <= TAU);

        s.rotate_camera_by(25.0, 0.0);
        s.apply_pending();
        assert!(s.cam_yaw() > -TAU && s.cam_yaw() <= TAU);
    }

    // ── camera position ───────────────────────────────────────────────────

    #[test]
    fn camera_sits_on_the_orbit_sphere() {
        let mut s = OrbitState::new();
        s.rotate_camera_by(0.7, -0.3);
        s.apply_pending();
        let p = s.camera_position();
        assert!((p.length() - CAMERA_DISTANCE).abs() < 1e-3);
    }

    #[test]
    fn default_camera_looks_down_positive_x() {
        let p = OrbitState::new().camera_position();
        assert!((p.x - CAMERA_DISTANCE).abs() < 1e-4);
        assert!(p.y.abs() < 1e-4);
        assert!(p.z.abs() < 1e-4);
    }
}
