use glam::{Mat4, Vec3};

use super::super::{Input, Movement};
use crate::options::CameraOptions;

#[derive(Copy, Clone, Debug, PartialEq)]
/// Represents a free-fly camera oriented by yaw and pitch angles.
///
/// `front` is always derived from `(yaw, pitch)` once the first look input
/// has been processed. Until then it holds whatever was passed at
/// construction, unnormalized.
pub struct FlyCamera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    yaw: f32,
    pitch: f32,
    movement_speed: f32,
    mouse_sensitivity: f32,
    zoom: f32,
    constrain_pitch: bool,
}

impl FlyCamera {
    pub const DEFAULT_YAW: f32 = -90.0;
    pub const DEFAULT_PITCH: f32 = 0.0;
    pub const DEFAULT_SPEED: f32 = 2.5;
    pub const DEFAULT_SENSITIVITY: f32 = 0.1;
    pub const DEFAULT_ZOOM: f32 = 45.0;

    /// Pitch bound when constrained. Stops short of 90 degrees so `front`
    /// never becomes parallel to `up`.
    pub const PITCH_LIMIT: f32 = 89.0;
    pub const MIN_ZOOM: f32 = 1.0;
    pub const MAX_ZOOM: f32 = 70.0;

    /// Creates a camera from raw state. Nothing is normalized or validated.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        position: Vec3,
        up: Vec3,
        front: Vec3,
        yaw: f32,
        pitch: f32,
        movement_speed: f32,
        sensitivity: f32,
        zoom: f32,
    ) -> Self {
        tracing::debug!(
            ?position,
            ?front,
            ?up,
            yaw,
            pitch,
            movement_speed,
            sensitivity,
            zoom,
            "Camera created"
        );

        Self {
            position,
            front,
            up,
            yaw,
            pitch,
            movement_speed,
            mouse_sensitivity: sensitivity,
            zoom,
            constrain_pitch: false,
        }
    }

    /// Creates a camera with the default angles, speed, sensitivity and zoom.
    #[must_use]
    pub fn with_defaults(position: Vec3, up: Vec3, front: Vec3) -> Self {
        Self::new(
            position,
            up,
            front,
            Self::DEFAULT_YAW,
            Self::DEFAULT_PITCH,
            Self::DEFAULT_SPEED,
            Self::DEFAULT_SENSITIVITY,
            Self::DEFAULT_ZOOM,
        )
    }

    /// Creates a camera from configuration. Unlike `new`, the state is made
    /// consistent: `front` follows `(yaw, pitch)`, pitch is clamped when
    /// constrained and zoom is clamped to `[MIN_ZOOM, MAX_ZOOM]`.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        let pitch = if options.constrain_pitch {
            options.pitch.clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT)
        } else {
            options.pitch
        };
        let zoom = options.zoom.clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);
        if pitch != options.pitch || zoom != options.zoom {
            tracing::debug!(pitch, zoom, "Configured camera angles clamped");
        }

        let mut camera = Self::new(
            options.position.into(),
            options.up.into(),
            Self::front_from_angles(options.yaw, pitch),
            options.yaw,
            pitch,
            options.movement_speed,
            options.mouse_sensitivity,
            zoom,
        );
        camera.set_constrain_pitch(options.constrain_pitch);
        camera
    }

    #[must_use]
    pub const fn front(&self) -> Vec3 {
        self.front
    }

    #[must_use]
    pub const fn yaw(&self) -> f32 {
        self.yaw
    }

    #[must_use]
    pub const fn pitch(&self) -> f32 {
        self.pitch
    }

    #[must_use]
    pub const fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    pub fn set_movement_speed(&mut self, movement_speed: f32) {
        self.movement_speed = movement_speed;
    }

    #[must_use]
    pub const fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.mouse_sensitivity = sensitivity;
    }

    #[must_use]
    pub const fn constrain_pitch(&self) -> bool {
        self.constrain_pitch
    }

    /// Enables or disables the pitch clamp. Enabling it does not clamp the
    /// current pitch; the next look input does.
    pub fn set_constrain_pitch(&mut self, value: bool) {
        self.constrain_pitch = value;
    }

    /// Adds `offset` degrees to the field of view, clamped to
    /// `[MIN_ZOOM, MAX_ZOOM]`.
    pub fn process_scroll(&mut self, offset: f32) {
        let requested = self.zoom + offset;
        self.zoom = requested.clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);

        if !(Self::MIN_ZOOM..=Self::MAX_ZOOM).contains(&requested) {
            tracing::debug!(requested, zoom = self.zoom, "Zoom clamped");
        }
    }

    /// Moves the camera by `movement_speed * frame_time` along `movement`.
    pub fn process_key(&mut self, movement: Movement, frame_time: f32) {
        let velocity = self.movement_speed * frame_time;

        self.position = match movement {
            Movement::Forward => self.position + self.front * velocity,
            Movement::Backward => self.position - self.front * velocity,
            Movement::Left => self.position - self.strafe_axis() * velocity,
            Movement::Right => self.position + self.strafe_axis() * velocity,
            Movement::Up => self.position + self.up * velocity,
            Movement::Down => self.position - self.up * velocity,
        };
    }

    /// Turns the camera by pointer deltas scaled by the mouse sensitivity.
    ///
    /// A positive `y_offset` pitches up: callers working in screen space,
    /// where y grows downwards, must negate their delta first.
    pub fn process_mouse(&mut self, x_offset: f32, y_offset: f32) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        if self.constrain_pitch && self.pitch.abs() > Self::PITCH_LIMIT {
            let requested = self.pitch;
            self.pitch = requested.clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
            tracing::debug!(requested, pitch = self.pitch, "Pitch clamped");
        }

        self.front = Self::front_from_angles(self.yaw, self.pitch);
    }

    fn front_from_angles(yaw: f32, pitch: f32) -> Vec3 {
        let (sin_yaw, cos_yaw) = yaw.to_radians().sin_cos();
        let (sin_pitch, cos_pitch) = pitch.to_radians().sin_cos();

        Vec3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch).normalize()
    }

    // Recomputed on every call so strafing follows the latest look direction.
    // Zero when `front` and `up` are parallel.
    fn strafe_axis(&self) -> Vec3 {
        self.front.cross(self.up).normalize_or_zero()
    }
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::with_defaults(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO)
    }
}

impl super::Camera for FlyCamera {
    fn direction(&self) -> Vec3 {
        self.front
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn up(&self) -> Vec3 {
        self.up
    }

    fn right(&self) -> Vec3 {
        self.strafe_axis()
    }

    fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Right-handed look-at matrix from `position` towards `position + front`.
    fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    fn process_inputs(&mut self, inputs: &[Input], delta_seconds: f32) {
        for input in inputs {
            match *input {
                Input::Move(movement) => self.process_key(movement, delta_seconds),
                Input::Yaw(value) => self.process_mouse(value, 0.0),
                Input::Pitch(value) => self.process_mouse(0.0, value),
                Input::Zoom(value) => self.process_scroll(value),
            }
        }

        tracing::trace!(
            position = ?self.position,
            yaw = self.yaw,
            pitch = self.pitch,
            zoom = self.zoom,
            "Camera updated"
        );
    }
}
