pub mod fly;

use glam::{Mat4, Vec3};

/// Represents a camera.
///
/// The renderer only ever reads a camera through this trait: an eye
/// position, a view matrix and a field of view.
pub trait Camera {
    /// Returns the direction the camera is facing.
    fn direction(&self) -> Vec3;
    /// Returns the position of the camera.
    fn position(&self) -> Vec3;
    /// Returns the up vector of the camera.
    fn up(&self) -> Vec3;
    /// Returns the right vector of the camera.
    fn right(&self) -> Vec3;
    /// Returns the vertical field of view, in degrees.
    fn zoom(&self) -> f32;

    /// Returns the world to view space transform.
    fn view_matrix(&self) -> Mat4;

    /// Returns the view to clip space transform for the current zoom.
    fn projection_matrix(&self, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.zoom().to_radians(), aspect, near, far)
    }

    /// Processes the inputs and updates the camera.
    fn process_inputs(&mut self, inputs: &[super::Input], delta_seconds: f32);
}
