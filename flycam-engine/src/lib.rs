#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

use glam::{Mat4, Vec3};

use control::camera::{fly::FlyCamera, Camera};
use control::controller::{keyboard::Keyboard, mouse::Mouse, scroll::ScrollWheel, Controller};
use options::ProjectionOptions;

pub mod control;
pub mod error;
pub mod options;

pub use error::FlycamError;
pub use options::Options;

/// What the renderer needs from the camera each frame: the `viewPos`,
/// `view` and `projection` uniforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameCamera {
    pub position: Vec3,
    pub view: Mat4,
    pub projection: Mat4,
    /// Vertical field of view in degrees.
    pub zoom: f32,
}

pub struct FlyAppConfig {
    pub camera: Box<dyn Camera>,
    pub controllers: Vec<Box<dyn Controller>>,
    pub projection: ProjectionOptions,
}

impl FlyAppConfig {
    /// A `FlyCamera` driven by keyboard, mouse and scroll wheel.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self {
            camera: Box::new(FlyCamera::from_options(&options.camera)),
            controllers: vec![
                Box::new(Keyboard::new(options.keybindings)),
                Box::new(Mouse::default()),
                Box::new(ScrollWheel::new(options.camera.zoom_step)),
            ],
            projection: options.projection,
        }
    }
}

/// Application context owning the camera and every input source feeding it.
///
/// The host forwards its window and device events to `handle_event` as they
/// arrive, then calls `frame` once per rendered frame.
pub struct FlyApp {
    camera: Box<dyn Camera>,
    controllers: Vec<Box<dyn Controller>>,
    projection: ProjectionOptions,
}

impl FlyApp {
    #[must_use]
    pub fn new(config: FlyAppConfig) -> Self {
        let FlyAppConfig {
            camera,
            controllers,
            projection,
        } = config;

        tracing::debug!(
            controllers = controllers.len(),
            ?projection,
            "Successfully initialized"
        );

        Self {
            camera,
            controllers,
            projection,
        }
    }

    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self::new(FlyAppConfig::from_options(options))
    }

    #[must_use]
    pub fn camera(&self) -> &dyn Camera {
        self.camera.as_ref()
    }

    pub fn camera_mut(&mut self) -> &mut dyn Camera {
        self.camera.as_mut()
    }

    /// Update the aspect ratio after the framebuffer was resized.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if height == 0 {
            // Minimized window, keep the last usable ratio.
            return;
        }
        #[allow(clippy::cast_precision_loss)]
        let aspect = width as f32 / height as f32;
        self.projection.aspect = aspect;
        tracing::debug!(width, height, aspect, "Aspect ratio updated");
    }

    pub fn handle_event(&mut self, event: &winit::event::Event<()>) {
        for controller in &mut self.controllers {
            controller.handle_event(event);
        }
    }

    /// Apply every input gathered since the previous frame, then return the
    /// camera state to render with.
    pub fn frame(&mut self, delta_seconds: f32) -> FrameCamera {
        let inputs = self
            .controllers
            .iter_mut()
            .flat_map(|controller| controller.fetch_input())
            .collect::<Vec<_>>();
        self.camera.process_inputs(&inputs, delta_seconds);

        self.frame_camera()
    }

    #[must_use]
    pub fn frame_camera(&self) -> FrameCamera {
        let ProjectionOptions { aspect, near, far } = self.projection;
        FrameCamera {
            position: self.camera.position(),
            view: self.camera.view_matrix(),
            projection: self.camera.projection_matrix(aspect, near, far),
            zoom: self.camera.zoom(),
        }
    }
}
