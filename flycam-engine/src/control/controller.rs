//! This module contains the necessary trait used to handle different kind
//! of controllers, i.e. input sources.
//!
//! To implement a controller, simply create a struct with internal states and
//! implement the `Controller` trait for it.
//! Add it to the list of controllers in `FlyAppConfig` and it will be fed
//! every event the host forwards to `FlyApp::handle_event`.

pub mod keyboard;
pub mod mouse;
pub mod scroll;

/// Represents a controller.
///
/// A controller is responsible for handling events and
/// is used by structs that implement `Camera` to fetch inputs.
pub trait Controller {
    /// Handle an event, usually by filtering by event type and
    /// updating the controller's state accordingly.
    fn handle_event(&mut self, event: &winit::event::Event<()>);

    /// Fetch the inputs from the controller's state.
    ///
    /// Called once per frame, this will be used by the `Camera` to update
    /// its state.
    fn fetch_input(&mut self) -> Vec<super::Input>;
}
