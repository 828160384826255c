use winit::event::{DeviceEvent, Event};

use super::super::Input;

#[derive(Copy, Clone, Debug, Default)]
/// Represents the state of a mouse.
///
/// Raw motion is accumulated between frames. The vertical axis is flipped
/// so that moving the mouse up produces a positive pitch.
pub struct Mouse(f32, f32);

impl Mouse {
    #[allow(clippy::cast_possible_truncation)]
    pub fn handle_motion(&mut self, delta_x: f64, delta_y: f64) {
        self.0 += delta_x as f32;
        self.1 -= delta_y as f32;
    }
}

impl super::Controller for Mouse {
    fn handle_event(&mut self, event: &Event<()>) {
        if let Event::DeviceEvent {
            event: DeviceEvent::MouseMotion {
                delta: (delta_x, delta_y),
            },
            ..
        } = event
        {
            self.handle_motion(*delta_x, *delta_y);
        }
    }

    fn fetch_input(&mut self) -> Vec<Input> {
        let yaw = core::mem::take(&mut self.0);
        let pitch = core::mem::take(&mut self.1);

        let mut inputs = Vec::with_capacity(2);
        if yaw != 0.0 {
            inputs.push(Input::Yaw(yaw));
        }
        if pitch != 0.0 {
            inputs.push(Input::Pitch(pitch));
        }

        inputs
    }
}

#[cfg(test)]
mod tests {
    use super::super::Controller;
    use super::*;

    #[test]
    fn motion_is_accumulated_and_drained() {
        let mut mouse = Mouse::default();
        mouse.handle_motion(3.0, 4.0);
        mouse.handle_motion(2.0, -1.0);

        assert_eq!(mouse.fetch_input(), vec![Input::Yaw(5.0), Input::Pitch(-3.0)]);
        assert!(mouse.fetch_input().is_empty());
    }

    #[test]
    fn zero_axes_are_skipped() {
        let mut mouse = Mouse::default();
        mouse.handle_motion(0.0, 7.0);
        assert_eq!(mouse.fetch_input(), vec![Input::Pitch(-7.0)]);
    }

    #[test]
    fn device_motion_events_are_consumed() {
        let mut mouse = Mouse::default();
        let event = Event::DeviceEvent {
            device_id: winit::event::DeviceId::dummy(),
            event: DeviceEvent::MouseMotion { delta: (1.5, -2.0) },
        };
        mouse.handle_event(&event);
        assert_eq!(mouse.fetch_input(), vec![Input::Yaw(1.5), Input::Pitch(2.0)]);
    }
}
