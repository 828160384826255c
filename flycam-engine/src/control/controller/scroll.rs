use winit::event::{Event, MouseScrollDelta, WindowEvent};

use super::super::Input;

/// Pixel deltas (touchpads) are converted to wheel lines at this rate.
const PIXELS_PER_LINE: f32 = 30.0;

#[derive(Copy, Clone, Debug)]
/// Represents the state of a scroll wheel.
///
/// Scrolling up zooms in, i.e. narrows the field of view by `zoom_step`
/// degrees per line.
pub struct ScrollWheel {
    zoom_step: f32,
    lines: f32,
}

impl Default for ScrollWheel {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl ScrollWheel {
    #[must_use]
    pub const fn new(zoom_step: f32) -> Self {
        Self {
            zoom_step,
            lines: 0.0,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn handle_scroll(&mut self, delta: MouseScrollDelta) {
        self.lines += match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(position) => position.y as f32 / PIXELS_PER_LINE,
        };
    }
}

impl super::Controller for ScrollWheel {
    fn handle_event(&mut self, event: &Event<()>) {
        if let Event::WindowEvent {
            event: WindowEvent::MouseWheel { delta, .. },
            ..
        } = event
        {
            self.handle_scroll(*delta);
        }
    }

    fn fetch_input(&mut self) -> Vec<Input> {
        let lines = core::mem::take(&mut self.lines);
        if lines == 0.0 {
            return Vec::new();
        }
        vec![Input::Zoom(-lines * self.zoom_step)]
    }
}

#[cfg(test)]
mod tests {
    use winit::dpi::PhysicalPosition;

    use super::super::Controller;
    use super::*;

    #[test]
    fn wheel_up_zooms_in() {
        let mut wheel = ScrollWheel::new(2.0);
        wheel.handle_scroll(MouseScrollDelta::LineDelta(0.0, 1.0));
        wheel.handle_scroll(MouseScrollDelta::LineDelta(0.0, 2.0));

        assert_eq!(wheel.fetch_input(), vec![Input::Zoom(-6.0)]);
        assert!(wheel.fetch_input().is_empty());
    }

    #[test]
    fn pixel_deltas_are_converted_to_lines() {
        let mut wheel = ScrollWheel::default();
        wheel.handle_scroll(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -60.0)));
        assert_eq!(wheel.fetch_input(), vec![Input::Zoom(2.0)]);
    }

    #[test]
    fn horizontal_scroll_is_ignored() {
        let mut wheel = ScrollWheel::default();
        wheel.handle_scroll(MouseScrollDelta::LineDelta(3.0, 0.0));
        assert!(wheel.fetch_input().is_empty());
    }
}
