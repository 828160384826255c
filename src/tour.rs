use flycam_engine::control::controller::Controller;
use flycam_engine::control::{Input, Movement};

/// A canned sequence of inputs standing in for a user at the keyboard.
///
/// Each leg lasts a fixed number of frames and emits the same inputs every
/// frame, the way a held key or a steady mouse drag would.
pub struct Tour {
    legs: Vec<Leg>,
    frame: u32,
}

struct Leg {
    frames: u32,
    inputs: Vec<Input>,
}

impl Tour {
    #[must_use]
    pub fn frames(&self) -> u32 {
        self.legs.iter().map(|leg| leg.frames).sum()
    }
}

impl Default for Tour {
    fn default() -> Self {
        let leg = |frames, inputs: &[Input]| Leg {
            frames,
            inputs: inputs.to_vec(),
        };

        Self {
            legs: vec![
                leg(60, &[Input::Move(Movement::Forward)]),
                leg(30, &[Input::Yaw(30.0)]),
                leg(30, &[Input::Move(Movement::Left), Input::Pitch(10.0)]),
                leg(20, &[Input::Move(Movement::Up)]),
                leg(10, &[Input::Zoom(-1.5)]),
                leg(30, &[Input::Pitch(-40.0), Input::Move(Movement::Backward)]),
            ],
            frame: 0,
        }
    }
}

impl Controller for Tour {
    fn handle_event(&mut self, _event: &winit::event::Event<()>) {}

    fn fetch_input(&mut self) -> Vec<Input> {
        let mut start = 0;
        for leg in &self.legs {
            if self.frame < start + leg.frames {
                self.frame += 1;
                return leg.inputs.clone();
            }
            start += leg.frames;
        }
        Vec::new()
    }
}
