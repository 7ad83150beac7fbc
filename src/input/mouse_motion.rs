use crate::controls;
use bevy::ecs::message::{Message, MessageWriter};
use bevy::input::mouse::{AccumulatedMouseMotion, MouseButton};
use bevy::input::{keyboard::KeyCode, ButtonInput};
use bevy::prelude::*;

/// Mouse motion of the current frame, in logical pixels, split by camera gesture.
#[derive(Message, Default, Debug, Clone, Copy, PartialEq)]
pub struct Delta {
    pub rotate: Vec2,
    pub pan: Vec2,
}

pub struct Plugin;

impl Plugin {
    fn process_inputs(
        controls: Res<controls::Controls>,
        keyboard_input: Res<ButtonInput<KeyCode>>,
        mouse_input: Res<ButtonInput<MouseButton>>,
        mouse_motion: Res<AccumulatedMouseMotion>,
        ui_interactions: Query<&Interaction>,
        mut delta_writer: MessageWriter<Delta>,
    ) {
        if mouse_motion.delta == Vec2::ZERO || super::ui_is_pressed(&ui_interactions) {
            return;
        }

        let mut delta = Delta::default();
        if controls
            .rotate_camera
            .pressed(&keyboard_input, &mouse_input)
        {
            delta.rotate = mouse_motion.delta;
        }
        if controls.pan_camera.pressed(&keyboard_input, &mouse_input) {
            delta.pan = mouse_motion.delta;
        }

        if delta != Delta::default() {
            delta_writer.write(delta);
        }
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_message::<Delta>()
            .add_systems(Update, Self::process_inputs);
    }
}
