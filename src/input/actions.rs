use crate::controls;
use bevy::ecs::message::{Message, MessageWriter};
use bevy::input::{keyboard::KeyCode, mouse::MouseButton, ButtonInput};
use bevy::prelude::*;

/// One-shot user commands. Emitted by key bindings and by control panel buttons.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    TogglePause,
    ResetSpeeds,
    ResetCamera,
    ToggleTheme,
}

pub struct Plugin;

impl Plugin {
    fn process_inputs(
        controls: Res<controls::Controls>,
        keyboard_input: Res<ButtonInput<KeyCode>>,
        mouse_input: Res<ButtonInput<MouseButton>>,
        mut action_writer: MessageWriter<Action>,
    ) {
        for (binding, action) in controls.action_bindings() {
            if binding.just_pressed(&keyboard_input, &mouse_input) {
                action_writer.write(action);
            }
        }
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_message::<Action>()
            .add_systems(Update, Self::process_inputs);
    }
}
