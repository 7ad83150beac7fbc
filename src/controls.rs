use bevy::input::{keyboard::KeyCode, mouse::MouseButton};
use bevy::prelude::*;

use crate::input::actions::Action;

#[derive(Resource, Debug)]
pub struct Controls {
    pub toggle_pause: ButtonInput,
    pub reset_speeds: ButtonInput,
    pub reset_camera: ButtonInput,
    pub toggle_theme: ButtonInput,
    pub rotate_camera: ButtonInput,
    pub pan_camera: ButtonInput,
}

impl Controls {
    pub fn new() -> Self {
        Controls {
            toggle_pause: ButtonInput::Keyboard(KeyCode::Space),
            reset_speeds: ButtonInput::Keyboard(KeyCode::KeyS),
            reset_camera: ButtonInput::Keyboard(KeyCode::KeyR),
            toggle_theme: ButtonInput::Keyboard(KeyCode::KeyT),
            rotate_camera: ButtonInput::Mouse(MouseButton::Left),
            pan_camera: ButtonInput::Mouse(MouseButton::Right),
        }
    }

    /// Bindings that fire a one-shot [`Action`].
    pub fn action_bindings(&self) -> [(&ButtonInput, Action); 4] {
        [
            (&self.toggle_pause, Action::TogglePause),
            (&self.reset_speeds, Action::ResetSpeeds),
            (&self.reset_camera, Action::ResetCamera),
            (&self.toggle_theme, Action::ToggleTheme),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonInput {
    Keyboard(KeyCode),
    Mouse(MouseButton),
}

impl ButtonInput {
    pub fn pressed(
        &self,
        keyboard: &bevy::input::ButtonInput<KeyCode>,
        mouse: &bevy::input::ButtonInput<MouseButton>,
    ) -> bool {
        match *self {
            ButtonInput::Keyboard(key_code) => keyboard.pressed(key_code),
            ButtonInput::Mouse(mouse_button) => mouse.pressed(mouse_button),
        }
    }

    pub fn just_pressed(
        &self,
        keyboard: &bevy::input::ButtonInput<KeyCode>,
        mouse: &bevy::input::ButtonInput<MouseButton>,
    ) -> bool {
        match *self {
            ButtonInput::Keyboard(key_code) => keyboard.just_pressed(key_code),
            ButtonInput::Mouse(mouse_button) => mouse.just_pressed(mouse_button),
        }
    }
}

pub struct Plugin;

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Controls::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bindings_dispatch_on_device() {
        let mut keyboard = bevy::input::ButtonInput::<KeyCode>::default();
        let mut mouse = bevy::input::ButtonInput::<MouseButton>::default();
        keyboard.press(KeyCode::Space);
        mouse.press(MouseButton::Right);

        let controls = Controls::new();
        assert!(controls.toggle_pause.just_pressed(&keyboard, &mouse));
        assert!(controls.pan_camera.pressed(&keyboard, &mouse));
        assert!(!controls.rotate_camera.pressed(&keyboard, &mouse));
        assert!(!controls.toggle_theme.pressed(&keyboard, &mouse));
    }
}
