use bevy::prelude::*;

pub mod actions;
pub mod mouse_motion;
pub mod mouse_wheel;

pub struct Plugin;

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(actions::Plugin);
        app.add_plugins(mouse_motion::Plugin);
        app.add_plugins(mouse_wheel::Plugin);
    }
}

/// Camera gestures are ignored while a UI node (slider, button) is held.
pub(crate) fn ui_is_pressed(interactions: &Query<&Interaction>) -> bool {
    interactions
        .iter()
        .any(|interaction| *interaction == Interaction::Pressed)
}

/// Pointer is over a UI node, so the scene underneath should not react to it.
pub(crate) fn ui_is_hovered(interactions: &Query<&Interaction>) -> bool {
    interactions
        .iter()
        .any(|interaction| *interaction != Interaction::None)
}
