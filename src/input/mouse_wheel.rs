use bevy::ecs::message::{Message, MessageWriter};
use bevy::input::mouse::{AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;

/// Pixels of a high-resolution scroll that count as one wheel notch.
const PIXELS_PER_LINE: f32 = 100.0;

/// Wheel movement of the current frame, in notches. Positive zooms in.
#[derive(Message, Default, Debug, Clone, Copy, PartialEq)]
pub struct Zoom(pub f32);

pub struct Plugin;

impl Plugin {
    fn process_inputs(
        mouse_scroll: Res<AccumulatedMouseScroll>,
        mut zoom_writer: MessageWriter<Zoom>,
    ) {
        let notches = match mouse_scroll.unit {
            MouseScrollUnit::Line => mouse_scroll.delta.y,
            MouseScrollUnit::Pixel => mouse_scroll.delta.y / PIXELS_PER_LINE,
        };
        if notches != 0.0 {
            zoom_writer.write(Zoom(notches));
        }
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_message::<Zoom>()
            .add_systems(Update, Self::process_inputs);
    }
}
