use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy::ui::RelativeCursorPosition;

use super::theme::{Swatch, Theme, ThemeLabel, ThemedText};
use crate::bodies::PLANETS;
use crate::input::actions::Action;
use crate::orbit::{Body, Orbit, Simulation, SpeedCommand};

pub const SLIDER_MIN: f32 = 0.0;
pub const SLIDER_MAX: f32 = 0.1;
pub const SLIDER_STEP: f32 = 0.001;
const TRACK_WIDTH: f32 = 160.0;
const TRACK_HEIGHT: f32 = 10.0;
const NAME_WIDTH: f32 = 70.0;
const FONT_SIZE: f32 = 14.0;

/// Slider position in `[0, 1]` to a speed, snapped to the slider step.
pub fn slider_value(fraction: f32) -> f32 {
    let raw = fraction.clamp(0.0, 1.0) * (SLIDER_MAX - SLIDER_MIN);
    let steps = (raw / SLIDER_STEP).round();
    (SLIDER_MIN + steps * SLIDER_STEP).clamp(SLIDER_MIN, SLIDER_MAX)
}

pub fn slider_fraction(speed: f32) -> f32 {
    ((speed - SLIDER_MIN) / (SLIDER_MAX - SLIDER_MIN)).clamp(0.0, 1.0)
}

pub fn speed_label(speed: f32) -> String {
    format!("{speed:.3}")
}

pub fn pause_label(paused: bool) -> &'static str {
    if paused {
        "▶️ Resume"
    } else {
        "⏸ Pause"
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct SpeedSlider {
    pub body: usize,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct SliderFill {
    pub body: usize,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct SpeedLabel {
    pub body: usize,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct ActionButton(pub Action);

#[derive(Component, Debug, Default)]
pub struct PauseLabel;

fn text(value: impl Into<String>, color: Color) -> impl Bundle {
    (
        Text::new(value),
        TextFont {
            font_size: FONT_SIZE,
            ..default()
        },
        TextColor(color),
        ThemedText,
    )
}

pub struct Plugin;

impl Plugin {
    fn spawn_panel(mut commands: Commands, theme: Res<Theme>) {
        let palette = theme.palette();
        commands
            .spawn((
                Name::new("Control panel"),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(12.0),
                    left: Val::Px(12.0),
                    flex_direction: FlexDirection::Column,
                    padding: UiRect::all(Val::Px(12.0)),
                    row_gap: Val::Px(6.0),
                    ..default()
                },
                BackgroundColor(palette.panel),
                Swatch::Panel,
            ))
            .with_children(|panel| {
                for (index, planet) in PLANETS.iter().enumerate() {
                    panel
                        .spawn(Node {
                            flex_direction: FlexDirection::Row,
                            align_items: AlignItems::Center,
                            column_gap: Val::Px(8.0),
                            ..default()
                        })
                        .with_children(|row| {
                            row.spawn((
                                text(planet.name, palette.text),
                                Node {
                                    width: Val::Px(NAME_WIDTH),
                                    ..default()
                                },
                            ));
                            row.spawn((
                                SpeedSlider { body: index },
                                Interaction::default(),
                                RelativeCursorPosition::default(),
                                Node {
                                    width: Val::Px(TRACK_WIDTH),
                                    height: Val::Px(TRACK_HEIGHT),
                                    ..default()
                                },
                                BackgroundColor(palette.track),
                                Swatch::Track,
                            ))
                            .with_child((
                                SliderFill { body: index },
                                Node {
                                    width: Val::Percent(slider_fraction(planet.speed) * 100.0),
                                    height: Val::Percent(100.0),
                                    ..default()
                                },
                                BackgroundColor(palette.fill),
                                Swatch::Fill,
                            ));
                            row.spawn((
                                SpeedLabel { body: index },
                                text(speed_label(planet.speed), palette.text),
                            ));
                        });
                }

                panel
                    .spawn(Node {
                        flex_direction: FlexDirection::Row,
                        column_gap: Val::Px(6.0),
                        margin: UiRect::top(Val::Px(6.0)),
                        ..default()
                    })
                    .with_children(|buttons| {
                        Self::spawn_button(
                            buttons,
                            Action::TogglePause,
                            (PauseLabel, text(pause_label(false), palette.text)),
                            palette.button,
                        );
                        Self::spawn_button(
                            buttons,
                            Action::ResetSpeeds,
                            text("Reset speeds", palette.text),
                            palette.button,
                        );
                        Self::spawn_button(
                            buttons,
                            Action::ResetCamera,
                            text("Reset camera", palette.text),
                            palette.button,
                        );
                        Self::spawn_button(
                            buttons,
                            Action::ToggleTheme,
                            (ThemeLabel, text(theme.glyph(), palette.text)),
                            palette.button,
                        );
                    });
            });
    }

    fn spawn_button(
        parent: &mut ChildSpawnerCommands,
        action: Action,
        label: impl Bundle,
        color: Color,
    ) {
        parent
            .spawn((
                Name::new(format!("{action:?} button")),
                Button,
                ActionButton(action),
                Node {
                    padding: UiRect::axes(Val::Px(10.0), Val::Px(5.0)),
                    ..default()
                },
                BackgroundColor(color),
                Swatch::Button,
            ))
            .with_child(label);
    }

    fn press_buttons(
        buttons: Query<(&Interaction, &ActionButton), Changed<Interaction>>,
        mut action_writer: MessageWriter<Action>,
    ) {
        for (interaction, button) in buttons.iter() {
            if *interaction == Interaction::Pressed {
                action_writer.write(button.0);
            }
        }
    }

    fn drag_sliders(
        sliders: Query<(&SpeedSlider, &Interaction, &RelativeCursorPosition)>,
        orbits: Query<(&Body, &Orbit)>,
        mut speed_writer: MessageWriter<SpeedCommand>,
    ) {
        for (slider, interaction, cursor) in sliders.iter() {
            if *interaction != Interaction::Pressed {
                continue;
            }
            let Some(normalized) = cursor.normalized else {
                continue;
            };
            // `normalized` is centered on the node, spanning -0.5..0.5.
            let speed = slider_value(normalized.x + 0.5);
            let unchanged = orbits
                .iter()
                .any(|(body, orbit)| body.0 == slider.body && orbit.speed == speed);
            if !unchanged {
                speed_writer.write(SpeedCommand::Set {
                    body: slider.body,
                    speed,
                });
            }
        }
    }

    fn sync_sliders(
        orbits: Query<(&Body, &Orbit), Changed<Orbit>>,
        mut fills: Query<(&SliderFill, &mut Node)>,
        mut labels: Query<(&SpeedLabel, &mut Text)>,
    ) {
        for (body, orbit) in orbits.iter() {
            for (fill, mut node) in fills.iter_mut() {
                let width = Val::Percent(slider_fraction(orbit.speed) * 100.0);
                if fill.body == body.0 && node.width != width {
                    node.width = width;
                }
            }
            for (label, mut text) in labels.iter_mut() {
                let value = speed_label(orbit.speed);
                if label.body == body.0 && text.0 != value {
                    text.0 = value;
                }
            }
        }
    }

    fn sync_pause_label(
        simulation: Res<Simulation>,
        mut labels: Query<&mut Text, With<PauseLabel>>,
    ) {
        for mut label in labels.iter_mut() {
            label.0 = pause_label(simulation.paused).to_string();
        }
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, Self::spawn_panel).add_systems(
            Update,
            (
                (Self::press_buttons, Self::drag_sliders),
                Self::sync_sliders,
                Self::sync_pause_label.run_if(resource_changed::<Simulation>),
            )
                .chain(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn slider_snaps_to_its_step() {
        assert_eq!(slider_value(0.0), 0.0);
        assert_eq!(slider_value(1.0), SLIDER_MAX);
        assert_relative_eq!(slider_value(0.5), 0.05, epsilon = 1e-6);
        assert_relative_eq!(slider_value(0.1234), 0.012, epsilon = 1e-6);
        assert_eq!(slider_value(-3.0), 0.0);
        assert_eq!(slider_value(7.0), SLIDER_MAX);
    }

    #[test]
    fn fraction_round_trips_through_the_initial_speeds() {
        for planet in PLANETS.iter() {
            assert_relative_eq!(slider_value(slider_fraction(planet.speed)), planet.speed, epsilon = 1e-6);
        }
    }

    #[test]
    fn labels_use_three_decimals() {
        assert_eq!(speed_label(0.05), "0.050");
        assert_eq!(speed_label(0.0), "0.000");
        assert_eq!(speed_label(0.018), "0.018");
        assert_eq!(pause_label(true), "▶️ Resume");
        assert_eq!(pause_label(false), "⏸ Pause");
    }
}
