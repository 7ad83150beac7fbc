use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::input::actions::Action;

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub clear: Color,
    pub panel: Color,
    pub button: Color,
    pub text: Color,
    pub track: Color,
    pub fill: Color,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph of the toggle button: what pressing it switches to.
    pub fn glyph(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                clear: Color::srgb(0.05, 0.07, 0.16),
                panel: Color::srgba(0.95, 0.96, 1.0, 0.85),
                button: Color::srgb(0.82, 0.85, 0.95),
                text: Color::srgb(0.08, 0.09, 0.15),
                track: Color::srgb(0.75, 0.78, 0.86),
                fill: Color::srgb(0.25, 0.45, 0.95),
            },
            Theme::Dark => Palette {
                clear: Color::BLACK,
                panel: Color::srgba(0.08, 0.08, 0.12, 0.85),
                button: Color::srgb(0.2, 0.2, 0.28),
                text: Color::srgb(0.92, 0.92, 0.96),
                track: Color::srgb(0.25, 0.25, 0.32),
                fill: Color::srgb(1.0, 0.78, 0.25),
            },
        }
    }
}

/// UI nodes whose background follows the theme.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swatch {
    Panel,
    Button,
    Track,
    Fill,
}

impl Swatch {
    pub fn color(self, palette: &Palette) -> Color {
        match self {
            Swatch::Panel => palette.panel,
            Swatch::Button => palette.button,
            Swatch::Track => palette.track,
            Swatch::Fill => palette.fill,
        }
    }
}

/// Text whose color follows the theme.
#[derive(Component, Debug, Default)]
pub struct ThemedText;

#[derive(Component, Debug, Default)]
pub struct ThemeLabel;

pub struct Plugin;

impl Plugin {
    fn toggle_theme(mut action_reader: MessageReader<Action>, mut theme: ResMut<Theme>) {
        for action in action_reader.read() {
            if *action == Action::ToggleTheme {
                *theme = theme.toggled();
                info!("switched to {:?} theme", *theme);
            }
        }
    }

    fn apply_theme(
        theme: Res<Theme>,
        mut clear_color: ResMut<ClearColor>,
        mut swatches: Query<(&Swatch, &mut BackgroundColor)>,
        mut texts: Query<&mut TextColor, With<ThemedText>>,
        mut labels: Query<&mut Text, With<ThemeLabel>>,
    ) {
        let palette = theme.palette();
        clear_color.0 = palette.clear;
        for (swatch, mut background) in swatches.iter_mut() {
            background.0 = swatch.color(&palette);
        }
        for mut color in texts.iter_mut() {
            color.0 = palette.text;
        }
        for mut label in labels.iter_mut() {
            label.0 = theme.glyph().to_string();
        }
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClearColor>().add_systems(
            Update,
            (
                Self::toggle_theme,
                Self::apply_theme.run_if(resource_changed::<Theme>),
            )
                .chain(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_is_a_no_op() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn glyph_flips_with_the_theme() {
        assert_eq!(Theme::Light.glyph(), "🌙");
        assert_eq!(Theme::Dark.glyph(), "☀️");
        assert_ne!(Theme::Light.palette(), Theme::Dark.palette());
    }
}
