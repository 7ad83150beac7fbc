use bevy::prelude::*;

use super::theme::{Swatch, Theme, ThemedText};
use crate::bodies::PLANETS;
use crate::hover::HoveredBody;

#[derive(Component, Debug, Default)]
pub struct InfoPanel;

#[derive(Component, Debug, Default)]
pub struct InfoName;

#[derive(Component, Debug, Default)]
pub struct InfoDetails;

pub struct Plugin;

impl Plugin {
    fn spawn_info_panel(mut commands: Commands, theme: Res<Theme>) {
        let palette = theme.palette();
        commands
            .spawn((
                Name::new("Planet info"),
                InfoPanel,
                Node {
                    display: Display::None,
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    max_width: Val::Px(320.0),
                    flex_direction: FlexDirection::Column,
                    padding: UiRect::all(Val::Px(12.0)),
                    row_gap: Val::Px(4.0),
                    ..default()
                },
                BackgroundColor(palette.panel),
                Swatch::Panel,
            ))
            .with_children(|panel| {
                panel.spawn((
                    InfoName,
                    Text::default(),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(palette.text),
                    ThemedText,
                ));
                panel.spawn((
                    InfoDetails,
                    Text::default(),
                    TextFont {
                        font_size: 14.0,
                        ..default()
                    },
                    TextColor(palette.text),
                    ThemedText,
                ));
            });
    }

    fn show_hovered(
        hovered: Res<HoveredBody>,
        mut panels: Query<&mut Node, With<InfoPanel>>,
        mut names: Query<&mut Text, With<InfoName>>,
        mut details: Query<&mut Text, (With<InfoDetails>, Without<InfoName>)>,
    ) {
        let planet = hovered.0.and_then(|index| PLANETS.get(index));
        for mut node in panels.iter_mut() {
            node.display = if planet.is_some() {
                Display::Flex
            } else {
                Display::None
            };
        }
        let Some(planet) = planet else {
            return;
        };
        for mut name in names.iter_mut() {
            name.0 = planet.name.to_string();
        }
        for mut text in details.iter_mut() {
            text.0 = planet.description.to_string();
        }
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, Self::spawn_info_panel).add_systems(
            Update,
            Self::show_hovered.run_if(resource_changed::<HoveredBody>),
        );
    }
}
