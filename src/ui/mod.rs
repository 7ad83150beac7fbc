use bevy::prelude::*;

use crate::config::Config;
use crate::hover::HoveredBody;

pub mod info;
pub mod panel;
pub mod theme;

pub struct Plugin;

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        let theme = match app.world().get_resource::<Config>() {
            Some(config) if config.dark_theme => theme::Theme::Dark,
            _ => theme::Theme::Light,
        };
        app.insert_resource(theme)
            .init_resource::<HoveredBody>()
            .add_plugins(theme::Plugin)
            .add_plugins(panel::Plugin)
            .add_plugins(info::Plugin);
    }
}
