use bevy::prelude::*;

mod bodies;
mod config;
mod controls;
mod cursor;
mod hover;
mod input;
mod orbit;
mod scene;
mod ui;
mod viewpoint;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "orrery".to_string(),
            canvas: Some("#solarCanvas".to_string()),
            fit_canvas_to_parent: true,
            ..Default::default()
        }),
        ..Default::default()
    }))
    .add_plugins(config::Plugin)
    .add_plugins(controls::Plugin)
    .add_plugins(input::Plugin)
    .add_plugins(scene::Plugin)
    .add_plugins(orbit::Plugin)
    .add_plugins(viewpoint::Plugin)
    .add_plugins(hover::Plugin)
    .add_plugins(cursor::Plugin)
    .add_plugins(ui::Plugin);

    app.run();
}
