use bevy::prelude::*;
use bevy::window::{CursorIcon, PrimaryWindow, SystemCursorIcon};

use crate::hover::HoveredBody;

pub fn cursor_icon(hovered: HoveredBody) -> SystemCursorIcon {
    match hovered.0 {
        Some(_) => SystemCursorIcon::Pointer,
        None => SystemCursorIcon::Default,
    }
}

pub struct Plugin;

impl Plugin {
    fn update_cursor_icon(
        mut commands: Commands,
        hovered: Res<HoveredBody>,
        query: Query<Entity, With<PrimaryWindow>>,
    ) -> Result {
        let primary_window = query.single()?;
        commands
            .entity(primary_window)
            .insert(CursorIcon::from(cursor_icon(*hovered)));
        Ok(())
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            Self::update_cursor_icon.run_if(resource_changed::<HoveredBody>),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_only_over_a_planet() {
        assert_eq!(cursor_icon(HoveredBody(Some(3))), SystemCursorIcon::Pointer);
        assert_eq!(cursor_icon(HoveredBody(None)), SystemCursorIcon::Default);
    }
}
