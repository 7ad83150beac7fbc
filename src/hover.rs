use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::window::{CursorLeft, CursorMoved, PrimaryWindow};

use crate::input::ui_is_hovered;
use crate::orbit::{Body, Orbit};
use crate::viewpoint::Viewpoint;

/// The planet under the pointer, by registry index.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HoveredBody(pub Option<usize>);

/// Window pixels to normalized device coordinates: `[-1, 1]` on both axes, +Y up.
pub fn cursor_to_ndc(cursor: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        cursor.x / viewport.x * 2.0 - 1.0,
        -(cursor.y / viewport.y) * 2.0 + 1.0,
    )
}

/// Ray from the camera through a point given in normalized device coordinates.
pub fn pointer_ray(ndc: Vec2, camera: &Transform, fov: f32, aspect_ratio: f32) -> Option<Ray3d> {
    let half_height = (fov * 0.5).tan();
    let view_direction = Vec3::new(ndc.x * half_height * aspect_ratio, ndc.y * half_height, -1.0);
    let direction = Dir3::new(camera.rotation * view_direction).ok()?;
    Some(Ray3d::new(camera.translation, direction))
}

/// Ray parameter of the first intersection with a sphere in front of the ray origin.
pub fn ray_sphere_distance(ray: &Ray3d, center: Vec3, radius: f32) -> Option<f32> {
    let offset = ray.origin - center;
    let b = offset.dot(*ray.direction);
    let c = offset.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let root = discriminant.sqrt();
    [-b - root, -b + root].into_iter().find(|t| *t >= 0.0)
}

/// Closest sphere hit along the ray.
pub fn nearest_hit<T>(ray: &Ray3d, spheres: impl IntoIterator<Item = (T, Vec3, f32)>) -> Option<T> {
    spheres
        .into_iter()
        .filter_map(|(item, center, radius)| {
            ray_sphere_distance(ray, center, radius).map(|distance| (item, distance))
        })
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(item, _)| item)
}

pub struct Plugin;

impl Plugin {
    fn hover_bodies(
        mut cursor_moved_reader: MessageReader<CursorMoved>,
        mut cursor_left_reader: MessageReader<CursorLeft>,
        windows: Query<&Window, With<PrimaryWindow>>,
        cameras: Query<(&GlobalTransform, &Projection), With<Viewpoint>>,
        bodies: Query<(&Body, &GlobalTransform, &Orbit)>,
        ui_interactions: Query<&Interaction>,
        mut hovered: ResMut<HoveredBody>,
    ) -> Result {
        if ui_is_hovered(&ui_interactions) {
            cursor_moved_reader.clear();
            cursor_left_reader.clear();
            hovered.set_if_neq(HoveredBody(None));
            return Ok(());
        }
        let window = windows.single()?;
        let (camera_transform, projection) = cameras.single()?;
        let Projection::Perspective(perspective) = projection else {
            return Ok(());
        };
        let viewport = window.size();
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return Ok(());
        }
        let camera = camera_transform.compute_transform();

        for moved in cursor_moved_reader.read() {
            let ndc = cursor_to_ndc(moved.position, viewport);
            let hit = pointer_ray(ndc, &camera, perspective.fov, viewport.x / viewport.y)
                .and_then(|ray| {
                    nearest_hit(
                        &ray,
                        bodies
                            .iter()
                            .map(|(body, transform, orbit)| (body.0, transform.translation(), orbit.radius)),
                    )
                });
            hovered.set_if_neq(HoveredBody(hit));
        }

        if cursor_left_reader.read().next().is_some() {
            hovered.set_if_neq(HoveredBody(None));
        }
        Ok(())
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HoveredBody>()
            .add_systems(Update, Self::hover_bodies);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::PLANETS;
    use approx::assert_relative_eq;
    use bevy::ecs::message::Messages;

    const FOV: f32 = 75.0 * std::f32::consts::PI / 180.0;

    fn project_to_ndc(point: Vec3, camera: &Transform, fov: f32, aspect_ratio: f32) -> Vec2 {
        let view = camera.rotation.inverse() * (point - camera.translation);
        let half_height = (fov * 0.5).tan();
        Vec2::new(
            view.x / (-view.z * half_height * aspect_ratio),
            view.y / (-view.z * half_height),
        )
    }

    #[test]
    fn ndc_spans_the_viewport_with_y_up() {
        let viewport = Vec2::new(800.0, 600.0);
        assert_eq!(cursor_to_ndc(Vec2::ZERO, viewport), Vec2::new(-1.0, 1.0));
        assert_eq!(cursor_to_ndc(viewport, viewport), Vec2::new(1.0, -1.0));
        assert_eq!(cursor_to_ndc(viewport / 2.0, viewport), Vec2::ZERO);
    }

    #[test]
    fn center_ray_points_where_the_camera_looks() {
        let camera = Viewpoint::default().transform();
        let ray = pointer_ray(Vec2::ZERO, &camera, FOV, 16.0 / 9.0).unwrap();
        assert_relative_eq!(ray.direction.dot(*camera.forward()), 1.0, epsilon = 1e-5);
        assert_eq!(ray.origin, camera.translation);
    }

    #[test]
    fn spheres_behind_the_ray_are_missed() {
        let ray = Ray3d::new(Vec3::ZERO, Dir3::NEG_Z);
        assert_eq!(ray_sphere_distance(&ray, Vec3::new(0.0, 0.0, 5.0), 1.0), None);
        assert_eq!(ray_sphere_distance(&ray, Vec3::new(0.0, 3.0, -5.0), 1.0), None);
        assert_relative_eq!(
            ray_sphere_distance(&ray, Vec3::new(0.0, 0.0, -5.0), 1.0).unwrap(),
            4.0,
            epsilon = 1e-5
        );
    }

    #[test]
    fn nearest_sphere_wins() {
        let ray = Ray3d::new(Vec3::new(0.0, 0.0, 30.0), Dir3::NEG_Z);
        let spheres = [
            ("far", Vec3::new(0.0, 0.0, -10.0), 3.0),
            ("near", Vec3::new(0.0, 0.0, 10.0), 0.5),
            ("aside", Vec3::new(10.0, 0.0, 20.0), 1.0),
        ];
        assert_eq!(nearest_hit(&ray, spheres), Some("near"));
        assert_eq!(nearest_hit(&ray, spheres.into_iter().skip(2)), None);
    }

    #[test]
    fn pointer_on_a_projected_center_hits_that_planet() {
        let camera = Viewpoint::default().transform();
        let aspect_ratio = 1280.0 / 720.0;
        let earth = Vec3::new(9.0, 0.0, 0.0);

        let ndc = project_to_ndc(earth, &camera, FOV, aspect_ratio);
        let ray = pointer_ray(ndc, &camera, FOV, aspect_ratio).unwrap();
        let hit = nearest_hit(&ray, [(2usize, earth, PLANETS[2].radius)]);
        assert_eq!(hit, Some(2));

        let sky = pointer_ray(Vec2::new(0.0, 0.95), &camera, FOV, aspect_ratio).unwrap();
        assert_eq!(nearest_hit(&sky, [(2usize, earth, PLANETS[2].radius)]), None);
    }

    fn hover_app() -> (App, Entity) {
        let mut app = App::new();
        app.add_message::<CursorMoved>()
            .add_message::<CursorLeft>()
            .add_plugins(Plugin);

        let window = app.world_mut().spawn((Window::default(), PrimaryWindow)).id();
        let camera = Viewpoint::default();
        let camera_transform = camera.transform();
        app.world_mut().spawn((
            camera,
            GlobalTransform::from(camera_transform),
            Projection::Perspective(PerspectiveProjection {
                fov: FOV,
                ..default()
            }),
        ));
        for (index, angle) in [(2usize, 0.0f32), (4, std::f32::consts::PI)] {
            let orbit = Orbit::new(&PLANETS[index], angle);
            app.world_mut().spawn((
                Body(index),
                orbit,
                GlobalTransform::from_translation(orbit.position()),
            ));
        }
        (app, window)
    }

    fn move_cursor(app: &mut App, window: Entity, position: Vec2) {
        app.world_mut()
            .resource_mut::<Messages<CursorMoved>>()
            .write(CursorMoved {
                window,
                position,
                delta: None,
            });
        app.update();
    }

    #[test]
    fn hovering_updates_and_clears_the_hovered_body() {
        let (mut app, window) = hover_app();
        let viewport = Window::default().size();
        let camera = Viewpoint::default().transform();
        let ndc = project_to_ndc(Vec3::new(-14.0, 0.0, 0.0), &camera, FOV, viewport.x / viewport.y);
        let pixel = Vec2::new((ndc.x + 1.0) / 2.0 * viewport.x, (1.0 - ndc.y) / 2.0 * viewport.y);

        move_cursor(&mut app, window, pixel);
        assert_eq!(*app.world().resource::<HoveredBody>(), HoveredBody(Some(4)));

        move_cursor(&mut app, window, Vec2::new(5.0, 5.0));
        assert_eq!(*app.world().resource::<HoveredBody>(), HoveredBody(None));

        move_cursor(&mut app, window, pixel);
        app.world_mut()
            .resource_mut::<Messages<CursorLeft>>()
            .write(CursorLeft { window });
        app.update();
        assert_eq!(*app.world().resource::<HoveredBody>(), HoveredBody(None));
    }

    #[test]
    fn planets_under_a_ui_node_are_not_hovered() {
        let (mut app, window) = hover_app();
        let viewport = Window::default().size();
        let camera = Viewpoint::default().transform();
        let ndc = project_to_ndc(Vec3::new(-14.0, 0.0, 0.0), &camera, FOV, viewport.x / viewport.y);
        let pixel = Vec2::new((ndc.x + 1.0) / 2.0 * viewport.x, (1.0 - ndc.y) / 2.0 * viewport.y);

        move_cursor(&mut app, window, pixel);
        assert_eq!(*app.world().resource::<HoveredBody>(), HoveredBody(Some(4)));

        let panel = app.world_mut().spawn(Interaction::Hovered).id();
        move_cursor(&mut app, window, pixel);
        assert_eq!(*app.world().resource::<HoveredBody>(), HoveredBody(None));

        app.world_mut().entity_mut(panel).insert(Interaction::None);
        move_cursor(&mut app, window, pixel);
        assert_eq!(*app.world().resource::<HoveredBody>(), HoveredBody(Some(4)));
    }
}
