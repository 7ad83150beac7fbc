use bevy::ecs::message::MessageReader;
use bevy::math::Vec3;
use bevy::prelude::*;
use bevy::window::WindowResized;

use super::input;
use crate::input::actions::Action;

pub const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 10.0, 50.0);
pub const DEFAULT_TARGET: Vec3 = Vec3::ZERO;

const DAMPING_FACTOR: f32 = 0.05;
const MIN_DISTANCE: f32 = 20.0;
const MAX_DISTANCE: f32 = 100.0;
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;
const ROTATE_RADIANS_PER_PIXEL: f32 = 0.005;
const PAN_PER_PIXEL: f32 = 0.0015; // Scaled by the distance to the target.
const ZOOM_PER_NOTCH: f32 = 0.9;

/// Orbit camera: the camera sits on a sphere around `target` and always looks at it.
///
/// Input feeds velocities which are bled off by [`DAMPING_FACTOR`] every frame, so a
/// gesture keeps gliding briefly after the mouse stops.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Viewpoint {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub yaw_velocity: f32,
    pub pitch_velocity: f32,
    pub zoom_velocity: f32,
    pub pan_velocity: Vec3,
}

impl Default for Viewpoint {
    fn default() -> Self {
        Self::looking_from(DEFAULT_POSITION, DEFAULT_TARGET)
    }
}

impl Viewpoint {
    pub fn looking_from(position: Vec3, target: Vec3) -> Self {
        let offset = position - target;
        let distance = offset.length().max(f32::EPSILON);
        Self {
            target,
            yaw: f32::atan2(offset.x, offset.z),
            pitch: f32::asin((offset.y / distance).clamp(-1.0, 1.0)),
            distance,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
            zoom_velocity: 0.0,
            pan_velocity: Vec3::ZERO,
        }
    }

    pub fn translation(&self) -> Vec3 {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        self.target + self.distance * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.translation()).looking_at(self.target, Vec3::Y)
    }

    /// Back to the default pose with all damping momentum discarded.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn rotate(&mut self, pixels: Vec2) {
        self.yaw_velocity -= pixels.x * ROTATE_RADIANS_PER_PIXEL;
        self.pitch_velocity += pixels.y * ROTATE_RADIANS_PER_PIXEL;
    }

    pub fn pan(&mut self, pixels: Vec2) {
        let rotation = self.transform().rotation;
        let right = rotation * Vec3::X;
        let up = rotation * Vec3::Y;
        self.pan_velocity += (up * pixels.y - right * pixels.x) * PAN_PER_PIXEL * self.distance;
    }

    pub fn zoom(&mut self, notches: f32) {
        self.zoom_velocity += notches;
    }

    /// Applies one frame worth of the pending motion.
    pub fn step(&mut self) {
        self.yaw = (self.yaw + self.yaw_velocity * DAMPING_FACTOR)
            .rem_euclid(std::f32::consts::TAU);
        self.pitch =
            (self.pitch + self.pitch_velocity * DAMPING_FACTOR).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.distance = (self.distance
            * ZOOM_PER_NOTCH.powf(self.zoom_velocity * DAMPING_FACTOR))
        .clamp(MIN_DISTANCE, MAX_DISTANCE);
        self.target += self.pan_velocity * DAMPING_FACTOR;

        let decay = 1.0 - DAMPING_FACTOR;
        self.yaw_velocity *= decay;
        self.pitch_velocity *= decay;
        self.zoom_velocity *= decay;
        self.pan_velocity *= decay;
    }
}

pub struct Plugin;

impl Plugin {
    fn update_viewpoint(
        mut query_viewpoints: Query<&mut Viewpoint>,
        mut mouse_motion_delta_reader: MessageReader<input::mouse_motion::Delta>,
        mut zoom_reader: MessageReader<input::mouse_wheel::Zoom>,
        mut action_reader: MessageReader<Action>,
    ) {
        let mut rotate = Vec2::ZERO;
        let mut pan = Vec2::ZERO;
        for delta in mouse_motion_delta_reader.read() {
            rotate += delta.rotate;
            pan += delta.pan;
        }
        let zoom: f32 = zoom_reader.read().map(|zoom| zoom.0).sum();
        let reset = action_reader
            .read()
            .any(|action| *action == Action::ResetCamera);

        for mut viewpoint in query_viewpoints.iter_mut() {
            if reset {
                viewpoint.reset();
                info!("camera reset to {}", viewpoint.translation());
                continue;
            }
            viewpoint.rotate(rotate);
            viewpoint.pan(pan);
            viewpoint.zoom(zoom);
            viewpoint.step();
        }
    }

    fn update_camera(mut query_cameras: Query<(&Viewpoint, &mut Transform), Changed<Viewpoint>>) {
        for (viewpoint, mut transform) in query_cameras.iter_mut() {
            *transform = viewpoint.transform();
        }
    }

    fn handle_resize(
        mut resize_reader: MessageReader<WindowResized>,
        mut query_projections: Query<&mut Projection, With<Viewpoint>>,
    ) {
        let Some(resized) = resize_reader.read().last() else {
            return;
        };
        if resized.width <= 0.0 || resized.height <= 0.0 {
            return;
        }
        for mut projection in query_projections.iter_mut() {
            if let Projection::Perspective(perspective) = projection.as_mut() {
                perspective.aspect_ratio = resized.width / resized.height;
            }
        }
        debug!("viewport resized to {}x{}", resized.width, resized.height);
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (Self::update_viewpoint, Self::update_camera, Self::handle_resize).chain(),
        );
    }
}
