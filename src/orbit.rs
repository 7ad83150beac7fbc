use bevy::ecs::message::{Message, MessageReader, MessageWriter};
use bevy::prelude::*;
use bevy::time::Real;
use std::f32::consts::TAU;

use crate::bodies::BodyDescriptor;
use crate::input::actions::Action;

/// Speeds are tuned as radians per frame at 60 frames per second.
pub const FRAME_RATE_NORMALIZATION: f32 = 60.0;
/// Self-rotation of every planet, radians per second.
pub const SPIN_RATE: f32 = 0.01;
const GLOW_AMPLITUDE: f64 = 0.05;
const GLOW_FREQUENCY: f64 = 1.0;

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub angle: f32,      // Current angle in radians, within one turn.
    pub speed: f32,      // Current angular speed, set by the user.
    pub base_speed: f32, // Speed the body was authored with.
    pub distance: f32,   // Radius of the orbit.
    pub radius: f32,     // Radius of the body itself.
}

impl Orbit {
    pub fn new(descriptor: &BodyDescriptor, angle: f32) -> Self {
        Self {
            angle,
            speed: descriptor.speed,
            base_speed: descriptor.speed,
            distance: descriptor.distance,
            radius: descriptor.radius,
        }
    }

    /// Position on the orbit, always derived from the angle.
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.angle.cos() * self.distance,
            0.0,
            self.angle.sin() * self.distance,
        )
    }

    /// Advances the angle by `speed · dt · 60`, kept within one turn so the step
    /// never drowns in single precision over long sessions.
    pub fn advance(&mut self, delta_secs: f32) {
        let step = self.speed * delta_secs * FRAME_RATE_NORMALIZATION;
        self.angle = (self.angle.rem_euclid(TAU) + step).rem_euclid(TAU);
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn reset_speed(&mut self) {
        self.speed = self.base_speed;
    }
}

/// Index of the body in [`crate::bodies::PLANETS`].
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Body(pub usize);

#[derive(Component, Debug, Default)]
pub struct SunGlow;

#[derive(Resource, Debug, Default)]
pub struct Simulation {
    pub paused: bool,
}

#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum SpeedCommand {
    Set { body: usize, speed: f32 },
    Reset { body: usize },
    ResetAll,
}

pub fn glow_scale(elapsed_secs: f64) -> f32 {
    (1.0 + GLOW_AMPLITUDE * (elapsed_secs * GLOW_FREQUENCY).sin()) as f32
}

fn is_running(simulation: Res<Simulation>) -> bool {
    !simulation.paused
}

pub struct Plugin;

impl Plugin {
    fn handle_actions(
        mut action_reader: MessageReader<Action>,
        mut simulation: ResMut<Simulation>,
        mut speed_writer: MessageWriter<SpeedCommand>,
    ) {
        for action in action_reader.read() {
            match action {
                Action::TogglePause => {
                    simulation.paused = !simulation.paused;
                    info!(
                        "animation {}",
                        if simulation.paused { "paused" } else { "resumed" }
                    );
                }
                Action::ResetSpeeds => {
                    speed_writer.write(SpeedCommand::ResetAll);
                }
                Action::ResetCamera | Action::ToggleTheme => {}
            }
        }
    }

    fn apply_speed_commands(
        mut command_reader: MessageReader<SpeedCommand>,
        mut query: Query<(&Body, &mut Orbit)>,
    ) {
        for command in command_reader.read() {
            for (body, mut orbit) in query.iter_mut() {
                match *command {
                    SpeedCommand::Set { body: index, speed } if body.0 == index => {
                        debug!("body {index} speed {:.3} -> {speed:.3}", orbit.speed);
                        orbit.set_speed(speed);
                    }
                    SpeedCommand::Reset { body: index } if body.0 == index => {
                        orbit.reset_speed();
                    }
                    SpeedCommand::ResetAll => orbit.reset_speed(),
                    _ => {}
                }
            }
            if *command == SpeedCommand::ResetAll {
                info!("orbital speeds reset");
            }
        }
    }

    fn tick_orbit(time: Res<Time>, mut query: Query<(&mut Transform, &mut Orbit)>) {
        let delta_secs = time.delta_secs();
        for (mut transform, mut orbit) in query.iter_mut() {
            orbit.advance(delta_secs);
            transform.translation = orbit.position();
            transform.rotate_y(SPIN_RATE * delta_secs);
        }
    }

    fn pulse_glow(time: Res<Time<Real>>, mut query: Query<&mut Transform, With<SunGlow>>) {
        let scale = glow_scale(time.elapsed_secs_f64());
        for mut transform in query.iter_mut() {
            transform.scale = Vec3::splat(scale);
        }
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Simulation>()
            .add_message::<SpeedCommand>()
            .add_systems(
                Update,
                (
                    Self::handle_actions,
                    Self::apply_speed_commands,
                    (Self::tick_orbit, Self::pulse_glow).run_if(is_running),
                )
                    .chain(),
            );
    }
}
