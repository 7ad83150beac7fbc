use bevy::asset::RenderAssetUsages;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::mesh::PrimitiveTopology;
use bevy::post_process::bloom::Bloom;
use bevy::prelude::*;
use bevy::render::view::Hdr;
use itertools::Itertools;
use rand::Rng;

use crate::bodies::{self, BodyDescriptor, PLANETS, SUN_GLOW_RADIUS, SUN_RADIUS, SUN_TEXTURE};
use crate::config::Config;
use crate::orbit::{Body, Orbit, SunGlow};
use crate::viewpoint::Viewpoint;

const SPHERE_SECTORS: u32 = 64;
const SPHERE_STACKS: u32 = 64;
const STAR_FIELD_HALF_EXTENT: f32 = 1000.0;
const CAMERA_NEAR: f32 = 0.1;
const CAMERA_FAR: f32 = 1000.0;

#[derive(Component, Debug, Default)]
pub struct StarField;

/// Uniformly random orbital phase in `[0, 2π)`.
pub fn initial_angle(rng: &mut impl Rng) -> f32 {
    rng.gen_range(0.0..std::f32::consts::TAU)
}

pub fn star_positions(count: usize, rng: &mut impl Rng) -> Vec<[f32; 3]> {
    (0..count)
        .map(|_| {
            std::array::from_fn(|_| {
                rng.gen_range(-STAR_FIELD_HALF_EXTENT..STAR_FIELD_HALF_EXTENT)
            })
        })
        .collect_vec()
}

fn sphere(meshes: &mut Assets<Mesh>, radius: f32) -> Handle<Mesh> {
    meshes.add(Sphere::new(radius).mesh().uv(SPHERE_SECTORS, SPHERE_STACKS))
}

pub struct Plugin;

impl Plugin {
    fn setup_lights(mut commands: Commands) {
        commands.insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: 250.0,
            ..Default::default()
        });

        commands.spawn((
            Name::new("Sun light"),
            PointLight {
                intensity: 2_000_000.0,
                range: 50.0,
                ..default()
            },
            Transform::from_translation(Vec3::ZERO),
        ));

        commands.spawn((
            Name::new("Fill light"),
            DirectionalLight {
                illuminance: 3_000.0,
                ..default()
            },
            Transform::from_xyz(1.0, 1.0, 1.0).looking_at(Vec3::ZERO, Vec3::Y),
        ));
    }

    fn setup_star_field(
        mut commands: Commands,
        mut meshes: ResMut<Assets<Mesh>>,
        mut materials: ResMut<Assets<StandardMaterial>>,
        config: Res<Config>,
    ) {
        if !config.show_stars || config.star_count == 0 {
            return;
        }

        let positions = star_positions(config.star_count, &mut rand::thread_rng());
        let mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::default())
            .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions);

        commands.spawn((
            Name::new("Star field"),
            StarField,
            Mesh3d(meshes.add(mesh)),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgba(1.0, 1.0, 1.0, 0.8),
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                ..default()
            })),
            Transform::default(),
        ));
    }

    fn setup_sun(
        mut commands: Commands,
        mut meshes: ResMut<Assets<Mesh>>,
        mut materials: ResMut<Assets<StandardMaterial>>,
        asset_server: Res<AssetServer>,
    ) {
        commands.spawn((
            Name::new("Sun"),
            Mesh3d(sphere(&mut meshes, SUN_RADIUS)),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color_texture: Some(asset_server.load(bodies::texture_path(SUN_TEXTURE))),
                unlit: true,
                ..default()
            })),
            Transform::default(),
        ));

        commands.spawn((
            Name::new("Sun glow"),
            SunGlow,
            Mesh3d(sphere(&mut meshes, SUN_GLOW_RADIUS)),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgba(1.0, 1.0, 0.0, 0.3),
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                ..default()
            })),
            Transform::default(),
        ));
    }

    fn setup_planets(
        mut commands: Commands,
        mut meshes: ResMut<Assets<Mesh>>,
        mut materials: ResMut<Assets<StandardMaterial>>,
        asset_server: Res<AssetServer>,
    ) {
        let mut rng = rand::thread_rng();
        for (index, descriptor) in PLANETS.iter().enumerate() {
            let orbit = Orbit::new(descriptor, initial_angle(&mut rng));
            commands.spawn(Self::planet(
                index,
                descriptor,
                orbit,
                &mut meshes,
                &mut materials,
                &asset_server,
            ));
        }
        info!("spawned the sun and {} planets", PLANETS.len());
    }

    fn planet(
        index: usize,
        descriptor: &BodyDescriptor,
        orbit: Orbit,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
        asset_server: &AssetServer,
    ) -> impl Bundle {
        (
            Name::new(descriptor.name),
            Body(index),
            orbit,
            Mesh3d(sphere(meshes, descriptor.radius)),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color_texture: Some(asset_server.load(descriptor.texture_path())),
                perceptual_roughness: 0.8,
                metallic: 0.1,
                ..default()
            })),
            Transform::from_translation(orbit.position()),
        )
    }

    fn setup_camera(mut commands: Commands, config: Res<Config>) {
        let viewpoint = Viewpoint::default();
        commands.spawn((
            Name::new("Camera"),
            Camera3d::default(),
            Hdr,
            Tonemapping::TonyMcMapface,
            Bloom::NATURAL,
            Projection::Perspective(PerspectiveProjection {
                fov: config.fov_degrees.to_radians(),
                near: CAMERA_NEAR,
                far: CAMERA_FAR,
                ..default()
            }),
            viewpoint.transform(),
            viewpoint,
        ));
    }
}

impl bevy::app::Plugin for Plugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                Self::setup_lights,
                Self::setup_star_field,
                Self::setup_sun,
                Self::setup_planets,
                Self::setup_camera,
            ),
        );
    }
}
