use std::f32::consts::{FRAC_PI_4, PI};

use bevy::pbr::CascadeShadowConfigBuilder;
use bevy::prelude::*;
use bevy_third_person_camera::*;

use crate::config::BounceConfig;

/// Marks the fixed point the camera orbits. Balls animate around it.
#[derive(Component)]
pub struct Stage;

pub fn setup_stage(
    mut commands: Commands,
    config: Res<BounceConfig>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    let focus = Vec3::new(0.0, config.defaults.start_height * 0.5, 0.0);
    commands.spawn((
        Name::new("Stage"),
        Stage,
        ThirdPersonCameraTarget,
        Transform::from_translation(focus),
    ));

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: PI / 3.6,
            ..default()
        }),
        ThirdPersonCamera {
            // the form needs a free cursor
            cursor_lock_active: false,
            zoom: Zoom::new(5.0, 60.0),
            ..default()
        },
        Transform::from_xyz(0.0, focus.y, 25.0).looking_at(focus, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 15_000.,
            shadows_enabled: true,
            ..default()
        },
        CascadeShadowConfigBuilder {
            num_cascades: 3,
            maximum_distance: 60.0,
            ..default()
        }
        .build(),
        Transform::from_rotation(Quat::from_euler(EulerRot::ZYX, 0.0, 0.0, -FRAC_PI_4)),
    ));

    // ground sits under the ball's resting center
    commands.spawn((
        Name::new("Ground"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(40.0, 40.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.35, 0.38, 0.4),
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::from_xyz(0.0, -config.ball_radius, 0.0),
    ));
}
