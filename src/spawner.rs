// src/spawner.rs
use bevy::animation::AnimationTarget;
use bevy::prelude::*;

use crate::bounce::{BounceAnimationRequest, BounceError};
use crate::config::BounceConfig;
use crate::host::{ClipHost, apply_bounce};

/// Ask for one bouncing ball.
#[derive(Event, Debug, Clone)]
pub struct CreateBounce(pub BounceAnimationRequest);

#[derive(Event, Debug, Clone)]
pub enum BounceOutcome {
    Created {
        entity: Entity,
        name: String,
        keyframes: usize,
        required_frames: f64,
    },
    Rejected(BounceError),
}

/// Gap between neighbouring balls, in ball radii.
pub const LANE_SPACING: f32 = 3.0;

/// Sideways position of the `index`th ball. The clip keys the ball's own
/// translation, so the offset lives on a parent entity.
pub fn lane_offset(index: u32, ball_radius: f32) -> Vec3 {
    Vec3::X * index as f32 * LANE_SPACING * ball_radius
}

/// A ball spawned from a [`CreateBounce`] request.
#[derive(Component, Debug)]
pub struct BouncingBall {
    pub request: BounceAnimationRequest,
    pub clip: Handle<AnimationClip>,
}

pub fn spawn_bouncing_balls(
    mut commands: Commands,
    mut requests: EventReader<CreateBounce>,
    mut outcomes: EventWriter<BounceOutcome>,
    config: Res<BounceConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut clips: ResMut<Assets<AnimationClip>>,
    mut graphs: ResMut<Assets<AnimationGraph>>,
    mut spawned: Local<u32>,
) {
    for CreateBounce(request) in requests.read() {
        let name = format!("bouncing_ball_{}", *spawned);
        let mut host = ClipHost::new(config.frames_per_second, request.start_frame);
        let (target, animation) = match apply_bounce(&mut host, &name, request) {
            Ok(created) => created,
            Err(e) => {
                outcomes.write(BounceOutcome::Rejected(e));
                continue;
            }
        };
        let lane = commands
            .spawn((
                Name::new(format!("{name}_lane")),
                Transform::from_translation(lane_offset(*spawned, config.ball_radius)),
                Visibility::default(),
            ))
            .id();
        *spawned += 1;

        let clip = clips.add(host.build_clip(&target));
        let (graph, node_index) = AnimationGraph::from_clip(clip.clone());
        let mut player = AnimationPlayer::default();
        player.play(node_index).repeat();

        let entity = commands
            .spawn((
                target.name.clone(),
                BouncingBall {
                    request: *request,
                    clip,
                },
                Mesh3d(meshes.add(Sphere::new(config.ball_radius))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgb(0.9, 0.3, 0.2),
                    ..default()
                })),
                Transform::from_xyz(0.0, request.start_height, 0.0),
                player,
                AnimationGraphHandle(graphs.add(graph)),
                ChildOf(lane),
            ))
            .id();
        commands.entity(entity).insert(AnimationTarget {
            id: target.id,
            player: entity,
        });

        info!(
            "spawned {} ({}) with {} keys over {:.2} frames",
            name,
            entity,
            host.key_count(),
            animation.required_frames
        );
        outcomes.write(BounceOutcome::Created {
            entity,
            name,
            keyframes: animation.keyframes.len(),
            required_frames: animation.required_frames,
        });
    }
}
