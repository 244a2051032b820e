use anyhow::Context;
use bevy::prelude::*;
use bevy_bounce::BouncePlugin;
use bevy_bounce::config::{BounceConfig, DEFAULT_CONFIG_PATH};
use bevy_bounce::scene::setup_stage;
use bevy_inspector_egui::bevy_egui::EguiPlugin;
use bevy_inspector_egui::quick::WorldInspectorPlugin;
use bevy_third_person_camera::*;

fn main() -> anyhow::Result<()> {
    let config = BounceConfig::load_or_default(DEFAULT_CONFIG_PATH)
        .with_context(|| format!("loading {DEFAULT_CONFIG_PATH}"))?;

    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        })
        .insert_resource(config)
        .add_plugins(BouncePlugin)
        .insert_resource(AmbientLight {
            color: Color::srgb(1.0, 0.95, 0.9),
            brightness: 300.0,
            ..default()
        })
        .add_plugins(WorldInspectorPlugin::new())
        .add_plugins(ThirdPersonCameraPlugin)
        .add_systems(Startup, setup_stage)
        .run();
    Ok(())
}
