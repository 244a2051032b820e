use bevy::prelude::*;
use bevy_inspector_egui::bevy_egui::EguiContextPass;
pub mod bounce;
pub mod config;
pub mod host;
pub mod scene;
pub mod spawner;
pub mod ui;
pub use bounce::*;
use config::BounceConfig;
use spawner::{BounceOutcome, CreateBounce, spawn_bouncing_balls};
use ui::{BounceForm, draw_bounce_form, open_bounce_form, record_outcomes, reopen_on_hotkey};

/// Adds the bounce form and the systems that turn its requests into animated balls.
///
/// Uses the [`BounceConfig`] resource if one was inserted, the defaults otherwise.
/// Needs `EguiPlugin` for the form.
pub struct BouncePlugin;
impl Plugin for BouncePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BounceConfig>()
            .init_resource::<BounceForm>()
            .add_event::<CreateBounce>()
            .add_event::<BounceOutcome>()
            .add_systems(Startup, open_bounce_form)
            .add_systems(EguiContextPass, draw_bounce_form)
            .add_systems(
                Update,
                (
                    reopen_on_hotkey,
                    spawn_bouncing_balls,
                    record_outcomes.after(spawn_bouncing_balls),
                ),
            );
    }
}
