use bevy::prelude::*;
use bevy_inspector_egui::bevy_egui::{EguiContexts, egui};

use crate::bounce::BounceAnimationRequest;
use crate::config::BounceConfig;
use crate::spawner::{BounceOutcome, CreateBounce};

pub const FORM_TITLE: &str = "Bounce Animation";
pub const REOPEN_KEY: KeyCode = KeyCode::F2;

#[derive(Debug, Clone, PartialEq)]
pub enum FormStatus {
    Created { name: String, keyframes: usize },
    Rejected(String),
}

/// The single parameter window. Opening it again throws the old state away.
#[derive(Resource, Debug, Default)]
pub struct BounceForm {
    pub open: bool,
    pub request: BounceAnimationRequest,
    pub status: Option<FormStatus>,
}

impl BounceForm {
    /// Closes any open instance and constructs a fresh one from `defaults`.
    pub fn reopen(&mut self, defaults: &BounceAnimationRequest) {
        *self = BounceForm {
            open: true,
            request: *defaults,
            status: None,
        };
    }

    pub fn record(&mut self, outcome: &BounceOutcome) {
        self.status = Some(match outcome {
            BounceOutcome::Created {
                name, keyframes, ..
            } => FormStatus::Created {
                name: name.clone(),
                keyframes: *keyframes,
            },
            BounceOutcome::Rejected(e) => FormStatus::Rejected(e.to_string()),
        });
    }
}

pub fn open_bounce_form(mut form: ResMut<BounceForm>, config: Res<BounceConfig>) {
    form.reopen(&config.defaults);
}

pub fn reopen_on_hotkey(
    keys: Res<ButtonInput<KeyCode>>,
    mut form: ResMut<BounceForm>,
    config: Res<BounceConfig>,
) {
    if keys.just_pressed(REOPEN_KEY) {
        form.reopen(&config.defaults);
    }
}

pub fn record_outcomes(mut outcomes: EventReader<BounceOutcome>, mut form: ResMut<BounceForm>) {
    for outcome in outcomes.read() {
        form.record(outcome);
    }
}

enum FormAction {
    Create,
    Reset,
}

pub fn draw_bounce_form(
    mut contexts: EguiContexts,
    mut form: ResMut<BounceForm>,
    config: Res<BounceConfig>,
    mut requests: EventWriter<CreateBounce>,
) {
    if !form.open {
        return;
    }
    let form = &mut *form;
    let mut open = true;
    let mut action = None;

    egui::Window::new(FORM_TITLE)
        .open(&mut open)
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            let request = &mut form.request;
            egui::Grid::new("bounce_fields")
                .num_columns(2)
                .show(ui, |ui| {
                    ui.label("Start height");
                    ui.add(
                        egui::DragValue::new(&mut request.start_height)
                            .speed(0.1)
                            .range(0.01..=10_000.0),
                    );
                    ui.end_row();

                    ui.label("Bounces");
                    ui.add(egui::DragValue::new(&mut request.num_bounces).range(0..=100));
                    ui.end_row();

                    ui.label("Bounce decay");
                    ui.add(
                        egui::DragValue::new(&mut request.bounce_decay)
                            .speed(0.01)
                            .range(0.0..=1.0),
                    );
                    ui.end_row();

                    ui.label("Squash/stretch");
                    ui.add(
                        egui::DragValue::new(&mut request.squash_stretch)
                            .speed(0.01)
                            .range(0.0..=1.0),
                    );
                    ui.end_row();

                    ui.label("Start frame");
                    ui.add(egui::DragValue::new(&mut request.start_frame));
                    ui.end_row();

                    ui.label("End frame");
                    ui.add(egui::DragValue::new(&mut request.end_frame));
                    ui.end_row();
                });

            ui.horizontal(|ui| {
                if ui.button("Create Bouncing Ball").clicked() {
                    action = Some(FormAction::Create);
                }
                if ui.button("Reset").clicked() {
                    action = Some(FormAction::Reset);
                }
            });

            match &form.status {
                Some(FormStatus::Created { name, keyframes }) => {
                    ui.label(format!("Created {name} with {keyframes} keyframes"));
                }
                Some(FormStatus::Rejected(message)) => {
                    ui.colored_label(egui::Color32::YELLOW, message);
                }
                None => {}
            }
        });

    match action {
        Some(FormAction::Create) => {
            requests.write(CreateBounce(form.request));
        }
        Some(FormAction::Reset) => form.reopen(&config.defaults),
        None => {}
    }
    if !open {
        form.open = false;
    }
}
