use std::time::Duration;

use client_core::{Outcome, RawInput, SubmissionController, SubmitAction};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{BiomarkerField, Classification};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;

const RISK_COLOR: egui::Color32 = egui::Color32::from_rgb(214, 143, 44);
const CLEAR_COLOR: egui::Color32 = egui::Color32::from_rgb(76, 175, 80);
const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(205, 92, 92);

fn outcome_headline(classification: Classification) -> &'static str {
    match classification {
        Classification::RiskDetected => "Risk profile detected",
        Classification::Clear => "Clear profile detected",
    }
}

fn outcome_summary(classification: Classification) -> &'static str {
    match classification {
        Classification::RiskDetected => {
            "Based on your biological data, the model predicts likely alcohol \
             and/or tobacco consumption."
        }
        Classification::Clear => {
            "Based on your biological data, the model finds no signs of alcohol \
             or tobacco consumption."
        }
    }
}

fn outcome_recommendation(classification: Classification) -> &'static str {
    match classification {
        Classification::RiskDetected => "Recommendation: consult a health professional.",
        Classification::Clear => "Keep maintaining a healthy lifestyle.",
    }
}

pub struct ScreeningApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    raw: RawInput,
    controller: SubmissionController,

    backend_ready: bool,
    status: String,
}

impl ScreeningApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            raw: RawInput::default(),
            controller: SubmissionController::new(),
            backend_ready: false,
            status: "Starting backend worker...".to_string(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::BackendReady => {
                    self.backend_ready = true;
                    self.status = "Ready".to_string();
                }
                UiEvent::BackendFailed(message) => {
                    self.backend_ready = false;
                    self.status = message;
                }
                UiEvent::Settled { attempt, result } => {
                    if self.controller.settle(attempt, result) {
                        self.status = "Analysis complete".to_string();
                    }
                }
            }
        }
    }

    fn try_submit(&mut self) {
        match self.controller.submit(&self.raw) {
            SubmitAction::Dispatch { attempt, payload } => {
                self.status = "Analyzing...".to_string();
                let queued = dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::Classify { attempt, payload },
                    &mut self.status,
                );
                if !queued {
                    // The worker never saw this attempt; unwind it so the
                    // form stays usable and the user can retry.
                    self.controller.abort(attempt);
                }
            }
            SubmitAction::Rejected => {
                self.status = "Fix the highlighted fields and retry".to_string();
            }
            // The submit button is disabled while pending; nothing to do.
            SubmitAction::AlreadyPending => {}
        }
    }

    fn render_form(&mut self, ui: &mut egui::Ui) {
        for field in BiomarkerField::ALL {
            ui.label(egui::RichText::new(field.label()).strong());
            let edit = egui::TextEdit::singleline(self.raw.get_mut(field))
                .hint_text(field.placeholder())
                .desired_width(f32::INFINITY);
            let response = ui.add(edit);
            if response.changed() {
                self.controller.clear_field_error(field);
            }
            if let Some(issue) = self.controller.field_errors().get(field) {
                ui.colored_label(ERROR_COLOR, issue.to_string());
            }
            ui.add_space(6.0);
        }

        let pending = self.controller.is_pending();
        let button_label = if pending { "Analyzing..." } else { "Analyze" };
        let button = egui::Button::new(egui::RichText::new(button_label).strong())
            .min_size(egui::vec2(ui.available_width(), 36.0));
        let enabled = !pending && self.backend_ready;
        let clicked = ui.add_enabled(enabled, button).clicked();
        if pending {
            ui.add(egui::Spinner::new());
        }
        if clicked {
            self.try_submit();
        }
    }

    fn render_outcome(&mut self, ui: &mut egui::Ui) {
        match self.controller.outcome() {
            Outcome::Idle => {}
            Outcome::Classification(classification) => {
                let accent = match classification {
                    Classification::RiskDetected => RISK_COLOR,
                    Classification::Clear => CLEAR_COLOR,
                };
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.heading(
                        egui::RichText::new(outcome_headline(classification)).color(accent),
                    );
                    ui.label(outcome_summary(classification));
                    ui.separator();
                    ui.small(outcome_recommendation(classification));
                });
            }
            Outcome::Failure(message) => {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.heading(egui::RichText::new("Error").color(ERROR_COLOR));
                    ui.label(message);
                });
            }
        }
    }
}

impl eframe::App for ScreeningApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        // Settlements arrive from the worker thread; keep polling while an
        // attempt is in flight.
        if self.controller.is_pending() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading("Biomarker screening");
            ui.label("Enter your lab values to run the consumption prediction model.");
            ui.add_space(12.0);

            self.render_form(ui);
            ui.add_space(12.0);
            self.render_outcome(ui);

            ui.add_space(12.0);
            ui.separator();
            ui.horizontal_wrapped(|ui| {
                ui.small("Status:");
                ui.small(egui::RichText::new(&self.status).weak());
            });
            ui.small(
                "This tool is informational only. Always consult a health professional \
                 for a medical diagnosis.",
            );
        });
    }
}
