use crate::application::client::{ClientError, PredictionClient};
use crate::application::form::{
    FormOutcome, FormState, KILOMETER_RANGE, KILOMETER_STEP, POWER_RANGE, YEAR_RANGE,
    format_price, summary_lines,
};
use crate::domain::vehicle::{FeatureVector, FuelType, Gearbox, RepairStatus, VehicleType};
use crate::interfaces::components::Card;
use crate::interfaces::design_system::DesignSystem;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use tracing::{info, warn};

/// Messages delivered from background requests to the UI thread
enum UiEvent {
    Health(Result<(), ClientError>),
    Prediction {
        submitted: FeatureVector,
        result: Result<f64, ClientError>,
    },
}

/// Price prediction form.
///
/// HTTP calls run on a background tokio runtime; their results come back
/// over a channel polled once per frame, so the window stays responsive
/// while a request is in flight.
pub struct PricePredictorApp {
    app_name: String,
    form: FormState,
    client: PredictionClient,
    runtime: tokio::runtime::Handle,
    events_tx: Sender<UiEvent>,
    events_rx: Receiver<UiEvent>,
    pending: bool,
    backend_online: Option<bool>,
    outcome: Option<FormOutcome>,
}

impl PricePredictorApp {
    pub fn new(
        app_name: impl Into<String>,
        client: PredictionClient,
        runtime: tokio::runtime::Handle,
    ) -> Self {
        let (events_tx, events_rx) = crossbeam_channel::unbounded();
        Self {
            app_name: app_name.into(),
            form: FormState::default(),
            client,
            runtime,
            events_tx,
            events_rx,
            pending: false,
            backend_online: None,
            outcome: None,
        }
    }

    /// Calls `/health` once so the sidebar can show the backend status
    pub fn check_backend(&self, ctx: &egui::Context) {
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = client.health().await;
            let _ = tx.send(UiEvent::Health(result));
            ctx.request_repaint();
        });
    }

    fn submit(&mut self, ctx: &egui::Context) {
        self.form.clamp();
        let vector = self.form.to_feature_vector();
        info!(brand = %vector.brand, model = %vector.model, "Submitting prediction request");

        self.pending = true;
        self.outcome = None;

        let client = self.client.clone();
        let tx = self.events_tx.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = client.predict(&vector).await;
            let _ = tx.send(UiEvent::Prediction {
                submitted: vector,
                result,
            });
            ctx.request_repaint();
        });
    }

    fn poll_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                UiEvent::Health(result) => {
                    if let Err(e) = &result {
                        warn!(error = %e, "Prediction service is not reachable");
                    }
                    self.backend_online = Some(result.is_ok());
                }
                UiEvent::Prediction { submitted, result } => {
                    if result.is_ok() {
                        // A successful prediction proves the backend is up
                        self.backend_online = Some(true);
                    }
                    self.pending = false;
                    self.outcome = Some(FormOutcome::from_result(submitted, result));
                }
            }
        }
    }

    fn render_sidebar(&self, ui: &mut egui::Ui) {
        ui.heading("About");
        ui.add_space(DesignSystem::SPACING_SMALL);
        ui.label("Predicts the price of a used car from its characteristics using a machine learning model.");
        ui.add_space(DesignSystem::SPACING_MEDIUM);

        ui.label(egui::RichText::new("How to use").strong());
        ui.label("1. Fill in every field");
        ui.label("2. Press 'Predict price'");
        ui.label("3. Read the result");
        ui.add_space(DesignSystem::SPACING_MEDIUM);
        ui.separator();

        let (status, color) = DesignSystem::backend_status(self.backend_online);
        ui.horizontal(|ui| {
            ui.label("Backend:");
            ui.label(egui::RichText::new(status).color(color).small());
        });
        ui.label(
            egui::RichText::new(self.client.base_url())
                .color(DesignSystem::TEXT_MUTED)
                .small(),
        );
    }

    fn render_form(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        Card::new().title("VEHICLE CHARACTERISTICS").show(ui, |ui| {
            egui::Grid::new("vehicle_form")
                .num_columns(2)
                .spacing([DesignSystem::SPACING_LARGE, DesignSystem::SPACING_SMALL])
                .show(ui, |ui| {
                    ui.label("Vehicle type");
                    choice(ui, "vehicle_type", &mut self.form.vehicle_type, VehicleType::ALL, VehicleType::as_str);
                    ui.end_row();

                    ui.label("Gearbox");
                    choice(ui, "gearbox", &mut self.form.gearbox, Gearbox::ALL, Gearbox::as_str);
                    ui.end_row();

                    ui.label("Fuel type");
                    choice(ui, "fuel_type", &mut self.form.fuel_type, FuelType::ALL, FuelType::as_str);
                    ui.end_row();

                    ui.label("Repaired after damage");
                    choice(ui, "repaired", &mut self.form.repaired, RepairStatus::ALL, RepairStatus::as_str);
                    ui.end_row();

                    ui.label("Registration year");
                    ui.add(egui::DragValue::new(&mut self.form.registration_year).range(YEAR_RANGE));
                    ui.end_row();

                    ui.label("Power (hp)");
                    ui.add(egui::DragValue::new(&mut self.form.power).range(POWER_RANGE));
                    ui.end_row();

                    ui.label("Mileage (km)");
                    ui.horizontal(|ui| {
                        if ui.small_button("−").clicked() {
                            self.form.kilometer -= KILOMETER_STEP;
                        }
                        ui.add(
                            egui::DragValue::new(&mut self.form.kilometer)
                                .range(KILOMETER_RANGE)
                                .speed(100.0),
                        );
                        if ui.small_button("+").clicked() {
                            self.form.kilometer += KILOMETER_STEP;
                        }
                    });
                    ui.end_row();

                    ui.label("Brand");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.form.brand)
                            .hint_text("e.g. volkswagen, opel, mercedes_benz"),
                    );
                    ui.end_row();

                    ui.label("Model");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.form.model)
                            .hint_text("e.g. golf, polo, 3er"),
                    );
                    ui.end_row();
                });

            ui.add_space(DesignSystem::SPACING_SMALL);
            ui.label(
                egui::RichText::new("Join multi-word names with an underscore, e.g. mercedes_benz")
                    .color(DesignSystem::TEXT_MUTED)
                    .small(),
            );
            self.form.clamp();

            ui.add_space(DesignSystem::SPACING_MEDIUM);
            ui.horizontal(|ui| {
                let enabled = !self.pending && self.form.is_complete();
                let button = egui::Button::new(egui::RichText::new("Predict price").strong())
                    .fill(DesignSystem::submit_fill(self.pending));
                if ui.add_enabled(enabled, button).clicked() {
                    self.submit(ctx);
                }
                if self.pending {
                    ui.spinner();
                    ui.label(egui::RichText::new("Waiting for the model...").color(DesignSystem::WARNING));
                }
            });
        });
    }

    fn render_outcome(&self, ui: &mut egui::Ui) {
        match &self.outcome {
            Some(FormOutcome::Priced { price, submitted }) => {
                Card::new()
                    .title("PREDICTION RESULT")
                    .accent(DesignSystem::SUCCESS)
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new("Predicted price")
                                .color(DesignSystem::TEXT_SECONDARY),
                        );
                        ui.label(DesignSystem::price_text(&format_price(*price)));
                        ui.add_space(DesignSystem::SPACING_MEDIUM);

                        ui.label(egui::RichText::new("Entered parameters").strong());
                        egui::Grid::new("submitted_parameters")
                            .num_columns(2)
                            .striped(true)
                            .show(ui, |ui| {
                                for (label, value) in summary_lines(submitted) {
                                    ui.label(egui::RichText::new(label).color(DesignSystem::TEXT_SECONDARY));
                                    ui.label(value);
                                    ui.end_row();
                                }
                            });
                    });
            }
            Some(FormOutcome::Failed { message }) => {
                Card::new()
                    .title("ERROR")
                    .accent(DesignSystem::DANGER)
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(message).color(DesignSystem::DANGER));
                    });
            }
            None => {}
        }
    }
}

/// Dropdown restricted to `options`
fn choice<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    id: &str,
    value: &mut T,
    options: &[T],
    label: fn(&T) -> &'static str,
) {
    egui::ComboBox::from_id_salt(id)
        .selected_text(label(value))
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(value, *option, label(option));
            }
        });
}

impl eframe::App for PricePredictorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_events();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(&self.app_name);
                ui.separator();
                ui.label(
                    egui::RichText::new("Used car price prediction")
                        .color(DesignSystem::TEXT_SECONDARY),
                );
            });
        });

        egui::SidePanel::right("about_panel")
            .default_width(DesignSystem::SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| self.render_sidebar(ui));

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.render_form(ui, ctx);
                    ui.add_space(DesignSystem::SPACING_LARGE);
                    self.render_outcome(ui);
                });
            });
    }
}
