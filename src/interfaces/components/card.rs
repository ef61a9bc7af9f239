use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// A card container with optional title and accent border
#[derive(Default)]
pub struct Card {
    title: Option<String>,
    accent: Option<egui::Color32>,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Outlines the card in `color`, e.g. to mark a price or a failure
    pub fn accent(mut self, color: egui::Color32) -> Self {
        self.accent = Some(color);
        self
    }

    pub fn show<R>(
        self,
        ui: &mut egui::Ui,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> egui::InnerResponse<R> {
        let frame = match self.accent {
            Some(color) => DesignSystem::accent_card_frame(color),
            None => DesignSystem::card_frame(),
        };

        frame.show(ui, |ui| {
            if let Some(title) = &self.title {
                ui.label(DesignSystem::card_title(title));
                ui.add_space(DesignSystem::SPACING_SMALL);
            }

            add_contents(ui)
        })
    }
}
