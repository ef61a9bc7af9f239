use eframe::egui;

/// Look of the price prediction form: dark panels, a blue accent for the
/// call to action, green for a priced car and red for a failed request.
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(14, 17, 22);
    pub const BG_PANEL: egui::Color32 = egui::Color32::from_rgb(19, 23, 30);
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(25, 30, 38);
    pub const BG_INPUT: egui::Color32 = egui::Color32::from_rgb(11, 14, 19);

    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(56, 132, 255);
    pub const ACCENT_HOVER: egui::Color32 = egui::Color32::from_rgb(88, 152, 255);

    /// Predicted price and an online backend
    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(46, 204, 113);
    /// Failed request and an offline backend
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(235, 77, 75);
    /// Request in flight and a backend not checked yet
    pub const WARNING: egui::Color32 = egui::Color32::from_rgb(243, 156, 18);

    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(230, 236, 242);
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_gray(150);
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_gray(105);

    pub const BORDER: egui::Color32 = egui::Color32::from_rgb(44, 51, 61);

    // --- Metrics ---

    pub const ROUNDING: u8 = 6;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 14.0;
    pub const SPACING_LARGE: f32 = 22.0;

    /// Width of the dropdowns, number fields and text fields of the form
    pub const FORM_INPUT_WIDTH: f32 = 220.0;
    pub const SIDEBAR_WIDTH: f32 = 260.0;

    pub const CARD_TITLE_SIZE: f32 = 12.0;
    pub const PRICE_SIZE: f32 = 34.0;

    /// Dark visuals with form inputs set apart from the card background
    pub fn theme() -> egui::Visuals {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_PANEL;
        // Fill of text edits and drag values
        visuals.extreme_bg_color = Self::BG_INPUT;
        visuals.faint_bg_color = Self::BG_CARD;

        let rounding = egui::CornerRadius::same(Self::ROUNDING);
        for widget in [
            &mut visuals.widgets.noninteractive,
            &mut visuals.widgets.inactive,
            &mut visuals.widgets.hovered,
            &mut visuals.widgets.active,
        ] {
            widget.corner_radius = rounding;
        }

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER);
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.inactive.weak_bg_fill = Self::BG_INPUT;
        visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER);
        visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, Self::ACCENT_HOVER);
        visuals.widgets.active.bg_fill = Self::ACCENT_PRIMARY;

        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.35);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT_PRIMARY);

        visuals
    }

    /// Spacing tuned for a two-column label/input grid
    pub fn apply_style(ctx: &egui::Context) {
        ctx.set_visuals(Self::theme());
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(Self::SPACING_SMALL, Self::SPACING_SMALL);
            style.spacing.combo_width = Self::FORM_INPUT_WIDTH;
            style.spacing.text_edit_width = Self::FORM_INPUT_WIDTH;
            style.spacing.interact_size.y = 26.0;
        });
    }

    pub fn card_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(egui::CornerRadius::same(Self::ROUNDING))
            .stroke(egui::Stroke::new(1.0, Self::BORDER))
            .inner_margin(Self::SPACING_MEDIUM as i8)
    }

    /// Card outlined and softly lit in `accent`, used for the prediction
    /// result and for request errors
    pub fn accent_card_frame(accent: egui::Color32) -> egui::Frame {
        Self::card_frame()
            .stroke(egui::Stroke::new(1.5, accent))
            .shadow(egui::epaint::Shadow {
                offset: [0, 4],
                blur: 14,
                spread: 0,
                color: accent.linear_multiply(0.15),
            })
    }

    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_WINDOW)
            .inner_margin(egui::Margin::same(Self::SPACING_LARGE as i8))
    }

    pub fn card_title(title: &str) -> egui::RichText {
        egui::RichText::new(title)
            .size(Self::CARD_TITLE_SIZE)
            .color(Self::TEXT_SECONDARY)
            .strong()
    }

    /// Headline figure of the result card, e.g. `€12,345`
    pub fn price_text(formatted: &str) -> egui::RichText {
        egui::RichText::new(formatted)
            .size(Self::PRICE_SIZE)
            .strong()
            .monospace()
            .color(Self::SUCCESS)
    }

    /// Label and color of the backend indicator in the sidebar
    pub fn backend_status(online: Option<bool>) -> (&'static str, egui::Color32) {
        match online {
            Some(true) => ("● ONLINE", Self::SUCCESS),
            Some(false) => ("● OFFLINE", Self::DANGER),
            None => ("● CHECKING", Self::WARNING),
        }
    }

    /// Color of the predict button: dimmed while a request is in flight
    pub fn submit_fill(pending: bool) -> egui::Color32 {
        if pending {
            Self::ACCENT_PRIMARY.linear_multiply(0.4)
        } else {
            Self::ACCENT_PRIMARY
        }
    }
}
