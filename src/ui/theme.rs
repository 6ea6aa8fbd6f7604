//! Theme and styling for the assistant window
//!
//! Dark console palette: green-on-black code, cyan accents.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Vec2, Visuals};

/// Application theme configuration
#[derive(Clone, Debug)]
pub struct Theme {
    /// Accent used for labels, cursors and focus
    pub accent: Color32,
    /// Warning banner color
    pub warning: Color32,

    /// Window background
    pub bg_window: Color32,
    /// Frame around the code console
    pub bg_code_frame: Color32,
    pub bg_code: Color32,
    pub bg_narrative: Color32,
    pub bg_sidebar: Color32,
    pub bg_input: Color32,
    pub bg_intro: Color32,

    pub text_code: Color32,
    pub text_narrative: Color32,
    pub text_input: Color32,
    pub text_intro: Color32,
    pub text_muted: Color32,

    /// Width of the code console and of the sidebar
    pub side_width: f32,

    pub card_rounding: Rounding,

    /// Standard spacing
    pub spacing: f32,
    /// Large spacing
    pub spacing_lg: f32,
    /// Small spacing
    pub spacing_sm: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create the dark console theme
    pub fn dark() -> Self {
        Self {
            accent: Color32::from_rgb(0, 255, 224),   // #00ffe0
            warning: Color32::from_rgb(234, 179, 8),  // Yellow

            bg_window: Color32::from_rgb(15, 17, 23),     // #0f1117
            bg_code_frame: Color32::from_rgb(26, 26, 26), // #1a1a1a
            bg_code: Color32::BLACK,
            bg_narrative: Color32::from_rgb(17, 26, 34), // #111a22
            bg_sidebar: Color32::from_rgb(20, 25, 36),   // #141924
            bg_input: Color32::from_rgb(43, 43, 43),     // #2b2b2b
            bg_intro: Color32::from_rgb(15, 15, 15),     // #0f0f0f

            text_code: Color32::from_rgb(0, 255, 153),       // #00ff99
            text_narrative: Color32::from_rgb(240, 240, 240), // #f0f0f0
            text_input: Color32::WHITE,
            text_intro: Color32::from_rgb(0, 255, 204), // #00ffcc
            text_muted: Color32::from_rgb(156, 163, 175),

            side_width: 384.0,

            card_rounding: Rounding::same(4.0),

            spacing: 16.0,
            spacing_lg: 24.0,
            spacing_sm: 8.0,
        }
    }

    /// Apply this theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = Visuals::dark();

        visuals.panel_fill = self.bg_window;
        visuals.window_fill = self.bg_sidebar;
        visuals.extreme_bg_color = self.bg_input;
        visuals.text_cursor.stroke = Stroke::new(2.0, self.accent);

        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_narrative);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.accent);
        visuals.widgets.active.bg_fill = self.accent.gamma_multiply(0.6);

        visuals.selection.bg_fill = self.accent.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        ctx.set_visuals(visuals);

        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = Vec2::splat(self.spacing_sm);
        style.spacing.button_padding = Vec2::new(self.spacing, self.spacing_sm);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            FontId::new(16.0, FontFamily::Monospace),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            FontId::new(14.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Monospace,
            FontId::new(14.0, FontFamily::Monospace),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            FontId::new(14.0, FontFamily::Proportional),
        );

        ctx.set_style(style);
    }

    /// Font for the code console
    pub fn code_font(&self) -> FontId {
        FontId::new(14.0, FontFamily::Monospace)
    }

    /// Font for the narrative panel
    pub fn narrative_font(&self) -> FontId {
        FontId::new(15.0, FontFamily::Monospace)
    }

    /// Font for the sidebar headings
    pub fn label_font(&self) -> FontId {
        FontId::new(15.0, FontFamily::Monospace)
    }
}
