//! Warning dialog component

use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, RichText};

/// Modal-style window for input and speech warnings
pub struct WarningDialog<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> WarningDialog<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ctx: &egui::Context) {
        let Some(warning) = self.state.warning.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(RichText::new(warning.title.as_str()).color(self.theme.warning))
            .id(egui::Id::new("warning_dialog"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                let label = ui.label(warning.message.as_str());
                let accessible = format!("Warning: {}", warning.message);
                label.widget_info(|| {
                    egui::WidgetInfo::labeled(egui::WidgetType::Label, true, &accessible)
                });

                ui.add_space(self.theme.spacing_sm);
                let ok = ui.button("OK");
                ok.widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::Button, true, "Dismiss warning"));
                if ok.clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.state.dismiss_warning();
        }
    }
}
