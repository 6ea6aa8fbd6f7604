//! Narrative panel component
//!
//! Centre panel for the Other segment. The caller skips it while Other is
//! empty.

use crate::ui::state::AppState;
use crate::ui::theme::Theme;

pub struct NarrativePanel<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> NarrativePanel<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .id_salt("narrative_panel")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let mut other = self.state.other();
                let response = ui.add(
                    egui::TextEdit::multiline(&mut other)
                        .font(self.theme.narrative_font())
                        .text_color(self.theme.text_narrative)
                        .background_color(self.theme.bg_narrative)
                        .desired_width(f32::INFINITY)
                        .desired_rows(40)
                        .frame(false),
                );

                let label = format!("Narrative output: {}", self.state.other());
                response.widget_info(|| {
                    egui::WidgetInfo::labeled(egui::WidgetType::TextEdit, true, &label)
                });
            });
    }
}
