//! Code console component
//!
//! Left panel showing the Code segment, green on black.

use crate::ui::state::AppState;
use crate::ui::theme::Theme;

pub struct CodeConsole<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> CodeConsole<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .id_salt("code_console")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let mut code = self.state.code();
                let response = ui.add(
                    egui::TextEdit::multiline(&mut code)
                        .font(self.theme.code_font())
                        .text_color(self.theme.text_code)
                        .background_color(self.theme.bg_code)
                        .desired_width(f32::INFINITY)
                        .desired_rows(40)
                        .frame(false),
                );

                let label = format!("Code output: {}", self.state.code());
                response.widget_info(|| {
                    egui::WidgetInfo::labeled(egui::WidgetType::TextEdit, true, &label)
                });
            });
    }
}
