//! Sidebar component
//!
//! Model selector, input mode toggle, query input, submit button, status
//! line and the spoken intro.

use crate::integration::InputMode;
use crate::llm::prompts::layout_hint;
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, RichText};

pub struct Sidebar<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> Sidebar<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(mut self, ui: &mut egui::Ui) {
        ui.add_space(self.theme.spacing_sm);
        self.show_model_selector(ui);
        ui.add_space(self.theme.spacing_sm);
        self.show_mode_toggle(ui);

        ui.add_space(self.theme.spacing_lg);
        self.heading(ui, "Enter your query:");
        self.show_query_input(ui);
        ui.add_space(self.theme.spacing_sm);
        self.show_submit(ui);
        self.show_status(ui);

        ui.add_space(self.theme.spacing);
        self.heading(ui, "Spoken Intro:");
        self.show_intro(ui);
    }

    fn heading(&self, ui: &mut egui::Ui, text: &str) {
        ui.label(
            RichText::new(text)
                .font(self.theme.label_font())
                .strong()
                .color(self.theme.accent),
        );
    }

    fn show_model_selector(&mut self, ui: &mut egui::Ui) {
        let keys = self.state.model_keys.clone();
        let response = egui::ComboBox::from_id_salt("model_selector")
            .selected_text(self.state.model_key.as_str())
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for key in &keys {
                    ui.selectable_value(&mut self.state.model_key, key.clone(), key.as_str());
                }
            })
            .response;

        let label = format!("Model selector: {}", self.state.model_key);
        response.widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::ComboBox, true, &label));
    }

    fn show_mode_toggle(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.radio_value(&mut self.state.mode, InputMode::Text, "Text");
            ui.radio_value(&mut self.state.mode, InputMode::Speech, "Speech");
        });
    }

    fn show_query_input(&mut self, ui: &mut egui::Ui) {
        let text_edit = egui::TextEdit::multiline(&mut self.state.input_text)
            .id(egui::Id::new("query_input"))
            .font(self.theme.code_font())
            .text_color(self.theme.text_input)
            .background_color(self.theme.bg_input)
            .desired_rows(5)
            .desired_width(f32::INFINITY);

        let response = ui.add(text_edit);
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::TextEdit, true, "Query input")
        });
    }

    fn show_submit(&mut self, ui: &mut egui::Ui) {
        let enabled = !self.state.is_busy();
        let button = egui::Button::new(RichText::new("Submit").strong())
            .min_size(egui::vec2(ui.available_width(), 32.0));

        let response = ui
            .add_enabled(enabled, button)
            .on_hover_text(format!("Replies are split as {}", layout_hint()));
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, enabled, "Submit query")
        });

        if response.clicked() {
            self.state.submit();
        }
    }

    fn show_status(&self, ui: &mut egui::Ui) {
        if let Some(status) = self.state.status_text() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new(status).color(self.theme.text_muted));
            });
        }
    }

    fn show_intro(&self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .id_salt("spoken_intro")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let mut intro = self.state.intro();
                let response = ui.add(
                    egui::TextEdit::multiline(&mut intro)
                        .font(self.theme.code_font())
                        .text_color(self.theme.text_intro)
                        .background_color(self.theme.bg_intro)
                        .desired_rows(5)
                        .desired_width(f32::INFINITY),
                );

                let label = format!("Spoken intro: {}", self.state.intro());
                response.widget_info(|| {
                    egui::WidgetInfo::labeled(egui::WidgetType::TextEdit, true, &label)
                });
            });
    }
}
