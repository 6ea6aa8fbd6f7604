//! Main application struct and eframe integration
//!
//! This module contains the JarvisApp that implements eframe::App.

use crate::ui::components::{CodeConsole, NarrativePanel, Sidebar, WarningDialog};
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, CentralPanel, SidePanel};
use std::time::Duration;
use tracing::info;

/// Repaint interval while a submission is in flight
const BUSY_REPAINT: Duration = Duration::from_millis(100);

/// Main assistant application
pub struct JarvisApp {
    state: AppState,
    theme: Theme,
}

impl JarvisApp {
    /// Create the application and apply the theme
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        let theme = Theme::dark();
        theme.apply(&cc.egui_ctx);
        Self { state, theme }
    }

    /// Create the application without an eframe context
    pub fn with_state(state: AppState) -> Self {
        Self {
            state,
            theme: Theme::dark(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Poll backend events and draw one frame
    pub fn show(&mut self, ctx: &egui::Context) {
        self.state.poll_events();

        self.show_code_console(ctx);
        self.show_sidebar(ctx);
        self.show_content(ctx);
        WarningDialog::new(&mut self.state, &self.theme).show(ctx);

        // Events arrive from the worker without input
        if self.state.is_busy() {
            ctx.request_repaint_after(BUSY_REPAINT);
        }
    }

    fn show_code_console(&mut self, ctx: &egui::Context) {
        SidePanel::left("code_console")
            .resizable(false)
            .exact_width(self.theme.side_width)
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_code_frame)
                    .inner_margin(self.theme.spacing_sm),
            )
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(self.theme.bg_code)
                    .rounding(self.theme.card_rounding)
                    .inner_margin(self.theme.spacing_sm)
                    .show(ui, |ui| {
                        CodeConsole::new(&self.state, &self.theme).show(ui);
                    });
            });
    }

    fn show_sidebar(&mut self, ctx: &egui::Context) {
        SidePanel::right("sidebar")
            .resizable(false)
            .exact_width(self.theme.side_width)
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_sidebar)
                    .inner_margin(egui::Margin::symmetric(20.0, 10.0)),
            )
            .show(ctx, |ui| {
                Sidebar::new(&mut self.state, &self.theme).show(ui);
            });
    }

    fn show_content(&mut self, ctx: &egui::Context) {
        let fill = if self.state.show_narrative() {
            self.theme.bg_narrative
        } else {
            self.theme.bg_window
        };

        CentralPanel::default()
            .frame(egui::Frame::none().fill(fill).inner_margin(self.theme.spacing))
            .show(ctx, |ui| {
                if self.state.show_narrative() {
                    NarrativePanel::new(&self.state, &self.theme).show(ui);
                }
            });
    }
}

impl eframe::App for JarvisApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Jarvis shutting down");
        self.state.shutdown();
    }
}
