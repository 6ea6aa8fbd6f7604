//! UI components for the assistant window

mod code_console;
mod narrative_panel;
mod sidebar;
mod warning_dialog;

pub use code_console::CodeConsole;
pub use narrative_panel::NarrativePanel;
pub use sidebar::Sidebar;
pub use warning_dialog::WarningDialog;
