//! Graphical front end: a single fixed-size eframe window.

use eframe::egui;

use crate::core::Config;
use crate::generators::{PasswordGenerator, Result};
use crate::models::PasswordPolicy;

pub const WINDOW_TITLE: &str = "Password Generator";
const WINDOW_SIZE: [f32; 2] = [420.0, 220.0];
const MAX_LENGTH: usize = 128;

/// Widget state for the generator window.
pub struct GeneratorApp {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
    output: String,
    error: Option<String>,
}

impl Default for GeneratorApp {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl GeneratorApp {
    pub fn new(config: &Config) -> Self {
        Self {
            length: config.default_password_length,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_symbols: true,
            output: String::new(),
            error: None,
        }
    }

    /// Snapshot of the current widgets.
    pub fn policy(&self) -> PasswordPolicy {
        PasswordPolicy {
            length: self.length,
            include_uppercase: self.include_uppercase,
            include_lowercase: self.include_lowercase,
            include_digits: self.include_digits,
            include_symbols: self.include_symbols,
        }
    }

    pub fn on_generate(&mut self) {
        let policy = self.policy();
        self.show(PasswordGenerator::new().generate_password(&policy));
    }

    fn show(&mut self, result: Result<String>) {
        match result {
            Ok(password) => {
                self.output = password;
                self.error = None;
            }
            Err(e) => {
                log::debug!("Generation failed: {}", e);
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    fn error_dialog(&mut self, ctx: &egui::Context) {
        let Some(message) = self.error.as_deref() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.dismiss_error();
        }
    }
}

impl eframe::App for GeneratorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            // modal: the form is frozen while the error dialog is open
            ui.set_enabled(self.error.is_none());

            egui::Grid::new("policy")
                .num_columns(2)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Length:");
                    ui.add(egui::DragValue::new(&mut self.length).clamp_range(0..=MAX_LENGTH));
                    ui.end_row();

                    ui.checkbox(&mut self.include_uppercase, "Uppercase");
                    ui.checkbox(&mut self.include_lowercase, "Lowercase");
                    ui.end_row();

                    ui.checkbox(&mut self.include_digits, "Digits");
                    ui.checkbox(&mut self.include_symbols, "Symbols");
                    ui.end_row();
                });

            ui.add_space(8.0);
            let generate = egui::Button::new("Generate");
            if ui.add_sized([ui.available_width(), 24.0], generate).clicked() {
                self.on_generate();
            }

            ui.add_space(6.0);
            ui.add(
                egui::TextEdit::multiline(&mut self.output.as_str())
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
        });

        self.error_dialog(ctx);
    }
}

/// Open the window and block until it is closed.
pub fn run(config: &Config) -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(WINDOW_SIZE[0], WINDOW_SIZE[1])),
        resizable: false,
        ..Default::default()
    };

    let app = GeneratorApp::new(config);
    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |_cc| Box::new(app)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::GeneratorError;

    #[test]
    fn starts_from_configured_length() {
        let config = Config {
            default_password_length: 18,
            ..Config::default()
        };
        let app = GeneratorApp::new(&config);
        assert_eq!(app.policy(), PasswordPolicy::with_length(18));
        assert!(app.output().is_empty());
        assert!(app.error().is_none());
    }

    #[test]
    fn generate_fills_output() {
        let mut app = GeneratorApp::default();
        app.include_symbols = false;
        app.on_generate();

        assert_eq!(app.output().len(), 12);
        assert!(app.output().chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(app.error().is_none());
    }

    #[test]
    fn invalid_policy_opens_error_and_keeps_output() {
        let mut app = GeneratorApp::default();
        app.on_generate();
        let previous = app.output().to_string();

        app.include_uppercase = false;
        app.include_lowercase = false;
        app.include_digits = false;
        app.include_symbols = false;
        app.on_generate();

        assert_eq!(app.error(), Some("invalid policy: at least one character set must be enabled"));
        assert_eq!(app.output(), previous);

        app.dismiss_error();
        assert!(app.error().is_none());
    }

    #[test]
    fn zero_length_is_reported() {
        let mut app = GeneratorApp::default();
        app.length = 0;
        app.on_generate();
        assert_eq!(
            app.error(),
            Some(GeneratorError::InvalidPolicy("password length must be >= 1".to_string()).to_string().as_str())
        );
    }
}
