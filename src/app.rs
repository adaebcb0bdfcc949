use eframe::egui;
use tracing::info;

use super::modules::{EditorModule, image_converter::ImageConverter};
use super::settings::{AppSettings, ThemePreference};
use super::style::{self, ThemeMode};

pub struct ImageConverterApp {
    active_module: Box<dyn EditorModule>,
    theme_mode: ThemeMode,
    theme_preference: ThemePreference,
}

fn system_theme(ctx: &egui::Context) -> ThemeMode {
    match ctx.theme() {
        egui::Theme::Dark => ThemeMode::Dark,
        egui::Theme::Light => ThemeMode::Light,
    }
}

fn resolve_theme(preference: ThemePreference, system: ThemeMode) -> ThemeMode {
    match preference {
        ThemePreference::System => system,
        ThemePreference::Light => ThemeMode::Light,
        ThemePreference::Dark => ThemeMode::Dark,
    }
}

impl ImageConverterApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = AppSettings::load();
        let theme_mode = resolve_theme(settings.theme_preference, system_theme(&cc.egui_ctx));
        style::apply_theme(&cc.egui_ctx, theme_mode);

        Self {
            active_module: Box::new(ImageConverter::new()),
            theme_mode,
            theme_preference: settings.theme_preference,
        }
    }

    fn set_theme_preference(&mut self, ctx: &egui::Context, preference: ThemePreference) {
        if self.theme_preference == preference {
            return;
        }
        info!("Theme preference set to {:?}", preference);
        self.theme_preference = preference;
        self.theme_mode = resolve_theme(preference, system_theme(ctx));
        style::apply_theme(ctx, self.theme_mode);

        AppSettings { theme_preference: preference }.save();
    }

    fn top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            egui::MenuBar::new().ui(ui, |ui| {
                ui.label(egui::RichText::new(self.active_module.get_title()).strong());
                ui.separator();
                ui.menu_button("Theme", |ui| {
                    for (preference, label) in [
                        (ThemePreference::System, "System"),
                        (ThemePreference::Light, "Light"),
                        (ThemePreference::Dark, "Dark"),
                    ] {
                        if ui.radio(self.theme_preference == preference, label).clicked() {
                            self.set_theme_preference(ctx, preference);
                            ui.close();
                        }
                    }
                });
            });
            ui.add_space(4.0);
        });
    }
}

impl eframe::App for ImageConverterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if matches!(self.theme_preference, ThemePreference::System) {
            let system = system_theme(ctx);
            if self.theme_mode != system {
                self.theme_mode = system;
                style::apply_theme(ctx, self.theme_mode);
            }
        }

        self.top_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.active_module.ui(ui, ctx);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_preference_overrides_system() {
        assert_eq!(resolve_theme(ThemePreference::Light, ThemeMode::Dark), ThemeMode::Light);
        assert_eq!(resolve_theme(ThemePreference::Dark, ThemeMode::Light), ThemeMode::Dark);
        assert_eq!(resolve_theme(ThemePreference::System, ThemeMode::Dark), ThemeMode::Dark);
    }
}
