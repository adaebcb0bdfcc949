use eframe::egui;

use super::ic_formats::{OutputFormat, picker_extensions};
use super::ic_main::Status;
use super::{ImageConverter, NotificationKind};
use crate::style::{self, ColorPalette, ThemeMode};

fn section_frame(
    ui: &mut egui::Ui,
    theme: ThemeMode,
    heading: &str,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    let (panel_bg, border_color, text_color) = if matches!(theme, ThemeMode::Dark) {
        (ColorPalette::ZINC_800, ColorPalette::ZINC_700, ColorPalette::ZINC_200)
    } else {
        (ColorPalette::GRAY_50, ColorPalette::GRAY_300, ColorPalette::GRAY_800)
    };

    egui::Frame::new()
        .fill(panel_bg)
        .stroke(egui::Stroke::new(1.0, border_color))
        .corner_radius(8.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(heading)
                    .size(14.0)
                    .strong()
                    .color(text_color)
            );
            ui.add_space(4.0);
            add_contents(ui);
        });
}

fn selection_label(ui: &mut egui::Ui, theme: ThemeMode, text: Option<String>, placeholder: &str) {
    let (chosen_color, weak_color) = if matches!(theme, ThemeMode::Dark) {
        (ColorPalette::ZINC_100, ColorPalette::ZINC_500)
    } else {
        (ColorPalette::GRAY_900, ColorPalette::GRAY_500)
    };

    let label = match text {
        Some(text) => egui::RichText::new(text).color(chosen_color),
        None => egui::RichText::new(placeholder).color(weak_color),
    };
    ui.add(egui::Label::new(label.size(12.0)).wrap());
}

impl ImageConverter {
    pub(super) fn render_input_section(&mut self, ui: &mut egui::Ui, theme: ThemeMode) {
        section_frame(ui, theme, "1. Choose Image File:", |ui| {
            if ui.button("Browse...").clicked() {
                let extensions = picker_extensions();
                let picked = rfd::FileDialog::new()
                    .set_title("Select image file")
                    .add_filter("Image files", extensions.as_slice())
                    .add_filter("All files", &["*"])
                    .pick_file();
                self.controller.set_input_path(picked);
            }

            let file_name = self
                .controller
                .session()
                .input_path()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().to_string());
            selection_label(ui, theme, file_name, "No image selected");
        });
    }

    pub(super) fn render_format_section(&mut self, ui: &mut egui::Ui, theme: ThemeMode) {
        section_frame(ui, theme, "2. Choose Output Format:", |ui| {
            let mut selected = self.controller.session().target_format();

            egui::ComboBox::from_id_salt("target_format")
                .selected_text(selected.label())
                .width(ui.available_width())
                .show_ui(ui, |ui| {
                    for format in OutputFormat::all() {
                        ui.selectable_value(&mut selected, format, format.label());
                    }
                });

            if selected != self.controller.session().target_format() {
                self.controller.set_target_format(selected);
            }
        });
    }

    pub(super) fn render_folder_section(&mut self, ui: &mut egui::Ui, theme: ThemeMode) {
        section_frame(ui, theme, "3. Choose Output Folder:", |ui| {
            if ui.button("Browse...").clicked() {
                let picked = rfd::FileDialog::new()
                    .set_title("Select output folder")
                    .pick_folder();
                self.controller.set_output_folder(picked);
            }

            let folder = self
                .controller
                .session()
                .output_folder()
                .map(|p| p.to_string_lossy().to_string());
            selection_label(ui, theme, folder, "No folder selected");
        });
    }

    pub(super) fn render_convert_button(&mut self, ui: &mut egui::Ui, theme: ThemeMode) {
        let enabled = self.controller.is_convert_enabled();

        let clicked = ui
            .vertical_centered(|ui| {
                ui.add_enabled_ui(enabled, |ui| style::primary_button(ui, "Convert Image", theme))
                    .inner
                    .clicked()
            })
            .inner;

        if clicked && enabled {
            self.request_conversion();
            ui.ctx().request_repaint();
        }
    }

    pub(super) fn render_status(&self, ui: &mut egui::Ui) {
        let status = self.controller.status();
        let color = match status {
            Status::Idle => return,
            Status::Converting => ColorPalette::BLUE_500,
            Status::Saved(_) => ColorPalette::GREEN_600,
            Status::Failed(_) => ColorPalette::RED_500,
        };

        ui.add(egui::Label::new(egui::RichText::new(status.text()).size(12.0).color(color)).wrap());
    }

    pub(super) fn render_notification(&mut self, ctx: &egui::Context, theme: ThemeMode) {
        let Some(notification) = &self.notification else {
            return;
        };

        let dark = matches!(theme, ThemeMode::Dark);
        let (bg_color, border_color, text_color, overlay_color) = if dark {
            (
                ColorPalette::ZINC_800,
                ColorPalette::ZINC_700,
                ColorPalette::ZINC_100,
                egui::Color32::from_rgba_premultiplied(0, 0, 0, 200),
            )
        } else {
            (
                egui::Color32::WHITE,
                ColorPalette::GRAY_300,
                ColorPalette::GRAY_900,
                egui::Color32::from_rgba_premultiplied(0, 0, 0, 150),
            )
        };

        let accent = match notification.kind {
            NotificationKind::Info => ColorPalette::GREEN_600,
            NotificationKind::Warning => ColorPalette::AMBER_500,
            NotificationKind::Error => ColorPalette::RED_500,
        };

        egui::Area::new(egui::Id::new("notification_overlay"))
            .fixed_pos(egui::pos2(0.0, 0.0))
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                let screen_rect = ctx.content_rect();
                ui.painter().rect_filled(screen_rect, 0.0, overlay_color);
            });

        let mut dismissed = false;
        egui::Window::new(notification.title.as_str())
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .order(egui::Order::Tooltip)
            .frame(egui::Frame::new()
                .fill(bg_color)
                .stroke(egui::Stroke::new(1.0, border_color))
                .corner_radius(8.0)
                .inner_margin(20.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&notification.title)
                            .size(16.0)
                            .strong()
                            .color(accent)
                    );
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(&notification.message)
                            .size(13.0)
                            .color(text_color)
                    );
                    ui.add_space(16.0);
                    if style::secondary_button(ui, "OK", theme).clicked() {
                        dismissed = true;
                    }
                });
            });

        let key_dismissed =
            ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Escape));
        if dismissed || key_dismissed {
            self.notification = None;
        }
    }
}
