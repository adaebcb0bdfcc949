use eframe::egui;
use std::path::Path;
use tracing::info;

use super::EditorModule;
use crate::style::ThemeMode;

pub mod ic_codec;
pub mod ic_error;
pub mod ic_formats;
pub mod ic_main;
mod ic_ui;

use ic_codec::ImageRsCodec;
use ic_error::ConvertError;
use ic_main::ConversionController;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationKind {
    Info,
    Warning,
    Error,
}

/// A modal message shown after a conversion attempt.
#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

impl Notification {
    fn success(output_path: &Path) -> Self {
        Self {
            kind: NotificationKind::Info,
            title: "Success".to_string(),
            message: format!("Image converted successfully!\nSaved as: {}", output_path.display()),
        }
    }

    fn failure(error: &ConvertError) -> Self {
        Self {
            kind: if error.is_warning() {
                NotificationKind::Warning
            } else {
                NotificationKind::Error
            },
            title: error.title().to_string(),
            message: error.dialog_message(),
        }
    }
}

pub struct ImageConverter {
    controller: ConversionController<ImageRsCodec>,
    notification: Option<Notification>,
    pending_convert: bool,
}

impl ImageConverter {
    pub fn new() -> Self {
        Self {
            controller: ConversionController::new(ImageRsCodec),
            notification: None,
            pending_convert: false,
        }
    }

    /// Shows "Converting..." now; the work itself runs on the next frame.
    fn request_conversion(&mut self) {
        info!("Convert requested");
        self.controller.mark_converting();
        self.pending_convert = true;
    }

    /// Blocks the UI thread until the codec returns.
    fn run_pending_conversion(&mut self) {
        if !std::mem::take(&mut self.pending_convert) {
            return;
        }
        self.notification = Some(match self.controller.convert() {
            Ok(path) => Notification::success(&path),
            Err(e) => Notification::failure(&e),
        });
    }
}

impl EditorModule for ImageConverter {
    fn ui(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        self.run_pending_conversion();
        let theme = if ui.visuals().dark_mode { ThemeMode::Dark } else { ThemeMode::Light };

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(4.0);
                self.render_input_section(ui, theme);

                ui.add_space(8.0);
                self.render_format_section(ui, theme);

                ui.add_space(8.0);
                self.render_folder_section(ui, theme);

                ui.add_space(12.0);
                self.render_convert_button(ui, theme);

                ui.add_space(6.0);
                self.render_status(ui);
            });

        self.render_notification(ctx, theme);
    }

    fn get_title(&self) -> String {
        "Image Converter".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::ic_formats::OutputFormat;
    use super::ic_main::Status;

    #[test]
    fn status_reads_converting_until_next_frame() {
        let input_dir = tempfile::tempdir().unwrap();
        let output_dir = tempfile::tempdir().unwrap();
        let input = input_dir.path().join("poster.png");
        image::RgbImage::new(4, 4).save(&input).unwrap();

        let mut module = ImageConverter::new();
        module.controller.set_input_path(Some(input));
        module.controller.set_output_folder(Some(output_dir.path().to_path_buf()));
        module.controller.set_target_format(OutputFormat::Bmp);

        module.request_conversion();
        assert_eq!(module.controller.status(), &Status::Converting);
        assert!(module.notification.is_none());
        assert!(!output_dir.path().join("poster.bmp").exists());

        module.run_pending_conversion();
        assert_eq!(module.controller.status(), &Status::Saved("poster.bmp".to_string()));
        assert!(output_dir.path().join("poster.bmp").exists());
        assert_eq!(module.notification.map(|n| n.kind), Some(NotificationKind::Info));

        module.notification = None;
        module.run_pending_conversion();
        assert!(module.notification.is_none());
    }

    #[test]
    fn missing_input_leaves_status_idle() {
        let mut module = ImageConverter::new();
        module.request_conversion();
        module.run_pending_conversion();

        assert_eq!(module.controller.status(), &Status::Idle);
        assert_eq!(module.notification.map(|n| n.kind), Some(NotificationKind::Warning));
    }
}
