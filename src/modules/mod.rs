use eframe::egui;
pub mod image_converter;

pub trait EditorModule {
    fn ui(&mut self, ui: &mut egui::Ui, ctx: &egui::Context);
    fn get_title(&self) -> String;
}
