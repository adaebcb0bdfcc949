use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThemeMode {
    Light,
    Dark,
}

pub struct ColorPalette;

impl ColorPalette {
    pub const BLUE_400: egui::Color32 = egui::Color32::from_rgb(96, 165, 250);
    pub const BLUE_500: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);
    pub const BLUE_600: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);

    pub const SLATE_100: egui::Color32 = egui::Color32::from_rgb(241, 245, 249);
    pub const SLATE_200: egui::Color32 = egui::Color32::from_rgb(226, 232, 240);
    pub const SLATE_300: egui::Color32 = egui::Color32::from_rgb(203, 213, 225);

    pub const GRAY_50: egui::Color32 = egui::Color32::from_rgb(249, 250, 251);
    pub const GRAY_100: egui::Color32 = egui::Color32::from_rgb(243, 244, 246);
    pub const GRAY_200: egui::Color32 = egui::Color32::from_rgb(229, 231, 235);
    pub const GRAY_300: egui::Color32 = egui::Color32::from_rgb(209, 213, 219);
    pub const GRAY_400: egui::Color32 = egui::Color32::from_rgb(156, 163, 175);
    pub const GRAY_500: egui::Color32 = egui::Color32::from_rgb(107, 114, 128);
    pub const GRAY_700: egui::Color32 = egui::Color32::from_rgb(55, 65, 81);
    pub const GRAY_800: egui::Color32 = egui::Color32::from_rgb(31, 41, 55);
    pub const GRAY_900: egui::Color32 = egui::Color32::from_rgb(17, 24, 39);

    pub const ZINC_100: egui::Color32 = egui::Color32::from_rgb(244, 244, 245);
    pub const ZINC_200: egui::Color32 = egui::Color32::from_rgb(228, 228, 231);
    pub const ZINC_400: egui::Color32 = egui::Color32::from_rgb(161, 161, 170);
    pub const ZINC_500: egui::Color32 = egui::Color32::from_rgb(113, 113, 122);
    pub const ZINC_600: egui::Color32 = egui::Color32::from_rgb(82, 82, 91);
    pub const ZINC_700: egui::Color32 = egui::Color32::from_rgb(63, 63, 70);
    pub const ZINC_800: egui::Color32 = egui::Color32::from_rgb(39, 39, 42);
    pub const ZINC_900: egui::Color32 = egui::Color32::from_rgb(24, 24, 27);

    pub const GREEN_600: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
    pub const RED_500: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);
    pub const AMBER_500: egui::Color32 = egui::Color32::from_rgb(245, 158, 11);
}

/// Fill, border and text color for one widget state.
struct WidgetShade {
    fill: egui::Color32,
    weak_fill: egui::Color32,
    border: egui::Color32,
    text: egui::Color32,
}

/// Colors for inactive, hovered and pressed widgets, in that order.
struct ThemeColors {
    panel: egui::Color32,
    faint: egui::Color32,
    extreme: egui::Color32,
    noninteractive: WidgetShade,
    states: [WidgetShade; 3],
    selection: egui::Color32,
    link: egui::Color32,
}

fn theme_colors(theme: ThemeMode) -> ThemeColors {
    match theme {
        ThemeMode::Dark => ThemeColors {
            panel: ColorPalette::ZINC_900,
            faint: ColorPalette::ZINC_800,
            extreme: egui::Color32::from_rgb(12, 12, 15),
            noninteractive: WidgetShade {
                fill: ColorPalette::ZINC_800,
                weak_fill: egui::Color32::from_rgb(22, 22, 26),
                border: ColorPalette::ZINC_700,
                text: ColorPalette::SLATE_300,
            },
            states: [
                WidgetShade {
                    fill: egui::Color32::from_rgb(30, 30, 35),
                    weak_fill: ColorPalette::ZINC_800,
                    border: ColorPalette::ZINC_600,
                    text: ColorPalette::SLATE_200,
                },
                WidgetShade {
                    fill: egui::Color32::from_rgb(40, 40, 48),
                    weak_fill: egui::Color32::from_rgb(35, 35, 42),
                    border: ColorPalette::ZINC_500,
                    text: ColorPalette::SLATE_100,
                },
                WidgetShade {
                    fill: egui::Color32::from_rgb(50, 50, 60),
                    weak_fill: egui::Color32::from_rgb(45, 45, 55),
                    border: ColorPalette::ZINC_400,
                    text: egui::Color32::WHITE,
                },
            ],
            selection: egui::Color32::from_rgba_premultiplied(60, 120, 240, 100),
            link: ColorPalette::BLUE_400,
        },
        ThemeMode::Light => ThemeColors {
            panel: ColorPalette::GRAY_50,
            faint: ColorPalette::GRAY_100,
            extreme: egui::Color32::WHITE,
            noninteractive: WidgetShade {
                fill: egui::Color32::WHITE,
                weak_fill: ColorPalette::GRAY_50,
                border: ColorPalette::GRAY_300,
                text: ColorPalette::GRAY_700,
            },
            states: [
                WidgetShade {
                    fill: ColorPalette::GRAY_50,
                    weak_fill: ColorPalette::GRAY_100,
                    border: ColorPalette::GRAY_300,
                    text: ColorPalette::GRAY_800,
                },
                WidgetShade {
                    fill: ColorPalette::GRAY_100,
                    weak_fill: ColorPalette::GRAY_200,
                    border: ColorPalette::GRAY_400,
                    text: ColorPalette::GRAY_900,
                },
                WidgetShade {
                    fill: ColorPalette::GRAY_200,
                    weak_fill: ColorPalette::GRAY_300,
                    border: ColorPalette::GRAY_500,
                    text: egui::Color32::BLACK,
                },
            ],
            selection: egui::Color32::from_rgba_premultiplied(60, 120, 240, 80),
            link: ColorPalette::BLUE_600,
        },
    }
}

fn shade(visuals: &mut egui::style::WidgetVisuals, shade: &WidgetShade) {
    visuals.bg_fill = shade.fill;
    visuals.weak_bg_fill = shade.weak_fill;
    visuals.bg_stroke = egui::Stroke::new(1.0, shade.border);
    visuals.fg_stroke = egui::Stroke::new(1.0, shade.text);
    visuals.corner_radius = egui::CornerRadius::same(4);
}

pub fn apply_theme(ctx: &egui::Context, theme: ThemeMode) {
    let mut style = (*ctx.style()).clone();
    let colors = theme_colors(theme);

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 4.0);
    style.spacing.window_margin = egui::Margin::same(10);

    style.visuals.dark_mode = matches!(theme, ThemeMode::Dark);
    style.visuals.panel_fill = colors.panel;
    style.visuals.window_fill = colors.panel;
    style.visuals.faint_bg_color = colors.faint;
    style.visuals.extreme_bg_color = colors.extreme;

    shade(&mut style.visuals.widgets.noninteractive, &colors.noninteractive);
    let [inactive, hovered, active] = &colors.states;
    shade(&mut style.visuals.widgets.inactive, inactive);
    shade(&mut style.visuals.widgets.hovered, hovered);
    shade(&mut style.visuals.widgets.active, active);

    style.visuals.selection.bg_fill = colors.selection;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, ColorPalette::BLUE_600);
    style.visuals.hyperlink_color = colors.link;

    ctx.set_style(style);
}

fn styled_button(
    ui: &mut egui::Ui,
    text: &str,
    min_size: egui::Vec2,
    fill: egui::Color32,
    hover_fill: egui::Color32,
    border: egui::Stroke,
    text_color: egui::Color32,
) -> egui::Response {
    ui.scope(|ui| {
        let widgets = &mut ui.style_mut().visuals.widgets;
        for (state, bg) in [
            (&mut widgets.inactive, fill),
            (&mut widgets.hovered, hover_fill),
            (&mut widgets.active, fill),
        ] {
            state.bg_fill = bg;
            state.weak_bg_fill = bg;
            state.bg_stroke = border;
            state.fg_stroke = egui::Stroke::new(1.0, text_color);
        }

        ui.add(egui::Button::new(egui::RichText::new(text).size(15.0)).min_size(min_size))
    })
    .inner
}

/// Filled call-to-action button.
pub fn primary_button(ui: &mut egui::Ui, text: &str, _theme: ThemeMode) -> egui::Response {
    styled_button(
        ui,
        text,
        egui::vec2(200.0, 38.0),
        ColorPalette::BLUE_600,
        ColorPalette::BLUE_500,
        egui::Stroke::NONE,
        egui::Color32::WHITE,
    )
}

pub fn secondary_button(ui: &mut egui::Ui, text: &str, theme: ThemeMode) -> egui::Response {
    let (fill, border, text_color, hover_fill) = match theme {
        ThemeMode::Dark => (
            ColorPalette::ZINC_800,
            ColorPalette::ZINC_600,
            ColorPalette::SLATE_200,
            ColorPalette::ZINC_700,
        ),
        ThemeMode::Light => (
            egui::Color32::WHITE,
            ColorPalette::GRAY_300,
            ColorPalette::GRAY_800,
            ColorPalette::GRAY_50,
        ),
    };

    styled_button(
        ui,
        text,
        egui::vec2(90.0, 32.0),
        fill,
        hover_fill,
        egui::Stroke::new(1.0, border),
        text_color,
    )
}
