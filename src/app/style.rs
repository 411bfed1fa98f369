use eframe::egui::Color32;

pub const ROW_HEIGHT: f32 = 50.0;
pub const ROW_GAP: f32 = 6.0;
pub const CONTENT_PADDING: f32 = 12.0;
pub const ROW_ROUNDING: f32 = 8.0;

#[derive(Clone, Copy)]
pub struct PanelTheme {
    pub panel_bg: Color32,
    pub title_color: Color32,
    pub muted_text: Color32,
    pub url_text: Color32,
    pub row_bg: Color32,
    pub row_hover: Color32,
    pub row_dragging: Color32,
    pub row_border: Color32,
    pub company_row_bg: Color32,
    pub drop_hint: Color32,
    pub error_text: Color32,
}

impl Default for PanelTheme {
    fn default() -> Self {
        Self {
            panel_bg: Color32::from_rgb(14, 20, 31),
            title_color: Color32::from_rgb(242, 248, 255),
            muted_text: Color32::from_rgb(150, 164, 184),
            url_text: Color32::from_rgb(93, 180, 214),
            row_bg: Color32::from_rgba_premultiplied(24, 36, 50, 154),
            row_hover: Color32::from_rgba_premultiplied(35, 53, 74, 184),
            row_dragging: Color32::from_rgba_premultiplied(24, 36, 50, 77),
            row_border: Color32::from_rgba_premultiplied(147, 169, 194, 78),
            company_row_bg: Color32::from_rgba_premultiplied(28, 44, 60, 170),
            drop_hint: Color32::from_rgba_premultiplied(93, 214, 189, 186),
            error_text: Color32::from_rgb(240, 110, 110),
        }
    }
}
