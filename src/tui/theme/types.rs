use ratatui::style::Style;

/// Styling for every surface the browser draws.
///
/// Themes are plain data; the registry in this module's parent maps
/// names from configuration onto these values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub prompt: Style,
    pub input: Style,
    pub tabs: Style,
    pub tab_selected: Style,
    pub table_header: Style,
    pub row: Style,
    pub row_selected: Style,
    pub badge_public: Style,
    pub badge_private: Style,
    pub empty: Style,
    pub notice_info: Style,
    pub notice_error: Style,
    pub card_border: Style,
    pub code: Style,
}
