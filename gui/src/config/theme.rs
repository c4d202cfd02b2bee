// Theme palettes and the stylesheet the cost tables are rendered with
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub background: String,
    pub foreground: String,
    pub header_background: String,
    pub border: String,
    pub accent: String,
    pub muted: String,
}

impl ThemePalette {
    pub fn default_dark() -> Self {
        Self {
            background: "#1e1e1e".to_string(),
            foreground: "#d1d4dc".to_string(),
            header_background: "#2a2a2a".to_string(),
            border: "#3c3c3c".to_string(),
            accent: "#007acc".to_string(),
            muted: "#8a8a8a".to_string(),
        }
    }

    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            foreground: "#181818".to_string(),
            header_background: "#f3f3f3".to_string(),
            border: "#dddbda".to_string(),
            accent: "#0176d3".to_string(),
            muted: "#706e6b".to_string(),
        }
    }

    /// Unknown names fall back to the light palette.
    pub fn by_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "dark" => Self::default_dark(),
            _ => Self::default_light(),
        }
    }

    pub fn stylesheet(&self) -> String {
        format!(
            "body {{ background: {bg}; color: {fg}; font-family: sans-serif; margin: 0; }}
.toolbar {{ display: flex; gap: 1rem; align-items: center; padding: 0.5rem 1rem; border-bottom: 1px solid {border}; }}
.toolbar a {{ color: {accent}; }}
.cost-table {{ border-collapse: collapse; width: 100%; }}
.cost-table th {{ background: {header_bg}; border-bottom: 1px solid {border}; padding: 0.25rem 0.5rem; }}
.cost-table td {{ padding: 0.25rem 0.5rem; white-space: nowrap; }}
.cost-table td.wrap {{ white-space: normal; }}
.cell-right {{ text-align: right; }}
.cell-left {{ text-align: left; }}
.text-bold {{ font-weight: bold; }}
.row-overall td {{ border-top: 2px solid {border}; padding-top: 0.5rem; }}
.section {{ border: 1px solid {border}; margin: 0.5rem 1rem; }}
.section-title {{ cursor: pointer; padding: 0.5rem; background: {header_bg}; display: flex; justify-content: space-between; }}
.sortable {{ cursor: pointer; color: {accent}; }}
.subtotal {{ color: {muted}; }}
button {{ background: {accent}; color: #ffffff; border: none; padding: 0.25rem 0.75rem; cursor: pointer; }}",
            bg = self.background,
            fg = self.foreground,
            header_bg = self.header_background,
            border = self.border,
            accent = self.accent,
            muted = self.muted,
        )
    }
}
