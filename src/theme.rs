use serde::{Deserialize, Serialize};

/// Which icon colour table a theme draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub palette: Palette,
    pub font_family: String,
    pub mono_font_family: String,
    pub background: String,
    pub text_color: String,
    pub secondary_text_color: String,
    pub muted_text_color: String,
    pub faint_text_color: String,
    pub border_color: String,
    pub edge_label_color: String,
    pub edge_label_background: String,
    pub grid_dot_color: String,
    pub operator_fill: String,
    pub operator_stroke: String,
    pub operator_label_color: String,
    pub selection_fill: String,
    pub selection_stroke: String,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            palette: Palette::Light,
            font_family: "Söhne, ui-sans-serif, system-ui, -apple-system, sans-serif".to_string(),
            mono_font_family: "Söhne Mono, ui-monospace, Menlo, Monaco, monospace".to_string(),
            background: "#FFFFFF".to_string(),
            text_color: "#0F172A".to_string(),
            secondary_text_color: "#475569".to_string(),
            muted_text_color: "#94A3B8".to_string(),
            faint_text_color: "#CBD5E1".to_string(),
            border_color: "#E2E8F0".to_string(),
            edge_label_color: "#334155".to_string(),
            edge_label_background: "#F1F5F9".to_string(),
            grid_dot_color: "#CBD5E1".to_string(),
            operator_fill: "rgba(79,70,229,0.03)".to_string(),
            operator_stroke: "rgba(99,102,241,0.18)".to_string(),
            operator_label_color: "#6366F1".to_string(),
            selection_fill: "rgba(59,130,246,0.08)".to_string(),
            selection_stroke: "#3B82F6".to_string(),
        }
    }

    pub fn dark() -> Self {
        Self {
            palette: Palette::Dark,
            font_family: "Söhne, ui-sans-serif, system-ui, -apple-system, sans-serif".to_string(),
            mono_font_family: "Söhne Mono, ui-monospace, Menlo, Monaco, monospace".to_string(),
            background: "#0B1120".to_string(),
            text_color: "#F1F5F9".to_string(),
            secondary_text_color: "#94A3B8".to_string(),
            muted_text_color: "#64748B".to_string(),
            faint_text_color: "#475569".to_string(),
            border_color: "#1E293B".to_string(),
            edge_label_color: "#CBD5E1".to_string(),
            edge_label_background: "#1E293B".to_string(),
            grid_dot_color: "#334155".to_string(),
            operator_fill: "rgba(99,102,241,0.04)".to_string(),
            operator_stroke: "rgba(129,140,248,0.2)".to_string(),
            operator_label_color: "#818CF8".to_string(),
            selection_fill: "rgba(59,130,246,0.15)".to_string(),
            selection_stroke: "#3B82F6".to_string(),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" | "default" => Some(Self::light()),
            "dark" => Some(Self::dark()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
