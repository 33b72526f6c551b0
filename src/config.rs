use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fixed canvas of the static document renderer.
pub const DOCUMENT_WIDTH: f32 = 1600.0;
pub const DOCUMENT_HEIGHT: f32 = 1000.0;

/// Every size constant used by layout, routing and serialization.
///
/// Lengths, font sizes and stroke widths scale with [`LayoutConfig::scaled`];
/// ratios (`*_fraction`, `control_ratio`, `vertical_aspect`, opacities) do not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    pub icon_width: f32,
    pub icon_height: f32,
    pub pad_top: f32,
    pub pad_bottom: f32,
    pub customer_column_x: f32,
    pub customer_column_width: f32,
    pub column_gap: f32,
    pub external_column_width: f32,
    /// Space reserved right of the operator region (gap + external column + margin).
    pub right_reserve: f32,
    pub min_slot_height: f32,
    pub slot_gap: f32,
    pub ingress_fraction: f32,
    pub core_fraction: f32,
    pub egress_fraction: f32,

    pub title_y: f32,
    pub title_font_size: f32,
    pub subtitle_y: f32,
    pub subtitle_font_size: f32,
    pub zone_label_offset: f32,
    pub zone_label_font_size: f32,
    pub zone_label_letter_spacing: f32,
    pub footer_offset: f32,
    pub footer_font_size: f32,
    pub footer_letter_spacing: f32,

    pub label_offset: f32,
    pub label_font_size: f32,
    pub param_offset: f32,
    pub param_line_height: f32,
    pub param_font_size: f32,
    pub max_params: usize,
    /// Fraction of a font size that hangs below the baseline.
    pub descent_ratio: f32,

    pub align_threshold: f32,
    pub edge_margin: f32,
    pub control_ratio: f32,
    pub control_min: f32,
    pub vertical_aspect: f32,
    pub edge_stroke_width: f32,
    pub double_stroke_width: f32,
    pub halo_stroke_width: f32,
    pub halo_opacity: f32,
    pub edge_opacity: f32,
    pub dash_length: f32,
    pub dash_gap: f32,
    pub crossing_radius: f32,
    pub crossing_stroke_width: f32,

    pub edge_label_font_size: f32,
    pub pill_char_width: f32,
    pub pill_padding: f32,
    pub pill_height: f32,
    pub edge_label_baseline: f32,

    pub cloud_extra_width: f32,
    pub cloud_extra_height: f32,
    pub cloud_stroke_width: f32,
    pub cloud_dash_length: f32,
    pub cloud_dash_gap: f32,

    pub grid_spacing: f32,
    pub grid_dot_radius: f32,
    pub selection_padding: f32,
    pub hint_font_size: f32,
}

impl LayoutConfig {
    /// Constants of the static 1600x1000 document.
    pub fn document() -> Self {
        Self {
            icon_width: 90.0,
            icon_height: 68.0,
            pad_top: 130.0,
            pad_bottom: 80.0,
            customer_column_x: 60.0,
            customer_column_width: 220.0,
            column_gap: 120.0,
            external_column_width: 220.0,
            right_reserve: 340.0,
            min_slot_height: 160.0,
            slot_gap: 16.0,
            ingress_fraction: 0.12,
            core_fraction: 0.48,
            egress_fraction: 0.84,

            title_y: 58.0,
            title_font_size: 72.0,
            subtitle_y: 105.0,
            subtitle_font_size: 40.0,
            zone_label_offset: 18.0,
            zone_label_font_size: 36.0,
            zone_label_letter_spacing: 3.0,
            footer_offset: 35.0,
            footer_font_size: 28.0,
            footer_letter_spacing: 3.0,

            label_offset: 20.0,
            label_font_size: 56.0,
            param_offset: 48.0,
            param_line_height: 42.0,
            param_font_size: 38.0,
            max_params: 3,
            descent_ratio: 0.25,

            align_threshold: 60.0,
            edge_margin: 3.0,
            control_ratio: 0.3,
            control_min: 25.0,
            vertical_aspect: 2.0,
            edge_stroke_width: 2.5,
            double_stroke_width: 4.0,
            halo_stroke_width: 10.0,
            halo_opacity: 0.06,
            edge_opacity: 0.5,
            dash_length: 9.0,
            dash_gap: 6.0,
            crossing_radius: 5.0,
            crossing_stroke_width: 2.0,

            edge_label_font_size: 36.0,
            pill_char_width: 22.0,
            pill_padding: 40.0,
            pill_height: 48.0,
            edge_label_baseline: 12.0,

            cloud_extra_width: 100.0,
            cloud_extra_height: 20.0,
            cloud_stroke_width: 3.0,
            cloud_dash_length: 12.0,
            cloud_dash_gap: 7.0,

            grid_spacing: 28.0,
            grid_dot_radius: 0.6,
            selection_padding: 8.0,
            hint_font_size: 20.0,
        }
    }

    /// Compact constants of the interactive canvas.
    pub fn canvas() -> Self {
        Self {
            icon_width: 50.0,
            icon_height: 38.0,
            pad_top: 85.0,
            pad_bottom: 50.0,
            customer_column_x: 40.0,
            customer_column_width: 140.0,
            column_gap: 80.0,
            external_column_width: 140.0,
            right_reserve: 220.0,
            min_slot_height: 95.0,
            slot_gap: 6.0,

            title_y: 26.0,
            title_font_size: 17.0,
            subtitle_y: 44.0,
            subtitle_font_size: 10.0,
            zone_label_offset: 14.0,
            zone_label_font_size: 8.0,
            zone_label_letter_spacing: 2.0,
            footer_offset: 18.0,
            footer_font_size: 7.0,
            footer_letter_spacing: 1.5,

            label_offset: 11.0,
            label_font_size: 10.0,
            param_offset: 12.0,
            param_line_height: 11.0,
            param_font_size: 8.0,

            edge_stroke_width: 1.4,
            double_stroke_width: 2.5,
            halo_stroke_width: 6.0,
            dash_length: 5.0,
            dash_gap: 4.0,
            crossing_radius: 3.0,
            crossing_stroke_width: 1.0,

            edge_label_font_size: 7.5,
            pill_char_width: 5.6,
            pill_padding: 12.0,
            pill_height: 15.0,
            edge_label_baseline: 3.0,

            cloud_extra_width: 60.0,
            cloud_extra_height: 20.0,
            cloud_stroke_width: 2.0,
            cloud_dash_length: 8.0,
            cloud_dash_gap: 5.0,

            grid_spacing: 20.0,
            grid_dot_radius: 0.4,
            selection_padding: 8.0,
            hint_font_size: 8.0,
            ..Self::document()
        }
    }

    pub fn from_preset(name: &str) -> Option<Self> {
        match name {
            "document" | "static" => Some(Self::document()),
            "canvas" | "interactive" => Some(Self::canvas()),
            _ => None,
        }
    }

    /// Multiply every length, font size and stroke width by `zoom`.
    pub fn scaled(&self, zoom: f32) -> Self {
        let k = if zoom.is_finite() && zoom > 0.0 { zoom } else { 1.0 };
        Self {
            icon_width: self.icon_width * k,
            icon_height: self.icon_height * k,
            pad_top: self.pad_top * k,
            pad_bottom: self.pad_bottom * k,
            customer_column_x: self.customer_column_x * k,
            customer_column_width: self.customer_column_width * k,
            column_gap: self.column_gap * k,
            external_column_width: self.external_column_width * k,
            right_reserve: self.right_reserve * k,
            min_slot_height: self.min_slot_height * k,
            slot_gap: self.slot_gap * k,

            title_y: self.title_y * k,
            title_font_size: self.title_font_size * k,
            subtitle_y: self.subtitle_y * k,
            subtitle_font_size: self.subtitle_font_size * k,
            zone_label_offset: self.zone_label_offset * k,
            zone_label_font_size: self.zone_label_font_size * k,
            zone_label_letter_spacing: self.zone_label_letter_spacing * k,
            footer_offset: self.footer_offset * k,
            footer_font_size: self.footer_font_size * k,
            footer_letter_spacing: self.footer_letter_spacing * k,

            label_offset: self.label_offset * k,
            label_font_size: self.label_font_size * k,
            param_offset: self.param_offset * k,
            param_line_height: self.param_line_height * k,
            param_font_size: self.param_font_size * k,

            align_threshold: self.align_threshold * k,
            edge_margin: self.edge_margin * k,
            control_min: self.control_min * k,
            edge_stroke_width: self.edge_stroke_width * k,
            double_stroke_width: self.double_stroke_width * k,
            halo_stroke_width: self.halo_stroke_width * k,
            dash_length: self.dash_length * k,
            dash_gap: self.dash_gap * k,
            crossing_radius: self.crossing_radius * k,
            crossing_stroke_width: self.crossing_stroke_width * k,

            edge_label_font_size: self.edge_label_font_size * k,
            pill_char_width: self.pill_char_width * k,
            pill_padding: self.pill_padding * k,
            pill_height: self.pill_height * k,
            edge_label_baseline: self.edge_label_baseline * k,

            cloud_extra_width: self.cloud_extra_width * k,
            cloud_extra_height: self.cloud_extra_height * k,
            cloud_stroke_width: self.cloud_stroke_width * k,
            cloud_dash_length: self.cloud_dash_length * k,
            cloud_dash_gap: self.cloud_dash_gap * k,

            grid_spacing: self.grid_spacing * k,
            grid_dot_radius: self.grid_dot_radius * k,
            selection_padding: self.selection_padding * k,
            hint_font_size: self.hint_font_size * k,
            ..self.clone()
        }
    }

    /// Height a node occupies from the top of its icon to the bottom of its
    /// last text line, given how many param lines it shows.
    pub fn node_footprint(&self, params: usize) -> f32 {
        let params = params.min(self.max_params);
        let text_bottom = if params == 0 {
            self.label_offset + self.label_font_size * self.descent_ratio
        } else {
            self.label_offset
                + self.param_offset
                + (params - 1) as f32 * self.param_line_height
                + self.param_font_size * self.descent_ratio
        };
        self.icon_height + text_bottom
    }

    /// Vertical slot for a stack whose busiest node shows `max_params` lines.
    pub fn slot_height(&self, max_params: usize) -> f32 {
        self.min_slot_height
            .max(self.node_footprint(max_params) + self.slot_gap)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::document()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: f32,
    pub height: f32,
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DOCUMENT_WIDTH,
            height: DOCUMENT_HEIGHT,
            background: "#FFFFFF".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
    pub zoom: f32,
}

impl Config {
    /// Layout constants with the configured zoom applied.
    pub fn effective_layout(&self) -> LayoutConfig {
        self.layout.scaled(self.zoom)
    }
}

impl Default for Config {
    fn default() -> Self {
        let theme = Theme::light();
        let render = RenderConfig {
            background: theme.background.clone(),
            ..Default::default()
        };
        Self {
            theme,
            layout: LayoutConfig::default(),
            render,
            zoom: 1.0,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    mono_font_family: Option<String>,
    background: Option<String>,
    text_color: Option<String>,
    secondary_text_color: Option<String>,
    muted_text_color: Option<String>,
    faint_text_color: Option<String>,
    border_color: Option<String>,
    edge_label_color: Option<String>,
    edge_label_background: Option<String>,
    grid_dot_color: Option<String>,
    operator_fill: Option<String>,
    operator_stroke: Option<String>,
    operator_label_color: Option<String>,
    selection_fill: Option<String>,
    selection_stroke: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f32),
    String(String),
}

impl NumberOrString {
    fn as_f32(&self) -> Option<f32> {
        match self {
            NumberOrString::Number(val) => Some(*val),
            NumberOrString::String(val) => val.trim().trim_end_matches("px").trim().parse::<f32>().ok(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct LayoutConfigFile {
    icon_width: Option<f32>,
    icon_height: Option<f32>,
    pad_top: Option<f32>,
    pad_bottom: Option<f32>,
    column_gap: Option<f32>,
    min_slot_height: Option<f32>,
    slot_gap: Option<f32>,
    label_font_size: Option<f32>,
    param_font_size: Option<f32>,
    param_line_height: Option<f32>,
    edge_label_font_size: Option<f32>,
    align_threshold: Option<f32>,
    edge_margin: Option<f32>,
    control_ratio: Option<f32>,
    control_min: Option<f32>,
    vertical_aspect: Option<f32>,
    edge_stroke_width: Option<f32>,
    double_stroke_width: Option<f32>,
    edge_opacity: Option<f32>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    preset: Option<String>,
    layout: Option<LayoutConfigFile>,
    zoom: Option<NumberOrString>,
    width: Option<NumberOrString>,
    height: Option<NumberOrString>,
}

pub fn load_config(path: Option<&Path>) -> crate::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Parse a JSON5 config document on top of the defaults.
pub fn parse_config(contents: &str) -> crate::Result<Config> {
    let mut config = Config::default();
    let parsed: ConfigFile =
        json5::from_str(contents).map_err(|err| crate::Error::Config(err.to_string()))?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        match Theme::from_name(theme_name) {
            Some(theme) => config.theme = theme,
            None => tracing::warn!(theme = theme_name, "unknown theme, keeping light"),
        }
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.mono_font_family {
            config.theme.mono_font_family = v;
        }
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
        if let Some(v) = vars.text_color {
            config.theme.text_color = v;
        }
        if let Some(v) = vars.secondary_text_color {
            config.theme.secondary_text_color = v;
        }
        if let Some(v) = vars.muted_text_color {
            config.theme.muted_text_color = v;
        }
        if let Some(v) = vars.faint_text_color {
            config.theme.faint_text_color = v;
        }
        if let Some(v) = vars.border_color {
            config.theme.border_color = v;
        }
        if let Some(v) = vars.edge_label_color {
            config.theme.edge_label_color = v;
        }
        if let Some(v) = vars.edge_label_background {
            config.theme.edge_label_background = v;
        }
        if let Some(v) = vars.grid_dot_color {
            config.theme.grid_dot_color = v;
        }
        if let Some(v) = vars.operator_fill {
            config.theme.operator_fill = v;
        }
        if let Some(v) = vars.operator_stroke {
            config.theme.operator_stroke = v;
        }
        if let Some(v) = vars.operator_label_color {
            config.theme.operator_label_color = v;
        }
        if let Some(v) = vars.selection_fill {
            config.theme.selection_fill = v;
        }
        if let Some(v) = vars.selection_stroke {
            config.theme.selection_stroke = v;
        }
    }

    if let Some(preset) = parsed.preset.as_deref() {
        match LayoutConfig::from_preset(preset) {
            Some(layout) => config.layout = layout,
            None => tracing::warn!(preset, "unknown layout preset, keeping document"),
        }
    }

    if let Some(layout) = parsed.layout {
        if let Some(v) = layout.icon_width {
            config.layout.icon_width = v;
        }
        if let Some(v) = layout.icon_height {
            config.layout.icon_height = v;
        }
        if let Some(v) = layout.pad_top {
            config.layout.pad_top = v;
        }
        if let Some(v) = layout.pad_bottom {
            config.layout.pad_bottom = v;
        }
        if let Some(v) = layout.column_gap {
            config.layout.column_gap = v;
        }
        if let Some(v) = layout.min_slot_height {
            config.layout.min_slot_height = v;
        }
        if let Some(v) = layout.slot_gap {
            config.layout.slot_gap = v;
        }
        if let Some(v) = layout.label_font_size {
            config.layout.label_font_size = v;
        }
        if let Some(v) = layout.param_font_size {
            config.layout.param_font_size = v;
        }
        if let Some(v) = layout.param_line_height {
            config.layout.param_line_height = v;
        }
        if let Some(v) = layout.edge_label_font_size {
            config.layout.edge_label_font_size = v;
        }
        if let Some(v) = layout.align_threshold {
            config.layout.align_threshold = v;
        }
        if let Some(v) = layout.edge_margin {
            config.layout.edge_margin = v;
        }
        if let Some(v) = layout.control_ratio {
            config.layout.control_ratio = v;
        }
        if let Some(v) = layout.control_min {
            config.layout.control_min = v;
        }
        if let Some(v) = layout.vertical_aspect {
            config.layout.vertical_aspect = v;
        }
        if let Some(v) = layout.edge_stroke_width {
            config.layout.edge_stroke_width = v;
        }
        if let Some(v) = layout.double_stroke_width {
            config.layout.double_stroke_width = v;
        }
        if let Some(v) = layout.edge_opacity {
            config.layout.edge_opacity = v;
        }
    }

    if let Some(v) = parsed.zoom.as_ref().and_then(|v| v.as_f32()) {
        config.zoom = v;
    }
    if let Some(v) = parsed.width.as_ref().and_then(|v| v.as_f32()) {
        config.render.width = v;
    }
    if let Some(v) = parsed.height.as_ref().and_then(|v| v.as_f32()) {
        config.render.height = v;
    }

    config.render.background = config.theme.background.clone();

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling_leaves_ratios_alone() {
        let base = LayoutConfig::document();
        let zoomed = base.scaled(2.0);
        assert_eq!(zoomed.icon_width, base.icon_width * 2.0);
        assert_eq!(zoomed.label_font_size, base.label_font_size * 2.0);
        assert_eq!(zoomed.edge_stroke_width, base.edge_stroke_width * 2.0);
        assert_eq!(zoomed.core_fraction, base.core_fraction);
        assert_eq!(zoomed.control_ratio, base.control_ratio);
        assert_eq!(zoomed.vertical_aspect, base.vertical_aspect);
        assert_eq!(zoomed.max_params, base.max_params);
    }

    #[test]
    fn invalid_zoom_is_identity() {
        let base = LayoutConfig::canvas();
        assert_eq!(base.scaled(0.0), base);
        assert_eq!(base.scaled(f32::NAN), base);
        assert_eq!(base.scaled(-3.0), base);
    }

    #[test]
    fn slot_fits_icon_label_and_params() {
        for layout in [LayoutConfig::document(), LayoutConfig::canvas()] {
            for params in 0..=3 {
                assert!(layout.slot_height(params) >= layout.node_footprint(params));
                assert!(layout.slot_height(params) >= layout.min_slot_height);
            }
            assert_eq!(layout.node_footprint(7), layout.node_footprint(3));
        }
    }

    #[test]
    fn parses_json5_with_comments() {
        let config = parse_config(
            r##"{
                // dark export at double size
                theme: "dark",
                preset: "canvas",
                zoom: "2",
                width: "1200px",
                layout: { edgeMargin: 5, },
                themeVariables: { operatorLabelColor: "#FF00FF" },
            }"##,
        )
        .unwrap();
        assert_eq!(config.theme.palette, crate::theme::Palette::Dark);
        assert_eq!(config.layout.icon_width, LayoutConfig::canvas().icon_width);
        assert_eq!(config.layout.edge_margin, 5.0);
        assert_eq!(config.zoom, 2.0);
        assert_eq!(config.render.width, 1200.0);
        assert_eq!(config.render.height, DOCUMENT_HEIGHT);
        assert_eq!(config.theme.operator_label_color, "#FF00FF");
        assert_eq!(config.render.background, Theme::dark().background);
        assert_eq!(config.effective_layout().icon_width, LayoutConfig::canvas().icon_width * 2.0);
    }

    #[test]
    fn rejects_malformed_config() {
        assert!(matches!(parse_config("{ theme: "), Err(crate::Error::Config(_))));
    }

    #[test]
    fn missing_config_file_is_io_error() {
        let path = std::env::temp_dir().join("netgram-renderer-no-such-config.json5");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)), "{err}");
        assert!(load_config(None).is_ok());
    }
}
