#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod demo;
pub mod editor;
pub mod error;
pub mod icons;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod render;
pub mod summary;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, DOCUMENT_HEIGHT, DOCUMENT_WIDTH, LayoutConfig};
pub use editor::{EditTarget, EditorError, EditorSession};
pub use error::{Error, Result};
pub use ir::{Edge, EdgeStyle, Node, NodeKind, Offset, OperatorPosition, Overrides, Topology};
pub use layout::{EdgeGeometry, Layout, Zone, compute_layout, route_edge};
pub use render::{render_interactive_svg, render_svg};
pub use summary::render_topology_text;
pub use theme::Theme;

/// Everything a single render depends on besides the topology.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub width: f32,
    pub height: f32,
    pub zoom: f32,
    pub overrides: Overrides,
}

impl RenderOptions {
    /// Fixed 1600x1000 document, light theme.
    pub fn document() -> Self {
        Self {
            theme: Theme::light(),
            layout: LayoutConfig::document(),
            width: DOCUMENT_WIDTH,
            height: DOCUMENT_HEIGHT,
            zoom: 1.0,
            overrides: Overrides::new(),
        }
    }

    /// Compact interactive constants on a caller-sized canvas.
    pub fn canvas(width: f32, height: f32) -> Self {
        Self {
            layout: LayoutConfig::canvas(),
            width,
            height,
            ..Self::document()
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            theme: config.theme.clone(),
            layout: config.layout.clone(),
            width: config.render.width,
            height: config.render.height,
            zoom: config.zoom,
            overrides: Overrides::new(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Layout constants with the zoom applied.
    pub fn effective_layout(&self) -> LayoutConfig {
        self.layout.scaled(self.zoom)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::document()
    }
}

/// Static 1600x1000 document for `topology`, with optional drag overrides.
pub fn render_topology_svg(topology: &Topology, overrides: Option<&Overrides>) -> String {
    let mut options = RenderOptions::document();
    if let Some(overrides) = overrides {
        options.overrides = overrides.clone();
    }
    render_topology(topology, &options)
}

pub fn render_topology(topology: &Topology, options: &RenderOptions) -> String {
    let config = options.effective_layout();
    let layout = compute_layout(topology, options.width, options.height, &config).with_overrides(&options.overrides);
    render_svg(topology, &layout, &options.theme, &config)
}

/// Parse topology JSON and render it.
pub fn render_with_options(json: &str, options: RenderOptions) -> Result<String> {
    let topology = Topology::from_json(json)?;
    Ok(render_topology(&topology, &options))
}
