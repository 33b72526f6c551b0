use netgram_renderer::config::LayoutConfig;
use netgram_renderer::editor::canvas_size_for;
use netgram_renderer::{EditTarget, EditorSession, Overrides, RenderOptions, Theme, Topology, render_with_options};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TopologyRenderOptions {
    theme: Option<String>,
    preset: Option<String>,
    width: Option<f32>,
    height: Option<f32>,
    zoom: Option<f32>,
    overrides: Option<Overrides>,
}

fn build_render_options(options: TopologyRenderOptions) -> Result<RenderOptions, String> {
    let mut render_options = RenderOptions::document();

    if let Some(preset) = options.preset.as_deref() {
        render_options.layout =
            LayoutConfig::from_preset(preset).ok_or_else(|| format!("unknown preset '{preset}'"))?;
    }
    if let Some(theme) = options.theme.as_deref() {
        render_options.theme = Theme::from_name(theme).ok_or_else(|| format!("unknown theme '{theme}'"))?;
    }
    if let Some(width) = options.width {
        render_options.width = width;
    }
    if let Some(height) = options.height {
        render_options.height = height;
    }
    if let Some(zoom) = options.zoom.filter(|zoom| zoom.is_finite() && *zoom > 0.0) {
        render_options.zoom = zoom;
    }
    if let Some(overrides) = options.overrides {
        render_options.overrides = overrides;
    }
    Ok(render_options)
}

fn parse_options(options_json: Option<&str>) -> Result<RenderOptions, String> {
    let options = match options_json {
        Some(raw) => serde_json::from_str::<TopologyRenderOptions>(raw).map_err(|error| error.to_string())?,
        None => TopologyRenderOptions::default(),
    };
    build_render_options(options)
}

fn to_js(error: impl ToString) -> JsValue {
    JsValue::from_str(&error.to_string())
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Static SVG document for a topology JSON string.
#[wasm_bindgen]
pub fn render_topology_svg(json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let options = parse_options(options_json.as_deref()).map_err(to_js)?;
    render_with_options(json, options).map_err(to_js)
}

/// Box-drawing text summary of a topology JSON string.
#[wasm_bindgen]
pub fn render_topology_text(json: &str) -> Result<String, JsValue> {
    let topology = Topology::from_json(json).map_err(to_js)?;
    Ok(netgram_renderer::render_topology_text(&topology))
}

/// Interactive editing session driven by DOM pointer and edit events.
#[wasm_bindgen]
pub struct TopologyEditor {
    session: EditorSession,
}

impl TopologyEditor {
    fn from_json(json: &str, viewport_width: f32) -> Result<Self, String> {
        let topology = Topology::from_json(json).map_err(|error| error.to_string())?;
        let (width, height) = canvas_size_for(&topology, viewport_width);
        Ok(Self {
            session: EditorSession::new(topology, width, height),
        })
    }

    fn edit_target(attr: &str, node_id: Option<String>, edge_index: Option<usize>) -> Result<EditTarget, String> {
        EditTarget::from_attribute(attr, node_id.as_deref(), edge_index)
            .ok_or_else(|| format!("unsupported edit target '{attr}'"))
    }
}

#[wasm_bindgen]
impl TopologyEditor {
    #[wasm_bindgen(constructor)]
    pub fn new(json: &str, viewport_width: f32) -> Result<TopologyEditor, JsValue> {
        Self::from_json(json, viewport_width).map_err(to_js)
    }

    /// Replace the topology and refit the canvas.
    pub fn load(&mut self, json: &str, viewport_width: f32) -> Result<(), JsValue> {
        let topology = Topology::from_json(json).map_err(to_js)?;
        self.session.load(topology);
        self.session.fit_canvas(viewport_width);
        Ok(())
    }

    pub fn resize(&mut self, viewport_width: f32) {
        self.session.fit_canvas(viewport_width);
    }

    pub fn width(&self) -> f32 {
        self.session.canvas().0
    }

    pub fn height(&self) -> f32 {
        self.session.canvas().1
    }

    pub fn zoom(&self) -> f32 {
        self.session.zoom()
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.session.set_zoom(zoom);
    }

    pub fn set_theme(&mut self, name: &str) -> Result<(), JsValue> {
        let theme = Theme::from_name(name).ok_or_else(|| to_js(format!("unknown theme '{name}'")))?;
        self.session.set_theme(theme);
        Ok(())
    }

    pub fn edit_mode(&self) -> bool {
        self.session.edit_mode()
    }

    pub fn set_edit_mode(&mut self, on: bool) {
        self.session.set_edit_mode(on);
    }

    pub fn selected(&self) -> Option<String> {
        self.session.selected().map(str::to_string)
    }

    pub fn select(&mut self, id: Option<String>) {
        self.session.select(id.as_deref());
    }

    /// Coordinates are in SVG user units of the zoomed canvas.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Option<String> {
        self.session.pointer_down(x, y)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.session.pointer_move(x, y)
    }

    pub fn pointer_up(&mut self) -> bool {
        self.session.pointer_up()
    }

    pub fn cancel_drag(&mut self) {
        self.session.cancel_drag();
    }

    pub fn reset_positions(&mut self) {
        self.session.reset_positions();
    }

    /// Start editing the element carrying `data-edit={attr}`; returns its
    /// current text.
    pub fn begin_edit(
        &mut self,
        attr: &str,
        node_id: Option<String>,
        edge_index: Option<usize>,
    ) -> Result<String, JsValue> {
        let target = Self::edit_target(attr, node_id, edge_index).map_err(to_js)?;
        self.session.begin_edit(target).map_err(to_js)
    }

    pub fn commit_edit(&mut self, value: &str) -> Result<bool, JsValue> {
        self.session.commit_edit(value).map_err(to_js)
    }

    pub fn cancel_edit(&mut self) -> bool {
        self.session.cancel_edit()
    }

    pub fn undo(&mut self) -> bool {
        self.session.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.session.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.session.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.session.can_redo()
    }

    pub fn render(&self) -> String {
        self.session.render()
    }

    pub fn export_svg(&self) -> String {
        self.session.export_svg()
    }

    pub fn topology_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.session.topology()).map_err(to_js)
    }

    pub fn overrides_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.session.overrides()).map_err(to_js)
    }
}
