//! Interactive editing state for the canvas renderer.
//!
//! An [`EditorSession`] owns everything the browser canvas mutates: the
//! topology, the drag override map, zoom, canvas size, selection and the
//! undo/redo history. Every render recomputes the base layout and applies the
//! overrides on top, so overrides stay valid across resizes and zoom changes.

use crate::config::LayoutConfig;
use crate::ir::{Offset, OperatorPosition, Overrides, Topology};
use crate::layout::{Layout, compute_layout};
use crate::render::{InteractiveState, render_interactive_svg, render_svg};
use crate::theme::Theme;
use thiserror::Error;

pub const DEFAULT_HISTORY_LIMIT: usize = 50;
pub const MIN_ZOOM: f32 = 0.25;
pub const MAX_ZOOM: f32 = 4.0;

/// A piece of text the user can edit in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    Title,
    /// `customer · industry`
    Subtitle,
    /// Node label, shown with its `(×N)` suffix.
    Label(String),
    Param(String, usize),
    Count(String),
    EdgeLabel(usize),
}

impl EditTarget {
    /// Parse the `data-edit` attribute written by the interactive renderer.
    pub fn from_attribute(attr: &str, node_id: Option<&str>, edge_index: Option<usize>) -> Option<Self> {
        match attr {
            "title" => Some(EditTarget::Title),
            "subtitle" => Some(EditTarget::Subtitle),
            "label" => node_id.map(|id| EditTarget::Label(id.to_string())),
            "count" => node_id.map(|id| EditTarget::Count(id.to_string())),
            "edge-label" => edge_index.map(EditTarget::EdgeLabel),
            other => {
                let idx = other.strip_prefix("param:")?.parse().ok()?;
                node_id.map(|id| EditTarget::Param(id.to_string(), idx))
            }
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum EditorError {
    #[error("unknown node `{0}`")]
    UnknownNode(String),
    #[error("node `{id}` has no param {index}")]
    ParamOutOfRange { id: String, index: usize },
    #[error("no connection at index {0}")]
    EdgeOutOfRange(usize),
    #[error("invalid count `{0}`, expected a whole number of at least 1")]
    InvalidCount(String),
    #[error("no text edit in progress")]
    NoEditInProgress,
}

#[derive(Debug, Clone, PartialEq)]
struct Snapshot {
    topology: Topology,
    overrides: Overrides,
}

#[derive(Debug, Clone)]
struct Drag {
    node_id: String,
    /// Pointer minus node centre at grab time.
    grab: (f32, f32),
    before: Snapshot,
}

#[derive(Debug, Clone)]
pub struct EditorSession {
    topology: Topology,
    overrides: Overrides,
    base_config: LayoutConfig,
    theme: Theme,
    zoom: f32,
    /// Canvas size at zoom 1; the drawing surface is this times `zoom`.
    width: f32,
    height: f32,
    edit_mode: bool,
    selected: Option<String>,
    drag: Option<Drag>,
    editing: Option<EditTarget>,
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    history_limit: usize,
}

impl EditorSession {
    /// New session on the compact canvas preset, light theme, zoom 1.
    pub fn new(topology: Topology, width: f32, height: f32) -> Self {
        Self {
            topology,
            overrides: Overrides::new(),
            base_config: LayoutConfig::canvas(),
            theme: Theme::light(),
            zoom: 1.0,
            width: canvas_extent(width),
            height: canvas_extent(height),
            edit_mode: false,
            selected: None,
            drag: None,
            editing: None,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit.max(1);
        self
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Drawing surface size: the zoom-1 canvas scaled by the zoom, so every
    /// column keeps its proportion at any zoom.
    pub fn canvas(&self) -> (f32, f32) {
        (self.width * self.zoom, self.height * self.zoom)
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn dragging(&self) -> Option<&str> {
        self.drag.as_ref().map(|drag| drag.node_id.as_str())
    }

    pub fn editing(&self) -> Option<&EditTarget> {
        self.editing.as_ref()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Replace the topology. Overrides, history, selection and any
    /// in-flight gesture are dropped.
    pub fn load(&mut self, topology: Topology) {
        self.topology = topology;
        self.overrides.clear();
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.selected = None;
        self.drag = None;
        self.editing = None;
    }

    /// Set the zoom-1 canvas size. Non-finite or sub-pixel sizes become 1.
    pub fn set_canvas(&mut self, width: f32, height: f32) {
        self.width = canvas_extent(width);
        self.height = canvas_extent(height);
    }

    /// Canvas size sized to the viewport and the tallest column.
    pub fn fit_canvas(&mut self, viewport_width: f32) {
        let (width, height) = canvas_size_for(&self.topology, viewport_width);
        self.set_canvas(width, height);
    }

    /// Clamped to [`MIN_ZOOM`, `MAX_ZOOM`]; non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f32) {
        if !zoom.is_finite() {
            tracing::warn!(zoom, "ignoring non-finite zoom");
            return;
        }
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Leaving edit mode ends any drag or text edit without committing.
    pub fn set_edit_mode(&mut self, on: bool) {
        self.edit_mode = on;
        if !on {
            self.cancel_drag();
            self.editing = None;
        }
    }

    pub fn select(&mut self, id: Option<&str>) {
        self.selected = id.filter(|id| self.topology.node(id).is_some()).map(str::to_string);
    }

    /// Layout constants at the current zoom.
    pub fn config(&self) -> LayoutConfig {
        self.base_config.scaled(self.zoom)
    }

    fn base_layout(&self, config: &LayoutConfig) -> Layout {
        let (width, height) = self.canvas();
        compute_layout(&self.topology, width, height, config)
    }

    /// Base layout with the drag overrides applied.
    pub fn layout(&self) -> Layout {
        self.base_layout(&self.config()).with_overrides(&self.overrides)
    }

    /// Topmost node whose icon box contains the point.
    pub fn node_at(&self, x: f32, y: f32) -> Option<String> {
        let layout = self.layout();
        let (w, h) = (layout.frame.icon_width, layout.frame.icon_height);
        let ids: Vec<&str> = self.topology.nodes().map(|node| node.id.as_str()).collect();
        ids.into_iter()
            .rev()
            .find(|id| {
                layout
                    .position(id)
                    .is_some_and(|p| x >= p.x && x <= p.x + w && y >= p.y && y <= p.y + h)
            })
            .map(str::to_string)
    }

    /// Start dragging the node under the pointer. Only active in edit mode.
    /// A press on empty canvas clears the selection.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Option<String> {
        if !self.edit_mode {
            return None;
        }
        let Some(id) = self.node_at(x, y) else {
            self.selected = None;
            return None;
        };
        let layout = self.layout();
        let position = layout.position(&id)?;
        self.drag = Some(Drag {
            node_id: id.clone(),
            grab: (x - position.cx, y - position.cy),
            before: self.snapshot(),
        });
        self.selected = Some(id.clone());
        Some(id)
    }

    /// Move the dragged node so its centre follows the pointer, keeping the
    /// icon box inside the canvas. Returns false when nothing is dragged.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        let Some(drag) = self.drag.as_ref() else {
            return false;
        };
        if !x.is_finite() || !y.is_finite() {
            return false;
        }
        let config = self.config();
        let base = self.base_layout(&config);
        let Some(origin) = base.position(&drag.node_id) else {
            return false;
        };
        let half_w = config.icon_width / 2.0;
        let half_h = config.icon_height / 2.0;
        let (width, height) = self.canvas();
        let cx = clamp_within(x - drag.grab.0, half_w, width - half_w);
        let cy = clamp_within(y - drag.grab.1, half_h, height - half_h);
        let offset = Offset::new(cx - origin.cx, cy - origin.cy);
        let id = drag.node_id.clone();
        if offset.is_zero() {
            self.overrides.remove(&id);
        } else {
            self.overrides.insert(id, offset);
        }
        true
    }

    /// Finish the drag. An undo checkpoint is pushed only if the node moved.
    pub fn pointer_up(&mut self) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        if drag.before.overrides == self.overrides {
            return false;
        }
        self.push_history(drag.before);
        tracing::debug!(id = %drag.node_id, "drag committed");
        true
    }

    /// Abandon the drag and restore the pre-drag overrides.
    pub fn cancel_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            self.overrides = drag.before.overrides;
        }
    }

    /// Drop every override, as one undoable step.
    pub fn reset_positions(&mut self) {
        if self.overrides.is_empty() {
            return;
        }
        let before = self.snapshot();
        self.overrides.clear();
        self.push_history(before);
    }

    /// Enter text edit for `target` and return its current value.
    pub fn begin_edit(&mut self, target: EditTarget) -> Result<String, EditorError> {
        let value = self.read_target(&target)?;
        self.editing = Some(target);
        Ok(value)
    }

    /// Write `value` into the target being edited. Returns whether the
    /// topology changed; unchanged commits leave history alone.
    pub fn commit_edit(&mut self, value: &str) -> Result<bool, EditorError> {
        let target = self.editing.take().ok_or(EditorError::NoEditInProgress)?;
        let before = self.snapshot();
        self.write_target(&target, value)?;
        if before.topology == self.topology {
            return Ok(false);
        }
        self.push_history(before);
        Ok(true)
    }

    pub fn cancel_edit(&mut self) -> bool {
        self.editing.take().is_some()
    }

    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            return false;
        };
        let current = self.snapshot();
        self.redo_stack.push(current);
        self.restore(previous);
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        let current = self.snapshot();
        self.undo_stack.push(current);
        self.restore(next);
        true
    }

    /// Interactive SVG with selection, drag handles and edit attributes.
    pub fn render(&self) -> String {
        let config = self.config();
        let layout = self.base_layout(&config).with_overrides(&self.overrides);
        let state = InteractiveState {
            selected: self.selected.clone(),
            edit_mode: self.edit_mode,
            dragging: self.drag.as_ref().map(|drag| drag.node_id.clone()),
        };
        render_interactive_svg(&self.topology, &layout, &self.theme, &config, &state)
    }

    /// Plain SVG of the current state, without interactive affordances.
    pub fn export_svg(&self) -> String {
        let config = self.config();
        let layout = self.base_layout(&config).with_overrides(&self.overrides);
        render_svg(&self.topology, &layout, &self.theme, &config)
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            topology: self.topology.clone(),
            overrides: self.overrides.clone(),
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.topology = snapshot.topology;
        self.overrides = snapshot.overrides;
        self.drag = None;
        self.editing = None;
        if let Some(id) = self.selected.as_deref()
            && self.topology.node(id).is_none()
        {
            self.selected = None;
        }
    }

    fn push_history(&mut self, snapshot: Snapshot) {
        self.undo_stack.push(snapshot);
        if self.undo_stack.len() > self.history_limit {
            let excess = self.undo_stack.len() - self.history_limit;
            self.undo_stack.drain(..excess);
        }
        self.redo_stack.clear();
    }

    fn read_target(&self, target: &EditTarget) -> Result<String, EditorError> {
        let topology = &self.topology;
        let node = |id: &str| topology.node(id).ok_or_else(|| EditorError::UnknownNode(id.to_string()));
        Ok(match target {
            EditTarget::Title => topology.solution_title.clone(),
            EditTarget::Subtitle => topology.subtitle(),
            EditTarget::Label(id) => node(id)?.display_label(),
            EditTarget::Count(id) => node(id)?.count.unwrap_or(1).to_string(),
            EditTarget::Param(id, index) => node(id)?
                .params
                .get(*index)
                .cloned()
                .ok_or_else(|| EditorError::ParamOutOfRange {
                    id: id.clone(),
                    index: *index,
                })?,
            EditTarget::EdgeLabel(index) => topology
                .connections
                .get(*index)
                .ok_or(EditorError::EdgeOutOfRange(*index))?
                .label
                .clone()
                .unwrap_or_default(),
        })
    }

    fn write_target(&mut self, target: &EditTarget, value: &str) -> Result<(), EditorError> {
        let value = value.trim();
        match target {
            EditTarget::Title => {
                if !value.is_empty() {
                    self.topology.solution_title = value.to_string();
                }
            }
            EditTarget::Subtitle => {
                let mut parts = value.split('·').map(str::trim);
                if let Some(customer) = parts.next().filter(|part| !part.is_empty()) {
                    self.topology.customer = customer.to_string();
                }
                if let Some(industry) = parts.next().filter(|part| !part.is_empty()) {
                    self.topology.industry = industry.to_string();
                }
            }
            EditTarget::Label(id) => {
                let (label, count) = split_count_suffix(value)?;
                let node = self.node_mut(id)?;
                if !label.is_empty() {
                    node.label = label.to_string();
                }
                if let Some(count) = count {
                    node.count = Some(count);
                }
            }
            EditTarget::Count(id) => {
                let count = parse_count(value)?;
                self.node_mut(id)?.count = Some(count);
            }
            EditTarget::Param(id, index) => {
                let node = self.node_mut(id)?;
                let slot = node.params.get_mut(*index).ok_or_else(|| EditorError::ParamOutOfRange {
                    id: id.clone(),
                    index: *index,
                })?;
                *slot = value.to_string();
            }
            EditTarget::EdgeLabel(index) => {
                let edge = self
                    .topology
                    .connections
                    .get_mut(*index)
                    .ok_or(EditorError::EdgeOutOfRange(*index))?;
                edge.label = (!value.is_empty()).then(|| value.to_string());
            }
        }
        Ok(())
    }

    fn node_mut(&mut self, id: &str) -> Result<&mut crate::ir::Node, EditorError> {
        self.topology
            .node_mut(id)
            .ok_or_else(|| EditorError::UnknownNode(id.to_string()))
    }
}

fn canvas_extent(value: f32) -> f32 {
    if value.is_finite() { value.max(1.0) } else { 1.0 }
}

fn clamp_within(value: f32, min: f32, max: f32) -> f32 {
    // A canvas narrower than one icon pins the node to the low edge.
    if max < min { min } else { value.clamp(min, max) }
}

fn parse_count(value: &str) -> Result<u32, EditorError> {
    match value.trim().parse::<u32>() {
        Ok(count) if count >= 1 => Ok(count),
        _ => Err(EditorError::InvalidCount(value.to_string())),
    }
}

/// `"Branches (×12)"` -> `("Branches", Some(12))`. Text without the suffix
/// comes back unchanged with no count.
fn split_count_suffix(value: &str) -> Result<(&str, Option<u32>), EditorError> {
    let Some(body) = value.strip_suffix(')') else {
        return Ok((value, None));
    };
    let Some(open) = body.rfind("(×") else {
        return Ok((value, None));
    };
    let digits = &body[open + "(×".len()..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Ok((value, None));
    }
    let count = parse_count(digits)?;
    Ok((body[..open].trim_end(), Some(count)))
}

/// Canvas size for a viewport: at least 1100×700, taller when a column
/// holds many nodes.
pub fn canvas_size_for(topology: &Topology, viewport_width: f32) -> (f32, f32) {
    let tallest = [
        topology.customer_nodes.len(),
        topology.operator_nodes_at(OperatorPosition::Ingress).count(),
        topology.operator_nodes_at(OperatorPosition::Core).count(),
        topology.operator_nodes_at(OperatorPosition::Egress).count(),
        topology.external_nodes.len(),
    ]
    .into_iter()
    .max()
    .unwrap_or(0);
    let width = if viewport_width.is_finite() {
        (viewport_width - 40.0).max(1100.0)
    } else {
        1100.0
    };
    (width, (tallest as f32 * 100.0 + 200.0).max(700.0))
}
