//! Layout engine: five fixed columns, linear stacking within each.
//!
//! Positions are a pure function of the topology, the canvas size and the
//! [`LayoutConfig`]. Drag overrides are applied afterwards as deltas
//! ([`Layout::apply_overrides`]) so they survive resizes and zoom changes.

pub mod routing;
pub(crate) mod types;
pub use routing::*;
pub use types::*;

use crate::config::LayoutConfig;
use crate::ir::{Node, OperatorPosition, Topology};
use std::collections::BTreeMap;

pub fn compute_layout(topology: &Topology, width: f32, height: f32, config: &LayoutConfig) -> Layout {
    let frame = compute_frame(width, height, config);
    let mut positions = BTreeMap::new();
    let mut zones = BTreeMap::new();
    let mut columns = Vec::new();

    for node in &topology.operator_nodes {
        if node.position.is_none() {
            tracing::warn!(id = %node.id, "operator node has no position, not placed");
        }
    }

    for zone in Zone::ALL {
        let group = zone_members(topology, zone);
        if group.is_empty() {
            continue;
        }
        let column = place_column(&group, zone, &frame, config, &mut positions, &mut zones);
        columns.push(column);
    }

    tracing::trace!(
        nodes = positions.len(),
        columns = columns.len(),
        width = frame.width,
        height = frame.height,
        "layout computed"
    );

    Layout {
        frame,
        positions,
        zones,
        columns,
    }
}

/// Column centres and operator region bounds for a canvas.
fn compute_frame(width: f32, height: f32, config: &LayoutConfig) -> LayoutFrame {
    let width = if width.is_finite() { width.max(1.0) } else { 1.0 };
    let height = if height.is_finite() { height.max(1.0) } else { 1.0 };

    let customer_cx = config.customer_column_x + config.customer_column_width / 2.0;
    let operator_left = config.customer_column_x + config.customer_column_width + config.column_gap;
    let operator_right = width - config.right_reserve;
    let operator_width = operator_right - operator_left;
    let external_x = operator_right + config.column_gap;

    LayoutFrame {
        width,
        height,
        icon_width: config.icon_width,
        icon_height: config.icon_height,
        pad_top: config.pad_top,
        pad_bottom: config.pad_bottom,
        customer_cx,
        external_cx: external_x + config.external_column_width / 2.0,
        operator_left,
        operator_right,
        operator_width,
        operator_cx: (operator_left + operator_right) / 2.0,
        operator_cy: (config.pad_top + height - config.pad_bottom) / 2.0,
        ingress_x: operator_left + operator_width * config.ingress_fraction,
        core_x: operator_left + operator_width * config.core_fraction,
        egress_x: operator_left + operator_width * config.egress_fraction,
    }
}

fn zone_members(topology: &Topology, zone: Zone) -> Vec<&Node> {
    match zone {
        Zone::Customer => topology.customer_nodes.iter().collect(),
        Zone::OperatorIngress => topology.operator_nodes_at(OperatorPosition::Ingress).collect(),
        Zone::OperatorCore => topology.operator_nodes_at(OperatorPosition::Core).collect(),
        Zone::OperatorEgress => topology.operator_nodes_at(OperatorPosition::Egress).collect(),
        Zone::External => topology.external_nodes.iter().collect(),
    }
}

/// Stack `nodes` in one column, vertically centred between the paddings.
/// Callers guarantee `nodes` is non-empty.
fn place_column(
    nodes: &[&Node],
    zone: Zone,
    frame: &LayoutFrame,
    config: &LayoutConfig,
    positions: &mut BTreeMap<String, NodePosition>,
    zones: &mut BTreeMap<String, Zone>,
) -> ZoneColumn {
    let cx = frame.column_x(zone);
    let max_params = nodes.iter().map(|node| node.params.len()).max().unwrap_or(0);
    let slot_height = config.slot_height(max_params);
    let stack_height = nodes.len() as f32 * slot_height;
    let available = frame.height - frame.pad_top - frame.pad_bottom;
    // Anchor overfull stacks at the top padding rather than the title area.
    let top = frame.pad_top + ((available - stack_height) / 2.0).max(0.0);
    let icon_inset = (slot_height - frame.icon_height) / 2.0;

    let mut placed = Vec::with_capacity(nodes.len());
    for (idx, node) in nodes.iter().enumerate() {
        if positions.contains_key(&node.id) {
            tracing::warn!(id = %node.id, zone = zone.tag(), "duplicate node id, keeping first placement");
            continue;
        }
        let y = top + idx as f32 * slot_height + icon_inset;
        let position = NodePosition {
            x: cx - frame.icon_width / 2.0,
            y,
            cx,
            cy: y + frame.icon_height / 2.0,
        };
        positions.insert(node.id.clone(), position);
        zones.insert(node.id.clone(), zone);
        placed.push(node.id.clone());
    }

    ZoneColumn {
        zone,
        cx,
        slot_height,
        top,
        nodes: placed,
    }
}
