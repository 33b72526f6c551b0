use crate::config::LayoutConfig;
use crate::ir::Topology;
use crate::layout::{CrossingKind, Layout, route_edge};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub width: f32,
    pub height: f32,
    pub icon_width: f32,
    pub icon_height: f32,
    pub operator_left: f32,
    pub operator_right: f32,
    pub columns: Vec<ColumnDump>,
    pub nodes: Vec<NodeDump>,
    pub edges: Vec<EdgeDump>,
}

#[derive(Debug, Serialize)]
pub struct ColumnDump {
    pub zone: String,
    pub cx: f32,
    pub top: f32,
    pub slot_height: f32,
    pub nodes: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct NodeDump {
    pub id: String,
    pub kind: String,
    pub zone: Option<String>,
    pub x: f32,
    pub y: f32,
    pub cx: f32,
    pub cy: f32,
    pub placed: bool,
}

#[derive(Debug, Serialize)]
pub struct EdgeDump {
    pub index: usize,
    pub from: String,
    pub to: String,
    pub style: String,
    pub routed: bool,
    pub path: Option<String>,
    pub midpoint: Option<[f32; 2]>,
    pub crossing: Option<String>,
}

impl LayoutDump {
    pub fn from_layout(layout: &Layout, topology: &Topology, config: &LayoutConfig) -> Self {
        let columns = layout
            .columns
            .iter()
            .map(|column| ColumnDump {
                zone: column.zone.tag().to_string(),
                cx: column.cx,
                top: column.top,
                slot_height: column.slot_height,
                nodes: column.nodes.clone(),
            })
            .collect();

        let nodes = topology
            .nodes()
            .map(|node| {
                let position = layout.position(&node.id);
                NodeDump {
                    id: node.id.clone(),
                    kind: node.kind.to_string(),
                    zone: layout.zone(&node.id).map(|zone| zone.tag().to_string()),
                    x: position.map_or(0.0, |p| p.x),
                    y: position.map_or(0.0, |p| p.y),
                    cx: position.map_or(0.0, |p| p.cx),
                    cy: position.map_or(0.0, |p| p.cy),
                    placed: position.is_some(),
                }
            })
            .collect();

        let edges = topology
            .connections
            .iter()
            .enumerate()
            .map(|(index, edge)| {
                let geometry = route_edge(layout, edge, config);
                EdgeDump {
                    index,
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    style: format!("{:?}", edge.style).to_lowercase(),
                    routed: geometry.is_some(),
                    path: geometry.as_ref().map(|g| g.path_data()),
                    midpoint: geometry.as_ref().map(|g| [g.midpoint.0, g.midpoint.1]),
                    crossing: geometry.and_then(|g| g.crossing).map(|crossing| match crossing.kind {
                        CrossingKind::Ingress => "ingress".to_string(),
                        CrossingKind::Egress => "egress".to_string(),
                    }),
                }
            })
            .collect();

        LayoutDump {
            width: layout.frame.width,
            height: layout.frame.height,
            icon_width: layout.frame.icon_width,
            icon_height: layout.frame.icon_height,
            operator_left: layout.frame.operator_left,
            operator_right: layout.frame.operator_right,
            columns,
            nodes,
            edges,
        }
    }
}

pub fn write_layout_dump(
    path: &Path,
    layout: &Layout,
    topology: &Topology,
    config: &LayoutConfig,
) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_layout(layout, topology, config);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_topology;
    use crate::ir::Edge;
    use crate::layout::compute_layout;

    #[test]
    fn dump_lists_every_node_and_edge() {
        let mut topology = demo_topology();
        topology.connections.push(Edge::new("hq", "nowhere"));
        let config = LayoutConfig::document();
        let layout = compute_layout(&topology, 1600.0, 1000.0, &config);
        let dump = LayoutDump::from_layout(&layout, &topology, &config);
        assert_eq!(dump.nodes.len(), topology.node_count());
        assert!(dump.nodes.iter().all(|node| node.placed));
        assert_eq!(dump.edges.len(), topology.connections.len());
        let last = dump.edges.last().unwrap();
        assert!(!last.routed);
        assert!(last.path.is_none());
        assert_eq!(dump.edges[0].crossing.as_deref(), Some("ingress"));

        let json = serde_json::to_value(&dump).unwrap();
        assert_eq!(json["columns"][0]["zone"], "customer");
        assert_eq!(json["edges"][0]["style"], "double");
    }
}
