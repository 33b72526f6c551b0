//! Fixed-width text rendering of a topology, for terminals and chat transcripts.

use crate::ir::{Edge, EdgeStyle, Node, Topology};

/// Characters between the left and right box borders.
const INNER_WIDTH: usize = 78;
const CUSTOMER_CELL: usize = 22;
const OPERATOR_CELL: usize = 28;
const EXTERNAL_CELL: usize = 24;
const MAX_CONNECTIONS: usize = 8;

pub fn render_topology_text(topology: &Topology) -> String {
    let mut lines = Vec::new();
    let title = if topology.solution_title.trim().is_empty() {
        "Network Topology"
    } else {
        topology.solution_title.as_str()
    };

    lines.push(border('╔', '╗'));
    lines.push(row(title));
    lines.push(row(&topology.subtitle()));
    lines.push(border('╠', '╣'));
    lines.push(row(""));
    lines.push(row(&columns("CUSTOMER PREMISES", "OPERATOR NETWORK", "EXTERNAL SERVICES")));
    lines.push(row(&columns(
        &"─".repeat(17),
        &"─".repeat(16),
        &"─".repeat(17),
    )));

    let rows = topology
        .customer_nodes
        .len()
        .max(topology.operator_nodes.len())
        .max(topology.external_nodes.len());
    for idx in 0..rows {
        lines.push(row(&columns(
            &cell(topology.customer_nodes.get(idx), true),
            &cell(topology.operator_nodes.get(idx), false),
            &cell(topology.external_nodes.get(idx), false),
        )));
    }

    lines.push(row(""));
    lines.push(border('╠', '╣'));
    lines.push(row("CONNECTIONS:"));
    for edge in topology.connections.iter().take(MAX_CONNECTIONS) {
        lines.push(row(&format!("  {}", connection(edge))));
    }
    let hidden = topology.connections.len().saturating_sub(MAX_CONNECTIONS);
    if hidden > 0 {
        lines.push(row(&format!("  … and {hidden} more")));
    }
    lines.push(border('╚', '╝'));

    lines.join("\n")
}

fn cell(node: Option<&Node>, with_count: bool) -> String {
    match node {
        Some(node) => match node.count {
            Some(count) if with_count && count > 1 => format!("[{} ×{}]", node.label, count),
            _ => format!("[{}]", node.label),
        },
        None => String::new(),
    }
}

fn connection(edge: &Edge) -> String {
    let line = match edge.style {
        EdgeStyle::Dashed => "··",
        EdgeStyle::Solid | EdgeStyle::Double => "──",
    };
    match edge.label.as_deref() {
        Some(label) if !label.is_empty() => format!("{} {line}► {}: {label}", edge.from, edge.to),
        _ => format!("{} {line}► {}", edge.from, edge.to),
    }
}

fn columns(customer: &str, operator: &str, external: &str) -> String {
    format!(
        "{} {} {}",
        pad(customer, CUSTOMER_CELL),
        pad(operator, OPERATOR_CELL),
        pad(external, EXTERNAL_CELL)
    )
}

fn border(left: char, right: char) -> String {
    format!("{left}{}{right}", "═".repeat(INNER_WIDTH))
}

fn row(content: &str) -> String {
    format!("║  {}║", pad(content, INNER_WIDTH - 2))
}

/// Pad or truncate to exactly `width` characters.
fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        let mut out = text.to_string();
        out.extend(std::iter::repeat_n(' ', width - len));
        out
    } else {
        let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::IconKind;
    use crate::ir::OperatorPosition;

    fn topology() -> Topology {
        let mut topology = Topology::new("Retail WAN", "Acme", "Retail");
        topology.customer_nodes = vec![
            Node::new("hq", IconKind::HqBuilding, "HQ"),
            Node::new("br", IconKind::Branch, "Stores").with_count(85),
        ];
        topology.operator_nodes = vec![Node::operator("pe", IconKind::Router, "PE", OperatorPosition::Egress)];
        topology.external_nodes = vec![Node::new("aws", IconKind::Cloud, "AWS")];
        topology.connections = vec![
            Edge::new("hq", "pe").with_label("10G"),
            Edge::new("br", "pe").with_style(EdgeStyle::Dashed),
        ];
        topology
    }

    #[test]
    fn every_line_has_the_same_width() {
        let text = render_topology_text(&topology());
        let widths: Vec<usize> = text.lines().map(|line| line.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == INNER_WIDTH + 2), "{widths:?}");
    }

    #[test]
    fn summarises_nodes_and_connections() {
        let text = render_topology_text(&topology());
        assert!(text.contains("Retail WAN"));
        assert!(text.contains("Acme · Retail"));
        assert!(text.contains("[Stores ×85]"));
        assert!(text.contains("[PE]"));
        assert!(text.contains("hq ──► pe: 10G"));
        assert!(text.contains("br ··► pe"));
        assert!(!text.contains("────►"));
        assert!(!text.contains("──··►"));
        assert!(!text.contains("pe: undefined"));
    }

    #[test]
    fn long_lists_are_cut() {
        let mut topology = topology();
        topology.customer_nodes[0].label = "A very long site name that will not fit".to_string();
        for idx in 0..10 {
            topology.connections.push(Edge::new("hq", &format!("n{idx}")));
        }
        let text = render_topology_text(&topology);
        assert!(text.contains("… and 4 more"));
        assert!(text.contains("[A very long site nam…"));
    }

    #[test]
    fn empty_title_falls_back() {
        let text = render_topology_text(&Topology::new("", "Acme", "Retail"));
        assert!(text.contains("Network Topology"));
    }
}
