use crate::icons::IconKind;
use crate::ir::{Edge, EdgeStyle, Node, OperatorPosition, Topology};

/// Retail-bank SD-WAN sample used by `ngr --demo` and the benches.
pub fn demo_topology() -> Topology {
    use EdgeStyle::{Dashed, Double, Solid};
    use OperatorPosition::{Core, Egress, Ingress};

    let mut topology = Topology::new(
        "First National Bank Enterprise SD-WAN",
        "First National Bank",
        "Financial Services",
    );
    topology.customer_nodes = vec![
        Node::new("hq", IconKind::HqBuilding, "Corporate HQ")
            .with_count(1)
            .with_params(["NYC, dual fiber", "10Gbps DIA"]),
        Node::new("branches", IconKind::Branch, "Full Branches")
            .with_count(85)
            .with_params(["500Mbps MPLS", "WiFi 6, SD-WAN"]),
        Node::new("express", IconKind::SmallSite, "Express Branches")
            .with_count(20)
            .with_params(["200Mbps", "4G failover"]),
        Node::new("atm", IconKind::IotGateway, "ATM Sites")
            .with_count(15)
            .with_params(["50Mbps + cellular"]),
    ];
    topology.operator_nodes = vec![
        Node::operator("access", IconKind::Router, "Access Routers", Ingress)
            .with_params(["Regional PoPs", "CPE aggregation"]),
        Node::operator("lte", IconKind::CellTower, "LTE Backup", Ingress).with_params(["4G/LTE failover"]),
        Node::operator("sdwan", IconKind::Sdwan, "SD-WAN Controller", Core)
            .with_params(["Managed overlay", "Path selection"]),
        Node::operator("fw", IconKind::Firewall, "NGFW + SASE", Core).with_params(["DDoS protection", "Zero Trust"]),
        Node::operator("pe", IconKind::Router, "PE Peering Router", Egress)
            .with_params(["Cloud interconnect", "BGP peering"]),
    ];
    topology.external_nodes = vec![
        Node::new("azure", IconKind::Cloud, "Azure").with_params(["ExpressRoute", "Primary"]),
        Node::new("aws", IconKind::Cloud, "AWS").with_params(["Direct Connect", "DR"]),
        Node::new("saas", IconKind::Saas, "Banking SaaS").with_params(["FIS/Fiserv"]),
        Node::new("inet", IconKind::Internet, "Internet").with_params(["Scrubbed"]),
    ];
    topology.connections = [
        ("hq", "access", "10G DIA", Double),
        ("branches", "access", "500M MPLS", Solid),
        ("express", "access", "200Mbps", Solid),
        ("atm", "lte", "LTE", Dashed),
        ("branches", "lte", "LTE backup", Dashed),
        ("access", "sdwan", "Overlay", Solid),
        ("lte", "sdwan", "Failover", Dashed),
        ("sdwan", "fw", "Inspect", Solid),
        ("fw", "pe", "Clean", Solid),
        ("pe", "azure", "ExpressRoute", Double),
        ("pe", "aws", "Direct Connect", Dashed),
        ("pe", "saas", "Private peer", Solid),
        ("pe", "inet", "Breakout", Solid),
    ]
    .into_iter()
    .map(|(from, to, label, style)| Edge::new(from, to).with_label(label).with_style(style))
    .collect();
    topology
}

/// Small hybrid WAN for an AI company: two offices, remote workers and a
/// colocated GPU cluster.
pub fn smb_demo_topology() -> Topology {
    use EdgeStyle::{Dashed, Double, Solid};
    use OperatorPosition::{Core, Egress, Ingress};

    let mut topology = Topology::new("NeuralScale AI Hybrid WAN", "NeuralScale AI", "AI/Technology");
    topology.customer_nodes = vec![
        Node::new("sf", IconKind::HqBuilding, "SF HQ Office")
            .with_count(1)
            .with_params(["50 users", "2Gbps DIA"]),
        Node::new("austin", IconKind::Branch, "Austin Office")
            .with_count(1)
            .with_params(["30 users", "1Gbps DIA"]),
        Node::new("remote", IconKind::Users, "Remote Workers")
            .with_count(40)
            .with_params(["ZTNA client", "Split tunnel"]),
    ];
    topology.operator_nodes = vec![
        Node::operator("vpn", IconKind::Vpn, "VPN Concentrator", Ingress).with_params(["Remote access", "MFA enforced"]),
        Node::operator("sdwan", IconKind::Sdwan, "SD-WAN Controller", Core).with_params(["Managed service"]),
        Node::operator("sase", IconKind::SecurityCloud, "SASE Platform", Core)
            .with_params(["ZTNA/SWG/CASB", "99.99% SLA"]),
        Node::operator("pe", IconKind::Router, "PE Core Router", Egress).with_params(["MPLS backbone", "BGP/OSPF"]),
        Node::operator("colo", IconKind::DataCenter, "Colo X-Connect", Egress).with_params(["100G fabric"]),
    ];
    topology.external_nodes = vec![
        Node::new("aws", IconKind::Cloud, "AWS Direct Connect").with_params(["Primary, 10Gbps"]),
        Node::new("azure", IconKind::Cloud, "Azure ExpressRoute").with_params(["ML training"]),
        Node::new("gcp", IconKind::Cloud, "GCP Interconnect").with_params(["BigQuery"]),
        Node::new("gpu", IconKind::Server, "GPU Cluster (H100)").with_params(["32x H100, 100G"]),
        Node::new("teams", IconKind::Phone, "Teams Routing").with_params(["Voice/Video, SBC"]),
    ];
    topology.connections = [
        ("sf", "sdwan", "2G DIA", Solid),
        ("austin", "sdwan", "1G DIA", Solid),
        ("remote", "vpn", "ZTNA tunnel", Dashed),
        ("vpn", "sase", "ZTNA policy", Solid),
        ("sdwan", "sase", "Inline inspect", Solid),
        ("sase", "pe", "Clean traffic", Solid),
        ("pe", "colo", "100G fiber", Double),
        ("pe", "aws", "10G BGP", Solid),
        ("pe", "azure", "10G BGP", Solid),
        ("pe", "gcp", "10G BGP", Solid),
        ("colo", "gpu", "100G / 99.99%", Double),
        ("pe", "teams", "SBC / SIP", Solid),
    ]
    .into_iter()
    .map(|(from, to, label, style)| Edge::new(from, to).with_label(label).with_style(style))
    .collect();
    topology
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn demos_are_referentially_complete() {
        for topology in [demo_topology(), smb_demo_topology()] {
            let ids: BTreeSet<&str> = topology.nodes().map(|node| node.id.as_str()).collect();
            assert_eq!(ids.len(), topology.node_count(), "{}", topology.solution_title);
            for edge in &topology.connections {
                assert!(ids.contains(edge.from.as_str()), "{}", edge.from);
                assert!(ids.contains(edge.to.as_str()), "{}", edge.to);
            }
            assert!(topology.operator_nodes.iter().all(|node| node.position.is_some()));
        }
    }

    #[test]
    fn smb_demo_lays_out_and_renders() {
        use crate::config::LayoutConfig;
        use crate::layout::{Zone, compute_layout};

        let topology = smb_demo_topology();
        assert_eq!(topology.customer_nodes.len(), 3);
        assert_eq!(topology.operator_nodes.len(), 5);
        assert_eq!(topology.external_nodes.len(), 5);
        assert_eq!(topology.connections.len(), 12);

        let layout = compute_layout(&topology, 1600.0, 1000.0, &LayoutConfig::document());
        assert_eq!(layout.positions.len(), topology.node_count());
        assert_eq!(layout.nodes_in(Zone::OperatorIngress), ["vpn"]);
        assert_eq!(layout.nodes_in(Zone::OperatorCore), ["sdwan", "sase"]);
        assert_eq!(layout.nodes_in(Zone::OperatorEgress), ["pe", "colo"]);

        let svg = crate::render_topology_svg(&topology, None);
        assert_eq!(svg.matches("class=\"edge\"").count(), 12);
        assert_eq!(svg.matches("class=\"edge-halo\"").count(), 2);
        assert!(svg.contains(">Remote Workers (×40)</text>"));
        assert!(svg.contains(">GPU Cluster (H100)</text>"));
        assert!(svg.contains(">100G / 99.99%</text>"));
    }
}
