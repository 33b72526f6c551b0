use std::path::Path;

use netgram_renderer::icons::{self, IconKind};
use netgram_renderer::render::InteractiveState;
use netgram_renderer::theme::Palette;
use netgram_renderer::{
    EdgeStyle, Layout, LayoutConfig, Offset, Overrides, RenderOptions, Theme, Topology, Zone, compute_layout,
    render_interactive_svg, render_svg, render_topology, render_topology_svg, render_topology_text, route_edge,
};

fn load_fixture(name: &str) -> Topology {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    let input = std::fs::read_to_string(&path).expect("fixture read failed");
    Topology::from_json(&input).expect("fixture parse failed")
}

fn document_layout(topology: &Topology) -> Layout {
    compute_layout(topology, 1600.0, 1000.0, &LayoutConfig::document())
}

fn assert_valid_svg(svg: &str, fixture: &str) {
    assert!(svg.starts_with("<svg"), "{fixture}: missing <svg tag");
    assert!(svg.ends_with("</svg>"), "{fixture}: missing </svg tag");
    assert_eq!(
        svg.matches("<g ").count(),
        svg.matches("</g>").count(),
        "{fixture}: unbalanced groups"
    );
}

fn routed_count(topology: &Topology, layout: &Layout, style: Option<EdgeStyle>) -> usize {
    let config = LayoutConfig::document();
    topology
        .connections
        .iter()
        .filter(|edge| style.is_none_or(|style| edge.style == style))
        .filter(|edge| route_edge(layout, edge, &config).is_some())
        .count()
}

#[test]
fn render_all_fixtures() {
    for name in ["minimal.json", "grouped.json", "full.json"] {
        let topology = load_fixture(name);
        let svg = render_topology_svg(&topology, None);
        assert_valid_svg(&svg, name);
        assert!(svg.contains("width=\"1600\" height=\"1000\""), "{name}: document size");
        assert!(svg.contains("▸ INGRESS"), "{name}: footer");
        assert!(svg.contains("EGRESS ▸"), "{name}: footer");
    }
}

#[test]
fn output_is_deterministic() {
    for name in ["minimal.json", "grouped.json", "full.json"] {
        let topology = load_fixture(name);
        let first = render_topology_svg(&topology, None);
        let second = render_topology_svg(&load_fixture(name), None);
        assert_eq!(first, second, "{name}: repeated renders differ");
    }
}

#[test]
fn minimal_topology_draws_every_element() {
    let topology = load_fixture("minimal.json");
    let svg = render_topology_svg(&topology, None);
    assert_eq!(svg.matches("<g class=\"node\">").count(), 3);
    assert_eq!(svg.matches("class=\"edge\"").count(), 2);
    // customer -> operator and operator -> external each cross a boundary.
    assert_eq!(svg.matches("class=\"crossing\"").count(), 2);
    assert_eq!(svg.matches("class=\"edge-label\"").count(), 1);
    assert!(svg.contains(">Single Site</text>"));
    assert!(svg.contains(">Acme · Retail</text>"));
    assert!(svg.contains("CUSTOMER PREMISES"));
    assert!(svg.contains("OPERATOR NETWORK"));
    assert!(svg.contains("EXTERNAL SERVICES"));
}

#[test]
fn text_is_escaped() {
    let topology = load_fixture("grouped.json");
    let svg = render_topology_svg(&topology, None);
    assert!(svg.contains(">Franchise &lt;Network&gt; &amp; Co</text>"));
    assert!(svg.contains(">Burger &quot;Bros&quot; · Hospitality</text>"));
    assert!(!svg.contains("<Network>"));
}

#[test]
fn nodes_land_in_their_zone() {
    let topology = load_fixture("full.json");
    let layout = document_layout(&topology);
    let frame = &layout.frame;

    for node in &topology.customer_nodes {
        assert_eq!(layout.zone(&node.id), Some(Zone::Customer), "{}", node.id);
        assert_eq!(layout.position(&node.id).unwrap().cx, frame.customer_cx);
    }
    for node in &topology.external_nodes {
        assert_eq!(layout.zone(&node.id), Some(Zone::External), "{}", node.id);
        assert_eq!(layout.position(&node.id).unwrap().cx, frame.external_cx);
    }
    for node in &topology.operator_nodes {
        let zone = layout.zone(&node.id).unwrap();
        assert!(zone.is_operator(), "{}", node.id);
        let cx = layout.position(&node.id).unwrap().cx;
        assert!(cx > frame.operator_left && cx < frame.operator_right, "{}", node.id);
    }
    assert!(frame.ingress_x < frame.core_x && frame.core_x < frame.egress_x);

    assert_eq!(layout.nodes_in(Zone::Customer).len(), 5);
    assert_eq!(layout.nodes_in(Zone::OperatorIngress), ["mpls", "lte", "vpn"]);
    assert_eq!(layout.nodes_in(Zone::OperatorCore), ["sdwan", "sase", "mec"]);
    assert_eq!(layout.nodes_in(Zone::OperatorEgress), ["lb", "peer"]);
    assert_eq!(layout.nodes_in(Zone::External).len(), 4);
    assert_eq!(layout.positions.len(), topology.node_count());
}

#[test]
fn stacked_nodes_never_overlap() {
    let config = LayoutConfig::document();
    for name in ["grouped.json", "full.json"] {
        let topology = load_fixture(name);
        let layout = document_layout(&topology);
        for column in &layout.columns {
            let max_params = column
                .nodes
                .iter()
                .filter_map(|id| topology.node(id))
                .map(|node| node.params.len())
                .max()
                .unwrap_or(0);
            assert!(column.slot_height >= config.node_footprint(max_params));
            for pair in column.nodes.windows(2) {
                let upper = layout.position(&pair[0]).unwrap();
                let lower = layout.position(&pair[1]).unwrap();
                assert!(
                    lower.y - upper.y >= config.node_footprint(max_params),
                    "{name}: {} overlaps {}",
                    pair[0],
                    pair[1]
                );
            }
        }
    }
}

#[test]
fn dangling_edges_and_unplaced_nodes_are_skipped() {
    let topology = load_fixture("grouped.json");
    let layout = document_layout(&topology);
    assert!(layout.position("orphan").is_none());

    let svg = render_svg(&topology, &layout, &Theme::light(), &LayoutConfig::document());
    assert_eq!(svg.matches("class=\"edge\"").count(), 5);
    assert!(!svg.contains(">Dangling</text>"));
    assert!(!svg.contains(">Unplaced</text>"));
    assert_eq!(routed_count(&topology, &layout, None), 5);
}

#[test]
fn edge_styles_render_distinctly() {
    let topology = load_fixture("full.json");
    let layout = document_layout(&topology);
    let svg = render_svg(&topology, &layout, &Theme::light(), &LayoutConfig::document());

    let doubles = routed_count(&topology, &layout, Some(EdgeStyle::Double));
    let dashed = routed_count(&topology, &layout, Some(EdgeStyle::Dashed));
    assert_eq!(doubles, 3);
    assert_eq!(dashed, 4);
    assert_eq!(svg.matches("class=\"edge-halo\"").count(), doubles);
    assert_eq!(svg.matches("stroke-dasharray=\"9,6\"").count(), dashed);
    assert_eq!(svg.matches("stroke-width=\"4\" opacity=\"0.5\"").count(), doubles);
    assert_eq!(svg.matches("class=\"edge\"").count(), topology.connections.len());
}

#[test]
fn grouped_sites_show_count_suffix() {
    let topology = load_fixture("grouped.json");
    let svg = render_topology_svg(&topology, None);
    assert!(svg.contains(">Restaurants (×240)</text>"));
    assert!(svg.contains(">Kiosks (×12)</text>"));
    assert!(svg.contains(">Head Office</text>"));
    assert!(!svg.contains("Head Office (×1)"));
    // At most three param lines per node.
    assert!(svg.contains(">Guest WiFi</text>"));
    assert!(!svg.contains("dropped fourth line"));
}

#[test]
fn unknown_node_type_uses_fallback_icon() {
    let topology = load_fixture("grouped.json");
    let svg = render_topology_svg(&topology, None);
    let fallback = icons::lookup(None, Palette::Light);
    assert_ne!(fallback.color, IconKind::Cloud.color(Palette::Light));
    assert!(svg.contains(&format!("style=\"color:{};overflow:visible\"", fallback.color)));
}

#[test]
fn overrides_shift_by_exact_delta() {
    let topology = load_fixture("minimal.json");
    let base = document_layout(&topology);
    let mut overrides = Overrides::new();
    overrides.insert("pe".to_string(), Offset::new(40.0, -25.0));
    overrides.insert("missing".to_string(), Offset::new(500.0, 500.0));
    let moved = base.with_overrides(&overrides);

    let before = base.position("pe").unwrap();
    let after = moved.position("pe").unwrap();
    assert_eq!(after.cx, before.cx + 40.0);
    assert_eq!(after.cy, before.cy - 25.0);
    assert_eq!(after.x, before.x + 40.0);
    assert_eq!(moved.position("store"), base.position("store"));
    assert_eq!(moved.positions.len(), base.positions.len());

    let plain = render_topology_svg(&topology, None);
    let shifted = render_topology_svg(&topology, Some(&overrides));
    assert_ne!(plain, shifted);
    assert_eq!(shifted, render_topology_svg(&topology, Some(&overrides)));
}

#[test]
fn overrides_survive_canvas_resize() {
    let topology = load_fixture("full.json");
    let mut overrides = Overrides::new();
    overrides.insert("sase".to_string(), Offset::new(-30.0, 60.0));
    for (w, h) in [(1300.0, 800.0), (1800.0, 1200.0)] {
        let options = RenderOptions::canvas(w, h).with_overrides(overrides.clone());
        let config = options.effective_layout();
        let base = compute_layout(&topology, w, h, &config);
        let moved = base.with_overrides(&options.overrides);
        let b = base.position("sase").unwrap();
        assert_eq!(moved.position("sase"), Some(&b.shifted(-30.0, 60.0)));
        assert_valid_svg(&render_topology(&topology, &options), "full.json");
    }
}

#[test]
fn interactive_render_annotates_nodes_and_edges() {
    let topology = load_fixture("minimal.json");
    let config = LayoutConfig::canvas();
    let layout = compute_layout(&topology, 1300.0, 800.0, &config);
    let state = InteractiveState {
        selected: Some("pe".to_string()),
        edit_mode: true,
        dragging: None,
    };
    let svg = render_interactive_svg(&topology, &layout, &Theme::dark(), &config, &state);
    for id in ["store", "pe", "web"] {
        assert!(svg.contains(&format!("data-node-id=\"{id}\"")), "{id}");
    }
    assert!(svg.contains("class=\"node selected\" data-node-id=\"pe\""));
    assert_eq!(svg.matches("class=\"drag-handle\"").count(), 3);
    assert!(svg.contains("data-edge-index=\"0\""));
    assert!(svg.contains("data-edit=\"title\""));
    assert!(svg.contains("class=\"edit-hint\""));

    let static_svg = render_svg(&topology, &layout, &Theme::dark(), &config);
    assert!(!static_svg.contains("data-node-id"));
    assert!(!static_svg.contains("class=\"edit-hint\""));
}

#[test]
fn text_summary_lists_zones_and_connections() {
    let topology = load_fixture("grouped.json");
    let text = render_topology_text(&topology);
    assert!(text.contains("Franchise <Network> & Co"));
    assert!(text.contains("[Restaurants ×240]"));
    assert!(text.contains("··►"));
    assert!(text.contains("──►"));
}
