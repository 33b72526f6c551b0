use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use netgram_renderer::config::LayoutConfig;
use netgram_renderer::demo::{demo_topology, smb_demo_topology};
use netgram_renderer::icons::IconKind;
use netgram_renderer::ir::{Edge, EdgeStyle, Node, OperatorPosition, Topology};
use netgram_renderer::layout::{compute_layout, route_edge};
use netgram_renderer::render::render_svg;
use netgram_renderer::theme::Theme;
use netgram_renderer::{EditorSession, render_topology_svg};
use std::hint::black_box;

/// `per_zone` nodes in every column (operator nodes spread over the three
/// sub-columns) and a fan of connections across each boundary.
fn generated_topology(per_zone: usize, edges: usize) -> Topology {
    let mut topology = Topology::new("Generated", "Bench Corp", "Testing");
    let positions = [
        OperatorPosition::Ingress,
        OperatorPosition::Core,
        OperatorPosition::Egress,
    ];
    for i in 0..per_zone {
        topology.customer_nodes.push(
            Node::new(&format!("c{i}"), IconKind::Branch, &format!("Site {i}"))
                .with_count(i as u32 + 1)
                .with_params(["1Gbps", "SD-WAN"]),
        );
        topology.operator_nodes.push(Node::operator(
            &format!("o{i}"),
            IconKind::Router,
            &format!("PoP {i}"),
            positions[i % positions.len()],
        ));
        topology
            .external_nodes
            .push(Node::new(&format!("e{i}"), IconKind::Cloud, &format!("Cloud {i}")).with_params(["Region"]));
    }
    if per_zone == 0 {
        return topology;
    }
    let styles = [EdgeStyle::Solid, EdgeStyle::Dashed, EdgeStyle::Double];
    for i in 0..edges {
        let a = i % per_zone;
        let b = (i * 7 + 3) % per_zone;
        let (from, to) = match i % 3 {
            0 => (format!("c{a}"), format!("o{b}")),
            1 => (format!("o{a}"), format!("o{b}")),
            _ => (format!("o{a}"), format!("e{b}")),
        };
        topology.connections.push(
            Edge::new(&from, &to)
                .with_label(&format!("link {i}"))
                .with_style(styles[i % styles.len()]),
        );
    }
    topology
}

fn cases() -> Vec<(String, Topology)> {
    vec![
        ("demo".to_string(), demo_topology()),
        ("smb".to_string(), smb_demo_topology()),
        ("small".to_string(), generated_topology(3, 8)),
        ("medium".to_string(), generated_topology(6, 24)),
        ("limit".to_string(), generated_topology(10, 50)),
    ]
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let config = LayoutConfig::document();
    for (name, topology) in cases() {
        group.bench_with_input(BenchmarkId::from_parameter(&name), &topology, |b, data| {
            b.iter(|| {
                let layout = compute_layout(black_box(data), 1600.0, 1000.0, &config);
                black_box(layout.positions.len());
            });
        });
    }
    group.finish();
}

fn bench_edge_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_routing");
    let config = LayoutConfig::document();
    for (name, topology) in cases() {
        let layout = compute_layout(&topology, 1600.0, 1000.0, &config);
        group.bench_with_input(BenchmarkId::from_parameter(&name), &topology, |b, data| {
            b.iter(|| {
                let routed = data
                    .connections
                    .iter()
                    .filter_map(|edge| route_edge(&layout, black_box(edge), &config))
                    .count();
                black_box(routed);
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_svg");
    let theme = Theme::light();
    let config = LayoutConfig::document();
    for (name, topology) in cases() {
        let layout = compute_layout(&topology, 1600.0, 1000.0, &config);
        group.bench_with_input(BenchmarkId::from_parameter(&name), &layout, |b, data| {
            b.iter(|| {
                let svg = render_svg(&topology, black_box(data), &theme, &config);
                black_box(svg.len());
            });
        });
    }
    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_to_end");
    for (name, topology) in cases() {
        let json = serde_json::to_string(&topology).expect("serialize failed");
        group.bench_with_input(BenchmarkId::from_parameter(&name), &json, |b, data| {
            b.iter(|| {
                let parsed = Topology::from_json(black_box(data)).expect("parse failed");
                let svg = render_topology_svg(&parsed, None);
                black_box(svg.len());
            });
        });
    }
    group.finish();
}

fn bench_editor_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("editor_drag");
    for (name, topology) in cases() {
        let mut session = EditorSession::new(topology, 1300.0, 800.0);
        session.set_edit_mode(true);
        let layout = session.layout();
        let Some(start) = layout.positions.values().next().map(|p| (p.cx, p.cy)) else {
            continue;
        };
        group.bench_function(BenchmarkId::from_parameter(&name), |b| {
            b.iter(|| {
                session.pointer_down(start.0, start.1);
                session.pointer_move(start.0 + 12.0, start.1 + 7.0);
                session.pointer_up();
                black_box(session.render().len());
                session.undo();
            });
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_layout, bench_edge_routing, bench_render, bench_end_to_end, bench_editor_drag
);
criterion_main!(benches);
