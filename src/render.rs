use crate::config::{LayoutConfig, RenderConfig};
use crate::icons::{self, ICON_VIEWBOX};
use crate::ir::{Edge, EdgeStyle, Node, Topology};
use crate::layout::{Layout, LayoutFrame, route_edge};
use crate::theme::Theme;
use anyhow::Result;
use std::collections::BTreeSet;
use std::path::Path;

const ZONE_LABELS: [&str; 3] = ["CUSTOMER PREMISES", "OPERATOR NETWORK", "EXTERNAL SERVICES"];
const EDIT_HINT: &str = "Drag nodes to reposition · double-click text to edit";

/// Editor state the interactive variant draws on top of the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractiveState {
    pub selected: Option<String>,
    pub edit_mode: bool,
    pub dragging: Option<String>,
}

/// Static document: no data attributes, no selection, no hint line.
pub fn render_svg(topology: &Topology, layout: &Layout, theme: &Theme, config: &LayoutConfig) -> String {
    render_document(topology, layout, theme, config, None)
}

/// Same drawing as [`render_svg`], annotated for hit-testing and inline edits.
pub fn render_interactive_svg(
    topology: &Topology,
    layout: &Layout,
    theme: &Theme,
    config: &LayoutConfig,
    state: &InteractiveState,
) -> String {
    render_document(topology, layout, theme, config, Some(state))
}

fn render_document(
    topology: &Topology,
    layout: &Layout,
    theme: &Theme,
    config: &LayoutConfig,
    interactive: Option<&InteractiveState>,
) -> String {
    let theme = &escaped_theme(theme);
    let frame = &layout.frame;
    let width = fmt_num(frame.width);
    let height = fmt_num(frame.height);
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n",
    ));
    push_defs(&mut svg, theme, config);
    svg.push_str(&format!(
        "<rect width=\"{width}\" height=\"{height}\" fill=\"url(#tgrid)\"/>\n<rect width=\"{width}\" height=\"{height}\" fill=\"{}\" opacity=\"0.95\"/>\n",
        theme.background
    ));

    push_title(&mut svg, topology, frame, theme, config, interactive.is_some());
    push_zone_labels(&mut svg, frame, theme, config);

    let cloud_h = frame.height - frame.pad_top - frame.pad_bottom + config.cloud_extra_height;
    svg.push_str(&format!(
        "<path class=\"operator-cloud\" d=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\" stroke-dasharray=\"{},{}\"/>\n",
        cloud_path(
            frame.operator_cx,
            frame.operator_cy,
            frame.operator_width + config.cloud_extra_width,
            cloud_h
        ),
        theme.operator_fill,
        theme.operator_stroke,
        fmt_num(config.cloud_stroke_width),
        fmt_num(config.cloud_dash_length),
        fmt_num(config.cloud_dash_gap),
    ));

    let mut edges_drawn = 0usize;
    for (idx, edge) in topology.connections.iter().enumerate() {
        if push_edge(&mut svg, idx, edge, topology, layout, theme, config, interactive.is_some()) {
            edges_drawn += 1;
        }
    }

    let mut drawn = BTreeSet::new();
    for node in topology.nodes() {
        if layout.position(&node.id).is_none() || !drawn.insert(node.id.as_str()) {
            continue;
        }
        push_node(&mut svg, node, layout, theme, config, interactive);
    }

    push_footer(&mut svg, frame, theme, config);

    if interactive.is_some_and(|state| state.edit_mode) {
        svg.push_str(&format!(
            "<text class=\"edit-hint\" x=\"{}\" y=\"{}\" text-anchor=\"middle\" fill=\"{}\" font-size=\"{}\" font-family=\"{}\">{}</text>\n",
            fmt_num(frame.width / 2.0),
            fmt_num(frame.height - config.hint_font_size),
            theme.muted_text_color,
            fmt_num(config.hint_font_size),
            theme.mono_font_family,
            escape_xml(EDIT_HINT),
        ));
    }

    svg.push_str("</svg>");

    tracing::trace!(
        nodes = drawn.len(),
        edges = edges_drawn,
        interactive = interactive.is_some(),
        "svg rendered"
    );
    svg
}

/// Theme strings come from config files and land inside attribute values.
fn escaped_theme(theme: &Theme) -> Theme {
    Theme {
        palette: theme.palette,
        font_family: escape_xml(&theme.font_family),
        mono_font_family: escape_xml(&theme.mono_font_family),
        background: escape_xml(&theme.background),
        text_color: escape_xml(&theme.text_color),
        secondary_text_color: escape_xml(&theme.secondary_text_color),
        muted_text_color: escape_xml(&theme.muted_text_color),
        faint_text_color: escape_xml(&theme.faint_text_color),
        border_color: escape_xml(&theme.border_color),
        edge_label_color: escape_xml(&theme.edge_label_color),
        edge_label_background: escape_xml(&theme.edge_label_background),
        grid_dot_color: escape_xml(&theme.grid_dot_color),
        operator_fill: escape_xml(&theme.operator_fill),
        operator_stroke: escape_xml(&theme.operator_stroke),
        operator_label_color: escape_xml(&theme.operator_label_color),
        selection_fill: escape_xml(&theme.selection_fill),
        selection_stroke: escape_xml(&theme.selection_stroke),
    }
}

fn push_defs(svg: &mut String, theme: &Theme, config: &LayoutConfig) {
    let spacing = fmt_num(config.grid_spacing);
    let half = fmt_num(config.grid_spacing / 2.0);
    svg.push_str("<defs>\n");
    svg.push_str(&format!(
        "<pattern id=\"tgrid\" width=\"{spacing}\" height=\"{spacing}\" patternUnits=\"userSpaceOnUse\"><circle cx=\"{half}\" cy=\"{half}\" r=\"{}\" fill=\"{}\" opacity=\"0.3\"/></pattern>\n",
        fmt_num(config.grid_dot_radius),
        theme.grid_dot_color
    ));
    svg.push_str(&format!(
        "<marker id=\"ah\" markerWidth=\"10\" markerHeight=\"8\" refX=\"9\" refY=\"4\" orient=\"auto\"><polygon points=\"0 0.5,9 4,0 7.5\" fill=\"{}\" opacity=\"0.5\"/></marker>\n",
        theme.muted_text_color
    ));
    svg.push_str("</defs>\n");
}

fn push_title(
    svg: &mut String,
    topology: &Topology,
    frame: &LayoutFrame,
    theme: &Theme,
    config: &LayoutConfig,
    interactive: bool,
) {
    let cx = fmt_num(frame.width / 2.0);
    svg.push_str(&format!(
        "<text x=\"{cx}\" y=\"{}\" text-anchor=\"middle\" fill=\"{}\" font-size=\"{}\" font-weight=\"700\" font-family=\"{}\"{}>{}</text>\n",
        fmt_num(config.title_y),
        theme.text_color,
        fmt_num(config.title_font_size),
        theme.font_family,
        if interactive { " data-edit=\"title\"" } else { "" },
        escape_xml(&topology.solution_title),
    ));
    svg.push_str(&format!(
        "<text x=\"{cx}\" y=\"{}\" text-anchor=\"middle\" fill=\"{}\" font-size=\"{}\" font-family=\"{}\"{}>{}</text>\n",
        fmt_num(config.subtitle_y),
        theme.secondary_text_color,
        fmt_num(config.subtitle_font_size),
        theme.mono_font_family,
        if interactive { " data-edit=\"subtitle\"" } else { "" },
        escape_xml(&topology.subtitle()),
    ));
}

fn push_zone_labels(svg: &mut String, frame: &LayoutFrame, theme: &Theme, config: &LayoutConfig) {
    let y = fmt_num(frame.pad_top - config.zone_label_offset);
    let columns = [
        (frame.customer_cx, &theme.faint_text_color),
        (frame.operator_cx, &theme.operator_label_color),
        (frame.external_cx, &theme.faint_text_color),
    ];
    for (label, (x, fill)) in ZONE_LABELS.iter().zip(columns) {
        svg.push_str(&format!(
            "<text class=\"zone-label\" x=\"{}\" y=\"{y}\" text-anchor=\"middle\" fill=\"{fill}\" font-size=\"{}\" font-family=\"{}\" letter-spacing=\"{}\" font-weight=\"700\">{label}</text>\n",
            fmt_num(x),
            fmt_num(config.zone_label_font_size),
            theme.mono_font_family,
            fmt_num(config.zone_label_letter_spacing),
        ));
    }
}

/// Draw one connection. Returns false when the edge was skipped.
#[allow(clippy::too_many_arguments)]
fn push_edge(
    svg: &mut String,
    idx: usize,
    edge: &Edge,
    topology: &Topology,
    layout: &Layout,
    theme: &Theme,
    config: &LayoutConfig,
    interactive: bool,
) -> bool {
    let Some(geometry) = route_edge(layout, edge, config) else {
        return false;
    };
    let color = edge_color(topology, edge, theme);
    let d = geometry.path_data();
    let index_attr = if interactive {
        format!(" data-edge-index=\"{idx}\"")
    } else {
        String::new()
    };

    let stroke_width = match edge.style {
        EdgeStyle::Double => {
            svg.push_str(&format!(
                "<path class=\"edge-halo\" d=\"{d}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"{}\" opacity=\"{}\"/>\n",
                fmt_num(config.halo_stroke_width),
                fmt_num(config.halo_opacity),
            ));
            config.double_stroke_width
        }
        EdgeStyle::Solid | EdgeStyle::Dashed => config.edge_stroke_width,
    };
    let dash = match edge.style {
        EdgeStyle::Dashed => format!(
            " stroke-dasharray=\"{},{}\"",
            fmt_num(config.dash_length),
            fmt_num(config.dash_gap)
        ),
        EdgeStyle::Solid | EdgeStyle::Double => String::new(),
    };
    svg.push_str(&format!(
        "<path class=\"edge\"{index_attr} d=\"{d}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"{}\"{dash} opacity=\"{}\" marker-end=\"url(#ah)\"/>\n",
        fmt_num(stroke_width),
        fmt_num(config.edge_opacity),
    ));

    if let Some(crossing) = geometry.crossing {
        svg.push_str(&format!(
            "<circle class=\"crossing\" cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{color}\" opacity=\"0.4\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            fmt_num(crossing.x),
            fmt_num(crossing.y),
            fmt_num(config.crossing_radius),
            theme.operator_stroke,
            fmt_num(config.crossing_stroke_width),
        ));
    }

    if let Some(label) = edge.label.as_deref().filter(|label| !label.is_empty()) {
        let (mx, my) = geometry.midpoint;
        let pill_w = label.chars().count() as f32 * config.pill_char_width + config.pill_padding;
        let pill_h = config.pill_height;
        svg.push_str(&format!(
            "<rect class=\"edge-label\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1\" opacity=\"0.95\"/>\n",
            fmt_num(mx - pill_w / 2.0),
            fmt_num(my - pill_h / 2.0),
            fmt_num(pill_w),
            fmt_num(pill_h),
            fmt_num(pill_h / 2.0),
            theme.edge_label_background,
            theme.border_color,
        ));
        svg.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" fill=\"{}\" font-size=\"{}\" font-family=\"{}\" font-weight=\"600\"{}>{}</text>\n",
            fmt_num(mx),
            fmt_num(my + config.edge_label_baseline),
            theme.edge_label_color,
            fmt_num(config.edge_label_font_size),
            theme.mono_font_family,
            if interactive {
                format!(" data-edit=\"edge-label\" data-edge-index=\"{idx}\"")
            } else {
                String::new()
            },
            escape_xml(label),
        ));
    }
    true
}

/// Stroke colour of an edge: the icon colour of its source node.
pub fn edge_color(topology: &Topology, edge: &Edge, theme: &Theme) -> &'static str {
    let kind = topology.node(&edge.from).and_then(|node| node.kind.icon());
    icons::lookup(kind, theme.palette).color
}

fn push_node(
    svg: &mut String,
    node: &Node,
    layout: &Layout,
    theme: &Theme,
    config: &LayoutConfig,
    interactive: Option<&InteractiveState>,
) {
    let Some(position) = layout.position(&node.id) else {
        return;
    };
    let frame = &layout.frame;
    let style = icons::lookup(node.kind.icon(), theme.palette);
    let is_operator = layout.zone(&node.id).is_some_and(|zone| zone.is_operator());
    let label_fill = if is_operator {
        &theme.operator_label_color
    } else {
        &theme.text_color
    };
    let icon_x = position.cx - frame.icon_width / 2.0;
    let icon_y = position.cy - frame.icon_height / 2.0;
    let label_y = position.cy + frame.icon_height / 2.0 + config.label_offset;
    let cx = fmt_num(position.cx);

    match interactive {
        Some(state) => {
            let mut classes = String::from("node");
            if state.selected.as_deref() == Some(node.id.as_str()) {
                classes.push_str(" selected");
            }
            if state.dragging.as_deref() == Some(node.id.as_str()) {
                classes.push_str(" dragging");
            }
            svg.push_str(&format!(
                "<g class=\"{classes}\" data-node-id=\"{}\">\n",
                escape_xml(&node.id)
            ));
            if state.selected.as_deref() == Some(node.id.as_str()) {
                let pad = config.selection_padding;
                svg.push_str(&format!(
                    "  <rect class=\"selection\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1.5\"/>\n",
                    fmt_num(icon_x - pad),
                    fmt_num(icon_y - pad),
                    fmt_num(frame.icon_width + pad * 2.0),
                    fmt_num(frame.icon_height + pad * 2.0),
                    fmt_num(pad),
                    theme.selection_fill,
                    theme.selection_stroke,
                ));
            }
        }
        None => svg.push_str("<g class=\"node\">\n"),
    }

    svg.push_str(&format!(
        "  <svg class=\"icon\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" viewBox=\"{ICON_VIEWBOX}\" style=\"color:{};overflow:visible\">{}</svg>\n",
        fmt_num(icon_x),
        fmt_num(icon_y),
        fmt_num(frame.icon_width),
        fmt_num(frame.icon_height),
        style.color,
        style.colored_markup(),
    ));

    let editable = interactive.is_some();
    svg.push_str(&format!(
        "  <text x=\"{cx}\" y=\"{}\" text-anchor=\"middle\" fill=\"{label_fill}\" font-size=\"{}\" font-weight=\"700\" font-family=\"{}\"{}>{}</text>\n",
        fmt_num(label_y),
        fmt_num(config.label_font_size),
        theme.font_family,
        if editable { " data-edit=\"label\"" } else { "" },
        escape_xml(&node.display_label()),
    ));
    for (idx, param) in node.params.iter().take(config.max_params).enumerate() {
        svg.push_str(&format!(
            "  <text x=\"{cx}\" y=\"{}\" text-anchor=\"middle\" fill=\"{}\" font-size=\"{}\" font-family=\"{}\"{}>{}</text>\n",
            fmt_num(label_y + config.param_offset + idx as f32 * config.param_line_height),
            theme.secondary_text_color,
            fmt_num(config.param_font_size),
            theme.mono_font_family,
            if editable {
                format!(" data-edit=\"param:{idx}\"")
            } else {
                String::new()
            },
            escape_xml(param),
        ));
    }

    if let Some(state) = interactive.filter(|state| state.edit_mode) {
        let cursor = if state.dragging.as_deref() == Some(node.id.as_str()) {
            "grabbing"
        } else {
            "grab"
        };
        svg.push_str(&format!(
            "  <rect class=\"drag-handle\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"transparent\" style=\"cursor:{cursor}\"/>\n",
            fmt_num(icon_x),
            fmt_num(icon_y),
            fmt_num(frame.icon_width),
            fmt_num(frame.icon_height),
        ));
    }
    svg.push_str("</g>\n");
}

fn push_footer(svg: &mut String, frame: &LayoutFrame, theme: &Theme, config: &LayoutConfig) {
    let y = fmt_num(frame.height - frame.pad_bottom + config.footer_offset);
    for (x, text) in [
        (frame.operator_left, "▸ INGRESS"),
        (frame.operator_right, "EGRESS ▸"),
    ] {
        svg.push_str(&format!(
            "<text class=\"footer\" x=\"{}\" y=\"{y}\" text-anchor=\"middle\" fill=\"{}\" font-size=\"{}\" font-family=\"{}\" letter-spacing=\"{}\" font-weight=\"600\">{text}</text>\n",
            fmt_num(x),
            theme.operator_label_color,
            fmt_num(config.footer_font_size),
            theme.mono_font_family,
            fmt_num(config.footer_letter_spacing),
        ));
    }
}

/// Closed four-lobe blob around the operator region, centred on (cx, cy).
pub fn cloud_path(cx: f32, cy: f32, w: f32, h: f32) -> String {
    let hw = w / 2.0;
    let hh = h / 2.0;
    let p = |fx: f32, fy: f32| format!("{},{}", fmt_num(cx + hw * fx), fmt_num(cy + hh * fy));
    format!(
        "M {} C {} {} {} C {} {} {} C {} {} {} C {} {} {} Z",
        p(-0.65, 0.95),
        p(-1.08, 0.55),
        p(-1.05, -0.35),
        p(-0.55, -0.65),
        p(-0.25, -1.08),
        p(0.15, -1.1),
        p(0.4, -0.7),
        p(0.65, -1.05),
        p(1.05, -0.55),
        p(1.0, -0.05),
        p(1.08, 0.45),
        p(0.95, 0.9),
        p(0.55, 0.95),
    )
}

/// Coordinate formatting: at most two decimals, trailing zeros dropped.
pub(crate) fn fmt_num(value: f32) -> String {
    let mut out = format!("{value:.2}");
    if out.contains('.') {
        let trimmed = out.trim_end_matches('0').trim_end_matches('.').len();
        out.truncate(trimmed);
    }
    if out == "-0" {
        out = "0".to_string();
    }
    out
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.font_family = "Helvetica".to_string();
    opt.default_size = usvg::Size::from_wh(render_cfg.width, render_cfg.height)
        .ok_or_else(|| anyhow::anyhow!("invalid canvas size {}x{}", render_cfg.width, render_cfg.height))?;
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;
    pixmap.fill(parse_background(&render_cfg.background));

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

/// `#RRGGBB` to an opaque colour; anything else becomes white.
#[cfg(feature = "png")]
fn parse_background(value: &str) -> resvg::tiny_skia::Color {
    let hex = value.trim().trim_start_matches('#');
    let channel = |idx: usize| hex.get(idx..idx + 2).and_then(|c| u8::from_str_radix(c, 16).ok());
    match (hex.len(), channel(0), channel(2), channel(4)) {
        (6, Some(r), Some(g), Some(b)) => resvg::tiny_skia::Color::from_rgba8(r, g, b, 255),
        _ => resvg::tiny_skia::Color::WHITE,
    }
}

#[cfg(not(feature = "png"))]
pub fn write_output_png(_svg: &str, _output: &Path, _render_cfg: &RenderConfig) -> Result<()> {
    Err(anyhow::anyhow!("PNG output requires the `png` feature"))
}

pub fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::IconKind;
    use crate::ir::{Node, OperatorPosition};
    use crate::layout::compute_layout;

    fn minimal() -> Topology {
        let mut topology = Topology::new("Minimal WAN", "Acme", "Retail");
        topology.customer_nodes.push(Node::new("hq1", IconKind::HqBuilding, "HQ"));
        topology
            .operator_nodes
            .push(Node::operator("router1", IconKind::Router, "Edge", OperatorPosition::Ingress));
        topology.external_nodes.push(Node::new("cloud1", IconKind::Cloud, "AWS"));
        topology.connections = vec![Edge::new("hq1", "router1"), Edge::new("router1", "cloud1")];
        topology
    }

    fn render(topology: &Topology) -> String {
        let config = LayoutConfig::document();
        let layout = compute_layout(topology, 1600.0, 1000.0, &config);
        render_svg(topology, &layout, &Theme::light(), &config)
    }

    #[test]
    fn render_svg_basic() {
        let svg = render(&minimal());
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("width=\"1600\" height=\"1000\""));
        assert!(svg.contains(">Minimal WAN</text>"));
        assert!(svg.contains("Acme · Retail"));
        for label in ZONE_LABELS {
            assert!(svg.contains(label));
        }
        assert_eq!(svg.matches("<svg class=\"icon\"").count(), 3);
        assert_eq!(svg.matches("<path class=\"edge\"").count(), 2);
        assert!(!svg.contains("data-node-id"));
    }

    #[test]
    fn draw_order_puts_nodes_over_edges() {
        let svg = render(&minimal());
        let grid = svg.find("url(#tgrid)").unwrap();
        let title = svg.find("Minimal WAN").unwrap();
        let cloud = svg.find("operator-cloud").unwrap();
        let edge = svg.find("class=\"edge\"").unwrap();
        let node = svg.find("class=\"node\"").unwrap();
        let footer = svg.find("▸ INGRESS").unwrap();
        assert!(grid < title && title < cloud && cloud < edge && edge < node && node < footer);
    }

    #[test]
    fn edge_styles_are_distinct() {
        let mut topology = minimal();
        topology.connections = vec![
            Edge::new("hq1", "router1"),
            Edge::new("hq1", "router1").with_style(EdgeStyle::Dashed),
            Edge::new("hq1", "router1").with_style(EdgeStyle::Double),
        ];
        let svg = render(&topology);
        let edges: Vec<&str> = svg.lines().filter(|line| line.starts_with("<path class=\"edge\"")).collect();
        assert_eq!(edges.len(), 3);
        assert!(!edges[0].contains("stroke-dasharray"));
        assert!(edges[0].contains("stroke-width=\"2.5\""));
        assert!(edges[1].contains("stroke-dasharray=\"9,6\""));
        assert!(edges[2].contains("stroke-width=\"4\""));
        assert!(!edges[2].contains("stroke-dasharray"));
        assert_eq!(svg.matches("class=\"edge-halo\"").count(), 1);
        let halo = svg.find("edge-halo").unwrap();
        let double = svg.rfind("<path class=\"edge\"").unwrap();
        assert!(halo < double);
    }

    #[test]
    fn edge_colour_follows_source_type() {
        let svg = render(&minimal());
        let hq = IconKind::HqBuilding.color(crate::theme::Palette::Light);
        let router = IconKind::Router.color(crate::theme::Palette::Light);
        let edges: Vec<&str> = svg.lines().filter(|line| line.starts_with("<path class=\"edge\"")).collect();
        assert!(edges[0].contains(&format!("stroke=\"{hq}\"")));
        assert!(edges[1].contains(&format!("stroke=\"{router}\"")));
    }

    #[test]
    fn crossings_mark_both_boundaries() {
        let svg = render(&minimal());
        assert_eq!(svg.matches("class=\"crossing\"").count(), 2);
        assert!(svg.contains("class=\"crossing\" cx=\"400\""));
        assert!(svg.contains("class=\"crossing\" cx=\"1260\""));
    }

    #[test]
    fn edge_label_pill_sits_on_curve_midpoint() {
        let mut topology = minimal();
        topology.connections[0].label = Some("MPLS".to_string());
        let config = LayoutConfig::document();
        let layout = compute_layout(&topology, 1600.0, 1000.0, &config);
        let geometry = route_edge(&layout, &topology.connections[0], &config).unwrap();
        let svg = render_svg(&topology, &layout, &Theme::light(), &config);
        let width = 4.0 * config.pill_char_width + config.pill_padding;
        assert!(svg.contains(&format!(
            "<rect class=\"edge-label\" x=\"{}\" y=\"{}\" width=\"{}\"",
            fmt_num(geometry.midpoint.0 - width / 2.0),
            fmt_num(geometry.midpoint.1 - config.pill_height / 2.0),
            fmt_num(width)
        )));
        assert!(svg.contains(">MPLS</text>"));
    }

    #[test]
    fn user_text_is_escaped() {
        let mut topology = minimal();
        topology.solution_title = "A & B <WAN>".to_string();
        topology.customer_nodes[0].label = "\"quoted\" <b>".to_string();
        topology.customer_nodes[0].params = vec!["x<y".to_string()];
        topology.connections[0].label = Some("a&b".to_string());
        let svg = render(&topology);
        assert!(svg.contains("A &amp; B &lt;WAN&gt;"));
        assert!(svg.contains("&quot;quoted&quot; &lt;b&gt;"));
        assert!(svg.contains("x&lt;y"));
        assert!(svg.contains(">a&amp;b</text>"));
        assert!(!svg.contains("<WAN>"));
        assert!(!svg.contains("<b>"));
    }

    #[test]
    fn theme_strings_are_escaped_in_attributes() {
        let topology = minimal();
        let config = LayoutConfig::document();
        let layout = compute_layout(&topology, 1600.0, 1000.0, &config);
        let mut theme = Theme::light();
        theme.font_family = "Inter\", sans-serif".to_string();
        theme.background = "#fff\"/><script>x</script>".to_string();
        let svg = render_svg(&topology, &layout, &theme, &config);
        assert!(svg.contains("font-family=\"Inter&quot;, sans-serif\""));
        assert!(svg.contains("fill=\"#fff&quot;/&gt;&lt;script&gt;x&lt;/script&gt;\""));
        assert!(!svg.contains("<script>"));
        assert!(!svg.contains("Inter\", sans-serif"));
    }

    #[test]
    fn zone_labels_use_faint_colour_outside_operator() {
        let config = LayoutConfig::document();
        let topology = minimal();
        let layout = compute_layout(&topology, 1600.0, 1000.0, &config);
        let mut theme = Theme::light();
        theme.faint_text_color = "#010203".to_string();
        let svg = render_svg(&topology, &layout, &theme, &config);
        let zone_fills: Vec<&str> = svg
            .lines()
            .filter(|line| line.starts_with("<text class=\"zone-label\""))
            .filter_map(|line| line.split("fill=\"").nth(1))
            .filter_map(|rest| rest.split('"').next())
            .collect();
        assert_eq!(zone_fills, ["#010203", theme.operator_label_color.as_str(), "#010203"]);
    }

    #[test]
    fn count_suffix_and_param_limit() {
        let mut topology = minimal();
        topology.customer_nodes[0] = Node::new("hq1", IconKind::Branch, "Branches")
            .with_count(85)
            .with_params(["a", "b", "c", "d"]);
        let svg = render(&topology);
        assert_eq!(svg.matches("(×85)").count(), 1);
        assert_eq!(svg.matches("<svg class=\"icon\"").count(), 3);
        assert!(svg.contains(">c</text>"));
        assert!(!svg.contains(">d</text>"));
    }

    #[test]
    fn unknown_type_uses_fallback_icon() {
        let mut topology = minimal();
        topology.external_nodes[0].kind = "quantum_relay".into();
        let svg = render(&topology);
        assert_eq!(svg.matches("<svg class=\"icon\"").count(), 3);
        assert!(svg.contains(&format!("color:{}", icons::fallback_color(crate::theme::Palette::Light))));
    }

    #[test]
    fn dangling_edge_is_skipped() {
        let mut topology = minimal();
        topology.connections.push(Edge::new("hq1", "ghost"));
        let svg = render(&topology);
        assert_eq!(svg.matches("<path class=\"edge\"").count(), 2);
    }

    #[test]
    fn interactive_variant_carries_edit_attributes() {
        let mut topology = minimal();
        topology.customer_nodes[0].params = vec!["10G".to_string()];
        topology.connections[1].label = Some("DIA".to_string());
        let config = LayoutConfig::canvas();
        let layout = compute_layout(&topology, 1300.0, 800.0, &config);
        let state = InteractiveState {
            selected: Some("hq1".to_string()),
            edit_mode: true,
            dragging: None,
        };
        let svg = render_interactive_svg(&topology, &layout, &Theme::dark(), &config, &state);
        assert!(svg.contains("data-node-id=\"hq1\""));
        assert!(svg.contains("data-edit=\"title\""));
        assert!(svg.contains("data-edit=\"subtitle\""));
        assert!(svg.contains("data-edit=\"param:0\""));
        assert!(svg.contains("data-edit=\"edge-label\" data-edge-index=\"1\""));
        assert!(svg.contains("<path class=\"edge\" data-edge-index=\"0\""));
        assert_eq!(svg.matches("class=\"selection\"").count(), 1);
        assert_eq!(svg.matches("class=\"drag-handle\"").count(), 3);
        assert!(svg.contains("class=\"edit-hint\""));
        assert!(svg.contains(&Theme::dark().background));
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render(&minimal()), render(&minimal()));
    }

    #[test]
    fn fmt_num_trims() {
        assert_eq!(fmt_num(148.0), "148");
        assert_eq!(fmt_num(239.2), "239.2");
        assert_eq!(fmt_num(0.126), "0.13");
        assert_eq!(fmt_num(100.0), "100");
        assert_eq!(fmt_num(-0.001), "0");
        assert_eq!(fmt_num(-12.5), "-12.5");
    }

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(escape_xml("<a & \"b\" 'c'>"), "&lt;a &amp; &quot;b&quot; &apos;c&apos;&gt;");
    }
}
