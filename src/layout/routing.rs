use crate::config::LayoutConfig;
use crate::ir::Edge;

use super::{
    CrossingKind, EdgeGeometry, EdgeSide, Layout, LayoutFrame, NodePosition, TangentAxis, Zone,
    ZoneCrossing, types::cubic_point,
};

/// Route one connection. Returns `None` when either endpoint is not in the
/// layout; callers skip the edge and keep rendering.
pub fn route_edge(layout: &Layout, edge: &Edge, config: &LayoutConfig) -> Option<EdgeGeometry> {
    let (Some(from), Some(to)) = (layout.position(&edge.from), layout.position(&edge.to)) else {
        tracing::debug!(from = %edge.from, to = %edge.to, "skipping edge with dangling endpoint");
        return None;
    };
    Some(route_between(
        from,
        to,
        layout.zone(&edge.from),
        layout.zone(&edge.to),
        &layout.frame,
        config,
    ))
}

/// Cubic Bezier from the boundary of `from`'s icon to the boundary of `to`'s.
pub fn route_between(
    from: &NodePosition,
    to: &NodePosition,
    from_zone: Option<Zone>,
    to_zone: Option<Zone>,
    frame: &LayoutFrame,
    config: &LayoutConfig,
) -> EdgeGeometry {
    let half_w = frame.icon_width / 2.0 + config.edge_margin;
    let half_h = frame.icon_height / 2.0 + config.edge_margin;

    let (start, end, start_side, end_side) = if (from.cx - to.cx).abs() < config.align_threshold {
        if from.cy < to.cy {
            (
                (from.cx, from.cy + half_h),
                (to.cx, to.cy - half_h),
                EdgeSide::Bottom,
                EdgeSide::Top,
            )
        } else {
            (
                (from.cx, from.cy - half_h),
                (to.cx, to.cy + half_h),
                EdgeSide::Top,
                EdgeSide::Bottom,
            )
        }
    } else if from.cx < to.cx {
        (
            (from.cx + half_w, from.cy),
            (to.cx - half_w, to.cy),
            EdgeSide::Right,
            EdgeSide::Left,
        )
    } else {
        (
            (from.cx - half_w, from.cy),
            (to.cx + half_w, to.cy),
            EdgeSide::Left,
            EdgeSide::Right,
        )
    };

    let dx = end.0 - start.0;
    let dy = end.1 - start.1;
    let tangent = if dy.abs() > dx.abs() * config.vertical_aspect {
        TangentAxis::Vertical
    } else {
        TangentAxis::Horizontal
    };
    let (control_start, control_end) = match tangent {
        TangentAxis::Vertical => {
            let cp = control_distance(dy, config) * sign(dy);
            ((start.0, start.1 + cp), (end.0, end.1 - cp))
        }
        TangentAxis::Horizontal => {
            let cp = control_distance(dx, config) * sign(dx);
            ((start.0 + cp, start.1), (end.0 - cp, end.1))
        }
    };

    EdgeGeometry {
        start,
        control_start,
        control_end,
        end,
        start_side,
        end_side,
        tangent,
        midpoint: cubic_point(start, control_start, control_end, end, 0.5),
        crossing: zone_crossing(from_zone, to_zone, frame, (start.1 + end.1) / 2.0),
    }
}

fn control_distance(delta: f32, config: &LayoutConfig) -> f32 {
    (delta.abs() * config.control_ratio).max(config.control_min)
}

/// Like `f32::signum`, but zero stays zero so a flat hop keeps its control
/// points on the endpoints.
fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

fn zone_crossing(
    from_zone: Option<Zone>,
    to_zone: Option<Zone>,
    frame: &LayoutFrame,
    y: f32,
) -> Option<ZoneCrossing> {
    let (from_zone, to_zone) = (from_zone?, to_zone?);
    if from_zone == Zone::Customer && to_zone.is_operator() {
        Some(ZoneCrossing {
            kind: CrossingKind::Ingress,
            x: frame.operator_left,
            y,
        })
    } else if from_zone.is_operator() && to_zone == Zone::External {
        Some(ZoneCrossing {
            kind: CrossingKind::Egress,
            x: frame.operator_right,
            y,
        })
    } else {
        None
    }
}
