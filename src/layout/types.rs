use std::collections::BTreeMap;

use crate::ir::Overrides;

/// Placement group a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Zone {
    Customer,
    OperatorIngress,
    OperatorCore,
    OperatorEgress,
    External,
}

impl Zone {
    pub const ALL: [Zone; 5] = [
        Zone::Customer,
        Zone::OperatorIngress,
        Zone::OperatorCore,
        Zone::OperatorEgress,
        Zone::External,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Zone::Customer => "customer",
            Zone::OperatorIngress => "op_in",
            Zone::OperatorCore => "op_core",
            Zone::OperatorEgress => "op_eg",
            Zone::External => "external",
        }
    }

    pub fn is_operator(self) -> bool {
        matches!(
            self,
            Zone::OperatorIngress | Zone::OperatorCore | Zone::OperatorEgress
        )
    }
}

/// Icon top-left corner plus centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodePosition {
    pub x: f32,
    pub y: f32,
    pub cx: f32,
    pub cy: f32,
}

impl NodePosition {
    pub fn from_center(cx: f32, cy: f32, icon_width: f32, icon_height: f32) -> Self {
        Self {
            x: cx - icon_width / 2.0,
            y: cy - icon_height / 2.0,
            cx,
            cy,
        }
    }

    pub fn shifted(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            cx: self.cx + dx,
            cy: self.cy + dy,
        }
    }
}

/// Canvas-level geometry shared by the router and the serializer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutFrame {
    pub width: f32,
    pub height: f32,
    pub icon_width: f32,
    pub icon_height: f32,
    pub pad_top: f32,
    pub pad_bottom: f32,
    pub customer_cx: f32,
    pub external_cx: f32,
    pub operator_left: f32,
    pub operator_right: f32,
    pub operator_width: f32,
    pub operator_cx: f32,
    pub operator_cy: f32,
    pub ingress_x: f32,
    pub core_x: f32,
    pub egress_x: f32,
}

impl LayoutFrame {
    pub fn column_x(&self, zone: Zone) -> f32 {
        match zone {
            Zone::Customer => self.customer_cx,
            Zone::OperatorIngress => self.ingress_x,
            Zone::OperatorCore => self.core_x,
            Zone::OperatorEgress => self.egress_x,
            Zone::External => self.external_cx,
        }
    }
}

/// One stacked column as placed.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneColumn {
    pub zone: Zone,
    pub cx: f32,
    pub slot_height: f32,
    /// Top of the first slot.
    pub top: f32,
    pub nodes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub frame: LayoutFrame,
    pub positions: BTreeMap<String, NodePosition>,
    pub zones: BTreeMap<String, Zone>,
    pub columns: Vec<ZoneColumn>,
}

impl Layout {
    pub fn position(&self, id: &str) -> Option<&NodePosition> {
        self.positions.get(id)
    }

    pub fn zone(&self, id: &str) -> Option<Zone> {
        self.zones.get(id).copied()
    }

    pub fn column(&self, zone: Zone) -> Option<&ZoneColumn> {
        self.columns.iter().find(|column| column.zone == zone)
    }

    /// Node ids placed in `zone`, in stacking order.
    pub fn nodes_in(&self, zone: Zone) -> &[String] {
        self.column(zone)
            .map(|column| column.nodes.as_slice())
            .unwrap_or(&[])
    }

    /// Shift every overridden node by its delta. Ids the layout does not
    /// know are ignored.
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        for (id, offset) in overrides {
            if let Some(position) = self.positions.get_mut(id) {
                *position = position.shifted(offset.dx, offset.dy);
            }
        }
    }

    pub fn with_overrides(&self, overrides: &Overrides) -> Layout {
        let mut layout = self.clone();
        layout.apply_overrides(overrides);
        layout
    }
}

/// Which side of an icon's bounding box an edge leaves or enters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeSide {
    Left,
    Right,
    Top,
    Bottom,
}

/// Axis the Bezier tangents are aligned with at both endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TangentAxis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossingKind {
    /// customer -> operator, marked on the operator's left boundary.
    Ingress,
    /// operator -> external, marked on the operator's right boundary.
    Egress,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneCrossing {
    pub kind: CrossingKind,
    pub x: f32,
    pub y: f32,
}

/// Routed cubic Bezier between two node boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeGeometry {
    pub start: (f32, f32),
    pub control_start: (f32, f32),
    pub control_end: (f32, f32),
    pub end: (f32, f32),
    pub start_side: EdgeSide,
    pub end_side: EdgeSide,
    pub tangent: TangentAxis,
    /// Point on the curve at t = 0.5.
    pub midpoint: (f32, f32),
    pub crossing: Option<ZoneCrossing>,
}

impl EdgeGeometry {
    /// SVG path data, `M start C c1 c2 end`.
    pub fn path_data(&self) -> String {
        use crate::render::fmt_num;
        format!(
            "M{},{} C{},{} {},{} {},{}",
            fmt_num(self.start.0),
            fmt_num(self.start.1),
            fmt_num(self.control_start.0),
            fmt_num(self.control_start.1),
            fmt_num(self.control_end.0),
            fmt_num(self.control_end.1),
            fmt_num(self.end.0),
            fmt_num(self.end.1),
        )
    }

    /// Evaluate the curve at `t` in `[0, 1]`.
    pub fn point_at(&self, t: f32) -> (f32, f32) {
        cubic_point(self.start, self.control_start, self.control_end, self.end, t)
    }
}

pub(crate) fn cubic_point(
    p0: (f32, f32),
    p1: (f32, f32),
    p2: (f32, f32),
    p3: (f32, f32),
    t: f32,
) -> (f32, f32) {
    let u = 1.0 - t;
    let a = u * u * u;
    let b = 3.0 * u * u * t;
    let c = 3.0 * u * t * t;
    let d = t * t * t;
    (
        a * p0.0 + b * p1.0 + c * p2.0 + d * p3.0,
        a * p0.1 + b * p1.1 + c * p2.1 + d * p3.1,
    )
}
