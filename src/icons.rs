//! Icon catalog: one small Cisco-style glyph and one colour per node type.
//!
//! Glyphs are drawn in a shared `0 0 48 36` viewBox and reference
//! `currentColor`, which the serializer substitutes with the type colour.

use crate::theme::Palette;

/// viewBox shared by every glyph.
pub const ICON_VIEWBOX: &str = "0 0 48 36";
/// Placeholder replaced with the resolved type colour.
pub const CURRENT_COLOR: &str = "currentColor";

const FALLBACK_LIGHT: &str = "#94A3B8";
const FALLBACK_DARK: &str = "#64748B";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IconKind {
    HqBuilding,
    Branch,
    SmallSite,
    Factory,
    DataCenter,
    Router,
    Switch,
    Firewall,
    Cloud,
    Saas,
    Internet,
    Mpls,
    WirelessAp,
    CellTower,
    Server,
    Mec,
    IotGateway,
    Vpn,
    LoadBalancer,
    Phone,
    SecurityCloud,
    Sdwan,
    Users,
}

impl IconKind {
    pub const ALL: [IconKind; 23] = [
        IconKind::HqBuilding,
        IconKind::Branch,
        IconKind::SmallSite,
        IconKind::Factory,
        IconKind::DataCenter,
        IconKind::Router,
        IconKind::Switch,
        IconKind::Firewall,
        IconKind::Cloud,
        IconKind::Saas,
        IconKind::Internet,
        IconKind::Mpls,
        IconKind::WirelessAp,
        IconKind::CellTower,
        IconKind::Server,
        IconKind::Mec,
        IconKind::IotGateway,
        IconKind::Vpn,
        IconKind::LoadBalancer,
        IconKind::Phone,
        IconKind::SecurityCloud,
        IconKind::Sdwan,
        IconKind::Users,
    ];

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "hq_building" => Some(Self::HqBuilding),
            "branch" => Some(Self::Branch),
            "small_site" => Some(Self::SmallSite),
            "factory" => Some(Self::Factory),
            "data_center" => Some(Self::DataCenter),
            "router" => Some(Self::Router),
            "switch" => Some(Self::Switch),
            "firewall" => Some(Self::Firewall),
            "cloud" => Some(Self::Cloud),
            "saas" => Some(Self::Saas),
            "internet" => Some(Self::Internet),
            "mpls" => Some(Self::Mpls),
            "wireless_ap" => Some(Self::WirelessAp),
            "cell_tower" => Some(Self::CellTower),
            "server" => Some(Self::Server),
            "mec" => Some(Self::Mec),
            "iot_gateway" => Some(Self::IotGateway),
            "vpn" => Some(Self::Vpn),
            "load_balancer" => Some(Self::LoadBalancer),
            "phone" => Some(Self::Phone),
            "security_cloud" => Some(Self::SecurityCloud),
            "sdwan" => Some(Self::Sdwan),
            "users" => Some(Self::Users),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::HqBuilding => "hq_building",
            Self::Branch => "branch",
            Self::SmallSite => "small_site",
            Self::Factory => "factory",
            Self::DataCenter => "data_center",
            Self::Router => "router",
            Self::Switch => "switch",
            Self::Firewall => "firewall",
            Self::Cloud => "cloud",
            Self::Saas => "saas",
            Self::Internet => "internet",
            Self::Mpls => "mpls",
            Self::WirelessAp => "wireless_ap",
            Self::CellTower => "cell_tower",
            Self::Server => "server",
            Self::Mec => "mec",
            Self::IotGateway => "iot_gateway",
            Self::Vpn => "vpn",
            Self::LoadBalancer => "load_balancer",
            Self::Phone => "phone",
            Self::SecurityCloud => "security_cloud",
            Self::Sdwan => "sdwan",
            Self::Users => "users",
        }
    }

    /// Icon body in the shared 48x36 viewBox, stroked with `currentColor`.
    pub fn markup(self) -> &'static str {
        match self {
            Self::HqBuilding => concat!(
                r#"<rect x="14" y="2" width="20" height="32" rx="1" fill="none" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<rect x="4" y="12" width="10" height="22" rx="1" fill="none" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<rect x="34" y="12" width="10" height="22" rx="1" fill="none" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<rect x="17" y="5" width="3" height="3" fill="currentColor" opacity="0.35"/>"#,
                r#"<rect x="22" y="5" width="3" height="3" fill="currentColor" opacity="0.35"/>"#,
                r#"<rect x="28" y="5" width="3" height="3" fill="currentColor" opacity="0.35"/>"#,
                r#"<rect x="17" y="11" width="3" height="3" fill="currentColor" opacity="0.35"/>"#,
                r#"<rect x="22" y="11" width="3" height="3" fill="currentColor" opacity="0.35"/>"#,
                r#"<rect x="28" y="11" width="3" height="3" fill="currentColor" opacity="0.35"/>"#,
                r#"<rect x="17" y="17" width="3" height="3" fill="currentColor" opacity="0.35"/>"#,
                r#"<rect x="22" y="17" width="3" height="3" fill="currentColor" opacity="0.35"/>"#,
                r#"<rect x="28" y="17" width="3" height="3" fill="currentColor" opacity="0.35"/>"#,
                r#"<rect x="7" y="16" width="3" height="3" fill="currentColor" opacity="0.35"/>"#,
                r#"<rect x="7" y="22" width="3" height="3" fill="currentColor" opacity="0.35"/>"#,
                r#"<rect x="37" y="16" width="3" height="3" fill="currentColor" opacity="0.35"/>"#,
                r#"<rect x="37" y="22" width="3" height="3" fill="currentColor" opacity="0.35"/>"#,
                r#"<rect x="21" y="27" width="6" height="7" rx="1" fill="currentColor" opacity="0.25"/>"#,
            ),
            Self::Branch => concat!(
                r#"<rect x="6" y="8" width="36" height="22" rx="2" fill="none" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<line x1="4" y1="8" x2="44" y2="8" stroke="currentColor" stroke-width="2"/>"#,
                r#"<rect x="10" y="13" width="5" height="5" fill="currentColor" opacity="0.25"/>"#,
                r#"<rect x="18" y="13" width="5" height="5" fill="currentColor" opacity="0.25"/>"#,
                r#"<rect x="26" y="13" width="5" height="5" fill="currentColor" opacity="0.25"/>"#,
                r#"<rect x="34" y="13" width="5" height="5" fill="currentColor" opacity="0.25"/>"#,
                r#"<rect x="20" y="22" width="8" height="8" rx="1" fill="currentColor" opacity="0.2"/>"#,
            ),
            Self::SmallSite => concat!(
                r#"<rect x="10" y="10" width="28" height="18" rx="2" fill="none" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<line x1="8" y1="10" x2="40" y2="10" stroke="currentColor" stroke-width="2"/>"#,
                r#"<rect x="17" y="14" width="14" height="8" rx="1" fill="currentColor" opacity="0.15"/>"#,
            ),
            Self::Factory => concat!(
                r#"<rect x="4" y="14" width="36" height="18" rx="1" fill="none" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<polyline points="4,14 4,6 16,14 16,6 28,14 28,6 40,14" fill="none" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<rect x="34" y="2" width="4" height="12" fill="none" stroke="currentColor" stroke-width="1.5"/>"#,
            ),
            Self::DataCenter => concat!(
                r#"<rect x="8" y="2" width="32" height="32" rx="2" fill="none" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<rect x="12" y="5" width="24" height="5" rx="1" fill="currentColor" opacity="0.1" stroke="currentColor" stroke-width="0.8"/>"#,
                r#"<circle cx="15" cy="7.5" r="1.2" fill="currentColor" opacity="0.45"/>"#,
                r#"<rect x="12" y="12" width="24" height="5" rx="1" fill="currentColor" opacity="0.1" stroke="currentColor" stroke-width="0.8"/>"#,
                r#"<circle cx="15" cy="14.5" r="1.2" fill="currentColor" opacity="0.45"/>"#,
                r#"<rect x="12" y="19" width="24" height="5" rx="1" fill="currentColor" opacity="0.1" stroke="currentColor" stroke-width="0.8"/>"#,
                r#"<circle cx="15" cy="21.5" r="1.2" fill="currentColor" opacity="0.45"/>"#,
                r#"<rect x="12" y="26" width="24" height="5" rx="1" fill="currentColor" opacity="0.1" stroke="currentColor" stroke-width="0.8"/>"#,
                r#"<circle cx="15" cy="28.5" r="1.2" fill="currentColor" opacity="0.45"/>"#,
            ),
            Self::Router => concat!(
                r#"<circle cx="24" cy="18" r="14" fill="none" stroke="currentColor" stroke-width="2"/>"#,
                r#"<line x1="14" y1="18" x2="34" y2="18" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<line x1="24" y1="8" x2="24" y2="28" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<polyline points="31,15 34,18 31,21" fill="none" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<polyline points="17,15 14,18 17,21" fill="none" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<polyline points="21,11 24,8 27,11" fill="none" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<polyline points="21,25 24,28 27,25" fill="none" stroke="currentColor" stroke-width="1.8"/>"#,
            ),
            Self::Switch => concat!(
                r#"<rect x="6" y="10" width="36" height="16" rx="2" fill="none" stroke="currentColor" stroke-width="2"/>"#,
                r#"<line x1="12" y1="15" x2="36" y2="15" stroke="currentColor" stroke-width="1.5"/>"#,
                r#"<polyline points="33,12.5 36,15 33,17.5" fill="none" stroke="currentColor" stroke-width="1.5"/>"#,
                r#"<line x1="12" y1="21" x2="36" y2="21" stroke="currentColor" stroke-width="1.5"/>"#,
                r#"<polyline points="15,18.5 12,21 15,23.5" fill="none" stroke="currentColor" stroke-width="1.5"/>"#,
            ),
            Self::Firewall => concat!(
                r#"<rect x="6" y="4" width="36" height="28" rx="1" fill="none" stroke="currentColor" stroke-width="2"/>"#,
                r#"<line x1="6" y1="10" x2="42" y2="10" stroke="currentColor" stroke-width="1" opacity="0.4"/>"#,
                r#"<line x1="6" y1="16" x2="42" y2="16" stroke="currentColor" stroke-width="1" opacity="0.4"/>"#,
                r#"<line x1="6" y1="22" x2="42" y2="22" stroke="currentColor" stroke-width="1" opacity="0.4"/>"#,
                r#"<line x1="6" y1="28" x2="42" y2="28" stroke="currentColor" stroke-width="1" opacity="0.4"/>"#,
                r#"<line x1="18" y1="4" x2="18" y2="10" stroke="currentColor" stroke-width="1" opacity="0.4"/>"#,
                r#"<line x1="30" y1="4" x2="30" y2="10" stroke="currentColor" stroke-width="1" opacity="0.4"/>"#,
                r#"<line x1="12" y1="10" x2="12" y2="16" stroke="currentColor" stroke-width="1" opacity="0.4"/>"#,
                r#"<line x1="24" y1="10" x2="24" y2="16" stroke="currentColor" stroke-width="1" opacity="0.4"/>"#,
                r#"<line x1="36" y1="10" x2="36" y2="16" stroke="currentColor" stroke-width="1" opacity="0.4"/>"#,
                r#"<line x1="18" y1="16" x2="18" y2="22" stroke="currentColor" stroke-width="1" opacity="0.4"/>"#,
                r#"<line x1="30" y1="16" x2="30" y2="22" stroke="currentColor" stroke-width="1" opacity="0.4"/>"#,
            ),
            Self::Cloud => concat!(
                r#"<path d="M14,28 A8,8 0 0,1 10,14 A10,10 0 0,1 28,8 A8,8 0 0,1 40,16 A7,7 0 0,1 38,28 Z" fill="none" stroke="currentColor" stroke-width="2"/>"#,
            ),
            Self::Saas => concat!(
                r#"<path d="M14,26 A7,7 0 0,1 10,14 A9,9 0 0,1 26,8 A7,7 0 0,1 38,14 A6,6 0 0,1 36,26 Z" fill="none" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<rect x="17" y="14" width="5" height="5" rx="0.5" fill="currentColor" opacity="0.25"/>"#,
                r#"<rect x="24" y="14" width="5" height="5" rx="0.5" fill="currentColor" opacity="0.25"/>"#,
                r#"<rect x="20" y="20" width="5" height="5" rx="0.5" fill="currentColor" opacity="0.25"/>"#,
            ),
            Self::Internet => concat!(
                r#"<circle cx="24" cy="18" r="13" fill="none" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<ellipse cx="24" cy="18" rx="13" ry="5" fill="none" stroke="currentColor" stroke-width="1" opacity="0.5"/>"#,
                r#"<ellipse cx="24" cy="18" rx="6" ry="13" fill="none" stroke="currentColor" stroke-width="1" opacity="0.5"/>"#,
            ),
            Self::Mpls => concat!(
                r#"<path d="M12,26 A7,7 0 0,1 8,16 A8,8 0 0,1 22,10 A7,7 0 0,1 38,14 A6,6 0 0,1 36,26 Z" fill="none" stroke="currentColor" stroke-width="1.8" stroke-dasharray="4,2"/>"#,
                r#"<text x="24" y="20" text-anchor="middle" fill="currentColor" font-size="7" font-weight="600" opacity="0.5">MPLS</text>"#,
            ),
            Self::WirelessAp => concat!(
                r#"<circle cx="24" cy="22" r="6" fill="none" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<circle cx="24" cy="22" r="2" fill="currentColor" opacity="0.35"/>"#,
                r#"<path d="M16,14 A12,12 0 0,1 32,14" fill="none" stroke="currentColor" stroke-width="1.5" opacity="0.6"/>"#,
                r#"<path d="M12,10 A16,16 0 0,1 36,10" fill="none" stroke="currentColor" stroke-width="1.5" opacity="0.4"/>"#,
            ),
            Self::CellTower => concat!(
                r#"<line x1="24" y1="4" x2="16" y2="34" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<line x1="24" y1="4" x2="32" y2="34" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<line x1="18" y1="14" x2="30" y2="14" stroke="currentColor" stroke-width="1.2"/>"#,
                r#"<line x1="17" y1="22" x2="31" y2="22" stroke="currentColor" stroke-width="1.2"/>"#,
                r#"<line x1="16" y1="30" x2="32" y2="30" stroke="currentColor" stroke-width="1.2"/>"#,
                r#"<circle cx="24" cy="4" r="2.5" fill="currentColor" opacity="0.25" stroke="currentColor" stroke-width="1.2"/>"#,
                r#"<path d="M30,6 A8,8 0 0,1 34,12" fill="none" stroke="currentColor" stroke-width="1.2" opacity="0.5"/>"#,
                r#"<path d="M18,6 A8,8 0 0,0 14,12" fill="none" stroke="currentColor" stroke-width="1.2" opacity="0.5"/>"#,
            ),
            Self::Server => concat!(
                r#"<rect x="10" y="4" width="28" height="8" rx="1.5" fill="none" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<circle cx="14" cy="8" r="1.2" fill="currentColor" opacity="0.45"/>"#,
                r#"<rect x="10" y="14" width="28" height="8" rx="1.5" fill="none" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<circle cx="14" cy="18" r="1.2" fill="currentColor" opacity="0.45"/>"#,
                r#"<rect x="10" y="24" width="28" height="8" rx="1.5" fill="none" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<circle cx="14" cy="28" r="1.2" fill="currentColor" opacity="0.45"/>"#,
            ),
            Self::Mec => concat!(
                r#"<rect x="10" y="8" width="22" height="24" rx="2" fill="none" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<rect x="14" y="12" width="14" height="5" rx="1" fill="currentColor" opacity="0.1" stroke="currentColor" stroke-width="0.8"/>"#,
                r#"<circle cx="17" cy="14.5" r="1" fill="currentColor" opacity="0.45"/>"#,
                r#"<rect x="14" y="20" width="14" height="5" rx="1" fill="currentColor" opacity="0.1" stroke="currentColor" stroke-width="0.8"/>"#,
                r#"<circle cx="17" cy="22.5" r="1" fill="currentColor" opacity="0.45"/>"#,
                r#"<path d="M34,14 A6,6 0 0,1 34,22" fill="none" stroke="currentColor" stroke-width="1.5" opacity="0.5"/>"#,
            ),
            Self::IotGateway => concat!(
                r#"<rect x="10" y="10" width="28" height="18" rx="2" fill="none" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<line x1="20" y1="10" x2="20" y2="4" stroke="currentColor" stroke-width="1.5"/>"#,
                r#"<circle cx="20" cy="3" r="1.5" fill="currentColor" opacity="0.35"/>"#,
                r#"<line x1="28" y1="10" x2="28" y2="4" stroke="currentColor" stroke-width="1.5"/>"#,
                r#"<circle cx="28" cy="3" r="1.5" fill="currentColor" opacity="0.35"/>"#,
                r#"<rect x="13" y="22" width="3" height="3" rx="0.5" fill="currentColor" opacity="0.25"/>"#,
                r#"<rect x="18" y="22" width="3" height="3" rx="0.5" fill="currentColor" opacity="0.25"/>"#,
                r#"<rect x="23" y="22" width="3" height="3" rx="0.5" fill="currentColor" opacity="0.25"/>"#,
                r#"<rect x="28" y="22" width="3" height="3" rx="0.5" fill="currentColor" opacity="0.25"/>"#,
            ),
            Self::Vpn => concat!(
                r#"<rect x="12" y="16" width="24" height="16" rx="2" fill="none" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<path d="M18,16 V12 A6,6 0 0,1 30,12 V16" fill="none" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<circle cx="24" cy="23" r="2.5" fill="currentColor" opacity="0.25"/>"#,
            ),
            Self::LoadBalancer => concat!(
                r#"<circle cx="24" cy="18" r="13" fill="none" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<line x1="16" y1="14" x2="32" y2="14" stroke="currentColor" stroke-width="1.5"/>"#,
                r#"<polyline points="29,11.5 32,14 29,16.5" fill="none" stroke="currentColor" stroke-width="1.2"/>"#,
                r#"<line x1="16" y1="22" x2="32" y2="22" stroke="currentColor" stroke-width="1.5"/>"#,
                r#"<polyline points="19,19.5 16,22 19,24.5" fill="none" stroke="currentColor" stroke-width="1.2"/>"#,
            ),
            Self::Phone => concat!(
                r#"<rect x="8" y="14" width="32" height="18" rx="2" fill="none" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<rect x="11" y="16" width="14" height="8" rx="1" fill="currentColor" opacity="0.1"/>"#,
                r#"<path d="M10,12 Q10,6 16,6 L32,6 Q38,6 38,12" fill="none" stroke="currentColor" stroke-width="1.8"/>"#,
            ),
            Self::SecurityCloud => concat!(
                r#"<path d="M24,4 L38,10 L38,20 Q38,30 24,34 Q10,30 10,20 L10,10 Z" fill="none" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<polyline points="17,19 22,24 31,14" fill="none" stroke="currentColor" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round"/>"#,
            ),
            Self::Sdwan => concat!(
                r#"<circle cx="18" cy="16" r="10" fill="none" stroke="currentColor" stroke-width="1.5" opacity="0.6"/>"#,
                r#"<circle cx="30" cy="16" r="10" fill="none" stroke="currentColor" stroke-width="1.5" opacity="0.6"/>"#,
                r#"<circle cx="24" cy="24" r="10" fill="none" stroke="currentColor" stroke-width="1.5" opacity="0.6"/>"#,
                r#"<circle cx="24" cy="18" r="3" fill="currentColor" opacity="0.2" stroke="currentColor" stroke-width="1"/>"#,
            ),
            Self::Users => concat!(
                r#"<circle cx="24" cy="12" r="5" fill="none" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<path d="M14,30 Q14,22 24,20 Q34,22 34,30" fill="none" stroke="currentColor" stroke-width="1.8"/>"#,
                r#"<circle cx="14" cy="10" r="3.5" fill="none" stroke="currentColor" stroke-width="1.2" opacity="0.45"/>"#,
                r#"<circle cx="34" cy="10" r="3.5" fill="none" stroke="currentColor" stroke-width="1.2" opacity="0.45"/>"#,
            ),
        }
    }

    pub fn color(self, palette: Palette) -> &'static str {
        match palette {
            Palette::Light => match self {
                Self::HqBuilding => "#2563EB",
                Self::Branch => "#2563EB",
                Self::SmallSite => "#3B82F6",
                Self::Factory => "#D97706",
                Self::DataCenter => "#7C3AED",
                Self::Router => "#4F46E5",
                Self::Switch => "#4F46E5",
                Self::Firewall => "#DC2626",
                Self::Cloud => "#0891B2",
                Self::Saas => "#0D9488",
                Self::Internet => "#6B7280",
                Self::Mpls => "#7C3AED",
                Self::WirelessAp => "#EA580C",
                Self::CellTower => "#EA580C",
                Self::Server => "#059669",
                Self::Mec => "#10B981",
                Self::IotGateway => "#CA8A04",
                Self::Vpn => "#E11D48",
                Self::LoadBalancer => "#7C3AED",
                Self::Phone => "#DB2777",
                Self::SecurityCloud => "#DC2626",
                Self::Sdwan => "#7C3AED",
                Self::Users => "#0284C7",
            },
            Palette::Dark => match self {
                Self::HqBuilding => "#60A5FA",
                Self::Branch => "#60A5FA",
                Self::SmallSite => "#93C5FD",
                Self::Factory => "#FBBF24",
                Self::DataCenter => "#A78BFA",
                Self::Router => "#818CF8",
                Self::Switch => "#818CF8",
                Self::Firewall => "#F87171",
                Self::Cloud => "#22D3EE",
                Self::Saas => "#2DD4BF",
                Self::Internet => "#94A3B8",
                Self::Mpls => "#C4B5FD",
                Self::WirelessAp => "#FB923C",
                Self::CellTower => "#FB923C",
                Self::Server => "#34D399",
                Self::Mec => "#6EE7B7",
                Self::IotGateway => "#FCD34D",
                Self::Vpn => "#FB7185",
                Self::LoadBalancer => "#A78BFA",
                Self::Phone => "#F472B6",
                Self::SecurityCloud => "#F87171",
                Self::Sdwan => "#A78BFA",
                Self::Users => "#38BDF8",
            },
        }
    }
}

/// Resolved glyph and colour for one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconStyle {
    pub markup: &'static str,
    pub color: &'static str,
}

impl IconStyle {
    /// Glyph markup with `currentColor` replaced by the resolved colour.
    pub fn colored_markup(&self) -> String {
        self.markup.replace(CURRENT_COLOR, self.color)
    }
}

/// Look up the glyph for a node type; unknown types get the cloud glyph
/// in neutral grey.
pub fn lookup(kind: Option<IconKind>, palette: Palette) -> IconStyle {
    match kind {
        Some(kind) => IconStyle {
            markup: kind.markup(),
            color: kind.color(palette),
        },
        None => IconStyle {
            markup: IconKind::Cloud.markup(),
            color: fallback_color(palette),
        },
    }
}

pub fn fallback_color(palette: Palette) -> &'static str {
    match palette {
        Palette::Light => FALLBACK_LIGHT,
        Palette::Dark => FALLBACK_DARK,
    }
}
