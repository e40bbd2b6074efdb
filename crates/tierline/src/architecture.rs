//! The fixed three-tier deployment.
//!
//! Every label, icon and tone of the diagram lives here. The tree is
//! assembled top to bottom in the order it is drawn.

use tierline_core::{icon::IconId, style::Tone};

use crate::diagram::{Diagram, DiagramNode, Mark, Marker, NodeKind, Tier};

/// Builds the complete diagram.
pub fn three_tier() -> Diagram {
    let canvas = DiagramNode::new(NodeKind::Canvas, "").with_children([
        internet(),
        connector(Tone::Blue, Tone::Purple, None),
        gateway(),
        network(),
        bastion(),
        legend(),
        features(),
    ]);

    Diagram::new(
        DiagramNode::new(NodeKind::Diagram, "Azure Three-Tier Web Application Architecture")
            .with_children([header(), canvas, footer()]),
    )
}

fn header() -> DiagramNode {
    DiagramNode::new(
        NodeKind::Header,
        "Azure Three-Tier Web Application Architecture",
    )
    .with_caption("High Availability | Auto-Scaling | Secure")
}

fn internet() -> DiagramNode {
    DiagramNode::new(NodeKind::Endpoint, "Internet")
        .with_caption("End Users")
        .with_icon(IconId::Globe)
        .with_tone(Tone::Blue)
}

fn gateway() -> DiagramNode {
    DiagramNode::new(NodeKind::Gateway, "Application Gateway")
        .with_caption("appgw-threetier")
        .with_icon(IconId::Shield)
        .with_tone(Tone::Purple)
        .with_child(panel(
            Tone::Purple,
            &[
                "Public IP: x.x.x.x",
                "Layer 7 Load Balancer",
                "Health Probes Enabled",
                "WAF Ready",
            ],
        ))
}

fn network() -> DiagramNode {
    DiagramNode::new(
        NodeKind::Network,
        "Virtual Network: vnet-threetier (10.0.0.0/16)",
    )
    .with_icon(IconId::Cloud)
    .with_tone(Tone::Blue)
    .with_children([
        connector(Tone::Purple, Tone::Purple, None),
        web_tier(),
        connector(Tone::Green, Tone::Orange, Some("HTTP:3000")),
        app_tier(),
        connector(Tone::Orange, Tone::Red, Some("SQL:1433")),
        database_tier(),
    ])
}

fn web_tier() -> DiagramNode {
    let tone = Tier::Web.tone();
    let vm = |name: &str| {
        instance(
            name,
            IconId::Server,
            tone,
            &["NGINX Web Server", "Ubuntu 22.04", "Port 80/443"],
        )
    };

    tier(Tier::Web, "WEB TIER", "Subnet: 10.0.2.0/24", IconId::Server).with_children([
        vm("VMSS Web-0"),
        vm("VMSS Web-1"),
        policy("NSG: nsg-webtier", "Allow from AppGW, Bastion only", tone),
    ])
}

fn app_tier() -> DiagramNode {
    let tone = Tier::App.tone();
    let vm = |name: &str| {
        instance(
            name,
            IconId::Zap,
            tone,
            &["Node.js API", "Express.js", "Port 3000"],
        )
    };

    tier(Tier::App, "APPLICATION TIER", "Subnet: 10.0.3.0/24", IconId::Zap).with_children([
        vm("VMSS App-0"),
        vm("VMSS App-1"),
        DiagramNode::new(NodeKind::Balancer, "Internal Load Balancer:")
            .with_caption("10.0.3.10")
            .with_icon(IconId::MonitorDot)
            .with_tone(tone),
        policy("NSG: nsg-apptier", "Allow from Web Tier only", tone),
    ])
}

fn database_tier() -> DiagramNode {
    let tone = Tier::Database.tone();
    let sql = DiagramNode::new(NodeKind::Service, "Azure SQL Database")
        .with_icon(IconId::Database)
        .with_tone(tone)
        .with_children(details(
            Mark::Dot,
            &[
                "Database: sqldb-products",
                "Private Link Enabled",
                "No Public Access",
                "Automated Backups",
                "TDE Enabled",
            ],
        ));

    tier(
        Tier::Database,
        "DATABASE TIER",
        "Subnet: 10.0.4.0/24",
        IconId::Database,
    )
    .with_children([
        DiagramNode::new(NodeKind::Instance, "Private Endpoint")
            .with_caption("IP: 10.0.4.x")
            .with_icon(IconId::Lock)
            .with_tone(tone)
            .with_child(sql),
        policy("NSG: nsg-database", "Allow from App Tier ONLY", tone),
    ])
}

fn bastion() -> DiagramNode {
    DiagramNode::new(NodeKind::Management, "Azure Bastion")
        .with_caption("Management Subnet: 10.0.5.0/26")
        .with_icon(IconId::Lock)
        .with_tone(Tone::Indigo)
        .with_child(panel(
            Tone::Indigo,
            &[
                "Secure RDP/SSH Access",
                "No Public IPs on VMs",
                "Zero Trust Access",
            ],
        ))
}

fn legend() -> DiagramNode {
    let swatch = |label: &str, tone| {
        DiagramNode::new(NodeKind::LegendEntry(Marker::Swatch), label).with_tone(tone)
    };
    let glyph = |label: &str, icon, tone| {
        DiagramNode::new(NodeKind::LegendEntry(Marker::Glyph), label)
            .with_icon(icon)
            .with_tone(tone)
    };

    DiagramNode::new(NodeKind::Legend, "Legend & Key Features").with_children([
        swatch("Web Tier", Tone::Green),
        swatch("App Tier", Tone::Orange),
        swatch("Database Tier", Tone::Red),
        glyph("Security (NSG)", IconId::Shield, Tone::Blue),
        glyph("Auto-Scaling", IconId::Zap, Tone::Yellow),
        glyph("Private Access", IconId::Lock, Tone::Purple),
        glyph("Load Balancer", IconId::MonitorDot, Tone::Green),
        glyph("Public Access", IconId::Globe, Tone::Blue),
    ])
}

fn features() -> DiagramNode {
    let feature = |label: &str, icon, tone, lines: &[&str]| {
        DiagramNode::new(NodeKind::Feature, label)
            .with_icon(icon)
            .with_tone(tone)
            .with_children(details(Mark::Check, lines))
    };

    DiagramNode::new(NodeKind::Features, "").with_children([
        feature(
            "Security",
            IconId::Shield,
            Tone::Green,
            &[
                "NSG per subnet",
                "Private endpoints",
                "Zero public IPs",
                "Bastion access",
            ],
        ),
        feature(
            "Scalability",
            IconId::Zap,
            Tone::Blue,
            &[
                "Auto-scaling VMSS",
                "Load balancing",
                "Health probes",
                "2-5 instances",
            ],
        ),
        feature(
            "Monitoring",
            IconId::MonitorDot,
            Tone::Purple,
            &[
                "Azure Monitor",
                "NSG Flow Logs",
                "Health checks",
                "Cost alerts",
            ],
        ),
    ])
}

fn footer() -> DiagramNode {
    DiagramNode::new(
        NodeKind::Footer,
        "Azure Three-Tier Architecture | Production-Grade | High Availability",
    )
    .with_caption(
        "Built with: Azure VMSS • Application Gateway • Azure SQL • Private Link • NSGs • Bastion",
    )
}

fn tier(tier: Tier, label: &str, subnet: &str, icon: IconId) -> DiagramNode {
    DiagramNode::new(NodeKind::Tier(tier), label)
        .with_caption(subnet)
        .with_icon(icon)
        .with_tone(tier.tone())
}

fn instance(name: &str, icon: IconId, tone: Tone, lines: &[&str]) -> DiagramNode {
    DiagramNode::new(NodeKind::Instance, name)
        .with_icon(icon)
        .with_tone(tone)
        .with_children(details(Mark::Dot, lines))
}

fn policy(name: &str, rule: &str, tone: Tone) -> DiagramNode {
    DiagramNode::new(NodeKind::Policy, name)
        .with_caption(rule)
        .with_icon(IconId::Shield)
        .with_tone(tone)
}

fn panel(tone: Tone, lines: &[&str]) -> DiagramNode {
    DiagramNode::new(NodeKind::Panel, "")
        .with_tone(tone)
        .with_children(details(Mark::Dot, lines))
}

fn connector(from: Tone, to: Tone, protocol: Option<&str>) -> DiagramNode {
    DiagramNode::new(NodeKind::Connector { to }, protocol.unwrap_or_default()).with_tone(from)
}

fn details(mark: Mark, lines: &[&str]) -> Vec<DiagramNode> {
    lines
        .iter()
        .map(|line| DiagramNode::new(NodeKind::Detail(mark), *line))
        .collect()
}
