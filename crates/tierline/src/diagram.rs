//! The diagram node tree.
//!
//! A [`Diagram`] is a tree of [`DiagramNode`]s fixed at authoring time. Each
//! node carries a [`NodeKind`], a label, an optional caption and icon, a
//! [`Tone`] and its ordered children. Nothing in the tree is computed from
//! input data and nothing mutates it after construction.

use std::fmt;

use tierline_core::{icon::IconId, style::Tone};

/// One logical layer of the illustrated architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Web,
    App,
    Database,
}

impl Tier {
    /// Tiers in traffic order.
    pub const ORDER: [Tier; 3] = [Tier::Web, Tier::App, Tier::Database];

    /// Hue the tier is drawn in.
    pub fn tone(self) -> Tone {
        match self {
            Self::Web => Tone::Green,
            Self::App => Tone::Orange,
            Self::Database => Tone::Red,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::App => "app",
            Self::Database => "database",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a legend entry shows its convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// A small filled square in the entry's tone
    Swatch,
    /// The entry's icon, drawn in its tone
    Glyph,
}

/// Bullet symbol of a detail line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Dot,
    Check,
}

impl Mark {
    pub fn symbol(self) -> char {
        match self {
            Self::Dot => '•',
            Self::Check => '✓',
        }
    }
}

/// What a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Tree root
    Diagram,
    /// Title and subtitle
    Header,
    /// White sheet holding the architecture
    Canvas,
    /// Traffic source outside the cloud
    Endpoint,
    /// Line between two sections, optionally labeled with a protocol
    Connector { to: Tone },
    /// Public entry point in front of the network
    Gateway,
    /// Virtual network boundary
    Network,
    Tier(Tier),
    /// A machine or endpoint inside a tier
    Instance,
    /// A managed service reached through an instance
    Service,
    /// Box grouping detail lines
    Panel,
    /// Network security rule
    Policy,
    /// Internal load balancer
    Balancer,
    /// Administrative access section
    Management,
    Legend,
    LegendEntry(Marker),
    /// Row of feature summary tiles
    Features,
    Feature,
    Footer,
    /// A single bullet line
    Detail(Mark),
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Diagram => "diagram",
            Self::Header => "header",
            Self::Canvas => "canvas",
            Self::Endpoint => "endpoint",
            Self::Connector { .. } => "connector",
            Self::Gateway => "gateway",
            Self::Network => "network",
            Self::Tier(_) => "tier",
            Self::Instance => "instance",
            Self::Service => "service",
            Self::Panel => "panel",
            Self::Policy => "policy",
            Self::Balancer => "balancer",
            Self::Management => "management",
            Self::Legend => "legend",
            Self::LegendEntry(_) => "legend-entry",
            Self::Features => "features",
            Self::Feature => "feature",
            Self::Footer => "footer",
            Self::Detail(_) => "detail",
        }
    }

    /// Returns `true` for the top-level sections whose order is fixed:
    /// gateway, the three tiers, management, legend, features and footer.
    pub fn is_section(&self) -> bool {
        matches!(
            self,
            Self::Gateway
                | Self::Tier(_)
                | Self::Management
                | Self::Legend
                | Self::Features
                | Self::Footer
        )
    }
}

/// A node of the diagram tree.
///
/// Nodes are assembled with consuming `with_*` builder methods.
///
/// # Examples
///
/// ```
/// # use tierline::diagram::{DiagramNode, Mark, NodeKind};
/// # use tierline::icon::IconId;
/// # use tierline::style::Tone;
/// let vm = DiagramNode::new(NodeKind::Instance, "VMSS Web-0")
///     .with_icon(IconId::Server)
///     .with_tone(Tone::Green)
///     .with_child(DiagramNode::new(NodeKind::Detail(Mark::Dot), "Port 80/443"));
///
/// assert_eq!(vm.label(), "VMSS Web-0");
/// assert_eq!(vm.children().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramNode {
    kind: NodeKind,
    label: String,
    caption: Option<String>,
    icon: Option<IconId>,
    tone: Tone,
    children: Vec<DiagramNode>,
}

impl DiagramNode {
    pub fn new(kind: NodeKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            caption: None,
            icon: None,
            tone: Tone::Gray,
            children: Vec::new(),
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_icon(mut self, icon: IconId) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_child(mut self, child: DiagramNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = DiagramNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn icon(&self) -> Option<IconId> {
        self.icon
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn children(&self) -> &[DiagramNode] {
        &self.children
    }

    /// Depth-first, pre-order traversal starting at this node.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }
}

/// Pre-order iterator over a node and its descendants.
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<&'a DiagramNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a DiagramNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// A legend entry: a marker in a tone next to a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendEntry<'a> {
    pub marker: Marker,
    pub tone: Tone,
    pub icon: Option<IconId>,
    pub label: &'a str,
}

/// A complete diagram tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    root: DiagramNode,
}

impl Diagram {
    pub fn new(root: DiagramNode) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &DiagramNode {
        &self.root
    }

    /// Every node of the diagram in depth-first, pre-order.
    pub fn walk(&self) -> Walk<'_> {
        self.root.walk()
    }

    /// Counts the nodes matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&DiagramNode) -> bool) -> usize {
        self.walk().filter(|node| predicate(node)).count()
    }

    /// Returns the first node, in pre-order, matching `predicate`.
    pub fn find(&self, predicate: impl Fn(&DiagramNode) -> bool) -> Option<&DiagramNode> {
        self.walk().find(|node| predicate(node))
    }

    /// Top-level sections in rendered order.
    pub fn sections(&self) -> Vec<&DiagramNode> {
        self.walk().filter(|node| node.kind().is_section()).collect()
    }

    /// Tiers in rendered order.
    pub fn tiers(&self) -> Vec<Tier> {
        self.walk()
            .filter_map(|node| match node.kind() {
                NodeKind::Tier(tier) => Some(tier),
                _ => None,
            })
            .collect()
    }

    /// Legend entries in rendered order.
    pub fn legend_entries(&self) -> Vec<LegendEntry<'_>> {
        self.walk()
            .filter_map(|node| match node.kind() {
                NodeKind::LegendEntry(marker) => Some(LegendEntry {
                    marker,
                    tone: node.tone(),
                    icon: node.icon(),
                    label: node.label(),
                }),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Diagram {
        Diagram::new(
            DiagramNode::new(NodeKind::Diagram, "root").with_children([
                DiagramNode::new(NodeKind::Tier(Tier::Web), "WEB")
                    .with_child(DiagramNode::new(NodeKind::Instance, "vm-0"))
                    .with_child(DiagramNode::new(NodeKind::Instance, "vm-1")),
                DiagramNode::new(NodeKind::Tier(Tier::App), "APP"),
                DiagramNode::new(NodeKind::Legend, "Legend").with_child(
                    DiagramNode::new(NodeKind::LegendEntry(Marker::Swatch), "Web Tier")
                        .with_tone(Tone::Green),
                ),
            ]),
        )
    }

    #[test]
    fn test_walk_is_preorder() {
        let diagram = sample();
        let labels: Vec<_> = diagram.walk().map(|node| node.label()).collect();
        assert_eq!(
            labels,
            ["root", "WEB", "vm-0", "vm-1", "APP", "Legend", "Web Tier"]
        );
    }

    #[test]
    fn test_count_and_find() {
        let diagram = sample();
        assert_eq!(diagram.count(|node| node.kind() == NodeKind::Instance), 2);
        assert_eq!(
            diagram
                .find(|node| node.kind() == NodeKind::Instance)
                .map(|node| node.label()),
            Some("vm-0")
        );
        assert!(diagram.find(|node| node.kind() == NodeKind::Footer).is_none());
    }

    #[test]
    fn test_tiers_and_sections() {
        let diagram = sample();
        assert_eq!(diagram.tiers(), [Tier::Web, Tier::App]);

        let sections: Vec<_> = diagram.sections().iter().map(|n| n.label()).collect();
        assert_eq!(sections, ["WEB", "APP", "Legend"]);
    }

    #[test]
    fn test_legend_entries() {
        let diagram = sample();
        let entries = diagram.legend_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].marker, Marker::Swatch);
        assert_eq!(entries[0].tone, Tone::Green);
        assert_eq!(entries[0].label, "Web Tier");
    }

    #[test]
    fn test_builder_defaults() {
        let node = DiagramNode::new(NodeKind::Footer, "footer");
        assert_eq!(node.tone(), Tone::Gray);
        assert!(node.caption().is_none());
        assert!(node.icon().is_none());
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_tier_tones_are_distinct() {
        let tones: Vec<_> = Tier::ORDER.iter().map(|tier| tier.tone()).collect();
        assert_eq!(tones, [Tone::Green, Tone::Orange, Tone::Red]);
    }

    #[test]
    fn test_mark_symbols() {
        assert_eq!(Mark::Dot.symbol(), '•');
        assert_eq!(Mark::Check.symbol(), '✓');
    }
}
