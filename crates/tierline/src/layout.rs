//! Box layout of a diagram tree.
//!
//! [`LayoutEngine`] walks a [`Diagram`] top-down and assigns every node an
//! absolute [`Bounds`]. Each node kind has a fixed frame (padding, gaps and
//! an arrangement of its children) and an optional header row sized from
//! measured text and icon sizes. The result is a [`LayoutBox`] tree whose
//! boxes carry the positioned [`Element`]s an exporter draws.
//!
//! Layout is a pure function of the tree, the [`LayoutConfig`] and the
//! style resolver used for text metrics.

use log::debug;

use tierline_core::{
    color::Color,
    draw::{FontWeight, GradientDirection, Paint, Text, TextDefinition},
    geometry::{Bounds, Insets, Point, Size},
    icon::IconId,
    style::{Role, StyleResolver, StyleToken, Tone, VisualProps},
};

use crate::{
    config::LayoutConfig,
    diagram::{Diagram, DiagramNode, Marker, NodeKind},
};

/// Horizontal gap between an icon and the text beside it.
const ICON_GAP: f32 = 12.0;
/// Width of connector bars.
const BAR_WIDTH: f32 = 4.0;
/// Fixed width of the gateway banner.
const GATEWAY_WIDTH: f32 = 384.0;
/// Share of the inner width given to the column beside a header.
const BESIDE_COLUMN: f32 = 0.4;

/// A positioned drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A styled surface filling `bounds`
    Surface { token: StyleToken, bounds: Bounds },
    /// A connector segment
    Bar { paint: Paint, bounds: Bounds },
    Icon {
        icon: IconId,
        center: Point,
        size: f32,
        color: Color,
    },
    /// Text anchored at `position`; the anchor's vertical center is `position.y`
    Text {
        style: TextDefinition,
        content: String,
        position: Point,
    },
}

/// A laid-out diagram node.
#[derive(Debug, Clone)]
pub struct LayoutBox<'a> {
    node: &'a DiagramNode,
    bounds: Bounds,
    elements: Vec<Element>,
    children: Vec<LayoutBox<'a>>,
}

impl<'a> LayoutBox<'a> {
    pub fn node(&self) -> &'a DiagramNode {
        self.node
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Elements drawn for this node, excluding those of its children.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn children(&self) -> &[LayoutBox<'a>] {
        &self.children
    }

    /// This box and all descendants in depth-first, pre-order.
    pub fn walk(&self) -> Vec<&LayoutBox<'a>> {
        let mut boxes = vec![self];
        for child in &self.children {
            boxes.extend(child.walk());
        }
        boxes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arrangement {
    /// No children; content drawn by the node itself
    Leaf,
    /// Children top to bottom
    Stack,
    /// Runs of grid cells, at most this many per row
    Grid(usize),
    /// Header on the left, children stacked in a column on the right
    Beside,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    padding: Insets,
    header_gap: f32,
    gap: f32,
    arrangement: Arrangement,
}

impl Frame {
    fn new(padding: Insets, header_gap: f32, gap: f32, arrangement: Arrangement) -> Self {
        Self {
            padding,
            header_gap,
            gap,
            arrangement,
        }
    }

    fn leaf(padding: Insets) -> Self {
        Self::new(padding, 0.0, 0.0, Arrangement::Leaf)
    }
}

#[derive(Debug, Clone, Copy)]
enum Heading {
    None,
    /// Heading text only
    Plain,
    /// Solid badge holding icon and label, caption beside it
    Badge,
    /// Icon, optionally inside a holder square, next to label and caption
    Icon {
        size: f32,
        holder: Option<(Role, f32)>,
        label: Role,
    },
}

#[derive(Debug, Clone, Copy)]
struct Row<'a> {
    nodes: &'a [DiagramNode],
    columns: usize,
}

/// Computes [`LayoutBox`] trees.
#[derive(Debug)]
pub struct LayoutEngine<'s> {
    config: LayoutConfig,
    style: &'s dyn StyleResolver,
}

impl<'s> LayoutEngine<'s> {
    pub fn new(config: LayoutConfig, style: &'s dyn StyleResolver) -> Self {
        Self { config, style }
    }

    /// Lays out `diagram` with its top-left corner at the origin.
    pub fn layout<'a>(&self, diagram: &'a Diagram) -> LayoutBox<'a> {
        let root = diagram.root();
        let width = self.config.width() + 2.0 * self.config.margin();
        let height = self.measure(root, width);
        debug!(width, height; "Diagram laid out");

        self.place(
            root,
            Bounds::new_from_top_left(Point::default(), Size::new(width, height)),
            false,
        )
    }

    fn frame(&self, kind: NodeKind) -> Frame {
        use Arrangement::*;

        match kind {
            NodeKind::Diagram => {
                Frame::new(Insets::uniform(self.config.margin()), 0.0, 24.0, Stack)
            }
            NodeKind::Canvas => Frame::new(Insets::uniform(32.0), 0.0, 24.0, Stack),
            NodeKind::Endpoint => Frame::new(Insets::symmetric(16.0, 28.0), 0.0, 0.0, Stack),
            NodeKind::Gateway => Frame::new(Insets::symmetric(24.0, 32.0), 16.0, 0.0, Stack),
            NodeKind::Network => Frame::new(Insets::uniform(24.0), 8.0, 16.0, Stack),
            NodeKind::Tier(_) => Frame::new(Insets::uniform(24.0), 16.0, 16.0, Grid(2)),
            NodeKind::Instance => Frame::new(Insets::uniform(16.0), 12.0, 4.0, Stack),
            NodeKind::Service => Frame::new(Insets::uniform(16.0), 8.0, 4.0, Stack),
            NodeKind::Panel => Frame::new(Insets::uniform(12.0), 0.0, 4.0, Stack),
            NodeKind::Management => Frame::new(Insets::uniform(24.0), 24.0, 4.0, Beside),
            NodeKind::Legend => Frame::new(Insets::uniform(24.0), 16.0, 16.0, Grid(4)),
            NodeKind::Features => Frame::new(Insets::default(), 0.0, 16.0, Grid(3)),
            NodeKind::Feature => Frame::new(Insets::uniform(16.0), 12.0, 4.0, Stack),
            NodeKind::Policy | NodeKind::Balancer => Frame::leaf(Insets::symmetric(10.0, 12.0)),
            NodeKind::Footer => Frame::leaf(Insets::symmetric(8.0, 0.0)),
            NodeKind::Header
            | NodeKind::Connector { .. }
            | NodeKind::LegendEntry(_)
            | NodeKind::Detail(_) => Frame::leaf(Insets::default()),
        }
    }

    fn heading(kind: NodeKind) -> Heading {
        let icon = |size, holder, label| Heading::Icon {
            size,
            holder,
            label,
        };

        match kind {
            NodeKind::Endpoint => icon(32.0, None, Role::Heading),
            NodeKind::Gateway => icon(32.0, Some((Role::Frosted, 12.0)), Role::Heading),
            NodeKind::Network => icon(28.0, None, Role::Heading),
            NodeKind::Instance => icon(20.0, Some((Role::Badge, 8.0)), Role::Label),
            NodeKind::Service => icon(24.0, None, Role::Label),
            NodeKind::Management => icon(28.0, Some((Role::Badge, 12.0)), Role::Heading),
            NodeKind::Feature => icon(20.0, None, Role::Label),
            NodeKind::Tier(_) => Heading::Badge,
            NodeKind::Legend => Heading::Plain,
            _ => Heading::None,
        }
    }

    /// Surface drawn behind a node. `light` is set inside banners.
    fn surface(kind: NodeKind, light: bool) -> Option<Role> {
        match kind {
            NodeKind::Diagram => Some(Role::Page),
            NodeKind::Canvas => Some(Role::Canvas),
            NodeKind::Endpoint | NodeKind::Gateway => Some(Role::Banner),
            NodeKind::Panel if light => Some(Role::Frosted),
            NodeKind::Panel | NodeKind::Instance => Some(Role::Card),
            NodeKind::Network => Some(Role::Boundary),
            NodeKind::Tier(_) | NodeKind::Management => Some(Role::Section),
            NodeKind::Service => Some(Role::Inset),
            NodeKind::Policy | NodeKind::Balancer => Some(Role::Strip),
            NodeKind::Legend => Some(Role::Plain),
            NodeKind::Feature => Some(Role::Tile),
            _ => None,
        }
    }

    fn gridded(kind: NodeKind) -> bool {
        matches!(
            kind,
            NodeKind::Instance | NodeKind::LegendEntry(_) | NodeKind::Feature
        )
    }

    // Styling

    fn resolve(&self, role: Role, tone: Tone) -> VisualProps {
        self.style.resolve(StyleToken::new(role, tone))
    }

    fn light_ink(&self, tone: Tone) -> Color {
        self.resolve(Role::Banner, tone).ink()
    }

    fn text_style(&self, role: Role, tone: Tone, light: bool) -> TextDefinition {
        let mut style = self.resolve(role, tone).text().clone();
        if light {
            style.set_color(Some(self.light_ink(tone)));
        }
        style
    }

    fn text_size(style: &TextDefinition, content: &str) -> Size {
        Text::new(style, content).calculate_size()
    }

    fn detail_text(node: &DiagramNode) -> String {
        match node.kind() {
            NodeKind::Detail(mark) => format!("{} {}", mark.symbol(), node.label()),
            _ => node.label().to_string(),
        }
    }

    fn strip_caption(node: &DiagramNode) -> Option<String> {
        let caption = node.caption()?;
        Some(match node.kind() {
            NodeKind::Policy => format!("- {caption}"),
            _ => caption.to_string(),
        })
    }

    // Measuring

    /// Height of `node` when given `width`.
    fn measure(&self, node: &DiagramNode, width: f32) -> f32 {
        let frame = self.frame(node.kind());
        let inner = (width - frame.padding.horizontal_sum()).max(0.0);

        let content = match frame.arrangement {
            Arrangement::Leaf => self.leaf_height(node),
            Arrangement::Stack | Arrangement::Grid(_) => {
                let header = self.header_height(node);
                let body = self.rows_height(node.children(), frame, inner);
                join(header, body, frame.header_gap)
            }
            Arrangement::Beside => {
                let (_, column) = split_beside(inner, frame.header_gap);
                let column_frame =
                    Frame::new(Insets::default(), 0.0, frame.gap, Arrangement::Stack);
                self.header_height(node)
                    .max(self.rows_height(node.children(), column_frame, column))
            }
        };

        content + frame.padding.vertical_sum()
    }

    /// Width a node takes when it does not have to fill `available`.
    fn preferred_width(&self, node: &DiagramNode, available: f32) -> f32 {
        match node.kind() {
            NodeKind::Endpoint => {
                let frame = self.frame(node.kind());
                (self.header_width(node) + frame.padding.horizontal_sum()).min(available)
            }
            NodeKind::Gateway => GATEWAY_WIDTH.min(available),
            _ => available,
        }
    }

    fn rows<'a>(children: &'a [DiagramNode], arrangement: Arrangement) -> Vec<Row<'a>> {
        let Arrangement::Grid(max_columns) = arrangement else {
            return children.chunks(1).map(|nodes| Row { nodes, columns: 1 }).collect();
        };

        let mut rows = Vec::new();
        let mut index = 0;
        while index < children.len() {
            let run = children[index..]
                .iter()
                .take_while(|child| Self::gridded(child.kind()))
                .count();

            if run == 0 {
                rows.push(Row {
                    nodes: &children[index..=index],
                    columns: 1,
                });
                index += 1;
                continue;
            }

            let columns = run.min(max_columns).max(1);
            rows.extend(
                children[index..index + run]
                    .chunks(columns)
                    .map(|nodes| Row { nodes, columns }),
            );
            index += run;
        }
        rows
    }

    fn cell_width(width: f32, columns: usize, gap: f32) -> f32 {
        let columns = columns.max(1) as f32;
        ((width - gap * (columns - 1.0)) / columns).max(0.0)
    }

    /// Widths of the cells of `row`.
    fn row_widths(&self, row: Row<'_>, width: f32, gap: f32) -> Vec<f32> {
        if row.columns == 1 {
            return row
                .nodes
                .iter()
                .map(|node| self.preferred_width(node, width))
                .collect();
        }
        let cell = Self::cell_width(width, row.columns, gap);
        vec![cell; row.nodes.len()]
    }

    fn row_height(&self, row: Row<'_>, widths: &[f32]) -> f32 {
        row.nodes
            .iter()
            .zip(widths)
            .map(|(node, width)| self.measure(node, *width))
            .fold(0.0, f32::max)
    }

    fn rows_height(&self, children: &[DiagramNode], frame: Frame, width: f32) -> f32 {
        let rows = Self::rows(children, frame.arrangement);
        let total: f32 = rows
            .iter()
            .map(|row| self.row_height(*row, &self.row_widths(*row, width, frame.gap)))
            .sum();
        let gaps: f32 = rows
            .windows(2)
            .map(|pair| Self::row_gap(pair[0], pair[1], frame.gap))
            .sum();
        total + gaps
    }

    /// Connectors attach directly to their neighbours.
    fn row_gap(previous: Row<'_>, next: Row<'_>, gap: f32) -> f32 {
        let is_connector = |row: Row<'_>| {
            row.nodes
                .iter()
                .any(|node| matches!(node.kind(), NodeKind::Connector { .. }))
        };
        if is_connector(previous) || is_connector(next) {
            0.0
        } else {
            gap
        }
    }

    fn header_height(&self, node: &DiagramNode) -> f32 {
        let tone = node.tone();
        match Self::heading(node.kind()) {
            Heading::None => 0.0,
            Heading::Plain => {
                Self::text_size(&self.text_style(Role::Heading, tone, false), node.label()).height()
            }
            Heading::Badge => self.badge_size(node).height(),
            Heading::Icon { size, holder, label } => {
                let glyph = Self::glyph_extent(node, size, holder);
                let label_height =
                    Self::text_size(&self.text_style(label, tone, false), node.label()).height();
                let caption_height = node.caption().map_or(0.0, |caption| {
                    Self::text_size(&self.text_style(Role::Caption, tone, false), caption).height()
                });
                glyph.max(label_height + caption_height)
            }
        }
    }

    /// Natural width of an icon heading.
    fn header_width(&self, node: &DiagramNode) -> f32 {
        let Heading::Icon { size, holder, label } = Self::heading(node.kind()) else {
            return 0.0;
        };
        let tone = node.tone();
        let glyph = Self::glyph_extent(node, size, holder);
        let label_width =
            Self::text_size(&self.text_style(label, tone, false), node.label()).width();
        let caption_width = node.caption().map_or(0.0, |caption| {
            Self::text_size(&self.text_style(Role::Caption, tone, false), caption).width()
        });
        join(glyph, label_width.max(caption_width), ICON_GAP)
    }

    fn glyph_extent(node: &DiagramNode, size: f32, holder: Option<(Role, f32)>) -> f32 {
        match node.icon() {
            Some(_) => size + holder.map_or(0.0, |(_, padding)| 2.0 * padding),
            None => 0.0,
        }
    }

    fn badge_style(&self, tone: Tone) -> TextDefinition {
        self.text_style(Role::Badge, tone, false)
    }

    fn badge_size(&self, node: &DiagramNode) -> Size {
        const ICON: f32 = 20.0;
        let label = Self::text_size(&self.badge_style(node.tone()), node.label());
        let content = Size::new(ICON + 8.0 + label.width(), ICON.max(label.height()));
        content.add_padding(Insets::symmetric(8.0, 14.0))
    }

    fn chip_size(&self, label: &str) -> Size {
        let style = self.resolve(Role::Chip, Tone::Gray).text().clone();
        Self::text_size(&style, label).add_padding(Insets::symmetric(4.0, 12.0))
    }

    fn leaf_height(&self, node: &DiagramNode) -> f32 {
        let tone = node.tone();
        match node.kind() {
            NodeKind::Header | NodeKind::Footer => {
                let (first, second) = self.stacked_line_styles(node.kind());
                let title = Self::text_size(&first, node.label()).height();
                let subtitle = node
                    .caption()
                    .map_or(0.0, |caption| Self::text_size(&second, caption).height());
                join(title, subtitle, Self::stacked_line_gap(node.kind()))
            }
            NodeKind::Connector { .. } => {
                if node.label().is_empty() {
                    40.0
                } else {
                    48.0 + self.chip_size(node.label()).height()
                }
            }
            NodeKind::Policy | NodeKind::Balancer => {
                let label =
                    Self::text_size(&self.text_style(Role::Label, tone, false), node.label());
                let caption = Self::strip_caption(node).map_or(0.0, |caption| {
                    Self::text_size(&self.text_style(Role::Body, tone, false), &caption).height()
                });
                20.0f32.max(label.height()).max(caption)
            }
            NodeKind::LegendEntry(_) => {
                let style = self.text_style(Role::Body, Tone::Gray, false);
                let label = Self::text_size(&style, node.label());
                16.0f32.max(label.height())
            }
            NodeKind::Detail(_) => {
                Self::text_size(&self.text_style(Role::Body, tone, false), &Self::detail_text(node))
                    .height()
            }
            _ => 0.0,
        }
    }

    fn stacked_line_styles(&self, kind: NodeKind) -> (TextDefinition, TextDefinition) {
        match kind {
            NodeKind::Header => (
                self.text_style(Role::Title, Tone::Gray, false),
                self.text_style(Role::Subtitle, Tone::Gray, false),
            ),
            _ => {
                let first = self.text_style(Role::Footnote, Tone::Gray, false);
                let mut second = first.clone();
                second.set_weight(FontWeight::Normal);
                (first, second)
            }
        }
    }

    fn stacked_line_gap(kind: NodeKind) -> f32 {
        match kind {
            NodeKind::Header => 8.0,
            _ => 4.0,
        }
    }

    // Placing

    fn place<'a>(&self, node: &'a DiagramNode, bounds: Bounds, light: bool) -> LayoutBox<'a> {
        let frame = self.frame(node.kind());
        let mut elements = Vec::new();

        let surface = Self::surface(node.kind(), light);
        if let Some(role) = surface {
            elements.push(Element::Surface {
                token: StyleToken::new(role, node.tone()),
                bounds,
            });
        }
        let light = light || surface == Some(Role::Banner);

        let inner = bounds.shrink(frame.padding);
        let children = match frame.arrangement {
            Arrangement::Leaf => {
                self.place_leaf(node, inner, light, &mut elements);
                Vec::new()
            }
            Arrangement::Stack | Arrangement::Grid(_) => {
                let header = self.header_height(node);
                if header > 0.0 {
                    let area = Bounds::new_from_top_left(
                        inner.min_point(),
                        Size::new(inner.width(), header),
                    );
                    self.place_header(node, area, light, &mut elements);
                }
                let top = if header > 0.0 {
                    inner.min_y() + header + frame.header_gap
                } else {
                    inner.min_y()
                };
                self.place_rows(
                    node.children(),
                    frame,
                    Point::new(inner.min_x(), top),
                    inner.width(),
                    light,
                )
            }
            Arrangement::Beside => {
                let (header_width, column) = split_beside(inner.width(), frame.header_gap);
                let column_frame =
                    Frame::new(Insets::default(), 0.0, frame.gap, Arrangement::Stack);

                let header = self.header_height(node);
                let area = Bounds::new_from_top_left(
                    Point::new(inner.min_x(), inner.center().y() - header / 2.0),
                    Size::new(header_width, header),
                );
                self.place_header(node, area, light, &mut elements);

                let column_height = self.rows_height(node.children(), column_frame, column);
                self.place_rows(
                    node.children(),
                    column_frame,
                    Point::new(
                        inner.max_x() - column,
                        inner.center().y() - column_height / 2.0,
                    ),
                    column,
                    light,
                )
            }
        };

        LayoutBox {
            node,
            bounds,
            elements,
            children,
        }
    }

    fn place_rows<'a>(
        &self,
        children: &'a [DiagramNode],
        frame: Frame,
        origin: Point,
        width: f32,
        light: bool,
    ) -> Vec<LayoutBox<'a>> {
        let mut boxes = Vec::with_capacity(children.len());
        let mut y = origin.y();
        let mut previous: Option<Row<'a>> = None;

        for row in Self::rows(children, frame.arrangement) {
            if let Some(previous) = previous {
                y += Self::row_gap(previous, row, frame.gap);
            }
            previous = Some(row);

            let widths = self.row_widths(row, width, frame.gap);
            let height = self.row_height(row, &widths);

            let mut x = origin.x();
            for (node, cell_width) in row.nodes.iter().zip(&widths) {
                let left = if row.columns == 1 {
                    origin.x() + (width - cell_width) / 2.0
                } else {
                    x
                };
                let bounds =
                    Bounds::new_from_top_left(Point::new(left, y), Size::new(*cell_width, height));
                boxes.push(self.place(node, bounds, light));
                x += cell_width + frame.gap;
            }
            y += height;
        }
        boxes
    }

    fn place_header(&self, node: &DiagramNode, area: Bounds, light: bool, out: &mut Vec<Element>) {
        let tone = node.tone();
        let cy = area.center().y();
        let x = area.min_x();

        match Self::heading(node.kind()) {
            Heading::None => {}
            Heading::Plain => out.push(Element::Text {
                style: self.text_style(Role::Heading, tone, light),
                content: node.label().to_string(),
                position: Point::new(x, cy),
            }),
            Heading::Badge => {
                let badge = self.badge_size(node);
                out.push(Element::Surface {
                    token: StyleToken::new(Role::Badge, tone),
                    bounds: Bounds::new_from_top_left(
                        Point::new(x, cy - badge.height() / 2.0),
                        badge,
                    ),
                });
                if let Some(icon) = node.icon() {
                    out.push(Element::Icon {
                        icon,
                        center: Point::new(x + 24.0, cy),
                        size: 20.0,
                        color: self.resolve(Role::Badge, tone).ink(),
                    });
                }
                out.push(Element::Text {
                    style: self.badge_style(tone),
                    content: node.label().to_string(),
                    position: Point::new(x + 42.0, cy),
                });
                if let Some(caption) = node.caption() {
                    out.push(Element::Text {
                        style: self.text_style(Role::Caption, tone, light),
                        content: caption.to_string(),
                        position: Point::new(x + badge.width() + ICON_GAP, cy),
                    });
                }
            }
            Heading::Icon { size, holder, label } => {
                let glyph = Self::glyph_extent(node, size, holder);
                if let Some(icon) = node.icon() {
                    let center = Point::new(x + glyph / 2.0, cy);
                    let color = match holder {
                        Some((role, _)) => {
                            out.push(Element::Surface {
                                token: StyleToken::new(role, tone),
                                bounds: Bounds::new_from_center(center, Size::new(glyph, glyph)),
                            });
                            self.resolve(role, tone).ink()
                        }
                        None if light => self.light_ink(tone),
                        None => self.resolve(Role::Glyph, tone).ink(),
                    };
                    out.push(Element::Icon {
                        icon,
                        center,
                        size,
                        color,
                    });
                }

                let text_x = if glyph > 0.0 { x + glyph + ICON_GAP } else { x };
                let label_style = self.text_style(label, tone, light);
                let caption_style = self.text_style(Role::Caption, tone, light);
                let label_height = Self::text_size(&label_style, node.label()).height();
                let caption_height = node
                    .caption()
                    .map_or(0.0, |caption| Self::text_size(&caption_style, caption).height());
                let top = cy - (label_height + caption_height) / 2.0;

                out.push(Element::Text {
                    style: label_style,
                    content: node.label().to_string(),
                    position: Point::new(text_x, top + label_height / 2.0),
                });
                if let Some(caption) = node.caption() {
                    out.push(Element::Text {
                        style: caption_style,
                        content: caption.to_string(),
                        position: Point::new(text_x, top + label_height + caption_height / 2.0),
                    });
                }
            }
        }
    }

    fn place_leaf(&self, node: &DiagramNode, area: Bounds, light: bool, out: &mut Vec<Element>) {
        let tone = node.tone();
        let x = area.min_x();
        let cy = area.center().y();

        match node.kind() {
            NodeKind::Header | NodeKind::Footer => {
                let (first, second) = self.stacked_line_styles(node.kind());
                let cx = area.center().x();
                let first_height = Self::text_size(&first, node.label()).height();
                out.push(Element::Text {
                    style: first,
                    content: node.label().to_string(),
                    position: Point::new(cx, area.min_y() + first_height / 2.0),
                });
                if let Some(caption) = node.caption() {
                    let height = Self::text_size(&second, caption).height();
                    let top = area.min_y() + first_height + Self::stacked_line_gap(node.kind());
                    out.push(Element::Text {
                        style: second,
                        content: caption.to_string(),
                        position: Point::new(cx, top + height / 2.0),
                    });
                }
            }
            NodeKind::Connector { to } => self.place_connector(node, to, area, out),
            NodeKind::Policy | NodeKind::Balancer => {
                const ICON: f32 = 20.0;
                let mut text_x = x;
                if let Some(icon) = node.icon() {
                    out.push(Element::Icon {
                        icon,
                        center: Point::new(x + ICON / 2.0, cy),
                        size: ICON,
                        color: self.resolve(Role::Glyph, tone).ink(),
                    });
                    text_x += ICON + 8.0;
                }

                let label_style = self.text_style(Role::Label, tone, light);
                let label_width = Self::text_size(&label_style, node.label()).width();
                out.push(Element::Text {
                    style: label_style,
                    content: node.label().to_string(),
                    position: Point::new(text_x, cy),
                });
                if let Some(caption) = Self::strip_caption(node) {
                    out.push(Element::Text {
                        style: self.text_style(Role::Body, tone, light),
                        content: caption,
                        position: Point::new(text_x + label_width + 6.0, cy),
                    });
                }
            }
            NodeKind::LegendEntry(marker) => {
                const MARKER: f32 = 16.0;
                let center = Point::new(x + MARKER / 2.0, cy);
                match (marker, node.icon()) {
                    (Marker::Glyph, Some(icon)) => out.push(Element::Icon {
                        icon,
                        center,
                        size: MARKER,
                        color: self.resolve(Role::Glyph, tone).ink(),
                    }),
                    _ => out.push(Element::Surface {
                        token: StyleToken::new(Role::Swatch, tone),
                        bounds: Bounds::new_from_center(center, Size::new(MARKER, MARKER)),
                    }),
                }
                out.push(Element::Text {
                    style: self.text_style(Role::Body, Tone::Gray, light),
                    content: node.label().to_string(),
                    position: Point::new(x + MARKER + 8.0, cy),
                });
            }
            NodeKind::Detail(_) => out.push(Element::Text {
                style: self.text_style(Role::Body, tone, light),
                content: Self::detail_text(node),
                position: Point::new(x, cy),
            }),
            _ => {}
        }
    }

    fn place_connector(&self, node: &DiagramNode, to: Tone, area: Bounds, out: &mut Vec<Element>) {
        let from = node.tone();
        let cx = area.center().x();
        let bar = |top: f32, bottom: f32| {
            Bounds::new_from_top_left(
                Point::new(cx - BAR_WIDTH / 2.0, top),
                Size::new(BAR_WIDTH, (bottom - top).max(0.0)),
            )
        };
        let line = |tone: Tone| self.resolve(Role::Line, tone).ink();
        let blend = |tone: Tone| {
            let props = self.resolve(Role::Line, tone);
            props.stroke().map_or(props.ink(), |stroke| stroke.color())
        };

        if node.label().is_empty() {
            let paint = if from == to {
                Paint::Solid(line(from))
            } else {
                Paint::Gradient {
                    from: blend(from),
                    to: blend(to),
                    direction: GradientDirection::ToBottom,
                }
            };
            out.push(Element::Bar {
                paint,
                bounds: bar(area.min_y(), area.max_y()),
            });
            return;
        }

        let chip = self.chip_size(node.label());
        let chip_top = area.center().y() - chip.height() / 2.0;
        out.push(Element::Bar {
            paint: Paint::Solid(line(from)),
            bounds: bar(area.min_y(), chip_top),
        });
        out.push(Element::Surface {
            token: StyleToken::new(Role::Chip, Tone::Gray),
            bounds: Bounds::new_from_center(area.center(), chip),
        });
        out.push(Element::Text {
            style: self.resolve(Role::Chip, Tone::Gray).text().clone(),
            content: node.label().to_string(),
            position: area.center(),
        });
        out.push(Element::Bar {
            paint: Paint::Solid(line(to)),
            bounds: bar(chip_top + chip.height(), area.max_y()),
        });
    }
}

/// Sum of two extents with a gap between them when both are non-empty.
fn join(first: f32, second: f32, gap: f32) -> f32 {
    if first > 0.0 && second > 0.0 {
        first + gap + second
    } else {
        first + second
    }
}

/// Splits `width` into a header area and a column, `gap` apart.
fn split_beside(width: f32, gap: f32) -> (f32, f32) {
    let column = (width * BESIDE_COLUMN).round();
    ((width - column - gap).max(0.0), column)
}
