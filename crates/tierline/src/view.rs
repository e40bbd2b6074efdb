//! The static diagram view.
//!
//! [`StaticDiagramView`] is the only component of a Tierline diagram. It
//! takes no input, holds no state and answers every render with the same
//! tree. Host input is accepted through [`StaticDiagramView::handle_event`]
//! and ignored.

use log::{debug, trace};

use crate::{architecture, diagram::Diagram};

/// Mouse buttons a host may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Input delivered by a host environment.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerMove { x: f32, y: f32 },
    PointerDown { x: f32, y: f32, button: PointerButton },
    PointerUp { x: f32, y: f32, button: PointerButton },
    Scroll { dx: f32, dy: f32 },
    Key { code: String },
    Resize { width: f32, height: f32 },
}

impl InputEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::PointerMove { .. } => "pointer-move",
            Self::PointerDown { .. } => "pointer-down",
            Self::PointerUp { .. } => "pointer-up",
            Self::Scroll { .. } => "scroll",
            Self::Key { .. } => "key",
            Self::Resize { .. } => "resize",
        }
    }
}

/// What the view did with an [`InputEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    /// The event had no effect
    Ignored,
}

/// Renders the fixed three-tier architecture diagram.
///
/// # Examples
///
/// ```
/// # use tierline::view::{EventResponse, InputEvent, StaticDiagramView};
/// let view = StaticDiagramView::new();
/// let before = view.render();
///
/// let response = view.handle_event(&InputEvent::Scroll { dx: 0.0, dy: 40.0 });
/// assert_eq!(response, EventResponse::Ignored);
/// assert_eq!(view.render(), before);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDiagramView;

impl StaticDiagramView {
    pub fn new() -> Self {
        Self
    }

    /// Builds the diagram tree.
    pub fn render(&self) -> Diagram {
        let diagram = architecture::three_tier();
        debug!(nodes = diagram.walk().count(); "Diagram tree built");
        diagram
    }

    /// Accepts a host event. The view has no state, so nothing changes.
    pub fn handle_event(&self, event: &InputEvent) -> EventResponse {
        trace!(event = event.name(); "Ignoring input event");
        EventResponse::Ignored
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::diagram::{NodeKind, Tier};

    fn any_button() -> impl Strategy<Value = PointerButton> {
        prop_oneof![
            Just(PointerButton::Primary),
            Just(PointerButton::Secondary),
            Just(PointerButton::Middle),
        ]
    }

    fn any_event() -> impl Strategy<Value = InputEvent> {
        let coord = -2000.0f32..2000.0;
        prop_oneof![
            (coord.clone(), coord.clone()).prop_map(|(x, y)| InputEvent::PointerMove { x, y }),
            (coord.clone(), coord.clone(), any_button())
                .prop_map(|(x, y, button)| InputEvent::PointerDown { x, y, button }),
            (coord.clone(), coord.clone(), any_button())
                .prop_map(|(x, y, button)| InputEvent::PointerUp { x, y, button }),
            (coord.clone(), coord.clone()).prop_map(|(dx, dy)| InputEvent::Scroll { dx, dy }),
            "[a-zA-Z0-9]{1,8}".prop_map(|code| InputEvent::Key { code }),
            (0.0f32..4000.0, 0.0f32..4000.0)
                .prop_map(|(width, height)| InputEvent::Resize { width, height }),
        ]
    }

    #[test]
    fn test_render_is_deterministic() {
        let view = StaticDiagramView::new();
        assert_eq!(view.render(), view.render());
    }

    #[test]
    fn test_render_sections_in_order() {
        let diagram = StaticDiagramView::new().render();
        let sections: Vec<_> = diagram.sections().iter().map(|node| node.kind()).collect();
        assert_eq!(
            sections,
            [
                NodeKind::Gateway,
                NodeKind::Tier(Tier::Web),
                NodeKind::Tier(Tier::App),
                NodeKind::Tier(Tier::Database),
                NodeKind::Management,
                NodeKind::Legend,
                NodeKind::Features,
                NodeKind::Footer,
            ]
        );
    }

    proptest! {
        #[test]
        fn prop_events_never_change_output(events in prop::collection::vec(any_event(), 0..16)) {
            let view = StaticDiagramView::new();
            let before = view.render();
            for event in &events {
                prop_assert_eq!(view.handle_event(event), EventResponse::Ignored);
            }
            prop_assert_eq!(view.render(), before);
        }
    }
}
