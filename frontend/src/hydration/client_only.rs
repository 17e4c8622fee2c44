//! Client-only wrapper, the entry point page components use.

use super::{Component, Content, Node, RenderContext, RenderGate};

/// Renders its children only after the client has mounted.
///
/// Until then, and on the server, the optional fallback is rendered instead.
///
/// # Examples
/// ```
/// use frontend::hydration::{ClientOnly, Node, render_to_string};
///
/// let html = render_to_string(
///     ClientOnly::new(Node::text("local time")).with_fallback(Node::text("…")),
/// );
/// assert_eq!(html, "…");
/// ```
pub struct ClientOnly {
    gate: RenderGate,
}

impl ClientOnly {
    /// Wrap `children`, rendering nothing until mount.
    pub fn new(children: impl Into<Content>) -> Self {
        Self {
            gate: RenderGate::new(children),
        }
    }

    /// Content rendered on the server and before mount.
    #[must_use]
    pub fn with_fallback(self, fallback: impl Into<Content>) -> Self {
        Self {
            gate: self.gate.with_fallback(fallback),
        }
    }
}

impl Component for ClientOnly {
    fn render(&mut self, cx: &mut RenderContext) -> Node {
        self.gate.render(cx)
    }
}
