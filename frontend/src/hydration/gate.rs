//! Conditional render gate.

use super::{ClientReadiness, Component, Content, Node, RenderContext};

const FALLBACK_SLOT: u32 = 0;
const PRIMARY_SLOT: u32 = 1;

/// Which of the gate's two alternatives a pass renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// Output safe to produce before mount, including on the server.
    Fallback,
    /// Output produced once the client is ready.
    Primary,
}

impl Branch {
    /// Branch selected for a readiness value.
    #[must_use]
    pub const fn for_readiness(ready: bool) -> Self {
        if ready { Self::Primary } else { Self::Fallback }
    }
}

/// Pure selection between fallback and primary.
///
/// # Examples
/// ```
/// use frontend::hydration::gate::select;
///
/// assert_eq!(select(false, "loading", "ready"), "loading");
/// assert_eq!(select(true, "loading", "ready"), "ready");
/// ```
pub fn select<T>(ready: bool, fallback: T, primary: T) -> T {
    match Branch::for_readiness(ready) {
        Branch::Fallback => fallback,
        Branch::Primary => primary,
    }
}

/// Renders `fallback` until its readiness signal is set, then `primary`
/// for the rest of its life.
///
/// Absent content renders as [`Node::Empty`]. The two alternatives occupy
/// distinct child positions, so identities allocated inside one never
/// collide with the other.
pub struct RenderGate {
    readiness: ClientReadiness,
    fallback: Option<Content>,
    primary: Option<Content>,
    last_branch: Option<Branch>,
}

impl RenderGate {
    /// Gate around `primary` with an empty fallback.
    pub fn new(primary: impl Into<Content>) -> Self {
        Self {
            primary: Some(primary.into()),
            ..Self::empty()
        }
    }

    /// Gate with neither primary nor fallback; renders nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            readiness: ClientReadiness::new(),
            fallback: None,
            primary: None,
            last_branch: None,
        }
    }

    /// Replace the fallback.
    #[must_use]
    pub fn with_fallback(mut self, fallback: impl Into<Content>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    /// Readiness signal owned by this gate.
    #[must_use]
    pub const fn readiness(&self) -> &ClientReadiness {
        &self.readiness
    }

    /// Branch rendered by the latest pass, if any pass has run.
    #[must_use]
    pub const fn last_branch(&self) -> Option<Branch> {
        self.last_branch
    }
}

impl Component for RenderGate {
    fn render(&mut self, cx: &mut RenderContext) -> Node {
        let branch = Branch::for_readiness(self.readiness.observe(cx));
        debug_assert!(
            !(self.last_branch == Some(Branch::Primary) && branch == Branch::Fallback),
            "render gate reverted to its fallback"
        );
        self.last_branch = Some(branch);

        let (slot, content) = select(
            branch == Branch::Primary,
            (FALLBACK_SLOT, self.fallback.as_mut()),
            (PRIMARY_SLOT, self.primary.as_mut()),
        );
        content.map_or(Node::Empty, |content| cx.render_child(slot, content))
    }
}
