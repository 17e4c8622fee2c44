//! Render roots: server rendering and client hydration.

use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use super::context::Effect;
use super::{Component, Environment, HydrationError, Invalidator, Node, RenderContext};

/// Upper bound on re-renders triggered by effects before giving up.
pub const MAX_SETTLE_PASSES: u32 = 16;

/// Owns a component tree and drives render passes over it.
///
/// Each pass renders synchronously, then commits: in a browser environment
/// the post-commit effects queued during the pass run; on the server they
/// are discarded. Effects may invalidate the root, asking for another pass.
pub struct Root<C> {
    component: C,
    environment: Environment,
    invalidated: Rc<Cell<bool>>,
    strict_effects: bool,
    passes: u32,
    output: Node,
}

impl<C: Component> Root<C> {
    /// Root for `component` in `environment`. Nothing renders until asked.
    pub fn new(environment: Environment, component: C) -> Self {
        Self {
            component,
            environment,
            invalidated: Rc::new(Cell::new(false)),
            strict_effects: false,
            passes: 0,
            output: Node::Empty,
        }
    }

    /// Run every post-commit effect twice, as development builds of UI
    /// runtimes do, to expose effects that are not idempotent.
    #[must_use]
    pub fn with_strict_effects(mut self, enabled: bool) -> Self {
        self.strict_effects = enabled;
        self
    }

    /// Render one pass and commit it.
    pub fn render(&mut self) -> &Node {
        let effects = self.run_pass();
        self.commit(effects);
        &self.output
    }

    /// Re-render until no effect asks for another pass.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError::Unsettled`] after [`MAX_SETTLE_PASSES`]
    /// consecutive invalidated passes.
    pub fn settle(&mut self) -> Result<&Node, HydrationError> {
        let mut extra_passes = 0;
        while self.needs_render() {
            if extra_passes >= MAX_SETTLE_PASSES {
                return Err(HydrationError::Unsettled {
                    passes: extra_passes,
                });
            }
            self.render();
            extra_passes += 1;
        }
        debug!(passes = self.passes, "render tree settled");
        Ok(&self.output)
    }

    /// Attach to `server_html`: the first pass must reproduce it exactly.
    ///
    /// On success the first pass is committed and the root settled, so the
    /// returned root shows post-mount output.
    ///
    /// # Errors
    ///
    /// Returns [`HydrationError::Mismatch`] when the first pass differs from
    /// `server_html` (no effects run in that case), or
    /// [`HydrationError::Unsettled`] if the tree never settles.
    pub fn hydrate(mut self, server_html: &str) -> Result<Self, HydrationError> {
        let effects = self.run_pass();
        let client_html = self.output.to_html();
        if let Err(err) = HydrationError::check_markup(server_html, &client_html) {
            warn!(error = %err, "hydration mismatch");
            return Err(err);
        }
        self.commit(effects);
        self.settle()?;
        Ok(self)
    }

    /// Whether an effect has requested another pass.
    #[must_use]
    pub fn needs_render(&self) -> bool {
        self.invalidated.get()
    }

    /// Output of the latest pass.
    #[must_use]
    pub const fn output(&self) -> &Node {
        &self.output
    }

    /// Passes rendered so far.
    #[must_use]
    pub const fn passes(&self) -> u32 {
        self.passes
    }

    /// Environment this root renders in.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// The root component.
    #[must_use]
    pub const fn component(&self) -> &C {
        &self.component
    }

    fn run_pass(&mut self) -> Vec<Effect> {
        self.invalidated.set(false);
        let mut cx = RenderContext::new(
            self.environment,
            Invalidator::new(Rc::clone(&self.invalidated)),
        );
        self.output = self.component.render(&mut cx);
        self.passes = self.passes.saturating_add(1);
        cx.into_effects()
    }

    fn commit(&self, effects: Vec<Effect>) {
        if !self.environment.runs_effects() {
            if !effects.is_empty() {
                trace!(count = effects.len(), "discarding post-commit effects on the server");
            }
            return;
        }
        let runs = if self.strict_effects { 2 } else { 1 };
        trace!(count = effects.len(), runs, "running post-commit effects");
        for mut effect in effects {
            for _ in 0..runs {
                effect();
            }
        }
    }
}

/// Render `component` once on the server and serialise it.
pub fn render_to_string<C: Component>(component: C) -> String {
    Root::new(Environment::Server, component).render().to_html()
}

/// Hydrate `component` in a browser root against `server_html`.
///
/// # Errors
///
/// See [`Root::hydrate`].
///
/// # Examples
/// ```
/// use frontend::hydration::{ClientOnly, Node, hydrate, render_to_string};
///
/// let page = || ClientOnly::new(Node::text("ready")).with_fallback(Node::text("wait"));
/// let server_html = render_to_string(page());
///
/// let root = hydrate(&server_html, page()).expect("markup matches");
/// assert_eq!(server_html, "wait");
/// assert_eq!(root.output().to_html(), "ready");
/// ```
pub fn hydrate<C: Component>(server_html: &str, component: C) -> Result<Root<C>, HydrationError> {
    Root::new(Environment::Browser, component).hydrate(server_html)
}
