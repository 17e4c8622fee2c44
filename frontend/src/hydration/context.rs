//! Per-pass render context, components and renderable content.

use std::cell::Cell;
use std::rc::Rc;

use super::Node;

/// Where a render pass executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Markup generation with no post-commit effects.
    Server,
    /// A browser-capable environment where post-commit effects run.
    Browser,
}

impl Environment {
    /// Whether post-commit effects run after a pass in this environment.
    #[must_use]
    pub const fn runs_effects(self) -> bool {
        matches!(self, Self::Browser)
    }
}

/// Deferred work queued during render and run after the pass commits.
pub(crate) type Effect = Box<dyn FnMut()>;

/// Handle used by effects to request another render pass.
#[derive(Debug, Clone)]
pub struct Invalidator(Rc<Cell<bool>>);

impl Invalidator {
    pub(crate) const fn new(flag: Rc<Cell<bool>>) -> Self {
        Self(flag)
    }

    /// Mark the owning root as needing a re-render.
    pub fn invalidate(&self) {
        self.0.set(true);
    }
}

/// State threaded through a single render pass.
///
/// Tracks the position of the component currently rendering (a path of child
/// indices from the root plus a per-component hook counter) so identities
/// derived from it are stable across passes over the same tree shape.
pub struct RenderContext {
    environment: Environment,
    path: Vec<u32>,
    hook_index: u32,
    effects: Vec<Effect>,
    invalidator: Invalidator,
}

impl RenderContext {
    pub(crate) const fn new(environment: Environment, invalidator: Invalidator) -> Self {
        Self {
            environment,
            path: Vec::new(),
            hook_index: 0,
            effects: Vec::new(),
            invalidator,
        }
    }

    /// Environment of the current pass.
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Render `component` at child position `index` of the current component.
    ///
    /// The child gets its own hook counter; the parent's resumes afterwards.
    pub fn render_child<C>(&mut self, index: u32, component: &mut C) -> Node
    where
        C: Component + ?Sized,
    {
        self.path.push(index);
        let parent_hooks = std::mem::replace(&mut self.hook_index, 0);
        let node = component.render(self);
        self.hook_index = parent_hooks;
        self.path.pop();
        node
    }

    /// Opaque token unique to the calling component and call order.
    ///
    /// Two passes over the same tree shape yield the same tokens in the same
    /// positions, whichever environment they run in.
    pub fn use_id(&mut self) -> String {
        let hook = self.hook_index;
        self.hook_index = self.hook_index.saturating_add(1);
        let segments: Vec<String> = self
            .path
            .iter()
            .chain(std::iter::once(&hook))
            .map(|segment| format!("{segment:x}"))
            .collect();
        format!("r{}", segments.join("_"))
    }

    /// Queue `effect` to run after this pass commits.
    ///
    /// Effects never run during render, and never run at all on the server.
    pub fn on_commit(&mut self, effect: impl FnMut() + 'static) {
        self.effects.push(Box::new(effect));
    }

    /// Handle for requesting a re-render from an effect.
    #[must_use]
    pub fn invalidator(&self) -> Invalidator {
        self.invalidator.clone()
    }

    pub(crate) fn into_effects(self) -> Vec<Effect> {
        self.effects
    }
}

/// Something that renders a [`Node`].
pub trait Component {
    /// Produce this component's output for the current pass.
    fn render(&mut self, cx: &mut RenderContext) -> Node;
}

impl<F> Component for F
where
    F: FnMut(&mut RenderContext) -> Node,
{
    fn render(&mut self, cx: &mut RenderContext) -> Node {
        self(cx)
    }
}

impl Component for Node {
    fn render(&mut self, _cx: &mut RenderContext) -> Node {
        self.clone()
    }
}

/// Boxed component handed to gates and wrappers.
pub struct Content(Box<dyn Component>);

impl Content {
    /// Wrap any component.
    pub fn new(component: impl Component + 'static) -> Self {
        Self(Box::new(component))
    }

    /// Wrap a render closure, evaluated only when the content is rendered.
    pub fn from_fn(render: impl FnMut(&mut RenderContext) -> Node + 'static) -> Self {
        Self::new(render)
    }
}

impl Component for Content {
    fn render(&mut self, cx: &mut RenderContext) -> Node {
        self.0.render(cx)
    }
}

impl From<Node> for Content {
    fn from(value: Node) -> Self {
        Self::new(value)
    }
}

impl From<super::Element> for Content {
    fn from(value: super::Element) -> Self {
        Self::new(Node::from(value))
    }
}

impl From<&str> for Content {
    fn from(value: &str) -> Self {
        Self::new(Node::text(value))
    }
}
