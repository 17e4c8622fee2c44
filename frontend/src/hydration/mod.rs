//! Hydration-safe rendering.
//!
//! Server markup and the first client pass must match exactly. Content that
//! depends on the browser (clocks, locale, storage, randomness) is therefore
//! gated behind a per-instance readiness signal that only turns `true` after
//! the first post-commit effect runs in a browser:
//!
//! - [`ClientReadiness`]: the latched signal
//! - [`RenderGate`]: fallback before readiness, primary after
//! - [`ClientOnly`]: the wrapper call sites use
//! - [`use_unique_id`]: `id`/`for` values stable across the hydration boundary
//!
//! [`Root`], [`render_to_string`] and [`hydrate`] drive render passes over a
//! [`Node`] tree so the guarantees can be exercised end to end.

mod client_only;
mod context;
mod error;
pub mod gate;
mod node;
mod readiness;
mod root;
mod unique_id;

pub use client_only::ClientOnly;
pub use context::{Component, Content, Environment, Invalidator, RenderContext};
pub use error::HydrationError;
pub use gate::{Branch, RenderGate};
pub use node::{Element, Node};
pub use readiness::ClientReadiness;
pub use root::{MAX_SETTLE_PASSES, Root, hydrate, render_to_string};
pub use unique_id::{DEFAULT_ID_PREFIX, use_unique_id};
