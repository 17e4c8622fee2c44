//! Hydration-stable identifiers for `id`/`for` attribute pairs.

use super::RenderContext;

/// Prefix used when the caller supplies none.
pub const DEFAULT_ID_PREFIX: &str = "id";

/// Identifier of the form `<prefix>-<token>` for the calling component.
///
/// The token comes from [`RenderContext::use_id`], so the server pass and the
/// first client pass agree for the same tree position and call order.
///
/// # Examples
/// ```
/// use frontend::hydration::{Element, Node, RenderContext, render_to_string, use_unique_id};
///
/// let field = |cx: &mut RenderContext| -> Node {
///     let id = use_unique_id(cx, Some("email"));
///     Element::new("input").attr("id", id).into()
/// };
/// assert_eq!(render_to_string(field), r#"<input id="email-r0">"#);
/// ```
pub fn use_unique_id(cx: &mut RenderContext, prefix: Option<&str>) -> String {
    let prefix = prefix.unwrap_or(DEFAULT_ID_PREFIX);
    format!("{prefix}-{}", cx.use_id())
}
