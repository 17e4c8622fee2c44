//! Errors reported while hydrating server markup.

use thiserror::Error;

const EXCERPT_CHARS: usize = 32;

/// Failures detected by [`hydrate`](super::hydrate) and [`Root::settle`](super::Root::settle).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HydrationError {
    /// The first client pass produced different markup from the server.
    #[error(
        "hydration mismatch at character {offset}: server rendered {expected:?}, client rendered {actual:?}"
    )]
    Mismatch {
        /// Character offset of the first difference.
        offset: usize,
        /// Server markup from the offset onwards, truncated.
        expected: String,
        /// Client markup from the offset onwards, truncated.
        actual: String,
    },

    /// Effects kept invalidating the tree.
    #[error("render tree did not settle after {passes} passes")]
    Unsettled {
        /// Passes run before giving up.
        passes: u32,
    },
}

impl HydrationError {
    /// Compare server and client markup, describing the first difference.
    pub(crate) fn check_markup(server: &str, client: &str) -> Result<(), Self> {
        if server == client {
            return Ok(());
        }
        let offset = server
            .chars()
            .zip(client.chars())
            .take_while(|(left, right)| left == right)
            .count();
        Err(Self::Mismatch {
            offset,
            expected: excerpt(server, offset),
            actual: excerpt(client, offset),
        })
    }
}

fn excerpt(markup: &str, offset: usize) -> String {
    markup.chars().skip(offset).take(EXCERPT_CHARS).collect()
}
