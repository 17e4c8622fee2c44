//! Hydration audit over a sample profile card.
//!
//! The card mixes deterministic markup with browser-only content so a single
//! run exercises every hydration guarantee: the server and first client pass
//! agree, identifiers line up across the boundary, and the client-only badge
//! appears once the page has mounted.

use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::AuditSettings;
use crate::domain::User;
use crate::hydration::{
    ClientOnly, Component, Content, Element, Environment, HydrationError, Node, RenderContext,
    Root, render_to_string, use_unique_id,
};

const SAMPLE_USER: &str = include_str!("../fixtures/sample_user.json");

/// Errors returned by [`run_audit`].
#[derive(Debug, Error)]
pub enum AuditError {
    /// The user fixture could not be read.
    #[error("failed to read user fixture at {path}: {source}")]
    FixtureRead {
        /// Path to the fixture.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The user fixture is not a valid user.
    #[error("user fixture is invalid: {0}")]
    FixtureParse(#[from] serde_json::Error),
    /// The client could not hydrate the server markup.
    #[error("hydration failed: {0}")]
    Hydration(#[from] HydrationError),
}

/// Outcome of a successful audit run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    /// Markup produced by the server render.
    pub server_html: String,
    /// Markup after hydration settled.
    pub hydrated_html: String,
    /// Client passes rendered, the hydration pass included.
    pub passes: u32,
}

/// Profile card for a single user.
pub struct ProfileCard {
    user: User,
    id_prefix: String,
    last_updated: ClientOnly,
}

impl ProfileCard {
    /// Card for `user`, labelling its contact field with `id_prefix`.
    pub fn new(user: User, id_prefix: impl Into<String>) -> Self {
        let updated_at = user.base().updated_at();
        let last_updated = ClientOnly::new(Content::from_fn(move |_cx: &mut RenderContext| {
            updated_badge(updated_at, describe_age(updated_at, Utc::now()))
        }))
        .with_fallback(updated_badge(
            updated_at,
            format!("updated {}", updated_at.format("%Y-%m-%d")),
        ));
        Self {
            user,
            id_prefix: id_prefix.into(),
            last_updated,
        }
    }
}

impl Component for ProfileCard {
    fn render(&mut self, cx: &mut RenderContext) -> Node {
        let contact_id = use_unique_id(cx, Some(self.id_prefix.as_str()));
        let badge = cx.render_child(0, &mut self.last_updated);
        let mut card = Element::new("article")
            .attr("class", "profile-card")
            .child(Element::new("h2").child(self.user.full_name()))
            .child(
                Element::new("span")
                    .attr("class", "role-badge")
                    .child(self.user.role().as_str()),
            );
        if !self.user.is_active() {
            card = card.child(
                Element::new("span")
                    .attr("class", "status")
                    .child("inactive"),
            );
        }
        card.child(
            Element::new("label")
                .attr("for", contact_id.clone())
                .child("Contact"),
        )
        .child(
            Element::new("input")
                .attr("id", contact_id)
                .attr("type", "email")
                .attr("readonly", "readonly")
                .attr("value", self.user.email().to_string()),
        )
        .child(badge)
        .into()
    }
}

fn updated_badge(updated_at: DateTime<Utc>, label: String) -> Node {
    Element::new("time")
        .attr("class", "last-updated")
        .attr("datetime", updated_at.to_rfc3339())
        .child(label)
        .into()
}

/// Relative "updated ..." label for a timestamp seen at `now`.
///
/// Depends on the clock, so it must only render after mount.
#[must_use]
pub fn describe_age(updated_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let age = now.signed_duration_since(updated_at);
    let (count, unit) = if age.num_days() > 0 {
        (age.num_days(), "day")
    } else if age.num_hours() > 0 {
        (age.num_hours(), "hour")
    } else if age.num_minutes() > 0 {
        (age.num_minutes(), "minute")
    } else {
        return "updated just now".to_owned();
    };
    let plural = if count == 1 { "" } else { "s" };
    format!("updated {count} {unit}{plural} ago")
}

/// Load the user named by `settings`, or the bundled sample.
///
/// # Errors
///
/// Returns [`AuditError::FixtureRead`] or [`AuditError::FixtureParse`] when
/// the fixture cannot be loaded.
pub fn load_user(settings: &AuditSettings) -> Result<User, AuditError> {
    let contents = match settings.user_fixture.as_deref() {
        Some(path) => read_fixture(path)?,
        None => SAMPLE_USER.to_owned(),
    };
    Ok(serde_json::from_str(&contents)?)
}

fn read_fixture(path: &Path) -> Result<String, AuditError> {
    let fixture_error = |source| AuditError::FixtureRead {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        fixture_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "fixture path must be a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(fixture_error)?;
    dir.read_to_string(Path::new(file_name))
        .map_err(fixture_error)
}

/// Render the profile card on the server, then hydrate it in a browser root.
///
/// # Errors
///
/// Returns [`AuditError`] when the fixture cannot be loaded or hydration
/// fails.
pub fn run_audit(settings: &AuditSettings) -> Result<AuditReport, AuditError> {
    let user = load_user(settings)?;
    debug!(user = %user.base().id(), "rendering profile card");

    let server_html = render_to_string(ProfileCard::new(user.clone(), settings.id_prefix()));
    let root = Root::new(
        Environment::Browser,
        ProfileCard::new(user, settings.id_prefix()),
    )
    .with_strict_effects(settings.strict_effects)
    .hydrate(&server_html)?;

    let report = AuditReport {
        server_html,
        hydrated_html: root.output().to_html(),
        passes: root.passes(),
    };
    info!(passes = report.passes, "profile card hydrated");
    Ok(report)
}
