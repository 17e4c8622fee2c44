#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]
//! Behaviour-driven tests for hydration-safe rendering.
//!
//! These scenarios render a small form on the server, hydrate it in a
//! browser root and check that client-only content only appears after mount
//! while generated identifiers survive the hydration boundary.

use frontend::audit::{load_user, run_audit};
use frontend::config::AuditSettings;
use frontend::domain::User;
use frontend::hydration::{
    ClientOnly, Component, Element, Environment, HydrationError, Node, RenderContext, Root,
    render_to_string, use_unique_id,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

const CLOCK_FALLBACK: &str = "--:--";
const LOCAL_CLOCK: &str = "09:41";

// -----------------------------------------------------------------------------
// Test World
// -----------------------------------------------------------------------------

#[derive(Default, ScenarioState)]
struct HydrationWorld {
    strict_effects: Slot<bool>,
    server_html: Slot<String>,
    hydrated_html: Slot<String>,
    passes: Slot<u32>,
    hydration_error: Slot<String>,
    mismatch: Slot<bool>,
    sample_user: Slot<User>,
    audit_html: Slot<String>,
    audit_passes: Slot<u32>,
}

impl HydrationWorld {
    fn strict_effects(&self) -> bool {
        self.strict_effects.get().unwrap_or(false)
    }

    fn audit_settings(&self) -> AuditSettings {
        AuditSettings {
            strict_effects: self.strict_effects(),
            id_prefix: None,
            user_fixture: None,
        }
    }

    fn hydrate(&self, server_html: &str) {
        let root = Root::new(Environment::Browser, sign_up_form())
            .with_strict_effects(self.strict_effects());
        match root.hydrate(server_html) {
            Ok(root) => {
                self.hydrated_html.set(root.output().to_html());
                self.passes.set(root.passes());
            }
            Err(err) => {
                self.mismatch
                    .set(matches!(err, HydrationError::Mismatch { .. }));
                self.hydration_error.set(err.to_string());
            }
        }
    }
}

fn sign_up_form() -> impl Component {
    let mut clock = ClientOnly::new(Element::new("time").child(LOCAL_CLOCK))
        .with_fallback(Node::text(CLOCK_FALLBACK));
    move |cx: &mut RenderContext| -> Node {
        let email_id = use_unique_id(cx, Some("email"));
        let clock = cx.render_child(0, &mut clock);
        Element::new("form")
            .child(
                Element::new("label")
                    .attr("for", email_id.clone())
                    .child("Email"),
            )
            .child(Element::new("input").attr("id", email_id).attr("type", "email"))
            .child(clock)
            .into()
    }
}

#[fixture]
fn world() -> HydrationWorld {
    HydrationWorld::default()
}

// -----------------------------------------------------------------------------
// Given Steps
// -----------------------------------------------------------------------------

#[given("a sign-up form with a client-only clock")]
fn a_sign_up_form_with_a_client_only_clock(world: &HydrationWorld) {
    world.strict_effects.set(false);
}

#[given("strict effects are enabled")]
fn strict_effects_are_enabled(world: &HydrationWorld) {
    world.strict_effects.set(true);
}

#[given("the bundled sample user")]
fn the_bundled_sample_user(world: &HydrationWorld) {
    let user = load_user(&world.audit_settings()).expect("bundled sample should load");
    world.sample_user.set(user);
}

// -----------------------------------------------------------------------------
// When Steps
// -----------------------------------------------------------------------------

#[when("the form is rendered on the server")]
fn the_form_is_rendered_on_the_server(world: &HydrationWorld) {
    world.server_html.set(render_to_string(sign_up_form()));
}

#[when("the browser hydrates the server markup")]
fn the_browser_hydrates_the_server_markup(world: &HydrationWorld) {
    let server_html = world.server_html.get().expect("server markup should be set");
    world.hydrate(&server_html);
}

#[when("the browser hydrates the markup {markup}")]
fn the_browser_hydrates_the_markup(world: &HydrationWorld, markup: String) {
    world.hydrate(markup.trim_matches('"'));
}

#[when("the hydration audit runs")]
fn the_hydration_audit_runs(world: &HydrationWorld) {
    let report = run_audit(&world.audit_settings()).expect("audit should pass");
    world.audit_html.set(report.hydrated_html);
    world.audit_passes.set(report.passes);
}

// -----------------------------------------------------------------------------
// Then Steps
// -----------------------------------------------------------------------------

#[then("the markup shows the clock fallback")]
fn the_markup_shows_the_clock_fallback(world: &HydrationWorld) {
    let html = world.server_html.get().expect("server markup should be set");
    assert!(html.contains(CLOCK_FALLBACK), "{html}");
    assert!(!html.contains(LOCAL_CLOCK), "{html}");
}

#[then("the label points at the email input")]
fn the_label_points_at_the_email_input(world: &HydrationWorld) {
    let html = world.server_html.get().expect("server markup should be set");
    assert!(html.contains(r#"<label for="email-r0">"#), "{html}");
    assert!(html.contains(r#"<input id="email-r0" type="email">"#), "{html}");
}

#[then("hydration succeeds")]
fn hydration_succeeds(world: &HydrationWorld) {
    assert!(
        world.hydration_error.get().is_none(),
        "unexpected error: {:?}",
        world.hydration_error.get()
    );
    assert!(world.hydrated_html.get().is_some());
}

#[then("the settled markup shows the local clock")]
fn the_settled_markup_shows_the_local_clock(world: &HydrationWorld) {
    let html = world.hydrated_html.get().expect("hydrated markup should be set");
    assert!(html.contains(&format!("<time>{LOCAL_CLOCK}</time>")), "{html}");
    assert!(!html.contains(CLOCK_FALLBACK), "{html}");
    assert!(html.contains(r#"for="email-r0""#), "{html}");
}

#[then("the client rendered {count} passes")]
fn the_client_rendered_passes(world: &HydrationWorld, count: u32) {
    assert_eq!(world.passes.get(), Some(count));
}

#[then("hydration fails with a mismatch")]
fn hydration_fails_with_a_mismatch(world: &HydrationWorld) {
    let error = world
        .hydration_error
        .get()
        .expect("hydration error should be set");
    assert_eq!(world.mismatch.get(), Some(true), "{error}");
    assert!(world.hydrated_html.get().is_none());
}

#[then("the audit reports {count} passes")]
fn the_audit_reports_passes(world: &HydrationWorld, count: u32) {
    assert_eq!(world.audit_passes.get(), Some(count));
}

#[then("the audit markup shows the sample user")]
fn the_audit_markup_shows_the_sample_user(world: &HydrationWorld) {
    let html = world.audit_html.get().expect("audit markup should be set");
    let user = world.sample_user.get().expect("sample user should be loaded");
    assert!(html.contains(&format!("<h2>{}</h2>", user.full_name())), "{html}");
    assert!(html.contains(&format!(r#"value="{}""#, user.email())), "{html}");
    assert!(html.contains(r#"<label for="id-r0">Contact</label>"#), "{html}");
    assert!(html.contains(r#"<input id="id-r0""#), "{html}");
}

// -----------------------------------------------------------------------------
// Scenario Bindings
// -----------------------------------------------------------------------------

#[scenario(
    path = "tests/features/hydration.feature",
    name = "Server render shows the fallback"
)]
fn server_render_shows_the_fallback(world: HydrationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/hydration.feature",
    name = "Hydration reveals client-only content after mount"
)]
fn hydration_reveals_client_only_content(world: HydrationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/hydration.feature",
    name = "Strict effects still switch branches once"
)]
fn strict_effects_still_switch_once(world: HydrationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/hydration.feature",
    name = "Stale server markup is reported as a mismatch"
)]
fn stale_server_markup_is_a_mismatch(world: HydrationWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/hydration.feature",
    name = "The profile card audit passes for the bundled user"
)]
fn profile_card_audit_passes(world: HydrationWorld) {
    let _ = world;
}
