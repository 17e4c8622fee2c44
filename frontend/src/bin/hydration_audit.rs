//! Server-renders the sample profile card, hydrates it and logs the outcome.
//!
//! Settings come from `HYDRATION_AUDIT_*` environment variables, CLI flags or
//! configuration files (see [`frontend::config::AuditSettings`]). A hydration
//! mismatch or a card that never settles makes the process exit non-zero.

use std::env;

use color_eyre::eyre::{Result, WrapErr, eyre};
use frontend::audit::run_audit;
use frontend::config::AuditSettings;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AuditSettings::load_from_iter(env::args_os())
        .map_err(|err| eyre!("failed to load audit settings: {err}"))?;
    let report = run_audit(&settings).wrap_err("hydration audit failed")?;
    info!(
        passes = report.passes,
        server_html = %report.server_html,
        hydrated_html = %report.hydrated_html,
        "hydration audit passed"
    );
    Ok(())
}
