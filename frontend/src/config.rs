//! Hydration audit configuration loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::hydration::DEFAULT_ID_PREFIX;

/// Settings for the `hydration-audit` tool.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HYDRATION_AUDIT")]
pub struct AuditSettings {
    /// Run every post-commit effect twice while hydrating.
    #[ortho_config(default = false)]
    pub strict_effects: bool,
    /// Prefix for generated element identifiers.
    pub id_prefix: Option<String>,
    /// JSON file holding the user rendered by the audit.
    pub user_fixture: Option<PathBuf>,
}

impl AuditSettings {
    /// Return the configured identifier prefix, falling back to the default.
    pub fn id_prefix(&self) -> &str {
        self.id_prefix
            .as_deref()
            .filter(|prefix| !prefix.trim().is_empty())
            .unwrap_or(DEFAULT_ID_PREFIX)
    }
}
