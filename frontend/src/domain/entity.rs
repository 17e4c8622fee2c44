//! Identity and audit fields shared by every domain record.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Validation errors for entity identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityValidationError {
    /// Identifiers must contain at least one non-whitespace character.
    #[error("entity identifier must not be empty")]
    EmptyId,
    /// Identifiers must not carry leading or trailing whitespace.
    #[error("entity identifier must not have surrounding whitespace")]
    PaddedId,
}

/// Opaque identifier of a record or of the actor that touched it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId(String);

impl EntityId {
    /// Validate and construct an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`EntityValidationError`] for blank or padded input.
    pub fn new(id: impl Into<String>) -> Result<Self, EntityValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(EntityValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(EntityValidationError::PaddedId);
        }
        Ok(Self(id))
    }

    /// Fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EntityId> for String {
    fn from(value: EntityId) -> Self {
        value.0
    }
}

impl TryFrom<String> for EntityId {
    type Error = EntityValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Identity and audit block embedded in every domain record.
///
/// ## Invariants
/// - All five fields are present; identifiers are non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseEntity {
    id: EntityId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    created_by: EntityId,
    updated_by: EntityId,
}

impl BaseEntity {
    /// Audit block for a record created by `actor` at `at`.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use frontend::domain::{BaseEntity, EntityId};
    ///
    /// let actor = EntityId::new("hr-7").expect("valid id");
    /// let entity = BaseEntity::create(actor.clone(), Utc::now());
    /// assert_eq!(entity.created_by(), &actor);
    /// assert_eq!(entity.created_at(), entity.updated_at());
    /// ```
    #[must_use]
    pub fn create(actor: EntityId, at: DateTime<Utc>) -> Self {
        Self {
            id: EntityId::random(),
            created_at: at,
            updated_at: at,
            created_by: actor.clone(),
            updated_by: actor,
        }
    }

    /// Audit block from stored values.
    #[must_use]
    pub const fn from_parts(
        id: EntityId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        created_by: EntityId,
        updated_by: EntityId,
    ) -> Self {
        Self {
            id,
            created_at,
            updated_at,
            created_by,
            updated_by,
        }
    }

    /// Record an update by `actor` at `at`.
    pub fn touch(&mut self, actor: EntityId, at: DateTime<Utc>) {
        self.updated_by = actor;
        self.updated_at = at;
    }

    /// Record identifier.
    #[must_use]
    pub const fn id(&self) -> &EntityId {
        &self.id
    }

    /// Creation time.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Time of the latest update.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Actor that created the record.
    #[must_use]
    pub const fn created_by(&self) -> &EntityId {
        &self.created_by
    }

    /// Actor behind the latest update.
    #[must_use]
    pub const fn updated_by(&self) -> &EntityId {
        &self.updated_by
    }
}
