//! User data model.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{BaseEntity, UnknownUserRole, UserRole};

/// Maximum length of a first or last name.
pub const NAME_MAX: usize = 64;

/// Validation errors returned when building a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    /// The email address is not of the form `local@domain.tld`.
    #[error("email address is invalid")]
    InvalidEmail,
    /// First name is blank.
    #[error("first name must not be empty")]
    EmptyFirstName,
    /// Last name is blank.
    #[error("last name must not be empty")]
    EmptyLastName,
    /// A name exceeds [`NAME_MAX`] characters.
    #[error("names must be at most {max} characters")]
    NameTooLong {
        /// Largest accepted length.
        max: usize,
    },
    /// The avatar reference is present but blank.
    #[error("avatar must not be blank when present")]
    EmptyAvatar,
    /// The role is not one of the known roles.
    #[error(transparent)]
    Role(#[from] UnknownUserRole),
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an email address.
    ///
    /// # Errors
    ///
    /// Returns [`UserValidationError::InvalidEmail`] when the input is not of
    /// the form `local@domain.tld`.
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let email = email.into();
        if !email_regex().is_match(&email) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

fn validate_name(
    name: String,
    empty: UserValidationError,
) -> Result<String, UserValidationError> {
    if name.trim().is_empty() {
        return Err(empty);
    }
    if name.chars().count() > NAME_MAX {
        return Err(UserValidationError::NameTooLong { max: NAME_MAX });
    }
    Ok(name)
}

/// TalentLink account.
///
/// ## Invariants
/// - Embeds a complete [`BaseEntity`].
/// - `email` is syntactically valid; names are non-blank and bounded.
/// - `role` is one of the five [`UserRole`] values.
/// - `avatar`, when present, is non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    base: BaseEntity,
    email: EmailAddress,
    first_name: String,
    last_name: String,
    role: UserRole,
    avatar: Option<String>,
    is_active: bool,
}

impl User {
    /// Fallible constructor enforcing the name invariants. New users are
    /// active and have no avatar.
    ///
    /// # Errors
    ///
    /// Returns [`UserValidationError`] when a name is blank or too long.
    pub fn try_new(
        base: BaseEntity,
        email: EmailAddress,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: UserRole,
    ) -> Result<Self, UserValidationError> {
        let first_name = validate_name(first_name.into(), UserValidationError::EmptyFirstName)?;
        let last_name = validate_name(last_name.into(), UserValidationError::EmptyLastName)?;
        Ok(Self {
            base,
            email,
            first_name,
            last_name,
            role,
            avatar: None,
            is_active: true,
        })
    }

    /// Attach an avatar reference.
    ///
    /// # Errors
    ///
    /// Returns [`UserValidationError::EmptyAvatar`] for blank input.
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Result<Self, UserValidationError> {
        let avatar = avatar.into();
        if avatar.trim().is_empty() {
            return Err(UserValidationError::EmptyAvatar);
        }
        self.avatar = Some(avatar);
        Ok(self)
    }

    /// Set whether the account is active.
    #[must_use]
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Identity and audit fields.
    #[must_use]
    pub const fn base(&self) -> &BaseEntity {
        &self.base
    }

    /// Contact email.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Given name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Given and family name separated by a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Role on the board.
    #[must_use]
    pub const fn role(&self) -> UserRole {
        self.role
    }

    /// Avatar reference, if any.
    #[must_use]
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    /// Whether the account is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }
}

const fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserDto {
    #[serde(flatten)]
    base: BaseEntity,
    email: String,
    first_name: String,
    last_name: String,
    role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
    #[serde(default = "default_active")]
    is_active: bool,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User {
            base,
            email,
            first_name,
            last_name,
            role,
            avatar,
            is_active,
        } = value;
        Self {
            base,
            email: email.into(),
            first_name,
            last_name,
            role: role.as_str().to_owned(),
            avatar,
            is_active,
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        let role: UserRole = value.role.parse()?;
        let email = EmailAddress::new(value.email)?;
        let user = Self::try_new(value.base, email, value.first_name, value.last_name, role)?
            .with_active(value.is_active);
        match value.avatar {
            Some(avatar) => user.with_avatar(avatar),
            None => Ok(user),
        }
    }
}
