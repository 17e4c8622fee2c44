//! Closed set of user roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a role string is not one of the five known roles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown user role '{value}'; expected one of admin, hr, manager, employee, candidate")]
pub struct UnknownUserRole {
    /// The rejected input.
    pub value: String,
}

/// Role a TalentLink account acts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Platform administrator.
    Admin,
    /// Human-resources staff posting and screening jobs.
    Hr,
    /// Hiring manager.
    Manager,
    /// Employee of a hiring organisation.
    Employee,
    /// Candidate browsing and applying for jobs.
    Candidate,
}

impl UserRole {
    /// Every role, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Admin,
        Self::Hr,
        Self::Manager,
        Self::Employee,
        Self::Candidate,
    ];

    /// Wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Hr => "hr",
            Self::Manager => "manager",
            Self::Employee => "employee",
            Self::Candidate => "candidate",
        }
    }

    /// Whether the role belongs to the hiring side of the board.
    #[must_use]
    pub const fn is_hirer(self) -> bool {
        matches!(self, Self::Admin | Self::Hr | Self::Manager)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = UnknownUserRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownUserRole {
                value: s.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("admin", UserRole::Admin)]
    #[case("hr", UserRole::Hr)]
    #[case("manager", UserRole::Manager)]
    #[case("employee", UserRole::Employee)]
    #[case("candidate", UserRole::Candidate)]
    fn parses_known_roles(#[case] raw: &str, #[case] expected: UserRole) {
        assert_eq!(raw.parse::<UserRole>(), Ok(expected));
        let json = serde_json::to_string(&expected).expect("serialise");
        assert_eq!(json, format!("\"{raw}\""));
    }

    #[rstest]
    #[case("Admin")]
    #[case("recruiter")]
    #[case("")]
    #[case(" hr")]
    fn rejects_anything_else(#[case] raw: &str) {
        assert_eq!(
            raw.parse::<UserRole>(),
            Err(UnknownUserRole {
                value: raw.to_owned()
            })
        );
        let quoted = serde_json::to_string(raw).expect("serialise string");
        assert!(serde_json::from_str::<UserRole>(&quoted).is_err());
    }

    #[rstest]
    fn hirer_roles() {
        let hirers: Vec<_> = UserRole::ALL.into_iter().filter(|r| r.is_hirer()).collect();
        assert_eq!(hirers, [UserRole::Admin, UserRole::Hr, UserRole::Manager]);
    }
}
