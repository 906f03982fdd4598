// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capability {
    pub resource: String,
    pub action: String,
}

impl Capability {
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
        }
    }

    pub fn matches(&self, resource: &str, action: &str) -> bool {
        self.resource == resource && self.action == action
    }
}

/// Stored as `"Student"` / `"Teacher"`; matched case-insensitively on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    #[default]
    Student,
    Teacher,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
        }
    }

    pub fn default_capabilities(&self) -> HashSet<Capability> {
        use Capability as Cap;
        let mut caps = HashSet::from([
            Cap::new("schedules", "read"),
            Cap::new("finder", "search"),
            Cap::new("faculty", "read"),
            Cap::new("media", "read"),
            Cap::new("notifications", "read:own"),
        ]);
        if *self == Role::Teacher {
            caps.extend([
                Cap::new("bookings", "create"),
                Cap::new("bookings", "cancel"),
                Cap::new("waitlist", "join"),
                Cap::new("media", "upload"),
                Cap::new("media", "approve"),
                Cap::new("media", "delete"),
                Cap::new("media", "share"),
                Cap::new("audit", "read"),
                Cap::new("admin", "read"),
                Cap::new("users", "manage"),
                Cap::new("settings", "manage"),
            ]);
        }
        caps
    }

    pub fn has_capability(&self, resource: &str, action: &str) -> bool {
        self.default_capabilities()
            .iter()
            .any(|c| c.matches(resource, action))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            other => Err(DomainError::Validation(format!("unknown role '{other}'"))),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        value.as_str().to_string()
    }
}

/// A login email, trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_lowercase();
        let Some((local, domain)) = value.split_once('@') else {
            return Err(DomainError::Validation(format!(
                "'{value}' is not an email address"
            )));
        };
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(DomainError::Validation(format!(
                "'{value}' is not an email address"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map_or(self.0.as_str(), |(local, _)| local)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        let role: Role = serde_json::from_str("\"teacher\"").unwrap();
        assert_eq!(role, Role::Teacher);
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"Teacher\"");
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn only_teachers_book() {
        assert!(Role::Teacher.has_capability("bookings", "create"));
        assert!(!Role::Student.has_capability("bookings", "create"));
        assert!(Role::Student.has_capability("finder", "search"));
    }

    #[test]
    fn email_is_normalized() {
        let email = Email::new("  Jane.Doe@Uni.EDU ").unwrap();
        assert_eq!(email.as_str(), "jane.doe@uni.edu");
        assert_eq!(email.local_part(), "jane.doe");
        assert!(Email::new("no-at-sign").is_err());
        assert!(Email::new("@uni.edu").is_err());
    }
}
