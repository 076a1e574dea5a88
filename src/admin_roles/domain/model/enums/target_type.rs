use std::{fmt, str::FromStr};

use super::admin_roles_domain_error::AdminRolesDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TargetType {
    User,
    Group,
}

impl TargetType {
    /// Collection name used both in the resource schema and in API paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "users",
            Self::Group => "groups",
        }
    }
}

impl FromStr for TargetType {
    type Err = AdminRolesDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "users" => Ok(Self::User),
            "groups" => Ok(Self::Group),
            other => Err(AdminRolesDomainError::InvalidTargetType(other.to_string())),
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
