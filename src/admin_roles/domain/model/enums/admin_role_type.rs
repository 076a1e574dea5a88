use std::{fmt, str::FromStr};

use super::admin_roles_domain_error::AdminRolesDomainError;

/// Administrator roles Okta accepts on the role assignment endpoints.
///
/// Matching is exact and case-sensitive.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum AdminRoleType {
    SuperAdmin,
    OrgAdmin,
    ApiAccessManagementAdmin,
    AppAdmin,
    UserAdmin,
    MobileAdmin,
    ReadOnlyAdmin,
    HelpDeskAdmin,
}

impl AdminRoleType {
    pub const ALL: [AdminRoleType; 8] = [
        Self::SuperAdmin,
        Self::OrgAdmin,
        Self::ApiAccessManagementAdmin,
        Self::AppAdmin,
        Self::UserAdmin,
        Self::MobileAdmin,
        Self::ReadOnlyAdmin,
        Self::HelpDeskAdmin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "SUPER_ADMIN",
            Self::OrgAdmin => "ORG_ADMIN",
            Self::ApiAccessManagementAdmin => "API_ACCESS_MANAGEMENT_ADMIN",
            Self::AppAdmin => "APP_ADMIN",
            Self::UserAdmin => "USER_ADMIN",
            Self::MobileAdmin => "MOBILE_ADMIN",
            Self::ReadOnlyAdmin => "READ_ONLY_ADMIN",
            Self::HelpDeskAdmin => "HELP_DESK_ADMIN",
        }
    }
}

impl FromStr for AdminRoleType {
    type Err = AdminRolesDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| AdminRolesDomainError::InvalidRole(value.to_string()))
    }
}

impl fmt::Display for AdminRoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
