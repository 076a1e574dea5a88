use std::fmt;

/// Remote step that was running when a call against the Okta API failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RoleOperation {
    Listing,
    Assigning,
    Removing,
}

impl RoleOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Listing => "listing",
            Self::Assigning => "assigning",
            Self::Removing => "removing",
        }
    }
}

impl fmt::Display for RoleOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
