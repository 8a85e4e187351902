use std::fmt;

/// Role that holds every capability
pub const ADMINISTRATOR_ROLE: &str = "administrator";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Manage site options, which includes creating and deleting exports
    ManageOptions,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ManageOptions => "manage_options",
        }
    }

    /// Roles that carry this capability
    pub fn granting_roles(&self) -> &'static [&'static str] {
        match self {
            Self::ManageOptions => &[ADMINISTRATOR_ROLE],
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
