use serde::{Deserialize, Serialize};

/// The two account types the marketplace knows about. A board is owned by
/// exactly one role for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Freelancer,
    Institution,
}

impl Role {
    pub fn counterparty(self) -> Role {
        match self {
            Role::Freelancer => Role::Institution,
            Role::Institution => Role::Freelancer,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Freelancer => write!(f, "freelancer"),
            Role::Institution => write!(f, "institution"),
        }
    }
}
