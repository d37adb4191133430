use serde::{Deserialize, Serialize};

use crate::models::role::Role;

/// Target the core hands to the external navigation sink. Routing itself
/// lives outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Navigation {
    Home,
    Board(Role),
}
