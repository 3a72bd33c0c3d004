//! Twitter user domain entity

use serde::{Deserialize, Serialize};

/// A user as reported by the user lookup endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwitterUser {
    pub id: String,
    pub name: String,
    pub username: String,
}
