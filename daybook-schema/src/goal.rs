use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GoalCreate {
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

/// Body of `PUT /goals/{id}`: replaces both fields.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GoalUpdate {
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Goal {
    pub id: i64,
    pub text: String,
    pub done: bool,
    /// Stamped by the server at insertion; never updated.
    pub created_at: DateTime<Utc>,
}
