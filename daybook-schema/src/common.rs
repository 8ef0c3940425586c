use serde::{Deserialize, Serialize};

/// Success body of every `DELETE /<resource>/{id}`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

impl DeleteConfirmation {
    pub fn for_entity(entity: &str) -> Self {
        Self {
            message: format!("{entity} deleted"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
}

impl HealthStatus {
    pub fn ok(service: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.into(),
        }
    }
}
