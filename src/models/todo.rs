use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single task owned by exactly one user.
///
/// `deadline` is an opaque string: the service never parses or validates it.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub done: bool,
    pub deadline: String,
    pub created_at: String,
}

impl Todo {
    pub fn new(title: String, deadline: String) -> Self {
        Todo {
            id: Uuid::new_v4().to_string(),
            title,
            done: false,
            deadline,
            // ISO-8601 with millisecond precision, e.g. 2024-01-01T12:00:00.000Z
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
