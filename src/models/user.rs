use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::todo::Todo;

/// Registered identity. `username` is the unique lookup key and never changes
/// after registration; `todos` keeps creation order.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
pub struct User {
    pub id: String,
    pub name: String,
    pub username: String,
    pub todos: Vec<Todo>,
}

impl User {
    pub fn new(name: String, username: String) -> Self {
        User {
            id: Uuid::new_v4().to_string(),
            name,
            username,
            todos: Vec::new(),
        }
    }
}
