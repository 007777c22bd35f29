use serde::{Deserialize, Serialize};

use crate::models::User;
use crate::store::Store;
use crate::utils::AppError;

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegisterUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
}

/// Registers a new user. The username scan and the insert happen under one
/// write lock, so two racing registrations can never both succeed.
pub fn register_user(store: &Store, request: RegisterUserRequest) -> Result<User, AppError> {
    let mut users = store.users_mut();

    if users.iter().any(|user| user.username == request.username) {
        return Err(AppError::DuplicateUser(request.username));
    }

    let user = User::new(request.name, request.username);
    users.push(user.clone());

    Ok(user)
}
