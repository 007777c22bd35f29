use actix_web::{web, HttpResponse};

use crate::models::User;
use crate::services::user_service::{self, RegisterUserRequest};
use crate::store::Store;
use crate::utils::{AppError, ErrorResponse};

/// POST /users - Registers a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered", body = User),
        (status = 400, description = "Username already taken", body = ErrorResponse)
    )
)]
pub async fn register_user(
    store: web::Data<Store>,
    request: web::Json<RegisterUserRequest>,
) -> Result<HttpResponse, AppError> {
    let username = request.username.clone();

    let user = user_service::register_user(&store, request.into_inner())?;

    log::info!("✅ POST /users - Registered '{}' ({})", username, user.id);
    Ok(HttpResponse::Created().json(user))
}
