use actix_web::{web, HttpResponse};

use crate::middleware::identity::CurrentUser;
use crate::models::Todo;
use crate::services::todo_service::{self, TodoPayload};
use crate::store::Store;
use crate::utils::{AppError, ErrorResponse};

/// GET /todos - Lists the caller's todos in creation order
#[utoipa::path(
    get,
    path = "/todos",
    tag = "Todos",
    params(
        ("username" = String, Header, description = "Registered username identifying the caller")
    ),
    responses(
        (status = 200, description = "All todos of the caller", body = [Todo]),
        (status = 400, description = "Unknown user", body = ErrorResponse)
    )
)]
pub async fn list_todos(
    user: web::ReqData<CurrentUser>,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let todos = todo_service::list_todos(&store, &user.id)?;

    log::info!("📋 GET /todos - {} todos for '{}'", todos.len(), user.username);
    Ok(HttpResponse::Ok().json(todos))
}

/// POST /todos - Creates a todo at the end of the caller's list
#[utoipa::path(
    post,
    path = "/todos",
    tag = "Todos",
    request_body = TodoPayload,
    params(
        ("username" = String, Header, description = "Registered username identifying the caller")
    ),
    responses(
        (status = 201, description = "Todo created", body = Todo),
        (status = 400, description = "Unknown user", body = ErrorResponse)
    )
)]
pub async fn create_todo(
    user: web::ReqData<CurrentUser>,
    store: web::Data<Store>,
    payload: web::Json<TodoPayload>,
) -> Result<HttpResponse, AppError> {
    let todo = todo_service::create_todo(&store, &user.id, payload.into_inner())?;

    log::info!("📝 POST /todos - Created {} for '{}'", todo.id, user.username);
    Ok(HttpResponse::Created().json(todo))
}

/// PUT /todos/{id} - Overwrites title and deadline
#[utoipa::path(
    put,
    path = "/todos/{id}",
    tag = "Todos",
    request_body = TodoPayload,
    params(
        ("id" = String, Path, description = "Todo id"),
        ("username" = String, Header, description = "Registered username identifying the caller")
    ),
    responses(
        (status = 200, description = "Todo updated", body = Todo),
        (status = 400, description = "Unknown user", body = ErrorResponse),
        (status = 404, description = "Unknown todo", body = ErrorResponse)
    )
)]
pub async fn update_todo(
    user: web::ReqData<CurrentUser>,
    store: web::Data<Store>,
    id: web::Path<String>,
    payload: web::Json<TodoPayload>,
) -> Result<HttpResponse, AppError> {
    let todo = todo_service::update_todo(&store, &user.id, &id, payload.into_inner())?;

    log::info!("🔧 PUT /todos/{} - Updated for '{}'", todo.id, user.username);
    Ok(HttpResponse::Ok().json(todo))
}

/// PATCH /todos/{id}/done - Marks a todo as done (idempotent)
#[utoipa::path(
    patch,
    path = "/todos/{id}/done",
    tag = "Todos",
    params(
        ("id" = String, Path, description = "Todo id"),
        ("username" = String, Header, description = "Registered username identifying the caller")
    ),
    responses(
        (status = 200, description = "Todo marked done", body = Todo),
        (status = 400, description = "Unknown user", body = ErrorResponse),
        (status = 404, description = "Unknown todo", body = ErrorResponse)
    )
)]
pub async fn complete_todo(
    user: web::ReqData<CurrentUser>,
    store: web::Data<Store>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let todo = todo_service::complete_todo(&store, &user.id, &id)?;

    log::info!("✅ PATCH /todos/{}/done - Done for '{}'", todo.id, user.username);
    Ok(HttpResponse::Ok().json(todo))
}

/// DELETE /todos/{id} - Removes a todo from the caller's list
#[utoipa::path(
    delete,
    path = "/todos/{id}",
    tag = "Todos",
    params(
        ("id" = String, Path, description = "Todo id"),
        ("username" = String, Header, description = "Registered username identifying the caller")
    ),
    responses(
        (status = 204, description = "Todo deleted, no body"),
        (status = 400, description = "Unknown user", body = ErrorResponse),
        (status = 404, description = "Unknown todo", body = ErrorResponse)
    )
)]
pub async fn delete_todo(
    user: web::ReqData<CurrentUser>,
    store: web::Data<Store>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    todo_service::delete_todo(&store, &user.id, &id)?;

    log::info!("🗑️ DELETE /todos/{} - Removed for '{}'", id, user.username);
    Ok(HttpResponse::NoContent().finish())
}
