use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo Service API",
        version = "1.0.0",
        description = "Minimal multi-user to-do list API. \n\n**Identity:** every `/todos*` request carries a `username` header naming a registered user. This is identification only — there are no passwords, tokens, or sessions.\n\n**Storage:** pure process memory; the registry resets on every restart."
    ),
    paths(
        // Users
        crate::api::users::register_user,

        // Todos
        crate::api::todos::list_todos,
        crate::api::todos::create_todo,
        crate::api::todos::update_todo,
        crate::api::todos::complete_todo,
        crate::api::todos::delete_todo,

        // Health
        crate::api::health::health_check,
    ),
    components(
        schemas(
            crate::models::User,
            crate::models::Todo,
            crate::services::user_service::RegisterUserRequest,
            crate::services::todo_service::TodoPayload,
            crate::utils::error::ErrorResponse,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "User registration. Usernames are unique and immutable; users are never updated or deleted."),
        (name = "Todos", description = "Per-user todo management. All routes resolve the caller through the `username` header first."),
        (name = "Health", description = "Health check endpoint for monitoring service status."),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "username_header",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    "username",
                    "Registered username identifying the caller",
                ))),
            );
        }
    }
}
