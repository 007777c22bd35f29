pub mod health;
pub mod swagger;
pub mod todos;
pub mod users;

use actix_web::web;

use crate::middleware::identity::IdentityGate;

/// Route table, shared between the server and the HTTP tests.
/// Every `/todos*` route sits behind the identity gate.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .route("/users", web::post().to(users::register_user))
        .service(
            web::scope("/todos")
                .wrap(IdentityGate)
                .route("", web::get().to(todos::list_todos))
                .route("", web::post().to(todos::create_todo))
                .route("/{id}", web::put().to(todos::update_todo))
                .route("/{id}/done", web::patch().to(todos::complete_todo))
                .route("/{id}", web::delete().to(todos::delete_todo)),
        );
}
