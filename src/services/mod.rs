pub mod todo_service;
pub mod user_service;

pub use todo_service::*;
pub use user_service::*;
