use serde::{Deserialize, Serialize};

use crate::models::{Todo, User};
use crate::store::Store;
use crate::utils::AppError;

/// Body for both create and update. Absent fields deserialize to empty
/// strings and are written as-is: there is no partial-update logic, update
/// always overwrites both `title` and `deadline` with whatever was sent.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TodoPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub deadline: String,
}

fn with_user<T>(
    store: &Store,
    user_id: &str,
    f: impl FnOnce(&mut User) -> Result<T, AppError>,
) -> Result<T, AppError> {
    let mut users = store.users_mut();
    let user = users
        .iter_mut()
        .find(|user| user.id == user_id)
        .ok_or(AppError::UnknownUser)?;
    f(user)
}

/// Todo existence gate: scans only the given user's own list. An id that
/// belongs to another user is simply not found here.
fn find_todo<'a>(user: &'a mut User, todo_id: &str) -> Result<&'a mut Todo, AppError> {
    user.todos
        .iter_mut()
        .find(|todo| todo.id == todo_id)
        .ok_or_else(|| AppError::UnknownTodo(todo_id.to_string()))
}

/// Full list in creation order, unfiltered and unpaginated.
/// Pure read, taken under the read lock.
pub fn list_todos(store: &Store, user_id: &str) -> Result<Vec<Todo>, AppError> {
    let users = store.users();
    let user = users
        .iter()
        .find(|user| user.id == user_id)
        .ok_or(AppError::UnknownUser)?;
    Ok(user.todos.clone())
}

pub fn create_todo(store: &Store, user_id: &str, payload: TodoPayload) -> Result<Todo, AppError> {
    with_user(store, user_id, |user| {
        let todo = Todo::new(payload.title, payload.deadline);
        user.todos.push(todo.clone());
        Ok(todo)
    })
}

pub fn update_todo(
    store: &Store,
    user_id: &str,
    todo_id: &str,
    payload: TodoPayload,
) -> Result<Todo, AppError> {
    with_user(store, user_id, |user| {
        let todo = find_todo(user, todo_id)?;
        todo.title = payload.title;
        todo.deadline = payload.deadline;
        Ok(todo.clone())
    })
}

/// One-way and idempotent: `done` never goes back to false.
pub fn complete_todo(store: &Store, user_id: &str, todo_id: &str) -> Result<Todo, AppError> {
    with_user(store, user_id, |user| {
        let todo = find_todo(user, todo_id)?;
        todo.done = true;
        Ok(todo.clone())
    })
}

pub fn delete_todo(store: &Store, user_id: &str, todo_id: &str) -> Result<(), AppError> {
    with_user(store, user_id, |user| {
        let index = user
            .todos
            .iter()
            .position(|todo| todo.id == todo_id)
            .ok_or_else(|| AppError::UnknownTodo(todo_id.to_string()))?;
        user.todos.remove(index);
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::user_service::{register_user, RegisterUserRequest};

    fn setup_user(store: &Store, username: &str) -> String {
        register_user(
            store,
            RegisterUserRequest {
                name: username.to_string(),
                username: username.to_string(),
            },
        )
        .unwrap()
        .id
    }

    fn payload(title: &str, deadline: &str) -> TodoPayload {
        TodoPayload {
            title: title.to_string(),
            deadline: deadline.to_string(),
        }
    }

    #[test]
    fn created_todo_starts_not_done() {
        let store = Store::new();
        let user_id = setup_user(&store, "ana");

        let todo = create_todo(&store, &user_id, payload("Buy milk", "2024-01-01")).unwrap();

        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.deadline, "2024-01-01");
        assert!(!todo.done);
        assert!(!todo.id.is_empty());
        assert!(!todo.created_at.is_empty());
    }

    #[test]
    fn list_preserves_creation_order_across_deletes() {
        let store = Store::new();
        let user_id = setup_user(&store, "ana");

        let a = create_todo(&store, &user_id, payload("a", "")).unwrap();
        let b = create_todo(&store, &user_id, payload("b", "")).unwrap();
        let c = create_todo(&store, &user_id, payload("c", "")).unwrap();

        delete_todo(&store, &user_id, &b.id).unwrap();

        let ids: Vec<String> = list_todos(&store, &user_id)
            .unwrap()
            .into_iter()
            .map(|todo| todo.id)
            .collect();
        assert_eq!(ids, vec![a.id, c.id]);
    }

    #[test]
    fn list_reads_alongside_other_readers() {
        let store = Store::new();
        let user_id = setup_user(&store, "ana");

        // A concurrent reader must not block the list; this deadlocks if the
        // list path ever takes the write lock again.
        let _reader = store.users();
        let todos = list_todos(&store, &user_id).unwrap();
        assert!(todos.is_empty());
    }

    #[test]
    fn update_overwrites_only_title_and_deadline() {
        let store = Store::new();
        let user_id = setup_user(&store, "ana");
        let created = create_todo(&store, &user_id, payload("old", "2024-01-01")).unwrap();

        let updated = update_todo(&store, &user_id, &created.id, payload("new", "2025-06-30")).unwrap();

        assert_eq!(updated.title, "new");
        assert_eq!(updated.deadline, "2025-06-30");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.done, created.done);
    }

    #[test]
    fn update_with_empty_payload_clears_both_fields() {
        let store = Store::new();
        let user_id = setup_user(&store, "ana");
        let created = create_todo(&store, &user_id, payload("title", "deadline")).unwrap();

        // Missing body fields arrive here as empty strings and are written as-is.
        let updated = update_todo(&store, &user_id, &created.id, payload("", "")).unwrap();

        assert_eq!(updated.title, "");
        assert_eq!(updated.deadline, "");
    }

    #[test]
    fn complete_is_one_way_and_idempotent() {
        let store = Store::new();
        let user_id = setup_user(&store, "ana");
        let created = create_todo(&store, &user_id, payload("task", "")).unwrap();

        let done_once = complete_todo(&store, &user_id, &created.id).unwrap();
        assert!(done_once.done);

        let done_again = complete_todo(&store, &user_id, &created.id).unwrap();
        assert!(done_again.done);
        assert_eq!(done_again.created_at, created.created_at);
    }

    #[test]
    fn unknown_todo_id_is_not_found() {
        let store = Store::new();
        let user_id = setup_user(&store, "ana");

        let result = update_todo(&store, &user_id, "missing", payload("x", ""));

        assert!(matches!(result, Err(AppError::UnknownTodo(id)) if id == "missing"));
    }

    #[test]
    fn todo_of_another_user_is_never_visible() {
        let store = Store::new();
        let ana_id = setup_user(&store, "ana");
        let bob_id = setup_user(&store, "bob");

        let anas_todo = create_todo(&store, &ana_id, payload("private", "")).unwrap();

        let as_bob = complete_todo(&store, &bob_id, &anas_todo.id);
        assert!(matches!(as_bob, Err(AppError::UnknownTodo(_))));

        // Ana's copy is untouched.
        let anas_list = list_todos(&store, &ana_id).unwrap();
        assert_eq!(anas_list.len(), 1);
        assert!(!anas_list[0].done);
    }

    #[test]
    fn delete_removes_exactly_one_entry() {
        let store = Store::new();
        let user_id = setup_user(&store, "ana");
        let created = create_todo(&store, &user_id, payload("gone", "")).unwrap();

        delete_todo(&store, &user_id, &created.id).unwrap();

        assert!(list_todos(&store, &user_id).unwrap().is_empty());
        let again = delete_todo(&store, &user_id, &created.id);
        assert!(matches!(again, Err(AppError::UnknownTodo(_))));
    }
}
