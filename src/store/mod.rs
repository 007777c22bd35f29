use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::User;

/// Process-wide user registry, held entirely in memory.
///
/// There is no persistence: the registry starts empty on every process start.
/// The registry (and every user's todo list inside it) is guarded by a single
/// coarse lock; all access goes through these accessors so no raw reference to
/// a user's todo list ever escapes the store.
pub struct Store {
    users: RwLock<Vec<User>>,
}

impl Store {
    pub fn new() -> Self {
        Store {
            users: RwLock::new(Vec::new()),
        }
    }

    pub fn users(&self) -> RwLockReadGuard<'_, Vec<User>> {
        self.users.read().expect("user registry lock poisoned")
    }

    pub fn users_mut(&self) -> RwLockWriteGuard<'_, Vec<User>> {
        self.users.write().expect("user registry lock poisoned")
    }

    /// Exact, case-sensitive username lookup. Returns a snapshot of the user.
    pub fn find_by_username(&self, username: &str) -> Option<User> {
        self.users()
            .iter()
            .find(|user| user.username == username)
            .cloned()
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let store = Store::new();
        assert!(store.users().is_empty());
        assert!(store.find_by_username("ana").is_none());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let store = Store::new();
        store
            .users_mut()
            .push(User::new("Ana".to_string(), "ana".to_string()));

        assert!(store.find_by_username("ana").is_some());
        assert!(store.find_by_username("Ana").is_none());
    }
}
