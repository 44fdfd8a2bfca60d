use std::collections::HashMap;
use std::sync::Arc;

use log::info;
use model::user::User;
use parking_lot::RwLock;

use crate::ids::IdAllocator;

#[derive(Clone, Default)]
pub struct UserStore {
    users: Arc<RwLock<HashMap<i64, User>>>,
    ids: IdAllocator,
}

impl UserStore {
    pub fn create(&self, mut user: User) -> User {
        user.id = self.ids.next();
        info!("Created user with id: {}, username: {}", user.id, user.username);
        self.users.write().insert(user.id, user.clone());
        user
    }

    /// Upsert at `user.id`. Inserts even when the id is absent.
    pub fn update(&self, user: User) -> User {
        info!("Updated user with id: {}", user.id);
        self.users.write().insert(user.id, user.clone());
        user
    }

    pub fn delete(&self, id: i64) {
        info!("Deleted user with id: {}", id);
        self.users.write().remove(&id);
    }

    pub fn get(&self, id: i64) -> Option<User> {
        self.users.read().get(&id).cloned()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.users.read().contains_key(&id)
    }

    pub fn find_by_username(&self, username: &str) -> Option<User> {
        self.users
            .read()
            .values()
            .find(|u| u.username == username)
            .cloned()
    }

    pub fn exists_by_username(&self, username: &str) -> bool {
        self.users.read().values().any(|u| u.username == username)
    }

    pub fn find_all(&self) -> Vec<User> {
        self.users.read().values().cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.users.read().len()
    }

    pub(crate) fn seed(&self, user: User) {
        self.ids.observe(user.id);
        self.users.write().insert(user.id, user);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User::new("John", "Doe", name, "pass123", true)
    }

    #[test]
    fn create_assigns_increasing_ids() {
        let store = UserStore::default();
        let first = store.create(user("John.Doe"));
        let second = store.create(user("John.Doe1"));
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn get_after_create_and_delete() {
        let store = UserStore::default();
        let created = store.create(user("John.Doe"));
        assert_eq!(store.get(created.id), Some(created.clone()));

        store.delete(created.id);
        assert_eq!(store.get(created.id), None);

        // deleting again is a no-op
        store.delete(created.id);
    }

    #[test]
    fn update_is_an_upsert() {
        let store = UserStore::default();
        let mut unseen = user("Jane.Roe");
        unseen.id = 42;
        store.update(unseen.clone());
        assert_eq!(store.get(42), Some(unseen));
    }

    #[test]
    fn lookup_by_username() {
        let store = UserStore::default();
        store.create(user("John.Doe"));
        assert!(store.exists_by_username("John.Doe"));
        assert!(!store.exists_by_username("John.Doe1"));
        assert_eq!(
            store.find_by_username("John.Doe").map(|u| u.id),
            Some(1)
        );
    }

    #[test]
    fn find_all_is_a_snapshot() {
        let store = UserStore::default();
        store.create(user("a"));
        store.create(user("b"));
        let snapshot = store.find_all();
        store.create(user("c"));
        assert_eq!(snapshot.len(), 2);
        assert_eq!(store.count(), 3);
    }

    #[test]
    fn seed_keeps_created_ids_ahead() {
        let store = UserStore::default();
        let mut seeded = user("seeded");
        seeded.id = 5;
        store.seed(seeded);
        let created = store.create(user("fresh"));
        assert_eq!(created.id, 6);
    }
}
