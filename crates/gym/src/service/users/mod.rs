pub mod credentials;

use std::ops::Deref;

use log::info;
use model::user::User;
use storage::user::UserStore;

#[derive(Clone)]
pub struct Users {
    store: UserStore,
}

impl Users {
    pub(crate) fn new(store: UserStore) -> Self {
        Users { store }
    }

    /// Create an active user with a generated unique username and a
    /// random password. The credentials are only reported through the
    /// returned record and the log.
    pub fn create(&self, first_name: &str, last_name: &str) -> User {
        let username = credentials::generate_username(first_name, last_name, |candidate| {
            self.store.exists_by_username(candidate)
        });
        let password = credentials::generate_password();

        info!("Creating user with username: {}", username);
        self.store
            .create(User::new(first_name, last_name, &username, &password, true))
    }
}

impl Deref for Users {
    type Target = UserStore;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}
