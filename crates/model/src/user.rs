use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
    pub is_active: bool,
}

impl User {
    pub fn new(
        first_name: &str,
        last_name: &str,
        username: &str,
        password: &str,
        is_active: bool,
    ) -> User {
        User {
            id: 0,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            is_active,
        }
    }
}
