use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Trainer {
    pub id: i64,
    pub specialization: String,
    pub user_id: i64,
}

impl Trainer {
    pub fn new(specialization: &str, user_id: i64) -> Trainer {
        Trainer {
            id: 0,
            specialization: specialization.to_string(),
            user_id,
        }
    }
}
