use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Client profile. The personal data lives on the referenced [`crate::user::User`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Trainee {
    pub id: i64,
    pub date_of_birth: NaiveDate,
    pub address: String,
    pub user_id: i64,
}

impl Trainee {
    pub fn new(date_of_birth: NaiveDate, address: &str, user_id: i64) -> Trainee {
        Trainee {
            id: 0,
            date_of_birth,
            address: address.to_string(),
            user_id,
        }
    }
}
