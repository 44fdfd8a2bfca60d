use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TrainingType {
    pub id: i64,
    pub name: String,
}

impl TrainingType {
    pub fn new(name: &str) -> TrainingType {
        TrainingType {
            id: 0,
            name: name.to_string(),
        }
    }
}
