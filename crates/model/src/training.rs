use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single session between a trainee and a trainer.
/// `training_type` is free text and is not required to match a
/// [`crate::training_type::TrainingType`] entry.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Training {
    pub id: i64,
    pub trainee_id: i64,
    pub trainer_id: i64,
    pub name: String,
    pub training_type: String,
    pub duration_min: u32,
    pub date: NaiveDate,
}

impl Training {
    pub fn new(
        trainee_id: i64,
        trainer_id: i64,
        name: &str,
        training_type: &str,
        duration_min: u32,
        date: NaiveDate,
    ) -> Training {
        Training {
            id: 0,
            trainee_id,
            trainer_id,
            name: name.to_string(),
            training_type: training_type.to_string(),
            duration_min,
            date,
        }
    }
}
