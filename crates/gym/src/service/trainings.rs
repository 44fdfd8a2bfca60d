use std::ops::Deref;

use chrono::NaiveDate;
use log::info;
use model::training::Training;
use storage::training::TrainingStore;

#[derive(Clone)]
pub struct Trainings {
    store: TrainingStore,
}

impl Trainings {
    pub(crate) fn new(store: TrainingStore) -> Self {
        Trainings { store }
    }

    /// Direct creates do not re-check the trainee/trainer references;
    /// integrity is enforced at bootstrap time only.
    pub fn create(
        &self,
        trainee_id: i64,
        trainer_id: i64,
        name: &str,
        training_type: &str,
        duration_min: u32,
        date: NaiveDate,
    ) -> Training {
        info!("Creating training '{}'", name);
        self.store.create(Training::new(
            trainee_id,
            trainer_id,
            name,
            training_type,
            duration_min,
            date,
        ))
    }
}

impl Deref for Trainings {
    type Target = TrainingStore;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}
