use std::collections::HashMap;
use std::sync::Arc;

use log::info;
use model::training::Training;
use parking_lot::RwLock;

use crate::ids::IdAllocator;

#[derive(Clone, Default)]
pub struct TrainingStore {
    trainings: Arc<RwLock<HashMap<i64, Training>>>,
    ids: IdAllocator,
}

impl TrainingStore {
    pub fn create(&self, mut training: Training) -> Training {
        training.id = self.ids.next();
        info!("Created training with id: {}", training.id);
        self.trainings.write().insert(training.id, training.clone());
        training
    }

    pub fn update(&self, training: Training) -> Training {
        info!("Updated training with id: {}", training.id);
        self.trainings.write().insert(training.id, training.clone());
        training
    }

    pub fn delete(&self, id: i64) {
        info!("Deleted training with id: {}", id);
        self.trainings.write().remove(&id);
    }

    pub fn get(&self, id: i64) -> Option<Training> {
        self.trainings.read().get(&id).cloned()
    }

    pub fn find_by_trainee_id(&self, trainee_id: i64) -> Vec<Training> {
        self.trainings
            .read()
            .values()
            .filter(|t| t.trainee_id == trainee_id)
            .cloned()
            .collect()
    }

    pub fn find_by_trainer_id(&self, trainer_id: i64) -> Vec<Training> {
        self.trainings
            .read()
            .values()
            .filter(|t| t.trainer_id == trainer_id)
            .cloned()
            .collect()
    }

    pub fn find_all(&self) -> Vec<Training> {
        self.trainings.read().values().cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.trainings.read().len()
    }

    pub(crate) fn seed(&self, training: Training) {
        self.ids.observe(training.id);
        self.trainings.write().insert(training.id, training);
    }
}
