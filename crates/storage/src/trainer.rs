use std::collections::HashMap;
use std::sync::Arc;

use log::info;
use model::trainer::Trainer;
use parking_lot::RwLock;

use crate::ids::IdAllocator;

#[derive(Clone, Default)]
pub struct TrainerStore {
    trainers: Arc<RwLock<HashMap<i64, Trainer>>>,
    ids: IdAllocator,
}

impl TrainerStore {
    pub fn create(&self, mut trainer: Trainer) -> Trainer {
        trainer.id = self.ids.next();
        info!("Created trainer with id: {}", trainer.id);
        self.trainers.write().insert(trainer.id, trainer.clone());
        trainer
    }

    pub fn update(&self, trainer: Trainer) -> Trainer {
        info!("Updated trainer with id: {}", trainer.id);
        self.trainers.write().insert(trainer.id, trainer.clone());
        trainer
    }

    pub fn delete(&self, id: i64) {
        info!("Deleted trainer with id: {}", id);
        self.trainers.write().remove(&id);
    }

    pub fn get(&self, id: i64) -> Option<Trainer> {
        self.trainers.read().get(&id).cloned()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.trainers.read().contains_key(&id)
    }

    pub fn find_by_user_id(&self, user_id: i64) -> Option<Trainer> {
        self.trainers
            .read()
            .values()
            .find(|t| t.user_id == user_id)
            .cloned()
    }

    pub fn find_all(&self) -> Vec<Trainer> {
        self.trainers.read().values().cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.trainers.read().len()
    }

    pub(crate) fn seed(&self, trainer: Trainer) {
        self.ids.observe(trainer.id);
        self.trainers.write().insert(trainer.id, trainer);
    }
}
