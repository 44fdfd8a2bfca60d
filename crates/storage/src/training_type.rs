use std::collections::HashMap;
use std::sync::Arc;

use log::info;
use model::training_type::TrainingType;
use parking_lot::RwLock;

use crate::ids::IdAllocator;

#[derive(Clone, Default)]
pub struct TrainingTypeStore {
    types: Arc<RwLock<HashMap<i64, TrainingType>>>,
    ids: IdAllocator,
}

impl TrainingTypeStore {
    pub fn create(&self, mut training_type: TrainingType) -> TrainingType {
        training_type.id = self.ids.next();
        info!("Created training type with id: {}", training_type.id);
        self.types
            .write()
            .insert(training_type.id, training_type.clone());
        training_type
    }

    pub fn update(&self, training_type: TrainingType) -> TrainingType {
        info!("Updated training type with id: {}", training_type.id);
        self.types
            .write()
            .insert(training_type.id, training_type.clone());
        training_type
    }

    pub fn delete(&self, id: i64) {
        info!("Deleted training type with id: {}", id);
        self.types.write().remove(&id);
    }

    pub fn get(&self, id: i64) -> Option<TrainingType> {
        self.types.read().get(&id).cloned()
    }

    pub fn find_by_name(&self, name: &str) -> Option<TrainingType> {
        self.types.read().values().find(|t| t.name == name).cloned()
    }

    pub fn find_all(&self) -> Vec<TrainingType> {
        self.types.read().values().cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.types.read().len()
    }

    pub(crate) fn seed(&self, training_type: TrainingType) {
        self.ids.observe(training_type.id);
        self.types.write().insert(training_type.id, training_type);
    }
}
