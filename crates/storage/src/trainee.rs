use std::collections::HashMap;
use std::sync::Arc;

use log::info;
use model::trainee::Trainee;
use parking_lot::RwLock;

use crate::ids::IdAllocator;

#[derive(Clone, Default)]
pub struct TraineeStore {
    trainees: Arc<RwLock<HashMap<i64, Trainee>>>,
    ids: IdAllocator,
}

impl TraineeStore {
    pub fn create(&self, mut trainee: Trainee) -> Trainee {
        trainee.id = self.ids.next();
        info!("Created trainee with id: {}", trainee.id);
        self.trainees.write().insert(trainee.id, trainee.clone());
        trainee
    }

    pub fn update(&self, trainee: Trainee) -> Trainee {
        info!("Updated trainee with id: {}", trainee.id);
        self.trainees.write().insert(trainee.id, trainee.clone());
        trainee
    }

    pub fn delete(&self, id: i64) {
        info!("Deleted trainee with id: {}", id);
        self.trainees.write().remove(&id);
    }

    pub fn get(&self, id: i64) -> Option<Trainee> {
        self.trainees.read().get(&id).cloned()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.trainees.read().contains_key(&id)
    }

    /// First profile referencing `user_id`. At most one is expected but
    /// this is not enforced.
    pub fn find_by_user_id(&self, user_id: i64) -> Option<Trainee> {
        self.trainees
            .read()
            .values()
            .find(|t| t.user_id == user_id)
            .cloned()
    }

    pub fn find_all(&self) -> Vec<Trainee> {
        self.trainees.read().values().cloned().collect()
    }

    pub fn count(&self) -> usize {
        self.trainees.read().len()
    }

    pub(crate) fn seed(&self, trainee: Trainee) {
        self.ids.observe(trainee.id);
        self.trainees.write().insert(trainee.id, trainee);
    }
}
