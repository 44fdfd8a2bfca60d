use std::ops::Deref;

use log::info;
use model::training_type::TrainingType;
use storage::training_type::TrainingTypeStore;

#[derive(Clone)]
pub struct TrainingTypes {
    store: TrainingTypeStore,
}

impl TrainingTypes {
    pub(crate) fn new(store: TrainingTypeStore) -> Self {
        TrainingTypes { store }
    }

    pub fn create(&self, name: &str) -> TrainingType {
        info!("Creating training type '{}'", name);
        self.store.create(TrainingType::new(name))
    }
}

impl Deref for TrainingTypes {
    type Target = TrainingTypeStore;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}
