use eyre::Result;
use serde_json::{Map, Value};
use storage::trainee::TraineeStore;
use storage::trainer::TrainerStore;
use storage::training::TrainingStore;
use storage::training_type::TrainingTypeStore;
use storage::user::UserStore;
use storage::Storage;

/// JSON snapshot of every collection, one key per kind.
#[derive(Clone)]
pub struct Dump {
    training_types: TrainingTypeStore,
    users: UserStore,
    trainees: TraineeStore,
    trainers: TrainerStore,
    trainings: TrainingStore,
}

impl Dump {
    pub fn new(store: Storage) -> Dump {
        Dump {
            training_types: store.training_types,
            users: store.users,
            trainees: store.trainees,
            trainers: store.trainers,
            trainings: store.trainings,
        }
    }

    pub fn dump(&self) -> Result<Value> {
        let mut root = Map::new();
        root.insert(
            "training_types".to_string(),
            serde_json::to_value(self.training_types.find_all())?,
        );
        root.insert(
            "users".to_string(),
            serde_json::to_value(self.users.find_all())?,
        );
        root.insert(
            "trainees".to_string(),
            serde_json::to_value(self.trainees.find_all())?,
        );
        root.insert(
            "trainers".to_string(),
            serde_json::to_value(self.trainers.find_all())?,
        );
        root.insert(
            "trainings".to_string(),
            serde_json::to_value(self.trainings.find_all())?,
        );
        Ok(Value::Object(root))
    }
}
