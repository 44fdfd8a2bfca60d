use storage::Storage;

pub mod dump;
pub mod service;

use dump::Dump;
use service::trainees::Trainees;
use service::trainers::Trainers;
use service::training_types::TrainingTypes;
use service::trainings::Trainings;
use service::users::Users;

/// Facade over the per-kind services. Callers reach the stores through
/// the services, never directly.
#[derive(Clone)]
pub struct Gym {
    pub users: Users,
    pub trainees: Trainees,
    pub trainers: Trainers,
    pub trainings: Trainings,
    pub training_types: TrainingTypes,
    pub dump: Dump,
}

impl Gym {
    pub fn new(storage: Storage) -> Self {
        let users = Users::new(storage.users.clone());
        let trainees = Trainees::new(storage.trainees.clone(), users.clone());
        let trainers = Trainers::new(storage.trainers.clone(), users.clone());
        let trainings = Trainings::new(storage.trainings.clone());
        let training_types = TrainingTypes::new(storage.training_types.clone());
        let dump = Dump::new(storage);
        Gym {
            users,
            trainees,
            trainers,
            trainings,
            training_types,
            dump,
        }
    }
}
