pub mod bootstrap;
pub mod ids;
pub mod trainee;
pub mod trainer;
pub mod training;
pub mod training_type;
pub mod user;

pub use bootstrap::SourceFiles;

use trainee::TraineeStore;
use trainer::TrainerStore;
use training::TrainingStore;
use training_type::TrainingTypeStore;
use user::UserStore;

/// One keyed collection per entity kind. Ids are unique within a kind,
/// not across kinds.
#[derive(Clone, Default)]
pub struct Storage {
    pub training_types: TrainingTypeStore,
    pub users: UserStore,
    pub trainees: TraineeStore,
    pub trainers: TrainerStore,
    pub trainings: TrainingStore,
}

impl Storage {
    pub fn new() -> Self {
        Storage::default()
    }
}
