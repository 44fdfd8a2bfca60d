use std::ops::Deref;

use log::info;
use model::errors::GymError;
use model::trainer::Trainer;
use storage::trainer::TrainerStore;

use super::users::Users;

#[derive(Clone)]
pub struct Trainers {
    store: TrainerStore,
    users: Users,
}

impl Trainers {
    pub(crate) fn new(store: TrainerStore, users: Users) -> Self {
        Trainers { store, users }
    }

    pub fn create(&self, first_name: &str, last_name: &str, specialization: &str) -> Trainer {
        let user = self.users.create(first_name, last_name);
        info!("Creating trainer for user: {}", user.username);
        self.store.create(Trainer::new(specialization, user.id))
    }

    pub fn update(&self, id: i64, specialization: &str) -> Result<Trainer, GymError> {
        let mut trainer = self.store.get(id).ok_or(GymError::TrainerNotFound(id))?;
        trainer.specialization = specialization.to_string();
        info!("Updating trainer with id: {}", id);
        Ok(self.store.update(trainer))
    }
}

impl Deref for Trainers {
    type Target = TrainerStore;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::Storage;

    #[test]
    fn create_and_update() {
        let storage = Storage::new();
        let users = Users::new(storage.users.clone());
        let trainers = Trainers::new(storage.trainers.clone(), users);

        let trainer = trainers.create("Mike", "Johnson", "Cardio");
        assert_eq!(storage.users.count(), 1);
        assert_eq!(trainer.specialization, "Cardio");

        let updated = trainers.update(trainer.id, "Strength").unwrap();
        assert_eq!(updated.specialization, "Strength");

        assert!(matches!(
            trainers.update(99, "Yoga"),
            Err(GymError::TrainerNotFound(99))
        ));
    }
}
