use std::ops::Deref;

use chrono::NaiveDate;
use log::info;
use model::errors::GymError;
use model::trainee::Trainee;
use storage::trainee::TraineeStore;

use super::users::Users;

#[derive(Clone)]
pub struct Trainees {
    store: TraineeStore,
    users: Users,
}

impl Trainees {
    pub(crate) fn new(store: TraineeStore, users: Users) -> Self {
        Trainees { store, users }
    }

    /// Create the backing user (with generated credentials) and the
    /// trainee profile referencing it.
    pub fn create(
        &self,
        first_name: &str,
        last_name: &str,
        date_of_birth: NaiveDate,
        address: &str,
    ) -> Trainee {
        let user = self.users.create(first_name, last_name);
        info!("Creating trainee for user: {}", user.username);
        self.store.create(Trainee::new(date_of_birth, address, user.id))
    }

    pub fn update(
        &self,
        id: i64,
        date_of_birth: NaiveDate,
        address: &str,
    ) -> Result<Trainee, GymError> {
        let mut trainee = self.store.get(id).ok_or(GymError::TraineeNotFound(id))?;
        trainee.date_of_birth = date_of_birth;
        trainee.address = address.to_string();
        info!("Updating trainee with id: {}", id);
        Ok(self.store.update(trainee))
    }

    pub fn delete(&self, id: i64) {
        info!("Deleting trainee with id: {}", id);
        self.store.delete(id);
    }
}

impl Deref for Trainees {
    type Target = TraineeStore;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}
