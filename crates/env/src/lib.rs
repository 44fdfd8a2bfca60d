use std::{env::var, sync::Arc};

use dotenv::dotenv;
use eyre::{Context, Result};
use log::info;

#[derive(Clone)]
pub struct Env(Arc<EnvInner>);

struct EnvInner {
    training_types_file: String,
    users_file: String,
    trainees_file: String,
    trainers_file: String,
    trainings_file: String,
}

impl Env {
    pub fn load() -> Result<Env> {
        if let Err(err) = dotenv() {
            info!("Failed to load .env file: {}", err);
        }

        Ok(Env(Arc::new(EnvInner {
            training_types_file: var("TRAINING_TYPES_FILE")
                .context("Failed to get TRAINING_TYPES_FILE from env")?,
            users_file: var("USERS_FILE").context("Failed to get USERS_FILE from env")?,
            trainees_file: var("TRAINEES_FILE").context("Failed to get TRAINEES_FILE from env")?,
            trainers_file: var("TRAINERS_FILE").context("Failed to get TRAINERS_FILE from env")?,
            trainings_file: var("TRAININGS_FILE")
                .context("Failed to get TRAININGS_FILE from env")?,
        })))
    }

    pub fn training_types_file(&self) -> &str {
        &self.0.training_types_file
    }

    pub fn users_file(&self) -> &str {
        &self.0.users_file
    }

    pub fn trainees_file(&self) -> &str {
        &self.0.trainees_file
    }

    pub fn trainers_file(&self) -> &str {
        &self.0.trainers_file
    }

    pub fn trainings_file(&self) -> &str {
        &self.0.trainings_file
    }
}
