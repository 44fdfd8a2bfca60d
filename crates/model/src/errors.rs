use thiserror::Error;

#[derive(Error, Debug)]
pub enum GymError {
    #[error("User not found: {0}")]
    UserNotFound(i64),
    #[error("Trainee not found: {0}")]
    TraineeNotFound(i64),
    #[error("Trainer not found: {0}")]
    TrainerNotFound(i64),
    #[error("Training not found: {0}")]
    TrainingNotFound(i64),
    #[error("Training type not found: {0}")]
    TrainingTypeNotFound(i64),
    #[error("Common error: {0}")]
    Common(#[from] eyre::Error),
}
