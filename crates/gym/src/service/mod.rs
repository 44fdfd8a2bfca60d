pub mod trainees;
pub mod trainers;
pub mod training_types;
pub mod trainings;
pub mod users;
