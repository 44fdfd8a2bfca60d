use chrono::{Local, NaiveDate};
use eyre::Context;
use log::info;
use storage::SourceFiles;

fn main() -> eyre::Result<()> {
    let env = env::Env::load().context("Failed to load environment")?;
    pretty_env_logger::init();
    color_eyre::install()?;

    info!("seeding storage");
    let storage = storage::Storage::new();
    storage
        .bootstrap(&SourceFiles {
            training_types: env.training_types_file().into(),
            users: env.users_file().into(),
            trainees: env.trainees_file().into(),
            trainers: env.trainers_file().into(),
            trainings: env.trainings_file().into(),
        })
        .context("Failed to bootstrap storage")?;

    let gym = gym::Gym::new(storage);

    println!("=== Data loaded from files ===");
    println!("Trainees: {}", gym.trainees.count());
    println!("Trainers: {}", gym.trainers.count());
    println!("Trainings: {}", gym.trainings.count());

    println!("\n=== Creating new Trainee ===");
    let trainee = gym.trainees.create(
        "Alex",
        "Brown",
        NaiveDate::from_ymd_opt(1995, 3, 15).unwrap(),
        "456 New St",
    );
    println!("Created Trainee ID: {}", trainee.id);
    println!("Check logs for username and password!");

    println!("\n=== Creating new Trainer ===");
    let trainer = gym.trainers.create("Mike", "Johnson", "Cardio");
    println!("Created Trainer ID: {}", trainer.id);

    println!("\n=== Creating new Training ===");
    let training = gym.trainings.create(
        trainee.id,
        trainer.id,
        "Cardio Session",
        "Cardio",
        45,
        Local::now().date_naive(),
    );
    println!("Created Training ID: {}", training.id);

    println!("\n=== Updating Trainee ===");
    let updated = gym
        .trainees
        .update(trainee.id, trainee.date_of_birth, "789 Updated St")?;
    println!("Updated address: {}", updated.address);

    println!("\n=== Selecting all Trainees ===");
    for t in gym.trainees.find_all() {
        println!("Trainee ID: {}, User ID: {}", t.id, t.user_id);
    }

    println!("\n=== Selecting all Trainers ===");
    for t in gym.trainers.find_all() {
        println!("Trainer ID: {}, Specialization: {}", t.id, t.specialization);
    }

    println!("\n=== Selecting all Trainings ===");
    for t in gym.trainings.find_all() {
        println!("Training ID: {}, Name: {}", t.id, t.name);
    }

    println!("\n=== Deleting Trainee ===");
    gym.trainees.delete(trainee.id);
    println!("Deleted Trainee ID: {}", trainee.id);

    Ok(())
}
