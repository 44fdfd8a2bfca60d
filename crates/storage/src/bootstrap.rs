use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use eyre::{Context as _, Result};
use log::{error, warn};
use model::trainee::Trainee;
use model::trainer::Trainer;
use model::training::Training;
use model::training_type::TrainingType;
use model::user::User;

use crate::Storage;

/// The five seed sources in the order they must be loaded: trainees and
/// trainers reference users, trainings reference both, and references
/// are resolved against what is already in the store.
#[derive(Debug, Clone)]
pub struct SourceFiles {
    pub training_types: PathBuf,
    pub users: PathBuf,
    pub trainees: PathBuf,
    pub trainers: PathBuf,
    pub trainings: PathBuf,
}

impl Storage {
    /// Seed the store from the given sources. An unreadable file aborts
    /// the whole bootstrap; a bad line only skips that line.
    pub fn bootstrap(&self, files: &SourceFiles) -> Result<()> {
        self.load_file(&files.training_types)?;
        self.load_file(&files.users)?;
        self.load_file(&files.trainees)?;
        self.load_file(&files.trainers)?;
        self.load_file(&files.trainings)?;
        Ok(())
    }

    fn load_file(&self, path: &Path) -> Result<()> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open seed file: {}", path.display()))?;
        for line in BufReader::new(file).lines() {
            let line = line
                .with_context(|| format!("Failed to read seed file: {}", path.display()))?;
            self.ingest_line(&line);
        }
        Ok(())
    }

    /// Classify one record line by field count and seed it into the
    /// matching collection. Seeded records keep their embedded id and
    /// bump the kind's allocator past it.
    pub fn ingest_line(&self, line: &str) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < 2 {
            return;
        }

        let seeded = match fields.len() {
            2 => self.seed_training_type(&fields),
            3 => self.seed_trainer(&fields),
            4 => self.seed_trainee(&fields),
            6 => self.seed_user(&fields),
            7 => self.seed_training(&fields),
            _ => {
                warn!("Unknown line format, skipping: {}", line);
                return;
            }
        };

        if let Err(err) = seeded {
            error!("Failed to parse line: {}: {}", line, err);
        }
    }

    fn seed_training_type(&self, fields: &[&str]) -> Result<()> {
        let id: i64 = fields[0].parse()?;
        self.training_types.seed(TrainingType {
            id,
            name: fields[1].to_string(),
        });
        Ok(())
    }

    fn seed_user(&self, fields: &[&str]) -> Result<()> {
        let id: i64 = fields[0].parse()?;
        self.users.seed(User {
            id,
            first_name: fields[1].to_string(),
            last_name: fields[2].to_string(),
            username: fields[3].to_string(),
            password: fields[4].to_string(),
            is_active: parse_bool(fields[5]),
        });
        Ok(())
    }

    fn seed_trainee(&self, fields: &[&str]) -> Result<()> {
        let id: i64 = fields[0].parse()?;
        let date_of_birth: NaiveDate = fields[1].parse()?;
        let user_id: i64 = fields[3].parse()?;
        if !self.users.contains(user_id) {
            error!("User {} not found for Trainee {}, skipping", user_id, id);
            return Ok(());
        }
        self.trainees.seed(Trainee {
            id,
            date_of_birth,
            address: fields[2].to_string(),
            user_id,
        });
        Ok(())
    }

    fn seed_trainer(&self, fields: &[&str]) -> Result<()> {
        let id: i64 = fields[0].parse()?;
        let user_id: i64 = fields[2].parse()?;
        if !self.users.contains(user_id) {
            error!("User {} not found for Trainer {}, skipping", user_id, id);
            return Ok(());
        }
        self.trainers.seed(Trainer {
            id,
            specialization: fields[1].to_string(),
            user_id,
        });
        Ok(())
    }

    fn seed_training(&self, fields: &[&str]) -> Result<()> {
        let id: i64 = fields[0].parse()?;
        let trainee_id: i64 = fields[1].parse()?;
        let trainer_id: i64 = fields[2].parse()?;
        let duration_min: u32 = fields[5].parse()?;
        let date: NaiveDate = fields[6].parse()?;
        if !self.trainees.contains(trainee_id) {
            error!("Trainee {} not found for Training {}, skipping", trainee_id, id);
            return Ok(());
        }
        if !self.trainers.contains(trainer_id) {
            error!("Trainer {} not found for Training {}, skipping", trainer_id, id);
            return Ok(());
        }
        self.trainings.seed(Training {
            id,
            trainee_id,
            trainer_id,
            name: fields[3].to_string(),
            training_type: fields[4].to_string(),
            duration_min,
            date,
        });
        Ok(())
    }
}

// Anything but a case-insensitive "true" reads as false.
fn parse_bool(field: &str) -> bool {
    field.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use chrono::NaiveDate;
    use model::training::Training;
    use model::user::User;

    use crate::{SourceFiles, Storage};

    const SEED_LINES: [&str; 5] = [
        "1,Cardio",
        "1,John,Doe,John.Doe,pass123,true",
        "1,1990-01-01,Test Address,1",
        "1,Fitness,1",
        "1,1,1,Morning Workout,Fitness,60,2024-01-15",
    ];

    fn seeded_storage() -> Storage {
        let storage = Storage::new();
        for line in SEED_LINES {
            storage.ingest_line(line);
        }
        storage
    }

    #[test]
    fn multiplexed_stream_populates_every_kind() {
        let storage = seeded_storage();

        assert_eq!(storage.training_types.count(), 1);
        assert_eq!(storage.users.count(), 1);
        assert_eq!(storage.trainees.count(), 1);
        assert_eq!(storage.trainers.count(), 1);
        assert_eq!(storage.trainings.count(), 1);

        let trainee = storage.trainees.get(1).unwrap();
        assert_eq!(trainee.user_id, 1);
        assert_eq!(trainee.date_of_birth, NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());

        let trainer = storage.trainers.get(1).unwrap();
        assert_eq!(trainer.user_id, 1);
        assert_eq!(trainer.specialization, "Fitness");

        let training = storage.trainings.get(1).unwrap();
        assert_eq!(training.trainee_id, 1);
        assert_eq!(training.trainer_id, 1);
        assert_eq!(training.duration_min, 60);
    }

    #[test]
    fn create_after_seeding_never_reissues_ids() {
        let storage = seeded_storage();

        let training = storage.trainings.create(Training::new(
            1,
            1,
            "Evening Workout",
            "Fitness",
            45,
            NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(),
        ));
        assert_eq!(training.id, 2);

        let user = storage
            .users
            .create(User::new("Jane", "Roe", "Jane.Roe", "pass123", true));
        assert_eq!(user.id, 2);
    }

    #[test]
    fn trainee_with_unknown_user_is_rejected() {
        let storage = Storage::new();
        storage.ingest_line("1,1990-01-01,Test Address,999");
        assert_eq!(storage.trainees.count(), 0);
    }

    #[test]
    fn trainer_with_unknown_user_is_rejected() {
        let storage = Storage::new();
        storage.ingest_line("1,Fitness,999");
        assert_eq!(storage.trainers.count(), 0);
    }

    #[test]
    fn training_with_unknown_trainee_is_rejected() {
        let storage = Storage::new();
        storage.ingest_line("1,999,1,Morning Workout,Fitness,60,2024-01-15");
        assert_eq!(storage.trainings.count(), 0);
    }

    #[test]
    fn training_with_unknown_trainer_is_rejected() {
        let storage = Storage::new();
        storage.ingest_line("1,John,Doe,John.Doe,pass123,true");
        storage.ingest_line("1,1990-01-01,Test Address,1");
        storage.ingest_line("1,1,999,Morning Workout,Fitness,60,2024-01-15");
        assert_eq!(storage.trainees.count(), 1);
        assert_eq!(storage.trainings.count(), 0);
    }

    #[test]
    fn blank_and_comment_lines_are_ignored() {
        let storage = Storage::new();
        storage.ingest_line("");
        storage.ingest_line("   ");
        storage.ingest_line("# 1,Cardio");
        storage.ingest_line("single-field");
        assert_eq!(storage.training_types.count(), 0);
        assert_eq!(storage.users.count(), 0);
    }

    #[test]
    fn malformed_id_is_rejected() {
        let storage = Storage::new();
        storage.ingest_line("notANumber,Cardio");
        assert_eq!(storage.training_types.count(), 0);
    }

    #[test]
    fn malformed_date_is_rejected() {
        let storage = Storage::new();
        storage.ingest_line("1,John,Doe,John.Doe,pass123,true");
        storage.ingest_line("1,not-a-date,Test Address,1");
        assert_eq!(storage.trainees.count(), 0);
    }

    #[test]
    fn unknown_field_count_is_ignored() {
        let storage = Storage::new();
        storage.ingest_line("1,a,b,c,d");
        assert_eq!(storage.users.count(), 0);
        assert_eq!(storage.trainees.count(), 0);
    }

    #[test]
    fn boolean_is_case_insensitive_and_lenient() {
        let storage = Storage::new();
        storage.ingest_line("1,John,Doe,John.Doe,pass123,TRUE");
        storage.ingest_line("2,Jane,Roe,Jane.Roe,pass123,yes");
        assert!(storage.users.get(1).unwrap().is_active);
        assert!(!storage.users.get(2).unwrap().is_active);
    }

    #[test]
    fn bootstrap_loads_files_in_reference_order() {
        let dir = tempfile::tempdir().unwrap();
        let write = |name: &str, content: &str| {
            let path = dir.path().join(name);
            let mut file = std::fs::File::create(&path).unwrap();
            file.write_all(content.as_bytes()).unwrap();
            path
        };

        let files = SourceFiles {
            training_types: write("types.txt", "# seed types\n1,Cardio\n2,Strength\n"),
            users: write(
                "users.txt",
                "1,John,Doe,John.Doe,pass123,true\n2,Jane,Roe,Jane.Roe,pass123,false\n",
            ),
            trainees: write("trainees.txt", "1,1990-01-01,Test Address,1\n"),
            trainers: write("trainers.txt", "1,Fitness,2\n"),
            trainings: write(
                "trainings.txt",
                "1,1,1,Morning Workout,Fitness,60,2024-01-15\n",
            ),
        };

        let storage = Storage::new();
        storage.bootstrap(&files).unwrap();

        assert_eq!(storage.training_types.count(), 2);
        assert_eq!(storage.users.count(), 2);
        assert_eq!(storage.trainees.count(), 1);
        assert_eq!(storage.trainers.count(), 1);
        assert_eq!(storage.trainings.count(), 1);
    }

    #[test]
    fn missing_source_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let files = SourceFiles {
            training_types: missing.clone(),
            users: missing.clone(),
            trainees: missing.clone(),
            trainers: missing.clone(),
            trainings: missing,
        };

        let storage = Storage::new();
        assert!(storage.bootstrap(&files).is_err());
        // the store stays usable after a failed bootstrap
        assert_eq!(storage.users.count(), 0);
    }
}
