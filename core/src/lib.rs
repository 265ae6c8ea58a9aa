//! Programmodul for treningsrapporter.
//!
//! Tolker råpakker fra treningssensorer (steg/tak, varighet i timer,
//! kroppsvekt og variant-spesifikke ekstrafelt) og regner ut distanse,
//! snittfart og kaloriforbruk for tre treningstyper: løping, sportsgange
//! og svømming. Resultatet formateres som én rapportlinje per pakke.

pub mod cli;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod package;
pub mod types;

pub use errors::PackageError;
pub use metrics::Training;
pub use models::{Running, SportsWalking, Swimming, Workout};
pub use package::{read_package, WorkoutCode};
pub use types::{Package, TrainingInfo};

/// JSON-inngang: tolker datalisten som JSON-array (`null` = manglende
/// verdi) og returnerer ferdig rapportlinje.
///
/// Feil kommer tilbake som tekst: parse-feil med JSON-sti fra
/// `serde_path_to_error`, ellers brukerens melding fra [`PackageError`].
pub fn process_package_json(workout_type: &str, data_json: &str) -> Result<String, String> {
    let mut de = serde_json::Deserializer::from_str(data_json);
    let data: Vec<Option<f64>> = serde_path_to_error::deserialize(&mut de)
        .map_err(|e| format!("ugyldig datapakke-JSON: {e}"))?;

    let workout = read_package(workout_type, &data).map_err(|e| e.to_string())?;
    Ok(workout.info().message())
}
