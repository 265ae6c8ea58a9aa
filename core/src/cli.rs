use crate::package::read_package;
use crate::types::Package;

/// Kjører gjennom en liste sensorpakker og skriver én rapportlinje per
/// pakke. Avviste pakker logges og får feilmeldingen sin på linjen i
/// stedet; resten av listen behandles videre.
pub fn print_training_report(packages: &[Package]) {
    for package in packages {
        match read_package(&package.workout_type, &package.data) {
            Ok(workout) => println!("{}", workout.info().message()),
            Err(err) => {
                log::warn!("pakke avvist ({}): {err:?}", package.workout_type);
                println!("{err}");
            }
        }
    }
}
