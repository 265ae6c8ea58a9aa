use fitgraph_core::cli::print_training_report;
use fitgraph_core::types::Package;

/// Samme eksempelpakker som sensor-simulatoren sender.
fn sample_packages() -> Vec<Package> {
    vec![
        Package {
            workout_type: "SWM".to_string(),
            data: vec![Some(720.0), Some(1.0), Some(80.0), Some(25.0), Some(40.0)],
        },
        Package {
            workout_type: "RUN".to_string(),
            data: vec![Some(15000.0), Some(1.0), Some(75.0)],
        },
        Package {
            workout_type: "WLK".to_string(),
            data: vec![Some(9000.0), Some(1.0), Some(75.0), Some(180.0)],
        },
    ]
}

fn main() {
    print_training_report(&sample_packages());
}
