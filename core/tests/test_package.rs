// core/tests/test_package.rs

use fitgraph_core::errors::PackageError;
use fitgraph_core::models::Workout;
use fitgraph_core::package::{read_package, WorkoutCode};

fn vals(xs: &[f64]) -> Vec<Option<f64>> {
    xs.iter().copied().map(Some).collect()
}

#[test]
fn unknown_code_is_rejected() {
    let err = read_package("XYZ", &vals(&[1.0, 2.0, 3.0])).unwrap_err();
    assert!(matches!(err, PackageError::UnknownWorkout(_)));
    assert_eq!(err.to_string(), "Неизвестная тренировка.");
}

#[test]
fn missing_value_is_rejected() {
    // None midt i listen
    let data = vec![Some(15000.0), None, Some(75.0)];
    let err = read_package("RUN", &data).unwrap_err();
    assert!(matches!(err, PackageError::InvalidPackage(_)));
    assert_eq!(err.to_string(), "Некорректный пакет данных.");
}

#[test]
fn wrong_arity_is_rejected_per_variant() {
    // For kort for hver variant
    assert!(matches!(
        read_package("RUN", &vals(&[15000.0, 1.0])),
        Err(PackageError::InvalidPackage(_))
    ));
    assert!(matches!(
        read_package("WLK", &vals(&[9000.0, 1.0, 75.0])),
        Err(PackageError::InvalidPackage(_))
    ));
    assert!(matches!(
        read_package("SWM", &vals(&[720.0, 1.0, 80.0, 25.0])),
        Err(PackageError::InvalidPackage(_))
    ));

    // For langt
    assert!(matches!(
        read_package("RUN", &vals(&[15000.0, 1.0, 75.0, 5.0])),
        Err(PackageError::InvalidPackage(_))
    ));
}

#[test]
fn expected_len_per_code() {
    assert_eq!(WorkoutCode::parse("SWM").unwrap().expected_len(), 5);
    assert_eq!(WorkoutCode::parse("RUN").unwrap().expected_len(), 3);
    assert_eq!(WorkoutCode::parse("WLK").unwrap().expected_len(), 4);
    assert!(WorkoutCode::parse("run").is_none(), "kodene er case-sensitive");
}

#[test]
fn walking_height_is_converted_to_meters() {
    let workout = read_package("WLK", &vals(&[9000.0, 1.0, 75.0, 180.0])).unwrap();
    match workout {
        Workout::SportsWalking(w) => {
            assert!((w.height_m - 1.8).abs() < 1e-12, "height_m: {}", w.height_m);
        }
        other => panic!("feil variant: {other:?}"),
    }
}

#[test]
fn swimming_fields_assigned_positionally() {
    let workout = read_package("SWM", &vals(&[720.0, 1.0, 80.0, 25.0, 40.0])).unwrap();
    match workout {
        Workout::Swimming(s) => {
            assert_eq!(s.action, 720);
            assert!((s.duration_h - 1.0).abs() < 1e-12);
            assert!((s.weight_kg - 80.0).abs() < 1e-12);
            assert!((s.length_pool_m - 25.0).abs() < 1e-12);
            assert_eq!(s.count_pool, 40);
        }
        other => panic!("feil variant: {other:?}"),
    }
}

#[test]
fn nonpositive_duration_is_rejected() {
    for duration in [0.0, -1.0] {
        let err = read_package("RUN", &vals(&[15000.0, duration, 75.0])).unwrap_err();
        assert!(
            matches!(err, PackageError::InvalidPackage(_)),
            "duration {duration} skulle avvises"
        );
    }
}

#[test]
fn nonfinite_and_fractional_garbage_is_rejected() {
    // NaN i datalisten
    let err = read_package("RUN", &vals(&[15000.0, f64::NAN, 75.0])).unwrap_err();
    assert!(matches!(err, PackageError::InvalidPackage(_)));

    // Halve steg finnes ikke
    let err = read_package("RUN", &vals(&[150.5, 1.0, 75.0])).unwrap_err();
    assert!(matches!(err, PackageError::InvalidPackage(_)));
}
