// core/src/package.rs

use crate::errors::PackageError;
use crate::models::{Running, SportsWalking, Swimming, Workout};

/// Treningskodene sensorprotokollen bruker.
pub const SWM: &str = "SWM";
pub const RUN: &str = "RUN";
pub const WLK: &str = "WLK";

// Korrekt lengde på datalisten for hver treningstype.
const LEN_FOR_SWM: usize = 5;
const LEN_FOR_RUN: usize = 3;
const LEN_FOR_WLK: usize = 4;

const CM_IN_M: f64 = 100.0;

/// Lukket sett av kjente treningskoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutCode {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutCode {
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            SWM => Some(WorkoutCode::Swimming),
            RUN => Some(WorkoutCode::Running),
            WLK => Some(WorkoutCode::SportsWalking),
            _ => None,
        }
    }

    /// Forventet antall råverdier i pakken.
    pub const fn expected_len(self) -> usize {
        match self {
            WorkoutCode::Swimming => LEN_FOR_SWM,
            WorkoutCode::Running => LEN_FOR_RUN,
            WorkoutCode::SportsWalking => LEN_FOR_WLK,
        }
    }
}

/// Tolker én sensorpakke og bygger riktig treningsvariant.
///
/// Alt valideres før noe konstrueres: kjent kode, ingen manglende eller
/// ikke-finitte verdier, riktig lengde, positive divisorer. En halvbygd
/// variant skal aldri kunne observeres.
pub fn read_package(workout_type: &str, data: &[Option<f64>]) -> Result<Workout, PackageError> {
    let code = WorkoutCode::parse(workout_type)
        .ok_or_else(|| PackageError::UnknownWorkout(workout_type.to_string()))?;

    let values = checked_values(code, data)?;

    // Posisjonsbestemt tildeling; lengden er allerede verifisert.
    let workout = match code {
        WorkoutCode::Running => Workout::Running(Running {
            action: count(values[0], "action")?,
            duration_h: positive(values[1], "duration")?,
            weight_kg: positive(values[2], "weight")?,
        }),
        WorkoutCode::SportsWalking => Workout::SportsWalking(SportsWalking {
            action: count(values[0], "action")?,
            duration_h: positive(values[1], "duration")?,
            weight_kg: positive(values[2], "weight")?,
            height_m: positive(values[3], "height")? / CM_IN_M, // cm -> m
        }),
        WorkoutCode::Swimming => Workout::Swimming(Swimming {
            action: count(values[0], "action")?,
            duration_h: positive(values[1], "duration")?,
            weight_kg: positive(values[2], "weight")?,
            length_pool_m: positive(values[3], "length_pool")?,
            count_pool: count(values[4], "count_pool")?,
        }),
    };

    Ok(workout)
}

/// Manglende og ikke-finitte verdier avvises før lengdesjekken.
fn checked_values(code: WorkoutCode, data: &[Option<f64>]) -> Result<Vec<f64>, PackageError> {
    let mut values = Vec::with_capacity(data.len());
    for (i, slot) in data.iter().enumerate() {
        match slot {
            Some(v) if v.is_finite() => values.push(*v),
            Some(v) => {
                return Err(PackageError::InvalidPackage(format!(
                    "ikke-finitt verdi {v} på plass {i}"
                )))
            }
            None => {
                return Err(PackageError::InvalidPackage(format!(
                    "manglende verdi på plass {i}"
                )))
            }
        }
    }

    if values.len() != code.expected_len() {
        return Err(PackageError::InvalidPackage(format!(
            "ventet {} verdier for {:?}, fikk {}",
            code.expected_len(),
            code,
            values.len()
        )));
    }

    Ok(values)
}

/// Tellefelt (steg/tak/bassenglengder): ikke-negativt heltall.
fn count(value: f64, field: &str) -> Result<u32, PackageError> {
    if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(PackageError::InvalidPackage(format!(
            "{field} må være et ikke-negativt heltall, fikk {value}"
        )));
    }
    Ok(value as u32)
}

/// Felt som inngår som divisor eller faktor: strengt positivt.
fn positive(value: f64, field: &str) -> Result<f64, PackageError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(PackageError::InvalidPackage(format!(
            "{field} må være > 0, fikk {value}"
        )))
    }
}
