use serde::{Deserialize, Serialize};

/// Én sensorpakke: treningskode + råverdier i fast, posisjonsbestemt
/// rekkefølge. `None` markerer en verdi sensoren ikke leverte.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<Option<f64>>,
}

/// Informasjonsmelding om en gjennomført treningsøkt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingInfo {
    pub training_type: String,
    pub duration_h: f64,    // timer
    pub distance_km: f64,   // km
    pub speed_kmh: f64,     // km/t
    pub calories_kcal: f64, // kcal
}

impl TrainingInfo {
    /// Rapportlinjen slik appen viser den: russisk tekst, tre desimaler,
    /// komma som tusenskille for distanse/fart/kalorier (ikke varighet).
    pub fn message(&self) -> String {
        format!(
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {} км; Ср. скорость: {} км/ч; Потрачено ккал: {}.",
            self.training_type,
            self.duration_h,
            grouped_3f(self.distance_km),
            grouped_3f(self.speed_kmh),
            grouped_3f(self.calories_kcal),
        )
    }
}

/// Tre desimaler med komma som tusenskille: 13296.75 -> "13,296.750".
fn grouped_3f(value: f64) -> String {
    let fixed = format!("{value:.3}");
    let (sign, rest) = match fixed.strip_prefix('-') {
        Some(stripped) => ("-", stripped),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = rest.split_once('.').unwrap_or((rest, "000"));

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3);
    out.push_str(sign);
    let digits = int_part.as_bytes();
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(char::from(*digit));
    }
    out.push('.');
    out.push_str(frac_part);
    out
}
