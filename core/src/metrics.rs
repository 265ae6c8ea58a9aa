use crate::models::{Running, SportsWalking, Swimming, Workout};
use crate::types::TrainingInfo;

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;
pub const LEN_STEP_M: f64 = 0.65;   // meter per steg (løping/gange)
pub const LEN_STROKE_M: f64 = 1.38; // meter per svømmetak

// Kaloriformel: løping
const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 1.79;

// Kaloriformel: sportsgange
const WLK_WEIGHT_FACTOR: f64 = 0.035;
const WLK_SPEED_HEIGHT_FACTOR: f64 = 0.029;
const KMH_TO_MS: f64 = 0.278;

// Kaloriformel: svømming
const SWM_SPEED_SHIFT: f64 = 1.1;
const SWM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Felles metrikk-kontrakt for en treningsøkt.
///
/// Variantene overstyrer kun det som faktisk avviker: svømming bytter
/// taklengde og fartsgrunnlag, og hver variant har egen kaloriformel.
/// Alle metoder er rene funksjoner av recorden; ingenting caches.
pub trait Training {
    /// Variantnavnet slik det står i rapportlinjen.
    fn name(&self) -> &'static str;

    fn action(&self) -> u32;
    fn duration_h(&self) -> f64;
    fn weight_kg(&self) -> f64;

    /// Meter tilbakelagt per steg/tak.
    fn len_step_m(&self) -> f64 {
        LEN_STEP_M
    }

    /// Distanse i km.
    fn distance_km(&self) -> f64 {
        f64::from(self.action()) * self.len_step_m() / M_IN_KM
    }

    /// Snittfart i km/t.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_h()
    }

    /// Kalorier forbrent i løpet av økten.
    fn spent_calories_kcal(&self) -> f64;

    /// Sammendraget som vises til brukeren.
    fn info(&self) -> TrainingInfo {
        TrainingInfo {
            training_type: self.name().to_string(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.spent_calories_kcal(),
        }
    }
}

impl Training for Running {
    fn name(&self) -> &'static str {
        "Running"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn spent_calories_kcal(&self) -> f64 {
        (RUN_SPEED_MULTIPLIER * self.mean_speed_kmh() + RUN_SPEED_SHIFT) * self.weight_kg
            / M_IN_KM
            * (self.duration_h * MIN_IN_H)
    }
}

impl Training for SportsWalking {
    fn name(&self) -> &'static str {
        "SportsWalking"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn spent_calories_kcal(&self) -> f64 {
        // Fartsleddet regnes i m/s, høyden er allerede i meter.
        let speed_ms = self.mean_speed_kmh() * KMH_TO_MS;
        (WLK_WEIGHT_FACTOR * self.weight_kg
            + speed_ms.powi(2) / self.height_m * WLK_SPEED_HEIGHT_FACTOR * self.weight_kg)
            * self.duration_h
            * MIN_IN_H
    }
}

impl Training for Swimming {
    fn name(&self) -> &'static str {
        "Swimming"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn len_step_m(&self) -> f64 {
        LEN_STROKE_M
    }

    /// Farten regnes fra bassenglengde og antall lengder, ikke fra takene.
    fn mean_speed_kmh(&self) -> f64 {
        self.length_pool_m * f64::from(self.count_pool) / M_IN_KM / self.duration_h
    }

    fn spent_calories_kcal(&self) -> f64 {
        (self.mean_speed_kmh() + SWM_SPEED_SHIFT)
            * SWM_WEIGHT_MULTIPLIER
            * self.weight_kg
            * self.duration_h
    }
}

impl Workout {
    /// Metrikk-grensesnittet for varianten pakken ble tolket som.
    pub fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(r) => r,
            Workout::SportsWalking(w) => w,
            Workout::Swimming(s) => s,
        }
    }

    /// Sammendrag for visning.
    pub fn info(&self) -> TrainingInfo {
        self.as_training().info()
    }
}
