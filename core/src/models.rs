use serde::{Deserialize, Serialize};

/// Løpeøkt fra sensoren.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Running {
    pub action: u32,     // steg
    pub duration_h: f64, // timer
    pub weight_kg: f64,  // kg
}

/// Sportsgange: som løping, pluss høyde (inngår i kaloriformelen).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SportsWalking {
    pub action: u32,     // steg
    pub duration_h: f64, // timer
    pub weight_kg: f64,  // kg
    pub height_m: f64,   // meter (pakken leverer cm, konverteres i read_package)
}

/// Svømmeøkt: tak, varighet, vekt og bassengdata.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Swimming {
    pub action: u32,        // svømmetak
    pub duration_h: f64,    // timer
    pub weight_kg: f64,     // kg
    pub length_pool_m: f64, // meter
    pub count_pool: u32,    // antall bassenglengder
}

/// Lukket sett av treningsvarianter. Konstrueres kun via
/// `package::read_package`, som validerer råverdiene først.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}
