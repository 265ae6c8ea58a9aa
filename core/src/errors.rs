use thiserror::Error;

/// Feil fra pakketolkningen.
///
/// `Display`-teksten er meldingen som vises til brukeren; payloaden er
/// intern diagnostikk for loggen.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PackageError {
    /// Treningskoden er ikke en av de kjente.
    #[error("Неизвестная тренировка.")]
    UnknownWorkout(String),

    /// Datalisten har feil lengde, mangler verdier eller bryter invariantene.
    #[error("Некорректный пакет данных.")]
    InvalidPackage(String),
}
