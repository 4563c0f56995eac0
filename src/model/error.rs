use rosu_map::section::general::GameMode;

/// All the ways a calculation can be rejected.
///
/// These indicate malformed input rather than difficult charts. Empty
/// charts, zero hits, or missing hit windows never produce an error but
/// degrade to zero values instead.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CalculateError {
    #[error("more than one rate changing mod is active")]
    ConflictingRateMods,
    #[error("clock rate must be finite and positive, got {0}")]
    InvalidClockRate(f64),
    #[error("hit object {idx} has an invalid time of {time}")]
    InvalidTime { idx: usize, time: f64 },
    #[error("hit object {idx} starts before its predecessor")]
    UnsortedObjects { idx: usize },
    #[error("calculation is not available for mode {0:?}")]
    UnsupportedMode(GameMode),
}
