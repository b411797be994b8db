use thiserror::Error;

use crate::dispatch::WorkoutKind;

/// Feil fra workout_core. Alle offentlige funksjoner returnerer `Result<T, WorkoutError>`.
#[derive(Debug, Error)]
pub enum WorkoutError {
    #[error("unknown workout type '{code}', expected one of: {}", WorkoutKind::supported_list())]
    UnknownWorkoutType { code: String },

    #[error("{code}: expected {expected} parameters, got {got}")]
    ParameterCount {
        code: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("{code}: parameter '{name}' must be a non-negative whole number, got {value}")]
    InvalidParameter {
        code: &'static str,
        name: &'static str,
        value: f64,
    },

    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize summaries: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("parse error at {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl WorkoutError {
    /// Kodene feilen henviser til, for kall som vil liste dem selv.
    pub fn supported_codes(&self) -> Option<Vec<&'static str>> {
        match self {
            WorkoutError::UnknownWorkoutType { .. } => Some(WorkoutKind::codes()),
            _ => None,
        }
    }
}
