use std::fmt;
use std::str::FromStr;

use crate::error::WorkoutError;
use crate::models::{Running, SportsWalking, Swimming, WorkoutBase};
use crate::training::Training;
use crate::types::InfoMessage;

/// Treningstype identifisert av sensorkoden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
        WorkoutKind::Swimming,
    ];

    pub fn code(self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Antall verdier i datalisten for denne typen.
    pub fn param_count(self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }

    pub fn codes() -> Vec<&'static str> {
        Self::ALL.iter().map(|k| k.code()).collect()
    }

    /// "RUN (Running), WLK (SportsWalking), SWM (Swimming)"
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(|k| format!("{} ({})", k.code(), k.label()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.code() == s)
            .ok_or_else(|| WorkoutError::UnknownWorkoutType { code: s.to_string() })
    }
}

/// Én økt, bygget av `read_package`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Running(_) => WorkoutKind::Running,
            Workout::SportsWalking(_) => WorkoutKind::SportsWalking,
            Workout::Swimming(_) => WorkoutKind::Swimming,
        }
    }

    fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(w) => w,
            Workout::SportsWalking(w) => w,
            Workout::Swimming(w) => w,
        }
    }
}

impl Training for Workout {
    fn base(&self) -> &WorkoutBase {
        self.as_training().base()
    }

    fn label(&self) -> &'static str {
        self.as_training().label()
    }

    fn len_step(&self) -> f64 {
        self.as_training().len_step()
    }

    fn distance_km(&self) -> f64 {
        self.as_training().distance_km()
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.as_training().mean_speed_kmh()
    }

    fn spent_calories(&self) -> f64 {
        self.as_training().spent_calories()
    }

    fn show_training_info(&self) -> InfoMessage {
        self.as_training().show_training_info()
    }
}

// Heltallsfelt kommer inn som f64 fra sensoren
fn whole_number(kind: WorkoutKind, name: &'static str, value: f64) -> Result<u32, WorkoutError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidParameter { code: kind.code(), name, value })
    }
}

/// Les én sensorpakke og bygg riktig treningstype.
///
/// Rekkefølge i `data`: action, duration_h, weight_kg, og deretter
/// height_cm (WLK) eller length_pool_m, count_pool (SWM).
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    let kind: WorkoutKind = workout_type.parse()?;

    if data.len() != kind.param_count() {
        return Err(WorkoutError::ParameterCount {
            code: kind.code(),
            expected: kind.param_count(),
            got: data.len(),
        });
    }

    let action = whole_number(kind, "action", data[0])?;
    let (duration_h, weight_kg) = (data[1], data[2]);

    let workout = match kind {
        WorkoutKind::Running => Workout::Running(Running::new(action, duration_h, weight_kg)),
        WorkoutKind::SportsWalking => Workout::SportsWalking(SportsWalking::new(
            action, duration_h, weight_kg, data[3],
        )),
        WorkoutKind::Swimming => {
            let count_pool = whole_number(kind, "count_pool", data[4])?;
            Workout::Swimming(Swimming::new(action, duration_h, weight_kg, data[3], count_pool))
        }
    };

    log::debug!("read_package: {} -> {:?}", kind.code(), workout);
    Ok(workout)
}
