use serde::{Deserialize, Serialize};

/// Felles rådata for én økt (fra sensor).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutBase {
    pub action: u32,      // antall steg / tak
    pub duration_h: f64,  // timer
    pub weight_kg: f64,   // kg
}

impl WorkoutBase {
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Self {
        Self { action, duration_h, weight_kg }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub base: WorkoutBase,
}

impl Running {
    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Self {
        Self { base: WorkoutBase::new(action, duration_h, weight_kg) }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub base: WorkoutBase,
    pub height_cm: f64,
}

impl SportsWalking {
    pub fn new(action: u32, duration_h: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            base: WorkoutBase::new(action, duration_h, weight_kg),
            height_cm,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub base: WorkoutBase,
    pub length_pool_m: f64,
    pub count_pool: u32,
}

impl Swimming {
    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        length_pool_m: f64,
        count_pool: u32,
    ) -> Self {
        Self {
            base: WorkoutBase::new(action, duration_h, weight_kg),
            length_pool_m,
            count_pool,
        }
    }
}

/// Én rå pakke fra sensoren: treningskode + flat parameterliste.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    #[serde(alias = "code")]
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self { workout_type: workout_type.into(), data }
    }
}
