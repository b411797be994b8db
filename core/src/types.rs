use std::fmt;

use serde::{Deserialize, Serialize};

use crate::training::RoundTo;

/// Antall desimaler i rapporten.
pub const REPORT_DP: u32 = 3;

/// Oppsummering av én økt, i fast rekkefølge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    pub training_type: String,
    pub duration: f64,  // h
    pub distance: f64,  // km
    pub speed: f64,     // km/h
    pub calories: f64,  // kcal
}

impl InfoMessage {
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    /// Kopi med alle tallfelt avrundet til tre desimaler.
    pub fn rounded(&self) -> Self {
        Self {
            training_type: self.training_type.clone(),
            duration: self.duration.round_to(REPORT_DP),
            distance: self.distance.round_to(REPORT_DP),
            speed: self.speed.round_to(REPORT_DP),
            calories: self.calories.round_to(REPORT_DP),
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; Mean speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounded_keeps_three_decimals() {
        let m = InfoMessage::new("Swimming", 1.0, 0.9936, 1.00049, 336.00049).rounded();
        assert_eq!(m.distance, 0.994);
        assert_eq!(m.speed, 1.0);
        assert_eq!(m.calories, 336.0);
    }

    #[test]
    fn message_has_fixed_field_order() {
        let m = InfoMessage::new("Running", 1.0, 9.75, 9.75, 699.75);
        assert_eq!(
            m.message(),
            "Training type: Running; Duration: 1.000 h; Distance: 9.750 km; Mean speed: 9.750 km/h; Calories burned: 699.750."
        );
    }
}
