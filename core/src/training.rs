// core/src/training.rs
use crate::dispatch::WorkoutKind;
use crate::models::{Running, SportsWalking, Swimming, WorkoutBase};
use crate::types::InfoMessage;

pub const LEN_STEP: f64 = 0.65;      // steglengde (m) løp/gange
pub const LEN_STROKE: f64 = 1.38;    // taklengde (m) svømming
pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;
pub const CM_IN_M: f64 = 100.0;

// Løp
pub const RUN_SPEED_MULTIPLIER: f64 = 18.0;
pub const RUN_SPEED_SHIFT: f64 = 20.0;

// Gange
pub const WLK_WEIGHT_COEFF_1: f64 = 0.035;
pub const WLK_WEIGHT_COEFF_2: f64 = 0.029;

// Svømming
pub const SWM_SPEED_SHIFT: f64 = 1.1;
pub const SWM_WEIGHT_MULTIPLIER: f64 = 2.0;

// --- RoundTo trait (offentlig, brukt av types.rs) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 { return self.round(); }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Distanse (km) fra antall steg/tak og lengde per steg (m).
#[inline]
pub fn distance_km(action: u32, len_step_m: f64) -> f64 {
    action as f64 * len_step_m / M_IN_KM
}

/// Floor-divisjon av operandene, som Python `//` på flyttall.
///
/// Ikke det samme som `(x / y).floor()`: kvotienten avrundes før floor, så
/// 15.209999999999999 / 1.69 blir 9.0 mens riktig svar er 8.0.
pub fn floor_div(x: f64, y: f64) -> f64 {
    let rem = x % y;
    let mut div = (x - rem) / y;
    if rem != 0.0 && (y < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0_f64.copysign(x / y);
    }
    let floored = div.floor();
    if div - floored > 0.5 { floored + 1.0 } else { floored }
}

/// Felles grensesnitt for alle treningstyper.
///
/// Standardmetodene dekker distanse, snittfart og rapport; hver type
/// må selv levere kaloriformelen.
pub trait Training {
    fn base(&self) -> &WorkoutBase;

    /// Navnet som står i rapporten.
    fn label(&self) -> &'static str;

    fn len_step(&self) -> f64 {
        LEN_STEP
    }

    fn distance_km(&self) -> f64 {
        distance_km(self.base().action, self.len_step())
    }

    /// Snittfart (km/h). Varighet 0 gir inf/NaN, ikke panic.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.base().duration_h
    }

    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage::new(
            self.label(),
            self.base().duration_h,
            self.distance_km(),
            self.mean_speed_kmh(),
            self.spent_calories(),
        )
    }
}

impl Training for Running {
    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    fn label(&self) -> &'static str {
        WorkoutKind::Running.label()
    }

    fn spent_calories(&self) -> f64 {
        let b = &self.base;
        (RUN_SPEED_MULTIPLIER * self.mean_speed_kmh() - RUN_SPEED_SHIFT)
            * b.weight_kg / M_IN_KM
            * (b.duration_h * MIN_IN_H)
    }
}

impl SportsWalking {
    #[inline]
    pub fn height_m(&self) -> f64 {
        self.height_cm / CM_IN_M
    }
}

impl Training for SportsWalking {
    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    fn label(&self) -> &'static str {
        WorkoutKind::SportsWalking.label()
    }

    fn spent_calories(&self) -> f64 {
        let b = &self.base;
        // fart² // høyde, beholdes slik formelen er definert
        let speed_term = floor_div(self.mean_speed_kmh().powi(2), self.height_m());
        (WLK_WEIGHT_COEFF_1 * b.weight_kg + speed_term * WLK_WEIGHT_COEFF_2 * b.weight_kg)
            * (b.duration_h * MIN_IN_H)
    }
}

impl Training for Swimming {
    fn base(&self) -> &WorkoutBase {
        &self.base
    }

    fn label(&self) -> &'static str {
        WorkoutKind::Swimming.label()
    }

    fn len_step(&self) -> f64 {
        LEN_STROKE
    }

    /// Fart fra bassenggeometri, ikke fra antall tak.
    fn mean_speed_kmh(&self) -> f64 {
        self.length_pool_m * self.count_pool as f64 / M_IN_KM / self.base.duration_h
    }

    /// Uavhengig av varighet.
    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + SWM_SPEED_SHIFT) * SWM_WEIGHT_MULTIPLIER * self.base.weight_kg
    }
}
