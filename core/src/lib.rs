//! Distanse, snittfart og kaloriforbruk for løp, gange og svømming.

pub mod cli;
pub mod dispatch;
pub mod error;
pub mod models;
pub mod storage;
pub mod training;
pub mod types;

#[cfg(feature = "python")]
mod py;

pub use cli::{process_packages, write_report, BatchOutcome, Rejected, ReportFormat};
pub use dispatch::{read_package, Workout, WorkoutKind};
pub use error::WorkoutError;
pub use models::{Package, Running, SportsWalking, Swimming, WorkoutBase};
pub use storage::{default_packages, load_packages, parse_packages, save_summaries};
pub use training::{distance_km, RoundTo, Training};
pub use types::InfoMessage;
