use std::io::{self, Write};

use crate::dispatch::read_package;
use crate::error::WorkoutError;
use crate::models::Package;
use crate::training::Training;
use crate::types::InfoMessage;

/// En pakke som ikke kunne behandles, med posisjon i input.
#[derive(Debug)]
pub struct Rejected {
    pub index: usize,
    pub workout_type: String,
    pub error: WorkoutError,
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub summaries: Vec<InfoMessage>,
    pub rejected: Vec<Rejected>,
}

impl BatchOutcome {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    JsonLines,
}

/// Behandler alle pakker i rekkefølge. Feil stopper ikke resten.
pub fn process_packages(packages: &[Package]) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for (index, p) in packages.iter().enumerate() {
        match read_package(&p.workout_type, &p.data) {
            Ok(workout) => outcome.summaries.push(workout.show_training_info()),
            Err(error) => {
                log::warn!("package #{index} ({}) rejected: {error}", p.workout_type);
                outcome.rejected.push(Rejected {
                    index,
                    workout_type: p.workout_type.clone(),
                    error,
                });
            }
        }
    }

    log::debug!(
        "processed {} packages: {} ok, {} rejected",
        packages.len(),
        outcome.summaries.len(),
        outcome.rejected.len()
    );
    outcome
}

/// Skriver én linje per vellykket økt.
pub fn write_report<W: Write>(
    out: &mut W,
    outcome: &BatchOutcome,
    format: ReportFormat,
) -> io::Result<()> {
    for m in &outcome.summaries {
        match format {
            ReportFormat::Text => writeln!(out, "{}", m.message())?,
            ReportFormat::JsonLines => {
                let line = serde_json::to_string(&m.rounded()).map_err(io::Error::from)?;
                writeln!(out, "{line}")?;
            }
        }
    }
    Ok(())
}
