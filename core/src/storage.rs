use std::path::Path;

use serde_json as json;
use serde_path_to_error as spte;

use crate::error::WorkoutError;
use crate::models::Package;
use crate::types::InfoMessage;

/// Demo-pakker som brukes når ingen fil er gitt.
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Parser en JSON-liste med pakker.
///
/// Både objekt-form `{"workout_type": "RUN", "data": [..]}` og legacy-form
/// `["RUN", [..]]` godtas (serde-structs leses også fra sekvenser).
pub fn parse_packages(json_in: &str) -> Result<Vec<Package>, WorkoutError> {
    let mut de = json::Deserializer::from_str(json_in);
    spte::deserialize(&mut de).map_err(|e| WorkoutError::Parse {
        path: e.path().to_string(),
        source: e.into_inner(),
    })
}

/// Leser inn pakker fra disk (JSON).
/// Hvis filen ikke finnes, returneres demo-pakkene.
pub fn load_packages(path: &Path) -> Result<Vec<Package>, WorkoutError> {
    if path.exists() {
        let contents = std::fs::read_to_string(path).map_err(|source| WorkoutError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let packages = parse_packages(&contents)?;
        log::info!("loaded {} packages from {}", packages.len(), path.display());
        Ok(packages)
    } else {
        log::warn!(
            "package file {} not found, using built-in demo packages",
            path.display()
        );
        Ok(default_packages())
    }
}

/// Lagrer oppsummeringer til disk som JSON (pretty-print, avrundet).
pub fn save_summaries(summaries: &[InfoMessage], path: &Path) -> Result<(), WorkoutError> {
    let rounded: Vec<InfoMessage> = summaries.iter().map(InfoMessage::rounded).collect();
    let out = json::to_string_pretty(&rounded).map_err(WorkoutError::Serialize)?;
    std::fs::write(path, out).map_err(|source| WorkoutError::Io {
        path: path.display().to_string(),
        source,
    })?;
    log::info!("saved {} summaries to {}", summaries.len(), path.display());
    Ok(())
}
