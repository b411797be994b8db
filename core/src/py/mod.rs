use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::dispatch::{read_package, WorkoutKind};
use crate::training::Training;

// ──────────────────────────────────────────────────────────────────────────────
// Python-API: (kode, data) inn, melding/JSON ut
// ──────────────────────────────────────────────────────────────────────────────

#[pyfunction]
fn training_message(workout_type: &str, data: Vec<f64>) -> PyResult<String> {
    let workout = read_package(workout_type, &data).map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(workout.show_training_info().message())
}

#[pyfunction]
fn training_summary_json(workout_type: &str, data: Vec<f64>) -> PyResult<String> {
    let workout = read_package(workout_type, &data).map_err(|e| PyValueError::new_err(e.to_string()))?;
    serde_json::to_string(&workout.show_training_info().rounded())
        .map_err(|e| PyValueError::new_err(format!("failed to serialize summary: {e}")))
}

#[pyfunction]
fn supported_codes() -> Vec<&'static str> {
    WorkoutKind::codes()
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-MODUL
// ──────────────────────────────────────────────────────────────────────────────

#[pymodule]
fn workout_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(training_message, m)?)?;
    m.add_function(wrap_pyfunction!(training_summary_json, m)?)?;
    m.add_function(wrap_pyfunction!(supported_codes, m)?)?;
    Ok(())
}
