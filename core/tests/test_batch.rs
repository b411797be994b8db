// core/tests/test_batch.rs
use workout_core::{
    default_packages, process_packages, write_report, Package, ReportFormat, WorkoutError,
};

#[test]
fn demo_packages_produce_three_reports() {
    let outcome = process_packages(&default_packages());
    assert!(outcome.is_clean());

    let labels: Vec<&str> = outcome.summaries.iter().map(|m| m.training_type.as_str()).collect();
    assert_eq!(labels, vec!["Swimming", "Running", "SportsWalking"]);
}

#[test]
fn unknown_code_does_not_stop_the_batch() {
    let packages = vec![
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("YOGA", vec![1.0, 1.0, 1.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0]),
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
    ];

    let outcome = process_packages(&packages);
    assert_eq!(outcome.summaries.len(), 2);
    assert_eq!(outcome.rejected.len(), 2);

    assert_eq!(outcome.rejected[0].index, 1);
    assert_eq!(outcome.rejected[0].workout_type, "YOGA");
    assert!(matches!(outcome.rejected[0].error, WorkoutError::UnknownWorkoutType { .. }));

    assert_eq!(outcome.rejected[1].index, 2);
    assert!(matches!(outcome.rejected[1].error, WorkoutError::ParameterCount { .. }));
}

#[test]
fn text_report_is_one_line_per_workout() {
    let outcome = process_packages(&[Package::new("RUN", vec![15000.0, 1.0, 75.0])]);

    let mut buf = Vec::new();
    write_report(&mut buf, &outcome, ReportFormat::Text).expect("write");
    let text = String::from_utf8(buf).expect("utf8");

    assert_eq!(
        text,
        "Training type: Running; Duration: 1.000 h; Distance: 9.750 km; Mean speed: 9.750 km/h; Calories burned: 699.750.\n"
    );
}

#[test]
fn json_report_is_rounded() {
    let outcome = process_packages(&[Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0])]);

    let mut buf = Vec::new();
    write_report(&mut buf, &outcome, ReportFormat::JsonLines).expect("write");
    let text = String::from_utf8(buf).expect("utf8");

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 1);
    let v: serde_json::Value = serde_json::from_str(lines[0]).expect("valid JSON");
    assert_eq!(v["training_type"], "Swimming");
    assert_eq!(v["distance"].as_f64(), Some(0.994));
    assert_eq!(v["calories"].as_f64(), Some(336.0));
}
