// core/tests/test_dispatch.rs
use workout_core::{read_package, Training, Workout, WorkoutError, WorkoutKind};

#[test]
fn read_package_builds_matching_strategy() {
    let run = read_package("RUN", &[15000.0, 1.0, 75.0]).expect("RUN");
    assert!(matches!(run, Workout::Running(_)));
    assert_eq!(run.kind(), WorkoutKind::Running);

    let wlk = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).expect("WLK");
    match wlk {
        Workout::SportsWalking(w) => assert_eq!(w.height_cm, 180.0),
        other => panic!("expected walking, got {other:?}"),
    }

    let swm = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).expect("SWM");
    match swm {
        Workout::Swimming(s) => {
            assert_eq!(s.length_pool_m, 25.0);
            assert_eq!(s.count_pool, 40);
            assert_eq!(s.base.action, 720);
        }
        other => panic!("expected swimming, got {other:?}"),
    }
}

#[test]
fn workout_enum_delegates_to_strategy() {
    let swm = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    assert!((swm.mean_speed_kmh() - 1.0).abs() < 1e-9);
    assert!((swm.spent_calories() - 336.0).abs() < 1e-9);
    assert_eq!(swm.label(), "Swimming");
}

#[test]
fn unknown_code_names_supported_codes() {
    let err = read_package("BIKE", &[1.0, 1.0, 1.0]).unwrap_err();
    assert!(matches!(err, WorkoutError::UnknownWorkoutType { ref code } if code == "BIKE"));
    assert_eq!(err.supported_codes(), Some(vec!["RUN", "WLK", "SWM"]));

    let msg = err.to_string();
    for code in WorkoutKind::codes() {
        assert!(msg.contains(code), "missing {code} in '{msg}'");
    }
}

#[test]
fn wrong_parameter_count_is_a_construction_error() {
    // Gange uten høyde
    let err = read_package("WLK", &[9000.0, 1.0, 75.0]).unwrap_err();
    match err {
        WorkoutError::ParameterCount { code, expected, got } => {
            assert_eq!(code, "WLK");
            assert_eq!(expected, 4);
            assert_eq!(got, 3);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert!(matches!(
        read_package("SWM", &[720.0, 1.0, 80.0, 25.0]),
        Err(WorkoutError::ParameterCount { expected: 5, got: 4, .. })
    ));
    assert!(matches!(
        read_package("RUN", &[]),
        Err(WorkoutError::ParameterCount { expected: 3, got: 0, .. })
    ));
}

#[test]
fn integer_fields_must_be_whole_and_non_negative() {
    assert!(matches!(
        read_package("RUN", &[-5.0, 1.0, 75.0]),
        Err(WorkoutError::InvalidParameter { name: "action", .. })
    ));
    assert!(matches!(
        read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.5]),
        Err(WorkoutError::InvalidParameter { name: "count_pool", .. })
    ));
}

#[test]
fn duration_is_passed_through_unguarded() {
    let run = read_package("RUN", &[1000.0, 0.0, 75.0]).expect("zero duration is a caller error");
    assert!(run.mean_speed_kmh().is_infinite());
}
