use acft_calc::config::LoaderConfig;
use acft_calc::scoring::COLUMN_LEN;
use acft_calc::standards::{embedded_reader, RawColumns, StandardsReader};
use acft_calc::{EventKind, RecordedTime, ScoreEvent, ScoringEngine, ScoringError};
use proptest::prelude::*;
use std::sync::OnceLock;

fn engine() -> &'static ScoringEngine {
    static ENGINE: OnceLock<ScoringEngine> = OnceLock::new();
    ENGINE.get_or_init(|| ScoringEngine::from_embedded().unwrap())
}

fn time(minutes: u32, seconds: u32) -> RecordedTime {
    RecordedTime::new(minutes, seconds).unwrap()
}

#[test]
fn test_embedded_engine_builds() {
    assert!(ScoringEngine::from_embedded().is_ok());
    for kind in EventKind::ALL {
        let count = engine().entry_count(kind);
        assert!((1..=COLUMN_LEN).contains(&count), "{}: {}", kind, count);
        assert_eq!(engine().max_points(kind), 100, "{}", kind);
        assert_eq!(engine().min_listed_points(kind), 0, "{}", kind);
    }
}

#[test]
fn test_deadlift() {
    // 140 lbs is listed at 60 points, 130 at 50, and 80 is the minimum
    assert_eq!(engine().score(&ScoreEvent::Deadlift(140)), 60);
    assert_eq!(engine().score(&ScoreEvent::Deadlift(139)), 50);
    assert_eq!(engine().score(&ScoreEvent::Deadlift(80)), 0);
    assert_eq!(engine().score(&ScoreEvent::Deadlift(0)), 0);
    assert_eq!(engine().score(&ScoreEvent::Deadlift(340)), 100);
}

#[test]
fn test_standing_power_throw() {
    assert_eq!(engine().score(&ScoreEvent::StandingPowerThrow(4.5)), 60);
    assert_eq!(engine().score(&ScoreEvent::StandingPowerThrow(12.6)), 100);
    assert_eq!(engine().score(&ScoreEvent::StandingPowerThrow(3.0)), 0);
    assert_eq!(engine().score(&ScoreEvent::StandingPowerThrow(f64::NAN)), 0);
}

#[test]
fn test_push_up() {
    assert_eq!(engine().score(&ScoreEvent::PushUp(10)), 60);
    assert_eq!(engine().score(&ScoreEvent::PushUp(100)), 100);
    assert_eq!(engine().score(&ScoreEvent::PushUp(-1)), 0);
}

#[test]
fn test_sprint_drag_carry() {
    assert_eq!(engine().score(&ScoreEvent::SprintDragCarry(time(3, 0))), 60);
    assert_eq!(engine().score(&ScoreEvent::SprintDragCarry(time(0, 30))), 100);
    assert_eq!(engine().score(&ScoreEvent::SprintDragCarry(time(10, 0))), 0);
}

#[test]
fn test_leg_tuck() {
    assert_eq!(engine().score(&ScoreEvent::LegTuck(1)), 60);
    assert_eq!(engine().score(&ScoreEvent::LegTuck(30)), 100);
    assert_eq!(engine().score(&ScoreEvent::LegTuck(-1)), 0);
}

#[test]
fn test_plank() {
    assert_eq!(engine().score(&ScoreEvent::Plank(time(2, 9))), 60);
    assert_eq!(engine().score(&ScoreEvent::Plank(time(5, 0))), 100);
    assert_eq!(engine().score(&ScoreEvent::Plank(time(1, 0))), 0);
}

#[test]
fn test_two_mile_run() {
    assert_eq!(engine().score(&ScoreEvent::TwoMileRun(time(21, 0))), 60);
    assert_eq!(engine().score(&ScoreEvent::TwoMileRun(time(12, 30))), 100);
    assert_eq!(engine().score(&ScoreEvent::TwoMileRun(time(23, 0))), 0);
}

#[test]
fn test_concurrent_scoring() {
    let engine = engine();
    std::thread::scope(|scope| {
        for reps in 0..8 {
            scope.spawn(move || {
                let points = engine.score(&ScoreEvent::PushUp(reps));
                assert_eq!(points, engine.score(&ScoreEvent::PushUp(reps)));
            });
        }
    });
}

#[test]
fn test_table_with_100_cells_names_column() {
    let mut columns = RawColumns::read(&embedded_reader()).unwrap();
    columns.column_mut(EventKind::SprintDragCarry).truncate(100);

    let err = ScoringEngine::new(&columns).unwrap_err();
    assert!(matches!(err, ScoringError::TableSize { actual: 100, .. }));
    assert!(err.to_string().contains("sprint-drag-carry"));
}

#[test]
fn test_from_config_reads_file_with_custom_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("standards.csv");
    let contents = acft_calc::standards::EMBEDDED_STANDARDS.replace(',', ";");
    std::fs::write(&path, contents).unwrap();

    let config = LoaderConfig {
        source: Some(path),
        delimiter: Some(';'),
        header: None,
    };
    let engine = ScoringEngine::from_config(&config).unwrap();
    assert_eq!(engine.score(&ScoreEvent::Deadlift(140)), 60);
}

#[test]
fn test_from_config_defaults_to_embedded() {
    let engine = ScoringEngine::from_config(&LoaderConfig::default()).unwrap();
    assert_eq!(engine.score(&ScoreEvent::LegTuck(1)), 60);
}

#[test]
fn test_missing_row_cell_is_out_of_bounds() {
    let mut contents = String::from("Points,MDL,SPT,HRP,SDC,LTK,PLK,2MR\n");
    for points in (0..=100).rev() {
        if points == 50 {
            contents.push_str("50,130\n");
        } else {
            contents.push_str(&format!("{},,,,,,,\n", points));
        }
    }
    let reader = StandardsReader::parse("inline", &contents, ',', true);
    let err = ScoringEngine::from_reader(&reader).unwrap_err();
    assert_eq!(err, ScoringError::ColumnIndexOutOfBounds { index: 2, row: 51 });
}

proptest! {
    #[test]
    fn prop_heavier_deadlift_never_scores_lower(a in -50i64..500, b in -50i64..500) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(engine().score(&ScoreEvent::Deadlift(lo)) <= engine().score(&ScoreEvent::Deadlift(hi)));
    }

    #[test]
    fn prop_longer_plank_never_scores_lower(a in 0u32..600, b in 0u32..600) {
        let (short, long) = if a <= b { (a, b) } else { (b, a) };
        let short = ScoreEvent::Plank(RecordedTime::from_total_seconds(short));
        let long = ScoreEvent::Plank(RecordedTime::from_total_seconds(long));
        prop_assert!(engine().score(&short) <= engine().score(&long));
    }

    #[test]
    fn prop_faster_sprint_drag_carry_never_scores_lower(a in 0u32..600, b in 0u32..600) {
        let (fast, slow) = if a <= b { (a, b) } else { (b, a) };
        let fast = ScoreEvent::SprintDragCarry(RecordedTime::from_total_seconds(fast));
        let slow = ScoreEvent::SprintDragCarry(RecordedTime::from_total_seconds(slow));
        prop_assert!(engine().score(&fast) >= engine().score(&slow));
    }

    #[test]
    fn prop_scores_bounded(reps in any::<i64>()) {
        prop_assert!(engine().score(&ScoreEvent::PushUp(reps)) <= 100);
        prop_assert!(engine().score(&ScoreEvent::LegTuck(reps)) <= 100);
    }
}
