use pasture_lib::app::App;
use pasture_lib::model::config::AppConfig;
use pasture_lib::model::history::{HistoryLogger, PopulationHistory, CSV_HEADER};
use std::path::PathBuf;

fn scratch_dir(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pasture_{tag}_{}", uuid::Uuid::new_v4()))
}

fn app(seed: u64) -> App {
    let mut config = AppConfig::default();
    config.world.seed = Some(seed);
    App::new(config).expect("Failed to create app")
}

#[test]
fn test_logger_writes_one_line_per_tick() {
    let dir = scratch_dir("jsonl");
    let mut app = app(11).with_logger(HistoryLogger::new_at(&dir).unwrap());
    app.run_for(25).unwrap();

    let text = std::fs::read_to_string(dir.join("population.jsonl")).unwrap();
    assert_eq!(text.lines().count(), 25);
    let logger = HistoryLogger::new_at(&dir).unwrap();
    assert_eq!(logger.read_snapshots().unwrap(), app.history.samples());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_reset_is_logged_as_event() {
    let dir = scratch_dir("events");
    let mut app = app(12).with_logger(HistoryLogger::new_at(&dir).unwrap());
    app.run_for(5).unwrap();
    app.reset().unwrap();

    let events = std::fs::read_to_string(dir.join("events.jsonl")).unwrap();
    assert!(events.lines().any(|l| l.contains("\"event\":\"Reset\"")));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_csv_export_matches_history() {
    let dir = scratch_dir("csv");
    std::fs::create_dir_all(&dir).unwrap();
    let mut app = app(13);
    app.run_for(10).unwrap();
    let path = dir.join("run.csv");
    app.history.export_csv(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(CSV_HEADER));
    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[9], app.history.latest().unwrap().to_csv_row());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_archive_saved_on_cleanup() {
    let dir = scratch_dir("archive");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("history.json.gz");
    let mut app = app(14).with_archive(&path);
    app.run_for(15).unwrap();
    app.shutdown.cleanup(&app).unwrap();

    let archive = PopulationHistory::load_archive(&path).unwrap();
    assert_eq!(archive.history, app.history);
    assert_eq!(archive.config_fingerprint, app.world.config.fingerprint());
    let _ = std::fs::remove_dir_all(&dir);
}
