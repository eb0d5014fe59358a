use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use wolf_scheduler::{DEFAULT_SCHEDULE_TITLE, PersistenceError, SchedulerConfig};

#[test]
fn missing_keys_fall_back_to_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{ "catalog_path": "catalog.txt" }"#).unwrap();
    file.flush().unwrap();

    let config = SchedulerConfig::load_from_json(file.path()).unwrap();
    assert_eq!(config.catalog_path, Some(PathBuf::from("catalog.txt")));
    assert_eq!(config.schedule_title, DEFAULT_SCHEDULE_TITLE);
    assert_eq!(config.export_path, None);
}

#[test]
fn config_round_trips_through_json() {
    let mut config = SchedulerConfig::with_catalog("courses.txt");
    config.schedule_title = "Spring".into();
    config.export_path = Some(PathBuf::from("out.txt"));

    let file = NamedTempFile::new().unwrap();
    config.save_to_json(file.path()).unwrap();
    let loaded = SchedulerConfig::load_from_json(file.path()).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{ not json").unwrap();
    file.flush().unwrap();

    let err = SchedulerConfig::load_from_json(file.path()).unwrap_err();
    assert!(matches!(err, PersistenceError::Serialization(_)));
}
