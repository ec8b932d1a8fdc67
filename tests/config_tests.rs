use serial_test::serial;
use std::env;
use std::path::PathBuf;
use tempfile::tempdir;

use metajournal::config::Config;
use metajournal::errors::AppResult;
use metajournal::journal_core::EntryType;
use metajournal::journal_io::JournalWriter;

const SAVE_PATH_VAR: &str = "METAJOURNAL_SAVE_PATH";

fn restore(original: Option<String>) {
    match original {
        Some(val) => env::set_var(SAVE_PATH_VAR, val),
        None => env::remove_var(SAVE_PATH_VAR),
    }
}

#[test]
#[serial]
fn test_config_load_with_environment_var() {
    let original = env::var(SAVE_PATH_VAR).ok();

    let temp_dir = tempdir().unwrap();
    let dir_path = temp_dir.path().to_string_lossy().to_string();
    env::set_var(SAVE_PATH_VAR, &dir_path);

    let config = Config::load().unwrap();

    assert_eq!(config.save_dir, PathBuf::from(&dir_path));
    assert!(!config.used_default);

    restore(original);
}

#[test]
#[serial]
fn test_config_load_falls_back_when_unset() {
    let original = env::var(SAVE_PATH_VAR).ok();
    env::remove_var(SAVE_PATH_VAR);

    let config = Config::load().unwrap();

    assert_eq!(config.save_dir, PathBuf::from("./data/journal"));
    assert!(config.used_default);

    restore(original);
}

#[test]
#[serial]
fn test_config_load_treats_empty_as_unset() {
    let original = env::var(SAVE_PATH_VAR).ok();
    env::set_var(SAVE_PATH_VAR, "");

    let config = Config::load().unwrap();

    assert!(config.used_default);

    restore(original);
}

#[test]
#[serial]
fn test_writer_uses_configured_directory() -> AppResult<()> {
    let original = env::var(SAVE_PATH_VAR).ok();

    let temp_dir = tempdir()?;
    env::set_var(SAVE_PATH_VAR, temp_dir.path());
    let config = Config::load()?;
    restore(original);

    // Changing the environment after loading has no effect on the writer
    env::set_var(SAVE_PATH_VAR, "/somewhere/else");
    let writer = JournalWriter::from_config(&config);
    let date = chrono::NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let path = writer.write_entry(date, EntryType::Daily, "content")?;
    env::remove_var(SAVE_PATH_VAR);

    assert!(path.starts_with(temp_dir.path()));
    assert!(path.exists());
    Ok(())
}
