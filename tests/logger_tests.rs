//! Integration tests for logger behavior.

use gpa_policy::logger::{init_file_logging, set_level, set_level_from_str, Level};
use gpa_policy::{debug, error, info, verbose, warn};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("WARN"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration {}", 42);
    verbose!("verbose integration");
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_creates_parent_directories() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("logs").join("gpapolicy.log");

    assert!(init_file_logging(&path));
    error!("written to file");

    let content = std::fs::read_to_string(&path).expect("Failed to read log file");
    assert!(content.contains("[ERROR] written to file"));
}

#[cfg(not(feature = "file-logging"))]
#[test]
fn file_logging_is_disabled_without_feature() {
    assert!(!init_file_logging(std::path::Path::new("unused.log")));
}
