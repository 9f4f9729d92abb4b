//! Integration tests for configuration management

use gpa_policy::config::{Config, ConfigOverrides};
use gpa_policy::core::models::CourseCategory;
use gpa_policy::core::profile::ProfileRegistry;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("nested").join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert_eq!(config.calculation.system, "generic");
    assert!(config.calculation.profiles.is_empty());
    assert!(!config.calculation.skip_eligibility_filter);
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
reports_dir = "./reports"

[calculation]
system = "uc"
profiles = ["uc-capped", "standard-unweighted"]
skip_eligibility_filter = true

[calculation.boosts]
honors = 1.0
ap = 1.5
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.reports_dir, "./reports");
    assert_eq!(config.calculation.system, "uc");
    assert_eq!(
        config.calculation.profiles,
        vec!["uc-capped".to_string(), "standard-unweighted".to_string()]
    );
    assert!(config.calculation.skip_eligibility_filter);
    assert_eq!(config.calculation.boosts.get(CourseCategory::Honors), Some(1.0));
    assert_eq!(
        config.calculation.boosts.get(CourseCategory::AdvancedPlacement),
        Some(1.5)
    );
}

#[test]
fn test_config_from_toml_partial() {
    // Missing sections and fields fall back to serde defaults
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.calculation.system, "");
    assert!(config.calculation.boosts.is_empty());
}

#[test]
fn test_config_rejects_bad_boosts() {
    let unknown = "[logging]\n[calculation.boosts]\ngifted = 1.0\n";
    assert!(Config::from_toml(unknown).is_err());

    let negative = "[logging]\n[calculation.boosts]\nhonors = -0.5\n";
    assert!(Config::from_toml(negative).is_err());
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$GPA_POLICY/test.log"

[paths]
reports_dir = "$GPA_POLICY/reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("gpapolicy"));
    assert!(!config.logging.file.contains("$GPA_POLICY"));
    assert!(config.paths.reports_dir.ends_with("reports"));
    assert!(!config.paths.reports_dir.contains("$GPA_POLICY"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config.set("verbose", "true").expect("Failed to set verbose");
    assert_eq!(config.get("verbose").unwrap(), "true");
    assert!(config.logging.verbose);

    config.set("system", "UC").expect("Failed to set system");
    assert_eq!(config.get("system").unwrap(), "uc");

    config
        .set("profiles", "uc-capped, standard-weighted")
        .expect("Failed to set profiles");
    assert_eq!(config.get("profiles").unwrap(), "uc-capped,standard-weighted");

    config.set("boost.honors", "0.75").expect("Failed to set boost");
    assert_eq!(config.get("boost.honors").unwrap(), "0.75");
    assert_eq!(config.get("boost.ap").unwrap(), "");

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_set_validates_values() {
    let mut config = Config::from_defaults();

    assert!(config.set("verbose", "sometimes").is_err());
    assert!(config.set("system", "mars").is_err());
    assert!(config.set("profiles", "uc-capped,bogus").is_err());
    assert!(config.set("boost.honors", "-1").is_err());
    assert!(config.set("boost.gifted", "1").is_err());
    assert!(config.set("boosts", "honors").is_err());

    // Failed sets leave the config untouched
    assert_eq!(config.calculation.system, "generic");
    assert!(config.calculation.profiles.is_empty());
    assert!(config.calculation.boosts.is_empty());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "error").expect("Failed to set level");
    config.set("boost.ap", "2").expect("Failed to set boost");
    config.set("system", "csu").expect("Failed to set system");

    config.unset("level", &defaults).expect("Failed to unset level");
    config.unset("boost.ap", &defaults).expect("Failed to unset boost");
    config.unset("system", &defaults).expect("Failed to unset system");

    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.calculation.boosts.get(CourseCategory::AdvancedPlacement), None);
    assert_eq!(config.calculation.system, defaults.calculation.system);
    assert!(config.unset("unknown_key", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("system", "uc").expect("Failed to set system");
    config.set("boost.ib-hl", "1.25").expect("Failed to set boost");

    config.save_to(&config_file).expect("Failed to save config");
    assert!(config_file.exists());

    let loaded = Config::load_from(&config_file).expect("Failed to load config");
    assert_eq!(loaded.logging.level, "info");
    assert_eq!(loaded.calculation.system, "uc");
    assert_eq!(
        loaded.calculation.boosts.get(CourseCategory::IbHigher),
        Some(1.25)
    );
}

#[test]
fn test_load_from_missing_file_fails() {
    let (temp_dir, _) = setup_temp_config();
    assert!(Config::load_from(&temp_dir.path().join("absent.toml")).is_err());
}

#[test]
fn test_load_from_merges_defaults() {
    let (_temp_dir, config_file) = setup_temp_config();
    fs::create_dir_all(config_file.parent().unwrap()).unwrap();
    fs::write(&config_file, "[logging]\nlevel = \"error\"\n").unwrap();

    let loaded = Config::load_from(&config_file).expect("Failed to load config");
    let defaults = Config::from_defaults();
    assert_eq!(loaded.logging.level, "error");
    assert_eq!(loaded.paths.reports_dir, defaults.paths.reports_dir);
    assert_eq!(loaded.calculation.system, defaults.calculation.system);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();
    config.set("boost.honors", "0.25").unwrap();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        reports_dir: Some("./custom_reports".to_string()),
        system: Some("uc".to_string()),
        profiles: Some(vec!["uc-uncapped".to_string()]),
        skip_eligibility_filter: Some(true),
        boosts: Some("ap=2".parse().unwrap()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.reports_dir, "./custom_reports");
    assert_eq!(config.calculation.system, "uc");
    assert_eq!(config.calculation.profiles, vec!["uc-uncapped".to_string()]);
    assert!(config.calculation.skip_eligibility_filter);
    // CLI boosts layer over configured ones
    assert_eq!(config.calculation.boosts.get(CourseCategory::Honors), Some(0.25));
    assert_eq!(
        config.calculation.boosts.get(CourseCategory::AdvancedPlacement),
        Some(2.0)
    );
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let before = config.clone();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..ConfigOverrides::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.calculation.system, before.calculation.system);
    assert_eq!(config.paths.reports_dir, before.paths.reports_dir);
}

#[test]
fn test_select_profiles_precedence() {
    let registry = ProfileRegistry::canonical();
    let mut config = Config::from_defaults();
    config.set("system", "uc").unwrap();

    let system = config.calculation.select_profiles(&registry, None).unwrap();
    assert_eq!(system.len(), 4);
    assert_eq!(system[0].id, "uc-capped");

    let college = config
        .calculation
        .select_profiles(&registry, Some("UC Irvine"))
        .unwrap();
    assert_eq!(college[0].id, "college-uc-capped");
    assert_eq!(college.last().unwrap().id, "standard-weighted");

    config.set("profiles", "standard-weighted").unwrap();
    let explicit = config
        .calculation
        .select_profiles(&registry, Some("UC Irvine"))
        .unwrap();
    assert_eq!(explicit.len(), 1);
    assert_eq!(explicit[0].id, "standard-weighted");
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("[calculation]"));

    assert!(display_str.contains("level"));
    assert!(display_str.contains("reports_dir"));
    assert!(display_str.contains("skip_eligibility_filter"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"
file = ""
verbose = false

[paths]
reports_dir = ""

[calculation]
system = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    let changed = config.merge_defaults(&defaults);

    assert!(
        changed,
        "merge_defaults should return true when fields are added"
    );
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);
    assert_eq!(config.calculation.system, defaults.calculation.system);
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"
verbose = false

[paths]
reports_dir = "/my/reports"

[calculation]
system = "csu"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    assert!(!config.merge_defaults(&defaults));

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.paths.reports_dir, "/my/reports");
    assert_eq!(config.calculation.system, "csu");
}

#[test]
fn test_get_gpapolicy_dir() {
    let dir = Config::get_gpapolicy_dir();

    assert!(dir.to_string_lossy().contains("gpapolicy"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
