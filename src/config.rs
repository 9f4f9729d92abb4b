//! Configuration module for `GpaPolicy`

use crate::core::boost::BoostOverrides;
use crate::core::models::CourseCategory;
use crate::core::profile::{Profile, ProfileRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to the configuration directory in path values
pub const DIR_VARIABLE: &str = "$GPA_POLICY";

/// College systems with their own profile selection
pub const KNOWN_SYSTEMS: [&str; 4] = ["uc", "csu", "ivy", "generic"];

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// GPA calculation defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationConfig {
    /// College system used to pick profiles (uc, csu, ivy, generic)
    #[serde(default)]
    pub system: String,
    /// Explicit profile ids; empty means "use the system's profiles"
    #[serde(default)]
    pub profiles: Vec<String>,
    /// Count courses outside 10th/11th grade in UC GPAs (flagged as informational)
    #[serde(default)]
    pub skip_eligibility_filter: bool,
    /// Per-category boost overrides applied to every profile
    #[serde(default)]
    pub boosts: BoostOverrides,
}

impl CalculationConfig {
    /// Choose the profiles to calculate
    ///
    /// Explicit profile ids win; otherwise a college name selects the college's
    /// branded profiles, and without one the system's profile set is used.
    ///
    /// # Errors
    /// Returns an error if an explicit profile id is unknown
    pub fn select_profiles(
        &self,
        registry: &ProfileRegistry,
        college: Option<&str>,
    ) -> Result<Vec<Profile>, String> {
        if !self.profiles.is_empty() {
            return registry.resolve(&self.profiles);
        }
        Ok(match college {
            Some(name) => registry.for_college(name, &self.system),
            None => registry.profiles_for_system(&self.system),
        })
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Calculation settings
    #[serde(default)]
    pub calculation: CalculationConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
    /// Override college system
    pub system: Option<String>,
    /// Override profile list
    pub profiles: Option<Vec<String>>,
    /// Override the UC eligibility filter
    pub skip_eligibility_filter: Option<bool>,
    /// Boost overrides layered on top of the configured ones
    pub boosts: Option<BoostOverrides>,
}

fn parse_bool(key: &str, value: &str) -> Result<bool, String> {
    value
        .trim()
        .parse::<bool>()
        .map_err(|_| format!("Invalid boolean value for '{key}': '{value}'"))
}

fn parse_system(value: &str) -> Result<String, String> {
    let system = value.trim().to_ascii_lowercase();
    if KNOWN_SYSTEMS.contains(&system.as_str()) {
        Ok(system)
    } else {
        Err(format!(
            "Unknown college system: '{value}' (expected one of {})",
            KNOWN_SYSTEMS.join(", ")
        ))
    }
}

fn parse_profiles(value: &str) -> Result<Vec<String>, String> {
    let ids: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect();
    ProfileRegistry::canonical().resolve(&ids)?;
    Ok(ids)
}

/// Category named by a `boost.<category>` key
fn boost_key(key: &str) -> Option<Result<CourseCategory, String>> {
    key.strip_prefix("boost.")
        .or_else(|| key.strip_prefix("boosts."))
        .map(str::parse)
}

impl Config {
    /// Get the `$GPA_POLICY` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/gpapolicy`
    /// - macOS: `~/Library/Application Support/gpapolicy`
    /// - Windows: `%APPDATA%\gpapolicy`
    #[must_use]
    pub fn get_gpapolicy_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gpapolicy")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty in the current config and non-empty in
    /// defaults are updated. The profile list and boost table are left alone,
    /// since empty is a meaningful value for both.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }

        if self.calculation.system.is_empty() && !defaults.calculation.system.is_empty() {
            self.calculation
                .system
                .clone_from(&defaults.calculation.system);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values replace config values; boost overrides are
    /// layered over the configured boosts rather than replacing them. Nothing
    /// is written back to the configuration file.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }

        if let Some(system) = &overrides.system {
            self.calculation.system.clone_from(system);
        }
        if let Some(profiles) = &overrides.profiles {
            self.calculation.profiles.clone_from(profiles);
        }
        if let Some(skip) = overrides.skip_eligibility_filter {
            self.calculation.skip_eligibility_filter = skip;
        }
        if let Some(boosts) = &overrides.boosts {
            self.calculation.boosts.extend(boosts);
        }
    }

    /// Get the user config file path
    ///
    /// - `config.toml` for release builds
    /// - `dconfig.toml` for debug builds (allows separate debug config)
    ///
    /// The file is located in the directory returned by [`get_gpapolicy_dir`].
    ///
    /// [`get_gpapolicy_dir`]: Self::get_gpapolicy_dir
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_gpapolicy_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$GPA_POLICY` in a string to the configuration directory
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_gpapolicy_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Expands `$GPA_POLICY` in path values and re-keys boost entries written
    /// with loose category spellings.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed, doesn't match the expected
    /// schema, or names an unknown boost category or a negative boost
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        let mut config: Self = toml::from_str(toml_str).map_err(|e| e.to_string())?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        config.calculation.boosts = config.calculation.boosts.normalized()?;
        config.calculation.boosts.validate()?;

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration cannot be parsed. The
    /// defaults are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from a specific file, merging in missing defaults
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
        let mut config = Self::from_toml(&content)?;
        config.merge_defaults(&Self::from_defaults());
        Ok(config)
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: loads it, merges missing fields from
    ///   defaults and saves the result when something was added
    /// - On first run: writes the defaults to the config file
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            let _ = defaults.save();
            return defaults;
        }

        match fs::read_to_string(&config_file)
            .map_err(|e| e.to_string())
            .and_then(|content| Self::from_toml(&content))
        {
            Ok(mut config) => {
                if config.merge_defaults(&defaults) {
                    let _ = config.save();
                }
                config
            }
            Err(e) => {
                crate::warn!(
                    "Ignoring unreadable config {}: {e}",
                    config_file.display()
                );
                defaults
            }
        }
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration to a specific file, creating parent directories
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written
    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(path, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys:
    /// - `level`, `file`, `verbose`: logging settings
    /// - `reports_dir`: report output directory
    /// - `system`: college system
    /// - `profiles`: comma-separated profile ids
    /// - `skip_eligibility_filter`: boolean
    /// - `boosts`: all boost overrides as `category=value` pairs
    /// - `boost.<category>`: a single boost override
    ///
    /// Returns `None` if the key is not recognized.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        if let Some(category) = boost_key(key) {
            let category = category.ok()?;
            return Some(
                self.calculation
                    .boosts
                    .get(category)
                    .map_or_else(String::new, |v| v.to_string()),
            );
        }
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            "system" => Some(self.calculation.system.clone()),
            "profiles" => Some(self.calculation.profiles.join(",")),
            "skip_eligibility_filter" | "skip-eligibility-filter" => {
                Some(self.calculation.skip_eligibility_filter.to_string())
            }
            "boosts" => Some(self.calculation.boosts.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Accepts the keys listed in [`get`](Config::get). Values are validated:
    /// systems must be known, profile ids must resolve, boosts must be
    /// non-negative numbers. Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value is invalid
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        if let Some(category) = boost_key(key) {
            let category = category?;
            let boost = value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .ok_or_else(|| format!("Invalid boost value for '{key}': '{value}'"))?;
            self.calculation.boosts.set(category, boost);
            return Ok(());
        }
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => self.logging.verbose = parse_bool(key, value)?,
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            "system" => self.calculation.system = parse_system(value)?,
            "profiles" => self.calculation.profiles = parse_profiles(value)?,
            "skip_eligibility_filter" | "skip-eligibility-filter" => {
                self.calculation.skip_eligibility_filter = parse_bool(key, value)?;
            }
            "boosts" => self.calculation.boosts = value.parse()?,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// The default value is taken from `defaults`, typically
    /// [`from_defaults()`](Config::from_defaults). Call
    /// [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        if let Some(category) = boost_key(key) {
            let category = category?;
            match defaults.calculation.boosts.get(category) {
                Some(value) => self.calculation.boosts.set(category, value),
                None => {
                    self.calculation.boosts.remove(category);
                }
            }
            return Ok(());
        }
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            "system" => self
                .calculation
                .system
                .clone_from(&defaults.calculation.system),
            "profiles" => self
                .calculation
                .profiles
                .clone_from(&defaults.calculation.profiles),
            "skip_eligibility_filter" | "skip-eligibility-filter" => {
                self.calculation.skip_eligibility_filter =
                    defaults.calculation.skip_eligibility_filter;
            }
            "boosts" => self
                .calculation
                .boosts
                .clone_from(&defaults.calculation.boosts),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds if the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        writeln!(f, "\n[calculation]")?;
        writeln!(f, "  system = \"{}\"", self.calculation.system)?;
        writeln!(f, "  profiles = [{}]", self.calculation.profiles.join(", "))?;
        writeln!(
            f,
            "  skip_eligibility_filter = {}",
            self.calculation.skip_eligibility_filter
        )?;
        writeln!(f, "  boosts = \"{}\"", self.calculation.boosts)?;

        Ok(())
    }
}
