//! Config command handler

use crate::args::ConfigSubcommand;
use gpa_policy::config::Config;
use gpa_policy::error;
use std::io::{self, BufRead, Write};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) -> i32 {
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => {
            let stdin = io::stdin();
            handle_config_reset(&mut stdin.lock())
        }
    }
}

/// Handle the config get subcommand
pub fn handle_config_get(config: &Config, key: Option<&str>) -> i32 {
    let Some(k) = key else {
        println!("\n=== Configuration ===\n");
        print!("{config}");
        return 0;
    };

    if let Some(value) = config.get(k) {
        println!("{value}");
        0
    } else {
        eprintln!("Unknown config key: '{k}'");
        1
    }
}

/// Handle the config set subcommand
pub fn handle_config_set(config: &mut Config, key: &str, value: &str) -> i32 {
    if let Err(e) = config.set(key, value) {
        eprintln!("✗ {e}");
        return 1;
    }

    if let Err(e) = config.save() {
        error!("Failed to save config: {e}");
        eprintln!("✗ Failed to save config: {e}");
        return 1;
    }

    println!("✓ Set {key} = {value}");
    0
}

/// Handle the config unset subcommand
pub fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) -> i32 {
    if let Err(e) = config.unset(key, defaults) {
        eprintln!("✗ {e}");
        return 1;
    }

    if let Err(e) = config.save() {
        error!("Failed to save config: {e}");
        eprintln!("✗ Failed to save config: {e}");
        return 1;
    }

    println!("✓ Reset {key} to default");
    0
}

/// Whether a confirmation answer means yes
fn confirmed(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Handle the config reset subcommand, reading the confirmation from `input`
pub fn handle_config_reset(input: &mut impl BufRead) -> i32 {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return 0;
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    input.read_line(&mut response).ok();

    if !confirmed(&response) {
        println!("✗ Reset cancelled");
        return 0;
    }

    if let Err(e) = Config::reset() {
        error!("Failed to remove config file: {e}");
        eprintln!("✗ Failed to remove config file: {e}");
        return 1;
    }
    println!("✓ Config reset to defaults");
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_answers() {
        assert!(confirmed("y\n"));
        assert!(confirmed(" YES "));
        assert!(!confirmed("n"));
        assert!(!confirmed(""));
        assert!(!confirmed("yep"));
    }

    #[test]
    fn test_get_unknown_key_fails() {
        let config = Config::from_defaults();
        assert_eq!(handle_config_get(&config, Some("no_such_key")), 1);
        assert_eq!(handle_config_get(&config, Some("system")), 0);
    }

    #[test]
    fn test_set_invalid_value_fails_before_saving() {
        let mut config = Config::from_defaults();
        assert_eq!(handle_config_set(&mut config, "system", "nowhere"), 1);
        assert_eq!(config.calculation.system, "generic");
    }
}
