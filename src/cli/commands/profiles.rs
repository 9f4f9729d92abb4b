//! Profiles command handler

use gpa_policy::config::Config;
use gpa_policy::core::profile::{Profile, ProfileRegistry};

/// Profiles to list for the given filters
///
/// A college lists its branded profiles under the configured (or given)
/// system; a system alone lists that system's set; neither lists all five.
pub fn listed_profiles(system: Option<&str>, college: Option<&str>, config: &Config) -> Vec<Profile> {
    let registry = ProfileRegistry::canonical();
    match (college, system) {
        (Some(name), system) => {
            registry.for_college(name, system.unwrap_or(config.calculation.system.as_str()))
        }
        (None, Some(system)) => registry.profiles_for_system(system),
        (None, None) => registry.profiles().to_vec(),
    }
}

/// One table row per profile
fn format_row(profile: &Profile) -> String {
    format!(
        "{:<28} {:<32} {:>4.1}  {}",
        profile.id, profile.name, profile.max_gpa, profile.description
    )
}

/// Run the profiles command
pub fn run(system: Option<&str>, college: Option<&str>, config: &Config) -> i32 {
    let profiles = listed_profiles(system, college, config);
    println!("{:<28} {:<32} {:>4}  Description", "Id", "Name", "Max");
    for profile in &profiles {
        println!("{}", format_row(profile));
    }
    0
}
