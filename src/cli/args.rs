//! CLI argument definitions for `GpaPolicy`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gpa_policy::config::ConfigOverrides;
use gpa_policy::core::boost::BoostOverrides;
use gpa_policy::core::colleges::CollegeTier;
use gpa_policy::core::models::GradeLevel;
use gpa_policy::core::report::formats::ReportFormat;
use gpa_policy::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

/// Output format for the `template` command
#[derive(Copy, Clone, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum TemplateFormat {
    /// `[[course]]` tables
    #[default]
    Toml,
    /// Header row plus one course per line
    Csv,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key (e.g., `level`, `system`, `boost.honors`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Calculate GPAs for a course file.
    ///
    /// Loads a `.toml` or `.csv` course file and prints one GPA per profile.
    Calc {
        /// Path to the course file (.toml or .csv)
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// Report format: text, json, markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "text")]
        format: ReportFormat,

        /// Write the report to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Also write the report into the configured reports directory
        #[arg(long)]
        save: bool,

        /// Show the profiles a specific college uses (branded with its name)
        #[arg(long, value_name = "NAME")]
        college: Option<String>,

        /// Fall back to an informational UC GPA when no course is eligible yet
        #[arg(long)]
        cumulative: bool,

        /// Leave out the per-course breakdown
        #[arg(long)]
        no_breakdown: bool,

        /// Add a GPA per semester (grade-level filter skipped, flagged when not counted)
        #[arg(long)]
        by_semester: bool,

        /// Report title (defaults to the input file name)
        #[arg(long, value_name = "TITLE")]
        title: Option<String>,
    },
    /// List the available GPA profiles.
    Profiles {
        /// Only list the profiles used by a college system (uc, csu, ivy, generic)
        #[arg(long, value_name = "SYSTEM")]
        system: Option<String>,

        /// Show the profiles branded for a college
        #[arg(long, value_name = "NAME")]
        college: Option<String>,
    },
    /// List average admitted GPAs and acceptance rates for known colleges.
    Colleges {
        /// Only list one tier (ivy, top20, top50, flagship, state)
        #[arg(long, value_name = "TIER")]
        tier: Option<CollegeTier>,

        /// Compare this GPA against each college's average
        #[arg(long, value_name = "GPA")]
        gpa: Option<f64>,
    },
    /// Estimate the national percentile of a GPA.
    Percentile {
        /// GPA to look up
        #[arg(value_name = "GPA")]
        gpa: f64,

        /// Profile whose scale the GPA is on
        #[arg(long, value_name = "ID", default_value = "standard-unweighted")]
        profile: String,
    },
    /// Write a starter course file from a typical high-school schedule.
    Template {
        /// Grade level (9-12)
        #[arg(long, value_name = "GRADE", default_value = "9")]
        grade: GradeLevel,

        /// Semester (1 or 2)
        #[arg(long, value_name = "N", default_value_t = 1)]
        semester: u8,

        /// Output format
        #[arg(long, value_enum, default_value_t = TemplateFormat::Toml)]
        format: TemplateFormat,

        /// Output file (prints to stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gpapolicy",
    about = "Multi-policy GPA calculator",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// College system used to pick profiles (uc, csu, ivy, generic)
    #[arg(long, value_name = "SYSTEM")]
    pub system: Option<String>,

    /// Comma-separated profile ids to calculate (overrides the system's set)
    #[arg(long, value_name = "IDS", value_delimiter = ',')]
    pub profiles: Option<Vec<String>>,

    /// Count courses outside 10th/11th grade in UC GPAs
    #[arg(long)]
    pub skip_eligibility_filter: bool,

    /// Boost override as CATEGORY=VALUE pairs (repeatable, e.g. `--boost honors=1,ap=1.5`)
    #[arg(long = "boost", value_name = "CATEGORY=VALUE")]
    pub boosts: Vec<BoostOverrides>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--reports-dir`) take precedence over long-form
    /// flags (e.g., `--config-reports-dir`) when both are provided. Repeated
    /// `--boost` flags are layered in order, so later ones win.
    ///
    /// # Examples
    /// ```ignore
    /// let args = Cli::parse();
    /// config.apply_overrides(&args.to_config_overrides());
    /// ```
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let boosts = (!self.boosts.is_empty()).then(|| {
            self.boosts
                .iter()
                .fold(BoostOverrides::new(), |mut acc, next| {
                    acc.extend(next);
                    acc
                })
        });

        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            reports_dir: self
                .reports_dir
                .as_ref()
                .or(self.config_reports_dir.as_ref())
                .map(|p| p.to_string_lossy().to_string()),
            system: self.system.clone(),
            profiles: self.profiles.clone(),
            skip_eligibility_filter: self.skip_eligibility_filter.then_some(true),
            boosts,
        }
    }
}
