//! Command-line interface entry point for `GpaPolicy`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use gpa_policy::config::Config;
use gpa_policy::info;
use gpa_policy::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path =
        (!config.logging.file.is_empty()).then(|| std::path::PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let code = match args.command {
        Command::Config { subcommand } => commands::config::run(subcommand, &mut config, &defaults),
        Command::Calc {
            input_file,
            format,
            output,
            save,
            college,
            cumulative,
            no_breakdown,
            by_semester,
            title,
        } => commands::calc::run(
            &commands::calc::CalcOptions {
                input_file,
                format,
                output,
                save,
                college,
                cumulative,
                breakdown: !no_breakdown,
                by_semester,
                title,
            },
            &config,
        ),
        Command::Profiles { system, college } => {
            commands::profiles::run(system.as_deref(), college.as_deref(), &config)
        }
        Command::Colleges { tier, gpa } => commands::colleges::run(tier, gpa),
        Command::Percentile { gpa, profile } => commands::percentile::run(gpa, &profile),
        Command::Template {
            grade,
            semester,
            format,
            output,
        } => commands::template::run(grade, semester, format, output.as_deref()),
    };

    if code != 0 {
        std::process::exit(code);
    }
}
