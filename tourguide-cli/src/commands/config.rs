//! `tourguide config` subcommands.
//!
//! Reads and edits the `[session]` settings file. Values are checked with the
//! same rules the library applies when loading the file.

use clap::Subcommand;
use tourguide::config::{config_file_path, ConfigFile, ConfigKey};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the current value of one setting
    Get {
        /// Setting to read, such as session.waypoint_radius
        key: String,
    },

    /// Store a new distance for one setting
    Set {
        /// Setting to change, such as session.waypoint_separation
        key: String,

        /// New distance, a non-negative number
        value: String,
    },

    /// Print every session setting with its value
    List,

    /// Print where the settings file lives
    Path,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Get { key } => run_get(&key),
        ConfigCommands::Set { key, value } => run_set(&key, &value),
        ConfigCommands::List => run_list(),
        ConfigCommands::Path => run_path(),
    }
}

fn parse_key(key: &str) -> Result<ConfigKey, CliError> {
    key.parse().map_err(|_| {
        CliError::Config(format!(
            "No setting named '{}' (known settings: {})",
            key,
            ConfigKey::all()
                .iter()
                .map(ConfigKey::name)
                .collect::<Vec<_>>()
                .join(", ")
        ))
    })
}

/// Print one setting.
fn run_get(key: &str) -> Result<(), CliError> {
    let config_key = parse_key(key)?;
    let config = ConfigFile::load()?;

    println!("{}", config_key.get(&config));
    Ok(())
}

/// Change one setting and save the file.
fn run_set(key: &str, value: &str) -> Result<(), CliError> {
    let config_key = parse_key(key)?;

    let mut config = ConfigFile::load()?;
    config_key
        .set(&mut config, value)
        .map_err(|e| CliError::Config(e.to_string()))?;
    config.save()?;

    println!("Set {} = {}", config_key.name(), value);
    Ok(())
}

/// Print all settings grouped by section.
fn run_list() -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    print!("{}", render_list(&config));
    Ok(())
}

fn render_list(config: &ConfigFile) -> String {
    let mut out = String::from("Tour guide settings\n");
    let mut current_section = "";

    for key in ConfigKey::all() {
        if key.section() != current_section {
            current_section = key.section();
            out.push_str(&format!("\n[{}]\n", current_section));
        }
        out.push_str(&format!("  {} = {}\n", key.key_name(), key.get(config)));
    }
    out
}

/// Print the settings file location.
fn run_path() -> Result<(), CliError> {
    println!("{}", config_file_path().display());
    Ok(())
}
