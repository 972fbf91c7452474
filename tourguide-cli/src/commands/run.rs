//! Run command - replay a session script against a fresh controller.
//!
//! Each script line is applied in order. A rejected command is reported and
//! replay continues; a malformed script aborts before anything runs.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use console::style;
use tourguide::{parse_script, Chunk, ConfigFile, Controller, ControllerConfig, ScriptLine};
use tracing::{info, warn};

use crate::error::CliError;

/// When to print the controller output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// After every command
    #[default]
    Every,
    /// Once, after the last command
    Final,
}

/// Arguments for the run command.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Session script, one JSON command per line
    pub script: PathBuf,

    /// Print output chunks as JSON lines
    #[arg(long)]
    pub json: bool,

    /// When to print the controller output
    #[arg(long, value_enum, default_value_t = OutputMode::Every)]
    pub output: OutputMode,

    /// Waypoint arrival radius (overrides config)
    #[arg(long)]
    pub radius: Option<f64>,

    /// Minimum waypoint separation (overrides config)
    #[arg(long)]
    pub separation: Option<f64>,
}

/// Counts from a replayed script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    pub rejected: usize,
}

/// Run the run command.
pub fn run(args: RunArgs) -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    let controller_config = resolve_config(&args, &config)?;

    let lines = load_script(&args.script)?;
    info!(
        script = %args.script.display(),
        commands = lines.len(),
        "Replaying session script"
    );

    let stdout = std::io::stdout();
    let summary = replay(
        &lines,
        controller_config,
        args.output,
        args.json,
        &mut stdout.lock(),
    )?;

    if !args.json {
        println!(
            "{} commands applied, {} rejected",
            summary.applied, summary.rejected
        );
    }
    Ok(())
}

/// Read and parse a session script file.
fn load_script(path: &Path) -> Result<Vec<ScriptLine>, CliError> {
    let script = std::fs::read_to_string(path).map_err(|source| CliError::ReadScript {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_script(&script)?)
}

/// Resolve controller settings: CLI flags take precedence over the config file.
fn resolve_config(args: &RunArgs, config: &ConfigFile) -> Result<ControllerConfig, CliError> {
    let mut resolved = config.controller_config();
    if let Some(radius) = args.radius {
        resolved = resolved.with_waypoint_radius(radius);
    }
    if let Some(separation) = args.separation {
        resolved = resolved.with_waypoint_separation(separation);
    }
    resolved
        .validate()
        .map_err(|e| CliError::Config(e.to_string()))?;
    Ok(resolved)
}

/// Apply every script line to a new controller, writing output to `out`.
pub fn replay<W: Write>(
    lines: &[ScriptLine],
    config: ControllerConfig,
    mode: OutputMode,
    json: bool,
    out: &mut W,
) -> Result<ReplaySummary, CliError> {
    let mut controller = Controller::new(config);
    let mut summary = ReplaySummary::default();

    for line in lines {
        let result = controller.apply(&line.command);
        match &result {
            Ok(()) => summary.applied += 1,
            Err(e) => {
                summary.rejected += 1;
                warn!(line = line.line, op = line.command.op(), error = %e, "Command rejected");
            }
        }

        if json {
            let status = serde_json::json!({
                "line": line.line,
                "op": line.command.op(),
                "ok": result.is_ok(),
                "error": result.as_ref().err().map(|e| e.to_string()),
            });
            writeln!(out, "{}", status)?;
        } else {
            let number = style(format!("{:>4}", line.line)).dim();
            match &result {
                Ok(()) => writeln!(out, "{} {}", number, line.command.op())?,
                Err(e) => writeln!(
                    out,
                    "{} {} {}",
                    number,
                    line.command.op(),
                    style(format!("rejected: {}", e)).red()
                )?,
            }
        }

        if mode == OutputMode::Every {
            write_output(&controller.output(), json, out)?;
        }
    }

    if mode == OutputMode::Final {
        write_output(&controller.output(), json, out)?;
    }
    Ok(summary)
}

fn write_output<W: Write>(chunks: &[Chunk], json: bool, out: &mut W) -> Result<(), CliError> {
    for chunk in chunks {
        if json {
            writeln!(out, "{}", serde_json::to_string(chunk)?)?;
        } else {
            for text in chunk.to_string().lines() {
                writeln!(out, "     {}", style(text).cyan())?;
            }
        }
    }
    Ok(())
}
