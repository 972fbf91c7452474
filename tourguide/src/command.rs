//! Scripted session commands.
//!
//! A session script is a sequence of JSON objects, one per line, each naming
//! a controller command in its `op` field:
//!
//! ```text
//! # Old Town tour
//! {"op": "start_new_tour", "id": "T2", "title": "Old Town"}
//! {"op": "set_location", "east": -500, "north": 0}
//! {"op": "add_waypoint", "annotation": "Edinburgh Castle"}
//! {"op": "end_new_tour"}
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. Omitted annotations
//! default to [`Annotation::DEFAULT`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::annotation::Annotation;

/// Errors reading a session script.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A line is not a valid command.
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// One controller command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    StartNewTour {
        id: String,
        title: String,
        #[serde(default)]
        annotation: Annotation,
    },
    AddWaypoint {
        #[serde(default)]
        annotation: Annotation,
    },
    AddLeg {
        #[serde(default)]
        annotation: Annotation,
    },
    EndNewTour,
    ShowTourDetails {
        id: String,
    },
    ShowToursOverview,
    FollowTour {
        id: String,
    },
    EndSelectedTour,
    SetLocation {
        east: f64,
        north: f64,
    },
}

impl Command {
    /// Parse a single JSON command.
    pub fn parse_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }

    /// Script operation name (the `op` tag).
    pub fn op(&self) -> &'static str {
        match self {
            Command::StartNewTour { .. } => "start_new_tour",
            Command::AddWaypoint { .. } => "add_waypoint",
            Command::AddLeg { .. } => "add_leg",
            Command::EndNewTour => "end_new_tour",
            Command::ShowTourDetails { .. } => "show_tour_details",
            Command::ShowToursOverview => "show_tours_overview",
            Command::FollowTour { .. } => "follow_tour",
            Command::EndSelectedTour => "end_selected_tour",
            Command::SetLocation { .. } => "set_location",
        }
    }
}

/// A parsed command with its 1-based script line.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: Command,
}

/// Parse a whole session script.
///
/// Stops at the first malformed line.
pub fn parse_script(script: &str) -> Result<Vec<ScriptLine>, CommandError> {
    script
        .lines()
        .enumerate()
        .map(|(index, text)| (index + 1, text.trim()))
        .filter(|(_, text)| !text.is_empty() && !text.starts_with('#'))
        .map(|(line, text)| {
            Command::parse_line(text)
                .map(|command| ScriptLine { line, command })
                .map_err(|source| CommandError::Parse { line, source })
        })
        .collect()
}
