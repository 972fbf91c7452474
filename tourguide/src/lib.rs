//! Tour Guide - narrated walking tours
//!
//! This library implements a single-user tour guide session: authoring tours
//! as ordered waypoints with leg narrations, browsing them, and following one
//! while position updates arrive. The [`Controller`] state machine decides
//! what to display; presentation, transport and storage live elsewhere.

pub mod annotation;
pub mod chunk;
pub mod command;
pub mod config;
pub mod controller;
pub mod geometry;
pub mod tour;

pub use annotation::Annotation;
pub use chunk::{Chunk, TourSummary};
pub use command::{parse_script, Command, CommandError, ScriptLine};
pub use config::{ConfigError, ConfigFile, ConfigKey};
pub use controller::{
    Controller, ControllerConfig, ControllerError, ControllerResult, ErrorCategory,
    FollowProgress, ModeKind,
};
pub use geometry::{Displacement, Position};
pub use tour::{Tour, TourCatalog, Waypoint};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
