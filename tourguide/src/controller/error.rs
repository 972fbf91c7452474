//! Controller error types.

use thiserror::Error;

use super::mode::ModeKind;

/// Result type for controller commands.
pub type ControllerResult<T> = Result<T, ControllerError>;

/// Broad classification of a rejected command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The command is not valid in the current mode.
    Mode,
    /// The referenced tour does not exist.
    NotFound,
    /// A new waypoint is too close to the previous one.
    Spacing,
    /// The tour's legs and waypoints do not line up.
    Structural,
}

/// Reasons a controller command is rejected.
///
/// Every error is recoverable: the session state is left exactly as it was
/// before the command, and the caller may issue a different command.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControllerError {
    /// Command issued in a mode that does not permit it.
    #[error("incorrect mode: cannot {operation} in {actual} mode")]
    IncorrectMode {
        operation: &'static str,
        actual: ModeKind,
    },

    /// Overview requested while a tour is being authored.
    #[error("incorrect mode: cannot browse tours while creating a new tour")]
    BrowseWhileCreating,

    /// No tour with the given id.
    #[error("tour {id} not found")]
    TourNotFound { id: String },

    /// Waypoint would be closer than the minimum separation.
    #[error("waypoint too close to previous waypoint: {distance:.1} < {min_separation:.1}")]
    WaypointTooClose { distance: f64, min_separation: f64 },

    /// A leg is already waiting for its waypoint.
    #[error("too many legs in tour {tour_id}: add a waypoint first")]
    TooManyLegs { tour_id: String },

    /// Tour finalized without any waypoints.
    #[error("cannot finish tour {tour_id} without waypoints")]
    NoWaypoints { tour_id: String },

    /// Tour finalized with a leg still waiting for its waypoint.
    #[error("leg count mismatch: {legs} legs for {waypoints} waypoints")]
    LegCountMismatch { legs: usize, waypoints: usize },
}

impl ControllerError {
    /// Classify this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IncorrectMode { .. } | Self::BrowseWhileCreating => ErrorCategory::Mode,
            Self::TourNotFound { .. } => ErrorCategory::NotFound,
            Self::WaypointTooClose { .. } => ErrorCategory::Spacing,
            Self::TooManyLegs { .. } | Self::NoWaypoints { .. } | Self::LegCountMismatch { .. } => {
                ErrorCategory::Structural
            }
        }
    }
}
