//! Session modes.
//!
//! # State Machine
//!
//! ```text
//!            start_new_tour                 end_new_tour
//!  Browse ─────────────────► Create ───────────────────► Browse
//!  Browse ──show_tour_details──► Details
//!  Browse | Details ──follow_tour──► Follow
//!  Details | Follow ──show_tours_overview──► Browse
//!  Follow ──end_selected_tour──► Browse
//! ```
//!
//! Each variant carries only the data meaningful in that mode, so there is
//! no "current tour" whose meaning depends on the mode.

use std::fmt;
use std::sync::Arc;

use crate::geometry::Position;
use crate::tour::{Tour, Waypoint};

/// Mode tag without payload, for reporting and gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    Browse,
    Create,
    Details,
    Follow,
}

impl ModeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModeKind::Browse => "BROWSE",
            ModeKind::Create => "CREATE",
            ModeKind::Details => "DETAILS",
            ModeKind::Follow => "FOLLOW",
        }
    }
}

impl fmt::Display for ModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current mode with its payload.
#[derive(Debug, Clone)]
pub(crate) enum Mode {
    /// Listing all tours.
    Browse,
    /// Authoring a new tour.
    Create(Tour),
    /// Inspecting one tour.
    Details(Arc<Tour>),
    /// Walking a tour.
    Follow(FollowProgress),
}

impl Mode {
    pub(crate) fn kind(&self) -> ModeKind {
        match self {
            Mode::Browse => ModeKind::Browse,
            Mode::Create(_) => ModeKind::Create,
            Mode::Details(_) => ModeKind::Details,
            Mode::Follow(_) => ModeKind::Follow,
        }
    }
}

/// Progress along a followed tour.
#[derive(Debug, Clone)]
pub struct FollowProgress {
    tour: Arc<Tour>,
    stage: usize,
}

impl FollowProgress {
    /// Start following `tour` from its first waypoint.
    pub fn new(tour: Arc<Tour>) -> Self {
        Self { tour, stage: 0 }
    }

    /// The tour being followed.
    pub fn tour(&self) -> &Arc<Tour> {
        &self.tour
    }

    /// Index of the next waypoint not yet reached.
    pub fn stage(&self) -> usize {
        self.stage
    }

    /// The waypoint being walked toward, if any remain.
    pub fn target(&self) -> Option<&Waypoint> {
        self.tour.waypoint(self.stage)
    }

    /// The waypoint most recently reached, if any.
    pub fn reached(&self) -> Option<&Waypoint> {
        self.stage
            .checked_sub(1)
            .and_then(|index| self.tour.waypoint(index))
    }

    /// True once every waypoint has been reached.
    pub fn is_complete(&self) -> bool {
        self.stage >= self.tour.waypoint_count()
    }

    /// Advance one stage if `position` is within `radius` of the target.
    ///
    /// Never advances more than one stage per call, even when the position is
    /// also within reach of later waypoints. Returns true if advanced.
    pub(crate) fn advance(&mut self, position: Position, radius: f64) -> bool {
        let reached = self
            .target()
            .is_some_and(|target| position.distance_to(target.position()) <= radius);
        if reached {
            self.stage += 1;
        }
        reached
    }
}
