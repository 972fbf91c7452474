//! Tour guide session controller.
//!
//! The [`Controller`] owns a single user's session: which mode it is in, the
//! user's last reported position, and every completed tour. Callers issue
//! commands, report positions with [`Controller::set_location`], and pull
//! [`Controller::output`] for what to display.
//!
//! # Modes
//!
//! | Command               | Valid in                 |
//! |-----------------------|--------------------------|
//! | `start_new_tour`      | Browse                   |
//! | `add_waypoint`        | Create                   |
//! | `add_leg`             | Create                   |
//! | `end_new_tour`        | Create                   |
//! | `show_tour_details`   | Browse                   |
//! | `show_tours_overview` | Browse, Details, Follow  |
//! | `follow_tour`         | Browse, Details          |
//! | `end_selected_tour`   | Follow                   |
//! | `set_location`        | any                      |
//!
//! A rejected command returns a [`ControllerError`] and changes nothing.
//!
//! # Example
//!
//! ```
//! use tourguide::{Annotation, Chunk, Controller, ControllerConfig};
//!
//! let mut controller = Controller::new(ControllerConfig::default());
//! controller.start_new_tour("T1", "Old Town", Annotation::new("Castle to Palace"))?;
//! controller.set_location(-500.0, 0.0);
//! controller.add_waypoint(Annotation::new("Edinburgh Castle"))?;
//! controller.end_new_tour()?;
//!
//! controller.follow_tour("T1")?;
//! let output = controller.output();
//! assert!(matches!(output[0], Chunk::FollowHeader { stage: 0, .. }));
//! # Ok::<(), tourguide::ControllerError>(())
//! ```

mod config;
mod error;
mod mode;

pub use config::{ControllerConfig, DEFAULT_WAYPOINT_RADIUS, DEFAULT_WAYPOINT_SEPARATION};
pub(crate) use config::check_distance;
pub use error::{ControllerError, ControllerResult, ErrorCategory};
pub use mode::{FollowProgress, ModeKind};

use std::sync::Arc;

use tracing::{debug, info};

use crate::annotation::Annotation;
use crate::chunk::{Chunk, TourSummary};
use crate::command::Command;
use crate::geometry::Position;
use crate::tour::{Tour, TourCatalog, Waypoint};
use mode::Mode;

/// Single-user tour guide session.
#[derive(Debug, Clone)]
pub struct Controller {
    config: ControllerConfig,
    mode: Mode,
    position: Position,
    catalog: TourCatalog,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

impl Controller {
    /// Create a controller in Browse mode with no tours, positioned at the origin.
    pub fn new(config: ControllerConfig) -> Self {
        info!(
            waypoint_radius = config.waypoint_radius,
            waypoint_separation = config.waypoint_separation,
            "Controller created"
        );
        Self {
            config,
            mode: Mode::Browse,
            position: Position::default(),
            catalog: TourCatalog::new(),
        }
    }

    /// Configuration fixed at construction.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Current mode.
    pub fn mode(&self) -> ModeKind {
        self.mode.kind()
    }

    /// Last reported position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Completed tours.
    pub fn catalog(&self) -> &TourCatalog {
        &self.catalog
    }

    /// Tour under construction (Create mode only).
    pub fn draft(&self) -> Option<&Tour> {
        match &self.mode {
            Mode::Create(tour) => Some(tour),
            _ => None,
        }
    }

    /// Tour being inspected or followed (Details and Follow modes).
    pub fn selected_tour(&self) -> Option<&Arc<Tour>> {
        match &self.mode {
            Mode::Details(tour) => Some(tour),
            Mode::Follow(progress) => Some(progress.tour()),
            _ => None,
        }
    }

    /// Progress along the followed tour (Follow mode only).
    pub fn follow_progress(&self) -> Option<&FollowProgress> {
        match &self.mode {
            Mode::Follow(progress) => Some(progress),
            _ => None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Create tour mode
    // ─────────────────────────────────────────────────────────────────────────

    /// Begin authoring a new, empty tour.
    pub fn start_new_tour(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        annotation: Annotation,
    ) -> ControllerResult<()> {
        self.expect_mode(&[ModeKind::Browse], "start a new tour")?;

        let tour = Tour::new(id, title, annotation);
        info!(tour_id = tour.id(), title = tour.title(), "Tour authoring started");
        self.transition(Mode::Create(tour));
        Ok(())
    }

    /// Add a waypoint at the current position.
    ///
    /// Rejected if the previous waypoint is closer than the configured
    /// separation. The first waypoint of a tour is never rejected for spacing.
    /// If no leg is waiting for this waypoint, a default leg is added.
    pub fn add_waypoint(&mut self, annotation: Annotation) -> ControllerResult<()> {
        let position = self.position;
        let min_separation = self.config.waypoint_separation;
        let tour = self.draft_mut("add a waypoint")?;

        if let Some(last) = tour.last_waypoint() {
            let distance = position.distance_to(last.position());
            if distance < min_separation {
                return reject(ControllerError::WaypointTooClose {
                    distance,
                    min_separation,
                });
            }
        }

        let default_leg = tour.push_waypoint(Waypoint::new(position, annotation));
        info!(
            tour_id = tour.id(),
            east = position.east,
            north = position.north,
            waypoints = tour.waypoint_count(),
            default_leg,
            "Waypoint added"
        );
        Ok(())
    }

    /// Add the narration for the leg toward the next waypoint.
    ///
    /// At most one leg may be ahead of its waypoint.
    pub fn add_leg(&mut self, annotation: Annotation) -> ControllerResult<()> {
        let tour = self.draft_mut("add a leg")?;

        if tour.has_pending_leg() {
            return reject(ControllerError::TooManyLegs {
                tour_id: tour.id().to_string(),
            });
        }

        info!(
            tour_id = tour.id(),
            leg = tour.leg_count(),
            annotation = %annotation,
            "Leg added"
        );
        tour.push_leg(annotation);
        Ok(())
    }

    /// Finish authoring and add the tour to the catalog.
    ///
    /// Requires at least one waypoint and exactly one leg per waypoint.
    pub fn end_new_tour(&mut self) -> ControllerResult<()> {
        let tour = self.draft_mut("finish a tour")?;

        if !tour.is_complete() {
            return reject(if tour.waypoint_count() == 0 {
                ControllerError::NoWaypoints {
                    tour_id: tour.id().to_string(),
                }
            } else {
                ControllerError::LegCountMismatch {
                    legs: tour.leg_count(),
                    waypoints: tour.waypoint_count(),
                }
            });
        }

        if let Mode::Create(tour) = self.transition(Mode::Browse) {
            info!(
                tour_id = tour.id(),
                waypoints = tour.waypoint_count(),
                "Tour added"
            );
            if self.catalog.insert(tour).is_some() {
                debug!("Replaced existing tour with the same id");
            }
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Browse tours mode
    // ─────────────────────────────────────────────────────────────────────────

    /// Inspect a single tour.
    pub fn show_tour_details(&mut self, id: &str) -> ControllerResult<()> {
        self.expect_mode(&[ModeKind::Browse], "show tour details")?;

        let tour = self.lookup(id)?;
        info!(tour_id = tour.id(), "Viewing tour");
        self.transition(Mode::Details(tour));
        Ok(())
    }

    /// Return to the list of all tours.
    ///
    /// Allowed everywhere except while authoring; a no-op in Browse mode.
    pub fn show_tours_overview(&mut self) -> ControllerResult<()> {
        if let Mode::Create(_) = self.mode {
            return reject(ControllerError::BrowseWhileCreating);
        }

        self.transition(Mode::Browse);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Follow tour mode
    // ─────────────────────────────────────────────────────────────────────────

    /// Start following a tour from its first waypoint.
    pub fn follow_tour(&mut self, id: &str) -> ControllerResult<()> {
        self.expect_mode(&[ModeKind::Browse, ModeKind::Details], "follow a tour")?;

        let tour = self.lookup(id)?;
        info!(
            tour_id = tour.id(),
            waypoints = tour.waypoint_count(),
            "Following tour"
        );
        self.transition(Mode::Follow(FollowProgress::new(tour)));
        Ok(())
    }

    /// Stop following the current tour.
    pub fn end_selected_tour(&mut self) -> ControllerResult<()> {
        self.expect_mode(&[ModeKind::Follow], "end the selected tour")?;

        self.transition(Mode::Browse);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // All modes
    // ─────────────────────────────────────────────────────────────────────────

    /// Report a new position.
    ///
    /// While following, reaching the target waypoint advances the stage by
    /// exactly one, even if later waypoints are also within reach.
    pub fn set_location(&mut self, east: f64, north: f64) {
        self.set_position(Position::new(east, north));
    }

    /// Report a new position. See [`Controller::set_location`].
    pub fn set_position(&mut self, position: Position) {
        debug!(
            from_east = self.position.east,
            from_north = self.position.north,
            east = position.east,
            north = position.north,
            "Location changed"
        );
        self.position = position;

        let radius = self.config.waypoint_radius;
        if let Mode::Follow(progress) = &mut self.mode {
            if progress.advance(position, radius) {
                info!(
                    tour_id = progress.tour().id(),
                    stage = progress.stage(),
                    waypoints = progress.tour().waypoint_count(),
                    "Reached waypoint"
                );
                if progress.is_complete() {
                    info!(tour_id = progress.tour().id(), "Tour finished");
                }
            }
        }
    }

    /// Apply a scripted command.
    pub fn apply(&mut self, command: &Command) -> ControllerResult<()> {
        match command {
            Command::StartNewTour {
                id,
                title,
                annotation,
            } => self.start_new_tour(id.as_str(), title.as_str(), annotation.clone()),
            Command::AddWaypoint { annotation } => self.add_waypoint(annotation.clone()),
            Command::AddLeg { annotation } => self.add_leg(annotation.clone()),
            Command::EndNewTour => self.end_new_tour(),
            Command::ShowTourDetails { id } => self.show_tour_details(id),
            Command::ShowToursOverview => self.show_tours_overview(),
            Command::FollowTour { id } => self.follow_tour(id),
            Command::EndSelectedTour => self.end_selected_tour(),
            Command::SetLocation { east, north } => {
                self.set_location(*east, *north);
                Ok(())
            }
        }
    }

    /// What to display for the current state.
    ///
    /// Recomputed from state on every call.
    pub fn output(&self) -> Vec<Chunk> {
        match &self.mode {
            Mode::Create(tour) => vec![Chunk::CreateHeader {
                title: tour.title().to_string(),
                leg_count: tour.leg_count(),
                waypoint_count: tour.waypoint_count(),
            }],
            Mode::Browse => vec![Chunk::BrowseOverview {
                tours: self
                    .catalog
                    .iter()
                    .map(|tour| TourSummary::new(tour.id(), tour.title()))
                    .collect(),
            }],
            Mode::Details(tour) => vec![Chunk::BrowseDetails {
                id: tour.id().to_string(),
                title: tour.title().to_string(),
                annotation: tour.annotation().clone(),
            }],
            Mode::Follow(progress) => self.follow_output(progress),
        }
    }

    fn follow_output(&self, progress: &FollowProgress) -> Vec<Chunk> {
        let tour = progress.tour();
        let mut output = vec![Chunk::FollowHeader {
            title: tour.title().to_string(),
            stage: progress.stage(),
            waypoint_count: tour.waypoint_count(),
        }];

        // Keep announcing the waypoint just reached while still near it
        if let Some(reached) = progress.reached() {
            if self.position.distance_to(reached.position()) <= self.config.waypoint_radius {
                output.push(Chunk::FollowWaypoint {
                    annotation: reached.annotation.clone(),
                });
            }
        }

        if let (Some(leg), Some(target)) = (tour.leg(progress.stage()), progress.target()) {
            let to_target = self.position.displacement_to(target.position());
            output.push(Chunk::FollowLeg {
                annotation: leg.clone(),
            });
            output.push(Chunk::FollowBearing {
                bearing: to_target.bearing(),
                distance: to_target.distance(),
            });
        }

        output
    }

    fn expect_mode(&self, allowed: &[ModeKind], operation: &'static str) -> ControllerResult<()> {
        let actual = self.mode.kind();
        if allowed.contains(&actual) {
            Ok(())
        } else {
            reject(ControllerError::IncorrectMode { operation, actual })
        }
    }

    fn draft_mut(&mut self, operation: &'static str) -> ControllerResult<&mut Tour> {
        match &mut self.mode {
            Mode::Create(tour) => Ok(tour),
            other => reject(ControllerError::IncorrectMode {
                operation,
                actual: other.kind(),
            }),
        }
    }

    fn lookup(&self, id: &str) -> ControllerResult<Arc<Tour>> {
        match self.catalog.get(id) {
            Some(tour) => Ok(Arc::clone(tour)),
            None => reject(ControllerError::TourNotFound { id: id.to_string() }),
        }
    }

    /// Switch mode, returning the previous one.
    fn transition(&mut self, next: Mode) -> Mode {
        info!(from = %self.mode.kind(), to = %next.kind(), "Mode changed");
        std::mem::replace(&mut self.mode, next)
    }
}

fn reject<T>(error: ControllerError) -> ControllerResult<T> {
    debug!(%error, "Command rejected");
    Err(error)
}
