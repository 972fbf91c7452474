//! Tour data model.
//!
//! A tour is an ordered list of waypoints, each preceded by a leg: the
//! narration for walking toward it. Leg `i` leads to waypoint `i`.
//!
//! ```text
//!   leg 0        leg 1        leg 2
//! ────────► wp 0 ────────► wp 1 ────────► wp 2
//! ```
//!
//! While a tour is being authored, a leg may be added ahead of its waypoint,
//! so the leg count is either equal to the waypoint count or one greater.
//! A completed tour has exactly one leg per waypoint and at least one waypoint.

mod catalog;

pub use catalog::TourCatalog;

use crate::annotation::Annotation;
use crate::geometry::Position;

/// A point of interest on a tour.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    /// Easting of the waypoint.
    pub east: f64,
    /// Northing of the waypoint.
    pub north: f64,
    /// Narration given on arrival.
    pub annotation: Annotation,
}

impl Waypoint {
    /// Create a waypoint at the given position.
    pub fn new(position: Position, annotation: Annotation) -> Self {
        Self {
            east: position.east,
            north: position.north,
            annotation,
        }
    }

    /// Position of the waypoint.
    pub fn position(&self) -> Position {
        Position::new(self.east, self.north)
    }
}

/// A tour, either under construction or completed.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    id: String,
    title: String,
    annotation: Annotation,
    leg_annotations: Vec<Annotation>,
    waypoints: Vec<Waypoint>,
}

impl Tour {
    /// Create an empty tour.
    pub fn new(id: impl Into<String>, title: impl Into<String>, annotation: Annotation) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            annotation,
            leg_annotations: Vec::new(),
            waypoints: Vec::new(),
        }
    }

    /// Unique identifier of the tour.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Introductory narration for the whole tour.
    pub fn annotation(&self) -> &Annotation {
        &self.annotation
    }

    /// Waypoints, in order.
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Number of legs.
    pub fn leg_count(&self) -> usize {
        self.leg_annotations.len()
    }

    /// Number of waypoints.
    pub fn waypoint_count(&self) -> usize {
        self.waypoints.len()
    }

    /// Leg leading to waypoint `index`.
    pub fn leg(&self, index: usize) -> Option<&Annotation> {
        self.leg_annotations.get(index)
    }

    /// Waypoint at `index`.
    pub fn waypoint(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    /// Most recently added waypoint.
    pub fn last_waypoint(&self) -> Option<&Waypoint> {
        self.waypoints.last()
    }

    /// True if a leg has been added whose waypoint has not.
    pub fn has_pending_leg(&self) -> bool {
        self.leg_annotations.len() > self.waypoints.len()
    }

    /// True if the tour satisfies the completion invariant.
    pub fn is_complete(&self) -> bool {
        !self.waypoints.is_empty() && self.leg_annotations.len() == self.waypoints.len()
    }

    /// Append a waypoint, synthesizing a default leg if none is pending.
    ///
    /// Returns true if a default leg was added.
    pub(crate) fn push_waypoint(&mut self, waypoint: Waypoint) -> bool {
        self.waypoints.push(waypoint);
        if self.leg_annotations.len() < self.waypoints.len() {
            self.leg_annotations.push(Annotation::DEFAULT);
            return true;
        }
        false
    }

    /// Append a leg. Callers check [`Tour::has_pending_leg`] first.
    pub(crate) fn push_leg(&mut self, annotation: Annotation) {
        self.leg_annotations.push(annotation);
    }
}
