//! Display output produced by the controller.
//!
//! Chunks are the contract with the presentation layer: each describes one
//! unit of content to render for the current session state. They carry no
//! rendering decisions of their own.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::annotation::Annotation;

/// Id and title of a tour, as listed in the overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourSummary {
    pub id: String,
    pub title: String,
}

impl TourSummary {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// One unit of display output.
///
/// Equality is structural, except that [`Chunk::FollowBearing`] compares its
/// bearing and distance rounded to whole degrees and whole distance units.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Chunk {
    /// Progress of the tour being authored.
    CreateHeader {
        title: String,
        leg_count: usize,
        waypoint_count: usize,
    },

    /// All known tours.
    BrowseOverview { tours: Vec<TourSummary> },

    /// A single tour selected for inspection.
    BrowseDetails {
        id: String,
        title: String,
        annotation: Annotation,
    },

    /// Progress of the tour being followed.
    FollowHeader {
        title: String,
        stage: usize,
        waypoint_count: usize,
    },

    /// Narration of the waypoint just reached.
    FollowWaypoint { annotation: Annotation },

    /// Narration for the leg toward the next waypoint.
    FollowLeg { annotation: Annotation },

    /// Direction and distance to the next waypoint.
    FollowBearing { bearing: f64, distance: f64 },
}

impl Chunk {
    /// Short variant name, for logs and text rendering.
    pub fn kind(&self) -> &'static str {
        match self {
            Chunk::CreateHeader { .. } => "CreateHeader",
            Chunk::BrowseOverview { .. } => "BrowseOverview",
            Chunk::BrowseDetails { .. } => "BrowseDetails",
            Chunk::FollowHeader { .. } => "FollowHeader",
            Chunk::FollowWaypoint { .. } => "FollowWaypoint",
            Chunk::FollowLeg { .. } => "FollowLeg",
            Chunk::FollowBearing { .. } => "FollowBearing",
        }
    }
}

impl PartialEq for Chunk {
    fn eq(&self, other: &Self) -> bool {
        use Chunk::*;

        match (self, other) {
            (
                CreateHeader {
                    title: t1,
                    leg_count: l1,
                    waypoint_count: w1,
                },
                CreateHeader {
                    title: t2,
                    leg_count: l2,
                    waypoint_count: w2,
                },
            ) => t1 == t2 && l1 == l2 && w1 == w2,
            (BrowseOverview { tours: a }, BrowseOverview { tours: b }) => a == b,
            (
                BrowseDetails {
                    id: i1,
                    title: t1,
                    annotation: a1,
                },
                BrowseDetails {
                    id: i2,
                    title: t2,
                    annotation: a2,
                },
            ) => i1 == i2 && t1 == t2 && a1 == a2,
            (
                FollowHeader {
                    title: t1,
                    stage: s1,
                    waypoint_count: w1,
                },
                FollowHeader {
                    title: t2,
                    stage: s2,
                    waypoint_count: w2,
                },
            ) => t1 == t2 && s1 == s2 && w1 == w2,
            (FollowWaypoint { annotation: a }, FollowWaypoint { annotation: b }) => a == b,
            (FollowLeg { annotation: a }, FollowLeg { annotation: b }) => a == b,
            (
                FollowBearing {
                    bearing: b1,
                    distance: d1,
                },
                FollowBearing {
                    bearing: b2,
                    distance: d2,
                },
            ) => whole_degrees(*b1) == whole_degrees(*b2) && d1.round() == d2.round(),
            _ => false,
        }
    }
}

/// Bearing rounded to a whole degree, wrapping 360 back to 0.
fn whole_degrees(bearing: f64) -> f64 {
    // Adding zero turns -0.0 into 0.0
    bearing.round().rem_euclid(360.0) + 0.0
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chunk::CreateHeader {
                title,
                leg_count,
                waypoint_count,
            } => write!(
                f,
                "Creating \"{}\": {} legs, {} waypoints",
                title, leg_count, waypoint_count
            ),
            Chunk::BrowseOverview { tours } => {
                write!(f, "{} tours", tours.len())?;
                for tour in tours {
                    write!(f, "\n  {}  {}", tour.id, tour.title)?;
                }
                Ok(())
            }
            Chunk::BrowseDetails {
                id,
                title,
                annotation,
            } => write!(f, "Tour {}: {}\n{}", id, title, annotation),
            Chunk::FollowHeader {
                title,
                stage,
                waypoint_count,
            } => write!(
                f,
                "Following \"{}\": stage {} of {}",
                title, stage, waypoint_count
            ),
            Chunk::FollowWaypoint { annotation } => write!(f, "Arrived: {}", annotation),
            Chunk::FollowLeg { annotation } => write!(f, "Next leg: {}", annotation),
            Chunk::FollowBearing { bearing, distance } => {
                write!(
                    f,
                    "Head {}° for {}",
                    whole_degrees(*bearing),
                    distance.round()
                )
            }
        }
    }
}
