//! Narration text attached to tours, legs and waypoints.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Immutable narration text.
///
/// Annotations compare by content. [`Annotation::DEFAULT`] stands in wherever
/// the author did not provide any text, e.g. the leg synthesized when a
/// waypoint is added without a preceding leg.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Annotation(Cow<'static, str>);

impl Annotation {
    /// The "no annotation provided" value.
    pub const DEFAULT: Annotation = Annotation(Cow::Borrowed(""));

    /// Create an annotation from any string-like value.
    pub fn new(text: impl Into<String>) -> Self {
        Self(Cow::Owned(text.into()))
    }

    /// The annotation text.
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl Default for Annotation {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Annotation {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Annotation {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
