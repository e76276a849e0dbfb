//! Reviews and ratings.

use serde::{Deserialize, Serialize};

/// A learner's review of a lesson, left on attendance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Free-text message. Must not be blank.
    pub message: String,
    /// Rating, valid range 1–5.
    pub rating: i32,
}

impl Review {
    /// Creates a review. The rating is checked at attendance time.
    pub fn new(message: impl Into<String>, rating: i32) -> Self {
        Self {
            message: message.into(),
            rating,
        }
    }
}

/// An aggregated rating that may not exist yet.
///
/// `Rating::NONE` means nothing has been rated; `Rating::of(0.0)` is a real
/// rating of zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating(Option<f64>);

impl Rating {
    /// No rating yet.
    pub const NONE: Rating = Rating(None);

    /// A present rating.
    pub fn of(value: f64) -> Self {
        Self(Some(value))
    }

    /// Whether a rating is present.
    pub fn has_rating(&self) -> bool {
        self.0.is_some()
    }

    /// Rating value, `None` when nothing has been rated.
    pub fn value(&self) -> Option<f64> {
        self.0
    }
}
