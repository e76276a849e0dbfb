//! Arena keys.
//!
//! Numeric ids are short, human-facing and may collide, so stores and
//! relations use these opaque keys instead.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable handle to a [`Lesson`](super::Lesson).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LessonKey(Uuid);

/// Stable handle to a [`Learner`](super::Learner).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LearnerKey(Uuid);

impl LessonKey {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl LearnerKey {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for LessonKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lesson:{}", self.0)
    }
}

impl fmt::Display for LearnerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "learner:{}", self.0)
    }
}
