//! Coach model.
//!
//! A coach is identified by name. Its lesson list is filled in as lessons
//! are constructed with it, never assigned directly.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::LessonKey;

/// A swimming coach.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coach {
    name: String,
    lessons: Vec<LessonKey>,
}

impl Coach {
    /// Creates a coach with no lessons.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lessons: Vec::new(),
        }
    }

    /// Identity key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lessons this coach teaches, in creation order.
    pub fn lessons(&self) -> &[LessonKey] {
        &self.lessons
    }

    /// Number of lessons taught.
    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }

    /// Whether this coach teaches the given lesson.
    pub fn teaches(&self, lesson: LessonKey) -> bool {
        self.lessons.contains(&lesson)
    }

    pub(crate) fn assign(&mut self, lesson: LessonKey) {
        self.lessons.push(lesson);
    }
}

impl PartialEq for Coach {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Coach {}

impl Hash for Coach {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
