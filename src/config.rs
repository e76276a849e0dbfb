//! School configuration.
//!
//! All settings have defaults, and partial documents deserialize with the
//! remaining fields defaulted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TimetableError;
use crate::models::{Grade, MAX_GRADE};

/// Default lesson-name catalogue.
pub const DEFAULT_LESSON_TEMPLATES: [&str; 9] = [
    "Water Safety",
    "Backstroke Training",
    "Sidestroke Training",
    "Freestyle Training",
    "Butterfly Technique",
    "Breaststroke Technique",
    "Open Water Endurance",
    "Diving Fundamentals",
    "Synchronized Swimming",
];

/// Default active registrations per lesson.
pub const DEFAULT_LESSON_CAPACITY: usize = 4;

/// Timetable generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableConfig {
    /// First day of term. Must be a Monday.
    pub term_start: NaiveDate,
    /// Lesson-name templates; each is offered once per grade.
    pub lesson_templates: Vec<String>,
    /// Lowest generated grade (inclusive).
    pub min_grade: Grade,
    /// Highest generated grade (inclusive).
    pub max_grade: Grade,
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self {
            term_start: NaiveDate::from_ymd_opt(2024, 9, 2).expect("constant date is valid"),
            lesson_templates: DEFAULT_LESSON_TEMPLATES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            min_grade: 1,
            max_grade: 5,
        }
    }
}

impl TimetableConfig {
    /// Sets the term start date.
    pub fn with_term_start(mut self, term_start: NaiveDate) -> Self {
        self.term_start = term_start;
        self
    }

    /// Replaces the lesson catalogue.
    pub fn with_templates<I, S>(mut self, templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lesson_templates = templates.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the generated grade range.
    pub fn with_grades(mut self, min_grade: Grade, max_grade: Grade) -> Self {
        self.min_grade = min_grade;
        self.max_grade = max_grade;
        self
    }

    /// Checks that the grade range is non-empty and within `1..=MAX_GRADE`.
    pub fn check_grades(&self) -> Result<(), TimetableError> {
        if self.min_grade == 0 || self.max_grade > MAX_GRADE || self.min_grade > self.max_grade {
            return Err(TimetableError::InvalidGradeRange {
                min: self.min_grade,
                max: self.max_grade,
            });
        }
        Ok(())
    }

    /// Number of (template, grade) pre-slots this configuration yields.
    pub fn pre_slot_count(&self) -> usize {
        let grades = if self.max_grade >= self.min_grade {
            usize::from(self.max_grade - self.min_grade) + 1
        } else {
            0
        };
        self.lesson_templates.len() * grades
    }
}

/// Top-level settings for a [`School`](crate::school::School).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchoolConfig {
    pub timetable: TimetableConfig,
    /// Maximum active registrations per lesson.
    pub lesson_capacity: usize,
}

impl Default for SchoolConfig {
    fn default() -> Self {
        Self {
            timetable: TimetableConfig::default(),
            lesson_capacity: DEFAULT_LESSON_CAPACITY,
        }
    }
}

impl SchoolConfig {
    /// Replaces the timetable settings.
    pub fn with_timetable(mut self, timetable: TimetableConfig) -> Self {
        self.timetable = timetable;
        self
    }

    /// Sets the lesson capacity.
    pub fn with_lesson_capacity(mut self, capacity: usize) -> Self {
        self.lesson_capacity = capacity;
        self
    }
}
