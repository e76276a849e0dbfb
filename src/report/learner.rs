//! Per-learner report.

use serde::Serialize;

use crate::models::{Grade, Learner, LessonKey, LessonStatus};

/// Booking summary for one learner.
#[derive(Debug, Clone, Serialize)]
pub struct LearnerReport {
    pub learner_name: String,
    pub learner_age: u8,
    pub learner_gender: String,
    pub current_grade: Grade,
    /// All registrations, whatever their status.
    pub total_registered_lessons: usize,
    pub booked_lessons: Vec<LessonKey>,
    pub attended_lessons: Vec<LessonKey>,
    pub cancelled_lessons: Vec<LessonKey>,
}

impl LearnerReport {
    /// Builds the report from the learner's registrations.
    pub fn calculate(learner: &Learner) -> Self {
        Self {
            learner_name: learner.name.clone(),
            learner_age: learner.age,
            learner_gender: learner.gender.clone(),
            current_grade: learner.grade,
            total_registered_lessons: learner.registrations().len(),
            booked_lessons: learner.lessons_with_status(LessonStatus::Booked),
            attended_lessons: learner.lessons_with_status(LessonStatus::Attended),
            cancelled_lessons: learner.lessons_with_status(LessonStatus::Cancelled),
        }
    }
}
