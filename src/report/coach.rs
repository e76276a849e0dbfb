//! Per-coach report.

use serde::Serialize;

use super::{average_rating, average_review_rating};
use crate::models::{Coach, Lesson, LessonKey, Rating};

/// Teaching summary for one coach.
#[derive(Debug, Clone, Serialize)]
pub struct CoachReport {
    pub coach_name: String,
    /// Number of lessons assigned to the coach.
    pub lessons_taught: usize,
    /// Assigned lessons, in assignment order.
    pub lessons: Vec<LessonKey>,
    /// Mean of the rated lessons' averages.
    pub average_rating: Rating,
    /// Average review rating of each assigned lesson.
    pub rating_per_lesson: Vec<(LessonKey, Rating)>,
}

impl CoachReport {
    /// Builds the report from the coach and the lessons it may reference.
    ///
    /// Lesson keys not found in `lessons` are reported with
    /// [`Rating::NONE`].
    pub fn calculate(coach: &Coach, lessons: &[Lesson]) -> Self {
        let rating_per_lesson: Vec<(LessonKey, Rating)> = coach
            .lessons()
            .iter()
            .map(|&key| {
                let rating = lessons
                    .iter()
                    .find(|l| l.key() == key)
                    .map(|l| average_review_rating(l.reviews()))
                    .unwrap_or(Rating::NONE);
                (key, rating)
            })
            .collect();

        let ratings: Vec<Rating> = rating_per_lesson.iter().map(|(_, r)| *r).collect();

        Self {
            coach_name: coach.name().to_string(),
            lessons_taught: coach.lesson_count(),
            lessons: coach.lessons().to_vec(),
            average_rating: average_rating(&ratings),
            rating_per_lesson,
        }
    }

    /// Rating of one lesson, if the coach teaches it.
    pub fn rating_for(&self, lesson: LessonKey) -> Option<Rating> {
        self.rating_per_lesson
            .iter()
            .find(|(key, _)| *key == lesson)
            .map(|(_, rating)| *rating)
    }
}
