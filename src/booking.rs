//! Booking lifecycle.
//!
//! Governs a learner's registration to a lesson:
//!
//! ```text
//!            book            attend
//!   (none) ───────► Booked ─────────► Attended
//!                     │
//!                     │ cancel
//!                     ▼
//!                 Cancelled
//! ```
//!
//! Every transition updates the learner's registration and the lesson's
//! roster together. A failed operation leaves both untouched.
//!
//! # Rebooking
//!
//! The duplicate check looks at the roster regardless of status, so a
//! learner who cancelled can never book the same lesson again.

use tracing::debug;

use crate::config::DEFAULT_LESSON_CAPACITY;
use crate::error::{AttendError, BookError, CancelError};
use crate::models::{Learner, Lesson, LessonStatus, Review};

/// Supplies a review when a learner attends a lesson.
///
/// Called at most once per [`BookingLifecycle::attend`], and only after the
/// registration checks pass.
pub trait ReviewSource {
    fn provide_review(&mut self) -> Review;
}

impl<F> ReviewSource for F
where
    F: FnMut() -> Review,
{
    fn provide_review(&mut self) -> Review {
        self()
    }
}

/// Booking rule engine.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use swim_timetable::booking::BookingLifecycle;
/// use swim_timetable::models::{Coach, Learner, Lesson, LessonStatus, Review, TimeSlot};
///
/// let mut coach = Coach::new("Peter");
/// let date = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
/// let mut lesson = Lesson::new("Diving 1", 3, &mut coach, date, TimeSlot::FourToFive);
/// let mut learner = Learner::new("Ada", "Female", 8, 3);
///
/// let lifecycle = BookingLifecycle::default();
/// lifecycle.book(&mut lesson, &mut learner).unwrap();
/// lifecycle
///     .attend(&mut lesson, &mut learner, &mut || Review::new("Great!", 5))
///     .unwrap();
/// assert_eq!(learner.status_for(lesson.key()), Some(LessonStatus::Attended));
/// ```
#[derive(Debug, Clone)]
pub struct BookingLifecycle {
    capacity: usize,
}

impl Default for BookingLifecycle {
    fn default() -> Self {
        Self::new(DEFAULT_LESSON_CAPACITY)
    }
}

impl BookingLifecycle {
    /// Creates a lifecycle allowing `capacity` active registrations per lesson.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Maximum active registrations per lesson.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Books `learner` onto `lesson`.
    ///
    /// Checks, in order: grade ceiling, grade floor, duplicate, capacity.
    /// A learner may book lessons at their own grade or one above.
    pub fn book(&self, lesson: &mut Lesson, learner: &mut Learner) -> Result<(), BookError> {
        let (lesson_key, learner_key) = (lesson.key(), learner.key());
        let rejected = |err: BookError| {
            debug!(lesson = %lesson_key, learner = %learner_key, %err, "booking rejected");
            err
        };

        if lesson.grade() > learner.grade.saturating_add(1) {
            return Err(rejected(BookError::AboveGrade));
        }
        if lesson.grade() < learner.grade {
            return Err(rejected(BookError::BelowGrade));
        }
        if lesson.has_learner(learner_key) {
            return Err(rejected(BookError::Duplicate));
        }
        if lesson.roster().len() >= self.capacity && lesson.active_count() >= self.capacity {
            return Err(rejected(BookError::Full));
        }

        lesson.enrol(learner_key);
        learner.register(lesson_key);
        debug!(
            lesson = %lesson_key,
            learner = %learner_key,
            active = lesson.active_count(),
            "lesson booked"
        );
        Ok(())
    }

    /// Records attendance with a review from `reviews`.
    ///
    /// The review source is not consulted when the learner is unregistered
    /// or has already attended. On success the learner's grade rises to the
    /// lesson's grade if the lesson was higher.
    pub fn attend<S>(
        &self,
        lesson: &mut Lesson,
        learner: &mut Learner,
        reviews: &mut S,
    ) -> Result<(), AttendError>
    where
        S: ReviewSource + ?Sized,
    {
        let status = learner
            .status_for(lesson.key())
            .ok_or(AttendError::NotRegistered)?;
        if status == LessonStatus::Attended {
            return Err(AttendError::AlreadyAttended);
        }

        let review = reviews.provide_review();
        if review.message.trim().is_empty() {
            return Err(AttendError::EmptyMessage);
        }
        if !(1..=5).contains(&review.rating) {
            return Err(AttendError::InvalidRating);
        }

        if lesson.grade() > learner.grade {
            debug!(
                learner = %learner.key(),
                from = learner.grade,
                to = lesson.grade(),
                "learner promoted"
            );
            learner.grade = lesson.grade();
        }
        transition(lesson, learner, LessonStatus::Attended);
        lesson.add_review(review);
        debug!(lesson = %lesson.key(), learner = %learner.key(), "lesson attended");
        Ok(())
    }

    /// Cancels a booked registration.
    pub fn cancel(&self, lesson: &mut Lesson, learner: &mut Learner) -> Result<(), CancelError> {
        match learner.status_for(lesson.key()) {
            None => Err(CancelError::NotRegistered),
            Some(LessonStatus::Attended) => Err(CancelError::AlreadyAttended),
            Some(LessonStatus::Cancelled) => Err(CancelError::AlreadyCancelled),
            Some(LessonStatus::Booked) => {
                transition(lesson, learner, LessonStatus::Cancelled);
                debug!(lesson = %lesson.key(), learner = %learner.key(), "booking cancelled");
                Ok(())
            }
        }
    }
}

fn transition(lesson: &mut Lesson, learner: &mut Learner, status: LessonStatus) {
    learner.set_status(lesson.key(), status);
    lesson.set_status(learner.key(), status);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::cell::Cell;

    use crate::models::{Coach, Grade, TimeSlot};

    fn lesson(grade: Grade) -> Lesson {
        let mut coach = Coach::new("Peter");
        let date = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
        Lesson::new("Diving 1", grade, &mut coach, date, TimeSlot::FourToFive)
    }

    fn learner(grade: Grade) -> Learner {
        Learner::new("Ada", "Female", 8, grade)
    }

    fn good_review() -> Review {
        Review::new("Great!", 5)
    }

    fn assert_consistent(lesson: &Lesson, learner: &Learner) {
        assert_eq!(
            lesson.status_of(learner.key()),
            learner.status_for(lesson.key())
        );
    }

    // --- book ---

    #[test]
    fn test_book_same_grade() {
        let (mut ls, mut lr) = (lesson(3), learner(3));
        assert_eq!(BookingLifecycle::default().book(&mut ls, &mut lr), Ok(()));
        assert_eq!(lr.status_for(ls.key()), Some(LessonStatus::Booked));
        assert!(ls.has_learner(lr.key()));
        assert_consistent(&ls, &lr);
    }

    #[test]
    fn test_book_one_grade_above() {
        let (mut ls, mut lr) = (lesson(4), learner(3));
        assert_eq!(BookingLifecycle::default().book(&mut ls, &mut lr), Ok(()));
    }

    #[test]
    fn test_book_two_grades_above() {
        let (mut ls, mut lr) = (lesson(5), learner(3));
        assert_eq!(
            BookingLifecycle::default().book(&mut ls, &mut lr),
            Err(BookError::AboveGrade)
        );
        assert!(lr.registrations().is_empty());
        assert!(ls.roster().is_empty());
    }

    #[test]
    fn test_book_below_grade() {
        let (mut ls, mut lr) = (lesson(2), learner(3));
        assert_eq!(
            BookingLifecycle::default().book(&mut ls, &mut lr),
            Err(BookError::BelowGrade)
        );
    }

    #[test]
    fn test_book_grade_zero_learner() {
        let lifecycle = BookingLifecycle::default();
        assert_eq!(lifecycle.book(&mut lesson(1), &mut learner(0)), Ok(()));
        assert_eq!(
            lifecycle.book(&mut lesson(2), &mut learner(0)),
            Err(BookError::AboveGrade)
        );
    }

    #[test]
    fn test_book_duplicate() {
        let lifecycle = BookingLifecycle::default();
        let (mut ls, mut lr) = (lesson(3), learner(3));
        lifecycle.book(&mut ls, &mut lr).unwrap();
        assert_eq!(lifecycle.book(&mut ls, &mut lr), Err(BookError::Duplicate));
        assert_eq!(lr.registrations().len(), 1);
        assert_eq!(ls.roster().len(), 1);
    }

    #[test]
    fn test_book_full_after_four() {
        let lifecycle = BookingLifecycle::default();
        let mut ls = lesson(3);
        for _ in 0..4 {
            lifecycle.book(&mut ls, &mut learner(3)).unwrap();
        }
        assert_eq!(
            lifecycle.book(&mut ls, &mut learner(3)),
            Err(BookError::Full)
        );
        assert_eq!(ls.roster().len(), 4);
    }

    #[test]
    fn test_cancellation_frees_place_for_new_learner() {
        let lifecycle = BookingLifecycle::default();
        let mut ls = lesson(3);
        let mut first = learner(3);
        lifecycle.book(&mut ls, &mut first).unwrap();
        for _ in 0..3 {
            lifecycle.book(&mut ls, &mut learner(3)).unwrap();
        }
        lifecycle.cancel(&mut ls, &mut first).unwrap();

        let mut newcomer = learner(3);
        assert_eq!(lifecycle.book(&mut ls, &mut newcomer), Ok(()));
        assert_eq!(ls.roster().len(), 5);
        assert_eq!(ls.active_count(), 4);

        assert_eq!(
            lifecycle.book(&mut ls, &mut learner(3)),
            Err(BookError::Full)
        );
    }

    // Cancelled learners stay on the roster, so rebooking the same lesson
    // reports a duplicate even when places are free.
    #[test]
    fn test_rebooking_after_cancel_is_duplicate() {
        let lifecycle = BookingLifecycle::default();
        let (mut ls, mut lr) = (lesson(3), learner(3));
        lifecycle.book(&mut ls, &mut lr).unwrap();
        lifecycle.cancel(&mut ls, &mut lr).unwrap();

        assert_eq!(ls.active_count(), 0);
        assert_eq!(lifecycle.book(&mut ls, &mut lr), Err(BookError::Duplicate));
        assert_eq!(lr.status_for(ls.key()), Some(LessonStatus::Cancelled));
    }

    #[test]
    fn test_custom_capacity() {
        let lifecycle = BookingLifecycle::new(1);
        let mut ls = lesson(3);
        lifecycle.book(&mut ls, &mut learner(3)).unwrap();
        assert_eq!(
            lifecycle.book(&mut ls, &mut learner(3)),
            Err(BookError::Full)
        );
        assert_eq!(lifecycle.capacity(), 1);
    }

    // --- attend ---

    #[test]
    fn test_attend_unregistered_skips_review() {
        let calls = Cell::new(0);
        let (mut ls, mut lr) = (lesson(3), learner(3));
        let result = BookingLifecycle::default().attend(&mut ls, &mut lr, &mut || {
            calls.set(calls.get() + 1);
            good_review()
        });
        assert_eq!(result, Err(AttendError::NotRegistered));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_attend_twice_skips_review() {
        let lifecycle = BookingLifecycle::default();
        let (mut ls, mut lr) = (lesson(3), learner(3));
        lifecycle.book(&mut ls, &mut lr).unwrap();
        lifecycle.attend(&mut ls, &mut lr, &mut good_review).unwrap();

        let calls = Cell::new(0);
        let result = lifecycle.attend(&mut ls, &mut lr, &mut || {
            calls.set(calls.get() + 1);
            good_review()
        });
        assert_eq!(result, Err(AttendError::AlreadyAttended));
        assert_eq!(calls.get(), 0);
        assert_eq!(ls.reviews().len(), 1);
    }

    #[test]
    fn test_attend_invalid_reviews_leave_state_unchanged() {
        let cases = [
            (Review::new("ok", 0), AttendError::InvalidRating),
            (Review::new("ok", 6), AttendError::InvalidRating),
            (Review::new("ok", -3), AttendError::InvalidRating),
            (Review::new("", 4), AttendError::EmptyMessage),
            (Review::new("   ", 4), AttendError::EmptyMessage),
            (Review::new("", 9), AttendError::EmptyMessage),
        ];
        for (review, expected) in cases {
            let lifecycle = BookingLifecycle::default();
            let (mut ls, mut lr) = (lesson(4), learner(3));
            lifecycle.book(&mut ls, &mut lr).unwrap();

            let calls = Cell::new(0);
            let result = lifecycle.attend(&mut ls, &mut lr, &mut || {
                calls.set(calls.get() + 1);
                review.clone()
            });
            assert_eq!(result, Err(expected));
            assert_eq!(calls.get(), 1);
            assert_eq!(lr.status_for(ls.key()), Some(LessonStatus::Booked));
            assert_eq!(lr.grade, 3);
            assert!(ls.reviews().is_empty());
            assert_consistent(&ls, &lr);
        }
    }

    #[test]
    fn test_attend_boundary_ratings() {
        for rating in [1, 5] {
            let lifecycle = BookingLifecycle::default();
            let (mut ls, mut lr) = (lesson(3), learner(3));
            lifecycle.book(&mut ls, &mut lr).unwrap();
            assert_eq!(
                lifecycle.attend(&mut ls, &mut lr, &mut || Review::new("fine", rating)),
                Ok(())
            );
        }
    }

    #[test]
    fn test_attend_higher_grade_promotes() {
        let lifecycle = BookingLifecycle::default();
        let (mut ls, mut lr) = (lesson(4), learner(3));
        lifecycle.book(&mut ls, &mut lr).unwrap();
        lifecycle.attend(&mut ls, &mut lr, &mut good_review).unwrap();

        assert_eq!(lr.grade, 4);
        assert_eq!(lr.status_for(ls.key()), Some(LessonStatus::Attended));
        assert_eq!(ls.reviews(), &[good_review()]);
        assert_consistent(&ls, &lr);
    }

    #[test]
    fn test_attend_same_grade_keeps_grade() {
        let lifecycle = BookingLifecycle::default();
        let (mut ls, mut lr) = (lesson(3), learner(3));
        lifecycle.book(&mut ls, &mut lr).unwrap();
        lifecycle.attend(&mut ls, &mut lr, &mut good_review).unwrap();
        assert_eq!(lr.grade, 3);
    }

    #[test]
    fn test_attend_never_lowers_grade() {
        let lifecycle = BookingLifecycle::default();
        let (mut ls, mut lr) = (lesson(3), learner(3));
        lifecycle.book(&mut ls, &mut lr).unwrap();
        lr.grade = 4;
        lifecycle.attend(&mut ls, &mut lr, &mut good_review).unwrap();
        assert_eq!(lr.grade, 4);
    }

    #[test]
    fn test_attend_after_cancel_is_allowed() {
        let lifecycle = BookingLifecycle::default();
        let (mut ls, mut lr) = (lesson(3), learner(3));
        lifecycle.book(&mut ls, &mut lr).unwrap();
        lifecycle.cancel(&mut ls, &mut lr).unwrap();
        assert_eq!(lifecycle.attend(&mut ls, &mut lr, &mut good_review), Ok(()));
        assert_eq!(ls.status_of(lr.key()), Some(LessonStatus::Attended));
    }

    struct Scripted(Vec<Review>);

    impl ReviewSource for Scripted {
        fn provide_review(&mut self) -> Review {
            self.0.remove(0)
        }
    }

    #[test]
    fn test_review_source_trait_object() {
        let lifecycle = BookingLifecycle::default();
        let (mut ls, mut lr) = (lesson(3), learner(3));
        lifecycle.book(&mut ls, &mut lr).unwrap();

        let mut source = Scripted(vec![Review::new("", 3), Review::new("Lovely", 4)]);
        assert_eq!(
            lifecycle.attend(&mut ls, &mut lr, &mut source),
            Err(AttendError::EmptyMessage)
        );
        assert_eq!(lifecycle.attend(&mut ls, &mut lr, &mut source), Ok(()));
        assert!(source.0.is_empty());
        assert_eq!(ls.reviews()[0].message, "Lovely");
    }

    // --- cancel ---

    #[test]
    fn test_cancel_booked() {
        let lifecycle = BookingLifecycle::default();
        let (mut ls, mut lr) = (lesson(3), learner(3));
        lifecycle.book(&mut ls, &mut lr).unwrap();
        assert_eq!(lifecycle.cancel(&mut ls, &mut lr), Ok(()));
        assert_eq!(lr.status_for(ls.key()), Some(LessonStatus::Cancelled));
        assert_consistent(&ls, &lr);
    }

    #[test]
    fn test_cancel_attended() {
        let lifecycle = BookingLifecycle::default();
        let (mut ls, mut lr) = (lesson(3), learner(3));
        lifecycle.book(&mut ls, &mut lr).unwrap();
        lifecycle.attend(&mut ls, &mut lr, &mut good_review).unwrap();
        assert_eq!(
            lifecycle.cancel(&mut ls, &mut lr),
            Err(CancelError::AlreadyAttended)
        );
    }

    #[test]
    fn test_cancel_twice() {
        let lifecycle = BookingLifecycle::default();
        let (mut ls, mut lr) = (lesson(3), learner(3));
        lifecycle.book(&mut ls, &mut lr).unwrap();
        lifecycle.cancel(&mut ls, &mut lr).unwrap();
        assert_eq!(
            lifecycle.cancel(&mut ls, &mut lr),
            Err(CancelError::AlreadyCancelled)
        );
    }

    #[test]
    fn test_cancel_unregistered() {
        assert_eq!(
            BookingLifecycle::default().cancel(&mut lesson(3), &mut learner(3)),
            Err(CancelError::NotRegistered)
        );
    }
}
