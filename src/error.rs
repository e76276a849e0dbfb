//! Error types.
//!
//! Every lifecycle operation has its own exhaustive error enum so callers
//! can match on exactly the outcomes that operation can produce.
//! [`SchoolError`] folds them together with store lookups for the
//! [`School`](crate::school::School) facade.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::Grade;

/// Fatal precondition failures of the timetable generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimetableError {
    /// No coaches were supplied.
    #[error("the list of coaches must not be empty; there should be at least one coach")]
    EmptyCoachList,
    /// The term start date does not fall on a Monday.
    #[error("term start {0} is not a Monday")]
    AnchorNotMonday(NaiveDate),
    /// The slot sequence ran past the last representable date.
    #[error("calendar exhausted while assigning lesson slots")]
    CalendarExhausted,
    /// The configured grade range is empty or leaves 1..=5.
    #[error("invalid lesson grade range {min}..={max}; grades must lie within 1..=5")]
    InvalidGradeRange { min: Grade, max: Grade },
    /// The school already holds a generated timetable.
    #[error("timetable has already been built")]
    AlreadyBuilt,
}

/// Reasons a booking is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BookError {
    /// Lesson grade is more than one above the learner's grade.
    #[error("lesson is above the learner's grade")]
    AboveGrade,
    /// Lesson grade is below the learner's grade.
    #[error("lesson is below the learner's grade")]
    BelowGrade,
    /// Learner already appears on the lesson roster.
    #[error("learner has already booked this lesson")]
    Duplicate,
    /// Active registrations have reached lesson capacity.
    #[error("lesson is fully booked")]
    Full,
}

/// Reasons an attendance is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AttendError {
    #[error("learner is not registered to this lesson")]
    NotRegistered,
    #[error("lesson has already been attended")]
    AlreadyAttended,
    #[error("review rating must be between 1 and 5")]
    InvalidRating,
    #[error("review message must not be empty")]
    EmptyMessage,
}

/// Reasons a cancellation is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CancelError {
    #[error("learner has no booking for this lesson")]
    NotRegistered,
    #[error("lesson has already been attended")]
    AlreadyAttended,
    #[error("lesson has already been cancelled")]
    AlreadyCancelled,
}

/// Reasons a learner registration is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("learner age must be between 4 and 11")]
    InvalidAge,
    #[error("learner grade must be between 0 and 5")]
    InvalidGrade,
    #[error("phone numbers must be exactly 11 digits")]
    InvalidPhoneNumber,
    /// The learner store refused the learner (e.g. an id collision).
    #[error("learner store rejected the learner")]
    StoreRejected,
}

/// Invalid filter input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("invalid filter input: {0:?}")]
    InvalidInput(String),
}

/// Store lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no learner with id {0}")]
    LearnerNotFound(u32),
    #[error("no lesson with id {0}")]
    LessonNotFound(u32),
    #[error("no coach named {0:?}")]
    CoachNotFound(String),
}

/// Errors surfaced by the [`School`](crate::school::School) facade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchoolError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("unknown lesson")]
    UnknownLesson,
    /// Lesson grade above [`MAX_GRADE`](crate::models::MAX_GRADE).
    #[error("lesson grade {0} is above the highest grade")]
    InvalidLessonGrade(Grade),
    #[error(transparent)]
    Book(#[from] BookError),
    #[error(transparent)]
    Attend(#[from] AttendError),
    #[error(transparent)]
    Cancel(#[from] CancelError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_school_error_wraps_operation_errors() {
        let e: SchoolError = BookError::Full.into();
        assert_eq!(e, SchoolError::Book(BookError::Full));
        assert_eq!(e.to_string(), "lesson is fully booked");

        let e: SchoolError = StoreError::LearnerNotFound(212).into();
        assert_eq!(e.to_string(), "no learner with id 212");
    }

    #[test]
    fn test_timetable_error_messages() {
        let monday_not = NaiveDate::from_ymd_opt(2024, 9, 3).unwrap();
        assert_eq!(
            TimetableError::AnchorNotMonday(monday_not).to_string(),
            "term start 2024-09-03 is not a Monday"
        );
        assert_eq!(
            TimetableError::InvalidGradeRange { min: 0, max: 10 }.to_string(),
            "invalid lesson grade range 0..=10; grades must lie within 1..=5"
        );
    }
}
