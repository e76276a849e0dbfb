//! Swimming-school domain models.
//!
//! Provides the entities the timetable generator produces and the booking
//! lifecycle operates on. Relations between entities are id references,
//! never shared pointers:
//!
//! | Relation | Held by | Reference |
//! |----------|---------|-----------|
//! | Lesson → Coach | `Lesson::coach` | coach name |
//! | Coach → Lessons | `Coach::lessons` | [`LessonKey`] |
//! | Lesson → Learners | `Lesson::roster` | [`LearnerKey`] + status |
//! | Learner → Lessons | `Learner::registrations` | [`LessonKey`] + status |
//!
//! Both halves of a relation are updated by the operation that creates or
//! changes it.

mod coach;
mod keys;
mod learner;
mod lesson;
mod review;

pub use coach::Coach;
pub use keys::{LearnerKey, LessonKey};
pub use learner::{Learner, RegisteredLesson};
pub use lesson::{Lesson, LessonStatus, RosterEntry, TimeSlot};
pub use review::{Rating, Review};

/// Swimming grade. Learners hold 0–5; generated lessons hold 1–5.
pub type Grade = u8;

/// Highest grade a learner or lesson can hold.
pub const MAX_GRADE: Grade = 5;
