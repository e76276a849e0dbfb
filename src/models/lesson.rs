//! Lesson model.
//!
//! A lesson is one scheduled class: a named, graded session taught by a
//! single coach on a calendar date and time slot. It carries its own
//! roster of registered learners and the reviews left on attendance.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Coach, Grade, LearnerKey, LessonKey, Review};

/// Status of a learner's registration to a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LessonStatus {
    /// Initial state after a successful booking.
    Booked,
    /// Learner attended and left a review. Terminal.
    Attended,
    /// Booking withdrawn. Terminal.
    Cancelled,
}

impl LessonStatus {
    /// Whether the registration still occupies a place in the lesson.
    #[inline]
    pub fn is_active(self) -> bool {
        self != LessonStatus::Cancelled
    }
}

/// Hour-long time slots offered by the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    /// 2-3pm (Saturday).
    TwoToThree,
    /// 3-4pm (Saturday).
    ThreeToFour,
    /// 4-5pm (weekday).
    FourToFive,
    /// 5-6pm (weekday).
    FiveToSix,
    /// 6-7pm (weekday).
    SixToSeven,
}

impl TimeSlot {
    /// Display label, e.g. `"4-5pm"`.
    pub fn label(self) -> &'static str {
        match self {
            TimeSlot::TwoToThree => "2-3pm",
            TimeSlot::ThreeToFour => "3-4pm",
            TimeSlot::FourToFive => "4-5pm",
            TimeSlot::FiveToSix => "5-6pm",
            TimeSlot::SixToSeven => "6-7pm",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lesson-side view of one registration.
///
/// Mirrors the learner's [`RegisteredLesson`](super::RegisteredLesson);
/// the booking lifecycle updates both together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Registered learner.
    pub learner: LearnerKey,
    /// Current registration status.
    pub status: LessonStatus,
}

/// A scheduled lesson.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    key: LessonKey,
    id: Option<u32>,
    name: String,
    grade: Grade,
    coach: String,
    date: NaiveDate,
    time_slot: TimeSlot,
    roster: Vec<RosterEntry>,
    reviews: Vec<Review>,
}

impl Lesson {
    /// Creates a lesson and registers it with `coach`.
    pub fn new(
        name: impl Into<String>,
        grade: Grade,
        coach: &mut Coach,
        date: NaiveDate,
        time_slot: TimeSlot,
    ) -> Self {
        let key = LessonKey::generate();
        coach.assign(key);
        Self {
            key,
            id: None,
            name: name.into(),
            grade,
            coach: coach.name().to_string(),
            date,
            time_slot,
            roster: Vec::new(),
            reviews: Vec::new(),
        }
    }

    /// Assigns the id and returns the lesson.
    ///
    /// # Panics
    /// If an id has already been assigned.
    pub fn with_id(mut self, id: u32) -> Self {
        self.assign_id(id);
        self
    }

    /// Assigns the numeric id. Ids are write-once.
    ///
    /// # Panics
    /// If an id has already been assigned.
    pub fn assign_id(&mut self, id: u32) {
        if let Some(existing) = self.id {
            panic!("lesson id already assigned ({existing}), refusing to overwrite with {id}");
        }
        self.id = Some(id);
    }

    /// Numeric id.
    ///
    /// # Panics
    /// If no id has been assigned yet.
    pub fn id(&self) -> u32 {
        match self.id {
            Some(id) => id,
            None => panic!("lesson id not yet assigned"),
        }
    }

    /// Numeric id, or `None` before assignment.
    pub fn assigned_id(&self) -> Option<u32> {
        self.id
    }

    /// Arena key used by rosters, registrations and coaches.
    pub fn key(&self) -> LessonKey {
        self.key
    }

    /// Lesson name, e.g. `"Water Safety 3"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Swimming grade the lesson teaches.
    pub fn grade(&self) -> Grade {
        self.grade
    }

    /// Name of the teaching coach.
    pub fn coach(&self) -> &str {
        &self.coach
    }

    /// Calendar date of the lesson.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Day of the week the lesson falls on.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Time of day.
    pub fn time_slot(&self) -> TimeSlot {
        self.time_slot
    }

    /// Every registration ever made, cancelled ones included.
    pub fn roster(&self) -> &[RosterEntry] {
        &self.roster
    }

    /// Whether the learner appears on the roster, regardless of status.
    pub fn has_learner(&self, learner: LearnerKey) -> bool {
        self.roster.iter().any(|e| e.learner == learner)
    }

    /// Roster status for a learner.
    pub fn status_of(&self, learner: LearnerKey) -> Option<LessonStatus> {
        self.roster
            .iter()
            .find(|e| e.learner == learner)
            .map(|e| e.status)
    }

    /// Registrations that are not cancelled.
    pub fn active_count(&self) -> usize {
        self.roster.iter().filter(|e| e.status.is_active()).count()
    }

    /// Reviews left by attending learners.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub(crate) fn enrol(&mut self, learner: LearnerKey) {
        self.roster.push(RosterEntry {
            learner,
            status: LessonStatus::Booked,
        });
    }

    pub(crate) fn set_status(&mut self, learner: LearnerKey, status: LessonStatus) {
        if let Some(entry) = self.roster.iter_mut().find(|e| e.learner == learner) {
            entry.status = status;
        }
    }

    pub(crate) fn add_review(&mut self, review: Review) {
        self.reviews.push(review);
    }
}
