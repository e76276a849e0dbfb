//! Learner model.

use serde::{Deserialize, Serialize};

use super::{Grade, LearnerKey, LessonKey, LessonStatus};

/// Learner-side record of one booking.
///
/// This is the booking state machine instance: one per (learner, lesson).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredLesson {
    /// Booked lesson.
    pub lesson: LessonKey,
    /// Current status.
    pub status: LessonStatus,
}

/// A swimming learner.
///
/// Contact and profile fields are plain data. The id and the registration
/// list are guarded: the id is write-once and registrations change only
/// through the booking lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Learner {
    key: LearnerKey,
    id: Option<u32>,
    pub name: String,
    pub gender: String,
    /// Age in years (4–11 when registering).
    pub age: u8,
    /// Current grade (0–5). Raised by attending a higher-grade lesson.
    pub grade: Grade,
    pub phone_number: String,
    pub emergency_contact_number: String,
    registrations: Vec<RegisteredLesson>,
}

impl Learner {
    /// Creates an unregistered learner.
    pub fn new(name: impl Into<String>, gender: impl Into<String>, age: u8, grade: Grade) -> Self {
        Self {
            key: LearnerKey::generate(),
            id: None,
            name: name.into(),
            gender: gender.into(),
            age,
            grade,
            phone_number: String::new(),
            emergency_contact_number: String::new(),
            registrations: Vec::new(),
        }
    }

    /// Sets both contact numbers.
    pub fn with_contacts(
        mut self,
        phone_number: impl Into<String>,
        emergency_contact_number: impl Into<String>,
    ) -> Self {
        self.phone_number = phone_number.into();
        self.emergency_contact_number = emergency_contact_number.into();
        self
    }

    /// Assigns the id and returns the learner.
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
            panic!("learner id already assigned ({existing}), refusing to overwrite with {id}");
        }
        self.id = Some(id);
    }

    /// Numeric id.
    ///
    /// # Panics
    /// If the learner has not been registered yet.
    pub fn id(&self) -> u32 {
        match self.id {
            Some(id) => id,
            None => panic!("learner id not yet assigned"),
        }
    }

    /// Numeric id, or `None` before registration.
    pub fn assigned_id(&self) -> Option<u32> {
        self.id
    }

    /// Arena key used by lesson rosters.
    pub fn key(&self) -> LearnerKey {
        self.key
    }

    /// Every registration, in booking order.
    pub fn registrations(&self) -> &[RegisteredLesson] {
        &self.registrations
    }

    /// Whether any registration exists for the lesson.
    pub fn has_registration(&self, lesson: LessonKey) -> bool {
        self.registrations.iter().any(|r| r.lesson == lesson)
    }

    /// Status of the registration for the lesson.
    pub fn status_for(&self, lesson: LessonKey) -> Option<LessonStatus> {
        self.registrations
            .iter()
            .find(|r| r.lesson == lesson)
            .map(|r| r.status)
    }

    /// Lessons currently in the given status.
    pub fn lessons_with_status(&self, status: LessonStatus) -> Vec<LessonKey> {
        self.registrations
            .iter()
            .filter(|r| r.status == status)
            .map(|r| r.lesson)
            .collect()
    }

    pub(crate) fn register(&mut self, lesson: LessonKey) {
        self.registrations.push(RegisteredLesson {
            lesson,
            status: LessonStatus::Booked,
        });
    }

    pub(crate) fn set_status(&mut self, lesson: LessonKey, status: LessonStatus) {
        if let Some(reg) = self.registrations.iter_mut().find(|r| r.lesson == lesson) {
            reg.status = status;
        }
    }
}
