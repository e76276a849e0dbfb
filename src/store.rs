//! Entity stores.
//!
//! The booking core only needs list/add/lookup operations, expressed here
//! as traits. In-memory implementations back the [`School`](crate::school::School)
//! facade and tests.

use crate::error::StoreError;
use crate::models::{Coach, Learner, LearnerKey, Lesson, LessonKey};

/// Holds generated lessons.
pub trait LessonStore {
    fn add_lesson(&mut self, lesson: Lesson);
    fn all_lessons(&self) -> &[Lesson];
    fn lesson(&self, key: LessonKey) -> Option<&Lesson>;
    fn lesson_mut(&mut self, key: LessonKey) -> Option<&mut Lesson>;

    /// First lesson with the given numeric id.
    fn find_by_id(&self, id: u32) -> Result<&Lesson, StoreError> {
        self.all_lessons()
            .iter()
            .find(|l| l.assigned_id() == Some(id))
            .ok_or(StoreError::LessonNotFound(id))
    }
}

/// Holds registered learners.
pub trait LearnerStore {
    /// Adds a learner. Returns `false` if the learner was refused.
    fn add_learner(&mut self, learner: Learner) -> bool;
    fn all_learners(&self) -> &[Learner];
    fn find_by_id(&self, id: u32) -> Result<&Learner, StoreError>;
    fn find_by_id_mut(&mut self, id: u32) -> Result<&mut Learner, StoreError>;
    fn learner(&self, key: LearnerKey) -> Option<&Learner>;
}

/// Holds coaches, keyed by name.
pub trait CoachStore {
    fn add_coach(&mut self, coach: Coach);
    fn all_coaches(&self) -> &[Coach];
    fn all_coaches_mut(&mut self) -> &mut [Coach];
    fn coach(&self, name: &str) -> Option<&Coach>;
    fn coach_mut(&mut self, name: &str) -> Option<&mut Coach>;
}

/// Vec-backed [`LessonStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryLessonStore {
    lessons: Vec<Lesson>,
}

impl InMemoryLessonStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored lessons.
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    /// Whether no lessons are stored.
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

impl LessonStore for InMemoryLessonStore {
    fn add_lesson(&mut self, lesson: Lesson) {
        self.lessons.push(lesson);
    }

    fn all_lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    fn lesson(&self, key: LessonKey) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.key() == key)
    }

    fn lesson_mut(&mut self, key: LessonKey) -> Option<&mut Lesson> {
        self.lessons.iter_mut().find(|l| l.key() == key)
    }
}

/// Vec-backed [`LearnerStore`].
///
/// Refuses learners without an id and learners whose id is already taken.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLearnerStore {
    learners: Vec<Learner>,
}

impl InMemoryLearnerStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored learners.
    pub fn len(&self) -> usize {
        self.learners.len()
    }

    /// Whether no learners are stored.
    pub fn is_empty(&self) -> bool {
        self.learners.is_empty()
    }
}

impl LearnerStore for InMemoryLearnerStore {
    fn add_learner(&mut self, learner: Learner) -> bool {
        let Some(id) = learner.assigned_id() else {
            return false;
        };
        if self.learners.iter().any(|l| l.assigned_id() == Some(id)) {
            return false;
        }
        self.learners.push(learner);
        true
    }

    fn all_learners(&self) -> &[Learner] {
        &self.learners
    }

    fn find_by_id(&self, id: u32) -> Result<&Learner, StoreError> {
        self.learners
            .iter()
            .find(|l| l.assigned_id() == Some(id))
            .ok_or(StoreError::LearnerNotFound(id))
    }

    fn find_by_id_mut(&mut self, id: u32) -> Result<&mut Learner, StoreError> {
        self.learners
            .iter_mut()
            .find(|l| l.assigned_id() == Some(id))
            .ok_or(StoreError::LearnerNotFound(id))
    }

    fn learner(&self, key: LearnerKey) -> Option<&Learner> {
        self.learners.iter().find(|l| l.key() == key)
    }
}

/// Vec-backed [`CoachStore`]. Later coaches with a known name are ignored.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCoachStore {
    coaches: Vec<Coach>,
}

impl InMemoryCoachStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CoachStore for InMemoryCoachStore {
    fn add_coach(&mut self, coach: Coach) {
        if !self.coaches.contains(&coach) {
            self.coaches.push(coach);
        }
    }

    fn all_coaches(&self) -> &[Coach] {
        &self.coaches
    }

    fn all_coaches_mut(&mut self) -> &mut [Coach] {
        &mut self.coaches
    }

    fn coach(&self, name: &str) -> Option<&Coach> {
        self.coaches.iter().find(|c| c.name() == name)
    }

    fn coach_mut(&mut self, name: &str) -> Option<&mut Coach> {
        self.coaches.iter_mut().find(|c| c.name() == name)
    }
}
