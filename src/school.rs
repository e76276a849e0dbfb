//! School facade.
//!
//! Wires the stores, the timetable builder and the booking lifecycle into
//! the usual flow: add coaches, build the term timetable once, register
//! learners, then book, attend and cancel by lesson key and learner id.

use chrono::NaiveDate;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::booking::{BookingLifecycle, ReviewSource};
use crate::config::SchoolConfig;
use crate::error::{
    FilterError, RegistrationError, SchoolError, StoreError, TimetableError,
};
use crate::filter;
use crate::ids::{IdAllocator, IdKind};
use crate::models::{Coach, Grade, Learner, Lesson, LessonKey, TimeSlot, MAX_GRADE};
use crate::registration;
use crate::report::{CoachReport, LearnerReport};
use crate::store::{
    CoachStore, InMemoryCoachStore, InMemoryLearnerStore, InMemoryLessonStore, LearnerStore,
    LessonStore,
};
use crate::timetable::TimetableBuilder;

/// A swimming school's timetable and bookings.
///
/// # Example
///
/// ```
/// use swim_timetable::config::SchoolConfig;
/// use swim_timetable::models::{Learner, Review};
/// use swim_timetable::school::School;
///
/// let mut school = School::seeded(SchoolConfig::default(), 42);
/// school.add_coach("Peter");
/// school.add_coach("Sandra");
/// school.build_timetable().unwrap();
///
/// let learner = Learner::new("Ada", "Female", 8, 2)
///     .with_contacts("07123456789", "07987654321");
/// let id = school.register_learner(learner).unwrap();
///
/// let lesson = school.lessons_for_grade(2).unwrap()[0].key();
/// school.book(lesson, id).unwrap();
/// school.attend(lesson, id, &mut || Review::new("Fun", 5)).unwrap();
/// ```
#[derive(Debug)]
pub struct School<R = SmallRng> {
    config: SchoolConfig,
    lessons: InMemoryLessonStore,
    learners: InMemoryLearnerStore,
    coaches: InMemoryCoachStore,
    lifecycle: BookingLifecycle,
    ids: IdAllocator<R>,
    shuffle_rng: R,
    timetable_built: bool,
}

impl School<SmallRng> {
    /// School with OS-seeded randomness.
    pub fn new(config: SchoolConfig) -> Self {
        Self::with_rngs(
            config,
            SmallRng::from_os_rng(),
            IdAllocator::from_os_rng(),
        )
    }

    /// Deterministic school: the same seed gives the same timetable and ids.
    pub fn seeded(config: SchoolConfig, seed: u64) -> Self {
        Self::with_rngs(
            config,
            SmallRng::seed_from_u64(seed),
            IdAllocator::seeded(seed.wrapping_add(1)),
        )
    }
}

impl<R: Rng> School<R> {
    /// School with explicit random sources for shuffling and ids.
    pub fn with_rngs(config: SchoolConfig, shuffle_rng: R, ids: IdAllocator<R>) -> Self {
        Self {
            lifecycle: BookingLifecycle::new(config.lesson_capacity),
            config,
            lessons: InMemoryLessonStore::new(),
            learners: InMemoryLearnerStore::new(),
            coaches: InMemoryCoachStore::new(),
            ids,
            shuffle_rng,
            timetable_built: false,
        }
    }

    /// Settings the school was created with.
    pub fn config(&self) -> &SchoolConfig {
        &self.config
    }

    // --- coaches & lessons ---

    /// Adds a coach. Names already known are ignored.
    pub fn add_coach(&mut self, name: impl Into<String>) {
        self.coaches.add_coach(Coach::new(name));
    }

    /// Coaches in the order they were added.
    pub fn coaches(&self) -> &[Coach] {
        self.coaches.all_coaches()
    }

    /// Generates the term timetable over the current coaches and stores it.
    ///
    /// Returns the number of lessons created. A school builds its timetable
    /// once; later calls fail with [`TimetableError::AlreadyBuilt`].
    pub fn build_timetable(&mut self) -> Result<usize, TimetableError> {
        if self.timetable_built {
            return Err(TimetableError::AlreadyBuilt);
        }
        let builder = TimetableBuilder::new(self.config.timetable.clone());
        let lessons = builder.build(
            self.coaches.all_coaches_mut(),
            &mut self.shuffle_rng,
            &mut self.ids,
        )?;
        let count = lessons.len();
        for lesson in lessons {
            self.lessons.add_lesson(lesson);
        }
        self.timetable_built = true;
        Ok(count)
    }

    /// Adds a single lesson outside the generated timetable.
    ///
    /// Fails if `grade` is above [`MAX_GRADE`] or the coach is unknown.
    pub fn add_lesson(
        &mut self,
        name: impl Into<String>,
        grade: Grade,
        coach: &str,
        date: NaiveDate,
        time_slot: TimeSlot,
    ) -> Result<LessonKey, SchoolError> {
        if grade > MAX_GRADE {
            return Err(SchoolError::InvalidLessonGrade(grade));
        }
        let coach = self
            .coaches
            .coach_mut(coach)
            .ok_or_else(|| StoreError::CoachNotFound(coach.to_string()))?;
        let lesson = Lesson::new(name, grade, coach, date, time_slot)
            .with_id(self.ids.allocate(IdKind::Lesson, grade));
        let key = lesson.key();
        self.lessons.add_lesson(lesson);
        Ok(key)
    }

    /// All lessons, generated and added.
    pub fn lessons(&self) -> &[Lesson] {
        self.lessons.all_lessons()
    }

    /// Lesson by key.
    pub fn lesson(&self, key: LessonKey) -> Option<&Lesson> {
        self.lessons.lesson(key)
    }

    /// First lesson with the given numeric id.
    pub fn find_lesson_by_id(&self, id: u32) -> Result<&Lesson, StoreError> {
        self.lessons.find_by_id(id)
    }

    // --- learners ---

    /// Validates and registers a learner, returning their id.
    pub fn register_learner(&mut self, learner: Learner) -> Result<u32, RegistrationError> {
        registration::register_learner(learner, &mut self.learners, &mut self.ids)
    }

    /// Registered learners.
    pub fn learners(&self) -> &[Learner] {
        self.learners.all_learners()
    }

    /// Learner by id.
    pub fn learner(&self, id: u32) -> Result<&Learner, StoreError> {
        self.learners.find_by_id(id)
    }

    // --- lifecycle ---

    /// Books a registered learner onto a lesson.
    pub fn book(&mut self, lesson: LessonKey, learner_id: u32) -> Result<(), SchoolError> {
        let learner = self.learners.find_by_id_mut(learner_id)?;
        let lesson = self
            .lessons
            .lesson_mut(lesson)
            .ok_or(SchoolError::UnknownLesson)?;
        self.lifecycle.book(lesson, learner)?;
        Ok(())
    }

    /// Records attendance, asking `reviews` for the learner's review.
    pub fn attend<S>(
        &mut self,
        lesson: LessonKey,
        learner_id: u32,
        reviews: &mut S,
    ) -> Result<(), SchoolError>
    where
        S: ReviewSource + ?Sized,
    {
        let learner = self.learners.find_by_id_mut(learner_id)?;
        let lesson = self
            .lessons
            .lesson_mut(lesson)
            .ok_or(SchoolError::UnknownLesson)?;
        self.lifecycle.attend(lesson, learner, reviews)?;
        Ok(())
    }

    /// Cancels a booking.
    pub fn cancel(&mut self, lesson: LessonKey, learner_id: u32) -> Result<(), SchoolError> {
        let learner = self.learners.find_by_id_mut(learner_id)?;
        let lesson = self
            .lessons
            .lesson_mut(lesson)
            .ok_or(SchoolError::UnknownLesson)?;
        self.lifecycle.cancel(lesson, learner)?;
        Ok(())
    }

    // --- browsing ---

    /// Lessons at exactly `grade`.
    pub fn lessons_for_grade(&self, grade: i32) -> Result<Vec<&Lesson>, FilterError> {
        filter::by_grade(self.lessons.all_lessons(), grade)
    }

    /// Lessons on the named weekday.
    pub fn lessons_on(&self, day: &str) -> Result<Vec<&Lesson>, FilterError> {
        filter::by_day(self.lessons.all_lessons(), day)
    }

    /// Lessons taught by the named coach.
    pub fn lessons_by(&self, coach: &str) -> Result<Vec<&Lesson>, FilterError> {
        filter::by_coach(self.lessons.all_lessons(), coach)
    }

    // --- reports ---

    /// Report for one coach.
    pub fn coach_report(&self, name: &str) -> Result<CoachReport, StoreError> {
        let coach = self
            .coaches
            .coach(name)
            .ok_or_else(|| StoreError::CoachNotFound(name.to_string()))?;
        Ok(CoachReport::calculate(coach, self.lessons.all_lessons()))
    }

    /// Reports for every coach.
    pub fn coach_reports(&self) -> Vec<CoachReport> {
        self.coaches
            .all_coaches()
            .iter()
            .map(|c| CoachReport::calculate(c, self.lessons.all_lessons()))
            .collect()
    }

    /// Report for one learner.
    pub fn learner_report(&self, id: u32) -> Result<LearnerReport, StoreError> {
        self.learners.find_by_id(id).map(LearnerReport::calculate)
    }

    /// Reports for every learner.
    pub fn learner_reports(&self) -> Vec<LearnerReport> {
        self.learners
            .all_learners()
            .iter()
            .map(LearnerReport::calculate)
            .collect()
    }
}
