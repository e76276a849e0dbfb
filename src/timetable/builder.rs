//! Term timetable builder.
//!
//! # Algorithm
//!
//! 1. Expand the catalogue into pre-slots: every template at every grade.
//! 2. Shuffle the pre-slots.
//! 3. Walk them once, pairing each with the next `(date, slot)` from the
//!    [`SlotSequence`] and the next coach in round-robin order.
//! 4. Construct each lesson (which registers it with its coach) and give
//!    it an id.
//!
//! Capacity is not considered here; it is enforced at booking time.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use super::SlotSequence;
use crate::config::TimetableConfig;
use crate::error::TimetableError;
use crate::ids::{IdAllocator, IdKind};
use crate::models::{Coach, Grade, Lesson};

/// A (template, grade) combination before day, time and coach assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreSlot {
    pub template: String,
    pub grade: Grade,
}

impl PreSlot {
    /// Lesson name, e.g. `"Water Safety 3"`.
    pub fn name(&self) -> String {
        format!("{} {}", self.template, self.grade)
    }
}

/// Builds a term's lessons from a [`TimetableConfig`].
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use swim_timetable::config::TimetableConfig;
/// use swim_timetable::ids::IdAllocator;
/// use swim_timetable::models::Coach;
/// use swim_timetable::timetable::TimetableBuilder;
///
/// let mut coaches = vec![Coach::new("Peter"), Coach::new("Sandra")];
/// let builder = TimetableBuilder::new(TimetableConfig::default());
/// let lessons = builder
///     .build(&mut coaches, &mut SmallRng::seed_from_u64(1), &mut IdAllocator::seeded(1))
///     .unwrap();
/// assert_eq!(lessons.len(), 45);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableBuilder {
    config: TimetableConfig,
}

impl TimetableBuilder {
    /// Builder over `config`.
    pub fn new(config: TimetableConfig) -> Self {
        Self { config }
    }

    /// Generation settings.
    pub fn config(&self) -> &TimetableConfig {
        &self.config
    }

    /// All pre-slots in catalogue order.
    pub fn pre_slots(&self) -> Vec<PreSlot> {
        let mut result = Vec::with_capacity(self.config.pre_slot_count());
        for template in &self.config.lesson_templates {
            for grade in self.config.min_grade..=self.config.max_grade {
                result.push(PreSlot {
                    template: template.clone(),
                    grade,
                });
            }
        }
        result
    }

    /// Generates the term's lessons and assigns them to `coaches`.
    ///
    /// `shuffle_rng` orders the pre-slots; `ids` supplies lesson ids. The two
    /// are independent so either can be fixed in tests.
    ///
    /// Fails without touching any coach if the grade range is invalid,
    /// `coaches` is empty, the term does not start on a Monday, or the
    /// calendar runs out.
    pub fn build<S, R>(
        &self,
        coaches: &mut [Coach],
        shuffle_rng: &mut S,
        ids: &mut IdAllocator<R>,
    ) -> Result<Vec<Lesson>, TimetableError>
    where
        S: Rng + ?Sized,
        R: Rng,
    {
        self.config.check_grades()?;
        if coaches.is_empty() {
            return Err(TimetableError::EmptyCoachList);
        }

        let mut pre_slots = self.pre_slots();
        pre_slots.shuffle(shuffle_rng);

        let slots: Vec<_> = SlotSequence::new(self.config.term_start)?
            .take(pre_slots.len())
            .collect();
        if slots.len() < pre_slots.len() {
            return Err(TimetableError::CalendarExhausted);
        }

        let mut lessons = Vec::with_capacity(pre_slots.len());
        for (i, (pre, (date, slot))) in pre_slots.into_iter().zip(slots).enumerate() {
            let coach = &mut coaches[i % coaches.len()];
            let mut lesson = Lesson::new(pre.name(), pre.grade, coach, date, slot);
            lesson.assign_id(ids.allocate(IdKind::Lesson, pre.grade));
            debug!(
                lesson = %lesson.key(),
                name = lesson.name(),
                coach = lesson.coach(),
                %date,
                %slot,
                "lesson scheduled"
            );
            lessons.push(lesson);
        }

        info!(
            lessons = lessons.len(),
            coaches = coaches.len(),
            term_start = %self.config.term_start,
            "timetable built"
        );
        Ok(lessons)
    }
}
