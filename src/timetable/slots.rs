//! Slot sequence.
//!
//! Lessons run on four days a week. Monday, Wednesday and Friday offer three
//! after-school slots, Saturday offers two afternoon slots:
//!
//! | Day | Slots | Next day |
//! |-----|-------|----------|
//! | Mon | 4-5pm, 5-6pm, 6-7pm | Wed (+2 days) |
//! | Wed | 4-5pm, 5-6pm, 6-7pm | Fri (+2 days) |
//! | Fri | 4-5pm, 5-6pm, 6-7pm | Sat (+1 day) |
//! | Sat | 2-3pm, 3-4pm | Mon (+2 days) |
//!
//! One cycle is 11 slots, Monday through Saturday, and repeats every week.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::TimetableError;
use crate::models::TimeSlot;

/// Slots per weekly cycle.
pub const SLOTS_PER_CYCLE: usize = 11;

const WEEKDAY_SLOTS: [TimeSlot; 3] = [
    TimeSlot::FourToFive,
    TimeSlot::FiveToSix,
    TimeSlot::SixToSeven,
];

const SATURDAY_SLOTS: [TimeSlot; 2] = [TimeSlot::TwoToThree, TimeSlot::ThreeToFour];

/// A day on which lessons run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwimDay {
    Monday,
    Wednesday,
    Friday,
    Saturday,
}

impl SwimDay {
    /// Slots offered on this day, in order.
    pub fn slots(self) -> &'static [TimeSlot] {
        match self {
            SwimDay::Monday | SwimDay::Wednesday | SwimDay::Friday => &WEEKDAY_SLOTS,
            SwimDay::Saturday => &SATURDAY_SLOTS,
        }
    }

    /// Calendar weekday.
    pub fn weekday(self) -> Weekday {
        match self {
            SwimDay::Monday => Weekday::Mon,
            SwimDay::Wednesday => Weekday::Wed,
            SwimDay::Friday => Weekday::Fri,
            SwimDay::Saturday => Weekday::Sat,
        }
    }

    /// Following swim day and the calendar days between them.
    fn next(self) -> (SwimDay, u64) {
        match self {
            SwimDay::Monday => (SwimDay::Wednesday, 2),
            SwimDay::Wednesday => (SwimDay::Friday, 2),
            SwimDay::Friday => (SwimDay::Saturday, 1),
            SwimDay::Saturday => (SwimDay::Monday, 2),
        }
    }
}

/// Endless iterator of `(date, slot)` pairs starting on a Monday.
///
/// Ends only if the calendar overflows.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use swim_timetable::models::TimeSlot;
/// use swim_timetable::timetable::SlotSequence;
///
/// let monday = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
/// let mut slots = SlotSequence::new(monday).unwrap();
/// assert_eq!(slots.next(), Some((monday, TimeSlot::FourToFive)));
/// ```
#[derive(Debug, Clone)]
pub struct SlotSequence {
    day: SwimDay,
    date: Option<NaiveDate>,
    index: usize,
}

impl SlotSequence {
    /// Starts a sequence on `anchor`.
    pub fn new(anchor: NaiveDate) -> Result<Self, TimetableError> {
        if anchor.weekday() != Weekday::Mon {
            return Err(TimetableError::AnchorNotMonday(anchor));
        }
        Ok(Self {
            day: SwimDay::Monday,
            date: Some(anchor),
            index: 0,
        })
    }

    /// Day the next slot falls on.
    pub fn current_day(&self) -> SwimDay {
        self.day
    }
}

impl Iterator for SlotSequence {
    type Item = (NaiveDate, TimeSlot);

    fn next(&mut self) -> Option<Self::Item> {
        let date = self.date?;
        let slots = self.day.slots();
        let item = (date, slots[self.index]);

        self.index += 1;
        if self.index == slots.len() {
            let (next_day, gap) = self.day.next();
            self.day = next_day;
            self.date = date.checked_add_days(Days::new(gap));
            self.index = 0;
        }

        Some(item)
    }
}
