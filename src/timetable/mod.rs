//! Term timetable generation.
//!
//! Turns a lesson catalogue and a list of coaches into dated, slotted,
//! coach-assigned lessons.
//!
//! - **`slots`**: the weekly day/time [`SlotSequence`]
//! - **`builder`**: [`TimetableBuilder`], shuffling pre-slots and
//!   round-robining coaches

mod builder;
mod slots;

pub use builder::{PreSlot, TimetableBuilder};
pub use slots::{SlotSequence, SwimDay, SLOTS_PER_CYCLE};
