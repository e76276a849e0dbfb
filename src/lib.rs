//! Swimming-school timetable and lesson booking.
//!
//! Generates a term of dated, coach-assigned lessons from a catalogue of
//! lesson templates, then tracks learners booking, attending and cancelling
//! those lessons under grade and capacity rules.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Lesson`, `Learner`, `Coach`, `Review`,
//!   `Rating`, `TimeSlot`, `LessonStatus`
//! - **`timetable`**: Weekly slot sequence and the term timetable builder
//! - **`booking`**: Book / attend / cancel state machine
//! - **`registration`**: Learner validation and id assignment
//! - **`filter`**: Browsing lessons by grade, day and coach
//! - **`report`**: Per-coach and per-learner summaries
//! - **`store`**: Entity store traits with in-memory implementations
//! - **`school`**: Facade tying the above together
//! - **`ids`**, **`config`**, **`error`**: Supporting types
//!
//! # Lesson lifecycle
//!
//! | From | Operation | To |
//! |------|-----------|----|
//! | (none) | book | Booked |
//! | Booked | attend | Attended |
//! | Cancelled | attend | Attended |
//! | Booked | cancel | Cancelled |
//!
//! Attended is terminal, and a cancelled registration cannot be booked again.

pub mod booking;
pub mod config;
pub mod error;
pub mod filter;
pub mod ids;
pub mod models;
pub mod registration;
pub mod report;
pub mod school;
pub mod store;
pub mod timetable;
