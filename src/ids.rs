//! Numeric identifier allocation.
//!
//! Ids are six decimal digits: an entity-kind prefix, the entity's grade,
//! and a zero-padded four-digit random suffix drawn from `[0, 1000)`.
//!
//! ```text
//!   1 3 0 4 2 7
//!   │ │ └─┴─┴─┴── random suffix (0000..=0999)
//!   │ └────────── grade digit
//!   └──────────── kind prefix (1 = lesson, 2 = learner)
//! ```
//!
//! Uniqueness is not enforced. With only a thousand suffixes per
//! (kind, grade) pair collisions are possible; stores that need unique ids
//! reject the colliding entity instead.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::models::{Grade, MAX_GRADE};

/// Exclusive upper bound of the random suffix.
pub const SUFFIX_RANGE: u32 = 1000;

/// Entity kind encoded in an id's leading digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Lesson,
    Learner,
}

impl IdKind {
    /// Leading digit for this kind.
    pub fn prefix(self) -> u32 {
        match self {
            IdKind::Lesson => 1,
            IdKind::Learner => 2,
        }
    }
}

/// Allocates ids from a pluggable random source.
///
/// # Example
///
/// ```
/// use swim_timetable::ids::{IdAllocator, IdKind};
///
/// let mut ids = IdAllocator::seeded(7);
/// let id = ids.allocate(IdKind::Learner, 3);
/// assert_eq!(id.to_string().len(), 6);
/// assert!(id.to_string().starts_with("23"));
/// ```
#[derive(Debug, Clone)]
pub struct IdAllocator<R = SmallRng> {
    rng: R,
}

impl IdAllocator<SmallRng> {
    /// Allocator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(SmallRng::from_os_rng())
    }

    /// Deterministic allocator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> IdAllocator<R> {
    /// Allocator drawing suffixes from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Allocates an id for an entity of `kind` at `grade`.
    pub fn allocate(&mut self, kind: IdKind, grade: Grade) -> u32 {
        debug_assert!(grade <= MAX_GRADE, "grade {grade} is above the highest grade");
        let suffix = self.rng.random_range(0..SUFFIX_RANGE);
        compose(kind, grade, suffix)
    }
}

fn compose(kind: IdKind, grade: Grade, suffix: u32) -> u32 {
    kind.prefix() * 100_000 + u32::from(grade) * 10_000 + suffix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_layout() {
        assert_eq!(compose(IdKind::Lesson, 3, 42), 130_042);
        assert_eq!(compose(IdKind::Learner, 0, 0), 200_000);
        assert_eq!(compose(IdKind::Learner, 5, 999), 250_999);
    }

    #[test]
    fn test_ids_are_six_digits_with_prefix_and_grade() {
        let mut ids = IdAllocator::seeded(42);
        for grade in 0..=5 {
            for _ in 0..200 {
                let lesson = ids.allocate(IdKind::Lesson, grade).to_string();
                assert_eq!(lesson.len(), 6);
                assert!(lesson.starts_with(&format!("1{grade}")));
                assert_eq!(&lesson[2..3], "0");

                let learner = ids.allocate(IdKind::Learner, grade).to_string();
                assert_eq!(learner.len(), 6);
                assert!(learner.starts_with(&format!("2{grade}")));
            }
        }
    }

    #[test]
    fn test_seeded_allocators_repeat() {
        let mut a = IdAllocator::seeded(9);
        let mut b = IdAllocator::seeded(9);
        let xs: Vec<u32> = (0..20).map(|_| a.allocate(IdKind::Lesson, 1)).collect();
        let ys: Vec<u32> = (0..20).map(|_| b.allocate(IdKind::Lesson, 1)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_suffix_within_range() {
        let mut ids = IdAllocator::seeded(3);
        for _ in 0..1000 {
            let id = ids.allocate(IdKind::Lesson, 2);
            assert!((120_000..120_000 + SUFFIX_RANGE).contains(&id));
        }
    }
}
