//! Learner registration.
//!
//! Validates a new learner's profile, allocates their id and hands them to
//! the learner store. Checks run in order and stop at the first failure:
//!
//! 1. Age within 4–11
//! 2. Grade within 0–5
//! 3. Both contact numbers exactly 11 digits

use rand::Rng;
use tracing::{info, warn};

use crate::error::RegistrationError;
use crate::ids::{IdAllocator, IdKind};
use crate::models::{Learner, MAX_GRADE};
use crate::store::LearnerStore;

/// Youngest registrable age.
pub const MIN_AGE: u8 = 4;
/// Oldest registrable age.
pub const MAX_AGE: u8 = 11;
/// Digits in a contact number.
pub const PHONE_DIGITS: usize = 11;

/// Checks a learner's profile without registering them.
pub fn validate_learner(learner: &Learner) -> Result<(), RegistrationError> {
    if !(MIN_AGE..=MAX_AGE).contains(&learner.age) {
        return Err(RegistrationError::InvalidAge);
    }
    if learner.grade > MAX_GRADE {
        return Err(RegistrationError::InvalidGrade);
    }
    if !is_valid_phone_number(&learner.phone_number)
        || !is_valid_phone_number(&learner.emergency_contact_number)
    {
        return Err(RegistrationError::InvalidPhoneNumber);
    }
    Ok(())
}

/// Validates, assigns an id, and stores the learner. Returns the new id.
pub fn register_learner<S, R>(
    mut learner: Learner,
    store: &mut S,
    ids: &mut IdAllocator<R>,
) -> Result<u32, RegistrationError>
where
    S: LearnerStore + ?Sized,
    R: Rng,
{
    validate_learner(&learner)?;

    let id = ids.allocate(IdKind::Learner, learner.grade);
    learner.assign_id(id);
    let key = learner.key();
    if !store.add_learner(learner) {
        warn!(id, learner = %key, "learner store rejected registration");
        return Err(RegistrationError::StoreRejected);
    }

    info!(id, learner = %key, "learner registered");
    Ok(id)
}

fn is_valid_phone_number(number: &str) -> bool {
    number.len() == PHONE_DIGITS && number.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryLearnerStore;

    fn valid() -> Learner {
        Learner::new("Divine", "Male", 5, 0).with_contacts("08172742510", "08172432510")
    }

    #[test]
    fn test_register_valid_learner() {
        let mut store = InMemoryLearnerStore::new();
        let mut ids = IdAllocator::seeded(1);

        let id = register_learner(valid(), &mut store, &mut ids).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_id(id).unwrap().name, "Divine");
        assert!(id.to_string().starts_with("20"));
        assert_eq!(id.to_string().len(), 6);
    }

    #[test]
    fn test_age_bounds() {
        for age in [MIN_AGE, MAX_AGE] {
            let mut l = valid();
            l.age = age;
            assert_eq!(validate_learner(&l), Ok(()));
        }
        for age in [0, 3, 12, 40] {
            let mut l = valid();
            l.age = age;
            assert_eq!(validate_learner(&l), Err(RegistrationError::InvalidAge));
        }
    }

    #[test]
    fn test_grade_bounds() {
        let mut l = valid();
        l.grade = 5;
        assert_eq!(validate_learner(&l), Ok(()));
        l.grade = 6;
        assert_eq!(validate_learner(&l), Err(RegistrationError::InvalidGrade));
    }

    #[test]
    fn test_phone_numbers() {
        let cases = [
            ("", "08172432510"),
            ("0817274251", "08172432510"),
            ("081727425100", "08172432510"),
            ("0817274251a", "08172432510"),
            ("08172742510", "   "),
            ("08172742510", "+4478123456"),
        ];
        for (phone, emergency) in cases {
            let l = valid().with_contacts(phone, emergency);
            assert_eq!(
                validate_learner(&l),
                Err(RegistrationError::InvalidPhoneNumber),
                "{phone:?} / {emergency:?}"
            );
        }
    }

    #[test]
    fn test_age_checked_before_grade() {
        let mut l = valid();
        l.age = 2;
        l.grade = 9;
        assert_eq!(validate_learner(&l), Err(RegistrationError::InvalidAge));
    }

    #[test]
    fn test_invalid_learner_not_stored() {
        let mut store = InMemoryLearnerStore::new();
        let mut l = valid();
        l.age = 20;
        let result = register_learner(l, &mut store, &mut IdAllocator::seeded(1));
        assert_eq!(result, Err(RegistrationError::InvalidAge));
        assert!(store.is_empty());
    }

    #[test]
    fn test_id_collision_rejected() {
        let mut store = InMemoryLearnerStore::new();
        let first = register_learner(valid(), &mut store, &mut IdAllocator::seeded(5)).unwrap();
        // Same seed, same grade: same id.
        let second = register_learner(valid(), &mut store, &mut IdAllocator::seeded(5));
        assert_eq!(second, Err(RegistrationError::StoreRejected));
        assert_eq!(store.len(), 1);
        assert!(store.find_by_id(first).is_ok());
    }
}
