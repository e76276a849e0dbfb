//! Coach and learner reports.
//!
//! Read-only summaries derived from lesson rosters, registrations and
//! reviews. Nothing here changes booking state.
//!
//! # Ratings
//!
//! | Figure | Definition |
//! |--------|-----------|
//! | Lesson rating | Mean review rating, rounded half-up to 1 decimal |
//! | Coach rating | Mean of the coach's rated lessons, rounded to 1 decimal |
//!
//! Lessons without reviews have [`Rating::NONE`] and are left out of the
//! coach average.

mod coach;
mod learner;

pub use coach::CoachReport;
pub use learner::LearnerReport;

use crate::models::{Rating, Review};

/// Mean review rating, or [`Rating::NONE`] without reviews.
pub fn average_review_rating(reviews: &[Review]) -> Rating {
    if reviews.is_empty() {
        return Rating::NONE;
    }
    let sum: f64 = reviews.iter().map(|r| f64::from(r.rating)).sum();
    Rating::of(round_one_decimal(sum / reviews.len() as f64))
}

/// Mean of the ratings that exist, or [`Rating::NONE`] if none do.
pub fn average_rating(ratings: &[Rating]) -> Rating {
    let values: Vec<f64> = ratings.iter().filter_map(Rating::value).collect();
    if values.is_empty() {
        return Rating::NONE;
    }
    let sum: f64 = values.iter().sum();
    Rating::of(round_one_decimal(sum / values.len() as f64))
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_review_rating_empty() {
        assert_eq!(average_review_rating(&[]), Rating::NONE);
    }

    #[test]
    fn test_average_review_rating_single() {
        let r = average_review_rating(&[Review::new("Good", 4)]);
        assert_eq!(r.value(), Some(4.0));
    }

    #[test]
    fn test_average_review_rating_rounds() {
        let reviews = [
            Review::new("Good", 4),
            Review::new("Great", 5),
            Review::new("Meh", 2),
        ];
        // 11 / 3 = 3.666..
        assert_eq!(average_review_rating(&reviews).value(), Some(3.7));

        let reviews = [Review::new("a", 4), Review::new("b", 5)];
        assert_eq!(average_review_rating(&reviews).value(), Some(4.5));

        let reviews = [Review::new("a", 1), Review::new("b", 1), Review::new("c", 2)];
        // 4 / 3 = 1.333..
        assert_eq!(average_review_rating(&reviews).value(), Some(1.3));
    }

    #[test]
    fn test_average_rating_skips_missing() {
        let ratings = [Rating::of(4.0), Rating::NONE, Rating::of(3.5)];
        assert_eq!(average_rating(&ratings).value(), Some(3.8));
        assert_eq!(average_rating(&[Rating::NONE, Rating::NONE]), Rating::NONE);
        assert_eq!(average_rating(&[]), Rating::NONE);
    }

    #[test]
    fn test_round_one_decimal() {
        assert!((round_one_decimal(2.25) - 2.3).abs() < 1e-10);
        assert!((round_one_decimal(2.24) - 2.2).abs() < 1e-10);
        assert!((round_one_decimal(5.0) - 5.0).abs() < 1e-10);
    }
}
