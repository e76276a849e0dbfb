//! Lesson filters for browsing the timetable.

use chrono::Weekday;
use std::collections::BTreeSet;

use crate::error::FilterError;
use crate::models::Lesson;

/// Lessons at exactly `grade`. Negative grades are rejected.
pub fn by_grade(lessons: &[Lesson], grade: i32) -> Result<Vec<&Lesson>, FilterError> {
    if grade < 0 {
        return Err(FilterError::InvalidInput(grade.to_string()));
    }
    Ok(lessons
        .iter()
        .filter(|l| i32::from(l.grade()) == grade)
        .collect())
}

/// Lessons on a weekday given by name, e.g. `"Wednesday"` or `" friday "`.
///
/// Valid days without lessons (such as Sunday) give an empty list.
pub fn by_day<'a>(lessons: &'a [Lesson], day: &str) -> Result<Vec<&'a Lesson>, FilterError> {
    let weekday = parse_weekday(day)?;
    Ok(lessons.iter().filter(|l| l.weekday() == weekday).collect())
}

/// Lessons taught by the named coach, ignoring case and outer whitespace.
pub fn by_coach<'a>(lessons: &'a [Lesson], coach: &str) -> Result<Vec<&'a Lesson>, FilterError> {
    let wanted = coach.trim();
    if wanted.is_empty() {
        return Err(FilterError::InvalidInput(coach.to_string()));
    }
    Ok(lessons
        .iter()
        .filter(|l| l.coach().eq_ignore_ascii_case(wanted))
        .collect())
}

/// Distinct coach names across `lessons`.
pub fn coaches_of(lessons: &[Lesson]) -> BTreeSet<&str> {
    lessons.iter().map(Lesson::coach).collect()
}

fn parse_weekday(day: &str) -> Result<Weekday, FilterError> {
    let trimmed = day.trim();
    if trimmed.is_empty() {
        return Err(FilterError::InvalidInput(day.to_string()));
    }
    trimmed
        .parse::<Weekday>()
        .map_err(|_| FilterError::InvalidInput(day.to_string()))
}
