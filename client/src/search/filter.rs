use chrono::{DateTime, Duration, Utc};
use refzone_core::types::{Assignment, OrderDirection};

/// Returns a new sequence sorted by kickoff time; the input is not mutated.
/// Assignments without a usable date carry an epoch key, so they come first
/// ascending and last descending.
pub fn sort_by_game_date(items: &[Assignment], direction: OrderDirection) -> Vec<Assignment> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        let (ka, kb) = (a.effective_game_time(), b.effective_game_time());
        match direction {
            OrderDirection::Asc => ka.cmp(&kb),
            OrderDirection::Desc => kb.cmp(&ka),
        }
    });
    sorted
}

/// Keeps assignments whose kickoff falls inside the inclusive interval.
/// Assignments with an absent or unparseable kickoff are never in range.
pub fn filter_by_date_range(
    items: &[Assignment],
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Vec<Assignment> {
    items
        .iter()
        .filter(|assignment| {
            assignment
                .game_starts_at()
                .is_some_and(|starts_at| starts_at >= from && starts_at <= to)
        })
        .cloned()
        .collect()
}

/// Keeps assignments whose validation window has elapsed, i.e.
/// `now > kickoff + deadline_hours`. Assignments without a usable kickoff
/// have no computable window and are dropped.
pub fn filter_validation_closed(
    items: &[Assignment],
    now: DateTime<Utc>,
    deadline_hours: i64,
) -> Vec<Assignment> {
    items
        .iter()
        .filter(|assignment| {
            assignment
                .game_starts_at()
                .is_some_and(|starts_at| now > starts_at + Duration::hours(deadline_hours))
        })
        .cloned()
        .collect()
}
