use std::iter::successors;
use thiserror::Error;
use time::{Date, Duration};

/// Returns every day of the month containing `reference`, in ascending order,
/// first and last day of the month inclusive.
pub(super) fn month_days(reference: Date) -> Vec<Date> {
    let first = reference
        .replace_day(1)
        .expect("every month should have a first day");
    successors(Some(first), |&d| d.next_day())
        .take_while(|d| d.month() == reference.month())
        .collect()
}

/// Returns the reference date for the next page of the calendar.
///
/// Navigation steps by the number of days currently in view rather than by
/// one calendar month, so stepping out of a 31-day month across a shorter one
/// can land past the 1st or skip a month entirely (e.g., March 31 plus 31
/// days is May 1).
pub(super) fn next_reference(
    current: Date,
    days_in_view: usize,
) -> Result<Date, OutOfTimeError> {
    current
        .checked_add(Duration::days(view_days(days_in_view)))
        .ok_or(OutOfTimeError)
}

/// Returns the reference date for the previous page of the calendar.
///
/// Subject to the same drift as [`next_reference`].
pub(super) fn previous_reference(
    current: Date,
    days_in_view: usize,
) -> Result<Date, OutOfTimeError> {
    current
        .checked_sub(Duration::days(view_days(days_in_view)))
        .ok_or(OutOfTimeError)
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub(crate) struct OutOfTimeError;

fn view_days(days_in_view: usize) -> i64 {
    // A view is never longer than a month
    i64::try_from(days_in_view).expect("days in view should fit in an i64")
}
