//! TTL Computation Module
//!
//! Cache entries do not live for a fixed duration; they expire at the next
//! local midnight after the moment they are written. An entry written at
//! 23:59 lives for at most a minute, one written just after midnight lives
//! for nearly a day.
//!
//! The alignment is to the wall-clock day of the *write*, not to the date the
//! entry's content describes: a "tomorrow" entry written late tonight still
//! expires at tonight's midnight. Observed upstream behavior, kept as is.

use chrono::{Local, NaiveDateTime};

// == Seconds Until End Of Day ==
/// Seconds remaining from `now` until the next midnight, floored.
///
/// `end_of_day` is midnight at the start of `now`'s calendar date + 1 day;
/// the result is `floor(end_of_day - now)` in whole seconds. Always in
/// `0..=86400` for any `now` (86400 exactly at midnight).
pub fn seconds_until_end_of_day(now: NaiveDateTime) -> u64 {
    let end_of_day = now
        .date()
        .succ_opt()
        .expect("date overflow computing end of day")
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time");

    (end_of_day - now).num_seconds() as u64
}

// == TTL Until Local Midnight ==
/// TTL in seconds for an entry written at the current wall-clock moment,
/// in the service's local time zone.
pub fn ttl_until_local_midnight() -> u64 {
    seconds_until_end_of_day(Local::now().naive_local())
}
