// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Calendar-month arithmetic on [`NaiveDate`].
//!
//! All helpers are total: arithmetic that would leave chrono's representable
//! range yields `None` instead of panicking.

use chrono::{Datelike, Months, NaiveDate};

/// Returns the first day of the month containing `date`.
#[must_use]
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Shifts `date` by `delta` calendar months.
///
/// The day of month is clamped to the length of the target month, so
/// January 31 plus one month is the last day of February.
#[must_use]
pub fn add_months(date: NaiveDate, delta: i32) -> Option<NaiveDate> {
    let months = Months::new(delta.unsigned_abs());
    if delta >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    }
}

/// Shifts `date` by `delta` calendar years, clamping February 29 like [`add_months`].
#[must_use]
pub fn add_years(date: NaiveDate, delta: i32) -> Option<NaiveDate> {
    add_months(date, delta.checked_mul(12)?)
}

/// Number of calendar-month boundaries crossed going from `from` to `to`.
///
/// The day of month is ignored: March 31 to April 1 is one month. The result is
/// negative when `to` lies in an earlier month.
#[must_use]
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    month_index(to) - month_index(from)
}

/// Returns `true` when both dates fall in the same month of the same year.
#[must_use]
pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    month_index(a) == month_index(b)
}

fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + i32::try_from(date.month0()).unwrap_or(0)
}
