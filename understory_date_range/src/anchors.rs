// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pair of months shown side by side.
//!
//! [`MonthAnchors`] keeps the two displayed months in order: the first
//! calendar always shows an earlier month than the second, and they never show
//! the same month. Requests that would break this are dropped, and the setters
//! report whether anything changed.
//!
//! ## Minimal example
//!
//! ```
//! use chrono::NaiveDate;
//! use understory_date_range::anchors::MonthAnchors;
//!
//! let ymd = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
//!
//! let mut anchors = MonthAnchors::starting_at(ymd(2024, 3, 10));
//! assert_eq!(anchors.first(), ymd(2024, 3, 1));
//! assert_eq!(anchors.second(), ymd(2024, 4, 1));
//!
//! // The second calendar cannot move onto the first.
//! assert!(!anchors.set_second(ymd(2024, 3, 20)));
//! assert!(anchors.set_second(ymd(2024, 6, 1)));
//! assert!(anchors.can_navigate_closer());
//! ```

use chrono::NaiveDate;
use tracing::debug;

use crate::bounds::DateBounds;
use crate::clamp::{adjacent_months, resolve_months_for_range};
use crate::month::{month_start, months_between};
use crate::navigation::Marker;
use crate::range::DateRange;

/// The first-of-month days displayed by the two calendars.
///
/// Invariant: `first < second`, both are the first day of their month, so the
/// two calendars always show different months in ascending order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MonthAnchors {
    first: NaiveDate,
    second: NaiveDate,
}

impl MonthAnchors {
    /// Creates an anchor pair from any days within the wanted months.
    ///
    /// If `second` is not in a later month than `first`, the month after
    /// `first` is used instead.
    #[must_use]
    pub fn new(first: NaiveDate, second: NaiveDate) -> Self {
        let first = month_start(first);
        let second = month_start(second);
        if first < second {
            Self { first, second }
        } else {
            Self::starting_at(first)
        }
    }

    /// Shows the month containing `month` and the one after it.
    #[must_use]
    pub fn starting_at(month: NaiveDate) -> Self {
        let (first, second) = adjacent_months(month);
        Self { first, second }
    }

    /// The anchors for a session: derived from `range` when it is complete,
    /// otherwise the month of `today` and the month after.
    #[must_use]
    pub fn for_range(range: DateRange, bounds: &DateBounds, today: NaiveDate) -> Self {
        match resolve_months_for_range(range, bounds) {
            Some((first, second)) => Self { first, second },
            None => Self::starting_at(today),
        }
    }

    /// Returns the month shown by the first calendar.
    #[must_use]
    pub fn first(&self) -> NaiveDate {
        self.first
    }

    /// Returns the month shown by the second calendar.
    #[must_use]
    pub fn second(&self) -> NaiveDate {
        self.second
    }

    /// Returns the month shown by the calendar identified by `marker`.
    #[must_use]
    pub fn get(&self, marker: Marker) -> NaiveDate {
        match marker {
            Marker::First => self.first,
            Marker::Second => self.second,
        }
    }

    /// Shows the month containing `date` in the first calendar.
    ///
    /// Dropped unless that month is strictly before the second calendar's.
    /// Returns `true` if the anchor changed.
    pub fn set_first(&mut self, date: NaiveDate) -> bool {
        let month = month_start(date);
        if month >= self.second {
            debug!(%month, second = %self.second, "first month must precede second, ignoring");
            return false;
        }
        let changed = self.first != month;
        self.first = month;
        changed
    }

    /// Shows the month containing `date` in the second calendar.
    ///
    /// Dropped unless that month is strictly after the first calendar's.
    /// Returns `true` if the anchor changed.
    pub fn set_second(&mut self, date: NaiveDate) -> bool {
        let month = month_start(date);
        if month <= self.first {
            debug!(%month, first = %self.first, "second month must follow first, ignoring");
            return false;
        }
        let changed = self.second != month;
        self.second = month;
        changed
    }

    /// Calls [`set_first`](Self::set_first) or [`set_second`](Self::set_second) per `marker`.
    pub fn set(&mut self, marker: Marker, date: NaiveDate) -> bool {
        match marker {
            Marker::First => self.set_first(date),
            Marker::Second => self.set_second(date),
        }
    }

    /// Re-aligns both calendars on a committed range.
    ///
    /// Both anchors are replaced together, so the pairwise guards of the setters
    /// do not get in the way of jumping to a distant range. Partial ranges leave
    /// the anchors untouched. Returns `true` if the anchors changed.
    pub fn commit_range(&mut self, range: DateRange, bounds: &DateBounds) -> bool {
        let Some((first, second)) = resolve_months_for_range(range, bounds) else {
            return false;
        };
        let next = Self { first, second };
        let changed = *self != next;
        *self = next;
        changed
    }

    /// Number of months from the first calendar to the second (always at least 1).
    #[must_use]
    pub fn months_apart(&self) -> i32 {
        months_between(self.first, self.second)
    }

    /// Returns `true` if the calendars are at least two months apart.
    ///
    /// When `false` the calendars show consecutive months, and moving either
    /// one towards the other would collide. Renderers use this to disable the
    /// inward navigation buttons.
    #[must_use]
    pub fn can_navigate_closer(&self) -> bool {
        self.months_apart() >= 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn new_normalizes_and_separates() {
        let anchors = MonthAnchors::new(ymd(2024, 3, 15), ymd(2024, 5, 2));
        assert_eq!(anchors.first(), ymd(2024, 3, 1));
        assert_eq!(anchors.second(), ymd(2024, 5, 1));

        let anchors = MonthAnchors::new(ymd(2024, 3, 15), ymd(2024, 3, 20));
        assert_eq!(anchors.second(), ymd(2024, 4, 1));

        let anchors = MonthAnchors::new(ymd(2024, 3, 15), ymd(2023, 1, 1));
        assert_eq!(anchors.first(), ymd(2024, 3, 1));
        assert_eq!(anchors.second(), ymd(2024, 4, 1));
    }

    #[test]
    fn setters_reject_collisions() {
        let mut anchors = MonthAnchors::new(ymd(2024, 3, 1), ymd(2024, 5, 1));

        assert!(!anchors.set_first(ymd(2024, 5, 1)));
        assert!(!anchors.set_first(ymd(2024, 6, 1)));
        assert!(!anchors.set_second(ymd(2024, 3, 31)));
        assert!(!anchors.set_second(ymd(2024, 2, 1)));
        assert_eq!(anchors, MonthAnchors::new(ymd(2024, 3, 1), ymd(2024, 5, 1)));

        assert!(anchors.set_first(ymd(2024, 4, 30)));
        assert_eq!(anchors.first(), ymd(2024, 4, 1));
        assert!(anchors.set(Marker::Second, ymd(2024, 9, 9)));
        assert_eq!(anchors.get(Marker::Second), ymd(2024, 9, 1));
    }

    #[test]
    fn setting_same_month_reports_no_change() {
        let mut anchors = MonthAnchors::new(ymd(2024, 3, 1), ymd(2024, 5, 1));
        assert!(!anchors.set_first(ymd(2024, 3, 20)));
        assert_eq!(anchors.first(), ymd(2024, 3, 1));
    }

    #[test]
    fn commit_range_replaces_both_anchors() {
        let bounds = DateBounds::new(ymd(2000, 1, 1), ymd(2100, 1, 1));
        let mut anchors = MonthAnchors::new(ymd(2024, 3, 1), ymd(2024, 4, 1));

        // Jumping backwards past the first anchor is allowed for commits.
        let range = DateRange::new(ymd(2020, 1, 10), ymd(2020, 1, 12));
        assert!(anchors.commit_range(range, &bounds));
        assert_eq!(anchors.first(), ymd(2020, 1, 1));
        assert_eq!(anchors.second(), ymd(2020, 2, 1));

        assert!(!anchors.commit_range(DateRange::starting_at(ymd(2030, 1, 1)), &bounds));
        assert_eq!(anchors.first(), ymd(2020, 1, 1));
    }

    #[test]
    fn for_range_defaults_to_today() {
        let today = ymd(2024, 12, 25);
        let bounds = DateBounds::around(today);
        let anchors = MonthAnchors::for_range(DateRange::empty(), &bounds, today);
        assert_eq!(anchors.first(), ymd(2024, 12, 1));
        assert_eq!(anchors.second(), ymd(2025, 1, 1));
    }

    #[test]
    fn can_navigate_closer_needs_a_gap() {
        let adjacent = MonthAnchors::new(ymd(2024, 12, 1), ymd(2025, 1, 1));
        assert!(!adjacent.can_navigate_closer());
        let gap = MonthAnchors::new(ymd(2024, 12, 1), ymd(2025, 2, 1));
        assert!(gap.can_navigate_closer());
    }
}
