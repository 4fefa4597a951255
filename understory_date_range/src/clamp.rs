// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure helpers that fit a range into [`DateBounds`] and pick the months to display for it.

use chrono::NaiveDate;

use crate::bounds::DateBounds;
use crate::month::{add_months, is_same_month, month_start};
use crate::range::DateRange;

/// Clamps a complete range into `bounds`.
///
/// Partial and empty ranges are returned unchanged. For a complete range both
/// endpoints are moved into the window, so the result is always a valid range
/// inside `bounds` and clamping twice is the same as clamping once.
#[must_use]
pub fn clamp_range(range: DateRange, bounds: &DateBounds) -> DateRange {
    match range.endpoints() {
        Some((start, end)) => DateRange::new(bounds.clamp(start), bounds.clamp(end)),
        None => range,
    }
}

/// Picks the `(first, second)` months to display for a complete range.
///
/// The range is clamped first. The first month is the one containing the
/// start; the second is the one containing the end, or the month after the
/// start when both fall in the same month. Both are returned normalized to the
/// first day of their month and are always distinct.
///
/// Returns `None` for a partial or empty range; callers substitute their
/// own defaults.
#[must_use]
pub fn resolve_months_for_range(
    range: DateRange,
    bounds: &DateBounds,
) -> Option<(NaiveDate, NaiveDate)> {
    let (start, end) = clamp_range(range, bounds).endpoints()?;
    let first = month_start(start);
    if is_same_month(start, end) {
        Some(adjacent_months(first))
    } else {
        Some((first, month_start(end)))
    }
}

/// Returns `month` and the month after it, or the month before and `month`
/// when `month` is the last representable one.
pub(crate) fn adjacent_months(month: NaiveDate) -> (NaiveDate, NaiveDate) {
    let month = month_start(month);
    if let Some(next) = add_months(month, 1) {
        return (month, next);
    }
    add_months(month, -1).map_or((month, month), |previous| (previous, month))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn year_2024() -> DateBounds {
        DateBounds::new(ymd(2024, 1, 1), ymd(2024, 12, 31))
    }

    #[test]
    fn partial_ranges_are_not_clamped() {
        let partial = DateRange::starting_at(ymd(1990, 1, 1));
        assert_eq!(clamp_range(partial, &year_2024()), partial);
        assert_eq!(clamp_range(DateRange::empty(), &year_2024()), DateRange::empty());
    }

    #[test]
    fn clamps_each_side_independently() {
        let range = DateRange::new(ymd(2023, 6, 1), ymd(2024, 6, 1));
        assert_eq!(
            clamp_range(range, &year_2024()),
            DateRange::new(ymd(2024, 1, 1), ymd(2024, 6, 1))
        );

        let range = DateRange::new(ymd(2024, 6, 1), ymd(2025, 6, 1));
        assert_eq!(
            clamp_range(range, &year_2024()),
            DateRange::new(ymd(2024, 6, 1), ymd(2024, 12, 31))
        );
    }

    #[test]
    fn range_outside_window_collapses_onto_nearest_bound() {
        let range = DateRange::new(ymd(2020, 1, 1), ymd(2020, 2, 1));
        assert_eq!(
            clamp_range(range, &year_2024()),
            DateRange::new(ymd(2024, 1, 1), ymd(2024, 1, 1))
        );
    }

    #[test]
    fn same_month_range_shows_following_month() {
        let range = DateRange::new(ymd(2024, 3, 5), ymd(2024, 3, 20));
        assert_eq!(
            resolve_months_for_range(range, &year_2024()),
            Some((ymd(2024, 3, 1), ymd(2024, 4, 1)))
        );
    }

    #[test]
    fn spanning_range_shows_start_and_end_months() {
        let range = DateRange::new(ymd(2024, 3, 5), ymd(2024, 7, 20));
        assert_eq!(
            resolve_months_for_range(range, &year_2024()),
            Some((ymd(2024, 3, 1), ymd(2024, 7, 1)))
        );
    }

    #[test]
    fn months_are_resolved_after_clamping() {
        // Clamped to [2024-12-01, 2024-12-31]: a single month.
        let range = DateRange::new(ymd(2024, 12, 1), ymd(2025, 3, 1));
        assert_eq!(
            resolve_months_for_range(range, &year_2024()),
            Some((ymd(2024, 12, 1), ymd(2025, 1, 1)))
        );
    }

    #[test]
    fn partial_range_has_no_months() {
        let partial = DateRange::starting_at(ymd(2024, 3, 5));
        assert_eq!(resolve_months_for_range(partial, &year_2024()), None);
    }

    #[test]
    fn adjacent_months_at_end_of_time() {
        let (first, second) = adjacent_months(NaiveDate::MAX);
        assert!(first < second);
        assert_eq!(second, month_start(NaiveDate::MAX));
    }
}
