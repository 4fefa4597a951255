// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inclusive day ranges and labelled preset ranges.

use alloc::string::String;
use alloc::vec::Vec;

use chrono::{Datelike, Days, NaiveDate};

use crate::month::{add_months, month_start};

/// An inclusive range of calendar days, possibly still being built.
///
/// A `DateRange` is in one of three shapes:
/// - empty: neither endpoint is set,
/// - partial: only the start is set (the first click of a selection),
/// - complete: both endpoints are set and `start <= end`.
///
/// An end without a start is not representable, and a complete range is never
/// inverted. The constructors normalize their input instead of failing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RangeParts", into = "RangeParts")
)]
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRange {
    /// Creates an empty range.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    /// Creates a partial range with only a start day.
    #[must_use]
    pub const fn starting_at(start: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// Creates a complete range, swapping the endpoints if they are inverted.
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        let (start, end) = if end < start { (end, start) } else { (start, end) };
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Builds a range from optional endpoints.
    ///
    /// An end without a start is discarded, yielding an empty range.
    #[must_use]
    pub fn from_parts(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end),
            (Some(start), None) => Self::starting_at(start),
            (None, _) => Self::empty(),
        }
    }

    /// Returns the start day, if any.
    #[must_use]
    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    /// Returns the end day, if any.
    #[must_use]
    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Returns `true` if neither endpoint is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    /// Returns `true` if both endpoints are set.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.end.is_some()
    }

    /// Returns `(start, end)` for a complete range.
    #[must_use]
    pub fn endpoints(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.start?, self.end?))
    }

    /// Returns `true` if `day` lies inside a complete range, endpoints included.
    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.endpoints()
            .is_some_and(|(start, end)| start <= day && day <= end)
    }

    /// Returns `true` for a complete range that starts and ends on the same day.
    #[must_use]
    pub fn is_single_day(&self) -> bool {
        self.endpoints().is_some_and(|(start, end)| start == end)
    }
}

#[cfg(feature = "serde")]
#[derive(Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
struct RangeParts {
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

#[cfg(feature = "serde")]
impl From<RangeParts> for DateRange {
    fn from(parts: RangeParts) -> Self {
        Self::from_parts(parts.start_date, parts.end_date)
    }
}

#[cfg(feature = "serde")]
impl From<DateRange> for RangeParts {
    fn from(range: DateRange) -> Self {
        Self {
            start_date: range.start,
            end_date: range.end,
        }
    }
}

/// A labelled shortcut range, such as "Last Month".
///
/// Presets are plain data supplied by the embedder. Applying one goes through
/// the same commit path as a two-click selection, including clamping.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefinedRange {
    /// Human-readable label shown next to the calendars.
    pub label: String,
    /// First day of the preset.
    pub start_date: NaiveDate,
    /// Last day of the preset.
    pub end_date: NaiveDate,
}

impl DefinedRange {
    /// Creates a preset.
    #[must_use]
    pub fn new(label: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            label: label.into(),
            start_date,
            end_date,
        }
    }

    /// Returns the preset as a complete [`DateRange`].
    #[must_use]
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    /// Returns `true` if `current` covers exactly the same days as this preset.
    ///
    /// Used to highlight the active preset in a list.
    #[must_use]
    pub fn is_selected(&self, current: &DateRange) -> bool {
        self.range() == *current
    }
}

/// Returns the stock presets relative to `today`.
///
/// Weeks start on Sunday. Presets that would fall outside chrono's
/// representable range are omitted.
#[must_use]
pub fn default_ranges(today: NaiveDate) -> Vec<DefinedRange> {
    let week_ago = today.checked_sub_days(Days::new(7));
    let presets = [
        ("Today", Some((today, today))),
        ("Yesterday", today.pred_opt().map(|day| (day, day))),
        ("This Week", week_of(today)),
        ("Last Week", week_ago.and_then(week_of)),
        ("Last 7 Days", week_ago.map(|start| (start, today))),
        ("This Month", month_of(today)),
        ("Last Month", add_months(today, -1).and_then(month_of)),
    ];
    presets
        .into_iter()
        .filter_map(|(label, span)| span.map(|(start, end)| DefinedRange::new(label, start, end)))
        .collect()
}

fn week_of(date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let offset = u64::from(date.weekday().num_days_from_sunday());
    let start = date.checked_sub_days(Days::new(offset))?;
    Some((start, start.checked_add_days(Days::new(6))?))
}

fn month_of(date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let start = month_start(date);
    let end = add_months(start, 1)?.pred_opt()?;
    Some((start, end))
}
