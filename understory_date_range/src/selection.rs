// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-click range selection.
//!
//! ## Usage
//!
//! 1) Feed every day click to [`RangeSelection::click`]. The first click picks a
//!    start, the second (on or after the start) commits the range.
//! 2) While a start is picked, feed pointer movement to
//!    [`RangeSelection::hover`] and query [`RangeSelection::in_hover_range`]
//!    when painting days.
//! 3) Apply presets or programmatic ranges with [`RangeSelection::commit`].
//!
//! A click after a committed range starts over; the old range is discarded.
//!
//! ## Minimal example
//!
//! ```
//! use chrono::NaiveDate;
//! use understory_date_range::bounds::DateBounds;
//! use understory_date_range::selection::{ClickOutcome, OutOfOrderClick, RangeSelection};
//! use understory_date_range::DateRange;
//!
//! let ymd = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
//! let bounds = DateBounds::around(ymd(2024, 3, 1));
//! let mut selection = RangeSelection::new(OutOfOrderClick::Restart);
//!
//! assert_eq!(selection.click(ymd(2024, 3, 10), &bounds), ClickOutcome::Started(ymd(2024, 3, 10)));
//! selection.hover(ymd(2024, 3, 15));
//! assert!(selection.in_hover_range(ymd(2024, 3, 12)));
//!
//! let committed = DateRange::new(ymd(2024, 3, 10), ymd(2024, 3, 20));
//! assert_eq!(selection.click(ymd(2024, 3, 20), &bounds), ClickOutcome::Committed(committed));
//! assert_eq!(selection.range(), committed);
//! ```

use chrono::NaiveDate;
use tracing::debug;

use crate::bounds::DateBounds;
use crate::clamp::clamp_range;
use crate::hover;
use crate::range::DateRange;

/// Where a selection is in the two-click protocol.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelectionState {
    /// Nothing picked yet.
    #[default]
    Empty,
    /// A start day has been picked; the next suitable click ends the range.
    StartSelected {
        /// The picked start day.
        start: NaiveDate,
    },
    /// A complete range, `start <= end`.
    Committed {
        /// First day of the range.
        start: NaiveDate,
        /// Last day of the range.
        end: NaiveDate,
    },
}

impl SelectionState {
    /// Returns the selection as a [`DateRange`].
    #[must_use]
    pub fn range(&self) -> DateRange {
        match *self {
            Self::Empty => DateRange::empty(),
            Self::StartSelected { start } => DateRange::starting_at(start),
            Self::Committed { start, end } => DateRange::new(start, end),
        }
    }

    /// Returns the start day, if one has been picked.
    #[must_use]
    pub fn start(&self) -> Option<NaiveDate> {
        match *self {
            Self::Empty => None,
            Self::StartSelected { start } | Self::Committed { start, .. } => Some(start),
        }
    }

    /// Returns `true` between the first and second click.
    #[must_use]
    pub fn is_start_selected(&self) -> bool {
        matches!(self, Self::StartSelected { .. })
    }
}

impl From<DateRange> for SelectionState {
    fn from(range: DateRange) -> Self {
        match (range.start(), range.end()) {
            (Some(start), Some(end)) => Self::Committed { start, end },
            (Some(start), None) => Self::StartSelected { start },
            (None, _) => Self::Empty,
        }
    }
}

/// What to do with a click on a day before the picked start.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum OutOfOrderClick {
    /// Start over with the clicked day as the new start.
    #[default]
    Restart,
    /// Ignore the click and keep the picked start.
    Reject,
}

/// The result of a day click.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ClickOutcome {
    /// The clicked day became the start of a new selection.
    Started(NaiveDate),
    /// The selection was completed. Carries the clamped range.
    Committed(DateRange),
    /// The click was ignored (only with [`OutOfOrderClick::Reject`]).
    Rejected,
}

impl ClickOutcome {
    /// Returns the committed range, if this click completed one.
    #[must_use]
    pub fn committed(&self) -> Option<DateRange> {
        match *self {
            Self::Committed(range) => Some(range),
            _ => None,
        }
    }
}

/// Click and hover state for building one range.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RangeSelection {
    state: SelectionState,
    hover: Option<NaiveDate>,
    policy: OutOfOrderClick,
}

impl RangeSelection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new(policy: OutOfOrderClick) -> Self {
        Self {
            state: SelectionState::Empty,
            hover: None,
            policy,
        }
    }

    /// Creates a selection already in the state described by `range`.
    ///
    /// The range is taken as-is; clamp it first if it may be out of bounds.
    #[must_use]
    pub fn with_range(range: DateRange, policy: OutOfOrderClick) -> Self {
        Self {
            state: range.into(),
            hover: None,
            policy,
        }
    }

    /// Returns the current protocol state.
    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Returns the current selection as a [`DateRange`].
    #[must_use]
    pub fn range(&self) -> DateRange {
        self.state.range()
    }

    /// Returns the last hovered (or clicked) day.
    #[must_use]
    pub fn hover_day(&self) -> Option<NaiveDate> {
        self.hover
    }

    /// Returns the out-of-order click policy.
    #[must_use]
    pub fn policy(&self) -> OutOfOrderClick {
        self.policy
    }

    /// Handles a click on `day`.
    ///
    /// - With no start picked, or after a committed range, `day` becomes the start.
    /// - With a start picked, a day on or after it commits `start..=day`,
    ///   clamped into `bounds`.
    /// - A day before the start restarts or is rejected, per [`OutOfOrderClick`].
    ///
    /// The hover day follows every click.
    pub fn click(&mut self, day: NaiveDate, bounds: &DateBounds) -> ClickOutcome {
        let outcome = match self.state {
            SelectionState::StartSelected { start } if day >= start => {
                let range = clamp_range(DateRange::new(start, day), bounds);
                self.state = range.into();
                debug!(?range, "range committed by click");
                ClickOutcome::Committed(range)
            }
            SelectionState::StartSelected { start } if self.policy == OutOfOrderClick::Reject => {
                debug!(%day, %start, "click before selected start, ignoring");
                ClickOutcome::Rejected
            }
            _ => {
                self.state = SelectionState::StartSelected { start: day };
                ClickOutcome::Started(day)
            }
        };
        self.hover = Some(day);
        outcome
    }

    /// Handles the pointer entering `day`.
    ///
    /// Only tracked between the first and second click. Returns `true` if the
    /// hover day changed.
    pub fn hover(&mut self, day: NaiveDate) -> bool {
        if !self.state.is_start_selected() || self.hover == Some(day) {
            return false;
        }
        self.hover = Some(day);
        true
    }

    /// Commits `range` directly, as when a preset is applied.
    ///
    /// The range is clamped into `bounds`. Partial or empty ranges are ignored.
    /// Returns the committed range.
    pub fn commit(&mut self, range: DateRange, bounds: &DateBounds) -> Option<DateRange> {
        let clamped = clamp_range(range, bounds);
        if !clamped.is_complete() {
            debug!(?range, "only complete ranges can be committed, ignoring");
            return None;
        }
        self.state = clamped.into();
        self.hover = None;
        debug!(range = ?clamped, "range committed");
        Some(clamped)
    }

    /// Returns to the empty state.
    pub fn clear(&mut self) {
        self.state = SelectionState::Empty;
        self.hover = None;
    }

    /// Returns the `(start, hover)` span currently previewed, if any.
    #[must_use]
    pub fn preview_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        hover::preview_span(&self.state, self.hover)
    }

    /// Returns `true` if `day` lies in the hover preview.
    #[must_use]
    pub fn in_hover_range(&self, day: NaiveDate) -> bool {
        hover::in_hover_range(&self.state, self.hover, day)
    }
}
