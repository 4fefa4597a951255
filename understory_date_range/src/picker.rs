// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A complete two-calendar picker session.
//!
//! [`DateRangePicker`] owns the bounds, the displayed months, and the range
//! being selected, and routes renderer events to them:
//!
//! - day clicks and hovers go to the [`RangeSelection`],
//! - navigation buttons go through the [navigation guard](crate::navigation),
//! - every commit re-aligns the [`MonthAnchors`] on the new range and is
//!   reported exactly once, both as a return value and to the optional
//!   change listener.
//!
//! Invalid gestures never fail; they leave the session unchanged.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use chrono::NaiveDate;
use tracing::debug;

use crate::anchors::MonthAnchors;
use crate::bounds::{BoundInput, DateBounds};
use crate::clamp::clamp_range;
use crate::navigation::{self, Marker, NavState, NavigationAction};
use crate::range::{DateRange, DefinedRange, default_ranges};
use crate::selection::{ClickOutcome, OutOfOrderClick, RangeSelection, SelectionState};

/// Session configuration, typically deserialized from embedder settings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PickerOptions {
    /// Earliest selectable day. Defaults to ten years before today.
    pub min_date: Option<BoundInput>,
    /// Latest selectable day. Defaults to ten years after today.
    pub max_date: Option<BoundInput>,
    /// Range shown when the session opens.
    pub initial_range: Option<DateRange>,
    /// Preset ranges. Defaults to [`default_ranges`].
    pub defined_ranges: Option<Vec<DefinedRange>>,
    /// What a click before the picked start does.
    pub out_of_order_click: OutOfOrderClick,
}

/// Flags a day cell needs to paint itself.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DayState {
    /// The day is the range start.
    pub is_start: bool,
    /// The day is the end of a committed range.
    pub is_end: bool,
    /// The day lies inside the committed range, endpoints included.
    pub in_range: bool,
    /// The day lies inside the hover preview.
    pub in_hover_range: bool,
    /// The committed range is this single day.
    pub is_single_day_range: bool,
    /// The day is outside the bounds and cannot be picked.
    pub is_disabled: bool,
    /// The day is the session's "today".
    pub is_today: bool,
}

type ChangeListener = Box<dyn FnMut(&DateRange)>;

/// Interaction state for a two-calendar date range picker.
///
/// ## Minimal example
///
/// ```
/// use chrono::NaiveDate;
/// use understory_date_range::{DateRange, DateRangePicker, PickerOptions};
///
/// let ymd = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// let mut picker = DateRangePicker::new(PickerOptions::default(), ymd(2024, 3, 1));
///
/// picker.on_day_click(ymd(2024, 3, 5));
/// let outcome = picker.on_day_click(ymd(2024, 3, 20));
/// assert_eq!(outcome.committed(), Some(DateRange::new(ymd(2024, 3, 5), ymd(2024, 3, 20))));
///
/// // Both days are in March, so April is shown next to it.
/// assert_eq!(picker.first_month(), ymd(2024, 3, 1));
/// assert_eq!(picker.second_month(), ymd(2024, 4, 1));
/// ```
pub struct DateRangePicker {
    today: NaiveDate,
    bounds: DateBounds,
    anchors: MonthAnchors,
    selection: RangeSelection,
    defined_ranges: Vec<DefinedRange>,
    on_change: Option<ChangeListener>,
}

impl fmt::Debug for DateRangePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateRangePicker")
            .field("today", &self.today)
            .field("bounds", &self.bounds)
            .field("anchors", &self.anchors)
            .field("selection", &self.selection)
            .field("defined_ranges", &self.defined_ranges)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl DateRangePicker {
    /// Opens a session.
    ///
    /// Bounds are resolved from the options (see [`DateBounds::resolve`]). A
    /// complete initial range is clamped and the calendars open on it;
    /// otherwise they open on `today` and the following month. Opening does not
    /// count as a change.
    #[must_use]
    pub fn new(options: PickerOptions, today: NaiveDate) -> Self {
        let PickerOptions {
            min_date,
            max_date,
            initial_range,
            defined_ranges,
            out_of_order_click,
        } = options;
        let bounds = DateBounds::resolve(min_date.as_ref(), max_date.as_ref(), today);
        let initial = clamp_range(initial_range.unwrap_or_default(), &bounds);
        Self {
            today,
            bounds,
            anchors: MonthAnchors::for_range(initial, &bounds, today),
            selection: RangeSelection::with_range(initial, out_of_order_click),
            defined_ranges: defined_ranges.unwrap_or_else(|| default_ranges(today)),
            on_change: None,
        }
    }

    /// Opens a session using the local clock's current day as "today".
    #[cfg(feature = "std")]
    #[must_use]
    pub fn with_local_today(options: PickerOptions) -> Self {
        Self::new(options, chrono::Local::now().date_naive())
    }

    /// Installs a listener called once for every committed range.
    pub fn set_on_change(&mut self, listener: impl FnMut(&DateRange) + 'static) {
        self.on_change = Some(Box::new(listener));
    }

    /// Removes the change listener.
    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    /// Returns the session's "today".
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Returns the selectable window.
    #[must_use]
    pub fn bounds(&self) -> DateBounds {
        self.bounds
    }

    /// Returns the displayed months.
    #[must_use]
    pub fn anchors(&self) -> MonthAnchors {
        self.anchors
    }

    /// Returns the month shown by the first calendar.
    #[must_use]
    pub fn first_month(&self) -> NaiveDate {
        self.anchors.first()
    }

    /// Returns the month shown by the second calendar.
    #[must_use]
    pub fn second_month(&self) -> NaiveDate {
        self.anchors.second()
    }

    /// Returns the current range, possibly partial.
    #[must_use]
    pub fn range(&self) -> DateRange {
        self.selection.range()
    }

    /// Returns the selection protocol state.
    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.selection.state()
    }

    /// Returns how an out-of-order second click is handled.
    #[must_use]
    pub fn out_of_order_click(&self) -> OutOfOrderClick {
        self.selection.policy()
    }

    /// Drops the current selection without notifying.
    ///
    /// The calendars stay where they are.
    pub fn clear(&mut self) {
        self.selection.clear();
    }

    /// Returns the last hovered or clicked day.
    #[must_use]
    pub fn hover_day(&self) -> Option<NaiveDate> {
        self.selection.hover_day()
    }

    /// Returns the presets offered next to the calendars.
    #[must_use]
    pub fn defined_ranges(&self) -> &[DefinedRange] {
        &self.defined_ranges
    }

    /// Returns the preset matching the current range, if any.
    #[must_use]
    pub fn selected_preset(&self) -> Option<&DefinedRange> {
        let range = self.range();
        self.defined_ranges
            .iter()
            .find(|preset| preset.is_selected(&range))
    }

    /// Handles a click on a day cell.
    ///
    /// A completing click re-aligns the calendars on the committed range and
    /// notifies the change listener.
    pub fn on_day_click(&mut self, day: NaiveDate) -> ClickOutcome {
        let outcome = self.selection.click(day, &self.bounds);
        if let Some(range) = outcome.committed() {
            self.after_commit(range);
        }
        outcome
    }

    /// Handles the pointer entering a day cell. Returns `true` if the hover
    /// preview may have changed.
    pub fn on_day_hover(&mut self, day: NaiveDate) -> bool {
        self.selection.hover(day)
    }

    /// Handles a navigation button. Returns the newly shown month, or `None`
    /// if the step would make the calendars collide.
    pub fn on_month_navigate(&mut self, marker: Marker, action: NavigationAction) -> Option<NaiveDate> {
        self.anchors.navigate(marker, action)
    }

    /// Shows the month containing `date` in the first calendar, if it stays
    /// before the second.
    pub fn set_first_month(&mut self, date: NaiveDate) -> bool {
        self.anchors.set_first(date)
    }

    /// Shows the month containing `date` in the second calendar, if it stays
    /// after the first.
    pub fn set_second_month(&mut self, date: NaiveDate) -> bool {
        self.anchors.set_second(date)
    }

    /// Commits `range` directly, clamped into the bounds.
    ///
    /// Partial ranges are ignored. Returns the committed range.
    pub fn apply_range(&mut self, range: DateRange) -> Option<DateRange> {
        let committed = self.selection.commit(range, &self.bounds)?;
        self.after_commit(committed);
        Some(committed)
    }

    /// Commits a preset, as if its range had been selected by hand.
    pub fn apply_defined_range(&mut self, preset: &DefinedRange) -> Option<DateRange> {
        self.apply_range(preset.range())
    }

    /// Commits the preset labelled `label` from this session's list.
    pub fn apply_preset_by_label(&mut self, label: &str) -> Option<DateRange> {
        let Some(range) = self
            .defined_ranges
            .iter()
            .find(|preset| preset.label == label)
            .map(DefinedRange::range)
        else {
            debug!(label, "no preset with this label, ignoring");
            return None;
        };
        self.apply_range(range)
    }

    /// Replaces the selectable window.
    ///
    /// A committed range is clamped into the new window and the calendars are
    /// re-aligned on it. If clamping changed the range, the new range is
    /// reported like any other commit and returned.
    ///
    /// Without a committed range nothing is reported. A picked start that falls
    /// outside the new window is dropped, and the calendars move to the kept
    /// start, or to today clamped into the window.
    pub fn set_bounds(&mut self, bounds: DateBounds) -> Option<DateRange> {
        self.bounds = bounds;
        let current = self.range();
        if !current.is_complete() {
            let mut focus = self.today;
            if let Some(start) = self.state().start() {
                if self.bounds.contains(start) {
                    focus = start;
                } else {
                    debug!(%start, "bounds change dropped picked start");
                    self.selection.clear();
                }
            }
            self.anchors = MonthAnchors::starting_at(self.bounds.clamp(focus));
            return None;
        }
        let clamped = clamp_range(current, &self.bounds);
        if clamped == current {
            self.anchors.commit_range(current, &self.bounds);
            return None;
        }
        debug!(from = ?current, to = ?clamped, "bounds change clamped committed range");
        self.apply_range(clamped)
    }

    /// Returns `true` if `day` lies in the hover preview.
    #[must_use]
    pub fn in_hover_range(&self, day: NaiveDate) -> bool {
        self.selection.in_hover_range(day)
    }

    /// Returns `true` if the calendars can move towards each other.
    #[must_use]
    pub fn can_navigate_closer(&self) -> bool {
        self.anchors.can_navigate_closer()
    }

    /// Returns the button state for `marker`'s calendar.
    #[must_use]
    pub fn nav_state(&self, marker: Marker) -> NavState {
        navigation::nav_state(&self.anchors, marker)
    }

    /// Returns the painting flags for `day`.
    #[must_use]
    pub fn day_state(&self, day: NaiveDate) -> DayState {
        let range = self.range();
        DayState {
            is_start: range.start() == Some(day),
            is_end: range.end() == Some(day),
            in_range: range.contains(day),
            in_hover_range: self.in_hover_range(day),
            is_single_day_range: range.is_single_day(),
            is_disabled: !self.bounds.contains(day),
            is_today: day == self.today,
        }
    }

    fn after_commit(&mut self, range: DateRange) {
        self.anchors.commit_range(range, &self.bounds);
        if let Some(listener) = self.on_change.as_mut() {
            listener(&range);
        }
    }
}
