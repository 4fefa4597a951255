// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_date_range --heading-base-level=0

//! Understory Date Range: interaction state for two-calendar date range pickers.
//!
//! This crate handles the _decisions_ behind a range picker that shows two
//! months side by side: which days a sequence of clicks selects, how the two
//! calendars follow a committed range, which navigation steps are allowed, and
//! which days light up while the user hovers between the first and second
//! click. It does **not** draw anything or format dates; renderers feed it
//! click/hover/navigation events and read back a range, two months, and
//! per-day flags.
//!
//! ## Pieces
//!
//! - [`bounds`]: the selectable `[min, max]` window, resolved from optional or
//!   textual input with ten-year defaults.
//! - [`clamp`]: pure functions fitting a range into the window and choosing the
//!   months to display for it.
//! - [`anchors`]: the two displayed months, always distinct and in order.
//! - [`navigation`]: one-month steps for either calendar, dropped where the
//!   calendars would collide.
//! - [`selection`]: the two-click protocol (empty → start picked → committed).
//! - [`hover`]: the preview span between the picked start and the hovered day.
//! - [`picker`]: [`DateRangePicker`], a session combining all of the above.
//!
//! ## Minimal example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use understory_date_range::{
//!     DateRange, DateRangePicker, Marker, NavigationAction, PickerOptions,
//! };
//!
//! let ymd = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
//! let options = PickerOptions {
//!     min_date: Some("2024-01-01".into()),
//!     max_date: Some("2024-12-31".into()),
//!     ..PickerOptions::default()
//! };
//! let mut picker = DateRangePicker::new(options, ymd(2024, 3, 10));
//!
//! // The calendars show consecutive months, so they cannot move closer.
//! assert!(!picker.can_navigate_closer());
//! assert_eq!(picker.on_month_navigate(Marker::First, NavigationAction::Next), None);
//!
//! // First click picks the start, hovering previews the span.
//! picker.on_day_click(ymd(2024, 3, 10));
//! picker.on_day_hover(ymd(2024, 3, 15));
//! assert!(picker.in_hover_range(ymd(2024, 3, 12)));
//!
//! // Second click commits.
//! let committed = picker.on_day_click(ymd(2024, 5, 2)).committed();
//! assert_eq!(committed, Some(DateRange::new(ymd(2024, 3, 10), ymd(2024, 5, 2))));
//! assert_eq!(picker.second_month(), ymd(2024, 5, 1));
//! ```
//!
//! ## Error handling
//!
//! User interaction never produces an error. Steps that would break an
//! invariant (calendars colliding, an end before the start, bounds that do not
//! parse) are dropped or replaced with defaults, and logged at `debug`/`warn`
//! level through [`tracing`].
//!
//! ## Features
//!
//! - `std` (default): build against the standard library and enable reading
//!   "today" from the local clock.
//! - `serde` (default): `Serialize`/`Deserialize` for ranges, presets, markers
//!   and [`PickerOptions`].
//!
//! This crate is `no_std` compatible (with `alloc`) when `std` is disabled.

#![no_std]

extern crate alloc;

pub mod anchors;
pub mod bounds;
pub mod clamp;
pub mod hover;
pub mod month;
pub mod navigation;
pub mod picker;
pub mod range;
pub mod selection;

pub use anchors::MonthAnchors;
pub use bounds::{BoundInput, BoundParseError, DateBounds};
pub use clamp::{clamp_range, resolve_months_for_range};
pub use navigation::{Marker, NavState, NavigationAction};
pub use picker::{DateRangePicker, DayState, PickerOptions};
pub use range::{DateRange, DefinedRange, default_ranges};
pub use selection::{ClickOutcome, OutOfOrderClick, RangeSelection, SelectionState};
