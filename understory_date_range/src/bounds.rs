// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The selectable window `[min, max]` and how it is resolved from loose input.
//!
//! Embedders often receive bounds as text (from markup attributes, query
//! strings, or config files). [`DateBounds::resolve`] accepts either a date or a
//! string per bound and never fails: anything missing or unparseable falls back
//! to ten years either side of "today".
//!
//! ## Minimal example
//!
//! ```
//! use chrono::NaiveDate;
//! use understory_date_range::bounds::{BoundInput, DateBounds};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
//! let min = BoundInput::from("2024-01-01");
//! let max = BoundInput::from("not a date");
//!
//! let bounds = DateBounds::resolve(Some(&min), Some(&max), today);
//! assert_eq!(bounds.min(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
//! assert_eq!(bounds.max(), NaiveDate::from_ymd_opt(2034, 3, 10).unwrap());
//! ```

use alloc::string::String;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

use crate::month::add_years;

/// How far the default window reaches either side of "today", in years.
pub const DEFAULT_SPAN_YEARS: i32 = 10;

/// Day-only formats tried, in order, by [`parse_date`].
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Error returned by [`parse_date`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoundParseError {
    /// The input was empty or only whitespace.
    #[error("empty date string")]
    Empty,
    /// The input matched none of the accepted formats.
    #[error("unrecognized date `{input}`")]
    Unrecognized {
        /// The trimmed input.
        input: String,
    },
}

/// Parses a calendar day from text.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, `MM/DD/YYYY`, RFC 3339 timestamps, and
/// ISO 8601 local date-times. Timestamps keep only their calendar day as
/// written; no time zone conversion happens.
pub fn parse_date(input: &str) -> Result<NaiveDate, BoundParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(BoundParseError::Empty);
    }
    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
    {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Ok(timestamp.date_naive());
    }
    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|timestamp| timestamp.date())
        .map_err(|_| BoundParseError::Unrecognized {
            input: String::from(input),
        })
}

/// A bound as supplied by the embedder: either a day or text to be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum BoundInput {
    /// An already-parsed day.
    Date(NaiveDate),
    /// Text parsed with [`parse_date`].
    Text(String),
}

impl BoundInput {
    /// Resolves the input to a day.
    pub fn to_date(&self) -> Result<NaiveDate, BoundParseError> {
        match self {
            Self::Date(date) => Ok(*date),
            Self::Text(text) => parse_date(text),
        }
    }
}

impl From<NaiveDate> for BoundInput {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<&str> for BoundInput {
    fn from(text: &str) -> Self {
        Self::Text(String::from(text))
    }
}

impl From<String> for BoundInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// The inclusive window of selectable days.
///
/// Invariant: `min < max`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DateBounds {
    min: NaiveDate,
    max: NaiveDate,
}

impl DateBounds {
    /// Creates a window from two days.
    ///
    /// Inverted input is swapped. A single-day window is widened by one day so
    /// that `min < max` holds.
    #[must_use]
    pub fn new(min: NaiveDate, max: NaiveDate) -> Self {
        let (min, max) = if max < min {
            warn!(%min, %max, "date bounds are inverted, swapping");
            (max, min)
        } else {
            (min, max)
        };
        if min == max {
            debug!(%min, "single-day date bounds, widening by one day");
            if let Some(next) = max.succ_opt() {
                return Self { min, max: next };
            }
            if let Some(previous) = min.pred_opt() {
                return Self { min: previous, max };
            }
        }
        Self { min, max }
    }

    /// The default window: [`DEFAULT_SPAN_YEARS`] either side of `today`.
    #[must_use]
    pub fn around(today: NaiveDate) -> Self {
        Self {
            min: add_years(today, -DEFAULT_SPAN_YEARS).unwrap_or(NaiveDate::MIN),
            max: add_years(today, DEFAULT_SPAN_YEARS).unwrap_or(NaiveDate::MAX),
        }
    }

    /// The default window around the local clock's current day.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn around_local_today() -> Self {
        Self::around(chrono::Local::now().date_naive())
    }

    /// Resolves optional, possibly textual bounds.
    ///
    /// Each bound that is absent or fails to parse is replaced with its default
    /// from [`DateBounds::around`]. Parse failures are logged, not returned.
    #[must_use]
    pub fn resolve(min: Option<&BoundInput>, max: Option<&BoundInput>, today: NaiveDate) -> Self {
        let defaults = Self::around(today);
        Self::new(
            resolve_bound("min", min, defaults.min),
            resolve_bound("max", max, defaults.max),
        )
    }

    /// Returns the earliest selectable day.
    #[must_use]
    pub fn min(&self) -> NaiveDate {
        self.min
    }

    /// Returns the latest selectable day.
    #[must_use]
    pub fn max(&self) -> NaiveDate {
        self.max
    }

    /// Returns `true` if `day` is selectable.
    #[must_use]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.min <= day && day <= self.max
    }

    /// Moves `day` into the window.
    #[must_use]
    pub fn clamp(&self, day: NaiveDate) -> NaiveDate {
        day.clamp(self.min, self.max)
    }
}

fn resolve_bound(which: &'static str, input: Option<&BoundInput>, fallback: NaiveDate) -> NaiveDate {
    match input.map(BoundInput::to_date) {
        None => fallback,
        Some(Ok(date)) => date,
        Some(Err(err)) => {
            warn!(bound = which, %err, %fallback, "unusable date bound, using default");
            fallback
        }
    }
}
