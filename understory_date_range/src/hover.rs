// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover preview: the provisional span between a picked start and the day under the pointer.

use chrono::NaiveDate;

use crate::selection::SelectionState;

/// Returns the `(start, hover)` span to preview, if any.
///
/// There is a preview only while a start has been picked but no end, and only
/// when the hovered day lies strictly after the start.
#[must_use]
pub fn preview_span(state: &SelectionState, hover: Option<NaiveDate>) -> Option<(NaiveDate, NaiveDate)> {
    match (*state, hover) {
        (SelectionState::StartSelected { start }, Some(hover)) if hover > start => {
            Some((start, hover))
        }
        _ => None,
    }
}

/// Returns `true` if `day` should be highlighted as part of the hover preview.
#[must_use]
pub fn in_hover_range(state: &SelectionState, hover: Option<NaiveDate>, day: NaiveDate) -> bool {
    preview_span(state, hover).is_some_and(|(start, end)| start <= day && day <= end)
}
