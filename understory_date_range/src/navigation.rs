// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Month navigation for the two calendars.
//!
//! Each calendar has a back and a forward button. A step is only taken if the
//! calendars stay in order afterwards; otherwise it is dropped, so buttons can
//! stay clickable and navigation stops by itself where the calendars would
//! meet. [`NavState`] tells renderers which buttons are worth enabling.

use chrono::NaiveDate;
use tracing::debug;

use crate::anchors::MonthAnchors;
use crate::month::add_months;

/// Identifies one of the two calendars.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Marker {
    /// The left calendar, showing the earlier month.
    First,
    /// The right calendar, showing the later month.
    Second,
}

/// A one-month step requested by a navigation button.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum NavigationAction {
    /// One month back.
    Previous,
    /// One month forward.
    Next,
}

impl NavigationAction {
    /// The signed month offset of this step.
    #[must_use]
    pub const fn delta(self) -> i32 {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// Which navigation buttons of one calendar should be enabled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NavState {
    /// The "previous month" button.
    pub back: bool,
    /// The "next month" button.
    pub forward: bool,
}

/// Returns the month `marker` would show after `action`, if the step is allowed.
///
/// The first calendar may move as long as it stays strictly before the
/// second; the second as long as it stays strictly after the first.
#[must_use]
pub fn navigation_target(
    anchors: &MonthAnchors,
    marker: Marker,
    action: NavigationAction,
) -> Option<NaiveDate> {
    let candidate = add_months(anchors.get(marker), action.delta())?;
    let allowed = match marker {
        Marker::First => candidate < anchors.second(),
        Marker::Second => anchors.first() < candidate,
    };
    allowed.then_some(candidate)
}

/// Button state for `marker`'s calendar.
///
/// Outward buttons are always enabled; inward buttons only while the calendars
/// are at least two months apart.
#[must_use]
pub fn nav_state(anchors: &MonthAnchors, marker: Marker) -> NavState {
    let closer = anchors.can_navigate_closer();
    match marker {
        Marker::First => NavState {
            back: true,
            forward: closer,
        },
        Marker::Second => NavState {
            back: closer,
            forward: true,
        },
    }
}

impl MonthAnchors {
    /// Steps `marker`'s calendar by one month if the calendars stay in order.
    ///
    /// Returns the newly shown month, or `None` if the step was dropped.
    pub fn navigate(&mut self, marker: Marker, action: NavigationAction) -> Option<NaiveDate> {
        let Some(target) = navigation_target(self, marker, action) else {
            debug!(?marker, ?action, "month navigation would collide, ignoring");
            return None;
        };
        self.set(marker, target);
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn adjacent_calendars_cannot_move_inward() {
        let mut anchors = MonthAnchors::new(ymd(2024, 3, 1), ymd(2024, 4, 1));

        assert_eq!(anchors.navigate(Marker::First, NavigationAction::Next), None);
        assert_eq!(anchors.navigate(Marker::Second, NavigationAction::Previous), None);
        assert_eq!(anchors, MonthAnchors::new(ymd(2024, 3, 1), ymd(2024, 4, 1)));
    }

    #[test]
    fn outward_navigation_is_always_allowed() {
        let mut anchors = MonthAnchors::new(ymd(2024, 3, 1), ymd(2024, 4, 1));

        assert_eq!(
            anchors.navigate(Marker::First, NavigationAction::Previous),
            Some(ymd(2024, 2, 1))
        );
        assert_eq!(
            anchors.navigate(Marker::Second, NavigationAction::Next),
            Some(ymd(2024, 5, 1))
        );
        assert_eq!(anchors.months_apart(), 3);
    }

    #[test]
    fn inward_navigation_stops_at_neighbouring_months() {
        let mut anchors = MonthAnchors::new(ymd(2024, 1, 1), ymd(2024, 4, 1));

        assert!(anchors.navigate(Marker::First, NavigationAction::Next).is_some());
        assert!(anchors.navigate(Marker::Second, NavigationAction::Previous).is_some());
        assert_eq!(anchors.first(), ymd(2024, 2, 1));
        assert_eq!(anchors.second(), ymd(2024, 3, 1));
        assert!(anchors.navigate(Marker::First, NavigationAction::Next).is_none());
    }

    #[test]
    fn nav_state_tracks_gap() {
        let adjacent = MonthAnchors::new(ymd(2024, 3, 1), ymd(2024, 4, 1));
        assert_eq!(
            nav_state(&adjacent, Marker::First),
            NavState {
                back: true,
                forward: false
            }
        );
        assert_eq!(
            nav_state(&adjacent, Marker::Second),
            NavState {
                back: false,
                forward: true
            }
        );

        let apart = MonthAnchors::new(ymd(2024, 3, 1), ymd(2024, 6, 1));
        let both = NavState {
            back: true,
            forward: true,
        };
        assert_eq!(nav_state(&apart, Marker::First), both);
        assert_eq!(nav_state(&apart, Marker::Second), both);
    }
}
