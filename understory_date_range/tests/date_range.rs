// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_date_range` crate.
//!
//! These drive a whole [`DateRangePicker`] session the way a renderer would:
//! clicks, hovers, navigation buttons and presets, checking the committed
//! range, the displayed months and the change notifications together.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use understory_date_range::{
    ClickOutcome, DateBounds, DateRange, DateRangePicker, DefinedRange, Marker, NavigationAction,
    OutOfOrderClick, PickerOptions, SelectionState, clamp_range,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn options_2024() -> PickerOptions {
    PickerOptions {
        min_date: Some(ymd(2024, 1, 1).into()),
        max_date: Some(ymd(2024, 12, 31).into()),
        ..PickerOptions::default()
    }
}

fn picker_with_log(options: PickerOptions) -> (DateRangePicker, Rc<RefCell<Vec<DateRange>>>) {
    let mut picker = DateRangePicker::new(options, ymd(2024, 3, 10));
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    picker.set_on_change(move |range| sink.borrow_mut().push(*range));
    (picker, log)
}

#[test]
fn ordered_clicks_commit_the_range() {
    let (mut picker, log) = picker_with_log(options_2024());

    picker.on_day_click(ymd(2024, 3, 10));
    assert_eq!(picker.state(), SelectionState::StartSelected { start: ymd(2024, 3, 10) });

    picker.on_day_click(ymd(2024, 3, 18));
    assert_eq!(
        picker.state(),
        SelectionState::Committed {
            start: ymd(2024, 3, 10),
            end: ymd(2024, 3, 18)
        }
    );
    assert_eq!(*log.borrow(), vec![DateRange::new(ymd(2024, 3, 10), ymd(2024, 3, 18))]);
}

#[test]
fn earlier_second_click_is_rejected_under_reject_policy() {
    let options = PickerOptions {
        out_of_order_click: OutOfOrderClick::Reject,
        ..options_2024()
    };
    let (mut picker, log) = picker_with_log(options);

    picker.on_day_click(ymd(2024, 3, 10));
    assert_eq!(picker.on_day_click(ymd(2024, 3, 2)), ClickOutcome::Rejected);
    assert_eq!(picker.state(), SelectionState::StartSelected { start: ymd(2024, 3, 10) });
    assert!(log.borrow().is_empty());
}

#[test]
fn earlier_second_click_restarts_under_default_policy() {
    let (mut picker, log) = picker_with_log(options_2024());

    picker.on_day_click(ymd(2024, 3, 10));
    assert_eq!(picker.on_day_click(ymd(2024, 3, 2)), ClickOutcome::Started(ymd(2024, 3, 2)));
    assert_eq!(picker.state(), SelectionState::StartSelected { start: ymd(2024, 3, 2) });
    assert!(log.borrow().is_empty());
}

#[test]
fn hover_preview_bounds() {
    let (mut picker, _log) = picker_with_log(options_2024());

    picker.on_day_click(ymd(2024, 3, 10));
    picker.on_day_hover(ymd(2024, 3, 15));

    assert!(picker.in_hover_range(ymd(2024, 3, 12)));
    assert!(!picker.in_hover_range(ymd(2024, 3, 9)));
    assert!(!picker.in_hover_range(ymd(2024, 3, 16)));
}

#[test]
fn same_month_commit_forces_calendars_apart() {
    let (mut picker, _log) = picker_with_log(options_2024());
    picker.set_first_month(ymd(2024, 1, 1));
    picker.set_second_month(ymd(2024, 9, 1));

    picker.apply_range(DateRange::new(ymd(2024, 3, 5), ymd(2024, 3, 20)));

    assert_eq!(picker.first_month(), ymd(2024, 3, 1));
    assert_eq!(picker.second_month(), ymd(2024, 4, 1));
}

#[test]
fn committed_range_is_clamped_end_to_end() {
    let (mut picker, log) = picker_with_log(options_2024());

    let preset = DefinedRange::new("Long ago", ymd(2023, 6, 1), ymd(2024, 6, 1));
    let committed = picker.apply_defined_range(&preset);

    let expected = DateRange::new(ymd(2024, 1, 1), ymd(2024, 6, 1));
    assert_eq!(committed, Some(expected));
    assert_eq!(picker.range(), expected);
    assert_eq!(*log.borrow(), vec![expected]);
}

#[test]
fn click_after_commit_discards_previous_range() {
    let (mut picker, log) = picker_with_log(options_2024());

    picker.on_day_click(ymd(2024, 3, 10));
    picker.on_day_click(ymd(2024, 4, 10));
    picker.on_day_click(ymd(2024, 3, 20));

    assert_eq!(picker.range(), DateRange::starting_at(ymd(2024, 3, 20)));
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn navigation_never_collides() {
    let (mut picker, _log) = picker_with_log(options_2024());
    assert!(!picker.can_navigate_closer());

    assert_eq!(picker.on_month_navigate(Marker::First, NavigationAction::Next), None);
    assert_eq!(picker.on_month_navigate(Marker::Second, NavigationAction::Previous), None);

    assert_eq!(
        picker.on_month_navigate(Marker::Second, NavigationAction::Next),
        Some(ymd(2024, 5, 1))
    );
    assert!(picker.can_navigate_closer());
    assert!(picker.nav_state(Marker::First).forward);
    assert_eq!(
        picker.on_month_navigate(Marker::First, NavigationAction::Next),
        Some(ymd(2024, 4, 1))
    );
    assert!(!picker.nav_state(Marker::Second).back);
    assert!(picker.first_month() < picker.second_month());
}

#[test]
fn unparseable_bounds_fall_back_to_defaults() {
    let options = PickerOptions {
        min_date: Some("the beginning".into()),
        max_date: Some("2024-06-30".into()),
        ..PickerOptions::default()
    };
    let picker = DateRangePicker::new(options, ymd(2024, 3, 10));

    assert_eq!(picker.bounds(), DateBounds::new(ymd(2014, 3, 10), ymd(2024, 6, 30)));
}

#[test]
fn partial_initial_range_resumes_half_open() {
    let options = PickerOptions {
        initial_range: Some(DateRange::starting_at(ymd(2024, 7, 4))),
        ..options_2024()
    };
    let mut picker = DateRangePicker::new(options, ymd(2024, 3, 10));

    // Partial ranges do not move the calendars.
    assert_eq!(picker.first_month(), ymd(2024, 3, 1));
    assert_eq!(picker.state(), SelectionState::StartSelected { start: ymd(2024, 7, 4) });

    let outcome = picker.on_day_click(ymd(2024, 7, 9));
    assert_eq!(outcome.committed(), Some(DateRange::new(ymd(2024, 7, 4), ymd(2024, 7, 9))));
}

#[test]
fn clamp_is_idempotent_for_sample_ranges() {
    let bounds = DateBounds::new(ymd(2024, 1, 1), ymd(2024, 12, 31));
    for range in [
        DateRange::new(ymd(2023, 1, 1), ymd(2023, 2, 1)),
        DateRange::new(ymd(2023, 1, 1), ymd(2025, 2, 1)),
        DateRange::new(ymd(2024, 5, 1), ymd(2024, 5, 1)),
        DateRange::starting_at(ymd(2030, 1, 1)),
        DateRange::empty(),
    ] {
        let once = clamp_range(range, &bounds);
        assert_eq!(clamp_range(once, &bounds), once);
    }
}
