// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deserializing [`PickerOptions`] from embedder configuration.

#![cfg(feature = "serde")]

use chrono::NaiveDate;
use understory_date_range::{
    BoundInput, DateRange, DateRangePicker, DefinedRange, OutOfOrderClick, PickerOptions,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn empty_object_gives_defaults() {
    let options: PickerOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(options, PickerOptions::default());
}

#[test]
fn bounds_accept_dates_and_loose_text() {
    let options: PickerOptions = serde_json::from_str(
        r#"{
            "min_date": "2024-01-01",
            "max_date": "12/31/2024",
            "out_of_order_click": "reject"
        }"#,
    )
    .unwrap();

    assert_eq!(options.min_date, Some(BoundInput::Date(ymd(2024, 1, 1))));
    assert_eq!(options.max_date, Some(BoundInput::Text("12/31/2024".into())));
    assert_eq!(options.out_of_order_click, OutOfOrderClick::Reject);

    let picker = DateRangePicker::new(options, ymd(2024, 3, 10));
    assert_eq!(picker.bounds().max(), ymd(2024, 12, 31));
}

#[test]
fn ranges_and_presets_deserialize() {
    let options: PickerOptions = serde_json::from_str(
        r#"{
            "initial_range": { "start_date": "2024-05-20", "end_date": "2024-05-01" },
            "defined_ranges": [
                { "label": "Sprint", "start_date": "2024-05-06", "end_date": "2024-05-17" }
            ]
        }"#,
    )
    .unwrap();

    // Inverted input is normalized.
    assert_eq!(
        options.initial_range,
        Some(DateRange::new(ymd(2024, 5, 1), ymd(2024, 5, 20)))
    );
    assert_eq!(
        options.defined_ranges,
        Some(vec![DefinedRange::new("Sprint", ymd(2024, 5, 6), ymd(2024, 5, 17))])
    );
}

#[test]
fn end_without_start_deserializes_as_empty() {
    let range: DateRange = serde_json::from_str(r#"{ "end_date": "2024-05-01" }"#).unwrap();
    assert!(range.is_empty());
}
