// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted picker sessions: load a TOML script, replay its gestures against a
//! [`DateRangePicker`], and report where the session ended up.

use std::cell::RefCell;
use std::fmt;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt as subscriber_fmt};
use understory_date_range::{DateRange, DateRangePicker, Marker, NavigationAction, PickerOptions};

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set.
    pub level: String,
    /// `pretty` or `json`.
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                subscriber_fmt().json().with_env_filter(filter).init();
            }
            _ => {
                subscriber_fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

/// One renderer event.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Gesture {
    /// A click on a day cell.
    Click {
        /// The clicked day.
        day: NaiveDate,
    },
    /// The pointer entering a day cell.
    Hover {
        /// The hovered day.
        day: NaiveDate,
    },
    /// A navigation button.
    Navigate {
        /// Which calendar.
        marker: Marker,
        /// Which direction.
        action: NavigationAction,
    },
    /// A click on a preset.
    Preset {
        /// The preset's label.
        label: String,
    },
}

/// A session script.
#[derive(Debug, Deserialize)]
pub struct Script {
    /// The day the session believes is today. Defaults to the local clock.
    pub today: Option<NaiveDate>,
    /// Logging setup.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Picker configuration.
    #[serde(default)]
    pub options: PickerOptions,
    /// Gestures, replayed in order.
    #[serde(default)]
    pub events: Vec<Gesture>,
}

impl Script {
    /// Reads a script from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read session script {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid session script {}", path.display()))
    }

    /// Parses a script from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Where a replayed session ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    /// Final range, possibly partial.
    pub range: DateRange,
    /// Month shown by the first calendar.
    pub first_month: NaiveDate,
    /// Month shown by the second calendar.
    pub second_month: NaiveDate,
    /// Every range reported to the change listener, in order.
    pub commits: Vec<DateRange>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |day: Option<NaiveDate>| day.map_or_else(|| "-".to_owned(), |d| d.to_string());
        writeln!(f, "range:    {} .. {}", show(self.range.start()), show(self.range.end()))?;
        writeln!(
            f,
            "months:   {} | {}",
            self.first_month.format("%Y-%m"),
            self.second_month.format("%Y-%m")
        )?;
        write!(f, "commits:  {}", self.commits.len())
    }
}

/// Replays `script` against a fresh picker.
pub fn replay(script: Script, today: NaiveDate) -> Report {
    let mut picker = DateRangePicker::new(script.options, today);
    let commits = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&commits);
    picker.set_on_change(move |range| sink.borrow_mut().push(*range));

    for gesture in script.events {
        match gesture {
            Gesture::Click { day } => {
                let outcome = picker.on_day_click(day);
                info!(%day, ?outcome, "click");
            }
            Gesture::Hover { day } => {
                picker.on_day_hover(day);
            }
            Gesture::Navigate { marker, action } => {
                let shown = picker.on_month_navigate(marker, action);
                info!(?marker, ?action, ?shown, "navigate");
            }
            Gesture::Preset { label } => {
                let committed = picker.apply_preset_by_label(&label);
                info!(%label, ?committed, "preset");
            }
        }
    }

    let commits = commits.borrow().clone();
    Report {
        range: picker.range(),
        first_month: picker.first_month(),
        second_month: picker.second_month(),
        commits,
    }
}
