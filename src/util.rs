// SPDX-License-Identifier: MPL-2.0
//! Small formatting helpers shared by the presenters, plus the system
//! browser hand-off.

use crate::error::{Error, Result};
use chrono::{DateTime, TimeZone};
use std::process::Command;

/// Formats a point value with up to two decimals, trimming trailing zeros.
///
/// `25.0` renders as `25`, `12.5` as `12.5`, `3.333` as `3.33`.
pub fn format_points(value: f64) -> String {
    let mut text = format!("{value:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

/// Renders a timestamp as "Jan 5 at 3:24 PM", with the connective word
/// supplied by the caller so it can be localized.
pub fn month_day_at_time<Tz: TimeZone>(timestamp: &DateTime<Tz>, at_word: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{} {} {}",
        timestamp.format("%b %-d"),
        at_word,
        timestamp.format("%-I:%M %p")
    )
}

/// Opens the given link in the platform's default browser.
///
/// The browser runs detached; this only reports failures to launch it.
pub fn open_in_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    let mut command = {
        let mut c = Command::new("open");
        c.arg(url);
        c
    };

    #[cfg(target_os = "windows")]
    let mut command = {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", "", url]);
        c
    };

    #[cfg(all(unix, not(target_os = "macos")))]
    let mut command = {
        let mut c = Command::new("xdg-open");
        c.arg(url);
        c
    };

    command
        .spawn()
        .map_err(|e| Error::Io(format!("Failed to open browser: {e}")))?;
    Ok(())
}
