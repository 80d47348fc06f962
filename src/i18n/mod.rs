// SPDX-License-Identifier: MPL-2.0
//! Localization built on Fluent.
//!
//! Picks a locale from the CLI, the config file, or the system settings,
//! loads the matching `.ftl` catalog (embedded by default, overridable
//! from disk), and formats every user-visible string. Missing messages
//! fall back to the default locale rather than panicking.

pub mod fluent;
