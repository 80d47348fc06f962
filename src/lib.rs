// SPDX-License-Identifier: MPL-2.0
//! `submission_lens` is a desktop viewer for assignment submissions, built
//! with the Iced GUI framework.
//!
//! It loads an assignment and its submission from the platform API, classifies
//! what the student turned in, and renders the right treatment for it along
//! with comments, submitted files, and the rubric assessment. Strings are
//! localized through Fluent and credentials come from CLI flags or a TOML
//! settings file.

#![doc(html_root_url = "https://docs.rs/submission_lens/0.1.0")]

pub mod app;
pub mod canvas;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
pub mod util;
