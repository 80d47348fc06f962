// SPDX-License-Identifier: MPL-2.0
//! Submission details screen: classifies what a submission holds, renders the
//! attempt history, and drives the comments, files, and rubric drawer.

pub mod component;
pub mod content;
pub mod presenter;
pub mod rubric;
pub mod view;
