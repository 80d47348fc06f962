// SPDX-License-Identifier: MPL-2.0
//! Widget-layer code, split into screen components and shared pieces.
//!
//! Every component follows the Elm shape: state flows down into `view`
//! functions, messages flow back up through the application update loop.
//!
//! - [`submission_details`] - Submission content, attempt history, and the
//!   comments, files, and rubric drawer
//! - [`components`] - Reusable building blocks (error panel)
//! - [`styles`] - Widget styling shared across screens
//! - [`design_tokens`] - Palette, spacing, sizing, and typography constants
//! - [`toasts`] - Transient toast feedback for refresh and preview results

pub mod components;
pub mod design_tokens;
pub mod styles;
pub mod submission_details;
pub mod toasts;
