// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across screens.
//!
//! - [`error_display`] - Error panel with a severity accent and an
//!   optional action button

pub mod error_display;
