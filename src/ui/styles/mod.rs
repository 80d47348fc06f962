// SPDX-License-Identifier: MPL-2.0
//! Shared widget styles, grouped by widget kind.

pub mod button;
pub mod container;
pub mod overlay;
