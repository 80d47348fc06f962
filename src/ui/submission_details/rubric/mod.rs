// SPDX-License-Identifier: MPL-2.0
//! Rubric drawer tab: grade summary and per-criterion assessment cards.

pub mod component;
pub mod grade_cell;
pub mod presenter;
pub mod view;
