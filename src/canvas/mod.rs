// SPDX-License-Identifier: MPL-2.0
//! Data access layer for the learning platform's REST API.
//!
//! This module owns the payload models, the typed client, and the small pure
//! helpers that derive view-facing facts from raw payloads (submission status,
//! MIME resolution, deep links). Everything here is UI-agnostic except the
//! preview cache, which stores decoded image handles for the content area.

pub mod client;
pub mod links;
pub mod mime;
pub mod models;
pub mod previews;
pub mod status;
