// SPDX-License-Identifier: MPL-2.0
//! The application message type and startup flags.

use crate::canvas::client::DataResult;
use crate::ui::submission_details::component;
use crate::ui::submission_details::rubric;
use crate::ui::toasts;
use std::time::Instant;

/// Everything `App::update` reacts to. Component messages arrive wrapped
/// so each screen keeps its own message enum.
#[derive(Debug, Clone)]
pub enum Message {
    Details(component::Message),
    Rubric(rubric::component::Message),
    /// An authenticated preview download finished. `url` identifies the
    /// request so stale results can be dropped.
    PreviewLoaded {
        url: String,
        result: DataResult<Vec<u8>>,
    },
    Toast(toasts::Message),
    Tick(Instant),
}

/// Launch parameters assembled by `main.rs` from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// UI locale in BCP-47 form (`fr`, `en-US`), skipping detection.
    pub lang: Option<String>,
    /// Directory of `.ftl` files replacing the embedded catalog.
    pub i18n_dir: Option<String>,
    /// Where to look for `settings.toml`, winning over the
    /// `SUBMISSION_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Platform domain, overriding the configured one.
    pub domain: Option<String>,
    /// API access token, overriding the configured one.
    pub token: Option<String>,
    /// Course to open, overriding the configured one.
    pub course_id: Option<i64>,
    /// Assignment to open, overriding the configured one.
    pub assignment_id: Option<i64>,
}
