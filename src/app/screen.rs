// SPDX-License-Identifier: MPL-2.0
//! Top-level screen selection.

/// Which full-window view the application is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The submission details screen, the normal mode of the app.
    Details,
    /// Shown when no usable domain and token could be assembled at startup.
    MissingCredentials,
}
