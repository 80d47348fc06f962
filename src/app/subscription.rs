// SPDX-License-Identifier: MPL-2.0
//! Time-based subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Periodic ticks driving the toast sweep. Absent while no toast is up so
/// the app stays idle.
pub fn sweep_ticks(toasts_showing: bool) -> Subscription<Message> {
    if toasts_showing {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
