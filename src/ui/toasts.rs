// SPDX-License-Identifier: MPL-2.0
//! Transient toast feedback.
//!
//! Refresh outcomes and preview failures surface as small cards in the
//! bottom-right corner instead of replacing screen content. At most
//! [`MAX_VISIBLE`] toasts show at once and later ones wait in an overflow
//! queue. Success toasts fade on a timer, warnings linger a little longer,
//! and errors stay until dismissed.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Toasts on screen at the same time.
const MAX_VISIBLE: usize = 3;

/// Fluent key for attachment preview failures. [`Toasts::clear_preview_failures`]
/// matches on it when a fresh load lands.
pub const PREVIEW_FAILURE_KEY: &str = "notification-preview-load-error";

/// Identifies one toast for dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// How urgently a toast wants attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn color(self) -> Color {
        match self {
            Self::Success => palette::SUCCESS_500,
            Self::Warning => palette::WARNING_500,
            Self::Error => palette::ERROR_500,
        }
    }

    /// Time on screen before the sweep retires the toast. Errors wait for
    /// the user.
    fn linger(self) -> Option<Duration> {
        match self {
            Self::Success => Some(Duration::from_secs(3)),
            Self::Warning => Some(Duration::from_secs(5)),
            Self::Error => None,
        }
    }
}

/// One toast. The text stays a Fluent key until render time so a locale
/// switch re-renders in the new language.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    severity: Severity,
    key: String,
    posted_at: Instant,
}

impl Toast {
    pub fn success(key: impl Into<String>) -> Self {
        Self::new(Severity::Success, key)
    }

    pub fn warning(key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, key)
    }

    pub fn error(key: impl Into<String>) -> Self {
        Self::new(Severity::Error, key)
    }

    fn new(severity: Severity, key: impl Into<String>) -> Self {
        Self {
            id: ToastId::next(),
            severity,
            key: key.into(),
            posted_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The Fluent key this toast renders.
    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.key
    }

    fn expired(&self) -> bool {
        self.severity
            .linger()
            .is_some_and(|linger| self.posted_at.elapsed() >= linger)
    }
}

/// Messages emitted by the toast overlay.
#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(ToastId),
}

/// The visible toasts plus the overflow queue.
#[derive(Debug, Default)]
pub struct Toasts {
    visible: VecDeque<Toast>,
    waiting: VecDeque<Toast>,
}

impl Toasts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the toast, or queues it when [`MAX_VISIBLE`] are already up.
    pub fn push(&mut self, toast: Toast) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(toast);
        } else {
            self.waiting.push_back(toast);
        }
    }

    /// Removes the toast wherever it currently lives. Returns `false` for
    /// ids that already expired or never existed.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        if let Some(pos) = self.visible.iter().position(|toast| toast.id == id) {
            self.visible.remove(pos);
            self.backfill();
            return true;
        }
        if let Some(pos) = self.waiting.iter().position(|toast| toast.id == id) {
            self.waiting.remove(pos);
            return true;
        }
        false
    }

    /// Retires every visible toast whose linger time has passed. Driven by
    /// the app tick subscription.
    pub fn sweep(&mut self) {
        let expired: Vec<ToastId> = self
            .visible
            .iter()
            .filter(|toast| toast.expired())
            .map(Toast::id)
            .collect();
        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.visible.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.waiting.is_empty()
    }

    /// Retires preview failure toasts after a fresh load, so stale
    /// complaints do not outlive the data they complained about.
    pub fn clear_preview_failures(&mut self) {
        let shown = self.visible.len();
        self.visible.retain(|toast| toast.key != PREVIEW_FAILURE_KEY);
        self.waiting.retain(|toast| toast.key != PREVIEW_FAILURE_KEY);
        if self.visible.len() < shown {
            self.backfill();
        }
    }

    fn backfill(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.waiting.pop_front() {
                Some(toast) => self.visible.push_back(toast),
                None => break,
            }
        }
    }
}

/// Bottom-right overlay stacking every visible toast. The caller skips the
/// overlay entirely while [`Toasts::is_empty`] holds.
pub fn overlay<'a>(toasts: &Toasts, i18n: &I18n) -> Element<'a, Message> {
    let cards = toasts.visible().map(|toast| card(toast, i18n));
    let column = Column::with_children(cards)
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

fn card<'a>(toast: &Toast, i18n: &I18n) -> Element<'a, Message> {
    let accent = toast.severity().color();

    let glyph_widget = Text::new(glyph(toast.severity()))
        .size(sizing::ICON_SM)
        .style(move |_theme: &Theme| text::Style {
            color: Some(accent),
        });

    let message_widget = Text::new(i18n.tr(toast.message_key()))
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    let dismiss = button(Text::new("×").size(typography::BODY_LG))
        .on_press(Message::Dismiss(toast.id()))
        .padding(spacing::XXS)
        .style(dismiss_style);

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(glyph_widget).padding(spacing::XXS))
        .push(
            Container::new(message_widget)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| card_style(theme, accent))
        .into()
}

fn glyph(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "✓",
        Severity::Warning | Severity::Error => "⚠",
    }
}

fn card_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// The dismiss button sits flat on the card and only shows a wash while
/// hovered or pressed.
fn dismiss_style(theme: &Theme, status: button::Status) -> button::Style {
    let wash = |alpha| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };
    let background = match status {
        button::Status::Active | button::Status::Disabled => None,
        button::Status::Hovered => wash(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => wash(opacity::OVERLAY_MEDIUM),
    };

    button::Style {
        background,
        text_color: theme.extended_palette().background.base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
