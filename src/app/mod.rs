// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the details screen, the
//! rubric drawer, and the network layer.
//!
//! The `App` struct owns every piece of long-lived state (loaded data,
//! preview cache, toasts) and runs the effects the screen components
//! request. This file intentionally keeps policy decisions (credential
//! resolution order, window sizing, which effects touch the network) close
//! to the main update loop so it is easy to audit user-facing behavior.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::canvas::client::{CanvasClient, SubmissionDetailsService};
use crate::canvas::previews::PreviewCache;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::submission_details::{component, rubric};
use crate::ui::toasts::{self, Toast};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Root Iced application state that bridges the details screen, the rubric
/// drawer, localization, and the platform client.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    details: component::State,
    /// Present once a load round-trip delivered both halves successfully.
    rubric: Option<rubric::component::State>,
    previews: PreviewCache,
    /// Absent when no usable credentials were found at startup.
    service: Option<Arc<dyn SubmissionDetailsService>>,
    toasts: toasts::Toasts,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("is_loading", &self.details.is_loading)
            .field("has_service", &self.service.is_some())
            .finish()
    }
}

// Wide enough for the details pane and the rubric drawer side by side.
const WINDOW_DEFAULT_SIZE: Size = Size::new(960.0, 720.0);
const WINDOW_MIN_SIZE: Size = Size::new(700.0, 560.0);

/// Hands control to the Iced runtime until the window closes.
pub fn run(flags: Flags) -> iced::Result {
    paths::init_cli_override(flags.config_dir.clone());

    // iced calls boot through Fn, so hand it a clone of the flags.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: WINDOW_DEFAULT_SIZE,
            min_size: Some(WINDOW_MIN_SIZE),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Details,
            details: component::State::new(String::new(), 0, 0),
            rubric: None,
            previews: PreviewCache::new(),
            service: None,
            toasts: toasts::Toasts::new(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the first load when
    /// credentials could be assembled from `Flags` and the config file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.toasts.push(Toast::warning(key));
        }

        // Command line wins over the config file, field by field.
        let domain = flags.domain.clone().or(config.api.domain.clone());
        let token = flags.token.clone().or(config.api.access_token.clone());
        let course_id = flags.course_id.or(config.course.course_id);
        let assignment_id = flags.assignment_id.or(config.course.assignment_id);

        let (Some(domain), Some(token), Some(course_id), Some(assignment_id)) =
            (domain, token, course_id, assignment_id)
        else {
            app.screen = Screen::MissingCredentials;
            return (app, Task::none());
        };

        let client = match CanvasClient::new(&domain, &token) {
            Ok(client) => client,
            Err(error) => {
                warn!(%error, domain, "could not build the platform client");
                app.screen = Screen::MissingCredentials;
                return (app, Task::none());
            }
        };

        app.details = component::State::new(client.domain(), course_id, assignment_id);
        app.service = Some(Arc::new(client));

        let effect = app.details.init();
        let task = {
            let mut ctx = app.update_context();
            update::perform_effect(&mut ctx, effect)
        };

        (app, task)
    }

    /// Borrows the mutable state slices the update handlers work on.
    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            details: &mut self.details,
            rubric: &mut self.rubric,
            previews: &mut self.previews,
            service: self.service.as_ref(),
            toasts: &mut self.toasts,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.details.loaded_assignment() {
            Some(assignment) if !assignment.name.is_empty() => {
                format!("{} - {app_name}", assignment.name)
            }
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::sweep_ticks(!self.toasts.is_empty())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Details(details_message) => {
                let mut ctx = self.update_context();
                update::handle_details_message(&mut ctx, details_message)
            }
            Message::Rubric(rubric_message) => {
                let mut ctx = self.update_context();
                update::handle_rubric_message(&mut ctx, rubric_message)
            }
            Message::PreviewLoaded { url, result } => {
                let mut ctx = self.update_context();
                update::handle_preview_loaded(&mut ctx, url, result)
            }
            Message::Toast(toast_message) => {
                self.toasts.handle_message(&toast_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.toasts.sweep();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            details: &self.details,
            rubric: self.rubric.as_ref(),
            toasts: &self.toasts,
        })
    }
}
