// SPDX-License-Identifier: MPL-2.0
//! Demo application wiring the alert component into a running Iced program.
//!
//! The `App` struct owns the error binding cell read by the alert presenter,
//! alongside localization and theming state. Failures raised from the demo
//! screen are normalized on the spot and stored in the cell; the alert's
//! dismiss message is the only thing that clears it again.

mod message;
pub mod scenarios;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::alert::AnyLocalizedError;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use scenarios::Scenario;

pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 360;

/// What the demo's status line reports about the last interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Raised(Scenario),
    Dismissed,
}

impl Status {
    /// Returns the i18n key for the status line.
    #[must_use]
    pub fn message_key(self) -> &'static str {
        match self {
            Status::Idle => "demo-status-idle",
            Status::Raised(_) => "demo-status-raised",
            Status::Dismissed => "demo-status-dismissed",
        }
    }
}

/// Root application state bridging the demo screen, localization, and the
/// error binding cell shared with the alert presenter.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    /// Binding cell read by the presenter and written back on dismiss.
    error: Option<AnyLocalizedError>,
    status: Status,
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            error: None,
            status: Status::default(),
        }
    }
}

impl App {
    /// Initializes application state from persisted preferences and the
    /// `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);
        let theme_mode = config.theme.unwrap_or_default();

        let app = App {
            i18n,
            theme_mode,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}
