// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the two screens.
//!
//! The `App` struct wires together the language catalog, the translation
//! client, localization, and persisted preferences, and translates
//! messages into side effects like provider calls or config writes. Policy
//! decisions (default window size, persistence behavior, theme mapping)
//! stay close to the main update loop so user-facing behavior is easy to
//! audit.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::catalog::CatalogService;
use crate::i18n::fluent::I18n;
use crate::translate;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use crate::ui::translator;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state bridging the screens, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    translator: translator::State,
    /// Once-per-process language catalog cache, populated by the startup task.
    catalog: CatalogService,
    theme_mode: ThemeMode,
    /// Shared HTTP client for translation requests.
    client: translate::Client,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("catalog_loaded", &self.catalog.is_loaded())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Home,
            translator: translator::State::default(),
            catalog: CatalogService::new(),
            theme_mode: ThemeMode::default(),
            client: translate::Client::new(),
            notifications: notifications::Manager::new(),
        }
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
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
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
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from persisted preferences and kicks
    /// off the asynchronous catalog load.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;
        app.translator =
            translator::State::new(config.source_language(), config.target_language());

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        // Preload the catalog so the translator's dropdowns are populated
        // by the time the user navigates there.
        let task = Task::perform(async { CatalogService::load() }, Message::CatalogLoaded);

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::from(self.theme_mode)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            translator: &mut self.translator,
            catalog: &mut self.catalog,
            theme_mode: &mut self.theme_mode,
            client: &self.client,
            notifications: &mut self.notifications,
        };

        match message {
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::Home(home_message) => update::handle_home_message(&mut ctx, home_message),
            Message::Translator(translator_message) => {
                update::handle_translator_message(&mut ctx, translator_message)
            }
            Message::ToggleTheme => update::handle_theme_toggle(&mut ctx),
            Message::CatalogLoaded(service) => update::handle_catalog_loaded(&mut ctx, service),
            Message::PreferencesSaved(warning) => {
                if let Some(key) = warning {
                    self.notifications
                        .push(notifications::Notification::warning(&key));
                }
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            translator: &self.translator,
            catalog: &self.catalog,
            notifications: &self.notifications,
            theme_mode: self.theme_mode,
        })
    }
}
