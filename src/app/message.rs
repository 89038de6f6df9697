// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::CatalogService;
use crate::ui::home;
use crate::ui::notifications;
use crate::ui::translator;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SwitchScreen(Screen),
    Home(home::Message),
    Translator(translator::Message),
    Notification(notifications::NotificationMessage),
    /// The startup task finished reading the bundled language catalog.
    CatalogLoaded(CatalogService),
    /// Flip between light and dark mode.
    ToggleTheme,
    /// A background preferences write finished; carries a warning key on failure.
    PreferencesSaved(Option<String>),
    /// Periodic tick driving toast auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ICED_LINGO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
