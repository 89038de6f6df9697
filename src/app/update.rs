// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers the main `update`
//! function dispatches to. Handlers receive an [`UpdateContext`] with
//! mutable references to the relevant application state.

use super::{config, Message, Screen};
use crate::catalog::CatalogService;
use crate::translate;
use crate::ui::home;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::translator;
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub translator: &'a mut translator::State,
    pub catalog: &'a mut CatalogService,
    pub theme_mode: &'a mut ThemeMode,
    pub client: &'a translate::Client,
    pub notifications: &'a mut notifications::Manager,
}

/// Handles navigation between screens.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    // Leaving the translator mid-request: the eventual completion must
    // not land on a screen the user has left.
    if *ctx.screen == Screen::Translator && target != Screen::Translator {
        ctx.translator.invalidate_pending();
    }

    *ctx.screen = target;

    // Re-validate the language pair each time the translator becomes
    // visible with a loaded catalog, not only on the first load.
    if target == Screen::Translator && ctx.catalog.is_loaded() {
        ctx.translator
            .apply_catalog(ctx.catalog.supported(), ctx.catalog.targets());
    }

    Task::none()
}

/// Handles home screen messages.
pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: home::Message) -> Task<Message> {
    match message {
        home::Message::StartTranslating => handle_screen_switch(ctx, Screen::Translator),
    }
}

/// Handles translation screen messages.
pub fn handle_translator_message(
    ctx: &mut UpdateContext<'_>,
    message: translator::Message,
) -> Task<Message> {
    match message {
        translator::Message::InputChanged(value) => {
            ctx.translator.input = value;
            Task::none()
        }
        translator::Message::SourceSelected(language) => {
            ctx.translator.source_code = language.code().to_string();
            persist_preferences(ctx)
        }
        translator::Message::TargetSelected(language) => {
            ctx.translator.target_code = language.code().to_string();
            persist_preferences(ctx)
        }
        translator::Message::SwapLanguages => {
            if ctx.translator.swap_languages() {
                persist_preferences(ctx)
            } else {
                Task::none()
            }
        }
        translator::Message::TranslatePressed => handle_translate_pressed(ctx),
        translator::Message::TranslationCompleted { seq, result } => {
            match ctx.translator.settle(seq, result) {
                translator::Settlement::Stale => {}
                translator::Settlement::Success => {
                    ctx.notifications.clear_translation_errors();
                }
                translator::Settlement::Failed { detail } => {
                    ctx.notifications.push(
                        Notification::error("notification-translate-error")
                            .with_arg("detail", detail),
                    );
                }
            }
            Task::none()
        }
        translator::Message::CopyResult => {
            if ctx.translator.has_result() {
                ctx.notifications
                    .push(Notification::success("notification-copied"));
                iced::clipboard::write(ctx.translator.translated.clone())
            } else {
                Task::none()
            }
        }
    }
}

/// Dispatches one translation request, or short-circuits on empty input.
fn handle_translate_pressed(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(text) = ctx.translator.prepare_input() else {
        // Nothing translatable: clear the previous result and stay idle.
        ctx.translator.clear_output();
        return Task::none();
    };

    let seq = ctx.translator.begin_request();
    let client = ctx.client.clone();
    let source = ctx.translator.source_code.clone();
    let target = ctx.translator.target_code.clone();

    Task::perform(
        async move { client.translate(&text, &source, &target).await },
        move |result| Message::Translator(translator::Message::TranslationCompleted { seq, result }),
    )
}

/// Flips the theme immediately and persists the choice in the background.
pub fn handle_theme_toggle(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.theme_mode = ctx.theme_mode.toggled();
    persist_preferences(ctx)
}

/// Installs the catalog produced by the startup task.
pub fn handle_catalog_loaded(
    ctx: &mut UpdateContext<'_>,
    service: CatalogService,
) -> Task<Message> {
    // First completed load wins; the cache is never replaced afterwards.
    if !ctx.catalog.is_loaded() {
        *ctx.catalog = service;
    }

    ctx.translator
        .apply_catalog(ctx.catalog.supported(), ctx.catalog.targets());
    Task::none()
}

/// Persists the theme and language pair as an unawaited background write.
///
/// Deliberately fire-and-forget: last write wins, and the only
/// acknowledgment is a warning toast when the write fails. Guarded during
/// tests to keep them isolated from the real settings file.
pub fn persist_preferences(ctx: &UpdateContext<'_>) -> Task<Message> {
    if cfg!(test) {
        return Task::none();
    }

    let theme_mode = *ctx.theme_mode;
    let source = ctx.translator.source_code.clone();
    let target = ctx.translator.target_code.clone();

    Task::perform(
        async move {
            let (mut cfg, _) = config::load();
            cfg.general.theme_mode = theme_mode;
            cfg.translator.source_language = Some(source);
            cfg.translator.target_language = Some(target);

            match config::save(&cfg) {
                Ok(()) => None,
                Err(error) => {
                    eprintln!("Failed to save preferences: {:?}", error);
                    Some("notification-config-save-error".to_string())
                }
            }
        },
        Message::PreferencesSaved,
    )
}
