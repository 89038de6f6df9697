// SPDX-License-Identifier: MPL-2.0
//! Translation screen: language pair selection, text input, and the
//! request state machine.
//!
//! The screen is a small state machine: idle, one request in flight, then
//! settled with either the provider's text or a fixed error message. Each
//! dispatched request captures a sequence number; a completion whose
//! sequence is no longer current is discarded wholesale, so a stale
//! response can never overwrite a newer one and completions arriving after
//! a reset touch nothing.

use crate::catalog::{Language, AUTO_CODE};
use crate::error::TranslateError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use iced::widget::{
    button, container, pick_list, text, text_input, tooltip, Column, Container, Row, Text,
};
use iced::{alignment, Element, Length, Theme};

/// Fixed in-place message shown when a translation attempt fails.
pub const TRANSLATE_ERROR_MESSAGE: &str =
    "Error: Could not translate text. Please check your internet connection or language pair.";

/// Longest prefix of the raw error shown in the failure toast.
const ERROR_DETAIL_MAX_CHARS: usize = 100;

/// Fallback target when a freshly loaded catalog has no target entries.
const FALLBACK_TARGET_CODE: &str = "en";

/// Messages produced by the translation screen.
#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    SourceSelected(Language),
    TargetSelected(Language),
    SwapLanguages,
    TranslatePressed,
    TranslationCompleted {
        seq: u64,
        result: Result<String, TranslateError>,
    },
    CopyResult,
}

/// How a completion was applied to the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// The completion belonged to a superseded request and was discarded.
    Stale,
    /// The provider's text is now displayed.
    Success,
    /// The fixed error message is displayed; `detail` is the truncated
    /// raw error for the failure toast.
    Failed { detail: String },
}

/// Translation screen state.
#[derive(Debug, Clone)]
pub struct State {
    pub input: String,
    pub translated: String,
    pub source_code: String,
    pub target_code: String,
    pub is_loading: bool,
    /// Generation fence: completions must match to be applied.
    request_seq: u64,
}

impl State {
    #[must_use]
    pub fn new(source_code: String, target_code: String) -> Self {
        Self {
            input: String::new(),
            translated: String::new(),
            source_code,
            target_code,
            is_loading: false,
            request_seq: 0,
        }
    }

    /// The trimmed input, or `None` when nothing translatable was typed.
    #[must_use]
    pub fn prepare_input(&self) -> Option<String> {
        let trimmed = self.input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Clears any previous result without touching the input.
    pub fn clear_output(&mut self) {
        self.translated.clear();
    }

    /// Enters the loading state and returns the sequence number the
    /// dispatched request must echo back.
    pub fn begin_request(&mut self) -> u64 {
        self.is_loading = true;
        self.translated.clear();
        self.request_seq += 1;
        self.request_seq
    }

    /// Applies a request completion.
    ///
    /// Order inside a settle is fixed: the result (or the error literal)
    /// lands first, clearing the loading flag is always the last step, on
    /// every branch. Stale completions change nothing at all.
    pub fn settle(
        &mut self,
        seq: u64,
        result: Result<String, TranslateError>,
    ) -> Settlement {
        if seq != self.request_seq {
            return Settlement::Stale;
        }

        let settlement = match result {
            Ok(translated) => {
                self.translated = translated;
                Settlement::Success
            }
            Err(error) => {
                self.translated = TRANSLATE_ERROR_MESSAGE.to_string();
                Settlement::Failed {
                    detail: truncate_error_detail(&error.to_string()),
                }
            }
        };

        self.is_loading = false;
        settlement
    }

    /// Invalidates any in-flight request so its completion is discarded.
    pub fn invalidate_pending(&mut self) {
        if self.is_loading {
            self.request_seq += 1;
            self.is_loading = false;
        }
    }

    /// Replaces out-of-catalog selections with valid ones.
    ///
    /// Runs every time the catalog is applied to the screen, not just
    /// once: a source absent from `supported` falls back to its first
    /// entry (or the auto sentinel), a target absent from `targets` falls
    /// back to its first entry (or English).
    pub fn apply_catalog(&mut self, supported: &[Language], targets: &[Language]) {
        if !supported.iter().any(|l| l.code() == self.source_code) {
            self.source_code = supported
                .first()
                .map(|l| l.code().to_string())
                .unwrap_or_else(|| AUTO_CODE.to_string());
        }
        if !targets.iter().any(|l| l.code() == self.target_code) {
            self.target_code = targets
                .first()
                .map(|l| l.code().to_string())
                .unwrap_or_else(|| FALLBACK_TARGET_CODE.to_string());
        }
    }

    /// Exchanges the language pair. No-op while the source is the
    /// auto-detect sentinel (there is no concrete language to move to the
    /// target slot). Returns whether a swap happened.
    pub fn swap_languages(&mut self) -> bool {
        if self.source_code == AUTO_CODE {
            return false;
        }
        std::mem::swap(&mut self.source_code, &mut self.target_code);
        true
    }

    /// Whether the result area currently shows a copyable translation.
    #[must_use]
    pub fn has_result(&self) -> bool {
        !self.is_loading && !self.translated.is_empty()
    }

    /// The sequence number of the request currently in flight, if any.
    #[must_use]
    pub fn pending_request(&self) -> Option<u64> {
        self.is_loading.then_some(self.request_seq)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(AUTO_CODE.to_string(), FALLBACK_TARGET_CODE.to_string())
    }
}

/// Context required to render the translation screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub supported: &'a [Language],
    pub targets: &'a [Language],
    pub catalog_loaded: bool,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let language_row: Element<'a, Message> = if ctx.catalog_loaded {
        let selected_source = ctx
            .supported
            .iter()
            .find(|l| l.code() == state.source_code)
            .cloned();
        let selected_target = ctx
            .targets
            .iter()
            .find(|l| l.code() == state.target_code)
            .cloned();

        let source_picker = pick_list(
            ctx.supported.to_vec(),
            selected_source,
            Message::SourceSelected,
        )
        .width(Length::Fixed(sizing::PICK_LIST_WIDTH));

        let target_picker = pick_list(
            ctx.targets.to_vec(),
            selected_target,
            Message::TargetSelected,
        )
        .width(Length::Fixed(sizing::PICK_LIST_WIDTH));

        let swap_button = button(Text::new("\u{21C4}").size(typography::BODY_LG))
            .on_press_maybe(
                (state.source_code != AUTO_CODE).then_some(Message::SwapLanguages),
            )
            .padding(spacing::XS)
            .style(button::secondary);
        let swap_button = tooltip(
            swap_button,
            Text::new(ctx.i18n.tr("translator-swap")).size(typography::CAPTION),
            tooltip::Position::Bottom,
        );

        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(labeled(ctx.i18n.tr("translator-source-label"), source_picker.into()))
            .push(swap_button)
            .push(labeled(ctx.i18n.tr("translator-target-label"), target_picker.into()))
            .into()
    } else {
        Text::new(ctx.i18n.tr("translator-loading-languages"))
            .size(typography::BODY)
            .into()
    };

    let input = text_input(&ctx.i18n.tr("translator-input-placeholder"), &state.input)
        .on_input(Message::InputChanged)
        .on_submit(Message::TranslatePressed)
        .size(typography::BODY_LG)
        .padding(spacing::SM);

    let translate_button = button(
        Text::new(ctx.i18n.tr("translator-translate-button")).size(typography::BODY),
    )
    .on_press(Message::TranslatePressed)
    .padding([spacing::XS, spacing::LG])
    .style(button::primary);

    let result_area = view_result(state, ctx.i18n);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(language_row)
        .push(input)
        .push(translate_button)
        .push(result_area);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::XL)
        .into()
}

fn labeled<'a>(label: String, widget: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::CAPTION))
        .push(widget)
        .into()
}

fn view_result<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let body: Element<'a, Message> = if state.is_loading {
        Text::new(i18n.tr("translator-translating"))
            .size(typography::BODY_LG)
            .into()
    } else if state.translated.is_empty() {
        Text::new(i18n.tr("translator-result-placeholder"))
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(iced::Color {
                    a: opacity::DIMMED_TEXT,
                    ..theme.palette().text
                }),
            })
            .into()
    } else {
        Text::new(&state.translated).size(typography::BODY_LG).into()
    };

    let mut column = Column::new().spacing(spacing::SM).push(
        Container::new(body)
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(container::bordered_box),
    );

    if state.has_result() {
        let copy_button = button(
            Text::new(i18n.tr("translator-copy-button")).size(typography::CAPTION),
        )
        .on_press(Message::CopyResult)
        .padding(spacing::XXS)
        .style(button::secondary);

        column = column.push(copy_button);
    }

    column.into()
}

/// Truncates a raw error rendering to its first 100 characters, appending
/// an ellipsis when something was cut.
#[must_use]
pub fn truncate_error_detail(raw: &str) -> String {
    if raw.chars().count() <= ERROR_DETAIL_MAX_CHARS {
        return raw.to_string();
    }
    let mut truncated: String = raw.chars().take(ERROR_DETAIL_MAX_CHARS).collect();
    truncated.push('\u{2026}');
    truncated
}
