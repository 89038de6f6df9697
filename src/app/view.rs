// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the active screen under a shared top bar and layers the toast
//! overlay on top.

use super::{Message, Screen};
use crate::catalog::CatalogService;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::home;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::theming::ThemeMode;
use crate::ui::translator;
use iced::widget::{button, space, tooltip, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub translator: &'a translator::State,
    pub catalog: &'a CatalogService,
    pub notifications: &'a Manager,
    pub theme_mode: ThemeMode,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen_content: Element<'_, Message> = match ctx.screen {
        Screen::Home => home::view(home::ViewContext { i18n: ctx.i18n }).map(Message::Home),
        Screen::Translator => translator::view(
            ctx.translator,
            translator::ViewContext {
                i18n: ctx.i18n,
                supported: ctx.catalog.supported(),
                targets: ctx.catalog.targets(),
                catalog_loaded: ctx.catalog.is_loaded(),
            },
        )
        .map(Message::Translator),
    };

    let page = Column::new().push(top_bar(&ctx)).push(
        Container::new(screen_content)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(
            Container::new(page)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(toasts)
        .into()
}

fn top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut bar = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(alignment::Vertical::Center);

    if ctx.screen == Screen::Translator {
        let back = button(Text::new(ctx.i18n.tr("nav-back")).size(typography::BODY))
            .on_press(Message::SwitchScreen(Screen::Home))
            .style(button::text);
        bar = bar.push(back);
    }

    bar = bar.push(space::horizontal());

    // Shows the mode the toggle switches *to*.
    let theme_glyph = if ctx.theme_mode.is_dark() {
        "\u{2600}"
    } else {
        "\u{1F319}"
    };
    let theme_button = button(Text::new(theme_glyph).size(typography::BODY_LG))
        .on_press(Message::ToggleTheme)
        .style(button::text);
    bar = bar.push(tooltip(
        theme_button,
        Text::new(ctx.i18n.tr("theme-toggle")).size(typography::CAPTION),
        tooltip::Position::Bottom,
    ));

    bar.into()
}
