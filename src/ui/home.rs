// SPDX-License-Identifier: MPL-2.0
//! Landing screen: branding and the entry point into the translator.

use crate::i18n::fluent::I18n;
use crate::icon;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use iced::widget::{button, svg, text, Column, Container, Svg, Text};
use iced::{alignment, Element, Length, Theme};

/// Messages produced by the home screen.
#[derive(Debug, Clone)]
pub enum Message {
    StartTranslating,
}

/// Context required to render the home screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_LG);

    let tagline = Text::new(ctx.i18n.tr("home-tagline"))
        .size(typography::BODY_LG)
        .style(|theme: &Theme| text::Style {
            color: Some(iced::Color {
                a: opacity::DIMMED_TEXT,
                ..theme.palette().text
            }),
        });

    let start_button = button(
        Text::new(ctx.i18n.tr("home-start-button")).size(typography::BODY_LG),
    )
    .on_press(Message::StartTranslating)
    .padding([spacing::SM, spacing::XL])
    .style(button::primary);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(logo())
        .push(title)
        .push(tagline)
        .push(start_button);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// The embedded SVG mark, or a plain glyph when the asset is missing.
fn logo<'a>() -> Element<'a, Message> {
    match icon::logo_svg() {
        Some(bytes) => Svg::new(svg::Handle::from_memory(bytes))
            .width(Length::Fixed(sizing::LOGO))
            .height(Length::Fixed(sizing::LOGO))
            .into(),
        None => Text::new("\u{1F310}").size(sizing::LOGO * 0.75).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_renders_without_panicking() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n });
    }
}
