// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::{scenarios, App, Message};
use crate::alert::ErrorAlert;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, text, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let i18n = &app.i18n;

    let heading = Text::new(i18n.tr("demo-heading")).size(typography::TITLE_LG);
    let intro = Text::new(i18n.tr("demo-intro")).size(typography::BODY);

    let mut triggers = Column::new().spacing(spacing::XS).width(Length::Fill);
    for scenario in scenarios::ALL {
        triggers = triggers.push(
            button(Text::new(i18n.tr(scenario.label_key())).size(typography::BODY))
                .on_press(Message::Trigger(scenario))
                .padding(spacing::XS)
                .width(Length::Fill)
                .style(button_styles::secondary),
        );
    }

    let status = Text::new(i18n.tr(app.status.message_key()))
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().secondary.base.text),
        });

    let panel = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(heading)
            .push(intro)
            .push(triggers)
            .push(status),
    )
    .width(Length::Fill)
    .max_width(sizing::DEMO_CONTENT_WIDTH)
    .padding(spacing::LG)
    .style(container_styles::panel);

    let screen = Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::LG);

    ErrorAlert::new(app.error.as_ref(), Message::AlertDismissed)
        .labels(
            i18n.tr("alert-default-title"),
            i18n.tr("alert-dismiss"),
            i18n.tr("alert-fallback-message"),
        )
        .view(screen)
}
