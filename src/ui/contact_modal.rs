// SPDX-License-Identifier: MPL-2.0
//! Contact dialog of a profile.

use crate::app::Message;
use crate::contact::{self, Field};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, opaque, text_input, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Renders the dialog, or `None` while it is closed.
pub fn view<'a>(
    i18n: &'a I18n,
    photographer_name: &'a str,
    state: &'a contact::State,
) -> Option<Element<'a, Message>> {
    if !state.is_open() {
        return None;
    }

    let title = Text::new(i18n.tr_with_args(
        "contact-title",
        &[("name", photographer_name.to_string())],
    ))
    .size(typography::TITLE_LG)
    .color(palette::BLACK);

    let close = styles::tooltip::styled(
        button(Text::new("✕").size(typography::TITLE_MD))
            .style(styles::button::closeup_control(false))
            .on_press(Message::Contact(contact::Message::Close)),
        i18n.tr("contact-close"),
        styles::tooltip::Position::Bottom,
    );

    let header = Row::new()
        .align_y(alignment::Vertical::Top)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(close);

    let fields = Field::ALL
        .iter()
        .fold(Column::new().spacing(spacing::SM), |column, &field| {
            column.push(field_view(i18n, state, field))
        });

    let send = button(
        Text::new(i18n.tr("contact-send"))
            .size(typography::BODY_LG)
            .center(),
    )
    .height(sizing::BUTTON_HEIGHT)
    .padding([spacing::XS, spacing::LG])
    .style(styles::button::primary)
    .on_press(Message::Contact(contact::Message::Submit));

    let dialog = Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(header)
            .push(fields)
            .push(send),
    )
    .padding(spacing::XL)
    .width(sizing::MODAL_WIDTH)
    .style(styles::container::modal);

    let overlay = Container::new(dialog)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::backdrop);

    Some(opaque(overlay))
}

fn field_view<'a>(i18n: &'a I18n, state: &'a contact::State, field: Field) -> Element<'a, Message> {
    let label = i18n.tr(field.label_key());

    let input = text_input(&label, state.form().value(field))
        .on_input(move |value| Message::Contact(contact::Message::FieldChanged(field, value)))
        .on_submit(Message::Contact(contact::Message::Submit))
        .padding(spacing::XS)
        .size(typography::BODY_LG);

    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY_LG))
        .push(input);

    if state.is_invalid(field) {
        column = column.push(
            Container::new(Text::new(i18n.tr(field.error_key())).size(typography::CAPTION))
                .style(styles::container::field_error),
        );
    }

    column.into()
}
