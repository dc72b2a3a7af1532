// SPDX-License-Identifier: MPL-2.0
//! Closeup overlay drawn over the profile while the lightbox is open.
//!
//! Only renders what the controller and the gallery describe: the card in
//! closeup, its three controls and the focus ring of the trap.

use crate::app::{LightboxMessage, Message};
use crate::gallery::Gallery;
use crate::lightbox::{Control, FocusTarget, Lightbox};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::media_card::{self, CardContext};
use crate::ui::styles;
use iced::widget::{button, opaque, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Renders the overlay, or `None` when the lightbox is closed.
pub fn view<'a>(
    ctx: CardContext<'a>,
    lightbox: &'a Lightbox,
    gallery: &'a Gallery,
) -> Option<Element<'a, Message>> {
    let closeup = lightbox.closeup(gallery)?;
    let card = gallery.card(closeup.media_id)?;
    let focused = lightbox.focused();

    let media = button(media_card::media_view(
        ctx,
        &card.media,
        card.playback(),
        sizing::CLOSEUP_MAX_WIDTH - 2.0 * sizing::CLOSEUP_CONTROL,
        sizing::CLOSEUP_MEDIA_HEIGHT,
    ))
    .padding(0)
    .style(styles::button::link(focused == Some(FocusTarget::Media)))
    .on_press(Message::Lightbox(LightboxMessage::MediaPressed));

    let media = styles::tooltip::styled(
        media,
        card.media.alt_text().to_string(),
        styles::tooltip::Position::Bottom,
    );

    let figure = Column::new()
        .spacing(spacing::XS)
        .push(media)
        .push(
            Text::new(&card.media.title)
                .size(typography::TITLE_SM)
                .color(palette::BRAND_700),
        );

    let controls = |control: Control| -> Element<'a, Message> {
        let label = ctx.i18n.tr(control.label_key());
        let active = focused == Some(FocusTarget::Control(control));
        let widget = button(Text::new(control.glyph()).size(typography::TITLE_LG).center())
            .width(sizing::CLOSEUP_CONTROL)
            .height(sizing::CLOSEUP_CONTROL)
            .style(styles::button::closeup_control(active))
            .on_press(Message::Lightbox(LightboxMessage::Control(control)));

        styles::tooltip::styled(widget, label, styles::tooltip::Position::Bottom).into()
    };

    let layout = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(controls(Control::Previous))
        .push(figure)
        .push(
            Column::new()
                .height(sizing::CLOSEUP_MEDIA_HEIGHT)
                .push(controls(Control::Close))
                .push(iced::widget::Space::new().height(Length::Fill))
                .push(controls(Control::Next)),
        );

    let dialog = Container::new(layout)
        .padding(spacing::LG)
        .max_width(sizing::CLOSEUP_MAX_WIDTH)
        .style(styles::container::closeup);

    let overlay = Container::new(dialog)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::backdrop);

    Some(opaque(overlay))
}
