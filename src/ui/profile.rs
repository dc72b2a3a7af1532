// SPDX-License-Identifier: MPL-2.0
//! Photographer page: header, sort filter, gallery and the overlays.
//!
//! Layers are stacked bottom to top: the scrollable page, the likes badge,
//! a blocking layer while the session scroll lock is held, then the open
//! overlay. Blocking layers are `opaque`, so the page underneath receives
//! neither clicks nor wheel events.

use crate::app::{Message, ProfileFocus, ProfilePage};
use crate::contact;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::media_card::{self, CardContext};
use crate::ui::styles;
use crate::ui::{contact_modal, lightbox, sort_filter};
use iced::widget::image::{Handle, Image};
use iced::widget::{button, opaque, Column, Container, Row, Scrollable, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::path::Path;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub page: &'a ProfilePage,
    pub assets_dir: &'a Path,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = ctx.page;
    let card_ctx = CardContext {
        i18n: ctx.i18n,
        assets_dir: ctx.assets_dir,
        first_name: page.photographer.first_name(),
    };

    let back = button(
        Text::new(ctx.i18n.tr("logo-label"))
            .size(typography::TITLE_LG)
            .color(palette::BRAND_700),
    )
    .style(styles::button::link(false))
    .on_press(Message::BackToListing);

    let content = Column::new()
        .padding(spacing::XL)
        .spacing(spacing::XL)
        .push(back)
        .push(header(&ctx))
        .push(sort_filter::view(ctx.i18n, page.gallery.sort_by()))
        .push(gallery(&ctx, card_ctx));

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            Scrollable::new(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(likes_badge(&ctx));

    if page.session.scroll_locked() {
        layers = layers.push(opaque(Space::new().width(Length::Fill).height(Length::Fill)));
    }
    if let Some(overlay) = lightbox::view(card_ctx, &page.lightbox, &page.gallery) {
        layers = layers.push(overlay);
    }
    if let Some(overlay) = contact_modal::view(ctx.i18n, &page.photographer.name, &page.contact) {
        layers = layers.push(overlay);
    }

    layers.into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let photographer = &ctx.page.photographer;

    let identity = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(&photographer.name)
                .size(typography::DISPLAY)
                .color(palette::BRAND_500),
        )
        .push(
            Text::new(photographer.location())
                .size(typography::TITLE_MD)
                .color(palette::BRAND_700),
        )
        .push(
            Text::new(&photographer.tagline)
                .size(typography::BODY_LG)
                .color(palette::GRAY_700),
        );

    let contact = button(Text::new(ctx.i18n.tr("profile-contact")).size(typography::BODY_LG))
        .height(sizing::BUTTON_HEIGHT)
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary_focusable(
            ctx.page.focus() == ProfileFocus::ContactButton,
        ))
        .on_press(Message::Contact(contact::Message::Open));

    let portrait = styles::tooltip::styled(
        Image::new(Handle::from_path(
            ctx.assets_dir
                .join("photographers")
                .join(&photographer.portrait),
        ))
        .width(sizing::PORTRAIT_HEADER)
        .height(sizing::PORTRAIT_HEADER)
        .content_fit(ContentFit::Cover),
        ctx.i18n
            .tr_with_args("photographer-portrait", &[("name", photographer.name.clone())]),
        styles::tooltip::Position::Left,
    );

    Container::new(
        Row::new()
            .spacing(spacing::XL)
            .align_y(alignment::Vertical::Center)
            .push(identity)
            .push(Space::new().width(Length::Fill))
            .push(contact)
            .push(Space::new().width(Length::Fill))
            .push(portrait),
    )
    .padding(spacing::XL)
    .width(Length::Fill)
    .style(styles::container::header)
    .into()
}

fn gallery<'a>(ctx: &ViewContext<'a>, card_ctx: CardContext<'a>) -> Element<'a, Message> {
    let gallery = &ctx.page.gallery;
    if gallery.cards().is_empty() {
        return Text::new(ctx.i18n.tr("empty-gallery"))
            .color(palette::GRAY_400)
            .into();
    }

    let focus = ctx.page.focus();
    let cards = gallery.cards().iter().map(|card| {
        media_card::view(card_ctx, card, focus == ProfileFocus::Card(card.id()))
    });

    Row::with_children(cards)
        .spacing(spacing::XXL)
        .wrap()
        .vertical_spacing(spacing::XL)
        .into()
}

fn likes_badge<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let gallery = &ctx.page.gallery;
    let likes = ctx
        .i18n
        .tr_with_args("total-likes", &[("count", gallery.total_likes().to_string())]);
    let price = ctx.i18n.tr_with_args(
        "photographer-price",
        &[("price", ctx.page.photographer.price.to_string())],
    );

    let badge = Container::new(
        Row::new()
            .spacing(spacing::XXL)
            .push(Text::new(likes).size(typography::BODY_LG))
            .push(Text::new(price).size(typography::BODY_LG)),
    )
    .padding([spacing::MD, spacing::LG])
    .style(styles::container::likes_badge);

    Container::new(badge)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .into()
}
