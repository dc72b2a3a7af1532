// SPDX-License-Identifier: MPL-2.0
//! Home screen: one card per photographer.

use crate::app::{ListingPage, Message};
use crate::domain::{Catalog, Photographer};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, Column, Container, Row, Scrollable, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::path::Path;

/// Everything the listing needs to render.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub catalog: &'a Catalog,
    pub page: &'a ListingPage,
    pub assets_dir: &'a Path,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = Row::new()
        .spacing(spacing::XL)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(ctx.i18n.tr("logo-label"))
                .size(typography::TITLE_LG)
                .color(palette::BRAND_700),
        )
        .push(
            Text::new(ctx.i18n.tr("listing-title"))
                .size(typography::TITLE_LG)
                .color(palette::BRAND_700),
        );

    if ctx.catalog.photographers().is_empty() {
        return Column::new()
            .padding(spacing::XL)
            .spacing(spacing::XL)
            .push(header)
            .push(Text::new(ctx.i18n.tr("empty-listing")).color(palette::GRAY_400))
            .into();
    }

    let cards = ctx
        .catalog
        .photographers()
        .iter()
        .enumerate()
        .map(|(position, photographer)| {
            card(&ctx, photographer, ctx.page.focused == Some(position))
        });

    let grid = Row::with_children(cards)
        .spacing(spacing::XXL)
        .wrap()
        .vertical_spacing(spacing::XXL);

    Scrollable::new(
        Column::new()
            .padding(spacing::XL)
            .spacing(spacing::XXL)
            .push(header)
            .push(grid),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn card<'a>(
    ctx: &ViewContext<'a>,
    photographer: &'a Photographer,
    focused: bool,
) -> Element<'a, Message> {
    let portrait_path = ctx
        .assets_dir
        .join("photographers")
        .join(&photographer.portrait);

    let portrait = Image::new(Handle::from_path(portrait_path))
        .width(sizing::PORTRAIT)
        .height(sizing::PORTRAIT)
        .content_fit(ContentFit::Cover);

    let link = button(
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(portrait)
            .push(
                Text::new(&photographer.name)
                    .size(typography::TITLE_LG)
                    .color(palette::BRAND_500),
            ),
    )
    .padding(spacing::XXS)
    .style(styles::button::link(focused))
    .on_press(Message::OpenProfile(photographer.id));

    let price = ctx
        .i18n
        .tr_with_args("photographer-price", &[("price", photographer.price.to_string())]);

    let details = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(photographer.location())
                .size(typography::BODY)
                .color(palette::BRAND_700),
        )
        .push(Text::new(&photographer.tagline).size(typography::CAPTION))
        .push(
            Text::new(price)
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    let label = ctx
        .i18n
        .tr_with_args("photographer-open", &[("name", photographer.name.clone())]);

    Container::new(styles::tooltip::styled(
        Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(link)
            .push(details),
        label,
        styles::tooltip::Position::Bottom,
    ))
    .width(sizing::CARD_WIDTH)
    .align_x(alignment::Horizontal::Center)
    .into()
}
