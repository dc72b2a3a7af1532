// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the current screen, or the loading and error states while no
//! catalog is available. A dismissible warning banner sits on top.

use super::screen::{ListingPage, ProfilePage};
use super::{Message, Screen};
use crate::domain::Catalog;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::{photographer_list, profile, styles};
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};
use std::path::Path;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub catalog: Option<&'a Catalog>,
    pub load_error: Option<&'a Error>,
    pub listing: Option<&'a ListingPage>,
    pub profile: Option<&'a ProfilePage>,
    pub assets_dir: &'a Path,
    pub warning: Option<&'a str>,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match (ctx.catalog, ctx.load_error) {
        (_, Some(err)) => centered_message(ctx.i18n.tr(err.i18n_key()), palette::ERROR_500),
        (None, None) => centered_message(ctx.i18n.tr("loading"), palette::GRAY_400),
        (Some(catalog), None) => match (ctx.screen, ctx.listing, ctx.profile) {
            (Screen::Profile(_), _, Some(page)) => profile::view(profile::ViewContext {
                i18n: ctx.i18n,
                page,
                assets_dir: ctx.assets_dir,
            }),
            (_, Some(page), _) => photographer_list::view(photographer_list::ViewContext {
                i18n: ctx.i18n,
                catalog,
                page,
                assets_dir: ctx.assets_dir,
            }),
            _ => centered_message(ctx.i18n.tr("loading"), palette::GRAY_400),
        },
    };

    let mut column = Column::new();
    if let Some(key) = ctx.warning {
        column = column.push(warning_banner(ctx.i18n, key));
    }
    column = column.push(
        Container::new(current_view)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn centered_message<'a>(message: String, color: iced::Color) -> Element<'a, Message> {
    Container::new(Text::new(message).size(typography::TITLE_MD).color(color))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn warning_banner<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    let content = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(i18n.tr(key)).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new("✕").size(typography::BODY))
                .style(styles::button::closeup_control(false))
                .on_press(Message::DismissWarning),
        );

    Container::new(content)
        .padding([spacing::XS, spacing::MD])
        .width(Length::Fill)
        .style(styles::container::likes_badge)
        .into()
}
