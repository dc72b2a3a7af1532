// SPDX-License-Identifier: MPL-2.0
//! A gallery card: the media, its title and the like counter.
//!
//! Pictures are loaded from disk. Videos are drawn as a placeholder carrying
//! the simulated playback position.

use crate::app::{GalleryMessage, Message};
use crate::domain::Media;
use crate::gallery::{Card, Playback};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, mouse_area, Column, Container, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::path::Path;
use std::time::Duration;

/// Shared rendering inputs for every card of a page.
#[derive(Clone, Copy)]
pub struct CardContext<'a> {
    pub i18n: &'a I18n,
    pub assets_dir: &'a Path,
    /// Folder of the photographer's media.
    pub first_name: &'a str,
}

pub fn view<'a>(ctx: CardContext<'a>, card: &'a Card, focused: bool) -> Element<'a, Message> {
    let id = card.id();

    let media = button(media_view(
        ctx,
        &card.media,
        card.playback(),
        sizing::CARD_WIDTH,
        sizing::CARD_MEDIA_HEIGHT,
    ))
    .padding(0)
    .style(styles::button::link(focused))
    .on_press(Message::Gallery(GalleryMessage::OpenMedia(id)));

    let media = mouse_area(media)
        .on_enter(Message::Gallery(GalleryMessage::Hover { id, entered: true }))
        .on_exit(Message::Gallery(GalleryMessage::Hover { id, entered: false }));

    let media = styles::tooltip::styled(
        media,
        ctx.i18n
            .tr_with_args("media-closeup-label", &[("title", card.media.title.clone())]),
        styles::tooltip::Position::Top,
    );

    let mut caption = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(&card.media.title)
                .size(typography::BODY_LG)
                .color(palette::BRAND_700),
        )
        .push(Space::new().width(Length::Fill));

    if card.presentation().likes_visible {
        caption = caption
            .push(
                Text::new(card.likes().to_string())
                    .size(typography::BODY_LG)
                    .color(palette::BRAND_700),
            )
            .push(like_button(ctx.i18n, card));
    }

    Column::new()
        .width(sizing::CARD_WIDTH)
        .spacing(spacing::XS)
        .push(media)
        .push(caption)
        .into()
}

fn like_button<'a>(i18n: &'a I18n, card: &'a Card) -> Element<'a, Message> {
    let label = if card.liked() {
        i18n.tr("media-unlike")
    } else {
        i18n.tr("media-like")
    };

    styles::tooltip::styled(
        button(Text::new("♥").size(typography::TITLE_SM))
            .padding(0)
            .style(styles::button::like(card.liked()))
            .on_press(Message::Gallery(GalleryMessage::ToggleLike(card.id()))),
        label,
        styles::tooltip::Position::Bottom,
    )
    .into()
}

/// The media itself, sized to `width` x `height`.
pub fn media_view<'a>(
    ctx: CardContext<'a>,
    media: &'a Media,
    playback: Option<&Playback>,
    width: f32,
    height: f32,
) -> Element<'a, Message> {
    match playback {
        Some(playback) if media.is_video() => {
            let status = if playback.is_playing() {
                ctx.i18n
                    .tr_with_args("media-playing", &[("position", format_position(playback.position()))])
            } else {
                ctx.i18n.tr("media-paused")
            };

            let content = Column::new()
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center)
                .push(Text::new("▶").size(typography::DISPLAY))
                .push(Text::new(ctx.i18n.tr("media-video")).size(typography::CAPTION))
                .push(Text::new(status).size(typography::CAPTION));

            Container::new(content)
                .width(width)
                .height(height)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(styles::container::video_placeholder)
                .into()
        }
        _ => Image::new(Handle::from_path(
            media.file_path(ctx.assets_dir, ctx.first_name),
        ))
        .width(width)
        .height(height)
        .content_fit(ContentFit::Cover)
        .into(),
    }
}

/// `m:ss` clock of a playback position.
fn format_position(position: Duration) -> String {
    let secs = position.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_is_formatted_as_minutes_and_seconds() {
        assert_eq!(format_position(Duration::ZERO), "0:00");
        assert_eq!(format_position(Duration::from_millis(65_900)), "1:05");
    }
}
