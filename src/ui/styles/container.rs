// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{backdrop as backdrop_color, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Translucent layer behind the closeup and the contact modal.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(backdrop_color())),
        ..Default::default()
    }
}

/// Contact dialog surface.
pub fn modal(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BRAND_200)),
        text_color: Some(palette::BLACK),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Surface of the closeup dialog.
pub fn closeup(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Profile header band.
pub fn header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_100)),
        ..Default::default()
    }
}

/// Floating badge with the total likes and the daily rate.
pub fn likes_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BRAND_200)),
        text_color: Some(palette::BLACK),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Placeholder drawn where a video frame would be.
pub fn video_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Inline validation message.
pub fn field_error(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(palette::ERROR_500),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_has_translucent_background() {
        let style = backdrop(&Theme::Light);
        let Some(Background::Color(color)) = style.background else {
            panic!("expected color background");
        };
        assert!(color.a < 1.0);
    }

    #[test]
    fn modal_has_text_color() {
        assert!(modal(&Theme::Dark).text_color.is_some());
    }
}
