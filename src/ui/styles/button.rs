// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Brand button: contact, send.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::BRAND_200,
        button::Status::Disabled => palette::GRAY_400,
        button::Status::Active | button::Status::Pressed => palette::BRAND_700,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: if status == button::Status::Hovered {
            palette::BLACK
        } else {
            WHITE
        },
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// [`primary`] with the keyboard focus ring.
pub fn primary_focusable(focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| button::Style {
        border: if focused {
            focus_border(true)
        } else {
            primary(theme, status).border
        },
        ..primary(theme, status)
    }
}

/// Closeup control (previous, next, close). `focused` draws the focus ring.
pub fn closeup_control(focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => palette::BRAND_500,
            _ => palette::BRAND_700,
        };
        button::Style {
            background: None,
            text_color,
            border: focus_border(focused),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Transparent button wrapping a card or a portrait.
pub fn link(focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let overlay = match status {
            button::Status::Hovered => opacity::OVERLAY_SUBTLE,
            _ => opacity::TRANSPARENT,
        };
        button::Style {
            background: Some(Background::Color(Color {
                a: overlay,
                ..palette::BRAND_200
            })),
            text_color: palette::BRAND_700,
            border: focus_border(focused),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Heart toggle of a card; filled brand color once liked.
pub fn like(liked: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| button::Style {
        background: None,
        text_color: if liked || status == button::Status::Hovered {
            palette::BRAND_700
        } else {
            palette::BRAND_200
        },
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

fn focus_border(focused: bool) -> Border {
    if focused {
        Border {
            color: palette::BRAND_500,
            width: crate::ui::design_tokens::border::FOCUS_RING,
            radius: radius::SM.into(),
        }
    } else {
        Border::default()
    }
}
