// SPDX-License-Identifier: MPL-2.0
//! Tooltips carrying the accessible label of icon-only controls.

use crate::ui::design_tokens::{palette, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Element, Theme};

pub use iced::widget::tooltip::Position;

pub fn label_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Wraps `content` with a tooltip showing `label`.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    label: impl Into<String>,
    position: Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let label = Container::new(Text::new(label.into()).size(typography::CAPTION))
        .padding(spacing::XXS)
        .style(label_container);

    tooltip(content, label, position).gap(spacing::XXS)
}
