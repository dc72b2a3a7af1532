// SPDX-License-Identifier: MPL-2.0
//! "Sort by" picker above the gallery.

use crate::app::{GalleryMessage, Message};
use crate::gallery::SortBy;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::{pick_list, Row, Text};
use iced::{alignment, Element};

pub fn view(i18n: &I18n, current: SortBy) -> Element<'_, Message> {
    let options = options(i18n);
    let selected = options.iter().find(|opt| opt.sort_by == current).cloned();

    let picker = pick_list(options, selected, |opt: SortOption| {
        Message::Gallery(GalleryMessage::SortChanged(opt.sort_by))
    })
    .padding(spacing::XS)
    .width(sizing::SORT_PICKER_WIDTH);

    Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(i18n.tr("sort-label"))
                .size(typography::BODY_LG)
                .color(palette::BLACK),
        )
        .push(picker)
        .into()
}

fn options(i18n: &I18n) -> Vec<SortOption> {
    SortBy::ALL
        .iter()
        .map(|&sort_by| SortOption {
            sort_by,
            label: i18n.tr(sort_by.label_key()),
        })
        .collect()
}

/// Sort criterion option for the pick list.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SortOption {
    sort_by: SortBy,
    label: String,
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}
