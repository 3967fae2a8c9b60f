use iced::widget::{canvas, checkbox, column, horizontal_space, row, text, Column};
use iced::{font, Element, Font, Length};

use super::range_slider::RangeSlider;
use crate::state::categories::CategoryFilter;
use crate::state::price::PriceSlider;
use crate::Message;

pub const SIDEBAR_WIDTH: f32 = 260.0;

/// The "Filter By" panel: price slider and category checklist
pub fn filter_panel<'a>(slider: &PriceSlider, categories: &'a [CategoryFilter]) -> Element<'a, Message> {
    let bold = Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    };
    let range = slider.range();

    let price = column![
        text("Price").size(16).font(bold),
        canvas(RangeSlider {
            range,
            bounds: slider.bounds(),
        })
        .width(Length::Fill)
        .height(Length::Fixed(24.0)),
        row![
            text(format!("${:.0}", range.low)).size(13),
            horizontal_space(),
            text(format!("${:.0}", range.high)).size(13),
        ],
    ]
    .spacing(8);

    let checklist = categories.iter().fold(Column::new().spacing(6), |list, category| {
        let title = category.title.clone();
        list.push(
            checkbox(category.title.to_uppercase(), category.selected)
                .on_toggle(move |checked| Message::CategoryToggled(title.clone(), checked))
                .size(16)
                .text_size(13),
        )
    });

    column![
        text("Filter By").size(20).font(bold),
        price,
        text("Category").size(16).font(bold),
        checklist,
    ]
    .spacing(24)
    .padding(20)
    .width(Length::Fixed(SIDEBAR_WIDTH))
    .into()
}
