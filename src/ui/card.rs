use iced::widget::{column, container, horizontal_space, image, row, text};
use iced::{Alignment, Color, Element, Length};

use super::highlight::highlighted;
use crate::state::data::Product;
use crate::Message;

pub const CARD_WIDTH: f32 = 300.0;
const MEDIA_HEIGHT: f32 = 194.0;

const SECONDARY_TEXT: Color = Color::from_rgb(0.40, 0.40, 0.40);
const STAR_COLOR: Color = Color::from_rgb(0.96, 0.78, 0.10);

/// A product card: highlighted title, description, image, price and rating
pub fn product_card<'a>(
    product: &'a Product,
    search: &str,
    thumbnail: Option<&image::Handle>,
) -> Element<'a, Message> {
    let media: Element<'a, Message> = match thumbnail {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(MEDIA_HEIGHT))
            .into(),
        None => container(text("Loading image…").size(12).color(SECONDARY_TEXT))
            .width(Length::Fill)
            .height(Length::Fixed(MEDIA_HEIGHT))
            .center_x(Length::Fill)
            .center_y(Length::Fixed(MEDIA_HEIGHT))
            .into(),
    };

    let footer = row![
        text(product.display_price()).size(14).color(SECONDARY_TEXT),
        horizontal_space(),
        text("★").size(16).color(STAR_COLOR),
        text(format!("{} ({})", product.rating.rate, product.rating.count))
            .size(14)
            .color(SECONDARY_TEXT),
    ]
    .spacing(4)
    .align_y(Alignment::Center);

    let content = column![
        highlighted(&product.title, search, 18),
        text(&product.description).size(12).color(SECONDARY_TEXT),
        media,
        footer,
    ]
    .spacing(10);

    container(content)
        .width(Length::Fixed(CARD_WIDTH))
        .padding(16)
        .style(container::rounded_box)
        .into()
}
