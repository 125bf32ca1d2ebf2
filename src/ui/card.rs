/// Movie card on the main screen
use iced::widget::image::Handle;
use iced::widget::{canvas, column, container, horizontal_space, image, mouse_area, row, text};
use iced::{Alignment, ContentFit, Element, Length};

use super::placeholder::Placeholder;
use super::style;
use crate::state::data::Movie;
use crate::Message;

/// Card width when not flipping
pub const CARD_WIDTH: f32 = 340.0;

/// Poster area: the decoded image, or the placeholder while it is missing
pub fn poster<'a>(handle: Option<&Handle>, height: f32) -> Element<'a, Message> {
    match handle {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(height)
            .content_fit(ContentFit::Cover)
            .into(),
        None => canvas(Placeholder)
            .width(Length::Fill)
            .height(height)
            .into(),
    }
}

/// Build the card. `scale` squeezes the width during the flip.
pub fn view<'a>(
    movie: &'a Movie,
    handle: Option<&Handle>,
    poster_height: f32,
    scale: f32,
) -> Element<'a, Message> {
    let info = column![
        text(movie.title()).size(28).font(style::BOLD),
        row![
            text(movie.genre()).color(style::GRAY),
            horizontal_space(),
            text(movie.rating_label()).color(style::STAR),
        ]
        .align_y(Alignment::Center),
    ]
    .spacing(5)
    .padding(16);

    let card = container(column![poster(handle, poster_height), info].spacing(10))
        .width((CARD_WIDTH * scale).max(1.0))
        .clip(true)
        .style(style::card);

    mouse_area(card).on_press(Message::CardTapped).into()
}
