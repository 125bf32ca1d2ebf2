/// Detail sheet with the full movie information
use iced::widget::image::Handle;
use iced::widget::{button, column, container, horizontal_space, row, scrollable, stack, text};
use iced::{Element, Length};

use super::{card, style};
use crate::state::data::Movie;
use crate::Message;

pub fn view<'a>(movie: &'a Movie, handle: Option<&Handle>, poster_height: f32) -> Element<'a, Message> {
    let meta = row![
        text(movie.genre()).color(style::GRAY),
        text("•").color(style::GRAY),
        text(movie.year().to_string()).color(style::GRAY),
        horizontal_space(),
        text(movie.rating_label()).color(style::STAR),
    ]
    .spacing(8);

    let info = column![
        text(movie.title()).size(28).font(style::BOLD),
        meta,
        text("Synopsis").size(22).font(style::BOLD),
        text(movie.synopsis()).color(style::GRAY).line_height(1.4),
    ]
    .spacing(15)
    .padding(16);

    let body = scrollable(column![card::poster(handle, poster_height), info].spacing(20))
        .width(Length::Fill)
        .height(Length::Fill);

    let close = button(text("×").size(20))
        .on_press(Message::CloseRequested)
        .padding([8, 14])
        .style(style::close_button);

    container(stack![body, container(close).padding(16)])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(style::screen)
        .into()
}
