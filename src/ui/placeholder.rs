/// Blank poster area shown when a poster is missing or still loading
use iced::widget::canvas::{self, Path, Stroke};
use iced::{Color, Point, Rectangle};

use crate::Message;

/// Dim frame with two diagonals ("no image")
#[derive(Debug, Clone, Copy, Default)]
pub struct Placeholder;

impl canvas::Program<Message> for Placeholder {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let width = bounds.width;
        let height = bounds.height;
        if width < 1.0 || height < 1.0 {
            return vec![frame.into_geometry()];
        }

        let line = Color::from_rgba(1.0, 1.0, 1.0, 0.15);

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), Color::from_rgba(1.0, 1.0, 1.0, 0.05));

        let mut builder = canvas::path::Builder::new();
        builder.move_to(Point::ORIGIN);
        builder.line_to(Point::new(width, height));
        builder.move_to(Point::new(width, 0.0));
        builder.line_to(Point::new(0.0, height));
        frame.stroke(&builder.build(), Stroke::default().with_color(line).with_width(1.0));

        frame.stroke(
            &Path::rectangle(Point::new(1.0, 1.0), iced::Size::new(width - 2.0, height - 2.0)),
            Stroke::default().with_color(line).with_width(2.0),
        );

        vec![frame.into_geometry()]
    }
}
