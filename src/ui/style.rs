/// Colors and widget styles shared by the main screen and the detail sheet
use iced::gradient::Linear;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Font, Radians, Shadow, Theme, Vector};

pub const GRAY: Color = Color {
    r: 0.6,
    g: 0.6,
    b: 0.62,
    a: 1.0,
};
pub const STAR: Color = Color {
    r: 1.0,
    g: 0.8,
    b: 0.0,
    a: 1.0,
};

const BLUE: Color = Color {
    r: 0.0,
    g: 0.48,
    b: 1.0,
    a: 1.0,
};
const PURPLE: Color = Color {
    r: 0.69,
    g: 0.32,
    b: 0.87,
    a: 1.0,
};

pub const BOLD: Font = Font {
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

/// Solid black backdrop for the whole screen and the sheet
pub fn screen(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::BLACK)),
        text_color: Some(Color::WHITE),
        ..container::Style::default()
    }
}

/// Translucent gray card with rounded corners
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.5, 0.5, 0.5, 0.2))),
        border: Border {
            radius: 20.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Blue to purple gradient button
pub fn pick_button(_theme: &Theme, status: button::Status) -> button::Style {
    let gradient = Linear::new(Radians(std::f32::consts::FRAC_PI_2))
        .add_stop(0.0, BLUE)
        .add_stop(1.0, PURPLE);

    let shadow_alpha = match status {
        button::Status::Pressed => 0.2,
        _ => 0.5,
    };

    button::Style {
        background: Some(Background::Gradient(gradient.into())),
        text_color: Color::WHITE,
        border: Border {
            radius: 15.0.into(),
            ..Border::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, shadow_alpha),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 10.0,
        },
    }
}

/// Round translucent close button on the detail sheet
pub fn close_button(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => 0.7,
        _ => 0.5,
    };

    button::Style {
        background: Some(Background::Color(Color::from_rgba(0.5, 0.5, 0.5, alpha))),
        text_color: Color::WHITE,
        border: Border {
            radius: 999.0.into(),
            ..Border::default()
        },
        shadow: Shadow::default(),
    }
}
