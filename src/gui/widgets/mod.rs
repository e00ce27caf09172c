mod decorations;

pub use decorations::{Blob, PaintBlobs, Rings};

use iced::{
    Background, Center, Element, Length, Padding, Theme, border,
    widget::{button, container, container::Style, text},
};
use iced_widget::container::bordered_box;

use crate::{
    animation::Pose,
    models::{self, palette},
};

pub fn paint(color: models::Color) -> iced::Color {
    iced::Color::from_rgb8(color.r, color.g, color.b)
}

pub fn faded(color: models::Color, opacity: f32) -> iced::Color {
    iced::Color {
        a: opacity.clamp(0.0, 1.0),
        ..paint(color)
    }
}

/// Shifts `content` by the pose's translation. Opacity is applied by the
/// caller, on the colors it controls.
pub fn animated<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    pose: Pose,
) -> Element<'a, Message> {
    container(content)
        .padding(Padding {
            top: pose.dy.max(0.0),
            bottom: (-pose.dy).max(0.0),
            left: pose.dx.max(0.0),
            right: (-pose.dx).max(0.0),
        })
        .into()
}

pub fn heading<'a, Message: 'a>(
    label: &'a str,
    size: f32,
    color: models::Color,
    pose: Pose,
) -> Element<'a, Message> {
    animated(
        text(label).size(size * pose.scale).color(faded(color, pose.opacity)),
        pose,
    )
}

/// Full-width block of a fixed height, the unit the page layout is made of.
pub fn section_frame<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    height: f32,
    tint: models::Color,
) -> Element<'a, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .padding([80, 48])
        .align_x(Center)
        .style(move |_theme: &Theme| {
            Style::default().background(Background::Color(iced::Color {
                a: 0.06,
                ..paint(tint)
            }))
        })
        .into()
}

pub fn card_style(accent: models::Color) -> impl Fn(&Theme) -> Style {
    move |theme: &Theme| {
        bordered_box(theme)
            .background(faded(palette::DARK_800, 0.85))
            .border(border::rounded(16).color(faded(accent, 0.35)).width(1))
    }
}

pub fn pill<'a, Message: 'a>(label: &'a str, accent: models::Color) -> Element<'a, Message> {
    container(text(label).size(14).color(paint(accent)))
        .padding([6, 14])
        .style(move |_theme: &Theme| {
            Style::default()
                .background(faded(accent, 0.2))
                .border(border::rounded(999))
        })
        .into()
}

/// Button painted with a single accent color.
pub fn accent_button<'a, Message: Clone + 'a>(
    label: &'a str,
    accent: models::Color,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    button(text(label).size(16))
        .padding([12, 28])
        .on_press_maybe(on_press)
        .style(move |theme: &Theme, status| {
            let mut style = button::primary(theme, status);
            let alpha = match status {
                button::Status::Hovered => 1.0,
                button::Status::Disabled => 0.4,
                _ => 0.85,
            };
            style.background = Some(Background::Color(faded(accent, alpha)));
            style.border = border::rounded(999);
            style
        })
        .into()
}
