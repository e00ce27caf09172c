use iced::{
    Center, Element, Fill, Task, Theme,
    widget::{Row, button, column, container, container::Style, row, text},
};

use crate::{
    gui::{
        AppState,
        sections::{ScrollTo, Section, SectionMessage},
        widgets::{faded, paint},
    },
    models::{SectionId, palette},
};

#[derive(Debug, Clone, Default)]
pub struct FooterSection;

#[derive(Debug, Clone)]
pub enum FooterMessage {
    Jump(SectionId),
}

impl Section for FooterSection {
    type Message = FooterMessage;
    type ParentMessage = ScrollTo;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, SectionMessage<Self>> {
        let footer = &state.content.footer;

        let links = Row::with_children(state.content.navigation.iter().map(|item| {
            button(text(&item.label).size(14).color(faded(palette::GOLD, 0.6)))
                .style(button::text)
                .on_press(FooterMessage::Jump(item.section))
                .into()
        }))
        .spacing(20);

        let content = column![
            row![
                column![
                    text(&footer.brand).size(24).color(paint(palette::GOLD)),
                    text(&footer.tagline).size(13).color(faded(palette::GOLD, 0.5)),
                ]
                .spacing(6)
                .width(Fill),
                links,
                text(format!("© {} {}", state.year, footer.made_with))
                    .size(13)
                    .color(faded(palette::GOLD, 0.5)),
            ]
            .spacing(32)
            .align_y(Center),
            text(&footer.credits).size(12).color(faded(palette::GOLD, 0.35)),
        ]
        .spacing(24)
        .align_x(Center);

        let footer: Element<'a, FooterMessage> = container(content)
            .width(Fill)
            .height(state.layout.footer_height())
            .padding([40, 48])
            .style(|_theme: &Theme| Style::default().background(faded(palette::PURPLE, 0.08)))
            .into();
        footer.map(SectionMessage::SectionMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<SectionMessage<Self>> {
        match message {
            FooterMessage::Jump(section) => {
                Task::done(SectionMessage::ParentMessage(ScrollTo(section)))
            }
        }
    }
}
