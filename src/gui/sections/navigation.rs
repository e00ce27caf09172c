use iced::{
    Background, Center, Element, Fill, Length, Task, Theme,
    widget::{Column, button, column, container, container::Style, opaque, row, text},
};

use crate::{
    gui::{
        AppState,
        sections::{Section, SectionMessage},
        widgets::{faded, paint},
    },
    models::{SectionId, palette},
    navigation::{NAV_BAR_HEIGHT, NavigationState, ScrollRequest},
};

/// Fixed top bar plus the full-screen menu it opens.
#[derive(Debug)]
pub struct NavigationBar {
    state: NavigationState,
}

#[derive(Debug, Clone)]
pub enum NavigationMessage {
    ToggleMenu,
    Select(SectionId),
}

impl NavigationBar {
    pub fn new(state: NavigationState) -> Self {
        Self { state }
    }

    pub fn state_mut(&mut self) -> &mut NavigationState {
        &mut self.state
    }

    fn bar<'a>(&'a self, state: &'a AppState) -> Element<'a, NavigationMessage> {
        let logo = button(
            text(&state.content.brand.logo)
                .size(32)
                .color(paint(state.content.brand.accent)),
        )
        .style(button::text)
        .on_press(NavigationMessage::Select(SectionId::Inicio));

        let toggle = button(text("☰").size(24))
            .style(button::text)
            .on_press(NavigationMessage::ToggleMenu);

        let scrolled = self.state.is_scrolled();
        container(row![container(logo).width(Fill), toggle].align_y(Center))
            .width(Fill)
            .height(Length::Fixed(NAV_BAR_HEIGHT))
            .padding([12, 24])
            .style(move |_theme: &Theme| {
                if scrolled {
                    Style::default().background(faded(palette::DARK_900, 0.9))
                } else {
                    Style::default()
                }
            })
            .into()
    }

    fn menu<'a>(&'a self, state: &'a AppState) -> Element<'a, NavigationMessage> {
        let active = self.state.active_section(&state.layout);
        let links = Column::with_children(state.content.navigation.iter().map(|item| {
            let size = if active == Some(item.section) { 52 } else { 44 };
            button(text(&item.label).size(size).color(paint(item.accent)))
                .style(button::text)
                .on_press(NavigationMessage::Select(item.section))
                .into()
        }))
        .spacing(36)
        .align_x(Center);

        let close = button(text("✕").size(24))
            .style(button::text)
            .on_press(NavigationMessage::ToggleMenu);

        opaque(
            container(column![
                container(close).align_right(Fill).padding(24),
                container(links).center(Fill),
            ])
            .width(Fill)
            .height(Fill)
            .style(|_theme: &Theme| {
                Style::default().background(Background::Color(paint(palette::DEEP_BLUE)))
            }),
        )
    }
}

impl Section for NavigationBar {
    type Message = NavigationMessage;
    type ParentMessage = ScrollRequest;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, SectionMessage<Self>> {
        let content = if self.state.is_menu_open() {
            self.menu(state)
        } else {
            self.bar(state)
        };
        content.map(SectionMessage::SectionMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<SectionMessage<Self>> {
        match message {
            NavigationMessage::ToggleMenu => {
                self.state.toggle();
                Task::none()
            }
            NavigationMessage::Select(section) => match self.state.select(section, &state.layout) {
                Some(request) => Task::done(SectionMessage::ParentMessage(request)),
                None => Task::none(),
            },
        }
    }
}
