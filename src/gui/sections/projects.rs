use std::time::Instant;

use iced::{
    Background, Center, Element, Fill, Length, Task, Theme, border,
    widget::{Column, Row, button, column, container, container::Style, row, text},
};

use crate::{
    animation::Target,
    gui::{
        AppState,
        sections::{ScrollTo, Section, SectionMessage},
        widgets::{accent_button, animated, card_style, faded, heading, paint, pill, section_frame},
    },
    models::{FilterSelection, ProjectRecord, SectionId, palette},
    navigation::PageLayout,
};

/// The gallery: filter buttons over a grid of project cards.
#[derive(Debug, Clone, Default)]
pub struct ProjectsSection {
    selection: FilterSelection,
}

#[derive(Debug, Clone)]
pub enum ProjectsMessage {
    SelectFilter(FilterSelection),
    OpenLink(String),
    StartProject,
}

impl ProjectsSection {
    fn filter_row<'a>(&'a self, state: &'a AppState) -> Element<'a, ProjectsMessage> {
        Row::with_children(FilterSelection::ALL.into_iter().enumerate().map(
            |(index, selection)| {
                let pose = state.animations.pose(Target::ProjectFilters, index, state.now);
                let label = format!(
                    "{} ({})",
                    state.content.filter_label(selection),
                    state.catalog.count(selection)
                );
                let active = selection == self.selection;
                let chip = button(text(label).size(15))
                    .padding([10, 22])
                    .on_press(ProjectsMessage::SelectFilter(selection))
                    .style(move |theme: &Theme, status| {
                        let mut style = button::secondary(theme, status);
                        let background = if active {
                            paint(palette::GREEN)
                        } else if status == button::Status::Hovered {
                            faded(palette::GOLD, 0.2)
                        } else {
                            faded(palette::GOLD, 0.1)
                        };
                        style.background = Some(Background::Color(background));
                        style.border = border::rounded(999);
                        style
                    });
                animated(chip, pose)
            },
        ))
        .spacing(16)
        .wrap()
        .into()
    }

    fn card<'a>(
        &'a self,
        state: &'a AppState,
        project: &'a ProjectRecord,
        index: usize,
    ) -> Element<'a, ProjectsMessage> {
        let pose = state.animations.pose(Target::ProjectCards, index, state.now);
        let copy = &state.content.projects;
        let (from, to) = project.accent;

        let banner = container(text(&project.title).size(22).color(paint(palette::GOLD)))
            .center_x(Fill)
            .center_y(Length::Fixed(160.0))
            .style(move |_theme: &Theme| {
                Style::default()
                    .background(iced::Gradient::Linear(
                        iced::gradient::Linear::new(iced::Radians(std::f32::consts::FRAC_PI_4))
                            .add_stop(0.0, paint(from))
                            .add_stop(1.0, paint(to)),
                    ))
                    .border(border::rounded(12))
            });

        let mut header = row![container(banner).width(Fill)];
        if project.featured {
            header = header.push(pill(&copy.featured_badge, palette::GOLD));
        }

        let tech = Row::with_children(project.tech.iter().map(|tech| pill(tech, palette::BLUE)))
            .spacing(8)
            .wrap();

        let actions = row![
            accent_button(
                &copy.demo_label,
                palette::GREEN,
                Some(ProjectsMessage::OpenLink(project.links.demo.clone())),
            ),
            accent_button(
                &copy.repo_label,
                palette::BLUE,
                Some(ProjectsMessage::OpenLink(project.links.repo.clone())),
            ),
        ]
        .spacing(12);

        let body = column![
            header.spacing(8),
            text(&project.title)
                .size(24)
                .color(faded(palette::GOLD, pose.opacity)),
            text(&project.description)
                .size(15)
                .color(faded(palette::GOLD, 0.6 * pose.opacity)),
            tech,
            actions,
        ]
        .spacing(14);

        animated(
            container(body)
                .padding(20)
                .width(Fill)
                .style(card_style(from)),
            pose,
        )
    }
}

impl Section for ProjectsSection {
    type Message = ProjectsMessage;
    type ParentMessage = ScrollTo;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, SectionMessage<Self>> {
        let copy = &state.content.projects;
        let visible = state.catalog.filter(self.selection);
        let columns = PageLayout::columns_for(state.layout.viewport().width);

        let grid: Element<'a, ProjectsMessage> = if visible.is_empty() {
            container(text(&copy.empty).size(18).color(faded(palette::GOLD, 0.6)))
                .center_x(Fill)
                .into()
        } else {
            Column::with_children(visible.chunks(columns).enumerate().map(|(row_index, chunk)| {
                let mut cards = Row::with_children(chunk.iter().enumerate().map(
                    |(offset, &project)| self.card(state, project, row_index * columns + offset),
                ))
                .spacing(32);
                // Pad short rows so every card keeps the same width.
                for _ in chunk.len()..columns {
                    cards = cards.push(container(text("")).width(Fill));
                }
                cards.into()
            }))
            .spacing(32)
            .into()
        };

        let page = column![
            heading(
                &copy.heading,
                56.0,
                palette::GOLD,
                state.animations.pose(Target::ProjectsTitle, 0, state.now),
            ),
            text(&copy.intro).size(18).color(faded(palette::GOLD, 0.7)),
            self.filter_row(state),
            grid,
            text(&copy.cta_text).size(18).color(faded(palette::GOLD, 0.7)),
            accent_button(&copy.cta_button, palette::PINK, Some(ProjectsMessage::StartProject)),
        ]
        .spacing(32)
        .align_x(Center);

        let height = state.layout.height_of(SectionId::Proyectos).unwrap_or_default();
        section_frame(page, height, palette::GREEN).map(SectionMessage::SectionMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<SectionMessage<Self>> {
        match message {
            ProjectsMessage::SelectFilter(selection) => {
                if selection != self.selection {
                    self.selection = selection;
                    let visible = state.catalog.count(selection);
                    tracing::debug!(?selection, visible, "project filter changed");
                    state.set_visible_cards(visible);
                    state.now = Instant::now();
                    state.animations.replay(Target::ProjectCards, state.now);
                }
                Task::none()
            }
            ProjectsMessage::OpenLink(url) => {
                tracing::info!(%url, "project link copied to clipboard");
                iced::clipboard::write(url)
            }
            ProjectsMessage::StartProject => {
                Task::done(SectionMessage::ParentMessage(ScrollTo(SectionId::Contacto)))
            }
        }
    }
}
