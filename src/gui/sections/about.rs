use std::convert::Infallible;

use iced::{
    Center, Element, Fill, Length, Task,
    widget::{Column, Row, canvas, column, container, row, stack, text},
};

use crate::{
    animation::{Decoration, Target},
    gui::{
        AppState,
        sections::{Section, SectionMessage},
        widgets::{Rings, animated, card_style, faded, heading, paint, pill, section_frame},
    },
    models::{SectionId, palette},
};

const RING_COLORS: [crate::models::Color; 3] = [palette::PINK, palette::BLUE, palette::GREEN];
const SKILL_COLUMNS: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct AboutSection;

impl Section for AboutSection {
    type Message = Infallible;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, SectionMessage<Self>> {
        let about = &state.content.about;
        let now = state.now;
        let content_pose = state.animations.pose(Target::AboutContent, 0, now);

        let paragraphs = Column::with_children(about.paragraphs.iter().map(|paragraph| {
            text(paragraph)
                .size(18)
                .color(faded(palette::GOLD, 0.75 * content_pose.opacity))
                .into()
        }))
        .spacing(16);

        let highlights = Row::with_children(
            about
                .highlights
                .iter()
                .map(|badge| pill(&badge.label, badge.accent)),
        )
        .spacing(12)
        .wrap();

        let copy = column![
            heading(&about.heading, 56.0, palette::GOLD, content_pose),
            paragraphs,
            highlights,
        ]
        .spacing(24)
        .width(Length::FillPortion(1));

        let rings = Rings {
            rings: RING_COLORS
                .iter()
                .enumerate()
                .map(|(index, color)| {
                    (*color, state.animations.decoration(Decoration::AboutRing(index), now))
                })
                .collect(),
        };
        let visual_pose = state.animations.pose(Target::AboutVisual, 0, now);
        let visual = container(stack![
            canvas(rings).width(Fill).height(Fill),
            container(
                text(&about.emblem)
                    .size(40)
                    .color(faded(palette::GOLD, visual_pose.opacity))
            )
            .center(Fill),
        ])
        .width(Length::FillPortion(1))
        .height(Length::Fixed(360.0));

        let skills = Column::with_children(about.skills.chunks(SKILL_COLUMNS).enumerate().map(
            |(chunk_index, chunk)| {
                Row::with_children(chunk.iter().enumerate().map(|(offset, skill)| {
                    let pose = state.animations.pose(
                        Target::Skills,
                        chunk_index * SKILL_COLUMNS + offset,
                        now,
                    );
                    animated(
                        container(
                            column![
                                text(&skill.title)
                                    .size(22)
                                    .color(faded(skill.accent, pose.opacity)),
                                text(&skill.description)
                                    .size(15)
                                    .color(faded(palette::GOLD, 0.6 * pose.opacity)),
                            ]
                            .spacing(8),
                        )
                        .padding(24)
                        .width(Fill)
                        .style(card_style(skill.accent)),
                        pose,
                    )
                }))
                .spacing(24)
                .into()
            },
        ))
        .spacing(24);

        let page = column![
            row![animated(copy, content_pose), animated(visual, visual_pose)]
                .spacing(48)
                .align_y(Center),
            text(&about.skills_heading).size(32).color(paint(palette::BLUE)),
            skills,
        ]
        .spacing(40)
        .align_x(Center);

        let height = state.layout.height_of(SectionId::SobreMi).unwrap_or_default();
        section_frame(page, height, palette::BLUE)
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<SectionMessage<Self>> {
        match message {}
    }
}
