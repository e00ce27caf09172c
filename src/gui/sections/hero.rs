use iced::{
    Center, Element, Fill, Task,
    widget::{Column, canvas, column, container, row, stack, text},
};

use crate::{
    animation::{Decoration, Target},
    gui::{
        AppState,
        sections::{ScrollTo, Section, SectionMessage},
        widgets::{Blob, PaintBlobs, accent_button, animated, faded, heading, section_frame},
    },
    models::{SectionId, palette},
};

/// Relative position, radius and color of each hero blob.
const BLOBS: [(f32, f32, f32, crate::models::Color); 4] = [
    (0.12, 0.2, 64.0, palette::PINK),
    (0.85, 0.28, 48.0, palette::BLUE),
    (0.25, 0.75, 56.0, palette::GREEN),
    (0.78, 0.82, 40.0, palette::PURPLE),
];

#[derive(Debug, Clone, Default)]
pub struct HeroSection;

#[derive(Debug, Clone)]
pub enum HeroMessage {
    Explore,
    Details,
}

impl Section for HeroSection {
    type Message = HeroMessage;
    type ParentMessage = ScrollTo;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, SectionMessage<Self>> {
        let hero = &state.content.hero;
        let pose = |target| state.animations.pose(target, 0, state.now);

        let lines_pose = pose(Target::HeroLines);
        let lines = Column::with_children(hero.lines.iter().map(|line| {
            text(line)
                .size(16)
                .color(faded(palette::GOLD, 0.7 * lines_pose.opacity))
                .into()
        }))
        .spacing(8)
        .align_x(Center);

        let cta = row![
            accent_button(&hero.primary_cta, palette::PINK, Some(HeroMessage::Explore)),
            accent_button(&hero.secondary_cta, palette::BLUE, Some(HeroMessage::Details)),
        ]
        .spacing(16);

        let content = column![
            heading(&hero.title, 72.0, palette::GOLD, pose(Target::HeroTitle)),
            heading(&hero.subtitle, 36.0, palette::BLUE, pose(Target::HeroSubtitle)),
            animated(lines, lines_pose),
            animated(cta, pose(Target::HeroCta)),
        ]
        .spacing(28)
        .align_x(Center);

        let blobs = PaintBlobs {
            blobs: BLOBS
                .iter()
                .enumerate()
                .map(|(index, &(x, y, radius, color))| Blob {
                    x,
                    y,
                    radius,
                    color,
                    pose: state.animations.decoration(Decoration::HeroBlob(index), state.now),
                })
                .collect(),
        };

        let height = state.layout.height_of(SectionId::Inicio).unwrap_or_default();
        let page: Element<'a, HeroMessage> = section_frame(
            stack![
                canvas(blobs).width(Fill).height(Fill),
                container(content).center(Fill),
            ],
            height,
            palette::PINK,
        );
        page.map(SectionMessage::SectionMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<SectionMessage<Self>> {
        let target = match message {
            HeroMessage::Explore => SectionId::SobreMi,
            HeroMessage::Details => SectionId::Contacto,
        };
        Task::done(SectionMessage::ParentMessage(ScrollTo(target)))
    }
}
