use std::time::Duration;

use super::{Decoration, Ease, Entrance, Motion, Pose, ScrollAnimationBindings, Target, Trigger};
use crate::models::SectionId;

const fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn enter(section: SectionId, start: f32) -> Trigger {
    Trigger::Enter { section, start }
}

/// Entrance and decorative timelines for the whole page.
pub fn page_bindings() -> ScrollAnimationBindings {
    use SectionId::*;
    use Target::*;

    let entrances = vec![
        // Hero plays on mount, one line after another.
        Entrance::new(HeroTitle, Trigger::Mount, Pose::offset(0.0, 100.0), ms(1500)),
        Entrance::new(HeroSubtitle, Trigger::Mount, Pose::offset(0.0, 50.0), ms(1500))
            .with_delay(ms(300)),
        Entrance::new(HeroLines, Trigger::Mount, Pose::offset(0.0, 30.0), ms(1500))
            .with_delay(ms(600)),
        Entrance::new(HeroCta, Trigger::Mount, Pose::offset(0.0, 30.0), ms(1500))
            .with_delay(ms(900)),
        // About
        Entrance::new(AboutContent, enter(SobreMi, 0.8), Pose::offset(-100.0, 0.0), ms(1000)),
        Entrance::new(AboutVisual, enter(SobreMi, 0.8), Pose::offset(100.0, 0.0), ms(1000))
            .with_delay(ms(300)),
        Entrance::new(Skills, enter(SobreMi, 0.2), Pose::offset(0.0, 50.0), ms(800))
            .with_stagger(ms(200)),
        // Projects
        Entrance::new(ProjectsTitle, enter(Proyectos, 0.8), Pose::offset(0.0, 50.0), ms(1000)),
        Entrance::new(ProjectFilters, enter(Proyectos, 0.8), Pose::offset(-30.0, 0.0), ms(800))
            .with_stagger(ms(100)),
        Entrance::new(ProjectCards, enter(Proyectos, 0.7), Pose::offset(0.0, 100.0), ms(1000))
            .with_stagger(ms(200)),
        Entrance::new(ProjectCards, Trigger::Manual, Pose::offset(0.0, 20.0), ms(500))
            .with_stagger(ms(100)),
        // Contact
        Entrance::new(ContactTitle, enter(Contacto, 0.8), Pose::offset(0.0, 50.0), ms(1000)),
        Entrance::new(ContactCards, enter(Contacto, 0.7), Pose::offset(0.0, 50.0), ms(1000))
            .with_stagger(ms(200)),
        Entrance::new(ContactForm, enter(Contacto, 0.6), Pose::offset(100.0, 0.0), ms(1000))
            .with_delay(ms(300)),
        Entrance::new(ContactForm, Trigger::Manual, Pose::scaled(0.95), ms(1000))
            .with_ease(Ease::Pulse),
        Entrance::new(
            SocialLinks,
            enter(Contacto, 0.5),
            Pose {
                scale: 0.0,
                ..Pose::hidden()
            },
            ms(800),
        )
        .with_stagger(ms(100))
        .with_ease(Ease::BackOut(1.7)),
    ];

    let floats = [
        (-20.0, ms(3000), ms(0)),
        (-15.0, ms(4000), ms(1000)),
        (-25.0, ms(3500), ms(2000)),
        (-18.0, ms(4500), ms(500)),
    ];
    let mut decorations: Vec<(Decoration, Vec<Motion>)> = floats
        .into_iter()
        .enumerate()
        .map(|(index, (amplitude, half_period, delay))| {
            (
                Decoration::HeroBlob(index),
                vec![
                    Motion::Spin {
                        period: ms(20_000),
                        clockwise: true,
                    },
                    Motion::Float {
                        amplitude,
                        half_period,
                        delay,
                    },
                ],
            )
        })
        .collect();

    let rings = [(20_000, true), (15_000, false), (25_000, true)];
    decorations.extend(
        rings
            .into_iter()
            .enumerate()
            .map(|(index, (period, clockwise))| {
                (
                    Decoration::AboutRing(index),
                    vec![Motion::Spin {
                        period: ms(period),
                        clockwise,
                    }],
                )
            }),
    );

    ScrollAnimationBindings::new(entrances, decorations)
}
