use std::{
    convert::Infallible,
    time::{Duration, Instant},
};

use iced::{
    Center, Element, Fill, Length, Task,
    widget::{Column, Row, button, column, container, row, text, text_input},
};
use uuid::Uuid;

use crate::{
    animation::Target,
    contact::{Acknowledgement, ContactSession, Delivery, FormField, SimulatedTransport},
    gui::{
        AppState,
        sections::{Section, SectionMessage},
        widgets::{accent_button, animated, card_style, faded, heading, paint, pill, section_frame},
    },
    models::{SectionId, palette},
};

const ACKNOWLEDGEMENT_TIMEOUT: Duration = Duration::from_secs(4);

/// Contact details plus the message form.
#[derive(Debug)]
pub struct ContactSection {
    /// Owns the delivery in flight; dropping the section cancels it.
    session: ContactSession<SimulatedTransport>,
    acknowledgement: Option<Acknowledgement>,
}

#[derive(Debug, Clone)]
pub enum ContactMessage {
    FieldChanged(FormField, String),
    Submit,
    Delivered(Uuid, Delivery),
    DismissAcknowledgement(Uuid),
    OpenLink(String),
}

impl ContactSection {
    pub fn new(transport: SimulatedTransport) -> Self {
        Self {
            session: ContactSession::new(transport),
            acknowledgement: None,
        }
    }

    fn input<'a>(&'a self, field: FormField, label: &'a str) -> Element<'a, ContactMessage> {
        let mut input = text_input(label, self.session.form().fields().get(field))
            .padding(12)
            .size(16);
        if !self.session.form().is_submitting() {
            input = input
                .on_input(move |value| ContactMessage::FieldChanged(field, value))
                .on_submit(ContactMessage::Submit);
        }
        input.into()
    }

    fn form_view<'a>(&'a self, state: &'a AppState) -> Element<'a, ContactMessage> {
        let copy = &state.content.contact.form;
        let pose = state.animations.pose(Target::ContactForm, 0, state.now);
        let form = self.session.form();

        let submit_label = if form.is_submitting() {
            &copy.submitting
        } else {
            &copy.submit
        };
        let can_submit = !form.is_submitting() && form.is_complete();

        let mut body = column![
            text(&copy.heading).size(28).color(faded(palette::GOLD, pose.opacity)),
            row![
                self.input(FormField::Name, &copy.name),
                self.input(FormField::Email, &copy.email),
            ]
            .spacing(16),
            self.input(FormField::Subject, &copy.subject),
            self.input(FormField::Message, &copy.message),
            accent_button(
                submit_label,
                palette::PINK,
                can_submit.then_some(ContactMessage::Submit),
            ),
        ]
        .spacing(18);

        if let Some(ack) = &self.acknowledgement {
            body = body.push(
                button(text(&copy.acknowledgement).size(16).color(paint(palette::GREEN)))
                    .style(button::text)
                    .on_press(ContactMessage::DismissAcknowledgement(ack.ticket)),
            );
        }

        animated(
            container(body)
                .padding(32)
                .width(Length::FillPortion(1))
                .style(card_style(palette::PINK)),
            pose,
        )
    }

    fn details<'a>(&'a self, state: &'a AppState) -> Element<'a, ContactMessage> {
        let contact = &state.content.contact;
        let now = state.now;

        let cards = Column::with_children(contact.cards.chunks(2).enumerate().map(
            |(row_index, chunk)| {
                Row::with_children(chunk.iter().enumerate().map(|(offset, card)| {
                    let pose =
                        state.animations.pose(Target::ContactCards, row_index * 2 + offset, now);
                    let tile = button(
                        column![
                            text(&card.title).size(20).color(faded(card.accent, pose.opacity)),
                            text(&card.value).size(16).color(faded(palette::GOLD, pose.opacity)),
                            text(&card.subtitle)
                                .size(13)
                                .color(faded(palette::GOLD, 0.5 * pose.opacity)),
                        ]
                        .spacing(6),
                    )
                    .padding(20)
                    .width(Fill)
                    .style(button::text)
                    .on_press(ContactMessage::OpenLink(card.link.clone()));
                    animated(container(tile).style(card_style(card.accent)), pose)
                }))
                .spacing(16)
                .into()
            },
        ))
        .spacing(16);

        let social = Row::with_children(contact.social.iter().enumerate().map(|(index, link)| {
            let pose = state.animations.pose(Target::SocialLinks, index, now);
            let chip = button(text(&link.name).size((14.0 * pose.scale).max(1.0)))
                .style(button::secondary)
                .on_press(ContactMessage::OpenLink(link.url.clone()));
            animated(chip, pose)
        }))
        .spacing(12)
        .wrap();

        let stats = Row::with_children(contact.stats.iter().map(|stat| {
            column![
                text(&stat.value).size(30).color(paint(palette::GOLD)),
                pill(&stat.label, palette::BLUE),
            ]
            .spacing(6)
            .align_x(Center)
            .width(Fill)
            .into()
        }));

        column![
            cards,
            text(&contact.social_heading).size(24).color(paint(palette::PURPLE)),
            social,
            stats,
        ]
        .spacing(28)
        .width(Length::FillPortion(1))
        .into()
    }
}

impl Section for ContactSection {
    type Message = ContactMessage;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, SectionMessage<Self>> {
        let contact = &state.content.contact;
        let page = column![
            heading(
                &contact.heading,
                48.0,
                palette::GOLD,
                state.animations.pose(Target::ContactTitle, 0, state.now),
            ),
            text(&contact.intro).size(16).color(faded(palette::GOLD, 0.7)),
            row![self.details(state), self.form_view(state)].spacing(48),
        ]
        .spacing(32)
        .align_x(Center);

        let height = state.layout.height_of(SectionId::Contacto).unwrap_or_default();
        section_frame(page, height, palette::PURPLE).map(SectionMessage::SectionMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<SectionMessage<Self>> {
        match message {
            ContactMessage::FieldChanged(field, value) => {
                self.session.set(field, value);
                Task::none()
            }
            ContactMessage::Submit => match self.session.submit() {
                Some((ticket, delivery)) => Task::perform(delivery, move |outcome| {
                    SectionMessage::SectionMessage(ContactMessage::Delivered(ticket, outcome))
                }),
                None => Task::none(),
            },
            ContactMessage::Delivered(ticket, outcome) => {
                let Some(ack) = self.session.resolve(ticket, outcome) else {
                    return Task::none();
                };
                let dismiss = ack.ticket;
                self.acknowledgement = Some(ack);
                state.now = Instant::now();
                state.animations.replay(Target::ContactForm, state.now);
                Task::perform(tokio::time::sleep(ACKNOWLEDGEMENT_TIMEOUT), move |_| {
                    SectionMessage::SectionMessage(ContactMessage::DismissAcknowledgement(dismiss))
                })
            }
            ContactMessage::DismissAcknowledgement(ticket) => {
                if self.acknowledgement.as_ref().is_some_and(|ack| ack.ticket == ticket) {
                    self.acknowledgement = None;
                }
                Task::none()
            }
            ContactMessage::OpenLink(url) => {
                tracing::info!(%url, "contact link copied to clipboard");
                iced::clipboard::write(url)
            }
        }
    }
}
