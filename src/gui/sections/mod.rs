pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod navigation;
pub mod projects;

use std::fmt;

use iced::{Element, Task};

use crate::{gui::AppState, models::SectionId};

/// Either a message a section handles itself or one it hands up to the page.
pub enum SectionMessage<S: Section> {
    SectionMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

impl<S: Section> Clone for SectionMessage<S> {
    fn clone(&self) -> Self {
        match self {
            SectionMessage::SectionMessage(msg) => SectionMessage::SectionMessage(msg.clone()),
            SectionMessage::ParentMessage(msg) => SectionMessage::ParentMessage(msg.clone()),
        }
    }
}

impl<S: Section> fmt::Debug for SectionMessage<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionMessage::SectionMessage(msg) => {
                f.debug_tuple("SectionMessage").field(msg).finish()
            }
            SectionMessage::ParentMessage(msg) => {
                f.debug_tuple("ParentMessage").field(msg).finish()
            }
        }
    }
}

/// One block of the page. Sections own their local view state; everything
/// shared lives in [`AppState`].
pub trait Section: Sized {
    type Message: fmt::Debug + Clone;
    type ParentMessage: fmt::Debug + Clone;
    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, SectionMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<SectionMessage<Self>>;
}

/// Request to bring a section under the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTo(pub SectionId);
