use std::time::Instant;

use iced::{Size, widget::scrollable};

use crate::gui::sections::{
    SectionMessage, about::AboutSection, contact::ContactSection, footer::FooterSection,
    hero::HeroSection, navigation::NavigationBar, projects::ProjectsSection,
};

#[derive(Debug, Clone)]
pub enum Message {
    Navigation(SectionMessage<NavigationBar>),
    Hero(SectionMessage<HeroSection>),
    About(SectionMessage<AboutSection>),
    Projects(SectionMessage<ProjectsSection>),
    Contact(SectionMessage<ContactSection>),
    Footer(SectionMessage<FooterSection>),
    Scrolled(scrollable::Viewport),
    Resized(Size),
    Frame(Instant),
}
