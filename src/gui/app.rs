use std::time::Instant;

use iced::{
    Element, Fill, Size, Subscription, Task, Theme,
    widget::{Id, column, operation, scrollable, stack},
    window,
};

use super::{
    AppState, Message,
    sections::{
        ScrollTo, Section, SectionMessage, about::AboutSection, contact::ContactSection,
        footer::FooterSection, hero::HeroSection, navigation::NavigationBar,
        projects::ProjectsSection,
    },
};
use crate::{
    catalog::ProjectCatalog,
    config::SiteConfig,
    contact::SimulatedTransport,
    content::SiteContent,
    navigation::{NavigationState, ScrollRequest, Viewport},
};

const PAGE_SCROLLABLE: &str = "page";

pub struct PortfolioApp {
    state: AppState,
    navigation: NavigationBar,
    hero: HeroSection,
    about: AboutSection,
    projects: ProjectsSection,
    contact: ContactSection,
    footer: FooterSection,
}

/// Opens the site in a window and blocks until it closes.
pub fn run(config: SiteConfig, content: SiteContent) -> anyhow::Result<()> {
    let window = config.window;
    let catalog = content.catalog()?;

    iced::application(
        move || PortfolioApp::with_catalog(config.clone(), content.clone(), catalog.clone()).boot(),
        PortfolioApp::update,
        PortfolioApp::view,
    )
    .title(PortfolioApp::title)
    .subscription(PortfolioApp::subscription)
    .theme(PortfolioApp::theme)
    .window_size(Size::new(window.width, window.height))
    .run()?;

    Ok(())
}

impl PortfolioApp {
    pub fn new(config: SiteConfig, content: SiteContent) -> anyhow::Result<Self> {
        let catalog = content.catalog()?;
        Ok(Self::with_catalog(config, content, catalog))
    }

    fn with_catalog(config: SiteConfig, content: SiteContent, catalog: ProjectCatalog) -> Self {
        let transport = SimulatedTransport::new(config.submit_delay);
        let state = AppState::new(config, content, catalog);
        let navigation = NavigationState::new(state.scroll_lock.clone())
            .with_nav_offset(state.config.nav_offset)
            .with_scrolled_threshold(state.config.scrolled_threshold);

        Self {
            navigation: NavigationBar::new(navigation),
            hero: HeroSection,
            about: AboutSection,
            projects: ProjectsSection::default(),
            contact: ContactSection::new(transport),
            footer: FooterSection,
            state,
        }
    }

    fn boot(mut self) -> (Self, Task<Message>) {
        let now = Instant::now();
        self.state.now = now;
        self.state.animations.mount(now);
        tracing::info!(
            title = %self.state.content.meta.title,
            projects = self.state.catalog.len(),
            "page mounted"
        );
        (self, Task::none())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn title(&self) -> String {
        self.state.content.meta.title.clone()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let resize = window::resize_events().map(|(_id, size)| Message::Resized(size));
        let animations = &self.state.animations;
        if animations.is_animating() || animations.has_decorations() {
            Subscription::batch([resize, window::frames().map(Message::Frame)])
        } else {
            resize
        }
    }

    fn scroll_to(request: ScrollRequest) -> Task<Message> {
        operation::scroll_to(
            Id::new(PAGE_SCROLLABLE),
            scrollable::AbsoluteOffset {
                x: 0.0,
                y: request.offset,
            },
        )
    }

    fn navigate(&mut self, ScrollTo(section): ScrollTo) -> Task<Message> {
        match self
            .navigation
            .state_mut()
            .select(section, &self.state.layout)
        {
            Some(request) => Self::scroll_to(request),
            None => Task::none(),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigation(msg) => match msg {
                SectionMessage::SectionMessage(msg) => self
                    .navigation
                    .update(msg, &mut self.state)
                    .map(Message::Navigation),
                SectionMessage::ParentMessage(request) => Self::scroll_to(request),
            },
            Message::Hero(msg) => match msg {
                SectionMessage::SectionMessage(msg) => {
                    self.hero.update(msg, &mut self.state).map(Message::Hero)
                }
                SectionMessage::ParentMessage(target) => self.navigate(target),
            },
            Message::About(msg) => match msg {
                SectionMessage::SectionMessage(msg) => {
                    self.about.update(msg, &mut self.state).map(Message::About)
                }
                SectionMessage::ParentMessage(never) => match never {},
            },
            Message::Projects(msg) => match msg {
                SectionMessage::SectionMessage(msg) => self
                    .projects
                    .update(msg, &mut self.state)
                    .map(Message::Projects),
                SectionMessage::ParentMessage(target) => self.navigate(target),
            },
            Message::Contact(msg) => match msg {
                SectionMessage::SectionMessage(msg) => self
                    .contact
                    .update(msg, &mut self.state)
                    .map(Message::Contact),
                SectionMessage::ParentMessage(never) => match never {},
            },
            Message::Footer(msg) => match msg {
                SectionMessage::SectionMessage(msg) => {
                    self.footer.update(msg, &mut self.state).map(Message::Footer)
                }
                SectionMessage::ParentMessage(target) => self.navigate(target),
            },
            Message::Scrolled(viewport) => {
                if self.state.scroll_lock.is_locked() {
                    return Task::none();
                }
                let offset = viewport.absolute_offset().y;
                self.navigation.state_mut().on_scroll(offset);
                self.state.on_scroll(offset);
                Task::none()
            }
            Message::Resized(size) => {
                tracing::debug!(width = size.width, height = size.height, "window resized");
                self.state.resize(Viewport::new(size.width, size.height));
                Task::none()
            }
            Message::Frame(now) => {
                self.state.now = now;
                self.state.animations.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let state = &self.state;
        let page = scrollable(column![
            self.hero.view(state).map(Message::Hero),
            self.about.view(state).map(Message::About),
            self.projects.view(state).map(Message::Projects),
            self.contact.view(state).map(Message::Contact),
            self.footer.view(state).map(Message::Footer),
        ])
        .id(Id::new(PAGE_SCROLLABLE))
        .on_scroll(Message::Scrolled)
        .width(Fill)
        .height(Fill);

        stack![page, self.navigation.view(state).map(Message::Navigation)].into()
    }
}
