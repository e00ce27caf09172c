//! Entrance and decorative motion for the page.
//!
//! Bindings are declarative: each one names an element group, what starts it
//! (page mount, a section scrolling into view, or an explicit replay) and the
//! pose it animates from. Scroll-triggered entrances play once per page
//! session and never rewind.

mod easing;
mod presets;

use std::{
    f32::consts::TAU,
    time::{Duration, Instant},
};

use crate::{models::SectionId, navigation::PageLayout};

pub use easing::Ease;
pub use presets::page_bindings;

/// Visual offset of an element relative to its laid-out position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub dx: f32,
    pub dy: f32,
    pub scale: f32,
    pub rotation: f32,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        dx: 0.0,
        dy: 0.0,
        scale: 1.0,
        rotation: 0.0,
    };

    pub fn hidden() -> Self {
        Pose {
            opacity: 0.0,
            ..Pose::REST
        }
    }

    pub fn offset(dx: f32, dy: f32) -> Self {
        Pose {
            dx,
            dy,
            ..Pose::hidden()
        }
    }

    pub fn scaled(scale: f32) -> Self {
        Pose {
            scale,
            ..Pose::REST
        }
    }

    /// Moves from `self` towards the rest pose by `t`.
    pub fn towards_rest(self, t: f32) -> Self {
        let lerp = |from: f32, to: f32| from + (to - from) * t;
        Pose {
            opacity: lerp(self.opacity, 1.0).clamp(0.0, 1.0),
            dx: lerp(self.dx, 0.0),
            dy: lerp(self.dy, 0.0),
            scale: lerp(self.scale, 1.0),
            rotation: lerp(self.rotation, 0.0),
        }
    }

    /// Stacks two poses applied to the same element.
    pub fn compose(self, other: Pose) -> Self {
        Pose {
            opacity: self.opacity * other.opacity,
            dx: self.dx + other.dx,
            dy: self.dy + other.dy,
            scale: self.scale * other.scale,
            rotation: self.rotation + other.rotation,
        }
    }

    pub fn is_rest(&self) -> bool {
        *self == Pose::REST
    }
}

/// Element groups that carry entrance motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    HeroTitle,
    HeroSubtitle,
    HeroLines,
    HeroCta,
    AboutContent,
    AboutVisual,
    Skills,
    ProjectsTitle,
    ProjectFilters,
    ProjectCards,
    ContactTitle,
    ContactCards,
    ContactForm,
    SocialLinks,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Plays as soon as the page mounts.
    Mount,
    /// Plays once the section's top edge crosses `start` (a fraction of the
    /// viewport height, measured from the top).
    Enter { section: SectionId, start: f32 },
    /// Plays only when replayed explicitly; rests until then.
    Manual,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entrance {
    pub target: Target,
    pub trigger: Trigger,
    pub from: Pose,
    pub duration: Duration,
    pub delay: Duration,
    /// Extra delay per item for staggered groups.
    pub stagger: Duration,
    pub ease: Ease,
}

impl Entrance {
    pub fn new(target: Target, trigger: Trigger, from: Pose, duration: Duration) -> Self {
        Self {
            target,
            trigger,
            from,
            duration,
            delay: Duration::ZERO,
            stagger: Duration::ZERO,
            ease: Ease::Power3Out,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    fn item_start(&self, index: usize) -> Duration {
        self.delay + self.stagger * index as u32
    }

    fn sample(&self, elapsed: Duration, index: usize) -> Pose {
        let start = self.item_start(index);
        if elapsed <= start {
            return self.resting_or_from(0.0);
        }
        let local = (elapsed - start).as_secs_f32() / self.duration.as_secs_f32().max(f32::EPSILON);
        self.resting_or_from(local.min(1.0))
    }

    fn resting_or_from(&self, t: f32) -> Pose {
        self.from.towards_rest(self.ease.apply(t))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Armed,
    Playing { started: Instant },
    Finished,
}

#[derive(Debug, Clone)]
struct Binding {
    entrance: Entrance,
    phase: Phase,
    items: usize,
}

impl Binding {
    fn total(&self) -> Duration {
        self.entrance.item_start(self.items.saturating_sub(1)) + self.entrance.duration
    }

    fn pose(&self, index: usize, now: Instant) -> Pose {
        match self.phase {
            Phase::Armed => match self.entrance.trigger {
                Trigger::Manual => Pose::REST,
                _ => self.entrance.from,
            },
            Phase::Playing { started } => {
                self.entrance.sample(now.saturating_duration_since(started), index)
            }
            Phase::Finished => Pose::REST,
        }
    }
}

/// Decorative looping motion. Runs for the whole session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    Spin { period: Duration, clockwise: bool },
    Float { amplitude: f32, half_period: Duration, delay: Duration },
}

impl Motion {
    pub fn sample(&self, elapsed: Duration) -> Pose {
        match *self {
            Motion::Spin { period, clockwise } => {
                let turns = (elapsed.as_secs_f32() / period.as_secs_f32()).fract();
                let direction = if clockwise { 1.0 } else { -1.0 };
                Pose {
                    rotation: TAU * turns * direction,
                    ..Pose::REST
                }
            }
            Motion::Float {
                amplitude,
                half_period,
                delay,
            } => {
                let Some(running) = elapsed.checked_sub(delay) else {
                    return Pose::REST;
                };
                let cycles = running.as_secs_f32() / half_period.as_secs_f32();
                let progress = if (cycles as u64) % 2 == 0 {
                    cycles.fract()
                } else {
                    1.0 - cycles.fract()
                };
                Pose {
                    dy: amplitude * Ease::Power2InOut.apply(progress),
                    ..Pose::REST
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decoration {
    HeroBlob(usize),
    AboutRing(usize),
}

/// All the timelines bound to the page.
#[derive(Debug, Clone)]
pub struct ScrollAnimationBindings {
    bindings: Vec<Binding>,
    decorations: Vec<(Decoration, Vec<Motion>)>,
    mounted_at: Option<Instant>,
    enabled: bool,
}

impl ScrollAnimationBindings {
    pub fn new(entrances: Vec<Entrance>, decorations: Vec<(Decoration, Vec<Motion>)>) -> Self {
        let bindings = entrances
            .into_iter()
            .map(|entrance| Binding {
                entrance,
                phase: Phase::Armed,
                items: 1,
            })
            .collect();
        Self {
            bindings,
            decorations,
            mounted_at: None,
            enabled: true,
        }
    }

    /// With motion disabled every element stays at rest.
    pub fn with_motion(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn motion_enabled(&self) -> bool {
        self.enabled
    }

    /// Tells staggered groups how many elements they currently have.
    pub fn set_items(&mut self, target: Target, items: usize) {
        for binding in self.bindings.iter_mut().filter(|b| b.entrance.target == target) {
            binding.items = items.max(1);
        }
    }

    /// Starts the mount-triggered entrances.
    pub fn mount(&mut self, now: Instant) {
        if self.mounted_at.is_some() {
            return;
        }
        self.mounted_at = Some(now);
        for binding in &mut self.bindings {
            if binding.entrance.trigger == Trigger::Mount && binding.phase == Phase::Armed {
                binding.phase = Phase::Playing { started: now };
            }
        }
    }

    /// Fires every armed scroll entrance whose trigger line the viewport has
    /// reached. Returns how many started.
    pub fn on_scroll(&mut self, offset: f32, layout: &PageLayout, now: Instant) -> usize {
        let viewport_height = layout.viewport().height;
        let mut fired = 0;
        for binding in &mut self.bindings {
            let Trigger::Enter { section, start } = binding.entrance.trigger else {
                continue;
            };
            if binding.phase != Phase::Armed {
                continue;
            }
            let Some(top) = layout.offset_of(section) else {
                continue;
            };
            if top <= offset + start * viewport_height {
                binding.phase = Phase::Playing { started: now };
                fired += 1;
                tracing::trace!(element = ?binding.entrance.target, %section, "entrance fired");
            }
        }
        fired
    }

    /// Restarts the manual timelines of `target`.
    pub fn replay(&mut self, target: Target, now: Instant) {
        for binding in &mut self.bindings {
            if binding.entrance.target == target && binding.entrance.trigger == Trigger::Manual {
                binding.phase = Phase::Playing { started: now };
            }
        }
    }

    /// Retires timelines that have run their course.
    pub fn tick(&mut self, now: Instant) {
        for binding in &mut self.bindings {
            if let Phase::Playing { started } = binding.phase {
                if now.saturating_duration_since(started) >= binding.total() {
                    binding.phase = Phase::Finished;
                }
            }
        }
    }

    /// Whether any entrance is still moving.
    pub fn is_animating(&self) -> bool {
        self.enabled
            && self
                .bindings
                .iter()
                .any(|binding| matches!(binding.phase, Phase::Playing { .. }))
    }

    pub fn has_decorations(&self) -> bool {
        self.enabled && !self.decorations.is_empty()
    }

    /// Current pose of the `index`-th element of `target`.
    pub fn pose(&self, target: Target, index: usize, now: Instant) -> Pose {
        if !self.enabled {
            return Pose::REST;
        }
        self.bindings
            .iter()
            .filter(|binding| binding.entrance.target == target)
            .fold(Pose::REST, |pose, binding| {
                pose.compose(binding.pose(index, now))
            })
    }

    pub fn decoration(&self, decoration: Decoration, now: Instant) -> Pose {
        let (true, Some(mounted_at)) = (self.enabled, self.mounted_at) else {
            return Pose::REST;
        };
        let elapsed = now.saturating_duration_since(mounted_at);
        self.decorations
            .iter()
            .filter(|(id, _)| *id == decoration)
            .flat_map(|(_, motions)| motions.iter())
            .fold(Pose::REST, |pose, motion| pose.compose(motion.sample(elapsed)))
    }
}
