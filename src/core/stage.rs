//! The presentation contract the carousel drives.
//!
//! The core never draws anything.  It queries geometry and pushes style
//! changes through [`Stage`], and defers work through [`Scheduler`].  The
//! terminal front-end implements both; tests use recording doubles.

use std::fmt;
use std::time::Duration;

use super::deck::Role;
use super::palette::Swatch;
use super::slider::DeferredTask;

/// Addressable element on the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRef {
    Card(usize),
    Part(usize, Role),
}

/// Horizontal transform of an element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Transform {
    /// No transform: the element sits at its resting position.
    #[default]
    None,
    /// `translateX(px)`.
    Shift(f64),
    /// `translateX(calc(px - 50%))`, used for the card itself which is
    /// centred on its `left` anchor.
    Centered(f64),
}

impl Transform {
    /// Column offset relative to the element's resting position.  For
    /// [`Transform::Centered`] the half-width term is applied by the
    /// renderer, so only the drag component is returned.
    pub fn offset(self) -> f64 {
        match self {
            Transform::None => 0.0,
            Transform::Shift(px) | Transform::Centered(px) => px,
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::None => Ok(()),
            Transform::Shift(px) => write!(f, "translateX({px}px)"),
            Transform::Centered(px) => write!(f, "translateX(calc({px}px - 50%))"),
        }
    }
}

/// An ease-out transition on the transform property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration: Duration,
}

impl Transition {
    pub fn ease_out(duration: Duration) -> Self {
        Self { duration }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transform {}s ease-out", self.duration.as_secs_f64())
    }
}

/// Horizontal anchor of a card, as a percentage of the viewport width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor(pub f64);

impl Anchor {
    /// Parked off-stage to the left.
    pub const BEFORE: Anchor = Anchor(-50.0);
    /// Centre of the viewport.
    pub const CENTER: Anchor = Anchor(50.0);
    /// Parked off-stage to the right.
    pub const AFTER: Anchor = Anchor(150.0);
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Query and mutation surface of the presentation layer.
pub trait Stage {
    /// Width of the visible area, in columns.
    fn viewport_width(&self) -> f64;
    /// Rendered width of a card, in columns.
    fn card_width(&self, card: usize) -> f64;
    /// Number of position-indicator markers.
    fn marker_count(&self) -> usize;

    fn set_transform(&mut self, element: ElementRef, transform: Transform);
    /// `None` clears the transition so later changes apply instantly.
    fn set_transition(&mut self, element: ElementRef, transition: Option<Transition>);
    fn set_anchor(&mut self, card: usize, anchor: Anchor);
    fn set_marker_active(&mut self, marker: usize, active: bool);
    /// `None` leaves the background unstyled.
    fn set_background(&mut self, color: Option<Swatch>);
}

/// One-shot delayed execution.  The host hands each task back to
/// [`Slider::run_deferred`](super::slider::Slider::run_deferred) once the
/// delay has elapsed.  There is no cancellation.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, task: DeferredTask);
}
