//! The carousel state machine.
//!
//! [`Slider`] owns the current index and the idle → dragging → settling
//! lifecycle.  Input arrives through three stable entry points
//! ([`on_start`](Slider::on_start), [`on_move`](Slider::on_move),
//! [`on_end`](Slider::on_end)); every visual effect is pushed to the injected
//! [`Stage`] and every delayed step goes through the injected [`Scheduler`].

use std::time::Duration;

use super::deck::Deck;
use super::geometry::Geometry;
use super::gesture::{Direction, GestureTracker, PointerInput};
use super::indicator::IndicatorSync;
use super::palette::Palette;
use super::parallax;
use super::stage::{Anchor, ElementRef, Scheduler, Stage, Transform, Transition};

// ───────────────────────────────────────── types ─────────────

/// Lifecycle of the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Dragging,
    /// A release was handled and its transitions are still playing.
    Settling,
}

/// Work handed to the [`Scheduler`] and run later via
/// [`Slider::run_deferred`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTask {
    /// Ease the active card's parts back to rest after a commit pre-staged
    /// them.  Targets whichever card is active when it fires.
    RestageParts,
    /// Drop the transform and transitions left on `card` by a reset.
    ClearStyles { card: usize, epoch: u64 },
}

/// What a release did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Committed { from: usize, to: usize },
    Cancelled,
}

/// Delays used by the settle sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Transition length, and the delay before transitions are cleared.
    pub settle: Duration,
    /// Delay between pre-staging a new card's parts and easing them home.
    pub restage: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            settle: Duration::from_millis(500),
            restage: Duration::from_millis(50),
        }
    }
}

// ───────────────────────────────────────── slider ────────────

pub struct Slider<S, T> {
    deck: Deck,
    stage: S,
    scheduler: T,
    indicator: IndicatorSync,
    tracker: GestureTracker,
    timing: Timing,
    current: usize,
    phase: Phase,
    /// Bumped on every release; lets a late `ClearStyles` from an older
    /// settle leave the phase alone.
    epoch: u64,
    /// Ratio of the most recent drag.  Also scales commit pre-staging.
    ratio: f64,
}

impl<S: Stage, T: Scheduler> Slider<S, T> {
    /// Bind a deck to its stage and show the first card.
    pub fn new(deck: Deck, stage: S, scheduler: T, palette: Palette, timing: Timing) -> Self {
        if palette.len() < deck.len() {
            tracing::warn!(
                palette = palette.len(),
                cards = deck.len(),
                "palette shorter than deck; later cards get no background"
            );
        }
        let mut slider = Self {
            deck,
            stage,
            scheduler,
            indicator: IndicatorSync::new(palette),
            tracker: GestureTracker::new(),
            timing,
            current: 0,
            phase: Phase::Idle,
            epoch: 0,
            ratio: 0.0,
        };
        for card in 0..slider.deck.len() {
            let anchor = if card == 0 { Anchor::CENTER } else { Anchor::AFTER };
            slider.stage.set_anchor(card, anchor);
        }
        slider.indicator.sync(&mut slider.stage, slider.current);
        slider
    }

    // ── accessors ───────────────────────────────────────────────

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut S {
        &mut self.stage
    }

    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut T {
        &mut self.scheduler
    }

    // ── input ───────────────────────────────────────────────────

    /// Begin a drag.  Ignored while a drag is already in progress.
    pub fn on_start(&mut self, input: &PointerInput) {
        let Some(x) = input.position() else {
            return;
        };
        let geometry = Geometry::sample(&self.stage, self.current);
        if !self.tracker.start(x, geometry) {
            tracing::debug!(x, "drag start ignored: already dragging");
            return;
        }
        self.ratio = geometry.ratio;
        self.phase = Phase::Dragging;
        tracing::debug!(
            x,
            index = self.current,
            viewport = geometry.viewport_width,
            card = geometry.card_width,
            ratio = geometry.ratio,
            "drag start"
        );
    }

    /// Follow the pointer.  Returns the clamped displacement that was
    /// rendered, or `None` when no drag is active.
    pub fn on_move(&mut self, input: &PointerInput) -> Option<f64> {
        let x = input.position()?;
        let diff = self.tracker.drag(x)?;
        self.move_card(diff);
        Some(diff)
    }

    /// Finish a drag: commit to a neighbour or snap back.
    pub fn on_end(&mut self) -> Option<Outcome> {
        let release = self.tracker.release()?;
        self.phase = Phase::Settling;
        self.epoch += 1;

        let outcome = if release.exceeds_limit() {
            match release.direction {
                Direction::Left => self.slide_left(release.geometry),
                Direction::Right => self.slide_right(release.geometry),
            }
        } else {
            self.cancel_move()
        };
        tracing::debug!(
            direction = ?release.direction,
            magnitude = release.magnitude,
            limit = release.limit,
            ?outcome,
            "drag end"
        );
        Some(outcome)
    }

    /// Execute a task the scheduler has released.
    pub fn run_deferred(&mut self, task: DeferredTask) {
        tracing::debug!(?task, index = self.current, "deferred task");
        match task {
            DeferredTask::RestageParts => self.reset_parts(),
            DeferredTask::ClearStyles { card, epoch } => {
                // Not cancelled by a newer gesture: if a drag started on this
                // card since, its live transform is wiped here too.
                self.stage.set_transform(ElementRef::Card(card), Transform::None);
                self.stage.set_transition(ElementRef::Card(card), None);
                if let Some(c) = self.deck.card(card) {
                    for role in c.animated_roles() {
                        self.stage.set_transition(ElementRef::Part(card, role), None);
                    }
                }
                if epoch == self.epoch && card == self.current && self.phase == Phase::Settling {
                    self.phase = Phase::Idle;
                }
            }
        }
    }

    // ── transitions ─────────────────────────────────────────────

    fn slide_left(&mut self, geometry: Geometry) -> Outcome {
        if self.current == self.deck.last_index() {
            return self.cancel_move();
        }
        self.commit(Direction::Left, geometry)
    }

    fn slide_right(&mut self, geometry: Geometry) -> Outcome {
        if self.current == 0 {
            return self.cancel_move();
        }
        self.commit(Direction::Right, geometry)
    }

    fn commit(&mut self, direction: Direction, geometry: Geometry) -> Outcome {
        let from = self.current;
        let (parked, to, prestage) = match direction {
            Direction::Left => (Anchor::BEFORE, from + 1, 1.0),
            Direction::Right => (Anchor::AFTER, from - 1, -1.0),
        };
        let half_viewport = geometry.viewport_width / 2.0;

        self.stage.set_anchor(from, parked);
        self.reset_parts();

        self.current = to;
        self.indicator.sync(&mut self.stage, self.current);
        self.stage.set_anchor(to, Anchor::CENTER);

        self.move_parts(prestage * half_viewport * 3.0);
        self.scheduler
            .schedule(self.timing.restage, DeferredTask::RestageParts);

        Outcome::Committed { from, to }
    }

    /// Snap the active card back to centre.
    fn cancel_move(&mut self) -> Outcome {
        let card = ElementRef::Card(self.current);
        self.stage
            .set_transition(card, Some(Transition::ease_out(self.timing.settle)));
        self.stage.set_transform(card, Transform::None);
        self.reset_parts();
        Outcome::Cancelled
    }

    /// Ease the active card's parts back to rest and schedule the cleanup.
    fn reset_parts(&mut self) {
        let index = self.current;
        let transition = Transition::ease_out(self.timing.settle);
        let Some(card) = self.deck.card(index) else {
            return;
        };
        for role in card.animated_roles() {
            self.stage
                .set_transition(ElementRef::Part(index, role), Some(transition));
        }
        for role in card.roles() {
            self.stage
                .set_transform(ElementRef::Part(index, role), Transform::None);
        }
        self.scheduler.schedule(
            self.timing.settle,
            DeferredTask::ClearStyles {
                card: index,
                epoch: self.epoch,
            },
        );
    }

    /// Render a live drag: the card follows `diff`, its parts move the
    /// opposite way by their parallax share.
    fn move_card(&mut self, diff: f64) {
        self.stage
            .set_transform(ElementRef::Card(self.current), Transform::Centered(diff));
        self.move_parts(-diff);
    }

    fn move_parts(&mut self, diff: f64) {
        let index = self.current;
        let Some(card) = self.deck.card(index) else {
            return;
        };
        for (role, offset) in parallax::offsets(card.roles(), diff, self.ratio) {
            self.stage
                .set_transform(ElementRef::Part(index, role), Transform::Shift(offset));
        }
    }
}
