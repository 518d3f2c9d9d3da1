//! Test doubles for the presentation contract.

use std::collections::HashMap;
use std::time::Duration;

use super::palette::Swatch;
use super::slider::DeferredTask;
use super::stage::{Anchor, ElementRef, Scheduler, Stage, Transform, Transition};

/// Stage that stores the latest value of every style property.
#[derive(Debug, Default)]
pub struct RecordingStage {
    pub viewport: f64,
    pub card_widths: Vec<f64>,
    pub markers: Vec<bool>,
    pub transforms: HashMap<ElementRef, Transform>,
    pub transitions: HashMap<ElementRef, Transition>,
    pub anchors: HashMap<usize, Anchor>,
    pub background: Option<Swatch>,
    pub writes: usize,
}

impl RecordingStage {
    pub fn new(viewport: f64, card_width: f64, cards: usize) -> Self {
        Self {
            viewport,
            card_widths: vec![card_width; cards],
            markers: vec![false; cards],
            ..Self::default()
        }
    }

    pub fn transform(&self, element: ElementRef) -> Transform {
        self.transforms.get(&element).copied().unwrap_or_default()
    }

    /// CSS text of the transform, `""` when unset.
    pub fn css(&self, element: ElementRef) -> String {
        self.transform(element).to_string()
    }

    pub fn transition(&self, element: ElementRef) -> Option<Transition> {
        self.transitions.get(&element).copied()
    }

    pub fn active_markers(&self) -> Vec<usize> {
        self.markers
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(i, _)| i)
            .collect()
    }
}

impl Stage for RecordingStage {
    fn viewport_width(&self) -> f64 {
        self.viewport
    }

    fn card_width(&self, card: usize) -> f64 {
        self.card_widths.get(card).copied().unwrap_or(0.0)
    }

    fn marker_count(&self) -> usize {
        self.markers.len()
    }

    fn set_transform(&mut self, element: ElementRef, transform: Transform) {
        self.writes += 1;
        self.transforms.insert(element, transform);
    }

    fn set_transition(&mut self, element: ElementRef, transition: Option<Transition>) {
        self.writes += 1;
        match transition {
            Some(t) => {
                self.transitions.insert(element, t);
            }
            None => {
                self.transitions.remove(&element);
            }
        }
    }

    fn set_anchor(&mut self, card: usize, anchor: Anchor) {
        self.writes += 1;
        self.anchors.insert(card, anchor);
    }

    fn set_marker_active(&mut self, marker: usize, active: bool) {
        self.writes += 1;
        if let Some(m) = self.markers.get_mut(marker) {
            *m = active;
        }
    }

    fn set_background(&mut self, color: Option<Swatch>) {
        self.writes += 1;
        self.background = color;
    }
}

/// Scheduler driven by a virtual clock.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pub now: Duration,
    queue: Vec<(Duration, u64, DeferredTask)>,
    seq: u64,
}

impl ManualScheduler {
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Remove the earliest task due at or before `until` and move the
    /// clock to its due time.
    pub fn pop_due(&mut self, until: Duration) -> Option<DeferredTask> {
        let (pos, _) = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, (due, _, _))| *due <= until)
            .min_by_key(|(_, (due, seq, _))| (*due, *seq))?;
        let (due, _, task) = self.queue.remove(pos);
        self.now = due;
        Some(task)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, task: DeferredTask) {
        self.seq += 1;
        self.queue.push((self.now + delay, self.seq, task));
    }
}
