//! Pointer/touch drag tracking.
//!
//! [`GestureTracker`] turns a stream of horizontal positions into a bounded
//! live displacement while the pointer is held, and into a [`Release`]
//! decision when it is let go.  At most one [`DragSession`] exists at a time.

use super::geometry::Geometry;

// ───────────────────────────────────────── input ─────────────

/// A raw input sample carrying horizontal coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerInput {
    Mouse { x: f64 },
    /// Every active contact point; only the first one is used.
    Touch { touches: Vec<f64> },
}

impl PointerInput {
    /// The horizontal coordinate this sample contributes, if any.
    pub fn position(&self) -> Option<f64> {
        match self {
            PointerInput::Mouse { x } => Some(*x),
            PointerInput::Touch { touches } => touches.first().copied(),
        }
    }
}

// ───────────────────────────────────────── session ───────────

/// Per-gesture state.  Created on start, dropped on release.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub start: f64,
    pub current: f64,
    pub geometry: Geometry,
}

impl DragSession {
    /// Signed displacement with the sign flipped so positive means the
    /// content moves right.  Unbounded.
    pub fn displacement(&self) -> f64 {
        -(self.current - self.start)
    }

    /// [`displacement`](Self::displacement) bounded to a quarter viewport.
    pub fn clamped(&self) -> f64 {
        let limit = self.geometry.drag_limit();
        let diff = self.displacement();
        if diff.abs() > limit {
            if diff > 0.0 {
                limit
            } else {
                -limit
            }
        } else {
            diff
        }
    }
}

/// Which way a released card was thrown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Outcome of a finished drag, before any boundary checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Release {
    pub direction: Direction,
    /// `|start - current|`.
    pub magnitude: f64,
    /// Threshold the magnitude must exceed for a commit.
    pub limit: f64,
    pub geometry: Geometry,
}

impl Release {
    pub fn exceeds_limit(&self) -> bool {
        self.magnitude > self.limit
    }
}

// ───────────────────────────────────────── tracker ───────────

#[derive(Debug, Default)]
pub struct GestureTracker {
    session: Option<DragSession>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Open a session at `position`.  Returns `false` and leaves the live
    /// session untouched when one is already open.
    pub fn start(&mut self, position: f64, geometry: Geometry) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(DragSession {
            start: position,
            current: position,
            geometry,
        });
        true
    }

    /// Record a new pointer position and return the clamped displacement,
    /// or `None` when no drag is in progress.
    pub fn drag(&mut self, position: f64) -> Option<f64> {
        let session = self.session.as_mut()?;
        session.current = position;
        Some(session.clamped())
    }

    /// Close the session and classify it.  A zero displacement counts as
    /// [`Direction::Right`].
    pub fn release(&mut self) -> Option<Release> {
        let session = self.session.take()?;
        let diff = session.start - session.current;
        let direction = if diff > 0.0 {
            Direction::Left
        } else {
            Direction::Right
        };
        Some(Release {
            direction,
            magnitude: diff.abs(),
            limit: session.geometry.drag_limit(),
            geometry: session.geometry,
        })
    }
}
