//! Column offset with exponential ease-out.
//!
//! When a transitioned element gets a new target, its displayed value keeps
//! its old position and decays toward the target a little each tick: fast
//! at first, then slowing, like a CSS `ease-out`.  Elements without a
//! transition jump straight to the target.

/// Decay factor per tick so an eased value is within 2% of its target
/// after `duration`.
pub fn speed_for(duration: std::time::Duration, frame: std::time::Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let frames = duration.as_secs_f64() / frame.as_secs_f64().max(1e-3);
    let speed = 1.0 - 0.02f64.powf(1.0 / frames.max(1.0));
    speed.clamp(0.05, 1.0)
}

/// Displayed offset of one element.
#[derive(Debug, Clone, Default)]
pub struct Eased {
    /// Where the element is drawn this frame.
    value: f64,
    /// Where the element is heading.
    target: f64,
    /// Damping: `gap *= (1 - speed)` each tick.
    speed: f64,
}

impl Eased {
    /// Move to `target` immediately.
    pub fn jump(&mut self, target: f64) {
        self.value = target;
        self.target = target;
        self.speed = 0.0;
    }

    /// Start easing from the current value toward `target`.
    pub fn ease_to(&mut self, target: f64, speed: f64) {
        self.target = target;
        self.speed = speed.clamp(0.0, 1.0);
    }

    /// Finish any running animation.
    pub fn settle(&mut self) {
        self.value = self.target;
    }

    /// Decay toward the target.  Call once per frame.
    pub fn tick(&mut self) {
        let gap = self.value - self.target;
        let gap = gap * (1.0 - self.speed);
        self.value = if gap.abs() < 0.4 {
            self.target
        } else {
            self.target + gap
        };
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// True while the displayed value has not reached its target.
    pub fn is_animating(&self) -> bool {
        self.value != self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn jump_is_instant() {
        let mut e = Eased::default();
        e.jump(12.0);
        assert_eq!(e.value(), 12.0);
        assert!(!e.is_animating());
    }

    #[test]
    fn ease_decelerates_and_lands() {
        let mut e = Eased::default();
        e.jump(100.0);
        e.ease_to(0.0, 0.3);
        e.tick();
        let first = 100.0 - e.value();
        e.tick();
        let second = 100.0 - first - e.value();
        assert!(first > second, "steps should shrink: {first} then {second}");
        for _ in 0..40 {
            e.tick();
        }
        assert_eq!(e.value(), 0.0);
        assert!(!e.is_animating());
    }

    #[test]
    fn settle_snaps_to_target() {
        let mut e = Eased::default();
        e.jump(-40.0);
        e.ease_to(0.0, 0.2);
        e.tick();
        assert!(e.is_animating());
        e.settle();
        assert_eq!(e.value(), 0.0);
    }

    #[test]
    fn speed_lands_within_duration() {
        let frame = Duration::from_millis(16);
        let speed = speed_for(Duration::from_millis(500), frame);
        let mut e = Eased::default();
        e.jump(15.0);
        e.ease_to(0.0, speed);
        for _ in 0..32 {
            e.tick();
        }
        assert_eq!(e.value(), 0.0);
        assert_eq!(speed_for(Duration::ZERO, frame), 1.0);
    }
}
