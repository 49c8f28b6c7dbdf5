use std::time::{Duration, Instant};

use api_client::{AlbumId, PhotoId};

const DOUBLE_ACTIVATION_WINDOW: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Photo(PhotoId),
    Album(AlbumId),
}

/// Detects double activations (two clicks on the same card inside the
/// window). Activation is a navigation concern only; it neither requires nor
/// touches the photo selection.
#[derive(Debug, Default)]
pub struct ActivationTracker {
    last: Option<(Target, Instant)>,
}

impl ActivationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a click and report whether it completed a double activation.
    pub fn click(&mut self, target: Target) -> bool {
        self.click_at(target, Instant::now())
    }

    fn click_at(&mut self, target: Target, at: Instant) -> bool {
        let double = matches!(
            self.last,
            Some((prev, when)) if prev == target && at.duration_since(when) <= DOUBLE_ACTIVATION_WINDOW
        );
        // A completed double activation should not chain into a triple.
        self.last = if double { None } else { Some((target, at)) };
        double
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_quick_clicks_on_same_target_activate() {
        let mut tracker = ActivationTracker::new();
        let base = Instant::now();
        assert!(!tracker.click_at(Target::Photo(1), base));
        assert!(tracker.click_at(Target::Photo(1), base + Duration::from_millis(100)));
    }

    #[test]
    fn slow_second_click_does_not_activate() {
        let mut tracker = ActivationTracker::new();
        let base = Instant::now();
        assert!(!tracker.click_at(Target::Photo(1), base));
        assert!(!tracker.click_at(Target::Photo(1), base + Duration::from_millis(900)));
    }

    #[test]
    fn clicks_on_different_targets_do_not_activate() {
        let mut tracker = ActivationTracker::new();
        let base = Instant::now();
        assert!(!tracker.click_at(Target::Photo(1), base));
        assert!(!tracker.click_at(Target::Album(1), base + Duration::from_millis(50)));
        assert!(!tracker.click_at(Target::Photo(1), base + Duration::from_millis(100)));
    }

    #[test]
    fn triple_click_is_one_activation() {
        let mut tracker = ActivationTracker::new();
        let base = Instant::now();
        tracker.click_at(Target::Photo(1), base);
        assert!(tracker.click_at(Target::Photo(1), base + Duration::from_millis(100)));
        assert!(!tracker.click_at(Target::Photo(1), base + Duration::from_millis(200)));
    }
}
