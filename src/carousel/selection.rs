//! Snap/selection controller.
//!
//! A small state machine over the scroll container: `Idle` while resting
//! on a snap, `Settling` while a drag, momentum scroll or programmatic
//! navigation is in flight. Exactly one `select` fires per completed
//! settle, and only when the selected snap actually changed.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleState {
    Idle,
    Settling,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionController {
    state: SettleState,
    selected: usize,
    /// Snap the in-flight animation is heading to, if any. Navigation
    /// while settling redirects this instead of queueing.
    target: Option<usize>,
    snap_count: usize,
    looping: bool,
}

impl SelectionController {
    pub fn new(snap_count: usize, looping: bool) -> Self {
        Self {
            state: SettleState::Idle,
            selected: 0,
            target: None,
            snap_count,
            looping,
        }
    }

    pub fn state(&self) -> SettleState {
        self.state
    }

    /// Currently selected snap index, the single source of truth for
    /// which slide's video may play.
    pub fn selected(&self) -> usize {
        self.selected
    }

    fn current(&self) -> usize {
        self.target.unwrap_or(self.selected)
    }

    pub fn can_scroll_prev(&self) -> bool {
        self.looping || self.current() > 0
    }

    pub fn can_scroll_next(&self) -> bool {
        self.looping || self.current() + 1 < self.snap_count
    }

    /// Request navigation to the previous snap. Returns the snap index
    /// the container should animate to, or `None` for a no-op at the
    /// boundary of a non-looping carousel.
    pub fn scroll_prev(&mut self) -> Option<usize> {
        if self.snap_count == 0 {
            return None;
        }
        let base = self.current();
        let next = if self.looping {
            (base + self.snap_count - 1) % self.snap_count
        } else if base == 0 {
            return None;
        } else {
            base - 1
        };
        self.retarget(next)
    }

    /// Request navigation to the next snap; wraps when looping and
    /// no-ops at the end otherwise.
    pub fn scroll_next(&mut self) -> Option<usize> {
        if self.snap_count == 0 {
            return None;
        }
        let base = self.current();
        let next = if self.looping {
            (base + 1) % self.snap_count
        } else if base + 1 >= self.snap_count {
            return None;
        } else {
            base + 1
        };
        self.retarget(next)
    }

    /// Request navigation to an arbitrary snap; wraps when looping,
    /// clamps otherwise. Idempotent: repeated calls just repoint the
    /// in-flight animation.
    pub fn scroll_to(&mut self, snap: usize) -> Option<usize> {
        if self.snap_count == 0 {
            return None;
        }
        let snap = if self.looping {
            snap % self.snap_count
        } else {
            snap.min(self.snap_count - 1)
        };
        self.retarget(snap)
    }

    fn retarget(&mut self, snap: usize) -> Option<usize> {
        self.target = Some(snap);
        self.state = SettleState::Settling;
        Some(snap)
    }

    /// A drag or momentum scroll started without a programmatic target.
    pub fn begin_scroll(&mut self) {
        self.state = SettleState::Settling;
    }

    /// The scroll position came to rest on `nearest`. Transitions back
    /// to `Idle` and reports the new selection if it changed.
    pub fn settle(&mut self, nearest: usize) -> Option<usize> {
        self.state = SettleState::Idle;
        self.target = None;
        if nearest != self.selected && nearest < self.snap_count {
            self.selected = nearest;
            Some(nearest)
        } else {
            None
        }
    }

    /// Snap table changed (resize or slide-set change).
    pub fn reinit(&mut self, snap_count: usize, looping: bool) {
        self.snap_count = snap_count;
        self.looping = looping;
        self.target = None;
        self.state = SettleState::Idle;
        if self.selected >= snap_count {
            self.selected = snap_count.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_back_to_start_on_looping_carousel() {
        let mut ctl = SelectionController::new(5, true);
        for _ in 0..5 {
            let target = ctl.scroll_next().expect("looping next always targets");
            assert_eq!(ctl.settle(target), Some(target));
        }
        assert_eq!(ctl.selected(), 0);
    }

    #[test]
    fn repeated_next_redirects_in_flight_target() {
        let mut ctl = SelectionController::new(3, true);
        assert_eq!(ctl.scroll_next(), Some(1));
        assert_eq!(ctl.state(), SettleState::Settling);
        // Still settling, the request repoints the same animation.
        assert_eq!(ctl.scroll_next(), Some(2));
        assert_eq!(ctl.scroll_next(), Some(0));
        assert_eq!(ctl.state(), SettleState::Settling);
    }

    #[test]
    fn bounds_clamp_when_not_looping() {
        let mut ctl = SelectionController::new(4, false);
        assert!(!ctl.can_scroll_prev());
        assert!(ctl.can_scroll_next());
        assert_eq!(ctl.scroll_prev(), None);

        ctl.settle(3);
        assert!(ctl.can_scroll_prev());
        assert!(!ctl.can_scroll_next());
        assert_eq!(ctl.scroll_next(), None);
        assert_eq!(ctl.state(), SettleState::Idle);
    }

    #[test]
    fn looping_carousel_can_always_navigate() {
        let ctl = SelectionController::new(2, true);
        assert!(ctl.can_scroll_prev());
        assert!(ctl.can_scroll_next());
    }

    #[test]
    fn settle_fires_select_once_per_change() {
        let mut ctl = SelectionController::new(4, false);
        ctl.begin_scroll();
        assert_eq!(ctl.state(), SettleState::Settling);
        assert_eq!(ctl.settle(2), Some(2));
        assert_eq!(ctl.state(), SettleState::Idle);
        // Settling on the same snap again is not a new selection.
        ctl.begin_scroll();
        assert_eq!(ctl.settle(2), None);
    }

    #[test]
    fn scroll_to_wraps_or_clamps() {
        let mut looping = SelectionController::new(5, true);
        assert_eq!(looping.scroll_to(7), Some(2));

        let mut bounded = SelectionController::new(5, false);
        assert_eq!(bounded.scroll_to(99), Some(4));
    }

    #[test]
    fn reinit_clamps_selection_to_new_snap_table() {
        let mut ctl = SelectionController::new(6, false);
        ctl.begin_scroll();
        ctl.settle(5);
        ctl.reinit(3, false);
        assert_eq!(ctl.selected(), 2);
        assert_eq!(ctl.state(), SettleState::Idle);
    }
}
