//! Embedded-video lifecycle for carousel slides.
//!
//! The embeds expose no player API across the iframe boundary, so the
//! only reliable stop is reassigning the source, which reloads the
//! player. That reset is applied unconditionally to every non-selected
//! slide on each selection change: interrupting an idle player is
//! harmless, an off-screen player left playing is not.

use web_sys::HtmlIFrameElement;
use yew::NodeRef;

/// Owns the reference to one slide's embedded player. Created when the
/// slide mounts, dropped when it unmounts; playback can be reset any
/// number of times in between.
#[derive(Clone, Default, PartialEq)]
pub struct PlayerHandle {
    node: NodeRef,
}

impl PlayerHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Node to bind to the embed's `ref` attribute.
    pub fn node(&self) -> &NodeRef {
        &self.node
    }

    /// Interrupt playback by reloading the embed source. A stale handle
    /// (slide already unmounted) is a silent no-op.
    pub fn force_stop(&self) {
        if let Some(iframe) = self.node.cast::<HtmlIFrameElement>() {
            let src = iframe.src();
            if !src.is_empty() {
                iframe.set_src("");
                iframe.set_src(&src);
            }
        }
    }
}

/// Slide indices whose players must be stopped when `selected` becomes
/// the active slide: everyone else.
pub fn stop_targets(selected: usize, count: usize) -> Vec<usize> {
    (0..count).filter(|&i| i != selected).collect()
}

/// Per-carousel player registry. Holds one handle per slide and
/// enforces the "at most one playing" rule on every selection change.
#[derive(Clone, Default, PartialEq)]
pub struct VideoLifecycle {
    handles: Vec<PlayerHandle>,
}

impl VideoLifecycle {
    pub fn new(count: usize) -> Self {
        Self {
            handles: (0..count).map(|_| PlayerHandle::new()).collect(),
        }
    }

    pub fn handle(&self, slide: usize) -> Option<&PlayerHandle> {
        self.handles.get(slide)
    }

    /// React to a completed selection change: force-stop every player
    /// except the newly selected slide's.
    pub fn on_select(&self, selected: usize) {
        for index in stop_targets(selected, self.handles.len()) {
            self.handles[index].force_stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_targets_cover_everyone_but_the_selection() {
        assert_eq!(stop_targets(2, 5), vec![0, 1, 3, 4]);
        assert_eq!(stop_targets(0, 3), vec![1, 2]);
        assert_eq!(stop_targets(0, 1), Vec::<usize>::new());
        assert_eq!(stop_targets(0, 0), Vec::<usize>::new());
    }

    #[test]
    fn each_non_selected_slide_is_stopped_exactly_once() {
        let targets = stop_targets(3, 6);
        for slide in 0..6 {
            let hits = targets.iter().filter(|&&t| t == slide).count();
            assert_eq!(hits, usize::from(slide != 3));
        }
    }

    #[test]
    fn stale_handle_reset_is_a_no_op() {
        // A handle whose node never mounted must swallow the reset.
        let lifecycle = VideoLifecycle::new(4);
        lifecycle.on_select(1);
    }
}
