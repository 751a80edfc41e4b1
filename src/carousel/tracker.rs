//! Scroll-progress tracking for a carousel viewport.
//!
//! Layout is measured once per (re)init; each scroll tick then only
//! reads `scrollLeft` and derives the snapshot from the cached layout.
//! Snapshot emission is coalesced through `requestAnimationFrame` so at
//! most one recomputation happens per painted frame.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::registry::Layout;

/// One observation of the scroll container. Transient: each snapshot
/// supersedes the previous one, no history is kept.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollSnapshot {
    pub progress: f64,
    pub snap_points: Vec<f64>,
    pub slides_in_view: Vec<usize>,
}

/// Read slide geometry from a mounted viewport. Returns `None` until
/// the viewport and its track are actually in the DOM; callers defer
/// and retry on the next event instead of erroring.
pub fn measure_layout(viewport: &HtmlElement) -> Option<Layout> {
    let track = viewport.first_element_child()?;
    let track_rect = track.get_bounding_client_rect();
    let slides = track.children();

    let mut slide_edges = Vec::with_capacity(slides.length() as usize);
    let mut slide_widths = Vec::with_capacity(slides.length() as usize);
    for i in 0..slides.length() {
        let slide = slides.item(i)?;
        let rect = slide.get_bounding_client_rect();
        slide_edges.push(rect.left() - track_rect.left());
        slide_widths.push(rect.width());
    }

    Some(Layout {
        container_width: f64::from(viewport.client_width()),
        track_width: f64::from(viewport.scroll_width()),
        slide_edges,
        slide_widths,
    })
}

/// Normalized scroll progress for a pixel offset. Looping carousels
/// normalize over the whole track (the space wraps at 1.0), bounded
/// ones over the scrollable length.
pub fn progress_at(layout: &Layout, scroll_left: f64, looping: bool) -> f64 {
    let denom = if looping {
        layout.track_width
    } else {
        layout.track_width - layout.container_width
    };
    if denom <= 0.0 {
        0.0
    } else {
        scroll_left / denom
    }
}

/// Indices of slides at least partially inside the viewport window.
pub fn slides_in_view(layout: &Layout, scroll_left: f64) -> Vec<usize> {
    let view_start = scroll_left;
    let view_end = scroll_left + layout.container_width;
    layout
        .slide_edges
        .iter()
        .zip(layout.slide_widths.iter())
        .enumerate()
        .filter(|(_, (edge, width))| **edge + **width > view_start && **edge < view_end)
        .map(|(i, _)| i)
        .collect()
}

/// Build a snapshot from the current scroll position of a mounted
/// viewport.
pub fn take_snapshot(
    viewport: &HtmlElement,
    layout: &Layout,
    snap_points: &[f64],
    looping: bool,
) -> ScrollSnapshot {
    let scroll_left = f64::from(viewport.scroll_left());
    ScrollSnapshot {
        progress: progress_at(layout, scroll_left, looping),
        snap_points: snap_points.to_vec(),
        slides_in_view: slides_in_view(layout, scroll_left),
    }
}

struct FrameGateInner {
    alive: Cell<bool>,
    pending: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

/// Animation-frame coalescer: any number of `request` calls between two
/// paints collapse into one handler invocation. The handler checks
/// liveness so a frame that fires after teardown does nothing.
pub struct FrameGate {
    inner: Rc<FrameGateInner>,
}

impl FrameGate {
    pub fn new(handler: impl Fn() + 'static) -> Self {
        let inner = Rc::new(FrameGateInner {
            alive: Cell::new(true),
            pending: Cell::new(None),
            callback: RefCell::new(None),
        });
        let closure = {
            let inner = Rc::clone(&inner);
            Closure::<dyn FnMut()>::new(move || {
                inner.pending.set(None);
                if inner.alive.get() {
                    handler();
                }
            })
        };
        inner.callback.replace(Some(closure));
        Self { inner }
    }

    /// Schedule the handler for the next frame unless one is already
    /// pending.
    pub fn request(&self) {
        if self.inner.pending.get().is_some() || !self.inner.alive.get() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = self.inner.callback.borrow();
        if let Some(closure) = callback.as_ref() {
            if let Ok(handle) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                self.inner.pending.set(Some(handle));
            }
        }
    }

    /// Tear down: cancel any pending frame and drop the callback so no
    /// further work runs against a destroyed target.
    pub fn cancel(&self) {
        self.inner.alive.set(false);
        if let Some(handle) = self.inner.pending.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(handle);
            }
        }
        self.inner.callback.replace(None);
    }
}

impl Clone for FrameGate {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout {
            container_width: 480.0,
            track_width: 2400.0,
            slide_edges: vec![0.0, 480.0, 960.0, 1440.0, 1920.0],
            slide_widths: vec![480.0; 5],
        }
    }

    #[test]
    fn progress_normalizes_over_scrollable_length_when_bounded() {
        let layout = layout();
        assert_eq!(progress_at(&layout, 0.0, false), 0.0);
        assert_eq!(progress_at(&layout, 1920.0, false), 1.0);
        assert_eq!(progress_at(&layout, 960.0, false), 0.5);
    }

    #[test]
    fn progress_normalizes_over_track_when_looping() {
        let layout = layout();
        assert_eq!(progress_at(&layout, 480.0, true), 0.2);
        assert_eq!(progress_at(&layout, 2400.0, true), 1.0);
    }

    #[test]
    fn degenerate_layout_reports_zero_progress() {
        let layout = Layout {
            container_width: 480.0,
            track_width: 480.0,
            slide_edges: vec![0.0],
            slide_widths: vec![480.0],
        };
        assert_eq!(progress_at(&layout, 120.0, false), 0.0);
    }

    #[test]
    fn slides_in_view_tracks_the_window() {
        let layout = layout();
        assert_eq!(slides_in_view(&layout, 0.0), vec![0]);
        // Mid-drag the window straddles two slides.
        assert_eq!(slides_in_view(&layout, 240.0), vec![0, 1]);
        assert_eq!(slides_in_view(&layout, 1920.0), vec![4]);
    }
}
