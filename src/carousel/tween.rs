//! Tween engine: maps scroll progress to per-slide visual state.
//!
//! The engine is a pure function of `(snapshot, slide, registry)`; it
//! never writes styles itself. The rendering layer binds the returned
//! values to style attributes, so the whole thing stays a function of
//! scroll position.

use super::registry::SlideRegistry;
use super::tracker::ScrollSnapshot;

pub const TWEEN_FACTOR_BASE: f64 = 0.6;

const OPACITY_MIN: f64 = 0.3;
const OPACITY_MAX: f64 = 1.0;
const SCALE_MIN: f64 = 0.9;
const SCALE_MAX: f64 = 1.0;

/// Visual state of one slide. One curve drives both properties, they
/// just clamp to different output ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenStyle {
    pub opacity: f64,
    pub scale: f64,
}

impl TweenStyle {
    pub const RESTING: TweenStyle = TweenStyle {
        opacity: 1.0,
        scale: 1.0,
    };

    /// Inline style value for declarative binding in the view.
    pub fn css(&self) -> String {
        format!(
            "opacity: {:.4}; transform: scale({:.4}); transition: opacity 0.15s ease-out, transform 0.15s ease-out;",
            self.opacity, self.scale
        )
    }
}

/// What caused a recomputation. Live scroll events short-circuit slides
/// that are out of view; reinit and focus recompute everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenTrigger {
    Scroll,
    Reinit,
    Focus,
}

/// Caches the sensitivity factor for one registry generation. The
/// factor scales with the snap count so exactly one slide peaks at a
/// time no matter how many snap points exist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenEngine {
    factor: f64,
}

impl TweenEngine {
    pub fn new(registry: &SlideRegistry) -> Self {
        Self {
            factor: TWEEN_FACTOR_BASE * registry.snap_points().len() as f64,
        }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    fn style_at(&self, diff: f64) -> TweenStyle {
        let raw = 1.0 - (diff * self.factor).abs();
        TweenStyle {
            opacity: raw.clamp(OPACITY_MIN, OPACITY_MAX),
            scale: raw.clamp(SCALE_MIN, SCALE_MAX),
        }
    }

    /// Distance from a snap to the current progress, corrected for a
    /// slide that is currently relocated across the loop seam.
    fn diff_to_snap(&self, snap: f64, slide: usize, progress: f64, registry: &SlideRegistry) -> f64 {
        let target = registry.loop_target(slide, progress);
        if target < 0.0 {
            snap - (1.0 + progress)
        } else if target > 0.0 {
            snap + (1.0 - progress)
        } else {
            snap - progress
        }
    }

    /// Style of a single slide for a snapshot.
    pub fn slide_style(
        &self,
        snapshot: &ScrollSnapshot,
        slide: usize,
        registry: &SlideRegistry,
    ) -> TweenStyle {
        let Some((_, snap)) = registry.snap_of_slide(slide) else {
            return TweenStyle::RESTING;
        };
        self.style_at(self.diff_to_snap(snap, slide, snapshot.progress, registry))
    }

    /// Recompute styles for every slide of a snapshot in place. On live
    /// scroll events, slides not reported in view keep their previous
    /// style.
    pub fn apply(
        &self,
        snapshot: &ScrollSnapshot,
        registry: &SlideRegistry,
        trigger: TweenTrigger,
        styles: &mut [TweenStyle],
    ) {
        for (snap_index, snap) in registry.snap_points().iter().enumerate() {
            for &slide in &registry.groups()[snap_index] {
                if trigger == TweenTrigger::Scroll && !snapshot.slides_in_view.contains(&slide) {
                    continue;
                }
                if let Some(style) = styles.get_mut(slide) {
                    *style =
                        self.style_at(self.diff_to_snap(*snap, slide, snapshot.progress, registry));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::options::{Align, ResolvedOptions};
    use crate::carousel::registry::Layout;

    fn looping_registry(n: usize) -> SlideRegistry {
        let layout = Layout {
            container_width: 480.0,
            track_width: n as f64 * 480.0,
            slide_edges: (0..n).map(|i| i as f64 * 480.0).collect(),
            slide_widths: vec![480.0; n],
        };
        SlideRegistry::new(
            &layout,
            &ResolvedOptions {
                looping: true,
                align: Align::Center,
                slides_to_scroll: 1,
            },
        )
    }

    fn snapshot(registry: &SlideRegistry, progress: f64) -> ScrollSnapshot {
        ScrollSnapshot {
            progress,
            snap_points: registry.snap_points().to_vec(),
            slides_in_view: (0..registry.slide_count()).collect(),
        }
    }

    #[test]
    fn factor_scales_with_snap_count() {
        let registry = looping_registry(5);
        let engine = TweenEngine::new(&registry);
        assert!((engine.factor() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn five_snaps_at_snap_two() {
        let registry = looping_registry(5);
        let engine = TweenEngine::new(&registry);
        let snap = snapshot(&registry, 0.4);

        let center = engine.slide_style(&snap, 2, &registry);
        assert!((center.opacity - 1.0).abs() < 1e-9);
        assert!((center.scale - 1.0).abs() < 1e-9);

        // Neighbors sit one snap away (0.2), raw value 1 - 0.2 * 3 = 0.4.
        for neighbor in [1usize, 3] {
            let style = engine.slide_style(&snap, neighbor, &registry);
            assert!((style.opacity - 0.4).abs() < 1e-9);
            assert!((style.scale - 0.9).abs() < 1e-9);
        }
    }

    #[test]
    fn exactly_one_slide_peaks_at_every_snap_point() {
        let registry = looping_registry(5);
        let engine = TweenEngine::new(&registry);
        for (i, progress) in registry.snap_points().to_vec().into_iter().enumerate() {
            let snap = snapshot(&registry, progress);
            let mut styles = vec![TweenStyle::RESTING; 5];
            engine.apply(&snap, &registry, TweenTrigger::Reinit, &mut styles);
            let full: Vec<usize> = styles
                .iter()
                .enumerate()
                .filter(|(_, s)| (s.opacity - 1.0).abs() < 1e-9)
                .map(|(idx, _)| idx)
                .collect();
            assert_eq!(full, vec![i]);
            // Monotonic falloff: the immediate neighbors dominate the
            // second-nearest slides.
            let next = styles[(i + 1) % 5].opacity;
            let far = styles[(i + 2) % 5].opacity;
            assert!(next >= far);
            assert!(next < 1.0);
        }
    }

    #[test]
    fn output_ranges_hold_for_extreme_inputs() {
        let registry = looping_registry(5);
        let engine = TweenEngine::new(&registry);
        for progress in [-3.0, -0.5, 0.0, 0.37, 1.0, 2.5, 40.0] {
            let snap = snapshot(&registry, progress);
            for slide in 0..5 {
                let style = engine.slide_style(&snap, slide, &registry);
                assert!((0.3..=1.0).contains(&style.opacity), "opacity {}", style.opacity);
                assert!((0.9..=1.0).contains(&style.scale), "scale {}", style.scale);
            }
        }
    }

    #[test]
    fn seam_is_continuous_for_relocated_slide() {
        let registry = looping_registry(3);
        let engine = TweenEngine::new(&registry);
        // Just before the wrap seam slide 0 has been relocated past the
        // end; its tween must match the same logical position reached
        // from the other side of the seam.
        let before = engine.slide_style(&snapshot(&registry, 0.99), 0, &registry);
        let after = engine.slide_style(&snapshot(&registry, -0.01), 0, &registry);
        assert!((before.opacity - after.opacity).abs() < 1e-9);
        assert!((before.scale - after.scale).abs() < 1e-9);
        // And the value is the near-peak one, not the far-distance pop.
        assert!(before.opacity > 0.9);
    }

    #[test]
    fn live_scroll_skips_slides_out_of_view() {
        let registry = looping_registry(5);
        let engine = TweenEngine::new(&registry);
        let snap = ScrollSnapshot {
            progress: 0.4,
            snap_points: registry.snap_points().to_vec(),
            slides_in_view: vec![2],
            };
        let mut styles = vec![TweenStyle::RESTING; 5];
        engine.apply(&snap, &registry, TweenTrigger::Scroll, &mut styles);
        assert_eq!(styles[0], TweenStyle::RESTING);
        assert_eq!(styles[1], TweenStyle::RESTING);
        assert!((styles[2].opacity - 1.0).abs() < 1e-9);

        // A reinit recomputes unconditionally.
        engine.apply(&snap, &registry, TweenTrigger::Reinit, &mut styles);
        assert!((styles[1].opacity - 0.4).abs() < 1e-9);
    }
}
