//! Slide registry: the ordered slide set of one carousel instance and the
//! snap/loop tables derived from a layout measurement.
//!
//! The registry is rebuilt wholesale on every reinit (viewport resize or
//! slide-set change); nothing in here touches the DOM.

use super::options::{Align, ResolvedOptions};

/// Geometry captured from the mounted carousel container.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    pub container_width: f64,
    pub track_width: f64,
    /// Left offset of each slide within the track.
    pub slide_edges: Vec<f64>,
    pub slide_widths: Vec<f64>,
}

/// Wrap target for a slide that gets visually relocated to the opposite
/// end of the scroll track on a looping carousel. `shift` is the offset
/// in container-widths the slide receives while relocated: `+1.0` for a
/// slide that wraps past the end, `-1.0` for one that wraps before the
/// start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopPoint {
    pub index: usize,
    pub shift: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlideRegistry {
    snap_points: Vec<f64>,
    snap_pixels: Vec<f64>,
    groups: Vec<Vec<usize>>,
    loop_points: Vec<LoopPoint>,
    slide_count: usize,
    looping: bool,
}

impl SlideRegistry {
    pub fn new(layout: &Layout, options: &ResolvedOptions) -> Self {
        let n = layout.slide_edges.len();
        if n == 0 || layout.container_width <= 0.0 || layout.track_width <= 0.0 {
            return Self::default();
        }

        let groups: Vec<Vec<usize>> = (0..n)
            .collect::<Vec<_>>()
            .chunks(options.slides_to_scroll.max(1))
            .map(|chunk| chunk.to_vec())
            .collect();

        // Pixel position the viewport rests at for each group.
        let aligned: Vec<f64> = groups
            .iter()
            .map(|group| {
                let first = group[0];
                let edge = layout.slide_edges[first];
                match options.align {
                    Align::Start => edge,
                    Align::Center => {
                        edge - (layout.container_width - layout.slide_widths[first]) / 2.0
                    }
                }
            })
            .collect();

        let scrollable = (layout.track_width - layout.container_width).max(0.0);
        let (snap_points, snap_pixels) = if scrollable == 0.0 {
            (vec![0.0], vec![0.0])
        } else {
            let denom = if options.looping {
                layout.track_width
            } else {
                scrollable
            };
            let pixels: Vec<f64> = aligned
                .iter()
                .map(|pos| pos.clamp(0.0, scrollable))
                .collect();
            let points = pixels.iter().map(|px| px / denom).collect();
            (points, pixels)
        };

        let groups = if scrollable == 0.0 {
            vec![(0..n).collect()]
        } else {
            groups
        };

        let loop_points = if options.looping {
            groups
                .iter()
                .zip(snap_points.iter())
                .flat_map(|(group, snap)| {
                    let shift = if *snap < 0.5 { 1.0 } else { -1.0 };
                    group.iter().map(move |&index| LoopPoint { index, shift })
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            snap_points,
            snap_pixels,
            groups,
            loop_points,
            slide_count: n,
            looping: options.looping,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.snap_points.is_empty()
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn looping(&self) -> bool {
        self.looping
    }

    pub fn snap_points(&self) -> &[f64] {
        &self.snap_points
    }

    pub fn groups(&self) -> &[Vec<usize>] {
        &self.groups
    }

    /// Pixel scroll offset the viewport should animate to for a snap.
    pub fn snap_pixel(&self, snap_index: usize) -> f64 {
        self.snap_pixels.get(snap_index).copied().unwrap_or(0.0)
    }

    /// Snap point a slide belongs to.
    pub fn snap_of_slide(&self, slide: usize) -> Option<(usize, f64)> {
        self.groups
            .iter()
            .position(|group| group.contains(&slide))
            .map(|i| (i, self.snap_points[i]))
    }

    /// Wrap target currently in effect for a slide, `0.0` when the slide
    /// sits at its home position. A slide counts as relocated exactly
    /// while the wrapped distance to its snap is shorter than the direct
    /// one, which is the condition under which the looper moves it.
    pub fn loop_target(&self, slide: usize, progress: f64) -> f64 {
        if !self.looping {
            return 0.0;
        }
        let Some(point) = self.loop_points.iter().find(|p| p.index == slide) else {
            return 0.0;
        };
        let Some((_, snap)) = self.snap_of_slide(slide) else {
            return 0.0;
        };
        let direct = snap - progress;
        let wrapped = if point.shift < 0.0 {
            snap - (1.0 + progress)
        } else {
            snap + (1.0 - progress)
        };
        if wrapped.abs() < direct.abs() {
            point.shift
        } else {
            0.0
        }
    }

    /// Snap index closest to a progress value, wrap-aware when looping.
    pub fn nearest_snap(&self, progress: f64) -> usize {
        let mut best = 0;
        let mut best_dist = f64::MAX;
        for (i, snap) in self.snap_points.iter().enumerate() {
            let direct = (snap - progress).abs();
            let dist = if self.looping {
                direct.min(1.0 - direct)
            } else {
                direct
            };
            if dist < best_dist {
                best_dist = dist;
                best = i;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::options::{Align, ResolvedOptions};

    fn equal_layout(n: usize, width: f64, container: f64) -> Layout {
        Layout {
            container_width: container,
            track_width: n as f64 * width,
            slide_edges: (0..n).map(|i| i as f64 * width).collect(),
            slide_widths: vec![width; n],
        }
    }

    fn resolved(looping: bool, align: Align, slides_to_scroll: usize) -> ResolvedOptions {
        ResolvedOptions {
            looping,
            align,
            slides_to_scroll,
        }
    }

    #[test]
    fn looping_equal_slides_snap_evenly() {
        let registry = SlideRegistry::new(
            &equal_layout(5, 480.0, 480.0),
            &resolved(true, Align::Center, 1),
        );
        let snaps = registry.snap_points();
        assert_eq!(snaps.len(), 5);
        for (i, snap) in snaps.iter().enumerate() {
            assert!((snap - i as f64 / 5.0).abs() < 1e-9);
        }
    }

    #[test]
    fn non_looping_snaps_span_zero_to_one() {
        let registry = SlideRegistry::new(
            &equal_layout(4, 300.0, 300.0),
            &resolved(false, Align::Start, 1),
        );
        let snaps = registry.snap_points();
        assert_eq!(snaps.first().copied(), Some(0.0));
        assert_eq!(snaps.last().copied(), Some(1.0));
        assert!((snaps[1] - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn slides_to_scroll_groups_slides() {
        let registry = SlideRegistry::new(
            &equal_layout(4, 300.0, 300.0),
            &resolved(false, Align::Start, 2),
        );
        assert_eq!(registry.groups(), &[vec![0, 1], vec![2, 3]]);
        assert_eq!(registry.snap_points().len(), 2);
    }

    #[test]
    fn content_narrower_than_container_collapses_to_one_snap() {
        let registry = SlideRegistry::new(
            &equal_layout(2, 100.0, 400.0),
            &resolved(false, Align::Start, 1),
        );
        assert_eq!(registry.snap_points(), &[0.0]);
        assert_eq!(registry.groups(), &[vec![0, 1]]);
    }

    #[test]
    fn empty_layout_gives_empty_registry() {
        let registry = SlideRegistry::new(&Layout::default(), &resolved(true, Align::Center, 1));
        assert!(registry.is_empty());
        assert_eq!(registry.slide_count(), 0);
    }

    #[test]
    fn loop_target_applies_only_near_the_seam() {
        let registry = SlideRegistry::new(
            &equal_layout(3, 480.0, 480.0),
            &resolved(true, Align::Center, 1),
        );
        // Slide 0 sits at its home position mid-track.
        assert_eq!(registry.loop_target(0, 0.2), 0.0);
        // Near the wrap seam it is relocated past the end.
        assert_eq!(registry.loop_target(0, 0.99), 1.0);
        // The last slide wraps before the start when progress is small
        // enough that the wrapped distance wins.
        assert_eq!(registry.loop_target(2, 0.5), 0.0);
        assert!(registry.loop_target(2, -0.2) < 0.0);
    }

    #[test]
    fn non_looping_registry_has_no_loop_targets() {
        let registry = SlideRegistry::new(
            &equal_layout(3, 480.0, 480.0),
            &resolved(false, Align::Center, 1),
        );
        assert_eq!(registry.loop_target(0, 0.99), 0.0);
    }

    #[test]
    fn nearest_snap_wraps_on_looping_carousels() {
        let registry = SlideRegistry::new(
            &equal_layout(4, 480.0, 480.0),
            &resolved(true, Align::Center, 1),
        );
        assert_eq!(registry.nearest_snap(0.02), 0);
        assert_eq!(registry.nearest_snap(0.97), 0);
        assert_eq!(registry.nearest_snap(0.52), 2);
    }
}
