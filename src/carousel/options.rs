//! Carousel construction options.
//!
//! Options only shape layout and snap behavior (alignment, slides per
//! group, per-media-query overrides). They never change how the tween is
//! computed.

/// Where a slide group rests inside the viewport once settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Start,
    Center,
}

/// Per-media-query override of the base options.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BreakpointOverride {
    pub slides_to_scroll: Option<usize>,
    pub align: Option<Align>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselOptions {
    /// Infinite looping: navigation wraps and the tween applies seam
    /// correction for relocated slides.
    pub looping: bool,
    pub align: Align,
    pub slides_to_scroll: usize,
    /// `(media query, override)` pairs, later entries win.
    pub breakpoints: Vec<(String, BreakpointOverride)>,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            looping: false,
            align: Align::Center,
            slides_to_scroll: 1,
            breakpoints: Vec::new(),
        }
    }
}

/// Options after breakpoint resolution, guaranteed well-formed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedOptions {
    pub looping: bool,
    pub align: Align,
    pub slides_to_scroll: usize,
}

impl CarouselOptions {
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn slides_to_scroll(mut self, n: usize) -> Self {
        self.slides_to_scroll = n;
        self
    }

    pub fn breakpoint(mut self, query: &str, over: BreakpointOverride) -> Self {
        self.breakpoints.push((query.to_string(), over));
        self
    }

    /// Resolve against the current viewport. `matches` evaluates a media
    /// query, returning `None` when the query cannot be parsed.
    ///
    /// A malformed configuration (unparsable query, zero slides per
    /// group) falls back to the default single-slide-per-view layout
    /// instead of failing construction.
    pub fn resolve<F>(&self, matches: F) -> ResolvedOptions
    where
        F: Fn(&str) -> Option<bool>,
    {
        let mut slides_to_scroll = self.slides_to_scroll;
        let mut align = self.align;
        let mut malformed = self.slides_to_scroll == 0;

        for (query, over) in &self.breakpoints {
            match matches(query) {
                Some(true) => {
                    if let Some(n) = over.slides_to_scroll {
                        if n == 0 {
                            malformed = true;
                        } else {
                            slides_to_scroll = n;
                        }
                    }
                    if let Some(a) = over.align {
                        align = a;
                    }
                }
                Some(false) => {}
                None => malformed = true,
            }
        }

        if malformed {
            log::warn!("malformed carousel breakpoint config, using single-slide layout");
            return ResolvedOptions {
                looping: self.looping,
                align: self.align,
                slides_to_scroll: 1,
            };
        }

        ResolvedOptions {
            looping: self.looping,
            align,
            slides_to_scroll,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_single_slide_center() {
        let resolved = CarouselOptions::default().resolve(|_| Some(false));
        assert_eq!(resolved.slides_to_scroll, 1);
        assert_eq!(resolved.align, Align::Center);
        assert!(!resolved.looping);
    }

    #[test]
    fn matching_breakpoint_overrides_base() {
        let options = CarouselOptions::default()
            .align(Align::Start)
            .breakpoint(
                "(min-width: 768px)",
                BreakpointOverride {
                    slides_to_scroll: Some(2),
                    align: None,
                },
            );
        let resolved = options.resolve(|q| Some(q.contains("768")));
        assert_eq!(resolved.slides_to_scroll, 2);
        assert_eq!(resolved.align, Align::Start);
    }

    #[test]
    fn non_matching_breakpoint_is_ignored() {
        let options = CarouselOptions::default().breakpoint(
            "(min-width: 1024px)",
            BreakpointOverride {
                slides_to_scroll: Some(3),
                align: None,
            },
        );
        let resolved = options.resolve(|_| Some(false));
        assert_eq!(resolved.slides_to_scroll, 1);
    }

    #[test]
    fn later_matching_breakpoint_wins() {
        let options = CarouselOptions::default()
            .breakpoint(
                "(min-width: 768px)",
                BreakpointOverride {
                    slides_to_scroll: Some(2),
                    align: None,
                },
            )
            .breakpoint(
                "(min-width: 1024px)",
                BreakpointOverride {
                    slides_to_scroll: Some(4),
                    align: Some(Align::Start),
                },
            );
        let resolved = options.resolve(|_| Some(true));
        assert_eq!(resolved.slides_to_scroll, 4);
        assert_eq!(resolved.align, Align::Start);
    }

    #[test]
    fn unparsable_query_falls_back_to_single_slide() {
        let options = CarouselOptions::default()
            .slides_to_scroll(3)
            .breakpoint("not a media query", BreakpointOverride::default());
        let resolved = options.resolve(|_| None);
        assert_eq!(resolved.slides_to_scroll, 1);
    }

    #[test]
    fn zero_slides_to_scroll_falls_back_to_single_slide() {
        let options = CarouselOptions::default().slides_to_scroll(0).looping(true);
        let resolved = options.resolve(|_| Some(false));
        assert_eq!(resolved.slides_to_scroll, 1);
        assert!(resolved.looping);
    }
}
