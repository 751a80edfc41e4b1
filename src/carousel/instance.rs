//! Carousel composition root: one reusable hook wiring the registry,
//! tracker, tween engine and selection controller into a single unit.
//!
//! All engine state lives behind this hook instance, created on mount
//! and dropped on unmount. There is exactly one tween mutator per
//! carousel, and distinct carousels own disjoint DOM subtrees, so no
//! coordination between instances is needed.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use super::options::{CarouselOptions, ResolvedOptions};
use super::registry::{Layout, SlideRegistry};
use super::selection::SelectionController;
use super::tracker::{self, FrameGate};
use super::tween::{TweenEngine, TweenStyle, TweenTrigger};

/// Quiescence window after the last scroll tick before the position
/// counts as settled and a select may fire.
const SETTLE_DEBOUNCE_MS: u32 = 120;

struct Core {
    options: CarouselOptions,
    layout: Layout,
    registry: SlideRegistry,
    engine: TweenEngine,
    controller: SelectionController,
    styles: Vec<TweenStyle>,
    last_progress: f64,
    pending_trigger: TweenTrigger,
    needs_remeasure: bool,
    settle_timer: Option<Timeout>,
}

impl Core {
    fn new(options: CarouselOptions, slide_count: usize) -> Self {
        Self {
            options,
            layout: Layout::default(),
            registry: SlideRegistry::default(),
            engine: TweenEngine::new(&SlideRegistry::default()),
            controller: SelectionController::new(0, false),
            styles: vec![TweenStyle::RESTING; slide_count],
            last_progress: 0.0,
            pending_trigger: TweenTrigger::Reinit,
            needs_remeasure: true,
            settle_timer: None,
        }
    }
}

fn media_matches(query: &str) -> Option<bool> {
    let window = web_sys::window()?;
    match window.match_media(query) {
        Ok(Some(list)) => Some(list.matches()),
        _ => None,
    }
}

fn resolve_against_viewport(options: &CarouselOptions) -> ResolvedOptions {
    options.resolve(media_matches)
}

/// Everything a carousel view needs: the viewport ref to attach, the
/// per-slide tween styles to bind, the selection state, and the
/// imperative navigation surface.
#[derive(Clone, PartialEq)]
pub struct CarouselHandle {
    pub viewport: NodeRef,
    pub styles: Vec<TweenStyle>,
    pub selected: usize,
    pub can_prev: bool,
    pub can_next: bool,
    pub scroll_prev: Callback<()>,
    pub scroll_next: Callback<()>,
    pub scroll_to: Callback<usize>,
}

fn process_frame(
    element: &HtmlElement,
    core: &Rc<RefCell<Option<Core>>>,
    styles_state: &UseStateHandle<Vec<TweenStyle>>,
    selected_state: &UseStateHandle<usize>,
    nav_state: &UseStateHandle<(bool, bool)>,
    on_select: &Callback<usize>,
) {
    let published = {
        let mut core_ref = core.borrow_mut();
        let Some(c) = core_ref.as_mut() else {
            return;
        };

        if c.needs_remeasure {
            match tracker::measure_layout(element) {
                Some(layout) => {
                    let resolved = resolve_against_viewport(&c.options);
                    c.registry = SlideRegistry::new(&layout, &resolved);
                    c.engine = TweenEngine::new(&c.registry);
                    c.controller
                        .reinit(c.registry.snap_points().len(), resolved.looping);
                    c.styles = vec![TweenStyle::RESTING; c.registry.slide_count()];
                    c.layout = layout;
                    c.pending_trigger = TweenTrigger::Reinit;
                    c.needs_remeasure = false;
                }
                None => return,
            }
        }
        if c.registry.is_empty() {
            return;
        }

        let snapshot = tracker::take_snapshot(
            element,
            &c.layout,
            c.registry.snap_points(),
            c.registry.looping(),
        );
        let trigger = std::mem::replace(&mut c.pending_trigger, TweenTrigger::Scroll);
        c.engine.apply(&snapshot, &c.registry, trigger, &mut c.styles);
        c.last_progress = snapshot.progress;

        // Restart the settle debounce: when scroll ticks stop arriving
        // the position has snapped and selection may change.
        let settle = {
            let core = Rc::clone(core);
            let selected_state = selected_state.clone();
            let nav_state = nav_state.clone();
            let on_select = on_select.clone();
            move || {
                let outcome = {
                    let mut core_ref = core.borrow_mut();
                    core_ref.as_mut().map(|c| {
                        let nearest = c.registry.nearest_snap(c.last_progress);
                        (
                            c.controller.settle(nearest),
                            c.controller.can_scroll_prev(),
                            c.controller.can_scroll_next(),
                        )
                    })
                };
                if let Some((changed, can_prev, can_next)) = outcome {
                    nav_state.set((can_prev, can_next));
                    if let Some(index) = changed {
                        selected_state.set(index);
                        on_select.emit(index);
                    }
                }
            }
        };
        c.settle_timer = Some(Timeout::new(SETTLE_DEBOUNCE_MS, settle));

        c.styles.clone()
    };
    styles_state.set(published);
}

/// Build one carousel instance over `slide_count` slides. The returned
/// handle is recreated on reinit (slide count or options change); the
/// underlying listeners are removed and pending frames cancelled on
/// unmount.
#[hook]
pub fn use_carousel(
    slide_count: usize,
    options: CarouselOptions,
    on_select: Callback<usize>,
) -> CarouselHandle {
    let viewport = use_node_ref();
    let styles_state = use_state(|| vec![TweenStyle::RESTING; slide_count]);
    let selected_state = use_state(|| 0usize);
    let nav_state = use_state(|| (false, slide_count > 1 || options.looping));
    let core: Rc<RefCell<Option<Core>>> = use_mut_ref(|| None);
    let gate_slot: Rc<RefCell<Option<FrameGate>>> = use_mut_ref(|| None);

    {
        let viewport = viewport.clone();
        let styles_state = styles_state.clone();
        let selected_state = selected_state.clone();
        let nav_state = nav_state.clone();
        let core = core.clone();
        let gate_slot = gate_slot.clone();
        let on_select = on_select.clone();
        use_effect_with_deps(
            move |(slide_count, options): &(usize, CarouselOptions)| {
                let slide_count = *slide_count;
                let destructor: Box<dyn FnOnce()> =
                    if let Some(element) = viewport.cast::<HtmlElement>() {
                        *core.borrow_mut() = Some(Core::new(options.clone(), slide_count));

                        process_frame(
                            &element,
                            &core,
                            &styles_state,
                            &selected_state,
                            &nav_state,
                            &on_select,
                        );
                        {
                            let core_ref = core.borrow();
                            if let Some(c) = core_ref.as_ref() {
                                nav_state.set((
                                    c.controller.can_scroll_prev(),
                                    c.controller.can_scroll_next(),
                                ));
                            }
                        }
                        // Initial selection: lets listeners (video
                        // lifecycle, indicator dots) start in a known
                        // state.
                        on_select.emit(0);

                        let gate = FrameGate::new({
                            let element = element.clone();
                            let core = core.clone();
                            let styles_state = styles_state.clone();
                            let selected_state = selected_state.clone();
                            let nav_state = nav_state.clone();
                            let on_select = on_select.clone();
                            move || {
                                process_frame(
                                    &element,
                                    &core,
                                    &styles_state,
                                    &selected_state,
                                    &nav_state,
                                    &on_select,
                                );
                            }
                        });
                        *gate_slot.borrow_mut() = Some(gate.clone());

                        let scroll_closure = Closure::<dyn FnMut()>::new({
                            let core = core.clone();
                            let gate = gate.clone();
                            move || {
                                if let Some(c) = core.borrow_mut().as_mut() {
                                    c.controller.begin_scroll();
                                }
                                gate.request();
                            }
                        });
                        let _ = element.add_event_listener_with_callback(
                            "scroll",
                            scroll_closure.as_ref().unchecked_ref(),
                        );

                        let resize_closure = Closure::<dyn FnMut()>::new({
                            let core = core.clone();
                            let gate = gate.clone();
                            move || {
                                if let Some(c) = core.borrow_mut().as_mut() {
                                    c.needs_remeasure = true;
                                }
                                gate.request();
                            }
                        });
                        if let Some(window) = web_sys::window() {
                            let _ = window.add_event_listener_with_callback(
                                "resize",
                                resize_closure.as_ref().unchecked_ref(),
                            );
                        }

                        Box::new(move || {
                            gate.cancel();
                            *gate_slot.borrow_mut() = None;
                            let _ = element.remove_event_listener_with_callback(
                                "scroll",
                                scroll_closure.as_ref().unchecked_ref(),
                            );
                            if let Some(window) = web_sys::window() {
                                let _ = window.remove_event_listener_with_callback(
                                    "resize",
                                    resize_closure.as_ref().unchecked_ref(),
                                );
                            }
                            // Dropping the core drops the settle timer,
                            // cancelling it.
                            *core.borrow_mut() = None;
                            drop(scroll_closure);
                            drop(resize_closure);
                        })
                    } else {
                        Box::new(|| ())
                    };
                move || destructor()
            },
            (slide_count, options),
        );
    }

    let scroll_to_snap: Callback<usize> = {
        let core = core.clone();
        let gate_slot = gate_slot.clone();
        let viewport = viewport.clone();
        Callback::from(move |snap: usize| {
            let Some(element) = viewport.cast::<HtmlElement>() else {
                return;
            };
            let pixel = {
                let mut core_ref = core.borrow_mut();
                core_ref.as_mut().map(|c| {
                    c.pending_trigger = TweenTrigger::Focus;
                    c.registry.snap_pixel(snap)
                })
            };
            if let Some(pixel) = pixel {
                let mut scroll = ScrollToOptions::new();
                scroll.left(pixel);
                scroll.behavior(ScrollBehavior::Smooth);
                element.scroll_to_with_scroll_to_options(&scroll);
                if let Some(gate) = gate_slot.borrow().as_ref() {
                    gate.request();
                }
            }
        })
    };

    let nav = |pick: fn(&mut SelectionController) -> Option<usize>| {
        let core = core.clone();
        let nav_state = nav_state.clone();
        let scroll_to_snap = scroll_to_snap.clone();
        Callback::from(move |_: ()| {
            let target = {
                let mut core_ref = core.borrow_mut();
                core_ref.as_mut().and_then(|c| {
                    let target = pick(&mut c.controller);
                    nav_state.set((
                        c.controller.can_scroll_prev(),
                        c.controller.can_scroll_next(),
                    ));
                    target
                })
            };
            if let Some(snap) = target {
                scroll_to_snap.emit(snap);
            }
        })
    };

    let scroll_prev = nav(SelectionController::scroll_prev);
    let scroll_next = nav(SelectionController::scroll_next);

    let scroll_to = {
        let core = core.clone();
        let nav_state = nav_state.clone();
        let scroll_to_snap = scroll_to_snap.clone();
        Callback::from(move |snap: usize| {
            let target = {
                let mut core_ref = core.borrow_mut();
                core_ref.as_mut().and_then(|c| {
                    let target = c.controller.scroll_to(snap);
                    nav_state.set((
                        c.controller.can_scroll_prev(),
                        c.controller.can_scroll_next(),
                    ));
                    target
                })
            };
            if let Some(snap) = target {
                scroll_to_snap.emit(snap);
            }
        })
    };

    CarouselHandle {
        viewport,
        styles: (*styles_state).clone(),
        selected: *selected_state,
        can_prev: nav_state.0,
        can_next: nav_state.1,
        scroll_prev,
        scroll_next,
        scroll_to,
    }
}
