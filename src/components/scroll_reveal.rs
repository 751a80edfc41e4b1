//! One-shot reveal-on-scroll wrapper.
//!
//! Purely viewport-intersection driven: the element fades in the first
//! time it enters the viewport and the observer disconnects. No
//! continuous computation happens here.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealVariant {
    FadeUp,
    FadeLeft,
    FadeRight,
    ScaleIn,
}

impl RevealVariant {
    fn hidden_transform(self) -> &'static str {
        match self {
            RevealVariant::FadeUp => "translateY(20px)",
            RevealVariant::FadeLeft => "translateX(-20px)",
            RevealVariant::FadeRight => "translateX(20px)",
            RevealVariant::ScaleIn => "scale(0.95)",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(RevealVariant::FadeUp)]
    pub variant: RevealVariant,
    /// Transition delay in seconds, for stagger effects.
    #[prop_or(0.0)]
    pub delay: f64,
}

#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(element) = node.cast::<Element>() {
                    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new({
                        let visible = visible.clone();
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                                    if entry.is_intersecting() {
                                        visible.set(true);
                                        observer.disconnect();
                                    }
                                }
                            }
                        }
                    });
                    let mut options = IntersectionObserverInit::new();
                    options.root_margin("-60px");
                    options.threshold(&JsValue::from_f64(0.15));
                    match IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(observer) => {
                            observer.observe(&element);
                            Box::new(move || {
                                observer.disconnect();
                                drop(callback);
                            })
                        }
                        Err(_) => {
                            // No observer support: show the content
                            // rather than hiding it forever.
                            visible.set(true);
                            Box::new(|| ())
                        }
                    }
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let style = if *visible {
        format!(
            "opacity: 1; transform: none; transition: opacity 0.4s ease-out {delay}s, transform 0.4s ease-out {delay}s;",
            delay = props.delay
        )
    } else {
        format!(
            "opacity: 0; transform: {};",
            props.variant.hidden_transform()
        )
    };

    html! {
        <div ref={node} class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}
