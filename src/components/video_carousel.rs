//! Service showcase carousel: looping, center-aligned, with the
//! opacity/scale tween on slide content and forced video stops on every
//! selection change.

use yew::prelude::*;

use crate::carousel::{use_carousel, Align, CarouselOptions, TweenStyle, VideoLifecycle};
use crate::config;
use crate::content::VideoRef;

#[derive(Properties, PartialEq)]
pub struct VideoCarouselProps {
    pub videos: Vec<VideoRef>,
    pub service_title: AttrValue,
}

#[function_component(VideoCarousel)]
pub fn video_carousel(props: &VideoCarouselProps) -> Html {
    let lifecycle = use_memo(|count| VideoLifecycle::new(*count), props.videos.len());

    let on_select = {
        let lifecycle = lifecycle.clone();
        Callback::from(move |selected: usize| lifecycle.on_select(selected))
    };

    let carousel = use_carousel(
        props.videos.len(),
        CarouselOptions::default().looping(true).align(Align::Center),
        on_select,
    );

    let prev = {
        let scroll_prev = carousel.scroll_prev.clone();
        Callback::from(move |_: MouseEvent| scroll_prev.emit(()))
    };
    let next = {
        let scroll_next = carousel.scroll_next.clone();
        Callback::from(move |_: MouseEvent| scroll_next.emit(()))
    };

    html! {
        <div class="video-carousel">
            <button class="carousel-arrow carousel-arrow-left" aria-label="Previous video" onclick={prev}>
                { "\u{2039}" }
            </button>
            <button class="carousel-arrow carousel-arrow-right" aria-label="Next video" onclick={next}>
                { "\u{203A}" }
            </button>

            <div
                class="carousel-viewport"
                aria-label={format!("{} showreel", props.service_title)}
                ref={carousel.viewport.clone()}
            >
                <div class="carousel-track">
                    {
                        for props.videos.iter().enumerate().map(|(i, video)| {
                            let style = carousel
                                .styles
                                .get(i)
                                .copied()
                                .unwrap_or(TweenStyle::RESTING)
                                .css();
                            html! {
                                <div class="carousel-slide" key={i}>
                                    <div class="carousel-slide-content" style={style}>
                                        if !video.id.is_empty() {
                                            <iframe
                                                ref={lifecycle.handle(i).map(|h| h.node().clone()).unwrap_or_default()}
                                                src={config::embed_url(video.id)}
                                                frameborder="0"
                                                allow="autoplay; fullscreen"
                                                allowfullscreen={true}
                                                title={video.title}
                                            />
                                        } else {
                                            <div class="slide-placeholder">
                                                <div class="slide-placeholder-play">{ "\u{25B6}" }</div>
                                                <span>{ video.title }</span>
                                            </div>
                                        }
                                    </div>
                                </div>
                            }
                        })
                    }
                </div>
            </div>

            <div class="carousel-dots">
                {
                    for (0..props.videos.len()).map(|i| {
                        let scroll_to = carousel.scroll_to.clone();
                        let class = if i == carousel.selected { "dot dot-active" } else { "dot" };
                        html! {
                            <button
                                class={class}
                                aria-label={format!("Go to video {}", i + 1)}
                                onclick={Callback::from(move |_: MouseEvent| scroll_to.emit(i))}
                            />
                        }
                    })
                }
            </div>

            <div class="carousel-swipe-hint">{ "\u{2190} swipe \u{2192}" }</div>
        </div>
    }
}
