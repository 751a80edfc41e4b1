//! Testimonials carousel: looping, start-aligned cards with arrow and
//! dot navigation. No tween here, selection state only.

use yew::prelude::*;

use crate::carousel::{use_carousel, Align, BreakpointOverride, CarouselOptions};
use crate::components::scroll_reveal::ScrollReveal;
use crate::content::Testimonial;

#[derive(Properties, PartialEq)]
pub struct TestimonialCarouselProps {
    pub testimonials: Vec<Testimonial>,
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel(props: &TestimonialCarouselProps) -> Html {
    let options = CarouselOptions::default()
        .looping(true)
        .align(Align::Start)
        .breakpoint(
            "(min-width: 1024px)",
            BreakpointOverride {
                slides_to_scroll: Some(1),
                align: None,
            },
        );
    let carousel = use_carousel(props.testimonials.len(), options, Callback::noop());

    let prev = {
        let scroll_prev = carousel.scroll_prev.clone();
        Callback::from(move |_: MouseEvent| scroll_prev.emit(()))
    };
    let next = {
        let scroll_next = carousel.scroll_next.clone();
        Callback::from(move |_: MouseEvent| scroll_next.emit(()))
    };

    html! {
        <>
            <div class="carousel-viewport testimonial-viewport" ref={carousel.viewport.clone()}>
                <div class="carousel-track">
                    {
                        for props.testimonials.iter().enumerate().map(|(i, testimonial)| html! {
                            <div class="carousel-slide testimonial-slide" key={i}>
                                <div class="testimonial-card">
                                    <div class="testimonial-quote-mark">{ "\u{201C}" }</div>
                                    <p class="testimonial-text">{ testimonial.text }</p>
                                    <div class="testimonial-footer">
                                        <div class="testimonial-avatar">{ initials(testimonial.name) }</div>
                                        <div>
                                            <p class="testimonial-name">{ testimonial.name }</p>
                                            <p class="testimonial-role">{ testimonial.role }</p>
                                            <p class="testimonial-company">{ testimonial.company }</p>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        })
                    }
                </div>
            </div>

            <ScrollReveal>
                <div class="testimonial-nav">
                    <button
                        class="carousel-nav-button"
                        aria-label="Previous testimonial"
                        disabled={!carousel.can_prev}
                        onclick={prev}
                    >
                        { "\u{2039}" }
                    </button>
                    <div class="carousel-dots">
                        {
                            for (0..props.testimonials.len()).map(|i| {
                                let scroll_to = carousel.scroll_to.clone();
                                let class = if i == carousel.selected { "dot dot-active dot-wide" } else { "dot" };
                                html! {
                                    <button
                                        class={class}
                                        aria-label={format!("Go to testimonial {}", i + 1)}
                                        onclick={Callback::from(move |_: MouseEvent| scroll_to.emit(i))}
                                    />
                                }
                            })
                        }
                    </div>
                    <button
                        class="carousel-nav-button"
                        aria-label="Next testimonial"
                        disabled={!carousel.can_next}
                        onclick={next}
                    >
                        { "\u{203A}" }
                    </button>
                </div>
            </ScrollReveal>

            <p class="carousel-mobile-hint">{ "Swipe to see more" }</p>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::initials;

    #[test]
    fn initials_take_the_first_letter_of_each_word() {
        assert_eq!(initials("Alexander Petrov"), "AP");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials(""), "");
    }
}
