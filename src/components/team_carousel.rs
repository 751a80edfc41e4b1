//! Team section: a grid on desktop, a non-looping carousel on mobile.
//! Both render the same cards and open the bio modal on click.

use yew::prelude::*;

use crate::carousel::{use_carousel, Align, BreakpointOverride, CarouselOptions};
use crate::content::TeamMember;

#[derive(Properties, PartialEq)]
pub struct TeamCarouselProps {
    pub members: Vec<TeamMember>,
    pub on_member_click: Callback<TeamMember>,
}

fn member_card(member: &TeamMember, on_click: &Callback<TeamMember>) -> Html {
    let onclick = {
        let on_click = on_click.clone();
        let member = *member;
        Callback::from(move |_: MouseEvent| on_click.emit(member))
    };
    html! {
        <div class="team-card" onclick={onclick}>
            <img src={member.photo} alt={member.name} loading="lazy" />
            <div class="team-card-overlay">
                <h4>{ member.name }</h4>
                <p class="team-card-role">{ member.role }</p>
                <span class="team-card-hint">{ "Click to learn more" }</span>
            </div>
        </div>
    }
}

#[function_component(TeamCarousel)]
pub fn team_carousel(props: &TeamCarouselProps) -> Html {
    let options = CarouselOptions::default()
        .looping(false)
        .align(Align::Start)
        .breakpoint(
            "(min-width: 768px)",
            BreakpointOverride {
                slides_to_scroll: Some(2),
                align: None,
            },
        );
    let carousel = use_carousel(props.members.len(), options, Callback::noop());

    html! {
        <>
            // Desktop: plain grid, no carousel behavior.
            <div class="team-grid">
                { for props.members.iter().map(|m| member_card(m, &props.on_member_click)) }
            </div>

            // Mobile: swipeable strip.
            <div class="carousel-viewport team-viewport" ref={carousel.viewport.clone()}>
                <div class="carousel-track">
                    {
                        for props.members.iter().enumerate().map(|(i, member)| html! {
                            <div class="carousel-slide team-slide" key={i}>
                                { member_card(member, &props.on_member_click) }
                            </div>
                        })
                    }
                </div>
            </div>
            <p class="carousel-mobile-hint">{ "Swipe to meet the whole crew" }</p>
        </>
    }
}
