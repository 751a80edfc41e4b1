//! Section chrome: titles and bento cards.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    pub children: Children,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class="section-title">
            if let Some(subtitle) = &props.subtitle {
                <span class="section-subtitle">{ subtitle.clone() }</span>
            }
            <h2>{ for props.children.iter() }</h2>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BentoCardProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(BentoCard)]
pub fn bento_card(props: &BentoCardProps) -> Html {
    html! {
        <div class={classes!("bento-card", props.class.clone())}>
            <div class="bento-glow"></div>
            <div class="bento-body">{ for props.children.iter() }</div>
        </div>
    }
}
