//! Call-to-action buttons shared across sections.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LinkButtonProps {
    pub text: AttrValue,
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(PrimaryButton)]
pub fn primary_button(props: &LinkButtonProps) -> Html {
    html! {
        <a href={props.href.clone()} class={classes!("btn", "btn-primary", props.class.clone())}>
            { props.text.clone() }
            <span class="btn-arrow">{ "\u{2192}" }</span>
        </a>
    }
}

#[function_component(SecondaryButton)]
pub fn secondary_button(props: &LinkButtonProps) -> Html {
    html! {
        <a href={props.href.clone()} class={classes!("btn", "btn-secondary", props.class.clone())}>
            { props.text.clone() }
            <span class="btn-arrow">{ "\u{2192}" }</span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct ActionButtonProps {
    pub text: AttrValue,
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ActionButton)]
pub fn action_button(props: &ActionButtonProps) -> Html {
    html! {
        <button
            type="button"
            class={classes!("btn", "btn-primary", props.class.clone())}
            onclick={props.onclick.clone()}
        >
            { props.text.clone() }
            <span class="btn-arrow">{ "\u{2192}" }</span>
        </button>
    }
}
