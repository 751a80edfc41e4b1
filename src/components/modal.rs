//! Modal dialog shell: backdrop, close button, scrollable body.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let close_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={close_backdrop}>
            <div class={classes!("modal-panel", props.class.clone())} onclick={swallow}>
                <button class="modal-close" aria-label="Close" onclick={close_button}>
                    { "\u{2715}" }
                </button>
                { for props.children.iter() }
            </div>
        </div>
    }
}
