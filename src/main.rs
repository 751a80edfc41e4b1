mod carousel;
mod components;
mod config;
mod content;
mod pages;
mod utils;

use yew::prelude::*;

use pages::home::Home;

#[function_component(App)]
fn app() -> Html {
    html! { <Home /> }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("firebird site starting");
    yew::Renderer::<App>::new().render();
}
