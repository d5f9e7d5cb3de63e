use yew::prelude::*;
use log::info;

mod config;
mod content;
mod error;
mod observer;
mod storage;
mod components {
    pub mod faq;
    pub mod lazy_image;
    pub mod nav;
    pub mod product_filter;
    pub mod promo_banner;
    pub mod reveal;
    pub mod smooth_scroll;
    pub mod stats_counter;
    pub mod subscribe_popup;
    pub mod theme_toggle;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <Home />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting storefront");
    yew::Renderer::<App>::new().render();
}
