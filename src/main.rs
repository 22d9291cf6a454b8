use log::{info, Level};
use yew::prelude::*;

mod analytics;
mod config;
mod data;
mod reveal;
mod scrollspy;
mod components {
    pub mod icons;
    pub mod logo;
    pub mod nav;
    pub mod revenue_chart;
    pub mod slide;
}
mod pages {
    pub mod deck;
}

use analytics::Analytics;
use pages::deck::Deck;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Deck />
            <Analytics />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
