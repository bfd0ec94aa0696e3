use log::{info, Level};
use yew::prelude::*;

mod carousel;
mod config;
mod content;
mod scroll;

mod components {
    pub mod contact;
    pub mod footer;
    pub mod header;
    pub mod sections;
    pub mod testimonials;
}
mod pages {
    pub mod portfolio;
}

use pages::portfolio::Portfolio;

#[function_component]
fn App() -> Html {
    html! { <Portfolio /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
