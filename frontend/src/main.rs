use yew::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod interactive {
    pub mod scroll_spy;
    pub mod carousel;
    pub mod particles;
    pub mod contact_form;
    pub mod cursor;
}
mod components {
    pub mod nav;
    pub mod notification;
    pub mod testimonials_carousel;
    pub mod particle_background;
    pub mod custom_cursor;
    pub mod project_card;
    pub mod tech_icon;
    pub mod contact_form;
}
mod pages {
    pub mod portfolio;
}

use pages::portfolio::Portfolio;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <Portfolio />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
