use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod animator;
mod contact;
mod components {
    pub mod global_styles;
    pub mod scroll_top;
    pub mod section_header;
    pub mod slideshow;
    pub mod staff_card;
}
mod pages {
    pub mod contact;
    pub mod content;
    pub mod home;
}

use components::global_styles::GlobalStyles;
use pages::{contact::ContactPage, home::Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contact")]
    Contact,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        },
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <GlobalStyles />
            <Switch<Route> render={switch} />
        </BrowserRouter>
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
