use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod dom;
mod components {
    pub mod anchor;
    pub mod header;
    pub mod hero;
    pub mod reveal;
}
mod contact {
    pub mod form;
    pub mod submit;
    pub mod textarea;
    pub mod wizard;
}
mod pages {
    pub mod landing;
}

use components::header::SiteHeader;
use pages::landing::Landing;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting to landing page");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <SiteHeader />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
