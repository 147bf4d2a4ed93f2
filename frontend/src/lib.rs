mod components;
mod hooks;
mod motion;
mod pages;
mod session;
pub mod utils;

use pages::{session::SessionPage, welcome::WelcomePage};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/session")]
    Session,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <WelcomePage /> },
        Route::Session => html! { <SessionPage /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
