//! Entry page shown before joining a call.

use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(WelcomePage)]
pub fn welcome_page() -> Html {
    let navigator = use_navigator();
    let on_start = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Session);
        }
    });

    html! {
        <div class="welcome-page">
            <h1 class="welcome-title">{ "Talk to the agent" }</h1>
            <p class="welcome-subtitle">{ "Voice, video, and a live transcript." }</p>
            <button class="welcome-start" onclick={on_start}>{ "Start call" }</button>
        </div>
    }
}
