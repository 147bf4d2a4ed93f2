//! The call page: owns the session provider and surfaces connection
//! failures around the view.

use crate::components::SessionView;
use crate::hooks::use_app_config;
use crate::session::{ConnectionState, SessionHandle, SessionProvider};
use yew::prelude::*;

#[function_component(SessionPage)]
pub fn session_page() -> Html {
    let app_config = use_app_config();

    html! {
        <SessionProvider>
            <FailureBanner />
            <SessionView app_config={app_config} />
        </SessionProvider>
    }
}

/// Shown when the session reports a connection failure, for example
/// the connect timeout elapsing. The view only signals the condition;
/// recovery here is a page reload.
#[function_component(FailureBanner)]
fn failure_banner() -> Html {
    let session = use_context::<SessionHandle>().expect("no session context");

    match session.connection() {
        ConnectionState::Failed { reason } => html! {
            <div class="connection-failure-banner" role="alert">
                { format!("Connection failed: {}", reason) }
            </div>
        },
        _ => html! {},
    }
}
