//! Hook fetching client feature configuration once on mount.

use crate::utils;
use gloo_net::http::Request;
use shared::AppConfig;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Fetch `/api/config` once on mount. Defaults apply until the fetch
/// resolves, and stay in place if it fails.
#[hook]
pub fn use_app_config() -> AppConfig {
    let config = use_state(AppConfig::default);

    {
        let config = config.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let endpoint = utils::api_url("/api/config");
                match Request::get(&endpoint).send().await {
                    Ok(response) => {
                        if let Ok(parsed) = response.json::<AppConfig>().await {
                            config.set(parsed);
                        }
                    }
                    Err(e) => log::error!("Failed to fetch app config: {:?}", e),
                }
            });
            || ()
        });
    }

    (*config).clone()
}
