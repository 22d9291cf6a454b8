//! Pageview beacon, mounted once at the page root. Fire-and-forget: a failed
//! send is logged and dropped, never retried.

use gloo_net::http::Request;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;

#[derive(Serialize)]
struct PageviewEvent {
    name: &'static str,
    url: String,
    referrer: String,
}

#[function_component(Analytics)]
pub fn analytics() -> Html {
    use_effect_with_deps(
        move |_| {
            spawn_local(async move {
                let window = match web_sys::window() {
                    Some(window) => window,
                    None => return,
                };
                let url = window.location().href().unwrap_or_default();
                let referrer = window
                    .document()
                    .map(|document| document.referrer())
                    .unwrap_or_default();

                let event = PageviewEvent {
                    name: "pageview",
                    url,
                    referrer,
                };
                let request = Request::post(&format!(
                    "{}/api/event",
                    config::get_analytics_url()
                ))
                .json(&event);

                if let Ok(request) = request {
                    if request.send().await.is_err() {
                        gloo_console::error!("failed to send pageview beacon");
                    }
                }
            });
            || ()
        },
        (),
    );

    html! {}
}
