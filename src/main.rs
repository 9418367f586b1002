use std::rc::Rc;

use log::{error, info, Level};
use yew::prelude::*;
use yew_hooks::prelude::*;

mod config;
mod dom;
mod error;
mod form;
mod nav;
mod components {
    pub mod about;
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod nav_bar;
    pub mod projects;
    pub mod reviews;
    pub mod services;
    pub mod toast;
}
mod pages {
    pub mod home;
}

use components::toast::ToastHost;
use config::Variant;
use pages::home::Home;

fn log_level() -> Level {
    option_env!("SITE_LOG_LEVEL")
        .and_then(|level| level.parse().ok())
        .unwrap_or(Level::Info)
}

#[function_component]
fn App() -> Html {
    let requested = use_search_param("variant".to_string());
    let variant = Variant::resolve(requested.as_deref());

    let loaded = use_memo(
        |variant| {
            info!("Loading site variant {}", variant);
            variant.load().map(Rc::new)
        },
        variant,
    );

    match &*loaded {
        Ok(config) => html! {
            <ToastHost>
                <Home config={config.clone()} />
            </ToastHost>
        },
        Err(e) => {
            error!("{}", e);
            html! {
                <div class="config-error" style="padding: 4rem 1.5rem; text-align: center;">
                    <h1>{"This page is temporarily unavailable."}</h1>
                    <p>{"Please call us or try again later."}</p>
                </div>
            }
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
