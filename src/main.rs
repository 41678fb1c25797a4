use log::info;
use yew::prelude::*;

mod clipboard;
mod config;
mod event_bridge;
mod models;
mod state;
mod components {
    pub mod backdrop;
    pub mod copy_row;
    pub mod notice;
    pub mod payment_panel;
}
mod pages {
    pub mod payment_confirmation;
}

use pages::payment_confirmation::PaymentConfirmation;

#[function_component]
fn App() -> Html {
    html! {
        <PaymentConfirmation />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting payment confirmation page");
    yew::Renderer::<App>::new().render();
}
