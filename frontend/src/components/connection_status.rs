use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
enum Status {
    Checking,
    Connected,
    Unreachable(String),
}

#[derive(Properties, PartialEq)]
pub struct ConnectionStatusProps {
    pub api_client: ApiClient,
}

/// Pings the health route once on mount
#[function_component(ConnectionStatus)]
pub fn connection_status(props: &ConnectionStatusProps) -> Html {
    let status = use_state(|| Status::Checking);

    use_effect_with(props.api_client.clone(), {
        let status = status.clone();
        move |api_client| {
            let api_client = api_client.clone();
            spawn_local(async move {
                match api_client.test_connection().await {
                    Ok(()) => status.set(Status::Connected),
                    Err(e) => {
                        Logger::error_with_component("connection-status", &e);
                        status.set(Status::Unreachable(e));
                    }
                }
            });
            || ()
        }
    });

    let label = props.api_client.config().endpoint_label().to_string();
    let (class, text) = match &*status {
        Status::Checking => ("connection-status", "Checking...".to_string()),
        Status::Connected => ("connection-status ok", format!("Connected to {}", label)),
        Status::Unreachable(e) => (
            "connection-status error",
            format!("Cannot reach {}: {}", label, e),
        ),
    };

    html! {
        <div class={class}>{text}</div>
    }
}
