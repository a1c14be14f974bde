// The client-side Dioxus application logic.

use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
pub mod price_table;
mod screens;

use api::prefs::user_prefs::UserPrefs;
use app_state::AppState;
use app_state_mut::AppStateMut;
use components::pico::Container;
use screens::prices::PricesScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let css = r#"
    * { box-sizing: border-box; }

    .app-main-container {
        padding: 10px;
    }

    .prices-table .search-field {
        margin-bottom: 0.5rem;
    }

    .prices-table table tbody tr:hover {
        background-color: color-mix(in srgb, var(--pico-primary), transparent 92%);
    }

    .prices-table tfoot th {
        font-weight: bold;
        color: var(--pico-muted-color);
    }

    .table-pagination button {
        margin-bottom: 0;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // this will be processed on server before initial page is delivered.
    let prefs_future = use_server_future(move || async move {
        api::get_user_prefs().await.map_err(|e| e.to_string())
    })?;

    let body = match &*prefs_future.read() {
        Some(Ok(prefs)) => {
            info!("prefs: {:?}", prefs);
            rsx! {
                LoadedApp {
                    user_prefs: prefs.clone(),
                }
            }
        }
        Some(Err(e)) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
        _ => rsx! {
            p {
                "Loading..."
            }
        },
    };
    body
}

/// Holds the price store and refresh loop. Only runs once prefs are loaded.
#[component]
fn LoadedApp(user_prefs: UserPrefs) -> Element {
    let refresh_interval = user_prefs.source().refresh_interval();
    use_context_provider(|| AppState::new(user_prefs.asset_host().clone(), refresh_interval));

    let prices_signal = use_signal(|| None);
    use_context_provider(|| AppStateMut {
        prices: prices_signal,
    });
    let mut app_state_mut = use_context::<AppStateMut>();

    let prices_resource = use_resource(api::pair_prices);

    use_coroutine(move |_rx: UnboundedReceiver<()>| {
        let mut res = prices_resource;
        async move {
            loop {
                compat::sleep(refresh_interval).await;
                res.restart();
            }
        }
    });

    use_effect(move || match prices_resource.read().as_ref() {
        Some(Ok(price_map)) => {
            // the resource can return identical data; skip those to avoid re-deriving the table.
            if app_state_mut.prices.peek().as_ref() != Some(price_map) {
                app_state_mut.prices.set(Some(price_map.clone()));
            }
        }
        Some(Err(e)) => warn!("failed to fetch pair prices: {}", e),
        None => {}
    });

    rsx! {
        div {
            class: "app-main-container",
            Container {
                PricesScreen {}
            }
        }
    }
}
