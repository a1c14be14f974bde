use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::price_table::PriceTable;

#[component]
pub fn PricesScreen() -> Element {
    let app_state = use_context::<AppState>();
    let app_state_mut = use_context::<AppStateMut>();

    rsx! {
        PriceTable {
            prices: app_state_mut.prices,
            asset_host: app_state.asset_host.clone(),
        }
    }
}
