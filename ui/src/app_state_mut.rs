//! Defines the mutable, reactive state for the application's UI.

use api::price_map::PriceMap;
use dioxus::prelude::*;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// This is the price store the table subscribes to. Only `LoadedApp`
/// writes to it; views read it.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// The latest pair prices. `None` until the first fetch succeeds.
    pub prices: Signal<Option<PriceMap>>,
}
