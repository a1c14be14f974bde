#![allow(non_snake_case)]

use api::prefs::asset_host::AssetHost;
use api::price_map::PriceMap;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

use crate::components::pair_icon::PairIcon;
use crate::components::pico::Card;
use crate::components::pico::Loading;
use crate::components::sortable_header::SortableHeader;
use crate::components::table_pagination::TablePagination;
use crate::price_table::PriceEntry;
use crate::price_table::PriceTableState;

/// Sortable, searchable, paginated table of pair prices.
///
/// `prices` is owned by whoever fetches them; this component only reads it
/// and keeps its own `PriceTableState` snapshot, replaced on every update,
/// keystroke, header click or page change.
#[component]
pub fn PriceTable(prices: Signal<Option<PriceMap>>, asset_host: AssetHost) -> Element {
    let mut state = use_signal(PriceTableState::new);

    use_effect(move || {
        let prices = prices.read();
        let next = state.peek().with_prices(prices.as_ref());
        match next {
            Some(next) => {
                debug!("price table: {} pairs", next.items().len());
                state.set(next);
            }
            None => debug!("price table: ignoring empty price update"),
        }
    });

    let snapshot = state.read().clone();
    if snapshot.is_loading() {
        return rsx! {
            Loading {
                label: "Loading...",
            }
        };
    }

    let columns = *snapshot.columns().columns();
    let has_footer = snapshot.columns().has_footer();
    let rows = snapshot.visible_rows();
    let search_term = snapshot.view().search_term.clone();

    rsx! {
        Card {
            title: "Prices",
            style: "max-width: 750px; margin: 0 auto;",
            div {
                class: "prices-table",
                input {
                    class: "search-field",
                    r#type: "search",
                    placeholder: "Filter",
                    value: "{search_term}",
                    oninput: move |evt| {
                        let next = state.peek().with_search_term(&evt.value());
                        state.set(next);
                    },
                }
                div {
                    style: "max-height: 70vh; overflow-y: auto;",
                    table {
                        class: "striped",
                        thead {
                            tr {
                                for column in columns {
                                    SortableHeader {
                                        column,
                                        state,
                                    }
                                }
                            }
                        }
                        tbody {
                            for entry in rows {
                                PriceRow {
                                    key: "{entry.pair}",
                                    entry: entry.clone(),
                                    asset_host: asset_host.clone(),
                                }
                            }
                        }
                        if has_footer {
                            tfoot {
                                tr {
                                    for column in columns {
                                        th {
                                            "{column.footer.unwrap_or_default()}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                if snapshot.view().show_pagination {
                    TablePagination {
                        state,
                    }
                }
            }
        }
    }
}

#[component]
fn PriceRow(entry: PriceEntry, asset_host: AssetHost) -> Element {
    rsx! {
        tr {
            td {
                PairIcon {
                    pair: entry.pair.clone(),
                    asset_host,
                }
            }
            td {
                code {
                    "{entry.value}"
                }
            }
        }
    }
}
