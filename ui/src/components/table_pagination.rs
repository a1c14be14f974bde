#![allow(non_snake_case)]

use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::price_table::pagination::PAGE_SIZE_OPTIONS;
use crate::price_table::PriceTableState;
use dioxus::prelude::*;

/// Previous/next controls and a rows-per-page selector.
#[component]
pub fn TablePagination(mut state: Signal<PriceTableState>) -> Element {
    let snapshot = state.read().clone();
    let page = snapshot.page_index();
    let page_count = snapshot.page_count();
    let page_size = snapshot.view().page_size;

    rsx! {
        nav {
            class: "table-pagination",
            style: "display: flex; align-items: center; justify-content: space-between; gap: 1rem;",
            Button {
                button_type: ButtonType::Secondary,
                outline: true,
                disabled: !snapshot.can_previous(),
                on_click: move |_| {
                    let next = state.peek().with_page(page.saturating_sub(1));
                    state.set(next);
                },
                "Previous page"
            }
            span {
                "Page {page + 1} of {page_count}"
            }
            select {
                style: "width: auto; margin-bottom: 0;",
                value: "{page_size}",
                onchange: move |evt| {
                    if let Ok(size) = evt.value().parse::<usize>() {
                        let next = state.peek().with_page_size(size);
                        state.set(next);
                    }
                },
                for size in PAGE_SIZE_OPTIONS {
                    option {
                        value: "{size}",
                        selected: size == page_size,
                        "{size} rows"
                    }
                }
            }
            Button {
                button_type: ButtonType::Secondary,
                outline: true,
                disabled: !snapshot.can_next(),
                on_click: move |_| {
                    let next = state.peek().with_page(page + 1);
                    state.set(next);
                },
                "Next page"
            }
        }
    }
}
