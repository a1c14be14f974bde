#![allow(non_snake_case)]

use crate::price_table::ColumnDescriptor;
use crate::price_table::PriceTableState;
use dioxus::prelude::*;

/// A column header that sorts the table when clicked.
#[component]
pub fn SortableHeader(column: ColumnDescriptor, mut state: Signal<PriceTableState>) -> Element {
    let sort = state.read().sort();
    let arrow_char = if sort.column == column.id {
        sort.direction.arrow()
    } else {
        "\u{00A0}"
    };

    rsx! {
        th {
            style: "position: sticky; top: 0; background: var(--pico-card-background-color); cursor: pointer; white-space: nowrap; max-width: {column.max_width}px;",
            onclick: move |_| {
                let next = state.peek().with_sort_clicked(column.id);
                state.set(next);
            },
            "{column.header}"
            span {
                style: "display: inline-block; width: 1.2em; text-align: right;",
                "{arrow_char}"
            }
        }
    }
}
