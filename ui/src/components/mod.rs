//! Shared components. `price_table` is the prices widget; the rest are its
//! building blocks and generic Pico.css wrappers.
pub mod pair_icon;
pub mod pico;
pub mod price_table;
pub mod sortable_header;
pub mod table_pagination;
