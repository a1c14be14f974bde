//! View state for the pair prices table.
//!
//! Everything here is plain data and pure functions; the Dioxus component in
//! `components::price_table` owns a `PriceTableState` snapshot and swaps it
//! for a new one on every event.

pub mod columns;
pub mod entry;
pub mod filter;
pub mod pagination;
pub mod sort;
pub mod state;

pub use columns::ColumnDescriptor;
pub use columns::ColumnId;
pub use columns::ColumnSpec;
pub use entry::PriceEntry;
pub use sort::SortDirection;
pub use sort::SortState;
pub use state::PriceTableState;
pub use state::ViewState;
