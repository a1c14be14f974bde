use super::columns::ColumnId;
use super::columns::ColumnSpec;
use super::entry::price_list;
use super::entry::PriceEntry;
use super::filter::filter_entries;
use super::pagination;
use super::sort::SortState;
use api::price_map::PriceMap;
use itertools::Itertools;

/// User-adjustable settings of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search_term: String,
    pub page_size: usize,
    pub default_page_size: usize,
    /// True iff the unfiltered list has at least `default_page_size` rows.
    pub show_pagination: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            page_size: pagination::DEFAULT_PAGE_SIZE,
            default_page_size: pagination::DEFAULT_PAGE_SIZE,
            show_pagination: true,
        }
    }
}

/// A complete, immutable snapshot of the price table.
///
/// Every event (new prices, keystroke, page size, page, header click)
/// produces a new snapshot from the previous one. `filtered` is always
/// `filter_entries(items, view.search_term)`; nothing mutates one without
/// recomputing the other.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceTableState {
    items: Vec<PriceEntry>,
    filtered: Vec<PriceEntry>,
    columns: ColumnSpec,
    view: ViewState,
    sort: SortState,
    page_index: usize,
}

impl PriceTableState {
    /// The initial, still-loading snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// No prices have been accepted yet.
    pub fn is_loading(&self) -> bool {
        self.items.is_empty()
    }

    /// Applies an upstream price update.
    ///
    /// Returns `None` when the mapping is absent or empty, in which case the
    /// current snapshot stays on screen.
    pub fn with_prices(&self, prices: Option<&PriceMap>) -> Option<Self> {
        let prices = prices.filter(|p| !p.is_empty())?;
        let items = price_list(prices);
        let filtered = filter_entries(&items, &self.view.search_term);
        let view = ViewState {
            show_pagination: pagination::show_pagination(items.len(), self.view.default_page_size),
            ..self.view.clone()
        };
        let next = Self {
            columns: ColumnSpec::for_row_count(items.len()),
            items,
            filtered,
            view,
            ..self.clone()
        };
        Some(next.clamped())
    }

    pub fn with_search_term(&self, term: &str) -> Self {
        Self {
            filtered: filter_entries(&self.items, term),
            view: ViewState {
                search_term: term.to_string(),
                ..self.view.clone()
            },
            ..self.clone()
        }
        .clamped()
    }

    /// Changes rows per page. Pagination visibility is recomputed from the
    /// unfiltered list, not the filtered one.
    pub fn with_page_size(&self, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_index: pagination::rebase_page(self.page_index, self.view.page_size, page_size),
            view: ViewState {
                page_size,
                show_pagination: pagination::show_pagination(
                    self.items.len(),
                    self.view.default_page_size,
                ),
                ..self.view.clone()
            },
            ..self.clone()
        }
        .clamped()
    }

    pub fn with_page(&self, index: usize) -> Self {
        Self {
            page_index: index,
            ..self.clone()
        }
        .clamped()
    }

    pub fn with_sort_clicked(&self, column: ColumnId) -> Self {
        Self {
            sort: self.sort.clicked(column),
            ..self.clone()
        }
    }

    fn clamped(mut self) -> Self {
        self.page_index = pagination::clamp_page(self.page_index, self.filtered.len(), self.page_size());
        self
    }

    pub fn items(&self) -> &[PriceEntry] {
        &self.items
    }

    pub fn filtered(&self) -> &[PriceEntry] {
        &self.filtered
    }

    pub fn columns(&self) -> &ColumnSpec {
        &self.columns
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Rows per page in effect. With the pagination bar hidden there is no
    /// way to change page, so everything fits on one.
    pub fn page_size(&self) -> usize {
        if self.view.show_pagination {
            self.view.page_size
        } else {
            self.filtered.len().max(1)
        }
    }

    pub fn page_count(&self) -> usize {
        pagination::page_count(self.filtered.len(), self.page_size())
    }

    pub fn can_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next(&self) -> bool {
        self.page_index + 1 < self.page_count()
    }

    /// The filtered rows, sorted, for the current page.
    pub fn visible_rows(&self) -> Vec<PriceEntry> {
        let range = pagination::page_range(self.page_index, self.filtered.len(), self.page_size());
        self.filtered
            .iter()
            .sorted_by(|a, b| self.sort.compare(a, b))
            .skip(range.start)
            .take(range.len())
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price_table::sort::SortDirection;
    use api::price_value::PriceValue;

    fn prices(n: usize) -> PriceMap {
        (0..n).map(|i| (format!("C{:03}/USD", i), i as f64)).collect()
    }

    fn loaded(map: &PriceMap) -> PriceTableState {
        PriceTableState::new().with_prices(Some(map)).unwrap()
    }

    #[test]
    fn btc_search_scenario() {
        let map: PriceMap = [("BTC/USD", 42000.0), ("ETH/USD", 2500.0)].into_iter().collect();
        let state = loaded(&map).with_search_term("btc");
        assert_eq!(state.filtered(), &[PriceEntry::new("BTC/USD", 42000.0)]);
        assert_eq!(state.items().len(), 2);
    }

    #[test]
    fn empty_or_absent_update_is_ignored() {
        let state = PriceTableState::new();
        assert!(state.is_loading());
        assert_eq!(state.with_prices(None), None);
        assert_eq!(state.with_prices(Some(&PriceMap::new())), None);

        let state = loaded(&prices(3));
        assert_eq!(state.with_prices(Some(&PriceMap::new())), None);
        assert!(!state.is_loading());
    }

    #[test]
    fn update_refilters_with_existing_term() {
        let first: PriceMap = [("BTC/USD", 1.0), ("ETH/USD", 2.0)].into_iter().collect();
        let state = loaded(&first).with_search_term("eth");

        let second: PriceMap = [("ETH/BTC", 0.05), ("LTC/USD", 70.0), ("ETH/USD", 2.5)]
            .into_iter()
            .collect();
        let state = state.with_prices(Some(&second)).unwrap();

        assert_eq!(state.view().search_term, "eth");
        assert_eq!(
            state.filtered(),
            &[PriceEntry::new("ETH/BTC", 0.05), PriceEntry::new("ETH/USD", 2.5)]
        );
        assert_eq!(state.items().len(), 3);
    }

    #[test]
    fn columns_follow_row_count() {
        assert!(!loaded(&prices(15)).columns().has_footer());
        let state = loaded(&prices(16));
        assert!(state.columns().has_footer());
        // filtering does not change the column shape
        assert!(state.with_search_term("C001").columns().has_footer());
    }

    #[test]
    fn pagination_visibility_uses_unfiltered_length() {
        assert!(!loaded(&prices(99)).view().show_pagination);

        let state = loaded(&prices(100));
        assert!(state.view().show_pagination);

        let state = state.with_search_term("C00");
        assert_eq!(state.filtered().len(), 10);
        assert!(state.view().show_pagination);

        let state = state.with_search_term("C00").with_page_size(5);
        assert!(state.view().show_pagination);
        assert_eq!(state.page_count(), 2);
    }

    #[test]
    fn filtering_down_to_five_rows_keeps_pagination() {
        let map: PriceMap = (0..100)
            .map(|i| {
                let pair = if i < 5 {
                    format!("BTC{}/USD", i)
                } else {
                    format!("C{:03}/USD", i)
                };
                (pair, i as f64)
            })
            .collect();
        let state = loaded(&map).with_search_term("btc");
        assert_eq!(state.filtered().len(), 5);
        assert!(state.view().show_pagination);
    }

    #[test]
    fn mixed_price_column_sorts_without_panicking() {
        let map: PriceMap = (0..60)
            .map(|i| {
                let value = match i % 3 {
                    0 => PriceValue::Text("n/a".to_string()),
                    1 => PriceValue::Number(i as f64),
                    _ => PriceValue::Missing,
                };
                (format!("C{:03}/USD", i), value)
            })
            .collect();

        let ascending = loaded(&map).with_sort_clicked(ColumnId::Price);
        let descending = ascending.with_sort_clicked(ColumnId::Price);
        assert_eq!(descending.sort().direction, SortDirection::Descending);

        for state in [ascending, descending] {
            let rows = state.visible_rows();
            assert_eq!(rows.len(), 60);
            assert!(rows[40..].iter().all(|r| r.value == PriceValue::Missing));
            assert!(rows[..40].iter().all(|r| r.value != PriceValue::Missing));
        }
    }

    #[test]
    fn paging_through_rows() {
        let state = loaded(&prices(120)).with_sort_clicked(ColumnId::Price);
        assert_eq!(state.sort().direction, SortDirection::Ascending);
        assert_eq!(state.page_count(), 2);
        assert_eq!(state.visible_rows().len(), 100);

        let state = state.with_page(1);
        let rows = state.visible_rows();
        assert_eq!(rows.len(), 20);
        assert_eq!(rows[0].pair, "C100/USD");
        assert!(!state.can_next());
        assert!(state.can_previous());

        let state = state.with_page(9);
        assert_eq!(state.page_index(), 1);

        // page 1 of size 100 starts at row 100, which is page 4 at size 25
        let state = state.with_page_size(25);
        assert_eq!(state.page_index(), 4);
        assert_eq!(state.visible_rows()[0].pair, "C100/USD");

        // narrowing the filter pulls the page back in range
        let state = state.with_search_term("C00");
        assert_eq!(state.page_index(), 0);
        assert_eq!(state.visible_rows().len(), 10);
    }

    #[test]
    fn hidden_pagination_shows_every_row() {
        let state = loaded(&prices(150)).with_page_size(10);
        assert_eq!(state.visible_rows().len(), 10);

        let state = state.with_prices(Some(&prices(40))).unwrap();
        assert!(!state.view().show_pagination);
        assert_eq!(state.visible_rows().len(), 40);
    }

    #[test]
    fn default_sort_is_pair_descending() {
        let state = loaded(&prices(3));
        let pairs: Vec<String> = state.visible_rows().into_iter().map(|r| r.pair).collect();
        assert_eq!(pairs, vec!["C002/USD", "C001/USD", "C000/USD"]);
    }
}
