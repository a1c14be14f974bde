use api::price_map::PriceMap;
use api::price_value::PriceValue;

/// One table row.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceEntry {
    pub pair: String,
    pub value: PriceValue,
}

impl PriceEntry {
    pub fn new(pair: impl Into<String>, value: impl Into<PriceValue>) -> Self {
        Self {
            pair: pair.into(),
            value: value.into(),
        }
    }
}

/// Flattens a price map into rows, in the map's iteration order.
pub fn price_list(prices: &PriceMap) -> Vec<PriceEntry> {
    prices
        .iter()
        .map(|(pair, value)| PriceEntry::new(pair, value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn one_row_per_pair_with_value_preserved() {
        let prices: PriceMap = serde_json::from_str(
            r#"{"BTC/USD": 42000, "ETH/USD": 2500, "KMD/BTC": "0.00001", "ZEC/BTC": null}"#,
        )
        .unwrap();

        let rows = price_list(&prices);

        assert_eq!(rows.len(), prices.len());
        assert!(rows.iter().map(|r| &r.pair).all_unique());
        for row in &rows {
            assert_eq!(prices.get(&row.pair), Some(&row.value));
        }
        assert_eq!(
            rows.iter().map(|r| r.pair.as_str()).collect::<Vec<_>>(),
            vec!["BTC/USD", "ETH/USD", "KMD/BTC", "ZEC/BTC"]
        );
    }

    #[test]
    fn empty_map_gives_no_rows() {
        assert!(price_list(&PriceMap::new()).is_empty());
    }
}
