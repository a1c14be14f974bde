//! Ordering rules for table columns.

use super::columns::ColumnId;
use super::entry::PriceEntry;
use api::price_value::PriceValue;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use std::cmp::Ordering;

/// A cell value as seen by the comparator.
#[derive(Debug, Clone, PartialEq, strum::EnumIs)]
pub enum SortValue {
    Missing,
    Number(f64),
    Text(String),
}

impl From<&PriceValue> for SortValue {
    fn from(value: &PriceValue) -> Self {
        match value {
            PriceValue::Number(n) => Self::Number(*n),
            PriceValue::Text(s) => Self::Text(s.clone()),
            PriceValue::Missing => Self::Missing,
        }
    }
}

/// Comparable form of a `SortValue`, after date, number and case
/// normalization. Variants are ranked in declaration order.
#[derive(Debug, PartialEq)]
enum Key {
    Bottom,
    Number(f64),
    Text(String),
}

impl Key {
    fn of(value: &SortValue) -> Self {
        match value {
            SortValue::Missing => Self::Bottom,
            SortValue::Number(n) => Self::Number(*n),
            SortValue::Text(s) => {
                if let Some(ts) = parse_timestamp_millis(s) {
                    Self::Number(ts as f64)
                } else if let Ok(n) = s.trim().parse::<f64>() {
                    Self::Number(n)
                } else {
                    Self::Text(s.to_lowercase())
                }
            }
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Bottom => 0,
            Self::Number(_) => 1,
            Self::Text(_) => 2,
        }
    }
}

const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const NAIVE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parses strings that look like calendar dates into a UTC timestamp.
///
/// Accepts RFC 3339, RFC 2822, and ISO-like date or date-time strings.
/// Date-times without an offset are taken as UTC. Anything else, including
/// bare numbers and pair symbols, yields `None`.
pub fn parse_timestamp_millis(s: &str) -> Option<i64> {
    let s = s.trim();
    if s.is_empty() || !s.starts_with(|c: char| c.is_ascii_alphanumeric()) {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.timestamp_millis());
    }
    if let Some(dt) = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt.and_utc().timestamp_millis());
    }
    NAIVE_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// Three-way comparison used for every sortable column.
///
/// - `Missing` is below every defined value
/// - numbers, numeric strings and date-like strings compare by value
/// - other strings compare case-insensitively, above all numbers
///
/// This is a total order, so it is safe to hand to `sort_by`. NaN sorts
/// above positive infinity.
pub fn table_sort(a: &SortValue, b: &SortValue) -> Ordering {
    match (Key::of(a), Key::of(b)) {
        (Key::Number(x), Key::Number(y)) => x.total_cmp(&y),
        (Key::Text(x), Key::Text(y)) => x.cmp(&y),
        (x, y) => x.rank().cmp(&y.rank()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumIs)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// The active sort column and direction. Starts as pair, descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: ColumnId,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: ColumnId::Pair,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    /// Header click: flip direction on the active column, otherwise switch
    /// to the clicked column ascending.
    pub fn clicked(self, column: ColumnId) -> Self {
        if self.column == column {
            Self {
                column,
                direction: self.direction.toggled(),
            }
        } else {
            Self {
                column,
                direction: SortDirection::Ascending,
            }
        }
    }

    /// Orders two rows. Rows with a missing value sink to the bottom in
    /// both directions; everything else follows `table_sort`.
    pub fn compare(&self, a: &PriceEntry, b: &PriceEntry) -> Ordering {
        let (a, b) = (self.column.value(a), self.column.value(b));
        match (a.is_missing(), b.is_missing()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.direction.apply(table_sort(&a, &b)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> SortValue {
        SortValue::Text(s.to_string())
    }

    #[test]
    fn missing_is_lowest() {
        let defined = [
            SortValue::Number(f64::NEG_INFINITY),
            SortValue::Number(-1.0),
            SortValue::Number(0.0),
            text(""),
            text("abc"),
            text("ABC"),
            text("2020-01-01"),
        ];
        for value in &defined {
            assert_eq!(table_sort(&SortValue::Missing, value), Ordering::Less, "{:?}", value);
            assert_eq!(table_sort(value, &SortValue::Missing), Ordering::Greater, "{:?}", value);
        }
        assert_eq!(table_sort(&SortValue::Missing, &SortValue::Missing), Ordering::Equal);
    }

    #[test]
    fn dates_compare_chronologically() {
        assert_eq!(table_sort(&text("2020-02-01"), &text("2020-01-31")), Ordering::Greater);
        // lexicographically the other way round
        assert_eq!(
            table_sort(&text("2020-01-31T23:00:00-05:00"), &text("2020-02-01T01:00:00Z")),
            Ordering::Greater
        );
        assert_eq!(
            table_sort(&text("9/1/2020"), &text("10/1/2020")),
            Ordering::Less
        );
        assert_eq!(
            table_sort(&text("2020-01-31"), &text("2020-01-31T00:00:00Z")),
            Ordering::Equal
        );
    }

    #[test]
    fn parse_timestamp_millis_rejects_non_dates() {
        assert_eq!(parse_timestamp_millis("BTC/USD"), None);
        assert_eq!(parse_timestamp_millis("42000"), None);
        assert_eq!(parse_timestamp_millis(""), None);
        assert_eq!(parse_timestamp_millis("2020-13-45"), None);
        assert_eq!(parse_timestamp_millis("1970-01-02"), Some(86_400_000));
        assert_eq!(
            parse_timestamp_millis("Thu, 01 Jan 1970 00:00:01 +0000"),
            Some(1_000)
        );
    }

    #[test]
    fn strings_ignore_case() {
        assert_eq!(table_sort(&text("btc/usd"), &text("BTC/USD")), Ordering::Equal);
        assert_eq!(table_sort(&text("eth/usd"), &text("BTC/USD")), Ordering::Greater);
        assert_eq!(table_sort(&text("Abc"), &text("abd")), Ordering::Less);
    }

    #[test]
    fn numbers_and_fallbacks() {
        assert_eq!(
            table_sort(&SortValue::Number(2500.0), &SortValue::Number(42000.0)),
            Ordering::Less
        );
        assert_eq!(
            table_sort(&SortValue::Number(1.5), &SortValue::Number(1.5)),
            Ordering::Equal
        );
        assert_eq!(
            table_sort(&SortValue::Number(f64::NAN), &SortValue::Number(1.0)),
            Ordering::Greater
        );
        assert_eq!(table_sort(&SortValue::Number(2.0), &text("10")), Ordering::Less);
        assert_eq!(table_sort(&text("10"), &SortValue::Number(2.0)), Ordering::Greater);
        assert_eq!(table_sort(&SortValue::Number(2.0), &text("n/a")), Ordering::Less);
        assert_eq!(table_sort(&text("n/a"), &SortValue::Number(2.0)), Ordering::Greater);
        // numeric strings agree with numbers and with each other
        assert_eq!(table_sort(&text("9"), &text("10")), Ordering::Less);
    }

    #[test]
    fn header_clicks() {
        let sort = SortState::default();
        assert_eq!(sort.column, ColumnId::Pair);
        assert!(sort.direction.is_descending());

        let sort = sort.clicked(ColumnId::Pair);
        assert!(sort.direction.is_ascending());

        let sort = sort.clicked(ColumnId::Price);
        assert_eq!(sort.column, ColumnId::Price);
        assert!(sort.direction.is_ascending());
    }

    #[test]
    fn missing_rows_sink_in_both_directions() {
        let a = PriceEntry::new("A/USD", 1.0);
        let b = PriceEntry::new("B/USD", PriceValue::Missing);
        let c = PriceEntry::new("C/USD", 3.0);

        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let sort = SortState {
                column: ColumnId::Price,
                direction,
            };
            let mut rows = vec![b.clone(), c.clone(), a.clone()];
            rows.sort_by(|x, y| sort.compare(x, y));
            assert_eq!(rows.last(), Some(&b), "{:?}", direction);
        }
    }

    fn mixed_column(n: usize) -> Vec<PriceEntry> {
        (0..n)
            .map(|i| {
                let value = match i % 5 {
                    0 => PriceValue::Text("n/a".to_string()),
                    1 => PriceValue::Missing,
                    2 => PriceValue::Text(format!("{}", i * 3)),
                    3 => PriceValue::Text("2021-06-01".to_string()),
                    _ => PriceValue::Number((n - i) as f64),
                };
                PriceEntry::new(format!("C{:03}/USD", i), value)
            })
            .collect()
    }

    #[test]
    fn mixed_column_sorts_in_both_directions() {
        let rows = mixed_column(60);
        let missing = rows.iter().filter(|r| r.value == PriceValue::Missing).count();

        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let sort = SortState {
                column: ColumnId::Price,
                direction,
            };
            let mut sorted = rows.clone();
            sorted.sort_by(|x, y| sort.compare(x, y));

            let (defined, bottom) = sorted.split_at(sorted.len() - missing);
            assert!(bottom.iter().all(|r| r.value == PriceValue::Missing), "{:?}", direction);
            assert!(defined.iter().all(|r| r.value != PriceValue::Missing), "{:?}", direction);
            assert!(
                defined
                    .windows(2)
                    .all(|w| sort.compare(&w[0], &w[1]) != Ordering::Greater),
                "{:?}",
                direction
            );
        }

        let ascending = SortState {
            column: ColumnId::Price,
            direction: SortDirection::Ascending,
        };
        let mut sorted = rows.clone();
        sorted.sort_by(|x, y| ascending.compare(x, y));
        // non-numeric text ranks above every number and date
        assert_eq!(sorted[0].value, PriceValue::Number(1.0));
        let first_text = sorted
            .iter()
            .position(|r| r.value == PriceValue::Text("n/a".to_string()));
        assert_eq!(first_text, Some(sorted.len() - missing - 12));
    }

    #[test]
    fn default_sort_is_reverse_alphabetical_by_pair() {
        let sort = SortState::default();
        let mut rows = vec![
            PriceEntry::new("btc/usd", 1.0),
            PriceEntry::new("ETH/USD", 2.0),
            PriceEntry::new("ARRR/KMD", 3.0),
        ];
        rows.sort_by(|x, y| sort.compare(x, y));
        let pairs: Vec<&str> = rows.iter().map(|r| r.pair.as_str()).collect();
        assert_eq!(pairs, vec!["ETH/USD", "btc/usd", "ARRR/KMD"]);
    }
}
