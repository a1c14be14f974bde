use super::entry::PriceEntry;
use super::sort::SortValue;

/// Tables with this many rows or fewer get no footer row.
pub const FOOTER_THRESHOLD: usize = 15;

const COLUMN_MAX_WIDTH: u32 = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ColumnId {
    Pair,
    Price,
}

impl ColumnId {
    /// The value this column sorts by.
    pub fn value(&self, entry: &PriceEntry) -> SortValue {
        match self {
            Self::Pair => SortValue::Text(entry.pair.clone()),
            Self::Price => SortValue::from(&entry.value),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pair => "Pair",
            Self::Price => "Price",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub id: ColumnId,
    pub header: &'static str,
    pub footer: Option<&'static str>,
    /// in pixels
    pub max_width: u32,
}

impl ColumnDescriptor {
    fn new(id: ColumnId, with_footer: bool) -> Self {
        Self {
            id,
            header: id.label(),
            footer: with_footer.then(|| id.label()),
            max_width: COLUMN_MAX_WIDTH,
        }
    }

    pub fn value(&self, entry: &PriceEntry) -> SortValue {
        self.id.value(entry)
    }
}

/// The table's columns: pair (with icons) then price.
///
/// Short tables drop the footer row entirely, so the two shapes are kept
/// as separate variants rather than a flag on each column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSpec {
    WithFooter([ColumnDescriptor; 2]),
    WithoutFooter([ColumnDescriptor; 2]),
}

impl ColumnSpec {
    pub fn for_row_count(row_count: usize) -> Self {
        if row_count <= FOOTER_THRESHOLD {
            Self::WithoutFooter(Self::descriptors(false))
        } else {
            Self::WithFooter(Self::descriptors(true))
        }
    }

    fn descriptors(with_footer: bool) -> [ColumnDescriptor; 2] {
        [
            ColumnDescriptor::new(ColumnId::Pair, with_footer),
            ColumnDescriptor::new(ColumnId::Price, with_footer),
        ]
    }

    pub fn columns(&self) -> &[ColumnDescriptor; 2] {
        match self {
            Self::WithFooter(cols) | Self::WithoutFooter(cols) => cols,
        }
    }

    pub fn has_footer(&self) -> bool {
        matches!(self, Self::WithFooter(_))
    }
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self::for_row_count(0)
    }
}
