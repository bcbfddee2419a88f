//! Sort/Filter Engine
//!
//! Client-side view over a slice that is already in memory (e.g. the spaces
//! of one property). Filters by case-insensitive substring across a set of
//! text columns, then sorts stably by one column. No paging at this layer.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::models::{Property, Space};
use crate::query::{SortDirection, SortSpec};

/// A single cell value as seen by the engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    Missing,
}

impl<'a> From<Option<&'a str>> for FieldValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(FieldValue::Missing, FieldValue::Text)
    }
}

/// A row that can be filtered and sorted by column.
///
/// Each column should yield one kind of value (text or number, plus
/// `Missing`); mixed kinds compare as equal.
pub trait TableRow {
    type Column: Copy + Eq;

    fn value(&self, column: Self::Column) -> FieldValue<'_>;
}

/// Letters with accents decomposed and the marks dropped, case-folded
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().filter(|c| !is_combining_mark(*c)).flat_map(char::to_lowercase)
}

/// Locale-style string ordering, strongest level first:
/// base letters ignoring accents and case ("Émile" < "Zoe"), then accents
/// (unaccented first), then case (lowercase first at the first differing
/// character).
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| {
            a.nfd()
                .flat_map(char::to_lowercase)
                .cmp(b.nfd().flat_map(char::to_lowercase))
        })
        .then_with(|| {
            for (x, y) in a.chars().zip(b.chars()) {
                if x != y {
                    return match (x.is_lowercase(), y.is_lowercase()) {
                        (true, false) => Ordering::Less,
                        (false, true) => Ordering::Greater,
                        _ => x.cmp(&y),
                    };
                }
            }
            a.len().cmp(&b.len())
        })
}

/// Compare two cells. Missing values sort last in both directions.
pub fn compare_values(a: FieldValue<'_>, b: FieldValue<'_>, direction: SortDirection) -> Ordering {
    let directed = |ord: Ordering| match direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    };
    match (a, b) {
        (FieldValue::Missing, FieldValue::Missing) => Ordering::Equal,
        (FieldValue::Missing, _) => Ordering::Greater,
        (_, FieldValue::Missing) => Ordering::Less,
        (FieldValue::Text(x), FieldValue::Text(y)) => directed(locale_compare(x, y)),
        (FieldValue::Number(x), FieldValue::Number(y)) => {
            directed(x.partial_cmp(&y).unwrap_or(Ordering::Equal))
        }
        _ => Ordering::Equal,
    }
}

/// Whether any of `columns` contains `needle` (already lowercased)
fn matches_filter<T: TableRow>(item: &T, needle: &str, columns: &[T::Column]) -> bool {
    columns.iter().any(|&column| match item.value(column) {
        FieldValue::Text(text) => text.to_lowercase().contains(needle),
        _ => false,
    })
}

/// Filter then sort `items`, returning references in display order.
/// The input slice is left untouched.
pub fn view<'a, T: TableRow>(
    items: &'a [T],
    filter_text: &str,
    filter_columns: &[T::Column],
    sort: &SortState<T::Column>,
) -> Vec<&'a T> {
    let mut rows: Vec<&T> = if filter_text.is_empty() {
        items.iter().collect()
    } else {
        let needle = filter_text.to_lowercase();
        items
            .iter()
            .filter(|item| matches_filter(*item, &needle, filter_columns))
            .collect()
    };

    if let Some(column) = sort.column {
        // sort_by is stable: ties keep their original relative order
        rows.sort_by(|a, b| compare_values(a.value(column), b.value(column), sort.direction));
    }
    rows
}

/// Active sort column and direction for a table header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<C> {
    pub column: Option<C>,
    pub direction: SortDirection,
}

impl<C> Default for SortState<C> {
    fn default() -> Self {
        Self {
            column: None,
            direction: SortDirection::Ascending,
        }
    }
}

impl<C: Copy + Eq> SortState<C> {
    pub fn by(column: C) -> Self {
        Self {
            column: Some(column),
            direction: SortDirection::Ascending,
        }
    }

    /// Header click: the same column while ascending flips to descending,
    /// anything else (re)starts ascending.
    pub fn click(&mut self, column: C) {
        self.direction = if self.column == Some(column) && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        self.column = Some(column);
    }

    pub fn is_active(&self, column: C) -> bool {
        self.column == Some(column)
    }

    /// Arrow direction to draw for `column` (inactive columns show ascending)
    pub fn direction_for(&self, column: C) -> SortDirection {
        if self.is_active(column) {
            self.direction
        } else {
            SortDirection::Ascending
        }
    }
}

// ========================
// Space rows
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpaceColumn {
    Description,
    Type,
    Size,
}

impl SpaceColumn {
    /// Columns searched by the details quick filter
    pub const QUICK_FILTER: &'static [SpaceColumn] = &[SpaceColumn::Description, SpaceColumn::Type];
}

impl TableRow for Space {
    type Column = SpaceColumn;

    fn value(&self, column: SpaceColumn) -> FieldValue<'_> {
        match column {
            SpaceColumn::Description => self.description.as_deref().into(),
            SpaceColumn::Type => self.space_type.as_deref().into(),
            SpaceColumn::Size => FieldValue::Number(self.size),
        }
    }
}

// ========================
// Property rows
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyColumn {
    Address,
    Type,
    Description,
    Price,
    TotalSize,
}

impl PropertyColumn {
    /// Member name understood by the search endpoint, for server-sortable columns
    pub fn sort_member(&self) -> Option<&'static str> {
        match self {
            PropertyColumn::Address => Some("address"),
            PropertyColumn::Type => Some("typeName"),
            PropertyColumn::Price => Some("price"),
            PropertyColumn::Description | PropertyColumn::TotalSize => None,
        }
    }
}

impl SortState<PropertyColumn> {
    /// The server request matching this header state
    pub fn to_sort_spec(&self) -> Option<SortSpec> {
        let member = self.column?.sort_member()?;
        Some(SortSpec::new(member, self.direction))
    }
}

impl TableRow for Property {
    type Column = PropertyColumn;

    fn value(&self, column: PropertyColumn) -> FieldValue<'_> {
        match column {
            PropertyColumn::Address => FieldValue::Text(&self.address),
            PropertyColumn::Type => FieldValue::Text(&self.type_name),
            PropertyColumn::Description => self.description.as_deref().into(),
            PropertyColumn::Price => FieldValue::Number(self.price),
            PropertyColumn::TotalSize => FieldValue::Number(self.total_size()),
        }
    }
}
