//! Master-Detail Expansion
//!
//! One open/closed flag per top-level row. Rebuilt (all closed) every time
//! the displayed page is replaced.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionState<Id: Eq + Hash> {
    rows: HashMap<Id, bool>,
}

impl<Id: Eq + Hash> Default for ExpansionState<Id> {
    fn default() -> Self {
        Self { rows: HashMap::new() }
    }
}

impl<Id: Eq + Hash> ExpansionState<Id> {
    /// Track every id, all collapsed
    pub fn from_ids(ids: impl IntoIterator<Item = Id>) -> Self {
        Self {
            rows: ids.into_iter().map(|id| (id, false)).collect(),
        }
    }

    /// Discard all prior choices and track `ids` collapsed
    pub fn reset(&mut self, ids: impl IntoIterator<Item = Id>) {
        *self = Self::from_ids(ids);
    }

    /// Flip one row; an untracked id starts tracking as open
    pub fn toggle(&mut self, id: Id) {
        let open = self.rows.entry(id).or_insert(false);
        *open = !*open;
    }

    pub fn is_open(&self, id: &Id) -> bool {
        self.rows.get(id).copied().unwrap_or(false)
    }

    pub fn open_count(&self) -> usize {
        self.rows.values().filter(|open| **open).count()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Which control inside a row received the click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowClick {
    /// The dedicated expand/collapse button
    ExpandControl,
    /// Any other cell of the row
    Cell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    ToggleExpand,
    OpenDetails,
}

/// Resolve a row click to exactly one action
pub fn row_action(click: RowClick) -> RowAction {
    match click {
        RowClick::ExpandControl => RowAction::ToggleExpand,
        RowClick::Cell => RowAction::OpenDetails,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untracked_defaults_closed() {
        let state = ExpansionState::from_ids([1u32, 2, 3]);
        assert!(!state.is_open(&2));
        assert!(!state.is_open(&42));
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn test_toggle_is_independent() {
        let mut state = ExpansionState::from_ids([1u32, 2, 3]);
        state.toggle(2);
        assert!(state.is_open(&2));
        assert!(!state.is_open(&1));
        assert!(!state.is_open(&3));
        state.toggle(2);
        assert!(!state.is_open(&2));
    }

    #[test]
    fn test_toggle_untracked_opens() {
        let mut state = ExpansionState::<u32>::default();
        state.toggle(9);
        assert!(state.is_open(&9));
        assert_eq!(state.open_count(), 1);
    }

    #[test]
    fn test_reset_collapses_reappearing_ids() {
        let mut state = ExpansionState::from_ids([4u32, 5, 6]);
        state.toggle(5);
        assert!(state.is_open(&5));

        // New page that still contains id 5
        state.reset([5u32, 7, 8]);
        assert!(!state.is_open(&5));
        assert_eq!(state.open_count(), 0);
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn test_row_actions_are_exclusive() {
        assert_eq!(row_action(RowClick::ExpandControl), RowAction::ToggleExpand);
        assert_eq!(row_action(RowClick::Cell), RowAction::OpenDetails);
    }
}
