//! Paging request/response envelopes used by the store.
//!
//! # Invariants
//! - `page_number` is 1-based and derived from the *requested* offset/size.
//! - `more_records` compares the requested window end with the total count.
//! - `unfetched_ids` is only `Some` for id-restricted queries.

use crate::model::game::GameId;

/// Store-level find request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindRequest {
    /// Number of records to skip.
    pub page_offset: u32,
    /// Maximum number of records to return.
    pub page_size: u32,
    /// Optional id restriction. Empty is treated like `None`.
    pub ids: Option<Vec<GameId>>,
}

impl FindRequest {
    pub fn page(page_offset: u32, page_size: u32) -> Self {
        Self {
            page_offset,
            page_size,
            ids: None,
        }
    }

    pub fn by_ids(ids: Vec<GameId>, page_offset: u32, page_size: u32) -> Self {
        Self {
            page_offset,
            page_size,
            ids: Some(ids),
        }
    }

    /// Returns the id restriction when one is present and non-empty.
    pub fn restricted_ids(&self) -> Option<&[GameId]> {
        self.ids
            .as_deref()
            .filter(|ids| !ids.is_empty())
    }
}

/// Store-level page of results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindResponse<T> {
    pub values: Vec<T>,
    pub page_number: u32,
    /// Number of values actually returned.
    pub page_size: u32,
    pub total_records: u64,
    pub more_records: bool,
    pub unfetched_ids: Option<Vec<GameId>>,
}

/// Identifiers written or removed by a store mutation, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveResponse<T> {
    pub values: Vec<T>,
}

impl<T> SaveResponse<T> {
    pub fn new(values: Vec<T>) -> Self {
        Self { values }
    }
}

/// 1-based page number for a requested window.
///
/// A zero `page_size` is reported as page 1.
pub fn page_number(page_offset: u32, page_size: u32) -> u32 {
    page_offset
        .checked_div(page_size)
        .map_or(1, |page| page.saturating_add(1))
}

/// Whether records exist past the requested window.
pub fn more_records(page_offset: u32, page_size: u32, total_records: u64) -> bool {
    u64::from(page_offset) + u64::from(page_size) < total_records
}

#[cfg(test)]
mod tests {
    use super::{more_records, page_number, FindRequest};

    #[test]
    fn page_number_is_floor_of_offset_over_size_plus_one() {
        assert_eq!(page_number(0, 5), 1);
        assert_eq!(page_number(4, 5), 1);
        assert_eq!(page_number(5, 5), 2);
        assert_eq!(page_number(10, 10), 2);
        assert_eq!(page_number(100, 10), 11);
        assert_eq!(page_number(160, 40), 5);
        assert_eq!(page_number(150, 50), 4);
        assert_eq!(page_number(7, 3), 3);
    }

    #[test]
    fn page_number_with_zero_size_does_not_panic() {
        assert_eq!(page_number(30, 0), 1);
    }

    #[test]
    fn more_records_uses_requested_window() {
        assert!(more_records(100, 10, 200));
        assert!(!more_records(160, 40, 186));
        assert!(!more_records(190, 10, 200));
        assert!(more_records(189, 10, 200));
        assert!(!more_records(u32::MAX, u32::MAX, 10));
    }

    #[test]
    fn empty_id_list_is_not_a_restriction() {
        let request = FindRequest::by_ids(Vec::new(), 0, 10);
        assert!(request.restricted_ids().is_none());

        let request = FindRequest::by_ids(vec!["a".to_string()], 0, 10);
        assert_eq!(request.restricted_ids().map(<[_]>::len), Some(1));
    }
}
