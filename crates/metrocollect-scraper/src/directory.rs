//! City filtering for the trade-center directory.

use crate::types::StoreLocation;

/// Returns the ids of stores located in one of `target_cities`.
///
/// Order follows the directory response; callers that need a stable order
/// should sort. City matching is exact — the directory and the target list
/// use the same spelling.
#[must_use]
pub fn filter_store_ids(stores: &[StoreLocation], target_cities: &[String]) -> Vec<i64> {
    stores
        .iter()
        .filter(|store| target_cities.iter().any(|city| city == &store.city))
        .map(|store| store.store_id)
        .collect()
}
