//! Quadratic sorts applied to a record's values when it is entered
//!
//! Each record kind shows its freshly entered values in a fixed order using
//! its own algorithm. The step-by-step behaviour is part of the contract, so
//! these are written out rather than delegated to `slice::sort_by`.

use crate::models::EntrySort;

/// Put a freshly entered record's values in the order its kind uses
pub fn apply_entry_sort(sort: EntrySort, values: &mut [f64]) {
    match sort {
        EntrySort::BubbleDescending => bubble_descending(values),
        EntrySort::SelectionAscending => selection_ascending(values),
        EntrySort::InsertionAscending => insertion_ascending(values),
    }
}

/// Bubble sort, largest first
///
/// Each pass swaps adjacent pairs whose left value is smaller; the sorted
/// suffix grows by one per pass.
pub fn bubble_descending(values: &mut [f64]) {
    let n = values.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if values[j] < values[j + 1] {
                values.swap(j, j + 1);
            }
        }
    }
}

/// Selection sort, smallest first
///
/// Position `i` receives the minimum of the unsorted suffix.
pub fn selection_ascending(values: &mut [f64]) {
    let n = values.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_index = i;
        for j in i + 1..n {
            if values[j] < values[min_index] {
                min_index = j;
            }
        }
        values.swap(i, min_index);
    }
}

/// Insertion sort, smallest first (stable)
pub fn insertion_ascending(values: &mut [f64]) {
    for i in 1..values.len() {
        let key = values[i];
        let mut j = i;
        while j > 0 && values[j - 1] > key {
            values[j] = values[j - 1];
            j -= 1;
        }
        values[j] = key;
    }
}
