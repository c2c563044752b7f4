//! Radix sort over expense timestamps
//!
//! LSD (least-significant-digit-first) radix sort keyed on epoch
//! milliseconds, with a stable counting pass per decimal digit. Comparison
//! sorts are O(n log n); timestamps are bounded-width integers, so digit-wise
//! passes give O(k * n) where k is the digit count of the largest key.
//!
//! Stability of each counting pass is load-bearing: records sharing a
//! low-order digit must keep the order established by earlier passes, or the
//! passes would not compose into a total order.

use crate::record::Expense;
use log::debug;

/// Direction of the final bucket concatenation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Oldest timestamp first.
    Ascending,
    /// Newest timestamp first.
    Descending,
}

/// Sort expense records chronologically by their effective timestamp.
///
/// Returns a new ordering of exactly the input records; nothing is dropped,
/// duplicated, or mutated. Records with equal keys keep their relative input
/// order in both directions. Records with a missing or unparseable timestamp
/// sort as key 0 (see [`Expense::sort_key_ms`]).
pub fn sort_by_date(items: Vec<Expense>, order: SortOrder) -> Vec<Expense> {
    sort_by_key_ms(items, order, Expense::sort_key_ms)
}

/// Radix sort a sequence by a non-negative epoch-millisecond key.
///
/// The key function is evaluated once per item up front; negative keys are
/// clamped to 0 so every digit falls in 0..=9.
pub fn sort_by_key_ms<T, F>(items: Vec<T>, order: SortOrder, key: F) -> Vec<T>
where
    F: Fn(&T) -> i64,
{
    // Guard the max computation below; max over zero elements is undefined.
    if items.is_empty() {
        return items;
    }

    let mut keyed: Vec<(i64, T)> = items
        .into_iter()
        .map(|item| (key(&item).max(0), item))
        .collect();

    let max_key = keyed.iter().map(|(k, _)| *k).max().unwrap_or(0);
    debug!("radix sort: {} records, max key {}", keyed.len(), max_key);

    // Ten digit buckets, allocated once and drained between passes.
    let mut buckets: Vec<Vec<(i64, T)>> = (0..10).map(|_| Vec::new()).collect();
    let mut divisor: i64 = 1;
    let mut passes = 0u32;

    while max_key / divisor > 0 {
        counting_pass(&mut keyed, &mut buckets, divisor, order);
        divisor = divisor.saturating_mul(10);
        passes += 1;
    }
    debug!("radix sort: {} counting passes", passes);

    keyed.into_iter().map(|(_, item)| item).collect()
}

/// One stable counting pass: distribute by the current digit, then
/// concatenate the buckets back in direction order.
///
/// Reversing the bucket traversal (not the records within a bucket) is what
/// keeps descending output stable for equal keys.
fn counting_pass<T>(
    keyed: &mut Vec<(i64, T)>,
    buckets: &mut [Vec<(i64, T)>],
    divisor: i64,
    order: SortOrder,
) {
    for pair in keyed.drain(..) {
        let digit = ((pair.0 / divisor) % 10) as usize;
        buckets[digit].push(pair);
    }

    match order {
        SortOrder::Ascending => {
            for bucket in buckets.iter_mut() {
                keyed.append(bucket);
            }
        }
        SortOrder::Descending => {
            for bucket in buckets.iter_mut().rev() {
                keyed.append(bucket);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn expense(id: i64, transaction_date: Option<&str>) -> Expense {
        Expense {
            id,
            name: format!("expense-{id}"),
            amount: 10.0,
            description: None,
            is_cash: false,
            owner: "alice".to_string(),
            transaction_date: transaction_date.map(str::to_string),
            created_at: None,
            updated_at: None,
        }
    }

    fn ids(items: &[Expense]) -> Vec<i64> {
        items.iter().map(|e| e.id).collect()
    }

    fn same_day_records() -> Vec<Expense> {
        vec![
            expense(1, Some("2023-05-20T10:30:00Z")),
            expense(2, Some("2023-05-20T08:15:00Z")),
            expense(3, Some("2023-05-20T11:45:00Z")),
            expense(4, Some("2023-05-20T09:00:00Z")),
        ]
    }

    #[test]
    fn test_ascending_orders_oldest_first() {
        let sorted = sort_by_date(same_day_records(), SortOrder::Ascending);
        assert_eq!(ids(&sorted), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_descending_orders_newest_first() {
        let sorted = sort_by_date(same_day_records(), SortOrder::Descending);
        assert_eq!(ids(&sorted), vec![3, 1, 4, 2]);
    }

    #[test]
    fn test_empty_input_returns_empty() {
        assert!(sort_by_date(Vec::new(), SortOrder::Ascending).is_empty());
        assert!(sort_by_date(Vec::new(), SortOrder::Descending).is_empty());
    }

    #[test]
    fn test_singleton_returned_unchanged() {
        let sorted = sort_by_date(
            vec![expense(9, Some("2023-05-20T10:30:00Z"))],
            SortOrder::Descending,
        );
        assert_eq!(ids(&sorted), vec![9]);
    }

    #[test]
    fn test_permutation_invariant() {
        let input = vec![
            expense(1, Some("2024-02-29T00:00:00Z")),
            expense(2, Some("1999-12-31T23:59:59Z")),
            expense(3, None),
            expense(4, Some("2023-05-20T10:30:00Z")),
            expense(5, Some("2023-05-20T10:30:00Z")),
        ];
        let mut expected = ids(&input);
        let mut actual = ids(&sort_by_date(input, SortOrder::Descending));
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_adjacent_keys_are_ordered() {
        let input = vec![
            expense(1, Some("2024-02-29T00:00:00Z")),
            expense(2, Some("1999-12-31T23:59:59Z")),
            expense(3, Some("2023-05-20T10:30:00Z")),
            expense(4, Some("2001-09-09T01:46:40Z")),
        ];
        let asc = sort_by_date(input.clone(), SortOrder::Ascending);
        for pair in asc.windows(2) {
            assert!(pair[0].sort_key_ms() <= pair[1].sort_key_ms());
        }
        let desc = sort_by_date(input, SortOrder::Descending);
        for pair in desc.windows(2) {
            assert!(pair[0].sort_key_ms() >= pair[1].sort_key_ms());
        }
    }

    #[test]
    fn test_equal_keys_keep_input_order_ascending() {
        let input = vec![
            expense(1, Some("2023-05-20T10:30:00Z")),
            expense(2, Some("2023-05-20T10:30:00Z")),
            expense(3, Some("2023-05-20T08:15:00Z")),
            expense(4, Some("2023-05-20T10:30:00Z")),
        ];
        let sorted = sort_by_date(input, SortOrder::Ascending);
        assert_eq!(ids(&sorted), vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_equal_keys_keep_input_order_descending() {
        let input = vec![
            expense(1, Some("2023-05-20T10:30:00Z")),
            expense(2, Some("2023-05-20T10:30:00Z")),
            expense(3, Some("2023-05-20T08:15:00Z")),
            expense(4, Some("2023-05-20T10:30:00Z")),
        ];
        let sorted = sort_by_date(input, SortOrder::Descending);
        assert_eq!(ids(&sorted), vec![1, 2, 4, 3]);
    }

    #[test]
    fn test_all_equal_keys_preserve_order_both_directions() {
        let input: Vec<Expense> = (1..=5)
            .map(|id| expense(id, Some("2023-05-20T10:30:00Z")))
            .collect();
        let asc = sort_by_date(input.clone(), SortOrder::Ascending);
        assert_eq!(ids(&asc), vec![1, 2, 3, 4, 5]);
        let desc = sort_by_date(input, SortOrder::Descending);
        assert_eq!(ids(&desc), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let once = sort_by_date(same_day_records(), SortOrder::Ascending);
        let twice = sort_by_date(once.clone(), SortOrder::Ascending);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn test_invalid_timestamps_group_at_oldest_end() {
        let input = vec![
            expense(1, Some("2023-05-20T10:30:00Z")),
            expense(2, Some("not a date")),
            expense(3, None),
            expense(4, Some("2023-05-19T10:30:00Z")),
        ];
        let asc = sort_by_date(input.clone(), SortOrder::Ascending);
        assert_eq!(ids(&asc), vec![2, 3, 4, 1]);
        let desc = sort_by_date(input, SortOrder::Descending);
        assert_eq!(ids(&desc), vec![1, 4, 2, 3]);
    }

    #[test]
    fn test_all_invalid_timestamps_preserve_input_order() {
        let input = vec![expense(1, None), expense(2, None), expense(3, None)];
        // Every key is 0, so the pass loop never runs.
        let sorted = sort_by_date(input, SortOrder::Descending);
        assert_eq!(ids(&sorted), vec![1, 2, 3]);
    }

    #[test]
    fn test_generic_key_sort_on_plain_integers() {
        let sorted = sort_by_key_ms(vec![8i64, 15, 3, 10, 2], SortOrder::Ascending, |v| *v);
        assert_eq!(sorted, vec![2, 3, 8, 10, 15]);
        let sorted = sort_by_key_ms(vec![8i64, 15, 3, 10, 2], SortOrder::Descending, |v| *v);
        assert_eq!(sorted, vec![15, 10, 8, 3, 2]);
    }
}
