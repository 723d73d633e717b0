//! Left folds over in-memory collections.

use crate::error::{ProcessingError, ProcessingResult};

/// Folds `collection` left-to-right into a caller-supplied accumulator.
///
/// `callback` receives `(accumulator, item, index, collection)` once per
/// element in ascending index order and must return the accumulator for the
/// next step; the final accumulator is returned.
pub fn reduce<T, A, F>(collection: &[T], accumulator: A, mut callback: F) -> A
where
    F: FnMut(A, &T, usize, &[T]) -> A,
{
    let mut acc = accumulator;
    for (idx, item) in collection.iter().enumerate() {
        acc = callback(acc, item, idx, collection);
    }
    acc
}

/// Folds `collection` left-to-right, seeding the accumulator with a clone of
/// the first element.
///
/// The seed element is still passed to `callback` at index 0, so on a
/// single-element collection `[x]` the result is `callback(x, &x, 0, ..)`.
/// Callers that want the conventional skip-the-seed fold should use [`reduce`]
/// with an explicit accumulator instead.
///
/// Returns [`ProcessingError::EmptyCollection`] on an empty collection.
pub fn reduce_from_first<T, F>(collection: &[T], mut callback: F) -> ProcessingResult<T>
where
    T: Clone,
    F: FnMut(T, &T, usize, &[T]) -> T,
{
    let Some(first) = collection.first() else {
        return Err(ProcessingError::EmptyCollection {
            operation: "reduce_from_first",
        });
    };

    let mut acc = first.clone();
    for (idx, item) in collection.iter().enumerate() {
        acc = callback(acc, item, idx, collection);
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::{reduce, reduce_from_first};
    use crate::error::ProcessingError;

    #[test]
    fn reduce_builds_a_scaled_collection() {
        let numbers = vec![1, 2, 3, 4];

        let out = reduce(&numbers, Vec::new(), |mut acc, n, _idx, _all| {
            acc.push(n * 10);
            acc
        });

        assert_eq!(out, vec![10, 20, 30, 40]);
    }

    #[test]
    fn reduce_visits_elements_in_ascending_order() {
        let numbers = vec![7, 8, 9];

        let indexes = reduce(&numbers, Vec::new(), |mut acc, _n, idx, all| {
            assert_eq!(all.len(), 3);
            acc.push(idx);
            acc
        });

        assert_eq!(indexes, vec![0, 1, 2]);
    }

    #[test]
    fn reduce_of_empty_collection_returns_the_accumulator() {
        let empty: Vec<i64> = Vec::new();
        let out = reduce(&empty, 42, |acc, _n, _idx, _all| acc + 1);
        assert_eq!(out, 42);
    }

    #[test]
    fn reduce_from_first_on_single_element_folds_the_seed_again() {
        // The seed is the first element and index 0 is still folded, so a
        // single-element collection produces callback(x, &x, 0, ..).
        let single = vec![3];
        let out = reduce_from_first(&single, |acc, n, _idx, _all| acc + n).unwrap();
        assert_eq!(out, 6);
    }

    #[test]
    fn reduce_from_first_folds_index_zero_against_the_seed() {
        let numbers = vec![1, 2, 3];
        // 1 (seed) + 1 + 2 + 3
        let out = reduce_from_first(&numbers, |acc, n, _idx, _all| acc + n).unwrap();
        assert_eq!(out, 7);
    }

    #[test]
    fn reduce_from_first_fails_fast_on_empty_collection() {
        let empty: Vec<i64> = Vec::new();
        let err = reduce_from_first(&empty, |acc, n, _idx, _all| acc + n).unwrap_err();
        assert!(matches!(err, ProcessingError::EmptyCollection { .. }));
        assert!(err.to_string().contains("non-empty collection"));
    }
}
