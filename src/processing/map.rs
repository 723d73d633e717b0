//! Element transformation into a new collection.

/// Returns a new `Vec` created by applying `mapper` to every element.
///
/// The output has the same length as the input and the same order. The input
/// collection is never mutated.
pub fn map<T, U, F>(collection: &[T], mut mapper: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    let mut result = Vec::with_capacity(collection.len());
    for item in collection {
        result.push(mapper(item));
    }
    result
}
