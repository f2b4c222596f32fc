//! Element-wise transformation and selection, both expressed as folds.

use super::fold::{reduce, try_reduce};

/// Applies `mapper` to every element, collecting the results in order.
///
/// The output has the same length as the input and
/// `output[i] == mapper(input[i])`. The input is never mutated: pass a
/// reference to keep it, or pass it by value to hand over its elements.
///
/// # Examples
///
/// ```
/// use fnkit::sequence::map;
///
/// assert_eq!(map([1, 2, 3], |element| element * 2), vec![2, 4, 6]);
///
/// let letters = vec!["a", "b", "c"];
/// let upper = map(&letters, |letter| letter.to_uppercase());
/// assert_eq!(upper, vec!["A", "B", "C"]);
/// assert_eq!(letters, vec!["a", "b", "c"]);
/// ```
pub fn map<T, R, I, F>(items: I, mut mapper: F) -> Vec<R>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> R,
{
    let iterator = items.into_iter();
    let capacity = iterator.size_hint().0;
    reduce(
        Vec::with_capacity(capacity),
        iterator,
        |mut accumulator, element| {
            accumulator.push(mapper(element));
            accumulator
        },
    )
}

/// Keeps the elements for which `predicate` returns `true`.
///
/// Relative order is preserved and rejected elements are dropped.
///
/// # Examples
///
/// ```
/// use fnkit::sequence::filter;
///
/// let odd = filter([1, 2, 3, 4, 5], |element| element % 2 == 1);
/// assert_eq!(odd, vec![1, 3, 5]);
///
/// let names = vec!["ada".to_string(), "grace".to_string(), "alan".to_string()];
/// let short = filter(&names, |name| name.len() <= 3);
/// assert_eq!(short, vec!["ada"]);
/// ```
pub fn filter<T, I, P>(items: I, mut predicate: P) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> bool,
{
    reduce(Vec::new(), items, |mut accumulator, element| {
        if predicate(&element) {
            accumulator.push(element);
        }
        accumulator
    })
}

/// Fallible [`map`]: stops at the first `Err` returned by `mapper`.
///
/// # Examples
///
/// ```
/// use fnkit::sequence::try_map;
///
/// let parsed: Result<Vec<i32>, _> = try_map(["1", "2", "3"], str::parse::<i32>);
/// assert_eq!(parsed, Ok(vec![1, 2, 3]));
///
/// let rejected: Result<Vec<i32>, _> = try_map(["1", "x", "3"], str::parse::<i32>);
/// assert!(rejected.is_err());
/// ```
///
/// # Errors
///
/// Returns the first error produced by `mapper`; the partially built output
/// is dropped.
pub fn try_map<T, R, E, I, F>(items: I, mut mapper: F) -> Result<Vec<R>, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Result<R, E>,
{
    let iterator = items.into_iter();
    let capacity = iterator.size_hint().0;
    try_reduce(
        Vec::with_capacity(capacity),
        iterator,
        |mut accumulator, element| {
            accumulator.push(mapper(element)?);
            Ok(accumulator)
        },
    )
}

/// Fallible [`filter`]: stops at the first `Err` returned by `predicate`.
///
/// # Errors
///
/// Returns the first error produced by `predicate`.
pub fn try_filter<T, E, I, P>(items: I, mut predicate: P) -> Result<Vec<T>, E>
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> Result<bool, E>,
{
    try_reduce(Vec::new(), items, |mut accumulator, element| {
        if predicate(&element)? {
            accumulator.push(element);
        }
        Ok(accumulator)
    })
}
