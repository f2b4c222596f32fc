//! Left folds over any [`IntoIterator`].

use crate::trace::trace_event;

/// Folds `items` into `initial` from left to right.
///
/// The reducer is applied once per element in sequence order, each result
/// becoming the accumulator for the next step:
///
/// ```text
/// reduce(z, [e1, e2, ..., en], f) == f(f(f(z, e1), e2)..., en)
/// reduce(z, [], f) == z
/// ```
///
/// `reduce` never fails on its own. A panic inside `reducer` unwinds through
/// it unchanged.
///
/// # Type Parameters
///
/// * `T` - The element type
/// * `R` - The accumulator type
/// * `I` - Any sequence yielding `T`
/// * `F` - The combining function
///
/// # Arguments
///
/// * `initial` - The starting accumulator, returned as-is for an empty sequence
/// * `items` - The elements to fold, consumed in order
/// * `reducer` - Combines the accumulator with the next element
///
/// # Examples
///
/// ```
/// use fnkit::sequence::reduce;
///
/// let sum = reduce(0, vec![1, 2, 3], |accumulator, element| accumulator + element);
/// assert_eq!(sum, 6);
///
/// // Borrowed sequences fold over references.
/// let words = vec!["fold", "ed"];
/// let joined = reduce(String::new(), &words, |accumulator, word| accumulator + *word);
/// assert_eq!(joined, "folded");
/// assert_eq!(words.len(), 2);
///
/// // The empty fold returns the initial value.
/// let untouched = reduce(7, Vec::<i32>::new(), |_, _| unreachable!());
/// assert_eq!(untouched, 7);
/// ```
#[inline]
pub fn reduce<T, R, I, F>(initial: R, items: I, reducer: F) -> R
where
    I: IntoIterator<Item = T>,
    F: FnMut(R, T) -> R,
{
    let iterator = items.into_iter();
    trace_event!(
        target: "fnkit::sequence",
        lower_bound = iterator.size_hint().0,
        "reduce"
    );
    iterator.fold(initial, reducer)
}

/// Folds `items` into `initial`, stopping at the first error.
///
/// Behaves like [`reduce`] while the reducer returns `Ok`. The first `Err`
/// ends the traversal: no later element is visited and the error is
/// returned exactly as the reducer produced it.
///
/// # Examples
///
/// ```
/// use fnkit::sequence::try_reduce;
///
/// let checked_sum = |values: &[u8]| {
///     try_reduce(0u8, values.iter().copied(), |accumulator, element| {
///         accumulator.checked_add(element).ok_or("overflow")
///     })
/// };
///
/// assert_eq!(checked_sum(&[1, 2, 3]), Ok(6));
/// assert_eq!(checked_sum(&[200, 100, 1]), Err("overflow"));
/// ```
///
/// # Errors
///
/// Returns the first error produced by `reducer`.
#[inline]
pub fn try_reduce<T, R, E, I, F>(initial: R, items: I, reducer: F) -> Result<R, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(R, T) -> Result<R, E>,
{
    let mut iterator = items.into_iter();
    trace_event!(
        target: "fnkit::sequence",
        lower_bound = iterator.size_hint().0,
        "try_reduce"
    );
    iterator.try_fold(initial, reducer)
}
