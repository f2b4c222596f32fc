use crate::trace::trace_event;

/// Reverses `items` in place and returns the same slice for chaining.
///
/// Two cursors start at both ends and swap their elements while moving
/// towards the middle, so a slice of length `n` sees exactly `n / 2` swaps.
/// Slices of length 0 or 1 are left as they are.
///
/// Unlike the other helpers in this module, this one mutates its argument.
///
/// # Examples
///
/// ```
/// use fnkit::sequence::reverse;
///
/// let mut values = vec![1, 2, 3, 4, 5];
/// assert_eq!(reverse(&mut values), &[5, 4, 3, 2, 1]);
/// assert_eq!(values, vec![5, 4, 3, 2, 1]);
///
/// // Chaining: the returned slice is the argument itself.
/// let mut letters = ['a', 'b', 'c'];
/// reverse(reverse(&mut letters));
/// assert_eq!(letters, ['a', 'b', 'c']);
/// ```
pub fn reverse<T>(items: &mut [T]) -> &mut [T] {
    trace_event!(
        target: "fnkit::sequence",
        length = items.len(),
        swaps = items.len() / 2,
        "reverse"
    );
    if let Some(mut back) = items.len().checked_sub(1) {
        let mut front = 0;
        while front < back {
            items.swap(front, back);
            front += 1;
            back -= 1;
        }
    }
    items
}
