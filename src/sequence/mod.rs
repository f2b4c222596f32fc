//! Folding and reshaping of homogeneous sequences.
//!
//! Everything here is built on a single left fold:
//!
//! - [`reduce`]: Fold a sequence into an accumulator, left to right
//! - [`map`]: Transform every element into a new `Vec`
//! - [`filter`]: Keep the elements that satisfy a predicate
//! - [`reverse`]: Reverse a slice in place and hand it back
//!
//! Each fold has a short-circuiting counterpart ([`try_reduce`], [`try_map`],
//! [`try_filter`]) for callbacks that return [`Result`]. The first `Err`
//! stops the traversal and is returned unchanged; whatever was built so far
//! is dropped.
//!
//! # Examples
//!
//! ```
//! use fnkit::sequence::{filter, map, reduce, reverse};
//!
//! let sum = reduce(0, [1, 2, 3, 4, 5], |accumulator, element| accumulator + element);
//! assert_eq!(sum, 15);
//!
//! let concatenated = reduce(String::new(), ["a", "b", "c"], |accumulator, element| {
//!     accumulator + element
//! });
//! assert_eq!(concatenated, "abc");
//!
//! assert_eq!(map([1, 2, 3], |element| element * 2), vec![2, 4, 6]);
//! assert_eq!(filter([1, 2, 3, 4, 5], |element| element % 2 == 1), vec![1, 3, 5]);
//!
//! let mut values = [1, 2, 3, 4, 5];
//! assert_eq!(reverse(&mut values), &[5, 4, 3, 2, 1]);
//! ```
//!
//! # Laws
//!
//! - **Empty fold**: `reduce(z, [], f) == z`
//! - **Map identity**: `map(s, identity) == s`
//! - **Map length**: `map(s, f).len() == s.len()`
//! - **Filter bounds**: `filter(s, |_| true) == s`, `filter(s, |_| false) == []`
//! - **Double reverse**: `reverse(reverse(s)) == s`

mod fold;
mod reverse;
mod transform;

pub use fold::{reduce, try_reduce};
pub use reverse::reverse;
pub use transform::{filter, map, try_filter, try_map};
