//! # fnkit
//!
//! Small generic helpers for folding sequences and composing function values.
//!
//! ## Overview
//!
//! - **Sequence**: [`reduce`](sequence::reduce), [`map`](sequence::map),
//!   [`filter`](sequence::filter), [`reverse`](sequence::reverse) and their
//!   short-circuiting `try_*` forms
//! - **Composition**: [`decorate`](compose::decorate),
//!   [`reversed_decorate`](compose::reversed_decorate) and
//!   [`apply_options`](compose::apply_options), plus variadic macro forms
//!
//! Every helper is a single left-to-right pass over caller-supplied data.
//! Nothing is cached and no state outlives a call.
//!
//! ## Feature Flags
//!
//! - `sequence`: fold, map, filter and reverse
//! - `compose`: decoration and option helpers (enables `sequence`)
//! - `tracing`: emit `TRACE` level events from traversals
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(feature = "sequence")]
//! # {
//! use fnkit::sequence::{filter, map, reduce};
//!
//! let total = reduce(0, [1, 2, 3, 4, 5], |accumulator, element| accumulator + element);
//! assert_eq!(total, 15);
//!
//! let odd = filter([1, 2, 3, 4, 5], |element| element % 2 == 1);
//! assert_eq!(map(odd, |element| element * 10), vec![10, 30, 50]);
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every helper enabled by the active features.
///
/// # Usage
///
/// ```rust
/// use fnkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "sequence")]
mod trace;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "compose")]
pub mod compose;
