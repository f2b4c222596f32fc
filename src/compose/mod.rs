//! Function decoration and option application.
//!
//! This module wraps function values in layers of behavior and applies
//! configuration callbacks to a shared target, both as folds over the
//! supplied callables.
//!
//! # Overview
//!
//! - [`decorate`]: Wrap a function with decorators, first decorator innermost
//! - [`reversed_decorate`]: Same, with the first decorator outermost
//! - [`apply_options`]: Run option callbacks against a `&mut` target in order
//! - [`try_apply_options`]: Same, stopping at the first failing option
//!
//! The macros [`decorate!`], [`reversed_decorate!`] and [`apply_options!`]
//! take any number of callables of different types, which a `Vec` cannot
//! hold without boxing.
//!
//! # Examples
//!
//! ## Decoration
//!
//! ```
//! use fnkit::compose::{Decorator, decorate, reversed_decorate};
//!
//! type Render = Box<dyn Fn(&str) -> String>;
//!
//! fn tag(name: &'static str) -> Decorator<'static, Render> {
//!     Box::new(move |inner: Render| -> Render {
//!         Box::new(move |text: &str| format!("<{name}>{}</{name}>", inner(text)))
//!     })
//! }
//!
//! let plain: Render = Box::new(|text: &str| text.to_string());
//! let render = decorate(plain, vec![tag("b"), tag("i")]);
//! assert_eq!(render("hi"), "<i><b>hi</b></i>");
//!
//! let plain: Render = Box::new(|text: &str| text.to_string());
//! let render = reversed_decorate(plain, vec![tag("b"), tag("i")]);
//! assert_eq!(render("hi"), "<b><i>hi</i></b>");
//! ```
//!
//! ## Options
//!
//! ```
//! use fnkit::compose::apply_options;
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Config {
//!     retries: u32,
//! }
//!
//! fn with_retries(retries: u32) -> impl FnOnce(&mut Config) {
//!     move |config: &mut Config| config.retries = retries
//! }
//!
//! let mut config = Config::default();
//! apply_options(&mut config, [with_retries(1), with_retries(3)]);
//! assert_eq!(config.retries, 3);
//! ```
//!
//! # Laws
//!
//! - **Empty decoration**: `decorate(f, [])` behaves as `f`
//! - **Nesting**: `decorate(f, [g, h, i]) == i(h(g(f)))`
//! - **Reversal**: `reversed_decorate(f, [g, h, i]) == g(h(i(f)))`
//! - **Ordering**: `apply_options(t, [o1, o2])` runs `o1` before `o2`

mod decorate;
mod decorate_macro;
mod options;
mod options_macro;

pub use decorate::{Decorator, decorate, reversed_decorate};
pub use options::{OptionFn, apply_options, try_apply_options};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::apply_options;
pub use crate::decorate;
pub use crate::reversed_decorate;
