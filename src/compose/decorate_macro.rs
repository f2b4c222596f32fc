//! The `decorate!` and `reversed_decorate!` macros.
//!
//! Function forms need every decorator to share one type. These macros
//! expand to nested calls instead, so each layer may be a different closure
//! or a generic function, and each may return a different function type.

/// Wraps a function with decorators, first decorator innermost.
///
/// `decorate!(f, g, h, i)` is equivalent to `i(h(g(f)))`, matching
/// [`decorate`](crate::compose::decorate) without requiring a common
/// decorator type.
///
/// # Syntax
///
/// - `decorate!(f)` - Returns `f` unchanged
/// - `decorate!(f, g)` - Returns `g(f)`
/// - `decorate!(f, g, h, ...)` - Returns `...h(g(f))`
///
/// # Examples
///
/// ```
/// use fnkit::decorate;
///
/// fn add_one(inner: impl Fn(i32) -> i32) -> impl Fn(i32) -> i32 {
///     move |x: i32| inner(x) + 1
/// }
///
/// fn double(inner: impl Fn(i32) -> i32) -> impl Fn(i32) -> i32 {
///     move |x: i32| inner(x) * 2
/// }
///
/// let base = |x: i32| x;
/// // double(add_one(base)): (x + 1) * 2
/// let wrapped = decorate!(base, add_one, double);
/// assert_eq!(wrapped(4), 10);
/// ```
#[macro_export]
macro_rules! decorate {
    // Function only: nothing to wrap
    ($function:expr) => {
        $function
    };

    // Single decorator: apply it
    ($function:expr, $decorator:expr $(,)?) => {
        ($decorator)($function)
    };

    // Multiple decorators: wrap with the first, then recurse
    ($function:expr, $decorator:expr, $($remaining_decorators:expr),+ $(,)?) => {
        $crate::decorate!(($decorator)($function), $($remaining_decorators),+)
    };
}

/// Wraps a function with decorators, first decorator outermost.
///
/// `reversed_decorate!(f, g, h, i)` is equivalent to `g(h(i(f)))`, matching
/// [`reversed_decorate`](crate::compose::reversed_decorate).
///
/// # Examples
///
/// ```
/// use fnkit::reversed_decorate;
///
/// fn exclaim(inner: impl Fn(&str) -> String) -> impl Fn(&str) -> String {
///     move |text: &str| inner(text) + "!"
/// }
///
/// fn shout(inner: impl Fn(&str) -> String) -> impl Fn(&str) -> String {
///     move |text: &str| inner(text).to_uppercase()
/// }
///
/// let base = |text: &str| text.to_string();
/// // shout(exclaim(base))
/// let wrapped = reversed_decorate!(base, shout, exclaim);
/// assert_eq!(wrapped("hey"), "HEY!");
/// ```
#[macro_export]
macro_rules! reversed_decorate {
    ($function:expr) => {
        $function
    };

    ($function:expr, $decorator:expr $(,)?) => {
        ($decorator)($function)
    };

    // The first decorator wraps everything the rest produce
    ($function:expr, $decorator:expr, $($remaining_decorators:expr),+ $(,)?) => {
        ($decorator)($crate::reversed_decorate!($function, $($remaining_decorators),+))
    };
}
