//! The `apply_options!` macro.

/// Applies options of any type to a `&mut` target, left to right.
///
/// `apply_options!(target, o1, o2)` calls `o1(target)` then `o2(target)`,
/// matching [`apply_options`](crate::compose::apply_options) for options
/// that do not share one type.
///
/// # Examples
///
/// ```
/// use fnkit::apply_options;
///
/// #[derive(Debug, Default)]
/// struct Request {
///     timeout_ms: u64,
///     headers: Vec<(String, String)>,
/// }
///
/// let header = |name: &str, value: &str| {
///     let header = (name.to_string(), value.to_string());
///     move |request: &mut Request| request.headers.push(header)
/// };
///
/// let mut request = Request::default();
/// apply_options!(
///     &mut request,
///     |request: &mut Request| request.timeout_ms = 500,
///     header("accept", "text/plain"),
///     |request: &mut Request| request.timeout_ms *= 2,
/// );
///
/// assert_eq!(request.timeout_ms, 1000);
/// assert_eq!(request.headers, vec![("accept".to_string(), "text/plain".to_string())]);
/// ```
#[macro_export]
macro_rules! apply_options {
    // No options: the target is only borrowed
    ($target:expr $(,)?) => {{
        let _: &mut _ = $target;
    }};

    ($target:expr, $($option:expr),+ $(,)?) => {{
        let target: &mut _ = $target;
        $(
            ($option)(&mut *target);
        )+
    }};
}
