//! Applying option callbacks to a shared configuration target.

use crate::sequence::{reduce, try_reduce};

/// A boxed option: mutates the target it is given and returns nothing.
///
/// Useful for collecting options built by different functions in one `Vec`.
pub type OptionFn<'a, T> = Box<dyn FnOnce(&mut T) + 'a>;

static_assertions::assert_not_impl_any!(OptionFn<'static, ()>: Send, Sync);

/// Invokes every option on `target`, in sequence order.
///
/// The target keeps its identity for the whole call; only its state changes.
/// Nothing is returned: effects are observed through `target` afterwards.
/// When two options write the same field, the later one wins.
///
/// # Examples
///
/// ```
/// use fnkit::compose::{OptionFn, apply_options};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Server {
///     port: u16,
///     host: String,
/// }
///
/// fn with_port<'a>(port: u16) -> OptionFn<'a, Server> {
///     Box::new(move |server: &mut Server| server.port = port)
/// }
///
/// fn with_host<'a>(host: &'a str) -> OptionFn<'a, Server> {
///     Box::new(move |server: &mut Server| server.host = host.to_string())
/// }
///
/// let mut server = Server::default();
/// apply_options(&mut server, vec![with_port(8080), with_host("localhost")]);
///
/// assert_eq!(server, Server { port: 8080, host: "localhost".to_string() });
/// ```
pub fn apply_options<T, O, I>(target: &mut T, options: I)
where
    I: IntoIterator<Item = O>,
    O: FnOnce(&mut T),
{
    reduce(target, options, |target, option| {
        option(&mut *target);
        target
    });
}

/// Invokes every option on `target`, stopping at the first failure.
///
/// Options that ran before the failure keep their effect on `target`.
///
/// # Examples
///
/// ```
/// use fnkit::compose::try_apply_options;
///
/// let mut limits: Vec<u32> = Vec::new();
/// let push = |limit: u32| {
///     move |limits: &mut Vec<u32>| {
///         if limit == 0 {
///             return Err("limit must be positive");
///         }
///         limits.push(limit);
///         Ok(())
///     }
/// };
///
/// let result = try_apply_options(&mut limits, [push(10), push(0), push(30)]);
/// assert_eq!(result, Err("limit must be positive"));
/// assert_eq!(limits, vec![10]);
/// ```
///
/// # Errors
///
/// Returns the first error produced by an option.
pub fn try_apply_options<T, E, O, I>(target: &mut T, options: I) -> Result<(), E>
where
    I: IntoIterator<Item = O>,
    O: FnOnce(&mut T) -> Result<(), E>,
{
    try_reduce(target, options, |target, option| {
        option(&mut *target)?;
        Ok(target)
    })?;
    Ok(())
}
