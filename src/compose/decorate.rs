//! Folding decorators around a base function.

use crate::sequence::{reduce, reverse};
use crate::trace::trace_event;

/// A boxed decorator: takes a function value and returns a wrapped one.
///
/// Closures have distinct types, so a list of differently-built decorators
/// needs a common type. Any `FnOnce(F) -> F` fits in this box.
///
/// Boxed decorators are neither [`Send`] nor [`Sync`].
pub type Decorator<'a, F> = Box<dyn FnOnce(F) -> F + 'a>;

static_assertions::assert_not_impl_any!(Decorator<'static, fn()>: Send, Sync);

/// Wraps `function` with each decorator in turn, left to right.
///
/// Every decorator receives the result of the previous one, so the first
/// decorator ends up innermost:
///
/// ```text
/// decorate(f, [g, h, i]) == i(h(g(f)))
/// ```
///
/// With no decorators the function is returned unchanged. When every
/// decorator runs its own logic before and after delegating, calling the
/// result runs the entry hooks last-to-first and the exit hooks
/// first-to-last.
///
/// # Type Parameters
///
/// * `F` - The function type being decorated; every decorator maps `F` to `F`
/// * `D` - The decorator type
/// * `I` - Any sequence of decorators
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use fnkit::compose::{Decorator, decorate};
///
/// type Call = Box<dyn Fn()>;
///
/// fn traced(trace: &Rc<RefCell<Vec<i32>>>, id: i32) -> Decorator<'static, Call> {
///     let trace = Rc::clone(trace);
///     Box::new(move |inner: Call| -> Call {
///         Box::new(move || {
///             trace.borrow_mut().push(id);
///             inner();
///             trace.borrow_mut().push(id);
///         })
///     })
/// }
///
/// let trace = Rc::new(RefCell::new(Vec::new()));
/// let center = Rc::clone(&trace);
/// let base: Call = Box::new(move || center.borrow_mut().push(0));
///
/// let call = decorate(base, vec![traced(&trace, 1), traced(&trace, 2), traced(&trace, 3)]);
/// call();
///
/// assert_eq!(*trace.borrow(), vec![3, 2, 1, 0, 1, 2, 3]);
/// ```
#[inline]
pub fn decorate<F, D, I>(function: F, decorators: I) -> F
where
    I: IntoIterator<Item = D>,
    D: FnOnce(F) -> F,
{
    reduce(function, decorators, |inner, decorator| decorator(inner))
}

/// Wraps `function` with the decorators applied last to first.
///
/// ```text
/// reversed_decorate(f, [g, h, i]) == decorate(f, [i, h, g]) == g(h(i(f)))
/// ```
///
/// The decorators are taken by value and reversed in place with
/// [`reverse`], so the caller's own sequence is never observed in reversed
/// order.
///
/// # Examples
///
/// ```
/// use fnkit::compose::{Decorator, reversed_decorate};
///
/// type Greeting = Box<dyn Fn() -> String>;
///
/// fn suffix(text: &'static str) -> Decorator<'static, Greeting> {
///     Box::new(move |inner: Greeting| -> Greeting { Box::new(move || inner() + text) })
/// }
///
/// let base: Greeting = Box::new(|| String::from("hello"));
/// let greeting = reversed_decorate(base, vec![suffix("!"), suffix(" world")]);
/// assert_eq!(greeting(), "hello world!");
/// ```
pub fn reversed_decorate<F, D>(function: F, mut decorators: Vec<D>) -> F
where
    D: FnOnce(F) -> F,
{
    trace_event!(
        target: "fnkit::compose",
        decorators = decorators.len(),
        "reversed_decorate"
    );
    reverse(&mut decorators);
    decorate(function, decorators)
}
