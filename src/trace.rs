//! Internal logging hook.
//!
//! Expands to a `tracing::trace!` event when the `tracing` feature is on and
//! to nothing otherwise. Arguments must not be the only use of a binding.

macro_rules! trace_event {
    ($($argument:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($argument)*);
    };
}

pub(crate) use trace_event;
