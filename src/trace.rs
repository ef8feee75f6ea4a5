//! Feature-gated instrumentation.
//!
//! With the `tracing` feature the macros below forward to `tracing`; without
//! it they expand to nothing, so call sites never need `#[cfg]` guards.

/// Opens a debug-level span around one pipeline stage.
#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::debug_span!($name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::NoopSpan
    };
}

/// Emits an event at the given level with structured fields and a message.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($level:ident, $($key:ident = $value:expr),* ; $($msg:tt)+) => {
        tracing::$level!($($key = $value,)* $($msg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($level:ident, $($key:ident = $value:expr),* ; $($msg:tt)+) => {
        let _ = ($(&$value,)*);
    };
}

pub(crate) use trace_event;
pub(crate) use trace_span;

/// Stand-in for `tracing::Span` when the feature is disabled.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
