use thiserror::Error;

/// Error returned by [`get`](crate::Optional::get) on an empty container.
///
/// A unit sentinel rather than an opaque failure: callers match on it
/// directly instead of inspecting a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("value is absent")]
pub struct ValueAbsent;
