//! Function forms of the type-changing adapters.
//!
//! Each delegates to the method of the same name on [`Optional`]. The
//! function form is useful where a plain `fn` value is wanted, or where the
//! input and output types read more clearly spelled out at the call site.

use crate::Optional;

/// See [`Optional::map`].
#[inline]
pub fn map<T, U>(optional: Optional<T>, transform: impl FnOnce(T) -> U) -> Optional<U> {
    optional.map(transform)
}

/// See [`Optional::map_fallible`].
#[inline]
pub fn map_fallible<T, U, E>(
    optional: Optional<T>,
    transform: impl FnOnce(T) -> Result<U, E>,
) -> Result<Optional<U>, E> {
    optional.map_fallible(transform)
}

/// See [`Optional::map_or_else`].
#[inline]
pub fn map_or_else<T, U>(optional: Optional<T>, default: U, transform: impl FnOnce(T) -> U) -> U {
    optional.map_or_else(default, transform)
}

/// See [`Optional::map_or_else_fallible`].
#[inline]
pub fn map_or_else_fallible<T, U, E>(
    optional: Optional<T>,
    default: U,
    transform: impl FnOnce(T) -> Result<U, E>,
) -> Result<U, E> {
    optional.map_or_else_fallible(default, transform)
}
