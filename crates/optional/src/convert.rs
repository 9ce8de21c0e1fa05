//! Interop with [`std::option::Option`] and iteration support.

use crate::Optional;

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Present(value) => Some(value),
            Optional::Empty => None,
        }
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    /// Iterates over the contained value: one item when present, none when
    /// empty.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Option::from(self).into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Option::from(self.as_ref()).into_iter()
    }
}
