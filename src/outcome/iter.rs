//! Iteration over the content of an [`Outcome`].
use crate::outcome::core::Outcome;

/// Borrowing iterator over the content of a successful [`Outcome`].
///
/// Created by [`Outcome::iter`]. Yields one item for a success, none for a
/// failure.
pub struct Iter<'a, C> {
    inner: Option<&'a C>,
}

impl<'a, C> Iterator for Iter<'a, C> {
    type Item = &'a C;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<C> ExactSizeIterator for Iter<'_, C> {}

/// Owning iterator over the content of a successful [`Outcome`].
///
/// # Examples
///
/// ```
/// use validation_outcome::{Outcome, StatusCode};
///
/// let names: Vec<_> = Outcome::<_, &str>::success("ops").into_iter().collect();
/// assert_eq!(names, ["ops"]);
///
/// let none: Vec<&str> = Outcome::<_, &str>::error(StatusCode::NotFound, "gone").into_iter().collect();
/// assert!(none.is_empty());
/// ```
pub struct IntoIter<C> {
    inner: Option<C>,
}

impl<C> Iterator for IntoIter<C> {
    type Item = C;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<C> ExactSizeIterator for IntoIter<C> {}

impl<C, R> IntoIterator for Outcome<C, R> {
    type Item = C;
    type IntoIter = IntoIter<C>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.into_content() }
    }
}

impl<'a, C, R> IntoIterator for &'a Outcome<C, R> {
    type Item = &'a C;
    type IntoIter = Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<C, R> Outcome<C, R> {
    /// Iterates over the content: one item for a success, none for a failure.
    pub fn iter(&self) -> Iter<'_, C> {
        Iter { inner: self.content() }
    }
}

/// Collects a sequence of outcomes, stopping at the first failure.
///
/// Items after the first failure are not pulled from the iterator.
///
/// # Examples
///
/// ```
/// use validation_outcome::{Outcome, StatusCode};
///
/// let all: Outcome<Vec<i32>, &str> = vec![Outcome::success(1), Outcome::success(2)]
///     .into_iter()
///     .collect();
/// assert_eq!(all.into_content(), Some(vec![1, 2]));
///
/// let first_failure: Outcome<Vec<i32>, &str> = vec![
///     Outcome::success(1),
///     Outcome::error(StatusCode::NotFound, "missing"),
///     Outcome::error(StatusCode::Conflict, "taken"),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(first_failure.status(), StatusCode::NotFound);
/// ```
impl<C, R, V> FromIterator<Outcome<C, R>> for Outcome<V, R>
where
    V: FromIterator<C>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<C, R>>>(iter: I) -> Self {
        let mut rejected = None;
        let collected: V = iter
            .into_iter()
            .map_while(|outcome| match outcome {
                Outcome::Success(content) => Some(content),
                Outcome::Failure(rejection) => {
                    rejected = Some(rejection);
                    None
                }
            })
            .collect();

        match rejected {
            Some(rejection) => Outcome::Failure(rejection),
            None => Outcome::Success(collected),
        }
    }
}
