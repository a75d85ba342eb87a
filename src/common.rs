//! Score cutoff markers used by the `Args` builders.
//!
//! Selecting a cutoff changes the result type of the `*_with_args` functions:
//! without a cutoff the raw score is returned, with a cutoff the score is
//! wrapped in an `Option` which is `None` whenever the cutoff is not reached.

use std::fmt::Debug;

/// No cutoff, results are returned unwrapped
#[derive(Default, Copy, Clone, Debug)]
pub struct NoScoreCutoff;

/// Cutoff value, results are returned as `Option`
#[derive(Default, Copy, Clone, Debug)]
pub struct WithScoreCutoff<T>(pub T);

/// cutoff for scores where lower is better, e.g. edit distances
pub trait DistanceCutoff<T>
where
    T: Copy,
{
    type Output: Copy + Into<Option<T>> + PartialEq + Debug;

    fn score(&self, raw: T) -> Self::Output;
}

impl<T> DistanceCutoff<T> for NoScoreCutoff
where
    T: Copy + PartialEq + Debug,
{
    type Output = T;

    fn score(&self, raw: T) -> Self::Output {
        raw
    }
}

impl<T> DistanceCutoff<T> for WithScoreCutoff<T>
where
    T: Copy + PartialOrd + Debug,
{
    type Output = Option<T>;

    fn score(&self, raw: T) -> Self::Output {
        (raw <= self.0).then_some(raw)
    }
}

/// cutoff for scores where higher is better, e.g. similarity ratios
pub trait SimilarityCutoff<T>
where
    T: Copy,
{
    type Output: Copy + Into<Option<T>> + PartialEq + Debug;

    fn score(&self, raw: T) -> Self::Output;
}

impl<T> SimilarityCutoff<T> for NoScoreCutoff
where
    T: Copy + PartialEq + Debug,
{
    type Output = T;

    fn score(&self, raw: T) -> Self::Output {
        raw
    }
}

impl<T> SimilarityCutoff<T> for WithScoreCutoff<T>
where
    T: Copy + PartialOrd + Debug,
{
    type Output = Option<T>;

    fn score(&self, raw: T) -> Self::Output {
        (raw >= self.0).then_some(raw)
    }
}
