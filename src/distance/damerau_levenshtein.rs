//! Damerau-Levenshtein distance
//!
//! The Damerau-Levenshtein distance is the minimum number of insertions, deletions,
//! substitutions and transpositions of two adjacent characters required to change
//! one sequence into the other. Unlike the Optimal String Alignment distance a
//! substring may be edited again after it was transposed, so `"ca"` -> `"abc"`
//! has a distance of 2 (`"ca"` -> `"ac"` -> `"abc"`).
//!
//! ```
//! use damerau_similarity::distance::damerau_levenshtein;
//!
//! assert_eq!(1, damerau_levenshtein::distance("ab".chars(), "ba".chars()));
//! assert_eq!(2, damerau_levenshtein::distance("ca".chars(), "abc".chars()));
//!
//! // ascii only input can be compared as bytes
//! assert_eq!(3, damerau_levenshtein::distance("kitten".bytes(), "sitting".bytes()));
//! ```

use crate::common::{DistanceCutoff, NoScoreCutoff, SimilarityCutoff, WithScoreCutoff};
use crate::details::growing_hashmap::HybridGrowingHashmap;
use crate::details::matrix::Matrix;
use crate::HashableChar;
use std::cmp::{max, min};

#[must_use]
#[derive(Clone, Copy, Debug)]
pub struct Args<CutoffType> {
    score_cutoff: CutoffType,
}

impl Default for Args<NoScoreCutoff> {
    fn default() -> Args<NoScoreCutoff> {
        Args {
            score_cutoff: NoScoreCutoff,
        }
    }
}

impl<CutoffType> Args<CutoffType> {
    /// Results worse than `score_cutoff` are reported as `None`.
    ///
    /// The cutoff is inclusive: a distance equal to it, or a normalized
    /// similarity equal to it, is still returned.
    pub fn score_cutoff<T>(self, score_cutoff: T) -> Args<WithScoreCutoff<T>> {
        Args {
            score_cutoff: WithScoreCutoff(score_cutoff),
        }
    }
}

/// based on the algorithm from
/// "An Extension of the String-to-String Correction Problem"
/// from Roy Lowrance and Robert A. Wagner
///
/// `score` is a (len1 + 2) x (len2 + 2) matrix where cell (i + 1, j + 1) holds
/// the distance between the first i elements of s1 and the first j elements of s2.
/// Row 0 and column 0 are filled with a value larger than any reachable distance,
/// so transpositions with a partner that was never seen can't win.
fn damerau_levenshtein_distance_impl<Iter1, Iter2, Elem1, Elem2>(
    s1: Iter1,
    len1: usize,
    s2: Iter2,
    len2: usize,
) -> usize
where
    Iter1: Iterator<Item = Elem1>,
    Iter2: Iterator<Item = Elem2> + Clone,
    Elem1: PartialEq<Elem2> + HashableChar + Copy,
    Elem2: PartialEq<Elem1> + HashableChar + Copy,
{
    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let infinity = len1 + len2;
    let mut score = Matrix::new(len1 + 2, len2 + 2, infinity);
    for i in 0..=len1 {
        score[(i + 1, 1)] = i;
    }
    for j in 0..=len2 {
        score[(1, j + 1)] = j;
    }

    // last row in which each element of s1 occurred. 0 means not seen yet
    let mut last_row_id = HybridGrowingHashmap::<usize>::new();

    for (i, ch1) in s1.enumerate().map(|(i, ch1)| (i + 1, ch1)) {
        // last column in this row where ch1 matched
        let mut last_col_id = 0;

        for (j, ch2) in s2.clone().enumerate().map(|(j, ch2)| (j + 1, ch2)) {
            let k = last_row_id.get(ch2);
            let l = last_col_id;

            let temp = if ch1 == ch2 {
                last_col_id = j;
                score[(i, j)]
            } else {
                min(score[(i, j)], min(score[(i + 1, j)], score[(i, j + 1)])) + 1
            };

            // k < i and l < j always hold
            let transpose = score[(k, l)] + (i - k - 1) + 1 + (j - l - 1);
            score[(i + 1, j + 1)] = min(temp, transpose);
        }

        *last_row_id.get_mut(ch1) = i;
    }

    score[(score.rows() - 1, score.cols() - 1)]
}

fn maximum(len1: usize, len2: usize) -> usize {
    max(len1, len2)
}

fn normalize(dist: usize, maximum: usize) -> f64 {
    if maximum == 0 {
        0.0
    } else {
        dist as f64 / maximum as f64
    }
}

/// Damerau-Levenshtein distance between two sequences
///
/// # Example
/// ```
/// use damerau_similarity::distance::damerau_levenshtein;
///
/// assert_eq!(6, damerau_levenshtein::distance("abcdefgh".chars(), "abijklmn".chars()));
/// assert_eq!(0, damerau_levenshtein::distance("".chars(), "".chars()));
/// ```
pub fn distance<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> usize
where
    Iter1: IntoIterator,
    Iter1::IntoIter: Clone,
    Iter2: IntoIterator,
    Iter2::IntoIter: Clone,
    Iter1::Item: PartialEq<Iter2::Item> + HashableChar + Copy,
    Iter2::Item: PartialEq<Iter1::Item> + HashableChar + Copy,
{
    distance_with_args(s1, s2, &Args::default())
}

/// Damerau-Levenshtein distance, or `None` if it is larger than the score cutoff
///
/// # Example
/// ```
/// use damerau_similarity::distance::damerau_levenshtein::{self, Args};
///
/// let args = Args::default().score_cutoff(2);
/// assert_eq!(None, damerau_levenshtein::distance_with_args("kitten".chars(), "sitting".chars(), &args));
/// assert_eq!(Some(1), damerau_levenshtein::distance_with_args("ab".chars(), "ba".chars(), &args));
/// ```
pub fn distance_with_args<Iter1, Iter2, CutoffType>(
    s1: Iter1,
    s2: Iter2,
    args: &Args<CutoffType>,
) -> CutoffType::Output
where
    Iter1: IntoIterator,
    Iter1::IntoIter: Clone,
    Iter2: IntoIterator,
    Iter2::IntoIter: Clone,
    Iter1::Item: PartialEq<Iter2::Item> + HashableChar + Copy,
    Iter2::Item: PartialEq<Iter1::Item> + HashableChar + Copy,
    CutoffType: DistanceCutoff<usize>,
{
    let s1_iter = s1.into_iter();
    let s2_iter = s2.into_iter();
    let len1 = s1_iter.clone().count();
    let len2 = s2_iter.clone().count();
    args.score_cutoff
        .score(damerau_levenshtein_distance_impl(s1_iter, len1, s2_iter, len2))
}

/// Number of elements that did not need to be edited: `max(len1, len2) - distance`
pub fn similarity<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> usize
where
    Iter1: IntoIterator,
    Iter1::IntoIter: Clone,
    Iter2: IntoIterator,
    Iter2::IntoIter: Clone,
    Iter1::Item: PartialEq<Iter2::Item> + HashableChar + Copy,
    Iter2::Item: PartialEq<Iter1::Item> + HashableChar + Copy,
{
    let s1_iter = s1.into_iter();
    let s2_iter = s2.into_iter();
    let len1 = s1_iter.clone().count();
    let len2 = s2_iter.clone().count();
    maximum(len1, len2) - damerau_levenshtein_distance_impl(s1_iter, len1, s2_iter, len2)
}

/// Distance normalized into the range `0.0 ..= 1.0` by the length of the longer sequence
pub fn normalized_distance<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter1::IntoIter: Clone,
    Iter2: IntoIterator,
    Iter2::IntoIter: Clone,
    Iter1::Item: PartialEq<Iter2::Item> + HashableChar + Copy,
    Iter2::Item: PartialEq<Iter1::Item> + HashableChar + Copy,
{
    let s1_iter = s1.into_iter();
    let s2_iter = s2.into_iter();
    let len1 = s1_iter.clone().count();
    let len2 = s2_iter.clone().count();
    normalize(
        damerau_levenshtein_distance_impl(s1_iter, len1, s2_iter, len2),
        maximum(len1, len2),
    )
}

/// `1.0 - normalized_distance`. Two empty sequences are considered equal.
///
/// # Example
/// ```
/// use damerau_similarity::distance::damerau_levenshtein;
///
/// assert_eq!(0.75, damerau_levenshtein::normalized_similarity("abcdefgh".chars(), "abcdefij".chars()));
/// assert_eq!(1.0, damerau_levenshtein::normalized_similarity("".chars(), "".chars()));
/// ```
pub fn normalized_similarity<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter1::IntoIter: Clone,
    Iter2: IntoIterator,
    Iter2::IntoIter: Clone,
    Iter1::Item: PartialEq<Iter2::Item> + HashableChar + Copy,
    Iter2::Item: PartialEq<Iter1::Item> + HashableChar + Copy,
{
    normalized_similarity_with_args(s1, s2, &Args::default())
}

/// Normalized similarity, or `None` if it is below the score cutoff
pub fn normalized_similarity_with_args<Iter1, Iter2, CutoffType>(
    s1: Iter1,
    s2: Iter2,
    args: &Args<CutoffType>,
) -> CutoffType::Output
where
    Iter1: IntoIterator,
    Iter1::IntoIter: Clone,
    Iter2: IntoIterator,
    Iter2::IntoIter: Clone,
    Iter1::Item: PartialEq<Iter2::Item> + HashableChar + Copy,
    Iter2::Item: PartialEq<Iter1::Item> + HashableChar + Copy,
    CutoffType: SimilarityCutoff<f64>,
{
    args.score_cutoff.score(1.0 - normalized_distance(s1, s2))
}
