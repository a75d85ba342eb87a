//! Similarity of two strings based on the Damerau-Levenshtein distance
//!
//! The functions in this module work on whole strings. Both inputs are validated
//! first: an absent (`None`), empty or whitespace only input is rejected with
//! [`SimilarityError::InvalidInput`]. Unless case sensitivity is requested both
//! strings are lower cased before they are compared.
//!
//! ```
//! use damerau_similarity::similarity;
//!
//! assert_eq!(Ok(1.0), similarity::similarity("ABCDEFGH", "abcdefgh", false));
//! assert_eq!(Ok(0.0), similarity::similarity("ABCDEFGH", "abcdefgh", true));
//! assert_eq!(Ok(75.0), similarity::similarity_percentage("abcdefgh", "abcdefij", false));
//! assert!(similarity::similarity(" ", "abcdefgh", false).is_err());
//! ```

use crate::common::{NoScoreCutoff, SimilarityCutoff, WithScoreCutoff};
use crate::details::common::{fold_case, is_blank};
use crate::distance::damerau_levenshtein;
use crate::error::SimilarityError;
use std::borrow::Cow;

#[must_use]
#[derive(Clone, Copy, Debug)]
pub struct Args<CutoffType> {
    case_sensitive: bool,
    score_cutoff: CutoffType,
}

impl Default for Args<NoScoreCutoff> {
    fn default() -> Args<NoScoreCutoff> {
        Args {
            case_sensitive: false,
            score_cutoff: NoScoreCutoff,
        }
    }
}

impl<CutoffType> Args<CutoffType> {
    /// Compare the strings as they are instead of lower casing them first
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Scores below `score_cutoff` are reported as `None`. For the percentage
    /// functions the cutoff is given in percent as well.
    pub fn score_cutoff(self, score_cutoff: f64) -> Args<WithScoreCutoff<f64>> {
        Args {
            case_sensitive: self.case_sensitive,
            score_cutoff: WithScoreCutoff(score_cutoff),
        }
    }
}

/// validate both inputs and fold them to lower case if requested
fn preprocess<'a, 'b>(
    source: Option<&'a str>,
    target: Option<&'b str>,
    case_sensitive: bool,
) -> Result<(Cow<'a, str>, Cow<'b, str>), SimilarityError> {
    let (source, target) = match (source, target) {
        (Some(source), Some(target)) if !is_blank(source) && !is_blank(target) => (source, target),
        _ => return Err(SimilarityError::InvalidInput),
    };

    if case_sensitive {
        Ok((Cow::Borrowed(source), Cow::Borrowed(target)))
    } else {
        Ok((Cow::Owned(fold_case(source)), Cow::Owned(fold_case(target))))
    }
}

/// Damerau-Levenshtein distance between two strings
///
/// # Errors
/// [`SimilarityError::InvalidInput`] if `source` or `target` is absent, empty or whitespace only
///
/// # Example
/// ```
/// use damerau_similarity::similarity;
///
/// assert_eq!(Ok(1), similarity::distance("Ab", "ba", false));
/// assert_eq!(Ok(2), similarity::distance("Ab", "ba", true));
/// ```
pub fn distance<'a, 'b, S1, S2>(
    source: S1,
    target: S2,
    case_sensitive: bool,
) -> Result<usize, SimilarityError>
where
    S1: Into<Option<&'a str>>,
    S2: Into<Option<&'b str>>,
{
    let (source, target) = preprocess(source.into(), target.into(), case_sensitive)?;
    Ok(damerau_levenshtein::distance(source.chars(), target.chars()))
}

/// Similarity of two strings in the range `0.0 ..= 1.0`
///
/// Calculated as `1 - distance / max(len1, len2)`, where lengths are counted in chars.
///
/// # Errors
/// [`SimilarityError::InvalidInput`] if `source` or `target` is absent, empty or whitespace only
///
/// # Example
/// ```
/// use damerau_similarity::similarity;
///
/// assert_eq!(Ok(0.25), similarity::similarity("abcdefgh", "abijklmn", false));
/// assert!(similarity::similarity(None::<&str>, "abcdefgh", false).is_err());
/// ```
pub fn similarity<'a, 'b, S1, S2>(
    source: S1,
    target: S2,
    case_sensitive: bool,
) -> Result<f64, SimilarityError>
where
    S1: Into<Option<&'a str>>,
    S2: Into<Option<&'b str>>,
{
    similarity_with_args(
        source,
        target,
        &Args::default().case_sensitive(case_sensitive),
    )
}

/// Similarity of two strings, or `Ok(None)` if it is below the score cutoff
///
/// # Errors
/// [`SimilarityError::InvalidInput`] if `source` or `target` is absent, empty or whitespace only.
/// Invalid input is reported regardless of the score cutoff.
///
/// # Example
/// ```
/// use damerau_similarity::similarity::{self, Args};
///
/// let args = Args::default().score_cutoff(0.6);
/// assert_eq!(Ok(Some(0.75)), similarity::similarity_with_args("abcdefgh", "ABCDEFIJ", &args));
/// assert_eq!(Ok(None), similarity::similarity_with_args("abcdefgh", "abcdijkl", &args));
/// ```
pub fn similarity_with_args<'a, 'b, S1, S2, CutoffType>(
    source: S1,
    target: S2,
    args: &Args<CutoffType>,
) -> Result<CutoffType::Output, SimilarityError>
where
    S1: Into<Option<&'a str>>,
    S2: Into<Option<&'b str>>,
    CutoffType: SimilarityCutoff<f64>,
{
    let (source, target) = preprocess(source.into(), target.into(), args.case_sensitive)?;
    let sim = damerau_levenshtein::normalized_similarity(source.chars(), target.chars());
    Ok(args.score_cutoff.score(sim))
}

/// Similarity of two strings in percent, in the range `0.0 ..= 100.0`
///
/// # Errors
/// [`SimilarityError::InvalidInput`] if `source` or `target` is absent, empty or whitespace only
pub fn similarity_percentage<'a, 'b, S1, S2>(
    source: S1,
    target: S2,
    case_sensitive: bool,
) -> Result<f64, SimilarityError>
where
    S1: Into<Option<&'a str>>,
    S2: Into<Option<&'b str>>,
{
    similarity_percentage_with_args(
        source,
        target,
        &Args::default().case_sensitive(case_sensitive),
    )
}

/// Similarity of two strings in percent, or `Ok(None)` if it is below the score cutoff
///
/// # Errors
/// [`SimilarityError::InvalidInput`] if `source` or `target` is absent, empty or whitespace only
pub fn similarity_percentage_with_args<'a, 'b, S1, S2, CutoffType>(
    source: S1,
    target: S2,
    args: &Args<CutoffType>,
) -> Result<CutoffType::Output, SimilarityError>
where
    S1: Into<Option<&'a str>>,
    S2: Into<Option<&'b str>>,
    CutoffType: SimilarityCutoff<f64>,
{
    let (source, target) = preprocess(source.into(), target.into(), args.case_sensitive)?;
    let sim = damerau_levenshtein::normalized_similarity(source.chars(), target.chars());
    Ok(args.score_cutoff.score(sim * 100.0))
}
