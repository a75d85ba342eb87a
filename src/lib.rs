//! `damerau-similarity` scores how similar two strings are, based on the
//! Damerau-Levenshtein distance.
//!
//! ## Key Features
//!
//! - **Transpositions**: swapping two adjacent characters counts as a single
//!   edit, next to insertions, deletions and substitutions.
//! - **Normalized scores**: the distance is turned into a ratio in the range
//!   `0.0 ..= 1.0` (or a percentage) by dividing it by the length of the longer string.
//! - **Case folding**: strings are compared case insensitive unless requested otherwise.
//!
//! ## Usage
//!
//! ```rust
//! use damerau_similarity::{similarity, similarity_percentage, SimilarityError};
//!
//! assert_eq!(Ok(0.75), similarity("abcdefgh", "abcdefij", false));
//! assert_eq!(Ok(100.0), similarity_percentage("abcdefgh", "ABCDEFGH", false));
//! assert_eq!(Ok(0.0), similarity_percentage("abcdefgh", "ABCDEFGH", true));
//!
//! // absent, empty and whitespace only inputs are rejected
//! assert_eq!(Err(SimilarityError::InvalidInput), similarity("abcdefgh", " ", false));
//! assert_eq!(Err(SimilarityError::InvalidInput), similarity(None::<&str>, "abcdefgh", false));
//! ```
//!
//! The raw distance is available for any sequence of hashable elements:
//!
//! ```rust
//! use damerau_similarity::distance::damerau_levenshtein;
//!
//! assert_eq!(1, damerau_levenshtein::distance("ab".chars(), "ba".chars()));
//! assert_eq!(1, damerau_levenshtein::distance([1u32, 2, 3], [2u32, 1, 3]));
//! ```
//!
//! All functions are pure. They allocate a `(len1 + 2) * (len2 + 2)` matrix of
//! `usize` per call, so memory is the practical limit on input length.

#![forbid(unsafe_code)]
#![allow(
    // these casts are sometimes needed. They restrict the length of input iterators
    // but there isn't really any way around this except for always working with
    // 128 bit types
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    // things are often more readable this way
    clippy::module_name_repetitions,
    clippy::similar_names,
)]

pub mod common;
pub(crate) mod details;
pub mod distance;
mod error;
pub mod similarity;

pub use error::SimilarityError;
pub use similarity::{similarity, similarity_percentage};

/// Hash value in the range `i64::MIN` - `u64::MAX`
#[derive(Debug, Copy, Clone)]
pub enum Hash {
    UNSIGNED(u64),
    SIGNED(i64),
}

/// trait used to map between element types and unique hash values
///
/// The library already implements this trait for `char` and the primitive integer types.
/// For custom types it can be used to support the internal hashmaps.
/// There are a couple of things to keep in mind when implementing this trait:
/// - hashes have to be a unique value in the range `i64::MIN` - `u64::MAX`.
///   If two distinct objects produce the same hash, they will be assumed to be similar
///   by the hashmap.
/// - the hash function should be very fast. For primitive types it can just be the identity
///   function
/// - the hashmaps are optimized for extended ascii, so values in the range 0-255 generally
///   provide a better performance.
///
/// # Example
/// ```
/// use damerau_similarity::distance::damerau_levenshtein;
/// use damerau_similarity::{Hash, HashableChar};
///
/// #[derive(PartialEq, Clone, Copy)]
/// struct Token {
///     id: u64,
/// }
///
/// impl HashableChar for Token {
///     fn hash_char(&self) -> Hash {
///         Hash::UNSIGNED(self.id)
///     }
/// }
///
/// assert_eq!(
///     1,
///     damerau_levenshtein::distance(
///         [Token { id: 1 }, Token { id: 2 }],
///         [Token { id: 2 }, Token { id: 1 }],
///     )
/// );
/// ```
pub trait HashableChar {
    fn hash_char(&self) -> Hash;
}
