#![no_main]

use arbitrary::Arbitrary;
use damerau_similarity::{similarity, similarity_percentage, SimilarityError};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: Option<String>,
    pub s2: Option<String>,
    pub case_sensitive: bool,
}

fn is_blank(s: &Option<String>) -> bool {
    s.as_deref().map_or(true, |s| s.trim().is_empty())
}

fn fuzz(texts: Texts) {
    let s1 = texts.s1.as_deref();
    let s2 = texts.s2.as_deref();

    let ratio = similarity(s1, s2, texts.case_sensitive);
    let percentage = similarity_percentage(s1, s2, texts.case_sensitive);

    if is_blank(&texts.s1) || is_blank(&texts.s2) {
        assert_eq!(Err(SimilarityError::InvalidInput), ratio);
        assert_eq!(Err(SimilarityError::InvalidInput), percentage);
        return;
    }

    let ratio = ratio.expect("valid input");
    assert!((0.0..=1.0).contains(&ratio));
    assert_eq!(Ok(ratio * 100.0), percentage);
    assert_eq!(Ok(ratio), similarity(s2, s1, texts.case_sensitive));
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
