#![no_main]

use arbitrary::Arbitrary;
use damerau_similarity::distance::damerau_levenshtein;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
}

fn fuzz(texts: Texts) {
    let len1 = texts.s1.chars().count();
    let len2 = texts.s2.chars().count();

    let dist = damerau_levenshtein::distance(texts.s1.chars(), texts.s2.chars());
    assert_eq!(
        dist,
        damerau_levenshtein::distance(texts.s2.chars(), texts.s1.chars())
    );
    assert!(dist >= len1.abs_diff(len2));
    assert!(dist <= len1.max(len2));
    assert_eq!(dist == 0, texts.s1 == texts.s2);
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
