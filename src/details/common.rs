use crate::{Hash, HashableChar};

macro_rules! impl_hashable_char {
    ($base_type:ty, $kind:tt $(, $t:ty)*) => {
        impl HashableChar for $base_type {
            #[inline]
            fn hash_char(&self) -> Hash
            {
                Hash::$kind(*self $(as $t)*)
            }
        }

        impl HashableChar for &$base_type {
            #[inline]
            fn hash_char(&self) -> Hash
            {
                Hash::$kind(**self $(as $t)*)
            }
        }
    }
}

impl_hashable_char!(char, UNSIGNED, u32, u64);
impl_hashable_char!(i8, SIGNED, i64);
impl_hashable_char!(i16, SIGNED, i64);
impl_hashable_char!(i32, SIGNED, i64);
impl_hashable_char!(i64, SIGNED, i64);
impl_hashable_char!(u8, UNSIGNED, u64);
impl_hashable_char!(u16, UNSIGNED, u64);
impl_hashable_char!(u32, UNSIGNED, u64);
impl_hashable_char!(u64, UNSIGNED, u64);

/// `true` for empty and whitespace only input
pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// lower case every char using only the first char of its lower case mapping.
/// Unlike `str::to_lowercase` this never changes the number of chars, so the
/// folded string has the same length as the input
pub(crate) fn fold_case(s: &str) -> String {
    s.chars()
        .map(|ch| ch.to_lowercase().next().unwrap_or(ch))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_inputs() {
        assert!(is_blank(""));
        assert!(is_blank(" "));
        assert!(is_blank("\t\r\n\u{3000}"));
        assert!(!is_blank(" a "));
        assert!(!is_blank("{"));
    }

    #[test]
    fn fold_case_keeps_length() {
        assert_eq!("abcdefgh", fold_case("ABCDEFGH"));
        assert_eq!("straße", fold_case("STRAßE"));
        assert_eq!("αβγ", fold_case("ΑΒΓ"));

        // 'İ' lower cases to two chars with `str::to_lowercase`
        let dotted = "İstanbul";
        assert_eq!(dotted.chars().count(), fold_case(dotted).chars().count());
        assert_eq!("istanbul", fold_case(dotted));
    }

    #[test]
    fn hash_char_kinds() {
        assert!(matches!('a'.hash_char(), Hash::UNSIGNED(97)));
        assert!(matches!((&b'a').hash_char(), Hash::UNSIGNED(97)));
        assert!(matches!((-1i32).hash_char(), Hash::SIGNED(-1)));
    }
}
