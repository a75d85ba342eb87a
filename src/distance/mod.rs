pub mod damerau_levenshtein;
