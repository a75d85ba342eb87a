pub(crate) mod common;
pub(crate) mod growing_hashmap;
pub(crate) mod matrix;
