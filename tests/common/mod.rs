// Not every integration test uses every helper
#![allow(dead_code)]

pub mod test_helpers;

pub use test_helpers::*;
