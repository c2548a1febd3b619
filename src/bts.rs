//! Verbalized BTS labels for known flexcodes.
//!
//! Independent of the decoder: the labels are the ones the BTS editor shows,
//! not Leipzig glosses.

use std::fmt::Display;

use lazy_static::lazy_static;

use crate::tables::{GlossMap, parse_tsv};

static FLEXCODES: &str = include_str!("../data/flexcodes.tsv");

lazy_static! {
    static ref FLEXCODE_TABLE: GlossMap = parse_tsv(FLEXCODES);
}

/// Looks up a code by its string form, so `96423` and `"96423"` agree and
/// negated codes have entries of their own.
pub fn resolve_flexcode<K: Display>(flexcode: K) -> Option<&'static str> {
    FLEXCODE_TABLE.get(flexcode.to_string().as_str()).copied()
}

pub fn flexcode_count() -> usize {
    FLEXCODE_TABLE.len()
}
