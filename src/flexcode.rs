//! Flexcodes as they arrive from corpus exports.
//!
//! A flexcode is either an integer or a numeral string. The sign is recorded
//! but plays no part in decoding: `-10168` and `10168` gloss identically.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{GlossError, Result};

lazy_static! {
    // surrounding whitespace, a sign and single underscores between digit groups
    static ref NUMERAL: Regex = Regex::new(r"^\s*[+-]?[0-9]+(_[0-9]+)*\s*$").unwrap();
}

/// Beyond five digits lies the negation position, which decoding cuts off.
pub const NEGATION_MODULUS: u64 = 100_000;

/// Raw input before coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawFlexcode<'a> {
    Int(i64),
    Text(&'a str),
}

impl From<i64> for RawFlexcode<'_> {
    fn from(v: i64) -> Self { RawFlexcode::Int(v) }
}
impl From<i32> for RawFlexcode<'_> {
    fn from(v: i32) -> Self { RawFlexcode::Int(i64::from(v)) }
}
impl From<u32> for RawFlexcode<'_> {
    fn from(v: u32) -> Self { RawFlexcode::Int(i64::from(v)) }
}
impl<'a> From<&'a str> for RawFlexcode<'a> {
    fn from(v: &'a str) -> Self { RawFlexcode::Text(v) }
}
impl<'a> From<&'a String> for RawFlexcode<'a> {
    fn from(v: &'a String) -> Self { RawFlexcode::Text(v.as_str()) }
}

impl fmt::Display for RawFlexcode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RawFlexcode::Int(v) => write!(f, "{}", v),
            RawFlexcode::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Magnitude {
    Fits(u64),
    // digits past the u64 range, leading zeros stripped
    Wide(Box<str>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Flexcode {
    negated: bool,
    magnitude: Magnitude,
}

impl Flexcode {
    pub fn new(value: i64) -> Self {
        Self {
            negated: value < 0,
            magnitude: Magnitude::Fits(value.unsigned_abs()),
        }
    }
    /// Numeral strings of any length are accepted; only their last five
    /// digits and whether they exceed a status code matter for decoding.
    pub fn parse(raw: RawFlexcode) -> Result<Self> {
        match raw {
            RawFlexcode::Int(v) => Ok(Self::new(v)),
            RawFlexcode::Text(s) => {
                if !NUMERAL.is_match(s) {
                    return Err(GlossError::InvalidFlexcode(s.to_string()));
                }
                let s = s.trim();
                let (negative, unsigned) = match s.strip_prefix('-') {
                    Some(rest) => (true, rest),
                    None => (false, s.strip_prefix('+').unwrap_or(s)),
                };
                let digits: String = unsigned.chars().filter(|c| *c != '_').skip_while(|c| *c == '0').collect();
                let magnitude = if digits.is_empty() {
                    Magnitude::Fits(0)
                } else {
                    match digits.parse::<u64>() {
                        Ok(m) => Magnitude::Fits(m),
                        Err(_) => Magnitude::Wide(digits.into_boxed_str()),
                    }
                };
                Ok(Self {
                    negated: negative && magnitude != Magnitude::Fits(0),
                    magnitude,
                })
            }
        }
    }
    // The "negation" sign of the code. Nothing downstream reads it yet.
    pub fn is_negated(&self) -> bool {
        self.negated
    }
    /// The unsigned value, when it fits a `u64`.
    pub fn magnitude(&self) -> Option<u64> {
        match self.magnitude {
            Magnitude::Fits(m) => Some(m),
            Magnitude::Wide(_) => None,
        }
    }
    /// Codes 0 to 9 carry editorial status instead of morphology.
    pub fn is_status(&self) -> bool {
        matches!(self.magnitude, Magnitude::Fits(m) if m <= 9)
    }
    /// The five decoded digit positions.
    pub fn reduced(&self) -> u64 {
        match &self.magnitude {
            Magnitude::Fits(m) => m % NEGATION_MODULUS,
            Magnitude::Wide(digits) => digits[digits.len() - 5..]
                .bytes()
                .fold(0, |acc, b| acc * 10 + u64::from(b - b'0')),
        }
    }
    /// Last digit, the suffix pronoun slot for most categories.
    pub fn state_digit(&self) -> u64 {
        self.reduced() % 10
    }
}

impl fmt::Display for Flexcode {
    // Diagnostics report the unsigned magnitude.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.magnitude {
            Magnitude::Fits(m) => write!(f, "{}", m),
            Magnitude::Wide(digits) => f.write_str(digits),
        }
    }
}
