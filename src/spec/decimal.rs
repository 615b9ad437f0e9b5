//! Exact decimal view of a step literal.
//!
//! Example: "0.250" => 25 * 10^-2 => exponent -2 (after normalization)
//!
//! Steps are read from their literal text rather than through `f64`, so a step
//! of 0.1 counts one decimal place and not whatever binary rounding leaves.

use crate::spec::Numeric;
use regex::Regex;
use std::sync::LazyLock;

// 1) integer digits  2) fraction digits  3) exponent
const DECIMAL_RE: &str = r"^\s*[+-]?(\d*)(?:\.(\d*))?(?:[eE]([+-]?\d+))?\s*$";

static DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DECIMAL_RE).expect("decimal literal regex is valid"));

/// A finite decimal literal normalized to `coefficient * 10^exponent` with no
/// trailing zeros in the coefficient. Zero normalizes to exponent 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decimal {
    exponent: i64,
}

impl Decimal {
    /// Parse a decimal literal such as `0.1`, `-2.50`, `1e-3` or `.5`.
    /// Returns `None` for anything that is not a finite decimal literal.
    pub fn parse(s: &str) -> Option<Self> {
        let caps = DECIMAL.captures(s)?;

        let int_digits = caps.get(1).map_or("", |m| m.as_str());
        let frac_digits = caps.get(2).map_or("", |m| m.as_str());
        if int_digits.is_empty() && frac_digits.is_empty() {
            return None;
        }

        let exp: i64 = match caps.get(3) {
            Some(m) => m.as_str().parse().ok()?,
            None => 0,
        };
        let frac_len = i64::try_from(frac_digits.len()).ok()?;

        let digits = format!("{int_digits}{frac_digits}");
        let digits = digits.trim_start_matches('0');
        let trimmed = digits.trim_end_matches('0');
        if trimmed.is_empty() {
            return Some(Self { exponent: 0 });
        }

        let stripped = i64::try_from(digits.len() - trimmed.len()).ok()?;
        let exponent = exp.checked_sub(frac_len)?.checked_add(stripped)?;

        Some(Self { exponent })
    }

    /// Significant decimal places; 0 for whole numbers.
    pub fn fraction_digits(&self) -> u32 {
        u32::try_from(self.exponent.min(0).unsigned_abs()).unwrap_or(u32::MAX)
    }
}

/// Number of decimal places implied by a step value.
///
/// The literal is read as an exact decimal first. Only text that is not a
/// finite decimal literal falls through to the string-level count.
pub fn decimals_from_step(step: &Numeric) -> u32 {
    let text = step.to_string();
    match Decimal::parse(&text) {
        Some(d) => d.fraction_digits(),
        None => literal_fraction_digits(&text),
    }
}

/// String-level fallback for text that is not a decimal literal: the digits
/// after the last '.', trailing zeros stripped.
pub fn literal_fraction_digits(s: &str) -> u32 {
    match s.rsplit_once('.') {
        Some((_, frac)) => u32::try_from(frac.trim_end_matches('0').len()).unwrap_or(u32::MAX),
        None => 0,
    }
}
