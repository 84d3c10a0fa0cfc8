//! Amount normalization for transaction detail records.
//!
//! BAI2 amounts normally carry no decimal point and count minor units
//! (`12345` is `123.45`). Some producers emit an explicit point instead.
//! Both forms are rendered the same way: fixed-point, exactly two
//! fractional digits, sign preserved.

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Scale applied to amounts written in minor units.
const MINOR_UNIT_SCALE: u32 = 2;

/// Reasons an amount field is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,
    #[error("unexpected character {0:?}")]
    InvalidCharacter(char),
    #[error("more than one decimal point")]
    MultiplePoints,
    #[error("no digits")]
    NoDigits,
    #[error("amount out of range")]
    OutOfRange,
}

/// Normalizes a raw BAI2 amount into a two-place decimal string.
///
/// The sign of the input is kept even when the value rounds to zero,
/// so `-0.001` renders as `-0.00`.
///
/// # Examples
///
/// ```
/// use bai2::record::normalize_amount;
///
/// assert_eq!(normalize_amount("12345").unwrap(), "123.45");
/// assert_eq!(normalize_amount("123.45").unwrap(), "123.45");
/// assert_eq!(normalize_amount("-500").unwrap(), "-5.00");
/// assert!(normalize_amount("abc").is_err());
/// ```
pub fn normalize_amount(raw: &str) -> Result<String, AmountError> {
    let literal = Literal::scan(raw)?;
    let value = literal
        .to_decimal()?
        .round_dp_with_strategy(MINOR_UNIT_SCALE, RoundingStrategy::MidpointNearestEven)
        .abs();
    let sign = if literal.negative { "-" } else { "" };
    Ok(format!("{sign}{value:.2}"))
}

/// Parses a raw amount exactly.
///
/// Without a decimal point the digits are minor units; with one the
/// value is taken as written.
pub fn parse_amount(raw: &str) -> Result<Decimal, AmountError> {
    Literal::scan(raw)?.to_decimal()
}

/// A syntactically valid amount, split into its parts.
#[derive(Debug)]
struct Literal<'a> {
    negative: bool,
    integer: &'a str,
    fraction: Option<&'a str>,
}

impl<'a> Literal<'a> {
    /// Accepts an optional sign, ASCII digits and at most one point.
    fn scan(raw: &'a str) -> Result<Self, AmountError> {
        let s = raw.trim();
        if s.is_empty() {
            return Err(AmountError::Empty);
        }

        let (negative, unsigned) = match s.as_bytes()[0] {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };

        let mut has_digit = false;
        let mut has_point = false;
        for c in unsigned.chars() {
            match c {
                '0'..='9' => has_digit = true,
                '.' if !has_point => has_point = true,
                '.' => return Err(AmountError::MultiplePoints),
                other => return Err(AmountError::InvalidCharacter(other)),
            }
        }
        if !has_digit {
            return Err(AmountError::NoDigits);
        }

        let (integer, fraction) = match unsigned.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (unsigned, None),
        };
        Ok(Self { negative, integer, fraction })
    }

    fn to_decimal(&self) -> Result<Decimal, AmountError> {
        let sign = if self.negative { "-" } else { "" };
        let integer = if self.integer.is_empty() { "0" } else { self.integer };
        match self.fraction {
            None => {
                let mut value: Decimal =
                    format!("{sign}{integer}").parse().map_err(|_| AmountError::OutOfRange)?;
                value.set_scale(MINOR_UNIT_SCALE).map_err(|_| AmountError::OutOfRange)?;
                Ok(value)
            }
            Some("") => format!("{sign}{integer}").parse().map_err(|_| AmountError::OutOfRange),
            Some(fraction) => {
                format!("{sign}{integer}.{fraction}").parse().map_err(|_| AmountError::OutOfRange)
            }
        }
    }
}
