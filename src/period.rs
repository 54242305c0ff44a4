//! Represent ISO-8601 periods as Rust values.
//!
//! A period such as "P1Y2M" is a human-scale amount of calendar time: years,
//! months, weeks, and days. It is deliberately *not* resolved to a number of
//! seconds, since months and years have no fixed length. Parse one with
//! [`Period::parse`] (or `str::parse`) and write it back out with its
//! `Display` implementation:
//!
//! ```
//! # use periodfmt::period::Period;
//! let p: Period = "P1Y2M3W4D".parse().unwrap();
//! assert_eq!(p, Period::new(1.0, 2.0, 3.0, 4.0));
//! assert_eq!(p.to_string(), "P1Y2M3W4D");
//! ```
//!
//! The written form always lists units in year, month, week, day order and
//! omits zero units. Signs are *not* written: a period with negative fields
//! is written with their absolute values, so it will not survive a round trip
//! through text.
use std::fmt::{Display, Write};
use std::str::FromStr;

use ryu_floating_decimal::d2d;

use crate::parsing;
use crate::period_error::{PError, PResult};

/// One of the four calendar units a [`Period`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Years,
    Months,
    Weeks,
    Days
}

impl Unit {
    /// All units, in the order they are written.
    pub const ALL: [Unit; 4] = [Unit::Years, Unit::Months, Unit::Weeks, Unit::Days];

    /// The ISO-8601 designator letter for this unit.
    pub fn designator(&self) -> char {
        match self {
            Unit::Years => 'Y',
            Unit::Months => 'M',
            Unit::Weeks => 'W',
            Unit::Days => 'D',
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char(self.designator())
    }
}

/// An amount of calendar time in years, months, weeks, and days.
///
/// Each field is an independent, possibly fractional or negative, magnitude.
/// No normalization is ever done between them, so four weeks stay four weeks
/// rather than becoming a month.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Period {
    pub years: f64,
    pub months: f64,
    pub weeks: f64,
    pub days: f64,
}

impl Period {
    /// The empty period, written as "P0D".
    pub const ZERO: Period = Period { years: 0.0, months: 0.0, weeks: 0.0, days: 0.0 };

    /// Create a period from its four fields.
    pub fn new(years: f64, months: f64, weeks: f64, days: f64) -> Self {
        Self { years, months, weeks, days }
    }

    /// Parse a period string such as "P1Y2M3W4D" and return a new `Period`.
    ///
    /// The string must start with "P" and be followed by any number of
    /// `<number><designator>` pairs, where the designator is one of Y, M, W, or D
    /// and the number may be fractional and preceded by a `+` or `-`. Units may
    /// come in any order; if a unit repeats, the last one wins. Anything from a
    /// "T" onward (the time part of an ISO-8601 duration) is ignored without
    /// being checked.
    ///
    /// Returns an error if the string does not start with "P", contains a
    /// character other than those above, or has a malformed number such as "1.2.3".
    pub fn parse(s: &str) -> PResult<Self> {
        let mut p = Self::ZERO;
        parsing::parse_into(&mut p, s)?;
        Ok(p)
    }

    /// Like [`Period::parse`], but overwrites `self` rather than creating a new value.
    ///
    /// All fields are reset to zero before parsing. If an error is returned,
    /// the contents of `self` are unspecified.
    pub fn parse_into(&mut self, s: &str) -> PResult<()> {
        parsing::parse_into(self, s)
    }

    /// `true` if all four fields are zero
    pub fn is_zero(&self) -> bool {
        self.years == 0.0 && self.months == 0.0 && self.weeks == 0.0 && self.days == 0.0
    }

    /// The value of the field for `unit`
    pub fn get(&self, unit: Unit) -> f64 {
        match unit {
            Unit::Years => self.years,
            Unit::Months => self.months,
            Unit::Weeks => self.weeks,
            Unit::Days => self.days,
        }
    }

    /// Overwrite the field for `unit` with `value`.
    pub fn set(&mut self, unit: Unit, value: f64) {
        match unit {
            Unit::Years => self.years = value,
            Unit::Months => self.months = value,
            Unit::Weeks => self.weeks = value,
            Unit::Days => self.days = value,
        }
    }
}

/// Parse a period string into a new [`Period`]; see [`Period::parse`].
pub fn parse_period(s: &str) -> PResult<Period> {
    Period::parse(s)
}

impl FromStr for Period {
    type Err = PError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Period {
    type Error = PError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return f.write_str("P0D");
        }

        f.write_char('P')?;
        for unit in Unit::ALL {
            let v = self.get(unit);
            if v != 0.0 {
                write_magnitude(&mut *f, v.abs())?;
                f.write_char(unit.designator())?;
            }
        }
        Ok(())
    }
}

/// Write a positive, non-zero value with the fewest digits that read back as the
/// same `f64`, in plain positional notation (never with an exponent).
fn write_magnitude<W: Write>(mut buf: W, v: f64) -> std::fmt::Result {
    if v.is_nan() {
        return buf.write_str("NaN");
    } else if v.is_infinite() {
        return buf.write_str("+Inf");
    }

    // d2d gives the shortest decimal as mantissa * 10^exponent, e.g.
    // Value    | Mantissa | Exponent | Written
    // 1.5      | 15       | -1       | 1.5
    // 1500.0   | 15       | +2       | 1500
    // 0.0015   | 15       | -4       | 0.0015
    let v = d2d(v);
    let mut mantissa = v.mantissa;
    let mut exponent = v.exponent;
    while mantissa != 0 && mantissa % 10 == 0 {
        mantissa /= 10;
        exponent += 1;
    }

    let mut b = itoa::Buffer::new();
    let digits = b.format(mantissa);

    if exponent >= 0 {
        buf.write_str(digits)?;
        for _ in 0..exponent {
            buf.write_char('0')?;
        }
        return Ok(());
    }

    // Number of digits to the left of the decimal point
    let n_int = digits.len() as i32 + exponent;
    if n_int > 0 {
        let (int_part, frac_part) = digits.split_at(n_int as usize);
        write!(buf, "{int_part}.{frac_part}")
    } else {
        buf.write_str("0.")?;
        for _ in 0..(-n_int) {
            buf.write_char('0')?;
        }
        buf.write_str(digits)
    }
}
