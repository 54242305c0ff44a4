//! Parse and format ISO-8601 calendar periods such as "P1Y2M3W4D".
//!
//! ```
//! use periodfmt::Period;
//!
//! let p = Period::parse("P1.5Y2W").unwrap();
//! assert_eq!(p.years, 1.5);
//! assert_eq!(p.weeks, 2.0);
//! assert_eq!(p.to_string(), "P1.5Y2W");
//! ```
extern crate pest;
#[macro_use]
extern crate pest_derive;
pub mod period_error;
pub mod period;
pub(crate) mod parsing;
pub mod quoted;
#[cfg(feature = "serde")]
pub mod ser;
#[cfg(feature = "serde")]
pub mod de;

pub use period::{parse_period, Period, Unit};
pub use period_error::{PError, PResult};
