//! Deserialize periods with serde from strings such as "P1Y2M3W4D".
//!
//! Any self-describing format that can hand over a string will do:
//!
//! ```
//! use periodfmt::period::Period;
//!
//! let p: Period = serde_json::from_str(r#""P1Y2M3W4D""#).unwrap();
//! assert_eq!(p, Period::new(1.0, 2.0, 3.0, 4.0));
//! ```
//!
//! Period parsing errors are passed to the format's error type through
//! `serde::de::Error::custom`, so the message is the [`PError`](crate::period_error::PError) message.
use std::fmt;

use serde::de;

use crate::period::Period;

pub(crate) struct PeriodVisitor;

impl<'de> de::Visitor<'de> for PeriodVisitor {
    type Value = Period;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an ISO-8601 period string such as \"P1Y2M3W4D\"")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error, {
        Period::parse(v).map_err(E::custom)
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error, {
        let s = std::str::from_utf8(v)
            .map_err(|_| E::invalid_value(de::Unexpected::Bytes(v), &self))?;
        self.visit_str(s)
    }
}

impl<'de> de::Deserialize<'de> for Period {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de> {
        deserializer.deserialize_str(PeriodVisitor)
    }
}
