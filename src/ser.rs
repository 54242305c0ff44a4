//! Serialize periods with serde as their canonical string, e.g. "P1Y2M3W4D".
//!
//! ```
//! use periodfmt::period::Period;
//!
//! #[derive(serde::Serialize)]
//! struct Schedule {
//!     every: Period,
//! }
//!
//! let s = serde_json::to_string(&Schedule { every: Period::new(0.0, 0.0, 2.0, 0.0) }).unwrap();
//! assert_eq!(s, r#"{"every":"P2W"}"#);
//! ```
use serde::ser;

use crate::period::Period;

impl ser::Serialize for Period {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer {
        serializer.collect_str(self)
    }
}
