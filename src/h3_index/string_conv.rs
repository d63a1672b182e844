//! Hexadecimal string form of an index.

use std::fmt;
use std::str::FromStr;

use crate::types::{H3Error, H3Index, H3_NULL};

/// Parses a hexadecimal index, case-insensitive and without a prefix.
/// Surrounding whitespace is ignored.
///
/// Returns `H3_NULL` when the string is not a 64-bit hexadecimal number; the
/// result is not validated, see `h3_is_valid`.
#[must_use]
pub fn string_to_h3(s: &str) -> H3Index {
  s.parse().unwrap_or(H3_NULL)
}

/// Lowercase hexadecimal rendering, no prefix or padding.
#[must_use]
pub fn h3_to_string(h: H3Index) -> String {
  format!("{h:x}")
}

impl fmt::LowerHex for H3Index {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::LowerHex::fmt(&self.0, f)
  }
}

impl fmt::Display for H3Index {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:x}", self.0)
  }
}

impl FromStr for H3Index {
  type Err = H3Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    // from_str_radix would accept a sign
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
      return Err(H3Error::Failed);
    }
    u64::from_str_radix(s, 16).map(H3Index).map_err(|_| H3Error::Failed)
  }
}
