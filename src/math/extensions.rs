/// Integer exponentiation by squaring.
///
/// Non-negative exponents only; callers pass resolution deltas (0..=15).
#[inline]
#[must_use]
pub(crate) fn _ipow(mut base: i64, mut exp: u32) -> i64 {
  let mut result: i64 = 1;
  while exp != 0 {
    if exp & 1 != 0 {
      result = result.wrapping_mul(base);
    }
    exp >>= 1;
    base = base.wrapping_mul(base);
  }
  result
}
