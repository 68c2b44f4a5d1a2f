//! The array model sorted by the sorting engine.

use rand::{Rng, RngExt};

use crate::error::RunError;

/// Smallest accepted array length.
pub const MIN_LEN: usize = 5;
/// Largest accepted array length.
pub const MAX_LEN: usize = 100;
/// Largest random value; random values lie in `1..=MAX_VALUE`.
pub const MAX_VALUE: i32 = 100;

/// An ordered sequence of values drawn as bars.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bars {
    values: Vec<i32>,
}

impl Bars {
    /// Wrap an existing sequence. No length check is applied.
    pub fn new(values: Vec<i32>) -> Self {
        Self { values }
    }

    /// `size` random values in `1..=100`. The size is clamped to
    /// [`MIN_LEN`]..=[`MAX_LEN`].
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let size = size.clamp(MIN_LEN, MAX_LEN);
        let values = (0..size).map(|_| rng.random_range(1..=MAX_VALUE)).collect();
        Self { values }
    }

    /// Parse comma-separated user input.
    ///
    /// Each token is trimmed and read as a leading integer (an optional sign
    /// followed by digits; anything after the digits is ignored). Tokens with
    /// no digits are dropped. The result must hold between [`MIN_LEN`] and
    /// [`MAX_LEN`] values.
    pub fn parse_custom(input: &str) -> Result<Self, RunError> {
        let values: Vec<i32> = input.split(',').filter_map(leading_int).collect();
        if !(MIN_LEN..=MAX_LEN).contains(&values.len()) {
            log::debug!("rejected custom array of {} values", values.len());
            return Err(RunError::InvalidCustomArray {
                len: values.len(),
                min: MIN_LEN,
                max: MAX_LEN,
            });
        }
        Ok(Self { values })
    }

    /// Number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The values in order.
    #[inline]
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Value at `i`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<i32> {
        self.values.get(i).copied()
    }

    /// Overwrite the value at `i`.
    #[inline]
    pub fn set(&mut self, i: usize, value: i32) {
        self.values[i] = value;
    }

    /// Exchange the values at `a` and `b`.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
    }

    /// Whether the values are in non-decreasing order.
    pub fn is_sorted(&self) -> bool {
        self.values.is_sorted()
    }

    /// Consume into the inner vector.
    pub fn into_inner(self) -> Vec<i32> {
        self.values
    }
}

impl std::ops::Index<usize> for Bars {
    type Output = i32;
    #[inline]
    fn index(&self, i: usize) -> &i32 {
        &self.values[i]
    }
}

impl From<Vec<i32>> for Bars {
    fn from(values: Vec<i32>) -> Self {
        Self::new(values)
    }
}

/// Read the integer prefix of a token, ignoring surrounding whitespace.
fn leading_int(token: &str) -> Option<i32> {
    let t = token.trim();
    let (sign, digits) = match t.as_bytes().first() {
        Some(b'-') => (-1i64, &t[1..]),
        Some(b'+') => (1, &t[1..]),
        _ => (1, t),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    i32::try_from(sign * magnitude).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parse_accepts_valid_input() {
        let b = Bars::parse_custom("5, 3,8 ,1,2").unwrap();
        assert_eq!(b.values(), &[5, 3, 8, 1, 2]);
    }

    #[test]
    fn parse_rejects_short_input() {
        let err = Bars::parse_custom("3,1").unwrap_err();
        assert_eq!(
            err,
            RunError::InvalidCustomArray {
                len: 2,
                min: MIN_LEN,
                max: MAX_LEN
            }
        );
    }

    #[test]
    fn parse_filters_tokens_without_digits() {
        let b = Bars::parse_custom("1, x, 2, , 3, --4, 4, 5").unwrap();
        assert_eq!(b.values(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn parse_keeps_leading_digits() {
        let b = Bars::parse_custom("12abc, 7.9, -3, +4, 5").unwrap();
        assert_eq!(b.values(), &[12, 7, -3, 4, 5]);
    }

    #[test]
    fn parse_rejects_too_long_input() {
        let text = vec!["1"; MAX_LEN + 1].join(",");
        assert!(matches!(
            Bars::parse_custom(&text),
            Err(RunError::InvalidCustomArray { len, .. }) if len == MAX_LEN + 1
        ));
    }

    #[test]
    fn parse_ignores_out_of_range_numbers() {
        let b = Bars::parse_custom("99999999999, 1, 2, 3, 4, 5").unwrap();
        assert_eq!(b.values(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn random_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let b = Bars::random(30, &mut rng);
        assert_eq!(b.len(), 30);
        assert!(b.values().iter().all(|v| (1..=MAX_VALUE).contains(v)));
    }

    #[test]
    fn random_clamps_size() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(Bars::random(1, &mut rng).len(), MIN_LEN);
        assert_eq!(Bars::random(500, &mut rng).len(), MAX_LEN);
    }

    #[test]
    fn swap_and_set() {
        let mut b = Bars::new(vec![1, 2, 3]);
        b.swap(0, 2);
        assert_eq!(b.values(), &[3, 2, 1]);
        b.set(1, 9);
        assert_eq!(b[1], 9);
        assert!(!b.is_sorted());
    }
}
