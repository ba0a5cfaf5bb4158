//! Randomness providers for tire generation

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::rngs::ThreadRng;

/// Source of the random values a generator consumes
pub trait RandomSource {
    /// Next value in `[low, high)`.
    ///
    /// Returns `low` when the range is empty, inverted, or has a NaN or
    /// infinite bound. Never panics.
    fn next_in_range(&mut self, low: f64, high: f64) -> f64;

    /// Next index in `0..len`. Returns 0 when `len` is 0 or 1.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Map `unit` in `[0, 1)` onto `[low, high)`.
///
/// Interpolates without computing `high - low`, so ranges wider than
/// `f64::MAX` do not overflow, and clamps below `high` where rounding would
/// otherwise land on it.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
fn scale_unit(unit: f64, low: f64, high: f64) -> f64 {
    if !(low < high) || !low.is_finite() || !high.is_finite() {
        return low;
    }
    let value = low * (1.0 - unit) + high * unit;
    value.min(next_below(high)).max(low)
}

/// Largest `f64` strictly less than a finite `x`
fn next_below(x: f64) -> f64 {
    if x == 0.0 {
        return -f64::from_bits(1);
    }
    let bits = x.to_bits();
    if x > 0.0 {
        f64::from_bits(bits - 1)
    } else {
        f64::from_bits(bits + 1)
    }
}

/// [`RandomSource`] backed by a `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<ThreadRng> {
    /// Use the calling thread's RNG
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible source: equal seeds give equal sequences
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_in_range(&mut self, low: f64, high: f64) -> f64 {
        scale_unit(self.rng.gen::<f64>(), low, high)
    }

    fn next_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// [`RandomSource`] that replays a fixed list of unit values, cycling.
///
/// Each value is a fraction in `[0, 1)` that gets scaled into whatever range
/// is requested, so the same sequence works for every field.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    position: usize,
}

impl SequenceSource {
    /// Build from unit fractions. Values are clamped into `[0, 1)`; non-finite
    /// values become 0. An empty list behaves like `[0.0]`.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let mut values: Vec<f64> = values
            .into()
            .into_iter()
            .map(|v| {
                if v.is_finite() {
                    v.clamp(0.0, 1.0 - f64::EPSILON)
                } else {
                    0.0
                }
            })
            .collect();
        if values.is_empty() {
            values.push(0.0);
        }
        Self {
            values,
            position: 0,
        }
    }

    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.position];
        self.position = (self.position + 1) % self.values.len();
        value
    }
}

impl RandomSource for SequenceSource {
    fn next_in_range(&mut self, low: f64, high: f64) -> f64 {
        scale_unit(self.next_unit(), low, high)
    }

    fn next_index(&mut self, len: usize) -> usize {
        let unit = self.next_unit();
        if len <= 1 {
            return 0;
        }
        ((unit * len as f64) as usize).min(len - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_scales_and_cycles() {
        let mut source = SequenceSource::new([0.0, 0.5]);
        assert_eq!(source.next_in_range(10.0, 20.0), 10.0);
        assert_eq!(source.next_in_range(10.0, 20.0), 15.0);
        assert_eq!(source.next_in_range(0.0, 4.0), 0.0);
    }

    #[test]
    fn test_sequence_index() {
        let mut source = SequenceSource::new([0.0, 0.99, 0.5]);
        assert_eq!(source.next_index(5), 0);
        assert_eq!(source.next_index(5), 4);
        assert_eq!(source.next_index(5), 2);
        assert_eq!(source.next_index(0), 0);
    }

    #[test]
    fn test_sequence_sanitizes_input() {
        let mut source = SequenceSource::new([f64::NAN, 7.0, -3.0]);
        assert_eq!(source.next_in_range(0.0, 1.0), 0.0);
        assert!(source.next_in_range(0.0, 1.0) < 1.0);
        assert_eq!(source.next_in_range(0.0, 1.0), 0.0);

        let mut empty = SequenceSource::new(Vec::new());
        assert_eq!(empty.next_in_range(2.0, 3.0), 2.0);
    }

    #[test]
    fn test_empty_range_returns_low() {
        let mut rng = RngSource::seeded(7);
        assert_eq!(rng.next_in_range(4.0, 4.0), 4.0);
        assert_eq!(rng.next_index(1), 0);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = RngSource::seeded(42);
        let mut b = RngSource::seeded(42);
        for _ in 0..16 {
            assert_eq!(a.next_in_range(0.0, 100.0), b.next_in_range(0.0, 100.0));
            assert_eq!(a.next_index(9), b.next_index(9));
        }
    }

    #[test]
    fn test_non_finite_bounds_do_not_panic() {
        let mut rng = RngSource::seeded(1);
        assert!(rng.next_in_range(f64::NAN, 1.0).is_nan());
        assert_eq!(rng.next_in_range(0.0, f64::NAN), 0.0);
        assert_eq!(rng.next_in_range(0.0, f64::INFINITY), 0.0);

        let mut sequence = SequenceSource::new([0.5]);
        assert!(sequence.next_in_range(f64::NAN, 1.0).is_nan());
        assert_eq!(sequence.next_in_range(0.0, f64::NAN), 0.0);
        assert_eq!(sequence.next_in_range(0.0, f64::INFINITY), 0.0);
    }

    #[test]
    fn test_widest_range_stays_finite() {
        let mut rng = RngSource::seeded(1);
        let mut sequence = SequenceSource::new([0.0, 0.5, 0.999_999_9]);
        for _ in 0..32 {
            for value in [
                rng.next_in_range(-f64::MAX, f64::MAX),
                sequence.next_in_range(-f64::MAX, f64::MAX),
            ] {
                assert!(value.is_finite());
                assert!(value < f64::MAX);
            }
        }
        let mut midpoint = SequenceSource::new([0.5]);
        assert_eq!(midpoint.next_in_range(-f64::MAX, f64::MAX), 0.0);
    }

    #[test]
    fn test_rounding_never_reaches_high() {
        let (low, high) = (1e16, 1e16 + 2.0);
        let mut sequence = SequenceSource::new([0.999_999_9]);
        let value = sequence.next_in_range(low, high);
        assert!(
            value >= low && value < high,
            "value {value} escaped [{low}, {high})"
        );

        let mut rng = RngSource::seeded(3);
        for _ in 0..256 {
            let value = rng.next_in_range(low, high);
            assert!(value >= low && value < high);
        }
    }

    #[test]
    fn test_next_below() {
        assert!(next_below(1.0) < 1.0);
        assert_eq!(next_below(1.0), 1.0 - f64::EPSILON / 2.0);
        assert!(next_below(0.0) < 0.0);
        assert!(next_below(-1.0) < -1.0);
    }

    #[test]
    fn test_into_inner_keeps_rng_state() {
        let mut source = RngSource::seeded(9);
        source.next_in_range(0.0, 1.0);
        let mut rng = source.into_inner();

        let mut reference = StdRng::seed_from_u64(9);
        let _: f64 = reference.gen();
        assert_eq!(rng.gen::<u64>(), reference.gen::<u64>());
    }

    #[test]
    fn test_rng_stays_in_range() {
        let mut rng = RngSource::thread();
        for _ in 0..256 {
            let value = rng.next_in_range(5.0, 10.0);
            assert!((5.0..10.0).contains(&value));
            assert!(rng.next_index(3) < 3);
        }
    }
}
