use rand::{Rng, RngCore};

/// `rand_int` draws from `0 .. RAND_INT_RANGE`.
pub const RAND_INT_RANGE: usize = 10;

/// The interpreter's only source of nondeterminism.
///
/// Any `rand` generator is a `RandomSource`. Tests implement it directly to
/// script exact draws.
pub trait RandomSource {
    /// Uniform over `0 .. n`. Callers never pass zero.
    fn int_below(&mut self, n: usize) -> usize;

    /// Uniform over `[0, 1)`.
    fn unit_float(&mut self) -> f64;

    fn rand_int(&mut self) -> i64 {
        self.int_below(RAND_INT_RANGE) as i64
    }

    fn rand_float(&mut self) -> f64 {
        self.unit_float()
    }
}

impl<R: RngCore> RandomSource for R {
    fn int_below(&mut self, n: usize) -> usize {
        self.random_range(0..n)
    }

    fn unit_float(&mut self) -> f64 {
        self.random::<f64>()
    }
}
