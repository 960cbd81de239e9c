use rand::Rng;
use rand_distr::Uniform;

/// One uniform sample from the inclusive real range, rounded to two decimals.
pub fn uniform_rounded(low: f64, high: f64, rng: &mut impl Rng) -> f64 {
    let sample: f64 = rng.sample(Uniform::new_inclusive(low, high));
    (sample * 100.0).round() / 100.0
}

/// One uniform sample from the inclusive integer range.
pub fn uniform_int(low: u32, high: u32, rng: &mut impl Rng) -> u32 {
    rng.sample(Uniform::new_inclusive(low, high))
}
