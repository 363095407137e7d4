use std::ops::RangeInclusive;

use rand::distributions::Uniform;
use rand::{thread_rng, Rng};

/// Generates a vector of uniformly random integers.
///
/// # Parameters
/// - `amount` number of values to generate
/// - `range` range the values are drawn from. Must not be empty
pub fn generate_random_data(amount: usize, range: RangeInclusive<i32>) -> Vec<i32> {
    let mut rng = thread_rng();
    let uniform = Uniform::from(range);

    let mut data = Vec::with_capacity(amount);
    for _ in 0..amount {
        data.push(rng.sample(&uniform));
    }

    data
}
