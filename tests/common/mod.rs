use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random digit strings with lengths in `0..max_len`, reproducible from `seed`.
pub fn random_digit_strings(seed: u64, count: usize, max_len: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(0..max_len);
            (0..len)
                .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
                .collect()
        })
        .collect()
}
