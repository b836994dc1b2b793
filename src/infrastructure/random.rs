use crate::domain::ports::DigitSource;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Draws uniformly distributed digits from any `rand` generator.
///
/// The default instance wraps the thread-local generator, which is what generation uses
/// unless a caller asks for something else.
#[derive(Debug, Clone)]
pub struct RngDigits<R> {
    rng: R,
}

impl<R: Rng> RngDigits<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngDigits<ThreadRng> {
    /// Digits from the lazily-seeded generator local to the current thread.
    pub fn thread_local() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl Default for RngDigits<ThreadRng> {
    fn default() -> Self {
        Self::thread_local()
    }
}

impl RngDigits<StdRng> {
    /// A reproducible digit stream: the same seed always yields the same digits.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DigitSource for RngDigits<R> {
    fn next_digit(&mut self) -> u8 {
        self.rng.gen_range(0..10)
    }
}

/// Replays a fixed script of digits, starting over when it runs out.
///
/// An empty script yields zeros.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDigits {
    script: Vec<u8>,
    position: usize,
}

impl ScriptedDigits {
    /// Builds a script from the ASCII digits of `digits`; anything else is ignored.
    pub fn new(digits: &str) -> Self {
        Self {
            script: digits
                .bytes()
                .filter(u8::is_ascii_digit)
                .map(|b| b - b'0')
                .collect(),
            position: 0,
        }
    }

    /// Number of digits handed out so far.
    pub fn consumed(&self) -> usize {
        self.position
    }
}

impl DigitSource for ScriptedDigits {
    fn next_digit(&mut self) -> u8 {
        let digit = match self.script.len() {
            0 => 0,
            len => self.script[self.position % len],
        };
        self.position += 1;
        digit
    }
}
