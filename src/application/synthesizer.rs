use crate::domain::digits::DigitSequence;
use crate::domain::luhn;
use crate::domain::ports::DigitSource;
use crate::error::Result;
use crate::infrastructure::random::RngDigits;
use rand::rngs::ThreadRng;
use serde::Serialize;
use tracing::debug;

/// One synthetic number produced by a batch run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyntheticRecord {
    /// Position in the batch, starting at 1.
    pub index: usize,
    pub prefix: String,
    pub number: DigitSequence,
}

/// Produces Luhn-compliant numbers from an issuer prefix.
///
/// The synthesizer owns its digit source, so a batch drawn from a seeded or scripted
/// source is fully reproducible.
pub struct Synthesizer<S = RngDigits<ThreadRng>> {
    source: S,
}

impl Synthesizer {
    /// Creates a synthesizer backed by the thread-local random generator.
    pub fn new() -> Self {
        Self::with_source(RngDigits::thread_local())
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DigitSource> Synthesizer<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Generates a single number of `length` digits starting with `prefix`.
    pub fn synthesize(&mut self, prefix: &str, length: usize) -> Result<DigitSequence> {
        luhn::generate_compliant_number(prefix, length, &mut self.source)
    }

    /// Generates `count` numbers sharing the same prefix and length.
    ///
    /// Fails on the first number that cannot be generated, which only happens when the
    /// prefix or length themselves are unusable.
    pub fn batch(
        &mut self,
        prefix: &str,
        length: usize,
        count: usize,
    ) -> Result<Vec<SyntheticRecord>> {
        debug!(prefix, length, count, "synthesizing batch");
        (1..=count)
            .map(|index| {
                Ok(SyntheticRecord {
                    index,
                    prefix: prefix.to_string(),
                    number: self.synthesize(prefix, length)?,
                })
            })
            .collect()
    }

    /// Gives back the digit source.
    pub fn into_source(self) -> S {
        self.source
    }
}
