/// A provider of random decimal digits.
///
/// Generation draws its filler digits through this trait so callers can choose the
/// entropy source: the thread-local generator in production, a seeded generator for
/// reproducible batches, or a fixed script in tests.
pub trait DigitSource {
    /// Returns the next digit. Values above 9 are reduced modulo 10 by the caller.
    fn next_digit(&mut self) -> u8;
}

impl<S: DigitSource + ?Sized> DigitSource for &mut S {
    fn next_digit(&mut self) -> u8 {
        (**self).next_digit()
    }
}

impl<S: DigitSource + ?Sized> DigitSource for Box<S> {
    fn next_digit(&mut self) -> u8 {
        (**self).next_digit()
    }
}

pub type DigitSourceBox = Box<dyn DigitSource>;
