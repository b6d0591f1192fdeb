//! One-time verification code generation.

use rand::rngs::OsRng;
use rand::Rng;

/// Generator for numeric one-time codes.
///
/// Draws from the OS CSPRNG; every call is independent and the generator
/// holds no state.
#[derive(Debug, Clone, Copy)]
pub struct CodeGenerator;

impl CodeGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a code of exactly `length` ASCII digits.
    ///
    /// Digits keep the code enterable on any keypad; sampling each digit
    /// separately avoids modulo bias across the whole code.
    pub fn generate(&self, length: usize) -> String {
        let mut rng = OsRng;
        (0..length)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect()
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}
