use super::{Algorithm, Cipher, CipherError};
use crate::core::alphabet::{self, ALPHABET_LEN};

/// Single-shift substitution.
///
/// Letters move forward by the shift within their own case; everything else
/// is left in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    shift: u8,
}

impl Caesar {
    /// Any `i64` is accepted; negative shifts wrap into `0..26`.
    ///
    /// Keys given as text go through the dispatcher, which reduces decimal
    /// shifts of any length before they get here.
    pub fn new(shift: i64) -> Self {
        Self {
            shift: shift.rem_euclid(ALPHABET_LEN as i64) as u8,
        }
    }

    /// Effective shift in `0..26`.
    pub fn shift(&self) -> u8 {
        self.shift
    }

    fn apply(text: &str, shift: u8) -> String {
        alphabet::map_letters(text, |index| (index + shift) % ALPHABET_LEN)
    }
}

impl Cipher for Caesar {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Caesar
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(Self::apply(text, self.shift))
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(Self::apply(text, (ALPHABET_LEN - self.shift) % ALPHABET_LEN))
    }
}
