use super::{Algorithm, Cipher, CipherError};
use crate::core::alphabet::{self, ALPHABET_LEN};

/// Substitution through a 26-letter permutation key.
///
/// Position `i` of the key is the substitute for the `i`-th letter of the
/// alphabet. Keys are case-insensitive.
///
/// # Example
///
/// ```
/// use classic_cipher::{Cipher, MonoAlphabetic};
///
/// let cipher = MonoAlphabetic::new("qwertyuiopasdfghjklzxcvbnm").unwrap();
/// assert_eq!(cipher.encrypt("Hello").unwrap(), "Itssg");
/// assert_eq!(cipher.decrypt("Itssg").unwrap(), "Hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonoAlphabetic {
    substitutes: [u8; ALPHABET_LEN as usize],
    inverse: [Option<u8>; ALPHABET_LEN as usize],
}

impl MonoAlphabetic {
    /// Validates that `key` is a permutation of the alphabet.
    pub fn new(key: &str) -> Result<Self, CipherError> {
        let invalid = |reason: String| CipherError::invalid_key(Algorithm::MonoAlphabetic, reason);

        let length = key.chars().count();
        if length != ALPHABET_LEN as usize {
            return Err(invalid(format!(
                "key must contain exactly 26 letters, got {}",
                length
            )));
        }

        let mut substitutes = [0u8; ALPHABET_LEN as usize];
        let mut inverse = [None; ALPHABET_LEN as usize];

        for (position, c) in key.chars().enumerate() {
            let index = alphabet::letter_to_index(c)
                .ok_or_else(|| invalid(format!("'{}' at position {} is not a letter", c, position)))?;

            if inverse[index as usize].is_some() {
                return Err(invalid(format!(
                    "letter '{}' appears more than once",
                    c.to_ascii_lowercase()
                )));
            }

            substitutes[position] = index;
            inverse[index as usize] = Some(position as u8);
        }

        Ok(Self {
            substitutes,
            inverse,
        })
    }

    /// The key as a lowercase string.
    pub fn key(&self) -> String {
        self.substitutes
            .iter()
            .map(|&i| alphabet::index_to_letter(i, alphabet::LetterCase::Lower))
            .collect()
    }
}

impl Cipher for MonoAlphabetic {
    fn algorithm(&self) -> Algorithm {
        Algorithm::MonoAlphabetic
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        Ok(alphabet::map_letters(text, |index| {
            self.substitutes[index as usize]
        }))
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        alphabet::try_map_letters(text, |index| {
            self.inverse[index as usize].ok_or_else(|| {
                CipherError::invalid_key(
                    Algorithm::MonoAlphabetic,
                    format!(
                        "letter '{}' does not occur in the key",
                        alphabet::index_to_letter(index, alphabet::LetterCase::Lower)
                    ),
                )
            })
        })
    }
}
