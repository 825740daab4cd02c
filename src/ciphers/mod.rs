pub mod caesar;
pub mod errors;
pub mod hill;
pub mod matrix;
pub mod mono_alphabetic;
pub mod playfair;
pub mod rail_fence;

use std::fmt;
use std::str::FromStr;

use crate::core::alphabet::ALPHABET_LEN;

pub use caesar::Caesar;
pub use errors::{CipherError, find_closest_name};
pub use hill::Hill;
pub use matrix::KeyMatrix;
pub use mono_alphabetic::MonoAlphabetic;
pub use playfair::{Playfair, PlayfairGrid};
pub use rail_fence::RailFence;

/// A classical cipher with its key already parsed.
///
/// Implementations are immutable once constructed, so one value can serve
/// any number of concurrent calls.
pub trait Cipher: Send + Sync {
    /// Which algorithm this cipher implements.
    fn algorithm(&self) -> Algorithm;

    fn encrypt(&self, text: &str) -> Result<String, CipherError>;

    fn decrypt(&self, text: &str) -> Result<String, CipherError>;
}

/// Identifier for one of the supported ciphers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Caesar,
    MonoAlphabetic,
    RailFence,
    Hill,
    Playfair,
}

impl Algorithm {
    /// All algorithms, in display order.
    pub fn all() -> &'static [Algorithm] {
        &[
            Algorithm::Caesar,
            Algorithm::MonoAlphabetic,
            Algorithm::RailFence,
            Algorithm::Hill,
            Algorithm::Playfair,
        ]
    }

    /// Canonical name, as accepted by [`Algorithm::from_name`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Caesar => "Caesar Cipher",
            Algorithm::MonoAlphabetic => "Mono Alphabetic Cipher",
            Algorithm::RailFence => "Rail Fence Cipher",
            Algorithm::Hill => "Hill Cipher",
            Algorithm::Playfair => "Playfair Cipher",
        }
    }

    /// Looks up an algorithm by its exact canonical name.
    pub fn from_name(name: &str) -> Result<Self, CipherError> {
        Algorithm::all()
            .iter()
            .copied()
            .find(|algorithm| algorithm.as_str() == name)
            .ok_or_else(|| CipherError::unsupported(name, &Self::canonical_names()))
    }

    pub fn canonical_names() -> Vec<String> {
        Algorithm::all()
            .iter()
            .map(|a| a.as_str().to_string())
            .collect()
    }

    /// Parses `key` into this algorithm's key shape and builds the cipher.
    ///
    /// # Example
    ///
    /// ```
    /// use classic_cipher::{Algorithm, Cipher};
    ///
    /// let cipher = Algorithm::Caesar.cipher("3").unwrap();
    /// assert_eq!(cipher.encrypt("abc").unwrap(), "def");
    /// ```
    pub fn cipher(self, key: &str) -> Result<Box<dyn Cipher>, CipherError> {
        log::debug!("parsing {} key ({} chars)", self, key.chars().count());
        log::trace!("key: {:?}", key);

        if key.is_empty() {
            return Err(CipherError::invalid_key(self, "key must not be empty"));
        }

        let cipher: Box<dyn Cipher> = match self {
            Algorithm::Caesar => Box::new(Caesar::new(parse_shift(key)?)),
            Algorithm::MonoAlphabetic => Box::new(MonoAlphabetic::new(key)?),
            Algorithm::RailFence => {
                let (negative, digits) = split_decimal(self, key)?;
                if negative {
                    return Err(CipherError::invalid_key(self, "rail count must be at least 2"));
                }
                // Counts past the text length all act alike, so overflow saturates
                let rails = digits.parse::<usize>().unwrap_or(usize::MAX);
                Box::new(RailFence::new(rails)?)
            }
            Algorithm::Hill => Box::new(Hill::new(key)?),
            Algorithm::Playfair => Box::new(Playfair::new(key)?),
        };
        Ok(cipher)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Splits a trimmed decimal integer of any length into its sign and digits.
fn split_decimal(algorithm: Algorithm, key: &str) -> Result<(bool, &str), CipherError> {
    let trimmed = key.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CipherError::invalid_key(
            algorithm,
            format!("expected an integer, got '{}'", trimmed),
        ));
    }
    Ok((negative, digits))
}

/// Reduces a decimal shift of any length modulo 26, digit by digit.
fn parse_shift(key: &str) -> Result<i64, CipherError> {
    let (negative, digits) = split_decimal(Algorithm::Caesar, key)?;
    let modulus = i64::from(ALPHABET_LEN);
    let residue = digits
        .bytes()
        .fold(0, |acc, b| (acc * 10 + i64::from(b - b'0')) % modulus);
    Ok(if negative { -residue } else { residue })
}

/// Encrypts `text` with the algorithm named `algorithm`.
///
/// # Example
///
/// ```
/// use classic_cipher::encrypt;
///
/// let out = encrypt("Caesar Cipher", "3", "Attack at Dawn!").unwrap();
/// assert_eq!(out, "Dwwdfn dw Gdzq!");
/// ```
pub fn encrypt(algorithm: &str, key: &str, text: &str) -> Result<String, CipherError> {
    let algorithm = Algorithm::from_name(algorithm)?;
    log::debug!("encrypting {} chars with {}", text.chars().count(), algorithm);
    algorithm.cipher(key)?.encrypt(text)
}

/// Decrypts `text` with the algorithm named `algorithm`.
pub fn decrypt(algorithm: &str, key: &str, text: &str) -> Result<String, CipherError> {
    let algorithm = Algorithm::from_name(algorithm)?;
    log::debug!("decrypting {} chars with {}", text.chars().count(), algorithm);
    algorithm.cipher(key)?.decrypt(text)
}
