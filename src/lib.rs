//! Classical substitution and transposition ciphers behind one dispatch
//! interface.
//!
//! None of these ciphers offer any real security. They are here for
//! teaching, puzzles and legacy data.
//!
//! # Example
//!
//! ```
//! use classic_cipher::{decrypt, encrypt};
//!
//! let secret = encrypt("Playfair Cipher", "monarchy", "instruments").unwrap();
//! assert_eq!(secret, "gatlmzclrqxa");
//! assert_eq!(decrypt("Playfair Cipher", "monarchy", &secret).unwrap(), "instrumentsx");
//! ```

mod ciphers;
mod core;
pub mod prelude;

pub use ciphers::{
    Algorithm, Caesar, Cipher, CipherError, Hill, KeyMatrix, MonoAlphabetic, Playfair,
    PlayfairGrid, RailFence, decrypt, encrypt, find_closest_name,
};
pub use crate::core::alphabet;
pub use crate::core::config::{CipherConfig, CipherRegistry, Settings};

/// Padding letter appended by Playfair encryption to odd-length text.
pub use ciphers::playfair::PADDING as PLAYFAIR_PADDING;

#[cfg(test)]
mod tests;
