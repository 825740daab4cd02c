//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use classic_cipher::prelude::*;
//!
//! let registry = CipherRegistry::load_default().unwrap();
//! let (algorithm, _) = registry.resolve("railfence").unwrap();
//! let cipher = algorithm.cipher("3").unwrap();
//! assert_eq!(cipher.decrypt(&cipher.encrypt("hello world").unwrap()).unwrap(), "hello world");
//! ```

pub use crate::{
    Algorithm,
    Cipher,
    CipherError,
    // Config
    CipherRegistry,
    // Boundary functions
    decrypt,
    encrypt,
};
