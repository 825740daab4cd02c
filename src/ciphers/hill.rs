use super::{Algorithm, Cipher, CipherError, KeyMatrix};
use crate::core::alphabet::{self, LetterCase};

/// Block substitution through a `d x d` key matrix modulo 26.
///
/// Works on letters only and always produces lowercase output. Text length
/// must be a multiple of the matrix dimension; callers pad as needed.
///
/// # Example
///
/// ```
/// use classic_cipher::{Cipher, Hill};
///
/// let hill = Hill::new("gybnqkurp").unwrap();
/// assert_eq!(hill.encrypt("act").unwrap(), "poh");
/// assert_eq!(hill.decrypt("poh").unwrap(), "act");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hill {
    matrix: KeyMatrix,
}

impl Hill {
    pub fn new(key: &str) -> Result<Self, CipherError> {
        Ok(Self {
            matrix: KeyMatrix::from_key(key)?,
        })
    }

    pub fn matrix(&self) -> &KeyMatrix {
        &self.matrix
    }

    /// Letter indices of `text`, checking the block-length constraint.
    fn indices(&self, text: &str) -> Result<Vec<u8>, CipherError> {
        let dimension = self.matrix.dimension();
        let length = text.chars().count();
        if length % dimension != 0 {
            return Err(CipherError::invalid_length(
                length,
                format!("a multiple of {}", dimension),
                "text length must be a multiple of the key's dimension; pad the text",
            ));
        }

        text.chars()
            .enumerate()
            .map(|(position, c)| {
                alphabet::letter_to_index(c)
                    .ok_or_else(|| CipherError::invalid_character(c, position, text))
            })
            .collect()
    }

    fn transform(matrix: &KeyMatrix, indices: &[u8]) -> String {
        indices
            .chunks(matrix.dimension())
            .flat_map(|block| {
                let product = matrix.apply(block);
                log::trace!("hill block {:?} -> {:?}", block, product);
                product
            })
            .map(|index| alphabet::index_to_letter(index, LetterCase::Lower))
            .collect()
    }
}

impl Cipher for Hill {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Hill
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        let indices = self.indices(text)?;
        Ok(Self::transform(&self.matrix, &indices))
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        let inverse = self.matrix.inverse()?;
        let indices = self.indices(text)?;
        Ok(Self::transform(&inverse, &indices))
    }
}
