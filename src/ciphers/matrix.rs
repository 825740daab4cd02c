//! Square matrices over the integers modulo 26.
//!
//! Determinants and adjugates use plain cofactor expansion, which is
//! factorial in the dimension. Hill keys in practice are 2x2 to 4x4.

use num_integer::Integer;

use super::{Algorithm, CipherError};
use crate::core::alphabet::{self, ALPHABET_LEN};

const MODULUS: i64 = ALPHABET_LEN as i64;

/// Row-major `d x d` key matrix for the Hill cipher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatrix {
    dimension: usize,
    entries: Vec<i64>,
}

impl KeyMatrix {
    /// Builds the matrix from a key of `d * d` letters, read row by row.
    ///
    /// # Example
    ///
    /// ```
    /// use classic_cipher::KeyMatrix;
    ///
    /// let matrix = KeyMatrix::from_key("hill").unwrap();
    /// assert_eq!(matrix.dimension(), 2);
    /// assert_eq!(matrix.row(0), &[7, 8]);
    /// assert_eq!(matrix.row(1), &[11, 11]);
    /// ```
    pub fn from_key(key: &str) -> Result<Self, CipherError> {
        let invalid = |reason: String| CipherError::invalid_key(Algorithm::Hill, reason);

        let length = key.chars().count();
        let dimension = length.isqrt();
        if length == 0 || dimension * dimension != length {
            return Err(invalid(format!(
                "key length must be a perfect square (4, 9, 16, ...), got {}",
                length
            )));
        }

        let entries = key
            .chars()
            .enumerate()
            .map(|(position, c)| {
                alphabet::letter_to_index(c)
                    .map(i64::from)
                    .ok_or_else(|| invalid(format!("'{}' at position {} is not a letter", c, position)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { dimension, entries })
    }

    fn from_entries(dimension: usize, entries: Vec<i64>) -> Self {
        debug_assert_eq!(entries.len(), dimension * dimension);
        Self { dimension, entries }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn row(&self, row: usize) -> &[i64] {
        &self.entries[row * self.dimension..(row + 1) * self.dimension]
    }

    fn get(&self, row: usize, col: usize) -> i64 {
        self.entries[row * self.dimension + col]
    }

    /// The matrix without `skip_row` and `skip_col`.
    fn minor(&self, skip_row: usize, skip_col: usize) -> KeyMatrix {
        let entries = (0..self.dimension)
            .filter(|&row| row != skip_row)
            .flat_map(|row| {
                (0..self.dimension)
                    .filter(move |&col| col != skip_col)
                    .map(move |col| self.get(row, col))
            })
            .collect();
        KeyMatrix::from_entries(self.dimension - 1, entries)
    }

    /// Determinant modulo 26, in `0..26`, by cofactor expansion along the
    /// first row.
    ///
    /// Every term is reduced as it is formed, so no intermediate value grows
    /// past `26 * 26`.
    pub fn determinant(&self) -> i64 {
        if self.dimension == 1 {
            return self.entries[0].mod_floor(&MODULUS);
        }

        (0..self.dimension)
            .map(|col| {
                (sign(col) * self.get(0, col) * self.minor(0, col).determinant()).mod_floor(&MODULUS)
            })
            .fold(0, |acc, term| (acc + term).mod_floor(&MODULUS))
    }

    fn cofactor(&self, row: usize, col: usize) -> i64 {
        if self.dimension == 1 {
            return 1;
        }
        sign(row + col) * self.minor(row, col).determinant()
    }

    /// Transposed cofactor matrix, reduced modulo 26.
    pub fn adjugate(&self) -> KeyMatrix {
        let d = self.dimension;
        let mut entries = vec![0; d * d];
        for row in 0..d {
            for col in 0..d {
                entries[col * d + row] = self.cofactor(row, col).mod_floor(&MODULUS);
            }
        }
        KeyMatrix::from_entries(d, entries)
    }

    /// Inverse modulo 26, or `NonInvertibleKey` when the determinant shares a
    /// factor with 26.
    pub fn inverse(&self) -> Result<KeyMatrix, CipherError> {
        let determinant = self.determinant();
        let determinant_inverse =
            mod_inverse(determinant).ok_or(CipherError::NonInvertibleKey { determinant })?;

        let adjugate = self.adjugate();
        let entries = adjugate
            .entries
            .iter()
            .map(|&x| (x * determinant_inverse).mod_floor(&MODULUS))
            .collect();
        Ok(KeyMatrix::from_entries(self.dimension, entries))
    }

    /// Multiplies the matrix by a column vector of letter indices, mod 26.
    pub fn apply(&self, block: &[u8]) -> Vec<u8> {
        debug_assert_eq!(block.len(), self.dimension);
        (0..self.dimension)
            .map(|row| {
                let sum: i64 = self
                    .row(row)
                    .iter()
                    .zip(block)
                    .map(|(&m, &v)| m * i64::from(v))
                    .sum();
                sum.mod_floor(&MODULUS) as u8
            })
            .collect()
    }
}

fn sign(n: usize) -> i64 {
    if n.is_even() { 1 } else { -1 }
}

/// Multiplicative inverse of `n` modulo 26, by search over `1..26`.
pub fn mod_inverse(n: i64) -> Option<i64> {
    let n = n.mod_floor(&MODULUS);
    (1..MODULUS).find(|k| (n * k).mod_floor(&MODULUS) == 1)
}
