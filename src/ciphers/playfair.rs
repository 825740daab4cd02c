use super::{Algorithm, Cipher, CipherError};
use crate::core::alphabet;

const SIZE: usize = 5;

/// Padding letter paired with the last character of odd-length plaintext.
pub const PADDING: char = 'x';

/// Grid alphabet: 25 letters, `j` shares a cell with `i`.
const GRID_ALPHABET: &str = "abcdefghiklmnopqrstuvwxyz";

/// 5x5 grid of distinct letters seeded from a Playfair key.
///
/// # Example
///
/// ```
/// use classic_cipher::PlayfairGrid;
///
/// let grid = PlayfairGrid::new("monarchy");
/// assert_eq!(grid.at(0, 0), 'm');
/// assert_eq!(grid.position('j'), grid.position('i'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayfairGrid {
    cells: [[char; SIZE]; SIZE],
    positions: [(usize, usize); 26],
}

impl PlayfairGrid {
    /// Non-letters in `key` are ignored, as are repeated letters.
    pub fn new(key: &str) -> Self {
        let mut cells = [[' '; SIZE]; SIZE];
        let mut positions = [(0, 0); 26];
        let mut placed = [false; 26];
        let mut next = 0;

        let seed = key
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .chain(GRID_ALPHABET.chars())
            .map(fold);

        for c in seed {
            let Some(index) = alphabet::letter_to_index(c) else {
                continue;
            };
            if placed[index as usize] {
                continue;
            }
            placed[index as usize] = true;
            let (row, col) = (next / SIZE, next % SIZE);
            cells[row][col] = c;
            positions[index as usize] = (row, col);
            next += 1;
            if next == SIZE * SIZE {
                break;
            }
        }

        // j lives in i's cell
        let i = (b'i' - b'a') as usize;
        let j = (b'j' - b'a') as usize;
        positions[j] = positions[i];

        Self { cells, positions }
    }

    pub fn at(&self, row: usize, col: usize) -> char {
        self.cells[row % SIZE][col % SIZE]
    }

    /// Row and column of `letter`, or `None` for non-letters.
    pub fn position(&self, letter: char) -> Option<(usize, usize)> {
        alphabet::letter_to_index(letter).map(|index| self.positions[index as usize])
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.iter().map(|row| row.iter().collect())
    }

    /// Substitutes one digraph. `step` is 1 to encrypt, `SIZE - 1` to decrypt.
    fn substitute(&self, a: (usize, usize), b: (usize, usize), step: usize) -> [char; 2] {
        let ((row_a, col_a), (row_b, col_b)) = (a, b);
        if row_a == row_b {
            [self.at(row_a, col_a + step), self.at(row_b, col_b + step)]
        } else if col_a == col_b {
            [self.at(row_a + step, col_a), self.at(row_b + step, col_b)]
        } else {
            [self.at(row_a, col_b), self.at(row_b, col_a)]
        }
    }
}

fn fold(c: char) -> char {
    match c.to_ascii_lowercase() {
        'j' => 'i',
        other => other,
    }
}

/// Digraph substitution over a key-derived 5x5 grid.
///
/// Input is restricted to letters, case-folded to lowercase with `j` read
/// as `i`. Odd-length plaintext gets a trailing `x`, which decryption leaves
/// in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playfair {
    grid: PlayfairGrid,
}

impl Playfair {
    pub fn new(key: &str) -> Result<Self, CipherError> {
        Ok(Self {
            grid: PlayfairGrid::new(key),
        })
    }

    pub fn grid(&self) -> &PlayfairGrid {
        &self.grid
    }

    fn positions(&self, text: &str) -> Result<Vec<(usize, usize)>, CipherError> {
        text.chars()
            .enumerate()
            .map(|(position, c)| {
                self.grid
                    .position(c)
                    .ok_or_else(|| CipherError::invalid_character(c, position, text))
            })
            .collect()
    }

    fn transform(&self, positions: &[(usize, usize)], step: usize) -> String {
        positions
            .chunks(2)
            .flat_map(|pair| {
                let out = self.grid.substitute(pair[0], pair[1], step);
                log::trace!("playfair {:?} -> {:?}", pair, out);
                out
            })
            .collect()
    }
}

impl Cipher for Playfair {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Playfair
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        let mut positions = self.positions(text)?;
        if positions.len() % 2 == 1 {
            positions.extend(self.grid.position(PADDING));
        }
        Ok(self.transform(&positions, 1))
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        let positions = self.positions(text)?;
        if positions.len() % 2 == 1 {
            return Err(CipherError::invalid_length(
                positions.len(),
                "an even number of letters",
                "Playfair ciphertext is always produced in pairs",
            ));
        }
        Ok(self.transform(&positions, SIZE - 1))
    }
}
