//! Letter <-> index mapping shared by the substitution ciphers.
//!
//! Only ASCII letters have an index. Everything else passes through the
//! ciphers untouched, and the case of each input letter decides the case of
//! the letter written in its place.

/// Number of letters in the working alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// Case of an ASCII letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterCase {
    Upper,
    Lower,
}

impl LetterCase {
    fn base(self) -> u8 {
        match self {
            LetterCase::Upper => b'A',
            LetterCase::Lower => b'a',
        }
    }
}

/// Returns the 0-25 index of an ASCII letter, regardless of case.
///
/// # Example
///
/// ```
/// use classic_cipher::alphabet::letter_to_index;
///
/// assert_eq!(letter_to_index('a'), Some(0));
/// assert_eq!(letter_to_index('Z'), Some(25));
/// assert_eq!(letter_to_index('!'), None);
/// ```
pub fn letter_to_index(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_lowercase() as u8 - b'a')
    } else {
        None
    }
}

/// Case of `c`, or `None` for non-letters.
pub fn case_of(c: char) -> Option<LetterCase> {
    if c.is_ascii_uppercase() {
        Some(LetterCase::Upper)
    } else if c.is_ascii_lowercase() {
        Some(LetterCase::Lower)
    } else {
        None
    }
}

/// Maps an index back to a letter in the requested case.
///
/// Indices are reduced modulo 26, so the result always stays inside the
/// letter range of `case`.
pub fn index_to_letter(index: u8, case: LetterCase) -> char {
    (case.base() + index % ALPHABET_LEN) as char
}

/// Applies `f` to the index of every letter in `text`, re-applying the
/// original case to the result. Non-letters are copied as-is.
pub fn map_letters<F>(text: &str, mut f: F) -> String
where
    F: FnMut(u8) -> u8,
{
    text.chars()
        .map(|c| match (letter_to_index(c), case_of(c)) {
            (Some(index), Some(case)) => index_to_letter(f(index), case),
            _ => c,
        })
        .collect()
}

/// Fallible variant of [`map_letters`]; stops at the first error.
pub fn try_map_letters<F, E>(text: &str, mut f: F) -> Result<String, E>
where
    F: FnMut(u8) -> Result<u8, E>,
{
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match (letter_to_index(c), case_of(c)) {
            (Some(index), Some(case)) => out.push(index_to_letter(f(index)?, case)),
            _ => out.push(c),
        }
    }
    Ok(out)
}
