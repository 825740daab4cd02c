use std::fmt;

use super::Algorithm;

/// Errors that can occur while parsing a key or running a cipher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The algorithm identifier is not one the dispatcher recognizes
    UnsupportedAlgorithm {
        name: String,
        suggestion: Option<String>,
    },
    /// The key cannot be parsed into the shape the algorithm requires
    InvalidKey { algorithm: Algorithm, reason: String },
    /// The text length violates a block or digraph constraint
    InvalidLength {
        actual: usize,
        expected: String,
        hint: String,
    },
    /// Hill key matrix has no inverse modulo 26
    NonInvertibleKey { determinant: i64 },
    /// The input contains a character outside the algorithm's letter domain
    InvalidCharacter {
        char: char,
        position: usize,
        input: String,
    },
}

impl CipherError {
    /// Create an UnsupportedAlgorithm error, suggesting the closest known name.
    pub fn unsupported(name: &str, known: &[String]) -> Self {
        CipherError::UnsupportedAlgorithm {
            name: name.to_string(),
            suggestion: find_closest_name(name, known),
        }
    }

    pub fn invalid_key(algorithm: Algorithm, reason: impl Into<String>) -> Self {
        CipherError::InvalidKey {
            algorithm,
            reason: reason.into(),
        }
    }

    /// Create an InvalidLength error
    pub fn invalid_length(
        actual: usize,
        expected: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        CipherError::InvalidLength {
            actual,
            expected: expected.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidCharacter error with context
    pub fn invalid_character(c: char, position: usize, input: &str) -> Self {
        // Truncate long inputs
        let display_input = if input.chars().count() > 60 {
            format!("{}...", input.chars().take(60).collect::<String>())
        } else {
            input.to_string()
        };

        CipherError::InvalidCharacter {
            char: c,
            position,
            input: display_input,
        }
    }
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            CipherError::UnsupportedAlgorithm { name, suggestion } => {
                write_header(f, use_color, &format!("unsupported algorithm '{}'", name))?;
                writeln!(f)?;
                if let Some(suggestion) = suggestion {
                    writeln!(f)?;
                    write_hint(f, use_color, &format!("did you mean '{}'?", suggestion))?;
                    writeln!(f)?;
                    write!(f, "      ")?;
                } else {
                    writeln!(f)?;
                    write_hint_label(f, use_color)?;
                }
                write!(f, "run `classic-cipher config list` to see all ciphers")
            }
            CipherError::InvalidKey { algorithm, reason } => {
                write_header(f, use_color, &format!("invalid key for {}", algorithm))?;
                writeln!(f)?;
                writeln!(f)?;
                write!(f, "  {}", reason)
            }
            CipherError::InvalidLength {
                actual,
                expected,
                hint,
            } => {
                write_header(f, use_color, "invalid text length")?;
                writeln!(f)?;
                writeln!(f)?;
                writeln!(f, "  input is {} characters, expected {}", actual, expected)?;
                writeln!(f)?;
                write_hint(f, use_color, hint)
            }
            CipherError::NonInvertibleKey { determinant } => {
                write_header(f, use_color, "key matrix is not invertible modulo 26")?;
                writeln!(f)?;
                writeln!(f)?;
                writeln!(
                    f,
                    "  determinant is {} (mod 26), which shares a factor with 26",
                    determinant
                )?;
                writeln!(f)?;
                write_hint(
                    f,
                    use_color,
                    "choose a key whose determinant is odd and not a multiple of 13",
                )
            }
            CipherError::InvalidCharacter {
                char: c,
                position,
                input,
            } => {
                write_header(
                    f,
                    use_color,
                    &format!("invalid character '{}' at position {}", c, position),
                )?;
                writeln!(f)?;
                writeln!(f)?;

                // Show input with caret pointing at error position
                writeln!(f, "  {}", input)?;
                write!(f, "  {}", " ".repeat(*position))?;
                if use_color {
                    writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                } else {
                    writeln!(f, "^")?;
                }
                writeln!(f)?;
                write_hint(f, use_color, "only the letters a-z are accepted")
            }
        }
    }
}

impl std::error::Error for CipherError {}

fn write_header(f: &mut fmt::Formatter<'_>, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;31merror:\x1b[0m {}", message)
    } else {
        write!(f, "error: {}", message)
    }
}

fn write_hint_label(f: &mut fmt::Formatter<'_>, use_color: bool) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;36mhint:\x1b[0m ")
    } else {
        write!(f, "hint: ")
    }
}

fn write_hint(f: &mut fmt::Formatter<'_>, use_color: bool, hint: &str) -> fmt::Result {
    write_hint_label(f, use_color)?;
    write!(f, "{}", hint)
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stderr is a terminal
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching cipher name, ignoring case.
pub fn find_closest_name(name: &str, available: &[String]) -> Option<String> {
    let needle = name.to_lowercase();
    let mut best_match = None;
    let mut best_distance = usize::MAX;

    for candidate in available {
        let distance = levenshtein_distance(&needle, &candidate.to_lowercase());

        // 1-2 character typos for short names, up to 3 for longer names
        let threshold = if name.len() < 5 { 2 } else { 3 };

        if distance < best_distance && distance <= threshold {
            best_distance = distance;
            best_match = Some(candidate.clone());
        }
    }

    best_match
}
