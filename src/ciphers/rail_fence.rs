use super::{Algorithm, Cipher, CipherError};

/// Zigzag transposition across a fixed number of rails.
///
/// Every character, letter or not, is moved; nothing is added or dropped.
///
/// # Example
///
/// ```
/// use classic_cipher::{Cipher, RailFence};
///
/// let fence = RailFence::new(3).unwrap();
/// let encrypted = fence.encrypt("WEAREDISCOVEREDFLEEATONCE").unwrap();
/// assert_eq!(encrypted, "WECRLTEERDSOEEFEAOCAIVDEN");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailFence {
    rails: usize,
}

impl RailFence {
    pub fn new(rails: usize) -> Result<Self, CipherError> {
        if rails < 2 {
            return Err(CipherError::invalid_key(
                Algorithm::RailFence,
                format!("rail count must be at least 2, got {}", rails),
            ));
        }
        Ok(Self { rails })
    }

    pub fn rails(&self) -> usize {
        self.rails
    }

    /// Rails actually used for a text of `len` characters.
    ///
    /// Once the count reaches the text length every character sits on its own
    /// rail, so larger counts give the same result.
    fn span(&self, len: usize) -> usize {
        self.rails.min(len.max(2))
    }

    /// Rail index visited at each of `len` steps of the zigzag walk.
    fn walk(rails: usize, len: usize) -> impl Iterator<Item = usize> {
        let period = 2 * (rails - 1);
        (0..len).map(move |step| {
            let phase = step % period;
            if phase < rails { phase } else { period - phase }
        })
    }
}

impl Cipher for RailFence {
    fn algorithm(&self) -> Algorithm {
        Algorithm::RailFence
    }

    fn encrypt(&self, text: &str) -> Result<String, CipherError> {
        let len = text.chars().count();
        let rails = self.span(len);
        let mut fence = vec![String::new(); rails];
        for (c, rail) in text.chars().zip(Self::walk(rails, len)) {
            fence[rail].push(c);
        }
        Ok(fence.concat())
    }

    fn decrypt(&self, text: &str) -> Result<String, CipherError> {
        let chars: Vec<char> = text.chars().collect();
        let rails = self.span(chars.len());

        // Rail lengths from a first walk
        let mut lengths = vec![0usize; rails];
        for rail in Self::walk(rails, chars.len()) {
            lengths[rail] += 1;
        }

        // Cut the ciphertext into per-rail runs
        let mut fence = Vec::with_capacity(rails);
        let mut offset = 0;
        for length in lengths {
            fence.push(chars[offset..offset + length].iter());
            offset += length;
        }

        // Second walk drains each rail in order
        let mut out = String::with_capacity(text.len());
        for rail in Self::walk(rails, chars.len()) {
            if let Some(&c) = fence[rail].next() {
                out.push(c);
            }
        }
        Ok(out)
    }
}
