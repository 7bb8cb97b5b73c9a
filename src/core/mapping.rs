//! Cipher-to-plaintext letter mapping
//!
//! A mapping is a partial function from cipher symbols to plaintext letters.
//! Entries keep their insertion order, which the refiner relies on when it
//! enumerates symbol pairs.

use rustc_hash::FxHashMap;
use std::fmt;

/// Ordered partial substitution key
///
/// Spaces and characters without an entry pass through [`Mapping::apply`] unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    pairs: Vec<(char, char)>,
    index: FxHashMap<char, usize>,
}

impl Mapping {
    /// Create an empty mapping
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of mapped cipher symbols
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Map `cipher` to `plain`
    ///
    /// Re-mapping an existing symbol replaces its plaintext letter in place
    /// without changing its position.
    pub fn insert(&mut self, cipher: char, plain: char) {
        if let Some(&slot) = self.index.get(&cipher) {
            self.pairs[slot].1 = plain;
        } else {
            self.index.insert(cipher, self.pairs.len());
            self.pairs.push((cipher, plain));
        }
    }

    /// Plaintext letter assigned to a cipher symbol
    #[inline]
    #[must_use]
    pub fn get(&self, cipher: char) -> Option<char> {
        self.index.get(&cipher).map(|&slot| self.pairs[slot].1)
    }

    #[inline]
    #[must_use]
    pub fn contains_symbol(&self, cipher: char) -> bool {
        self.index.contains_key(&cipher)
    }

    /// Check whether any cipher symbol already maps to `plain`
    #[must_use]
    pub fn contains_plain(&self, plain: char) -> bool {
        self.pairs.iter().any(|&(_, p)| p == plain)
    }

    /// Iterate over `(cipher, plain)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.pairs.iter().copied()
    }

    /// Cipher symbols in insertion order
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.pairs.iter().map(|&(c, _)| c)
    }

    /// Copy of this mapping with the plaintext letters at slots `i` and `j` exchanged
    ///
    /// # Panics
    /// Panics if either slot is out of range.
    #[must_use]
    pub fn swapped(&self, i: usize, j: usize) -> Self {
        let mut next = self.clone();
        let plain_i = next.pairs[i].1;
        next.pairs[i].1 = next.pairs[j].1;
        next.pairs[j].1 = plain_i;
        next
    }

    /// True when no two cipher symbols share a plaintext letter
    #[must_use]
    pub fn is_injective(&self) -> bool {
        let mut seen = rustc_hash::FxHashSet::default();
        self.pairs.iter().all(|&(_, p)| seen.insert(p))
    }

    /// Decrypt `text` with this mapping
    ///
    /// # Examples
    /// ```
    /// use signal_decoder::core::Mapping;
    ///
    /// let mut mapping = Mapping::new();
    /// mapping.insert('X', 'H');
    /// mapping.insert('Q', 'I');
    /// assert_eq!(mapping.apply("XQ, XQ!"), "HI, HI!");
    /// ```
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        text.chars()
            .map(|c| {
                if c == ' ' {
                    c
                } else {
                    self.get(c).unwrap_or(c)
                }
            })
            .collect()
    }
}

/// Render ciphertext to plaintext with `mapping`
///
/// Free-function form of [`Mapping::apply`].
#[must_use]
pub fn apply_substitution(text: &str, mapping: &Mapping) -> String {
    mapping.apply(text)
}

impl FromIterator<(char, char)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (char, char)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (cipher, plain) in iter {
            mapping.insert(cipher, plain);
        }
        mapping
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (cipher, plain)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{cipher}→{plain}")?;
        }
        Ok(())
    }
}
