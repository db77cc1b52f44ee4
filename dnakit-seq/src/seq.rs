//! Generic validated sequence type.
//!
//! [`ValidatedSeq<A>`] is a newtype over `Vec<u8>` parameterized by an
//! [`Alphabet`] marker type. Construction strips ASCII whitespace, uppercases,
//! and validates every byte. The inner data is always uppercase, so
//! `Deref<Target=[u8]>` and `as_bytes()` are zero-cost and safe to pass to
//! downstream `&[u8]` APIs.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::Deref;

use dnakit_core::{DnakitError, Sequence, Summarizable};

use crate::alphabet::Alphabet;

/// A validated biological sequence parameterized by its alphabet.
///
/// `ValidatedSeq<DnaAlphabet>` is a DNA sequence, `ValidatedSeq<RnaAlphabet>`
/// is RNA, etc. The inner bytes are always uppercase and never contain
/// whitespace.
#[derive(Clone)]
pub struct ValidatedSeq<A: Alphabet> {
    data: Vec<u8>,
    _alphabet: PhantomData<A>,
}

impl<A: Alphabet> ValidatedSeq<A> {
    /// Create a new validated sequence from raw bytes.
    ///
    /// Whitespace (including newlines) is dropped and the rest uppercased.
    /// Returns [`DnakitError::InvalidInput`] if nothing remains, or if any
    /// byte is not in the alphabet. Positions in the error message refer to
    /// the cleaned sequence.
    pub fn new(bytes: impl AsRef<[u8]>) -> dnakit_core::Result<Self> {
        let data: Vec<u8> = bytes
            .as_ref()
            .iter()
            .filter(|b| !b.is_ascii_whitespace())
            .map(|b| b.to_ascii_uppercase())
            .collect();
        if data.is_empty() {
            return Err(DnakitError::InvalidInput(format!(
                "empty {} sequence",
                A::NAME
            )));
        }
        for (i, &b) in data.iter().enumerate() {
            if !A::is_valid(b) {
                return Err(DnakitError::InvalidInput(format!(
                    "invalid {} byte '{}' (0x{:02X}) at position {}",
                    A::NAME,
                    b as char,
                    b,
                    i + 1
                )));
            }
        }
        Ok(Self {
            data,
            _alphabet: PhantomData,
        })
    }

    /// Create a sequence from pre-validated bytes, skipping validation.
    ///
    /// Caller must guarantee all bytes are valid uppercase members of `A`.
    /// Unlike [`ValidatedSeq::new`], an empty vector is accepted.
    pub(crate) fn from_validated(data: Vec<u8>) -> Self {
        Self {
            data,
            _alphabet: PhantomData,
        }
    }

    /// Consume the sequence and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

/// Whether `raw` is a valid sequence over `A` (non-empty after whitespace is
/// stripped, every byte in the alphabet, case-insensitive).
pub fn is_valid<A: Alphabet>(raw: impl AsRef<[u8]>) -> bool {
    let mut seen = false;
    for b in raw.as_ref().iter().filter(|b| !b.is_ascii_whitespace()) {
        if !A::is_valid(b.to_ascii_uppercase()) {
            return false;
        }
        seen = true;
    }
    seen
}

impl<A: Alphabet> Deref for ValidatedSeq<A> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> AsRef<[u8]> for ValidatedSeq<A> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> Sequence for ValidatedSeq<A> {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl<A: Alphabet> Summarizable for ValidatedSeq<A> {
    fn summary(&self) -> String {
        let preview_len = self.data.len().min(20);
        let preview = std::str::from_utf8(&self.data[..preview_len]).unwrap_or("???");
        if self.data.len() > 20 {
            format!("{} sequence ({} bp): {}...", A::NAME, self.data.len(), preview)
        } else {
            format!("{} sequence ({} bp): {}", A::NAME, self.data.len(), preview)
        }
    }
}

impl<A: Alphabet> fmt::Debug for ValidatedSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(\"{}\")", A::NAME, self.as_str())
    }
}

impl<A: Alphabet> fmt::Display for ValidatedSeq<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<A: Alphabet> PartialEq for ValidatedSeq<A> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<A: Alphabet> Eq for ValidatedSeq<A> {}

impl<A: Alphabet> Hash for ValidatedSeq<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

#[cfg(feature = "serde")]
impl<A: Alphabet> serde::Serialize for ValidatedSeq<A> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let s = std::str::from_utf8(&self.data).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(s)
    }
}
