//! Single-pass insertion of fragments into a string
//!
//! All insertion points are offsets into the ORIGINAL string. `apply` copies
//! the spans between insertion points into a fresh buffer in one forward
//! pass, so no running offset has to be carried between insertions and an
//! earlier insertion can never shift a later one.

use std::fmt;
use thiserror::Error;

/// One pure insertion: `fragment` goes in front of the byte at `offset`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub offset: usize,
    pub fragment: String,
}

/// Why a plan could not be applied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpliceError {
    #[error("Insertion offset {offset} is past the end of {len}-byte content")]
    OutOfBounds { offset: usize, len: usize },

    #[error("Insertion offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },
}

/// Ordered set of insertions against one original string
#[derive(Default, Clone, PartialEq, Eq)]
pub struct SplicePlan {
    insertions: Vec<Insertion>,
}

impl SplicePlan {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `fragment` at `offset` of the original string. Insertions at the
    /// same offset keep the order in which they were queued.
    pub fn insert(&mut self, offset: usize, fragment: impl Into<String>) -> &mut Self {
        self.insertions.push(Insertion {
            offset,
            fragment: fragment.into(),
        });
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.insertions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.insertions.is_empty()
    }

    /// Total bytes the plan adds
    #[must_use]
    pub fn inserted_len(&self) -> usize {
        self.insertions.iter().map(|i| i.fragment.len()).sum()
    }

    /// Build the augmented string.
    ///
    /// # Errors
    ///
    /// Fails without producing output when any offset is past the end of
    /// `content` or falls inside a multi-byte character.
    pub fn apply(&self, content: &str) -> Result<String, SpliceError> {
        for insertion in &self.insertions {
            if insertion.offset > content.len() {
                return Err(SpliceError::OutOfBounds {
                    offset: insertion.offset,
                    len: content.len(),
                });
            }
            if !content.is_char_boundary(insertion.offset) {
                return Err(SpliceError::NotCharBoundary {
                    offset: insertion.offset,
                });
            }
        }

        let mut ordered: Vec<&Insertion> = self.insertions.iter().collect();
        ordered.sort_by_key(|insertion| insertion.offset);

        let mut output = String::with_capacity(content.len() + self.inserted_len());
        let mut copied = 0;
        for insertion in ordered {
            output.push_str(&content[copied..insertion.offset]);
            output.push_str(&insertion.fragment);
            copied = insertion.offset;

            log::trace!("Inserted {} bytes at {}", insertion.fragment.len(), insertion.offset);
        }
        output.push_str(&content[copied..]);

        Ok(output)
    }
}

impl fmt::Debug for SplicePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplicePlan")
            .field("insertions", &self.insertions.len())
            .field("inserted_len", &self.inserted_len())
            .finish()
    }
}
