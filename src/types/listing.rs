//! Edition and revision of a listed media item.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Edition and revision numbers, both counted from 1.
///
/// Numbers are checked against the catalog when encoding, so a listing
/// beyond the catalog's generated range fails with a resolution error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Listing {
    /// Edition number.
    pub edition: u32,
    /// Revision number.
    pub revision: u32,
}

impl Listing {
    /// Create a listing.
    pub fn new(edition: u32, revision: u32) -> Self {
        Self { edition, revision }
    }
}

impl Default for Listing {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "edition {} revision {}", self.edition, self.revision)
    }
}
