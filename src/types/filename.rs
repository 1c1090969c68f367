//! The unit the codec encodes and decodes.

use serde::{Deserialize, Serialize};

use super::{DataType, Extension, Gold, LibraryEntry, Listing};
use crate::catalog::{AllCodes, ResolutionError};
use crate::codec::{decode, encode, DecodeError};

/// Everything a namecode filename records about one file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Filename {
    /// Library and item the file belongs to.
    pub library_entry: LibraryEntry,
    /// Edition and revision.
    pub listing: Listing,
    /// Provenance path of the file.
    pub provenance: Gold,
    /// Kind of file.
    pub data_type: DataType,
    /// Free-form suffix.
    pub extension: Extension,
}

impl Filename {
    /// Create a filename from validated parts.
    pub fn new(
        library_entry: LibraryEntry,
        listing: Listing,
        provenance: Gold,
        data_type: DataType,
        extension: Extension,
    ) -> Self {
        Self {
            library_entry,
            listing,
            provenance,
            data_type,
            extension,
        }
    }

    /// Encode against `catalog`.
    ///
    /// # Errors
    ///
    /// See [`encode`].
    pub fn encode(&self, catalog: &AllCodes) -> Result<String, ResolutionError> {
        encode(catalog, self)
    }

    /// Decode `text` against `catalog`.
    ///
    /// # Errors
    ///
    /// See [`decode`].
    pub fn decode(catalog: &AllCodes, text: &str) -> Result<Self, DecodeError> {
        decode(catalog, text)
    }
}
