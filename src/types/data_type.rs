//! Kind of file a filename names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Data type of a library file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// Tracks other items in the library.
    Index,
    /// Data associated with an artwork.
    Metadata,
    /// The artwork file itself.
    Media,
}

impl DataType {
    /// All data types in catalog order.
    pub const ALL: [DataType; 3] = [DataType::Index, DataType::Metadata, DataType::Media];

    /// Value of this data type in the DataType section.
    pub fn catalog_value(&self) -> &'static str {
        match self {
            DataType::Index => "index",
            DataType::Metadata => "metadata",
            DataType::Media => "media",
        }
    }

    /// Inverse of [`DataType::catalog_value`].
    pub fn from_catalog_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|data_type| data_type.catalog_value() == value)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.catalog_value())
    }
}
