//! Library identity: a three-letter library name and an item number.
//!
//! The two are rendered together as the filename prefix, e.g. `aaa100001`:
//! the library name followed by the item number offset by
//! [`ITEM_NUMBER_OFFSET`](crate::ITEM_NUMBER_OFFSET) in uppercase hex. The
//! offset keeps the hex field at a fixed width of six digits.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use super::ConstructionError;
use crate::{ITEM_NUMBER_LIMIT, ITEM_NUMBER_OFFSET};

/// Three ASCII letters, all lower case or all upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LibraryName(String);

impl LibraryName {
    /// Pattern for valid library names.
    const PATTERN: &'static str = r"^([a-z]{3}|[A-Z]{3})$";

    /// Length of every library name.
    pub const LEN: usize = 3;

    /// Create a validated library name.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::InvalidLibraryName`] unless `name` is
    /// three same-case ASCII letters.
    pub fn new(name: impl Into<String>) -> Result<Self, ConstructionError> {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let pattern =
            PATTERN.get_or_init(|| Regex::new(Self::PATTERN).expect("library name pattern"));

        let name = name.into();
        if pattern.is_match(&name) {
            Ok(Self(name))
        } else {
            Err(ConstructionError::InvalidLibraryName(name))
        }
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LibraryName {
    type Error = ConstructionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LibraryName> for String {
    fn from(name: LibraryName) -> Self {
        name.0
    }
}

impl fmt::Display for LibraryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Number of an item within its library, below [`ITEM_NUMBER_LIMIT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ItemNumber(u32);

impl ItemNumber {
    /// Create a validated item number.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::ItemNumberOutOfRange`] if `number` is not
    /// below [`ITEM_NUMBER_LIMIT`].
    pub fn new(number: u32) -> Result<Self, ConstructionError> {
        if number < ITEM_NUMBER_LIMIT {
            Ok(Self(number))
        } else {
            Err(ConstructionError::ItemNumberOutOfRange(number))
        }
    }

    /// The raw number.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for ItemNumber {
    type Error = ConstructionError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemNumber> for u32 {
    fn from(number: ItemNumber) -> Self {
        number.0
    }
}

/// A library name paired with an item number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LibraryEntry {
    /// Owning library.
    pub library: LibraryName,
    /// Item within the library.
    pub item: ItemNumber,
}

impl LibraryEntry {
    /// Create a library entry from validated parts.
    pub fn new(library: LibraryName, item: ItemNumber) -> Self {
        Self { library, item }
    }

    /// Validate and pair a raw library name and item number.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] if either part is invalid.
    pub fn parse_parts(library: &str, item: u32) -> Result<Self, ConstructionError> {
        Ok(Self::new(LibraryName::new(library)?, ItemNumber::new(item)?))
    }
}

impl fmt::Display for LibraryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:X}", self.library, self.item.get() + ITEM_NUMBER_OFFSET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_name_rules() {
        assert!(LibraryName::new("aaa").is_ok());
        assert!(LibraryName::new("XYZ").is_ok());

        for bad in ["aA", "aAa", "abcd", "a1c", "", "ééé"] {
            assert_eq!(
                LibraryName::new(bad),
                Err(ConstructionError::InvalidLibraryName(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_item_number_bounds() {
        assert!(ItemNumber::new(0).is_ok());
        assert!(ItemNumber::new(ITEM_NUMBER_LIMIT - 1).is_ok());
        assert_eq!(
            ItemNumber::new(ITEM_NUMBER_LIMIT),
            Err(ConstructionError::ItemNumberOutOfRange(ITEM_NUMBER_LIMIT))
        );
    }

    #[test]
    fn test_entry_display_is_fixed_width() {
        let entry = LibraryEntry::parse_parts("aaa", 0x001).unwrap();
        assert_eq!(entry.to_string(), "aaa100001");

        let entry = LibraryEntry::parse_parts("ZZZ", 0xFFFD).unwrap();
        assert_eq!(entry.to_string(), "ZZZ10FFFD");
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Result<LibraryEntry, _> = serde_json::from_str(r#"{"library":"abc","item":7}"#);
        assert!(ok.is_ok());

        let bad: Result<LibraryEntry, _> = serde_json::from_str(r#"{"library":"abC","item":7}"#);
        assert!(bad.is_err());

        let bad: Result<LibraryEntry, _> =
            serde_json::from_str(r#"{"library":"abc","item":65535}"#);
        assert!(bad.is_err());
    }
}
