//! Value objects making up a namecode filename.
//!
//! Every type here validates its fields when constructed, including when
//! deserialized, so the codec only ever sees well-formed input and can
//! limit itself to catalog resolution and grammar errors.

pub mod data_type;
pub mod extension;
pub mod filename;
pub mod library;
pub mod listing;
pub mod modification;
pub mod way;

pub use data_type::DataType;
pub use extension::Extension;
pub use filename::Filename;
pub use library::{ItemNumber, LibraryEntry, LibraryName};
pub use listing::Listing;
pub use modification::{Modification, Modifications};
pub use way::{
    Gold, GoldAlternative, GoldAlternativeBase, GoldAlternativeBaseVariant, GoldBase,
    GoldBaseVariant, WayPaths, WayStage, Ways,
};

/// Error raised when a filename value object is built from invalid fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstructionError {
    /// A modification list names the same modification twice.
    #[error("Modification {0} is listed more than once")]
    DuplicateModification(Modification),

    /// A way stage that records modifications was given none.
    #[error("{0} requires at least one modification")]
    EmptyModifications(Ways),

    /// Way stages that do not form a chain from `Gold`.
    #[error("Way path {0:?} is not a legal provenance chain")]
    InvalidWayPath(String),

    /// Library names are three letters of the same case.
    #[error("Library name {0:?} must be three letters, all upper or all lower case")]
    InvalidLibraryName(String),

    /// Item number is outside `[0, 0xFFFE)`.
    #[error(
        "Item number {0:#X} is out of range, must be below {limit:#X}",
        limit = crate::ITEM_NUMBER_LIMIT
    )]
    ItemNumberOutOfRange(u32),

    /// Extension breaks a filename rule.
    #[error("Extension {extension:?} is invalid: {reason}")]
    InvalidExtension {
        /// The rejected extension.
        extension: String,
        /// Which rule it breaks.
        reason: &'static str,
    },
}
