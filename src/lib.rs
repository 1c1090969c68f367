//! # nautilus-namecodes
//!
//! Versioned namecode catalogs and the filename codec built on them.
//!
//! A namecode is an integer address naming one category of metadata about
//! an archival media file: its data type, the way it was derived from the
//! original, its edition and revision, and the modifications applied. The
//! catalog hands out those addresses; the codec packs a file's description
//! into a short filename and unpacks it again.
//!
//! ## Core Contract
//!
//! 1. A catalog is numbered deterministically from static declarations and
//!    never changes afterwards
//! 2. Every codepoint resolves back to exactly one plane, block, section and
//!    label
//! 3. `decode(encode(f)) == f` for every filename whose parts are in the
//!    catalog
//!
//! ## Architecture
//!
//! ```text
//! scheme (declarations) → catalog::builder → AllCodes ─┬→ catalog::lookup (resolve)
//!                                                       ├→ codec::encoder
//!                                                       ├→ codec::decoder
//!                                                       └→ render
//! ```
//!
//! ## Example
//!
//! ```
//! use nautilus_namecodes::{
//!     DataType, Extension, Filename, Gold, LibraryEntry, Listing, SchemeVersion,
//! };
//!
//! let catalog = SchemeVersion::V0_1_0.catalog()?;
//! let filename = Filename::new(
//!     LibraryEntry::parse_parts("aaa", 0x001)?,
//!     Listing::new(1, 1),
//!     Gold::Leaf,
//!     DataType::Index,
//!     Extension::new("test.time")?,
//! );
//!
//! let text = filename.encode(catalog)?;
//! assert_eq!(text, "aaa100001-1536.1792.48.0.test.time");
//! assert_eq!(Filename::decode(catalog, &text)?, filename);
//! # Ok::<(), nautilus_namecodes::NamecodeError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod canonical;
pub mod catalog;
pub mod codec;
pub mod error;
pub mod render;
pub mod scheme;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;

// Re-exports
pub use catalog::{
    AllCodes, Block, BlockCodes, CatalogError, CodepointRange, NamecodeLookup, Plane, PlaneCodes,
    ResolutionError, Section, SectionCodes, TreeStub,
};
pub use codec::{decode, encode, DecodeError, FormatError, GrammarError};
pub use error::{NamecodeError, Result};
pub use scheme::{SchemeVersion, DATATYPE_PLANE, LISTING_PLANE, MODIFICATION_PLANE, WAY_PLANE};
pub use types::{
    ConstructionError, DataType, Extension, Filename, Gold, GoldAlternative, GoldAlternativeBase,
    GoldAlternativeBaseVariant, GoldBase, GoldBaseVariant, ItemNumber, LibraryEntry, LibraryName,
    Listing, Modification, Modifications, WayPaths, WayStage, Ways,
};
pub use canonical::{canonical_hash, canonical_hash_hex, to_canonical_bytes};

/// Codepoints per page, the allocation unit at every catalog level.
pub const PAGE_SIZE: u32 = 0x010;

/// Offset added to item numbers before hex encoding.
pub const ITEM_NUMBER_OFFSET: u32 = 0x10_0000;

/// Item numbers must be below this value.
pub const ITEM_NUMBER_LIMIT: u32 = 0xFFFE;

/// Name shared by every catalog.
pub const CATALOG_NAME: &str = "Nautilus Namecodes";
