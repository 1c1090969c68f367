//! The namecode filename codec.
//!
//! ## Text Format
//!
//! ```text
//! LIB ITEMHEX "-" EDITION "." REVISION "." WAYCODES "." DATATYPE "." EXT
//! ```
//!
//! | Field | Content |
//! |-------|---------|
//! | `LIB` | three same-case letters |
//! | `ITEMHEX` | uppercase hex of `item + 0x100000` |
//! | `EDITION`, `REVISION` | LISTING plane codepoints |
//! | `WAYCODES` | way codes root to leaf, each followed by its modification codes |
//! | `DATATYPE` | DATATYPE plane codepoint |
//! | `EXT` | free-form, may contain dots |
//!
//! All codes are decimal codepoints of the `v.0.1.0` catalog.
//!
//! ## Round-Trip Guarantee
//!
//! For every [`Filename`](crate::types::Filename) whose parts resolve in
//! the catalog, `decode(encode(f)) == f`. Codepoints are unique catalog
//! keys, so distinct filenames always encode to distinct text. Decoding
//! accepts only this canonical text: six uppercase hex digits and plain
//! decimal codes without signs or leading zeros.
//!
//! Way codes are written root first. Older tooling emitted them leaf first,
//! so those filenames fail here with an unexpected-root error.

pub mod decoder;
pub mod encoder;

pub use decoder::{decode, DecodeError, FormatError, GrammarError};
pub use encoder::{data_type_code, encode, listing_codes, modification_code, way_code, way_codes};
