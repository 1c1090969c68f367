//! Scheme `v.0.0.1`: the first published catalog.
//!
//! Kept for catalog views only. It has no WAY or LISTING plane, so the
//! filename codec cannot resolve against it.

use super::modifications::{edition_block, modification_blocks, revision_block};
use super::MODIFICATION_PLANE;
use crate::catalog::{AllCodes, Block, CatalogError, Plane, Section};
use crate::CATALOG_NAME;

/// Scheme version string.
pub const SCHEME_VERSION: &str = "v.0.0.1";

/// Name of the basic type plane.
pub const BASICTYPE_PLANE: &str = "BASICTYPE";
/// Name of the purpose plane.
pub const PURPOSE_PLANE: &str = "PURPOSE";

/// Start of the BASICTYPE plane.
pub const BASICTYPE_START: u32 = 0x000;
/// Start of the PURPOSE plane.
pub const PURPOSE_START: u32 = 0x030;
/// Start of the MODIFICATION plane.
pub const MODIFICATION_START: u32 = 0x600;

const BASIC_TYPES: [&str; 3] = ["index", "metadata", "media"];

fn basictype_plane() -> Plane {
    Plane::new(
        BASICTYPE_PLANE,
        vec![Block::new("BasicType", vec![Section::new("basictype", BASIC_TYPES)])
            .with_description("Basic Types of Namecodes: Index, Metadata, and Media")],
    )
}

fn purpose_plane() -> Plane {
    let sections = ["gold", "alternative", "base", "variant"]
        .into_iter()
        .map(|purpose| Section::new(purpose, BASIC_TYPES))
        .collect();

    Plane::new(
        PURPOSE_PLANE,
        vec![Block::new("Purposes", sections)
            .with_description("The Purposes connected to a Media File")],
    )
    .with_description("The Basic Purpose of Media File")
}

fn modification_plane() -> Plane {
    let mut blocks = vec![edition_block(), revision_block()];
    blocks.extend(modification_blocks());

    Plane::new(MODIFICATION_PLANE, blocks)
        .with_description("The Modifications Listed for a Media File")
}

/// Build the `v.0.0.1` catalog.
///
/// # Errors
///
/// Returns [`CatalogError`] if the declarations break a catalog invariant.
pub fn build() -> Result<AllCodes, CatalogError> {
    AllCodes::build(
        CATALOG_NAME,
        None,
        SCHEME_VERSION,
        [
            (BASICTYPE_START, basictype_plane()),
            (PURPOSE_START, purpose_plane()),
            (MODIFICATION_START, modification_plane()),
        ],
    )
}
