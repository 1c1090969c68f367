//! Scheme `v.0.1.0`: the catalog the filename codec is defined against.
//!
//! | Plane | Start | Blocks |
//! |-------|-------|--------|
//! | DATATYPE | `0x000` | DataType |
//! | WAY | `0x030` | Way |
//! | LISTING | `0x600` | Edition, Revision |
//! | MODIFICATION | `0x800` | Adaption, Transformation, Format, Embedded |

use super::modifications::{edition_block, modification_blocks, revision_block};
use super::{DATATYPE_PLANE, LISTING_PLANE, MODIFICATION_PLANE, WAY_PLANE};
use crate::catalog::{AllCodes, Block, CatalogError, Plane, Section};
use crate::types::data_type::DataType;
use crate::types::way::Ways;
use crate::CATALOG_NAME;

/// Scheme version string.
pub const SCHEME_VERSION: &str = "v.0.1.0";

/// Start of the DATATYPE plane.
pub const DATATYPE_START: u32 = 0x000;
/// Start of the WAY plane.
pub const WAY_START: u32 = 0x030;
/// Start of the LISTING plane.
pub const LISTING_START: u32 = 0x600;
/// Start of the MODIFICATION plane.
pub const MODIFICATION_START: u32 = 0x800;

/// Block and section names of the data types.
pub const DATATYPE_BLOCK: &str = "DataType";
/// Block name of the way codes.
pub const WAY_BLOCK: &str = "Way";

fn datatype_plane() -> Plane {
    let description = "Data Types of Namecodes: Index, Metadata, and Media";
    let values = DataType::ALL.iter().map(|data_type| data_type.catalog_value());

    Plane::new(
        DATATYPE_PLANE,
        vec![Block::new(
            DATATYPE_BLOCK,
            vec![Section::new(DATATYPE_BLOCK.to_lowercase(), values).with_description(description)],
        )
        .with_description(description)],
    )
    .with_description(description)
}

fn way_plane() -> Plane {
    let description = "The way of a Artwork: Unmodified to Adapted and Changed";
    let values = Ways::ALL.iter().map(|way| way.catalog_value());

    Plane::new(
        WAY_PLANE,
        vec![Block::new(
            WAY_BLOCK,
            vec![Section::new(WAY_BLOCK.to_lowercase(), values).with_description(description)],
        )
        .with_description(description)],
    )
    .with_description(description)
}

fn listing_plane() -> Plane {
    Plane::new(LISTING_PLANE, vec![edition_block(), revision_block()])
        .with_description("Media Items Listed for New Editions or Revisions")
}

fn modification_plane() -> Plane {
    Plane::new(MODIFICATION_PLANE, modification_blocks())
        .with_description("Changes to Media Items are Summarized")
}

/// Build the `v.0.1.0` catalog.
///
/// # Errors
///
/// Returns [`CatalogError`] if the declarations break a catalog invariant.
pub fn build() -> Result<AllCodes, CatalogError> {
    AllCodes::build(
        CATALOG_NAME,
        Some("Namecodes for media files: data type, way, listing and modifications".to_string()),
        SCHEME_VERSION,
        [
            (DATATYPE_START, datatype_plane()),
            (WAY_START, way_plane()),
            (LISTING_START, listing_plane()),
            (MODIFICATION_START, modification_plane()),
        ],
    )
}
