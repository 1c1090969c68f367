//! Filename encoder.
//!
//! Each part of a [`Filename`] is resolved to catalog codepoints
//! independently and the groups are joined in a fixed order:
//!
//! ```text
//! <library><item hex>-<edition>.<revision>.<way codes>.<datatype>.<extension>
//! ```
//!
//! Way codes run root to leaf. A node that records modifications is
//! followed directly by its modification codes in list order.

use crate::catalog::{AllCodes, ResolutionError};
use crate::scheme::modifications::{edition_value, revision_value, EDITION_BLOCK, REVISION_BLOCK};
use crate::scheme::v0_1_0::{DATATYPE_BLOCK, WAY_BLOCK};
use crate::scheme::{DATATYPE_PLANE, LISTING_PLANE, MODIFICATION_PLANE, WAY_PLANE};
use crate::types::{DataType, Filename, Gold, Listing, Modification, Ways};

/// Codepoints of the edition and revision, in that order.
///
/// # Errors
///
/// Returns [`ResolutionError::UnknownKey`] if either number is outside the
/// catalog's listing range.
pub fn listing_codes(catalog: &AllCodes, listing: &Listing) -> Result<[u32; 2], ResolutionError> {
    let edition = catalog.code_of(
        LISTING_PLANE,
        EDITION_BLOCK,
        &EDITION_BLOCK.to_lowercase(),
        &edition_value(listing.edition),
    )?;
    let revision = catalog.code_of(
        LISTING_PLANE,
        REVISION_BLOCK,
        &REVISION_BLOCK.to_lowercase(),
        &revision_value(listing.revision),
    )?;
    Ok([edition, revision])
}

/// Codepoint of a way node.
///
/// # Errors
///
/// Returns [`ResolutionError::UnknownKey`] if the catalog has no way plane.
pub fn way_code(catalog: &AllCodes, way: Ways) -> Result<u32, ResolutionError> {
    catalog.code_of(WAY_PLANE, WAY_BLOCK, &WAY_BLOCK.to_lowercase(), way.catalog_value())
}

/// Codepoint of a modification.
///
/// # Errors
///
/// Returns [`ResolutionError::UnknownKey`] if the modification is not in the
/// MODIFICATION plane.
pub fn modification_code(
    catalog: &AllCodes,
    modification: &Modification,
) -> Result<u32, ResolutionError> {
    catalog.code_of(
        MODIFICATION_PLANE,
        &modification.block,
        &modification.section,
        &modification.value,
    )
}

/// Way and modification codepoints of a provenance tree, root to leaf.
///
/// # Errors
///
/// Returns the first [`ResolutionError`] hit.
pub fn way_codes(catalog: &AllCodes, provenance: &Gold) -> Result<Vec<u32>, ResolutionError> {
    let mut codes = Vec::new();
    for stage in provenance.stages() {
        codes.push(way_code(catalog, stage.way)?);
        for modification in stage.modifications {
            codes.push(modification_code(catalog, modification)?);
        }
    }
    Ok(codes)
}

/// Codepoint of a data type.
///
/// # Errors
///
/// Returns [`ResolutionError::UnknownKey`] if the catalog has no data type
/// plane.
pub fn data_type_code(catalog: &AllCodes, data_type: DataType) -> Result<u32, ResolutionError> {
    catalog.code_of(
        DATATYPE_PLANE,
        DATATYPE_BLOCK,
        &DATATYPE_BLOCK.to_lowercase(),
        data_type.catalog_value(),
    )
}

/// Encode a filename against `catalog`.
///
/// # Errors
///
/// Returns the first [`ResolutionError`] hit while resolving the listing,
/// way path, modifications or data type.
pub fn encode(catalog: &AllCodes, filename: &Filename) -> Result<String, ResolutionError> {
    let [edition, revision] = listing_codes(catalog, &filename.listing)?;

    let ways: Vec<String> = way_codes(catalog, &filename.provenance)?
        .iter()
        .map(u32::to_string)
        .collect();

    let data_type = data_type_code(catalog, filename.data_type)?;

    let encoded = format!(
        "{}-{}.{}.{}.{}.{}",
        filename.library_entry,
        edition,
        revision,
        ways.join("."),
        data_type,
        filename.extension
    );

    tracing::trace!(
        scheme_version = catalog.scheme_version(),
        way = %filename.provenance,
        encoded = %encoded,
        "Filename encoded"
    );

    Ok(encoded)
}
