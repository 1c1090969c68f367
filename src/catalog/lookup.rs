//! Reverse and symbolic lookup of namecodes.
//!
//! Resolution narrows a codepoint level by level: plane, then block, then
//! section, then the exact slot. A miss at any level is reported at that
//! level so callers can tell an out-of-catalog number from an unused slot
//! inside a reserved page.

use serde::Serialize;
use std::fmt;

use super::codes::AllCodes;

/// Error when a codepoint or symbolic key has no catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    /// The codepoint lies outside every plane.
    #[error("Codepoint {0} is not in any plane")]
    NoPlane(u32),
    /// The codepoint lies in a plane but outside its blocks.
    #[error("Codepoint {codepoint} is in plane {plane} but not in any block")]
    NoBlock {
        /// The codepoint looked up.
        codepoint: u32,
        /// Plane that covers it.
        plane: String,
    },
    /// The codepoint lies in a block but outside its sections.
    #[error("Codepoint {codepoint} is in block {plane}/{block} but not in any section")]
    NoSection {
        /// The codepoint looked up.
        codepoint: u32,
        /// Plane that covers it.
        plane: String,
        /// Block that covers it.
        block: String,
    },
    /// The codepoint is a reserved slot with no value assigned.
    #[error("Codepoint {codepoint} is an unassigned slot of section {plane}/{block}/{section}")]
    Unassigned {
        /// The codepoint looked up.
        codepoint: u32,
        /// Plane that covers it.
        plane: String,
        /// Block that covers it.
        block: String,
        /// Section that covers it.
        section: String,
    },
    /// No value exists under the given symbolic path.
    #[error("No namecode for {0}")]
    UnknownKey(String),
}

/// A codepoint resolved to its place in the catalog.
///
/// Borrows names from the catalog it was resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NamecodeLookup<'a> {
    /// The resolved codepoint.
    pub codepoint: u32,
    /// Owning plane name.
    pub plane: &'a str,
    /// Owning block name.
    pub block: &'a str,
    /// Owning section name.
    pub section: &'a str,
    /// Raw value.
    pub value: &'a str,
    /// Formatted label.
    pub label: &'a str,
}

impl fmt::Display for NamecodeLookup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}/{}] {}", self.codepoint, self.plane, self.block, self.label)
    }
}

impl AllCodes {
    /// Resolve a codepoint to its plane, block, section and label.
    ///
    /// # Errors
    ///
    /// Returns the [`ResolutionError`] for the first level that does not
    /// contain the codepoint.
    pub fn resolve(&self, codepoint: u32) -> Result<NamecodeLookup<'_>, ResolutionError> {
        let plane = self
            .plane_containing(codepoint)
            .ok_or(ResolutionError::NoPlane(codepoint))?;

        let block = plane
            .block_containing(codepoint)
            .ok_or_else(|| ResolutionError::NoBlock {
                codepoint,
                plane: plane.name().to_string(),
            })?;

        let section = block
            .section_containing(codepoint)
            .ok_or_else(|| ResolutionError::NoSection {
                codepoint,
                plane: plane.name().to_string(),
                block: block.name().to_string(),
            })?;

        let entry = section
            .entry_at(codepoint)
            .ok_or_else(|| ResolutionError::Unassigned {
                codepoint,
                plane: plane.name().to_string(),
                block: block.name().to_string(),
                section: section.name().to_string(),
            })?;

        Ok(NamecodeLookup {
            codepoint,
            plane: plane.name(),
            block: block.name(),
            section: section.name(),
            value: &entry.value,
            label: &entry.label,
        })
    }

    /// Codepoint assigned to `value` under `plane/block/section`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::UnknownKey`] if any part of the path is
    /// missing.
    pub fn code_of(
        &self,
        plane: &str,
        block: &str,
        section: &str,
        value: &str,
    ) -> Result<u32, ResolutionError> {
        self.plane(plane)
            .and_then(|p| p.block(block))
            .and_then(|b| b.section(section))
            .and_then(|s| s.entry_for(value))
            .map(|entry| entry.codepoint)
            .ok_or_else(|| {
                ResolutionError::UnknownKey(format!("{plane}/{block}/{section}/{value}"))
            })
    }
}
