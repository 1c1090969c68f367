//! Materialized catalog levels.
//!
//! These types are produced by the builders in [`super::builder`] and are
//! immutable afterwards: every `codes` map is derived from the level's
//! children at construction and there is no way to edit it.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use super::builder::Plane;
use super::range::CodepointRange;
use crate::canonical::canonical_hash_hex;

/// Error raised while assembling a catalog from its declarations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Two planes claim overlapping codepoints.
    #[error("Plane {first} ({first_range}) overlaps plane {second} ({second_range})")]
    OverlappingPlanes {
        /// Plane with the lower start.
        first: String,
        /// Its allocated range.
        first_range: CodepointRange,
        /// Plane with the higher start.
        second: String,
        /// Its allocated range.
        second_range: CodepointRange,
    },
    /// A section lists the same value twice.
    #[error("Section {section} lists value {value:?} more than once")]
    DuplicateValue {
        /// Section name.
        section: String,
        /// Repeated value.
        value: String,
    },
    /// Two planes share a name.
    #[error("Plane {0} is declared more than once")]
    DuplicatePlane(String),
}

/// One numbered value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameCode {
    /// Assigned codepoint.
    pub codepoint: u32,
    /// Raw section value, e.g. `bottom`.
    pub value: String,
    /// Formatted label, e.g. `(prospective) bottom`.
    pub label: String,
}

/// A materialized section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionCodes {
    name: String,
    description: Option<String>,
    codepoints_allocated: CodepointRange,
    entries: Vec<NameCode>,
    codes: BTreeMap<u32, String>,
}

impl SectionCodes {
    pub(crate) fn new(
        section: &super::builder::Section,
        codepoints_allocated: CodepointRange,
    ) -> Self {
        let entries: Vec<NameCode> = section
            .values
            .iter()
            .zip(codepoints_allocated.start..)
            .map(|(value, codepoint)| NameCode {
                codepoint,
                value: value.clone(),
                label: section.label(value),
            })
            .collect();

        let codes = entries
            .iter()
            .map(|entry| (entry.codepoint, entry.label.clone()))
            .collect();

        Self {
            name: section.name.clone(),
            description: section.description.clone(),
            codepoints_allocated,
            entries,
            codes,
        }
    }

    /// Section name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Section description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Every codepoint reserved by the section, including unused slots.
    pub fn codepoints_allocated(&self) -> CodepointRange {
        self.codepoints_allocated
    }

    /// Numbered values in codepoint order.
    pub fn entries(&self) -> &[NameCode] {
        &self.entries
    }

    /// Codepoint to label map.
    pub fn codes(&self) -> &BTreeMap<u32, String> {
        &self.codes
    }

    /// Entry assigned to `codepoint`, if the slot is in use.
    pub fn entry_at(&self, codepoint: u32) -> Option<&NameCode> {
        if !self.codepoints_allocated.contains(codepoint) {
            return None;
        }
        self.entries
            .get((codepoint - self.codepoints_allocated.start) as usize)
    }

    /// Entry holding `value`.
    pub fn entry_for(&self, value: &str) -> Option<&NameCode> {
        self.entries.iter().find(|entry| entry.value == value)
    }
}

/// A materialized block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockCodes {
    name: String,
    description: Option<String>,
    codepoints_allocated: CodepointRange,
    sections: Vec<SectionCodes>,
    codes: BTreeMap<u32, String>,
}

impl BlockCodes {
    pub(crate) fn new(
        name: String,
        description: Option<String>,
        codepoints_allocated: CodepointRange,
        sections: Vec<SectionCodes>,
    ) -> Self {
        let codes = sections
            .iter()
            .flat_map(|section| section.codes().iter().map(|(k, v)| (*k, v.clone())))
            .collect();

        Self {
            name,
            description,
            codepoints_allocated,
            sections,
            codes,
        }
    }

    /// Block name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Block description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Every codepoint reserved by the block.
    pub fn codepoints_allocated(&self) -> CodepointRange {
        self.codepoints_allocated
    }

    /// Sections in codepoint order.
    pub fn sections(&self) -> &[SectionCodes] {
        &self.sections
    }

    /// Codepoint to label map of every section.
    pub fn codes(&self) -> &BTreeMap<u32, String> {
        &self.codes
    }

    /// Section with the given name.
    pub fn section(&self, name: &str) -> Option<&SectionCodes> {
        self.sections.iter().find(|section| section.name == name)
    }

    /// Section whose allocation covers `codepoint`.
    pub fn section_containing(&self, codepoint: u32) -> Option<&SectionCodes> {
        self.sections
            .iter()
            .find(|section| section.codepoints_allocated.contains(codepoint))
    }
}

/// A materialized plane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaneCodes {
    name: String,
    description: Option<String>,
    codepoints_allocated: CodepointRange,
    blocks: Vec<BlockCodes>,
    codes: BTreeMap<u32, String>,
}

impl PlaneCodes {
    pub(crate) fn new(
        name: String,
        description: Option<String>,
        codepoints_allocated: CodepointRange,
        blocks: Vec<BlockCodes>,
    ) -> Self {
        let codes = blocks
            .iter()
            .flat_map(|block| block.codes().iter().map(|(k, v)| (*k, v.clone())))
            .collect();

        Self {
            name,
            description,
            codepoints_allocated,
            blocks,
            codes,
        }
    }

    /// Plane name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Plane description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Every codepoint reserved by the plane.
    pub fn codepoints_allocated(&self) -> CodepointRange {
        self.codepoints_allocated
    }

    /// Blocks in codepoint order.
    pub fn blocks(&self) -> &[BlockCodes] {
        &self.blocks
    }

    /// Codepoint to label map of every block.
    pub fn codes(&self) -> &BTreeMap<u32, String> {
        &self.codes
    }

    /// Block with the given name.
    pub fn block(&self, name: &str) -> Option<&BlockCodes> {
        self.blocks.iter().find(|block| block.name == name)
    }

    /// Block whose allocation covers `codepoint`.
    pub fn block_containing(&self, codepoint: u32) -> Option<&BlockCodes> {
        self.blocks
            .iter()
            .find(|block| block.codepoints_allocated.contains(codepoint))
    }
}

/// The complete numbered catalog of one scheme version.
///
/// Planes are kept sorted by starting codepoint. Construction verifies
/// that plane ranges are disjoint and that no codepoint is assigned twice,
/// which is what lets the resolver map any codepoint back to exactly one
/// label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllCodes {
    name: String,
    description: Option<String>,
    scheme_version: String,
    codepoints_allocated: CodepointRange,
    planes: Vec<PlaneCodes>,
    codes: BTreeMap<u32, String>,
}

impl AllCodes {
    /// Number every plane at its fixed start and assemble the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if a section repeats a value, a plane name
    /// repeats, plane ranges overlap, or a codepoint is assigned twice.
    pub fn build(
        name: impl Into<String>,
        description: Option<String>,
        scheme_version: impl Into<String>,
        placements: impl IntoIterator<Item = (u32, Plane)>,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        let scheme_version = scheme_version.into();

        let mut plane_names = BTreeSet::new();
        let mut planes = Vec::new();

        for (start, plane) in placements {
            if !plane_names.insert(plane.name.clone()) {
                return Err(CatalogError::DuplicatePlane(plane.name));
            }
            check_distinct_values(&plane)?;
            planes.push(plane.plane_codes(start));
        }

        planes.sort_by_key(|plane| plane.codepoints_allocated.start);
        check_disjoint(&planes)?;

        // Disjoint planes never share a codepoint.
        let codes: BTreeMap<u32, String> = planes
            .iter()
            .flat_map(|plane| plane.codes().iter())
            .map(|(codepoint, label)| (*codepoint, label.clone()))
            .collect();

        let stop = planes
            .iter()
            .map(|plane| plane.codepoints_allocated.stop)
            .max()
            .unwrap_or(0);
        let start = planes
            .first()
            .map_or(0, |plane| plane.codepoints_allocated.start);
        let codepoints_allocated = CodepointRange::new(start, stop);

        let catalog = Self {
            name,
            description,
            scheme_version,
            codepoints_allocated,
            planes,
            codes,
        };

        tracing::debug!(
            scheme_version = %catalog.scheme_version,
            planes = catalog.planes.len(),
            codes = catalog.codes.len(),
            range = %catalog.codepoints_allocated,
            fingerprint = %catalog.fingerprint(),
            "Catalog built"
        );

        Ok(catalog)
    }

    /// Catalog name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Catalog description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Scheme version this catalog was built from.
    pub fn scheme_version(&self) -> &str {
        &self.scheme_version
    }

    /// Span from the lowest plane start to the highest plane stop.
    pub fn codepoints_allocated(&self) -> CodepointRange {
        self.codepoints_allocated
    }

    /// Planes sorted by starting codepoint.
    pub fn planes(&self) -> &[PlaneCodes] {
        &self.planes
    }

    /// Codepoint to label map of the whole catalog.
    pub fn codes(&self) -> &BTreeMap<u32, String> {
        &self.codes
    }

    /// Plane with the given name.
    pub fn plane(&self, name: &str) -> Option<&PlaneCodes> {
        self.planes.iter().find(|plane| plane.name == name)
    }

    /// Plane whose allocation covers `codepoint`.
    pub fn plane_containing(&self, codepoint: u32) -> Option<&PlaneCodes> {
        self.planes
            .iter()
            .find(|plane| plane.codepoints_allocated.contains(codepoint))
    }

    /// Deterministic fingerprint of the codepoint to label map.
    ///
    /// Two catalogs with the same fingerprint number every label the same
    /// way, so filenames encoded against one decode against the other.
    pub fn fingerprint(&self) -> String {
        canonical_hash_hex(&self.codes)
    }
}

fn check_distinct_values(plane: &Plane) -> Result<(), CatalogError> {
    for section in plane.blocks.iter().flat_map(|block| &block.sections) {
        let mut seen = BTreeSet::new();
        for value in &section.values {
            if !seen.insert(value.as_str()) {
                return Err(CatalogError::DuplicateValue {
                    section: section.name.clone(),
                    value: value.clone(),
                });
            }
        }
    }
    Ok(())
}

fn check_disjoint(planes: &[PlaneCodes]) -> Result<(), CatalogError> {
    for (index, first) in planes.iter().enumerate() {
        for second in &planes[index + 1..] {
            if first.codepoints_allocated.overlaps(&second.codepoints_allocated) {
                return Err(CatalogError::OverlappingPlanes {
                    first: first.name.clone(),
                    first_range: first.codepoints_allocated,
                    second: second.name.clone(),
                    second_range: second.codepoints_allocated,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builder::{Block, Section};

    fn plane(name: &str, values: &[&str]) -> Plane {
        let section = Section::new(name.to_lowercase(), values.iter().copied());
        Plane::new(name, vec![Block::new(name, vec![section])])
    }

    #[test]
    fn test_build_sorts_planes_by_start() {
        let catalog = AllCodes::build(
            "Test",
            None,
            "v.test",
            [(0x100, plane("HIGH", &["a"])), (0x000, plane("LOW", &["b"]))],
        )
        .unwrap();

        let names: Vec<&str> = catalog.planes().iter().map(PlaneCodes::name).collect();
        assert_eq!(names, vec!["LOW", "HIGH"]);
        assert_eq!(catalog.codepoints_allocated(), CodepointRange::new(0x000, 0x110));
        assert_eq!(catalog.codes().len(), 2);
    }

    #[test]
    fn test_overlapping_planes_rejected() {
        let result = AllCodes::build(
            "Test",
            None,
            "v.test",
            [(0x000, plane("A", &["a"])), (0x008, plane("B", &["b"]))],
        );

        assert!(matches!(result, Err(CatalogError::OverlappingPlanes { .. })));
    }

    #[test]
    fn test_colliding_codepoints_rejected_as_overlap() {
        let result = AllCodes::build(
            "Test",
            None,
            "v.test",
            [(0x020, plane("A", &["a"])), (0x020, plane("B", &["b"]))],
        );

        assert_eq!(
            result.unwrap_err(),
            CatalogError::OverlappingPlanes {
                first: "A".to_string(),
                first_range: CodepointRange::new(0x020, 0x030),
                second: "B".to_string(),
                second_range: CodepointRange::new(0x020, 0x030),
            }
        );
    }

    #[test]
    fn test_adjacent_planes_accepted() {
        let result = AllCodes::build(
            "Test",
            None,
            "v.test",
            [(0x000, plane("A", &["a"])), (0x010, plane("B", &["b"]))],
        );

        assert!(result.is_ok());
    }

    #[test]
    fn test_duplicate_value_rejected() {
        let result = AllCodes::build("Test", None, "v.test", [(0x000, plane("A", &["a", "a"]))]);

        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateValue {
                section: "a".to_string(),
                value: "a".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_plane_rejected() {
        let result = AllCodes::build(
            "Test",
            None,
            "v.test",
            [(0x000, plane("A", &["a"])), (0x100, plane("A", &["b"]))],
        );

        assert_eq!(result.unwrap_err(), CatalogError::DuplicatePlane("A".to_string()));
    }

    #[test]
    fn test_fingerprint_tracks_codes() {
        let build = |values: &[&str]| {
            AllCodes::build("Test", None, "v.test", [(0x000, plane("A", values))]).unwrap()
        };

        assert_eq!(build(&["a", "b"]).fingerprint(), build(&["a", "b"]).fingerprint());
        assert_ne!(build(&["a", "b"]).fingerprint(), build(&["b", "a"]).fingerprint());
    }

    #[test]
    fn test_entry_at_skips_unused_slots() {
        let section = Section::new("s", ["x", "y"]).section_codes(0x040);

        assert_eq!(section.entry_at(0x041).map(|e| e.value.as_str()), Some("y"));
        assert!(section.entry_at(0x042).is_none());
        assert!(section.entry_at(0x050).is_none());
        assert_eq!(section.entry_for("x").map(|e| e.codepoint), Some(0x040));
    }
}
