//! Name-only view of a catalog.
//!
//! The stub tree keeps names, descriptions and ranges of every level but
//! drops the individual codes, which is what the tree and schema style
//! renderings need.

use serde::Serialize;

use super::codes::{AllCodes, BlockCodes, PlaneCodes, SectionCodes};
use super::range::CodepointRange;

/// Leaf of the stub tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionStub {
    /// Section name.
    pub name: String,
    /// Section description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Reserved range.
    pub codepoints_allocated: CodepointRange,
    /// Number of values assigned.
    pub assigned: usize,
}

/// Block node of the stub tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockBranch {
    /// Block name.
    pub name: String,
    /// Block description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Reserved range.
    pub codepoints_allocated: CodepointRange,
    /// Sections in codepoint order.
    pub sections: Vec<SectionStub>,
}

/// Plane node of the stub tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaneBranch {
    /// Plane name.
    pub name: String,
    /// Plane description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Reserved range.
    pub codepoints_allocated: CodepointRange,
    /// Blocks in codepoint order.
    pub blocks: Vec<BlockBranch>,
}

/// Root of the stub tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeStub {
    /// Catalog name.
    pub name: String,
    /// Catalog description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Scheme version.
    pub scheme_version: String,
    /// Span of all planes.
    pub codepoints_allocated: CodepointRange,
    /// Planes in codepoint order.
    pub planes: Vec<PlaneBranch>,
}

impl From<&SectionCodes> for SectionStub {
    fn from(section: &SectionCodes) -> Self {
        Self {
            name: section.name().to_string(),
            description: section.description().map(str::to_string),
            codepoints_allocated: section.codepoints_allocated(),
            assigned: section.entries().len(),
        }
    }
}

impl From<&BlockCodes> for BlockBranch {
    fn from(block: &BlockCodes) -> Self {
        Self {
            name: block.name().to_string(),
            description: block.description().map(str::to_string),
            codepoints_allocated: block.codepoints_allocated(),
            sections: block.sections().iter().map(SectionStub::from).collect(),
        }
    }
}

impl From<&PlaneCodes> for PlaneBranch {
    fn from(plane: &PlaneCodes) -> Self {
        Self {
            name: plane.name().to_string(),
            description: plane.description().map(str::to_string),
            codepoints_allocated: plane.codepoints_allocated(),
            blocks: plane.blocks().iter().map(BlockBranch::from).collect(),
        }
    }
}

impl From<&AllCodes> for TreeStub {
    fn from(catalog: &AllCodes) -> Self {
        Self {
            name: catalog.name().to_string(),
            description: catalog.description().map(str::to_string),
            scheme_version: catalog.scheme_version().to_string(),
            codepoints_allocated: catalog.codepoints_allocated(),
            planes: catalog.planes().iter().map(PlaneBranch::from).collect(),
        }
    }
}

impl AllCodes {
    /// Stub tree of this catalog.
    pub fn stub(&self) -> TreeStub {
        TreeStub::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builder::{Block, Plane, Section};

    #[test]
    fn test_stub_mirrors_catalog_shape() {
        let plane = Plane::new(
            "P",
            vec![Block::new(
                "B",
                vec![
                    Section::reserved(),
                    Section::new("s", ["x", "y", "z"]).with_description("Letters"),
                ],
            )
            .with_description("Block")],
        );
        let catalog = AllCodes::build("Test", None, "v.test", [(0x200, plane)]).unwrap();
        let stub = catalog.stub();

        assert_eq!(stub.scheme_version, "v.test");
        assert_eq!(stub.planes.len(), 1);

        let block = &stub.planes[0].blocks[0];
        assert_eq!(block.description.as_deref(), Some("Block"));
        assert_eq!(block.codepoints_allocated, CodepointRange::new(0x200, 0x220));
        assert_eq!(block.sections[0].name, Section::RESERVED_NAME);
        assert_eq!(block.sections[0].assigned, 0);
        assert_eq!(block.sections[1].assigned, 3);
        assert_eq!(block.sections[1].codepoints_allocated.start, 0x210);
    }

    #[test]
    fn test_stub_json_has_no_codes() {
        let plane = Plane::new("P", vec![Block::new("B", vec![Section::new("s", ["secret"])])]);
        let catalog = AllCodes::build("Test", None, "v.test", [(0, plane)]).unwrap();
        let json = serde_json::to_string(&catalog.stub()).unwrap();

        assert!(!json.contains("secret"));
        assert!(json.contains("\"assigned\":1"));
    }
}
