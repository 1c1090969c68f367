//! Declarative catalog builders and page allocation.
//!
//! A catalog is declared as a tree of [`Plane`]s holding [`Block`]s holding
//! [`Section`]s. Declarations carry names and values only; numbering happens
//! when a level is materialized at a starting codepoint.
//!
//! ## Allocation Rules
//!
//! | Level | Pages allocated |
//! |-------|-----------------|
//! | Section | `ceil(values / PAGE_SIZE)`, at least 1 |
//! | Block | sum of section pages, raised to the declared minimum |
//! | Plane | sum of block pages |
//!
//! Children start at the prefix sum of their preceding siblings' page
//! counts, so every child begins on a page boundary. Codepoints a child
//! leaves unused stay reserved and unaddressable.

use super::codes::{BlockCodes, PlaneCodes, SectionCodes};
use super::range::CodepointRange;
use crate::PAGE_SIZE;

/// Page offsets of each child, given the pages each child allocates.
///
/// Returns one offset per child: the running sum of the pages allocated by
/// the children before it.
pub fn page_offsets(allocations: &[u32]) -> Vec<u32> {
    allocations
        .iter()
        .scan(0u32, |running, pages| {
            let offset = *running;
            *running += pages;
            Some(offset)
        })
        .collect()
}

/// An ordered run of distinct values sharing one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Section name, also used as the label prefix.
    pub name: String,
    /// Optional human-readable description.
    pub description: Option<String>,
    /// Values in codepoint order.
    pub values: Vec<String>,
}

impl Section {
    /// Name given to placeholder sections that only reserve a page.
    pub const RESERVED_NAME: &'static str = "*reserved*";

    /// Create a new section.
    pub fn new(
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a section that holds no values but still reserves one page.
    pub fn reserved() -> Self {
        Self::new(Self::RESERVED_NAME, Vec::<String>::new())
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Pages needed to hold every value. Never less than one.
    pub fn pages_allocated(&self) -> u32 {
        let items = self.values.len() as u32;
        items.div_ceil(PAGE_SIZE).max(1)
    }

    /// Human-readable label for one of this section's values.
    pub fn label(&self, value: &str) -> String {
        format!("({}) {}", self.name, value)
    }

    /// Number every value from `start` and return the materialized section.
    pub fn section_codes(&self, start: u32) -> SectionCodes {
        let range = CodepointRange::from_pages(start, self.pages_allocated());
        SectionCodes::new(self, range)
    }

    /// Generate numbered values filling `pages` pages.
    ///
    /// Values are numbered from 1 up to (but excluding) `pages * PAGE_SIZE`,
    /// so the generated run always leaves the final slot of the last page
    /// unused.
    pub fn generate_pages_of_values<F>(base_name: &str, pages: u32, format: F) -> Vec<String>
    where
        F: Fn(&str, u32) -> String,
    {
        (1..pages * PAGE_SIZE)
            .map(|value| format(base_name, value))
            .collect()
    }
}

/// A group of sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Block name.
    pub name: String,
    /// Optional human-readable description.
    pub description: Option<String>,
    /// Sections in allocation order.
    pub sections: Vec<Section>,
    pages_minimum: u32,
}

impl Block {
    /// Create a new block with no minimum reservation.
    pub fn new(name: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            name: name.into(),
            description: None,
            sections,
            pages_minimum: 0,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the description of the block and of every section in it.
    pub fn with_shared_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        for section in &mut self.sections {
            section.description = Some(description.clone());
        }
        self.description = Some(description);
        self
    }

    /// Reserve at least `pages` pages for this block.
    pub fn with_pages_minimum(mut self, pages: u32) -> Self {
        self.pages_minimum = pages;
        self
    }

    /// The declared minimum reservation.
    pub fn pages_minimum(&self) -> u32 {
        self.pages_minimum
    }

    /// Pages allocated by each section, in order.
    pub fn page_allocations(&self) -> Vec<u32> {
        self.sections.iter().map(Section::pages_allocated).collect()
    }

    /// Pages allocated by the whole block.
    pub fn pages_allocated(&self) -> u32 {
        let used: u32 = self.page_allocations().iter().sum();
        used.max(self.pages_minimum)
    }

    /// Materialize the block and its sections from `start`.
    pub fn block_codes(&self, start: u32) -> BlockCodes {
        let offsets = page_offsets(&self.page_allocations());

        let sections = self
            .sections
            .iter()
            .zip(offsets)
            .map(|(section, offset)| section.section_codes(start + offset * PAGE_SIZE))
            .collect();

        BlockCodes::new(
            self.name.clone(),
            self.description.clone(),
            CodepointRange::from_pages(start, self.pages_allocated()),
            sections,
        )
    }
}

/// A logical plane of blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plane {
    /// Plane name.
    pub name: String,
    /// Optional human-readable description.
    pub description: Option<String>,
    /// Blocks in allocation order.
    pub blocks: Vec<Block>,
}

impl Plane {
    /// Create a new plane.
    pub fn new(name: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            name: name.into(),
            description: None,
            blocks,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Pages allocated by each block, in order.
    pub fn block_page_allocations(&self) -> Vec<u32> {
        self.blocks.iter().map(Block::pages_allocated).collect()
    }

    /// Pages allocated by the whole plane.
    pub fn pages_allocated(&self) -> u32 {
        self.block_page_allocations().iter().sum()
    }

    /// Materialize the plane and everything under it from `start`.
    pub fn plane_codes(&self, start: u32) -> PlaneCodes {
        let offsets = page_offsets(&self.block_page_allocations());

        let blocks = self
            .blocks
            .iter()
            .zip(offsets)
            .map(|(block, offset)| block.block_codes(start + offset * PAGE_SIZE))
            .collect();

        PlaneCodes::new(
            self.name.clone(),
            self.description.clone(),
            CodepointRange::from_pages(start, self.pages_allocated()),
            blocks,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn numbered(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("v{i}")).collect()
    }

    #[test]
    fn test_generate_pages_of_values() {
        let values = Section::generate_pages_of_values("f", 1, |name, value| {
            format!("{name}:{value:02X}")
        });

        assert_eq!(values.len(), 0x00F);
        assert_eq!(values.first().map(String::as_str), Some("f:01"));
        assert_eq!(values.last().map(String::as_str), Some("f:0F"));
    }

    #[test]
    fn test_section_page_rounding() {
        assert_eq!(Section::new("empty", Vec::<String>::new()).pages_allocated(), 1);
        assert_eq!(Section::new("one", numbered(1)).pages_allocated(), 1);
        assert_eq!(Section::new("full", numbered(PAGE_SIZE as usize)).pages_allocated(), 1);
        assert_eq!(Section::new("over", numbered(PAGE_SIZE as usize + 1)).pages_allocated(), 2);
        assert_eq!(Section::reserved().pages_allocated(), 1);
    }

    #[test]
    fn test_section_codes() {
        let section = Section::new("Test Section", ["Test", "One", "Two"]).with_description("Test");
        let codes = section.section_codes(0x100);

        assert_eq!(codes.name(), "Test Section");
        assert_eq!(codes.codepoints_allocated(), CodepointRange::new(0x100, 0x110));

        let expected: BTreeMap<u32, String> = [
            (0x100, "(Test Section) Test".to_string()),
            (0x101, "(Test Section) One".to_string()),
            (0x102, "(Test Section) Two".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(codes.codes(), &expected);
    }

    #[test]
    fn test_page_offsets_are_prefix_sums() {
        assert_eq!(page_offsets(&[1, 1, 1]), vec![0, 1, 2]);
        assert_eq!(page_offsets(&[3, 1, 2]), vec![0, 3, 4]);
        assert!(page_offsets(&[]).is_empty());
    }

    #[test]
    fn test_block_codes() {
        let block = Block::new(
            "TestBlock",
            vec![
                Section::new("S1", ["Block", "Test", "Section"]),
                Section::new("S2", ["Block", "Second", "Section"]),
                Section::new("S3", ["Block", "Third", "Section"]),
            ],
        );

        assert_eq!(block.page_allocations(), vec![1, 1, 1]);
        assert_eq!(block.pages_allocated(), 3);

        let codes = block.block_codes(0x100);
        assert_eq!(codes.codepoints_allocated(), CodepointRange::new(0x100, 0x130));
        assert_eq!(codes.sections().len(), 3);
        assert_eq!(codes.codes().len(), 9);

        // Sections start on page boundaries relative to the block
        let starts: Vec<u32> = codes
            .sections()
            .iter()
            .map(|s| s.codepoints_allocated().start)
            .collect();
        assert_eq!(starts, vec![0x100, 0x110, 0x120]);

        assert_eq!(codes.codes().get(&0x111).map(String::as_str), Some("(S2) Second"));
        assert_eq!(codes.codes().get(&0x122).map(String::as_str), Some("(S3) Section"));
        assert!(codes.codes().get(&0x103).is_none());
    }

    #[test]
    fn test_shared_description_reaches_sections() {
        let block = Block::new(
            "Test Block",
            vec![Section::reserved(), Section::new("first", ["a"])],
        )
        .with_shared_description("Shared");

        assert_eq!(block.description.as_deref(), Some("Shared"));
        for section in &block.sections {
            assert_eq!(section.description.as_deref(), Some("Shared"));
        }
    }

    #[test]
    fn test_block_pages_minimum() {
        let block = Block::new("Padded", vec![Section::new("s", ["a"])]).with_pages_minimum(4);
        assert_eq!(block.pages_allocated(), 4);
        assert_eq!(block.block_codes(0).codepoints_allocated().len(), 4 * PAGE_SIZE);

        // Minimum never shrinks a block
        let block = Block::new("Big", vec![Section::new("s", numbered(40))]).with_pages_minimum(2);
        assert_eq!(block.pages_allocated(), 3);
    }

    #[test]
    fn test_plane_codes() {
        let sections = vec![
            Section::new("S1", ["Plane", "Test", "Section"]),
            Section::new("S2", ["Plane", "Second", "Section"]),
        ];
        let plane = Plane::new(
            "TestPlane",
            vec![
                Block::new("TestPlane", sections.clone()),
                Block::new("TestPlane2", sections),
            ],
        );

        assert_eq!(plane.block_page_allocations(), vec![2, 2]);
        assert_eq!(plane.pages_allocated(), 4);

        let codes = plane.plane_codes(0x100);
        assert_eq!(codes.codepoints_allocated(), CodepointRange::new(0x100, 0x140));
        assert_eq!(codes.blocks().len(), 2);
        assert_eq!(codes.codes().len(), 12);
        assert_eq!(codes.codes().get(&0x120).map(String::as_str), Some("(S1) Plane"));
        assert_eq!(codes.codes().get(&0x132).map(String::as_str), Some("(S2) Section"));
    }

    #[test]
    fn test_multi_page_section_pushes_siblings() {
        let block = Block::new(
            "Sizes",
            vec![
                Section::reserved(),
                Section::new("size", numbered(47)),
                Section::new("after", ["x"]),
            ],
        );

        assert_eq!(block.page_allocations(), vec![1, 3, 1]);

        let codes = block.block_codes(0x870);
        let starts: Vec<u32> = codes
            .sections()
            .iter()
            .map(|s| s.codepoints_allocated().start)
            .collect();
        assert_eq!(starts, vec![0x870, 0x880, 0x8B0]);
    }
}
