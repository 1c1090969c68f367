//! Text renderings of a catalog.
//!
//! Renderers are [`fmt::Display`] adapters over borrowed catalog views, so
//! they can be written straight to any formatter or collected with
//! `to_string()`. The free functions are shorthands for the common cases.

use serde::Serialize;
use std::fmt;

use crate::catalog::{AllCodes, BlockCodes, SectionCodes, TreeStub};

fn joiner(last: bool) -> (&'static str, &'static str) {
    if last {
        ("└──", "    ")
    } else {
        ("├──", "│   ")
    }
}

/// Box-drawing tree of planes, blocks and sections with their ranges.
pub struct Tree<'a>(pub &'a TreeStub);

impl fmt::Display for Tree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stub = self.0;

        writeln!(f, "Scheme Version: {}", stub.scheme_version)?;
        writeln!(f)?;
        writeln!(f, ".{:29} ((({})))", stub.name, stub.codepoints_allocated)?;

        for (p, plane) in stub.planes.iter().enumerate() {
            let (plane_joiner, block_spacer) = joiner(p + 1 == stub.planes.len());
            writeln!(f, "│")?;
            writeln!(f, "{plane_joiner} {:27} (({}))", plane.name, plane.codepoints_allocated)?;

            for (b, block) in plane.blocks.iter().enumerate() {
                let (block_joiner, section_spacer) = joiner(b + 1 == plane.blocks.len());
                writeln!(
                    f,
                    "{block_spacer}{block_joiner} {:24} ({})",
                    block.name, block.codepoints_allocated
                )?;

                for (s, section) in block.sections.iter().enumerate() {
                    let last = s + 1 == block.sections.len();
                    let (section_joiner, _) = joiner(last);
                    writeln!(
                        f,
                        "{block_spacer}{section_spacer}{section_joiner} {:21} {}",
                        section.name, section.codepoints_allocated
                    )?;
                    if last {
                        writeln!(f, "{block_spacer}{section_spacer}")?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn code_row(f: &mut fmt::Formatter<'_>, codepoint: u32, label: &str) -> fmt::Result {
    writeln!(f, "| 0x{codepoint:04X} | {label} |")
}

fn section_rows(f: &mut fmt::Formatter<'_>, section: &SectionCodes) -> fmt::Result {
    writeln!(f, "|  | _{}_ |", section.codepoints_allocated())?;
    if let Some(description) = section.description() {
        writeln!(f, "|  | {}: {description} |", section.name())?;
    }
    for (codepoint, label) in section.codes() {
        code_row(f, *codepoint, label)?;
    }
    Ok(())
}

/// One block as a Markdown heading, description, range and code table.
pub struct BlockMarkdown<'a>(pub &'a BlockCodes);

impl fmt::Display for BlockMarkdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let block = self.0;

        writeln!(f, "## {}", block.name())?;
        writeln!(f)?;
        if let Some(description) = block.description() {
            writeln!(f, "_{description}_")?;
            writeln!(f)?;
        }
        writeln!(f, "{}", block.codepoints_allocated())?;
        writeln!(f)?;
        writeln!(f, "| Code | Name |")?;
        writeln!(f, "| ---- | ---- |")?;

        for (index, section) in block.sections().iter().enumerate() {
            if index > 0 {
                writeln!(f, "|  |  |")?;
            }
            section_rows(f, section)?;
        }
        Ok(())
    }
}

/// Every block of a catalog, in codepoint order.
pub struct BlocksMarkdown<'a>(pub &'a AllCodes);

impl fmt::Display for BlocksMarkdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let catalog = self.0;
        writeln!(f, "# {} {}", catalog.name(), catalog.scheme_version())?;

        for block in catalog.planes().iter().flat_map(|plane| plane.blocks()) {
            writeln!(f)?;
            write!(f, "{}", BlockMarkdown(block))?;
        }
        Ok(())
    }
}

/// One flat `Code | Name` table of every code in a catalog.
pub struct CodesMarkdown<'a>(pub &'a AllCodes);

impl fmt::Display for CodesMarkdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let catalog = self.0;

        writeln!(f, "# {}", catalog.name())?;
        writeln!(f)?;
        if let Some(description) = catalog.description() {
            writeln!(f, "{description}")?;
            writeln!(f)?;
        }
        writeln!(f, "| Code | Name |")?;
        writeln!(f, "| ---- | ---- |")?;
        for (codepoint, label) in catalog.codes() {
            code_row(f, *codepoint, label)?;
        }
        Ok(())
    }
}

/// Console tree of a catalog.
pub fn tree(catalog: &AllCodes) -> String {
    Tree(&catalog.stub()).to_string()
}

/// Markdown listing of every block of a catalog.
pub fn blocks_markdown(catalog: &AllCodes) -> String {
    BlocksMarkdown(catalog).to_string()
}

/// Markdown table of every code of a catalog.
pub fn codes_markdown(catalog: &AllCodes) -> String {
    CodesMarkdown(catalog).to_string()
}

/// One row of the JSON code listing.
#[derive(Debug, Serialize)]
struct CodeRow<'a> {
    code: u32,
    hex: String,
    name: &'a str,
}

/// Pretty JSON of any catalog view.
///
/// # Errors
///
/// Returns the serializer error, which does not occur for catalog types.
pub fn json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Pretty JSON array of every code with its hex form and label.
///
/// # Errors
///
/// Returns the serializer error, which does not occur for catalog types.
pub fn codes_json(catalog: &AllCodes) -> serde_json::Result<String> {
    let rows: Vec<CodeRow<'_>> = catalog
        .codes()
        .iter()
        .map(|(code, name)| CodeRow {
            code: *code,
            hex: format!("0x{code:04X}"),
            name,
        })
        .collect();
    json(&rows)
}
