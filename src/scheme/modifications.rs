//! Blocks shared by every scheme version.
//!
//! Both versions number the same listing and modification vocabularies;
//! they differ only in which plane holds them and where that plane starts.

use crate::catalog::{Block, Section};

/// Pages filled by the generated edition and revision numbers.
pub const LISTING_PAGES: u32 = 0x010;

/// Block name of the edition numbers.
pub const EDITION_BLOCK: &str = "Edition";
/// Block name of the revision numbers.
pub const REVISION_BLOCK: &str = "Revision";

/// Label of edition `n` as stored in the catalog.
pub fn edition_value(n: u32) -> String {
    format!("edition: #{n}")
}

/// Label of revision `n` as stored in the catalog.
pub fn revision_value(n: u32) -> String {
    format!("revision: #{n}")
}

fn numbered_block(name: &str, description: &str) -> Block {
    let section_name = name.to_lowercase();
    let values = Section::generate_pages_of_values(&section_name, LISTING_PAGES, |base, n| {
        format!("{base}: #{n}")
    });

    Block::new(name, vec![Section::new(section_name, values)])
        .with_shared_description(description)
}

/// Edition numbers 1 to 255.
pub fn edition_block() -> Block {
    numbered_block(EDITION_BLOCK, "Media Files may have Many Editions")
}

/// Revision numbers 1 to 255.
pub fn revision_block() -> Block {
    numbered_block(REVISION_BLOCK, "Media Files May be Revised many times")
}

/// How a media file may be adapted.
pub fn adaption_block() -> Block {
    Block::new(
        "Adaption",
        vec![
            Section::reserved(),
            Section::new(
                "focus",
                [
                    "background",
                    "background blur",
                    "background transparent",
                    "foreground",
                    "foreground blur",
                    "foreground transparent",
                    "wash",
                ],
            ),
            Section::new("style", ["cartoon", "outline", "line-art", "charcoal"]),
            Section::new(
                "prospective",
                [
                    "tall",
                    "wide",
                    "prospective",
                    "wide-angle",
                    "macro",
                    "top",
                    "bottom",
                    "left",
                    "right",
                    "inside",
                    "outside",
                ],
            ),
            Section::new("context", ["day", "night", "windy", "hot", "underwater"]),
            Section::new("action", ["sleeping", "running", "eating", "dancing"]),
            Section::new(
                "edit",
                ["loud", "quite", "looping", "dynamic", "soft", "aggressive"],
            ),
        ],
    )
    .with_shared_description("Media Files may be adapted")
}

/// Megapixel buckets, largest first.
const SIZES: [&str; 47] = [
    ">=512MP", "<512MP", "<50MP", "<12MP", "<10MP", "<8MP", "<6MP", "<5MP", "<4MP", "<3MP",
    "<2MP", "<1MP", "<0.9MP", "<0.8MP", "<0.7MP", "<0.6MP", "<0.5MP", "<0.4MP", "<0.3MP",
    "<0.25MP", "<0.2MP", "<0.18MP", "<0.16MP", "<0.15MP", "<0.14MP", "<0.13MP", "<0.12MP",
    "<0.11MP", "<0.10MP", "<0.09MP", "<0.08MP", "<0.07MP", "<0.06MP", "<0.05MP", "<0.04MP",
    "<0.03MP", "<0.02MP", "<0.01MP", "<0.009MP", "<0.008MP", "<0.007MP", "<0.006MP",
    "<0.005MP", "<0.004MP", "<0.003MP", "<0.002MP", "<0.001MP",
];

/// How a media file may be transformed.
pub fn transformation_block() -> Block {
    Block::new(
        "Transformation",
        vec![
            Section::reserved(),
            Section::new("contrast", ["low", "medium", "high", "extreme"]),
            Section::new(
                "colour",
                ["back and white", "greyscale", "dull", "vivid", "invert"],
            ),
            Section::new(
                "aspect",
                [
                    "flip vertically",
                    "flip horizontally",
                    "rotate left 90",
                    "rotate right 90",
                    "double height",
                    "double width",
                ],
            ),
            Section::new("size", SIZES),
        ],
    )
    .with_shared_description("Media Files may be transformed")
}

/// How a media file may be formatted.
pub fn format_block() -> Block {
    Block::new(
        "Format",
        vec![
            Section::reserved(),
            Section::new("image_format", ["tiff", "jpeg", "png"]),
            Section::new("colour_space", ["sRGB", "AdobeRGB", "P3"]),
            Section::new(
                "channel_depth",
                ["8bit", "10bit", "12bit", "14bit", "16bit", "24bit", "32bit", "48bit", "64bit"],
            ),
            Section::new(
                "compress",
                [
                    "uncompressed",
                    "lossless",
                    "transparent",
                    "excellent",
                    "great",
                    "very good",
                    "good",
                    "fair",
                    "poor",
                    "very poor",
                    "worst",
                ],
            ),
        ],
    )
    .with_shared_description("Media Files may formatted in various ways")
}

/// How much metadata is embedded in the media file.
pub fn embedded_block() -> Block {
    Block::new(
        "Embedded",
        vec![Section::new(
            "embedded",
            ["unmodified", "blank", "copyright only", "copyright and artist", "full"],
        )],
    )
    .with_shared_description("Metadata may be embedded within the media file")
}

/// Adaption, Transformation, Format and Embedded, in allocation order.
pub fn modification_blocks() -> Vec<Block> {
    vec![adaption_block(), transformation_block(), format_block(), embedded_block()]
}
