//! Contiguous codepoint ranges.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::PAGE_SIZE;

/// A half-open range of codepoints `[start, stop)`.
///
/// Every level of the catalog reserves whole pages, so ranges produced by
/// the allocator always start on a page boundary and span a multiple of
/// [`PAGE_SIZE`] codepoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodepointRange {
    /// First codepoint in the range.
    pub start: u32,
    /// One past the last codepoint in the range.
    pub stop: u32,
}

impl CodepointRange {
    /// Create a range from explicit bounds.
    pub fn new(start: u32, stop: u32) -> Self {
        Self { start, stop }
    }

    /// Create the range covering `pages` whole pages from `start`.
    pub fn from_pages(start: u32, pages: u32) -> Self {
        Self::new(start, start + pages * PAGE_SIZE)
    }

    /// Whether `codepoint` falls inside this range.
    pub fn contains(&self, codepoint: u32) -> bool {
        self.start <= codepoint && codepoint < self.stop
    }

    /// Number of codepoints covered.
    pub fn len(&self) -> u32 {
        self.stop.saturating_sub(self.start)
    }

    /// Whether the range covers no codepoints.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of whole pages covered.
    pub fn pages(&self) -> u32 {
        self.len() / PAGE_SIZE
    }

    /// The last codepoint inside the range, if any.
    pub fn last(&self) -> Option<u32> {
        if self.is_empty() {
            None
        } else {
            Some(self.stop - 1)
        }
    }

    /// Whether the two ranges share at least one codepoint.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.stop && other.start < self.stop
    }
}

// Inclusive display: "0x000 - 0x00F"
impl fmt::Display for CodepointRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:03X} - 0x{:03X}",
            self.start,
            self.last().unwrap_or(self.start)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pages() {
        let range = CodepointRange::from_pages(0x100, 3);
        assert_eq!(range.start, 0x100);
        assert_eq!(range.stop, 0x130);
        assert_eq!(range.len(), 0x30);
        assert_eq!(range.pages(), 3);
        assert_eq!(range.last(), Some(0x12F));
    }

    #[test]
    fn test_contains_is_half_open() {
        let range = CodepointRange::from_pages(0x030, 1);
        assert!(range.contains(0x030));
        assert!(range.contains(0x03F));
        assert!(!range.contains(0x040));
        assert!(!range.contains(0x02F));
    }

    #[test]
    fn test_overlaps() {
        let a = CodepointRange::new(0x000, 0x010);
        let b = CodepointRange::new(0x010, 0x020);
        let c = CodepointRange::new(0x00F, 0x011);

        // Adjacent ranges do not overlap
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn test_display_shows_inclusive_last() {
        let range = CodepointRange::from_pages(0x600, 32);
        assert_eq!(range.to_string(), "0x600 - 0x7FF");
    }
}
