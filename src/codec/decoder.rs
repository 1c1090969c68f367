//! Filename decoder.
//!
//! Decoding runs in three passes:
//!
//! 1. **Tokenize.** Split off the library prefix at the first `-`, then
//!    resolve dot-separated codepoints left to right until the first one in
//!    the DATATYPE plane. Whatever follows that token is the extension.
//! 2. **Listing.** The first two lookups must be an edition and a revision.
//! 3. **Way path.** The remaining lookups are walked with a cursor by a
//!    state machine whose states are the [`Ways`] nodes. Each node checks
//!    the next lookup against its successor table and, if it records
//!    modifications, first takes the run of MODIFICATION-plane lookups that
//!    follows it. The collected [`WayPaths`] are then folded back into a
//!    [`Gold`] tree.
//!
//! Every failure is fatal for the call; nothing is partially returned.

use crate::catalog::{AllCodes, NamecodeLookup, ResolutionError};
use crate::scheme::modifications::{EDITION_BLOCK, REVISION_BLOCK};
use crate::scheme::{DATATYPE_PLANE, LISTING_PLANE, MODIFICATION_PLANE, WAY_PLANE};
use crate::types::{
    ConstructionError, DataType, Extension, Filename, Gold, ItemNumber, LibraryEntry,
    LibraryName, Listing, Modification, Modifications, WayPaths, Ways,
};
use crate::ITEM_NUMBER_OFFSET;

/// The raw text cannot be split into a filename's parts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// No `-` separates the library prefix from the codes.
    #[error("Missing '-' between library prefix and codes")]
    MissingDelimiter,
    /// Prefix does not start with a valid library name.
    #[error("Invalid library prefix {0:?}")]
    InvalidLibraryPrefix(String),
    /// Item hex is not a valid offset item number.
    #[error("Invalid item number {0:?}")]
    InvalidItemNumber(String),
    /// A code token is not a decimal integer.
    #[error("Code {0:?} is not a decimal integer")]
    NonNumericCode(String),
    /// Fewer than two codes precede the way codes.
    #[error("Missing edition or revision code")]
    MissingListing,
    /// No code resolves into the DATATYPE plane.
    #[error("Missing data type code")]
    MissingDataType,
    /// Nothing follows the data type code.
    #[error("Missing extension after data type code")]
    EmptyExtension,
    /// A listing label does not carry a number.
    #[error("Listing value {0:?} has no number")]
    MalformedListing(String),
}

/// Resolved codes do not follow the way path grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    /// No way codes at all.
    #[error("Way path is empty, expected Gold")]
    EmptyPath,
    /// The path does not start at Gold.
    #[error("Unexpected root {found}, expected Gold")]
    UnexpectedRoot {
        /// The offending lookup.
        found: String,
    },
    /// A node is followed by something other than a legal successor.
    #[error("{node} cannot be followed by {found}, expected one of {expected:?}")]
    IllegalSuccessor {
        /// Node being left.
        node: Ways,
        /// The offending lookup.
        found: String,
        /// Legal successors of `node`.
        expected: Vec<Ways>,
    },
    /// A node that records modifications is not followed by any.
    #[error("{node} must be followed by at least one modification, found {found}")]
    MissingModifications {
        /// Node missing its modifications.
        node: Ways,
        /// What followed instead.
        found: String,
    },
    /// Codes remain after a node with no successors.
    #[error("{node} ends the way path but {found} follows")]
    TrailingLookups {
        /// The terminal node.
        node: Ways,
        /// The first leftover lookup.
        found: String,
    },
    /// A listing position holds a code from another block.
    #[error("Expected a code from {expected}, found {found}")]
    UnexpectedCode {
        /// Plane and block expected.
        expected: String,
        /// The offending lookup.
        found: String,
    },
}

/// Any failure while decoding a filename.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Raw text is malformed.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// A codepoint is not in the catalog.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    /// Codes are out of order.
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    /// Decoded fields fail value validation.
    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

const END_OF_INPUT: &str = "end of input";

/// Codes of a filename body, resolved but not yet interpreted.
#[derive(Debug)]
struct Tokens<'a, 'c> {
    lookups: Vec<NamecodeLookup<'c>>,
    data_type: NamecodeLookup<'c>,
    extension: &'a str,
}

/// Hex digits of every encoded item number (`0x100000..0x10FFFE`).
const ITEM_HEX_DIGITS: usize = 6;

/// Parse `<library><item hex>`.
fn parse_library_entry(prefix: &str) -> Result<LibraryEntry, FormatError> {
    let split = prefix
        .char_indices()
        .nth(LibraryName::LEN)
        .map_or(prefix.len(), |(index, _)| index);
    let (library, item_hex) = prefix.split_at(split);

    let library = LibraryName::new(library)
        .map_err(|_| FormatError::InvalidLibraryPrefix(prefix.to_string()))?;

    let invalid_item = || FormatError::InvalidItemNumber(item_hex.to_string());
    let uppercase_hex = item_hex
        .bytes()
        .all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b));
    if item_hex.len() != ITEM_HEX_DIGITS || !uppercase_hex {
        return Err(invalid_item());
    }
    let item = u32::from_str_radix(item_hex, 16)
        .ok()
        .and_then(|raw| raw.checked_sub(ITEM_NUMBER_OFFSET))
        .and_then(|number| ItemNumber::new(number).ok())
        .ok_or_else(invalid_item)?;

    Ok(LibraryEntry::new(library, item))
}

/// Parse one code token: plain decimal digits, no sign, no leading zero.
fn parse_code(token: &str) -> Result<u32, FormatError> {
    let digits_only = !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit());
    let leading_zero = token.len() > 1 && token.starts_with('0');

    if !digits_only || leading_zero {
        return Err(FormatError::NonNumericCode(token.to_string()));
    }
    token
        .parse()
        .map_err(|_| FormatError::NonNumericCode(token.to_string()))
}

/// Resolve codes up to and including the data type.
fn tokenize<'a, 'c>(catalog: &'c AllCodes, body: &'a str) -> Result<Tokens<'a, 'c>, DecodeError> {
    let mut lookups = Vec::new();
    let mut rest = Some(body);

    while let Some(remaining) = rest {
        let (token, tail) = match remaining.split_once('.') {
            Some((token, tail)) => (token, Some(tail)),
            None => (remaining, None),
        };

        let codepoint = parse_code(token)?;
        let lookup = catalog.resolve(codepoint)?;

        if lookup.plane == DATATYPE_PLANE {
            let extension = tail.unwrap_or_default();
            if extension.is_empty() {
                return Err(FormatError::EmptyExtension.into());
            }
            return Ok(Tokens {
                lookups,
                data_type: lookup,
                extension,
            });
        }

        lookups.push(lookup);
        rest = tail;
    }

    Err(FormatError::MissingDataType.into())
}

/// Number carried by a listing lookup from `block`.
fn listing_number(lookup: Option<&NamecodeLookup<'_>>, block: &str) -> Result<u32, DecodeError> {
    let lookup = lookup.ok_or(FormatError::MissingListing)?;

    if lookup.plane != LISTING_PLANE || lookup.block != block {
        return Err(GrammarError::UnexpectedCode {
            expected: format!("{LISTING_PLANE}/{block}"),
            found: lookup.to_string(),
        }
        .into());
    }

    let prefix = format!("{}: #", block.to_lowercase());
    lookup
        .value
        .strip_prefix(prefix.as_str())
        .and_then(|number| number.parse().ok())
        .ok_or_else(|| FormatError::MalformedListing(lookup.value.to_string()).into())
}

/// Index cursor over way lookups, read from the root end.
struct Cursor<'s, 'c> {
    lookups: &'s [NamecodeLookup<'c>],
    position: usize,
}

impl<'s, 'c> Cursor<'s, 'c> {
    fn new(lookups: &'s [NamecodeLookup<'c>]) -> Self {
        Self {
            lookups,
            position: 0,
        }
    }

    fn peek(&self) -> Option<&'s NamecodeLookup<'c>> {
        self.lookups.get(self.position)
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn describe_next(&self) -> String {
        self.peek()
            .map_or_else(|| END_OF_INPUT.to_string(), ToString::to_string)
    }

    /// Way node named by the next lookup, if it is a way code.
    fn peek_way(&self) -> Option<Ways> {
        self.peek()
            .filter(|lookup| lookup.plane == WAY_PLANE)
            .and_then(|lookup| Ways::from_catalog_value(lookup.value))
    }

    /// Take the run of MODIFICATION-plane lookups at the cursor.
    fn take_modifications(&mut self, node: Ways) -> Result<Modifications, DecodeError> {
        let mut run = Vec::new();
        while let Some(lookup) = self.peek().filter(|lookup| lookup.plane == MODIFICATION_PLANE) {
            run.push(Modification::new(lookup.block, lookup.section, lookup.value));
            self.advance();
        }

        if run.is_empty() {
            return Err(GrammarError::MissingModifications {
                node,
                found: self.describe_next(),
            }
            .into());
        }

        Ok(Modifications::new(run)?)
    }
}

/// Walk way lookups through the path grammar.
fn determine_path(lookups: &[NamecodeLookup<'_>]) -> Result<WayPaths, DecodeError> {
    let mut cursor = Cursor::new(lookups);

    let root = cursor.peek().ok_or(GrammarError::EmptyPath)?;
    if cursor.peek_way() != Some(Ways::Gold) {
        return Err(GrammarError::UnexpectedRoot {
            found: root.to_string(),
        }
        .into());
    }
    cursor.advance();

    let mut path = WayPaths::new();
    let mut node = Ways::Gold;

    loop {
        let modifications = if node.carries_modifications() {
            cursor.take_modifications(node)?
        } else {
            Modifications::default()
        };
        path.push(node, modifications);

        let Some(next) = cursor.peek() else {
            return Ok(path);
        };

        let successors = node.successors();
        match cursor.peek_way() {
            Some(way) if successors.contains(&way) => {
                cursor.advance();
                node = way;
            }
            _ if successors.is_empty() => {
                return Err(GrammarError::TrailingLookups {
                    node,
                    found: next.to_string(),
                }
                .into());
            }
            _ => {
                return Err(GrammarError::IllegalSuccessor {
                    node,
                    found: next.to_string(),
                    expected: successors.to_vec(),
                }
                .into());
            }
        }
    }
}

fn decode_parts(catalog: &AllCodes, text: &str) -> Result<Filename, DecodeError> {
    let (prefix, body) = text.split_once('-').ok_or(FormatError::MissingDelimiter)?;
    let library_entry = parse_library_entry(prefix)?;

    let tokens = tokenize(catalog, body)?;

    let edition = listing_number(tokens.lookups.first(), EDITION_BLOCK)?;
    let revision = listing_number(tokens.lookups.get(1), REVISION_BLOCK)?;

    let way_lookups = tokens.lookups.get(2..).unwrap_or_default();
    let provenance: Gold = determine_path(way_lookups)?.into_gold()?;

    let lookup = &tokens.data_type;
    let data_type = DataType::from_catalog_value(lookup.value).ok_or_else(|| {
        ResolutionError::UnknownKey(format!(
            "{}/{}/{}/{}",
            lookup.plane, lookup.block, lookup.section, lookup.value
        ))
    })?;

    let extension = Extension::new(tokens.extension)?;

    Ok(Filename::new(
        library_entry,
        Listing::new(edition, revision),
        provenance,
        data_type,
        extension,
    ))
}

/// Decode `text` against `catalog`.
///
/// The exact inverse of [`encode`](super::encode): for any filename the
/// encoder produces, decoding it returns an equal [`Filename`].
///
/// # Errors
///
/// Returns [`DecodeError`] wrapping the first format, resolution, grammar
/// or construction failure.
pub fn decode(catalog: &AllCodes, text: &str) -> Result<Filename, DecodeError> {
    match decode_parts(catalog, text) {
        Ok(filename) => {
            tracing::trace!(
                scheme_version = catalog.scheme_version(),
                way = %filename.provenance,
                "Filename decoded"
            );
            Ok(filename)
        }
        Err(error) => {
            tracing::debug!(text = text, error = %error, "Filename rejected");
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::SchemeVersion;

    fn catalog() -> &'static AllCodes {
        SchemeVersion::V0_1_0.catalog().unwrap()
    }

    fn lookups(codes: &[u32]) -> Vec<NamecodeLookup<'static>> {
        codes.iter().map(|code| catalog().resolve(*code).unwrap()).collect()
    }

    #[test]
    fn test_parse_library_entry() {
        let entry = parse_library_entry("aaa100001").unwrap();
        assert_eq!(entry.library.as_str(), "aaa");
        assert_eq!(entry.item.get(), 1);

        assert_eq!(
            parse_library_entry("aa1100001"),
            Err(FormatError::InvalidLibraryPrefix("aa1100001".to_string()))
        );
        assert_eq!(
            parse_library_entry("aaa").unwrap_err(),
            FormatError::InvalidItemNumber(String::new())
        );
        assert_eq!(
            parse_library_entry("aa").unwrap_err(),
            FormatError::InvalidLibraryPrefix("aa".to_string())
        );
        assert!(matches!(parse_library_entry("aaa0FFFF"), Err(FormatError::InvalidItemNumber(_))));
        assert!(matches!(parse_library_entry("aaa10FFFE"), Err(FormatError::InvalidItemNumber(_))));
        assert!(matches!(parse_library_entry("aaa+10001"), Err(FormatError::InvalidItemNumber(_))));
    }

    #[test]
    fn test_item_hex_must_be_six_uppercase_digits() {
        for prefix in ["aaa10000a", "aaa0100001", "aaa10001", "aaa1000001", "aaa+10001"] {
            let item_hex = &prefix[3..];
            assert_eq!(
                parse_library_entry(prefix),
                Err(FormatError::InvalidItemNumber(item_hex.to_string())),
                "{prefix}"
            );
        }
        assert_eq!(parse_library_entry("ZZZ10FFFD").unwrap().item.get(), 0xFFFD);
    }

    #[test]
    fn test_code_tokens_are_plain_decimal() {
        assert_eq!(parse_code("0"), Ok(0));
        assert_eq!(parse_code("2101"), Ok(2101));

        for token in ["+48", "048", "00", "-1", "", " 48", "4_8", "99999999999"] {
            assert_eq!(
                parse_code(token),
                Err(FormatError::NonNumericCode(token.to_string())),
                "{token:?}"
            );
        }
    }

    #[test]
    fn test_decode_rejects_non_canonical_text() {
        assert!(decode(catalog(), "aaa100001-1536.1792.48.0.png").is_ok());

        let rejected = [
            "aaa100001-1536.1792.+48.0.png",
            "aaa100001-1536.1792.048.0.png",
            "aaa10000a-1536.1792.48.0.png",
            "aaa0100001-1536.1792.48.0.png",
            "aaa100001-+1536.1792.48.0.png",
        ];
        for text in rejected {
            assert!(
                matches!(decode(catalog(), text), Err(DecodeError::Format(_))),
                "{text}"
            );
        }
    }

    #[test]
    fn test_tokenize_stops_at_data_type() {
        let tokens = tokenize(catalog(), "1536.1792.48.2.tar.1.gz").unwrap();

        assert_eq!(tokens.lookups.len(), 3);
        assert_eq!(tokens.data_type.value, "media");
        assert_eq!(tokens.extension, "tar.1.gz");
    }

    #[test]
    fn test_tokenize_failures() {
        assert_eq!(
            tokenize(catalog(), "1536.x.48.0.png").unwrap_err(),
            DecodeError::from(FormatError::NonNumericCode("x".to_string()))
        );
        assert_eq!(
            tokenize(catalog(), "1536.1792.48").unwrap_err(),
            DecodeError::from(FormatError::MissingDataType)
        );
        assert_eq!(
            tokenize(catalog(), "1536.1792.48.0").unwrap_err(),
            DecodeError::from(FormatError::EmptyExtension)
        );
        assert_eq!(
            tokenize(catalog(), "1536.1792.48.0.").unwrap_err(),
            DecodeError::from(FormatError::EmptyExtension)
        );
        assert!(matches!(
            tokenize(catalog(), "1536.4000.0.png"),
            Err(DecodeError::Resolution(ResolutionError::NoPlane(4000)))
        ));
    }

    #[test]
    fn test_listing_number() {
        let found = lookups(&[0x600, 0x70F]);
        assert_eq!(listing_number(found.first(), EDITION_BLOCK), Ok(1));
        assert_eq!(listing_number(found.get(1), REVISION_BLOCK), Ok(16));

        assert!(matches!(
            listing_number(found.get(1), EDITION_BLOCK),
            Err(DecodeError::Grammar(GrammarError::UnexpectedCode { .. }))
        ));
        assert_eq!(
            listing_number(None, EDITION_BLOCK),
            Err(DecodeError::from(FormatError::MissingListing))
        );
    }

    #[test]
    fn test_path_gold_leaf() {
        let path = determine_path(&lookups(&[48])).unwrap();
        assert_eq!(path.into_gold(), Ok(Gold::Leaf));
    }

    #[test]
    fn test_path_keeps_modification_order() {
        let path = determine_path(&lookups(&[48, 49, 2102, 2101])).unwrap();
        let gold = path.into_gold().unwrap();

        let Gold::Alternative(alternative) = gold else {
            panic!("expected an alternative, got {gold:?}");
        };
        let values: Vec<&str> =
            alternative.modifications().iter().map(|m| m.value.as_str()).collect();
        assert_eq!(values, vec!["bottom", "top"]);
    }

    #[test]
    fn test_path_rejects_bad_root() {
        assert_eq!(determine_path(&[]).unwrap_err(), DecodeError::from(GrammarError::EmptyPath));
        assert!(matches!(
            determine_path(&lookups(&[49, 2101])),
            Err(DecodeError::Grammar(GrammarError::UnexpectedRoot { .. }))
        ));
        assert!(matches!(
            determine_path(&lookups(&[2101])),
            Err(DecodeError::Grammar(GrammarError::UnexpectedRoot { .. }))
        ));
    }

    #[test]
    fn test_path_requires_modification_run() {
        assert!(matches!(
            determine_path(&lookups(&[48, 49])),
            Err(DecodeError::Grammar(GrammarError::MissingModifications {
                node: Ways::GoldAlternative,
                ..
            }))
        ));
        assert!(matches!(
            determine_path(&lookups(&[48, 49, 52])),
            Err(DecodeError::Grammar(GrammarError::MissingModifications { .. }))
        ));
    }

    #[test]
    fn test_path_rejects_illegal_successor() {
        assert!(matches!(
            determine_path(&lookups(&[48, 51])),
            Err(DecodeError::Grammar(GrammarError::IllegalSuccessor { node: Ways::Gold, .. }))
        ));
        assert!(matches!(
            determine_path(&lookups(&[48, 49, 2101, 50])),
            Err(DecodeError::Grammar(GrammarError::IllegalSuccessor {
                node: Ways::GoldAlternative,
                ..
            }))
        ));
        // Modifications on a node that records none
        assert!(matches!(
            determine_path(&lookups(&[48, 50, 2101])),
            Err(DecodeError::Grammar(GrammarError::IllegalSuccessor { node: Ways::GoldBase, .. }))
        ));
    }

    #[test]
    fn test_path_rejects_trailing_lookups() {
        assert!(matches!(
            determine_path(&lookups(&[48, 50, 51, 2101, 48])),
            Err(DecodeError::Grammar(GrammarError::TrailingLookups {
                node: Ways::GoldBaseVariant,
                ..
            }))
        ));
    }

    #[test]
    fn test_path_rejects_duplicate_modifications() {
        assert_eq!(
            determine_path(&lookups(&[48, 49, 2101, 2101])).unwrap_err(),
            DecodeError::from(ConstructionError::DuplicateModification(Modification::new(
                "Adaption",
                "prospective",
                "top"
            )))
        );
    }

    #[test]
    fn test_decode_missing_delimiter() {
        assert_eq!(
            decode(catalog(), "aaa100001.1536.1792.48.0.png"),
            Err(DecodeError::from(FormatError::MissingDelimiter))
        );
    }
}
