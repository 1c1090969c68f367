//! Crate-wide error type.
//!
//! | Kind | Raised by | Meaning |
//! |------|-----------|---------|
//! | [`CatalogError`] | catalog construction | declarations break a catalog invariant |
//! | [`ConstructionError`] | value object constructors | a field value is invalid |
//! | [`ResolutionError`] | resolver, encoder, decoder | a codepoint or key is not in the catalog |
//! | [`GrammarError`] | decoder | resolved codes are out of order |
//! | [`FormatError`] | decoder | raw text cannot be tokenized |
//!
//! None of these is retried or recovered inside the crate.

use crate::catalog::{CatalogError, ResolutionError};
use crate::codec::{DecodeError, FormatError, GrammarError};
use crate::scheme::UnknownSchemeVersion;
use crate::types::ConstructionError;

/// Any error the crate can return.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NamecodeError {
    /// Catalog declarations are inconsistent.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    /// A value object was given an invalid field.
    #[error("Construction error: {0}")]
    Construction(#[from] ConstructionError),
    /// A codepoint or key has no catalog entry.
    #[error("Resolution error: {0}")]
    Resolution(#[from] ResolutionError),
    /// Resolved codes break the way path grammar.
    #[error("Grammar error: {0}")]
    Grammar(#[from] GrammarError),
    /// Raw filename text is malformed.
    #[error("Format error: {0}")]
    Format(#[from] FormatError),
    /// Scheme version string not recognised.
    #[error("Scheme error: {0}")]
    Scheme(#[from] UnknownSchemeVersion),
}

impl From<DecodeError> for NamecodeError {
    fn from(error: DecodeError) -> Self {
        match error {
            DecodeError::Format(e) => NamecodeError::Format(e),
            DecodeError::Resolution(e) => NamecodeError::Resolution(e),
            DecodeError::Grammar(e) => NamecodeError::Grammar(e),
            DecodeError::Construction(e) => NamecodeError::Construction(e),
        }
    }
}

/// Result type using [`NamecodeError`].
pub type Result<T> = std::result::Result<T, NamecodeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Ways;

    #[test]
    fn test_decode_errors_flatten() {
        let error = NamecodeError::from(DecodeError::from(GrammarError::EmptyPath));
        assert_eq!(error, NamecodeError::Grammar(GrammarError::EmptyPath));

        let error = NamecodeError::from(DecodeError::from(ConstructionError::EmptyModifications(
            Ways::GoldBaseVariant,
        )));
        assert!(matches!(error, NamecodeError::Construction(_)));
    }

    #[test]
    fn test_messages_name_the_kind() {
        let error = NamecodeError::from(FormatError::MissingDelimiter);
        assert!(error.to_string().starts_with("Format error:"));

        let error = NamecodeError::from(ResolutionError::NoPlane(0xFFF));
        assert_eq!(error.to_string(), "Resolution error: Codepoint 4095 is not in any plane");
    }
}
