//! Free-form filename suffix.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use super::ConstructionError;

/// Everything after the data type code, e.g. `tar.gz`.
///
/// May contain dots. Must not be empty, start with `..`, or contain control
/// characters or any of `/ \ : * ? " < > |`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Extension(String);

impl Extension {
    const FORBIDDEN: &'static str = r#"[\x00-\x1F\x7F/\\:*?"<>|]"#;

    /// Create a validated extension.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::InvalidExtension`] naming the broken rule.
    pub fn new(extension: impl Into<String>) -> Result<Self, ConstructionError> {
        static FORBIDDEN: OnceLock<Regex> = OnceLock::new();
        let forbidden =
            FORBIDDEN.get_or_init(|| Regex::new(Self::FORBIDDEN).expect("extension pattern"));

        let extension = extension.into();
        let reason = if extension.is_empty() {
            Some("must not be empty")
        } else if extension.starts_with("..") {
            Some("must not start with a double period")
        } else if forbidden.is_match(&extension) {
            Some("must not contain control or reserved path characters")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ConstructionError::InvalidExtension { extension, reason }),
            None => Ok(Self(extension)),
        }
    }

    /// The extension as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Extension {
    type Error = ConstructionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Extension> for String {
    fn from(extension: Extension) -> Self {
        extension.0
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_dotted_suffixes() {
        for ok in ["png", "test.time", "tar.gz", ".hidden", "a-b_c"] {
            assert_eq!(Extension::new(ok).map(|e| e.to_string()), Ok(ok.to_string()));
        }
    }

    #[test]
    fn test_rejects_bad_suffixes() {
        for bad in ["", "..png", "a/b", "a\\b", "c:d", "what?", "a\tb", "x|y", "\"q\""] {
            assert!(
                matches!(Extension::new(bad), Err(ConstructionError::InvalidExtension { .. })),
                "{bad:?} should be rejected"
            );
        }
    }
}
