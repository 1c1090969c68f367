//! Frozen catalog definitions, one per scheme version.
//!
//! A scheme version is never edited once published: a filename encoded
//! against `v.0.1.0` must decode against `v.0.1.0` forever. Changes go into
//! a new version module.

pub mod modifications;
pub mod v0_0_1;
pub mod v0_1_0;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::catalog::{AllCodes, CatalogError};

/// Plane holding the data type codes.
pub const DATATYPE_PLANE: &str = "DATATYPE";
/// Plane holding the way codes.
pub const WAY_PLANE: &str = "WAY";
/// Plane holding edition and revision numbers.
pub const LISTING_PLANE: &str = "LISTING";
/// Plane holding modification codes.
pub const MODIFICATION_PLANE: &str = "MODIFICATION";

/// Error parsing a scheme version string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown scheme version {0:?}, expected v.0.0.1 or v.0.1.0")]
pub struct UnknownSchemeVersion(pub String);

/// Published scheme versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SchemeVersion {
    /// `v.0.0.1`, catalog only.
    V0_0_1,
    /// `v.0.1.0`, used by the filename codec.
    #[default]
    V0_1_0,
}

impl SchemeVersion {
    /// Every published version, oldest first.
    pub const ALL: [SchemeVersion; 2] = [SchemeVersion::V0_0_1, SchemeVersion::V0_1_0];

    /// Version string, e.g. `v.0.1.0`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemeVersion::V0_0_1 => v0_0_1::SCHEME_VERSION,
            SchemeVersion::V0_1_0 => v0_1_0::SCHEME_VERSION,
        }
    }

    /// Build a fresh catalog for this version.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the declarations break a catalog invariant.
    pub fn build_catalog(&self) -> Result<AllCodes, CatalogError> {
        match self {
            SchemeVersion::V0_0_1 => v0_0_1::build(),
            SchemeVersion::V0_1_0 => v0_1_0::build(),
        }
    }

    /// The catalog of this version, built on first use and shared afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the declarations break a catalog invariant.
    pub fn catalog(&self) -> Result<&'static AllCodes, CatalogError> {
        static V0_0_1: OnceLock<Result<AllCodes, CatalogError>> = OnceLock::new();
        static V0_1_0: OnceLock<Result<AllCodes, CatalogError>> = OnceLock::new();

        let cell = match self {
            SchemeVersion::V0_0_1 => &V0_0_1,
            SchemeVersion::V0_1_0 => &V0_1_0,
        };

        cell.get_or_init(|| self.build_catalog())
            .as_ref()
            .map_err(Clone::clone)
    }
}

impl fmt::Display for SchemeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemeVersion {
    type Err = UnknownSchemeVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim_start_matches("v.").trim_start_matches('v');
        match digits {
            "0.0.1" => Ok(SchemeVersion::V0_0_1),
            "0.1.0" => Ok(SchemeVersion::V0_1_0),
            _ => Err(UnknownSchemeVersion(s.to_string())),
        }
    }
}

impl TryFrom<String> for SchemeVersion {
    type Error = UnknownSchemeVersion;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SchemeVersion> for String {
    fn from(version: SchemeVersion) -> Self {
        version.as_str().to_string()
    }
}
