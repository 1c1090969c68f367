//! Modifications recorded against a way stage.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::ConstructionError;

/// One modification, named by its place in the MODIFICATION plane.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Modification {
    /// Block name, e.g. `Adaption`.
    pub block: String,
    /// Section name, e.g. `prospective`.
    pub section: String,
    /// Section value, e.g. `bottom`.
    pub value: String,
}

impl Modification {
    /// Create a modification.
    pub fn new(
        block: impl Into<String>,
        section: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            block: block.into(),
            section: section.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Modification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.block, self.section, self.value)
    }
}

/// Ordered list of distinct modifications.
///
/// Order is significant: `[A, B]` and `[B, A]` are different values and
/// encode differently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Modification>", into = "Vec<Modification>")]
pub struct Modifications(Vec<Modification>);

impl Modifications {
    /// Create a list, rejecting repeated entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::DuplicateModification`] with the first
    /// repeated entry.
    pub fn new(
        modifications: impl IntoIterator<Item = Modification>,
    ) -> Result<Self, ConstructionError> {
        let modifications: Vec<Modification> = modifications.into_iter().collect();

        let mut seen = BTreeSet::new();
        for modification in &modifications {
            if !seen.insert(modification) {
                return Err(ConstructionError::DuplicateModification(modification.clone()));
            }
        }

        Ok(Self(modifications))
    }

    /// Entries in order.
    pub fn as_slice(&self) -> &[Modification] {
        &self.0
    }

    /// Iterate entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Modification> {
        self.0.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<Modification>> for Modifications {
    type Error = ConstructionError;

    fn try_from(value: Vec<Modification>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Modifications> for Vec<Modification> {
    fn from(modifications: Modifications) -> Self {
        modifications.0
    }
}

impl<'a> IntoIterator for &'a Modifications {
    type Item = &'a Modification;
    type IntoIter = std::slice::Iter<'a, Modification>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
