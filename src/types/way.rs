//! The way of an artwork: its provenance tree.
//!
//! Every file descends from a gold original. From there a file is either an
//! alternative (a modified gold) or a base (a gold prepared for public use),
//! and each of those may be carried further:
//!
//! ```text
//! Gold ─┬─ GoldAlternative* ── GoldAlternativeBase ── GoldAlternativeBaseVariant*
//!       └─ GoldBase ────────── GoldBaseVariant*
//! ```
//!
//! Nodes marked `*` record the modifications made at that stage and must
//! record at least one. The tree is a chain: each node has at most one
//! child, and only the children drawn above are legal.
//!
//! [`Ways`] names the six nodes. [`Gold`] and its children hold a concrete
//! path, and [`WayPaths`] is the flattened root-to-leaf form the codec
//! works with.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::modification::{Modification, Modifications};
use super::ConstructionError;

/// The six nodes of the provenance tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ways {
    /// The original artwork.
    Gold,
    /// The original, modified or transformed.
    GoldAlternative,
    /// The original, processed for public use.
    GoldBase,
    /// A base, further modified.
    GoldBaseVariant,
    /// An alternative, processed for public use.
    GoldAlternativeBase,
    /// An alternative base, further modified.
    GoldAlternativeBaseVariant,
}

impl Ways {
    /// All nodes in catalog order.
    pub const ALL: [Ways; 6] = [
        Ways::Gold,
        Ways::GoldAlternative,
        Ways::GoldBase,
        Ways::GoldBaseVariant,
        Ways::GoldAlternativeBase,
        Ways::GoldAlternativeBaseVariant,
    ];

    /// Value of this node in the Way section.
    pub fn catalog_value(&self) -> &'static str {
        match self {
            Ways::Gold => "gold",
            Ways::GoldAlternative => "gold_alternative",
            Ways::GoldBase => "base",
            Ways::GoldBaseVariant => "base_variant",
            Ways::GoldAlternativeBase => "base_alternative",
            Ways::GoldAlternativeBaseVariant => "base_alternative_variant",
        }
    }

    /// Inverse of [`Ways::catalog_value`].
    pub fn from_catalog_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|way| way.catalog_value() == value)
    }

    /// Whether the node records modifications.
    pub fn carries_modifications(&self) -> bool {
        matches!(
            self,
            Ways::GoldAlternative | Ways::GoldBaseVariant | Ways::GoldAlternativeBaseVariant
        )
    }

    /// Nodes that may follow this one.
    pub fn successors(&self) -> &'static [Ways] {
        match self {
            Ways::Gold => &[Ways::GoldAlternative, Ways::GoldBase],
            Ways::GoldAlternative => &[Ways::GoldAlternativeBase],
            Ways::GoldAlternativeBase => &[Ways::GoldAlternativeBaseVariant],
            Ways::GoldBase => &[Ways::GoldBaseVariant],
            Ways::GoldBaseVariant | Ways::GoldAlternativeBaseVariant => &[],
        }
    }
}

impl fmt::Display for Ways {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Ways::Gold => "Gold",
            Ways::GoldAlternative => "GoldAlternative",
            Ways::GoldBase => "GoldBase",
            Ways::GoldBaseVariant => "GoldBaseVariant",
            Ways::GoldAlternativeBase => "GoldAlternativeBase",
            Ways::GoldAlternativeBaseVariant => "GoldAlternativeBaseVariant",
        };
        f.write_str(name)
    }
}

fn require_modifications(
    way: Ways,
    modifications: &Modifications,
) -> Result<(), ConstructionError> {
    if modifications.is_empty() {
        Err(ConstructionError::EmptyModifications(way))
    } else {
        Ok(())
    }
}

/// Root of every provenance tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gold {
    /// The original itself.
    #[default]
    Leaf,
    /// A modified original.
    Alternative(GoldAlternative),
    /// An original prepared for public use.
    Base(GoldBase),
}

/// A gold original with modifications applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GoldAlternativeRecord")]
pub struct GoldAlternative {
    modifications: Modifications,
    #[serde(skip_serializing_if = "Option::is_none")]
    base: Option<GoldAlternativeBase>,
}

#[derive(Deserialize)]
struct GoldAlternativeRecord {
    modifications: Modifications,
    #[serde(default)]
    base: Option<GoldAlternativeBase>,
}

impl TryFrom<GoldAlternativeRecord> for GoldAlternative {
    type Error = ConstructionError;

    fn try_from(record: GoldAlternativeRecord) -> Result<Self, Self::Error> {
        Self::new(record.modifications, record.base)
    }
}

impl GoldAlternative {
    /// Create an alternative, optionally carried on to a base.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::EmptyModifications`] if `modifications`
    /// is empty.
    pub fn new(
        modifications: Modifications,
        base: Option<GoldAlternativeBase>,
    ) -> Result<Self, ConstructionError> {
        require_modifications(Ways::GoldAlternative, &modifications)?;
        Ok(Self { modifications, base })
    }

    /// Modifications made to the original.
    pub fn modifications(&self) -> &Modifications {
        &self.modifications
    }

    /// The base built from this alternative, if any.
    pub fn base(&self) -> Option<&GoldAlternativeBase> {
        self.base.as_ref()
    }
}

/// An alternative prepared for public use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoldAlternativeBase {
    /// The alternative base itself.
    #[default]
    Leaf,
    /// A further modified alternative base.
    Variant(GoldAlternativeBaseVariant),
}

/// An alternative base with further modifications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Modifications", into = "Modifications")]
pub struct GoldAlternativeBaseVariant {
    modifications: Modifications,
}

impl GoldAlternativeBaseVariant {
    /// Create a variant.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::EmptyModifications`] if `modifications`
    /// is empty.
    pub fn new(modifications: Modifications) -> Result<Self, ConstructionError> {
        require_modifications(Ways::GoldAlternativeBaseVariant, &modifications)?;
        Ok(Self { modifications })
    }

    /// Modifications made to the alternative base.
    pub fn modifications(&self) -> &Modifications {
        &self.modifications
    }
}

impl TryFrom<Modifications> for GoldAlternativeBaseVariant {
    type Error = ConstructionError;

    fn try_from(modifications: Modifications) -> Result<Self, Self::Error> {
        Self::new(modifications)
    }
}

impl From<GoldAlternativeBaseVariant> for Modifications {
    fn from(variant: GoldAlternativeBaseVariant) -> Self {
        variant.modifications
    }
}

/// A gold original prepared for public use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoldBase {
    /// The base itself.
    #[default]
    Leaf,
    /// A further modified base.
    Variant(GoldBaseVariant),
}

/// A base with further modifications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Modifications", into = "Modifications")]
pub struct GoldBaseVariant {
    modifications: Modifications,
}

impl GoldBaseVariant {
    /// Create a variant.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::EmptyModifications`] if `modifications`
    /// is empty.
    pub fn new(modifications: Modifications) -> Result<Self, ConstructionError> {
        require_modifications(Ways::GoldBaseVariant, &modifications)?;
        Ok(Self { modifications })
    }

    /// Modifications made to the base.
    pub fn modifications(&self) -> &Modifications {
        &self.modifications
    }
}

impl TryFrom<Modifications> for GoldBaseVariant {
    type Error = ConstructionError;

    fn try_from(modifications: Modifications) -> Result<Self, Self::Error> {
        Self::new(modifications)
    }
}

impl From<GoldBaseVariant> for Modifications {
    fn from(variant: GoldBaseVariant) -> Self {
        variant.modifications
    }
}

/// One node on a root-to-leaf walk, with the modifications it records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WayStage<'a> {
    /// The node.
    pub way: Ways,
    /// Its modifications; empty for nodes that record none.
    pub modifications: &'a [Modification],
}

impl<'a> WayStage<'a> {
    fn bare(way: Ways) -> Self {
        Self {
            way,
            modifications: &[],
        }
    }

    fn modified(way: Ways, modifications: &'a Modifications) -> Self {
        Self {
            way,
            modifications: modifications.as_slice(),
        }
    }
}

impl Gold {
    /// Nodes from the root down to the leaf, with their modifications.
    pub fn stages(&self) -> Vec<WayStage<'_>> {
        let mut stages = vec![WayStage::bare(Ways::Gold)];

        match self {
            Gold::Leaf => {}
            Gold::Alternative(alternative) => {
                stages.push(WayStage::modified(Ways::GoldAlternative, &alternative.modifications));
                match &alternative.base {
                    None => {}
                    Some(GoldAlternativeBase::Leaf) => {
                        stages.push(WayStage::bare(Ways::GoldAlternativeBase));
                    }
                    Some(GoldAlternativeBase::Variant(variant)) => {
                        stages.push(WayStage::bare(Ways::GoldAlternativeBase));
                        stages.push(WayStage::modified(
                            Ways::GoldAlternativeBaseVariant,
                            &variant.modifications,
                        ));
                    }
                }
            }
            Gold::Base(base) => {
                stages.push(WayStage::bare(Ways::GoldBase));
                if let GoldBase::Variant(variant) = base {
                    stages.push(WayStage::modified(Ways::GoldBaseVariant, &variant.modifications));
                }
            }
        }

        stages
    }
}

impl fmt::Display for Gold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, stage) in self.stages().iter().enumerate() {
            if index > 0 {
                f.write_str(" > ")?;
            }
            write!(f, "{}", stage.way)?;
            if !stage.modifications.is_empty() {
                let names: Vec<String> =
                    stage.modifications.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", names.join(", "))?;
            }
        }
        Ok(())
    }
}

/// A provenance path as an owned root-to-leaf sequence of stages.
///
/// The decoder collects stages here as it walks the way codes, then
/// rebuilds the nested [`Gold`] value with [`WayPaths::into_gold`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WayPaths {
    stages: Vec<(Ways, Modifications)>,
}

impl WayPaths {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stage below the current leaf.
    pub fn push(&mut self, way: Ways, modifications: Modifications) {
        self.stages.push((way, modifications));
    }

    /// Nodes in root-to-leaf order.
    pub fn ways(&self) -> impl Iterator<Item = Ways> + '_ {
        self.stages.iter().map(|(way, _)| *way)
    }

    /// Rebuild the nested provenance tree, leaf first.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::InvalidWayPath`] if the stages do not
    /// form a legal chain from `Gold`, or the error of the node whose
    /// modifications are invalid.
    pub fn into_gold(self) -> Result<Gold, ConstructionError> {
        let legal_chain = self.stages.first().map(|(way, _)| *way) == Some(Ways::Gold)
            && self
                .stages
                .windows(2)
                .all(|pair| pair[0].0.successors().contains(&pair[1].0));
        let stray_modifications = self
            .stages
            .iter()
            .any(|(way, modifications)| !way.carries_modifications() && !modifications.is_empty());

        if !legal_chain || stray_modifications {
            return Err(ConstructionError::InvalidWayPath(self.to_string()));
        }

        let mut stages = self.stages.into_iter().rev();
        let Some((leaf, leaf_modifications)) = stages.next() else {
            return Err(ConstructionError::InvalidWayPath(String::new()));
        };

        let mut node = Node::leaf(leaf, leaf_modifications)?;
        for (way, modifications) in stages {
            node = node.wrap(way, modifications)?;
        }

        match node {
            Node::Gold(gold) => Ok(gold),
            _ => Err(ConstructionError::InvalidWayPath(String::new())),
        }
    }
}

impl fmt::Display for WayPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ways: Vec<String> = self.ways().map(|way| way.to_string()).collect();
        f.write_str(&ways.join(" > "))
    }
}

/// Partially rebuilt subtree while folding stages from the leaf upwards.
enum Node {
    Gold(Gold),
    Alternative(GoldAlternative),
    Base(GoldBase),
    AlternativeBase(GoldAlternativeBase),
    AlternativeBaseVariant(GoldAlternativeBaseVariant),
    BaseVariant(GoldBaseVariant),
}

impl Node {
    fn leaf(way: Ways, modifications: Modifications) -> Result<Self, ConstructionError> {
        Ok(match way {
            Ways::Gold => Node::Gold(Gold::Leaf),
            Ways::GoldAlternative => Node::Alternative(GoldAlternative::new(modifications, None)?),
            Ways::GoldBase => Node::Base(GoldBase::Leaf),
            Ways::GoldAlternativeBase => Node::AlternativeBase(GoldAlternativeBase::Leaf),
            Ways::GoldAlternativeBaseVariant => {
                Node::AlternativeBaseVariant(GoldAlternativeBaseVariant::new(modifications)?)
            }
            Ways::GoldBaseVariant => Node::BaseVariant(GoldBaseVariant::new(modifications)?),
        })
    }

    fn wrap(self, parent: Ways, modifications: Modifications) -> Result<Self, ConstructionError> {
        Ok(match (parent, self) {
            (Ways::Gold, Node::Alternative(child)) => Node::Gold(Gold::Alternative(child)),
            (Ways::Gold, Node::Base(child)) => Node::Gold(Gold::Base(child)),
            (Ways::GoldAlternative, Node::AlternativeBase(child)) => {
                Node::Alternative(GoldAlternative::new(modifications, Some(child))?)
            }
            (Ways::GoldAlternativeBase, Node::AlternativeBaseVariant(child)) => {
                Node::AlternativeBase(GoldAlternativeBase::Variant(child))
            }
            (Ways::GoldBase, Node::BaseVariant(child)) => Node::Base(GoldBase::Variant(child)),
            (parent, _) => return Err(ConstructionError::InvalidWayPath(parent.to_string())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mods(values: &[&str]) -> Modifications {
        Modifications::new(
            values
                .iter()
                .map(|value| Modification::new("Adaption", "prospective", *value)),
        )
        .unwrap()
    }

    fn all_shapes() -> Vec<Gold> {
        vec![
            Gold::Leaf,
            Gold::Alternative(GoldAlternative::new(mods(&["top"]), None).unwrap()),
            Gold::Alternative(
                GoldAlternative::new(mods(&["top"]), Some(GoldAlternativeBase::Leaf)).unwrap(),
            ),
            Gold::Alternative(
                GoldAlternative::new(
                    mods(&["top"]),
                    Some(GoldAlternativeBase::Variant(
                        GoldAlternativeBaseVariant::new(mods(&["left", "right"])).unwrap(),
                    )),
                )
                .unwrap(),
            ),
            Gold::Base(GoldBase::Leaf),
            Gold::Base(GoldBase::Variant(GoldBaseVariant::new(mods(&["wide"])).unwrap())),
        ]
    }

    #[test]
    fn test_catalog_values_are_distinct() {
        for way in Ways::ALL {
            assert_eq!(Ways::from_catalog_value(way.catalog_value()), Some(way));
        }
    }

    #[test]
    fn test_modification_nodes_require_modifications() {
        let empty = Modifications::default();

        assert_eq!(
            GoldAlternative::new(empty.clone(), None),
            Err(ConstructionError::EmptyModifications(Ways::GoldAlternative))
        );
        assert_eq!(
            GoldBaseVariant::new(empty.clone()),
            Err(ConstructionError::EmptyModifications(Ways::GoldBaseVariant))
        );
        assert_eq!(
            GoldAlternativeBaseVariant::new(empty),
            Err(ConstructionError::EmptyModifications(Ways::GoldAlternativeBaseVariant))
        );
    }

    #[test]
    fn test_stages_are_root_to_leaf() {
        let gold = &all_shapes()[3];
        let ways: Vec<Ways> = gold.stages().iter().map(|stage| stage.way).collect();

        assert_eq!(
            ways,
            vec![
                Ways::Gold,
                Ways::GoldAlternative,
                Ways::GoldAlternativeBase,
                Ways::GoldAlternativeBaseVariant
            ]
        );
        assert_eq!(gold.stages()[3].modifications, mods(&["left", "right"]).as_slice());
    }

    #[test]
    fn test_stages_follow_successor_table() {
        for gold in all_shapes() {
            let stages = gold.stages();
            assert_eq!(stages[0].way, Ways::Gold);
            for pair in stages.windows(2) {
                assert!(pair[0].way.successors().contains(&pair[1].way));
            }
        }
    }

    #[test]
    fn test_way_paths_rebuild_every_shape() {
        for gold in all_shapes() {
            let mut path = WayPaths::new();
            for stage in gold.stages() {
                let modifications =
                    Modifications::new(stage.modifications.iter().cloned()).unwrap();
                path.push(stage.way, modifications);
            }
            assert_eq!(path.into_gold(), Ok(gold));
        }
    }

    #[test]
    fn test_way_paths_reject_illegal_chains() {
        let mut path = WayPaths::new();
        path.push(Ways::Gold, Modifications::default());
        path.push(Ways::GoldBaseVariant, mods(&["top"]));
        assert!(matches!(path.into_gold(), Err(ConstructionError::InvalidWayPath(_))));

        let mut path = WayPaths::new();
        path.push(Ways::Gold, mods(&["top"]));
        assert!(matches!(path.into_gold(), Err(ConstructionError::InvalidWayPath(_))));

        assert!(WayPaths::new().into_gold().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Gold::Leaf.to_string(), "Gold");
        assert_eq!(
            all_shapes()[1].to_string(),
            "Gold > GoldAlternative[Adaption/prospective/top]"
        );
    }

    #[test]
    fn test_serde_validates_modifications() {
        for gold in all_shapes() {
            let json = serde_json::to_string(&gold).unwrap();
            let back: Gold = serde_json::from_str(&json).unwrap();
            assert_eq!(back, gold);
        }

        let empty = r#"{"alternative":{"modifications":[]}}"#;
        assert!(serde_json::from_str::<Gold>(empty).is_err());

        let empty_variant = r#"{"base":{"variant":[]}}"#;
        assert!(serde_json::from_str::<Gold>(empty_variant).is_err());
    }
}
