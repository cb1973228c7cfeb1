//! Core type definitions for class diagrams
//!
//! This module contains the small value types shared by the model and the
//! generator: element identifiers, UML relation kinds and member visibility.

use std::fmt;
use std::str::FromStr;

use super::DiagramError;

/// Opaque identifier for a diagram element (class node or relation)
///
/// Identifiers are handed out by the owning diagram from a single counter,
/// so a node and a relation never share an id and ids are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(u64);

impl ElementId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

impl FromStr for ElementId {
    type Err = String;

    /// Parses exactly the `e<N>` form produced by `Display`
    ///
    /// Signs and leading zeros are rejected, so `e+5` and `e05` are not ids.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('e')
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .filter(|digits| *digits == "0" || !digits.starts_with('0'))
            .and_then(|digits| digits.parse::<u64>().ok())
            .map(ElementId)
            .ok_or_else(|| format!("Invalid element id: {}", s))
    }
}

/// UML relation kinds offered by the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// Plain association line
    Association,
    /// Hollow diamond: whole/part, parts outlive the whole
    Aggregation,
    /// Filled diamond: whole/part, parts owned by the whole
    Composition,
    /// Inheritance (`extends`)
    Generalization,
    /// Interface implementation (`implements`)
    Realization,
    /// Usage dependency
    Dependency,
}

impl RelationKind {
    /// All kinds, in palette order
    pub const ALL: [RelationKind; 6] = [
        RelationKind::Association,
        RelationKind::Aggregation,
        RelationKind::Composition,
        RelationKind::Generalization,
        RelationKind::Dependency,
        RelationKind::Realization,
    ];

    /// Lowercase tag used by the UI to name this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::Association => "association",
            RelationKind::Aggregation => "aggregation",
            RelationKind::Composition => "composition",
            RelationKind::Generalization => "generalization",
            RelationKind::Realization => "realization",
            RelationKind::Dependency => "dependency",
        }
    }

    /// Returns true if UML draws this kind with a dashed line
    pub fn is_dashed(&self) -> bool {
        matches!(self, RelationKind::Realization | RelationKind::Dependency)
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RelationKind {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RelationKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DiagramError::unknown_relation_kind(s))
    }
}

/// Visibility modifier for generated members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Visibility {
    #[default]
    Public,
    Private,
    Protected,
    /// Package-private: no keyword
    Package,
}

impl Visibility {
    /// Java keyword for this visibility, empty for package-private
    pub fn keyword(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Protected => "protected",
            Visibility::Package => "",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
